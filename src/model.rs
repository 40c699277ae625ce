use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Una pregunta del banco, tal y como viene en `aws_questions_final.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_number: String, // Identificador único
    pub question: String,        // Enunciado
    pub answers: Vec<String>,    // Opciones, en orden
    #[serde(default)]
    pub most_voted: Vec<String>, // Respuestas "correctas" (las más votadas)
}

impl Question {
    pub fn id(&self) -> &str {
        &self.question_number
    }

    pub fn is_most_voted(&self, option: &str) -> bool {
        self.most_voted.iter().any(|o| o == option)
    }
}

/// Respuestas marcadas por el usuario: id de pregunta -> opciones elegidas.
///
/// Cada opción aparece como mucho una vez por pregunta, en orden de inserción.
/// Se serializa como un objeto JSON plano (`{"1": ["A", "B"]}`).
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(from = "BTreeMap<String, Vec<String>>")]
pub struct SelectionMap(BTreeMap<String, Vec<String>>);

impl From<BTreeMap<String, Vec<String>>> for SelectionMap {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut map = SelectionMap::default();
        for (id, options) in raw {
            let mut unique: Vec<String> = Vec::with_capacity(options.len());
            for option in options {
                if !unique.contains(&option) {
                    unique.push(option);
                }
            }
            // Igual que `toggle`: una pregunta sin opciones no aparece en el mapa
            if !unique.is_empty() {
                map.0.insert(id, unique);
            }
        }
        map
    }
}

impl<K, I, V> FromIterator<(K, I)> for SelectionMap
where
    K: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let raw: BTreeMap<String, Vec<String>> = iter
            .into_iter()
            .map(|(id, options)| (id.into(), options.into_iter().map(Into::into).collect()))
            .collect();
        SelectionMap::from(raw)
    }
}

impl Serialize for SelectionMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, question_id: &str) -> &[String] {
        self.0.get(question_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, question_id: &str, option: &str) -> bool {
        self.get(question_id).iter().any(|o| o == option)
    }

    /// Quita la opción si estaba, la añade al final si no.
    /// Una pregunta sin opciones desaparece del mapa.
    pub fn toggle(&mut self, question_id: &str, option: &str) {
        let entry = self.0.entry(question_id.to_string()).or_default();
        match entry.iter().position(|o| o == option) {
            Some(pos) => {
                entry.remove(pos);
                if entry.is_empty() {
                    self.0.remove(question_id);
                }
            }
            None => entry.push(option.to_string()),
        }
    }

    /// Elimina las entradas cuyo id no cumple `keep`. Devuelve los ids descartados.
    pub fn retain_ids(&mut self, mut keep: impl FnMut(&str) -> bool) -> Vec<String> {
        let mut dropped = Vec::new();
        self.0.retain(|id, _| {
            let ok = keep(id);
            if !ok {
                dropped.push(id.clone());
            }
            ok
        });
        dropped
    }

    pub fn answered_count(&self) -> usize {
        self.0.values().filter(|v| !v.is_empty()).count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Ready,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_previous_selection() {
        let mut map = SelectionMap::from_iter([("1", ["B"])]);
        let before = map.get("1").to_vec();
        map.toggle("1", "A");
        assert_eq!(map.get("1"), ["B", "A"]);
        map.toggle("1", "A");
        assert_eq!(map.get("1"), before.as_slice());
    }

    #[test]
    fn building_from_raw_data_removes_duplicates() {
        let mut raw = BTreeMap::new();
        raw.insert("7".to_string(), vec!["A".into(), "B".into(), "A".into()]);
        let map = SelectionMap::from(raw);
        assert_eq!(map.get("7"), ["A", "B"]);
    }

    #[test]
    fn toggle_pair_restores_a_map_loaded_with_empty_lists() {
        let mut raw = BTreeMap::new();
        raw.insert("1".to_string(), Vec::new());
        raw.insert("2".to_string(), vec!["C".to_string()]);
        let mut map = SelectionMap::from(raw);
        assert_eq!(map, SelectionMap::from_iter([("2", ["C"])]));

        let before = map.clone();
        map.toggle("1", "A");
        map.toggle("1", "A");
        assert_eq!(map, before);
    }

    #[test]
    fn question_deserializes_camel_case_fields() {
        let json = r#"{"questionNumber":"3","question":"Q?","answers":["A","B"],"mostVoted":["B"]}"#;
        let q: Question = serde_json::from_str(json).expect("json ok");
        assert_eq!(q.id(), "3");
        assert!(q.is_most_voted("B"));
        assert!(!q.is_most_voted("A"));
    }
}
