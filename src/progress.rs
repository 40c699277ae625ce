// src/progress.rs

use crate::error::ProgressError;
use crate::model::SelectionMap;
use crate::store::KeyValueStore;

/// Clave fija bajo la que se guarda el progreso.
pub const PROGRESS_KEY: &str = "aws_quiz_progress_v1";
/// Nombre del fichero exportado.
pub const EXPORT_FILE_NAME: &str = "aws_quiz_progress.json";
pub const EXPORT_MIME: &str = "application/json";

const EMPTY_DOCUMENT: &[u8] = b"{}";

/// Resultado de leer el progreso guardado.
#[derive(Debug)]
pub enum LoadOutcome {
    Missing,
    Loaded,
    /// El valor guardado no se pudo leer; se sigue con un mapa vacío.
    Corrupt(ProgressError),
}

/// Serializa el mapa al documento JSON que se guarda y se exporta.
pub fn export_document(map: &SelectionMap) -> Vec<u8> {
    // Un mapa de strings a listas de strings siempre se puede serializar
    encode(map).map(String::into_bytes).unwrap_or_else(|e| {
        log::error!("No se pudo serializar el progreso: {e}");
        EMPTY_DOCUMENT.to_vec()
    })
}

fn encode(map: &SelectionMap) -> Result<String, ProgressError> {
    serde_json::to_string_pretty(map).map_err(ProgressError::Encode)
}

/// Parsea un documento importado. Valida la forma (objeto de listas de strings)
/// y elimina opciones repetidas.
pub fn import_document(bytes: &[u8]) -> Result<SelectionMap, ProgressError> {
    serde_json::from_slice(bytes).map_err(ProgressError::Parse)
}

/// Adaptador de persistencia del mapa de respuestas.
pub struct SelectionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SelectionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load_with_outcome(&self) -> (SelectionMap, LoadOutcome) {
        let raw = match self.store.get_item(PROGRESS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (SelectionMap::new(), LoadOutcome::Missing),
            Err(e) => {
                log::error!("No se pudo leer el progreso guardado: {e}");
                return (SelectionMap::new(), LoadOutcome::Corrupt(e.into()));
            }
        };

        match import_document(raw.as_bytes()) {
            Ok(map) => {
                log::info!("Progreso cargado: {} preguntas", map.len());
                (map, LoadOutcome::Loaded)
            }
            Err(e) => {
                log::error!("Progreso guardado corrupto, se empieza de cero: {e}");
                (SelectionMap::new(), LoadOutcome::Corrupt(e))
            }
        }
    }

    /// Mapa guardado, o vacío si no hay nada (o no se puede leer).
    pub fn load(&self) -> SelectionMap {
        self.load_with_outcome().0
    }

    pub fn save(&mut self, map: &SelectionMap) -> Result<(), ProgressError> {
        let text = encode(map)?;
        self.store.set_item(PROGRESS_KEY, &text)?;
        log::debug!("Progreso guardado ({} preguntas)", map.len());
        Ok(())
    }

    /// Documento a descargar: el texto guardado tal cual, o `{}` si no hay nada.
    pub fn stored_document(&self) -> Result<Vec<u8>, ProgressError> {
        match self.store.get_item(PROGRESS_KEY)? {
            Some(raw) => Ok(raw.into_bytes()),
            None => Ok(EMPTY_DOCUMENT.to_vec()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn load_without_saved_progress_is_empty() {
        let progress = SelectionStore::new(MemoryStore::new());
        let (map, outcome) = progress.load_with_outcome();
        assert!(map.is_empty());
        assert!(matches!(outcome, LoadOutcome::Missing));
    }

    #[test]
    fn corrupt_saved_progress_degrades_to_empty() {
        let progress = SelectionStore::new(MemoryStore::with_item(PROGRESS_KEY, "{no es json"));
        let (map, outcome) = progress.load_with_outcome();
        assert!(map.is_empty());
        assert!(matches!(outcome, LoadOutcome::Corrupt(ProgressError::Parse(_))));
    }

    #[test]
    fn save_replaces_previous_value() {
        let mut progress =
            SelectionStore::new(MemoryStore::with_item(PROGRESS_KEY, r#"{"1":["A","B"]}"#));
        let map = SelectionMap::from_iter([("2", ["C"])]);
        progress.save(&map).expect("save ok");
        assert_eq!(progress.load(), map);
    }

    #[test]
    fn exported_document_imports_back_to_the_same_map() {
        let map: SelectionMap = [("1", vec!["A", "C"]), ("12", vec![]), ("3", vec!["Ñ ü"])]
            .into_iter()
            .collect();
        let doc = export_document(&map);
        assert_eq!(import_document(&doc).expect("import ok"), map);
    }

    #[test]
    fn import_rejects_wrong_shapes() {
        let cases: [&[u8]; 5] = [b"[1, 2]", br#"{"1": "A"}"#, br#"{"1": [1]}"#, b"not json", b""];
        for bad in cases {
            let err = import_document(bad).expect_err("should fail");
            assert!(matches!(err, ProgressError::Parse(_)));
        }
    }

    #[test]
    fn stored_document_defaults_to_empty_object() {
        let progress = SelectionStore::new(MemoryStore::new());
        let doc: serde_json::Value =
            serde_json::from_slice(&progress.stored_document().expect("export ok"))
                .expect("json ok");
        assert_eq!(doc, serde_json::json!({}));
    }

    #[test]
    fn stored_document_is_the_saved_text_verbatim() {
        let raw = "{\"1\": [\"A\"], roto";
        let progress = SelectionStore::new(MemoryStore::with_item(PROGRESS_KEY, raw));
        assert_eq!(progress.stored_document().expect("export ok"), raw.as_bytes());
    }

    #[test]
    fn empty_selection_lists_are_not_kept() {
        let map = import_document(br#"{"1": [], "2": ["B"]}"#).expect("import ok");
        assert_eq!(map, SelectionMap::from_iter([("2", ["B"])]));
    }
}
