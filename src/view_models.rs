// src/view_models.rs

/// Cómo pintar una opción.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Neutral,
    Correct, // más votada (sólo con la corrección visible)
    Wrong,   // marcada pero no es de las más votadas
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub text: String,
    pub checked: bool,
    pub mark: OptionMark,
}

#[derive(Clone, Debug)]
pub struct QuestionView {
    pub id: String,
    pub position: usize, // 1-based
    pub total: usize,
    pub prompt: String,
    pub done: bool,
    pub revealed: bool,
    pub options: Vec<OptionRow>,
}

impl QuestionView {
    pub fn counter_label(&self) -> String {
        format!("Pregunta {} / {}", self.position, self.total)
    }

    pub fn can_check(&self) -> bool {
        self.options.iter().any(|o| o.checked)
    }
}
