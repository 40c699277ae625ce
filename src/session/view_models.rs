use super::*;
use crate::view_models::{OptionMark, OptionRow, QuestionView};

impl<S: KeyValueStore> QuizSession<S> {
    /// Estado derivado de la pregunta actual, listo para pintar.
    pub fn current_view(&self) -> Option<QuestionView> {
        if !self.is_ready() {
            return None;
        }
        let q = self.current_question()?;
        let id = q.id();

        let options = q
            .answers
            .iter()
            .map(|text| {
                let checked = self.selections.contains(id, text);
                let mark = if !self.revealed {
                    OptionMark::Neutral
                } else if q.is_most_voted(text) {
                    OptionMark::Correct
                } else if checked {
                    OptionMark::Wrong
                } else {
                    OptionMark::Neutral
                };
                OptionRow {
                    text: text.clone(),
                    checked,
                    mark,
                }
            })
            .collect();

        Some(QuestionView {
            id: id.to_string(),
            position: self.current + 1,
            total: self.questions.len(),
            prompt: q.question.clone(),
            done: self.is_question_answered(id),
            revealed: self.revealed,
            options,
        })
    }
}
