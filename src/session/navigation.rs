use super::*;

impl<S: KeyValueStore> QuizSession<S> {
    /// Siguiente pregunta (se queda en la última). Oculta la corrección.
    pub fn advance(&mut self) {
        self.revealed = false;
        if let Some(last) = self.questions.len().checked_sub(1) {
            self.current = (self.current + 1).min(last);
        }
    }

    /// Pregunta anterior (se queda en la primera). Oculta la corrección.
    pub fn retreat(&mut self) {
        self.revealed = false;
        self.current = self.current.saturating_sub(1);
    }

    /// Salta a `index`, recortado al rango válido.
    pub fn go_to(&mut self, index: usize) {
        self.revealed = false;
        if let Some(last) = self.questions.len().checked_sub(1) {
            self.current = index.min(last);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::ready_session;
    use crate::store::MemoryStore;

    #[test]
    fn index_is_clamped_and_reveal_cleared() {
        let mut session = ready_session(MemoryStore::new());
        let len = session.len();

        session.retreat();
        assert_eq!(session.current_index(), 0);

        for _ in 0..len + 3 {
            let id = session.current_question().expect("pregunta").id().to_string();
            if !session.is_question_answered(&id) {
                session.toggle_option(&id, "A");
            }
            session.check_answer().expect("check ok");
            assert!(session.is_revealed());
            session.advance();
            assert!(!session.is_revealed());
            assert!(session.current_index() < len);
        }
        assert_eq!(session.current_index(), len - 1);

        session.check_answer().expect("check ok");
        session.retreat();
        assert!(!session.is_revealed());
        assert_eq!(session.current_index(), len - 2);
    }

    #[test]
    fn go_to_clamps_to_last_question() {
        let mut session = ready_session(MemoryStore::new());
        session.go_to(1);
        assert_eq!(session.current_index(), 1);
        session.go_to(500);
        assert_eq!(session.current_index(), session.len() - 1);
    }
}
