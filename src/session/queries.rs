use super::*;

impl<S: KeyValueStore> QuizSession<S> {
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == question_id)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn selections(&self) -> &SelectionMap {
        &self.selections
    }

    pub fn selected_for(&self, question_id: &str) -> &[String] {
        self.selections.get(question_id)
    }

    /// La opción está entre las más votadas de esa pregunta.
    pub fn is_option_correct(&self, question_id: &str, option: &str) -> bool {
        self.question(question_id)
            .map(|q| q.is_most_voted(option))
            .unwrap_or(false)
    }

    pub fn is_question_answered(&self, question_id: &str) -> bool {
        !self.selections.get(question_id).is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.selections.answered_count()
    }
}

#[cfg(test)]
mod tests {
    use crate::session::tests::ready_session;
    use crate::store::MemoryStore;

    #[test]
    fn answered_iff_selection_not_empty() {
        let mut session = ready_session(MemoryStore::new());
        assert!(!session.is_question_answered("2"));

        session.toggle_option("2", "C");
        assert!(session.is_question_answered("2"));
        assert_eq!(session.answered_count(), 1);

        session.toggle_option("2", "C");
        assert!(!session.is_question_answered("2"));
        assert!(session.selected_for("2").is_empty());
        assert_eq!(session.answered_count(), 0);
    }

    #[test]
    fn toggle_pair_restores_selection() {
        let mut session = ready_session(MemoryStore::new());
        session.toggle_option("1", "B");
        let before = session.selections().clone();

        for option in ["A", "B", "C"] {
            session.toggle_option("1", option);
            session.toggle_option("1", option);
            assert_eq!(session.selections(), &before);
        }
    }

    #[test]
    fn unknown_question_toggle_is_a_no_op() {
        let mut session = ready_session(MemoryStore::new());
        assert!(!session.toggle_option("404", "A"));
        assert!(session.selections().is_empty());
    }

    #[test]
    fn correctness_uses_most_voted_set() {
        let session = ready_session(MemoryStore::new());
        assert!(session.is_option_correct("2", "B"));
        assert!(session.is_option_correct("2", "C"));
        assert!(!session.is_option_correct("2", "A"));
        assert!(!session.is_option_correct("3", "A"));
        assert!(!session.is_option_correct("404", "A"));
    }
}
