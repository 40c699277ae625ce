use crate::error::SessionError;
use crate::model::{Question, SelectionMap, SessionState};
use crate::progress::{LoadOutcome, SelectionStore};
use crate::store::KeyValueStore;
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod view_models;

/// Controlador de la sesión de quiz: preguntas, respuestas marcadas,
/// pregunta actual y si se está mostrando la corrección.
///
/// Se construye vacío (`Loading`) y se inicializa una sola vez con
/// [`QuizSession::load_questions`] y [`QuizSession::load_selections`], en
/// cualquier orden.
pub struct QuizSession<S> {
    questions: Vec<Question>,
    current: usize,
    selections: SelectionMap,
    revealed: bool,
    progress: SelectionStore<S>,
    questions_loaded: bool,
    selections_loaded: bool,
}

impl<S: KeyValueStore> QuizSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            questions: Vec::new(),
            current: 0,
            selections: SelectionMap::new(),
            revealed: false,
            progress: SelectionStore::new(store),
            questions_loaded: false,
            selections_loaded: false,
        }
    }

    /// Primer paso de inicialización. Una lista vacía deja la sesión en `Loading`.
    pub fn load_questions(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        if self.questions_loaded {
            return Err(SessionError::AlreadyLoaded("el banco de preguntas"));
        }
        self.questions = questions;
        self.questions_loaded = true;
        self.current = 0;
        self.retain_known_ids();
        Ok(())
    }

    /// Segundo paso: lee el progreso guardado. Si está corrupto se empieza
    /// con un mapa vacío (el motivo va en el `LoadOutcome`).
    pub fn load_selections(&mut self) -> Result<LoadOutcome, SessionError> {
        if self.selections_loaded {
            return Err(SessionError::AlreadyLoaded("el progreso"));
        }
        let (map, outcome) = self.progress.load_with_outcome();
        self.selections = map;
        self.selections_loaded = true;
        self.retain_known_ids();
        Ok(outcome)
    }

    pub fn state(&self) -> SessionState {
        if self.questions_loaded && self.selections_loaded && !self.questions.is_empty() {
            SessionState::Ready
        } else {
            SessionState::Loading
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == SessionState::Ready
    }

    /// Descarta respuestas de preguntas que no existen en el banco cargado.
    fn retain_known_ids(&mut self) {
        if !self.questions_loaded || self.questions.is_empty() {
            return;
        }
        let known = self.known_ids();
        let dropped = self.selections.retain_ids(|id| known.contains(id));
        if !dropped.is_empty() {
            log::warn!("Se descartan respuestas de preguntas desconocidas: {dropped:?}");
        }
    }

    fn known_ids(&self) -> HashSet<String> {
        self.questions.iter().map(|q| q.id().to_string()).collect()
    }

    fn ensure_ready(&self) -> Result<(), SessionError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(SessionError::NotReady)
        }
    }
}
