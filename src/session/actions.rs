use super::*;
use crate::progress::import_document;

impl<S: KeyValueStore> QuizSession<S> {
    /// Marca/desmarca una opción. Sólo en memoria: no se guarda hasta comprobar.
    ///
    /// Devuelve `false` (sin hacer nada) si la pregunta no existe o la sesión
    /// aún no está lista.
    pub fn toggle_option(&mut self, question_id: &str, option: &str) -> bool {
        if !self.is_ready() || self.question(question_id).is_none() {
            log::debug!("toggle ignorado: pregunta {question_id} no disponible");
            return false;
        }
        self.selections.toggle(question_id, option);
        true
    }

    /// Muestra la corrección de la pregunta actual y guarda todo el progreso.
    pub fn check_answer(&mut self) -> Result<(), SessionError> {
        self.ensure_ready()?;
        let id = match self.current_question() {
            Some(q) => q.id().to_string(),
            None => return Err(SessionError::NotReady),
        };
        if !self.is_question_answered(&id) {
            return Err(SessionError::NoSelection);
        }

        self.revealed = true;
        self.progress.save(&self.selections)?;
        log::info!("Pregunta {id} comprobada y progreso guardado");
        Ok(())
    }

    /// Importa un documento de progreso: reemplaza las respuestas en memoria y
    /// sobrescribe lo guardado. Si el documento no es válido no cambia nada.
    pub fn import_progress(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        let mut imported = import_document(bytes)?;
        self.ensure_ready()?;

        let known = self.known_ids();
        let dropped = imported.retain_ids(|id| known.contains(id));
        if !dropped.is_empty() {
            log::warn!("Importación: se ignoran preguntas desconocidas {dropped:?}");
        }

        // Primero el almacén: si falla, la memoria sigue como estaba
        self.progress.save(&imported)?;
        self.selections = imported;
        log::info!("Progreso importado: {} preguntas", self.selections.len());
        Ok(())
    }

    /// Documento para descargar: el progreso guardado (o `{}`).
    pub fn export_progress(&self) -> Result<Vec<u8>, SessionError> {
        Ok(self.progress.stored_document()?)
    }
}
