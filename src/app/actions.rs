use super::transfer::{deliver_export, dropped_file_bytes};
use super::*;
use crate::error::SessionError;

impl QuizApp {
    pub fn alternar_opcion(&mut self, option: &str) {
        let id = match self.session.current_question() {
            Some(q) => q.id().to_string(),
            None => return,
        };
        self.session.toggle_option(&id, option);
    }

    pub fn comprobar_respuesta(&mut self) {
        match self.session.check_answer() {
            Ok(()) => self.message.clear(),
            Err(SessionError::NoSelection) => {
                self.message = "⚠ Marca al menos una respuesta antes de comprobar.".into();
            }
            Err(e) => {
                log::error!("No se pudo guardar el progreso: {e}");
                self.message = format!("❌ No se pudo guardar el progreso: {e}");
            }
        }
    }

    pub fn siguiente_pregunta(&mut self) {
        self.session.advance();
        self.message.clear();
    }

    pub fn pregunta_anterior(&mut self) {
        self.session.retreat();
        self.message.clear();
    }

    pub fn ir_a_pregunta(&mut self, index: usize) {
        self.session.go_to(index);
        self.message.clear();
    }

    /// Descarga el progreso guardado.
    pub fn exportar_progreso(&mut self) {
        let doc = match self.session.export_progress() {
            Ok(doc) => doc,
            Err(e) => {
                log::error!("No se pudo leer el progreso guardado: {e}");
                self.message = format!("❌ No se pudo leer el progreso guardado: {e}");
                return;
            }
        };
        match deliver_export(&self.config, &doc) {
            Ok(dest) => {
                log::info!("Progreso exportado a {dest}");
                self.message = format!("⬇ Progreso descargado: {dest}");
            }
            Err(e) => {
                log::error!("Exportación fallida: {e}");
                self.message = format!("❌ No se pudo descargar el progreso: {e}");
            }
        }
    }

    /// Importa un documento de progreso y avisa al usuario del resultado.
    pub fn importar_progreso(&mut self, bytes: &[u8]) {
        match self.session.import_progress(bytes) {
            Ok(()) => self.message = "✅ ¡Importación correcta!".into(),
            Err(e) if e.is_parse_error() => {
                log::warn!("Importación rechazada: {e}");
                self.message = "❌ El fichero JSON no es válido".into();
            }
            Err(e) => {
                log::error!("Importación fallida: {e}");
                self.message = format!("❌ No se pudo importar: {e}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn importar_desde_ruta(&mut self) {
        if self.import_path.trim().is_empty() {
            self.message = "⚠ Escribe la ruta del fichero a importar.".into();
            return;
        }
        match transfer::read_import_path(&self.import_path) {
            Ok(bytes) => {
                self.importar_progreso(&bytes);
                self.import_path.clear();
            }
            Err(e) => self.message = format!("❌ {e}"),
        }
    }

    /// Ficheros soltados sobre la ventana: se importa el primero.
    pub fn importar_soltados(&mut self, files: &[egui::DroppedFile]) {
        let Some(file) = files.first() else {
            return;
        };
        match dropped_file_bytes(file) {
            Ok(bytes) => self.importar_progreso(&bytes),
            Err(e) => self.message = format!("❌ {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::PROGRESS_KEY;

    fn app_with(raw: Option<&str>) -> QuizApp {
        let store = match raw {
            Some(raw) => MemoryStore::with_item(PROGRESS_KEY, raw),
            None => MemoryStore::new(),
        };
        QuizApp::with_store(QuizConfig::default(), Box::new(store))
    }

    #[test]
    fn app_starts_ready_with_embedded_bank() {
        let app = QuizApp::default();
        assert!(app.session.is_ready());
        assert_eq!(app.session.current_index(), 0);
    }

    #[test]
    fn check_without_selection_shows_notice() {
        let mut app = app_with(None);
        app.comprobar_respuesta();
        assert!(app.message.starts_with('⚠'));
        assert!(!app.session.is_revealed());
    }

    #[test]
    fn toggle_then_check_reveals_current_question() {
        let mut app = app_with(None);
        let first = app.session.current_question().expect("pregunta").answers[0].clone();
        app.alternar_opcion(&first);
        app.comprobar_respuesta();
        assert!(app.session.is_revealed());
        assert!(app.message.is_empty());

        app.siguiente_pregunta();
        assert!(!app.session.is_revealed());
        assert_eq!(app.session.current_index(), 1);
    }

    #[test]
    fn bad_import_keeps_state_and_tells_the_user() {
        let mut app = app_with(Some(r#"{"1": ["B. Amazon S3"]}"#));
        let before = app.session.selections().clone();
        app.importar_progreso(b"no json");
        assert_eq!(app.message, "❌ El fichero JSON no es válido");
        assert_eq!(app.session.selections(), &before);
    }

    #[test]
    fn dropped_file_is_imported() {
        let mut app = app_with(None);
        let file = egui::DroppedFile {
            bytes: Some(std::sync::Arc::from(&br#"{"2": ["A. Trade capital expense for variable expense"]}"#[..])),
            ..Default::default()
        };
        app.importar_soltados(&[file]);
        assert!(app.message.starts_with('✅'));
        assert!(app.session.is_question_answered("2"));
    }
}
