use crate::config::QuizConfig;
use crate::data::load_questions;
use crate::progress::LoadOutcome;
use crate::session::QuizSession;
use crate::store::{KeyValueStore, MemoryStore};
use eframe::egui;
use serde::{Deserialize, Serialize};

// Submódulos
pub mod actions;
pub mod transfer;

/// Almacén del progreso que usa la app (fichero, localStorage o memoria).
pub type ProgressBackend = Box<dyn KeyValueStore>;

/// Preferencias de la UI, guardadas con la persistencia de eframe.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    pub dark_mode: bool,
}

/// Capa de presentación: es dueña de la sesión y traduce clics en operaciones.
pub struct QuizApp {
    pub session: QuizSession<ProgressBackend>,
    pub config: QuizConfig,
    pub prefs: UiPrefs,
    pub message: String,
    pub import_path: String,
}

impl QuizApp {
    /// Arranque desde eframe: restaura preferencias e inicializa la sesión.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let prefs: UiPrefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        apply_visuals(&cc.egui_ctx, prefs.dark_mode);

        let config = QuizConfig::from_env();
        let store = open_store(&config);
        let mut app = Self::with_store(config, store);
        app.prefs = prefs;
        app
    }

    /// Construye la app con un almacén concreto y ejecuta los dos pasos de
    /// inicialización (preguntas y progreso guardado).
    pub fn with_store(config: QuizConfig, store: ProgressBackend) -> Self {
        let mut session = QuizSession::new(store);

        if let Err(e) = session.load_questions(load_questions(&config)) {
            log::error!("{e}");
        }
        match session.load_selections() {
            Ok(LoadOutcome::Corrupt(e)) => {
                log::warn!("Progreso guardado ignorado: {e}");
            }
            Ok(_) => {}
            Err(e) => log::error!("{e}"),
        }

        Self {
            session,
            config,
            prefs: UiPrefs::default(),
            message: String::new(),
            import_path: String::new(),
        }
    }

    pub fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.prefs.dark_mode = !self.prefs.dark_mode;
        apply_visuals(ctx, self.prefs.dark_mode);
    }
}

pub fn apply_visuals(ctx: &egui::Context, dark: bool) {
    if dark {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store(config: &QuizConfig) -> ProgressBackend {
    log::info!("Progreso en {}", config.data_dir.display());
    Box::new(crate::store::FileStore::new(&config.data_dir))
}

#[cfg(target_arch = "wasm32")]
fn open_store(_config: &QuizConfig) -> ProgressBackend {
    match crate::store::WebStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::error!("Sin localStorage, el progreso no se conservará: {e}");
            Box::new(MemoryStore::new())
        }
    }
}

/// App sin persistencia real (tests).
impl Default for QuizApp {
    fn default() -> Self {
        Self::with_store(QuizConfig::default(), Box::new(MemoryStore::new()))
    }
}
