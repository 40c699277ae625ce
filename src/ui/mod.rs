mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::model::SessionState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // CABECERA: título + descargar / importar progreso
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(self, ctx);

        // Importar arrastrando un fichero a la ventana
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.importar_soltados(&dropped);
        }

        match self.session.state() {
            SessionState::Loading => views::loading::ui_loading(ctx),
            SessionState::Ready => views::quiz::ui_quiz(self, ctx),
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}
