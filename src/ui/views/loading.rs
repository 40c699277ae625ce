use crate::ui::layout::centered_panel;
use egui::{Context, RichText, Spinner};

/// Sin preguntas cargadas (o el banco falló): sólo un aviso y el spinner.
pub fn ui_loading(ctx: &Context) {
    centered_panel(ctx, 200.0, 400.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("Cargando preguntas…").heading().weak());
            ui.add_space(20.0);
            ui.add(Spinner::new());
        });
    });
}
