use egui::{Button, CentralPanel, Context, Frame, RichText, Ui};
use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(RichText::new("AWS Practice Quiz").heading().strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⬆ Importar progreso").clicked() {
                    #[cfg(not(target_arch = "wasm32"))]
                    app.importar_desde_ruta();
                    #[cfg(target_arch = "wasm32")]
                    {
                        app.message =
                            "Arrastra el fichero aws_quiz_progress.json sobre la página.".into();
                    }
                }

                #[cfg(not(target_arch = "wasm32"))]
                ui.add(
                    egui::TextEdit::singleline(&mut app.import_path)
                        .hint_text("ruta del .json a importar")
                        .desired_width(220.0),
                );

                if ui.button("⬇ Descargar progreso").clicked() {
                    app.exportar_progreso();
                }
            });
        });
    });
}

pub fn bottom_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                let label = if app.prefs.dark_mode { "☀ Modo claro" } else { "🌙 Modo oscuro" };
                if ui.button(label).clicked() {
                    app.toggle_dark_mode(ctx);
                }

                if !app.message.is_empty() {
                    ui.label(&app.message);
                }
            }
        );

    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
