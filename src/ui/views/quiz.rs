use egui::{CentralPanel, Color32, Context, RichText, ScrollArea};
use crate::QuizApp;
use crate::ui::helpers::option_checkbox;
use crate::ui::layout::two_button_row;

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.session.current_view() else {
        return;
    };

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 760.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(24, 20))
            .show(ui, |ui| {
                ui.set_width(panel_width);

                // Contador + "Hecha"
                let mut position = view.position;
                ui.horizontal(|ui| {
                    ui.label(RichText::new(view.counter_label()).weak());
                    ui.add(
                        egui::DragValue::new(&mut position)
                            .range(1..=view.total)
                            .prefix("ir a "),
                    );
                    if view.done {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(
                                RichText::new("✓ Hecha")
                                    .color(Color32::from_rgb(22, 163, 74))
                                    .strong(),
                            );
                        });
                    }
                });
                if position != view.position {
                    app.ir_a_pregunta(position - 1);
                }
                ui.add_space(8.0);

                ui.label(RichText::new(&view.prompt).size(17.0).strong());
                ui.add_space(12.0);

                // Opciones
                let mut toggled = None;
                ScrollArea::vertical().max_height(380.0).show(ui, |ui| {
                    for row in &view.options {
                        if option_checkbox(ui, row, panel_width - 24.0) {
                            toggled = Some(row.text.clone());
                        }
                        ui.add_space(6.0);
                    }
                });
                if let Some(option) = toggled {
                    app.alternar_opcion(&option);
                }

                ui.add_space(12.0);
                let (comprobar, siguiente) = two_button_row(
                    ui,
                    panel_width,
                    ("Comprobar respuesta", view.can_check()),
                    ("Siguiente →", true),
                );
                if comprobar {
                    app.comprobar_respuesta();
                }
                if siguiente {
                    app.siguiente_pregunta();
                }

                ui.add_space(6.0);
                if ui.link("← Anterior").clicked() {
                    app.pregunta_anterior();
                }

                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!(
                        "Respondidas: {} / {}",
                        app.session.answered_count(),
                        view.total
                    ))
                    .small()
                    .weak(),
                );
            });
    });
}
