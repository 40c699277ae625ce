// src/ui/helpers.rs
use crate::view_models::{OptionMark, OptionRow};
use egui::{Color32, Frame, Margin, Stroke, Ui};

/// Colores de borde/fondo según la corrección.
fn option_colors(ui: &Ui, mark: OptionMark) -> (Stroke, Color32) {
    match mark {
        OptionMark::Correct => (
            Stroke::new(1.5, Color32::from_rgb(34, 197, 94)),
            Color32::from_rgba_unmultiplied(34, 197, 94, 40),
        ),
        OptionMark::Wrong => (
            Stroke::new(1.5, Color32::from_rgb(239, 68, 68)),
            Color32::from_rgba_unmultiplied(239, 68, 68, 40),
        ),
        OptionMark::Neutral => (
            ui.visuals().widgets.noninteractive.bg_stroke,
            Color32::TRANSPARENT,
        ),
    }
}

/// Una opción con su checkbox. Devuelve `true` si se ha pulsado.
pub fn option_checkbox(ui: &mut Ui, row: &OptionRow, width: f32) -> bool {
    let (stroke, fill) = option_colors(ui, row.mark);
    let mut checked = row.checked;

    Frame::default()
        .stroke(stroke)
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(width);
            ui.checkbox(&mut checked, row.text.as_str()).changed()
        })
        .inner
}
