use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, Ui};

use crate::state::Session;
use crate::views::View;

/// Navigation bar background (`#262730`).
pub const NAV_BACKGROUND: Color32 = Color32::from_rgb(0x26, 0x27, 0x30);
/// Highlight for the selected item (`#ff4b4b`).
pub const NAV_SELECTED: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b);

/// Side length of the window icon, in pixels.
pub const ICON_SIZE: u32 = 32;

/// Window icon: three ascending bars in the highlight colour on the nav
/// background.
pub fn window_icon() -> egui::IconData {
    let n = ICON_SIZE as usize;
    let bars = [(6, 12, 16), (14, 20, 10), (22, 28, 4)];
    let mut rgba = Vec::with_capacity(n * n * 4);
    for y in 0..n {
        for x in 0..n {
            let on_bar = bars
                .iter()
                .any(|&(x0, x1, top)| (x0..x1).contains(&x) && (top..n - 4).contains(&y));
            let c = if on_bar { NAV_SELECTED } else { NAV_BACKGROUND };
            rgba.extend_from_slice(&c.to_array());
        }
    }
    egui::IconData {
        rgba,
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

pub fn nav_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(NAV_BACKGROUND)
        .inner_margin(Margin::symmetric(8, 4))
}

// ---------------------------------------------------------------------------
// Top bar – view selection
// ---------------------------------------------------------------------------

/// Render the horizontal navigation menu. Returns the view the user clicked,
/// if any.
pub fn top_bar(ui: &mut Ui, session: &Session) -> Option<View> {
    let mut clicked = None;

    ui.horizontal(|ui: &mut Ui| {
        let item_width = (ui.available_width() / View::ALL.len() as f32).max(120.0);

        for view in View::ALL {
            let selected = session.view() == view;
            let text = RichText::new(view.to_string())
                .color(Color32::WHITE)
                .size(16.0);
            let button = egui::Button::new(text)
                .fill(if selected { NAV_SELECTED } else { Color32::TRANSPARENT })
                .stroke(egui::Stroke::NONE)
                .corner_radius(CornerRadius::same(4))
                .min_size(egui::vec2(item_width - 8.0, 32.0));

            if ui.add(button).clicked() {
                clicked = Some(view);
            }
        }
    });

    if let Some(msg) = &session.status_message {
        ui.label(RichText::new(msg).color(Color32::RED));
    }

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_icon_is_square_rgba_with_bars() {
        let icon = window_icon();
        assert_eq!((icon.width, icon.height), (ICON_SIZE, ICON_SIZE));
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);

        let pixel = |x: u32, y: u32| {
            let i = ((y * ICON_SIZE + x) * 4) as usize;
            [icon.rgba[i], icon.rgba[i + 1], icon.rgba[i + 2], icon.rgba[i + 3]]
        };
        assert_eq!(pixel(0, 0), NAV_BACKGROUND.to_array());
        // Tallest bar reaches near the top; shortest stays low.
        assert_eq!(pixel(24, 5), NAV_SELECTED.to_array());
        assert_eq!(pixel(8, 5), NAV_BACKGROUND.to_array());
        assert_eq!(pixel(8, 20), NAV_SELECTED.to_array());
    }
}
