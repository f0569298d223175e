//! Profile row component

use egui::Ui;

use crate::core::Profile;
use crate::ui::theme::{Icons, Theme};

pub struct ProfileRow;

impl ProfileRow {
    /// Render a profile as a list row
    pub fn show(ui: &mut Ui, profile: &Profile, is_current: bool) -> ProfileRowResponse {
        let mut response = ProfileRowResponse::default();

        let fill = if is_current {
            Theme::BG_TERTIARY
        } else {
            Theme::BG_SECONDARY
        };

        egui::Frame::none()
            .fill(fill)
            .rounding(egui::Rounding::same(8.0))
            .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
            .inner_margin(egui::Margin::symmetric(12.0, 10.0))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    // Connection status dot
                    let dot_color = if is_current {
                        Theme::STATUS_CONNECTED
                    } else {
                        Theme::STATUS_DISCONNECTED
                    };
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
                    ui.painter().circle_filled(rect.center(), 4.0, dot_color);

                    ui.add_space(8.0);

                    ui.label(egui::RichText::new(&profile.name).strong().size(14.0));

                    if is_current {
                        ui.add_space(8.0);
                        ui.label(
                            egui::RichText::new("connected")
                                .small()
                                .color(Theme::SUCCESS),
                        );
                    }

                    // Right-aligned actions
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(Icons::TRASH).clicked() {
                            response.action = Some(RowAction::Delete);
                        }
                        if ui.small_button(Icons::EDIT).clicked() {
                            response.action = Some(RowAction::Edit);
                        }

                        let connect_label = if is_current {
                            "Disconnect".to_string()
                        } else {
                            format!("{} Connect", Icons::CONNECT)
                        };
                        if ui.button(connect_label).clicked() {
                            response.action = Some(RowAction::ToggleConnection);
                        }
                    });
                });
            });

        response
    }
}

/// Response from profile row interaction
#[derive(Default)]
pub struct ProfileRowResponse {
    pub action: Option<RowAction>,
}

/// Actions that can be triggered from a profile row
#[derive(Debug, Clone, Copy)]
pub enum RowAction {
    ToggleConnection,
    Edit,
    Delete,
}
