//! Delete confirmation dialog

use egui::Context;

use crate::core::AppState;
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::DialogState;
use crate::ui::theme::Theme;

pub fn render(
    ctx: &Context,
    name: &str,
    state: &mut AppState,
    dialog: &mut DialogState,
    notifications: &mut Vec<Notification>,
) {
    let mut open = true;
    let mut close = false;

    egui::Window::new("Delete Profile")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .default_width(350.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete \"{}\"?", name));

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("Delete").color(Theme::ERROR))
                    .clicked()
                {
                    match state.request_delete(name) {
                        Ok(()) => {
                            notifications.push(Notification::new(
                                format!("Deleted profile {}", name),
                                NotificationLevel::Success,
                            ));
                        }
                        Err(e) => {
                            tracing::error!("Failed to delete profile {}: {}", name, e);
                            notifications.push(Notification::new(
                                format!("Failed to delete profile: {}", e),
                                NotificationLevel::Error,
                            ));
                        }
                    }
                    close = true;
                }

                if ui.button("Cancel").clicked() {
                    close = true;
                }
            });
        });

    if !open || close {
        *dialog = DialogState::None;
    }
}
