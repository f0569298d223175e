//! Profile form dialog - create and edit

use egui::Context;

use crate::core::{is_valid_profile_name, AppState, Profile};
use crate::ui::app::{Notification, NotificationLevel};
use crate::ui::dialogs::DialogState;
use crate::ui::theme::Theme;

/// Text buffers backing the form widgets.
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub content: String,
}

impl ProfileForm {
    pub fn for_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            content: profile.content.clone(),
        }
    }
}

pub fn render(
    ctx: &Context,
    form: &mut ProfileForm,
    state: &mut AppState,
    dialog: &mut DialogState,
    notifications: &mut Vec<Notification>,
) {
    let editing = state.session.is_editing();
    let title = if editing { "Edit Profile" } else { "New Profile" };

    let mut open = true;
    let mut close = false;

    egui::Window::new(title)
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(450.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // Name, locked while editing so the edit target stays bound
            ui.horizontal(|ui| {
                ui.label("Name:");
                ui.add_enabled(!editing, egui::TextEdit::singleline(&mut form.name));
            });

            if !form.name.is_empty() && !is_valid_profile_name(&form.name) {
                ui.label(
                    egui::RichText::new("Names may only contain letters, digits, and underscores")
                        .small()
                        .color(Theme::ERROR),
                );
            }

            ui.add_space(8.0);

            ui.label("Content:");
            egui::ScrollArea::vertical().max_height(260.0).show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut form.content)
                        .code_editor()
                        .desired_width(f32::INFINITY)
                        .desired_rows(12),
                );
            });

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                let can_save = is_valid_profile_name(&form.name);

                if ui
                    .add_enabled(can_save, egui::Button::new("Save"))
                    .clicked()
                {
                    match state.submit_edit(&form.name, &form.content) {
                        Ok(profile) => {
                            notifications.push(Notification::new(
                                format!("Saved profile {}", profile.name),
                                NotificationLevel::Success,
                            ));
                            close = true;
                        }
                        Err(e) => {
                            // Keep the dialog and edit target so the user
                            // can correct the input and retry.
                            tracing::error!("Failed to save profile {}: {}", form.name, e);
                            notifications.push(Notification::new(
                                format!("Failed to save profile: {}", e),
                                NotificationLevel::Error,
                            ));
                        }
                    }
                }

                if ui.button("Cancel").clicked() {
                    state.session.clear();
                    close = true;
                }
            });
        });

    if !open {
        state.session.clear();
        close = true;
    }
    if close {
        *dialog = DialogState::None;
    }
}
