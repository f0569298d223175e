//! Profiles panel - The filtered, ordered profile list

use egui::Ui;

use crate::core::AppState;
use crate::ui::components::profile_row::{ProfileRow, RowAction};
use crate::ui::dialogs::{DialogState, ProfileForm};
use crate::ui::theme::Theme;

pub fn render(ui: &mut Ui, state: &mut AppState, dialog: &mut DialogState, form: &mut ProfileForm) {
    let rows = state.projection();

    // Header
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{} profiles", rows.len())).color(Theme::TEXT_SECONDARY),
        );

        if state.batch_in_flight() {
            ui.add_space(8.0);
            ui.spinner();
        }
    });

    ui.add_space(8.0);

    if rows.is_empty() {
        render_empty_state(ui, state, dialog, form);
        return;
    }

    // Collect the clicked action, then apply it after the borrow on the
    // projected rows ends.
    let mut pending: Option<(RowAction, String)> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        for profile in &rows {
            let is_current = state.current() == Some(profile.name.as_str());
            let response = ProfileRow::show(ui, profile, is_current);
            if let Some(action) = response.action {
                pending = Some((action, profile.name.clone()));
            }
            ui.add_space(4.0);
        }
    });

    if let Some((action, name)) = pending {
        handle_row_action(action, name, state, dialog, form);
    }
}

fn handle_row_action(
    action: RowAction,
    name: String,
    state: &mut AppState,
    dialog: &mut DialogState,
    form: &mut ProfileForm,
) {
    match action {
        RowAction::ToggleConnection => {
            if state.current() == Some(name.as_str()) {
                state.set_current(None);
            } else {
                state.set_current(Some(name));
            }
        }
        RowAction::Edit => {
            state.request_edit(&name);
            // Bind the form to the row as projected; a target that no
            // longer resolves falls back to create mode.
            let rows = state.projection();
            match state.session.resolve(&rows) {
                Some(profile) => *form = ProfileForm::for_profile(profile),
                None => {
                    state.session.clear();
                    *form = ProfileForm::default();
                }
            }
            *dialog = DialogState::ProfileForm;
        }
        RowAction::Delete => {
            *dialog = DialogState::ConfirmDelete(name);
        }
    }
}

fn render_empty_state(
    ui: &mut Ui,
    state: &mut AppState,
    dialog: &mut DialogState,
    form: &mut ProfileForm,
) {
    let no_profiles = state.collection.is_empty();

    egui::Frame::none()
        .fill(Theme::BG_SECONDARY)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(32.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new("📋").size(48.0));
                ui.add_space(16.0);

                if no_profiles {
                    ui.label(
                        egui::RichText::new("No profiles yet")
                            .size(16.0)
                            .color(Theme::TEXT_SECONDARY),
                    );
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(
                            "Create a profile or import existing configuration files",
                        )
                        .color(Theme::TEXT_MUTED),
                    );
                    ui.add_space(16.0);

                    if ui.button("+ Create Profile").clicked() {
                        state.session.clear();
                        *form = ProfileForm::default();
                        *dialog = DialogState::ProfileForm;
                    }
                } else {
                    ui.label(
                        egui::RichText::new("No profiles match your search")
                            .size(16.0)
                            .color(Theme::TEXT_SECONDARY),
                    );
                }
            });
        });
}
