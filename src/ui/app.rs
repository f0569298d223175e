//! Main application UI

use std::path::PathBuf;
use std::time::{Duration, Instant};

use egui::{CentralPanel, Context, TopBottomPanel};
use tracing::{error, info};

use super::dialogs::{self, DialogState, ProfileForm};
use super::panels;
use super::picker::FilePicker;
use super::theme::{Icons, Theme};
use crate::core::settings::{self, Settings};
use crate::core::{AppState, BatchReport, BatchSeverity};

/// Main application struct
pub struct ProfileDeckApp {
    /// Application state
    state: AppState,
    /// Persisted settings, written back on exit
    settings: Settings,
    settings_path: PathBuf,
    /// Import/export file dialogs
    picker: Box<dyn FilePicker>,
    /// Dialog state
    dialog: DialogState,
    /// Buffers behind the profile form dialog
    form: ProfileForm,
    /// Notifications queue
    notifications: Vec<Notification>,
    /// First frame flag
    first_frame: bool,
}

/// Notification message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    /// Per-item failure lines for batch reports
    pub detail: Option<String>,
    pub level: NotificationLevel,
    pub created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            detail: None,
            level,
            created_at: Instant::now(),
        }
    }

    pub fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ProfileDeckApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        state: AppState,
        settings: Settings,
        picker: Box<dyn FilePicker>,
    ) -> Self {
        match settings.theme {
            settings::Theme::Dark => Theme::apply_dark(&cc.egui_ctx),
            settings::Theme::Light => Theme::apply_light(&cc.egui_ctx),
            settings::Theme::System => {
                // Default to dark for now
                Theme::apply_dark(&cc.egui_ctx);
            }
        }

        Self {
            state,
            settings,
            settings_path: Settings::default_path(),
            picker,
            dialog: DialogState::None,
            form: ProfileForm::default(),
            notifications: Vec::new(),
            first_frame: true,
        }
    }

    /// Add a notification
    pub fn notify(&mut self, message: impl Into<String>, level: NotificationLevel) {
        self.notifications.push(Notification::new(message, level));
    }

    fn notify_report(&mut self, report: BatchReport) {
        let level = match report.severity {
            BatchSeverity::Success => NotificationLevel::Success,
            BatchSeverity::PartialFailure => NotificationLevel::Warning,
            BatchSeverity::Failure => NotificationLevel::Error,
        };
        self.notifications
            .push(Notification::new(report.headline, level).with_detail(report.detail));
    }

    /// Clean up old notifications
    fn cleanup_notifications(&mut self) {
        let timeout = Duration::from_secs(5);
        self.notifications
            .retain(|n| n.created_at.elapsed() < timeout);
    }

    fn pick_and_import(&mut self) {
        match self.picker.pick_import_files() {
            Ok(Some(paths)) => self.state.start_import(paths),
            // Cancelled: nothing changes, nothing is shown.
            Ok(None) => {}
            Err(e) => {
                error!("Import picker failed: {}", e);
                self.notify("Could not open the file picker", NotificationLevel::Error);
            }
        }
    }

    fn pick_and_export(&mut self) {
        match self.picker.pick_export_directory() {
            Ok(Some(directory)) => self.state.start_export(directory),
            Ok(None) => {}
            Err(e) => {
                error!("Export picker failed: {}", e);
                self.notify("Could not open the file picker", NotificationLevel::Error);
            }
        }
    }

    /// Render the top bar with search and actions
    fn render_top_bar(&mut self, ctx: &Context, now: Instant) {
        TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(Theme::BG_PRIMARY)
                    .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
                    .inner_margin(egui::Margin::symmetric(20.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Profiles")
                            .size(24.0)
                            .strong()
                            .color(Theme::TEXT_PRIMARY),
                    );

                    ui.add_space(24.0);

                    // Search box; the raw value follows every keystroke,
                    // the projection only moves after the quiet window.
                    egui::Frame::none()
                        .fill(Theme::BG_SECONDARY)
                        .rounding(egui::Rounding::same(8.0))
                        .stroke(egui::Stroke::new(1.0, Theme::BORDER_LIGHT))
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(
                                    egui::RichText::new(Icons::SEARCH)
                                        .size(14.0)
                                        .color(Theme::TEXT_MUTED),
                                );
                                ui.add_space(8.0);
                                let response = ui.add(
                                    egui::TextEdit::singleline(self.state.filter.raw_mut())
                                        .hint_text("Search profiles...")
                                        .desired_width(180.0)
                                        .frame(false),
                                );
                                if response.changed() {
                                    self.state.filter.mark_input(now);
                                }
                            });
                        });

                    // Right-aligned buttons
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let new_btn = egui::Button::new(
                            egui::RichText::new("+ New Profile").color(egui::Color32::WHITE),
                        )
                        .fill(Theme::PRIMARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(120.0, 36.0));

                        if ui.add(new_btn).clicked() {
                            self.state.session.clear();
                            self.form = ProfileForm::default();
                            self.dialog = DialogState::ProfileForm;
                        }

                        ui.add_space(12.0);

                        let import_btn = egui::Button::new(
                            egui::RichText::new(format!("{} Import", Icons::IMPORT))
                                .color(Theme::TEXT_PRIMARY),
                        )
                        .fill(Theme::BG_TERTIARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(100.0, 36.0));

                        if ui.add(import_btn).clicked() {
                            self.pick_and_import();
                        }

                        ui.add_space(8.0);

                        let export_btn = egui::Button::new(
                            egui::RichText::new(format!("{} Export", Icons::EXPORT))
                                .color(Theme::TEXT_PRIMARY),
                        )
                        .fill(Theme::BG_TERTIARY)
                        .rounding(egui::Rounding::same(8.0))
                        .min_size(egui::vec2(100.0, 36.0));

                        if ui.add(export_btn).clicked() {
                            self.pick_and_export();
                        }
                    });
                });
            });
    }

    /// Render the main content area
    fn render_main_content(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            panels::profiles::render(ui, &mut self.state, &mut self.dialog, &mut self.form);
        });
    }

    /// Render notifications
    fn render_notifications(&mut self, ctx: &Context) {
        if self.notifications.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("notifications"))
            .fixed_pos(egui::pos2(ctx.screen_rect().width() - 360.0, 80.0))
            .show(ctx, |ui| {
                for notification in &self.notifications {
                    let (icon, border_color) = match notification.level {
                        NotificationLevel::Info => (Icons::INFO, Theme::INFO),
                        NotificationLevel::Success => (Icons::SUCCESS, Theme::SUCCESS),
                        NotificationLevel::Warning => (Icons::WARNING, Theme::WARNING),
                        NotificationLevel::Error => (Icons::ERROR, Theme::ERROR),
                    };

                    egui::Frame::none()
                        .fill(Theme::BG_ELEVATED)
                        .rounding(egui::Rounding::same(10.0))
                        .stroke(egui::Stroke::new(1.0, border_color.linear_multiply(0.5)))
                        .shadow(egui::Shadow {
                            offset: egui::vec2(0.0, 4.0),
                            blur: 12.0,
                            spread: 2.0,
                            color: egui::Color32::from_black_alpha(60),
                        })
                        .inner_margin(egui::Margin::same(16.0))
                        .show(ui, |ui| {
                            ui.set_width(320.0);
                            ui.horizontal(|ui| {
                                egui::Frame::none()
                                    .fill(border_color.linear_multiply(0.2))
                                    .rounding(egui::Rounding::same(6.0))
                                    .inner_margin(egui::Margin::same(6.0))
                                    .show(ui, |ui| {
                                        ui.label(
                                            egui::RichText::new(icon)
                                                .size(14.0)
                                                .color(border_color),
                                        );
                                    });
                                ui.add_space(12.0);
                                ui.vertical(|ui| {
                                    ui.label(
                                        egui::RichText::new(&notification.message)
                                            .size(13.0)
                                            .color(Theme::TEXT_PRIMARY),
                                    );
                                    if let Some(ref detail) = notification.detail {
                                        ui.add_space(4.0);
                                        for line in detail.lines() {
                                            ui.label(
                                                egui::RichText::new(line)
                                                    .small()
                                                    .color(Theme::TEXT_SECONDARY),
                                            );
                                        }
                                    }
                                });
                            });
                        });

                    ui.add_space(10.0);
                }
            });
    }

    /// Render dialogs
    fn render_dialogs(&mut self, ctx: &Context) {
        match self.dialog.clone() {
            DialogState::None => {}
            DialogState::ProfileForm => {
                dialogs::profile_form::render(
                    ctx,
                    &mut self.form,
                    &mut self.state,
                    &mut self.dialog,
                    &mut self.notifications,
                );
            }
            DialogState::ConfirmDelete(name) => {
                dialogs::confirm::render(
                    ctx,
                    &name,
                    &mut self.state,
                    &mut self.dialog,
                    &mut self.notifications,
                );
            }
        }
    }
}

impl eframe::App for ProfileDeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // First frame setup
        if self.first_frame {
            self.first_frame = false;
            info!("First frame rendered");
        }

        // Advance the search debounce and schedule the commit frame
        self.state.tick(now);
        if let Some(delay) = self.state.filter.time_to_commit(now) {
            ctx.request_repaint_after(delay);
        }

        // Drain completed store operations into notifications
        for report in self.state.pump_events() {
            self.notify_report(report);
        }
        if self.state.batch_in_flight() || !self.notifications.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // Clean up old notifications
        self.cleanup_notifications();

        // Render UI components
        self.render_top_bar(ctx, now);
        self.render_main_content(ctx);
        self.render_notifications(ctx);
        self.render_dialogs(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.settings.save(&self.settings_path) {
            error!("Failed to save settings: {}", e);
        }

        info!("Application exiting");
    }
}
