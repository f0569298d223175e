//! Theme and styling for the UI

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};

/// Application color palette
pub struct Theme;

impl Theme {
    // Primary accent - teal
    pub const PRIMARY: Color32 = Color32::from_rgb(20, 184, 166); // Teal-500
    pub const PRIMARY_LIGHT: Color32 = Color32::from_rgb(94, 234, 212); // Teal-300
    pub const PRIMARY_DARK: Color32 = Color32::from_rgb(15, 118, 110); // Teal-700

    // Status colors
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94); // Green-500
    pub const WARNING: Color32 = Color32::from_rgb(245, 158, 11); // Amber-500
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68); // Red-500
    pub const INFO: Color32 = Color32::from_rgb(59, 130, 246); // Blue-500

    // Neutral colors (dark theme)
    pub const BG_PRIMARY: Color32 = Color32::from_rgb(15, 18, 22);
    pub const BG_SECONDARY: Color32 = Color32::from_rgb(22, 27, 33);
    pub const BG_TERTIARY: Color32 = Color32::from_rgb(32, 39, 47);
    pub const BG_HOVER: Color32 = Color32::from_rgb(42, 51, 61);
    pub const BG_ELEVATED: Color32 = Color32::from_rgb(27, 33, 40);

    // Text colors
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 248, 250);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 165, 175);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(108, 118, 128);

    // Border colors
    pub const BORDER: Color32 = Color32::from_rgb(48, 56, 66);
    pub const BORDER_LIGHT: Color32 = Color32::from_rgb(37, 44, 52);

    // Profile connection status
    pub const STATUS_CONNECTED: Color32 = Self::SUCCESS;
    pub const STATUS_DISCONNECTED: Color32 = Self::TEXT_MUTED;

    /// Apply dark theme to egui
    pub fn apply_dark(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::dark();

        visuals.panel_fill = Self::BG_PRIMARY;
        visuals.window_fill = Self::BG_ELEVATED;
        visuals.extreme_bg_color = Self::BG_PRIMARY;
        visuals.faint_bg_color = Self::BG_TERTIARY;

        visuals.widgets.noninteractive.bg_fill = Self::BG_SECONDARY;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, Self::BORDER_LIGHT);
        visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

        visuals.widgets.inactive.bg_fill = Self::BG_TERTIARY;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::TEXT_SECONDARY);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.widgets.inactive.rounding = Rounding::same(6.0);

        visuals.widgets.hovered.bg_fill = Self::BG_HOVER;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.6));
        visuals.widgets.hovered.rounding = Rounding::same(6.0);
        visuals.widgets.hovered.expansion = 1.0;

        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);
        visuals.widgets.active.rounding = Rounding::same(6.0);

        visuals.widgets.open.bg_fill = Self::BG_ELEVATED;
        visuals.widgets.open.fg_stroke = Stroke::new(1.0, Self::TEXT_PRIMARY);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.5));
        visuals.widgets.open.rounding = Rounding::same(6.0);

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.25);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_rounding = Rounding::same(10.0);
        visuals.window_stroke = Stroke::new(0.5, Self::BORDER);
        visuals.window_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 8.0),
            blur: 24.0,
            spread: 6.0,
            color: Color32::from_black_alpha(110),
        };
        visuals.popup_shadow = egui::Shadow {
            offset: egui::vec2(0.0, 4.0),
            blur: 12.0,
            spread: 2.0,
            color: Color32::from_black_alpha(90),
        };
        visuals.menu_rounding = Rounding::same(8.0);
        visuals.striped = true;

        style.visuals = visuals;
        apply_common(&mut style);
        ctx.set_style(style);
    }

    /// Apply light theme to egui
    pub fn apply_light(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let mut visuals = Visuals::light();

        let bg_primary = Color32::from_rgb(249, 250, 251);
        let bg_secondary = Color32::from_rgb(243, 244, 246);
        let bg_tertiary = Color32::from_rgb(229, 231, 235);
        let bg_hover = Color32::from_rgb(209, 213, 219);
        let text_primary = Color32::from_rgb(17, 24, 39);
        let text_secondary = Color32::from_rgb(75, 85, 99);
        let border = Color32::from_rgb(209, 213, 219);

        visuals.panel_fill = bg_primary;
        visuals.window_fill = Color32::WHITE;
        visuals.extreme_bg_color = Color32::WHITE;
        visuals.faint_bg_color = bg_secondary;

        visuals.widgets.noninteractive.bg_fill = bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_primary);
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(0.5, border);
        visuals.widgets.noninteractive.rounding = Rounding::same(6.0);

        visuals.widgets.inactive.bg_fill = bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_secondary);
        visuals.widgets.inactive.bg_stroke = Stroke::new(0.5, border);
        visuals.widgets.inactive.rounding = Rounding::same(6.0);

        visuals.widgets.hovered.bg_fill = bg_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, text_primary);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, Self::PRIMARY.linear_multiply(0.7));
        visuals.widgets.hovered.rounding = Rounding::same(6.0);
        visuals.widgets.hovered.expansion = 1.0;

        visuals.widgets.active.bg_fill = Self::PRIMARY;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::PRIMARY_DARK);
        visuals.widgets.active.rounding = Rounding::same(6.0);

        visuals.selection.bg_fill = Self::PRIMARY.linear_multiply(0.15);
        visuals.selection.stroke = Stroke::new(1.0, Self::PRIMARY);

        visuals.window_rounding = Rounding::same(10.0);
        visuals.window_stroke = Stroke::new(0.5, border);
        visuals.striped = true;

        style.visuals = visuals;
        apply_common(&mut style);
        ctx.set_style(style);
    }
}

fn apply_common(style: &mut egui::Style) {
    style.text_styles = [
        (
            TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        ),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (
            TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Heading,
            FontId::new(20.0, FontFamily::Proportional),
        ),
        (
            TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        ),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.window_margin = egui::Margin::same(16.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);
    style.spacing.indent = 20.0;
    style.interaction.tooltip_delay = 0.3;
}

/// Icon characters (using Unicode symbols)
pub struct Icons;

impl Icons {
    pub const ADD: &'static str = "+";
    pub const CONNECT: &'static str = "▶";
    pub const EDIT: &'static str = "✎";
    pub const TRASH: &'static str = "🗑";
    pub const EXPORT: &'static str = "📤";
    pub const IMPORT: &'static str = "📥";
    pub const SEARCH: &'static str = "⌕";
    pub const WARNING: &'static str = "⚠";
    pub const ERROR: &'static str = "✕";
    pub const INFO: &'static str = "ℹ";
    pub const SUCCESS: &'static str = "✓";
}
