//! User interface module - egui-based profile manager

mod app;
mod components;
mod dialogs;
mod panels;
mod picker;
mod theme;

pub use app::ProfileDeckApp;
pub use picker::{FilePicker, NativePicker};
