//! ProfileDeck - Manage, import, and export named configuration profiles
//!
//! A desktop application that keeps a directory of named configuration
//! profiles in sync with an on-screen list: debounced search, batch
//! import/export with per-file results, and an optimistic edit dialog.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
#![allow(dead_code)] // Several component APIs are wider than the current UI uses

mod core;
mod store;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::settings::Settings;
use crate::core::{AppState, DebouncedFilter};
use crate::store::DirStore;
use crate::ui::{NativePicker, ProfileDeckApp};

/// Application name constant
pub const APP_NAME: &str = "ProfileDeck";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    info!("{} v{} starting...", APP_NAME, APP_VERSION);

    let settings_path = Settings::default_path();
    let settings = Settings::load(&settings_path)?;

    let store = DirStore::new(settings.get_profiles_directory())?;
    info!("Profile store ready at {}", store.root().display());

    // The runtime must outlive the event loop; background store calls run
    // on it until the window closes.
    let runtime = tokio::runtime::Runtime::new()?;

    let mut state = AppState::new(Arc::new(store), runtime.handle().clone());
    state.filter = DebouncedFilter::new(settings.debounce_window());
    state.start_fetch();

    let (width, height) = settings.window_size.unwrap_or((900, 640));
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([640.0, 480.0])
            .with_icon(load_app_icon()),
        ..Default::default()
    };

    info!("Starting GUI...");
    eframe::run_native(
        &format!("{} v{}", APP_NAME, APP_VERSION),
        native_options,
        Box::new(move |cc| {
            Ok(Box::new(ProfileDeckApp::new(
                cc,
                state,
                settings,
                Box::new(NativePicker),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    info!("{} shutting down", APP_NAME);
    Ok(())
}

/// Initialize the logging system
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("profiledeck=info,eframe=warn,egui=warn,wgpu=error"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load the application icon
fn load_app_icon() -> egui::IconData {
    // Teal gradient disc; a real build would embed an asset instead.
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();

            if dist < size as f32 / 2.0 - 2.0 {
                let t = dist / (size as f32 / 2.0);
                rgba[idx] = (20.0 + t * 20.0) as u8; // R
                rgba[idx + 1] = (184.0 - t * 60.0) as u8; // G
                rgba[idx + 2] = (166.0 - t * 40.0) as u8; // B
                rgba[idx + 3] = 255; // A
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
