//! Reusable UI components

pub mod profile_row;
