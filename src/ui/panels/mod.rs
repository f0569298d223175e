//! Main content panels

pub mod profiles;
