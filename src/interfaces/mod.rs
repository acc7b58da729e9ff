//! Desktop front end (eframe / egui), compiled with the `ui` feature.

pub mod activity_log;
pub mod app;
pub mod components;
pub mod design_system;
pub mod navigation;
pub mod views;

pub use app::{AppState, JournalApp};
