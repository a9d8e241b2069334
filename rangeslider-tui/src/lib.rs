//! Range slider TUI — terminal host for the range refinement widget.
//!
//! Provides:
//! - A ratatui dual-handle slider implementing the slider primitive
//! - An in-memory connector round trip over a local dataset
//! - Keyboard and mouse input
//! - Refinement persistence across restarts

pub mod app;
pub mod config;
pub mod input;
pub mod persistence;
pub mod sample_data;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use config::HostConfig;
pub use theme::Theme;
