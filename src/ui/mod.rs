// Module declarations
mod app;
pub mod dashboard;
pub mod terminal_view;
// Re-exports for external use
pub use app::{App, UIConfig, run};
