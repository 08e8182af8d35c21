//! Dashboard controller and the timed widget state it owns

pub mod controller;
pub mod loading;
pub mod timer;
pub mod toast;
pub mod view;
pub mod widget;

pub use controller::{Completion, DashboardController, DashboardError, Submission};
pub use view::DashboardView;
