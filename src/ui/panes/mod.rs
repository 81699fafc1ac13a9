//! TUI pane rendering modules
//!
//! Each pane is a stateless render function over data the [`App`] hands it.
//!
//! # Pane Modules
//!
//! - [`bars`]: the array as colored bars (compared, settled, unsorted)
//! - [`dashboard`]: live statistics and the algorithm description
//! - [`status`]: status bar with keybindings, the custom-array input line and
//!   the playback badge
//!
//! [`App`]: crate::ui::App

pub mod bars;
pub mod dashboard;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use dashboard::{render_dashboard_pane, render_description_pane, DashboardRenderData};
pub use status::{render_status_bar, StatusRenderData};
