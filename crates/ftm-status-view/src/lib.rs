//! Family Task Manager status view — library crate for the status page.
//!
//! Re-exports all modules so the page shell binary and external crates
//! (e.g. `ftm-e2e-tests`) can mount a `HealthView` and render it.

pub mod render;
pub mod state;
pub mod view;

pub use render::{render, render_page};
pub use state::ViewState;
pub use view::HealthView;
