//! Application controller
//!
//! HTTP handlers translate requests into [`Intent`]s; the [`Controller`] owns the
//! like store and the current view, runs each intent, and guards the view against
//! stale results with per-channel generations.

mod controller;
mod generation;
mod intent;
mod view;

pub use controller::Controller;
pub use generation::{Channel, Generations, Ticket};
pub use intent::{Intent, Outcome, ToggleLikeRequest};
pub use view::{MovieCard, SearchPanel, SearchSnapshot, ViewSnapshot, ViewState};
