//! Live suggestion domain
//!
//! Everything between the search input and the suggest endpoint: the
//! suggestion data model, the HTTP client, the background fetch worker,
//! the explicit dropdown state, and the popup rendering.

mod client;
mod suggest_render;
mod suggest_state;
mod types;
mod worker;

pub use client::{SuggestClient, SuggestError};
pub use suggest_render::render_dropdown;
pub use suggest_state::{Dropdown, SuggestState};
pub use types::Suggestion;
pub use worker::{SuggestRequest, SuggestResponse, spawn_worker};
