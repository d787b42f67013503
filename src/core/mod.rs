//! Core types - pure abstractions shared across the codebase.

mod section;
mod state;

pub use section::{DEFAULT_SECTIONS, SectionGeometry, SectionId, Viewport};
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
