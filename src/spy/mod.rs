//! Scroll spy: which section of the page is in view.
//!
//! ```text
//! scroll event ─► SectionTracker ──(changed?)──► MetadataSynchronizer ─► DocumentHead
//!                      ▲
//!                 Layout (geometry per section)
//! ```
//!
//! The tracker owns the active section, the synchronizer owns the head.
//! [`ScrollSpy`] wires both to a [`ScrollHost`] and manages the listener.

mod driver;
mod host;
mod layout;
mod options;
mod tracker;

pub use driver::ScrollSpy;
pub use host::{ListenerId, ListenerOptions, ScrollHost, SimulatedPage};
pub use layout::{Layout, StaticLayout};
pub use options::{DEFAULT_OFFSET, DEFAULT_THRESHOLD, SpyOptions};
pub use tracker::{SectionTracker, SpyError, in_view};

use crate::config::SiteConfig;

/// Build the tracker described by `[spy]`.
pub fn tracker_from_config(config: &SiteConfig) -> Result<SectionTracker, SpyError> {
    SectionTracker::new(config.spy.sections.clone(), config.spy.options())
}
