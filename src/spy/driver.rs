//! Scroll spy: tracker and synchronizer mounted on a host.
//!
//! Mounting registers one passive scroll listener, applies the metadata of
//! the initial section and runs the first evaluation. Each scroll event then
//! completes its evaluation and any metadata write before returning.
//! Unmounting (explicitly or on drop) removes the listener.

use super::host::{ListenerId, ListenerOptions, ScrollHost};
use super::tracker::SectionTracker;
use crate::core::SectionId;
use crate::debug;
use crate::seo::{DocumentHead, MetadataSynchronizer};

pub struct ScrollSpy<H: ScrollHost> {
    host: H,
    listener: Option<ListenerId>,
    tracker: SectionTracker,
    sync: MetadataSynchronizer,
}

impl<H: ScrollHost> ScrollSpy<H> {
    pub fn mount(mut host: H, tracker: SectionTracker, mut sync: MetadataSynchronizer) -> Self {
        let listener = host.add_scroll_listener(ListenerOptions::PASSIVE);
        sync.apply(tracker.current(), None);

        let mut spy = Self {
            host,
            listener: Some(listener),
            tracker,
            sync,
        };
        spy.evaluate();
        spy
    }

    /// Handle one scroll event.
    ///
    /// Returns the new section when the active section changed. Events
    /// after unmount are ignored.
    pub fn on_scroll(&mut self) -> Option<SectionId> {
        if self.listener.is_none() {
            return None;
        }
        self.evaluate()
    }

    fn evaluate(&mut self) -> Option<SectionId> {
        let viewport = self.host.viewport();
        let changed = self.tracker.update(viewport, self.host.layout())?;

        debug!("spy"; "scroll {} -> `{}`", viewport.scroll_y, changed);
        self.sync.apply(&changed, None);
        Some(changed)
    }

    /// Active section, e.g. to highlight the matching navigation entry.
    pub fn current_section(&self) -> &SectionId {
        self.tracker.current()
    }

    pub fn head(&self) -> &DocumentHead {
        self.sync.head()
    }

    pub fn synchronizer(&self) -> &MetadataSynchronizer {
        &self.sync
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    /// Remove the scroll listener. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(id) = self.listener.take() {
            self.host.remove_scroll_listener(id);
        }
    }
}

impl<H: ScrollHost> Drop for ScrollSpy<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
