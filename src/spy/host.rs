//! Host environment seam: viewport, layout and scroll-listener registration.

use rustc_hash::FxHashMap;

use super::layout::{Layout, StaticLayout};
use crate::core::Viewport;

/// Handle of a registered scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Registration options of a scroll listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerOptions {
    /// The listener never blocks scrolling.
    pub passive: bool,
}

impl ListenerOptions {
    pub const PASSIVE: Self = Self { passive: true };
}

/// The window a spy is mounted on.
pub trait ScrollHost {
    type Layout: Layout + ?Sized;

    fn viewport(&self) -> Viewport;

    fn layout(&self) -> &Self::Layout;

    fn add_scroll_listener(&mut self, options: ListenerOptions) -> ListenerId;

    /// Returns `false` if the listener was not registered.
    fn remove_scroll_listener(&mut self, id: ListenerId) -> bool;
}

/// In-memory page: fixed layout, a scroll offset and a listener set.
#[derive(Debug, Clone)]
pub struct SimulatedPage {
    layout: StaticLayout,
    viewport: Viewport,
    listeners: FxHashMap<ListenerId, ListenerOptions>,
    next_id: u64,
}

impl SimulatedPage {
    pub fn new(layout: StaticLayout, viewport_height: f64) -> Self {
        Self {
            layout,
            viewport: Viewport::new(0.0, viewport_height),
            listeners: FxHashMap::default(),
            next_id: 0,
        }
    }

    /// Move the scroll offset, clamped at the top of the document.
    pub fn scroll_to(&mut self, y: f64) {
        self.viewport.scroll_y = y.max(0.0);
    }

    pub fn resize(&mut self, height: f64) {
        self.viewport.height = height;
    }

    pub fn layout_mut(&mut self) -> &mut StaticLayout {
        &mut self.layout
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listener(&self, id: ListenerId) -> Option<ListenerOptions> {
        self.listeners.get(&id).copied()
    }
}

impl ScrollHost for SimulatedPage {
    type Layout = StaticLayout;

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn layout(&self) -> &StaticLayout {
        &self.layout
    }

    fn add_scroll_listener(&mut self, options: ListenerOptions) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.insert(id, options);
        id
    }

    fn remove_scroll_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(&id).is_some()
    }
}
