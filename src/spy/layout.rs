//! Rendering-layer seam: where is each section right now?

use rustc_hash::FxHashMap;

use crate::core::{SectionGeometry, SectionId};

/// Measures mounted sections.
///
/// Returns `None` for a section that is not (yet) mounted; the tracker skips it.
pub trait Layout {
    fn section_geometry(&self, id: &SectionId) -> Option<SectionGeometry>;
}

impl<L: Layout + ?Sized> Layout for &L {
    #[inline]
    fn section_geometry(&self, id: &SectionId) -> Option<SectionGeometry> {
        (**self).section_geometry(id)
    }
}

/// Fixed geometry table, used by the simulated page and the `spy` command.
#[derive(Debug, Clone, Default)]
pub struct StaticLayout {
    sections: FxHashMap<SectionId, SectionGeometry>,
}

impl StaticLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`StaticLayout::mount`].
    pub fn with(mut self, id: impl Into<SectionId>, top: f64, bottom: f64) -> Self {
        self.mount(id, SectionGeometry::new(top, bottom));
        self
    }

    /// Mount (or move) a section.
    pub fn mount(&mut self, id: impl Into<SectionId>, geometry: SectionGeometry) {
        self.sections.insert(id.into(), geometry);
    }

    /// Unmount a section. Returns its last geometry.
    pub fn unmount(&mut self, id: &str) -> Option<SectionGeometry> {
        self.sections.remove(id)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Bottom of the lowest mounted section (document height).
    pub fn document_height(&self) -> f64 {
        self.sections
            .values()
            .map(|g| g.bottom)
            .fold(0.0, f64::max)
    }
}

impl Layout for StaticLayout {
    fn section_geometry(&self, id: &SectionId) -> Option<SectionGeometry> {
        self.sections.get(id).copied()
    }
}
