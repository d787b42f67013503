//! Section tracker: scroll position → active section.
//!
//! Each evaluation is a pure function of (viewport, geometry snapshot,
//! previous active section). The tracker only remembers the active section.

use thiserror::Error;

use super::layout::Layout;
use super::options::SpyOptions;
use crate::core::{SectionGeometry, SectionId, Viewport};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpyError {
    #[error("at least one section id is required")]
    NoSections,
}

/// Whether a section counts as "in view".
///
/// Both bounds are shifted up by `viewport_height * threshold`, so a section
/// becomes active while its bottom edge is still above the lower part of the
/// viewport. The window is half-open: `[top - shift, bottom - shift)`.
#[inline]
pub fn in_view(
    geometry: SectionGeometry,
    scroll_position: f64,
    viewport_height: f64,
    threshold: f64,
) -> bool {
    let shift = viewport_height * threshold;
    scroll_position >= geometry.top - shift && scroll_position < geometry.bottom - shift
}

/// Owns the active section of one page view.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    sections: Vec<SectionId>,
    options: SpyOptions,
    active: SectionId,
}

impl SectionTracker {
    /// Create a tracker whose active section starts at the first id.
    pub fn new(sections: Vec<SectionId>, options: SpyOptions) -> Result<Self, SpyError> {
        let active = sections.first().cloned().ok_or(SpyError::NoSections)?;
        Ok(Self {
            sections,
            options,
            active,
        })
    }

    /// Tracker over the default section list.
    pub fn with_defaults(options: SpyOptions) -> Self {
        let sections = SectionId::defaults();
        let active = sections[0].clone();
        Self {
            sections,
            options,
            active,
        }
    }

    #[inline]
    pub fn current(&self) -> &SectionId {
        &self.active
    }

    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    pub fn options(&self) -> SpyOptions {
        self.options
    }

    /// First section, in document order, whose window contains the scroll position.
    ///
    /// Sections missing from the layout are skipped.
    pub fn locate<L: Layout + ?Sized>(&self, viewport: Viewport, layout: &L) -> Option<&SectionId> {
        let scroll_position = viewport.scroll_y + self.options.offset;

        self.sections.iter().find(|id| {
            layout.section_geometry(id).is_some_and(|geometry| {
                in_view(
                    geometry,
                    scroll_position,
                    viewport.height,
                    self.options.threshold,
                )
            })
        })
    }

    /// Recompute the active section.
    ///
    /// Returns the new section only when it differs from the previous one.
    /// No match leaves the active section untouched.
    pub fn update<L: Layout + ?Sized>(
        &mut self,
        viewport: Viewport,
        layout: &L,
    ) -> Option<SectionId> {
        let found = self.locate(viewport, layout)?;
        if *found == self.active {
            return None;
        }
        let found = found.clone();
        self.active = found.clone();
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spy::StaticLayout;

    fn three_sections() -> (SectionTracker, StaticLayout) {
        let tracker = SectionTracker::new(
            vec!["home".into(), "about".into(), "resume".into()],
            SpyOptions::default(),
        )
        .unwrap();
        let layout = StaticLayout::new()
            .with("home", 0.0, 800.0)
            .with("about", 800.0, 1600.0)
            .with("resume", 1600.0, 2400.0);
        (tracker, layout)
    }

    #[test]
    fn test_empty_sections_rejected() {
        let err = SectionTracker::new(Vec::new(), SpyOptions::default()).unwrap_err();
        assert_eq!(err, SpyError::NoSections);
    }

    #[test]
    fn test_initial_active_is_first_section() {
        let (tracker, _) = three_sections();
        assert_eq!(tracker.current(), "home");
    }

    #[test]
    fn test_in_view_window_is_shifted_and_half_open() {
        let about = SectionGeometry::new(800.0, 1600.0);
        // window = [500, 1300)
        assert!(!in_view(about, 499.9, 1000.0, 0.3));
        assert!(in_view(about, 500.0, 1000.0, 0.3));
        assert!(in_view(about, 1299.9, 1000.0, 0.3));
        assert!(!in_view(about, 1300.0, 1000.0, 0.3));
    }

    #[test]
    fn test_scroll_750_selects_about() {
        let (mut tracker, layout) = three_sections();
        // scroll_position = 850; home window [-300, 500), about window [500, 1300)
        let changed = tracker.update(Viewport::new(750.0, 1000.0), &layout);
        assert_eq!(changed.as_ref().map(SectionId::as_str), Some("about"));
        assert_eq!(tracker.current(), "about");
    }

    #[test]
    fn test_top_of_page_selects_home() {
        let (mut tracker, layout) = three_sections();
        assert_eq!(tracker.update(Viewport::new(0.0, 1000.0), &layout), None);
        assert_eq!(tracker.current(), "home");
    }

    #[test]
    fn test_update_is_idempotent() {
        let (mut tracker, layout) = three_sections();
        let viewport = Viewport::new(1500.0, 1000.0);

        assert_eq!(
            tracker.update(viewport, &layout),
            Some(SectionId::from("resume"))
        );
        assert_eq!(tracker.update(viewport, &layout), None);
        assert_eq!(tracker.current(), "resume");
    }

    #[test]
    fn test_earliest_section_wins_on_overlap() {
        let tracker = SectionTracker::new(
            vec!["home".into(), "about".into()],
            SpyOptions::default(),
        )
        .unwrap();
        // Overlapping sections: both windows contain the position
        let layout = StaticLayout::new()
            .with("home", 0.0, 2000.0)
            .with("about", 0.0, 2000.0);
        let found = tracker.locate(Viewport::new(400.0, 1000.0), &layout);
        assert_eq!(found.map(SectionId::as_str), Some("home"));
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let (mut tracker, layout) = three_sections();
        tracker.update(Viewport::new(750.0, 1000.0), &layout);
        assert_eq!(tracker.current(), "about");

        // Past the end of the document, nothing matches
        assert_eq!(tracker.update(Viewport::new(5000.0, 1000.0), &layout), None);
        assert_eq!(tracker.current(), "about");
    }

    #[test]
    fn test_unmounted_section_is_skipped() {
        let mut tracker = SectionTracker::new(vec!["home".into()], SpyOptions::default()).unwrap();
        let layout = StaticLayout::new();
        assert_eq!(tracker.update(Viewport::new(0.0, 1000.0), &layout), None);
        assert_eq!(tracker.current(), "home");
    }

    #[test]
    fn test_unmounted_section_falls_through_to_next() {
        let (mut tracker, mut layout) = three_sections();
        layout.unmount("about");
        // 850 is in about's window, but about is gone and resume's window is [1300, 2100)
        assert_eq!(tracker.update(Viewport::new(750.0, 1000.0), &layout), None);

        assert_eq!(
            tracker.update(Viewport::new(1300.0, 1000.0), &layout),
            Some(SectionId::from("resume"))
        );
    }

    #[test]
    fn test_offset_and_threshold_are_honored() {
        let mut tracker = SectionTracker::new(
            vec!["home".into(), "about".into()],
            SpyOptions::default().with_offset(0.0).with_threshold(0.0),
        )
        .unwrap();
        let layout = StaticLayout::new()
            .with("home", 0.0, 800.0)
            .with("about", 800.0, 1600.0);

        assert_eq!(tracker.update(Viewport::new(799.0, 1000.0), &layout), None);
        assert_eq!(
            tracker.update(Viewport::new(800.0, 1000.0), &layout),
            Some(SectionId::from("about"))
        );
    }

    #[test]
    fn test_defaults_tracker() {
        let tracker = SectionTracker::with_defaults(SpyOptions::default());
        assert_eq!(tracker.sections().len(), 5);
        assert_eq!(tracker.current(), "home");
        assert_eq!(tracker.options().offset, 100.0);
    }
}
