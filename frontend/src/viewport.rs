//! Scroll-position tracking for the welcome page.
//!
//! [`ViewportWatcher`] holds the two pieces of page-session state: whether the page has
//! scrolled past the nav threshold, and which tagged blocks have entered the viewport.
//! Geometry is read through [`LayoutProbe`] so the browser and tests share one code path.

use std::collections::HashMap;

use crate::config::{REVEAL_VIEWPORT_RATIO, SCROLL_THRESHOLD_PX};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState(bool);

impl ScrollState {
    pub fn from_offset(offset_px: f64) -> Self {
        ScrollState(offset_px > SCROLL_THRESHOLD_PX)
    }

    pub fn is_scrolled(self) -> bool {
        self.0
    }
}

/// Block tag -> "has entered the viewport".
///
/// Entries only ever go from absent to `true`; nothing hides a block again until the page
/// is reloaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibilityMap {
    revealed: HashMap<String, bool>,
}

impl VisibilityMap {
    /// Marks `id` as visible. Returns `true` if it was not visible before.
    pub fn reveal(&mut self, id: &str) -> bool {
        if self.is_visible(id) {
            return false;
        }
        self.revealed.insert(id.to_owned(), true);
        true
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.revealed.get(id).copied().unwrap_or(false)
    }
}

/// Top edge of one tagged block, relative to the top of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRect {
    pub id: String,
    pub top: f64,
}

impl BlockRect {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        BlockRect { id: id.into(), top }
    }
}

/// Read-only view of the rendered layout.
pub trait LayoutProbe {
    fn scroll_offset(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn tagged_blocks(&self) -> Vec<BlockRect>;
}

/// What the page renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportSnapshot {
    pub scroll: ScrollState,
    pub visible: VisibilityMap,
}

impl ViewportSnapshot {
    pub fn scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.is_visible(id)
    }
}

#[derive(Debug, Default)]
pub struct ViewportWatcher {
    state: ViewportSnapshot,
}

impl ViewportWatcher {
    /// Re-reads the layout and folds it into the current state.
    ///
    /// Returns `true` when the scroll flag flipped or at least one block was newly revealed,
    /// i.e. when the page needs to re-render.
    pub fn observe<P: LayoutProbe + ?Sized>(&mut self, probe: &P) -> bool {
        let scroll = ScrollState::from_offset(probe.scroll_offset());
        let mut changed = scroll != self.state.scroll;
        self.state.scroll = scroll;

        let fold_line = probe.viewport_height() * REVEAL_VIEWPORT_RATIO;
        for block in probe.tagged_blocks() {
            if block.top < fold_line && self.state.visible.reveal(&block.id) {
                log::debug!("revealing block {} (top {:.0}px)", block.id, block.top);
                changed = true;
            }
        }
        changed
    }

    pub fn snapshot(&self) -> ViewportSnapshot {
        self.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory layout: blocks keep fixed document positions and move with the scroll offset.
    struct FakeLayout {
        offset: f64,
        height: f64,
        blocks: Vec<(String, f64)>,
    }

    impl FakeLayout {
        fn new(height: f64, blocks: &[(&str, f64)]) -> Self {
            FakeLayout {
                offset: 0.0,
                height,
                blocks: blocks.iter().map(|(id, top)| (id.to_string(), *top)).collect(),
            }
        }
    }

    impl LayoutProbe for FakeLayout {
        fn scroll_offset(&self) -> f64 {
            self.offset
        }

        fn viewport_height(&self) -> f64 {
            self.height
        }

        fn tagged_blocks(&self) -> Vec<BlockRect> {
            self.blocks
                .iter()
                .map(|(id, doc_top)| BlockRect::new(id.clone(), doc_top - self.offset))
                .collect()
        }
    }

    #[test]
    fn scroll_flag_flips_strictly_above_threshold() {
        for offset in [0.0, 5.0, 19.9, 20.0] {
            assert!(!ScrollState::from_offset(offset).is_scrolled(), "offset {offset}");
        }
        for offset in [20.01, 21.0, 600.0, 10_000.0] {
            assert!(ScrollState::from_offset(offset).is_scrolled(), "offset {offset}");
        }
    }

    #[test]
    fn reveal_reports_only_first_transition() {
        let mut map = VisibilityMap::default();
        assert!(!map.is_visible("card-0"));
        assert!(map.reveal("card-0"));
        assert!(!map.reveal("card-0"));
        assert!(map.is_visible("card-0"));
        assert!(!map.is_visible("card-1"));
    }

    #[test]
    fn first_observation_reveals_blocks_already_in_view() {
        let layout = FakeLayout::new(1000.0, &[("hero", 100.0), ("about-header", 849.0), ("card-0", 900.0)]);
        let mut watcher = ViewportWatcher::default();

        assert!(watcher.observe(&layout));
        let snapshot = watcher.snapshot();
        assert!(!snapshot.scrolled());
        assert!(snapshot.is_visible("hero"));
        assert!(snapshot.is_visible("about-header"));
        assert!(!snapshot.is_visible("card-0"));
    }

    #[test]
    fn revealed_blocks_stay_visible_after_scrolling_back() {
        let mut layout = FakeLayout::new(800.0, &[("rules-header", 1500.0), ("footer", 4000.0)]);
        let mut watcher = ViewportWatcher::default();
        watcher.observe(&layout);
        assert!(!watcher.snapshot().is_visible("rules-header"));

        layout.offset = 1200.0;
        assert!(watcher.observe(&layout));
        assert!(watcher.snapshot().is_visible("rules-header"));
        assert!(watcher.snapshot().scrolled());

        layout.offset = 0.0;
        assert!(watcher.observe(&layout), "scroll flag should drop back");
        let snapshot = watcher.snapshot();
        assert!(!snapshot.scrolled());
        assert!(snapshot.is_visible("rules-header"));
        assert!(!snapshot.is_visible("footer"));
    }

    #[test]
    fn unchanged_layout_needs_no_rerender() {
        let mut layout = FakeLayout::new(900.0, &[("life-header", 300.0)]);
        let mut watcher = ViewportWatcher::default();
        assert!(watcher.observe(&layout));
        assert!(!watcher.observe(&layout));

        layout.offset = 10.0;
        assert!(!watcher.observe(&layout), "still under the nav threshold");
    }
}
