//! Photo collection and carousel navigation.

use std::ops::Range;

/// Number of fixed tiles in the "views" grid under the CCT scale.
pub const VIEW_TILES: usize = 4;

const WITH_BACKGROUND: Range<usize> = 2..6;
const NO_BACKGROUND: Range<usize> = 0..2;

/// Ordered image sources plus the index of the photo shown on the hero card.
///
/// Sources are URLs or `data:` URLs. The collection only grows at the front
/// (uploads); `active` is always a valid index while the collection is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<String>,
    active: usize,
    revision: u64,
}

impl Gallery {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            active: 0,
            revision: 0,
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Bumped whenever the image list changes; navigation leaves it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_src(&self) -> Option<&str> {
        self.images.get(self.active).map(String::as_str)
    }

    pub fn next(&mut self) {
        if let Some(len) = self.non_zero_len() {
            self.active = (self.active + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        if let Some(len) = self.non_zero_len() {
            self.active = (self.active + len - 1) % len;
        }
    }

    /// Jump to a thumbnail. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.active = index;
        } else {
            tracing::debug!(index, len = self.images.len(), "ignoring out-of-range selection");
        }
    }

    /// Put freshly uploaded photos in front, keeping their order, and show the first one.
    pub fn prepend(&mut self, uploaded: Vec<String>) {
        if uploaded.is_empty() {
            return;
        }
        tracing::debug!(
            added = uploaded.len(),
            total = uploaded.len() + self.images.len(),
            "prepending uploaded photos"
        );
        self.images.splice(0..0, uploaded);
        self.active = 0;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Counter shown on the hero card, e.g. `Фото 2 / 6`.
    pub fn caption(&self) -> String {
        if self.images.is_empty() {
            return "Фото 0 / 0".to_string();
        }
        format!("Фото {} / {}", self.active + 1, self.images.len())
    }

    /// Collection index behind view tile `tile`. The grid always has
    /// [`VIEW_TILES`] tiles and wraps around short collections.
    pub fn view_index(&self, tile: usize) -> Option<usize> {
        self.non_zero_len().map(|len| tile % len)
    }

    /// Source shown on view tile `tile`.
    pub fn view_src(&self, tile: usize) -> Option<&str> {
        self.view_index(tile)
            .and_then(|i| self.images.get(i))
            .map(String::as_str)
    }

    /// Photos for the "with background" group of the right-hand blocks.
    pub fn with_background(&self) -> &[String] {
        self.clamped(WITH_BACKGROUND)
    }

    /// Photos for the "no background / macro" group of the right-hand blocks.
    pub fn no_background(&self) -> &[String] {
        self.clamped(NO_BACKGROUND)
    }

    fn clamped(&self, range: Range<usize>) -> &[String] {
        let len = self.images.len();
        &self.images[range.start.min(len)..range.end.min(len)]
    }

    fn non_zero_len(&self) -> Option<usize> {
        match self.images.len() {
            0 => None,
            len => Some(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn gallery(names: &[&str]) -> Gallery {
        Gallery::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn next_cycles_back_to_start() {
        for len in 1..=8 {
            let names: Vec<String> = (0..len).map(|i| format!("img-{i}")).collect();
            let mut g = Gallery::new(names);
            for start in 0..len {
                g.select(start);
                for _ in 0..len {
                    g.next();
                }
                assert_eq!(g.active(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        for len in 1..=8 {
            let names: Vec<String> = (0..len).map(|i| format!("img-{i}")).collect();
            let mut g = Gallery::new(names);
            g.prev();
            assert_eq!(g.active(), len - 1);
        }
    }

    #[test]
    fn prev_then_next_scenario() {
        let mut g = gallery(&["A", "B", "C"]);
        g.prev();
        assert_eq!(g.active(), 2);
        assert_eq!(g.active_src(), Some("C"));
        g.next();
        assert_eq!(g.active(), 0);
    }

    #[test]
    fn only_uploads_change_the_revision() {
        let mut g = gallery(&["A", "B", "C"]);
        let start = g.revision();
        g.next();
        g.prev();
        g.select(2);
        g.prepend(Vec::new());
        assert_eq!(g.revision(), start);

        g.prepend(vec!["new".into()]);
        assert_eq!(g.revision(), start + 1);
    }

    #[test]
    fn single_image_stays_at_zero() {
        let mut g = gallery(&["only"]);
        g.next();
        assert_eq!(g.active(), 0);
        g.prev();
        assert_eq!(g.active(), 0);
    }

    #[test]
    fn empty_gallery_is_tolerated() {
        let mut g = Gallery::default();
        g.next();
        g.prev();
        g.select(3);
        assert_eq!(g.active(), 0);
        assert_eq!(g.active_src(), None);
        assert_eq!(g.view_index(2), None);
        assert!(g.with_background().is_empty());
        assert_eq!(g.caption(), "Фото 0 / 0");
    }

    #[test]
    fn upload_prepends_in_order_and_resets_active() {
        let mut g = gallery(&["X"]);
        g.prepend(vec!["new1".into(), "new2".into()]);
        assert_eq!(g.images(), &["new1", "new2", "X"]);
        assert_eq!(g.active(), 0);

        let mut g = gallery(&["A", "B", "C"]);
        g.select(2);
        g.prepend(vec!["k1".into(), "k2".into(), "k3".into()]);
        assert_eq!(g.images(), &["k1", "k2", "k3", "A", "B", "C"]);
        assert_eq!(g.active(), 0);
    }

    #[test]
    fn empty_upload_changes_nothing() {
        let mut g = gallery(&["A", "B"]);
        g.select(1);
        g.prepend(Vec::new());
        assert_eq!(g.active(), 1);
        assert_eq!(g.len(), 2);
    }

    #[test]
    fn select_ignores_out_of_range() {
        let mut g = gallery(&["A", "B"]);
        g.select(1);
        g.select(5);
        assert_eq!(g.active(), 1);
    }

    #[test]
    fn caption_is_one_based() {
        let mut g = gallery(&["A", "B", "C", "D", "E", "F"]);
        g.next();
        assert_eq!(g.caption(), "Фото 2 / 6");
    }

    #[test]
    fn view_tiles_wrap_short_collections() {
        let g = gallery(&["A", "B", "C"]);
        let indices: Vec<_> = (0..VIEW_TILES).filter_map(|t| g.view_index(t)).collect();
        assert_eq!(indices, vec![0, 1, 2, 0]);
        assert_eq!(g.view_src(3), Some("A"));
    }

    #[test]
    fn right_blocks_are_clamped_slices() {
        let g = gallery(&["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(g.with_background(), &["C", "D", "E", "F"]);
        assert_eq!(g.no_background(), &["A", "B"]);

        let g = gallery(&["A", "B", "C"]);
        assert_eq!(g.with_background(), &["C"]);
        assert_eq!(g.no_background(), &["A", "B"]);

        let g = gallery(&["A"]);
        assert!(g.with_background().is_empty());
        assert_eq!(g.no_background(), &["A"]);
    }
}
