//=========================================================================
// Display List
//=========================================================================
//
// Retained store of every visual alive on the logic thread.
//
// Architecture:
//   create_*() → BTreeMap<VisualHandle, Entry>
//   destroy_at(handle, t) → purge_expired(now) removes it at tick time
//   iter_by_depth() → (depth, handle) ordered view for a renderer
//
// Scroll is the camera's top-left in world pixels. It only affects
// screen_position() of non-fixed elements; stored coordinates stay in
// world space.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::{Color, DrawSurface, RectSpec, TextSpec, Visual, VisualHandle};

//=== DisplayList =========================================================

#[derive(Debug)]
struct Entry {
    visual: Visual,
    expires_at: Option<u64>,
}

#[derive(Debug, Default)]
pub struct DisplayList {
    next_handle: u64,
    entries: BTreeMap<VisualHandle, Entry>,
    scroll: (f32, f32),
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, visual: Visual) -> VisualHandle {
        self.next_handle += 1;
        let handle = VisualHandle(self.next_handle);
        trace!("Visual {:?} created at depth {}", handle, visual.depth());
        self.entries.insert(
            handle,
            Entry {
                visual,
                expires_at: None,
            },
        );
        handle
    }

    //--- Queries ----------------------------------------------------------

    pub fn get(&self, handle: VisualHandle) -> Option<&Visual> {
        self.entries.get(&handle).map(|entry| &entry.visual)
    }

    pub fn contains(&self, handle: VisualHandle) -> bool {
        self.entries.contains_key(&handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Visuals in paint order: ascending depth, then creation order.
    pub fn iter_by_depth(&self) -> Vec<(VisualHandle, &Visual)> {
        let mut ordered: Vec<_> = self
            .entries
            .iter()
            .map(|(handle, entry)| (*handle, &entry.visual))
            .collect();
        ordered.sort_by_key(|(handle, visual)| (visual.depth(), *handle));
        ordered
    }

    /// Where a visual lands on screen after camera scroll.
    pub fn screen_position(&self, handle: VisualHandle) -> Option<(f32, f32)> {
        let visual = self.get(handle)?;
        let (x, y) = visual.position();
        if visual.is_fixed() {
            Some((x, y))
        } else {
            Some((x - self.scroll.0, y - self.scroll.1))
        }
    }

    //--- Mutation ---------------------------------------------------------

    pub fn set_fill(&mut self, handle: VisualHandle, fill: Color) -> bool {
        match self.entries.get_mut(&handle).map(|entry| &mut entry.visual) {
            Some(Visual::Rect(rect)) => {
                rect.fill = fill;
                true
            }
            _ => {
                warn!("set_fill on missing or non-rect visual {:?}", handle);
                false
            }
        }
    }

    pub fn set_text_color(&mut self, handle: VisualHandle, color: Color) -> bool {
        match self.entries.get_mut(&handle).map(|entry| &mut entry.visual) {
            Some(Visual::Text(text)) => {
                text.color = color;
                true
            }
            _ => {
                warn!("set_text_color on missing or non-text visual {:?}", handle);
                false
            }
        }
    }

    pub fn set_text(&mut self, handle: VisualHandle, content: impl Into<String>) -> bool {
        match self.entries.get_mut(&handle).map(|entry| &mut entry.visual) {
            Some(Visual::Text(text)) => {
                text.content = content.into();
                true
            }
            _ => {
                warn!("set_text on missing or non-text visual {:?}", handle);
                false
            }
        }
    }

    pub fn set_scroll(&mut self, x: f32, y: f32) {
        self.scroll = (x, y);
    }

    pub fn scroll(&self) -> (f32, f32) {
        self.scroll
    }

    //--- Expiry -----------------------------------------------------------

    /// Schedules `handle` for removal by the first purge at or after `at_ms`.
    pub fn destroy_at(&mut self, handle: VisualHandle, at_ms: u64) -> bool {
        match self.entries.get_mut(&handle) {
            Some(entry) => {
                entry.expires_at = Some(at_ms);
                true
            }
            None => {
                warn!("destroy_at on missing visual {:?}", handle);
                false
            }
        }
    }

    /// Removes every visual whose expiry time has passed. Returns how many.
    pub fn purge_expired(&mut self, now_ms: u64) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.expires_at.map_or(true, |at| at > now_ms));
        let purged = before - self.entries.len();
        if purged > 0 {
            debug!("Purged {} expired visual(s) at {} ms", purged, now_ms);
        }
        purged
    }

    /// Drops everything, including visuals owned by other systems.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl DrawSurface for DisplayList {
    fn create_rect(&mut self, spec: RectSpec) -> VisualHandle {
        self.insert(Visual::Rect(spec))
    }

    fn create_text(&mut self, spec: TextSpec) -> VisualHandle {
        self.insert(Visual::Text(spec))
    }

    fn set_rect_width(&mut self, handle: VisualHandle, width: f32) -> bool {
        match self.entries.get_mut(&handle).map(|entry| &mut entry.visual) {
            Some(Visual::Rect(rect)) => {
                rect.width = width.max(0.0);
                true
            }
            _ => {
                warn!("set_rect_width on missing or non-rect visual {:?}", handle);
                false
            }
        }
    }

    fn set_position(&mut self, handle: VisualHandle, x: f32, y: f32) -> bool {
        match self.entries.get_mut(&handle).map(|entry| &mut entry.visual) {
            Some(Visual::Rect(rect)) => {
                rect.x = x;
                rect.y = y;
                true
            }
            Some(Visual::Text(text)) => {
                text.x = x;
                text.y = y;
                true
            }
            None => {
                warn!("set_position on missing visual {:?}", handle);
                false
            }
        }
    }

    fn destroy(&mut self, handle: VisualHandle) -> bool {
        let removed = self.entries.remove(&handle).is_some();
        if !removed {
            debug!("Destroy of missing visual {:?}", handle);
        }
        removed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::Origin;

    #[test]
    fn create_and_destroy() {
        let mut list = DisplayList::new();
        let rect = list.create_rect(RectSpec::new(0.0, 0.0, 10.0, 10.0));
        let text = list.create_text(TextSpec::new(5.0, 5.0, "hi"));
        assert_eq!(list.len(), 2);

        assert!(list.destroy(rect));
        assert!(!list.destroy(rect));
        assert!(list.contains(text));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn iteration_is_depth_ordered() {
        let mut list = DisplayList::new();
        let top = list.create_rect(RectSpec::new(0.0, 0.0, 1.0, 1.0).with_depth(10));
        let bottom = list.create_rect(RectSpec::new(0.0, 0.0, 1.0, 1.0).with_depth(-1));
        let middle_a = list.create_text(TextSpec::new(0.0, 0.0, "a"));
        let middle_b = list.create_text(TextSpec::new(0.0, 0.0, "b"));

        let order: Vec<_> = list.iter_by_depth().into_iter().map(|(h, _)| h).collect();
        assert_eq!(order, vec![bottom, middle_a, middle_b, top]);
    }

    #[test]
    fn set_rect_width_keeps_position() {
        let mut list = DisplayList::new();
        let bar = list.create_rect(
            RectSpec::new(200.0, 340.0, 400.0, 16.0).with_origin(Origin::LEFT_CENTER),
        );

        assert!(list.set_rect_width(bar, 100.0));
        match list.get(bar) {
            Some(Visual::Rect(rect)) => {
                assert_eq!(rect.width, 100.0);
                assert_eq!((rect.x, rect.y), (200.0, 340.0));
            }
            other => panic!("expected rect, got {:?}", other),
        }
    }

    #[test]
    fn rect_only_mutations_reject_text() {
        let mut list = DisplayList::new();
        let text = list.create_text(TextSpec::new(0.0, 0.0, "label"));

        assert!(!list.set_rect_width(text, 5.0));
        assert!(!list.set_fill(text, Color::BLACK));
        assert!(list.set_text_color(text, Color::BLACK));
        assert!(list.set_text(text, "renamed"));
        assert!(list.set_position(text, 3.0, 4.0));
    }

    #[test]
    fn scroll_moves_only_world_elements() {
        let mut list = DisplayList::new();
        let world = list.create_rect(RectSpec::new(100.0, 100.0, 1.0, 1.0));
        let hud = list.create_text(TextSpec::new(100.0, 100.0, "hud").fixed());

        list.set_scroll(40.0, 10.0);
        assert_eq!(list.screen_position(world), Some((60.0, 90.0)));
        assert_eq!(list.screen_position(hud), Some((100.0, 100.0)));
    }

    #[test]
    fn expired_visuals_are_purged() {
        let mut list = DisplayList::new();
        let notice = list.create_text(TextSpec::new(0.0, 0.0, "Too slow! Try again."));
        let keep = list.create_rect(RectSpec::new(0.0, 0.0, 1.0, 1.0));

        assert!(list.destroy_at(notice, 1500));
        assert_eq!(list.purge_expired(1499), 0);
        assert!(list.contains(notice));

        assert_eq!(list.purge_expired(1500), 1);
        assert!(!list.contains(notice));
        assert!(list.contains(keep));
    }

    #[test]
    fn destroy_at_missing_handle_is_rejected() {
        let mut list = DisplayList::new();
        let handle = list.create_rect(RectSpec::new(0.0, 0.0, 1.0, 1.0));
        list.destroy(handle);
        assert!(!list.destroy_at(handle, 10));
    }
}
