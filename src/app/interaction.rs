//! Hit-area registry for mouse interaction.
//!
//! The keypad registers one clickable region per button while rendering, and
//! the event loop queries the registry to translate a mouse click into a
//! calculator action. The registry is cleared at the start of every render
//! cycle so stale regions never outlive a layout change.

use crate::calc::Action;
use ratatui::layout::Rect;

/// A clickable region with the action it dispatches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: Action,
}

impl HitArea {
    pub fn new(rect: Rect, action: Action) -> Self {
        Self { rect, action }
    }

    /// Check if a point falls within this region.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self { areas: Vec::new() }
    }

    /// Drop all registered regions. Call at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: Action) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Find the topmost region containing the point. Later registrations
    /// win for overlapping regions.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitArea> {
        self.areas.iter().rev().find(|a| a.contains(x, y)).copied()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Operation;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), Action::Clear);

        assert!(area.contains(10, 10)); // Top-left corner
        assert!(area.contains(29, 19)); // Bottom-right corner (exclusive bounds)
        assert!(area.contains(20, 15)); // Center

        assert!(!area.contains(9, 10)); // Left of area
        assert!(!area.contains(30, 10)); // Right of area
        assert!(!area.contains(10, 20)); // Below area
        assert!(!area.contains(0, 0));
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), Action::Clear);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_basic() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), Action::AddDigit('7'));
        registry.register(make_rect(20, 0, 10, 10), Action::Evaluate);

        assert_eq!(
            registry.hit_test(5, 5).map(|a| a.action),
            Some(Action::AddDigit('7'))
        );
        assert_eq!(
            registry.hit_test(25, 5).map(|a| a.action),
            Some(Action::Evaluate)
        );
        assert_eq!(registry.hit_test(15, 5), None);
        assert_eq!(registry.hit_test(100, 100), None);
    }

    #[test]
    fn test_hit_test_overlapping_areas() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 20, 20), Action::Clear);
        registry.register(
            make_rect(5, 5, 10, 10),
            Action::ChooseOperation(Operation::Add),
        );

        // Later registrations are on top.
        assert_eq!(
            registry.hit_test(10, 10).map(|a| a.action),
            Some(Action::ChooseOperation(Operation::Add))
        );
        assert_eq!(registry.hit_test(2, 2).map(|a| a.action), Some(Action::Clear));
    }

    #[test]
    fn test_registry_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 10, 10), Action::DeleteDigit);
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(5, 5), None);
    }
}
