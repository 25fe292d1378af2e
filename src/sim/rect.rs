//! Axis-aligned integer rectangles
//!
//! Screen-space, y grows downward. All operations are by value: a `Rect` is
//! `Copy` and never aliases another entity's bounds.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle for placement and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect with the given top-left corner and size
    pub fn from_topleft(topleft: IVec2, size: IVec2) -> Self {
        Self::new(topleft.x, topleft.y, size.x, size.y)
    }

    /// Rect of `size` whose center lands on `center`
    pub fn centered_at(center: IVec2, size: IVec2) -> Self {
        Self::new(center.x - size.x / 2, center.y - size.y / 2, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn topleft(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn set_topleft(&mut self, topleft: IVec2) {
        self.x = topleft.x;
        self.y = topleft.y;
    }

    /// Translated copy
    pub fn moved(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Translate in place
    pub fn move_ip(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Grow (or shrink, for negative deltas) around the center.
    ///
    /// The top-left shifts by `-delta / 2` truncated toward zero, so odd
    /// shrinks keep one extra pixel on the right/bottom.
    pub fn inflate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x - dx / 2, self.y - dy / 2, self.w + dx, self.h + dy)
    }

    fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True if `other` lies entirely within `self`
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
            && other.right() > self.x
            && other.bottom() > self.y
    }

    /// True if the two rects overlap by at least one pixel.
    /// Touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && self.y < other.bottom()
            && self.right() > other.x
            && self.bottom() > other.y
    }

    /// True if the rect pokes out past the left or right edge of `area`
    pub fn breaches_horizontally(&self, area: &Rect) -> bool {
        self.left() < area.left() || self.right() > area.right()
    }

    /// True if the rect pokes out past the top or bottom edge of `area`
    pub fn breaches_vertically(&self, area: &Rect) -> bool {
        self.top() < area.top() || self.bottom() > area.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inflate_negative_shrinks_around_center() {
        let r = Rect::new(100, 100, 50, 40);
        let shrunk = r.inflate(-5, -5);
        assert_eq!(shrunk, Rect::new(102, 102, 45, 35));
        assert!(r.contains(&shrunk));
    }

    #[test]
    fn test_contains_requires_full_overlap() {
        let area = Rect::new(0, 0, 1280, 480);
        assert!(area.contains(&Rect::new(0, 0, 1280, 480)));
        assert!(area.contains(&Rect::new(10, 90, 200, 100)));
        assert!(!area.contains(&Rect::new(1100, 90, 200, 100)));
        assert!(!area.contains(&Rect::new(-1, 90, 200, 100)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&b.moved(-1, 0)));
    }

    #[test]
    fn test_empty_rect_never_intersects() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(2, 2, 0, 5)));
    }

    #[test]
    fn test_centered_at_round_trips_center() {
        let r = Rect::centered_at(IVec2::new(50, 60), IVec2::new(21, 10));
        assert_eq!(r.center(), IVec2::new(50, 60));
    }

    #[test]
    fn test_breach_directions() {
        let area = Rect::new(0, 0, 100, 100);
        let r = Rect::new(95, 10, 10, 10);
        assert!(r.breaches_horizontally(&area));
        assert!(!r.breaches_vertically(&area));
    }
}
