//! The player's fist
//!
//! Follows the pointer at a fixed offset and strikes while the button is
//! held. A strike can only start from the released state.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::visual::Visual;
use crate::settings::Tuning;

/// Cursor entity that follows the pointer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fist {
    pub visual: Visual,
    pub rect: Rect,
    /// Sprite offset from the pointer position
    pub offset: IVec2,
    /// Extra translation while pressed (recoil/thrust)
    pub nudge: IVec2,
    /// Per-axis shrink applied to the hitbox
    pub hitbox_shrink: i32,
    /// Button held down
    pub pressed: bool,
}

impl Fist {
    pub fn new(visual: Visual, rect: Rect, tuning: &Tuning) -> Self {
        Self {
            visual,
            rect,
            offset: tuning.fist_offset,
            nudge: tuning.punch_nudge,
            hitbox_shrink: tuning.hitbox_shrink,
            pressed: false,
        }
    }

    /// Move to the pointer (plus offset, plus nudge while pressed)
    pub fn advance(&mut self, pointer: IVec2) {
        self.rect.set_topleft(pointer + self.offset);
        if self.pressed {
            self.rect.move_ip(self.nudge.x, self.nudge.y);
        }
    }

    /// Start a strike. Returns true if the shrunken hitbox lands on `target`.
    ///
    /// While already pressed this is a miss with no side effects.
    pub fn strike(&mut self, target: &Rect) -> bool {
        if self.pressed {
            return false;
        }
        self.pressed = true;
        self.hitbox().intersects(target)
    }

    /// Pull the fist back
    pub fn release(&mut self) {
        self.pressed = false;
    }

    /// Current strike zone
    pub fn hitbox(&self) -> Rect {
        self.rect.inflate(-self.hitbox_shrink, -self.hitbox_shrink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::visual::AssetId;
    use proptest::prelude::*;

    fn fist() -> Fist {
        let size = IVec2::new(88, 96);
        Fist::new(
            Visual::new(AssetId(2), size),
            Rect::from_topleft(IVec2::ZERO, size),
            &Tuning::default(),
        )
    }

    /// Pointer such that the fist rect sits exactly on `topleft`
    fn pointer_for(topleft: IVec2) -> IVec2 {
        topleft - FIST_OFFSET
    }

    #[test]
    fn test_advance_follows_pointer_with_offset() {
        let mut f = fist();
        f.advance(IVec2::new(400, 200));
        assert_eq!(f.rect.topleft(), IVec2::new(165, 120));
        assert_eq!(f.rect.size(), IVec2::new(88, 96));
    }

    #[test]
    fn test_advance_nudges_while_pressed() {
        let mut f = fist();
        f.pressed = true;
        f.advance(IVec2::new(400, 200));
        assert_eq!(f.rect.topleft(), IVec2::new(180, 145));
    }

    #[test]
    fn test_strike_release_strike_scenario() {
        let target = Rect::new(300, 100, 200, 150);
        let mut f = fist();
        f.advance(pointer_for(IVec2::new(320, 120)));

        assert!(f.strike(&target));
        assert!(f.pressed);
        // Still held: no new strike
        assert!(!f.strike(&target));

        f.release();
        assert!(!f.pressed);
        assert!(f.strike(&target));
    }

    #[test]
    fn test_corner_graze_misses() {
        // Fist overlaps the target by 2px on each axis; the shrunken
        // hitbox pulls back by 2px so they no longer overlap.
        let target = Rect::new(300, 300, 100, 100);
        let mut f = fist();
        let size = f.rect.size();
        f.advance(pointer_for(IVec2::new(302 - size.x, 302 - size.y)));
        assert!(f.rect.intersects(&target));
        assert!(!f.strike(&target));
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut f = fist();
        f.release();
        f.release();
        assert!(!f.pressed);
    }

    proptest! {
        #[test]
        fn prop_advance_tracks_pointer(x in -2000i32..2000, y in -2000i32..2000, pressed in any::<bool>()) {
            let mut f = fist();
            f.pressed = pressed;
            let pointer = IVec2::new(x, y);
            f.advance(pointer);
            let expected = pointer + FIST_OFFSET + if pressed { PUNCH_NUDGE } else { IVec2::ZERO };
            prop_assert_eq!(f.rect.topleft(), expected);
        }

        #[test]
        fn prop_no_strike_while_pressed(x in -500i32..1500, y in -500i32..900) {
            let mut f = fist();
            f.advance(IVec2::new(x, y));
            f.pressed = true;
            let target = Rect::new(0, 0, 1280, 480);
            prop_assert!(!f.strike(&target));
            prop_assert!(f.pressed);
        }
    }
}
