//! Drawable frames as plain values
//!
//! The sim never touches pixels. A `Visual` names the loaded asset and the
//! transforms to apply when drawing it, so frames can be compared by value
//! and restored exactly after a spin.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Handle to an asset owned by the asset provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AssetId(pub u32);

/// A drawable frame: loaded asset plus mirror and rotation.
///
/// The display applies the mirror first, then rotates counter-clockwise
/// by `rotation` degrees around the frame center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Visual {
    pub asset: AssetId,
    /// Size of the asset as loaded (after provider scaling)
    pub base_size: IVec2,
    /// Mirrored left-to-right
    pub mirrored: bool,
    /// Counter-clockwise rotation in degrees, in [0, 360)
    pub rotation: u32,
}

impl Visual {
    pub fn new(asset: AssetId, base_size: IVec2) -> Self {
        Self {
            asset,
            base_size,
            mirrored: false,
            rotation: 0,
        }
    }

    /// Mirrored copy
    pub fn flipped(&self) -> Self {
        Self {
            mirrored: !self.mirrored,
            ..*self
        }
    }

    /// Copy rotated a further `degrees` counter-clockwise
    pub fn rotated(&self, degrees: u32) -> Self {
        Self {
            rotation: (self.rotation + degrees) % 360,
            ..*self
        }
    }

    /// Bounding size of the frame as drawn
    pub fn size(&self) -> IVec2 {
        rotated_bounds(self.base_size, self.rotation)
    }
}

/// Axis-aligned bounding size of a `size` box rotated by `degrees`.
///
/// Quarter turns are exact. Other angles truncate `w|cos| + h|sin|` (and
/// the matching height), the same box a rotozoom-style blit produces.
pub fn rotated_bounds(size: IVec2, degrees: u32) -> IVec2 {
    let degrees = degrees % 360;
    if degrees % 90 == 0 {
        return if (degrees / 90) % 2 == 1 {
            IVec2::new(size.y, size.x)
        } else {
            size
        };
    }

    let rad = (degrees as f64).to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let (w, h) = (size.x as f64, size.y as f64);
    IVec2::new((w * cos + h * sin) as i32, (w * sin + h * cos) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;

    #[test]
    fn test_quarter_turns_swap_axes() {
        let size = IVec2::new(200, 100);
        assert_eq!(rotated_bounds(size, 0), size);
        assert_eq!(rotated_bounds(size, 90), IVec2::new(100, 200));
        assert_eq!(rotated_bounds(size, 180), size);
        assert_eq!(rotated_bounds(size, 270), IVec2::new(100, 200));
        assert_eq!(rotated_bounds(size, 360), size);
    }

    #[test]
    fn test_diagonal_rotation_grows_bounds() {
        let size = IVec2::new(100, 100);
        let rotated = rotated_bounds(size, 45);
        // 100 * sqrt(2) ~= 141.4, truncated
        assert_eq!(rotated, IVec2::new(141, 141));
    }

    #[test]
    fn test_odd_rotated_size_keeps_center() {
        let size = IVec2::new(256, 240);
        // 256 cos 30 + 240 sin 30 ~= 341.7, 256 sin 30 + 240 cos 30 ~= 335.8
        assert_eq!(rotated_bounds(size, 30), IVec2::new(341, 335));

        let center = IVec2::new(138, 210);
        let rect = Rect::centered_at(center, rotated_bounds(size, 30));
        assert_eq!(rect.center(), center);
    }

    #[test]
    fn test_flip_toggles_and_keeps_size() {
        let v = Visual::new(AssetId(1), IVec2::new(64, 48));
        let f = v.flipped();
        assert!(f.mirrored);
        assert_eq!(f.size(), v.size());
        assert_eq!(f.flipped(), v);
    }

    #[test]
    fn test_rotation_wraps() {
        let v = Visual::new(AssetId(1), IVec2::new(64, 48)).rotated(348);
        assert_eq!(v.rotated(12).rotation, 0);
    }
}
