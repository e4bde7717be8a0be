//! Touch coordinate transform

/// Axis transform applied to raw touch coordinates
///
/// Applied in a fixed order: swap, then mirror X, then mirror Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub swap_xy: bool,
    pub mirror_x: bool,
    pub mirror_y: bool,
}

const SWAP_XY: u8 = 1 << 0;
const MIRROR_X: u8 = 1 << 1;
const MIRROR_Y: u8 = 1 << 2;

/// Mask of the transform bits in [`Transform::to_bits`]
pub const TRANSFORM_MASK: u8 = SWAP_XY | MIRROR_X | MIRROR_Y;

impl Transform {
    pub const IDENTITY: Self = Self {
        swap_xy: false,
        mirror_x: false,
        mirror_y: false,
    };

    pub const fn new(swap_xy: bool, mirror_x: bool, mirror_y: bool) -> Self {
        Self {
            swap_xy,
            mirror_x,
            mirror_y,
        }
    }

    /// Pack into the low three bits of a byte
    pub const fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.swap_xy {
            bits |= SWAP_XY;
        }
        if self.mirror_x {
            bits |= MIRROR_X;
        }
        if self.mirror_y {
            bits |= MIRROR_Y;
        }
        bits
    }

    /// Unpack from [`Transform::to_bits`]; other bits are ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            swap_xy: bits & SWAP_XY != 0,
            mirror_x: bits & MIRROR_X != 0,
            mirror_y: bits & MIRROR_Y != 0,
        }
    }

    /// Map a raw coordinate into screen space bounded by `x_max` x `y_max`
    ///
    /// Mirroring saturates at 0 for coordinates outside the bounds.
    pub fn apply(self, x: u16, y: u16, x_max: u16, y_max: u16) -> (u16, u16) {
        let (mut x, mut y) = if self.swap_xy { (y, x) } else { (x, y) };
        if self.mirror_x {
            x = x_max.saturating_sub(1).saturating_sub(x);
        }
        if self.mirror_y {
            y = y_max.saturating_sub(1).saturating_sub(y);
        }
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_swap_then_mirror_x() {
        let t = Transform::new(true, true, false);
        assert_eq!(t.apply(100, 50, 452, 1280), (401, 100));
    }

    #[test]
    fn test_mirror_y() {
        let t = Transform::new(false, false, true);
        assert_eq!(t.apply(10, 0, 452, 1280), (10, 1279));
    }

    #[test]
    fn test_identity() {
        assert_eq!(Transform::IDENTITY.apply(451, 1279, 452, 1280), (451, 1279));
    }

    #[test]
    fn test_out_of_range_saturates() {
        let t = Transform::new(false, true, false);
        assert_eq!(t.apply(500, 0, 452, 1280), (0, 0));
    }

    #[test]
    fn test_bits_roundtrip() {
        for bits in 0..=TRANSFORM_MASK {
            assert_eq!(Transform::from_bits(bits).to_bits(), bits);
        }
        assert_eq!(Transform::from_bits(0xF8), Transform::IDENTITY);
    }

    proptest! {
        #[test]
        fn test_mirror_is_involution(
            x in 0u16..452,
            y in 0u16..1280,
            mx in any::<bool>(),
            my in any::<bool>(),
        ) {
            let t = Transform::new(false, mx, my);
            let (x1, y1) = t.apply(x, y, 452, 1280);
            prop_assert_eq!(t.apply(x1, y1, 452, 1280), (x, y));
        }

        #[test]
        fn test_result_stays_in_bounds(
            x in 0u16..1280,
            y in 0u16..1280,
            swap in any::<bool>(),
            mx in any::<bool>(),
            my in any::<bool>(),
        ) {
            let t = Transform::new(swap, mx, my);
            let (x1, y1) = t.apply(x, y, 1280, 1280);
            prop_assert!(x1 < 1280 && y1 < 1280);
        }
    }
}
