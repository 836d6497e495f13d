//! Orientation primitives: [`Side`] and [`Axis`].

use serde::{Deserialize, Serialize};

/// One edge of a widget or guide.
///
/// The discriminants index the fixed four-anchor array carried by every
/// widget, so orientation logic is table-driven rather than branched per
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Side {
    /// Left edge
    #[default]
    Left,
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
}

impl Side {
    /// All four sides in anchor-array order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Position of this side in a widget's anchor array.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 3,
        }
    }

    /// The mirrored side on the same axis.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// The axis this side lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
        }
    }

    /// Whether this side bounds its axis from below (left/top) rather than
    /// from above (right/bottom).
    #[must_use]
    pub const fn is_lead(self) -> bool {
        matches!(self, Self::Left | Self::Top)
    }
}

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    /// Left-to-right axis
    #[default]
    Horizontal,
    /// Top-to-bottom axis
    Vertical,
}

impl Axis {
    /// Position of this axis in per-axis flag arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }

    /// The side that starts this axis (left or top).
    #[must_use]
    pub const fn lead_side(self) -> Side {
        match self {
            Self::Horizontal => Side::Left,
            Self::Vertical => Side::Top,
        }
    }

    /// Both sides of this axis as (lead, trail).
    #[must_use]
    pub const fn sides(self) -> (Side, Side) {
        let lead = self.lead_side();
        (lead, lead.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite_is_involution() {
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_side_axis() {
        assert_eq!(Side::Left.axis(), Axis::Horizontal);
        assert_eq!(Side::Right.axis(), Axis::Horizontal);
        assert_eq!(Side::Top.axis(), Axis::Vertical);
        assert_eq!(Side::Bottom.axis(), Axis::Vertical);
    }

    #[test]
    fn test_side_index_matches_all_order() {
        for (i, side) in Side::ALL.iter().enumerate() {
            assert_eq!(side.index(), i);
        }
    }

    #[test]
    fn test_axis_sides() {
        assert_eq!(Axis::Horizontal.sides(), (Side::Left, Side::Right));
        assert_eq!(Axis::Vertical.sides(), (Side::Top, Side::Bottom));
    }

    #[test]
    fn test_lead_sides() {
        assert!(Side::Left.is_lead());
        assert!(Side::Top.is_lead());
        assert!(!Side::Right.is_lead());
        assert!(!Side::Bottom.is_lead());
    }
}
