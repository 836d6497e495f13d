//! Widget model: anchors, sizing modes, visibility.

use crate::arena::WidgetId;
use crate::side::{Axis, Side};
use serde::{Deserialize, Serialize};

/// How a widget's extent on one axis is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sizing {
    /// Extent is fixed by the author.
    #[default]
    Fixed,
    /// Extent is the content's intrinsic size.
    WrapContent,
    /// Extent is computed by the solver from the widget's two opposing
    /// anchors.
    MatchConstraint,
}

/// Whether a widget participates in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    /// Laid out and painted.
    #[default]
    Visible,
    /// Laid out but not painted.
    Invisible,
    /// Excluded from layout entirely.
    Gone,
}

/// Identity of one anchor: a widget index plus a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnchorRef {
    /// Owning widget
    pub widget: WidgetId,
    /// Which edge of the owning widget
    pub side: Side,
}

impl AnchorRef {
    /// Create an anchor reference.
    #[must_use]
    pub const fn new(widget: WidgetId, side: Side) -> Self {
        Self { widget, side }
    }
}

/// One edge of a widget.
///
/// An anchor may target another anchor, with a signed margin between them.
/// Solver variables are not stored here; they live in the solve session,
/// keyed by [`AnchorRef`], so a fresh session starts from a clean table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchor {
    /// The anchor this one is constrained against, if any.
    pub target: Option<AnchorRef>,
    /// Signed offset from the target.
    pub margin: i32,
}

impl Anchor {
    /// Whether this anchor is constrained against a target.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.target.is_some()
    }
}

/// A layout participant: four anchors, per-axis sizing, visibility, and
/// per-axis guide-participation flags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Widget {
    anchors: [Anchor; 4],
    sizing: [Sizing; 2],
    visibility: Visibility,
    in_barrier: [bool; 2],
}

impl Widget {
    /// Create a widget with disconnected anchors and default sizing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The anchor on the given side.
    #[must_use]
    pub fn anchor(&self, side: Side) -> &Anchor {
        &self.anchors[side.index()]
    }

    /// Mutable access to the anchor on the given side.
    pub fn anchor_mut(&mut self, side: Side) -> &mut Anchor {
        &mut self.anchors[side.index()]
    }

    /// The sizing mode on the given axis.
    #[must_use]
    pub fn sizing(&self, axis: Axis) -> Sizing {
        self.sizing[axis.index()]
    }

    /// Set the sizing mode on the given axis.
    pub fn set_sizing(&mut self, axis: Axis, sizing: Sizing) {
        self.sizing[axis.index()] = sizing;
    }

    /// Current visibility.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Set visibility.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Whether this widget may contribute to a barrier's position.
    /// Gone widgets are eligible only when the barrier opts in.
    #[must_use]
    pub fn allowed_in_barrier(&self) -> bool {
        self.visibility != Visibility::Gone
    }

    /// Whether this widget has been tagged as a barrier reference on the
    /// given axis. Consumed by the sizing pass.
    #[must_use]
    pub fn is_in_barrier(&self, axis: Axis) -> bool {
        self.in_barrier[axis.index()]
    }

    /// Tag or untag this widget as a barrier reference on the given axis.
    pub fn set_in_barrier(&mut self, axis: Axis, in_barrier: bool) {
        self.in_barrier[axis.index()] = in_barrier;
    }
}
