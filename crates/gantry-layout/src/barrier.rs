//! Barrier: a virtual alignment guide compiled into solver rows.
//!
//! A barrier is not a visible widget; it is a computed line (one of
//! left/top/right/bottom) positioned at the extreme edge of its referenced
//! widgets, offset by a margin. Left/top barriers bound their references
//! from below (the guide sits at or before the earliest edge), right/bottom
//! barriers from above. Compilation emits, per eligible reference, one
//! directional inequality and one equality pull, then collapses the
//! barrier's off-axis anchor pair and ties it loosely to the parent.

use gantry_core::{
    AnchorRef, Side, Sizing, SolverSession, Strength, WidgetArena, WidgetId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A virtual alignment guide over a set of referenced widgets.
///
/// A barrier owns a widget entry in the arena (all four anchors exist even
/// though only the `direction` one is semantically meaningful) plus the
/// configuration driving emission. It is reconfigured freely between solve
/// passes; [`Barrier::add_to_solver`] re-emits the full row set each pass
/// and keeps no state of its own across passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrier {
    widget: WidgetId,
    parent: WidgetId,
    direction: Side,
    allows_gone_widgets: bool,
    margin: i32,
    references: Vec<WidgetId>,
}

impl Barrier {
    /// Create a barrier, allocating its own widget entry in the arena.
    ///
    /// `parent` is the containing widget whose opposite edges the barrier
    /// is tied against.
    pub fn new(arena: &mut WidgetArena, parent: WidgetId) -> Self {
        Self {
            widget: arena.alloc(),
            parent,
            direction: Side::Left,
            allows_gone_widgets: true,
            margin: 0,
            references: Vec::new(),
        }
    }

    /// The barrier's own widget entry.
    #[must_use]
    pub fn widget(&self) -> WidgetId {
        self.widget
    }

    /// The parent container's widget entry.
    #[must_use]
    pub fn parent(&self) -> WidgetId {
        self.parent
    }

    /// Which of the barrier's own anchors defines its position.
    #[must_use]
    pub fn direction(&self) -> Side {
        self.direction
    }

    /// Set the barrier direction.
    pub fn set_direction(&mut self, direction: Side) {
        self.direction = direction;
    }

    /// Whether gone widgets still contribute to the barrier's position.
    #[must_use]
    pub fn allows_gone_widgets(&self) -> bool {
        self.allows_gone_widgets
    }

    /// Set the gone-widget policy.
    pub fn set_allows_gone_widgets(&mut self, allows: bool) {
        self.allows_gone_widgets = allows;
    }

    /// The barrier's margin from the extreme referenced edge.
    #[must_use]
    pub fn margin(&self) -> i32 {
        self.margin
    }

    /// Set the barrier margin.
    pub fn set_margin(&mut self, margin: i32) {
        self.margin = margin;
    }

    /// The referenced widgets, in insertion order.
    #[must_use]
    pub fn references(&self) -> &[WidgetId] {
        &self.references
    }

    /// Append a referenced widget.
    pub fn add_reference(&mut self, widget: WidgetId) {
        self.references.push(widget);
    }

    /// Remove every occurrence of a referenced widget.
    pub fn remove_reference(&mut self, widget: WidgetId) {
        self.references.retain(|&id| id != widget);
    }

    /// Replace the whole reference list.
    pub fn set_references(&mut self, references: Vec<WidgetId>) {
        self.references = references;
    }

    /// Drop all references.
    pub fn clear_references(&mut self) {
        self.references.clear();
    }

    /// Copy `direction`, gone-policy and margin from another barrier.
    ///
    /// Used when duplicating a layout subtree: the reference list is
    /// remapped through the old-to-new widget mapping by the caller, not
    /// here.
    pub fn copy_config_from(&mut self, src: &Self) {
        self.direction = src.direction;
        self.allows_gone_widgets = src.allows_gone_widgets;
        self.margin = src.margin;
    }

    /// Tag every referenced widget as participating in this barrier's axis.
    ///
    /// The sizing pass reads the flag to change how a match-constraint
    /// widget's extent is computed. Applied to all references, before and
    /// regardless of the gone filter used during emission.
    pub fn mark_widgets(&self, arena: &mut WidgetArena) {
        let axis = self.direction.axis();
        for &id in &self.references {
            arena.widget_mut(id).set_in_barrier(axis, true);
        }
    }

    fn is_eligible(&self, arena: &WidgetArena, id: WidgetId) -> bool {
        self.allows_gone_widgets || arena.widget(id).allowed_in_barrier()
    }

    /// Whether any eligible reference has solver-ambiguous sizing on the
    /// barrier's axis: match-constraint with both axis anchors already
    /// targeted, so its extent is solver-determined. Short-circuits on the
    /// first match.
    fn has_match_constraint_references(&self, arena: &WidgetArena) -> bool {
        let axis = self.direction.axis();
        let (lead, trail) = axis.sides();
        self.references.iter().any(|&id| {
            if !self.is_eligible(arena, id) {
                return false;
            }
            let widget = arena.widget(id);
            widget.sizing(axis) == Sizing::MatchConstraint
                && widget.anchor(lead).is_connected()
                && widget.anchor(trail).is_connected()
        })
    }

    /// Whether any other widget is centered against the barrier's own
    /// axis anchor pair.
    fn has_centered_dependents(&self, arena: &WidgetArena) -> bool {
        let (lead, trail) = self.direction.axis().sides();
        arena.has_centered_dependents(AnchorRef::new(self.widget, lead))
            || arena.has_centered_dependents(AnchorRef::new(self.widget, trail))
    }

    /// Compile this barrier into solver rows. Called once per solve pass.
    ///
    /// Sequence: tag reference axes, create the barrier's own variables,
    /// classify the pass (ambiguous sizing, centered dependents), emit one
    /// directional bound plus one equality pull per eligible reference,
    /// then the self rows: the off-axis anchor pair is collapsed at
    /// [`Strength::Fixed`], and the barrier is tied to the parent edge
    /// opposite its direction at [`Strength::Highest`] (pressing it against
    /// its directional bounds, so it rests exactly at the extreme
    /// referenced edge) and to the same-side parent edge at
    /// [`Strength::None`] as a costless placeholder.
    pub fn add_to_solver(&self, arena: &mut WidgetArena, session: &mut dyn SolverSession) {
        self.mark_widgets(arena);

        for side in Side::ALL {
            session.variable(AnchorRef::new(self.widget, side));
        }
        let position = session.variable(AnchorRef::new(self.widget, self.direction));

        let has_match = self.has_match_constraint_references(arena);
        let apply_equality = !has_match && self.has_centered_dependents(arena);
        let equality_strength = if apply_equality {
            Strength::Equality
        } else {
            // A reference whose size is still being solved makes an exact
            // equality too rigid; keep the pull strong but relaxable.
            Strength::Highest
        };

        for &id in &self.references {
            if !self.is_eligible(arena, id) {
                continue;
            }
            let anchor = AnchorRef::new(id, self.direction);
            let target = session.variable(anchor);
            // Count the widget's own margin only when it already targets
            // this barrier; otherwise the author declared it toward
            // something else and adding it here would double-count.
            let widget_margin = match arena.anchor(anchor).target {
                Some(target_anchor) if target_anchor.widget == self.widget => {
                    arena.anchor(anchor).margin
                }
                _ => 0,
            };
            if self.direction.is_lead() {
                session.add_lower_barrier(position, target, self.margin - widget_margin, has_match);
            } else {
                session.add_greater_barrier(position, target, self.margin + widget_margin, has_match);
            }
            session.add_equality(position, target, self.margin + widget_margin, equality_strength);
        }

        let lead = self.direction.axis().lead_side();
        let own_opposite = session.variable(AnchorRef::new(self.widget, self.direction.opposite()));
        let own_lead = session.variable(AnchorRef::new(self.widget, lead));
        let parent_far = session.variable(AnchorRef::new(self.parent, self.direction.opposite()));
        let parent_near = session.variable(AnchorRef::new(self.parent, self.direction));

        session.add_equality(own_opposite, position, 0, Strength::Fixed);
        session.add_equality(own_lead, parent_far, 0, Strength::Highest);
        session.add_equality(own_lead, parent_near, 0, Strength::None);
    }
}

impl fmt::Display for Barrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Barrier {:?}] {{", self.direction)?;
        for (i, id) in self.references.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "#{}", id.0)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::Axis;

    #[test]
    fn test_barrier_defaults() {
        let mut arena = WidgetArena::new();
        let parent = arena.alloc();
        let barrier = Barrier::new(&mut arena, parent);
        assert_eq!(barrier.direction(), Side::Left);
        assert!(barrier.allows_gone_widgets());
        assert_eq!(barrier.margin(), 0);
        assert!(barrier.references().is_empty());
        assert_eq!(barrier.parent(), parent);
        // The barrier's own widget entry exists with all four anchors.
        assert!(arena.get(barrier.widget()).is_some());
    }

    #[test]
    fn test_reference_list_mutation() {
        let mut arena = WidgetArena::new();
        let parent = arena.alloc();
        let a = arena.alloc();
        let b = arena.alloc();
        let mut barrier = Barrier::new(&mut arena, parent);
        barrier.add_reference(a);
        barrier.add_reference(b);
        barrier.add_reference(a);
        assert_eq!(barrier.references(), &[a, b, a]);
        barrier.remove_reference(a);
        assert_eq!(barrier.references(), &[b]);
        barrier.set_references(vec![a]);
        assert_eq!(barrier.references(), &[a]);
        barrier.clear_references();
        assert!(barrier.references().is_empty());
    }

    #[test]
    fn test_copy_config_from() {
        let mut arena = WidgetArena::new();
        let parent = arena.alloc();
        let widget = arena.alloc();
        let mut src = Barrier::new(&mut arena, parent);
        src.set_direction(Side::Bottom);
        src.set_allows_gone_widgets(false);
        src.set_margin(42);
        src.add_reference(widget);

        let mut dst = Barrier::new(&mut arena, parent);
        dst.copy_config_from(&src);
        assert_eq!(dst.direction(), Side::Bottom);
        assert!(!dst.allows_gone_widgets());
        assert_eq!(dst.margin(), 42);
        // The reference list is remapped by the caller, never copied here.
        assert!(dst.references().is_empty());
        assert_ne!(dst.widget(), src.widget());
    }

    #[test]
    fn test_mark_widgets_tags_axis() {
        let mut arena = WidgetArena::new();
        let parent = arena.alloc();
        let a = arena.alloc();
        let b = arena.alloc();
        let mut barrier = Barrier::new(&mut arena, parent);
        barrier.set_direction(Side::Bottom);
        barrier.set_references(vec![a, b]);
        barrier.mark_widgets(&mut arena);
        for id in [a, b] {
            assert!(arena.widget(id).is_in_barrier(Axis::Vertical));
            assert!(!arena.widget(id).is_in_barrier(Axis::Horizontal));
        }
    }

    #[test]
    fn test_display_lists_references() {
        let mut arena = WidgetArena::new();
        let parent = arena.alloc();
        let a = arena.alloc();
        let b = arena.alloc();
        let mut barrier = Barrier::new(&mut arena, parent);
        barrier.set_direction(Side::Right);
        barrier.set_references(vec![a, b]);
        assert_eq!(barrier.to_string(), format!("[Barrier Right] {{#{}, #{}}}", a.0, b.0));
    }
}
