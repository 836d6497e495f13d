//! Index-addressed widget storage.

use crate::side::Side;
use crate::widget::{Anchor, AnchorRef, Widget};
use serde::{Deserialize, Serialize};

/// Index of a widget in a [`WidgetArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(pub usize);

impl WidgetId {
    /// Create a widget id.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }
}

/// Arena holding every widget of one layout tree.
///
/// Widgets address each other through [`WidgetId`] and [`AnchorRef`]
/// indices, never through references, so the anchor-to-owner and
/// guide-to-parent back-edges cannot form ownership cycles.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct WidgetArena {
    widgets: Vec<Widget>,
}

impl WidgetArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a widget with default state, returning its id.
    pub fn alloc(&mut self) -> WidgetId {
        let id = WidgetId::new(self.widgets.len());
        self.widgets.push(Widget::new());
        id
    }

    /// Number of widgets in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the arena holds no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The widget with the given id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[must_use]
    pub fn widget(&self, id: WidgetId) -> &Widget {
        &self.widgets[id.0]
    }

    /// Mutable access to the widget with the given id.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    pub fn widget_mut(&mut self, id: WidgetId) -> &mut Widget {
        &mut self.widgets[id.0]
    }

    /// Checked access to a widget.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id.0)
    }

    /// The anchor identified by `anchor`.
    #[must_use]
    pub fn anchor(&self, anchor: AnchorRef) -> &Anchor {
        self.widget(anchor.widget).anchor(anchor.side)
    }

    /// Mutable access to the anchor identified by `anchor`.
    pub fn anchor_mut(&mut self, anchor: AnchorRef) -> &mut Anchor {
        self.widget_mut(anchor.widget).anchor_mut(anchor.side)
    }

    /// Constrain `from` against `to` with the given margin.
    pub fn connect(&mut self, from: AnchorRef, to: AnchorRef, margin: i32) {
        let anchor = self.anchor_mut(from);
        anchor.target = Some(to);
        anchor.margin = margin;
    }

    /// Whether any widget is centered against the given anchor: some anchor
    /// targets it while the owning widget's opposite anchor on the same axis
    /// is also connected, pinning the widget on both sides rather than to
    /// one edge alone.
    #[must_use]
    pub fn has_centered_dependents(&self, anchor: AnchorRef) -> bool {
        self.widgets.iter().enumerate().any(|(index, widget)| {
            if index == anchor.widget.0 {
                return false;
            }
            Side::ALL.iter().any(|&side| {
                widget.anchor(side).target == Some(anchor)
                    && widget.anchor(side.opposite()).is_connected()
            })
        })
    }
}
