#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
//! Core types for the Gantry layout compiler.
//!
//! This crate provides the foundational model shared by the constraint
//! compilers in `gantry-layout`:
//! - Orientation primitives: [`Side`], [`Axis`]
//! - The widget model: [`Widget`], [`Anchor`], [`Sizing`], [`Visibility`]
//! - Index-addressed storage: [`WidgetArena`], [`WidgetId`], [`AnchorRef`]
//! - The solver seam: [`SolverSession`], [`VariableId`], [`Strength`]
//!
//! Widgets and anchors live in an arena and point at each other through
//! plain indices, so the back-references a layout graph needs (anchor to
//! owner, widget to parent) never form reference cycles.

mod arena;
mod side;
mod solver;
mod widget;

pub use arena::{WidgetArena, WidgetId};
pub use side::{Axis, Side};
pub use solver::{SolverSession, Strength, VariableId};
pub use widget::{Anchor, AnchorRef, Sizing, Visibility, Widget};
