#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::uninlined_format_args)]
//! Constraint-emission compilers for the Gantry layout solver.
//!
//! This crate turns declarative layout helpers into prioritized linear
//! rows for a simplex-style solver. The only helper so far is [`Barrier`],
//! a virtual alignment guide positioned at the extreme edge of a set of
//! referenced widgets.

mod barrier;

pub use barrier::Barrier;
