#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_possible_truncation)]
//! Test support for the Gantry layout compilers.
//!
//! Provides [`RecordingSession`], a deterministic [`SolverSession`] that
//! records every emitted row and can resolve a single variable against
//! pinned values, plus arena fixtures for building pinned-edge widgets.
//! It handles exactly the row shapes the compilers emit; it is not a
//! general simplex solver.
//!
//! [`SolverSession`]: gantry_core::SolverSession

mod fixture;
mod session;

pub use fixture::{pin_edge, pinned_box};
pub use session::{RecordingSession, Row};
