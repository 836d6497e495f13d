//! The seam to the external linear-arithmetic solver.
//!
//! The constraint compilers in `gantry-layout` never talk to a concrete
//! solver; they emit rows through [`SolverSession`]. A session owns the
//! anchor-to-variable table for one solve pass, which keeps repeated passes
//! isolated: a fresh session starts with an empty table.

use crate::widget::AnchorRef;
use serde::{Deserialize, Serialize};

/// Opaque handle to a solver variable, valid for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableId(pub usize);

impl VariableId {
    /// Create a variable id.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }
}

/// Relative weight of a constraint row.
///
/// Under infeasibility the solver relaxes weaker rows first; `Fixed` rows
/// are never relaxed. Ordering: `None < Highest < Equality < Fixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Strength {
    /// Costs nothing to violate; a placeholder relation.
    None,
    /// Very strong but still relaxable.
    Highest,
    /// Stronger than `Highest`; used for exact-position pulls.
    Equality,
    /// Unbreakable.
    Fixed,
}

/// One solve pass of the external linear solver.
///
/// Exactly the four operations the barrier compiler needs. Offsets are
/// constants on the right-hand side: an equality row reads `a = b + offset`,
/// a lower row `a <= b + offset`, a greater row `a >= b + offset`. The
/// `ambiguous_sizing` flag on the inequality rows tells the row builder that
/// some referenced widget's size is itself solver-determined, so the row
/// should be encoded with slack rather than rigidly.
pub trait SolverSession {
    /// Create-or-reuse the variable for an anchor. Idempotent within one
    /// session: the same anchor always yields the same variable.
    fn variable(&mut self, anchor: AnchorRef) -> VariableId;

    /// Add `a <= b + offset`.
    fn add_lower_barrier(&mut self, a: VariableId, b: VariableId, offset: i32, ambiguous_sizing: bool);

    /// Add `a >= b + offset`.
    fn add_greater_barrier(&mut self, a: VariableId, b: VariableId, offset: i32, ambiguous_sizing: bool);

    /// Add `a = b + offset` at the given strength.
    fn add_equality(&mut self, a: VariableId, b: VariableId, offset: i32, strength: Strength);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_ordering() {
        assert!(Strength::None < Strength::Highest);
        assert!(Strength::Highest < Strength::Equality);
        assert!(Strength::Equality < Strength::Fixed);
    }
}
