//! A recording solver session with reference resolution.

use gantry_core::{AnchorRef, SolverSession, Strength, VariableId};
use std::collections::HashMap;

/// One recorded constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// `a <= b + offset`
    Lower {
        /// Bounded variable
        a: VariableId,
        /// Bounding variable
        b: VariableId,
        /// Constant offset
        offset: i32,
        /// Ambiguous-sizing flag passed through by the compiler
        ambiguous_sizing: bool,
    },
    /// `a >= b + offset`
    Greater {
        /// Bounded variable
        a: VariableId,
        /// Bounding variable
        b: VariableId,
        /// Constant offset
        offset: i32,
        /// Ambiguous-sizing flag passed through by the compiler
        ambiguous_sizing: bool,
    },
    /// `a = b + offset` at a strength
    Equality {
        /// Left-hand variable
        a: VariableId,
        /// Right-hand variable
        b: VariableId,
        /// Constant offset
        offset: i32,
        /// Row strength
        strength: Strength,
    },
}

/// Deterministic [`SolverSession`] for tests.
///
/// Variables are allocated in first-seen order and reused per anchor, so a
/// pass over the same tree always yields the same variable set. Every row
/// is recorded verbatim for structural assertions. [`RecordingSession::pin`]
/// fixes a variable's value (modeling widget edges already resolved by the
/// wider system), and [`RecordingSession::resolve`] computes the value of
/// one unknown variable from the recorded rows.
///
/// Resolution is intentionally narrow: `Fixed` equalities merge variables
/// (offset-carrying union-find), inequality rows against pinned operands
/// form a hard feasible interval (the ambiguous-sizing flag is recorded but
/// does not soften bounds here), and weaker equalities contribute
/// priority-weighted pulls; the result is the pull target or interval
/// endpoint of minimum weighted L1 cost, smallest value on ties.
#[derive(Debug, Default)]
pub struct RecordingSession {
    anchors: Vec<AnchorRef>,
    table: HashMap<AnchorRef, VariableId>,
    rows: Vec<Row>,
    pinned: HashMap<VariableId, i64>,
}

impl RecordingSession {
    /// Create an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded row, in emission order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Every anchor a variable was created for, in creation order.
    #[must_use]
    pub fn anchors(&self) -> &[AnchorRef] {
        &self.anchors
    }

    /// Number of variables created so far.
    #[must_use]
    pub fn variable_count(&self) -> usize {
        self.anchors.len()
    }

    /// The variable already created for an anchor, if any.
    #[must_use]
    pub fn variable_for(&self, anchor: AnchorRef) -> Option<VariableId> {
        self.table.get(&anchor).copied()
    }

    /// Fix an anchor's variable to a value, creating the variable if
    /// needed.
    pub fn pin(&mut self, anchor: AnchorRef, value: i32) -> VariableId {
        let var = self.variable(anchor);
        self.pinned.insert(var, i64::from(value));
        var
    }

    /// Resolve the variable for an anchor, if one was created.
    #[must_use]
    pub fn resolve_anchor(&self, anchor: AnchorRef) -> Option<i32> {
        self.variable_for(anchor).and_then(|var| self.resolve(var))
    }

    /// Resolve a single variable against the recorded rows and pins.
    #[must_use]
    pub fn resolve(&self, var: VariableId) -> Option<i32> {
        let n = self.anchors.len();
        if var.0 >= n {
            return None;
        }
        let mut parent: Vec<usize> = (0..n).collect();
        let mut offset = vec![0_i64; n];

        for row in &self.rows {
            if let Row::Equality {
                a,
                b,
                offset: off,
                strength: Strength::Fixed,
            } = *row
            {
                union(&mut parent, &mut offset, a.0, b.0, i64::from(off));
            }
        }

        let mut root_value: HashMap<usize, i64> = HashMap::new();
        for (&pinned_var, &value) in &self.pinned {
            let (root, delta) = find(&mut parent, &mut offset, pinned_var.0);
            root_value.insert(root, value - delta);
        }

        let (target_root, target_delta) = find(&mut parent, &mut offset, var.0);
        if let Some(&value) = root_value.get(&target_root) {
            return i32::try_from(value + target_delta).ok();
        }

        let mut lo: Option<i64> = None;
        let mut hi: Option<i64> = None;
        let mut pulls: Vec<(i64, i64)> = Vec::new();

        for row in &self.rows {
            match *row {
                Row::Lower {
                    a, b, offset: off, ..
                } => {
                    let (ra, da) = find(&mut parent, &mut offset, a.0);
                    let (rb, db) = find(&mut parent, &mut offset, b.0);
                    if ra == target_root {
                        if let Some(&vb) = root_value.get(&rb) {
                            let bound = vb + db + i64::from(off) - da;
                            hi = Some(hi.map_or(bound, |h| h.min(bound)));
                        }
                    } else if rb == target_root {
                        if let Some(&va) = root_value.get(&ra) {
                            let bound = va + da - i64::from(off) - db;
                            lo = Some(lo.map_or(bound, |l| l.max(bound)));
                        }
                    }
                }
                Row::Greater {
                    a, b, offset: off, ..
                } => {
                    let (ra, da) = find(&mut parent, &mut offset, a.0);
                    let (rb, db) = find(&mut parent, &mut offset, b.0);
                    if ra == target_root {
                        if let Some(&vb) = root_value.get(&rb) {
                            let bound = vb + db + i64::from(off) - da;
                            lo = Some(lo.map_or(bound, |l| l.max(bound)));
                        }
                    } else if rb == target_root {
                        if let Some(&va) = root_value.get(&ra) {
                            let bound = va + da - i64::from(off) - db;
                            hi = Some(hi.map_or(bound, |h| h.min(bound)));
                        }
                    }
                }
                Row::Equality {
                    a,
                    b,
                    offset: off,
                    strength,
                } => {
                    let weight = match strength {
                        Strength::Fixed => continue,
                        Strength::Equality => 1000,
                        Strength::Highest => 1,
                        Strength::None => continue,
                    };
                    let (ra, da) = find(&mut parent, &mut offset, a.0);
                    let (rb, db) = find(&mut parent, &mut offset, b.0);
                    if ra == target_root {
                        if let Some(&vb) = root_value.get(&rb) {
                            pulls.push((vb + db + i64::from(off) - da, weight));
                        }
                    } else if rb == target_root {
                        if let Some(&va) = root_value.get(&ra) {
                            pulls.push((va + da - i64::from(off) - db, weight));
                        }
                    }
                }
            }
        }

        let clamp = |value: i64| {
            let value = lo.map_or(value, |l| value.max(l));
            hi.map_or(value, |h| value.min(h))
        };

        let mut candidates: Vec<i64> = pulls.iter().map(|&(target, _)| clamp(target)).collect();
        if let Some(l) = lo {
            candidates.push(l);
        }
        if let Some(h) = hi {
            candidates.push(h);
        }
        if candidates.is_empty() {
            candidates.push(clamp(0));
        }
        candidates.sort_unstable();
        candidates.dedup();

        let best = candidates
            .into_iter()
            .min_by_key(|&p| {
                let cost: i64 = pulls
                    .iter()
                    .map(|&(target, weight)| weight * (p - target).abs())
                    .sum();
                (cost, p)
            })?;

        i32::try_from(best + target_delta).ok()
    }
}

impl SolverSession for RecordingSession {
    fn variable(&mut self, anchor: AnchorRef) -> VariableId {
        if let Some(&var) = self.table.get(&anchor) {
            return var;
        }
        let var = VariableId::new(self.anchors.len());
        self.anchors.push(anchor);
        self.table.insert(anchor, var);
        var
    }

    fn add_lower_barrier(
        &mut self,
        a: VariableId,
        b: VariableId,
        offset: i32,
        ambiguous_sizing: bool,
    ) {
        self.rows.push(Row::Lower {
            a,
            b,
            offset,
            ambiguous_sizing,
        });
    }

    fn add_greater_barrier(
        &mut self,
        a: VariableId,
        b: VariableId,
        offset: i32,
        ambiguous_sizing: bool,
    ) {
        self.rows.push(Row::Greater {
            a,
            b,
            offset,
            ambiguous_sizing,
        });
    }

    fn add_equality(&mut self, a: VariableId, b: VariableId, offset: i32, strength: Strength) {
        self.rows.push(Row::Equality {
            a,
            b,
            offset,
            strength,
        });
    }
}

/// Invariant: `offset[i]` is `value(i) - value(parent[i])`. Returns the
/// root of `i` and `value(i) - value(root)`, compressing the path.
fn find(parent: &mut [usize], offset: &mut [i64], i: usize) -> (usize, i64) {
    if parent[i] == i {
        return (i, 0);
    }
    let p = parent[i];
    let (root, parent_delta) = find(parent, offset, p);
    parent[i] = root;
    offset[i] += parent_delta;
    (root, offset[i])
}

/// Merge the classes of `a` and `b` under `value(a) = value(b) + off`.
fn union(parent: &mut [usize], offset: &mut [i64], a: usize, b: usize, off: i64) {
    let (ra, da) = find(parent, offset, a);
    let (rb, db) = find(parent, offset, b);
    if ra != rb {
        parent[ra] = rb;
        offset[ra] = off - da + db;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::{Side, WidgetId};

    fn anchor(widget: usize, side: Side) -> AnchorRef {
        AnchorRef::new(WidgetId::new(widget), side)
    }

    #[test]
    fn test_variable_create_or_reuse() {
        let mut session = RecordingSession::new();
        let a = session.variable(anchor(0, Side::Left));
        let b = session.variable(anchor(0, Side::Right));
        assert_ne!(a, b);
        assert_eq!(session.variable(anchor(0, Side::Left)), a);
        assert_eq!(session.variable_count(), 2);
        assert_eq!(session.variable_for(anchor(0, Side::Right)), Some(b));
        assert_eq!(session.variable_for(anchor(1, Side::Left)), None);
    }

    #[test]
    fn test_resolve_pinned() {
        let mut session = RecordingSession::new();
        let v = session.pin(anchor(0, Side::Left), 37);
        assert_eq!(session.resolve(v), Some(37));
    }

    #[test]
    fn test_resolve_unknown_variable() {
        let session = RecordingSession::new();
        assert_eq!(session.resolve(VariableId::new(0)), None);
    }

    #[test]
    fn test_fixed_equality_merges_values() {
        let mut session = RecordingSession::new();
        let pinned = session.pin(anchor(0, Side::Left), 100);
        let other = session.variable(anchor(1, Side::Left));
        // other = pinned + 5, unbreakable.
        session.add_equality(other, pinned, 5, Strength::Fixed);
        assert_eq!(session.resolve(other), Some(105));
    }

    #[test]
    fn test_fixed_chain_merges_transitively() {
        let mut session = RecordingSession::new();
        let a = session.pin(anchor(0, Side::Left), 10);
        let b = session.variable(anchor(1, Side::Left));
        let c = session.variable(anchor(2, Side::Left));
        session.add_equality(b, a, 1, Strength::Fixed);
        session.add_equality(c, b, 2, Strength::Fixed);
        assert_eq!(session.resolve(c), Some(13));
    }

    #[test]
    fn test_bound_clamps_pull() {
        let mut session = RecordingSession::new();
        let free = session.variable(anchor(0, Side::Left));
        let low = session.pin(anchor(1, Side::Left), 5);
        let far = session.pin(anchor(2, Side::Left), 600);
        // free <= 5, pulled hard toward 600.
        session.add_lower_barrier(free, low, 0, false);
        session.add_equality(free, far, 0, Strength::Highest);
        assert_eq!(session.resolve(free), Some(5));
    }

    #[test]
    fn test_stronger_pull_wins() {
        let mut session = RecordingSession::new();
        let free = session.variable(anchor(0, Side::Left));
        let weak = session.pin(anchor(1, Side::Left), 10);
        let strong = session.pin(anchor(2, Side::Left), 200);
        session.add_equality(free, weak, 0, Strength::Highest);
        session.add_equality(free, strong, 0, Strength::Equality);
        assert_eq!(session.resolve(free), Some(200));
    }

    #[test]
    fn test_none_strength_costs_nothing() {
        let mut session = RecordingSession::new();
        let free = session.variable(anchor(0, Side::Left));
        let near = session.pin(anchor(1, Side::Left), 0);
        let far = session.pin(anchor(2, Side::Left), 50);
        session.add_equality(free, near, 0, Strength::None);
        session.add_equality(free, far, 0, Strength::Highest);
        assert_eq!(session.resolve(free), Some(50));
    }

    #[test]
    fn test_tie_breaks_to_smallest() {
        let mut session = RecordingSession::new();
        let free = session.variable(anchor(0, Side::Left));
        let a = session.pin(anchor(1, Side::Left), 10);
        let b = session.pin(anchor(2, Side::Left), 20);
        session.add_equality(free, a, 0, Strength::Highest);
        session.add_equality(free, b, 0, Strength::Highest);
        // Any value in [10, 20] has equal cost; the smallest wins.
        assert_eq!(session.resolve(free), Some(10));
    }

    #[test]
    fn test_greater_bound_forms_lower_limit() {
        let mut session = RecordingSession::new();
        let free = session.variable(anchor(0, Side::Left));
        let high = session.pin(anchor(1, Side::Left), 125);
        let origin = session.pin(anchor(2, Side::Left), 0);
        session.add_greater_barrier(free, high, 0, false);
        session.add_equality(free, origin, 0, Strength::Highest);
        assert_eq!(session.resolve(free), Some(125));
    }

    #[test]
    fn test_rows_recorded_in_order() {
        let mut session = RecordingSession::new();
        let a = session.variable(anchor(0, Side::Left));
        let b = session.variable(anchor(1, Side::Left));
        session.add_lower_barrier(a, b, 3, true);
        session.add_equality(a, b, 3, Strength::Equality);
        assert_eq!(
            session.rows(),
            &[
                Row::Lower {
                    a,
                    b,
                    offset: 3,
                    ambiguous_sizing: true
                },
                Row::Equality {
                    a,
                    b,
                    offset: 3,
                    strength: Strength::Equality
                },
            ]
        );
    }
}
