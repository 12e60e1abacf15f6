//! Route cost comparison.

use std::cmp::Ordering;

/// Relative tolerance used when deciding whether two route costs are tied.
///
/// Costs are sums of `f64` edge weights, so two routes with the same
/// mathematical cost may differ in the last few bits depending on the order
/// their edges were added up. Two costs tie when
/// `|a - b| <= tolerance * max(1, |a|, |b|)`. The default is [`EXACT`](Self::EXACT).
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CostTolerance(f64);

impl CostTolerance {
    /// Bit-exact comparison.
    pub const EXACT: CostTolerance = CostTolerance(0.0);

    /// Returns `None` if `tolerance` is negative or not finite.
    pub fn new(tolerance: f64) -> Option<Self> {
        if tolerance.is_finite() && tolerance >= 0.0 {
            Some(CostTolerance(tolerance))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// `a == b`, within tolerance. Infinity only ties infinity.
    pub fn ties(self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        if !a.is_finite() || !b.is_finite() {
            return false;
        }
        let scale = 1.0_f64.max(a.abs()).max(b.abs());
        (a - b).abs() <= self.0 * scale
    }

    /// `a <= b`, within tolerance.
    pub fn at_most(self, a: f64, b: f64) -> bool {
        a <= b || self.ties(a, b)
    }

    /// `a > b` by more than the tolerance.
    pub fn exceeds(self, a: f64, b: f64) -> bool {
        !self.at_most(a, b)
    }
}

impl Default for CostTolerance {
    fn default() -> Self {
        CostTolerance::EXACT
    }
}

/// Totally ordered wrapper over a cost, usable as a priority queue key.
#[derive(Copy, Clone, Debug)]
pub(crate) struct OrdCost(pub(crate) f64);

impl PartialEq for OrdCost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrdCost {}

impl PartialOrd for OrdCost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdCost {
    fn cmp(&self, other: &Self) -> Ordering {
        debug_assert!(!self.0.is_nan(), "NaN cost detected");
        self.0.total_cmp(&other.0)
    }
}
