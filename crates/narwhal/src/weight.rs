//! Numeric weight types accepted by the solver.

use num_traits::{FromPrimitive, Signed};
use std::fmt::Debug;
use std::ops::{AddAssign, SubAssign};

/// An ordered signed number with a finite "unreached" sentinel.
///
/// Costs and potentials in the flow network are weight differences, so the type must be
/// signed. `SENTINEL` stands in for an infinite distance and has to stay above every finite
/// path cost; `MAX_MAGNITUDE` bounds input weights so that `SENTINEL` plus a few weight
/// differences never overflows, and for `f32` so that integer weights and their differences
/// stay exactly representable.
///
/// Sums over many edges (the adjustment total, the flow cost) are accumulated in the wider
/// [`Weight::Total`] type, which holds `m * n * MAX_MAGNITUDE` for any graph that fits in memory.
pub trait Weight:
    Signed + Copy + PartialOrd + Debug + FromPrimitive + AddAssign + SubAssign + Send + Sync + 'static
{
    type Total: Signed + Copy + PartialOrd + Debug + FromPrimitive + AddAssign + Send + Sync + 'static;

    const SENTINEL: Self;
    const MAX_MAGNITUDE: Self;

    fn widen(self) -> Self::Total;

    /// `false` for NaN and infinities.
    fn is_finite_weight(self) -> bool;

    fn in_range(self) -> bool {
        self.is_finite_weight() && self.abs() <= Self::MAX_MAGNITUDE
    }
}

impl Weight for i32 {
    type Total = i64;

    const SENTINEL: Self = 1_000_000_000;
    const MAX_MAGNITUDE: Self = Self::SENTINEL / 4;

    fn widen(self) -> Self::Total {
        self.into()
    }

    fn is_finite_weight(self) -> bool {
        true
    }
}

impl Weight for i64 {
    type Total = i128;

    const SENTINEL: Self = 1_000_000_000_000_000;
    const MAX_MAGNITUDE: Self = Self::SENTINEL / 4;

    fn widen(self) -> Self::Total {
        self.into()
    }

    fn is_finite_weight(self) -> bool {
        true
    }
}

impl Weight for f32 {
    type Total = f64;

    const SENTINEL: Self = 1.0e9;
    /// 2^20. Differences of two weights and sums of a few of them stay below 2^24.
    const MAX_MAGNITUDE: Self = 1_048_576.0;

    fn widen(self) -> Self::Total {
        self.into()
    }

    fn is_finite_weight(self) -> bool {
        self.is_finite()
    }
}

impl Weight for f64 {
    type Total = f64;

    const SENTINEL: Self = 1.0e9;
    const MAX_MAGNITUDE: Self = Self::SENTINEL / 4.0;

    fn widen(self) -> Self::Total {
        self.into()
    }

    fn is_finite_weight(self) -> bool {
        self.is_finite()
    }
}

pub(crate) fn min_assign<W: Weight>(slot: &mut W, candidate: W) {
    if candidate < *slot {
        *slot = candidate;
    }
}
