// File: crates/lapviz-core/src/bounds.rs
// Summary: Bounds calculator: min/max per axis over one or more series, with the empty and degenerate policies.

use crate::series::Series;

/// Span substituted for a degenerate (`min == max`) range so mapping never divides by zero.
pub const UNIT_SPAN: f64 = 1.0;

/// Observed `[min, max]` of one axis. Absence of data is modelled as `Option<Bounds>::None`,
/// never as `{0, 0}`.
///
/// Invariant: `min <= max`, both finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Bounds from two endpoints in any order. Returns `None` for non-finite input.
    pub fn new(a: f64, b: f64) -> Option<Self> {
        (a.is_finite() && b.is_finite()).then(|| Self { min: a.min(b), max: a.max(b) })
    }

    /// Scan values, ignoring NaN and infinities. Empty (or all non-finite) input yields `None`.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut acc: Option<Self> = None;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            acc = Some(match acc {
                Some(b) => b.include(v),
                None => Self { min: v, max: v },
            });
        }
        acc
    }

    /// Bounds for bar values: the baseline (commonly 0) is always inside the range, so
    /// `min` stays at the baseline unless a value is below it.
    pub fn for_bars<I: IntoIterator<Item = f64>>(values: I, baseline: f64) -> Option<Self> {
        Self::of(values).map(|b| b.include(baseline))
    }

    pub fn include(self, v: f64) -> Self {
        if !v.is_finite() {
            return self;
        }
        Self { min: self.min.min(v), max: self.max.max(v) }
    }

    pub fn union(self, other: Self) -> Self {
        Self { min: self.min.min(other.min), max: self.max.max(other.max) }
    }

    /// Union of any number of optional bounds; `None` only if every input is `None`.
    pub fn union_all<I: IntoIterator<Item = Option<Self>>>(items: I) -> Option<Self> {
        items.into_iter().flatten().reduce(Self::union)
    }

    /// Replace either end with an explicit axis limit. When both limits are given the
    /// result exists even without data.
    pub fn with_limits(bounds: Option<Self>, min: Option<f64>, max: Option<f64>) -> Option<Self> {
        let min = min.filter(|v| v.is_finite());
        let max = max.filter(|v| v.is_finite());
        match (bounds, min, max) {
            (_, Some(lo), Some(hi)) => Self::new(lo, hi),
            (Some(b), Some(lo), None) => Self::new(lo, b.max.max(lo)),
            (Some(b), None, Some(hi)) => Self::new(b.min.min(hi), hi),
            (b, _, _) => b,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.max - self.min <= 0.0
    }

    /// `max - min`, or [`UNIT_SPAN`] for a degenerate range.
    pub fn span(&self) -> f64 {
        let s = self.max - self.min;
        if s > 0.0 && s.is_finite() { s } else { UNIT_SPAN }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.min, self.max)
    }
}

/// Combined x and y bounds of a set of series sharing one coordinate frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct XyBounds {
    pub x: Bounds,
    pub y: Bounds,
}

impl XyBounds {
    /// Bounds over every sample of every series. Series whose x/y lengths disagree are
    /// ignored here; the caller decides how to report them.
    pub fn of_series<'a, I: IntoIterator<Item = &'a Series>>(series: I) -> Option<Self> {
        let mut x: Option<Bounds> = None;
        let mut y: Option<Bounds> = None;
        for s in series.into_iter().filter(|s| s.is_consistent()) {
            x = Bounds::union_all([x, Bounds::of(s.x.iter().copied())]);
            y = Bounds::union_all([y, Bounds::of(s.y.iter().copied())]);
        }
        Some(Self { x: x?, y: y? })
    }
}
