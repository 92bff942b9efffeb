//! Fixed/relative space distribution along one axis of a split container
//!
//! Fixed (`Absolute`) children are resolved first, in one of three regimes:
//!
//! - **squeezed** (`minimum >= available`): every fixed child gets its minimum
//! - **comfortable** (`preferred_minimum <= available`): every fixed child
//!   gets its declared size, raised to its minimum
//! - **intermediate**: the slack between the available and the current size is
//!   handed out sequentially, in child order. Each child's share is computed
//!   against the children not yet assigned, and the slack shrinks by what the
//!   child actually absorbed before moving on. The result therefore depends on
//!   child order.
//!
//! Relative (`Star`/`Auto`) children then split what is left by weight, each
//! clamped to its minimum.

use crate::model::DockLength;

/// Inputs for one child along the distribution axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildMeasure {
    pub length: DockLength,
    pub minimum: f64,
    /// Size from the previous layout pass
    pub actual: f64,
}

impl ChildMeasure {
    pub fn new(length: DockLength, minimum: f64, actual: f64) -> Self {
        Self {
            length,
            minimum,
            actual,
        }
    }
}

/// Aggregate sizes the regime decision is based on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSummary {
    /// Sum of minima plus splitters
    pub minimum: f64,
    /// Sum of previous actual sizes plus splitters
    pub current: f64,
    /// `minimum` plus how far the fixed children's declared sizes exceed
    /// their minima (a declared size below the minimum adds nothing)
    pub preferred_minimum: f64,
}

/// Resolve each child's size along the axis
///
/// Sizes sum to `available` whenever `available >= minimum`; below that,
/// every child sits at its minimum and the total overflows.
pub fn distribute(available: f64, splitter: f64, children: &[ChildMeasure]) -> Vec<f64> {
    if children.is_empty() {
        return Vec::new();
    }
    let lengths = effective_lengths(children);
    let summary = summarize(splitter, children, &lengths);
    let splitters = splitter_total(splitter, children.len());

    let fixed: Vec<usize> = (0..children.len())
        .filter(|&i| lengths[i].is_absolute())
        .collect();
    let relative: Vec<usize> = (0..children.len())
        .filter(|&i| lengths[i].is_relative())
        .collect();

    let mut sizes = vec![0.0; children.len()];

    if summary.minimum >= available {
        for &i in &fixed {
            sizes[i] = children[i].minimum;
        }
    } else if summary.preferred_minimum <= available {
        for &i in &fixed {
            sizes[i] = declared(&lengths[i]).max(children[i].minimum);
        }
    } else {
        distribute_fixed_slack(available - summary.current, children, &lengths, &fixed, &mut sizes);
        reserve_relative_minimums(available, splitters, children, &fixed, &relative, &mut sizes);
    }

    let fixed_total: f64 = fixed.iter().map(|&i| sizes[i]).sum();
    let space = available - splitters - fixed_total;
    distribute_relative(space, children, &lengths, &relative, &mut sizes);

    sizes
}

/// Compute the regime inputs for a set of children
pub fn summarize(splitter: f64, children: &[ChildMeasure], lengths: &[DockLength]) -> SizeSummary {
    let splitters = splitter_total(splitter, children.len());
    let minimum: f64 = children.iter().map(|c| c.minimum).sum::<f64>() + splitters;
    let current: f64 = children.iter().map(|c| c.actual).sum::<f64>() + splitters;
    let fixed_excess: f64 = children
        .iter()
        .zip(lengths)
        .filter(|(_, l)| l.is_absolute())
        .map(|(c, l)| declared(l).max(c.minimum) - c.minimum)
        .sum();
    SizeSummary {
        minimum,
        current,
        preferred_minimum: minimum + fixed_excess,
    }
}

/// A container needs at least one relative child to absorb leftover space;
/// when none is declared, the last child fills.
pub fn effective_lengths(children: &[ChildMeasure]) -> Vec<DockLength> {
    let mut lengths: Vec<DockLength> = children.iter().map(|c| c.length).collect();
    if !lengths.iter().any(DockLength::is_relative) {
        if let Some(last) = lengths.last_mut() {
            *last = DockLength::Star(1.0);
        }
    }
    lengths
}

fn splitter_total(splitter: f64, count: usize) -> f64 {
    splitter * count.saturating_sub(1) as f64
}

fn declared(length: &DockLength) -> f64 {
    length.pixels().unwrap_or(0.0)
}

fn distribute_fixed_slack(
    mut slack: f64,
    children: &[ChildMeasure],
    lengths: &[DockLength],
    fixed: &[usize],
    sizes: &mut [f64],
) {
    let mut remaining: Vec<usize> = fixed.to_vec();
    for &i in fixed {
        let child = children[i];
        let share = if slack < 0.0 {
            let total: f64 = remaining
                .iter()
                .map(|&j| (children[j].actual - children[j].minimum).max(0.0))
                .sum();
            if total > 0.0 {
                (child.actual - child.minimum).max(0.0) / total
            } else {
                0.0
            }
        } else {
            let total: f64 = remaining.iter().map(|&j| declared(&lengths[j])).sum();
            if total > 0.0 {
                declared(&lengths[i]) / total
            } else {
                0.0
            }
        };

        let size = (slack * share + child.actual).round().max(child.minimum);
        slack -= size - child.actual;
        sizes[i] = size;
        remaining.retain(|&j| j != i);
    }
}

/// Give back space from fixed children (in order, down to their minima) until
/// the relative children can all reach their minima
fn reserve_relative_minimums(
    available: f64,
    splitters: f64,
    children: &[ChildMeasure],
    fixed: &[usize],
    relative: &[usize],
    sizes: &mut [f64],
) {
    let relative_min: f64 = relative.iter().map(|&i| children[i].minimum).sum();
    let fixed_total: f64 = fixed.iter().map(|&i| sizes[i]).sum();
    let mut overshoot = fixed_total + relative_min + splitters - available;
    for &i in fixed {
        if overshoot <= 0.0 {
            break;
        }
        let give = (sizes[i] - children[i].minimum).max(0.0).min(overshoot);
        sizes[i] -= give;
        overshoot -= give;
    }
}

fn distribute_relative(
    mut space: f64,
    children: &[ChildMeasure],
    lengths: &[DockLength],
    relative: &[usize],
    sizes: &mut [f64],
) {
    let mut open: Vec<usize> = relative.to_vec();
    while !open.is_empty() {
        let total_weight: f64 = open.iter().map(|&i| lengths[i].weight()).sum();
        let share_of = |i: usize| {
            if total_weight > 0.0 {
                space * lengths[i].weight() / total_weight
            } else {
                space / open.len() as f64
            }
        };

        let clamped: Vec<usize> = open
            .iter()
            .copied()
            .filter(|&i| share_of(i) < children[i].minimum)
            .collect();
        if clamped.is_empty() {
            for &i in &open {
                sizes[i] = share_of(i);
            }
            return;
        }
        for &i in &clamped {
            sizes[i] = children[i].minimum;
            space -= children[i].minimum;
        }
        open.retain(|i| !clamped.contains(i));
    }
}
