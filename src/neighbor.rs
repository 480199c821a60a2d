//! Neighborhood operators for tours.
//!
//! Both operators leave position 0 in place and return a new route; the
//! input is never modified.

use rand::Rng;

/// Probability of proposing a 2-opt move when 2-opt is enabled.
pub const TWO_OPT_PROBABILITY: f64 = 0.7;

/// A perturbation operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighborOperator {
    /// Exchange the cities at two distinct positions.
    Swap,
    /// Reverse the segment between two distinct positions (inclusive).
    TwoOpt,
}

impl NeighborOperator {
    /// Applies the operator to `route`.
    pub fn apply<R: Rng>(self, route: &[usize], rng: &mut R) -> Vec<usize> {
        match self {
            NeighborOperator::Swap => swap_neighbor(route, rng),
            NeighborOperator::TwoOpt => two_opt_neighbor(route, rng),
        }
    }
}

/// Draws two distinct positions uniformly from `1..n`, without replacement.
///
/// Returns `None` when fewer than two movable positions exist.
fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 3 {
        return None;
    }
    let i = rng.random_range(1..n);
    let mut j = rng.random_range(1..n - 1);
    if j >= i {
        j += 1;
    }
    Some((i, j))
}

/// Swap move: exchanges two random positions in `1..n`.
pub fn swap_neighbor<R: Rng>(route: &[usize], rng: &mut R) -> Vec<usize> {
    let mut next = route.to_vec();
    if let Some((i, j)) = distinct_positions(route.len(), rng) {
        next.swap(i, j);
    }
    next
}

/// 2-opt move: reverses `route[i..=j]` for random `1 <= i < j < n`.
pub fn two_opt_neighbor<R: Rng>(route: &[usize], rng: &mut R) -> Vec<usize> {
    let mut next = route.to_vec();
    if let Some((a, b)) = distinct_positions(route.len(), rng) {
        let (i, j) = if a < b { (a, b) } else { (b, a) };
        next[i..=j].reverse();
    }
    next
}

/// Chooses which operator produces each proposal.
#[derive(Debug, Clone, Copy)]
pub struct NeighborPolicy {
    use_two_opt: bool,
}

impl NeighborPolicy {
    pub fn new(use_two_opt: bool) -> Self {
        Self { use_two_opt }
    }

    /// Picks the operator for one proposal.
    ///
    /// With 2-opt enabled this consumes one uniform draw; otherwise it
    /// consumes nothing and always returns [`NeighborOperator::Swap`].
    pub fn select<R: Rng>(&self, rng: &mut R) -> NeighborOperator {
        if self.use_two_opt && rng.random::<f64>() < TWO_OPT_PROBABILITY {
            NeighborOperator::TwoOpt
        } else {
            NeighborOperator::Swap
        }
    }

    /// Selects an operator and applies it.
    pub fn propose<R: Rng>(&self, route: &[usize], rng: &mut R) -> Vec<usize> {
        self.select(rng).apply(route, rng)
    }
}
