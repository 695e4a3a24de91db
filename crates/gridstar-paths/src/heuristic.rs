use gridstar_core::{EdgeCosts, Point};

/// Manhattan (L1) distance between two points, in steps.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    let (dx, dy) = a.abs_delta(b);
    dx + dy
}

/// Chebyshev (L∞) distance between two points, in steps.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> u32 {
    let (dx, dy) = a.abs_delta(b);
    dx.max(dy)
}

/// Cheapest cost from `a` to `b` on an unobstructed 8-way grid.
///
/// A diagonal step is only taken when it is cheaper than the two
/// orthogonal steps it replaces. When it is even cheaper than one
/// orthogonal step, straight runs zig-zag diagonally; diagonal steps keep
/// the parity of `x + y`, so an odd straight run still needs one
/// orthogonal step.
#[inline]
pub fn octile(a: Point, b: Point, costs: EdgeCosts) -> u64 {
    let (dx, dy) = a.abs_delta(b);
    let (lo, hi) = (u64::from(dx.min(dy)), u64::from(dx.max(dy)));
    let orth = u64::from(costs.orthogonal);
    let diag = u64::from(costs.diagonal).min(2 * orth);
    let straight = hi - lo;
    if diag >= orth {
        orth * straight + diag * lo
    } else {
        let odd = straight % 2;
        orth * odd + diag * (hi - odd)
    }
}

/// Estimate of the remaining cost to the goal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Heuristic {
    /// Exact unobstructed cost ([`octile`]). Admissible and consistent for
    /// any step costs, including diagonals cheaper than orthogonal steps.
    #[default]
    Octile,
    /// [`manhattan`] steps times the orthogonal cost. Overestimates
    /// whenever a diagonal step costs less than two orthogonal ones, so the
    /// returned path is then not guaranteed to be the cheapest.
    Manhattan,
    /// [`chebyshev`] steps times the cheaper step cost. Admissible, but
    /// weaker than `Octile`.
    Chebyshev,
    /// Always zero. Turns the search into Dijkstra's algorithm.
    Zero,
}

impl Heuristic {
    /// Estimated cost from `from` to `to` on a graph built with `costs`.
    #[inline]
    pub fn estimate(self, costs: EdgeCosts, from: Point, to: Point) -> u64 {
        match self {
            Self::Octile => octile(from, to, costs),
            Self::Manhattan => u64::from(manhattan(from, to)) * u64::from(costs.orthogonal),
            Self::Chebyshev => {
                let step = costs.orthogonal.min(costs.diagonal);
                u64::from(chebyshev(from, to)) * u64::from(step)
            }
            Self::Zero => 0,
        }
    }

    /// Whether the estimate never exceeds the true remaining cost under
    /// `costs`.
    ///
    /// `Octile` is exact on an open grid and `Chebyshev` charges the cheaper
    /// step per move, so both hold for every cost pair. `Manhattan` counts a
    /// diagonal move as two orthogonal ones.
    pub fn is_admissible(self, costs: EdgeCosts) -> bool {
        match self {
            Self::Manhattan => u64::from(costs.diagonal) >= 2 * u64::from(costs.orthogonal),
            Self::Octile | Self::Chebyshev | Self::Zero => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Point = Point::new(0, 3);
    const B: Point = Point::new(7, 0);

    #[test]
    fn step_distances() {
        assert_eq!(manhattan(A, B), 10);
        assert_eq!(chebyshev(A, B), 7);
        assert_eq!(manhattan(A, A), 0);
    }

    #[test]
    fn octile_matches_unobstructed_cost() {
        // 3 diagonal steps, then 4 orthogonal ones.
        assert_eq!(octile(A, B, EdgeCosts::OCTILE), 3 * 141 + 4 * 100);
        assert_eq!(octile(B, A, EdgeCosts::OCTILE), 823);
        assert_eq!(octile(A, A, EdgeCosts::OCTILE), 0);
    }

    #[test]
    fn octile_ignores_overpriced_diagonals() {
        let costs = EdgeCosts {
            orthogonal: 10,
            diagonal: 50,
        };
        assert_eq!(octile(Point::ZERO, Point::new(2, 2), costs), 80);
    }

    #[test]
    fn octile_zig_zags_when_diagonals_are_cheap() {
        let costs = EdgeCosts {
            orthogonal: 100,
            diagonal: 10,
        };
        // Four diagonal steps cover a straight run of four.
        assert_eq!(octile(Point::ZERO, Point::new(4, 0), costs), 40);
        // An odd run needs one orthogonal step.
        assert_eq!(octile(Point::ZERO, Point::new(3, 0), costs), 100 + 2 * 10);
        assert_eq!(octile(Point::ZERO, Point::new(1, 0), costs), 100);
        assert_eq!(octile(Point::new(7, 6), Point::new(0, 8), costs), 100 + 6 * 10);
        assert_eq!(octile(Point::ZERO, Point::new(3, 3), costs), 30);
    }

    #[test]
    fn estimates_scale_with_costs() {
        let costs = EdgeCosts::OCTILE;
        assert_eq!(Heuristic::Manhattan.estimate(costs, A, B), 1000);
        assert_eq!(Heuristic::Chebyshev.estimate(costs, A, B), 700);
        assert_eq!(Heuristic::Zero.estimate(costs, A, B), 0);
        assert_eq!(Heuristic::default(), Heuristic::Octile);
    }

    #[test]
    fn manhattan_overestimates_a_diagonal_step() {
        let costs = EdgeCosts::OCTILE;
        let est = Heuristic::Manhattan.estimate(costs, Point::ZERO, Point::new(1, 1));
        assert!(est > u64::from(costs.diagonal));
        assert!(!Heuristic::Manhattan.is_admissible(costs));
        assert!(Heuristic::Manhattan.is_admissible(EdgeCosts {
            orthogonal: 1,
            diagonal: 2,
        }));
        assert!(Heuristic::Octile.is_admissible(costs));
    }
}
