use std::fmt;

use maze_core::Cell;

// ---------------------------------------------------------------------------
// Route arena
// ---------------------------------------------------------------------------

/// Parent index of a route's first node.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// One cell of a route, linked to the route it extends.
///
/// Every partial route the enumerator creates is a single node pointing at
/// its parent, so extending a route never copies the cells before it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) cell: Cell,
    pub(crate) parent: usize,
    /// Number of cells from the start up to and including `cell`.
    pub(crate) len: usize,
}

impl Node {
    pub(crate) fn root(cell: Cell) -> Self {
        Self {
            cell,
            parent: NO_PARENT,
            len: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Solutions
// ---------------------------------------------------------------------------

/// Every completed route found by one enumeration run, in discovery order.
#[derive(Clone, Debug, Default)]
pub struct Solutions {
    pub(crate) nodes: Vec<Node>,
    pub(crate) ends: Vec<usize>,
}

impl Solutions {
    /// Number of completed routes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    /// Whether the goal was never reached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    /// The `i`-th route in discovery order, start first.
    pub fn route(&self, i: usize) -> Option<Vec<Cell>> {
        self.ends.get(i).map(|&end| self.reconstruct(end))
    }

    /// Iterate over all routes in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = Vec<Cell>> + '_ {
        self.ends.iter().map(|&end| self.reconstruct(end))
    }

    /// Cell counts of all routes, in discovery order.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.ends.iter().map(|&end| self.nodes[end].len)
    }

    /// The first-discovered route among those with the fewest cells.
    pub fn shortest(&self) -> Option<Vec<Cell>> {
        let mut best: Option<usize> = None;
        for &end in &self.ends {
            match best {
                Some(b) if self.nodes[b].len <= self.nodes[end].len => {}
                _ => best = Some(end),
            }
        }
        best.map(|end| self.reconstruct(end))
    }

    /// Fewest steps over all routes. The start cell is not a step, so this is
    /// one less than the shortest route's cell count.
    pub fn min_steps(&self) -> Option<usize> {
        self.lengths().min().map(|len| len - 1)
    }

    /// Reduce to a step count, or [`Outcome::Unreachable`] if there are no
    /// routes.
    pub fn outcome(&self) -> Outcome {
        match self.min_steps() {
            Some(steps) => Outcome::Steps(steps),
            None => Outcome::Unreachable,
        }
    }

    /// Take all routes out as owned cell lists.
    pub fn into_routes(self) -> Vec<Vec<Cell>> {
        self.iter().collect()
    }

    /// Number of route nodes allocated during the run, including partial
    /// routes that were later dropped.
    #[inline]
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    fn reconstruct(&self, end: usize) -> Vec<Cell> {
        let mut route = Vec::with_capacity(self.nodes[end].len);
        let mut i = end;
        while i != NO_PARENT {
            route.push(self.nodes[i].cell);
            i = self.nodes[i].parent;
        }
        route.reverse();
        route
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// The answer to "how many steps from start to goal".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal is reachable in this many steps.
    Steps(usize),
    /// No route reaches the goal.
    Unreachable,
}

impl Outcome {
    /// The step count, if the goal is reachable.
    #[inline]
    pub fn steps(self) -> Option<usize> {
        match self {
            Self::Steps(n) => Some(n),
            Self::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(n) => write!(f, "{n}"),
            Self::Unreachable => f.write_str("unreachable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two routes sharing their first two cells:
    /// (0,0) (0,1) (0,2)  and  (0,0) (0,1) (1,1) (1,2).
    fn sample() -> Solutions {
        let nodes = vec![
            Node::root(Cell::new(0, 0)),
            Node {
                cell: Cell::new(0, 1),
                parent: 0,
                len: 2,
            },
            Node {
                cell: Cell::new(1, 1),
                parent: 1,
                len: 3,
            },
            Node {
                cell: Cell::new(1, 2),
                parent: 2,
                len: 4,
            },
            Node {
                cell: Cell::new(0, 2),
                parent: 1,
                len: 3,
            },
        ];
        Solutions {
            nodes,
            ends: vec![3, 4],
        }
    }

    #[test]
    fn routes_are_rebuilt_start_first() {
        let s = sample();
        assert_eq!(s.len(), 2);
        assert_eq!(
            s.route(0),
            Some(vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(1, 1),
                Cell::new(1, 2),
            ])
        );
        assert_eq!(
            s.route(1),
            Some(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)])
        );
        assert_eq!(s.route(2), None);
        assert_eq!(s.lengths().collect::<Vec<_>>(), vec![4, 3]);
    }

    #[test]
    fn shortest_and_min_steps() {
        let s = sample();
        assert_eq!(s.shortest(), s.route(1));
        assert_eq!(s.min_steps(), Some(2));
        assert_eq!(s.outcome(), Outcome::Steps(2));
    }

    #[test]
    fn shortest_prefers_first_discovered_on_ties() {
        let mut s = sample();
        // Add a second 3-cell route after the first one.
        s.nodes.push(Node {
            cell: Cell::new(1, 0),
            parent: 0,
            len: 2,
        });
        s.nodes.push(Node {
            cell: Cell::new(1, 1),
            parent: 5,
            len: 3,
        });
        s.ends.push(6);
        assert_eq!(s.shortest(), s.route(1));
    }

    #[test]
    fn empty_is_unreachable() {
        let s = Solutions::default();
        assert!(s.is_empty());
        assert_eq!(s.shortest(), None);
        assert_eq!(s.min_steps(), None);
        assert_eq!(s.outcome(), Outcome::Unreachable);
    }

    #[test]
    fn outcome_accessors_and_display() {
        assert_eq!(Outcome::Steps(22).steps(), Some(22));
        assert_eq!(Outcome::Unreachable.steps(), None);
        assert!(Outcome::Steps(0).is_reachable());
        assert!(!Outcome::Unreachable.is_reachable());
        assert_eq!(Outcome::Steps(22).to_string(), "22");
        assert_eq!(Outcome::Unreachable.to_string(), "unreachable");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        for o in [Outcome::Steps(3), Outcome::Unreachable] {
            let json = serde_json::to_string(&o).unwrap();
            let back: Outcome = serde_json::from_str(&json).unwrap();
            assert_eq!(o, back);
        }
    }
}
