//! Enumeration of every subset of the required fields and the single-field
//! transitions between them.
//!
//! A required field is identified by its position in the required fields'
//! declaration order, so a subset is a plain bitset and two acquisition orders that
//! supply the same fields land on the same node.
//!
//! The lattice has `2^N` nodes for `N` required fields. `N` is a property of one
//! record, not of any runtime input; generation refuses records above
//! [`MAX_REQUIRED_FIELDS`] because the emitted type count doubles per field.

use std::fmt;

/// Upper bound on required fields per record.
pub const MAX_REQUIRED_FIELDS: usize = 16;

/// A set of required-field positions.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subset(u32);

impl Subset {
    pub const EMPTY: Subset = Subset(0);

    /// The subset holding positions `0..width`.
    pub fn full(width: usize) -> Self {
        debug_assert!(width <= MAX_REQUIRED_FIELDS);
        Subset(((1u64 << width) - 1) as u32)
    }

    pub fn from_bits(bits: u32) -> Self {
        Subset(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, position: usize) -> bool {
        self.0 & (1 << position) != 0
    }

    #[must_use]
    pub fn with(self, position: usize) -> Self {
        Subset(self.0 | (1 << position))
    }

    /// Positions in `0..width` not in this subset.
    #[must_use]
    pub fn complement(self, width: usize) -> Self {
        Subset(!self.0 & Subset::full(width).0)
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member positions in ascending order.
    pub fn positions(self) -> impl Iterator<Item = usize> {
        (0..u32::BITS as usize).filter(move |&position| self.contains(position))
    }
}

impl FromIterator<usize> for Subset {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Subset::EMPTY, Subset::with)
    }
}

impl fmt::Debug for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.positions()).finish()
    }
}

/// One builder state: the required fields supplied so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub provided: Subset,
    pub missing: Subset,
}

impl Node {
    fn new(provided: Subset, width: usize) -> Self {
        Self {
            provided,
            missing: provided.complement(width),
        }
    }

    pub fn is_initial(&self) -> bool {
        self.provided.is_empty()
    }

    pub fn is_final(&self) -> bool {
        self.missing.is_empty()
    }

    /// Outgoing edges as `(position supplied, successor's provided subset)`.
    pub fn transitions(&self) -> impl Iterator<Item = (usize, Subset)> + '_ {
        self.missing
            .positions()
            .map(move |position| (position, self.provided.with(position)))
    }
}

#[derive(Clone, Debug)]
pub struct Lattice {
    width: usize,
    nodes: Vec<Node>,
}

impl Lattice {
    /// Every subset of `width` required fields, ordered by how many fields are
    /// supplied and then by bit pattern, so `Initial` comes first and `Final` last.
    pub fn enumerate(width: usize) -> Self {
        assert!(
            width <= MAX_REQUIRED_FIELDS,
            "lattice width {width} exceeds {MAX_REQUIRED_FIELDS}"
        );
        let mut nodes: Vec<Node> = (0..1u32 << width)
            .map(|bits| Node::new(Subset::from_bits(bits), width))
            .collect();
        nodes.sort_by_key(|node| (node.provided.len(), node.provided.bits()));
        Self { width, nodes }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, provided: Subset) -> Node {
        Node::new(provided, self.width)
    }

    pub fn initial(&self) -> Node {
        self.node(Subset::EMPTY)
    }

    pub fn terminal(&self) -> Node {
        self.node(Subset::full(self.width))
    }

    /// Nodes with an edge into `provided`.
    pub fn predecessors(&self, provided: Subset) -> impl Iterator<Item = Node> + '_ {
        provided.positions().map(move |position| {
            self.node(Subset::from_bits(provided.bits() & !(1 << position)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn permutations(items: &[usize]) -> Vec<Vec<usize>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for (i, &head) in items.iter().enumerate() {
            let mut rest = items.to_vec();
            rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn lattice_has_two_to_the_n_distinct_nodes() {
        for width in 0..=6 {
            let lattice = Lattice::enumerate(width);
            assert_eq!(lattice.len(), 1 << width);
            let distinct: HashSet<_> = lattice.nodes().iter().map(|n| n.provided).collect();
            assert_eq!(distinct.len(), 1 << width);
        }
    }

    #[test]
    fn initial_first_and_final_last() {
        let lattice = Lattice::enumerate(3);
        assert!(lattice.nodes()[0].is_initial());
        assert!(lattice.nodes()[lattice.len() - 1].is_final());
        assert_eq!(lattice.initial().missing, Subset::full(3));
        assert!(lattice.terminal().missing.is_empty());
    }

    #[test]
    fn empty_lattice_is_one_node_that_is_both_initial_and_final() {
        let lattice = Lattice::enumerate(0);
        assert_eq!(lattice.len(), 1);
        let only = lattice.nodes()[0];
        assert!(only.is_initial());
        assert!(only.is_final());
        assert_eq!(only.transitions().count(), 0);
    }

    #[test]
    fn degrees_match_subset_sizes() {
        let lattice = Lattice::enumerate(4);
        for node in lattice.nodes() {
            assert_eq!(node.transitions().count(), node.missing.len());
            assert_eq!(lattice.predecessors(node.provided).count(), node.provided.len());
            for (position, successor) in node.transitions() {
                assert!(!node.provided.contains(position));
                assert_eq!(successor.len(), node.provided.len() + 1);
                assert!(successor.contains(position));
            }
        }
    }

    #[test]
    fn every_permutation_reaches_final_through_shared_nodes() {
        let lattice = Lattice::enumerate(4);
        let mut visited = HashSet::new();
        for order in permutations(&[0, 1, 2, 3]) {
            let mut node = lattice.initial();
            for position in order {
                let (_, next) = node
                    .transitions()
                    .find(|(p, _)| *p == position)
                    .expect("missing field must have a transition");
                node = lattice.node(next);
                visited.insert(node.provided);
            }
            assert!(node.is_final());
        }
        // every non-initial node is on some path
        assert_eq!(visited.len(), lattice.len() - 1);
    }

    #[test]
    fn subset_identity_ignores_insertion_order() {
        let forward: Subset = [0, 2, 3].into_iter().collect();
        let backward: Subset = [3, 2, 0].into_iter().collect();
        assert_eq!(forward, backward);
        assert_eq!(forward.positions().collect::<Vec<_>>(), vec![0, 2, 3]);
        assert_eq!(forward.complement(5).positions().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn full_subset_at_the_width_limit() {
        let full = Subset::full(MAX_REQUIRED_FIELDS);
        assert_eq!(full.len(), MAX_REQUIRED_FIELDS);
        assert!(full.complement(MAX_REQUIRED_FIELDS).is_empty());
    }
}
