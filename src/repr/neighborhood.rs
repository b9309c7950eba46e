use std::{
    collections::{BTreeSet, btree_set},
    iter::Copied,
    slice::Iter,
};

use itertools::Itertools;

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone + Default + std::fmt::Debug {
    /// Whether the same neighbor can be stored more than once
    const MULTI: bool;

    /// Returns the number of neighbors in the Neighborhood (counting multiplicities)
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if `v` is in the Neighborhood
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Adds a neighbor to the Neighborhood.
    /// Set-like implementations ignore duplicates, list-like ones keep them.
    fn add_neighbor(&mut self, u: Node);

    /// Removes one occurrence of `u` (the most recent one for list-like implementations).
    /// Returns *true* if the node was in the Neighborhood before.
    fn try_remove_neighbor(&mut self, u: Node) -> bool;

    /// Removes all neighbors that fit a given predicate and returns the number of removed neighbors
    fn remove_neighbors_if<F: FnMut(Node) -> bool>(&mut self, predicate: F) -> NumNodes;

    /// Compares two neighborhoods as (multi-)sets
    fn same_neighbors(&self, other: &Self) -> bool;
}

/// Ordered set of neighbors; the storage of simple graphs
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetNeighborhood(pub BTreeSet<Node>);

impl Neighborhood for SetNeighborhood {
    const MULTI: bool = false;

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<btree_set::Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0.contains(&v)
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.insert(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        self.0.remove(&u)
    }

    fn remove_neighbors_if<F>(&mut self, mut predicate: F) -> NumNodes
    where
        F: FnMut(Node) -> bool,
    {
        let size_before = self.0.len();
        self.0.retain(|x| !predicate(*x));
        (size_before - self.0.len()) as NumNodes
    }

    fn same_neighbors(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Neighbors in insertion order, one entry per parallel edge; the storage of multigraphs
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<Node>);

impl Neighborhood for ArrNeighborhood {
    const MULTI: bool = true;

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Node>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some(pos) = self.0.iter().rposition(|&x| x == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    fn remove_neighbors_if<F>(&mut self, mut predicate: F) -> NumNodes
    where
        F: FnMut(Node) -> bool,
    {
        let size_before = self.0.len();
        self.0.retain(|x| !predicate(*x));
        (size_before - self.0.len()) as NumNodes
    }

    fn same_neighbors(&self, other: &Self) -> bool {
        self.0.len() == other.0.len() && self.0.iter().sorted().eq(other.0.iter().sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_neighborhood_ignores_duplicates() {
        let mut nbs = SetNeighborhood::default();
        nbs.add_neighbor(3);
        nbs.add_neighbor(1);
        nbs.add_neighbor(3);
        assert_eq!(nbs.num_of_neighbors(), 2);
        assert_eq!(nbs.neighbors().collect_vec(), vec![1, 3]);
        assert!(nbs.try_remove_neighbor(3));
        assert!(!nbs.try_remove_neighbor(3));
    }

    #[test]
    fn arr_neighborhood_keeps_multiplicities() {
        let mut nbs = ArrNeighborhood::default();
        for u in [4, 2, 4, 7] {
            nbs.add_neighbor(u);
        }
        assert_eq!(nbs.num_of_neighbors(), 4);
        assert!(nbs.try_remove_neighbor(4));
        assert_eq!(nbs.neighbors().collect_vec(), vec![4, 2, 7]);

        let other = ArrNeighborhood(vec![7, 4, 2]);
        assert!(nbs.same_neighbors(&other));
        assert!(!nbs.same_neighbors(&ArrNeighborhood(vec![7, 4, 4])));

        assert_eq!(nbs.remove_neighbors_if(|u| u > 3), 2);
        assert_eq!(nbs.neighbors().collect_vec(), vec![2]);
    }
}
