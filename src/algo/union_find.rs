/*!
# Union-Find

Disjoint sets over arbitrary vertex ids with union by rank and path compression.
*/

use super::*;

/// Disjoint-set forest over [`Node`]s
#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    index: FxHashMap<Node, usize>,
    elements: Vec<Node>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates singleton sets for all given elements
    pub fn from_elements(elements: impl IntoIterator<Item = Node>) -> Self {
        let mut uf = Self::new();
        for x in elements {
            uf.make_set(x);
        }
        uf
    }

    /// Adds `x` as a singleton set. Returns *false* if `x` was already known.
    pub fn make_set(&mut self, x: Node) -> bool {
        if self.index.contains_key(&x) {
            return false;
        }
        let i = self.elements.len();
        self.index.insert(x, i);
        self.elements.push(x);
        self.parent.push(i);
        self.rank.push(0);
        self.sets += 1;
        true
    }

    /// Representative of the set containing `x`; `None` if `x` is unknown
    pub fn find(&mut self, x: Node) -> Option<Node> {
        let i = *self.index.get(&x)?;
        let root = self.find_root(i);
        Some(self.elements[root])
    }

    fn find_root(&mut self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[i] != root {
            let next = self.parent[i];
            self.parent[i] = root;
            i = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`, creating unknown elements first.
    /// Returns *true* if two different sets were merged.
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        self.make_set(x);
        self.make_set(y);
        let rx = self.find_root(self.index[&x]);
        let ry = self.find_root(self.index[&y]);
        if rx == ry {
            return false;
        }

        match self.rank[rx].cmp(&self.rank[ry]) {
            std::cmp::Ordering::Less => self.parent[rx] = ry,
            std::cmp::Ordering::Greater => self.parent[ry] = rx,
            std::cmp::Ordering::Equal => {
                self.parent[ry] = rx;
                self.rank[rx] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns *true* if both are known and in the same set
    pub fn same_set(&mut self, x: Node, y: Node) -> bool {
        match (self.find(x), self.find(y)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Number of disjoint sets
    pub fn number_of_sets(&self) -> usize {
        self.sets
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn union_and_find() {
        let mut uf = UnionFind::from_elements([10, 20, 30, 40]);
        assert_eq!(uf.number_of_sets(), 4);
        assert!(uf.union(10, 20));
        assert!(uf.union(30, 40));
        assert!(!uf.union(20, 10));
        assert!(uf.same_set(10, 20));
        assert!(!uf.same_set(10, 30));
        assert!(!uf.same_set(10, 99));
        assert_eq!(uf.number_of_sets(), 2);
        assert_eq!(uf.find(99), None);

        assert!(uf.union(40, 50));
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.find(50), uf.find(30));
    }

    #[test]
    fn agrees_with_naive_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1234);
        for _ in 0..20 {
            let n = 50u32;
            let mut uf = UnionFind::from_elements(0..n);
            let mut label: Vec<u32> = (0..n).collect();

            for _ in 0..40 {
                let (a, b) = (rng.random_range(0..n), rng.random_range(0..n));
                let merged = uf.union(a, b);
                let (la, lb) = (label[a as usize], label[b as usize]);
                assert_eq!(merged, la != lb);
                for l in label.iter_mut() {
                    if *l == lb {
                        *l = la;
                    }
                }
            }

            for (a, b) in (0..n).tuple_combinations() {
                assert_eq!(uf.same_set(a, b), label[a as usize] == label[b as usize]);
            }
            assert_eq!(uf.number_of_sets(), label.iter().unique().count());
        }
    }
}
