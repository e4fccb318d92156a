//! Disjoint-set forest over arbitrary hashable items
//!
//! ```
//! use aoc_solutions::utils::union_find::UnionFind;
//!
//! let mut uf = UnionFind::new(["a", "b", "c"]);
//! assert!(uf.union(&"a", &"b"));
//! assert!(!uf.union(&"b", &"a"));
//! assert_eq!(uf.find(&"a"), uf.find(&"b"));
//!
//! let mut sizes = uf.component_sizes();
//! sizes.sort_unstable();
//! assert_eq!(sizes, vec![1, 2]);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: HashMap<T, T>,
    rank: HashMap<T, u32>,
}

impl<T: Hash + Eq + Clone> UnionFind<T> {
    /// Every item starts as its own singleton component. Duplicates collapse.
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let parent: HashMap<T, T> = items
            .into_iter()
            .map(|item| (item.clone(), item))
            .collect();
        let rank = parent.keys().map(|item| (item.clone(), 0)).collect();
        Self { parent, rank }
    }

    /// Representative of `item`'s component, or `None` for an unknown item.
    ///
    /// Every node on the walked path is re-pointed at the root.
    pub fn find(&mut self, item: &T) -> Option<T> {
        let mut root = self.parent.get(item)?.clone();
        loop {
            let next = &self.parent[&root];
            if *next == root {
                break;
            }
            root = next.clone();
        }

        let mut current = item.clone();
        while current != root {
            current = std::mem::replace(self.parent.get_mut(&current)?, root.clone());
        }

        Some(root)
    }

    /// Merge the components of `a` and `b`.
    ///
    /// Returns `false` when they were already connected or either item is unknown.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank[&root_a];
        let rank_b = self.rank[&root_b];
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else {
            if rank_a == rank_b {
                *self.rank.entry(root_a.clone()).or_default() += 1;
            }
            self.parent.insert(root_b, root_a);
        }
        true
    }

    /// Sizes of all components, in no particular order.
    pub fn component_sizes(&mut self) -> Vec<usize> {
        let items: Vec<T> = self.parent.keys().cloned().collect();
        let mut sizes: HashMap<T, usize> = HashMap::new();
        for item in &items {
            if let Some(root) = self.find(item) {
                *sizes.entry(root).or_default() += 1;
            }
        }
        sizes.into_values().collect()
    }
}
