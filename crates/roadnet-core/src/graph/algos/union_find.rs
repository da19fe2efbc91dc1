//! Disjoint-set forest keyed by node id
//!
//! Plain attachment (no union by rank or size) with full path compression on
//! `find`. Lives for the duration of a single Kruskal run.

use std::collections::HashMap;

/// Union-Find over borrowed node ids
#[derive(Debug, Clone, Default)]
pub struct UnionFind<'a> {
    parent: HashMap<&'a str, &'a str>,
}

impl<'a> UnionFind<'a> {
    /// Create a structure with every element in its own singleton set
    pub fn new<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        UnionFind {
            parent: elements.into_iter().map(|e| (e, e)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`, `None` if `x` is unknown.
    ///
    /// Every element on the walk is re-parented directly to the root.
    pub fn find(&mut self, x: &str) -> Option<&'a str> {
        let (&element, _) = self.parent.get_key_value(x)?;

        let mut root = element;
        while let Some(&parent) = self.parent.get(root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = element;
        while current != root {
            let Some(next) = self.parent.insert(current, root) else {
                break;
            };
            current = next;
        }

        Some(root)
    }

    /// Merge the sets of `a` and `b` by attaching root(b) under root(a).
    ///
    /// Nothing happens when both already share a root. Returns whether a
    /// merge took place.
    pub fn union(&mut self, a: &str, b: &str) -> bool {
        let (Some(root_a), Some(root_b)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_b, root_a);
        true
    }

    pub fn connected(&mut self, a: &str, b: &str) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|(k, v)| k == v).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_singletons() {
        let mut sets = UnionFind::new(["A", "B", "C"]);
        assert_eq!(sets.len(), 3);
        assert_eq!(sets.set_count(), 3);
        assert_eq!(sets.find("B"), Some("B"));
    }

    #[test]
    fn test_find_unknown_element() {
        let mut sets = UnionFind::new(["A"]);
        assert_eq!(sets.find("Z"), None);
        assert!(!sets.union("A", "Z"));
    }

    #[test]
    fn test_union_attaches_second_root_under_first() {
        let mut sets = UnionFind::new(["A", "B"]);
        assert!(sets.union("A", "B"));
        assert_eq!(sets.find("B"), Some("A"));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_union_same_set_is_rejected() {
        let mut sets = UnionFind::new(["A", "B", "C"]);
        assert!(sets.union("A", "B"));
        assert!(sets.union("B", "C"));
        assert!(!sets.union("C", "A"));
        assert!(!sets.union("A", "A"));
        assert_eq!(sets.set_count(), 1);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut sets = UnionFind::new(["A", "B", "C", "D"]);
        // Build the chain D -> C -> B -> A
        sets.union("C", "D");
        sets.union("B", "C");
        sets.union("A", "B");

        assert_eq!(sets.find("D"), Some("A"));
        assert_eq!(sets.parent.get("D"), Some(&"A"));
        assert_eq!(sets.parent.get("C"), Some(&"A"));
    }

    #[test]
    fn test_connected() {
        let mut sets = UnionFind::new(["A", "B", "C"]);
        sets.union("A", "B");
        assert!(sets.connected("A", "B"));
        assert!(!sets.connected("A", "C"));
        assert!(!sets.connected("A", "Z"));
    }
}
