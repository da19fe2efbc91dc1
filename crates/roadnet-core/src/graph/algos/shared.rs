use crate::graph::GraphProvider;

/// Check that the start node exists, logging when it does not
pub fn start_exists(provider: &dyn GraphProvider, start: &str) -> bool {
    if provider.contains_node(start) {
        true
    } else {
        tracing::warn!(start, "start node not found");
        false
    }
}

/// Rebuild a path by walking predecessors back from `to` until `from`.
///
/// Returns an empty path if the chain breaks before reaching `from`, or if it
/// is longer than `max_nodes` (a cycle in the predecessor chain).
pub fn reconstruct_path<'a, F>(from: &str, to: &'a str, max_nodes: usize, predecessor: F) -> Vec<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut path = vec![to.to_string()];
    let mut current = to;

    while current != from {
        let Some(previous) = predecessor(current) else {
            return Vec::new();
        };
        if path.len() >= max_nodes {
            return Vec::new();
        }
        path.push(previous.to_string());
        current = previous;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_reconstruct_path_follows_predecessors() {
        let preds: HashMap<&str, &str> = [("C", "B"), ("B", "A")].into_iter().collect();
        let path = reconstruct_path("A", "C", 3, |id| preds.get(id).copied());
        assert_eq!(path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reconstruct_path_same_endpoints() {
        let preds: HashMap<&str, &str> = HashMap::new();
        assert_eq!(reconstruct_path("A", "A", 1, |id| preds.get(id).copied()), vec!["A"]);
    }

    #[test]
    fn test_reconstruct_path_broken_chain() {
        let preds: HashMap<&str, &str> = [("C", "B")].into_iter().collect();
        assert!(reconstruct_path("A", "C", 3, |id| preds.get(id).copied()).is_empty());
    }

    #[test]
    fn test_reconstruct_path_cyclic_chain() {
        let preds: HashMap<&str, &str> = [("C", "B"), ("B", "C")].into_iter().collect();
        assert!(reconstruct_path("A", "C", 3, |id| preds.get(id).copied()).is_empty());
    }
}
