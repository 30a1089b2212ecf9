use std::{
    collections::{HashMap, HashSet, VecDeque},
    hash::Hash,
};

use crate::maze::{Edge, WeightedGraph};

/// Finds a path with the fewest edges from `from` to `to` with breadth-first search.
///
/// Edge weights are ignored. The returned edges are in travel order: the first edge
/// leaves `from`, the last one arrives at `to`, and each edge starts where the previous
/// one ended. Returns an empty path if `to` is unreachable or equal to `from`.
pub fn find_path<V>(graph: &WeightedGraph<V>, from: &V, to: &V) -> Vec<Edge<V>>
where
    V: Eq + Hash + Clone,
{
    if !graph.contains(from) {
        return Vec::new();
    }

    // The edge through which each vertex was first discovered
    let mut parents: HashMap<&V, &Edge<V>> = HashMap::new();
    let mut visited: HashSet<&V> = HashSet::from([from]);
    let mut queue = VecDeque::from([from]);

    while let Some(current) = queue.pop_front() {
        if current == to {
            break;
        }
        for edge in graph.adjacent(current) {
            if visited.insert(&edge.to) {
                parents.insert(&edge.to, edge);
                queue.push_back(&edge.to);
            }
        }
    }

    // Backtrack from the target, then flip into travel order
    let mut path = Vec::new();
    let mut current = to;
    while let Some(&edge) = parents.get(current) {
        path.push(edge.clone());
        current = &edge.from;
    }
    path.reverse();
    path
}
