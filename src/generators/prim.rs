use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
    hash::Hash,
};

use crate::maze::{Edge, WeightedGraph};

/// Builds a minimum spanning tree of `graph` with Prim's algorithm.
///
/// The search starts from the first vertex of the graph and only reaches vertices
/// connected to it; anything else is left out of the tree. Tree edges keep their
/// original weights. Stale queue entries (vertices reached again through a heavier
/// edge) are skipped when popped instead of being removed from the heap.
pub fn minimum_spanning_tree<V>(graph: &WeightedGraph<V>) -> WeightedGraph<V>
where
    V: Eq + Hash + Clone + Ord,
{
    let mut tree = WeightedGraph::new();
    let Some(start) = graph.vertices().next() else {
        return tree;
    };

    // Lightest known edge weight into each vertex not yet in the tree
    let mut best_weights: HashMap<V, u32> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::with_capacity(graph.vertex_count());
    // Using Reverse to turn the max-heap into a min-heap
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse(Edge::unweighted(start.clone(), start.clone())));

    while let Some(Reverse(candidate)) = frontier.pop() {
        if visited.len() == graph.vertex_count() {
            break;
        }
        if !visited.insert(candidate.to.clone()) {
            // A lighter edge already brought this vertex into the tree
            continue;
        }

        if candidate.from == candidate.to {
            tree.add_vertex(candidate.to.clone());
        } else {
            tree.insert_edge(&candidate);
        }

        for edge in graph.adjacent(&candidate.to) {
            if visited.contains(&edge.to) {
                continue;
            }
            let improves = best_weights
                .get(&edge.to)
                .is_none_or(|&weight| edge.weight < weight);
            if improves {
                best_weights.insert(edge.to.clone(), edge.weight);
                frontier.push(Reverse(edge.clone()));
            }
        }
    }

    tracing::debug!(
        "[prim] spanning tree with {} vertices and {} edges out of {} vertices",
        tree.vertex_count(),
        tree.edge_count(),
        graph.vertex_count()
    );
    tree
}
