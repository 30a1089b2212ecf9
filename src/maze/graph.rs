use std::{collections::HashMap, hash::Hash};

/// A directed edge record. An undirected connection is stored as two records,
/// `(u, v, w)` and `(v, u, w)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
    pub weight: u32,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V, weight: u32) -> Self {
        Edge { from, to, weight }
    }

    /// Structural edge with zero weight.
    pub fn unweighted(from: V, to: V) -> Self {
        Edge::new(from, to, 0)
    }
}

/// Edges are ordered by weight. Ties fall back to the endpoints so that the
/// ordering stays consistent with equality.
impl<V: Ord> Ord for Edge<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl<V: Ord> PartialOrd for Edge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Undirected weighted graph stored as adjacency lists.
///
/// Vertices are kept in insertion order, so iterating a graph built the same way
/// always yields the same sequence.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    vertices: Vec<V>,
    /// Position of each vertex in `vertices` and `adjacency`
    index: HashMap<V, usize>,
    adjacency: Vec<Vec<Edge<V>>>,
}

impl<V> Default for WeightedGraph<V> {
    fn default() -> Self {
        WeightedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> WeightedGraph<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.iter()
    }

    /// Outgoing edges of `vertex`, empty if the vertex is not in the graph.
    pub fn adjacent(&self, vertex: &V) -> &[Edge<V>] {
        self.index
            .get(vertex)
            .map(|&idx| self.adjacency[idx].as_slice())
            .unwrap_or_default()
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacent(from).iter().any(|edge| &edge.to == to)
    }

    /// All stored edge records. Every undirected edge appears once per direction.
    pub fn edges(&self) -> Vec<Edge<V>> {
        self.adjacency.iter().flatten().cloned().collect()
    }

    /// Registers `vertex` without connecting it. No-op if it is already present.
    pub fn add_vertex(&mut self, vertex: V) {
        self.vertex_index(vertex);
    }

    /// Connects `from` and `to` in both directions.
    ///
    /// Each direction is only inserted if that ordered pair is not stored yet, so adding
    /// the same connection again leaves the graph unchanged. A self-loop only registers
    /// the vertex.
    pub fn add_edge(&mut self, from: V, to: V, weight: u32) {
        if from == to {
            self.add_vertex(from);
            return;
        }
        self.add_directed_edge(from.clone(), to.clone(), weight);
        self.add_directed_edge(to, from, weight);
    }

    /// Same as [`Self::add_edge`] with the fields of an existing record.
    pub fn insert_edge(&mut self, edge: &Edge<V>) {
        self.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
    }

    fn add_directed_edge(&mut self, from: V, to: V, weight: u32) {
        // Grid vertices have at most four neighbors, so a linear scan is enough
        if self.has_edge(&from, &to) {
            return;
        }
        let idx = self.vertex_index(from.clone());
        // Make sure the target is a vertex even before its reverse edge lands
        self.vertex_index(to.clone());
        self.adjacency[idx].push(Edge::new(from, to, weight));
    }

    /// Index of `vertex`, inserting it if needed.
    fn vertex_index(&mut self, vertex: V) -> usize {
        if let Some(&idx) = self.index.get(&vertex) {
            return idx;
        }
        let idx = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.index.insert(vertex, idx);
        self.adjacency.push(Vec::new());
        idx
    }
}

/// Graphs are equal when they have the same vertices and the same edge records,
/// regardless of insertion order.
impl<V: Eq + Hash + Clone> PartialEq for WeightedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.vertices().all(|vertex| {
                let ours = self.adjacent(vertex);
                let theirs = other.adjacent(vertex);
                other.contains(vertex)
                    && ours.len() == theirs.len()
                    && ours.iter().all(|edge| theirs.contains(edge))
            })
    }
}

impl<V: Eq + Hash + Clone> Eq for WeightedGraph<V> {}
