//! The graph a threshold-based matcher would hand to post-processing

use rustworkx_core::petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use rustworkx_core::petgraph::visit::EdgeRef;
use std::collections::HashMap;

use crate::eval::flip::LabeledEdges;
use crate::graph::{Edge, EdgeTag, Location, NodeId};

/// Undirected graph of accepted matches, each edge remembering its true location
#[derive(Debug, Clone)]
pub struct FilteredGraph {
    pub graph: UnGraph<NodeId, Location>,
    index: HashMap<NodeId, NodeIndex>,
}

impl FilteredGraph {
    /// Empty graph over `nodes`
    pub fn with_nodes(nodes: &[NodeId]) -> Self {
        let mut graph = UnGraph::with_capacity(nodes.len(), 0);
        let mut index = HashMap::with_capacity(nodes.len());
        for &node in nodes {
            index.insert(node, graph.add_node(node));
        }
        Self { graph, index }
    }

    /// Add or relabel an edge; returns `None` if an endpoint is unknown
    pub fn add_edge(&mut self, edge: Edge, location: Location) -> Option<EdgeIndex> {
        let a = *self.index.get(&edge.u)?;
        let b = *self.index.get(&edge.v)?;
        Some(self.graph.update_edge(a, b, location))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True location of the edge between `edge.u` and `edge.v`, if present
    pub fn location(&self, edge: Edge) -> Option<Location> {
        let a = *self.index.get(&edge.u)?;
        let b = *self.index.get(&edge.v)?;
        let index = self.graph.find_edge(a, b)?;
        self.graph.edge_weight(index).copied()
    }

    /// Edges as (node pair, location)
    pub fn edges(&self) -> impl Iterator<Item = (Edge, Location)> + '_ {
        self.graph.edge_references().map(|e| {
            let pair = Edge::new(self.graph[e.source()], self.graph[e.target()]);
            (pair, *e.weight())
        })
    }
}

/// Rebuild the post-processing graph from the flip decisions.
///
/// Contains every node, every false-negative inter-cluster edge, and every
/// intra-cluster edge that is not don't-care. Flipped intra-cluster edges
/// stay in.
pub fn make_new_graph(
    nodes: &[NodeId],
    global: &LabeledEdges<'_>,
    clusters: &[LabeledEdges<'_>],
) -> FilteredGraph {
    let mut filtered = FilteredGraph::with_nodes(nodes);
    let mut unknown = 0usize;

    for edge in global.false_negatives() {
        if filtered.add_edge(edge, Location::Intercluster).is_none() {
            unknown += 1;
        }
    }

    for cluster in clusters {
        for (edge, _, tag) in cluster.iter() {
            if tag == EdgeTag::DontCare {
                continue;
            }
            if filtered.add_edge(edge, Location::Intracluster).is_none() {
                unknown += 1;
            }
        }
    }

    if unknown > 0 {
        log::warn!("Skipped {} edges with endpoints outside the node set", unknown);
    }

    log::debug!(
        "Filtered graph: {} nodes, {} edges",
        filtered.node_count(),
        filtered.edge_count()
    );

    filtered
}
