//! Biconnected component decomposition

use rustworkx_core::connectivity::articulation_points;
use rustworkx_core::petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use hashbrown::HashMap;
use std::collections::BTreeMap;

use crate::graph::FilteredGraph;

/// Edge sets of every biconnected component.
///
/// A bridge forms its own two-node component, so every edge of the graph
/// lands in exactly one component; isolated nodes belong to none.
pub fn biconnected_component_edges<N, E>(graph: &UnGraph<N, E>) -> Vec<Vec<EdgeIndex>> {
    let mut membership: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();
    let _cut_vertices = articulation_points(graph, Some(&mut membership));

    let mut components: BTreeMap<usize, Vec<EdgeIndex>> = BTreeMap::new();
    for ((a, b), component) in membership {
        if let Some(edge) = graph.find_edge(a, b) {
            components.entry(component).or_default().push(edge);
        }
    }

    components
        .into_values()
        .map(|mut edges| {
            edges.sort_unstable();
            edges
        })
        .collect()
}

/// All edges that belong to some biconnected component, flattened
pub fn biconnected_components_gen(filtered: &FilteredGraph) -> Vec<EdgeIndex> {
    let components = biconnected_component_edges(&filtered.graph);
    log::debug!("Found {} biconnected components", components.len());
    components.into_iter().flatten().collect()
}

/// Edges of the filtered graph outside every listed component
pub fn non_bcc_edges(filtered: &FilteredGraph, bcc_edges: &[EdgeIndex]) -> Vec<EdgeIndex> {
    let mut in_bcc = vec![false; filtered.edge_count()];
    for e in bcc_edges {
        in_bcc[e.index()] = true;
    }
    filtered
        .graph
        .edge_indices()
        .filter(|e| !in_bcc[e.index()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Location};
    use std::collections::BTreeSet;

    fn component_sets(graph: &UnGraph<(), ()>) -> BTreeSet<BTreeSet<(usize, usize)>> {
        biconnected_component_edges(graph)
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|e| {
                        let (a, b) = graph.edge_endpoints(e).unwrap();
                        (a.index().min(b.index()), a.index().max(b.index()))
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn triangle_is_one_component() {
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 0)]);
        let components = biconnected_component_edges(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 3);
    }

    #[test]
    fn bridges_are_their_own_components() {
        // path 0-1-2 plus a pendant 3 on 1
        let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (1, 3)]);
        let sets = component_sets(&graph);
        assert_eq!(sets.len(), 3);
        assert!(sets.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn two_triangles_sharing_a_cut_vertex() {
        let graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 0),
            (2, 3),
            (3, 4),
            (4, 2),
        ]);
        let sets = component_sets(&graph);
        let expected: BTreeSet<BTreeSet<(usize, usize)>> = [
            [(0, 1), (1, 2), (0, 2)].into_iter().collect(),
            [(2, 3), (3, 4), (2, 4)].into_iter().collect(),
        ]
        .into_iter()
        .collect();
        assert_eq!(sets, expected);
    }

    #[test]
    fn every_edge_lands_in_exactly_one_component() {
        let graph = UnGraph::<(), ()>::from_edges([
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 0),
            (3, 4),
            (4, 5),
            (5, 6),
            (6, 4),
            (7, 8),
        ]);
        let mut seen: Vec<EdgeIndex> = biconnected_component_edges(&graph)
            .into_iter()
            .flatten()
            .collect();
        seen.sort();
        let all: Vec<EdgeIndex> = graph.edge_indices().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn isolated_nodes_yield_nothing() {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        graph.add_node(());
        graph.add_node(());
        assert!(biconnected_component_edges(&graph).is_empty());
    }

    #[test]
    fn edges_outside_the_listed_components_are_reported() {
        let mut filtered = FilteredGraph::with_nodes(&[1, 2, 3, 4]);
        filtered.add_edge(Edge::new(1, 2), Location::Intracluster);
        filtered.add_edge(Edge::new(3, 4), Location::Intercluster);

        let all = biconnected_components_gen(&filtered);
        assert_eq!(all.len(), 2);
        assert!(non_bcc_edges(&filtered, &all).is_empty());
        assert_eq!(non_bcc_edges(&filtered, &all[..1]), vec![all[1]]);
    }
}
