//! End-to-end scenarios across engine, views and facade

use super::*;
use crate::identity::{Disposable, Identifiable, SequentialIds, Tagged};

fn id(s: &str) -> VertexId {
    VertexId::from(s)
}

/// A -> B, A -> C, B -> C, C -> D, C -> A
fn scenario_a() -> DiGraph {
    let mut graph = DiGraph::simple();
    for name in ["A", "B", "C", "D"] {
        graph.add_vertex(Vertex::new(name));
    }
    for (from, to) in [("A", "B"), ("A", "C"), ("B", "C"), ("C", "D"), ("C", "A")] {
        graph
            .add_edge(Edge::directed(from, to))
            .unwrap()
            .expect("simple graph accepts distinct pairs");
    }
    graph
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn directed_scenario_counts_and_degrees() {
        let graph = scenario_a();

        assert_eq!(graph.num_vertices(), 4);
        assert_eq!(graph.num_edges(), 5);
        // C -> D and C -> A
        assert_eq!(graph.out_degree_of(&id("C")).unwrap(), 2);
        assert_eq!(graph.in_degree_of(&id("C")).unwrap(), 2);

        let mut neighbors: Vec<VertexId> =
            graph.neighbors_of(&id("A")).unwrap().ids().cloned().collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![id("B"), id("C")]);
        graph.engine().assert_consistent();
    }

    #[test]
    fn undirected_simple_refuses_second_edge() {
        let mut graph: UnGraph = UnGraph::simple();
        graph.add_vertex(Vertex::new("A"));
        graph.add_vertex(Vertex::new("B"));

        assert!(graph.add_edge(Edge::undirected("A", "B")).unwrap().is_some());
        assert!(graph.add_edge(Edge::undirected("A", "B")).unwrap().is_none());
        assert_eq!(graph.num_edges(), 1);
        graph.engine().assert_consistent();
    }

    #[test]
    fn in_and_out_degrees_sum_to_edge_count() {
        let graph = scenario_a();
        let out: usize = graph
            .vertices()
            .ids()
            .map(|v| graph.out_degree_of(v).unwrap())
            .sum();
        let inc: usize = graph
            .vertices()
            .ids()
            .map(|v| graph.in_degree_of(v).unwrap())
            .sum();
        assert_eq!(out, graph.num_edges());
        assert_eq!(inc, graph.num_edges());
    }

    #[test]
    fn removing_hub_vertex_cascades() {
        let mut graph = scenario_a();
        assert!(graph.remove_vertex(&id("C")));

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 1);
        for edge in graph.edges() {
            assert_ne!(edge.v1(), &id("C"));
            assert_ne!(edge.v2(), &id("C"));
        }
        assert!(graph.edge_between(&id("B"), &id("C")).is_none());
        assert_eq!(graph.in_degree_of(&id("A")).unwrap(), 0);
        graph.engine().assert_consistent();
    }

    #[test]
    fn repeated_removals_are_noops() {
        let mut graph = scenario_a();
        let edge = graph.edge_between(&id("A"), &id("B")).unwrap().id();

        assert!(graph.remove_edge(&edge).is_some());
        assert!(graph.remove_edge(&edge).is_none());
        assert!(graph.remove_vertex(&id("D")));
        assert!(!graph.remove_vertex(&id("D")));
        assert!(!graph.add_vertex(Vertex::new("A")));
        assert_eq!(graph.num_edges(), 3);
        graph.engine().assert_consistent();
    }
}

#[cfg(test)]
mod variant_tests {
    use super::*;

    #[test]
    fn multigraph_accepts_parallel_but_not_loops() {
        let mut graph: DiGraph = DiGraph::multigraph();
        graph.add_vertex(Vertex::new("a"));
        graph.add_vertex(Vertex::new("b"));

        assert!(graph.connect(&id("a"), &id("b")).unwrap().is_some());
        assert!(graph.connect(&id("a"), &id("b")).unwrap().is_some());
        assert!(graph.connect(&id("a"), &id("a")).unwrap().is_none());
        assert_eq!(graph.multi_edges(&id("a"), &id("b")).len(), 2);
        assert_eq!(graph.out_degree_of(&id("a")).unwrap(), 2);
    }

    #[test]
    fn pseudograph_accepts_loops_and_parallel() {
        let mut graph: UnGraph = UnGraph::pseudograph();
        graph.add_vertex(Vertex::new("a"));
        graph.add_vertex(Vertex::new("b"));

        assert!(graph.connect(&id("a"), &id("a")).unwrap().is_some());
        assert!(graph.connect(&id("a"), &id("b")).unwrap().is_some());
        assert!(graph.connect(&id("b"), &id("a")).unwrap().is_some());

        // loop counts once, plus two parallel edges to b
        assert_eq!(graph.degree_of(&id("a")).unwrap(), 3);
        assert_eq!(graph.degree_of(&id("b")).unwrap(), 2);
        assert_eq!(graph.neighbors_of(&id("a")).unwrap().multiplicity(&id("b")), 2);
        graph.engine().assert_consistent();
    }

    #[test]
    fn graph_identity_and_tag() {
        let mut graph: DiGraph = DiGraph::simple().with_id("g-1");
        assert_eq!(graph.id(), Some("g-1"));
        assert!(graph.has_id());
        assert_eq!(graph.tag(), None);

        graph.set_tag(Some("roads".into()));
        assert_eq!(graph.tag_or("fallback"), "roads");
    }

    #[test]
    fn new_vertices_from_sequential_generator() {
        let config = GraphConfig {
            kind: GraphKind::Simple,
            id_prefix: Some("v".into()),
            ..GraphConfig::default()
        };
        let mut graph: UnGraph = UnGraph::from_config(&config);
        let a = graph.new_vertex();
        let b = graph.new_vertex();
        let (a_id, b_id) = (a.vertex_id().clone(), b.vertex_id().clone());
        graph.add_vertex(a);
        graph.add_vertex(b);
        graph.connect(&a_id, &b_id).unwrap();

        assert_eq!(graph.to_string(), "id=null, tag=null::V = {v0, v1, } E = {v0<->v1, }");
    }

    #[test]
    fn dispose_releases_payloads() {
        let mut graph: DiGraph<Vec<u8>> = DiGraph::simple();
        graph.add_vertex(Vertex::new("a").with_data(vec![1, 2, 3]));
        graph.dispose();
        assert!(graph.is_empty());
        assert!(graph.vertex(&id("a")).is_none());

        let mut ids = SequentialIds::new("x");
        let mut detached: Vertex<Vec<u8>> = Vertex::generated(&mut ids).with_data(vec![9]);
        detached.dispose();
        assert!(detached.data().is_none());
    }
}
