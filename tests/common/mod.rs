//! Common test utilities for graphite integration tests
//!
//! Tracing setup, fixture graphs and an invariant checker that works only
//! through the public API.

#![allow(dead_code)]

use graphite::{DiGraph, Graph, EdgeType, UnGraph, Vertex, VertexId};

/// Install a test-writer subscriber once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

pub fn vid(s: &str) -> VertexId {
    VertexId::from(s)
}

/// Add one vertex per name
pub fn with_vertices<Ty: EdgeType>(graph: &mut Graph<(), (), Ty>, names: &[&str]) {
    for name in names {
        graph.add_vertex(Vertex::new(*name));
    }
}

/// Directed simple graph from `(from, to)` pairs
pub fn digraph(names: &[&str], pairs: &[(&str, &str)]) -> DiGraph {
    let mut graph = DiGraph::simple();
    with_vertices(&mut graph, names);
    for (from, to) in pairs {
        graph
            .connect(&vid(from), &vid(to))
            .expect("fixture endpoints exist");
    }
    graph
}

/// Undirected simple graph from `(a, b)` pairs
pub fn ungraph(names: &[&str], pairs: &[(&str, &str)]) -> UnGraph {
    let mut graph = UnGraph::simple();
    with_vertices(&mut graph, names);
    for (a, b) in pairs {
        graph
            .connect(&vid(a), &vid(b))
            .expect("fixture endpoints exist");
    }
    graph
}

/// Check cross-index consistency through the public API
pub fn assert_invariants<V, E, Ty: EdgeType>(graph: &Graph<V, E, Ty>) {
    let mut out_total = 0;
    let mut in_total = 0;

    for vertex in graph.vertices().ids() {
        let out = graph.incidence_out_of(vertex).expect("listed vertex exists");
        let inc = graph.incidence_in_of(vertex).expect("listed vertex exists");
        out_total += out.len();
        in_total += inc.len();

        if graph.is_directed() {
            for edge in out.iter() {
                assert_eq!(edge.v1(), vertex, "out-incidence holds foreign edge");
            }
            for edge in inc.iter() {
                assert_eq!(edge.v2(), vertex, "in-incidence holds foreign edge");
            }
        } else {
            assert_eq!(out.len(), inc.len(), "undirected degree asymmetry at {}", vertex);
            for edge in out.iter() {
                assert!(edge.opposite(vertex).is_some(), "incidence holds foreign edge");
            }
        }
        for edge in out.iter().chain(inc.iter()) {
            assert!(graph.contains_edge(&edge.id()));
        }

        let neighbors = graph.neighbors_of(vertex).expect("listed vertex exists");
        for neighbor in neighbors.ids() {
            assert!(graph.has_vertex(neighbor), "dangling neighbor {}", neighbor);
            assert!(graph.has_edge(vertex, neighbor));
        }
    }

    for edge in graph.edges() {
        assert!(graph.has_vertex(edge.v1()));
        assert!(graph.has_vertex(edge.v2()));
        assert!(graph.multi_edges(edge.v1(), edge.v2()).iter().any(|e| e.id() == edge.id()));
        assert!(graph
            .neighbors_of(edge.v1())
            .expect("endpoint exists")
            .contains(edge.v2()));
        if !graph.allows_self_loops() {
            assert!(!edge.is_self_loop(), "forbidden self-loop {}", edge);
        }
        if !graph.allows_multi_edges() {
            assert_eq!(
                graph.multi_edges(edge.v1(), edge.v2()).len(),
                1,
                "forbidden parallel edge {}",
                edge
            );
        }
    }

    if graph.is_directed() {
        assert_eq!(out_total, graph.num_edges());
        assert_eq!(in_total, graph.num_edges());
    }
}
