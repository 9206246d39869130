use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use weighted_graph::algorithm::{ShortestPathAlgorithm, ShortestPaths};
use weighted_graph::demo::sample_graph;
use weighted_graph::graph::{Graph, MutableGraph, WeightedGraph};
use weighted_graph::{Dijkstra, Error};

// Random graph over vertices 0..n with non-negative weights
fn random_graph(n: i64, edges: usize, seed: u64) -> WeightedGraph<i64> {
    let mut graph = WeightedGraph::with_capacity(n as usize);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph.add_edge(u, v, rng.gen_range(0..50));
    }

    graph
}

// Every edge out of a reached vertex must already be relaxed
fn assert_relaxed(graph: &WeightedGraph<i64>, paths: &ShortestPaths<i64>) {
    for u in graph.vertices() {
        let Some(du) = paths.distance(u) else { continue };
        for (v, c) in graph.outgoing_edges(u) {
            let dv = paths.distance(v).expect("successor of a reached vertex is reached");
            assert!(dv <= du + c, "edge {}->{} ({}) not relaxed: {} > {} + {}", u, v, c, dv, du, c);
        }
    }
}

#[test]
fn test_sample_graph_distances() {
    let graph = sample_graph();
    let paths = graph.shortest_paths(1).unwrap();

    assert_eq!(paths.sorted(), vec![(1, 0), (2, 3), (3, 5), (4, 5), (5, 13)]);
}

#[test]
fn test_sample_graph_paths_follow_edges() {
    let graph = sample_graph();
    let paths = graph.shortest_paths(1).unwrap();

    assert_eq!(paths.path_to(1), Some(vec![1]));
    assert_eq!(paths.path_to(4), Some(vec![1, 2, 4]));
    assert_eq!(paths.path_to(5), Some(vec![1, 2, 5]));

    let path = paths.path_to(5).unwrap();
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]));
    }
}

#[test]
fn test_distances_after_weight_change() {
    let mut graph = sample_graph();
    graph.change_edge_weight(1, 2, 99);

    let paths = graph.shortest_paths(1).unwrap();
    assert_eq!(paths.distance(2), Some(99));
    assert_eq!(paths.distance(3), Some(5));
    assert_eq!(paths.distance(4), Some(12));
    assert_eq!(paths.distance(5), Some(20));
}

#[test]
fn test_unreachable_vertices_keep_sentinel() {
    let mut graph: WeightedGraph<i64> = WeightedGraph::new();
    graph.add_edge(1, 2, 4);
    graph.add_edge(3, 1, 1);
    graph.add_vertex(9);

    let paths = graph.shortest_paths(1).unwrap();

    assert_eq!(paths.distances.len(), 4);
    assert_eq!(paths.distances[&3], i64::MAX);
    assert_eq!(paths.distances[&9], ShortestPaths::<i64>::infinity());
    assert_eq!(paths.distance(3), None);
    assert!(!paths.is_reachable(9));
    assert_eq!(paths.path_to(9), None);
}

#[test]
fn test_unknown_start_vertex() {
    let graph = sample_graph();

    assert_eq!(graph.shortest_paths(42), Err(Error::VertexNotFound(42)));
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph = sample_graph();
    graph.add_edge(4, 5, -3);

    assert_eq!(
        graph.shortest_paths(1),
        Err(Error::NegativeWeight { from: 4, to: 5 })
    );
}

#[test]
fn test_stale_entries_do_not_win() {
    // 1->3 is queued at 10 first, then improved to 2 through vertex 2
    let mut graph: WeightedGraph<i64> = WeightedGraph::new();
    graph.add_edge(1, 3, 10);
    graph.add_edge(1, 2, 1);
    graph.add_edge(2, 3, 1);
    graph.add_edge(3, 4, 1);

    let paths = graph.shortest_paths(1).unwrap();
    assert_eq!(paths.distance(3), Some(2));
    assert_eq!(paths.distance(4), Some(3));
    assert_eq!(paths.path_to(4), Some(vec![1, 2, 3, 4]));
}

#[test]
fn test_duplicate_edges_use_cheapest() {
    let mut graph: WeightedGraph<i64> = WeightedGraph::new();
    graph.add_edge(1, 2, 10);
    graph.add_edge(1, 2, 3);

    let paths = graph.shortest_paths(1).unwrap();
    assert_eq!(paths.distance(2), Some(3));
}

#[test]
fn test_saturating_sums_stay_unreachable() {
    let mut graph: WeightedGraph<i32> = WeightedGraph::new();
    graph.add_edge(1, 2, i32::MAX);
    graph.add_edge(2, 3, i32::MAX);

    let paths = graph.shortest_paths(1).unwrap();
    assert_eq!(paths.distance(1), Some(0));
    assert_eq!(paths.distance(3), None);
}

#[test]
fn test_self_loop_and_zero_weights() {
    let mut graph: WeightedGraph<u32> = WeightedGraph::new();
    graph.add_edge(1, 1, 0);
    graph.add_edge(1, 2, 0);
    graph.add_edge(2, 1, 0);

    let paths = graph.shortest_paths(1).unwrap();
    assert_eq!(paths.distance(1), Some(0));
    assert_eq!(paths.distance(2), Some(0));
}

#[test]
fn test_random_graphs_start_zero_and_relaxed() {
    for seed in 0..20 {
        let graph = random_graph(60, 240, seed);
        let paths = graph.shortest_paths(0).unwrap();

        assert_eq!(paths.distance(0), Some(0));
        assert_eq!(paths.distances.len(), graph.vertex_count());
        assert_relaxed(&graph, &paths);
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = random_graph(40, 120, 7);

    let first = graph.shortest_paths(3).unwrap();
    let second = graph.shortest_paths(3).unwrap();
    assert_eq!(first.distances, second.distances);
}

#[test]
fn test_settled_tracking_matches_lazy_mode() {
    let lazy = Dijkstra::new();
    let settled = Dijkstra::new().with_settled_tracking(true);

    for seed in 0..10 {
        let graph = random_graph(50, 200, seed);
        let a = lazy.compute_shortest_paths(&graph, 0).unwrap();
        let b = settled.compute_shortest_paths(&graph, 0).unwrap();
        assert_eq!(a.distances, b.distances);
    }
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<i64, WeightedGraph<i64>>>::name(&lazy),
        "Dijkstra"
    );
}
