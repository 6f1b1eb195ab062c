mod common;

use std::collections::HashSet;

use stadiumgraph_lib::Graph;

use common::ballparks;

fn chain() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge("one", "two", 1.0);
    graph.add_edge("two", "three", 2.0);
    graph.add_edge("three", "four", 4.0);
    graph
}

#[test]
fn traversals_are_stable_across_calls() {
    let graph = ballparks();
    let bfs = graph.bfs("Wrigley Field").expect("known start");
    let dfs = graph.dfs("Wrigley Field").expect("known start");

    for _ in 0..5 {
        assert_eq!(graph.bfs("Wrigley Field"), Some(bfs.clone()));
        assert_eq!(graph.dfs("Wrigley Field"), Some(dfs.clone()));
    }
}

#[test]
fn insertion_order_does_not_change_traversal() {
    let mut reversed = Graph::new();
    for edge in ballparks().edges().into_iter().rev() {
        reversed.add_edge(&edge.from, &edge.to, edge.distance);
    }
    let graph = ballparks();

    assert_eq!(graph.bfs("Coors Field"), reversed.bfs("Coors Field"));
    assert_eq!(graph.dfs("Coors Field"), reversed.dfs("Coors Field"));
}

#[test]
fn every_stadium_is_visited_once() {
    let graph = ballparks();
    for traversal in [graph.bfs("Fenway Park"), graph.dfs("Fenway Park")] {
        let traversal = traversal.expect("known start");
        assert_eq!(traversal.order[0], "fenwaypark");
        assert_eq!(traversal.order.len(), graph.node_count());
        let unique: HashSet<_> = traversal.order.iter().collect();
        assert_eq!(unique.len(), traversal.order.len());
    }
}

#[test]
fn totals_count_discovery_edges_only() {
    let graph = ballparks();
    let minimum = graph
        .minimum_spanning_tree()
        .expect("fixture is connected")
        .total_weight;
    let all_edges: f64 = graph.edges().iter().map(|edge| edge.distance).sum();

    for traversal in [graph.bfs("Petco Park"), graph.dfs("Petco Park")] {
        let total = traversal.expect("known start").total_distance;
        // discovery edges form a spanning tree of the fixture
        assert!(total >= minimum - 1e-9);
        assert!(total < all_edges);
    }
}

#[test]
fn chain_totals_are_exact() {
    let graph = chain();

    let bfs = graph.bfs("two").expect("known start");
    assert_eq!(bfs.order, vec!["two", "one", "three", "four"]);
    assert_eq!(bfs.total_distance, 7.0);

    let dfs = graph.dfs("four").expect("known start");
    assert_eq!(dfs.order, vec!["four", "three", "two", "one"]);
    assert_eq!(dfs.total_distance, 7.0);
}

#[test]
fn unknown_start_is_not_found() {
    let graph = chain();
    assert!(graph.bfs("five").is_none());
    assert!(graph.dfs("five").is_none());
}
