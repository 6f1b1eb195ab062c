mod common;

use stadiumgraph_lib::query::{resolve, route, suggest, trip};
use stadiumgraph_lib::{Error, RouteAlgorithm, RouteRequest};

use common::ballparks;

#[test]
fn typo_suggests_the_intended_stadium() {
    let graph = ballparks();

    let typo = suggest(&graph, "Wrigly Field", 3);
    assert_eq!(typo.first().map(String::as_str), Some("wrigleyfield"));

    let partial = suggest(&graph, "Citizen Bank", 3);
    assert!(partial.contains(&"citizensbankpark".to_string()));
}

#[test]
fn suggestions_respect_limit() {
    let graph = ballparks();
    assert!(suggest(&graph, "Park", 2).len() <= 2);
}

#[test]
fn unrelated_names_get_no_suggestions() {
    let graph = ballparks();
    assert!(suggest(&graph, "Qqqqxxzz", 3).is_empty());
}

#[test]
fn unknown_route_endpoint_includes_suggestions() {
    let graph = ballparks();
    let err = route(&graph, &RouteRequest::dijkstra("Fenway Prk", "Citi Field"))
        .expect_err("misspelt start");

    let message = err.to_string();
    assert!(message.contains("unknown stadium name: Fenway Prk"));
    assert!(message.contains("Did you mean"));
    assert!(message.contains("fenwaypark"));
}

#[test]
fn route_summary_carries_canonical_endpoints() {
    let graph = ballparks();
    let summary = route(&graph, &RouteRequest::a_star("Oracle Park", "Angel Stadium"))
        .expect("route exists");

    assert_eq!(summary.algorithm, RouteAlgorithm::AStar);
    assert_eq!(summary.start, "oraclepark");
    assert_eq!(summary.goal, "angelstadium");
    assert_eq!(summary.hops, 2);
    assert_eq!(summary.distance, 413.0);
}

#[test]
fn trip_reports_stuck_planner_as_not_found() {
    let graph = ballparks();
    let err = trip(&graph, "Fenway Park", &["Oracle Park"]).expect_err("no direct edge");
    assert!(err.is_not_found());
    assert!(matches!(err, Error::Trip(_)));
    assert!(resolve(&graph, "Oracle Park").is_ok());
}
