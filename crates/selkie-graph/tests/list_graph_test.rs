use selkie_graph::{Error, ListGraph};

/// Nodes {1..7} with the edge set used throughout these tests:
/// 1->3, 1->4, 1->5, 3->6, 3->7, 4->2, 4->7, 5->4, 5->3, 2->1.
fn sample_graph() -> ListGraph<i32> {
    let mut g = ListGraph::new();
    for n in 1..=7 {
        g.add_node(n).unwrap();
    }
    for (x, y) in [
        (1, 3),
        (1, 4),
        (1, 5),
        (3, 6),
        (3, 7),
        (4, 2),
        (4, 7),
        (5, 4),
        (5, 3),
        (2, 1),
    ] {
        g.add_edge(&x, &y).unwrap();
    }
    g
}

#[test]
fn added_node_is_isolated_and_unique() {
    let mut g = ListGraph::new();
    g.add_node("a").unwrap();

    assert_eq!(g.neighbors(&"a").unwrap(), Vec::<&str>::new());
    assert_eq!(g.nodes().iter().filter(|n| **n == "a").count(), 1);
    assert_eq!(g.node_count(), 1);
    assert!(g.has_node(&"a"));
}

#[test]
fn duplicate_node_is_rejected_and_state_unmodified() {
    let mut g = ListGraph::new();
    g.add_node(1).unwrap();
    g.add_node(2).unwrap();
    g.add_edge(&1, &2).unwrap();

    assert_eq!(
        g.add_node(1),
        Err(Error::DuplicateNode {
            node: "1".to_string()
        })
    );
    assert_eq!(g.nodes(), &[1, 2]);
    assert_eq!(g.neighbors(&1).unwrap(), vec![2]);
}

#[test]
fn add_edge_requires_source_node() {
    let mut g = ListGraph::new();
    g.add_node(1).unwrap();

    assert!(matches!(g.add_edge(&9, &1), Err(Error::InvalidEdge { .. })));
    assert!(matches!(
        g.delete_edge(&9, &1),
        Err(Error::InvalidEdge { .. })
    ));
}

#[test]
fn parallel_edges_are_preserved() {
    let mut g = ListGraph::new();
    g.add_node("a").unwrap();
    g.add_node("b").unwrap();
    g.add_edge(&"a", &"b").unwrap();
    g.add_edge(&"a", &"b").unwrap();

    assert_eq!(g.neighbors(&"a").unwrap(), vec!["b", "b"]);
    assert!(g.has_edge(&"a", &"b"));

    // delete_edge removes the first occurrence only.
    g.delete_edge(&"a", &"b").unwrap();
    assert_eq!(g.neighbors(&"a").unwrap(), vec!["b"]);
    g.delete_edge(&"a", &"b").unwrap();
    assert_eq!(g.neighbors(&"a").unwrap(), Vec::<&str>::new());

    // Deleting an already-absent edge is a no-op.
    g.delete_edge(&"a", &"b").unwrap();
    assert!(!g.has_edge(&"a", &"b"));
}

#[test]
fn add_then_delete_edge_round_trips() {
    let mut g = sample_graph();
    let before = g.neighbors(&3).unwrap();

    g.add_edge(&3, &2).unwrap();
    assert_ne!(g.neighbors(&3).unwrap(), before);
    g.delete_edge(&3, &2).unwrap();
    assert_eq!(g.neighbors(&3).unwrap(), before);
}

#[test]
fn neighbors_keeps_insertion_order_and_is_a_snapshot() {
    let g = sample_graph();
    let mut snapshot = g.neighbors(&1).unwrap();
    assert_eq!(snapshot, vec![3, 4, 5]);

    snapshot.clear();
    assert_eq!(g.neighbors(&1).unwrap(), vec![3, 4, 5]);
}

#[test]
fn delete_node_purges_all_references() {
    let mut g = sample_graph();
    g.delete_node(&1).unwrap();

    assert!(!g.has_node(&1));
    assert!(!g.nodes().contains(&1));
    for n in [2, 3, 4, 5, 6, 7] {
        assert!(
            !g.neighbors(&n).unwrap().contains(&1),
            "node {n} still references 1"
        );
    }
}

#[test]
fn delete_node_purges_parallel_in_edges() {
    let mut g = ListGraph::new();
    g.add_node("u").unwrap();
    g.add_node("x").unwrap();
    g.add_edge(&"u", &"x").unwrap();
    g.add_edge(&"u", &"x").unwrap();

    g.delete_node(&"x").unwrap();
    assert_eq!(g.neighbors(&"u").unwrap(), Vec::<&str>::new());
}

#[test]
fn delete_node_on_absent_node_fails() {
    let mut g: ListGraph<i32> = ListGraph::new();
    assert_eq!(
        g.delete_node(&7),
        Err(Error::NotFound {
            node: "7".to_string()
        })
    );
}

#[test]
fn adjacent_is_transitive_reachability() {
    let g = sample_graph();

    assert!(g.adjacent(&1, &7).unwrap());
    assert!(g.adjacent(&1, &6).unwrap());
    assert!(g.adjacent(&5, &2).unwrap());
    // 6 and 7 are sinks.
    assert!(!g.adjacent(&6, &1).unwrap());
    assert!(!g.adjacent(&7, &4).unwrap());
}

#[test]
fn adjacent_terminates_and_is_reflexive_under_cycles() {
    let g = sample_graph();

    // 1 -> 4 -> 2 -> 1 is a cycle.
    assert!(g.adjacent(&1, &1).unwrap());
    assert!(g.adjacent(&2, &2).unwrap());
    // 6 has no cycle back to itself.
    assert!(!g.adjacent(&6, &6).unwrap());
}

#[test]
fn adjacent_to_absent_destination_is_false() {
    let g = sample_graph();
    assert_eq!(g.adjacent(&1, &42).unwrap(), false);
    assert!(matches!(g.adjacent(&42, &1), Err(Error::NotFound { .. })));
}

#[test]
fn reachability_shrinks_after_delete_node() {
    let mut g = sample_graph();
    g.delete_node(&1).unwrap();

    for n in [2, 3, 4, 5, 6, 7] {
        assert!(!g.adjacent(&n, &1).unwrap(), "1 still reachable from {n}");
    }
    // 5 -> 4 -> 2 survives without going through 1.
    assert!(g.adjacent(&5, &2).unwrap());
    // 2's only edge pointed at 1; nothing is reachable from it now.
    assert!(!g.adjacent(&2, &7).unwrap());
}
