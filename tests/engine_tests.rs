// Integration tests for the trace engine: every family of operations
// produces a non-empty, frozen trace whose frames tell the story.

use algotty::algorithms::{run_algorithm, AlgorithmId, Params};
use algotty::snapshot::{Capture, StructureValue};
use algotty::structures::{
    Graph, ListArena, ListKind, Queue, QueueKind, Stack, Structure, TreeArena,
};
use algotty::trace::Trace;

fn run(kind: AlgorithmId, structure: Structure, params: Params) -> Trace {
    run_algorithm(kind, &structure, &params).expect("engine error")
}

fn array_of(frame_snapshot: &StructureValue) -> &Vec<i64> {
    match frame_snapshot {
        StructureValue::Array(values) => values,
        other => panic!("expected array snapshot, got {}", other.kind()),
    }
}

#[test]
fn test_bubble_sort_bookends_and_result() {
    let trace = run(
        AlgorithmId::BubbleSort,
        Structure::Array(vec![5, 1, 4, 2, 8]),
        Params::default(),
    );
    assert_eq!(trace.first().message, "Bubble Sort");
    assert_eq!(trace.last().message, "Sorted");
    assert_eq!(array_of(&trace.first().snapshot), &vec![5, 1, 4, 2, 8]);
    assert_eq!(array_of(&trace.last().snapshot), &vec![1, 2, 4, 5, 8]);
}

#[test]
fn test_frames_are_isolated_from_later_mutation() {
    // The first frame snapshots the unsorted input; sorting continues after
    // that frame is recorded, so the first frame must stay unsorted.
    let trace = run(
        AlgorithmId::InsertionSort,
        Structure::Array(vec![3, 1, 2]),
        Params::default(),
    );
    assert_eq!(array_of(&trace.first().snapshot), &vec![3, 1, 2]);
    assert_eq!(array_of(&trace.last().snapshot), &vec![1, 2, 3]);
}

#[test]
fn test_binary_search_rejects_unsorted_input() {
    let trace = run(
        AlgorithmId::BinarySearch,
        Structure::Array(vec![5, 1, 4]),
        Params::target("4"),
    );
    assert_eq!(trace.len(), 1);
    assert!(trace.first().message.contains("requires sorted"));
    assert_eq!(trace.first().pseudocode_line, -1);
}

#[test]
fn test_binary_search_finds_target() {
    let trace = run(
        AlgorithmId::BinarySearch,
        Structure::Array(vec![1, 3, 5, 7, 9, 11]),
        Params::target("7"),
    );
    assert_eq!(trace.last().message, "Found at 3");
}

#[test]
fn test_linear_search_reports_miss() {
    let trace = run(
        AlgorithmId::LinearSearch,
        Structure::Array(vec![1, 2, 3]),
        Params::target("9"),
    );
    assert_eq!(trace.last().message, "Not found");
}

#[test]
fn test_balanced_parentheses_verdicts() {
    let balanced = run(
        AlgorithmId::BalancedParentheses,
        Structure::Stack(Stack::new()),
        Params::value("(()())"),
    );
    assert_eq!(balanced.last().message, "Balanced!");

    let open = run(
        AlgorithmId::BalancedParentheses,
        Structure::Stack(Stack::new()),
        Params::value("(()"),
    );
    assert_eq!(open.last().message, "Not balanced");

    let mismatch = run(
        AlgorithmId::BalancedParentheses,
        Structure::Stack(Stack::new()),
        Params::value(")("),
    );
    assert_eq!(mismatch.last().message, "Mismatch!");
}

#[test]
fn test_postfix_evaluation_result() {
    let trace = run(
        AlgorithmId::PostfixEvaluation,
        Structure::Stack(Stack::new()),
        Params::value("2 3 4 * +"),
    );
    assert_eq!(trace.last().message, "Result: 14");
}

#[test]
fn test_stack_pop_empty_is_one_frame_rejection() {
    let trace = run(
        AlgorithmId::StackPop,
        Structure::Stack(Stack::new()),
        Params::default(),
    );
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.first().message, "Stack empty! Cannot pop.");
}

#[test]
fn test_circular_enqueue_places_at_rear() {
    let queue = Queue::sample(QueueKind::Circular);
    let rear_before = queue.rear();
    let trace = run(
        AlgorithmId::Enqueue,
        Structure::Queue(queue),
        Params::value("9"),
    );
    assert_eq!(trace.last().message, "Enqueued");
    let StructureValue::Queue(ref after) = trace.last().snapshot else {
        panic!("expected queue snapshot");
    };
    let entry = after.slots[rear_before].as_ref().expect("slot filled");
    assert_eq!(entry.value, 9);
    assert_eq!(after.rear, (rear_before + 1) % after.slots.len());
}

#[test]
fn test_enqueue_front_requires_deque() {
    let trace = run(
        AlgorithmId::EnqueueFront,
        Structure::Queue(Queue::new(QueueKind::Linear)),
        Params::value("1"),
    );
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.first().message, "Front insertion requires a deque.");
}

#[test]
fn test_list_reverse_reverses_values() {
    let arena = ListArena::from_values(ListKind::Singly, &[1, 3, 5, 7]);
    let trace = run(AlgorithmId::ListReverse, Structure::List(arena), Params::default());
    let StructureValue::List(ref list) = trace.last().snapshot else {
        panic!("expected list snapshot");
    };
    assert_eq!(list.values(), vec![7, 5, 3, 1]);
}

#[test]
fn test_circular_list_snapshot_preserves_cycle() {
    let arena = ListArena::sample(ListKind::Circular);
    let StructureValue::List(list) = arena.capture().expect("capture") else {
        panic!("expected list snapshot");
    };
    assert_eq!(list.values(), vec![1, 3, 5]);
    // Walk to the last distinct node; its next pointer must close the cycle
    // inside the copy.
    let head = list.head.expect("non-empty");
    let mut cursor = head;
    loop {
        let node = list.node(cursor).expect("reachable node");
        match node.next {
            Some(next) if next != head => cursor = next,
            _ => break,
        }
    }
    assert_eq!(list.node(cursor).expect("tail").next, Some(head));
}

#[test]
fn test_list_snapshot_survives_source_mutation() {
    let mut arena = ListArena::from_values(ListKind::Singly, &[1, 2, 3]);
    let snapshot = arena.capture().expect("capture");
    let head = arena.head().expect("non-empty");
    arena.set_next(head, None);
    let StructureValue::List(list) = snapshot else {
        panic!("expected list snapshot");
    };
    assert_eq!(list.values(), vec![1, 2, 3]);
}

#[test]
fn test_detect_loop_on_circular_list() {
    let arena = ListArena::sample(ListKind::Circular);
    let trace = run(
        AlgorithmId::ListDetectLoop,
        Structure::List(arena),
        Params::default(),
    );
    assert!(trace.last().message.contains("Loop detected!"));
}

#[test]
fn test_detect_loop_on_straight_list() {
    let arena = ListArena::from_values(ListKind::Singly, &[1, 2, 3]);
    let trace = run(
        AlgorithmId::ListDetectLoop,
        Structure::List(arena),
        Params::default(),
    );
    assert_eq!(trace.last().message, "No loop detected.");
}

#[test]
fn test_remove_loop_breaks_cycle() {
    let arena = ListArena::sample(ListKind::Circular);
    let trace = run(
        AlgorithmId::ListRemoveLoop,
        Structure::List(arena),
        Params::default(),
    );
    assert_eq!(trace.last().message, "Loop removed: meet.next = null");
    let StructureValue::List(ref list) = trace.last().snapshot else {
        panic!("expected list snapshot");
    };
    assert_eq!(list.values(), vec![1, 3, 5]);
    assert!(list.nodes.iter().any(|n| n.next.is_none()));
}

#[test]
fn test_rotate_by_zero_is_rejected() {
    let arena = ListArena::sample(ListKind::Singly);
    let trace = run(
        AlgorithmId::ListRotate,
        Structure::List(arena),
        Params::default().with_count("3"),
    );
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.first().message, "No rotation needed.");
}

#[test]
fn test_merge_interleaves_sorted_lists() {
    let arena = ListArena::from_values(ListKind::Singly, &[1, 3, 5]);
    let trace = run(
        AlgorithmId::ListMerge,
        Structure::List(arena),
        Params::default().with_second("2,4"),
    );
    let StructureValue::List(ref list) = trace.last().snapshot else {
        panic!("expected list snapshot");
    };
    assert_eq!(list.values(), vec![1, 2, 3, 4, 5]);
}

fn inorder_of(snapshot: &StructureValue) -> Vec<i64> {
    match snapshot {
        StructureValue::Tree(tree) => tree.inorder_values(),
        other => panic!("expected tree snapshot, got {}", other.kind()),
    }
}

#[test]
fn test_tree_insert_keeps_bst_order() {
    let trace = run(
        AlgorithmId::TreeInsert,
        Structure::Tree(TreeArena::sample()),
        Params::value("45"),
    );
    assert_eq!(trace.last().message, "Inserted right");
    assert_eq!(
        inorder_of(&trace.last().snapshot),
        vec![20, 30, 40, 45, 50, 60, 70, 80]
    );
}

#[test]
fn test_tree_delete_two_children_uses_successor() {
    let trace = run(
        AlgorithmId::TreeDelete,
        Structure::Tree(TreeArena::sample()),
        Params::value("30"),
    );
    assert_eq!(trace.last().message, "Replaced value and removed successor");
    assert_eq!(
        inorder_of(&trace.last().snapshot),
        vec![20, 40, 50, 60, 70, 80]
    );
}

#[test]
fn test_tree_search_hits_and_misses() {
    let found = run(
        AlgorithmId::TreeSearch,
        Structure::Tree(TreeArena::sample()),
        Params::value("60"),
    );
    assert_eq!(found.last().message, "Found!");

    let missing = run(
        AlgorithmId::TreeSearch,
        Structure::Tree(TreeArena::sample()),
        Params::value("99"),
    );
    assert_eq!(missing.last().message, "Not found");
}

#[test]
fn test_inorder_traversal_visits_sorted() {
    let trace = run(
        AlgorithmId::InorderTraversal,
        Structure::Tree(TreeArena::sample()),
        Params::default(),
    );
    let visits: Vec<&str> = trace
        .frames()
        .iter()
        .filter(|f| f.message.starts_with("Visit "))
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(
        visits,
        vec![
            "Visit 20", "Visit 30", "Visit 40", "Visit 50", "Visit 60", "Visit 70",
            "Visit 80"
        ]
    );
}

#[test]
fn test_bfs_dequeues_in_breadth_order() {
    let g = Graph::from_edges(false, &[("A", "B", 1), ("A", "C", 1), ("B", "D", 1)]);
    let trace = run(AlgorithmId::Bfs, Structure::Graph(g), Params::value("A"));
    let order: Vec<&str> = trace
        .frames()
        .iter()
        .filter(|f| f.message.starts_with("Dequeued "))
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(
        order,
        vec!["Dequeued A", "Dequeued B", "Dequeued C", "Dequeued D"]
    );
}

#[test]
fn test_bfs_without_start_is_rejected() {
    let g = Graph::from_edges(false, &[("A", "B", 1)]);
    let trace = run(AlgorithmId::Bfs, Structure::Graph(g), Params::default());
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.first().message, "Enter start vertex.");
}

#[test]
fn test_dijkstra_prefers_cheaper_route() {
    let g = Graph::from_edges(false, &[("A", "B", 1), ("B", "C", 1), ("A", "C", 5)]);
    let trace = run(
        AlgorithmId::Dijkstra,
        Structure::Graph(g),
        Params::value("A,C"),
    );
    assert_eq!(trace.last().message, "Path: A -> B -> C");
}

#[test]
fn test_bellman_ford_clean_graph() {
    let g = Graph::from_edges(true, &[("A", "B", 1), ("B", "C", 2)]);
    let trace = run(
        AlgorithmId::BellmanFord,
        Structure::Graph(g),
        Params::value("A"),
    );
    assert_eq!(trace.last().message, "No negative cycle");
    assert!(trace
        .frames()
        .iter()
        .any(|f| f.message == "Relaxed B-C, dist[C]=3"));
}

#[test]
fn test_kruskal_skips_heavy_closing_edge() {
    let g = Graph::from_edges(false, &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);
    let trace = run(AlgorithmId::Kruskal, Structure::Graph(g), Params::default());
    let added: Vec<&str> = trace
        .frames()
        .iter()
        .filter(|f| f.message.starts_with("Added edge "))
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(added, vec!["Added edge A-B", "Added edge B-C"]);
    assert_eq!(trace.last().message, "MST complete");
}

#[test]
fn test_prim_spans_all_vertices() {
    let g = Graph::from_edges(false, &[("A", "B", 2), ("B", "C", 1), ("A", "C", 4)]);
    let trace = run(AlgorithmId::Prim, Structure::Graph(g), Params::default());
    let added = trace
        .frames()
        .iter()
        .filter(|f| f.message.ends_with("to MST"))
        .count();
    assert_eq!(added, 3);
    assert_eq!(trace.last().message, "MST complete");
}

#[test]
fn test_topological_sort_orders_dag() {
    let g = Graph::from_edges(true, &[("A", "B", 1), ("B", "C", 1)]);
    let trace = run(
        AlgorithmId::TopologicalSort,
        Structure::Graph(g),
        Params::default(),
    );
    assert_eq!(trace.last().message, "Order: A -> B -> C");
}

#[test]
fn test_topological_sort_rejects_undirected() {
    let g = Graph::from_edges(false, &[("A", "B", 1)]);
    let trace = run(
        AlgorithmId::TopologicalSort,
        Structure::Graph(g),
        Params::default(),
    );
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.first().message, "Graph must be directed.");
}

#[test]
fn test_cycle_detection_verdicts() {
    let dag = Graph::from_edges(true, &[("A", "B", 1), ("B", "C", 1)]);
    let clean = run(
        AlgorithmId::CycleDetection,
        Structure::Graph(dag),
        Params::default(),
    );
    assert_eq!(clean.last().message, "No cycle");

    let cyclic = Graph::from_edges(true, &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
    let found = run(
        AlgorithmId::CycleDetection,
        Structure::Graph(cyclic),
        Params::default(),
    );
    assert_eq!(found.last().message, "Cycle detected");
}

#[test]
fn test_bipartite_odd_cycle_fails() {
    let triangle = Graph::from_edges(false, &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)]);
    let trace = run(
        AlgorithmId::Bipartite,
        Structure::Graph(triangle),
        Params::default(),
    );
    assert_eq!(trace.last().message, "Not bipartite");

    let square = Graph::from_edges(
        false,
        &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1), ("D", "A", 1)],
    );
    let even = run(
        AlgorithmId::Bipartite,
        Structure::Graph(square),
        Params::default(),
    );
    assert_eq!(even.last().message, "Bipartite");
}

#[test]
fn test_scc_groups_components() {
    let g = Graph::from_edges(
        true,
        &[("A", "B", 1), ("B", "A", 1), ("B", "C", 1)],
    );
    let trace = run(AlgorithmId::Scc, Structure::Graph(g), Params::default());
    let components: Vec<&str> = trace
        .frames()
        .iter()
        .map(|f| f.message.as_str())
        .collect();
    assert_eq!(components.len(), 2);
    assert!(components.iter().any(|m| *m == "SCC: A, B" || *m == "SCC: B, A"));
    assert!(components.contains(&"SCC: C"));
}

#[test]
fn test_add_edge_rejects_duplicates() {
    let g = Graph::from_edges(false, &[("A", "B", 1)]);
    let trace = run(
        AlgorithmId::AddEdge,
        Structure::Graph(g),
        Params::value("A,B,2"),
    );
    assert_eq!(trace.len(), 1);
    assert_eq!(trace.first().message, "Edge already exists.");
}

#[test]
fn test_kmp_finds_all_occurrences() {
    let trace = run(
        AlgorithmId::KmpMatch,
        Structure::Text("ababcababa".to_string()),
        Params::target("aba"),
    );
    assert_eq!(trace.last().message, "Found at: 0, 5, 7");
}

#[test]
fn test_naive_match_reports_none() {
    let trace = run(
        AlgorithmId::NaiveMatch,
        Structure::Text("aaaa".to_string()),
        Params::target("b"),
    );
    assert_eq!(trace.last().message, "Found at: none");
}

#[test]
fn test_palindrome_check_verdicts() {
    let yes = run(
        AlgorithmId::PalindromeCheck,
        Structure::Text("racecar".to_string()),
        Params::default(),
    );
    assert_eq!(yes.last().message, "Is palindrome: true");

    let no = run(
        AlgorithmId::PalindromeCheck,
        Structure::Text("rust".to_string()),
        Params::default(),
    );
    assert_eq!(no.last().message, "Not equal! Not palindrome");
}

#[test]
fn test_run_length_encoding_compresses() {
    let trace = run(
        AlgorithmId::RunLengthEncoding,
        Structure::Text("aaabbc".to_string()),
        Params::default(),
    );
    assert_eq!(trace.last().message, "Compressed: \"a3b2c1\"");
    let StructureValue::Text(ref result) = trace.last().snapshot else {
        panic!("expected text snapshot");
    };
    assert_eq!(result, "a3b2c1");
}

#[test]
fn test_string_reverse_snapshots_result() {
    let trace = run(
        AlgorithmId::StringReverse,
        Structure::Text("abc".to_string()),
        Params::default(),
    );
    assert_eq!(trace.last().message, "Reversed string");
    let StructureValue::Text(ref result) = trace.last().snapshot else {
        panic!("expected text snapshot");
    };
    assert_eq!(result, "cba");
}
