//! Binary search tree operations.
//!
//! Insert, search, and delete descend by BST order with a frame per visited
//! node. Traversals emit a header frame then one frame per visit. The
//! analytical operations (height, diameter, LCA, balance) compute silently
//! and report in a single frame, matching the granularity of the suite.

use super::{parse_int, AlgorithmId, Params};
use crate::structures::TreeArena;
use crate::trace::{ElementRef, EngineError, NodeId, Trace, TraceBuilder};

pub(crate) fn run(
    kind: AlgorithmId,
    working: TreeArena,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::TreeInsert => insert(working, params),
        AlgorithmId::TreeSearch => search(working, params),
        AlgorithmId::TreeDelete => delete(working, params),
        AlgorithmId::InorderTraversal => inorder(working),
        AlgorithmId::PreorderTraversal => preorder(working),
        AlgorithmId::PostorderTraversal => postorder(working),
        AlgorithmId::LevelOrderTraversal => level_order(working),
        AlgorithmId::TreeMinMax => min_max(working),
        AlgorithmId::TreeHeight => height(working),
        AlgorithmId::TreeDiameter => diameter(working),
        AlgorithmId::LowestCommonAncestor => lca(working, params),
        AlgorithmId::BalanceCheck => balance_check(working),
        AlgorithmId::MirrorTree => mirror(working),
        _ => unreachable!("non-tree algorithm routed to tree module"),
    }
}

fn node_ref(id: NodeId) -> ElementRef {
    ElementRef::Node(id)
}

fn insert(mut working: TreeArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(val) = parse_int(&params.value) else {
        return TraceBuilder::rejection("tree-insert", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("tree-insert");
    b.append(&working, vec![], 0, format!("Insert {}", val))?;
    let Some(mut node) = working.root() else {
        let id = working.alloc(val);
        working.set_root(Some(id));
        b.append(&working, vec![node_ref(id)], 4, "Inserted as root")?;
        return b.finish();
    };
    loop {
        b.append(
            &working,
            vec![node_ref(node)],
            1,
            format!("At {}", working.value(node)),
        )?;
        if val < working.value(node) {
            b.append(
                &working,
                vec![node_ref(node)],
                2,
                format!("{} < {}, go left", val, working.value(node)),
            )?;
            match working.left_of(node) {
                Some(left) => node = left,
                None => {
                    let id = working.alloc(val);
                    working.set_left(node, Some(id));
                    b.append(&working, vec![node_ref(id)], 4, "Inserted left")?;
                    break;
                }
            }
        } else {
            b.append(
                &working,
                vec![node_ref(node)],
                3,
                format!("{} >= {}, go right", val, working.value(node)),
            )?;
            match working.right_of(node) {
                Some(right) => node = right,
                None => {
                    let id = working.alloc(val);
                    working.set_right(node, Some(id));
                    b.append(&working, vec![node_ref(id)], 4, "Inserted right")?;
                    break;
                }
            }
        }
    }
    b.finish()
}

fn search(working: TreeArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(val) = parse_int(&params.value) else {
        return TraceBuilder::rejection("tree-search", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("tree-search");
    b.append(&working, vec![], 0, format!("Search {}", val))?;
    let mut cursor = working.root();
    while let Some(node) = cursor {
        b.append(
            &working,
            vec![node_ref(node)],
            1,
            format!("At {}", working.value(node)),
        )?;
        if val == working.value(node) {
            b.append(&working, vec![node_ref(node)], 2, "Found!")?;
            return b.finish();
        }
        if val < working.value(node) {
            b.append(
                &working,
                vec![node_ref(node)],
                3,
                format!("{} < {}, go left", val, working.value(node)),
            )?;
            cursor = working.left_of(node);
        } else {
            b.append(
                &working,
                vec![node_ref(node)],
                4,
                format!("{} >= {}, go right", val, working.value(node)),
            )?;
            cursor = working.right_of(node);
        }
    }
    b.append(&working, vec![], 5, "Not found")?;
    b.finish()
}

fn delete(mut working: TreeArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(val) = parse_int(&params.value) else {
        return TraceBuilder::rejection("tree-delete", &working, "Enter numeric value.");
    };
    if working.is_empty() {
        return TraceBuilder::rejection("tree-delete", &working, "Tree empty.");
    }
    let mut b = TraceBuilder::new("tree-delete");
    let Some((target, parent)) = working.find_with_parent(val) else {
        b.append(&working, vec![], 0, format!("Delete {} - not found", val))?;
        return b.finish();
    };
    b.append(
        &working,
        vec![node_ref(target)],
        0,
        format!("Found {} to delete", val),
    )?;
    let left = working.left_of(target);
    let right = working.right_of(target);
    match (left, right) {
        (None, None) => {
            b.append(
                &working,
                vec![node_ref(target)],
                1,
                "Leaf node - remove directly",
            )?;
            replace_child(&mut working, parent, target, None);
            working.remove(target);
            b.append(&working, vec![], 4, "Deleted leaf")?;
        }
        (Some(child), None) | (None, Some(child)) => {
            b.append(
                &working,
                vec![node_ref(target), node_ref(child)],
                2,
                "One child - replace with child",
            )?;
            replace_child(&mut working, parent, target, Some(child));
            working.remove(target);
            b.append(&working, vec![node_ref(child)], 4, "Replaced with child")?;
        }
        (Some(_), Some(right)) => {
            b.append(
                &working,
                vec![node_ref(target)],
                3,
                "Two children - find inorder successor",
            )?;
            let (successor, succ_parent) = working.min_with_parent(right);
            b.append(
                &working,
                vec![node_ref(successor)],
                3,
                format!("Successor: {}", working.value(successor)),
            )?;
            let succ_value = working.value(successor);
            let succ_right = working.right_of(successor);
            match succ_parent {
                Some(p) => working.set_left(p, succ_right),
                // Successor is the target's right child itself.
                None => working.set_right(target, succ_right),
            }
            working.set_value(target, succ_value);
            working.remove(successor);
            b.append(
                &working,
                vec![node_ref(target)],
                4,
                "Replaced value and removed successor",
            )?;
        }
    }
    b.finish()
}

fn replace_child(
    working: &mut TreeArena,
    parent: Option<NodeId>,
    old: NodeId,
    new: Option<NodeId>,
) {
    match parent {
        None => working.set_root(new),
        Some(p) => {
            if working.left_of(p) == Some(old) {
                working.set_left(p, new);
            } else {
                working.set_right(p, new);
            }
        }
    }
}

fn inorder(working: TreeArena) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("inorder-traversal");
    b.append(&working, vec![], 0, "Inorder Traversal")?;
    fn walk(
        working: &TreeArena,
        b: &mut TraceBuilder,
        node: Option<NodeId>,
    ) -> Result<(), EngineError> {
        let Some(id) = node else { return Ok(()) };
        walk(working, b, working.left_of(id))?;
        b.append(
            working,
            vec![node_ref(id)],
            3,
            format!("Visit {}", working.value(id)),
        )?;
        walk(working, b, working.right_of(id))
    }
    walk(&working, &mut b, working.root())?;
    b.finish()
}

fn preorder(working: TreeArena) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("preorder-traversal");
    b.append(&working, vec![], 0, "Preorder Traversal")?;
    fn walk(
        working: &TreeArena,
        b: &mut TraceBuilder,
        node: Option<NodeId>,
    ) -> Result<(), EngineError> {
        let Some(id) = node else { return Ok(()) };
        b.append(
            working,
            vec![node_ref(id)],
            1,
            format!("Visit {}", working.value(id)),
        )?;
        walk(working, b, working.left_of(id))?;
        walk(working, b, working.right_of(id))
    }
    walk(&working, &mut b, working.root())?;
    b.finish()
}

fn postorder(working: TreeArena) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("postorder-traversal");
    b.append(&working, vec![], 0, "Postorder Traversal")?;
    fn walk(
        working: &TreeArena,
        b: &mut TraceBuilder,
        node: Option<NodeId>,
    ) -> Result<(), EngineError> {
        let Some(id) = node else { return Ok(()) };
        walk(working, b, working.left_of(id))?;
        walk(working, b, working.right_of(id))?;
        b.append(
            working,
            vec![node_ref(id)],
            4,
            format!("Visit {}", working.value(id)),
        )
    }
    walk(&working, &mut b, working.root())?;
    b.finish()
}

fn level_order(working: TreeArena) -> Result<Trace, EngineError> {
    let Some(root) = working.root() else {
        return TraceBuilder::rejection("level-order-traversal", &working, "Tree is empty.");
    };
    let mut b = TraceBuilder::new("level-order-traversal");
    b.append(&working, vec![], 0, "Level Order Traversal")?;
    let mut queue = std::collections::VecDeque::from([root]);
    while let Some(id) = queue.pop_front() {
        b.append(
            &working,
            vec![node_ref(id)],
            3,
            format!("Visit {}", working.value(id)),
        )?;
        if let Some(left) = working.left_of(id) {
            queue.push_back(left);
        }
        if let Some(right) = working.right_of(id) {
            queue.push_back(right);
        }
    }
    b.finish()
}

fn min_max(working: TreeArena) -> Result<Trace, EngineError> {
    let Some(root) = working.root() else {
        return TraceBuilder::rejection("tree-min-max", &working, "Tree empty.");
    };
    let mut b = TraceBuilder::new("tree-min-max");
    b.append(&working, vec![node_ref(root)], -1, "Find Min/Max")?;
    let mut min_node = root;
    while let Some(left) = working.left_of(min_node) {
        min_node = left;
        b.append(&working, vec![node_ref(min_node)], -1, "Go left for min")?;
    }
    let mut max_node = root;
    while let Some(right) = working.right_of(max_node) {
        max_node = right;
        b.append(&working, vec![node_ref(max_node)], -1, "Go right for max")?;
    }
    b.append(
        &working,
        vec![node_ref(min_node), node_ref(max_node)],
        -1,
        format!(
            "Min: {}, Max: {}",
            working.value(min_node),
            working.value(max_node)
        ),
    )?;
    b.finish()
}

fn height(working: TreeArena) -> Result<Trace, EngineError> {
    let Some(root) = working.root() else {
        return TraceBuilder::rejection("tree-height", &working, "Tree empty.");
    };
    let h = working.height(Some(root));
    let mut b = TraceBuilder::new("tree-height");
    b.append(&working, vec![node_ref(root)], -1, format!("Height: {}", h))?;
    b.finish()
}

fn diameter(working: TreeArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("tree-diameter", &working, "Tree empty.");
    }
    // Longest path in nodes through any subtree root.
    fn measure(working: &TreeArena, node: Option<NodeId>) -> (usize, usize) {
        let Some(id) = node else { return (0, 0) };
        let (ld, lh) = measure(working, working.left_of(id));
        let (rd, rh) = measure(working, working.right_of(id));
        let through = lh + rh + 1;
        (through.max(ld).max(rd), 1 + lh.max(rh))
    }
    let (d, _) = measure(&working, working.root());
    let mut b = TraceBuilder::new("tree-diameter");
    b.append(&working, vec![], -1, format!("Diameter: {}", d))?;
    b.finish()
}

fn lca(working: TreeArena, params: &Params) -> Result<Trace, EngineError> {
    let pair = params
        .value
        .as_deref()
        .map(|s| s.split(',').map(str::trim).collect::<Vec<_>>())
        .filter(|parts| parts.len() == 2)
        .and_then(|parts| {
            Some((
                parts[0].parse::<i64>().ok()?,
                parts[1].parse::<i64>().ok()?,
            ))
        });
    let Some((p, q)) = pair else {
        return TraceBuilder::rejection(
            "lowest-common-ancestor",
            &working,
            "Enter two values separated by comma.",
        );
    };
    // BST descent: the split point is the LCA.
    let mut cursor = working.root();
    let mut ancestor = None;
    while let Some(id) = cursor {
        let v = working.value(id);
        if p < v && q < v {
            cursor = working.left_of(id);
        } else if p > v && q > v {
            cursor = working.right_of(id);
        } else {
            ancestor = Some(id);
            break;
        }
    }
    let Some(ancestor) = ancestor else {
        return TraceBuilder::rejection("lowest-common-ancestor", &working, "No LCA found.");
    };
    let mut b = TraceBuilder::new("lowest-common-ancestor");
    b.append(
        &working,
        vec![node_ref(ancestor)],
        -1,
        format!("LCA of {} and {}: {}", p, q, working.value(ancestor)),
    )?;
    b.finish()
}

fn balance_check(working: TreeArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("balance-check", &working, "Tree empty.");
    }
    fn balanced(working: &TreeArena, node: Option<NodeId>) -> bool {
        let Some(id) = node else { return true };
        let lh = working.height(working.left_of(id));
        let rh = working.height(working.right_of(id));
        lh.abs_diff(rh) <= 1
            && balanced(working, working.left_of(id))
            && balanced(working, working.right_of(id))
    }
    let bal = balanced(&working, working.root());
    let mut b = TraceBuilder::new("balance-check");
    b.append(&working, vec![], -1, format!("Balanced: {}", bal))?;
    b.finish()
}

fn mirror(mut working: TreeArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("mirror-tree", &working, "Tree empty.");
    }
    let mut b = TraceBuilder::new("mirror-tree");
    // Preorder swap, one frame per node so the flip is watchable.
    fn swap(
        working: &mut TreeArena,
        b: &mut TraceBuilder,
        node: Option<NodeId>,
    ) -> Result<(), EngineError> {
        let Some(id) = node else { return Ok(()) };
        let left = working.left_of(id);
        let right = working.right_of(id);
        working.set_left(id, right);
        working.set_right(id, left);
        b.append(
            working,
            vec![node_ref(id)],
            -1,
            format!("Swapped children of {}", working.value(id)),
        )?;
        swap(working, b, working.left_of(id))?;
        swap(working, b, working.right_of(id))
    }
    let root = working.root();
    swap(&mut working, &mut b, root)?;
    b.append(&working, vec![], -1, "Tree mirrored")?;
    b.finish()
}
