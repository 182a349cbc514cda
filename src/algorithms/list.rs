//! Linked-list operations over the node arena.
//!
//! Every walk is cycle-safe (visited set or counted loop), so each operation
//! terminates on circular lists and on lists with a deliberately introduced
//! loop. Mutations rewire ids; node identity is never reassigned, which is
//! what keeps highlights stable across frames.

use super::{parse_int, parse_int_list, AlgorithmId, Params};
use crate::structures::{ListArena, ListKind};
use crate::trace::{ElementRef, EngineError, NodeId, Trace, TraceBuilder};

pub(crate) fn run(
    kind: AlgorithmId,
    working: ListArena,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::ListInsertHead => insert_head(working, params),
        AlgorithmId::ListInsertTail => insert_tail(working, params),
        AlgorithmId::ListInsertAt => insert_at(working, params),
        AlgorithmId::ListDeleteHead => delete_head(working),
        AlgorithmId::ListDeleteTail => delete_tail(working),
        AlgorithmId::ListDeleteAt => delete_at(working, params),
        AlgorithmId::ListDeleteValue => delete_value(working, params),
        AlgorithmId::ListSearch => search_value(working, params),
        AlgorithmId::ListValueAt => value_at(working, params),
        AlgorithmId::ListTraverse => traverse(working),
        AlgorithmId::ListLength => length(working),
        AlgorithmId::ListReverse => reverse(working),
        AlgorithmId::ListFindMiddle => find_middle(working),
        AlgorithmId::ListNthFromEnd => nth_from_end(working, params),
        AlgorithmId::ListRotate => rotate(working, params),
        AlgorithmId::ListDetectLoop => detect_loop(working),
        AlgorithmId::ListRemoveLoop => remove_loop(working),
        AlgorithmId::ListMerge => merge(working, params),
        _ => unreachable!("non-list algorithm routed to list module"),
    }
}

fn node_ref(id: NodeId) -> ElementRef {
    ElementRef::Node(id)
}

fn insert_head(mut working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(v) = parse_int(&params.value) else {
        return TraceBuilder::rejection("list-insert-head", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("list-insert-head");
    b.append(
        &working,
        vec![],
        0,
        format!("Creating new node with value {}", v),
    )?;
    let old_head = working.head();
    let old_tail = working.tail();
    let new = working.alloc(v);
    working.set_next(new, old_head);
    match (working.kind(), old_head) {
        (ListKind::Doubly, Some(old)) => working.set_prev(old, Some(new)),
        (ListKind::Circular, Some(_)) => {
            // Keep the cycle closed through the new head.
            if let Some(tail) = old_tail {
                working.set_next(tail, Some(new));
            }
        }
        (ListKind::Circular, None) => working.set_next(new, Some(new)),
        _ => {}
    }
    working.set_head(Some(new));
    b.append(&working, vec![node_ref(new)], 1, "Inserting at head")?;
    b.finish()
}

fn insert_tail(mut working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(v) = parse_int(&params.value) else {
        return TraceBuilder::rejection("list-insert-tail", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("list-insert-tail");
    if working.is_empty() {
        let new = working.alloc(v);
        if working.kind() == ListKind::Circular {
            working.set_next(new, Some(new));
        }
        working.set_head(Some(new));
        b.append(&working, vec![node_ref(new)], 3, "Inserted as first node.")?;
        return b.finish();
    }
    b.append(&working, vec![], 0, "Traversing to tail")?;
    let tail = working.tail().expect("non-empty list has a tail");
    let head = working.head();
    let new = working.alloc(v);
    working.set_next(tail, Some(new));
    working.set_next(
        new,
        if working.kind() == ListKind::Circular {
            head
        } else {
            None
        },
    );
    if working.kind() == ListKind::Doubly {
        working.set_prev(new, Some(tail));
        b.append(
            &working,
            vec![node_ref(tail), node_ref(new)],
            1,
            "Updating prev pointer",
        )?;
    }
    b.append(&working, vec![node_ref(new)], 1, "Inserting at tail")?;
    b.finish()
}

fn insert_at(mut working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let (Some(v), Some(p)) = (parse_int(&params.value), parse_int(&params.index)) else {
        return TraceBuilder::rejection(
            "list-insert-at",
            &working,
            "Enter valid numeric value and position.",
        );
    };
    if p < 0 {
        return TraceBuilder::rejection(
            "list-insert-at",
            &working,
            "Enter valid numeric value and position.",
        );
    }
    let p = p as usize;
    if p > working.len() {
        return TraceBuilder::rejection(
            "list-insert-at",
            &working,
            "Position exceeds list length.",
        );
    }
    let mut b = TraceBuilder::new("list-insert-at");
    if p == 0 {
        let old_head = working.head();
        let old_tail = working.tail();
        let new = working.alloc(v);
        working.set_next(new, old_head);
        match (working.kind(), old_head) {
            (ListKind::Doubly, Some(old)) => working.set_prev(old, Some(new)),
            (ListKind::Circular, Some(_)) => {
                if let Some(tail) = old_tail {
                    working.set_next(tail, Some(new));
                }
            }
            (ListKind::Circular, None) => working.set_next(new, Some(new)),
            _ => {}
        }
        working.set_head(Some(new));
        b.append(&working, vec![node_ref(new)], 1, "Inserting at head (pos 0)")?;
        return b.finish();
    }
    let prev = working
        .node_at(p - 1)
        .expect("position checked against length");
    b.append(
        &working,
        vec![node_ref(prev)],
        0,
        format!("Traversing to position {}", p - 1),
    )?;
    let curr = working.next_of(prev);
    let head = working.head();
    let new = working.alloc(v);
    working.set_next(
        new,
        curr.or(if working.kind() == ListKind::Circular {
            head
        } else {
            None
        }),
    );
    if working.kind() == ListKind::Doubly {
        working.set_prev(new, Some(prev));
        if let Some(curr) = curr {
            working.set_prev(curr, Some(new));
        }
        let mut highlight = vec![node_ref(prev), node_ref(new)];
        if let Some(curr) = curr {
            highlight.push(node_ref(curr));
        }
        b.append(&working, highlight, 1, "Updating prev pointers")?;
    }
    working.set_next(prev, Some(new));
    b.append(&working, vec![node_ref(new)], 2, "Inserting at position")?;
    b.finish()
}

fn delete_head(mut working: ListArena) -> Result<Trace, EngineError> {
    let Some(head) = working.head() else {
        return TraceBuilder::rejection("list-delete-head", &working, "List empty! Cannot delete.");
    };
    let mut b = TraceBuilder::new("list-delete-head");
    b.append(
        &working,
        vec![node_ref(head)],
        0,
        format!("Deleting head: {}", working.value(head)),
    )?;
    let next = working.next_of(head);
    let single = next.is_none() || next == Some(head);
    if single {
        working.set_head(None);
        working.remove(head);
        let message = if next == Some(head) {
            "List emptied (single node circular)"
        } else {
            "List emptied (single node)"
        };
        b.append(&working, vec![], 1, message)?;
        return b.finish();
    }
    let new_head = next.expect("multi-node list");
    if working.kind() == ListKind::Doubly {
        working.set_prev(new_head, None);
    }
    if working.kind() == ListKind::Circular {
        // Rewire the tail so the cycle closes through the new head.
        let mut tail = new_head;
        while working.next_of(tail) != Some(head) {
            tail = working.next_of(tail).expect("circular chain reaches tail");
        }
        working.set_next(tail, Some(new_head));
    }
    working.set_head(Some(new_head));
    working.remove(head);
    b.append(&working, vec![], 1, "Head deleted")?;
    b.finish()
}

fn delete_tail(mut working: ListArena) -> Result<Trace, EngineError> {
    let Some(head) = working.head() else {
        return TraceBuilder::rejection("list-delete-tail", &working, "List empty! Cannot delete.");
    };
    let mut b = TraceBuilder::new("list-delete-tail");
    if working.len() == 1 {
        b.append(&working, vec![node_ref(head)], 0, "Deleting only node")?;
        working.set_head(None);
        working.remove(head);
        b.append(&working, vec![], 1, "List emptied")?;
        return b.finish();
    }
    let ids = working.iter_ids();
    let tail = ids[ids.len() - 1];
    let prev = ids[ids.len() - 2];
    b.append(
        &working,
        vec![node_ref(prev), node_ref(tail)],
        0,
        "Traversing to tail",
    )?;
    working.set_next(
        prev,
        if working.kind() == ListKind::Circular {
            Some(head)
        } else {
            None
        },
    );
    working.remove(tail);
    if working.kind() == ListKind::Doubly {
        b.append(
            &working,
            vec![node_ref(prev)],
            2,
            "Updating pointers for doubly",
        )?;
    }
    if working.kind() == ListKind::Circular && working.len() == 1 {
        working.set_next(head, Some(head));
        b.append(&working, vec![node_ref(head)], 1, "Set single node loop")?;
    }
    b.append(&working, vec![], 3, "Tail deleted")?;
    b.finish()
}

fn delete_at(working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let p = match parse_int(&params.index) {
        Some(p) if p >= 0 && (p as usize) < working.len() => p as usize,
        _ => {
            return TraceBuilder::rejection("list-delete-at", &working, "Invalid position.");
        }
    };
    if p == 0 {
        return delete_head(working);
    }
    let mut working = working;
    let prev = working.node_at(p - 1).expect("position checked");
    let to_del = working.next_of(prev).expect("position checked");
    let mut b = TraceBuilder::new("list-delete-at");
    b.append(
        &working,
        vec![node_ref(prev), node_ref(to_del)],
        0,
        format!("Deleting at position {}", p),
    )?;
    unlink_after(&mut working, prev, to_del);
    if working.kind() == ListKind::Doubly {
        let mut highlight = vec![node_ref(prev)];
        if let Some(next) = working.next_of(prev) {
            highlight.push(node_ref(next));
        }
        b.append(&working, highlight, 1, "Updating prev pointer")?;
    }
    b.append(&working, vec![], 2, format!("Deleted at position {}", p))?;
    b.finish()
}

fn delete_value(working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(k) = parse_int(&params.target) else {
        return TraceBuilder::rejection("list-delete-value", &working, "Enter position or key.");
    };
    let Some((_, target)) = working.find_value(k) else {
        return TraceBuilder::rejection("list-delete-value", &working, "Key not found.");
    };
    if Some(target) == working.head() {
        return delete_head(working);
    }
    let mut working = working;
    let ids = working.iter_ids();
    let pos = ids.iter().position(|&id| id == target).expect("found above");
    let prev = ids[pos - 1];
    let mut b = TraceBuilder::new("list-delete-value");
    b.append(
        &working,
        vec![node_ref(prev), node_ref(target)],
        0,
        format!("Deleting node with value {}", k),
    )?;
    unlink_after(&mut working, prev, target);
    if working.kind() == ListKind::Doubly {
        let mut highlight = vec![node_ref(prev)];
        if let Some(next) = working.next_of(prev) {
            highlight.push(node_ref(next));
        }
        b.append(&working, highlight, 1, "Updating prev pointer")?;
    }
    b.append(&working, vec![], 2, format!("Deleted node with value {}", k))?;
    b.finish()
}

/// Splice `victim` (known to follow `prev`) out of the chain and drop it.
fn unlink_after(working: &mut ListArena, prev: NodeId, victim: NodeId) {
    let next = working.next_of(victim).filter(|&n| n != victim);
    match next {
        Some(next) => {
            working.set_next(prev, Some(next));
            if working.kind() == ListKind::Doubly {
                working.set_prev(next, Some(prev));
            }
        }
        None => {
            working.set_next(
                prev,
                if working.kind() == ListKind::Circular {
                    working.head()
                } else {
                    None
                },
            );
        }
    }
    working.remove(victim);
}

fn search_value(working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let Some(k) = parse_int(&params.target) else {
        return TraceBuilder::rejection("list-search", &working, "Enter numeric key.");
    };
    let mut b = TraceBuilder::new("list-search");
    for (i, id) in working.iter_ids().into_iter().enumerate() {
        if working.value(id) == k {
            b.append(
                &working,
                vec![node_ref(id)],
                1,
                format!("Found at index {}: {}", i, k),
            )?;
            return b.finish();
        }
        let highlight = match working.next_of(id) {
            Some(next) => vec![node_ref(next)],
            None => vec![],
        };
        b.append(&working, highlight, 0, "Searching...")?;
    }
    if b.is_empty() {
        return TraceBuilder::rejection("list-search", &working, "Key not found.");
    }
    b.append(&working, vec![], -1, "Key not found.")?;
    b.finish()
}

fn value_at(working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let p = match parse_int(&params.index) {
        Some(p) if p >= 0 && (p as usize) < working.len() => p as usize,
        _ => {
            return TraceBuilder::rejection("list-value-at", &working, "Invalid index.");
        }
    };
    let node = working.node_at(p).expect("index checked");
    let mut b = TraceBuilder::new("list-value-at");
    b.append(
        &working,
        vec![node_ref(node)],
        0,
        format!("Value at index {}: {}", p, working.value(node)),
    )?;
    b.finish()
}

fn traverse(working: ListArena) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("list-traverse");
    b.append(&working, vec![], 0, "Traversing list")?;
    for (i, id) in working.iter_ids().into_iter().enumerate() {
        b.append(
            &working,
            vec![node_ref(id)],
            1,
            format!("Visiting node {}: {}", i, working.value(id)),
        )?;
    }
    b.finish()
}

fn length(working: ListArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("list-length", &working, "List empty.");
    }
    let mut b = TraceBuilder::new("list-length");
    b.append(&working, vec![], 0, "Initializing count = 0")?;
    let mut count = 0;
    for id in working.iter_ids() {
        count += 1;
        b.append(
            &working,
            vec![node_ref(id)],
            2,
            format!("Count: {}, node: {}", count, working.value(id)),
        )?;
    }
    b.append(&working, vec![], 3, format!("Length: {}", count))?;
    b.finish()
}

fn reverse(mut working: ListArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("list-reverse", &working, "List empty.");
    }
    let mut b = TraceBuilder::new("list-reverse");
    b.append(
        &working,
        vec![],
        0,
        "Starting reverse: prev = null, curr = head",
    )?;
    let old_head = working.head();
    let circular = working.kind() == ListKind::Circular;
    let doubly = working.kind() == ListKind::Doubly;
    let mut prev: Option<NodeId> = None;
    let mut curr = working.head();
    let mut seen = rustc_hash::FxHashSet::default();
    while let Some(id) = curr {
        if !seen.insert(id) {
            break;
        }
        let raw = working.next_of(id);
        // For circular lists the pass ends when the walk wraps to the old head.
        let next = if circular && raw == old_head { None } else { raw };
        let next_label = next
            .map(|n| working.value(n).to_string())
            .unwrap_or_else(|| "null".into());
        let mut highlight = vec![node_ref(id)];
        if let Some(n) = next {
            highlight.push(node_ref(n));
        }
        b.append(
            &working,
            highlight,
            2,
            format!("Next = {}, curr.next = prev", next_label),
        )?;
        working.set_next(id, prev);
        if doubly {
            working.set_prev(id, next);
            b.append(
                &working,
                vec![node_ref(id)],
                3,
                format!("For doubly: curr.prev = {}", next_label),
            )?;
        }
        prev = Some(id);
        curr = next;
    }
    if circular {
        // Re-close the cycle: the old head is now the tail.
        if let (Some(old), Some(new_head)) = (old_head, prev) {
            working.set_next(old, Some(new_head));
        }
    }
    working.set_head(prev);
    b.append(&working, vec![], 4, "Reversed: head = prev")?;
    b.finish()
}

fn find_middle(working: ListArena) -> Result<Trace, EngineError> {
    let Some(head) = working.head() else {
        return TraceBuilder::rejection("list-find-middle", &working, "List empty.");
    };
    let mut b = TraceBuilder::new("list-find-middle");
    b.append(&working, vec![], 0, "Slow = head, Fast = head")?;
    let mut slow = head;
    let mut fast = Some(head);
    let mut seen = rustc_hash::FxHashSet::default();
    while let Some(f) = fast {
        if working.next_of(f).is_none() || !seen.insert(f) {
            break;
        }
        slow = working.next_of(slow).expect("fast ahead of slow");
        fast = working.next_of(f).and_then(|n| working.next_of(n));
        let fast_label = fast
            .map(|n| working.value(n).to_string())
            .unwrap_or_else(|| "null".into());
        let mut highlight = vec![node_ref(slow)];
        if let Some(f) = fast {
            highlight.push(node_ref(f));
        }
        b.append(
            &working,
            highlight,
            3,
            format!("Slow: {}, Fast: {}", working.value(slow), fast_label),
        )?;
    }
    b.append(
        &working,
        vec![node_ref(slow)],
        4,
        format!("Middle node: {}", working.value(slow)),
    )?;
    b.finish()
}

fn nth_from_end(working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let n = match parse_int(&params.count) {
        Some(n) if n >= 0 && !working.is_empty() => n as usize,
        _ => {
            return TraceBuilder::rejection(
                "list-nth-from-end",
                &working,
                "Enter valid n or list not empty.",
            );
        }
    };
    let ids = working.iter_ids();
    if n >= ids.len() {
        return TraceBuilder::rejection("list-nth-from-end", &working, "n exceeds list length.");
    }
    let mut b = TraceBuilder::new("list-nth-from-end");
    b.append(
        &working,
        vec![],
        0,
        format!("Advancing first pointer by {} steps", n),
    )?;
    for i in 0..n {
        let first = ids[i + 1];
        b.append(
            &working,
            vec![node_ref(first)],
            1,
            format!("First at step {}: {}", i + 1, working.value(first)),
        )?;
    }
    let mut first_idx = n;
    let mut second_idx = 0;
    while first_idx + 1 < ids.len() {
        first_idx += 1;
        second_idx += 1;
        b.append(
            &working,
            vec![node_ref(ids[first_idx]), node_ref(ids[second_idx])],
            3,
            format!(
                "Moving both: First={}, Second={}",
                working.value(ids[first_idx]),
                working.value(ids[second_idx])
            ),
        )?;
    }
    b.append(
        &working,
        vec![node_ref(ids[second_idx])],
        4,
        format!("Nth from end ({}): {}", n, working.value(ids[second_idx])),
    )?;
    b.finish()
}

fn rotate(mut working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    let k = match parse_int(&params.count) {
        Some(k) if k >= 0 && !working.is_empty() => k as usize,
        _ => {
            return TraceBuilder::rejection(
                "list-rotate",
                &working,
                "Enter valid k or list not empty.",
            );
        }
    };
    let len = working.len();
    let k = k % len;
    if k == 0 {
        return TraceBuilder::rejection("list-rotate", &working, "No rotation needed.");
    }
    let mut b = TraceBuilder::new("list-rotate");
    b.append(
        &working,
        vec![],
        0,
        format!("Rotating left by {} positions", k),
    )?;
    let ids = working.iter_ids();
    for i in 1..k {
        b.append(
            &working,
            vec![node_ref(ids[i - 1])],
            1,
            format!("Finding kth prev at step {}: {}", i, working.value(ids[i - 1])),
        )?;
    }
    let kth = ids[k];
    if working.kind() == ListKind::Circular {
        // The cycle is unchanged; rotation just moves the head pointer.
        working.set_head(Some(kth));
    } else {
        let prev = ids[k - 1];
        let head = ids[0];
        let tail = ids[len - 1];
        working.set_next(prev, None);
        working.set_next(tail, Some(head));
        if working.kind() == ListKind::Doubly {
            working.set_prev(head, Some(tail));
            working.set_prev(kth, None);
        }
        working.set_head(Some(kth));
    }
    b.append(
        &working,
        vec![node_ref(kth)],
        2,
        format!("New head after rotation: {}", working.value(kth)),
    )?;
    b.finish()
}

/// Floyd walk shared by detect and remove. Returns the meeting node and the
/// frames emitted per advance. The iteration bound covers looped lists where
/// the visited-set shortcut on fast would fire before slow catches up.
fn floyd_meet(
    working: &ListArena,
    b: &mut TraceBuilder,
    advance_line: i32,
    meet_line: i32,
) -> Result<Option<NodeId>, EngineError> {
    let Some(head) = working.head() else {
        return Ok(None);
    };
    let mut slow = head;
    let mut fast = Some(head);
    let bound = 2 * working.len() + 2;
    for _ in 0..bound {
        let Some(f) = fast else { break };
        if working.next_of(f).is_none() {
            break;
        }
        slow = working.next_of(slow).expect("fast ahead of slow");
        fast = working.next_of(f).and_then(|n| working.next_of(n));
        let fast_label = fast
            .map(|n| working.value(n).to_string())
            .unwrap_or_else(|| "null".into());
        let mut highlight = vec![node_ref(slow)];
        if let Some(f) = fast {
            highlight.push(node_ref(f));
        }
        if fast == Some(slow) {
            b.append(
                working,
                highlight,
                meet_line,
                format!(
                    "Slow: {}, Fast: {} - Loop detected!",
                    working.value(slow),
                    fast_label
                ),
            )?;
            return Ok(Some(slow));
        }
        b.append(
            working,
            highlight,
            advance_line,
            format!("Slow: {}, Fast: {}", working.value(slow), fast_label),
        )?;
    }
    Ok(None)
}

fn detect_loop(working: ListArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("list-detect-loop", &working, "List empty.");
    }
    let mut b = TraceBuilder::new("list-detect-loop");
    b.append(&working, vec![], 0, "Slow = head, Fast = head")?;
    if floyd_meet(&working, &mut b, 2, 3)?.is_none() {
        b.append(&working, vec![], -1, "No loop detected.")?;
    }
    b.finish()
}

fn remove_loop(mut working: ListArena) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("list-remove-loop", &working, "List empty.");
    }
    let mut b = TraceBuilder::new("list-remove-loop");
    b.append(&working, vec![], 0, "Detecting loop with Floyd")?;
    let Some(mut meet) = floyd_meet(&working, &mut b, 0, 0)? else {
        b.append(&working, vec![], -1, "No loop detected.")?;
        return b.finish();
    };
    let mut slow = working.head().expect("non-empty");
    while slow != meet {
        slow = working.next_of(slow).expect("loop reachable from head");
        meet = working.next_of(meet).expect("meet inside loop");
        b.append(
            &working,
            vec![node_ref(slow), node_ref(meet)],
            1,
            format!(
                "Slow: {}, Meet: {}",
                working.value(slow),
                working.value(meet)
            ),
        )?;
    }
    // slow == meet == loop start; walk meet to the last loop node.
    let start = slow;
    let mut last = meet;
    while working.next_of(last) != Some(start) {
        last = working.next_of(last).expect("loop is closed");
    }
    working.set_next(last, None);
    b.append(&working, vec![node_ref(last)], 3, "Loop removed: meet.next = null")?;
    b.finish()
}

fn merge(mut working: ListArena, params: &Params) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("list-merge", &working, "List empty.");
    }
    let Some(values) = parse_int_list(&params.second) else {
        return TraceBuilder::rejection(
            "list-merge",
            &working,
            "Enter comma-separated values for second list.",
        );
    };
    let mut b = TraceBuilder::new("list-merge");
    b.append(&working, vec![], 0, "Merging two sorted lists")?;
    let first: Vec<NodeId> = working.iter_ids();
    let second: Vec<NodeId> = values.iter().map(|&v| working.alloc(v)).collect();
    for pair in second.windows(2) {
        working.set_next(pair[0], Some(pair[1]));
    }
    // Standard dummy-tail merge over the two id chains.
    let mut merged: Vec<NodeId> = Vec::with_capacity(first.len() + second.len());
    let (mut i, mut j) = (0, 0);
    while i < first.len() && j < second.len() {
        if working.value(first[i]) <= working.value(second[j]) {
            merged.push(first[i]);
            i += 1;
        } else {
            merged.push(second[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);
    for pair in merged.windows(2) {
        working.set_next(pair[0], Some(pair[1]));
        if working.kind() == ListKind::Doubly {
            working.set_prev(pair[1], Some(pair[0]));
        }
    }
    let head = merged[0];
    let tail = merged[merged.len() - 1];
    working.set_next(
        tail,
        if working.kind() == ListKind::Circular {
            Some(head)
        } else {
            None
        },
    );
    if working.kind() == ListKind::Doubly {
        working.set_prev(head, None);
    }
    working.set_head(Some(head));
    b.append(&working, vec![], 1, "Merged list created")?;
    b.finish()
}
