//! Queue operations across the four queue kinds.
//!
//! Each mutation is two frames: intent (structure untouched, target slot
//! highlighted where known) then result. Front insertion and rear removal
//! are deque-only; dispatching them against another kind rejects with a
//! message frame rather than mutating.

use super::{parse_int, AlgorithmId, Params};
use crate::structures::{Queue, QueueEntry, QueueKind};
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};

pub(crate) fn run(
    kind: AlgorithmId,
    working: Queue,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::Enqueue => enqueue(working, params),
        AlgorithmId::Dequeue => dequeue(working),
        AlgorithmId::EnqueueFront => enqueue_front(working, params),
        AlgorithmId::DequeueRear => dequeue_rear(working),
        AlgorithmId::QueuePeek => peek(working),
        AlgorithmId::QueueIsEmpty => is_empty(working),
        AlgorithmId::QueueIsFull => is_full(working),
        _ => unreachable!("non-queue algorithm routed to queue module"),
    }
}

fn enqueue(mut working: Queue, params: &Params) -> Result<Trace, EngineError> {
    if working.is_full() {
        return TraceBuilder::rejection("enqueue", &working, "Queue full! Cannot enqueue.");
    }
    let Some(v) = parse_int(&params.value) else {
        return TraceBuilder::rejection("enqueue", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("enqueue");
    let slot = match working.kind() {
        QueueKind::Priority => {
            let Some(p) = parse_int(&params.count) else {
                return TraceBuilder::rejection("enqueue", &working, "Enter priority value.");
            };
            b.append(
                &working,
                vec![],
                0,
                format!("Enqueuing {} with priority {}", v, p),
            )?;
            working.priority_insert(QueueEntry::with_priority(v, p))
        }
        QueueKind::Circular => {
            let rear = working.rear();
            b.append(
                &working,
                vec![ElementRef::Index(rear)],
                0,
                format!("Enqueuing {} at rear {}", v, rear),
            )?;
            working.circular_enqueue(QueueEntry::plain(v))
        }
        QueueKind::Linear | QueueKind::Deque => {
            b.append(&working, vec![], 0, format!("Enqueuing {} at rear", v))?;
            working.dense_enqueue_rear(QueueEntry::plain(v))
        }
    };
    b.append(&working, vec![ElementRef::Index(slot)], 1, "Enqueued")?;
    b.finish()
}

fn dequeue(mut working: Queue) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("dequeue", &working, "Queue empty! Cannot dequeue.");
    }
    let mut b = TraceBuilder::new("dequeue");
    if working.kind() == QueueKind::Circular {
        let front = working.front();
        let value = working
            .front_entry()
            .map(|(_, e)| e.value)
            .unwrap_or_default();
        b.append(
            &working,
            vec![ElementRef::Index(front)],
            0,
            format!("Dequeuing {} from front {}", value, front),
        )?;
        working.circular_dequeue();
    } else {
        let value = working
            .front_entry()
            .map(|(_, e)| e.value)
            .unwrap_or_default();
        b.append(
            &working,
            vec![ElementRef::Index(0)],
            0,
            format!("Dequeuing {} from front", value),
        )?;
        working.dense_dequeue_front();
    }
    b.append(&working, vec![], 1, "Dequeued")?;
    b.finish()
}

fn enqueue_front(mut working: Queue, params: &Params) -> Result<Trace, EngineError> {
    if working.kind() != QueueKind::Deque {
        return TraceBuilder::rejection(
            "enqueue-front",
            &working,
            "Front insertion requires a deque.",
        );
    }
    if working.is_full() {
        return TraceBuilder::rejection("enqueue-front", &working, "Queue full! Cannot enqueue.");
    }
    let Some(v) = parse_int(&params.value) else {
        return TraceBuilder::rejection("enqueue-front", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("enqueue-front");
    b.append(&working, vec![], 0, format!("Enqueuing {} at front", v))?;
    working.dense_enqueue_front(QueueEntry::plain(v));
    b.append(&working, vec![ElementRef::Index(0)], 1, "Enqueued")?;
    b.finish()
}

fn dequeue_rear(mut working: Queue) -> Result<Trace, EngineError> {
    if working.kind() != QueueKind::Deque {
        return TraceBuilder::rejection(
            "dequeue-rear",
            &working,
            "Rear removal requires a deque.",
        );
    }
    if working.is_empty() {
        return TraceBuilder::rejection("dequeue-rear", &working, "Queue empty! Cannot dequeue.");
    }
    let mut b = TraceBuilder::new("dequeue-rear");
    let last = working.len() - 1;
    let value = working.slots()[last]
        .as_ref()
        .map(|e| e.value)
        .unwrap_or_default();
    b.append(
        &working,
        vec![ElementRef::Index(last)],
        0,
        format!("Dequeuing {} from rear", value),
    )?;
    working.dense_dequeue_rear();
    b.append(&working, vec![], 1, "Dequeued")?;
    b.finish()
}

fn peek(working: Queue) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("queue-peek", &working, "Queue empty! Cannot peek.");
    }
    let (slot, entry) = match working.front_entry() {
        Some((slot, entry)) => (slot, entry.value.to_string()),
        None => (working.front(), "empty".to_string()),
    };
    let mut b = TraceBuilder::new("queue-peek");
    b.append(
        &working,
        vec![ElementRef::Index(slot)],
        0,
        format!("Peeking front: {}", entry),
    )?;
    b.finish()
}

fn is_empty(working: Queue) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("queue-is-empty");
    b.append(
        &working,
        vec![],
        0,
        format!("Is Empty: {}", working.is_empty()),
    )?;
    b.finish()
}

fn is_full(working: Queue) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("queue-is-full");
    b.append(
        &working,
        vec![],
        0,
        format!("Is Full: {}", working.is_full()),
    )?;
    b.finish()
}
