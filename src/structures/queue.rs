//! Bounded queue in four flavors: linear, circular, deque, priority.
//!
//! The circular kind owns a fixed ring of [`QUEUE_CAPACITY`] slots with
//! `front`/`rear` cursors; one slot is kept open so full and empty are
//! distinguishable. The other kinds store entries densely with the front at
//! index 0.

/// Capacity of every queue kind except priority, which is unbounded.
pub const QUEUE_CAPACITY: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueKind {
    Linear,
    Circular,
    Deque,
    Priority,
}

impl QueueKind {
    pub fn label(&self) -> &'static str {
        match self {
            QueueKind::Linear => "linear",
            QueueKind::Circular => "circular",
            QueueKind::Deque => "deque",
            QueueKind::Priority => "priority",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub value: i64,
    /// Set only for priority queues. Higher dequeues first.
    pub priority: Option<i64>,
}

impl QueueEntry {
    pub fn plain(value: i64) -> Self {
        QueueEntry {
            value,
            priority: None,
        }
    }

    pub fn with_priority(value: i64, priority: i64) -> Self {
        QueueEntry {
            value,
            priority: Some(priority),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Queue {
    kind: QueueKind,
    /// Circular: always `QUEUE_CAPACITY` slots. Dense kinds: every slot is
    /// `Some` and the vector grows and shrinks with the contents.
    slots: Vec<Option<QueueEntry>>,
    front: usize,
    rear: usize,
}

impl Queue {
    pub fn new(kind: QueueKind) -> Self {
        let slots = match kind {
            QueueKind::Circular => vec![None; QUEUE_CAPACITY],
            _ => Vec::new(),
        };
        Queue {
            kind,
            slots,
            front: 0,
            rear: 0,
        }
    }

    /// Seed contents used by the demo scenarios: 4, 5, 6 from the front.
    /// Circular and priority queues start empty.
    pub fn sample(kind: QueueKind) -> Self {
        let mut q = Queue::new(kind);
        match kind {
            QueueKind::Linear | QueueKind::Deque => {
                for v in [4, 5, 6] {
                    q.dense_enqueue_rear(QueueEntry::plain(v));
                }
            }
            QueueKind::Circular | QueueKind::Priority => {}
        }
        q
    }

    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    pub fn front(&self) -> usize {
        self.front
    }

    pub fn rear(&self) -> usize {
        self.rear
    }

    pub fn slots(&self) -> &[Option<QueueEntry>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        match self.kind {
            QueueKind::Circular => {
                (self.rear + QUEUE_CAPACITY - self.front) % QUEUE_CAPACITY
            }
            _ => self.slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self.kind {
            QueueKind::Circular => self.front == self.rear,
            _ => self.slots.is_empty(),
        }
    }

    pub fn is_full(&self) -> bool {
        match self.kind {
            QueueKind::Circular => (self.rear + 1) % QUEUE_CAPACITY == self.front,
            QueueKind::Priority => false,
            _ => self.slots.len() >= QUEUE_CAPACITY,
        }
    }

    /// Entry that would dequeue next, with its slot index.
    pub fn front_entry(&self) -> Option<(usize, &QueueEntry)> {
        match self.kind {
            QueueKind::Circular => {
                if self.is_empty() {
                    None
                } else {
                    self.slots[self.front].as_ref().map(|e| (self.front, e))
                }
            }
            _ => self.slots.first().and_then(|s| s.as_ref().map(|e| (0, e))),
        }
    }

    // Dense mutators (linear, deque, priority). Callers check capacity first.

    pub fn dense_enqueue_rear(&mut self, entry: QueueEntry) -> usize {
        self.slots.push(Some(entry));
        self.rear = self.slots.len();
        self.slots.len() - 1
    }

    pub fn dense_enqueue_front(&mut self, entry: QueueEntry) {
        self.slots.insert(0, Some(entry));
        self.rear = self.slots.len();
    }

    pub fn dense_dequeue_front(&mut self) -> Option<QueueEntry> {
        if self.slots.is_empty() {
            return None;
        }
        let entry = self.slots.remove(0);
        self.rear = self.slots.len();
        entry
    }

    pub fn dense_dequeue_rear(&mut self) -> Option<(usize, QueueEntry)> {
        let entry = self.slots.pop()??;
        self.rear = self.slots.len();
        Some((self.slots.len(), entry))
    }

    /// Insert before the first entry with a strictly lower priority, keeping
    /// insertion order among equal priorities. Returns the slot index used.
    pub fn priority_insert(&mut self, entry: QueueEntry) -> usize {
        let p = entry.priority.unwrap_or(0);
        let pos = self
            .slots
            .iter()
            .position(|s| s.as_ref().is_some_and(|e| e.priority.unwrap_or(0) < p))
            .unwrap_or(self.slots.len());
        self.slots.insert(pos, Some(entry));
        self.rear = self.slots.len();
        pos
    }

    // Circular mutators. Callers check full/empty first.

    pub fn circular_enqueue(&mut self, entry: QueueEntry) -> usize {
        let slot = self.rear;
        self.slots[slot] = Some(entry);
        self.rear = (self.rear + 1) % QUEUE_CAPACITY;
        slot
    }

    pub fn circular_dequeue(&mut self) -> Option<(usize, QueueEntry)> {
        if self.is_empty() {
            return None;
        }
        let slot = self.front;
        let entry = self.slots[slot].take()?;
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        Some((slot, entry))
    }
}
