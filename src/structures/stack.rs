//! Bounded stack with the top at index 0.
//!
//! Items are strings so the same structure serves numeric pushes and the
//! character/token use cases (balanced parentheses, postfix evaluation).

/// Capacity of the bounded stack.
pub const STACK_CAPACITY: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct Stack {
    items: Vec<String>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn with_items(items: Vec<String>) -> Self {
        Stack { items }
    }

    /// Seed contents used by the demo scenarios: 1 on top, then 2, 3.
    pub fn sample() -> Self {
        Stack::with_items(vec!["1".into(), "2".into(), "3".into()])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= STACK_CAPACITY
    }

    /// Top of the stack, if any.
    pub fn peek(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn push_top(&mut self, item: impl Into<String>) {
        self.items.insert(0, item.into());
    }

    pub fn pop_top(&mut self) -> Option<String> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
