//! Algorithm library
//!
//! One pure function per operation: take a cloned working structure plus
//! parsed parameters, return a finished [`Trace`]. Nothing here mutates the
//! caller's structure and nothing depends on wall-clock time, so the same
//! inputs always produce the identical frame sequence.
//!
//! Bad input never panics and never raises [`EngineError`]; it produces a
//! one-frame rejection trace with an explanatory message.

pub mod array;
pub mod graph;
pub mod list;
pub mod queue;
pub mod stack;
pub mod string;
pub mod tree;

use crate::structures::Structure;
use crate::trace::{EngineError, Trace};

/// Structure family an algorithm operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Array,
    Stack,
    Queue,
    List,
    Tree,
    Graph,
    Text,
}

impl Family {
    pub fn label(&self) -> &'static str {
        match self {
            Family::Array => "array",
            Family::Stack => "stack",
            Family::Queue => "queue",
            Family::List => "list",
            Family::Tree => "tree",
            Family::Graph => "graph",
            Family::Text => "string",
        }
    }
}

/// Every operation the engine can run, across all structure families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    // Array
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    ArrayInsert,
    ArrayDelete,
    ArrayPeek,
    ArrayIsEmpty,
    ArrayIsFull,
    // Stack
    StackPush,
    StackPop,
    StackPeek,
    StackIsEmpty,
    StackIsFull,
    BalancedParentheses,
    PostfixEvaluation,
    InfixToPostfix,
    UndoHistory,
    PalindromeStack,
    NextGreaterElement,
    ReverseStack,
    // Queue
    Enqueue,
    Dequeue,
    EnqueueFront,
    DequeueRear,
    QueuePeek,
    QueueIsEmpty,
    QueueIsFull,
    // Linked list
    ListInsertHead,
    ListInsertTail,
    ListInsertAt,
    ListDeleteHead,
    ListDeleteTail,
    ListDeleteAt,
    ListDeleteValue,
    ListSearch,
    ListValueAt,
    ListTraverse,
    ListLength,
    ListReverse,
    ListFindMiddle,
    ListNthFromEnd,
    ListRotate,
    ListDetectLoop,
    ListRemoveLoop,
    ListMerge,
    // Binary search tree
    TreeInsert,
    TreeSearch,
    TreeDelete,
    InorderTraversal,
    PreorderTraversal,
    PostorderTraversal,
    LevelOrderTraversal,
    TreeMinMax,
    TreeHeight,
    TreeDiameter,
    LowestCommonAncestor,
    BalanceCheck,
    MirrorTree,
    // Graph
    AddVertex,
    RemoveVertex,
    AddEdge,
    RemoveEdge,
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    FloydWarshall,
    AStar,
    Prim,
    Kruskal,
    TopologicalSort,
    CycleDetection,
    Scc,
    Bipartite,
    // String
    StringTraversal,
    StringReverse,
    Substring,
    Concatenate,
    PalindromeCheck,
    AnagramCheck,
    NaiveMatch,
    KmpMatch,
    LcsLength,
    RunLengthEncoding,
    CharFrequency,
}

impl AlgorithmId {
    pub fn family(&self) -> Family {
        use AlgorithmId::*;
        match self {
            BubbleSort | SelectionSort | InsertionSort | MergeSort | QuickSort
            | LinearSearch | BinarySearch | ArrayInsert | ArrayDelete | ArrayPeek
            | ArrayIsEmpty | ArrayIsFull => Family::Array,
            StackPush | StackPop | StackPeek | StackIsEmpty | StackIsFull
            | BalancedParentheses | PostfixEvaluation | InfixToPostfix | UndoHistory
            | PalindromeStack | NextGreaterElement | ReverseStack => Family::Stack,
            Enqueue | Dequeue | EnqueueFront | DequeueRear | QueuePeek | QueueIsEmpty
            | QueueIsFull => Family::Queue,
            ListInsertHead | ListInsertTail | ListInsertAt | ListDeleteHead
            | ListDeleteTail | ListDeleteAt | ListDeleteValue | ListSearch
            | ListValueAt | ListTraverse | ListLength | ListReverse | ListFindMiddle
            | ListNthFromEnd | ListRotate | ListDetectLoop | ListRemoveLoop
            | ListMerge => Family::List,
            TreeInsert | TreeSearch | TreeDelete | InorderTraversal
            | PreorderTraversal | PostorderTraversal | LevelOrderTraversal
            | TreeMinMax | TreeHeight | TreeDiameter | LowestCommonAncestor
            | BalanceCheck | MirrorTree => Family::Tree,
            AddVertex | RemoveVertex | AddEdge | RemoveEdge | Bfs | Dfs | Dijkstra
            | BellmanFord | FloydWarshall | AStar | Prim | Kruskal | TopologicalSort
            | CycleDetection | Scc | Bipartite => Family::Graph,
            StringTraversal | StringReverse | Substring | Concatenate
            | PalindromeCheck | AnagramCheck | NaiveMatch | KmpMatch | LcsLength
            | RunLengthEncoding | CharFrequency => Family::Text,
        }
    }

    pub fn name(&self) -> &'static str {
        use AlgorithmId::*;
        match self {
            BubbleSort => "bubble-sort",
            SelectionSort => "selection-sort",
            InsertionSort => "insertion-sort",
            MergeSort => "merge-sort",
            QuickSort => "quick-sort",
            LinearSearch => "linear-search",
            BinarySearch => "binary-search",
            ArrayInsert => "array-insert",
            ArrayDelete => "array-delete",
            ArrayPeek => "array-peek",
            ArrayIsEmpty => "array-is-empty",
            ArrayIsFull => "array-is-full",
            StackPush => "stack-push",
            StackPop => "stack-pop",
            StackPeek => "stack-peek",
            StackIsEmpty => "stack-is-empty",
            StackIsFull => "stack-is-full",
            BalancedParentheses => "balanced-parentheses",
            PostfixEvaluation => "postfix-evaluation",
            InfixToPostfix => "infix-to-postfix",
            UndoHistory => "undo-history",
            PalindromeStack => "palindrome-stack",
            NextGreaterElement => "next-greater-element",
            ReverseStack => "reverse-stack",
            Enqueue => "enqueue",
            Dequeue => "dequeue",
            EnqueueFront => "enqueue-front",
            DequeueRear => "dequeue-rear",
            QueuePeek => "queue-peek",
            QueueIsEmpty => "queue-is-empty",
            QueueIsFull => "queue-is-full",
            ListInsertHead => "list-insert-head",
            ListInsertTail => "list-insert-tail",
            ListInsertAt => "list-insert-at",
            ListDeleteHead => "list-delete-head",
            ListDeleteTail => "list-delete-tail",
            ListDeleteAt => "list-delete-at",
            ListDeleteValue => "list-delete-value",
            ListSearch => "list-search",
            ListValueAt => "list-value-at",
            ListTraverse => "list-traverse",
            ListLength => "list-length",
            ListReverse => "list-reverse",
            ListFindMiddle => "list-find-middle",
            ListNthFromEnd => "list-nth-from-end",
            ListRotate => "list-rotate",
            ListDetectLoop => "list-detect-loop",
            ListRemoveLoop => "list-remove-loop",
            ListMerge => "list-merge",
            TreeInsert => "tree-insert",
            TreeSearch => "tree-search",
            TreeDelete => "tree-delete",
            InorderTraversal => "inorder-traversal",
            PreorderTraversal => "preorder-traversal",
            PostorderTraversal => "postorder-traversal",
            LevelOrderTraversal => "level-order-traversal",
            TreeMinMax => "tree-min-max",
            TreeHeight => "tree-height",
            TreeDiameter => "tree-diameter",
            LowestCommonAncestor => "lowest-common-ancestor",
            BalanceCheck => "balance-check",
            MirrorTree => "mirror-tree",
            AddVertex => "add-vertex",
            RemoveVertex => "remove-vertex",
            AddEdge => "add-edge",
            RemoveEdge => "remove-edge",
            Bfs => "bfs",
            Dfs => "dfs",
            Dijkstra => "dijkstra",
            BellmanFord => "bellman-ford",
            FloydWarshall => "floyd-warshall",
            AStar => "a-star",
            Prim => "prim",
            Kruskal => "kruskal",
            TopologicalSort => "topological-sort",
            CycleDetection => "cycle-detection",
            Scc => "scc",
            Bipartite => "bipartite",
            StringTraversal => "string-traversal",
            StringReverse => "string-reverse",
            Substring => "substring",
            Concatenate => "concatenate",
            PalindromeCheck => "palindrome-check",
            AnagramCheck => "anagram-check",
            NaiveMatch => "naive-match",
            KmpMatch => "kmp-match",
            LcsLength => "lcs-length",
            RunLengthEncoding => "run-length-encoding",
            CharFrequency => "char-frequency",
        }
    }
}

/// Optional textual parameters, parsed by each algorithm as needed.
///
/// `value` is the primary input (a number, a vertex id, `u,v,weight`, or a
/// whole expression depending on the operation); `index` a position;
/// `target` a search key or pattern; `count` a step count, priority, or end
/// index; `second` a secondary sequence (merge list, concat string).
#[derive(Debug, Clone, Default)]
pub struct Params {
    pub value: Option<String>,
    pub index: Option<String>,
    pub target: Option<String>,
    pub count: Option<String>,
    pub second: Option<String>,
}

impl Params {
    pub fn value(value: impl Into<String>) -> Self {
        Params {
            value: Some(value.into()),
            ..Params::default()
        }
    }

    pub fn target(target: impl Into<String>) -> Self {
        Params {
            target: Some(target.into()),
            ..Params::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_count(mut self, count: impl Into<String>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn with_second(mut self, second: impl Into<String>) -> Self {
        self.second = Some(second.into());
        self
    }
}

/// Parse an optional text field as an integer. Empty or absent is `None`;
/// malformed text is also `None` (callers reject with a message frame).
pub(crate) fn parse_int(field: &Option<String>) -> Option<i64> {
    field.as_ref()?.trim().parse().ok()
}

/// Parse a comma-separated integer list; `None` when any element is bad.
pub(crate) fn parse_int_list(field: &Option<String>) -> Option<Vec<i64>> {
    let text = field.as_ref()?.trim();
    if text.is_empty() {
        return None;
    }
    text.split(',').map(|p| p.trim().parse().ok()).collect()
}

pub(crate) fn text_param(field: &Option<String>) -> Option<&str> {
    let text = field.as_ref()?.trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Run one operation against a structure. The structure is cloned first;
/// the caller's copy is never mutated. Dispatching an algorithm against a
/// structure of the wrong family is a caller bug and fails fatally.
pub fn run_algorithm(
    kind: AlgorithmId,
    structure: &Structure,
    params: &Params,
) -> Result<Trace, EngineError> {
    match (kind.family(), structure) {
        (Family::Array, Structure::Array(values)) => array::run(kind, values.clone(), params),
        (Family::Stack, Structure::Stack(stack)) => stack::run(kind, stack.clone(), params),
        (Family::Queue, Structure::Queue(queue)) => queue::run(kind, queue.clone(), params),
        (Family::List, Structure::List(arena)) => list::run(kind, arena.clone(), params),
        (Family::Tree, Structure::Tree(arena)) => tree::run(kind, arena.clone(), params),
        (Family::Graph, Structure::Graph(g)) => graph::run(kind, g.clone(), params),
        (Family::Text, Structure::Text(text)) => string::run(kind, text.clone(), params),
        (family, other) => Err(EngineError::StructureMismatch {
            algorithm: kind.name(),
            expected: family.label(),
            got: other.kind(),
        }),
    }
}
