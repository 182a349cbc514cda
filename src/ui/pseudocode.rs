//! Static pseudocode tables, one per algorithm.
//!
//! The engine emits bare line indices; the table shown next to a trace is
//! selected here by [`AlgorithmId`] alone. Operations that never reference a
//! line (min/max, height, mirror and friends) map to an empty table and the
//! pane stays blank.

use crate::algorithms::AlgorithmId;

pub fn lines(kind: AlgorithmId) -> &'static [&'static str] {
    use AlgorithmId::*;
    match kind {
        BubbleSort => &[
            "for i from 0 to n-2:",
            "  for j from 0 to n-i-2:",
            "    if arr[j] > arr[j+1]: swap arr[j], arr[j+1]",
        ],
        SelectionSort => &[
            "for i from 0 to n-2:",
            "  minIdx = i",
            "  for j from i+1 to n-1:",
            "    if arr[j] < arr[minIdx]: minIdx = j",
            "  swap arr[i], arr[minIdx]",
        ],
        InsertionSort => &[
            "for i from 1 to n-1:",
            "  key = arr[i]",
            "  j = i-1",
            "  while j >= 0 and arr[j] > key:",
            "    arr[j+1] = arr[j]",
            "    j--",
            "  arr[j+1] = key",
        ],
        MergeSort => &[
            "mergeSort(arr, l, r):",
            "  if l < r:",
            "    mid = (l+r)/2",
            "    mergeSort(arr, l, mid)",
            "    mergeSort(arr, mid+1, r)",
            "    merge(arr, l, mid, r)",
        ],
        QuickSort => &[
            "quickSort(arr, low, high):",
            "  if low < high:",
            "    pi = partition(arr, low, high)",
            "    quickSort(arr, low, pi-1)",
            "    quickSort(arr, pi+1, high)",
        ],
        LinearSearch => &[
            "for i from 0 to n-1:",
            "  if arr[i] == target: return i",
            "return -1",
        ],
        BinarySearch => &[
            "l = 0, r = n-1",
            "while l <= r:",
            "  mid = (l+r)//2",
            "  if arr[mid] == target: return mid",
            "  if target < arr[mid]: r = mid-1",
            "  else: l = mid+1",
            "return -1",
        ],
        ArrayInsert | ArrayDelete => &[],
        ArrayPeek => &["if arr.length == 0: return null", "return arr[arr.length - 1]"],
        ArrayIsEmpty => &["return arr.length == 0"],
        ArrayIsFull => &["return arr.length == maxSize"],
        StackPush => &["if stack.length == maxSize: overflow", "stack.unshift(val)"],
        StackPop => &["if stack.length == 0: underflow", "return stack.shift()"],
        StackPeek => &["if stack.length == 0: return null", "return stack[0]"],
        StackIsEmpty => &["return stack.length == 0"],
        StackIsFull => &["return stack.length == maxSize"],
        BalancedParentheses => &[
            "for each char in string:",
            "  if '(': stack.push('(')",
            "  if ')': if stack.pop() != '(': mismatch",
            "if stack empty: balanced",
        ],
        PostfixEvaluation => &[
            "for each token in expression:",
            "  if number: stack.push(number)",
            "  if operator: pop two, apply op, push result",
            "return stack.pop()",
        ],
        InfixToPostfix => &[
            "for each token in infix:",
            "  if operand: output + push to stack",
            "  if '(': push to stack",
            "  if ')': pop until '(' to output",
            "  if operator: pop higher prec, push current",
            "pop remaining to output",
        ],
        UndoHistory => &[
            "push actions to stack",
            "to undo: pop from stack",
            "restore previous state",
        ],
        PalindromeStack => &[
            "for first half of string: push chars to stack",
            "for second half: pop and compare with char",
        ],
        NextGreaterElement => &[
            "for each element in array:",
            "  while stack not empty and stack.top < current:",
            "    pop stack, set next greater",
            "  push current to stack",
        ],
        ReverseStack => &[
            "for each element in input: push to stack",
            "while stack not empty: pop and append to result",
        ],
        Enqueue | EnqueueFront => &["if isFull(): overflow", "insert at rear"],
        Dequeue | DequeueRear => &["if isEmpty(): underflow", "remove from front"],
        QueuePeek => &["if isEmpty(): return null", "return front element"],
        QueueIsEmpty => &["return front == rear (circular) or length == 0"],
        QueueIsFull => &["return (rear + 1) % maxSize == front (circular) or length == maxSize"],
        ListInsertHead => &[
            "Create new node",
            "new.next = head",
            "head = new",
            "Update prev if doubly",
        ],
        ListInsertTail => &[
            "Traverse to tail",
            "tail.next = new",
            "new.prev = tail if doubly",
            "Update head if empty",
        ],
        ListInsertAt => &[
            "Traverse to pos-1",
            "new.next = curr.next",
            "curr.next = new",
            "Update prevs if doubly",
        ],
        ListDeleteHead => &[
            "temp = head",
            "head = head.next",
            "head.prev = null if doubly",
            "Free temp",
        ],
        ListDeleteTail => &[
            "Traverse to prev of tail",
            "prev.next = null",
            "Update prevs if doubly",
            "Free tail",
        ],
        ListDeleteAt | ListDeleteValue => &[
            "Traverse to prev of pos",
            "prev.next = pos.next",
            "pos.next.prev = prev if doubly",
            "Free pos",
        ],
        ListSearch => &["Traverse from head", "If node.value == key, return node/index"],
        ListValueAt => &["Traverse to index", "Return node.value"],
        ListTraverse => &[
            "Start from head",
            "While node != null, display node.value, node = node.next",
        ],
        ListLength => &[
            "Initialize count = 0",
            "Traverse from head",
            "While node != null/end, count++, node = node.next",
            "Return count",
        ],
        ListFindMiddle => &[
            "Slow = head, Fast = head",
            "While fast and fast.next",
            "Slow = slow.next",
            "Fast = fast.next.next",
            "Return slow as middle",
        ],
        ListNthFromEnd => &[
            "If n > length, invalid",
            "First = head, advance first by n steps",
            "Second = head",
            "While first.next, first = first.next, second = second.next",
            "Return second as nth from end",
        ],
        ListRotate => &[
            "K = k % length",
            "Prev = head, for i=1 to k-1, prev = prev.next",
            "Head = kth, reattach tail",
        ],
        ListReverse => &[
            "Prev = null, Curr = head",
            "Next = curr.next",
            "Curr.next = prev",
            "Prev = curr, Curr = next",
            "Head = prev",
        ],
        ListDetectLoop => &[
            "Slow = head, Fast = head",
            "While fast and fast.next",
            "Slow = slow.next, Fast = fast.next.next",
            "If slow == fast, loop detected",
        ],
        ListRemoveLoop => &[
            "Detect loop with Floyd",
            "Slow = head, while slow != meet, advance both",
            "Walk meet to last loop node",
            "Meet.next = null",
        ],
        ListMerge => &[
            "Merge two sorted lists",
            "Take the smaller head each step",
        ],
        TreeInsert => &[
            "if root is null: root = new Node(value)",
            "else: traverse to find position",
            "  if value < node.value: go left",
            "  else: go right",
            "insert at leaf position",
        ],
        TreeDelete => &[
            "find node to delete",
            "if leaf: remove directly",
            "if one child: replace with child",
            "if two children: find inorder successor",
            "replace and remove successor",
        ],
        TreeSearch => &[
            "start from root",
            "while node != null:",
            "  if value == node.value: found",
            "  if value < node.value: go left",
            "  else: go right",
            "not found",
        ],
        InorderTraversal => &[
            "inorder(node):",
            "  if node:",
            "    inorder(node.left)",
            "    visit(node)",
            "    inorder(node.right)",
        ],
        PreorderTraversal => &[
            "preorder(node):",
            "  if node:",
            "    visit(node)",
            "    preorder(node.left)",
            "    preorder(node.right)",
        ],
        PostorderTraversal => &[
            "postorder(node):",
            "  if node:",
            "    postorder(node.left)",
            "    postorder(node.right)",
            "    visit(node)",
        ],
        LevelOrderTraversal => &[
            "use queue",
            "enqueue root",
            "while queue not empty:",
            "  dequeue node, visit",
            "  enqueue left and right",
        ],
        TreeMinMax | TreeHeight | TreeDiameter | LowestCommonAncestor | BalanceCheck
        | MirrorTree => &[],
        AddVertex => &[
            "Create new vertex with unique id",
            "Add to vertices list",
            "Update adjacency structures",
        ],
        RemoveVertex => &[
            "Find vertex by id",
            "Remove from vertices list",
            "Remove all edges connected to it",
            "Update adjacency structures",
        ],
        AddEdge => &[
            "Parse input: u,v[,weight]",
            "Check if vertices exist",
            "Add edge to edges list",
            "Update adjacency list/matrix",
        ],
        RemoveEdge => &[
            "Parse input: u,v",
            "Find and remove edge",
            "Update adjacency structures",
        ],
        Bfs => &[
            "Initialize queue and visited set",
            "Enqueue start vertex, mark visited",
            "While queue not empty:",
            "  Dequeue vertex",
            "  For each neighbor:",
            "    If not visited: enqueue, mark visited",
        ],
        Dfs => &[
            "Initialize stack and visited set",
            "Push start vertex, mark visited",
            "While stack not empty:",
            "  Pop vertex",
            "  For each neighbor:",
            "    If not visited: push, mark visited",
        ],
        Dijkstra => &[
            "Initialize distances: start=0, others=inf",
            "Use priority queue (min-heap)",
            "While queue not empty:",
            "  Extract min distance vertex",
            "  For each neighbor:",
            "    Relax edge: update distance if shorter",
        ],
        BellmanFord => &[
            "Initialize distances: start=0, others=inf",
            "For V-1 iterations:",
            "  For each edge:",
            "    Relax: if dist[u] + w < dist[v]: update",
            "Check for negative cycles",
        ],
        FloydWarshall => &[
            "Initialize dist matrix with edge weights",
            "For k in 0..V-1:",
            "  For i in 0..V-1:",
            "    For j in 0..V-1:",
            "      dist[i][j] = min(dist[i][j], dist[i][k] + dist[k][j])",
        ],
        AStar => &[
            "Initialize open set with start",
            "gScore[start] = 0, fScore[start] = heuristic(start, goal)",
            "While open set not empty:",
            "  current = lowest fScore in open",
            "  If current == goal: reconstruct path",
            "  For each neighbor:",
            "    tentative_g = gScore[current] + dist(current, neighbor)",
            "    If better: update scores, add to open",
        ],
        Prim => &[
            "Initialize MST set, key values",
            "Pick vertex with min key",
            "For each adjacent vertex:",
            "  If not in MST and edge weight < key:",
            "    Update key, parent",
        ],
        Kruskal => &[
            "Sort edges by weight",
            "Initialize union-find",
            "For each edge in sorted order:",
            "  If u and v not in same set:",
            "    Add edge to MST, union sets",
        ],
        TopologicalSort => &[
            "Calculate indegrees",
            "Initialize queue with 0 indegree vertices",
            "While queue not empty:",
            "  Dequeue vertex, add to order",
            "  For each neighbor: decrease indegree",
            "  If indegree == 0: enqueue",
        ],
        CycleDetection => &[
            "Use DFS with colors: white, gray, black",
            "White: not visited, Gray: visiting, Black: visited",
            "If encounter gray node: cycle",
            "Mark nodes as visited",
        ],
        Scc => &[
            "DFS to get finishing times",
            "Transpose graph",
            "DFS on transpose in finishing order",
            "Each DFS tree is an SCC",
        ],
        Bipartite => &[
            "Use BFS with colors: 0, 1",
            "Color start as 0",
            "For each neighbor:",
            "  If not colored: color opposite, enqueue",
            "  If same color: not bipartite",
        ],
        StringTraversal => &[
            "length = 0",
            "for each char in string:",
            "  length += 1",
            "return length",
        ],
        StringReverse => &[
            "left = 0, right = length-1",
            "while left < right:",
            "  swap str[left] and str[right]",
            "  left++, right--",
        ],
        Substring => &[
            "if start < 0 or end > length: error",
            "return str[start:end+1]",
        ],
        Concatenate => &["result = primary + secondary", "return result"],
        PalindromeCheck => &[
            "left = 0, right = length-1",
            "while left < right:",
            "  if str[left] != str[right]: return false",
            "  left++, right--",
            "return true",
        ],
        AnagramCheck => &[
            "sort primary and secondary",
            "if sorted1 == sorted2: true else false",
        ],
        NaiveMatch => &[
            "for i from 0 to n-m:",
            "  match = true",
            "  for j from 0 to m-1:",
            "    if str[i+j] != pat[j]: match=false",
            "  if match: found at i",
        ],
        KmpMatch => &[
            "build prefix table for pattern",
            "i=0, j=0",
            "while i < n:",
            "  if pat[j] == str[i]: i++, j++",
            "  if j == m: found at i-j, j=pi[j-1]",
            "  else if j > 0: j = pi[j-1]",
            "  else: i++",
        ],
        LcsLength => &[
            "dp = matrix(m+1, n+1)",
            "for i 1 to m:",
            "  for j 1 to n:",
            "    if s1[i-1]==s2[j-1]: dp[i][j]=dp[i-1][j-1]+1",
            "    else: dp[i][j]=max(dp[i-1][j], dp[i][j-1])",
            "return dp[m][n]",
        ],
        RunLengthEncoding => &[
            "result = ''",
            "count = 1",
            "for i 1 to length:",
            "  if str[i] == str[i-1]: count++",
            "  else: result += str[i-1] + count, count=1",
            "result += str[length-1] + count",
            "return result",
        ],
        CharFrequency => &[
            "map = empty hashmap",
            "for each char in string:",
            "  map[char] = map[char] + 1 or 1",
            "return map",
        ],
    }
}
