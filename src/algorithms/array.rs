//! Array operations: sorts, searches, bounded insert/delete/peek.
//!
//! Sort choreography: one frame per comparison and one per swap/shift, with
//! the compared indices highlighted. Every run opens with a start frame and
//! closes with a result frame, so even a trivially sorted input yields a
//! playable trace.

use super::{parse_int, AlgorithmId, Params};
use crate::structures::ARRAY_CAPACITY;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};

pub(crate) fn run(
    kind: AlgorithmId,
    working: Vec<i64>,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::BubbleSort => bubble_sort(working),
        AlgorithmId::SelectionSort => selection_sort(working),
        AlgorithmId::InsertionSort => insertion_sort(working),
        AlgorithmId::MergeSort => merge_sort(working),
        AlgorithmId::QuickSort => quick_sort(working),
        AlgorithmId::LinearSearch => linear_search(working, params),
        AlgorithmId::BinarySearch => binary_search(working, params),
        AlgorithmId::ArrayInsert => insert(working, params),
        AlgorithmId::ArrayDelete => delete(working, params),
        AlgorithmId::ArrayPeek => peek(working),
        AlgorithmId::ArrayIsEmpty => is_empty(working),
        AlgorithmId::ArrayIsFull => is_full(working),
        _ => unreachable!("non-array algorithm routed to array module"),
    }
}

fn bubble_sort(mut working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("bubble-sort");
    b.append(&working, vec![], -1, "Bubble Sort")?;
    let n = working.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            b.append(
                &working,
                vec![ElementRef::Index(j), ElementRef::Index(j + 1)],
                0,
                format!("Compare {} and {}", working[j], working[j + 1]),
            )?;
            if working[j] > working[j + 1] {
                working.swap(j, j + 1);
                b.append(
                    &working,
                    vec![ElementRef::Index(j), ElementRef::Index(j + 1)],
                    1,
                    "Swapped",
                )?;
            }
        }
    }
    b.append(&working, vec![], -1, "Sorted")?;
    b.finish()
}

fn selection_sort(mut working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("selection-sort");
    b.append(&working, vec![], -1, "Selection Sort")?;
    let n = working.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        b.append(
            &working,
            vec![ElementRef::Index(i)],
            0,
            format!("Find min from {}", i),
        )?;
        for j in i + 1..n {
            b.append(
                &working,
                vec![ElementRef::Index(min_idx), ElementRef::Index(j)],
                2,
                format!("Compare {} with min {}", working[j], working[min_idx]),
            )?;
            if working[j] < working[min_idx] {
                min_idx = j;
                b.append(
                    &working,
                    vec![ElementRef::Index(min_idx)],
                    3,
                    format!("New min at {}", min_idx),
                )?;
            }
        }
        if min_idx != i {
            working.swap(i, min_idx);
            b.append(
                &working,
                vec![ElementRef::Index(i), ElementRef::Index(min_idx)],
                4,
                "Swapped",
            )?;
        }
    }
    b.append(&working, vec![], -1, "Sorted")?;
    b.finish()
}

fn insertion_sort(mut working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("insertion-sort");
    b.append(&working, vec![], -1, "Insertion Sort")?;
    for i in 1..working.len() {
        let key = working[i];
        let mut j = i;
        b.append(
            &working,
            vec![ElementRef::Index(i)],
            0,
            format!("Key = {}", key),
        )?;
        while j > 0 && working[j - 1] > key {
            b.append(
                &working,
                vec![ElementRef::Index(j - 1), ElementRef::Index(j)],
                3,
                format!("Shift {}", working[j - 1]),
            )?;
            working[j] = working[j - 1];
            j -= 1;
        }
        working[j] = key;
        b.append(&working, vec![ElementRef::Index(j)], 5, "Inserted key")?;
    }
    b.append(&working, vec![], -1, "Sorted")?;
    b.finish()
}

// Merge and quick sort show the recursive structure in pseudocode only; the
// trace is start frame plus sorted result, matching the coarse granularity
// of the coarse-grained sorts in the original suite.
fn merge_sort(working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("merge-sort");
    b.append(&working, vec![], -1, "Merge Sort")?;
    let sorted = merge_sort_rec(&working);
    b.append(&sorted, vec![], -1, "Sorted with Merge Sort")?;
    b.finish()
}

fn merge_sort_rec(values: &[i64]) -> Vec<i64> {
    if values.len() <= 1 {
        return values.to_vec();
    }
    let mid = values.len() / 2;
    let left = merge_sort_rec(&values[..mid]);
    let right = merge_sort_rec(&values[mid..]);
    let mut out = Vec::with_capacity(values.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            out.push(left[i]);
            i += 1;
        } else {
            out.push(right[j]);
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

fn quick_sort(mut working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("quick-sort");
    b.append(&working, vec![], -1, "Quick Sort")?;
    let high = working.len();
    if high > 1 {
        quick_sort_rec(&mut working, 0, high - 1);
    }
    b.append(&working, vec![], -1, "Sorted with Quick Sort")?;
    b.finish()
}

fn quick_sort_rec(values: &mut [i64], low: usize, high: usize) {
    if low >= high {
        return;
    }
    let pivot = values[high];
    let mut i = low;
    for j in low..high {
        if values[j] < pivot {
            values.swap(i, j);
            i += 1;
        }
    }
    values.swap(i, high);
    if i > low {
        quick_sort_rec(values, low, i - 1);
    }
    quick_sort_rec(values, i + 1, high);
}

fn linear_search(working: Vec<i64>, params: &Params) -> Result<Trace, EngineError> {
    let Some(target) = parse_int(&params.target) else {
        return TraceBuilder::rejection("linear-search", &working, "Enter numeric target.");
    };
    let mut b = TraceBuilder::new("linear-search");
    for (i, &v) in working.iter().enumerate() {
        b.append(
            &working,
            vec![ElementRef::Index(i)],
            0,
            format!("Checking index {}", i),
        )?;
        if v == target {
            b.append(
                &working,
                vec![ElementRef::Index(i)],
                1,
                format!("Found at index {}", i),
            )?;
            return b.finish();
        }
    }
    b.append(&working, vec![], 2, "Not found")?;
    b.finish()
}

fn binary_search(working: Vec<i64>, params: &Params) -> Result<Trace, EngineError> {
    let Some(target) = parse_int(&params.target) else {
        return TraceBuilder::rejection("binary-search", &working, "Enter numeric target.");
    };
    if working.windows(2).any(|w| w[1] < w[0]) {
        return TraceBuilder::rejection(
            "binary-search",
            &working,
            "Binary search requires sorted array. Sort it first or use linear search.",
        );
    }
    let mut b = TraceBuilder::new("binary-search");
    let mut l = 0i64;
    let mut r = working.len() as i64 - 1;
    while l <= r {
        let mid = ((l + r) / 2) as usize;
        b.append(
            &working,
            vec![ElementRef::Index(mid)],
            2,
            format!("mid = {}", mid),
        )?;
        if working[mid] == target {
            b.append(
                &working,
                vec![ElementRef::Index(mid)],
                3,
                format!("Found at {}", mid),
            )?;
            return b.finish();
        }
        if target < working[mid] {
            b.append(&working, vec![], 4, format!("Go left (r = {})", mid as i64 - 1))?;
            r = mid as i64 - 1;
        } else {
            b.append(&working, vec![], 5, format!("Go right (l = {})", mid + 1))?;
            l = mid as i64 + 1;
        }
    }
    b.append(&working, vec![], 6, "Not found")?;
    b.finish()
}

fn insert(mut working: Vec<i64>, params: &Params) -> Result<Trace, EngineError> {
    if working.len() >= ARRAY_CAPACITY {
        return TraceBuilder::rejection("array-insert", &working, "Array full! Cannot insert.");
    }
    let Some(value) = parse_int(&params.value) else {
        return TraceBuilder::rejection(
            "array-insert",
            &working,
            "Enter a numeric value to insert.",
        );
    };
    let idx = parse_int(&params.index)
        .map(|i| i.clamp(0, working.len() as i64) as usize)
        .unwrap_or(working.len());
    let mut b = TraceBuilder::new("array-insert");
    b.append(
        &working,
        vec![],
        -1,
        format!("Insert {} at index {}", value, idx),
    )?;
    working.insert(idx, value);
    b.append(&working, vec![ElementRef::Index(idx)], -1, "Inserted")?;
    b.finish()
}

fn delete(mut working: Vec<i64>, params: &Params) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("array-delete", &working, "Array empty! Cannot delete.");
    }
    let idx = match parse_int(&params.index) {
        Some(i) if i >= 0 && (i as usize) < working.len() => i as usize,
        _ => {
            return TraceBuilder::rejection("array-delete", &working, "Invalid delete index.");
        }
    };
    let mut b = TraceBuilder::new("array-delete");
    b.append(
        &working,
        vec![ElementRef::Index(idx)],
        -1,
        format!("Deleting index {}", idx),
    )?;
    working.remove(idx);
    b.append(&working, vec![], -1, "Deleted")?;
    b.finish()
}

fn peek(working: Vec<i64>) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("array-peek", &working, "Array empty! Cannot peek.");
    }
    let mut b = TraceBuilder::new("array-peek");
    b.append(
        &working,
        vec![ElementRef::Index(working.len() - 1)],
        0,
        "Peeking last element",
    )?;
    b.finish()
}

fn is_empty(working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("array-is-empty");
    b.append(
        &working,
        vec![],
        0,
        format!("Is Empty: {}", working.is_empty()),
    )?;
    b.finish()
}

fn is_full(working: Vec<i64>) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("array-is-full");
    b.append(
        &working,
        vec![],
        0,
        format!("Is Full: {}", working.len() == ARRAY_CAPACITY),
    )?;
    b.finish()
}
