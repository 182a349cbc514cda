//! String operations over the primary text.
//!
//! The snapshot of a frame is whatever string the step is talking about:
//! usually the primary text, but substring, concatenation, anagram, and
//! compression frames snapshot the derived string so playback shows it
//! being built.

use super::{parse_int, text_param, AlgorithmId, Params};
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};

pub(crate) fn run(
    kind: AlgorithmId,
    working: String,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::StringTraversal => traversal(&working),
        AlgorithmId::StringReverse => reverse(&working),
        AlgorithmId::Substring => substring(&working, params),
        AlgorithmId::Concatenate => concatenate(&working, params),
        AlgorithmId::PalindromeCheck => palindrome(&working),
        AlgorithmId::AnagramCheck => anagram(&working, params),
        AlgorithmId::NaiveMatch => naive_match(&working, params),
        AlgorithmId::KmpMatch => kmp_match(&working, params),
        AlgorithmId::LcsLength => lcs_length(&working, params),
        AlgorithmId::RunLengthEncoding => run_length_encoding(&working),
        AlgorithmId::CharFrequency => char_frequency(&working),
        _ => unreachable!("non-string algorithm routed to string module"),
    }
}

fn idx(i: usize) -> ElementRef {
    ElementRef::Index(i)
}

fn traversal(working: &str) -> Result<Trace, EngineError> {
    let chars: Vec<char> = working.chars().collect();
    let mut b = TraceBuilder::new("string-traversal");
    b.append(working, vec![], 0, format!("Length: {}", chars.len()))?;
    for (i, c) in chars.iter().enumerate() {
        b.append(
            working,
            vec![idx(i)],
            1,
            format!("Visiting char {} at {}", c, i),
        )?;
    }
    b.append(working, vec![], 3, format!("Total length: {}", chars.len()))?;
    b.finish()
}

fn reverse(working: &str) -> Result<Trace, EngineError> {
    let mut chars: Vec<char> = working.chars().collect();
    let mut b = TraceBuilder::new("string-reverse");
    if chars.is_empty() {
        b.append(working, vec![], 0, "Starting reverse")?;
        b.append(working, vec![], -1, "Reversed string")?;
        return b.finish();
    }
    let mut left = 0;
    let mut right = chars.len() - 1;
    b.append(working, vec![idx(left), idx(right)], 0, "Starting reverse")?;
    while left < right {
        b.append(
            working,
            vec![idx(left), idx(right)],
            1,
            format!("Swap {} and {}", chars[left], chars[right]),
        )?;
        chars.swap(left, right);
        let current: String = chars.iter().collect();
        b.append(&current, vec![idx(left), idx(right)], 2, "Swapped")?;
        left += 1;
        right -= 1;
    }
    let reversed: String = chars.iter().collect();
    b.append(&reversed, vec![], -1, "Reversed string")?;
    b.finish()
}

fn substring(working: &str, params: &Params) -> Result<Trace, EngineError> {
    let chars: Vec<char> = working.chars().collect();
    let bounds = parse_int(&params.index).zip(parse_int(&params.count));
    let Some((s, e)) = bounds.filter(|&(s, e)| {
        s >= 0 && e >= s && (e as usize) < chars.len()
    }) else {
        return TraceBuilder::rejection("substring", working, "Invalid indices!");
    };
    let (s, e) = (s as usize, e as usize);
    let sub: String = chars[s..=e].iter().collect();
    let mut b = TraceBuilder::new("substring");
    b.append(
        working,
        (s..=e).map(idx).collect(),
        0,
        format!("Extracting from {} to {}", s, e),
    )?;
    b.append(&sub, vec![], 1, format!("Substring: \"{}\"", sub))?;
    b.finish()
}

fn concatenate(working: &str, params: &Params) -> Result<Trace, EngineError> {
    let Some(second) = text_param(&params.second) else {
        return TraceBuilder::rejection("concatenate", working, "Enter secondary string.");
    };
    let result = format!("{}{}", working, second);
    let seam = working.chars().count();
    let mut b = TraceBuilder::new("concatenate");
    b.append(
        working,
        vec![],
        0,
        format!("Concatenating \"{}\" + \"{}\"", working, second),
    )?;
    let highlight = if seam > 0 {
        vec![idx(seam - 1), idx(seam)]
    } else {
        vec![idx(seam)]
    };
    b.append(&result, highlight, 1, format!("Result: \"{}\"", result))?;
    b.finish()
}

fn palindrome(working: &str) -> Result<Trace, EngineError> {
    let chars: Vec<char> = working.chars().collect();
    let mut b = TraceBuilder::new("palindrome-check");
    if chars.is_empty() {
        b.append(working, vec![], 0, "Checking palindrome")?;
        b.append(working, vec![], 4, "Is palindrome: true")?;
        return b.finish();
    }
    let mut left = 0;
    let mut right = chars.len() - 1;
    b.append(
        working,
        vec![idx(left), idx(right)],
        0,
        "Checking palindrome",
    )?;
    while left < right {
        b.append(
            working,
            vec![idx(left), idx(right)],
            1,
            format!("Compare {} and {}", chars[left], chars[right]),
        )?;
        if chars[left] != chars[right] {
            b.append(
                working,
                vec![idx(left), idx(right)],
                2,
                "Not equal! Not palindrome",
            )?;
            return b.finish();
        }
        b.append(working, vec![idx(left), idx(right)], 3, "Equal, continue")?;
        left += 1;
        right -= 1;
    }
    b.append(working, vec![], 4, "Is palindrome: true")?;
    b.finish()
}

fn anagram(working: &str, params: &Params) -> Result<Trace, EngineError> {
    let Some(second) = text_param(&params.second) else {
        return TraceBuilder::rejection("anagram-check", working, "Enter secondary string.");
    };
    if working.chars().count() != second.chars().count() {
        return TraceBuilder::rejection(
            "anagram-check",
            working,
            "Different lengths, not anagram",
        );
    }
    let mut first_sorted: Vec<char> = working.chars().collect();
    first_sorted.sort_unstable();
    let first_sorted: String = first_sorted.into_iter().collect();
    let mut second_sorted: Vec<char> = second.chars().collect();
    second_sorted.sort_unstable();
    let second_sorted: String = second_sorted.into_iter().collect();
    let mut b = TraceBuilder::new("anagram-check");
    b.append(working, vec![], 0, format!("Sorting \"{}\"", working))?;
    b.append(&first_sorted, vec![], 0, format!("Sorted: \"{}\"", first_sorted))?;
    b.append(second, vec![], 0, format!("Sorting \"{}\"", second))?;
    b.append(
        &second_sorted,
        vec![],
        0,
        format!("Sorted: \"{}\"", second_sorted),
    )?;
    b.append(
        working,
        vec![],
        1,
        format!("Is anagram: {}", first_sorted == second_sorted),
    )?;
    b.finish()
}

fn naive_match(working: &str, params: &Params) -> Result<Trace, EngineError> {
    let Some(pattern) = text_param(&params.target) else {
        return TraceBuilder::rejection("naive-match", working, "Empty pattern!");
    };
    let text: Vec<char> = working.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();
    let (n, m) = (text.len(), pat.len());
    if m == 0 {
        return TraceBuilder::rejection("naive-match", working, "Empty pattern!");
    }
    let mut b = TraceBuilder::new("naive-match");
    let mut found = Vec::new();
    let mut i = 0;
    while i + m <= n {
        b.append(working, vec![idx(i)], 0, format!("Trying start at {}", i))?;
        let mut matched = true;
        for j in 0..m {
            b.append(
                working,
                vec![idx(i + j)],
                1,
                format!("Compare {} == {}", text[i + j], pat[j]),
            )?;
            if text[i + j] != pat[j] {
                matched = false;
                b.append(working, vec![idx(i + j)], 2, "Mismatch")?;
                break;
            }
        }
        if matched {
            found.push(i);
            b.append(
                working,
                (i..i + m).map(idx).collect(),
                3,
                format!("Match at {}", i),
            )?;
        }
        i += 1;
    }
    b.append(working, vec![], -1, found_message(&found))?;
    b.finish()
}

fn found_message(found: &[usize]) -> String {
    if found.is_empty() {
        "Found at: none".to_string()
    } else {
        let list = found
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Found at: {}", list)
    }
}

fn kmp_match(working: &str, params: &Params) -> Result<Trace, EngineError> {
    let Some(pattern) = text_param(&params.target) else {
        return TraceBuilder::rejection("kmp-match", working, "Empty pattern!");
    };
    let text: Vec<char> = working.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();
    let (n, m) = (text.len(), pat.len());
    if m == 0 {
        return TraceBuilder::rejection("kmp-match", working, "Empty pattern!");
    }
    let pi = prefix_table(&pat);
    let mut b = TraceBuilder::new("kmp-match");
    b.append(pattern, vec![], 0, "Building prefix table")?;
    let table = pi
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    b.append(pattern, vec![], -1, format!("Prefix table: {}", table))?;
    let mut found = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    while i < n {
        b.append(working, vec![idx(i)], 2, format!("i={}, j={}", i, j))?;
        if pat[j] == text[i] {
            i += 1;
            j += 1;
        }
        if j == m {
            found.push(i - j);
            b.append(
                working,
                (i - m..i).map(idx).collect(),
                3,
                format!("Found at {}", i - j),
            )?;
            j = pi[j - 1];
        } else if i < n && pat[j] != text[i] {
            if j != 0 {
                j = pi[j - 1];
            } else {
                i += 1;
            }
            b.append(working, vec![idx(i.min(n - 1))], 4, format!("Mismatch, j={}", j))?;
        }
    }
    b.append(working, vec![], -1, found_message(&found))?;
    b.finish()
}

/// Failure function: pi[q] = length of the longest proper prefix of
/// pat[..=q] that is also a suffix.
fn prefix_table(pat: &[char]) -> Vec<usize> {
    let mut pi = vec![0usize; pat.len()];
    let mut k = 0;
    for q in 1..pat.len() {
        while k > 0 && pat[k] != pat[q] {
            k = pi[k - 1];
        }
        if pat[k] == pat[q] {
            k += 1;
        }
        pi[q] = k;
    }
    pi
}

fn lcs_length(working: &str, params: &Params) -> Result<Trace, EngineError> {
    let Some(second) = text_param(&params.second) else {
        return TraceBuilder::rejection("lcs-length", working, "Enter secondary string.");
    };
    let a: Vec<char> = working.chars().collect();
    let c: Vec<char> = second.chars().collect();
    let (m, n) = (a.len(), c.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    let mut b = TraceBuilder::new("lcs-length");
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == c[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
            b.append(
                working,
                vec![idx(i - 1)],
                2,
                format!("dp[{}][{}] = {}", i, j, dp[i][j]),
            )?;
        }
    }
    b.append(working, vec![], 4, format!("LCS length: {}", dp[m][n]))?;
    b.finish()
}

fn run_length_encoding(working: &str) -> Result<Trace, EngineError> {
    let chars: Vec<char> = working.chars().collect();
    if chars.is_empty() {
        return TraceBuilder::rejection("run-length-encoding", working, "String empty.");
    }
    let mut b = TraceBuilder::new("run-length-encoding");
    b.append(working, vec![idx(0)], 0, "Starting compression")?;
    let mut result = String::new();
    let mut count = 1;
    for i in 1..=chars.len() {
        if i < chars.len() && chars[i] == chars[i - 1] {
            count += 1;
            b.append(
                working,
                vec![idx(i - 1), idx(i)],
                2,
                format!("Count {}: {}", chars[i - 1], count),
            )?;
        } else {
            result.push(chars[i - 1]);
            result.push_str(&count.to_string());
            b.append(
                &result,
                vec![],
                3,
                format!("Add {}{}", chars[i - 1], count),
            )?;
            count = 1;
        }
    }
    b.append(&result, vec![], -1, format!("Compressed: \"{}\"", result))?;
    b.finish()
}

fn char_frequency(working: &str) -> Result<Trace, EngineError> {
    let chars: Vec<char> = working.chars().collect();
    if chars.is_empty() {
        return TraceBuilder::rejection("char-frequency", working, "String empty.");
    }
    let mut b = TraceBuilder::new("char-frequency");
    // First-appearance order, so the summary reads in text order.
    let mut freq: Vec<(char, usize)> = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        let count = match freq.iter_mut().find(|(fc, _)| *fc == c) {
            Some((_, n)) => {
                *n += 1;
                *n
            }
            None => {
                freq.push((c, 1));
                1
            }
        };
        b.append(working, vec![idx(i)], 1, format!("Count {}: {}", c, count))?;
    }
    let summary = freq
        .iter()
        .map(|(c, n)| format!("{}:{}", c, n))
        .collect::<Vec<_>>()
        .join(", ");
    b.append(working, vec![], 2, format!("Frequencies: {}", summary))?;
    b.finish()
}

#[cfg(test)]
mod tests {
    use super::prefix_table;

    fn table(pat: &str) -> Vec<usize> {
        prefix_table(&pat.chars().collect::<Vec<_>>())
    }

    #[test]
    fn test_prefix_table_no_repeats() {
        assert_eq!(table("abcd"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_prefix_table_repeating_pattern() {
        assert_eq!(table("ababaca"), vec![0, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn test_prefix_table_uniform() {
        assert_eq!(table("aaaa"), vec![0, 1, 2, 3]);
    }
}
