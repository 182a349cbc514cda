//! Stack operations and classic stack use cases.
//!
//! The primitive operations act on the bounded working stack. The use-case
//! algorithms (balanced parentheses, postfix evaluation, and friends) run on
//! a scratch stack seeded empty, the structure under animation being the
//! scratch stack itself.

use super::{text_param, AlgorithmId, Params};
use crate::structures::stack::STACK_CAPACITY;
use crate::structures::Stack;
use crate::trace::{ElementRef, EngineError, Trace, TraceBuilder};

pub(crate) fn run(
    kind: AlgorithmId,
    working: Stack,
    params: &Params,
) -> Result<Trace, EngineError> {
    match kind {
        AlgorithmId::StackPush => push(working, params),
        AlgorithmId::StackPop => pop(working),
        AlgorithmId::StackPeek => peek(working),
        AlgorithmId::StackIsEmpty => is_empty(working),
        AlgorithmId::StackIsFull => is_full(working),
        AlgorithmId::BalancedParentheses => balanced_parentheses(working, params),
        AlgorithmId::PostfixEvaluation => postfix_evaluation(working, params),
        AlgorithmId::InfixToPostfix => infix_to_postfix(working, params),
        AlgorithmId::UndoHistory => undo_history(working, params),
        AlgorithmId::PalindromeStack => palindrome(working, params),
        AlgorithmId::NextGreaterElement => next_greater(working, params),
        AlgorithmId::ReverseStack => reverse(working, params),
        _ => unreachable!("non-stack algorithm routed to stack module"),
    }
}

fn push(mut working: Stack, params: &Params) -> Result<Trace, EngineError> {
    if working.is_full() {
        return TraceBuilder::rejection("stack-push", &working, "Stack full! Cannot push.");
    }
    let Some(v) = super::parse_int(&params.value) else {
        return TraceBuilder::rejection("stack-push", &working, "Enter numeric value.");
    };
    let mut b = TraceBuilder::new("stack-push");
    b.append(&working, vec![], 0, format!("Pushing {}", v))?;
    working.push_top(v.to_string());
    b.append(&working, vec![ElementRef::Index(0)], 1, "Pushed")?;
    b.finish()
}

fn pop(mut working: Stack) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("stack-pop", &working, "Stack empty! Cannot pop.");
    }
    let mut b = TraceBuilder::new("stack-pop");
    b.append(&working, vec![ElementRef::Index(0)], 0, "Popping top")?;
    working.pop_top();
    b.append(&working, vec![], 1, "Popped")?;
    b.finish()
}

fn peek(working: Stack) -> Result<Trace, EngineError> {
    if working.is_empty() {
        return TraceBuilder::rejection("stack-peek", &working, "Stack empty! Cannot peek.");
    }
    let mut b = TraceBuilder::new("stack-peek");
    b.append(&working, vec![ElementRef::Index(0)], 0, "Peeking top")?;
    b.finish()
}

fn is_empty(working: Stack) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("stack-is-empty");
    b.append(
        &working,
        vec![],
        0,
        format!("Is Empty: {}", working.is_empty()),
    )?;
    b.finish()
}

fn is_full(working: Stack) -> Result<Trace, EngineError> {
    let mut b = TraceBuilder::new("stack-is-full");
    b.append(
        &working,
        vec![],
        0,
        format!("Is Full: {}", working.len() == STACK_CAPACITY),
    )?;
    b.finish()
}

fn balanced_parentheses(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let Some(input) = text_param(&params.value) else {
        return TraceBuilder::rejection(
            "balanced-parentheses",
            &working,
            "Enter parentheses string.",
        );
    };
    let mut b = TraceBuilder::new("balanced-parentheses");
    let mut temp: Vec<String> = Vec::new();
    let mut line = 0;
    for ch in input.chars() {
        b.append(&temp, vec![], line, format!("Processing '{}'", ch))?;
        if ch == '(' {
            temp.insert(0, "(".into());
            b.append(&temp, vec![ElementRef::Index(0)], 1, "Pushed '('")?;
        } else if ch == ')' {
            if temp.first().map(String::as_str) != Some("(") {
                b.append(&temp, vec![], 2, "Mismatch!")?;
                return b.finish();
            }
            temp.remove(0);
            b.append(&temp, vec![], 2, "Popped '('")?;
        }
        line = 3;
    }
    let message = if temp.is_empty() {
        "Balanced!"
    } else {
        "Not balanced"
    };
    b.append(&temp, vec![], 3, message)?;
    b.finish()
}

fn postfix_evaluation(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let Some(input) = text_param(&params.value) else {
        return TraceBuilder::rejection(
            "postfix-evaluation",
            &working,
            "Enter postfix expression e.g. 2 3 +",
        );
    };
    let mut b = TraceBuilder::new("postfix-evaluation");
    let mut temp: Vec<String> = Vec::new();
    let mut line = 0;
    for token in input.split_whitespace() {
        b.append(&temp, vec![], line, format!("Processing '{}'", token))?;
        if let Ok(n) = token.parse::<i64>() {
            temp.insert(0, n.to_string());
            b.append(&temp, vec![ElementRef::Index(0)], 1, format!("Pushed {}", n))?;
        } else {
            if temp.len() < 2 {
                b.append(&temp, vec![], 2, "Invalid expression")?;
                return b.finish();
            }
            let rhs: i64 = temp[0].parse().unwrap_or(0);
            let lhs: i64 = temp[1].parse().unwrap_or(0);
            let result = match token {
                "+" => Some(lhs + rhs),
                "-" => Some(lhs - rhs),
                "*" => Some(lhs * rhs),
                "/" if rhs != 0 => Some(lhs / rhs),
                _ => None,
            };
            let Some(result) = result else {
                b.append(&temp, vec![], 2, "Invalid expression")?;
                return b.finish();
            };
            temp.drain(..2);
            temp.insert(0, result.to_string());
            b.append(
                &temp,
                vec![ElementRef::Index(0)],
                2,
                format!("Applied {}: {}", token, result),
            )?;
        }
        line = 3;
    }
    if temp.len() == 1 {
        let result = temp[0].clone();
        b.append(
            &temp,
            vec![ElementRef::Index(0)],
            3,
            format!("Result: {}", result),
        )?;
    } else {
        b.append(&temp, vec![], 3, "Invalid expression")?;
    }
    b.finish()
}

fn precedence(op: char) -> i32 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

fn infix_to_postfix(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let input: String = match text_param(&params.value) {
        Some(text) => text.chars().filter(|c| !c.is_whitespace()).collect(),
        None => {
            return TraceBuilder::rejection(
                "infix-to-postfix",
                &working,
                "Enter infix expression e.g. 2+3*4",
            );
        }
    };
    let mut b = TraceBuilder::new("infix-to-postfix");
    let mut temp: Vec<String> = Vec::new();
    let mut output = String::new();
    let mut line = 0;
    for ch in input.chars() {
        b.append(&temp, vec![], line, format!("Processing '{}'", ch))?;
        if ch.is_ascii_digit() {
            output.push(ch);
            b.append(&temp, vec![], 1, format!("Output: {}", output))?;
        } else if ch == '(' {
            temp.insert(0, "(".into());
            b.append(&temp, vec![ElementRef::Index(0)], 2, "Pushed '('")?;
        } else if ch == ')' {
            while temp.first().is_some_and(|t| t != "(") {
                let op = temp.remove(0);
                output.push_str(&op);
                b.append(&temp, vec![], 3, format!("Output: {}", output))?;
            }
            if temp.first().is_some_and(|t| t == "(") {
                temp.remove(0);
            }
            b.append(&temp, vec![], 3, "Popped '('")?;
        } else {
            while temp
                .first()
                .and_then(|t| t.chars().next())
                .is_some_and(|top| precedence(top) >= precedence(ch) && top != '(')
            {
                let op = temp.remove(0);
                output.push_str(&op);
                b.append(&temp, vec![], 4, format!("Output: {}", output))?;
            }
            temp.insert(0, ch.to_string());
            b.append(&temp, vec![ElementRef::Index(0)], 4, format!("Pushed {}", ch))?;
        }
        line = 5;
    }
    while !temp.is_empty() {
        let op = temp.remove(0);
        output.push_str(&op);
        b.append(&temp, vec![], 5, format!("Output: {}", output))?;
    }
    b.append(&temp, vec![], 5, format!("Postfix: {}", output))?;
    b.finish()
}

fn undo_history(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let Some(input) = text_param(&params.value) else {
        return TraceBuilder::rejection(
            "undo-history",
            &working,
            "Enter text to simulate undo/redo",
        );
    };
    let mut b = TraceBuilder::new("undo-history");
    let mut temp: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in input.chars() {
        current.push(ch);
        temp.insert(0, current.clone());
        b.append(
            &temp,
            vec![ElementRef::Index(0)],
            0,
            format!("Typed: {}", current),
        )?;
    }
    if !temp.is_empty() {
        temp.remove(0);
        let restored = temp.first().cloned().unwrap_or_default();
        b.append(&temp, vec![], 1, format!("Undo: {}", restored))?;
    }
    b.finish()
}

fn palindrome(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let input: String = match text_param(&params.value) {
        Some(text) => text
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect(),
        None => {
            return TraceBuilder::rejection(
                "palindrome-stack",
                &working,
                "Enter string to check palindrome",
            );
        }
    };
    if input.is_empty() {
        return TraceBuilder::rejection(
            "palindrome-stack",
            &working,
            "Enter string to check palindrome",
        );
    }
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mid = len / 2;
    let mut b = TraceBuilder::new("palindrome-stack");
    let mut temp: Vec<String> = Vec::new();
    let mut line = 0;
    for &c in &chars[..mid] {
        temp.insert(0, c.to_string());
        b.append(
            &temp,
            vec![ElementRef::Index(0)],
            line,
            format!("Pushed '{}'", c),
        )?;
        line = 1;
    }
    for &c in &chars[mid + len % 2..] {
        let top = temp.remove(0);
        b.append(
            &temp,
            vec![],
            line,
            format!("Comparing '{}' with '{}'", top, c),
        )?;
        if top != c.to_string() {
            b.append(&temp, vec![], 1, "Not a palindrome")?;
            return b.finish();
        }
        line = 1;
    }
    b.append(&temp, vec![], 1, "Palindrome!")?;
    b.finish()
}

fn next_greater(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let Some(input) = super::parse_int_list(&params.value) else {
        return TraceBuilder::rejection(
            "next-greater-element",
            &working,
            "Enter array e.g. 4,5,2,25",
        );
    };
    let mut b = TraceBuilder::new("next-greater-element");
    // The scratch stack holds indices into the input.
    let mut temp: Vec<String> = Vec::new();
    let mut indices: Vec<usize> = Vec::new();
    let mut result = vec![-1i64; input.len()];
    let mut line = 0;
    for (i, &v) in input.iter().enumerate() {
        b.append(&temp, vec![], line, format!("Processing {}", v))?;
        while indices.first().is_some_and(|&top| input[top] < v) {
            let idx = indices.remove(0);
            temp.remove(0);
            result[idx] = v;
            b.append(
                &temp,
                vec![],
                1,
                format!("Next greater for {} is {}", input[idx], v),
            )?;
        }
        indices.insert(0, i);
        temp.insert(0, i.to_string());
        b.append(
            &temp,
            vec![ElementRef::Index(0)],
            2,
            format!("Pushed index {}", i),
        )?;
        line = 3;
    }
    let rendered: Vec<String> = result.iter().map(i64::to_string).collect();
    b.append(
        &temp,
        vec![],
        3,
        format!("Result: [{}]", rendered.join(", ")),
    )?;
    b.finish()
}

fn reverse(working: Stack, params: &Params) -> Result<Trace, EngineError> {
    let Some(input) = text_param(&params.value) else {
        return TraceBuilder::rejection(
            "reverse-stack",
            &working,
            "Enter string or array e.g. hello or 1,2,3",
        );
    };
    let is_list = input.contains(',');
    let elements: Vec<String> = if is_list {
        input.split(',').map(|s| s.trim().to_string()).collect()
    } else {
        input.chars().map(|c| c.to_string()).collect()
    };
    let mut b = TraceBuilder::new("reverse-stack");
    let mut temp: Vec<String> = Vec::new();
    let mut line = 0;
    for el in &elements {
        temp.insert(0, el.clone());
        b.append(
            &temp,
            vec![ElementRef::Index(0)],
            line,
            format!("Pushed '{}'", el),
        )?;
        line = 1;
    }
    let mut reversed: Vec<String> = Vec::new();
    while !temp.is_empty() {
        let el = temp.remove(0);
        reversed.push(el.clone());
        b.append(&temp, vec![], line, format!("Popped '{}'", el))?;
    }
    let sep = if is_list { ", " } else { "" };
    b.append(&temp, vec![], 1, format!("Reversed: {}", reversed.join(sep)))?;
    b.finish()
}
