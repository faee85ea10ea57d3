//! Infix reader used by the tests to re-check rendered solutions.
//!
//! Accepts the usual grammar with `*`/`/` binding tighter than `+`/`-`, both
//! left-associative, so it reads both fully parenthesized output and
//! hand-written expressions.

use std::iter::Peekable;
use std::str::Chars;

use crate::expression::{Expression, Operator};

pub fn parse_infix(input: &str) -> Option<Expression> {
    let mut chars = input.chars().peekable();
    let expr = parse_sum(&mut chars)?;
    skip_spaces(&mut chars);
    if chars.peek().is_some() {
        return None;
    }
    Some(expr)
}

fn skip_spaces(chars: &mut Peekable<Chars>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn next_operator(chars: &mut Peekable<Chars>, accepted: [Operator; 2]) -> Option<Operator> {
    skip_spaces(chars);
    let op = Operator::try_from(*chars.peek()?).ok()?;
    if accepted.contains(&op) {
        chars.next();
        Some(op)
    } else {
        None
    }
}

fn parse_sum(chars: &mut Peekable<Chars>) -> Option<Expression> {
    let mut left = parse_product(chars)?;
    while let Some(op) = next_operator(chars, [Operator::Add, Operator::Sub]) {
        let right = parse_product(chars)?;
        left = op.combine(left, right);
    }
    Some(left)
}

fn parse_product(chars: &mut Peekable<Chars>) -> Option<Expression> {
    let mut left = parse_atom(chars)?;
    while let Some(op) = next_operator(chars, [Operator::Mul, Operator::Div]) {
        let right = parse_atom(chars)?;
        left = op.combine(left, right);
    }
    Some(left)
}

fn parse_atom(chars: &mut Peekable<Chars>) -> Option<Expression> {
    skip_spaces(chars);
    if chars.peek() == Some(&'(') {
        chars.next();
        let inner = parse_sum(chars)?;
        skip_spaces(chars);
        return (chars.next() == Some(')')).then_some(inner);
    }

    let mut literal = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            chars.next();
        } else {
            break;
        }
    }
    Expression::number(literal.parse().ok()?).ok()
}
