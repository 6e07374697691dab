use log::debug;

use crate::{
    arithmetic::{Arithmetic, Calculator},
    errors::err::*,
    eval::postfix::{eval_postfix, parse_number},
    syntax::{lexer::Lexer, shunting_yard::to_postfix},
};

/// Runs the tokenize, postfix conversion and evaluation stages over one expression.
///
/// Holds no state besides the arithmetic provider, so one evaluator can be reused
/// (or shared between threads if `A` allows it) without calls affecting each other.
#[derive(Debug, Default, Clone)]
pub struct Evaluator<A = Calculator> {
    arith: A,
}

impl Evaluator<Calculator> {
    pub fn new() -> Self {
        Self { arith: Calculator }
    }
}

impl<A: Arithmetic> Evaluator<A> {
    pub fn with_arithmetic(arith: A) -> Self {
        Self { arith }
    }

    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let trimmed = expression.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyExpression);
        }
        if let Some(value) = negative_literal(trimmed) {
            debug!("{:?} is a bare negative literal", trimmed);
            return Ok(value);
        }
        let tokens = Lexer::new(expression).tokenize()?;
        let postfix = to_postfix(tokens)?;
        let value = eval_postfix(&self.arith, postfix)?;
        debug!("{:?} = {}", expression, value);
        Ok(value)
    }
}

// The tokenizer yields the same value for these; kept as a shortcut for the common
// case of a lone signed number.
fn negative_literal(trimmed: &str) -> Option<f64> {
    let digits = trimmed.strip_prefix('-')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    parse_number(trimmed).ok()
}

pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn fast_path_only_takes_plain_negative_literals() {
        assert_eq!(negative_literal("-5"), Some(-5.0));
        assert_eq!(negative_literal("-2.25"), Some(-2.25));
        assert_eq!(negative_literal("-5-3"), None);
        assert_eq!(negative_literal("-(2)"), None);
        assert_eq!(negative_literal("-"), None);
        assert_eq!(negative_literal("-1.2.3"), None);
        assert_eq!(negative_literal("5"), None);
    }

    #[test]
    fn fast_path_matches_the_pipeline() {
        for src in &["-5", "-0.5", "-12.", "-007"] {
            let fast = evaluate(src).unwrap();
            let tokens = Lexer::new(src).tokenize().unwrap();
            let slow = eval_postfix(&Calculator, to_postfix(tokens).unwrap()).unwrap();
            assert_eq!(fast, slow, "{}", src);
        }
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(evaluate(""), Err(Error::EmptyExpression));
        assert_eq!(evaluate("  \t\n"), Err(Error::EmptyExpression));
    }

    #[derive(Default)]
    struct Counting {
        calls: Cell<usize>,
    }

    impl Arithmetic for Counting {
        fn add(&self, a: f64, b: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            a + b
        }
        fn subtract(&self, a: f64, b: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            a - b
        }
        fn multiply(&self, a: f64, b: f64) -> f64 {
            self.calls.set(self.calls.get() + 1);
            a * b
        }
        fn divide(&self, a: f64, b: f64) -> EvalResult<f64> {
            self.calls.set(self.calls.get() + 1);
            Calculator.divide(a, b)
        }
    }

    #[test]
    fn every_operator_goes_through_the_provider() {
        let counting = Counting::default();
        let evaluator = Evaluator::with_arithmetic(&counting);
        assert_eq!(evaluator.evaluate("(1 + 2) * 3 - 4 / 2"), Ok(7.0));
        assert_eq!(counting.calls.get(), 4);
        // the fast path never reaches the provider
        assert_eq!(evaluator.evaluate("-3"), Ok(-3.0));
        assert_eq!(counting.calls.get(), 4);
    }
}
