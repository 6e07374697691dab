use log::debug;

use crate::{
    arithmetic::Arithmetic,
    errors::err::*,
    syntax::{operators::lookup, tokens::Token},
};

/// Parses a literal under the fixed `.` decimal convention. A literal that does not
/// parse, or overflows to infinity, makes the whole token stream malformed.
pub fn parse_number(literal: &str) -> EvalResult<f64> {
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            debug!("malformed literal {:?}", literal);
            Err(Error::InvalidExpression)
        }
    }
}

pub fn eval_postfix<'a, A, I>(arith: &A, tokens: I) -> EvalResult<f64>
where
    A: Arithmetic + ?Sized,
    I: IntoIterator<Item = Token<'a>>,
{
    let mut stack: Vec<f64> = vec![];
    for tok in tokens {
        match tok {
            Token::Num(literal) => stack.push(parse_number(literal)?),
            Token::Op(sym) => {
                let op = lookup(sym)?;
                let (b, a) = match (stack.pop(), stack.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => {
                        debug!("operator {} is missing an operand", sym);
                        return Err(Error::InvalidExpression);
                    }
                };
                stack.push(op.kind.apply(arith, a, b)?);
            }
            Token::Delimiter(_) => {
                debug!("parenthesis in postfix input");
                return Err(Error::InvalidExpression);
            }
        }
    }
    match stack.as_slice() {
        [value] => Ok(*value),
        rest => {
            debug!("{} values left after reduction", rest.len());
            Err(Error::InvalidExpression)
        }
    }
}
