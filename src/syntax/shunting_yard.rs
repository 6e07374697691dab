use log::{debug, trace};

use crate::{
    errors::err::*,
    syntax::{
        operators::lookup,
        tokens::{display_tokens, Delimiter, Token},
    },
};

/// Reorders infix tokens into postfix (RPN) order. Parentheses never appear in the output.
pub fn to_postfix<'a, I>(tokens: I) -> EvalResult<Vec<Token<'a>>>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut output = vec![];
    let mut stack: Vec<Token<'a>> = vec![];
    for tok in tokens {
        match tok {
            Token::Num(_) => output.push(tok),
            Token::Op(sym) => {
                let op = lookup(sym)?;
                while let Some(&Token::Op(top)) = stack.last() {
                    if !lookup(top)?.has_bigger_prec(&op) {
                        break;
                    }
                    trace!("popping {} before {}", top, sym);
                    output.push(Token::Op(top));
                    stack.pop();
                }
                trace!("pushing {}", sym);
                stack.push(tok);
            }
            Token::Delimiter(Delimiter::LParen) => stack.push(tok),
            Token::Delimiter(Delimiter::RParen) => loop {
                match stack.pop() {
                    Some(Token::Delimiter(Delimiter::LParen)) => break,
                    Some(top) => output.push(top),
                    None => {
                        debug!("unmatched right parenthesis");
                        return Err(Error::MismatchedParentheses);
                    }
                }
            },
        }
    }
    while let Some(top) = stack.pop() {
        if top.is_lparen() {
            debug!("unclosed left parenthesis");
            return Err(Error::MismatchedParentheses);
        }
        output.push(top);
    }
    debug!("postfix: {}", display_tokens(&output));
    Ok(output)
}
