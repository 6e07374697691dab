use std::{convert::TryFrom, fmt};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token<'a> {
    // Literals stay as slices of the source; parsing them into floats is the evaluator's job
    Num(&'a str),

    Op(&'a str),

    Delimiter(Delimiter),
}

impl<'a> Token<'a> {
    pub fn is_op(&self) -> bool {
        matches!(self, Token::Op(_))
    }

    pub fn is_lparen(&self) -> bool {
        matches!(self, Token::Delimiter(Delimiter::LParen))
    }
}

impl<'a> TryFrom<&'a str> for Token<'a> {
    type Error = ();
    fn try_from(value: &'a str) -> Result<Self, Self::Error> {
        Ok(match value {
            "(" | ")" => Token::Delimiter(Delimiter::try_from(value.chars().next().ok_or(())?)?),
            "+" | "-" | "*" | "/" => Token::Op(value),
            _ => return Err(()),
        })
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Num(s) | Token::Op(s) => f.write_str(s),
            Token::Delimiter(Delimiter::LParen) => f.write_str("("),
            Token::Delimiter(Delimiter::RParen) => f.write_str(")"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Delimiter {
    LParen,
    RParen,
}
impl TryFrom<char> for Delimiter {
    type Error = ();
    fn try_from(value: char) -> Result<Self, Self::Error> {
        Ok(match value {
            '(' => Delimiter::LParen,
            ')' => Delimiter::RParen,
            _ => return Err(()),
        })
    }
}

/// Renders a token sequence space separated, e.g. `2 3 4 * +` for a postfix sequence.
pub fn display_tokens(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn symbols_map_to_tokens() {
        assert_eq!(Token::try_from("("), Ok(Token::Delimiter(Delimiter::LParen)));
        assert_eq!(Token::try_from(")"), Ok(Token::Delimiter(Delimiter::RParen)));
        assert_eq!(Token::try_from("*"), Ok(Token::Op("*")));
        assert_eq!(Token::try_from("%"), Err(()));
        assert_eq!(Token::try_from("12"), Err(()));
    }

    #[test]
    fn display_joins_with_spaces() {
        let tokens = [
            Token::Num("2"),
            Token::Num("-3.5"),
            Token::Op("*"),
            Token::Delimiter(Delimiter::RParen),
        ];
        assert_eq!(display_tokens(&tokens), "2 -3.5 * )");
    }
}
