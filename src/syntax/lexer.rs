use std::{convert::TryFrom, str::CharIndices};

use log::{debug, trace};

use crate::{errors::err::*, syntax::tokens::Token};

pub struct Lexer<'a> {
    source: &'a str,
    chars: CharIndices<'a>,
    tokens: Vec<Token<'a>>,
    // byte offset where the pending numeric literal starts
    literal_start: Option<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices(),
            tokens: vec![],
            literal_start: None,
        }
    }

    pub fn tokenize(mut self) -> EvalResult<Vec<Token<'a>>> {
        while let Some((pos, char)) = self.chars.next() {
            match char {
                c if c.is_ascii_digit() || c == '.' => self.extend_literal(pos),
                '-' if self.expects_operand() => self.extend_literal(pos),
                '+' | '-' | '*' | '/' | '(' | ')' => {
                    self.flush_literal(pos);
                    let source = self.source;
                    // every symbol matched above has a token
                    let tok = Token::try_from(&source[pos..pos + 1])
                        .map_err(|_| Error::InvalidCharacter(char))?;
                    self.emit(tok);
                }
                c if c.is_whitespace() => self.flush_literal(pos),
                c => {
                    debug!("rejecting character {:?} at byte {}", c, pos);
                    return Err(Error::InvalidCharacter(c));
                }
            }
        }
        self.flush_literal(self.source.len());
        debug!("tokenized {:?} into {} tokens", self.source, self.tokens.len());
        Ok(self.tokens)
    }

    /// A `-` is the sign of the next literal when nothing is pending and the
    /// previously emitted token cannot end an operand.
    fn expects_operand(&self) -> bool {
        self.literal_start.is_none()
            && match self.tokens.last() {
                None => true,
                Some(tok) => tok.is_op() || tok.is_lparen(),
            }
    }

    fn extend_literal(&mut self, pos: usize) {
        if self.literal_start.is_none() {
            self.literal_start = Some(pos);
        }
    }

    fn flush_literal(&mut self, end: usize) {
        let source = self.source;
        if let Some(start) = self.literal_start.take() {
            self.emit(Token::Num(&source[start..end]));
        }
    }

    fn emit(&mut self, tok: Token<'a>) {
        trace!("token {:?}", tok);
        self.tokens.push(tok);
    }
}

pub fn tokenize(expression: &str) -> EvalResult<Vec<Token<'_>>> {
    Lexer::new(expression).tokenize()
}
