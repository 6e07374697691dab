//! Evaluates arithmetic expressions such as `((10 + 5) * 2 - 8) / 4`.
//!
//! An expression goes through three stages: the [`Lexer`] splits it into tokens,
//! [`to_postfix`] reorders them with the shunting-yard algorithm, and
//! [`eval_postfix`] reduces the postfix sequence with a value stack. The four
//! operations themselves are delegated to an [`Arithmetic`] provider,
//! [`Calculator`] by default.
//!
//! ```
//! use arith_eval::{evaluate, Error};
//!
//! assert_eq!(evaluate("2 + 3 * 4"), Ok(14.0));
//! assert_eq!(evaluate("5 / (2 - 2)"), Err(Error::DivisionByZero));
//! ```
pub mod arithmetic;
pub mod errors;
pub mod eval;
pub mod syntax;

pub use arithmetic::{Arithmetic, Calculator};
pub use errors::err::{Error, EvalResult};
pub use eval::{eval_postfix, evaluate, Evaluator};
pub use syntax::{to_postfix, tokenize, Lexer, Token};
