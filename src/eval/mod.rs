pub mod evaluator;

pub mod postfix;

pub use evaluator::*;
pub use postfix::*;
