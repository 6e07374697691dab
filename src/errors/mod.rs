pub mod err;

pub use err::*;
