//! The numeric operations the evaluator delegates to.

use crate::errors::err::{Error, EvalResult};

/// Binary operations over `f64` pairs. Only division can fail.
pub trait Arithmetic {
    fn add(&self, a: f64, b: f64) -> f64;
    fn subtract(&self, a: f64, b: f64) -> f64;
    fn multiply(&self, a: f64, b: f64) -> f64;
    /// Fails with [`Error::DivisionByZero`] when `b` is exactly zero (either sign),
    /// rather than producing an infinity or NaN.
    fn divide(&self, a: f64, b: f64) -> EvalResult<f64>;
}

/// Plain IEEE arithmetic with a checked divisor.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Calculator
    }
}

impl Arithmetic for Calculator {
    fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    fn divide(&self, a: f64, b: f64) -> EvalResult<f64> {
        if b == 0.0 {
            return Err(Error::DivisionByZero);
        }
        Ok(a / b)
    }
}

impl<A: Arithmetic + ?Sized> Arithmetic for &A {
    fn add(&self, a: f64, b: f64) -> f64 {
        (**self).add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        (**self).subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        (**self).multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> EvalResult<f64> {
        (**self).divide(a, b)
    }
}
