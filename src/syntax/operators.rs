use phf::phf_map;

use crate::{
    arithmetic::Arithmetic,
    errors::err::{Error, EvalResult},
};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}
impl BinOp {
    pub fn apply<A: Arithmetic + ?Sized>(self, arith: &A, a: f64, b: f64) -> EvalResult<f64> {
        Ok(match self {
            BinOp::Add => arith.add(a, b),
            BinOp::Sub => arith.subtract(a, b),
            BinOp::Mul => arith.multiply(a, b),
            BinOp::Div => arith.divide(a, b)?,
        })
    }
}

/// A binary operator. All of them are left associative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub prec: u8,
    pub kind: BinOp,
}
impl Operator {
    /// Whether `self`, sitting on the operator stack, must be output before `op` is pushed.
    pub fn has_bigger_prec(&self, op: &Operator) -> bool {
        self.prec >= op.prec
    }
}

pub const BINARY_OPERATOR_TABLE: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator {
        prec: 1,
        kind: BinOp::Add,
    },
    "-" => Operator {
        prec: 1,
        kind: BinOp::Sub,
    },
    "/" => Operator {
        prec: 2,
        kind: BinOp::Div,
    },
    "*" => Operator {
        prec: 2,
        kind: BinOp::Mul,
    },
};

pub fn lookup(sym: &str) -> EvalResult<Operator> {
    BINARY_OPERATOR_TABLE
        .get(sym)
        .copied()
        .ok_or_else(|| Error::UnknownOperator(sym.to_owned()))
}

pub fn precedence(sym: &str) -> EvalResult<u8> {
    lookup(sym).map(|op| op.prec)
}
