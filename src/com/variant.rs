use std::fmt;
use std::fmt::{Debug, Formatter};

use crate::com::expando::{same_target, ExpandoRef};

/// A value in the engine's own representation.
pub enum Variant {
    Empty,
    Null,
    Bool(bool),
    I4(i32),
    R8(f64),
    BStr(String),
    Dispatch(ExpandoRef),
}

impl Variant {
    pub fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    pub fn as_dispatch(&self) -> Option<&ExpandoRef> {
        match self {
            Variant::Dispatch(d) => Some(d),
            _ => None,
        }
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        match self {
            Variant::Empty => Variant::Empty,
            Variant::Null => Variant::Null,
            Variant::Bool(b) => Variant::Bool(*b),
            Variant::I4(i) => Variant::I4(*i),
            Variant::R8(r) => Variant::R8(*r),
            Variant::BStr(s) => Variant::BStr(s.to_string()),
            Variant::Dispatch(d) => Variant::Dispatch(d.clone()),
        }
    }
}

impl Debug for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Empty => write!(f, "Variant::Empty"),
            Variant::Null => write!(f, "Variant::Null"),
            Variant::Bool(b) => write!(f, "Variant::Bool({})", b),
            Variant::I4(i) => write!(f, "Variant::I4({})", i),
            Variant::R8(r) => write!(f, "Variant::R8({})", r),
            Variant::BStr(s) => write!(f, "Variant::BStr({:?})", s),
            Variant::Dispatch(_) => write!(f, "Variant::Dispatch(...)"),
        }
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Variant::Empty, Variant::Empty) => true,
            (Variant::Null, Variant::Null) => true,
            (Variant::Bool(a), Variant::Bool(b)) => a == b,
            (Variant::I4(a), Variant::I4(b)) => a == b,
            (Variant::R8(a), Variant::R8(b)) => a == b,
            (Variant::BStr(a), Variant::BStr(b)) => a == b,
            (Variant::Dispatch(a), Variant::Dispatch(b)) => same_target(a, b),
            _ => false,
        }
    }
}
