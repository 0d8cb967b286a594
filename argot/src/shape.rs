use core::fmt;
use std::iter;

use joinery::JoinableIterator;

use crate::{
    nargs::NArgs,
    value::{Scalar, Value, ValueKind},
};

/// The element type of a slot: its kind, and how to cast a raw token into it
#[derive(Clone, Copy)]
pub struct Element {
    kind: ValueKind,
    cast: fn(&str) -> Option<Value>,
    accepts: fn(&Value) -> bool,
    zero: fn() -> Value,
}

impl Element {
    #[must_use]
    pub fn of<T: Scalar>() -> Self {
        Self {
            kind: T::KIND,
            cast: |raw| T::cast(raw).map(T::store),
            accepts: |value| T::load(value).is_some(),
            zero: || T::default().store(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    #[inline]
    pub(crate) fn cast(&self, raw: &str) -> Option<Value> {
        (self.cast)(raw)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.kind).finish()
    }
}

/// The container kind of an argument slot
#[derive(Debug, Clone)]
pub enum Shape {
    Scalar(Element),

    /// A fixed number of elements
    Array(Element, usize),

    /// A growable sequence of elements
    List(Element),

    Tuple(Vec<Element>),
}

impl Shape {
    /// Check that `value` could be stored in a slot of this shape
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Shape::Scalar(element), value) => (element.accepts)(value),
            (Shape::Array(element, len), Value::List(items)) => {
                items.len() == *len && items.iter().all(element.accepts)
            }
            (Shape::List(element), Value::List(items)) => items.iter().all(element.accepts),
            (Shape::Tuple(elements), Value::Tuple(items)) => {
                elements.len() == items.len()
                    && elements
                        .iter()
                        .zip(items)
                        .all(|(element, item)| (element.accepts)(item))
            }
            _ => false,
        }
    }

    /// The value a slot of this shape holds before anything is assigned
    pub(crate) fn zero(&self) -> Value {
        match self {
            Shape::Scalar(element) => (element.zero)(),
            Shape::Array(element, len) => {
                Value::List(iter::repeat_with(element.zero).take(*len).collect())
            }
            Shape::List(_) => Value::List(Vec::new()),
            Shape::Tuple(elements) => {
                Value::Tuple(elements.iter().map(|element| (element.zero)()).collect())
            }
        }
    }

    /// The element types of this shape, one per expected value, for display
    pub(crate) fn annotation(&self, nargs: NArgs) -> String {
        match (self, &nargs) {
            (Shape::Scalar(element), NArgs::Optional) => format!("[<{}>]", element.kind),
            (Shape::Scalar(element), _) => element.kind.to_string(),
            (Shape::Array(element, len), _) | (Shape::List(element), NArgs::Exact(len)) => {
                format!("<{}>", iter::repeat_n(element.kind, *len).join_with(","))
            }
            (Shape::List(element), NArgs::OneOrMore) => format!("<{},...>", element.kind),
            (Shape::List(element), NArgs::ZeroOrMore | NArgs::Optional) => {
                format!("[<{},...>]", element.kind)
            }
            (Shape::Tuple(elements), _) => format!(
                "<{}>",
                elements.iter().map(Element::kind).join_with(",")
            ),
        }
    }
}
