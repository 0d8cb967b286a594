/*!
Runtime values stored in argument slots, and the traits that move them in and
out of ordinary Rust types.

Every argument slot holds a [`Value`]. [`Scalar`] types know how to cast a
single raw token into a value. [`FromValue`] reads a result back out as a Rust
type, and [`IntoValue`] writes one in (defaults, callbacks). [`ArgType`]
describes the shape of the slot an argument declaration creates.
*/

use core::{any::type_name, fmt};
use std::path::PathBuf;

use joinery::JoinableIterator;

use crate::shape::{Element, Shape};

/// The base type of a single element, as shown in help messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    Unknown,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Bool => "BOOL",
            ValueKind::Int => "NUMBER",
            ValueKind::Float => "FLOAT",
            ValueKind::Str => "STRING",
            ValueKind::Unknown => "UNKNOWN",
        })
    }
}

/// The current contents of an argument slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i128),
    Float(f64),
    Str(String),

    /// A fixed-size array or a growable list
    List(Vec<Value>),

    /// A heterogeneous tuple
    Tuple(Vec<Value>),
}

impl Value {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view of the value, for comparisons across ints and floats
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(value) => Some(value as f64),
            Value::Float(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) => Some(value),
            _ => None,
        }
    }

    /// The elements of a list or tuple
    #[must_use]
    pub fn items(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// A short description of what this value is, for error messages
    pub(crate) fn describe(&self) -> String {
        match self {
            Value::Bool(_) => "bool".to_owned(),
            Value::Int(_) => "integer".to_owned(),
            Value::Float(_) => "float".to_owned(),
            Value::Str(_) => "string".to_owned(),
            Value::List(items) => format!("list of {}", items.len()),
            Value::Tuple(items) => format!("tuple of {}", items.len()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(value) => f.write_str(value),
            Value::List(items) => write!(f, "[{}]", items.iter().join_with(", ")),
            Value::Tuple(items) => write!(f, "({})", items.iter().join_with(", ")),
        }
    }
}

/**
A type that a single command-line token can be cast into.

`cast` returns `None` when the token isn't a valid instance of the type; the
caller turns that into an error naming the argument and the [`KIND`][Self::KIND].
*/
pub trait Scalar: Sized + Default + 'static {
    const KIND: ValueKind = ValueKind::Unknown;

    fn cast(raw: &str) -> Option<Self>;

    fn store(self) -> Value;

    fn load(value: &Value) -> Option<Self>;
}

/// A type that can be read out of a parsed argument slot
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

/// A type that can be written into an argument slot
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// A type that can be declared as an argument, which determines the shape of
/// its slot.
pub trait ArgType {
    fn shape() -> Shape;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_owned())
    }
}

/// Implement the slot conversion traits for a type that already implements
/// [`Scalar`]
macro_rules! scalar_conversions {
    ($($type:ty)*) => {$(
        impl FromValue for $type {
            #[inline]
            fn from_value(value: &Value) -> Option<Self> {
                <$type as Scalar>::load(value)
            }
        }

        impl IntoValue for $type {
            #[inline]
            fn into_value(self) -> Value {
                <$type as Scalar>::store(self)
            }
        }

        impl ArgType for $type {
            #[inline]
            fn shape() -> Shape {
                Shape::Scalar(Element::of::<$type>())
            }
        }
    )*};
}

macro_rules! integers {
    ($($type:ty)*) => {$(
        impl Scalar for $type {
            const KIND: ValueKind = ValueKind::Int;

            #[inline]
            fn cast(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }

            #[inline]
            fn store(self) -> Value {
                Value::Int(self as i128)
            }

            #[inline]
            fn load(value: &Value) -> Option<Self> {
                match *value {
                    Value::Int(value) => Self::try_from(value).ok(),
                    _ => None,
                }
            }
        }

        scalar_conversions! { $type }
    )*};
}

integers! { i8 i16 i32 i64 isize u8 u16 u32 u64 usize }

macro_rules! floats {
    ($($type:ty)*) => {$(
        impl Scalar for $type {
            const KIND: ValueKind = ValueKind::Float;

            #[inline]
            fn cast(raw: &str) -> Option<Self> {
                raw.parse().ok()
            }

            #[inline]
            fn store(self) -> Value {
                Value::Float(self.into())
            }

            #[inline]
            fn load(value: &Value) -> Option<Self> {
                match *value {
                    Value::Float(value) => Some(value as Self),
                    Value::Int(value) => Some(value as Self),
                    _ => None,
                }
            }
        }

        scalar_conversions! { $type }
    )*};
}

floats! { f32 f64 }

impl Scalar for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn cast(raw: &str) -> Option<Self> {
        match raw {
            "true" | "True" | "TRUE" | "1" => Some(true),
            "false" | "False" | "FALSE" | "0" => Some(false),
            _ => None,
        }
    }

    fn store(self) -> Value {
        Value::Bool(self)
    }

    fn load(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl Scalar for String {
    const KIND: ValueKind = ValueKind::Str;

    fn cast(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }

    fn store(self) -> Value {
        Value::Str(self)
    }

    fn load(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl Scalar for PathBuf {
    const KIND: ValueKind = ValueKind::Str;

    fn cast(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }

    fn store(self) -> Value {
        Value::Str(self.to_string_lossy().into_owned())
    }

    fn load(value: &Value) -> Option<Self> {
        value.as_str().map(PathBuf::from)
    }
}

scalar_conversions! { bool String PathBuf }

impl<T: Scalar> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(items) => items.iter().map(T::load).collect(),
            _ => None,
        }
    }
}

impl<T: Scalar> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(T::store).collect())
    }
}

impl<T: Scalar> ArgType for Vec<T> {
    fn shape() -> Shape {
        Shape::List(Element::of::<T>())
    }
}

impl<T: Scalar, const N: usize> FromValue for [T; N] {
    fn from_value(value: &Value) -> Option<Self> {
        let items: Vec<T> = FromValue::from_value(value)?;
        items.try_into().ok()
    }
}

impl<T: Scalar, const N: usize> IntoValue for [T; N] {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(T::store).collect())
    }
}

impl<T: Scalar, const N: usize> ArgType for [T; N] {
    fn shape() -> Shape {
        Shape::Array(Element::of::<T>(), N)
    }
}

macro_rules! tuples {
    ($($len:literal => ($($name:ident $index:tt)+))*) => {$(
        impl<$($name: Scalar),+> FromValue for ($($name,)+) {
            fn from_value(value: &Value) -> Option<Self> {
                match value {
                    Value::Tuple(items) if items.len() == $len => {
                        Some(($($name::load(&items[$index])?,)+))
                    }
                    _ => None,
                }
            }
        }

        impl<$($name: Scalar),+> IntoValue for ($($name,)+) {
            fn into_value(self) -> Value {
                Value::Tuple(vec![$(self.$index.store()),+])
            }
        }

        impl<$($name: Scalar),+> ArgType for ($($name,)+) {
            fn shape() -> Shape {
                Shape::Tuple(vec![$(Element::of::<$name>()),+])
            }
        }
    )*};
}

tuples! {
    2 => (A 0 B 1)
    3 => (A 0 B 1 C 2)
    4 => (A 0 B 1 C 2 D 3)
}

/// Read `value` as `T`, or explain why it can't be.
pub(crate) fn read<T: FromValue>(name: &str, value: &Value) -> Result<T, crate::Error> {
    T::from_value(value).ok_or_else(|| crate::Error::TypeMismatch {
        name: name.to_owned(),
        found: value.describe(),
        requested: type_name::<T>(),
    })
}
