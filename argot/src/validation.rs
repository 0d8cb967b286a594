/*!
Validators check a value after it's been cast and stored. A rejected value
fails the parse with [`Error::Validation`][crate::Error::Validation].

Any `Fn(&Value, &[&str]) -> bool` is a validator; the second argument is the
raw tokens the value was cast from. [`Range`] covers the common numeric case,
and validators combine with [`and`][Validator::and], [`or`][Validator::or],
and [`invert`][Validator::invert].
 */

use core::marker::PhantomData;

use crate::value::{FromValue, Value};

pub trait Validator: Send + Sync + 'static {
    fn validate(&self, value: &Value, raw: &[&str]) -> bool;

    /// Accept only values that both validators accept
    fn and<V: Validator>(self, other: V) -> And<Self, V>
    where
        Self: Sized,
    {
        And(self, other)
    }

    /// Accept values that either validator accepts
    fn or<V: Validator>(self, other: V) -> Or<Self, V>
    where
        Self: Sized,
    {
        Or(self, other)
    }

    /// Accept exactly the values this validator rejects
    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert(self)
    }
}

impl<F> Validator for F
where
    F: Fn(&Value, &[&str]) -> bool + Send + Sync + 'static,
{
    #[inline]
    fn validate(&self, value: &Value, raw: &[&str]) -> bool {
        self(value, raw)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct And<L, R>(L, R);

impl<L: Validator, R: Validator> Validator for And<L, R> {
    fn validate(&self, value: &Value, raw: &[&str]) -> bool {
        self.0.validate(value, raw) && self.1.validate(value, raw)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Or<L, R>(L, R);

impl<L: Validator, R: Validator> Validator for Or<L, R> {
    fn validate(&self, value: &Value, raw: &[&str]) -> bool {
        self.0.validate(value, raw) || self.1.validate(value, raw)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Invert<V>(V);

impl<V: Validator> Validator for Invert<V> {
    fn validate(&self, value: &Value, raw: &[&str]) -> bool {
        !self.0.validate(value, raw)
    }
}

/**
Accepts numbers strictly between `min` and `max`. For lists and tuples, every
element must be in range. Non-numeric values are rejected.
*/
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
}

impl Range {
    #[must_use]
    pub fn new(min: impl Into<f64>, max: impl Into<f64>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    fn contains(&self, value: &Value) -> bool {
        match value.items() {
            Some(items) => items.iter().all(|item| self.contains(item)),
            None => value
                .as_f64()
                .is_some_and(|value| self.min < value && value < self.max),
        }
    }
}

impl Validator for Range {
    fn validate(&self, value: &Value, _raw: &[&str]) -> bool {
        self.contains(value)
    }
}

/// A validator over the typed value. Values that can't be read as `T` are
/// rejected.
pub struct Typed<T, F> {
    check: F,
    marker: PhantomData<fn(&T)>,
}

impl<T, F> Validator for Typed<T, F>
where
    T: FromValue + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    fn validate(&self, value: &Value, _raw: &[&str]) -> bool {
        T::from_value(value).is_some_and(|value| (self.check)(&value))
    }
}

/// Build a validator from a check on the typed value:
///
/// ```
/// use argot::validation::{self, Validator as _};
///
/// let even = validation::from_fn(|value: &i64| value % 2 == 0);
/// assert!(even.validate(&argot::Value::Int(4), &[]));
/// ```
pub fn from_fn<T, F>(check: F) -> Typed<T, F>
where
    T: FromValue + 'static,
    F: Fn(&T) -> bool + Send + Sync + 'static,
{
    Typed {
        check,
        marker: PhantomData,
    }
}
