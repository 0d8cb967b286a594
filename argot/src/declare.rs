/*!
Argument declarations. Each declaration is a small builder that ends up as a
descriptor in a [`Parser`][crate::Parser]'s table when handed to the
[`ParserBuilder`][crate::ParserBuilder].
 */

use core::marker::PhantomData;

use crate::{
    errors::ConfigError,
    nargs::NArgs,
    shape::{Element, Shape},
    table::{Callback, Descriptor, Kind},
    validation::Validator,
    value::{self, ArgType, FromValue, IntoValue, Value},
};

/// The parts every declaration shares
struct Common {
    name: String,
    description: String,
    default: Option<Value>,
    validator: Option<Box<dyn Validator>>,
    callback: Option<Callback>,
}

impl Common {
    fn new(name: String) -> Self {
        Self {
            name,
            description: String::new(),
            default: None,
            validator: None,
            callback: None,
        }
    }
}

fn typed_callback<U, F>(name: &str, mut callback: F) -> Callback
where
    U: FromValue + IntoValue,
    F: FnMut(&mut U, &[&str]) + Send + 'static,
{
    let name = name.to_owned();

    Box::new(move |value: &mut Value, raw: &[&str]| {
        let mut typed: U = value::read(&name, value)?;
        callback(&mut typed, raw);
        *value = typed.into_value();
        Ok(())
    })
}

/**
A named argument, given on the command line as `--name VALUES...`,
`--name=VALUE`, or `-s VALUES...` with a short alias.

`T` is the declared type: a scalar (`bool`, integers, floats, `String`,
`PathBuf`), a `Vec` of scalars, an array of scalars, or a tuple of 2 to 4
scalars. When no arity is given, arrays and tuples take exactly as many values
as they have elements, `Vec` takes `*`, and scalars take `?`.
*/
pub struct Arg<T> {
    common: Common,
    short: Option<char>,
    nargs: Option<NArgs>,
    required: bool,
    implicit: Option<Value>,
    ty: PhantomData<fn() -> T>,
}

impl<T: ArgType> Arg<T> {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            common: Common::new(name.into()),
            short: None,
            nargs: None,
            required: false,
            implicit: None,
            ty: PhantomData,
        }
    }

    #[must_use]
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    #[must_use]
    pub fn nargs(mut self, nargs: impl Into<NArgs>) -> Self {
        self.nargs = Some(nargs.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The value this argument holds when it doesn't appear at all
    #[must_use]
    pub fn default(mut self, default: impl IntoValue) -> Self {
        self.common.default = Some(default.into_value());
        self
    }

    /// The value this argument gets when it appears without any values,
    /// under nargs `?` or `*`
    #[must_use]
    pub fn implicit_default(mut self, implicit: impl IntoValue) -> Self {
        self.implicit = Some(implicit.into_value());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.common.description = description.into();
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: impl Validator) -> Self {
        self.common.validator = Some(Box::new(validator));
        self
    }

    /**
    Run `callback` after each assignment, with the stored value and the raw
    tokens it came from. The callback may modify the value. `U` is the type
    of the stored value, which for a scalar with nargs greater than 1 is a
    list of that scalar.
     */
    #[must_use]
    pub fn callback<U, F>(mut self, callback: F) -> Self
    where
        U: FromValue + IntoValue,
        F: FnMut(&mut U, &[&str]) + Send + 'static,
    {
        self.common.callback = Some(typed_callback(&self.common.name, callback));
        self
    }

    pub(crate) fn into_descriptor(self) -> Result<Descriptor, ConfigError> {
        let name = &self.common.name;
        let (shape, nargs) = resolve(name, T::shape(), self.nargs, Kind::Option)?;
        check_short(name, self.short)?;

        build(
            self.common,
            Kind::Option,
            self.short,
            shape,
            nargs,
            self.required,
            self.implicit,
        )
    }
}

/**
A named argument that takes no values. It holds `true` once it appears on the
command line, and `false` otherwise.
*/
pub struct Flag {
    common: Common,
    short: Option<char>,
}

impl Flag {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            common: Common::new(name.into()),
            short: None,
        }
    }

    #[must_use]
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.common.description = description.into();
        self
    }

    /// Run `callback` each time the flag is set
    #[must_use]
    pub fn callback(mut self, mut callback: impl FnMut() + Send + 'static) -> Self {
        self.common.callback = Some(Box::new(move |_: &mut Value, _: &[&str]| {
            callback();
            Ok(())
        }));
        self
    }

    pub(crate) fn into_descriptor(self) -> Result<Descriptor, ConfigError> {
        check_short(&self.common.name, self.short)?;

        build(
            self.common,
            Kind::Flag,
            self.short,
            Shape::Scalar(Element::of::<bool>()),
            NArgs::Exact(0),
            false,
            None,
        )
    }
}

/**
A positional argument, filled in declaration order from values that aren't
claimed by a named argument.

Scalar positional arguments take exactly one value by default, and `Vec`
positionals take `+`. They can't take `?` or `*`, and only one of them may
take `+`.
*/
pub struct Positional<T> {
    common: Common,
    nargs: Option<NArgs>,
    required: bool,
    ty: PhantomData<fn() -> T>,
}

impl<T: ArgType> Positional<T> {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            common: Common::new(name.into()),
            nargs: None,
            required: false,
            ty: PhantomData,
        }
    }

    #[must_use]
    pub fn nargs(mut self, nargs: impl Into<NArgs>) -> Self {
        self.nargs = Some(nargs.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn default(mut self, default: impl IntoValue) -> Self {
        self.common.default = Some(default.into_value());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.common.description = description.into();
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: impl Validator) -> Self {
        self.common.validator = Some(Box::new(validator));
        self
    }

    /// See [`Arg::callback`]
    #[must_use]
    pub fn callback<U, F>(mut self, callback: F) -> Self
    where
        U: FromValue + IntoValue,
        F: FnMut(&mut U, &[&str]) + Send + 'static,
    {
        self.common.callback = Some(typed_callback(&self.common.name, callback));
        self
    }

    pub(crate) fn into_descriptor(self) -> Result<Descriptor, ConfigError> {
        let name = &self.common.name;
        let (shape, nargs) = resolve(name, T::shape(), self.nargs, Kind::Positional)?;

        if matches!(nargs, NArgs::Optional | NArgs::ZeroOrMore) {
            return Err(ConfigError::PositionalNargs {
                name: name.clone(),
                nargs: nargs.to_string(),
            });
        }

        build(
            self.common,
            Kind::Positional,
            None,
            shape,
            nargs,
            self.required,
            None,
        )
    }
}

/// Settle the arity and the stored shape of a declaration. When no arity was
/// given, a named scalar takes `?` and a positional scalar takes exactly one;
/// a named `Vec` takes `*` and a positional `Vec` takes `+`.
fn resolve(
    name: &str,
    shape: Shape,
    nargs: Option<NArgs>,
    kind: Kind,
) -> Result<(Shape, NArgs), ConfigError> {
    let (scalar_default, list_default) = match kind {
        Kind::Positional => (NArgs::Exact(1), NArgs::OneOrMore),
        Kind::Option | Kind::Flag => (NArgs::Optional, NArgs::ZeroOrMore),
    };

    if nargs == Some(NArgs::Exact(0)) {
        return Err(ConfigError::ZeroNargs {
            name: name.to_owned(),
        });
    }

    let single = || ConfigError::SingleElement {
        name: name.to_owned(),
    };

    match shape {
        Shape::Scalar(element) => Ok(match nargs.unwrap_or(scalar_default) {
            NArgs::Exact(1) => (Shape::Scalar(element), NArgs::Exact(1)),
            NArgs::Optional => (Shape::Scalar(element), NArgs::Optional),
            NArgs::Exact(len) => (Shape::Array(element, len), NArgs::Exact(len)),
            nargs => (Shape::List(element), nargs),
        }),
        Shape::Array(_, len) if len < 2 => Err(single()),
        Shape::Array(element, len) => match nargs {
            None => Ok((Shape::Array(element, len), NArgs::Exact(len))),
            Some(NArgs::Exact(n)) if n == len => Ok((Shape::Array(element, len), NArgs::Exact(len))),
            Some(nargs) => Err(ConfigError::ArrayNargs {
                name: name.to_owned(),
                len,
                nargs: nargs.to_string(),
            }),
        },
        Shape::List(element) => match nargs.unwrap_or(list_default) {
            nargs @ (NArgs::Optional | NArgs::Exact(1)) => Err(ConfigError::ListNargs {
                name: name.to_owned(),
                nargs: nargs.to_string(),
            }),
            nargs => Ok((Shape::List(element), nargs)),
        },
        Shape::Tuple(elements) if elements.len() < 2 => Err(single()),
        Shape::Tuple(elements) => {
            let len = elements.len();

            match nargs {
                None => Ok((Shape::Tuple(elements), NArgs::Exact(len))),
                Some(NArgs::Exact(n)) if n == len => Ok((Shape::Tuple(elements), NArgs::Exact(len))),
                Some(nargs) => Err(ConfigError::TupleNargs {
                    name: name.to_owned(),
                    len,
                    nargs: nargs.to_string(),
                }),
            }
        }
    }
}

pub(crate) fn check_short(name: &str, short: Option<char>) -> Result<(), ConfigError> {
    match short {
        Some(short) if short == '-' || !short.is_ascii_graphic() => Err(ConfigError::InvalidShort {
            name: name.to_owned(),
            short,
        }),
        _ => Ok(()),
    }
}

fn build(
    common: Common,
    kind: Kind,
    short: Option<char>,
    shape: Shape,
    nargs: NArgs,
    required: bool,
    implicit: Option<Value>,
) -> Result<Descriptor, ConfigError> {
    let Common {
        name,
        description,
        default,
        validator,
        callback,
    } = common;

    if name.is_empty() {
        return Err(ConfigError::EmptyName);
    }

    if name.starts_with('-') || name.contains('=') {
        return Err(ConfigError::InvalidName { name });
    }

    let fits = |value: Option<Value>| match value {
        None => Ok(shape.zero()),
        Some(value) if shape.accepts(&value) => Ok(value),
        Some(value) => Err(ConfigError::DefaultMismatch {
            name: name.clone(),
            value: value.to_string(),
        }),
    };

    let default = fits(default)?;
    let implicit = fits(implicit)?;

    log::trace!("declared {name} ({kind:?}, nargs {nargs})");

    Ok(Descriptor {
        value: default.clone(),
        assigned: false,
        name,
        short,
        kind,
        shape,
        nargs,
        required,
        description,
        default,
        implicit,
        validator,
        callback,
    })
}
