/*!
The descriptor table: one [`Descriptor`] per declared argument, owned by its
[`Parser`][crate::Parser]. Descriptors hold the current value and `assigned`
state of their slot, plus everything needed to fill it.
 */

use crate::{
    errors::Error,
    nargs::NArgs,
    shape::{Element, Shape},
    validation::Validator,
    value::Value,
};

pub(crate) type Callback = Box<dyn FnMut(&mut Value, &[&str]) -> Result<(), Error> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    /// A named argument that takes values
    Option,

    /// A named argument that takes no values
    Flag,

    Positional,
}

pub(crate) struct Descriptor {
    pub name: String,
    pub short: Option<char>,
    pub kind: Kind,
    pub shape: Shape,
    pub nargs: NArgs,
    pub required: bool,
    pub description: String,

    /// The explicit default; also what the slot is reset to
    pub default: Value,

    /// Used when the key appears with no values under `?` or `*`
    pub implicit: Value,

    pub validator: Option<Box<dyn Validator>>,
    pub callback: Option<Callback>,

    pub value: Value,
    pub assigned: bool,
}

impl Descriptor {
    #[inline]
    pub fn is_flag(&self) -> bool {
        self.kind == Kind::Flag
    }

    /// Cast raw tokens into a value of this descriptor's shape. The caller
    /// has already checked that `raw` has the right number of tokens.
    pub fn cast(&self, raw: &[&str]) -> Result<Value, Error> {
        match self.shape {
            Shape::Scalar(ref element) => match raw {
                [raw] => self.cast_one(element, raw),
                _ => Err(Error::internal(format!(
                    "{} expected 1 value, was handed {}",
                    self.name,
                    raw.len()
                ))),
            },
            Shape::Array(ref element, _) | Shape::List(ref element) => raw
                .iter()
                .map(|raw| self.cast_one(element, raw))
                .collect::<Result<_, _>>()
                .map(Value::List),
            Shape::Tuple(ref elements) if elements.len() == raw.len() => elements
                .iter()
                .zip(raw)
                .map(|(element, raw)| self.cast_one(element, raw))
                .collect::<Result<_, _>>()
                .map(Value::Tuple),
            Shape::Tuple(ref elements) => Err(Error::internal(format!(
                "{} expected {} values, was handed {}",
                self.name,
                elements.len(),
                raw.len()
            ))),
        }
    }

    fn cast_one(&self, element: &Element, raw: &str) -> Result<Value, Error> {
        element.cast(raw).ok_or_else(|| Error::Cast {
            name: self.name.clone(),
            value: raw.to_owned(),
            kind: element.kind(),
        })
    }

    /// Store `value`, mark the slot assigned, then run the validator and the
    /// callback, in that order.
    pub fn commit(&mut self, value: Value, raw: &[&str]) -> Result<(), Error> {
        log::trace!("assigning {} = {value}", self.name);

        self.value = value;
        self.assigned = true;

        if let Some(ref validator) = self.validator
            && !validator.validate(&self.value, raw)
        {
            return Err(Error::Validation {
                name: self.name.clone(),
                value: self.value.to_string(),
            });
        }

        match self.callback {
            Some(ref mut callback) => callback(&mut self.value, raw),
            None => Ok(()),
        }
    }

    /// Store the implicit default for a key that appeared without values.
    /// Neither the validator nor the callback runs.
    pub fn commit_implicit(&mut self) {
        log::trace!("assigning {} its implicit default", self.name);

        self.value = self.implicit.clone();
        self.assigned = true;
    }

    pub fn reset(&mut self) {
        self.value = self.default.clone();
        self.assigned = false;
    }
}

/// The help key: when it appears, the parse stops and help is shown.
#[derive(Debug, Clone)]
pub(crate) struct HelpKey {
    pub name: String,
    pub short: Option<char>,
    pub description: String,
}

#[derive(Default)]
pub(crate) struct Table {
    /// Named arguments and flags, in declaration order
    pub options: Vec<Descriptor>,

    /// Positional arguments, in declaration order
    pub positionals: Vec<Descriptor>,

    pub help: Option<HelpKey>,
}

impl Table {
    pub fn find_long(&self, name: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|descriptor| descriptor.name == name)
    }

    pub fn find_short(&self, short: u8) -> Option<usize> {
        self.options
            .iter()
            .position(|descriptor| descriptor.short.is_some_and(|c| c as u32 == short as u32))
    }

    pub fn is_help_long(&self, name: &str) -> bool {
        self.help.as_ref().is_some_and(|help| help.name == name)
    }

    pub fn is_help_short(&self, short: u8) -> bool {
        self.help
            .as_ref()
            .and_then(|help| help.short)
            .is_some_and(|c| c as u32 == short as u32)
    }

    pub fn is_short_option(&self, short: u8) -> bool {
        self.is_help_short(short) || self.find_short(short).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&Descriptor> {
        self.descriptors().find(|descriptor| descriptor.name == name)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.options.iter().chain(&self.positionals)
    }

    /// Names of every slot still holding an assignment
    pub fn assigned_names(&self) -> Vec<String> {
        self.descriptors()
            .filter(|descriptor| descriptor.assigned)
            .map(|descriptor| descriptor.name.clone())
            .collect()
    }

    /// Names of every required slot that wasn't assigned
    pub fn missing_required(&self) -> Vec<String> {
        self.descriptors()
            .filter(|descriptor| descriptor.required && !descriptor.assigned)
            .map(|descriptor| descriptor.name.clone())
            .collect()
    }

    pub fn reset(&mut self) {
        self.options
            .iter_mut()
            .chain(&mut self.positionals)
            .for_each(Descriptor::reset);
    }
}
