/*!
The assignment engine. Given a descriptor and the group of values that
followed its key, consume as many values as the descriptor's arity allows,
cast and store them, and hand whatever is left over to the positional
arguments.
 */

use core::slice;

use crate::{
    errors::Error,
    nargs::NArgs,
    table::{Descriptor, Kind, Table},
    value::Value,
};

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|&value| value.to_owned()).collect()
}

/// Assign the named argument at `index` from `values`.
pub(crate) fn assign_option(table: &mut Table, index: usize, values: &[&str]) -> Result<(), Error> {
    let Table {
        options,
        positionals,
        ..
    } = table;

    let descriptor = options
        .get_mut(index)
        .ok_or_else(|| Error::internal(format!("no option at index {index}")))?;

    if descriptor.assigned {
        return Err(Error::Duplicated {
            name: descriptor.name.clone(),
        });
    }

    let rest = match descriptor.kind {
        Kind::Flag if !values.is_empty() && positionals.is_empty() => {
            return Err(Error::FlagGotValue {
                name: descriptor.name.clone(),
            });
        }
        Kind::Flag => {
            descriptor.commit(Value::Bool(true), &[])?;
            values
        }
        Kind::Option | Kind::Positional => consume(descriptor, values)?,
    };

    forward(positionals, rest)
}

/// Consume values for `descriptor` according to its arity, returning the
/// values it didn't take.
fn consume<'a, 'arg>(
    descriptor: &mut Descriptor,
    values: &'a [&'arg str],
) -> Result<&'a [&'arg str], Error> {
    match descriptor.nargs {
        NArgs::Optional => match values.split_first() {
            None => {
                descriptor.commit_implicit();
                Ok(&[])
            }
            Some((first, rest)) => {
                let taken = slice::from_ref(first);
                let value = descriptor.cast(taken)?;
                descriptor.commit(value, taken)?;
                Ok(rest)
            }
        },
        NArgs::ZeroOrMore if values.is_empty() => {
            descriptor.commit_implicit();
            Ok(&[])
        }
        NArgs::OneOrMore if values.is_empty() => Err(Error::MissingValues {
            name: descriptor.name.clone(),
        }),
        NArgs::ZeroOrMore | NArgs::OneOrMore => {
            let value = descriptor.cast(values)?;
            descriptor.commit(value, values)?;
            Ok(&[])
        }
        NArgs::Exact(1) if values.is_empty() => Err(Error::MissingValue {
            name: descriptor.name.clone(),
        }),
        NArgs::Exact(count) if values.len() < count => Err(Error::TooFewValues {
            name: descriptor.name.clone(),
            expected: count,
            values: owned(values),
        }),
        NArgs::Exact(count) => {
            let (taken, rest) = values.split_at(count);
            let value = descriptor.cast(taken)?;
            descriptor.commit(value, taken)?;
            Ok(rest)
        }
    }
}

/// Hand values that no named argument took to the positional arguments.
pub(crate) fn forward(positionals: &mut [Descriptor], values: &[&str]) -> Result<(), Error> {
    if values.is_empty() {
        Ok(())
    } else if positionals.is_empty() {
        Err(Error::UnexpectedPositional {
            values: owned(values),
        })
    } else {
        assign_positionals(positionals, values)
    }
}

/// The number of values that the unassigned exact-arity positionals in
/// `later` still need
fn reserved(later: &[Descriptor]) -> usize {
    later
        .iter()
        .filter(|descriptor| !descriptor.assigned)
        .map(|descriptor| match descriptor.nargs {
            NArgs::Exact(count) => count,
            _ => 0,
        })
        .sum()
}

/**
The positional engine. Walk the positional arguments in declaration order,
skipping the ones already assigned, and let each consume its share of
`values`. A `+` positional leaves behind enough values for the exact-arity
positionals after it, as long as that still leaves it at least one;
otherwise it takes everything that's left. Values that no positional can
take are an error.
*/
pub(crate) fn assign_positionals(
    positionals: &mut [Descriptor],
    mut values: &[&str],
) -> Result<(), Error> {
    for index in 0..positionals.len() {
        if values.is_empty() {
            break;
        }

        if positionals[index].assigned {
            continue;
        }

        let share = match positionals[index].nargs {
            NArgs::OneOrMore => match values.len().checked_sub(reserved(&positionals[index + 1..])) {
                Some(share) if share > 0 => share,
                _ => values.len(),
            },
            _ => values.len(),
        };

        let (offered, held) = values.split_at(share);
        let descriptor = &mut positionals[index];

        log::trace!("positional {} gets {offered:?}", descriptor.name);
        let rest = consume(descriptor, offered)?;

        // Only a `+` positional is offered less than everything, and it
        // takes all it's offered.
        values = match rest {
            [] => held,
            rest => rest,
        };
    }

    match values {
        [] => Ok(()),
        values => Err(Error::ExtraPositional {
            values: owned(values),
        }),
    }
}
