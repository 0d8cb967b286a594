use darling::{
    FromAttributes as _,
    util::{Override, SpannedValue},
};
use heck::ToKebabCase as _;
use lazy_format::lazy_format;
use syn::{Field, Ident, Type, ext::IdentExt as _, spanned::Spanned as _};

#[derive(darling::FromAttributes, Debug)]
#[darling(attributes(argot))]
struct RawFieldAttr {
    name: Option<SpannedValue<String>>,
    subcommand: Option<Override<SpannedValue<String>>>,
}

/// Where a field's value comes from
pub enum Source {
    /// An argument of the parser itself
    Argument,

    /// A subcommand's nested parser
    Subcommand,
}

pub struct FieldInfo<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub name: SpannedValue<String>,
    pub source: Source,
}

impl<'a> FieldInfo<'a> {
    pub fn from_field(field: &'a Field) -> syn::Result<Self> {
        let parsed = RawFieldAttr::from_attributes(&field.attrs)?;

        let ident = field.ident.as_ref().ok_or_else(|| {
            syn::Error::new(
                field.span(),
                "`derive(FromParser)` needs named fields to know which arguments to read",
            )
        })?;

        let (name, source) = match (parsed.name, parsed.subcommand) {
            (Some(name), Some(_)) => {
                return Err(syn::Error::new(
                    name.span(),
                    "`name` and `subcommand` can't be combined; use `subcommand = \"...\"`",
                ));
            }
            (name, None) => (name, Source::Argument),
            (None, Some(subcommand)) => (subcommand.explicit(), Source::Subcommand),
        };

        let name = compute_name(name, ident)?;

        Ok(Self {
            ident,
            ty: &field.ty,
            name,
            source,
        })
    }
}

fn compute_name(
    name: Option<SpannedValue<String>>,
    ident: &Ident,
) -> syn::Result<SpannedValue<String>> {
    let name = name.unwrap_or_else(|| {
        SpannedValue::new(ident.unraw().to_string().to_kebab_case(), ident.span())
    });

    if name.is_empty() {
        Err(syn::Error::new(name.span(), "argument names can't be empty"))
    } else if name.starts_with('-') {
        Err(syn::Error::new(
            name.span(),
            lazy_format!(
                "argument names don't start with '-'; use `{}`, the dashes are handled automatically",
                name.trim_start_matches('-')
            ),
        ))
    } else if name.contains('=') {
        Err(syn::Error::new(
            name.span(),
            "argument names must not include an '=', as it is the value separator",
        ))
    } else {
        Ok(name)
    }
}
