use itertools::Itertools as _;
use lazy_format::lazy_format;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Fields, spanned::Spanned as _};

use crate::common::{FieldInfo, Source};

pub fn derive_from_parser_result(item: TokenStream2) -> syn::Result<TokenStream2> {
    let input: DeriveInput = syn::parse2(item)?;

    let fields = match input.data {
        syn::Data::Struct(ref data) => match data.fields {
            Fields::Named(ref fields) => &fields.named,
            Fields::Unnamed(ref fields) => {
                return Err(syn::Error::new(
                    fields.span(),
                    "can't derive `FromParser` on a tuple struct; fields need names",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new(
                    input.span(),
                    "can't derive `FromParser` on a unit struct",
                ));
            }
        },
        syn::Data::Enum(_) => {
            return Err(syn::Error::new(
                input.span(),
                "can't derive `FromParser` on an enum; use a struct with \
                `#[argot(subcommand)]` fields instead",
            ));
        }
        syn::Data::Union(_) => {
            return Err(syn::Error::new(
                input.span(),
                "can't derive `FromParser` on a union",
            ));
        }
    };

    let fields = fields
        .iter()
        .map(FieldInfo::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    if let Some(duplicate) = fields
        .iter()
        .filter(|field| matches!(field.source, Source::Subcommand))
        .duplicates_by(|field| String::clone(&field.name))
        .next()
    {
        return Err(syn::Error::new(
            duplicate.name.span(),
            lazy_format!("subcommand `{}` is read by more than one field", *duplicate.name),
        ));
    }

    let initializers = fields.iter().map(|field| {
        let ident = field.ident;
        let ty = field.ty;
        let name = field.name.as_str();

        match field.source {
            Source::Argument => quote! {
                #ident: parser.get::<#ty>(#name)?
            },
            Source::Subcommand => quote! {
                #ident: <#ty as ::argot::FromParser>::from_parser(
                    parser.subcommand(#name).ok_or_else(|| ::argot::Error::UnknownName {
                        name: ::std::string::String::from(#name),
                    })?,
                )?
            },
        }
    });

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::argot::FromParser for #ident #ty_generics #where_clause {
            fn from_parser(
                parser: &::argot::Parser,
            ) -> ::core::result::Result<Self, ::argot::Error> {
                ::core::result::Result::Ok(Self {
                    #(#initializers,)*
                })
            }
        }
    })
}
