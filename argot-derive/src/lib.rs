mod common;
mod from_parser;

use proc_macro::TokenStream;

/// Derive `argot::FromParser` for a struct with named fields.
///
/// Each field is read with `Parser::get` from the argument named after the
/// field in kebab-case, or from `#[argot(name = "...")]`. A field marked
/// `#[argot(subcommand)]` (or `#[argot(subcommand = "...")]`) is instead
/// extracted from that subcommand's parser; make it an `Option` to get `None`
/// when the subcommand wasn't used.
#[proc_macro_derive(FromParser, attributes(argot))]
pub fn derive_from_parser(item: TokenStream) -> TokenStream {
    match from_parser::derive_from_parser_result(item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
