//! Derive macro for `fundar` record types.
//!
//! `#[derive(Record)]` reads the named `Option<T>` fields of a struct as an
//! ordered schema and emits the constructor, field accessors, comparison and
//! string representation bound to that schema.

use proc_macro::TokenStream;

mod node;
mod record;
mod repr;
mod util;

#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input.into()).into()
}
