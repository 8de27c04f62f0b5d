use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericArgument, PathArguments, Type, WhereClause};

pub fn where_clause_with_bounds(
    where_clause: Option<&WhereClause>,
    bounds: &[TokenStream],
) -> TokenStream {
    if bounds.is_empty() {
        return where_clause
            .as_ref()
            .map_or_else(|| quote!(), |wc| quote!(#wc));
    }

    if let Some(wc) = where_clause {
        let preds = &wc.predicates;
        quote!(where #preds, #(#bounds),*)
    } else {
        quote!(where #(#bounds),*)
    }
}

/// Return `T` when `ty` is spelled `Option<T>` (any path prefix).
pub fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}

/// Render a type as a compact label, e.g. `Vec<String>` or `&'a str`.
///
/// Spaces survive only between two word characters.
pub fn type_label(ty: &Type) -> String {
    let rendered = ty.to_token_stream().to_string();
    let chars: Vec<char> = rendered.chars().collect();
    let is_word = |c: Option<&char>| c.is_some_and(|c| c.is_alphanumeric() || *c == '_');

    let mut label = String::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            let prev = label.chars().last();
            if !is_word(prev.as_ref()) || !is_word(chars.get(i + 1)) {
                continue;
            }
        }
        label.push(*c);
    }

    label
}
