use crate::node::RecordNode;
use proc_macro2::TokenStream;
use quote::quote;

// Debug and Display share the `Name(field=value, ...)` form.
pub fn repr_tokens(node: &RecordNode) -> TokenStream {
    let ident = &node.ident;
    let (impl_generics, ty_generics, where_clause) = node.generics.split_for_impl();
    let record_bound = quote!(Self: ::fundar::Record);
    let where_tokens = crate::util::where_clause_with_bounds(where_clause, &[record_bound]);

    quote! {
        impl #impl_generics ::std::fmt::Display for #ident #ty_generics #where_tokens {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::fundar::record::fmt_record(self, f)
            }
        }

        impl #impl_generics ::std::fmt::Debug for #ident #ty_generics #where_tokens {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::fundar::record::fmt_record(self, f)
            }
        }
    }
}
