use crate::{
    node::{RecordInput, RecordNode},
    repr,
    util::where_clause_with_bounds,
};
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

// derive_record
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    let input = match RecordInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(err) => return err.write_errors(),
    };

    let node = match RecordNode::from_input(input) {
        Ok(node) => node,
        Err(err) => return err.to_compile_error(),
    };

    // no schema fields, nothing to synthesize
    if node.fields.is_empty() {
        return quote!();
    }

    let inherent = inherent_tokens(&node);
    let record = record_tokens(&node);
    let field_value = field_value_tokens(&node);
    let repr = if node.custom_repr {
        quote!()
    } else {
        repr::repr_tokens(&node)
    };

    quote! {
        #inherent
        #record
        #field_value
        #repr
    }
}

// bounds shared by every generated impl
fn field_bounds(node: &RecordNode) -> Vec<TokenStream> {
    let mut bounds: Vec<TokenStream> = node
        .fields
        .iter()
        .map(|field| {
            let ty = &field.ty;
            quote!(#ty: ::fundar::traits::FieldValue + ::std::cmp::PartialEq)
        })
        .collect();

    if !node.generics.params.is_empty() {
        bounds.push(quote!(Self: 'static));
    }

    bounds
}

fn inherent_tokens(node: &RecordNode) -> TokenStream {
    let ident = &node.ident;
    let (impl_generics, ty_generics, _) = node.generics.split_for_impl();
    let where_tokens = where_clause_with_bounds(
        node.generics.where_clause.as_ref(),
        &field_bounds(node),
    );

    let args = node.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote!(#field_ident: #ty)
    });
    let assigns = node.fields.iter().map(|field| &field.ident);

    // `Some` around a null inner value collapses to `None`
    let normalize = node.fields.iter().map(|field| {
        let field_ident = &field.ident;
        quote! {
            let #field_ident = if ::fundar::traits::FieldValue::is_null_value(&#field_ident) {
                ::std::option::Option::None
            } else {
                #field_ident
            };
        }
    });
    let skipped = node.skipped.iter().map(|skip| {
        quote!(#skip: ::std::default::Default::default(),)
    });

    // phase 2 runs only after every declared field is assigned
    let init = node.init.as_ref().map_or_else(
        || quote!(),
        |path| {
            quote! {
                #path(&mut this);
            }
        },
    );

    quote! {
        impl #impl_generics #ident #ty_generics #where_tokens {
            /// Build a record from field values in schema order.
            #[must_use]
            #[allow(clippy::too_many_arguments)]
            pub fn new(#(#args),*) -> Self {
                #(#normalize)*
                #[allow(unused_mut)]
                let mut this = Self {
                    #(#assigns,)*
                    #(#skipped)*
                };
                #init

                this
            }
        }
    }
}

fn record_tokens(node: &RecordNode) -> TokenStream {
    let ident = &node.ident;
    let (impl_generics, ty_generics, _) = node.generics.split_for_impl();
    let where_tokens = where_clause_with_bounds(
        node.generics.where_clause.as_ref(),
        &field_bounds(node),
    );

    let record_name = node.name();
    let width = node.fields.len();

    let schema_fields = node.fields.iter().map(|field| {
        let name = &field.name;
        let label = &field.label;
        quote!(::fundar::schema::Field { name: #name, ty: #label })
    });

    let decode_args = node.fields.iter().enumerate().map(|(index, field)| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote! {
            let #field_ident: #ty = ::fundar::record::decode_field(
                Self::SCHEMA,
                #index,
                &__values.next().unwrap_or(::fundar::Value::Null),
            )?;
        }
    });
    let new_args = node.fields.iter().map(|field| &field.ident);

    let get_arms = node.fields.iter().map(|field| {
        let name = &field.name;
        let field_ident = &field.ident;
        quote! {
            #name => Some(::fundar::traits::FieldValue::to_value(&self.#field_ident)),
        }
    });

    let set_arms = node.fields.iter().enumerate().map(|(index, field)| {
        let name = &field.name;
        let field_ident = &field.ident;
        quote! {
            #name => {
                self.#field_ident = ::fundar::record::decode_field(Self::SCHEMA, #index, &value)?;
                Ok(())
            }
        }
    });

    let check_arms = node.fields.iter().enumerate().map(|(index, field)| {
        let name = &field.name;
        let ty = &field.ty;
        quote! {
            #name => ::fundar::record::decode_field::<#ty>(Self::SCHEMA, #index, value).map(|_| ()),
        }
    });

    let null_arms = node.fields.iter().map(|field| {
        let name = &field.name;
        let field_ident = &field.ident;
        quote! {
            #name => Some(::fundar::traits::FieldValue::is_null_value(&self.#field_ident)),
        }
    });

    let diff_checks = node.fields.iter().map(|field| {
        let name = &field.name;
        let field_ident = &field.ident;
        quote! {
            if self.#field_ident != other.#field_ident {
                diff.push(#name);
            }
        }
    });

    quote! {
        impl #impl_generics ::fundar::Record for #ident #ty_generics #where_tokens {
            const SCHEMA: &'static ::fundar::Schema = &::fundar::Schema::new(
                #record_name,
                &[#(#schema_fields),*],
            );

            fn construct(
                values: ::std::vec::Vec<::fundar::Value>,
            ) -> ::std::result::Result<Self, ::fundar::RecordError> {
                if values.len() != #width {
                    return Err(::fundar::RecordError::arity(Self::SCHEMA, values.len()));
                }

                let mut __values = values.into_iter();
                #(#decode_args)*

                Ok(Self::new(#(#new_args),*))
            }

            fn get_value(&self, field: &str) -> ::std::option::Option<::fundar::Value> {
                match field {
                    #(#get_arms)*
                    _ => None,
                }
            }

            fn set_value(
                &mut self,
                field: &str,
                value: ::fundar::Value,
            ) -> ::std::result::Result<(), ::fundar::RecordError> {
                match field {
                    #(#set_arms)*
                    _ => Err(::fundar::RecordError::unknown_field(Self::SCHEMA, field)),
                }
            }

            fn check_value(
                field: &str,
                value: &::fundar::Value,
            ) -> ::std::result::Result<(), ::fundar::RecordError> {
                match field {
                    #(#check_arms)*
                    _ => Err(::fundar::RecordError::unknown_field(Self::SCHEMA, field)),
                }
            }

            fn is_null(&self, field: &str) -> ::std::option::Option<bool> {
                match field {
                    #(#null_arms)*
                    _ => None,
                }
            }

            fn diff_fields(&self, other: &Self) -> ::std::vec::Vec<&'static str> {
                let mut diff = ::std::vec::Vec::new();
                #(#diff_checks)*

                diff
            }
        }
    }
}

// nested records travel as their dict form
fn field_value_tokens(node: &RecordNode) -> TokenStream {
    let ident = &node.ident;
    let (impl_generics, ty_generics, _) = node.generics.split_for_impl();
    let where_tokens = where_clause_with_bounds(
        node.generics.where_clause.as_ref(),
        &field_bounds(node),
    );

    quote! {
        impl #impl_generics ::fundar::traits::FieldValue for #ident #ty_generics #where_tokens {
            fn to_value(&self) -> ::fundar::Value {
                ::fundar::Value::Map(::fundar::Record::to_dict(self))
            }

            fn is_null_value(&self) -> bool {
                false
            }

            fn from_value(value: &::fundar::Value) -> ::std::option::Option<Self> {
                match value {
                    ::fundar::Value::Map(map) => <Self as ::fundar::Record>::from_dict(map).ok(),
                    _ => None,
                }
            }
        }
    }
}
