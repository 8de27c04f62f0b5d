use crate::util::{option_inner, type_label};
use darling::{FromDeriveInput, FromField, ast::Data, util::Ignored};
use std::collections::HashMap;
use syn::{Error, Generics, Ident, Path, Type};

///
/// RecordInput
///
/// Container-level `#[record(...)]` options.
///

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named, struct_unit))]
pub struct RecordInput {
    pub ident: Ident,
    pub generics: Generics,
    pub data: Data<Ignored, RecordFieldInput>,

    /// Second construction phase, called as `init(&mut self)`.
    #[darling(default)]
    pub init: Option<Path>,

    /// Leave `Debug` and `Display` to the author.
    #[darling(default)]
    pub custom_repr: bool,
}

///
/// RecordFieldInput
///

#[derive(Debug, FromField)]
#[darling(attributes(record))]
pub struct RecordFieldInput {
    pub ident: Option<Ident>,
    pub ty: Type,

    #[darling(default)]
    pub rename: Option<String>,

    #[darling(default)]
    pub skip: bool,
}

///
/// SchemaField
///
/// One extracted schema entry, in declaration order.
///

pub struct SchemaField {
    pub ident: Ident,
    pub name: String,
    pub ty: Type,
    pub inner: Type,
    pub label: String,
}

///
/// RecordNode
///

pub struct RecordNode {
    pub ident: Ident,
    pub generics: Generics,
    pub init: Option<Path>,
    pub custom_repr: bool,
    pub fields: Vec<SchemaField>,
    pub skipped: Vec<Ident>,
}

impl RecordNode {
    pub fn from_input(input: RecordInput) -> Result<Self, Error> {
        let RecordInput {
            ident,
            generics,
            data,
            init,
            custom_repr,
        } = input;

        let inputs = data
            .take_struct()
            .map(|fields| fields.fields)
            .unwrap_or_default();

        let mut fields = Vec::new();
        let mut skipped = Vec::new();
        let mut seen: HashMap<String, Ident> = HashMap::new();

        for field in inputs {
            let Some(field_ident) = field.ident else {
                return Err(Error::new_spanned(
                    &field.ty,
                    "Record can only be derived for structs with named fields",
                ));
            };

            if field.skip {
                skipped.push(field_ident);
                continue;
            }

            let Some(inner) = option_inner(&field.ty).cloned() else {
                return Err(Error::new_spanned(
                    &field.ty,
                    "record fields must be `Option<T>`; mark derived storage with `#[record(skip)]`",
                ));
            };

            let name = match field.rename {
                Some(rename) if rename.is_empty() => {
                    return Err(Error::new_spanned(
                        &field_ident,
                        "record field rename must not be empty",
                    ));
                }
                Some(rename) => rename,
                None => field_ident.unraw_string(),
            };

            if let Some(prev) = seen.get(&name) {
                return Err(Error::new_spanned(
                    &field_ident,
                    format!("duplicate record field name `{name}` (already used by `{prev}`)"),
                ));
            }
            seen.insert(name.clone(), field_ident.clone());

            fields.push(SchemaField {
                label: type_label(&inner),
                ident: field_ident,
                name,
                ty: field.ty,
                inner,
            });
        }

        Ok(Self {
            ident,
            generics,
            init,
            custom_repr,
            fields,
            skipped,
        })
    }

    pub fn name(&self) -> String {
        self.ident.unraw_string()
    }
}

///
/// UnrawString
///

trait UnrawString {
    fn unraw_string(&self) -> String;
}

impl UnrawString for Ident {
    fn unraw_string(&self) -> String {
        let s = self.to_string();
        s.strip_prefix("r#").map_or_else(|| s.clone(), str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::{DeriveInput, parse_quote};

    fn node(input: DeriveInput) -> Result<RecordNode, Error> {
        let input = RecordInput::from_derive_input(&input).map_err(|e| {
            Error::new(proc_macro2::Span::call_site(), e.to_string())
        })?;

        RecordNode::from_input(input)
    }

    #[test]
    fn extracts_fields_in_declaration_order() {
        let node = node(parse_quote! {
            struct Point {
                y: Option<i64>,
                x: Option<i64>,
                #[record(skip)]
                norm: f64,
            }
        })
        .expect("valid record");

        let names: Vec<_> = node.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["y", "x"]);
        assert_eq!(node.skipped.len(), 1);
        assert_eq!(node.fields[0].label, "i64");
    }

    #[test]
    fn rename_changes_schema_name_only() {
        let node = node(parse_quote! {
            struct Row {
                #[record(rename = "type")]
                kind: Option<String>,
                r#ref: Option<u64>,
            }
        })
        .expect("valid record");

        assert_eq!(node.fields[0].name, "type");
        assert_eq!(node.fields[0].ident, "kind");
        assert_eq!(node.fields[1].name, "ref");
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = node(parse_quote! {
            struct Row {
                a: Option<i64>,
                #[record(rename = "a")]
                b: Option<i64>,
            }
        })
        .err()
        .expect("duplicate must be rejected");

        assert!(err.to_string().contains("duplicate record field name `a`"));
    }

    #[test]
    fn rejects_non_option_fields() {
        let err = node(parse_quote! {
            struct Row {
                a: i64,
            }
        })
        .err()
        .expect("non-option must be rejected");

        assert!(err.to_string().contains("must be `Option<T>`"));
    }

    #[test]
    fn parses_container_options() {
        let node = node(parse_quote! {
            #[record(init = "Self::finish", custom_repr)]
            struct Row {
                a: Option<i64>,
            }
        })
        .expect("valid record");

        assert!(node.custom_repr);
        assert!(node.init.is_some());
    }
}
