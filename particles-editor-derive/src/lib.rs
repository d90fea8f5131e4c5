//! Derive macro for particles-editor option sections.
//!
//! `#[derive(Section)]` turns an options struct into a section composer: it
//! adds a group for the struct, binds every field to a widget and recurses
//! into nested sections and lists.
//!
//! # Usage
//!
//! The macro is re-exported from the main `particles_editor` crate:
//!
//! ```ignore
//! use particles_editor::prelude::*;
//!
//! #[derive(Section, Default)]
//! struct Links {
//!     #[editor(section)]
//!     shadow: Shadow,
//!     #[editor(color)]
//!     color: Option<ColorField>,
//!     enable: bool,
//!     #[editor(step = 0.01, min = 0.0, max = 1.0)]
//!     opacity: f64,
//! }
//! ```
//!
//! # Field attributes
//!
//! - `key = "..."` - property or group key (default: camelCase field name)
//! - `label = "..."` - display label (default: Title Case field name)
//! - `color` - bind through the color normalizer
//! - `section` - compose the field's type as a nested group
//! - `expanded` - nested group starts open
//! - `list(item, item_label, add, add_label, default)` - one group per element
//!   of a `Vec` plus an add button
//! - `step`, `min`, `max` - numeric widget constraints
//! - `skip` - leave the field out of the editor
//!
//! Fields without `color`, `section` or `list` are plain properties. Their
//! widget kind comes from the field type (`bool`, `f64`, `String`, or an
//! `Option` of those).

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{
    parse_macro_input, Data, DeriveInput, Fields, GenericArgument, Ident, Lit, LitStr, Path,
    PathArguments, Type,
};

/// Derive an editor section composer.
///
/// # Panics
///
/// The macro panics at compile time if:
/// - Applied to an enum, a union or a tuple struct
/// - An `#[editor(...)]` attribute is malformed
/// - `list` is used on a field that is not a `Vec<T>`
/// - A field combines `color`, `section` and `list`
#[proc_macro_derive(Section, attributes(editor))]
pub fn derive_section(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Section derive only supports structs with named fields"),
        },
        _ => panic!("Section derive only supports structs"),
    };

    let mut bindings = Vec::new();

    for field in fields.iter() {
        let field_name = field.ident.as_ref().unwrap();
        let attrs = FieldAttrs::parse(field_name, &field.attrs);
        if attrs.skip {
            continue;
        }

        let bare_name = field_name.to_string();
        let bare_name = bare_name.trim_start_matches("r#");
        let key = attrs.key.clone().unwrap_or_else(|| camel_case(bare_name));
        let label = attrs.label.clone().unwrap_or_else(|| title_case(bare_name));
        let focus = quote! { lens.field(|s: &mut Self| &mut s.#field_name) };
        let constraints = attrs.constraints();

        let binding = match attrs.kind {
            FieldKind::Property => {
                quote! {
                    ::particles_editor::bind_property(cx, group, #key, #label, #focus)
                        #constraints;
                }
            }
            FieldKind::Color => {
                quote! {
                    ::particles_editor::bind_color(cx, group, #key, #label, #focus)
                        #constraints;
                }
            }
            FieldKind::Section => {
                let ty = &field.ty;
                let expanded = attrs.expanded.then(|| quote! { .expanded() });
                quote! {
                    <#ty as ::particles_editor::Section>::compose(
                        cx,
                        group,
                        ::particles_editor::Header::new(#key, #label) #expanded,
                        #focus,
                    );
                }
            }
            FieldKind::List(list) => {
                let element = vec_element(&field.ty).unwrap_or_else(|| {
                    panic!("#[editor(list)] field `{}` must be a Vec<T>", field_name)
                });
                let expanded = attrs.expanded.then(|| quote! { .expanded() });
                let item = list.item.unwrap_or_else(|| "item".to_string());
                let item_label = list.item_label.unwrap_or_else(|| title_case(&item));
                let add = list.add.unwrap_or_else(|| "add".to_string());
                let add_label = list.add_label.unwrap_or_else(|| title_case(&add));
                let default = match list.default {
                    Some(path) => quote! { #path },
                    None => quote! { <#element as ::core::default::Default>::default },
                };
                quote! {
                    ::particles_editor::build_list(
                        cx,
                        group,
                        ::particles_editor::Header::new(#key, #label) #expanded,
                        #focus,
                        ::particles_editor::ListSpec::new(#item, #item_label)
                            .add_button(#add, #add_label),
                        <#element as ::particles_editor::Section>::compose::<__O>,
                        #default,
                    );
                }
            }
        };

        bindings.push(binding);
    }

    let expanded = quote! {
        impl #impl_generics ::particles_editor::Section for #name #ty_generics #where_clause {
            fn compose<__O: 'static>(
                cx: &mut ::particles_editor::EditorCx<'_, __O>,
                parent: ::particles_editor::GroupId,
                header: ::particles_editor::Header,
                lens: ::particles_editor::Lens<__O, Self>,
            ) -> ::particles_editor::GroupId {
                let group = cx.add_group(parent, header);
                #(#bindings)*
                group
            }
        }
    };

    TokenStream::from(expanded)
}

enum FieldKind {
    Property,
    Color,
    Section,
    List(ListAttrs),
}

#[derive(Default)]
struct ListAttrs {
    item: Option<String>,
    item_label: Option<String>,
    add: Option<String>,
    add_label: Option<String>,
    default: Option<Path>,
}

struct FieldAttrs {
    key: Option<String>,
    label: Option<String>,
    kind: FieldKind,
    expanded: bool,
    skip: bool,
    step: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl FieldAttrs {
    fn parse(field_name: &Ident, attrs: &[syn::Attribute]) -> Self {
        let mut parsed = FieldAttrs {
            key: None,
            label: None,
            kind: FieldKind::Property,
            expanded: false,
            skip: false,
            step: None,
            min: None,
            max: None,
        };

        for attr in attrs.iter().filter(|a| a.path().is_ident("editor")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("key") {
                    parsed.key = Some(string_value(&meta)?);
                } else if meta.path.is_ident("label") {
                    parsed.label = Some(string_value(&meta)?);
                } else if meta.path.is_ident("color") {
                    parsed.set_kind(field_name, FieldKind::Color);
                } else if meta.path.is_ident("section") {
                    parsed.set_kind(field_name, FieldKind::Section);
                } else if meta.path.is_ident("list") {
                    let mut list = ListAttrs::default();
                    if meta.input.peek(syn::token::Paren) {
                        meta.parse_nested_meta(|inner| {
                            if inner.path.is_ident("item") {
                                list.item = Some(string_value(&inner)?);
                            } else if inner.path.is_ident("item_label") {
                                list.item_label = Some(string_value(&inner)?);
                            } else if inner.path.is_ident("add") {
                                list.add = Some(string_value(&inner)?);
                            } else if inner.path.is_ident("add_label") {
                                list.add_label = Some(string_value(&inner)?);
                            } else if inner.path.is_ident("default") {
                                list.default = Some(inner.value()?.parse()?);
                            } else {
                                return Err(inner.error("unknown list attribute"));
                            }
                            Ok(())
                        })?;
                    }
                    parsed.set_kind(field_name, FieldKind::List(list));
                } else if meta.path.is_ident("expanded") {
                    parsed.expanded = true;
                } else if meta.path.is_ident("skip") {
                    parsed.skip = true;
                } else if meta.path.is_ident("step") {
                    parsed.step = Some(number_value(&meta)?);
                } else if meta.path.is_ident("min") {
                    parsed.min = Some(number_value(&meta)?);
                } else if meta.path.is_ident("max") {
                    parsed.max = Some(number_value(&meta)?);
                } else {
                    return Err(meta.error("unknown editor attribute"));
                }
                Ok(())
            })
            .unwrap_or_else(|err| panic!("invalid #[editor] on `{}`: {}", field_name, err));
        }

        parsed
    }

    fn set_kind(&mut self, field_name: &Ident, kind: FieldKind) {
        if !matches!(self.kind, FieldKind::Property) {
            panic!(
                "field `{}` can only be one of `color`, `section` or `list`",
                field_name
            );
        }
        self.kind = kind;
    }

    fn constraints(&self) -> TokenStream2 {
        let step = self.step.map(|v| quote! { .step(#v) });
        let min = self.min.map(|v| quote! { .min(#v) });
        let max = self.max.map(|v| quote! { .max(#v) });
        quote! { #step #min #max }
    }
}

fn string_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

fn number_value(meta: &ParseNestedMeta) -> syn::Result<f64> {
    let lit: Lit = meta.value()?.parse()?;
    match lit {
        Lit::Float(lit) => lit.base10_parse(),
        Lit::Int(lit) => lit.base10_parse(),
        other => Err(syn::Error::new(other.span(), "expected a number")),
    }
}

/// `T` for a field of type `Vec<T>`.
fn vec_element(ty: &Type) -> Option<&Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first()? {
            GenericArgument::Type(element) => Some(element),
            _ => None,
        },
        _ => None,
    }
}

/// `fps_limit` -> `fpsLimit`
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `pause_on_blur` -> `Pause On Blur`, `addStage` -> `Add Stage`
fn title_case(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for c in name.chars() {
        if c == '_' || c == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if c.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.push(c);
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
