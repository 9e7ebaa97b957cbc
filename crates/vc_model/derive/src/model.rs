use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, Member, Type};

use crate::attributes::{FieldAttributes, TypeAttributes};
use crate::path;

/// A field that is part of the stored representation.
struct ActiveField<'a> {
    member: Member,
    ty: &'a Type,
    name: String,
    description: Option<String>,
}

pub(crate) fn impl_model(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
    if let Some((span, _)) = attrs.rename_all {
        return Err(syn::Error::new(span, "`rename_all` is only supported on enums"));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`Model` cannot be derived for generic types",
        ));
    }

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Model` can only be derived for structs with named fields",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            &data.fields,
            "`Model` can only be derived for structs with named fields",
        ));
    };

    let mut fields: Vec<ActiveField> = Vec::with_capacity(named.named.len());
    for field in &named.named {
        let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
        if field_attrs.skip {
            continue;
        }
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let name = match &field_attrs.rename {
            Some(lit) => lit.value(),
            None => ident.to_string(),
        };
        if fields.iter().any(|f| f.name == name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("another field is already stored as `{name}`"),
            ));
        }
        fields.push(ActiveField {
            member: Member::Named(ident.clone()),
            ty: &field.ty,
            name,
            description: field_attrs.description,
        });
    }

    Ok(expand(&input.ident, &attrs, &fields))
}

fn expand(ident: &Ident, attrs: &TypeAttributes, fields: &[ActiveField]) -> TokenStream {
    let vc_model_path = attrs.crate_path();
    let configurable_ = path::configurable_(&vc_model_path);
    let model_ = path::model_(&vc_model_path);
    let type_descriptor_ = path::type_descriptor_(&vc_model_path);
    let field_info_ = path::field_info_(&vc_model_path);
    let model_info_ = path::model_info_(&vc_model_path);
    let model_kind_ = path::model_kind_(&vc_model_path);
    let cast_fns = path::cast_fns(&vc_model_path, "Object");

    let kind = if attrs.singleton.is_some() {
        quote!(#model_kind_::Singleton)
    } else {
        quote!(#model_kind_::Value)
    };

    let len = fields.len();
    let field_infos = fields.iter().map(|field| {
        let ty = field.ty;
        let name = &field.name;
        let description = field
            .description
            .as_ref()
            .map(|text| quote!(.with_description(#text)));
        quote! {
            #field_info_::new::<#ty>(#name) #description
        }
    });

    let indices = 0..len;
    let members: Vec<&Member> = fields.iter().map(|f| &f.member).collect();
    let indices_mut = 0..len;

    quote! {
        const _: () = {
            static FIELDS: [#field_info_; #len] = [#(#field_infos),*];
            static INFO: #model_info_ = #model_info_::new::<#ident>(#kind, &FIELDS);

            impl #configurable_ for #ident {
                #[inline]
                fn descriptor() -> #type_descriptor_ {
                    #type_descriptor_::Object(<Self as #model_>::info)
                }

                #cast_fns
            }

            impl #model_ for #ident {
                #[inline]
                fn info() -> &'static #model_info_ {
                    &INFO
                }

                #[inline]
                fn model_info(&self) -> &'static #model_info_ {
                    &INFO
                }

                fn field(&self, index: usize) -> ::core::option::Option<&dyn #configurable_> {
                    match index {
                        #(#indices => ::core::option::Option::Some(&self.#members as &dyn #configurable_),)*
                        _ => ::core::option::Option::None,
                    }
                }

                fn field_mut(&mut self, index: usize) -> ::core::option::Option<&mut dyn #configurable_> {
                    match index {
                        #(#indices_mut => ::core::option::Option::Some(&mut self.#members as &mut dyn #configurable_),)*
                        _ => ::core::option::Option::None,
                    }
                }

                #[inline]
                fn reset(&mut self) {
                    *self = <Self as ::core::default::Default>::default();
                }
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::impl_model;

    fn error_of(input: syn::DeriveInput) -> String {
        match impl_model(&input) {
            Ok(_) => String::new(),
            Err(err) => err.to_string(),
        }
    }

    #[test]
    fn named_structs_only() {
        assert!(error_of(syn::parse_quote!(struct Pair(u32, u32);)).contains("named fields"));
        assert!(error_of(syn::parse_quote!(enum Mode { A })).contains("named fields"));
        assert!(error_of(syn::parse_quote!(struct Wrap<T> { inner: T })).contains("generic"));
    }

    #[test]
    fn stored_names_are_unique() {
        let err = error_of(syn::parse_quote! {
            struct Limits {
                max: u32,
                #[model(rename = "max")]
                upper: u32,
            }
        });
        assert!(err.contains("already stored as `max`"));
    }

    #[test]
    fn skipped_fields_are_not_listed() {
        let input: syn::DeriveInput = syn::parse_quote! {
            #[model(singleton, crate_path = "vc_config::model")]
            struct Cache {
                size: u32,
                #[model(skip)]
                hits: u64,
            }
        };
        let tokens = impl_model(&input).unwrap().to_string();
        assert!(tokens.contains("\"size\""));
        assert!(!tokens.contains("\"hits\""));
        assert!(tokens.contains("vc_config :: model :: info :: ModelKind :: Singleton"));
    }

    #[test]
    fn unknown_attribute_is_rejected() {
        let err = error_of(syn::parse_quote! {
            struct Limits {
                #[model(default = 3)]
                max: u32,
            }
        });
        assert!(err.contains("unknown field attribute"));
    }
}
