use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attributes::{TypeAttributes, VariantAttributes};
use crate::path;

pub(crate) fn impl_config_enum(input: &DeriveInput) -> syn::Result<TokenStream> {
    let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
    if let Some(span) = attrs.singleton {
        return Err(syn::Error::new(span, "`singleton` is only supported on structs"));
    }
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`ConfigEnum` cannot be derived for generic types",
        ));
    }
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`ConfigEnum` can only be derived for enums",
        ));
    };
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`ConfigEnum` requires at least one variant",
        ));
    }

    let rename_all = attrs.rename_all.map(|(_, rule)| rule);
    let mut idents = Vec::with_capacity(data.variants.len());
    let mut names: Vec<String> = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "`ConfigEnum` variants cannot carry data",
            ));
        }
        let variant_attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
        let name = match (&variant_attrs.rename, rename_all) {
            (Some(lit), _) => lit.value(),
            (None, Some(rule)) => rule.apply(&variant.ident.to_string()),
            (None, None) => variant.ident.to_string(),
        };
        if names.contains(&name) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("another variant is already stored as `{name}`"),
            ));
        }
        idents.push(&variant.ident);
        names.push(name);
    }

    let vc_model_path = attrs.crate_path();
    let configurable_ = path::configurable_(&vc_model_path);
    let config_enum_ = path::config_enum_(&vc_model_path);
    let type_descriptor_ = path::type_descriptor_(&vc_model_path);
    let enum_info_ = path::enum_info_(&vc_model_path);
    let cast_fns = path::cast_fns(&vc_model_path, "Enum");

    let ident = &input.ident;
    let len = names.len();

    Ok(quote! {
        const _: () = {
            static VARIANTS: [&str; #len] = [#(#names),*];
            static INFO: #enum_info_ = #enum_info_::new::<#ident>(&VARIANTS);

            impl #configurable_ for #ident {
                #[inline]
                fn descriptor() -> #type_descriptor_ {
                    #type_descriptor_::Enum(&INFO)
                }

                #cast_fns
            }

            impl #config_enum_ for #ident {
                #[inline]
                fn enum_info() -> &'static #enum_info_ {
                    &INFO
                }

                fn variant_name(&self) -> &'static str {
                    match self {
                        #(Self::#idents => #names,)*
                    }
                }

                fn from_variant_name(name: &str) -> ::core::option::Option<Self> {
                    match name {
                        #(#names => ::core::option::Option::Some(Self::#idents),)*
                        _ => ::core::option::Option::None,
                    }
                }
            }
        };
    })
}
