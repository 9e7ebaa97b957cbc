//! Paths of the `vc_model` items named by generated code.
//!
//! Every helper takes the crate path resolved from the type attributes, so
//! the generated code also works through a re-exporting crate.

use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn configurable_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::Configurable
    }
}

#[inline(always)]
pub(crate) fn model_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::Model
    }
}

#[inline(always)]
pub(crate) fn config_enum_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::ConfigEnum
    }
}

#[inline(always)]
pub(crate) fn type_descriptor_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::info::TypeDescriptor
    }
}

#[inline(always)]
pub(crate) fn field_info_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn model_info_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::info::ModelInfo
    }
}

#[inline(always)]
pub(crate) fn model_kind_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::info::ModelKind
    }
}

#[inline(always)]
pub(crate) fn enum_info_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::info::EnumInfo
    }
}

#[inline(always)]
pub(crate) fn config_ref_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::ops::ConfigRef
    }
}

#[inline(always)]
pub(crate) fn config_mut_(vc_model_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_model_path::ops::ConfigMut
    }
}

/// Implements `config_ref` and `config_mut` casting to a single variant.
pub(crate) fn cast_fns(vc_model_path: &syn::Path, variant: &str) -> TokenStream {
    let config_ref_ = config_ref_(vc_model_path);
    let config_mut_ = config_mut_(vc_model_path);
    let variant = syn::Ident::new(variant, proc_macro2::Span::call_site());

    quote! {
        #[inline]
        fn config_ref(&self) -> #config_ref_<'_> {
            #config_ref_::#variant(self)
        }

        #[inline]
        fn config_mut(&mut self) -> #config_mut_<'_> {
            #config_mut_::#variant(self)
        }
    }
}
