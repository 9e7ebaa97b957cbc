use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Path};

use crate::MODEL_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// RenameRule

/// Case conversion applied to enum variant names by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Snake,
    ScreamingSnake,
    Kebab,
}

impl RenameRule {
    const NAMES: &'static [(&'static str, RenameRule)] = &[
        ("lowercase", RenameRule::Lower),
        ("UPPERCASE", RenameRule::Upper),
        ("snake_case", RenameRule::Snake),
        ("SCREAMING_SNAKE_CASE", RenameRule::ScreamingSnake),
        ("kebab-case", RenameRule::Kebab),
    ];

    fn parse(lit: &LitStr) -> syn::Result<Self> {
        let value = lit.value();
        Self::NAMES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rule)| *rule)
            .ok_or_else(|| {
                let expected: Vec<&str> = Self::NAMES.iter().map(|(name, _)| *name).collect();
                syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule `{value}`, expected one of: {}", expected.join(", ")),
                )
            })
    }

    /// Converts a `PascalCase` variant identifier.
    pub fn apply(self, variant: &str) -> String {
        match self {
            Self::Lower => variant.to_ascii_lowercase(),
            Self::Upper => variant.to_ascii_uppercase(),
            Self::Snake => snake_case(variant),
            Self::ScreamingSnake => snake_case(variant).to_ascii_uppercase(),
            Self::Kebab => snake_case(variant).replace('_', "-"),
        }
    }
}

fn snake_case(pascal: &str) -> String {
    let mut out = String::with_capacity(pascal.len() + 4);
    for (index, ch) in pascal.char_indices() {
        if ch.is_uppercase() && index > 0 {
            out.push('_');
        }
        out.push(ch.to_ascii_lowercase());
    }
    out
}

// -----------------------------------------------------------------------------
// Helpers

fn is_model_attr(attr: &Attribute) -> bool {
    attr.path().is_ident(MODEL_ATTRIBUTE_NAME)
}

fn parse_str(meta: &ParseNestedMeta) -> syn::Result<LitStr> {
    meta.value()?.parse::<LitStr>()
}

fn duplicate(meta: &ParseNestedMeta, key: &str) -> syn::Error {
    meta.error(format!("duplicate `{key}` attribute"))
}

/// Collects `///` comments into one description.
///
/// Every line is trimmed; leading and trailing blank lines are dropped.
fn collect_docs(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut lines = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("doc")) {
        let syn::Meta::NameValue(pair) = &attr.meta else {
            continue;
        };
        match &pair.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(lit), ..
            }) => lines.push(lit.value().trim().to_owned()),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "`#[doc = ...]` expected a string literal value",
                ));
            }
        }
    }

    let text = lines.join("\n");
    let text = text.trim();
    Ok((!text.is_empty()).then(|| text.to_owned()))
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes placed on the deriving type.
///
/// - `#[model(singleton)]`: models only.
/// - `#[model(rename_all = "...")]`: enums only.
/// - `#[model(crate_path = "...")]`: path of the `vc_model` crate, for
///   callers that only depend on a crate re-exporting it.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub singleton: Option<Span>,
    pub rename_all: Option<(Span, RenameRule)>,
    pub crate_path: Option<Path>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| is_model_attr(a)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("singleton") {
                    if this.singleton.is_some() {
                        return Err(duplicate(&meta, "singleton"));
                    }
                    this.singleton = Some(meta.path.require_ident()?.span());
                } else if meta.path.is_ident("rename_all") {
                    if this.rename_all.is_some() {
                        return Err(duplicate(&meta, "rename_all"));
                    }
                    let lit = parse_str(&meta)?;
                    this.rename_all = Some((lit.span(), RenameRule::parse(&lit)?));
                } else if meta.path.is_ident("crate_path") {
                    if this.crate_path.is_some() {
                        return Err(duplicate(&meta, "crate_path"));
                    }
                    this.crate_path = Some(parse_str(&meta)?.parse::<Path>()?);
                } else {
                    return Err(meta.error(
                        "unknown type attribute, expected `singleton`, `rename_all` or `crate_path`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(this)
    }

    /// Path of the `vc_model` crate as seen from the deriving crate.
    pub fn crate_path(&self) -> Path {
        match &self.crate_path {
            Some(path) => path.clone(),
            None => syn::parse_quote!(::vc_model),
        }
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes placed on a model field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub rename: Option<LitStr>,
    pub description: Option<String>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        let mut custom_description = None;

        for attr in attrs.iter().filter(|a| is_model_attr(a)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    if this.skip {
                        return Err(duplicate(&meta, "skip"));
                    }
                    this.skip = true;
                } else if meta.path.is_ident("rename") {
                    if this.rename.is_some() {
                        return Err(duplicate(&meta, "rename"));
                    }
                    let lit = parse_str(&meta)?;
                    if lit.value().is_empty() || lit.value().contains('.') {
                        return Err(syn::Error::new(
                            lit.span(),
                            "a stored name must be non-empty and must not contain `.`",
                        ));
                    }
                    this.rename = Some(lit);
                } else if meta.path.is_ident("description") {
                    if custom_description.is_some() {
                        return Err(duplicate(&meta, "description"));
                    }
                    custom_description = Some(parse_str(&meta)?.value());
                } else {
                    return Err(meta.error(
                        "unknown field attribute, expected `skip`, `rename` or `description`",
                    ));
                }
                Ok(())
            })?;
        }

        this.description = match custom_description {
            Some(text) => Some(text),
            None => collect_docs(attrs)?,
        };
        Ok(this)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// Attributes placed on an enum variant.
#[derive(Default)]
pub(crate) struct VariantAttributes {
    pub rename: Option<LitStr>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs.iter().filter(|a| is_model_attr(a)) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if this.rename.is_some() {
                        return Err(duplicate(&meta, "rename"));
                    }
                    this.rename = Some(parse_str(&meta)?);
                } else {
                    return Err(meta.error("unknown variant attribute, expected `rename`"));
                }
                Ok(())
            })?;
        }
        Ok(this)
    }
}

#[cfg(test)]
mod tests {
    use super::{RenameRule, collect_docs};

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::Lower.apply("ReadWrite"), "readwrite");
        assert_eq!(RenameRule::Upper.apply("ReadWrite"), "READWRITE");
        assert_eq!(RenameRule::Snake.apply("ReadWrite"), "read_write");
        assert_eq!(RenameRule::ScreamingSnake.apply("ReadWrite"), "READ_WRITE");
        assert_eq!(RenameRule::Kebab.apply("ReadWrite"), "read-write");
        assert_eq!(RenameRule::Snake.apply("Red"), "red");
    }

    #[test]
    fn docs_are_trimmed_and_joined() {
        let field: syn::Field = syn::parse_quote! {
            /// Maximum number of retries.
            ///
            ///   Zero disables retrying.
            pub retries: u32
        };
        let docs = collect_docs(&field.attrs).unwrap();
        assert_eq!(
            docs.as_deref(),
            Some("Maximum number of retries.\n\nZero disables retrying.")
        );
    }

    #[test]
    fn blank_docs_are_none() {
        let field: syn::Field = syn::parse_quote! {
            ///
            pub retries: u32
        };
        assert_eq!(collect_docs(&field.attrs).unwrap(), None);
    }
}
