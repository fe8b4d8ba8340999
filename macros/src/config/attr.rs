//! `#[config(...)]` and doc attribute parsing.

use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

/// Keys accepted inside `#[config(...)]`.
#[derive(Default)]
pub struct ConfigAttrs {
    /// `section = "path"`, struct level.
    pub section: Option<String>,
    /// `inline_doc`, field level.
    pub inline_doc: bool,
    /// `sub`, field level.
    pub sub: bool,
}

impl ConfigAttrs {
    /// Collect every `#[config(...)]` attribute, rejecting unknown keys.
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("section") {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.section = Some(lit.value());
                } else if meta.path.is_ident("inline_doc") {
                    out.inline_doc = true;
                } else if meta.path.is_ident("sub") {
                    out.sub = true;
                } else {
                    return Err(meta.error("unknown config attribute"));
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

/// `///` lines joined and trimmed, `None` when there are none.
pub fn doc_comment(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value()),
                _ => None,
            },
            _ => None,
        })
        .collect();

    let doc = lines.join("\n");
    let doc = doc.trim();
    (!doc.is_empty()).then(|| doc.to_string())
}
