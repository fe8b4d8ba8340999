//! Per-field data gathered from the struct definition.

use crate::config::attr::{ConfigAttrs, doc_comment};

pub struct FieldInfo {
    pub ident: syn::Ident,
    pub doc: Option<String>,
    pub attrs: ConfigAttrs,
}

impl FieldInfo {
    pub fn from_field(field: &syn::Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "Config fields must be named"))?;

        Ok(Self {
            ident,
            doc: doc_comment(&field.attrs),
            attrs: ConfigAttrs::parse(&field.attrs)?,
        })
    }

    /// TOML key; always the Rust field name.
    pub fn key(&self) -> String {
        self.ident.to_string()
    }

    /// Doc rendered after the value, when `inline_doc` is set and it fits one line.
    pub fn trailing_doc(&self) -> Option<&str> {
        self.doc
            .as_deref()
            .filter(|d| self.attrs.inline_doc && !d.contains('\n'))
    }
}
