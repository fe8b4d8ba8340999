//! Code generation for `template()`.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;

/// Statements appending each field's TOML lines to `out`.
pub fn generate_template_code(fields: &[FieldInfo]) -> TokenStream {
    let statements = fields.iter().map(field_statements);
    quote! { #(#statements)* }
}

fn field_statements(info: &FieldInfo) -> TokenStream {
    let ident = &info.ident;

    // A nested table is headed by its own struct doc
    if info.attrs.sub {
        return quote! {
            out.push('\n');
            out.push_str(&self.#ident.template_with_header());
        };
    }

    let key = info.key();
    let trailing = info.trailing_doc();
    let leading: String = match (&info.doc, trailing) {
        (Some(doc), None) => doc.lines().map(|l| format!("# {}\n", l.trim())).collect(),
        _ => String::new(),
    };
    let line_end = match trailing {
        Some(doc) => format!("  # {doc}\n"),
        None => "\n".to_string(),
    };

    quote! {
        out.push_str(#leading);
        out.push_str(#key);
        out.push_str(" = ");
        if let Ok(value) = toml::Value::try_from(self.#ident.clone()) {
            out.push_str(&value.to_string());
        }
        out.push_str(#line_end);
    }
}
