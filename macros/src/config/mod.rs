//! `#[derive(Config)]`: field paths plus a commented TOML template.

mod attr;
mod field;
mod template;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

use attr::{ConfigAttrs, doc_comment};
use field::FieldInfo;
use template::generate_template_code;

pub fn derive(input: &DeriveInput) -> TokenStream {
    expand(input).unwrap_or_else(syn::Error::into_compile_error)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields_struct = format_ident!("{}Fields", name);

    let section = ConfigAttrs::parse(&input.attrs)?.section.ok_or_else(|| {
        syn::Error::new_spanned(name, "missing #[config(section = \"...\")], use \"\" for the root table")
    })?;
    let section_doc = doc_comment(&input.attrs).unwrap_or_default();

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(syn::Error::new_spanned(name, "Config needs named fields")),
        },
        _ => return Err(syn::Error::new_spanned(name, "Config only works on structs")),
    };
    let fields = named
        .iter()
        .map(FieldInfo::from_field)
        .collect::<syn::Result<Vec<_>>>()?;

    let path_defs = fields.iter().map(|f| {
        let ident = &f.ident;
        quote! { pub #ident: crate::config::FieldPath, }
    });
    let path_inits = fields.iter().map(|f| {
        let ident = &f.ident;
        let path = match section.as_str() {
            "" => f.key(),
            section => format!("{section}.{}", f.key()),
        };
        quote! { #ident: crate::config::FieldPath::new(#path), }
    });
    let template_code = generate_template_code(&fields);

    Ok(quote! {
        /// Dotted TOML paths of each field.
        pub struct #fields_struct {
            #(#path_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct = #fields_struct {
                #(#path_inits)*
            };

            /// TOML table this struct lives in (`""` is the root).
            pub const TEMPLATE_SECTION: &'static str = #section;

            /// Struct doc, rendered above the table header.
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// This value as commented `key = value` lines.
            pub fn template(&self) -> String {
                let mut out = String::new();
                #template_code
                out
            }

            /// [`Self::template`] preceded by the struct doc and table header.
            pub fn template_with_header(&self) -> String {
                let mut out: String = Self::TEMPLATE_DOC
                    .lines()
                    .map(|line| format!("# {}\n", line.trim()))
                    .collect();
                if !Self::TEMPLATE_SECTION.is_empty() {
                    out.push_str(&format!("[{}]\n", Self::TEMPLATE_SECTION));
                }
                out.push_str(&self.template());
                out
            }
        }
    })
}
