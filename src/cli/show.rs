//! `show` command: print the active record.

use crate::config::{AuthorMetadata, FieldPath, MetadataSource, SiteMetadata};
use crate::logger::paint;
use owo_colors::{Stream, Style};

/// Field paths paired with their values, in record order.
pub fn field_rows(meta: &SiteMetadata) -> [(FieldPath, &str); 7] {
    [
        (SiteMetadata::FIELDS.title, meta.title.as_str()),
        (SiteMetadata::FIELDS.url, meta.url.as_str()),
        (SiteMetadata::FIELDS.language, meta.language.as_str()),
        (SiteMetadata::FIELDS.description, meta.description.as_str()),
        (AuthorMetadata::FIELDS.name, meta.author.name.as_str()),
        (AuthorMetadata::FIELDS.email, meta.author.email.as_str()),
        (AuthorMetadata::FIELDS.url, meta.author.url.as_str()),
    ]
}

pub fn show_metadata(meta: &SiteMetadata, source: &MetadataSource) {
    let rows = field_rows(meta);
    let width = rows.iter().map(|(f, _)| f.as_str().len()).max().unwrap_or(0);

    println!("{} {}", paint("source", Style::new().dimmed(), Stream::Stdout), source);
    for (field, value) in rows {
        // Pad before styling so escape codes do not count toward the width
        let label = format!("{:<width$}", field.as_str());
        println!("{}  {}", paint(label, Style::new().cyan(), Stream::Stdout), value);
    }
}
