//! Depth-first XML serialization of a store snapshot.
//!
//! The produced text is the exchange format consumed by external tooling:
//! a `<CAS version="2">` root holding one `<uima.cas.Sofa>` element per
//! view, with the payload bytes as a nested binary-array element and the
//! dimension vector, when present, as the adjacent integer-array element.
//! Views are written in sorted name order so equal stores produce equal
//! documents.

use tracing::info;

use mvcas_store::{CasStore, View};

use crate::error::ExportResult;
use crate::strip::{
    strip_binary_arrays, BYTE_ARRAY_CLOSE, BYTE_ARRAY_OPEN, INTEGER_ARRAY_CLOSE,
    INTEGER_ARRAY_OPEN,
};

/// Serialization options.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// When `false`, binary-array and adjacent integer-array element blocks
    /// are stripped from the produced text.
    pub include_binary_payloads: bool,
    /// Emit the leading XML declaration.
    pub xml_declaration: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_binary_payloads: true,
            xml_declaration: true,
        }
    }
}

impl ExportOptions {
    /// Options for a size-constrained export without binary payloads.
    pub fn without_binary_payloads() -> Self {
        Self {
            include_binary_payloads: false,
            ..Self::default()
        }
    }
}

/// Serialize the whole store to exchange-format text.
pub fn serialize(store: &CasStore, options: &ExportOptions) -> ExportResult<String> {
    info!("serializing store to xml");
    let views = store.views()?;

    let mut out = String::new();
    if options.xml_declaration {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }
    out.push_str("<CAS version=\"2\">\n");
    for view in &views {
        write_view(&mut out, view);
    }
    out.push_str("</CAS>\n");

    let out = if options.include_binary_payloads {
        out
    } else {
        strip_binary_arrays(&out)?
    };
    info!(views = views.len(), "serialization finished");
    Ok(out)
}

fn write_view(out: &mut String, view: &View) {
    out.push_str("  <uima.cas.Sofa sofaID=\"");
    out.push_str(&escape_attr(view.name()));
    out.push('"');
    if let Some(tag) = view.tag() {
        out.push_str(" mimeType=\"");
        out.push_str(&escape_attr(tag.as_str()));
        out.push('"');
    }

    match view.payload() {
        None => out.push_str("/>\n"),
        Some(payload) => {
            out.push_str(">\n    ");
            out.push_str(BYTE_ARRAY_OPEN);
            out.push_str(&format!(" size=\"{}\">", payload.len()));
            out.push_str(&join_values(payload.bytes()));
            out.push_str(BYTE_ARRAY_CLOSE);
            out.push('\n');

            if !payload.dims().is_empty() {
                out.push_str("    ");
                out.push_str(INTEGER_ARRAY_OPEN);
                out.push_str(&format!(" size=\"{}\">", payload.dims().len()));
                out.push_str(&join_values(payload.dims()));
                out.push_str(INTEGER_ARRAY_CLOSE);
                out.push('\n');
            }
            out.push_str("  </uima.cas.Sofa>\n");
        }
    }
}

/// Space-separated decimal rendering of an array body.
fn join_values<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
