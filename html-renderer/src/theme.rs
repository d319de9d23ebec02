//! FILENAME: html-renderer/src/theme.rs
//! PURPOSE: Markup blocks a table is rendered with.
//! CONTEXT: Every block receives already-rendered inner HTML. Cell blocks
//! also get the span attributes (e.g. ` colspan="2"`), which are empty for
//! single cells. The default blocks produce unstyled markup; themes only
//! override what they style.

use crate::error::RenderError;

pub trait Theme: Send + Sync {
    fn name(&self) -> &str;

    fn table(&self, sections: &str) -> String {
        format!("<table>{}</table>", sections)
    }

    fn thead(&self, rows: &str) -> String {
        format!("<thead>{}</thead>", rows)
    }

    fn tbody(&self, rows: &str) -> String {
        format!("<tbody>{}</tbody>", rows)
    }

    fn tfoot(&self, rows: &str) -> String {
        format!("<tfoot>{}</tfoot>", rows)
    }

    fn tr(&self, cells: &str) -> String {
        format!("<tr>{}</tr>", cells)
    }

    /// Header cell: legends and members.
    fn th(&self, content: &str, spans: &str) -> String {
        format!("<th{}>{}</th>", spans, content)
    }

    /// Data cell.
    fn td(&self, content: &str, spans: &str) -> String {
        format!("<td{}>{}</td>", spans, content)
    }

    /// Subtotal cell.
    fn tf(&self, content: &str, spans: &str) -> String {
        format!("<td class=\"subtotal\"{}>{}</td>", spans, content)
    }

    fn label(&self, html: &str) -> String {
        html.to_string()
    }

    fn member(&self, html: &str) -> String {
        html.to_string()
    }

    fn value(&self, html: &str) -> String {
        html.to_string()
    }

    /// Inline error block. `message` is plain text.
    fn error(&self, message: &str) -> String {
        format!("<div class=\"error\">{}</div>", html_escape::encode_text(message))
    }
}

/// Unstyled markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTheme;

impl Theme for PlainTheme {
    fn name(&self) -> &str {
        PLAIN
    }
}

/// Bootstrap 5 table classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap5Theme;

impl Theme for Bootstrap5Theme {
    fn name(&self) -> &str {
        BOOTSTRAP5
    }

    fn table(&self, sections: &str) -> String {
        format!(
            "<div class=\"table-responsive\"><table class=\"table table-sm table-bordered table-hover\">{}</table></div>",
            sections
        )
    }

    fn thead(&self, rows: &str) -> String {
        format!("<thead class=\"table-light\">{}</thead>", rows)
    }

    fn tfoot(&self, rows: &str) -> String {
        format!("<tfoot class=\"table-group-divider\">{}</tfoot>", rows)
    }

    fn th(&self, content: &str, spans: &str) -> String {
        format!("<th scope=\"col\" class=\"align-middle\"{}>{}</th>", spans, content)
    }

    fn td(&self, content: &str, spans: &str) -> String {
        format!("<td class=\"text-end\"{}>{}</td>", spans, content)
    }

    fn tf(&self, content: &str, spans: &str) -> String {
        format!("<td class=\"text-end fw-semibold table-secondary\"{}>{}</td>", spans, content)
    }

    fn label(&self, html: &str) -> String {
        format!("<span class=\"fw-bold\">{}</span>", html)
    }

    fn error(&self, message: &str) -> String {
        format!(
            "<div class=\"alert alert-danger\" role=\"alert\">{}</div>",
            html_escape::encode_text(message)
        )
    }
}

pub const PLAIN: &str = "plain";
pub const BOOTSTRAP5: &str = "bootstrap5";

/// Built-in theme by name.
pub fn theme_by_name(name: &str) -> Result<Box<dyn Theme>, RenderError> {
    match name {
        PLAIN => Ok(Box::new(PlainTheme)),
        BOOTSTRAP5 | "bootstrap" => Ok(Box::new(Bootstrap5Theme)),
        _ => Err(RenderError::UnknownTheme(name.to_string())),
    }
}
