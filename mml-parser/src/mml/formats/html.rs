//! HTML renderer
//!
//! Emits a standalone HTML5 page, one element per line. Every piece of user text
//! and every attribute value goes through [escape], which covers `& < > " '`.
//!
//!     <title>    document title, or the fallback when absent or empty
//!     <meta>     one per global metadata entry
//!     <h1>       document title, omitted when absent or empty
//!     <h2>       one per section, followed by its children
//!
//! Global links are not rendered. They stay available in the tree and in JSON.

use crate::mml::ast::{ContentNode, Document, Image, Link};
use crate::mml::error::FormatError;
use crate::mml::formats::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
    /// `<title>` used when the document has none
    pub fallback_title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            lang: "en".to_string(),
            fallback_title: "MML Document".to_string(),
        }
    }
}

/// Escape text for element content and quoted attributes
pub fn escape(text: &str) -> String {
    html_escape::encode_quoted_attribute(text).into_owned()
}

pub fn to_html(doc: &Document) -> String {
    to_html_with(doc, &HtmlOptions::default())
}

pub fn to_html_with(doc: &Document, options: &HtmlOptions) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str(&format!("<html lang=\"{}\">\n", escape(&options.lang)));
    html.push_str("<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    let page_title = doc.display_title().unwrap_or(&options.fallback_title);
    html.push_str(&format!("    <title>{}</title>\n", escape(page_title)));
    for (name, content) in &doc.metadata {
        html.push_str(&format!(
            "    <meta name=\"{}\" content=\"{}\">\n",
            escape(name),
            escape(content)
        ));
    }
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    if let Some(title) = doc.display_title() {
        html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    }

    for section in &doc.sections {
        html.push_str(&format!("<h2>{}</h2>\n", escape(&section.title)));
        for node in &section.children {
            html.push_str(&render_node(node));
        }
    }

    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

fn render_node(node: &ContentNode) -> String {
    match node {
        ContentNode::Paragraph { content } => format!("<p>{}</p>\n", escape(content)),
        ContentNode::Quote { content } => {
            format!("<blockquote>{}</blockquote>\n", escape(content))
        }
        ContentNode::Code { content } => {
            format!("<pre><code>{}</code></pre>\n", escape(content))
        }
        ContentNode::Link(Link { text, url }) => {
            format!("<p><a href=\"{}\">{}</a></p>\n", escape(url), escape(text))
        }
        ContentNode::Image(Image { description, url }) => {
            let description = escape(description);
            format!(
                "<figure>\n  <img src=\"{}\" alt=\"{}\">\n  <figcaption>{}</figcaption>\n</figure>\n",
                escape(url),
                description,
                description
            )
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_html_with(doc, &self.options))
    }

    fn description(&self) -> &str {
        "Standalone HTML5 page"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mml::parsing::parse;

    #[test]
    fn test_escape_covers_all_specials() {
        let escaped = escape(r#"<a href="x">Tom & 'Jerry'</a>"#);
        for special in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(special), "{special} left in {escaped}");
        }
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&lt;a"));
    }

    #[test]
    fn test_fallback_title() {
        let html = to_html(&parse("H:Only a section"));
        assert!(html.contains("<title>MML Document</title>"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_empty_title_uses_fallback() {
        let html = to_html(&parse("T:\nH:S"));
        assert!(html.contains("<title>MML Document</title>"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_options() {
        let options = HtmlOptions {
            lang: "fr".to_string(),
            fallback_title: "Document MML".to_string(),
        };
        let html = to_html_with(&Document::new(), &options);
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("<title>Document MML</title>"));
    }

    #[test]
    fn test_global_metadata_becomes_meta_tags() {
        let html = to_html(&parse("M:author|Jane \"JD\" Doe\nH:S\nM:local|x"));
        assert!(html.contains("<meta name=\"author\" content=\"Jane &quot;JD&quot; Doe\">"));
        assert!(!html.contains("local"));
    }

    #[test]
    fn test_link_and_image_attributes_are_escaped() {
        let html = to_html(&parse("H:S\nL:a<b|https://x.org/?a=1&b=2\nIMG:Map \"1\"|m.png"));
        assert!(html.contains("<a href=\"https://x.org/?a=1&amp;b=2\">a&lt;b</a>"));
        assert!(html.contains("alt=\"Map &quot;1&quot;\""));
        assert!(html.contains("<figcaption>Map &quot;1&quot;</figcaption>"));
    }

    #[test]
    fn test_ends_with_closing_tags() {
        assert!(to_html(&Document::new()).ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn test_formatter_uses_its_options() {
        let formatter = HtmlFormatter::new(HtmlOptions {
            lang: "de".to_string(),
            ..HtmlOptions::default()
        });
        let html = formatter.serialize(&Document::new()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"de\">"));
    }
}
