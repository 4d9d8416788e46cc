//! HTML catalogue encoder
//!
//! Produces one self-contained page: an alphabetical index bar, the catalog
//! header, then the books sorted by [`crate::index::sort_key`] and grouped by
//! leading letter.

use crate::error::ExportError;
use crate::index::{self, OTHER_SECTION};
use crate::types::{Book, Catalog};
use std::collections::BTreeSet;
use std::io::Write;

const STYLE: &str = r#"body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #f4f4f9; color: #333; margin: 0; padding-bottom: 50px; }
.container { max-width: 900px; margin: 0 auto; padding: 20px; }
h1 { text-align: center; color: #2c3e50; margin-bottom: 10px; }
.subtitle { text-align: center; color: #7f8c8d; margin-bottom: 30px; font-style: italic; }
.index-bar { position: sticky; top: 0; background: white; padding: 15px; box-shadow: 0 2px 5px rgba(0,0,0,0.1); text-align: center; z-index: 100; }
.index-bar a { display: inline-block; padding: 5px 10px; margin: 2px; text-decoration: none; color: #fff; background-color: #3498db; border-radius: 4px; font-weight: bold; font-size: 14px; }
.index-bar a:hover { background-color: #2980b9; }
.index-bar span { display: inline-block; padding: 5px 10px; margin: 2px; color: #bdc3c7; font-size: 14px; }
h2 { border-bottom: 2px solid #3498db; color: #3498db; padding-bottom: 5px; margin-top: 40px; }
.book-card { background: white; border-left: 5px solid #3498db; padding: 15px; margin-bottom: 15px; box-shadow: 0 2px 4px rgba(0,0,0,0.05); border-radius: 0 5px 5px 0; }
.book-title { font-size: 1.2em; font-weight: bold; color: #2c3e50; }
.book-info { color: #7f8c8d; font-size: 0.9em; margin-top: 5px; }
.book-isbn { font-family: monospace; background: #eee; padding: 2px 5px; border-radius: 3px; }
.book-description { font-size: 0.9em; margin-top: 10px; }"#;

/// Encoder for a static HTML catalogue
pub struct HtmlEncoder {
    /// Value of the `lang` attribute
    lang: String,
    /// Whether each card shows the book description
    include_descriptions: bool,
}

impl HtmlEncoder {
    pub fn new() -> Self {
        Self {
            lang: "en".to_string(),
            include_descriptions: false,
        }
    }

    /// Set the document language
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Show descriptions under each book
    pub fn with_descriptions(mut self, include: bool) -> Self {
        self.include_descriptions = include;
        self
    }

    /// Render the whole document
    pub fn render(&self, catalog: &Catalog) -> String {
        let groups = index::group_by_section(&catalog.books);
        let present: BTreeSet<char> = groups.iter().map(|(section, _)| *section).collect();
        let name = escape_html(&catalog.name);

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n", escape_html(&self.lang)));
        html.push_str("<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        html.push_str(&format!("<title>{} - Catalogue</title>\n", name));
        html.push_str(&format!("<style>\n{}\n</style>\n", STYLE));
        html.push_str("</head>\n<body>\n");

        html.push_str(&render_index_bar(&present));
        html.push('\n');

        html.push_str("<div class=\"container\">\n");
        html.push_str(&format!("<h1>{}</h1>\n", name));
        html.push_str(&format!(
            "<p class=\"subtitle\">{}</p>\n",
            escape_html(&catalog.description)
        ));

        for (section, books) in &groups {
            html.push_str(&format!(
                "<h2 id=\"{}\">{}</h2>\n",
                anchor_id(*section),
                section
            ));
            for book in books {
                html.push_str(&self.book_card(book));
            }
        }

        html.push_str("</div>\n</body>\n</html>\n");
        html
    }

    fn book_card(&self, book: &Book) -> String {
        let mut card = String::from("<div class=\"book-card\">\n");
        card.push_str(&format!(
            "<div class=\"book-title\">{}</div>\n",
            escape_html(&book.title)
        ));
        card.push_str(&format!(
            "<div class=\"book-info\">by <strong>{}</strong> &bull; ISBN: <span class=\"book-isbn\">{}</span> &bull; {}</div>\n",
            escape_html(&book.authors),
            escape_html(&book.id),
            escape_html(&book.date)
        ));
        if self.include_descriptions && !book.description.is_empty() {
            card.push_str(&format!(
                "<p class=\"book-description\">{}</p>\n",
                escape_html(&book.description)
            ));
        }
        card.push_str("</div>\n");
        card
    }
}

impl Default for HtmlEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::CatalogEncoder for HtmlEncoder {
    fn encode(&self, catalog: &Catalog, writer: &mut dyn Write) -> Result<(), ExportError> {
        writer.write_all(self.render(catalog).as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "HTML"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }
}

/// Render the `#`, A-Z index bar on a single line
///
/// Sections in `present` become links to their heading, the others inert text.
pub fn render_index_bar(present: &BTreeSet<char>) -> String {
    let mut bar = String::from("<nav class=\"index-bar\">");
    for section in index::sections() {
        if present.contains(&section) {
            bar.push_str(&format!(
                "<a href=\"#{}\">{}</a>",
                anchor_id(section),
                section
            ));
        } else {
            bar.push_str(&format!("<span>{}</span>", section));
        }
    }
    bar.push_str("</nav>");
    bar
}

/// Element id of a section heading
fn anchor_id(section: char) -> String {
    if section == OTHER_SECTION {
        "section-num".to_string()
    } else {
        format!("section-{}", section)
    }
}

/// Escape HTML special characters
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new("Home <shelf>", "Books & more");
        catalog.add(Book::new("978-0-261-10221-7", "The Hobbit").with_authors("J.R.R. Tolkien"));
        catalog.add(Book::new("978-2-07-036822-8", "Le Petit Prince").with_description("Astéroïde B 612"));
        catalog.add(Book::new("978-0-452-28423-4", "1984").with_authors("George Orwell"));
        catalog
    }

    #[test]
    fn test_sections_in_order() {
        let html = HtmlEncoder::new().render(&catalog());
        let num = html.find("<h2 id=\"section-num\">#</h2>").unwrap();
        let p = html.find("<h2 id=\"section-P\">P</h2>").unwrap();
        let t = html.find("<h2 id=\"section-T\">T</h2>").unwrap();
        assert!(num < p && p < t);
        assert!(!html.contains("id=\"section-H\""));
    }

    #[test]
    fn test_every_link_has_a_heading() {
        let html = HtmlEncoder::new().render(&catalog());
        for section in index::sections() {
            let id = anchor_id(section);
            let linked = html.contains(&format!("href=\"#{}\"", id));
            let headed = html.contains(&format!("<h2 id=\"{}\">", id));
            assert_eq!(linked, headed, "section {}", section);
        }
    }

    #[test]
    fn test_text_is_escaped() {
        let html = HtmlEncoder::new().render(&catalog());
        assert!(html.contains("<title>Home &lt;shelf&gt; - Catalogue</title>"));
        assert!(html.contains("Books &amp; more"));
    }

    #[test]
    fn test_descriptions_are_optional() {
        let without = HtmlEncoder::new().render(&catalog());
        assert!(!without.contains("Astéroïde"));

        let with = HtmlEncoder::new().with_descriptions(true).render(&catalog());
        assert!(with.contains("<p class=\"book-description\">Astéroïde B 612</p>"));
    }

    #[test]
    fn test_empty_catalog_has_no_links() {
        let html = HtmlEncoder::new().render(&Catalog::default());
        assert!(!html.contains("<a href"));
        assert!(!html.contains("<h2"));
    }
}
