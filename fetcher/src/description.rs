//! Plain-text rendering of the HTML fragments the API puts in descriptions.

use regex::Regex;
use scraper::node::Node;
use scraper::{ElementRef, Html};
use std::sync::OnceLock;

/// Elements whose boundaries separate words.
const BLOCK_ELEMENTS: &[&str] = &[
    "p", "br", "li", "ul", "ol", "div", "h1", "h2", "h3", "h4", "h5", "h6", "tr", "td", "th",
];

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Reduces an HTML fragment (search highlights, employer blurbs) to a single
/// line of plain text. Blank results collapse to `None`.
pub fn clean_description(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let fragment = Html::parse_fragment(raw);
    let mut text = String::new();
    push_text(fragment.root_element(), &mut text);
    let text = whitespace().replace_all(&text, " ");
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                let block = BLOCK_ELEMENTS.contains(&el.name());
                if block {
                    out.push(' ');
                }
                if let Some(child) = ElementRef::wrap(child) {
                    push_text(child, out);
                }
                if block {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_highlight_markup() {
        assert_eq!(
            clean_description(Some("Опыт работы с <highlighttext>Rust</highlighttext> от 3 лет.")),
            Some("Опыт работы с Rust от 3 лет.".to_string())
        );
    }

    #[test]
    fn test_collapses_whitespace_and_decodes_entities() {
        assert_eq!(
            clean_description(Some("<p>Tom &amp; Jerry</p>\n\n<p>  since   1940 </p>")),
            Some("Tom & Jerry since 1940".to_string())
        );
    }

    #[test]
    fn test_inline_markup_keeps_words_and_punctuation_together() {
        assert_eq!(
            clean_description(Some(
                "Опыт с <highlighttext>Python</highlighttext>, знание Java<highlighttext>Script</highlighttext>."
            )),
            Some("Опыт с Python, знание JavaScript.".to_string())
        );
        assert_eq!(
            clean_description(Some("<b>Senior</b>/<i>Lead</i> engineer")),
            Some("Senior/Lead engineer".to_string())
        );
    }

    #[test]
    fn test_block_boundaries_separate_words() {
        assert_eq!(
            clean_description(Some("<ul><li>Rust</li><li>Go</li></ul>Remote<br>Full time")),
            Some("Rust Go Remote Full time".to_string())
        );
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(clean_description(Some("  <p> </p> ")), None);
        assert_eq!(clean_description(None), None);
    }
}
