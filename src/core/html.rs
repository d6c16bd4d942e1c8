// src/core/html.rs
// Minimal markup capability used by the page specs: find elements by marker,
// read their text, read an attribute. `scraper` is the only backend, but the
// specs only ever see `MarkupNode`.

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

/// Identifies a kind of element on a page: a tag name, optionally with an
/// exact `class` attribute value (not a class-token match).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub tag: &'static str,
    pub class: Option<&'static str>,
}

impl Marker {
    pub const fn tag(tag: &'static str) -> Self {
        Self { tag, class: None }
    }

    pub const fn exact(tag: &'static str, class: &'static str) -> Self {
        Self { tag, class: Some(class) }
    }

    /// CSS form, e.g. `td[class="Formule"]`.
    pub fn css(&self) -> String {
        match self.class {
            Some(class) => format!("{}[class=\"{}\"]", self.tag, class),
            None => String::from(self.tag),
        }
    }

    /// Does an element with this tag name and `class` attribute match?
    pub fn matches(&self, tag: &str, class_attr: Option<&str>) -> bool {
        if !self.tag.eq_ignore_ascii_case(tag) {
            return false;
        }
        match self.class {
            Some(want) => class_attr == Some(want),
            None => true,
        }
    }
}

pub trait MarkupNode: Sized {
    /// All descendants matching `marker`, in document order.
    fn find_all(&self, marker: &Marker) -> Result<Vec<Self>, ParseError>;

    /// Concatenated text of this node and its descendants, unmodified.
    fn inner_text(&self) -> String;

    fn attr(&self, name: &str) -> Option<&str>;

    /// True when `class` is one of the whitespace-separated tokens of the class attribute.
    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_whitespace().any(|token| token == class))
    }
}

impl<'a> MarkupNode for ElementRef<'a> {
    fn find_all(&self, marker: &Marker) -> Result<Vec<Self>, ParseError> {
        let css = marker.css();
        let selector = Selector::parse(&css)
            .map_err(|e| ParseError::Selector(format!("{css}: {e}")))?;
        Ok(self.select(&selector).collect())
    }

    fn inner_text(&self) -> String {
        ElementRef::text(self).collect()
    }

    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

/// A parsed HTML document.
pub struct Page {
    doc: Html,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_document(html) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.doc.root_element()
    }
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <div class="change-date">Mardi 05/03/2024</div>
          <div class="change-date other">Ignored 06/03/2024</div>
          <table><tr>
            <td class="Formule"><span>Padel</span><span>09:00 - 10:30</span><span class="place place-complet">Complet</span></td>
          </tr></table>
        </body></html>
    "#;

    #[test]
    fn css_forms() {
        assert_eq!(Marker::exact("td", "Formule").css(), r#"td[class="Formule"]"#);
        assert_eq!(Marker::tag("span").css(), "span");
    }

    #[test]
    fn exact_class_marker_skips_extra_tokens() {
        let page = Page::parse(DOC);
        let found = page.root().find_all(&Marker::exact("div", "change-date")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inner_text(), "Mardi 05/03/2024");
    }

    #[test]
    fn nested_find_and_class_tokens() {
        let page = Page::parse(DOC);
        let cells = page.root().find_all(&Marker::exact("td", "Formule")).unwrap();
        assert_eq!(cells.len(), 1);

        let spans = cells[0].find_all(&Marker::tag("span")).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].inner_text(), "09:00 - 10:30");
        assert!(spans[2].has_class("place-complet"));
        assert!(!spans[2].has_class("complet"));
        assert!(!spans[0].has_class("place-complet"));
    }

    #[test]
    fn marker_matches_by_tag_and_exact_class() {
        let m = Marker::exact("td", "Formule");
        assert!(m.matches("TD", Some("Formule")));
        assert!(!m.matches("td", Some("Formule x")));
        assert!(!m.matches("div", Some("Formule")));
        assert!(Marker::tag("span").matches("span", None));
    }

    #[test]
    fn normalize_ws_collapses() {
        assert_eq!(normalize_ws("  09:00\n   -\t10:30 "), "09:00 - 10:30");
    }
}
