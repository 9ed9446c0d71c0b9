//! Element locators
//!
//! The four lookup primitives the scenarios need, rendered down to the CSS
//! or XPath query the driver actually runs.

use std::fmt;

/// How to locate an element on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    /// Element with a matching `id` attribute
    Id(String),
    /// Raw CSS selector
    Css(String),
    /// Element carrying the given class name
    ClassName(String),
    /// Anchor with this exact visible text
    LinkText(String),
}

impl Locator {
    /// Locate by `id` attribute
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    /// Locate by CSS selector
    pub fn css(selector: impl Into<String>) -> Self {
        Self::Css(selector.into())
    }

    /// Locate by class name; Tailwind-style `:` in the name is escaped
    pub fn class_name(class: impl Into<String>) -> Self {
        Self::ClassName(class.into())
    }

    /// Locate an anchor by its exact visible text
    pub fn link_text(text: impl Into<String>) -> Self {
        Self::LinkText(text.into())
    }

    /// The query string handed to the driver
    pub(crate) fn query(&self) -> Query {
        match self {
            Locator::Id(id) => Query::Css(format!("#{}", id)),
            Locator::Css(selector) => Query::Css(selector.clone()),
            Locator::ClassName(class) => Query::Css(format!(".{}", class.replace(':', "\\:"))),
            Locator::LinkText(text) => Query::XPath(format!(
                "//a[normalize-space(.)={}]",
                xpath_literal(text)
            )),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locator::Id(id) => write!(f, "id={}", id),
            Locator::Css(selector) => write!(f, "css={}", selector),
            Locator::ClassName(class) => write!(f, "class={}", class),
            Locator::LinkText(text) => write!(f, "link text={}", text),
        }
    }
}

/// A locator rendered to something the protocol can execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Query {
    Css(String),
    XPath(String),
}

/// Quote a string for use inside an XPath expression.
///
/// XPath 1.0 has no escape character, so text containing both quote kinds
/// has to be assembled with concat().
fn xpath_literal(text: &str) -> String {
    if !text.contains('\'') {
        format!("'{}'", text)
    } else if !text.contains('"') {
        format!("\"{}\"", text)
    } else {
        let parts: Vec<String> = text.split('\'').map(|p| format!("'{}'", p)).collect();
        format!("concat({})", parts.join(",\"'\","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_renders_to_css() {
        assert_eq!(
            Locator::id("username").query(),
            Query::Css("#username".to_string())
        );
    }

    #[test]
    fn test_css_passes_through() {
        assert_eq!(
            Locator::css("button[type='submit']").query(),
            Query::Css("button[type='submit']".to_string())
        );
    }

    #[test]
    fn test_class_name_escapes_tailwind_colon() {
        assert_eq!(
            Locator::class_name("hover:shadow-lg").query(),
            Query::Css(".hover\\:shadow-lg".to_string())
        );
        assert_eq!(
            Locator::class_name("card").query(),
            Query::Css(".card".to_string())
        );
    }

    #[test]
    fn test_link_text_renders_to_xpath() {
        assert_eq!(
            Locator::link_text("Agregar Nuevo Hogar").query(),
            Query::XPath("//a[normalize-space(.)='Agregar Nuevo Hogar']".to_string())
        );
    }

    #[test]
    fn test_xpath_literal_quoting() {
        assert_eq!(xpath_literal("plain"), "'plain'");
        assert_eq!(xpath_literal("it's"), "\"it's\"");
        assert_eq!(xpath_literal("a'b\"c"), "concat('a',\"'\",'b\"c')");
    }

    #[test]
    fn test_display_names_the_strategy() {
        assert_eq!(Locator::id("username").to_string(), "id=username");
        assert_eq!(
            Locator::link_text("Agregar Nuevo Hogar").to_string(),
            "link text=Agregar Nuevo Hogar"
        );
    }
}
