//! Path resolution.

use crate::page::ContentPage;

/// Outcome of resolving a request path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    /// A page exists at the path.
    Page(&'a ContentPage),
    /// No page exists; carries the not-found page.
    NotFound(&'a ContentPage),
}

impl<'a> Resolved<'a> {
    /// The page to display either way.
    #[must_use]
    pub fn page(self) -> &'a ContentPage {
        match self {
            Self::Page(page) | Self::NotFound(page) => page,
        }
    }

    #[must_use]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Page(_))
    }
}

/// Normalize a request path to a page id.
///
/// Drops query and fragment, surrounding slashes, empty segments and `.`
/// segments. `/docs//core-types/?x=1#a` becomes `docs/core-types`.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");

    path.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Built-in page used when no `404.md` is authored.
pub(crate) fn default_not_found_page() -> ContentPage {
    ContentPage::from_markdown(
        "404",
        "# Page not found\n\nThe page you requested does not exist. \
         Return to the [home page](/) or browse the [documentation](/docs).\n",
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/docs/core-types"), "docs/core-types");
        assert_eq!(normalize_path("docs/core-types/"), "docs/core-types");
        assert_eq!(normalize_path("/docs//core-types/?x=1#a"), "docs/core-types");
        assert_eq!(normalize_path("/./quick-start"), "quick-start");
        assert_eq!(normalize_path("/docs/../secret"), "docs/../secret");
    }

    #[test]
    fn test_default_not_found_page() {
        let page = default_not_found_page();
        assert_eq!(page.title, "Page not found");
    }

    #[test]
    fn test_resolved_accessors() {
        let page = default_not_found_page();
        assert!(!Resolved::NotFound(&page).is_found());
        assert!(Resolved::Page(&page).is_found());
        assert_eq!(Resolved::NotFound(&page).page().id, "404");
    }
}
