//! Navigation model and variant filtering.
//!
//! Navigation is authored as an ordered list of sections, each holding an
//! ordered list of entries tagged with the variant they document. Filtering
//! keeps order and drops sections left without visible entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ContentError;
use crate::variant::{Variant, VariantTag};

/// A single link in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    /// Display title.
    pub title: String,
    /// Link target (site-absolute path, e.g. `/docs/core-types`).
    pub href: String,
    /// Identifier, unique within its section.
    pub id: String,
    /// Variant this entry documents.
    pub variant: VariantTag,
}

/// A titled group of entries in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSection {
    /// Section heading.
    pub title: String,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<NavigationEntry>,
}

/// Return the sections and entries visible under `variant`.
///
/// An entry is kept iff its tag is `both` or equals `variant`. Sections with
/// no remaining entries are omitted. Relative order is preserved throughout.
#[must_use]
pub fn filter_navigation(sections: &[NavigationSection], variant: Variant) -> Vec<NavigationSection> {
    sections
        .iter()
        .filter_map(|section| {
            let items: Vec<_> = section
                .items
                .iter()
                .filter(|entry| entry.variant.includes(variant))
                .cloned()
                .collect();

            (!items.is_empty()).then(|| NavigationSection {
                title: section.title.clone(),
                items,
            })
        })
        .collect()
}

/// Check ids and hrefs of authored navigation.
///
/// `page_exists` answers whether a normalized page path exists.
pub(crate) fn validate(
    sections: &[NavigationSection],
    page_exists: impl Fn(&str) -> bool,
) -> Result<(), ContentError> {
    for section in sections {
        let mut seen = HashSet::new();

        for entry in &section.items {
            if !seen.insert(entry.id.as_str()) {
                return Err(ContentError::DuplicateId {
                    section: section.title.clone(),
                    id: entry.id.clone(),
                });
            }

            if !entry.href.starts_with('/') {
                return Err(ContentError::InvalidHref {
                    id: entry.id.clone(),
                    href: entry.href.clone(),
                });
            }

            if !page_exists(&crate::router::normalize_path(&entry.href)) {
                return Err(ContentError::MissingPage {
                    id: entry.id.clone(),
                    href: entry.href.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(title: &str, id: &str, variant: VariantTag) -> NavigationEntry {
        NavigationEntry {
            title: title.to_owned(),
            href: format!("/docs/{id}"),
            id: id.to_owned(),
            variant,
        }
    }

    fn titles(sections: &[NavigationSection]) -> Vec<Vec<&str>> {
        sections
            .iter()
            .map(|s| s.items.iter().map(|e| e.title.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_filter_c_drops_cpp_entries() {
        let sections = vec![NavigationSection {
            title: "API Reference".to_owned(),
            items: vec![
                entry("Core Classes", "core-classes", VariantTag::Cpp),
                entry("Core Types", "core-types", VariantTag::C),
            ],
        }];

        let filtered = filter_navigation(&sections, Variant::C);

        assert_eq!(titles(&filtered), vec![vec!["Core Types"]]);
    }

    #[test]
    fn test_filter_keeps_both_entries() {
        let sections = vec![NavigationSection {
            title: "Getting Started".to_owned(),
            items: vec![entry("Installation", "installation", VariantTag::Both)],
        }];

        assert_eq!(filter_navigation(&sections, Variant::C), sections);
        assert_eq!(filter_navigation(&sections, Variant::Cpp), sections);
    }

    #[test]
    fn test_filter_drops_empty_sections() {
        let sections = vec![
            NavigationSection {
                title: "C API".to_owned(),
                items: vec![entry("Color Constants", "color-constants", VariantTag::C)],
            },
            NavigationSection {
                title: "Guides".to_owned(),
                items: vec![entry("Layout", "layout-system", VariantTag::Both)],
            },
            NavigationSection {
                title: "Empty".to_owned(),
                items: vec![],
            },
        ];

        let filtered = filter_navigation(&sections, Variant::Cpp);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Guides");
    }

    #[test]
    fn test_filter_preserves_order() {
        let sections = vec![NavigationSection {
            title: "Mixed".to_owned(),
            items: vec![
                entry("A", "a", VariantTag::Cpp),
                entry("B", "b", VariantTag::Both),
                entry("C", "c", VariantTag::C),
                entry("D", "d", VariantTag::Cpp),
            ],
        }];

        assert_eq!(titles(&filter_navigation(&sections, Variant::Cpp)), vec![vec!["A", "B", "D"]]);
        assert_eq!(titles(&filter_navigation(&sections, Variant::C)), vec![vec!["B", "C"]]);
    }

    #[test]
    fn test_parse_navigation_yaml() {
        let yaml = r"
- title: Getting Started
  items:
    - title: Installation
      href: /docs/installation
      id: installation
      variant: both
";
        let sections: Vec<NavigationSection> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(sections[0].items[0].variant, VariantTag::Both);
    }

    #[test]
    fn test_parse_navigation_rejects_unknown_variant() {
        let yaml = r"
- title: Getting Started
  items:
    - title: Installation
      href: /docs/installation
      id: installation
      variant: rust
";
        assert!(serde_yaml::from_str::<Vec<NavigationSection>>(yaml).is_err());
    }

    #[test]
    fn test_validate_duplicate_id() {
        let sections = vec![NavigationSection {
            title: "API".to_owned(),
            items: vec![
                entry("Core Types", "core", VariantTag::C),
                entry("Core Classes", "core", VariantTag::Cpp),
            ],
        }];

        let err = validate(&sections, |_| true).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateId { .. }));
    }

    #[test]
    fn test_validate_same_id_in_different_sections() {
        let sections = vec![
            NavigationSection {
                title: "C".to_owned(),
                items: vec![entry("Overview", "overview", VariantTag::C)],
            },
            NavigationSection {
                title: "C++".to_owned(),
                items: vec![entry("Overview", "overview", VariantTag::Cpp)],
            },
        ];

        assert!(validate(&sections, |_| true).is_ok());
    }

    #[test]
    fn test_validate_relative_href() {
        let mut bad = entry("Core Types", "core-types", VariantTag::C);
        bad.href = "docs/core-types".to_owned();
        let sections = vec![NavigationSection {
            title: "API".to_owned(),
            items: vec![bad],
        }];

        let err = validate(&sections, |_| true).unwrap_err();
        assert!(matches!(err, ContentError::InvalidHref { .. }));
    }

    #[test]
    fn test_validate_missing_page() {
        let sections = vec![NavigationSection {
            title: "API".to_owned(),
            items: vec![entry("Core Types", "core-types", VariantTag::C)],
        }];

        let err = validate(&sections, |path| path == "docs/other").unwrap_err();
        assert!(matches!(err, ContentError::MissingPage { .. }));
        assert!(err.to_string().contains("/docs/core-types"));
    }

    #[test]
    fn test_validate_href_with_fragment() {
        let mut linked = entry("Core Types", "core-types", VariantTag::C);
        linked.href = "/docs/core-types#colors".to_owned();
        let sections = vec![NavigationSection {
            title: "API".to_owned(),
            items: vec![linked],
        }];

        assert!(validate(&sections, |path| path == "docs/core-types").is_ok());
    }
}
