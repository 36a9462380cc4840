//! Implementation variants and the selector state container.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two parallel documented APIs.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// C-style API.
    C,
    /// C++-style API.
    #[default]
    #[serde(alias = "c++")]
    Cpp,
}

impl Variant {
    /// Both variants in display order.
    pub const ALL: [Self; 2] = [Self::C, Self::Cpp];

    /// Lowercase identifier used in URLs, JSON and config.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }

    /// Human-readable label for toggles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
        }
    }

    /// Variant whose code samples use the given fence language, if any.
    #[must_use]
    pub fn from_fence_language(language: &str) -> Option<Self> {
        match language.to_ascii_lowercase().as_str() {
            "c" => Some(Self::C),
            "cpp" | "c++" => Some(Self::Cpp),
            _ => None,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown implementation variant '{0}' (expected 'c' or 'cpp')")]
pub struct ParseVariantError(String);

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "cpp" | "c++" => Ok(Self::Cpp),
            _ => Err(ParseVariantError(s.to_owned())),
        }
    }
}

/// Variant a navigation entry applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantTag {
    /// Only visible when C is selected.
    C,
    /// Only visible when C++ is selected.
    #[serde(alias = "c++")]
    Cpp,
    /// Always visible.
    Both,
}

impl VariantTag {
    /// Whether an item with this tag is visible under `variant`.
    #[must_use]
    pub fn includes(self, variant: Variant) -> bool {
        match self {
            Self::Both => true,
            Self::C => variant == Variant::C,
            Self::Cpp => variant == Variant::Cpp,
        }
    }
}

impl From<Variant> for VariantTag {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::C => Self::C,
            Variant::Cpp => Self::Cpp,
        }
    }
}

/// Explicit holder of the currently selected variant.
///
/// Renderers and navigation filtering receive the value read from here rather
/// than consulting any ambient state. Mutation happens only through
/// [`set`](Self::set).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorState {
    current: Variant,
}

impl SelectorState {
    /// Create a selector starting at `initial`.
    #[must_use]
    pub fn new(initial: Variant) -> Self {
        Self { current: initial }
    }

    /// Currently selected variant.
    #[must_use]
    pub fn current(&self) -> Variant {
        self.current
    }

    /// Select `variant`. Returns `true` if the selection changed.
    pub fn set(&mut self, variant: Variant) -> bool {
        let changed = self.current != variant;
        self.current = variant;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cpp() {
        assert_eq!(Variant::default(), Variant::Cpp);
        assert_eq!(SelectorState::default().current(), Variant::Cpp);
    }

    #[test]
    fn test_parse_variant() {
        assert_eq!("c".parse::<Variant>(), Ok(Variant::C));
        assert_eq!("CPP".parse::<Variant>(), Ok(Variant::Cpp));
        assert_eq!(" c++ ".parse::<Variant>(), Ok(Variant::Cpp));
        let err = "rust".parse::<Variant>().unwrap_err();
        assert!(err.to_string().contains("rust"));
    }

    #[test]
    fn test_variant_serde() {
        assert_eq!(serde_json::to_value(Variant::Cpp).unwrap(), "cpp");
        assert_eq!(
            serde_json::from_str::<Variant>("\"c++\"").unwrap(),
            Variant::Cpp
        );
        assert!(serde_json::from_str::<Variant>("\"both\"").is_err());
    }

    #[test]
    fn test_variant_tag_serde() {
        assert_eq!(
            serde_yaml::from_str::<VariantTag>("both").unwrap(),
            VariantTag::Both
        );
        assert!(serde_yaml::from_str::<VariantTag>("java").is_err());
    }

    #[test]
    fn test_tag_includes() {
        assert!(VariantTag::Both.includes(Variant::C));
        assert!(VariantTag::Both.includes(Variant::Cpp));
        assert!(VariantTag::C.includes(Variant::C));
        assert!(!VariantTag::C.includes(Variant::Cpp));
        assert!(VariantTag::Cpp.includes(Variant::Cpp));
        assert!(!VariantTag::Cpp.includes(Variant::C));
    }

    #[test]
    fn test_fence_language() {
        assert_eq!(Variant::from_fence_language("c"), Some(Variant::C));
        assert_eq!(Variant::from_fence_language("C++"), Some(Variant::Cpp));
        assert_eq!(Variant::from_fence_language("cpp"), Some(Variant::Cpp));
        assert_eq!(Variant::from_fence_language("bash"), None);
    }

    #[test]
    fn test_selector_set_reports_change() {
        let mut selector = SelectorState::new(Variant::Cpp);
        assert!(!selector.set(Variant::Cpp));
        assert!(selector.set(Variant::C));
        assert_eq!(selector.current(), Variant::C);
    }
}
