//! Supported languages and their word tables.

use crate::token::TokenCategory;

/// Languages the highlighter understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// C (C99/C11).
    C,
    /// C++ (C++17/20).
    Cpp,
}

const C_KEYWORDS: &[&str] = &[
    "_Alignas",
    "_Alignof",
    "_Atomic",
    "_Generic",
    "_Noreturn",
    "_Static_assert",
    "_Thread_local",
    "NULL",
    "auto",
    "break",
    "case",
    "const",
    "continue",
    "default",
    "do",
    "else",
    "enum",
    "extern",
    "false",
    "for",
    "goto",
    "if",
    "inline",
    "register",
    "restrict",
    "return",
    "sizeof",
    "static",
    "struct",
    "switch",
    "true",
    "typedef",
    "union",
    "volatile",
    "while",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "catch",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "concept",
    "const_cast",
    "consteval",
    "constexpr",
    "constinit",
    "decltype",
    "delete",
    "dynamic_cast",
    "explicit",
    "export",
    "final",
    "friend",
    "import",
    "module",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "nullptr",
    "operator",
    "override",
    "private",
    "protected",
    "public",
    "reinterpret_cast",
    "requires",
    "static_assert",
    "static_cast",
    "template",
    "this",
    "thread_local",
    "throw",
    "try",
    "typeid",
    "typename",
    "using",
    "virtual",
];

const C_TYPES: &[&str] = &[
    "FILE",
    "_Bool",
    "_Complex",
    "bool",
    "char",
    "double",
    "float",
    "int",
    "int16_t",
    "int32_t",
    "int64_t",
    "int8_t",
    "intptr_t",
    "long",
    "ptrdiff_t",
    "short",
    "signed",
    "size_t",
    "ssize_t",
    "uint16_t",
    "uint32_t",
    "uint64_t",
    "uint8_t",
    "uintptr_t",
    "unsigned",
    "void",
];

const CPP_TYPES: &[&str] = &["char16_t", "char32_t", "char8_t", "wchar_t"];

/// Framework and standard library names shared by both variants.
const COMMON_IDENTIFIERS: &[&str] = &[
    "Button",
    "ButtonConfig",
    "Center",
    "Colors",
    "Column",
    "Container",
    "CrossAxisAlignment",
    "Draw",
    "Expanded",
    "Fern",
    "MainAxisAlignment",
    "Padding",
    "Point",
    "Row",
    "SizedBox",
    "Text",
    "TextWidget",
    "Widget",
    "WidgetManager",
    "addWidget",
    "fill",
    "getHeight",
    "getWidth",
    "initialize",
    "setDrawCallback",
    "startRenderLoop",
];

const C_IDENTIFIERS: &[&str] = &[
    "free", "malloc", "memcpy", "memset", "printf", "puts", "strlen",
];

const CPP_IDENTIFIERS: &[&str] = &[
    "cerr",
    "cout",
    "endl",
    "function",
    "make_shared",
    "make_unique",
    "shared_ptr",
    "std",
    "string",
    "to_string",
    "unique_ptr",
    "vector",
];

/// Prefixes marking C-style framework API names (`fern_init`, `FERN_KEY_A`).
const FRAMEWORK_PREFIXES: &[&str] = &["fern_", "FERN_"];

impl Language {
    /// Resolve a fence language tag.
    ///
    /// Matching is case-insensitive. Returns `None` for unsupported tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "c" | "h" => Some(Self::C),
            "cpp" | "c++" | "cxx" | "cc" | "hpp" => Some(Self::Cpp),
            _ => None,
        }
    }

    /// Classify a complete identifier-like word.
    ///
    /// Keywords take priority over types, types over known identifiers.
    /// C++ recognises every C word as well.
    #[must_use]
    pub(crate) fn classify_word(self, word: &str) -> TokenCategory {
        let cpp = self == Self::Cpp;

        if C_KEYWORDS.contains(&word) || (cpp && CPP_KEYWORDS.contains(&word)) {
            TokenCategory::Keyword
        } else if C_TYPES.contains(&word) || (cpp && CPP_TYPES.contains(&word)) {
            TokenCategory::Type
        } else if COMMON_IDENTIFIERS.contains(&word)
            || C_IDENTIFIERS.contains(&word)
            || (cpp && CPP_IDENTIFIERS.contains(&word))
            || FRAMEWORK_PREFIXES.iter().any(|p| word.starts_with(p))
        {
            TokenCategory::Identifier
        } else {
            TokenCategory::Plain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Language::from_tag("c"), Some(Language::C));
        assert_eq!(Language::from_tag("C"), Some(Language::C));
        assert_eq!(Language::from_tag("cpp"), Some(Language::Cpp));
        assert_eq!(Language::from_tag("C++"), Some(Language::Cpp));
        assert_eq!(Language::from_tag(" hpp "), Some(Language::Cpp));
        assert_eq!(Language::from_tag("rust"), None);
        assert_eq!(Language::from_tag(""), None);
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(Language::C.classify_word("return"), TokenCategory::Keyword);
        assert_eq!(Language::C.classify_word("int"), TokenCategory::Type);
        assert_eq!(Language::C.classify_word("printf"), TokenCategory::Identifier);
        assert_eq!(Language::C.classify_word("counter"), TokenCategory::Plain);
    }

    #[test]
    fn test_cpp_words_are_plain_in_c() {
        assert_eq!(Language::C.classify_word("class"), TokenCategory::Plain);
        assert_eq!(Language::Cpp.classify_word("class"), TokenCategory::Keyword);
        assert_eq!(Language::C.classify_word("std"), TokenCategory::Plain);
        assert_eq!(Language::Cpp.classify_word("std"), TokenCategory::Identifier);
    }

    #[test]
    fn test_cpp_includes_c_words() {
        assert_eq!(Language::Cpp.classify_word("sizeof"), TokenCategory::Keyword);
        assert_eq!(Language::Cpp.classify_word("uint32_t"), TokenCategory::Type);
    }

    #[test]
    fn test_framework_prefix() {
        assert_eq!(
            Language::C.classify_word("fern_start_render_loop"),
            TokenCategory::Identifier
        );
        assert_eq!(Language::C.classify_word("FERN_KEY_A"), TokenCategory::Identifier);
        assert_eq!(Language::C.classify_word("fernish"), TokenCategory::Plain);
    }
}
