use fd_highlight::{Language, TokenCategory, highlight, tokenize};
use proptest::prelude::*;

fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9_ ;(){}<>#\"'/*.+\\-=\n]{0,80}",
        2 => prop::collection::vec(
            prop_oneof![
                Just("int"), Just("return"), Just("// c "), Just("/*"), Just("*/"),
                Just("\""), Just("'"), Just("#include "), Just("<stdio.h>"),
                Just("0xFF"), Just("1.5e3f"), Just("Fern::"), Just("fern_draw"),
                Just("\n"), Just(" "), Just("x"), Just("\\"),
            ],
            0..30,
        )
        .prop_map(|parts| parts.concat()),
        1 => any::<String>(),
    ]
}

fn language_strategy() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::C), Just(Language::Cpp)]
}

/// Strip the span wrappers and unescape, recovering the highlighted text.
fn strip_markup(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        text.push_str(&rest[..start]);
        let end = rest[start..].find('>').unwrap();
        rest = &rest[start + end + 1..];
    }
    text.push_str(rest);
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_tokens_cover_source_exactly(source in source_strategy(), language in language_strategy()) {
        let tokens = tokenize(&source, language);
        let joined: String = tokens.iter().map(|t| t.text).collect();
        prop_assert_eq!(&joined, &source);
        prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
    }

    #[test]
    fn prop_each_token_wrapped_at_most_once(source in source_strategy(), language in language_strategy()) {
        let tag = if language == Language::C { "c" } else { "cpp" };
        let html = highlight(&source, Some(tag));

        let wrapped = tokenize(&source, language)
            .iter()
            .filter(|t| t.category != TokenCategory::Plain)
            .count();
        prop_assert_eq!(html.matches("<span").count(), wrapped);
        prop_assert_eq!(html.matches("</span>").count(), wrapped);
        prop_assert_eq!(strip_markup(&html), source);
    }
}
