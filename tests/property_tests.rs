//! Property-based tests - pragmatic coverage of the round-trip guarantee.
//!
//! Two directions: generated documents survive format -> parse unchanged, and
//! generated well-formed INI text survives parse -> format byte-for-byte.

use ini_preserve::{from_str, to_string, IniDocument, IniKey, IniSection};
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_]{1,10}"
}

/// Leading comment blocks: optional, one to three lines, joined with '\n'.
fn leading_text_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(
        prop::collection::vec("[A-Za-z0-9 ]{0,10}", 1..3).prop_map(|lines| lines.join("\n")),
    )
}

fn trailing_text_strategy() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 ]{0,10}")
}

prop_compose! {
    fn arb_key()(
        name in name_strategy(),
        value in value_strategy(),
        leading in leading_text_strategy(),
        leading_indent in 0usize..3,
        blanks in 0usize..3,
        trailing in trailing_text_strategy(),
        trailing_indent in 0usize..3,
        indent in 0usize..3,
        before in 0usize..3,
        after in 0usize..3,
    ) -> IniKey {
        let mut key = IniKey::new(name, value);

        // Absent comments carry no indentation; the parser reads it back as 0.
        let indent_if_present = |text: &Option<String>, n: usize| if text.is_some() { n } else { 0 };
        key.leading_comment_mut().set_left_indentation(indent_if_present(&leading, leading_indent));
        key.leading_comment_mut().set_text(leading);
        key.leading_comment_mut().set_empty_lines_before(blanks);
        key.trailing_comment_mut().set_left_indentation(indent_if_present(&trailing, trailing_indent));
        key.trailing_comment_mut().set_text(trailing);

        key.layout_mut().indent = indent;
        key.layout_mut().before_delimiter = before;
        key.layout_mut().after_delimiter = after;
        key
    }
}

prop_compose! {
    fn arb_section()(
        name in name_strategy(),
        leading in leading_text_strategy(),
        leading_indent in 0usize..3,
        blanks in 0usize..3,
        trailing in trailing_text_strategy(),
        trailing_indent in 0usize..3,
        indent in 0usize..3,
        keys in prop::collection::vec(arb_key(), 0..4),
    ) -> IniSection {
        let mut section = IniSection::new(name);

        let indent_if_present = |text: &Option<String>, n: usize| if text.is_some() { n } else { 0 };
        section.leading_comment_mut().set_left_indentation(indent_if_present(&leading, leading_indent));
        section.leading_comment_mut().set_text(leading);
        section.leading_comment_mut().set_empty_lines_before(blanks);
        section.trailing_comment_mut().set_left_indentation(indent_if_present(&trailing, trailing_indent));
        section.trailing_comment_mut().set_text(trailing);
        section.set_indent(indent);

        for key in keys {
            section.push_key(key);
        }
        section
    }
}

fn arb_document() -> impl Strategy<Value = IniDocument> {
    prop::collection::vec(arb_section(), 1..4).prop_map(|sections| {
        let mut doc = IniDocument::default();
        for section in sections {
            doc.push_section(section);
        }
        doc
    })
}

proptest! {
    #[test]
    fn prop_document_survives_format_parse(doc in arb_document()) {
        let text = to_string(&doc);
        let parsed = from_str(&text).unwrap();
        prop_assert_eq!(parsed, doc);
    }

    #[test]
    fn prop_text_survives_parse_format(
        section in name_strategy(),
        key in name_strategy(),
        value in "[A-Za-z0-9]{0,8}",
        before in 0usize..3,
        after in 0usize..3,
    ) {
        let source = format!(
            "[{section}]\n{key}{}={}{value}\n",
            " ".repeat(before),
            " ".repeat(after),
        );
        let doc = from_str(&source).unwrap();
        prop_assert_eq!(to_string(&doc), source);
    }

    #[test]
    fn prop_format_parse_format_is_stable(doc in arb_document()) {
        let once = to_string(&doc);
        let twice = to_string(&from_str(&once).unwrap());
        prop_assert_eq!(once, twice);
    }
}
