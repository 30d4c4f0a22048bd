use ini_preserve::{
    from_str, from_str_with_options, CommentStarter, Error, IniOptions, KeyDelimiter,
    SectionWrapper, GLOBAL_SECTION_NAME,
};

#[test]
fn test_default_syntax() {
    let source = ";Section's preceding comment.\n\
                  [Section's name];Section's inline comment.\n\
                  ;Key's preceding comment.\n\
                  Key's name = Key's value;Key's inline comment.";

    let doc = from_str(source).unwrap();

    assert_eq!(doc.sections().len(), 1);
    let section = &doc.sections()[0];
    assert_eq!(section.name(), "Section's name");
    assert_eq!(
        section.leading_comment().text(),
        Some("Section's preceding comment.")
    );
    assert_eq!(
        section.trailing_comment().text(),
        Some("Section's inline comment.")
    );

    assert_eq!(section.keys().len(), 1);
    let key = &section.keys()[0];
    assert_eq!(key.name(), "Key's name");
    assert_eq!(key.value(), "Key's value");
    assert_eq!(key.leading_comment().text(), Some("Key's preceding comment."));
    assert_eq!(key.trailing_comment().text(), Some("Key's inline comment."));
}

#[test]
fn test_custom_syntax() {
    let source = "#Section's preceding comment.\n\
                  {Section's name}#Section's inline comment.\n\
                  #Key's preceding comment.\n\
                  Key's name : Key's value#Key's inline comment.";

    let options = IniOptions::new()
        .with_comment_starter(CommentStarter::Hash)
        .with_section_wrapper(SectionWrapper::CurlyBrackets)
        .with_key_delimiter(KeyDelimiter::Colon);
    let doc = from_str_with_options(source, options).unwrap();

    assert_eq!(doc.sections().len(), 1);
    let section = &doc.sections()[0];
    assert_eq!(section.name(), "Section's name");
    assert_eq!(
        section.leading_comment().text(),
        Some("Section's preceding comment.")
    );
    assert_eq!(
        section.trailing_comment().text(),
        Some("Section's inline comment.")
    );

    let key = &section.keys()[0];
    assert_eq!(key.name(), "Key's name");
    assert_eq!(key.value(), "Key's value");
    assert_eq!(key.leading_comment().text(), Some("Key's preceding comment."));
    assert_eq!(key.trailing_comment().text(), Some("Key's inline comment."));
}

#[test]
fn test_minimal_custom_syntax() {
    let options = IniOptions::new()
        .with_comment_starter(CommentStarter::Hash)
        .with_section_wrapper(SectionWrapper::CurlyBrackets)
        .with_key_delimiter(KeyDelimiter::Colon);
    let doc = from_str_with_options("{Name}#c\nKey:Value", options).unwrap();

    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].name(), "Name");
    assert_eq!(doc.sections()[0].trailing_comment().text(), Some("c"));
    assert_eq!(doc.sections()[0].keys()[0].name(), "Key");
    assert_eq!(doc.sections()[0].keys()[0].value(), "Value");
}

#[test]
fn test_global_section() {
    let source = ";comment1\n\
                  Key1 = Value1\n\
                  ;comment2\n\
                  Key2 = Value2";

    let doc = from_str(source).unwrap();

    assert_eq!(doc.sections().len(), 1);
    let global = &doc.sections()[0];
    assert_eq!(global.name(), GLOBAL_SECTION_NAME);
    assert!(global.is_global());

    assert_eq!(global.keys().len(), 2);
    assert_eq!(global.keys()[0].name(), "Key1");
    assert_eq!(global.keys()[0].value(), "Value1");
    assert_eq!(global.keys()[0].leading_comment().text(), Some("comment1"));
    assert_eq!(global.keys()[1].name(), "Key2");
    assert_eq!(global.keys()[1].value(), "Value2");
    assert_eq!(global.keys()[1].leading_comment().text(), Some("comment2"));
}

#[test]
fn test_global_section_synthesis_without_comments() {
    let doc = from_str("Key1 = Value1\nKey2 = Value2").unwrap();
    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].name(), GLOBAL_SECTION_NAME);
    let names: Vec<_> = doc.sections()[0].keys().iter().map(|k| k.name()).collect();
    assert_eq!(names, ["Key1", "Key2"]);
}

#[test]
fn test_utf8_names_and_values() {
    let source = "[Καλημέρα κόσμε]\n\
                  こんにちは 世界 = ¥ £ € $ ¢ ₡ ₢ ₣ ₤ ₥ ₦ ₧ ₨ ₩ ₪ ₫ ₭ ₮ ₯ ₹";

    let doc = from_str(source).unwrap();

    assert_eq!(doc.sections()[0].name(), "Καλημέρα κόσμε");
    assert_eq!(doc.sections()[0].keys()[0].name(), "こんにちは 世界");
    assert_eq!(
        doc.sections()[0].keys()[0].value(),
        "¥ £ € $ ¢ ₡ ₢ ₣ ₤ ₥ ₦ ₧ ₨ ₩ ₪ ₫ ₭ ₮ ₯ ₹"
    );
}

#[test]
fn test_empty_line_counting() {
    let source = "\n  \t  \n\
                  [Section]\n\
                  \n\n  \t  \n\
                  Key = Value\n\
                  \n  \t  \n\
                  ;\n\
                  [Section]\n\
                  \n  \t  \n\n\
                  ;\n\
                  Key = Value";

    let doc = from_str(source).unwrap();

    // Blank lines with no comment still attach, as an absent comment.
    assert_eq!(doc.sections()[0].leading_comment().text(), None);
    assert_eq!(doc.sections()[0].leading_comment().empty_lines_before(), 2);
    assert_eq!(
        doc.sections()[0].keys()[0].leading_comment().empty_lines_before(),
        3
    );

    // Blank lines before a bare-marker comment block.
    assert_eq!(doc.sections()[1].leading_comment().text(), Some(""));
    assert_eq!(doc.sections()[1].leading_comment().empty_lines_before(), 2);
    assert_eq!(
        doc.sections()[1].keys()[0].leading_comment().text(),
        Some("")
    );
    assert_eq!(
        doc.sections()[1].keys()[0].leading_comment().empty_lines_before(),
        3
    );
}

#[test]
fn test_blank_lines_followed_by_comment_followed_by_key() {
    let doc = from_str("\n\n;note\nKey = Value").unwrap();
    let key = &doc.sections()[0].keys()[0];
    assert_eq!(key.leading_comment().text(), Some("note"));
    assert_eq!(key.leading_comment().empty_lines_before(), 2);
}

#[test]
fn test_comment_edge_cases() {
    let source = ";\n\
                  ;Section's preceding comment;\n\
                  [Section]\n\
                  [Section];\n\
                  [Section]  ;\n\
                  ;\n\
                  ;Key's preceding comment;\n\
                  Key = Value  \n\
                  Key = Value;\n\
                  Key = Value  ;";

    let doc = from_str(source).unwrap();

    // A contiguous comment block joins its lines with '\n'.
    assert_eq!(
        doc.sections()[0].leading_comment().text(),
        Some("\nSection's preceding comment;")
    );
    assert_eq!(doc.sections()[0].name(), "Section");
    assert_eq!(doc.sections()[0].trailing_comment().text(), None);
    assert_eq!(doc.sections()[0].trailing_comment().left_indentation(), 0);

    // Bare marker directly after the header: present-empty, no gap.
    assert_eq!(doc.sections()[1].name(), "Section");
    assert_eq!(doc.sections()[1].trailing_comment().text(), Some(""));
    assert_eq!(doc.sections()[1].trailing_comment().left_indentation(), 0);

    // Two spaces between header and marker.
    assert_eq!(doc.sections()[2].name(), "Section");
    assert_eq!(doc.sections()[2].trailing_comment().text(), Some(""));
    assert_eq!(doc.sections()[2].trailing_comment().left_indentation(), 2);

    let keys = doc.sections()[2].keys();
    assert_eq!(
        keys[0].leading_comment().text(),
        Some("\nKey's preceding comment;")
    );
    assert_eq!(keys[0].value(), "Value");
    assert_eq!(keys[0].trailing_comment().text(), None);
    assert_eq!(keys[0].trailing_comment().left_indentation(), 0);

    assert_eq!(keys[1].value(), "Value");
    assert_eq!(keys[1].trailing_comment().text(), Some(""));
    assert_eq!(keys[1].trailing_comment().left_indentation(), 0);

    assert_eq!(keys[2].value(), "Value");
    assert_eq!(keys[2].trailing_comment().text(), Some(""));
    assert_eq!(keys[2].trailing_comment().left_indentation(), 2);
}

#[test]
fn test_comment_presence_vs_emptiness() {
    let doc = from_str("Key=Value").unwrap();
    assert_eq!(doc.sections()[0].keys()[0].leading_comment().text(), None);

    let doc = from_str(";\nKey=Value").unwrap();
    assert_eq!(doc.sections()[0].keys()[0].leading_comment().text(), Some(""));

    let doc = from_str(";hello\nKey=Value").unwrap();
    assert_eq!(
        doc.sections()[0].keys()[0].leading_comment().text(),
        Some("hello")
    );
}

#[test]
fn test_comment_indentation_tracking() {
    let doc = from_str("  ;indented\nKey = Value").unwrap();
    let key = &doc.sections()[0].keys()[0];
    assert_eq!(key.leading_comment().text(), Some("indented"));
    assert_eq!(key.leading_comment().left_indentation(), 2);
}

#[test]
fn test_value_edge_cases() {
    let source = "[Section]\n\
                  Key=\n\
                  Key=;\n\
                  Key= \n\
                  Key= ;\n\
                  Key =\n\
                  Key =;\n\
                  Key = \n\
                  Key = ;";

    let doc = from_str(source).unwrap();
    let keys = doc.sections()[0].keys();
    assert_eq!(keys.len(), 8);

    for key in keys {
        assert_eq!(key.value(), "");
        assert_eq!(key.trailing_comment().left_indentation(), 0);
    }
    // Alternating: no marker at all, then a bare marker.
    for pair in keys.chunks(2) {
        assert_eq!(pair[0].trailing_comment().text(), None);
        assert_eq!(pair[1].trailing_comment().text(), Some(""));
    }
}

#[test]
fn test_duplicate_sections_and_keys_are_kept() {
    let source = "[S]\nk = 1\nk = 2\n[S]\nk = 3";
    let doc = from_str(source).unwrap();

    assert_eq!(doc.sections().len(), 2);
    assert_eq!(doc.sections()[0].name(), "S");
    assert_eq!(doc.sections()[1].name(), "S");
    assert_eq!(doc.sections()[0].keys().len(), 2);
    assert_eq!(doc.sections()[0].keys()[0].value(), "1");
    assert_eq!(doc.sections()[0].keys()[1].value(), "2");
    assert_eq!(doc.sections()[1].keys()[0].value(), "3");
}

#[test]
fn test_pending_comment_at_end_of_input_is_discarded() {
    let doc = from_str("[S]\nKey = Value\n;orphan\n").unwrap();
    assert_eq!(doc.sections()[0].keys().len(), 1);
}

#[test]
fn test_unterminated_section_header() {
    let err = from_str("[S]\n[Broken\nKey = Value").unwrap_err();
    match err {
        Error::MalformedLine { line, text, .. } => {
            assert_eq!(line, 2);
            assert_eq!(text, "[Broken");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_line_without_delimiter_is_malformed() {
    let err = from_str("[S]\njust some words").unwrap_err();
    assert!(matches!(err, Error::MalformedLine { line: 2, .. }));
}

#[test]
fn test_first_occurrence_wins() {
    // The first delimiter terminates the name; later ones belong to the value.
    let doc = from_str("a=b=c").unwrap();
    let key = &doc.sections()[0].keys()[0];
    assert_eq!(key.name(), "a");
    assert_eq!(key.value(), "b=c");

    // A comment starter before any delimiter leaves no key to parse.
    assert!(from_str("a;b=c").is_err());
}

#[test]
fn test_invalid_utf8_reports_line_number() {
    let err = ini_preserve::from_slice(b"[S]\nKey = \xFF\xFE").unwrap_err();
    assert!(matches!(err, Error::Encoding { line: 2, .. }));
}
