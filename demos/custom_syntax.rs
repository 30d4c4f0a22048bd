//! Parsing a non-default dialect: `#` comments, `{...}` sections, `:` delimiter.
//!
//! Run with: `cargo run --example custom_syntax`

use ini_preserve::{
    from_str_with_options, to_string, CommentStarter, IniOptions, KeyDelimiter, SectionWrapper,
};

fn main() {
    let source = "\
# build profiles
{release}
opt-level : 3 #maximum
lto : thin
";

    let options = IniOptions::new()
        .with_comment_starter(CommentStarter::Hash)
        .with_section_wrapper(SectionWrapper::CurlyBrackets)
        .with_key_delimiter(KeyDelimiter::Colon);

    let doc = from_str_with_options(source, options).expect("valid input");

    let release = doc.section("release").expect("release section");
    println!("opt-level = {}", release.key("opt-level").expect("key").value());
    println!(
        "inline comment: {:?}",
        release.key("opt-level").expect("key").trailing_comment().text()
    );

    assert_eq!(to_string(&doc), source);
}
