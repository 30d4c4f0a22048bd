//! Basic usage: parse a file, inspect it, edit a value, write it back.
//!
//! Run with: `cargo run --example basic`

use ini_preserve::{from_str, to_string};

fn main() {
    let source = "\
; application configuration
[server]
host = 0.0.0.0
port = 8080 ;change before deploying

[limits]
max_connections = 100
";

    let mut doc = from_str(source).expect("valid INI");

    // Read access
    let server = doc.section("server").expect("server section");
    println!("host = {}", server.key("host").expect("host key").value());

    // The round trip is byte-exact
    assert_eq!(to_string(&doc), source);

    // Edit a value; comments and whitespace layout survive
    for section in doc.sections_mut() {
        if section.name() == "server" {
            for key in section.keys_mut() {
                if key.name() == "port" {
                    key.set_value("9090");
                }
            }
        }
    }

    println!("---\n{}", to_string(&doc));
}
