use super::*;

mod comments_sanitize;
mod options;
mod quotes_strings;

/// Shorthand used throughout this module: repair with default options and
/// unwrap, since every case here is expected to succeed.
fn r(input: &str) -> String {
    repair(input, &Options::default()).unwrap()
}

fn v(input: &str) -> serde_json::Value {
    serde_json::from_str(&r(input)).unwrap()
}
