//! Tera filters that refuse to substitute anything that is not valid Rust.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex_lite::Regex;
use tera::{Tera, Value};

/// Strict and reserved keywords that cannot name a type or module.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn ident_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"))
}

pub fn register(tera: &mut Tera) {
    tera.register_filter("ident", ident);
    tera.register_filter("module_path", module_path);
}

/// Whether `s` is a plain (non-keyword) Rust identifier.
pub fn is_ident(s: &str) -> bool {
    s != "_" && ident_regex().is_match(s) && !KEYWORDS.contains(&s)
}

/// Whether `s` is a `::`-separated path of identifiers, relative to the
/// crate root (the template prefixes it with `crate::`).
pub fn is_module_path(s: &str) -> bool {
    s.split("::").all(is_ident)
}

fn ident(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    check(value, "identifier", is_ident)
}

fn module_path(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    check(value, "module path", is_module_path)
}

fn check(value: &Value, what: &str, valid: fn(&str) -> bool) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("expected a string {what}, got {value}")))?;
    if valid(s) {
        Ok(value.clone())
    } else {
        Err(tera::Error::msg(format!("'{s}' is not a valid Rust {what}")))
    }
}
