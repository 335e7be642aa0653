// File: crates/freechart-core/src/parse/clean.rs
// Summary: Input cleaner; strips wrapper text (calls, labels) and normalizes inline whitespace.

use std::sync::OnceLock;

use regex::Regex;

// Characters that can belong to numeric data: digits, signs, dots, commas,
// whitespace and the square/round brackets that delimit groups.
const DATA_CHARS: &str = r"\[\]()0-9+\-.,\s";

fn leading_noise() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("^[^{DATA_CHARS}]+")).expect("leading pattern"))
}

fn trailing_noise() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("[^{DATA_CHARS}]+$")).expect("trailing pattern"))
}

fn inline_space() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t]+").expect("space pattern"))
}

fn function_call() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z_][A-Za-z0-9_]*\s*\(([^)]+)\)").expect("call pattern"))
}

fn label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("[^{DATA_CHARS}]+:")).expect("label pattern"))
}

/// Reduce pasted text to its numeric payload.
///
/// Steps, in order: drop leading and trailing characters that cannot belong to
/// numeric data; collapse spaces and tabs (newlines are kept, they carry the
/// series structure); unwrap a lone `name(args)` call to `args`; remove
/// `label:` prefixes.
pub fn clean(text: &str) -> String {
    let stripped = leading_noise().replace(text, "");
    let stripped = trailing_noise().replace(&stripped, "");
    let collapsed = inline_space().replace_all(&stripped, " ");
    let mut cleaned = collapsed.trim().to_string();

    if let Some(args) = unwrap_call(&cleaned) {
        cleaned = args;
    }

    label().replace_all(&cleaned, "").into_owned()
}

/// Arguments of the call when the text holds exactly one `name(args)` shape.
pub fn unwrap_call(text: &str) -> Option<String> {
    let mut calls = function_call().captures_iter(text);
    let first = calls.next()?;
    if calls.next().is_some() {
        return None;
    }
    first.get(1).map(|args| args.as_str().to_string())
}
