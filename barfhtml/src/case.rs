//! Key-naming conventions for attributes and CSS properties.

use bumpalo::collections::String as BumpString;
use convert_case::{Case, Casing};

/// Convert a camelCase key to dashed-case.
///
/// Every ASCII uppercase letter is prefixed with a dash, then the whole key is lowercased.
/// Consecutive and leading capitals are not special-cased, so `ARIALabel` becomes
/// `-a-r-i-a-label`. Use [`kebab_case`] for a word-aware conversion.
///
/// ```
/// assert_eq!(barfhtml::camel_to_dashed("fontSize"), "font-size");
/// assert_eq!(barfhtml::camel_to_dashed("ARIA"), "-a-r-i-a");
/// ```
pub fn camel_to_dashed(key: &str) -> String {
    let mut dashed = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            dashed.push('-');
        }
        dashed.push(c);
    }
    dashed.to_lowercase()
}

/// Convert a key to kebab-case, treating runs of capitals as a single word.
///
/// ```
/// assert_eq!(barfhtml::kebab_case("backgroundColor"), "background-color");
/// assert_eq!(barfhtml::kebab_case("innerHTML"), "inner-html");
/// ```
pub fn kebab_case(key: &str) -> String {
    key.to_case(Case::Kebab)
}

/// Append `key` to `out`, converted with [`camel_to_dashed`] if `convert` is set.
pub(crate) fn push_key(out: &mut BumpString<'_>, key: &str, convert: bool) {
    if convert {
        out.push_str(&camel_to_dashed(key));
    } else {
        out.push_str(key);
    }
}
