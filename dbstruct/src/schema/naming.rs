//! Identifier normalization for generated code
//!
//! Database identifiers arrive as `snake_case`, `SCREAMING_CASE` or mixed
//! case. Struct and field names need exported Go identifiers (`TitleCase`),
//! JSON keys need `camelCase`. Words are found here; `convert_case` applies
//! the casing. Only ASCII letters and digits survive, so every result is a
//! legal Go identifier, and both conversions are idempotent.

use convert_case::{Case, Casing};

/// Convert an identifier to an exported `TitleCase` name
///
/// Every character that is not an ASCII letter or digit separates words, and
/// every upper-case letter starts a new word, so inner capitals are kept.
/// A result that would be empty or would not start with an upper-case letter
/// gets an `X` prefix.
///
/// # Examples
///
/// ```
/// # use dbstruct::schema::title_case;
/// assert_eq!(title_case("user_profile"), "UserProfile");
/// assert_eq!(title_case("_user__id2"), "UserId2");
/// assert_eq!(title_case("2fa_code"), "X2faCode");
/// assert_eq!(title_case("UserProfile"), "UserProfile");
/// assert_eq!(title_case("area_m²"), "AreaM");
/// ```
#[must_use]
pub fn title_case(input: &str) -> String {
    let out = words(input, false)
        .join("_")
        .from_case(Case::Snake)
        .to_case(Case::Pascal);
    legal(out, 'X', |c| c.is_ascii_uppercase())
}

/// Convert an identifier to a `camelCase` serialization key
///
/// Words are split like [`title_case`], except that a leading run of
/// capitals stays one word, minus its last capital when a lower-case letter
/// follows. Acronyms therefore read naturally.
///
/// # Examples
///
/// ```
/// # use dbstruct::schema::camel_case;
/// assert_eq!(camel_case("user_id"), "userId");
/// assert_eq!(camel_case("ID"), "id");
/// assert_eq!(camel_case("URLPath"), "urlPath");
/// assert_eq!(camel_case("2fa_code"), "x2faCode");
/// ```
#[must_use]
pub fn camel_case(input: &str) -> String {
    let out = words(input, true)
        .join("_")
        .from_case(Case::Snake)
        .to_case(Case::Camel);
    legal(out, 'x', |c| c.is_ascii_lowercase())
}

/// Collapse a free-text comment onto a single line
///
/// ```
/// # use dbstruct::schema::one_line;
/// assert_eq!(one_line("order\r\n  status\tcode "), "order status code");
/// ```
#[must_use]
pub fn one_line(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn words(input: &str, group_leading_capitals: bool) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if !c.is_ascii_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }

        let leading = group_leading_capitals
            && words.is_empty()
            && current.bytes().all(|b| b.is_ascii_uppercase());

        if c.is_ascii_uppercase() {
            if !leading {
                flush(&mut words, &mut current);
            }
        } else if c.is_ascii_lowercase() && leading && current.len() > 1 {
            // last capital of an acronym starts the next word
            if let Some(last) = current.pop() {
                flush(&mut words, &mut current);
                current.push(last);
            }
        }
        current.push(c);
    }
    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn legal(out: String, prefix: char, starts_ok: impl Fn(char) -> bool) -> String {
    if out.chars().next().is_some_and(starts_ok) {
        out
    } else {
        format!("{prefix}{out}")
    }
}
