//! Abbreviations that do not end a sentence.
//!
//! Only forms that are rarely an ordinary sentence-final word are listed.
//! Units ("in", "m") and words such as "no" or "sun" are left out, since a
//! false hit there glues two real sentences together.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Titles, honorifics and degrees.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "sr", "jr", "st", "messrs", "mmes", "msgr",
    "hon", "esq", "capt", "col", "gen", "lt", "maj", "sgt", "cpl", "pvt", "adm", "cmdr", "sen",
    "rep", "gov", "pres", "phd", "ph.d", "m.d", "b.a", "m.a", "b.s", "m.s", "m.b.a", "j.d",
    "д-р", "проф", "акад",
];

/// Latin and reference shorthand.
const REFERENCES: &[&str] = &[
    "etc", "vs", "e.g", "i.e", "cf", "viz", "ibid", "al", "n.b", "p.s", "vol", "pp", "ch",
    "fig", "eq", "approx", "ref", "refs", "eds", "ed", "nos",
];

/// Dates, places and organizations.
const NAMES: &[&str] = &[
    "jan", "feb", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "tue",
    "tues", "thu", "thur", "thurs", "a.m", "p.m", "b.c", "a.d", "ave", "blvd", "rd", "apt",
    "ste", "bldg", "dept", "mt", "u.s", "u.k", "u.s.a", "e.u", "inc", "corp", "ltd", "llc",
    "co", "bros", "assn", "intl",
];

static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    TITLES
        .iter()
        .chain(REFERENCES)
        .chain(NAMES)
        .copied()
        .collect()
});

/// One or more dotted capitals without the final period: `J`, `J.K`, `U.S.A`.
static INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{Lu}(?:\.\p{Lu})*$").expect("valid regex"));

/// Whether `word` (with or without trailing periods) is a known abbreviation.
pub fn is_abbreviation(word: &str) -> bool {
    let word = word.trim_end_matches('.').to_lowercase();
    ABBREVIATIONS.contains(word.as_str())
}

/// Whether `word` (trailing periods removed) looks like a person's initials.
pub fn is_initial(word: &str) -> bool {
    INITIALS.is_match(word.trim_end_matches('.'))
}

/// Whether `text` ends with a period that belongs to an abbreviation or an
/// initial rather than closing a sentence.
pub fn ends_with_abbreviation(text: &str) -> bool {
    if !text.ends_with('.') {
        return false;
    }
    let word = text
        .trim_end_matches('.')
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    !word.is_empty() && (is_abbreviation(word) || is_initial(word))
}
