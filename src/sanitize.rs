use regex::{NoExpand, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Latin-1 accented letters and their ASCII replacements. Anything not in
/// this table is left alone here; the sanitization pass later collapses
/// remaining non-ASCII characters into underscores.
const ACCENT_FOLDS: &[(char, &str)] = &[
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "a"),
    ('æ', "ae"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ð', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('þ', "th"),
    ('ß', "sz"),
    ('œ', "oe"),
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Å', "A"),
    ('Æ', "AE"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ð', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ø', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "U"),
    ('Ý', "Y"),
    ('Ÿ', "Y"),
    ('Þ', "TH"),
    ('Œ', "OE"),
];

static FOLD_MAP: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
static WHITESPACE_RUNS: OnceLock<Regex> = OnceLock::new();
static NON_WORD_RUNS: OnceLock<Regex> = OnceLock::new();
static UNDERSCORE_RUNS: OnceLock<Regex> = OnceLock::new();

fn fold_map() -> &'static HashMap<char, &'static str> {
    FOLD_MAP.get_or_init(|| ACCENT_FOLDS.iter().copied().collect())
}

fn whitespace_runs() -> &'static Regex {
    WHITESPACE_RUNS.get_or_init(|| Regex::new(r"\s+").unwrap())
}

fn non_word_runs() -> &'static Regex {
    NON_WORD_RUNS.get_or_init(|| Regex::new(r"[^0-9a-zA-Z_]+").unwrap())
}

fn underscore_runs() -> &'static Regex {
    UNDERSCORE_RUNS.get_or_init(|| Regex::new(r"_+").unwrap())
}

/// Replace every run of whitespace in `name` with one `replacement`.
pub fn replace_whitespace(name: &str, replacement: char) -> String {
    let rep = replacement.to_string();
    whitespace_runs()
        .replace_all(name, NoExpand(&rep))
        .into_owned()
}

/// Replace accented Latin-1 letters with their ASCII base letters.
pub fn fold_accents(name: &str) -> String {
    let map = fold_map();
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match map.get(&ch) {
            Some(base) => out.push_str(base),
            None => out.push(ch),
        }
    }
    out
}

/// Reduce `name` to `[0-9A-Za-z_]`: fold accents, collapse every other run
/// of characters into a single underscore, collapse underscore runs, and
/// trim trailing underscores. Leading underscores are kept.
pub fn sanitize_name(name: &str) -> String {
    let folded = fold_accents(name);
    let collapsed = non_word_runs().replace_all(&folded, "_");
    let collapsed = underscore_runs().replace_all(&collapsed, "_");
    collapsed.trim_end_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_become_one_replacement() {
        assert_eq!(replace_whitespace("a  b\tc", '-'), "a-b-c");
        assert_eq!(replace_whitespace("My Photo", '_'), "My_Photo");
        assert_eq!(replace_whitespace("plain", '_'), "plain");
    }

    #[test]
    fn test_replacement_char_is_literal() {
        assert_eq!(replace_whitespace("a b", '$'), "a$b");
    }

    #[test]
    fn test_accents_fold_to_ascii() {
        assert_eq!(fold_accents("café"), "cafe");
        assert_eq!(fold_accents("Ångström"), "Angstrom");
        assert_eq!(fold_accents("Œuvre straße"), "OEuvre strasze");
        assert_eq!(fold_accents("plain"), "plain");
    }

    #[test]
    fn test_sanitize_collapses_and_trims() {
        assert_eq!(sanitize_name("My_Photo_(2023)!!"), "My_Photo_2023");
        assert_eq!(sanitize_name("a--b__c"), "a_b_c");
        assert_eq!(sanitize_name("name..."), "name");
    }

    #[test]
    fn test_sanitize_keeps_leading_underscores() {
        assert_eq!(sanitize_name("(x)"), "_x");
    }

    #[test]
    fn test_sanitize_folds_before_collapsing() {
        assert_eq!(sanitize_name("résumé café"), "resume_cafe");
    }

    #[test]
    fn test_unmapped_symbols_collapse_to_underscore() {
        assert_eq!(sanitize_name("写真2023"), "_2023");
    }
}
