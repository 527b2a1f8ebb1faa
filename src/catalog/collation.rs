//! Name ordering for destination listings
//!
//! Approximates a root-locale string comparison: letters compare without regard
//! to case or Latin diacritics, so "Curaçao" sorts next to "Curacao" and
//! "Île de Ré" sorts under "I". Ties fall back to the raw strings so the order
//! is total.

use std::cmp::Ordering;

/// Compare two display names the way listings expect them sorted
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    folded_chars(a)
        .cmp(folded_chars(b))
        .then_with(|| a.cmp(b))
}

/// Primary collation key for a name (lowercase, diacritics removed)
#[must_use]
pub fn collation_key(name: &str) -> String {
    folded_chars(name).collect()
}

fn folded_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).flat_map(fold_char)
}

/// Strip the diacritic from a lowercase Latin letter. Ligatures expand.
fn fold_char(c: char) -> FoldedChar {
    let base = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'ĉ' | 'ċ' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ĝ' | 'ğ' | 'ġ' | 'ģ' => 'g',
        'ĥ' | 'ħ' => 'h',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'ĭ' | 'į' | 'ı' => 'i',
        'ĵ' => 'j',
        'ķ' => 'k',
        'ĺ' | 'ļ' | 'ľ' | 'ŀ' | 'ł' => 'l',
        'ñ' | 'ń' | 'ņ' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ŏ' | 'ő' => 'o',
        'ŕ' | 'ŗ' | 'ř' => 'r',
        'ś' | 'ŝ' | 'ş' | 'š' | 'ș' => 's',
        'ţ' | 'ť' | 'ŧ' | 'ț' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ŭ' | 'ů' | 'ű' | 'ų' => 'u',
        'ŵ' => 'w',
        'ý' | 'ÿ' | 'ŷ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        'ß' => return FoldedChar::Pair('s', 's'),
        'æ' => return FoldedChar::Pair('a', 'e'),
        'œ' => return FoldedChar::Pair('o', 'e'),
        other => other,
    };
    FoldedChar::One(base)
}

enum FoldedChar {
    One(char),
    Pair(char, char),
    Done,
}

impl Iterator for FoldedChar {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        match *self {
            FoldedChar::One(c) => {
                *self = FoldedChar::Done;
                Some(c)
            }
            FoldedChar::Pair(first, second) => {
                *self = FoldedChar::One(second);
                Some(first)
            }
            FoldedChar::Done => None,
        }
    }
}
