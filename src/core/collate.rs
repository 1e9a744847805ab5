// src/core/collate.rs
//
// Locale-aware lowercasing and ordering for country names.
// Three levels, compared in turn: base letter, accent, case.
// Latin accents fold onto the base letter, except where the locale
// treats the accented form as a letter of its own (Turkish ç ğ ı ö ş ü).

use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    Turkish,
    Root,
}

impl Locale {
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::Turkish => "tr",
            Locale::Root => "root",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" | "tr-tr" | "turkish" => Some(Locale::Turkish),
            "root" | "und" | "en" | "default" => Some(Locale::Root),
            _ => None,
        }
    }

    /// Lowercase with the locale's special cases (Turkish dotted/dotless i).
    pub fn to_lower(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        for ch in s.chars() {
            match (self, ch) {
                (Locale::Turkish, 'I') => out.push('ı'),
                (Locale::Turkish, 'İ') => out.push('i'),
                _ => out.extend(ch.to_lowercase()),
            }
        }
        out
    }

    /// Case-insensitive prefix test. An empty prefix matches everything.
    pub fn starts_with(&self, candidate: &str, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        self.to_lower(candidate).starts_with(&self.to_lower(prefix))
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ka = self.key(a);
        let kb = self.key(b);

        ka.iter().map(|w| w.primary).cmp(kb.iter().map(|w| w.primary))
            .then_with(|| ka.iter().map(|w| w.secondary).cmp(kb.iter().map(|w| w.secondary)))
            .then_with(|| ka.iter().map(|w| w.tertiary).cmp(kb.iter().map(|w| w.tertiary)))
            .then_with(|| a.cmp(b))
    }

    pub fn sort(&self, items: &mut [String]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    fn key(&self, s: &str) -> Vec<Weight> {
        s.chars().map(|ch| self.weigh(ch)).collect()
    }

    fn weigh(&self, ch: char) -> Weight {
        let lower = self.lower_char(ch);
        let tertiary = u8::from(lower != ch);

        if let Some(primary) = self.tailored(lower) {
            return Weight { primary, secondary: 0, tertiary };
        }

        let (base, secondary) = fold_accent(lower).unwrap_or((lower, 0));
        let primary = match base {
            c if c.is_whitespace() => 1,
            c if c.is_ascii_punctuation() => 2 + c as u32 % 32,
            c @ '0'..='9' => 40 + (c as u32 - '0' as u32),
            c @ 'a'..='z' => letter(c),
            c if c.is_alphabetic() => NON_LATIN + c as u32,
            // symbols, controls and the rest sort with punctuation
            _ => 35,
        };
        Weight { primary, secondary, tertiary }
    }

    fn lower_char(&self, ch: char) -> char {
        match (self, ch) {
            (Locale::Turkish, 'I') => 'ı',
            (Locale::Turkish, 'İ') => 'i',
            (_, 'İ') => 'i',
            _ => ch.to_lowercase().next().unwrap_or(ch),
        }
    }

    /// Letters that get their own primary weight in this locale.
    fn tailored(&self, lower: char) -> Option<u32> {
        match self {
            Locale::Turkish => match lower {
                'ç' => Some(letter('c') + 1),
                'ğ' => Some(letter('g') + 1),
                'ı' => Some(letter('i') - 1),
                'ö' => Some(letter('o') + 1),
                'ş' => Some(letter('s') + 1),
                'ü' => Some(letter('u') + 1),
                _ => None,
            },
            Locale::Root => match lower {
                'ı' => Some(letter('i') + 1),
                _ => None,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Weight {
    primary: u32,
    secondary: u8,
    tertiary: u8,
}

const LETTER_BASE: u32 = 100;
const NON_LATIN: u32 = 10_000;

// Spaced by 4 so tailored letters can slot in either side.
fn letter(c: char) -> u32 {
    LETTER_BASE + (c as u32 - 'a' as u32) * 4
}

/// Base letter and accent rank for common Latin letters with diacritics.
fn fold_accent(c: char) -> Option<(char, u8)> {
    let folded = match c {
        'à' => ('a', 1), 'á' => ('a', 2), 'â' => ('a', 3), 'ã' => ('a', 4),
        'ä' => ('a', 5), 'å' => ('a', 6), 'ā' => ('a', 7), 'ă' => ('a', 8),
        'ç' => ('c', 1), 'č' => ('c', 2), 'ć' => ('c', 3),
        'è' => ('e', 1), 'é' => ('e', 2), 'ê' => ('e', 3), 'ë' => ('e', 4), 'ē' => ('e', 5),
        'ğ' => ('g', 1),
        'ì' => ('i', 1), 'í' => ('i', 2), 'î' => ('i', 3), 'ï' => ('i', 4), 'ī' => ('i', 5),
        'ñ' => ('n', 1), 'ń' => ('n', 2),
        'ò' => ('o', 1), 'ó' => ('o', 2), 'ô' => ('o', 3), 'õ' => ('o', 4),
        'ö' => ('o', 5), 'ø' => ('o', 6), 'ō' => ('o', 7),
        'ş' => ('s', 1), 'š' => ('s', 2), 'ś' => ('s', 3),
        'ù' => ('u', 1), 'ú' => ('u', 2), 'û' => ('u', 3), 'ü' => ('u', 4), 'ū' => ('u', 5),
        'ý' => ('y', 1), 'ÿ' => ('y', 2),
        'ž' => ('z', 1), 'ź' => ('z', 2), 'ż' => ('z', 3),
        _ => return None,
    };
    Some(folded)
}
