//! Suburb/postcode URL slugs.
//!
//! A slug is the lower-cased suburb name and postcode with words joined by
//! `-`: `("South Yarra", "3141")` → `south-yarra-3141`. The rules follow
//! the web client's slugify settings so both produce the same URLs:
//!
//! - `-` separates words like whitespace does.
//! - Latin-1 letters are transliterated (`é` → `e`, `ß` → `ss`) and a few
//!   symbols become words (`&` → `and`).
//! - Anything else outside ASCII letters, digits and whitespace is dropped,
//!   including `_` and apostrophes.
//!
//! Decoding takes the last `-` token as the postcode and rejoins the rest
//! with spaces. This is ambiguous for suburb names that already contain a
//! numeric token, and the original capitalisation and punctuation of the
//! suburb are not recoverable.

/// A slug split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuburbSlug {
    /// Lower-cased suburb name with words separated by single spaces.
    pub suburb: String,
    /// The final slug token.
    pub postcode: String,
}

/// Slugifies arbitrary text.
#[must_use]
pub fn to_slug(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '-' {
            cleaned.push(' ');
        } else if let Some(ascii) = transliterate(c) {
            cleaned.push_str(ascii);
        } else if c.is_ascii_alphanumeric() || c.is_whitespace() {
            cleaned.push(c);
        }
    }

    cleaned
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

const fn transliterate(c: char) -> Option<&'static str> {
    Some(match c {
        'À'..='Å' => "A",
        'à'..='å' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' => "C",
        'ç' => "c",
        'È'..='Ë' => "E",
        'è'..='ë' => "e",
        'Ì'..='Ï' => "I",
        'ì'..='ï' => "i",
        'Ð' => "D",
        'ð' => "d",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò'..='Ö' | 'Ø' => "O",
        'ò'..='ö' | 'ø' => "o",
        'Ù'..='Ü' => "U",
        'ù'..='ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'Þ' => "TH",
        'þ' => "th",
        'ß' => "ss",
        'Œ' => "OE",
        'œ' => "oe",
        '&' => "and",
        '|' => "or",
        '<' => "less",
        '>' => "greater",
        '$' => "dollar",
        '%' => "percent",
        _ => return None,
    })
}

/// Builds the slug for a suburb and postcode.
#[must_use]
pub fn create_slug(suburb: &str, postcode: &str) -> String {
    to_slug(&format!("{suburb} {postcode}"))
}

/// Splits a slug into suburb and postcode. Returns `None` when the slug
/// has fewer than two `-` separated tokens.
#[must_use]
pub fn parse_slug(slug: &str) -> Option<SuburbSlug> {
    let (suburb, postcode) = slug.rsplit_once('-')?;

    Some(SuburbSlug {
        suburb: suburb.split('-').collect::<Vec<_>>().join(" "),
        postcode: postcode.to_string(),
    })
}
