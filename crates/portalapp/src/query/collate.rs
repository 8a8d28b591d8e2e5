//! Locale-aware string comparison and case folding.
//!
//! Sorting text by code point puts `"Zebra"` before `"apple"` and scatters
//! accented or non-Latin titles. [`Collation`] wraps an ICU collator for the
//! active language tag so lists order the way readers of that language expect.
//!
//! A tag ICU cannot parse or has no data for falls back to the root collation,
//! and if even that is unavailable comparison degrades to code-point order.
//! Building a collation never fails.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;

pub enum Collation {
    Icu(Box<Collator>),
    CodePoint,
}

impl Collation {
    /// Build the collation for a language tag such as `"en"`, `"ar"` or `"sv-SE"`.
    pub fn for_locale(tag: &str) -> Self {
        let tailored = tag
            .trim()
            .parse::<Locale>()
            .ok()
            .and_then(|locale| Collator::try_new(&locale.into(), CollatorOptions::new()).ok());

        if let Some(collator) = tailored {
            return Collation::Icu(Box::new(collator));
        }

        tracing::debug!(locale = tag, "no tailored collation, using root");
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Collation::Icu(Box::new(collator)),
            Err(_) => Collation::CodePoint,
        }
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match self {
            Collation::Icu(collator) => collator.compare(left, right),
            Collation::CodePoint => left.cmp(right),
        }
    }
}

/// Case-fold text for substring search.
pub fn casefold(input: &str) -> String {
    if input.is_ascii() {
        return input.to_ascii_lowercase();
    }

    input.to_lowercase()
}
