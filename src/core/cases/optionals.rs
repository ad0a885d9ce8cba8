//! Absence handling with `Option`

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::case::Transcript;
use crate::core::cases::errors::{check_password, Failure};

/// Number returned by [`pick_number`] when there is nothing to pick from
pub const FALLBACK_PICK: i32 = 42;

/// Fallback operator: the wrapped value if present, `default` otherwise
pub fn or_default<T>(value: Option<T>, default: T) -> T {
    value.unwrap_or(default)
}

/// Display name with "Anonymous" standing in for a missing one
pub fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or("Anonymous")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: Option<String>,
}

/// Upper-cased first letter of a book's author.
///
/// Short-circuits to `None` when the book, the author or the first
/// character is missing.
pub fn author_initial(book: Option<&Book>) -> Option<char> {
    book.and_then(|b| b.author.as_deref())
        .and_then(|author| author.chars().next())
        .map(|c| c.to_ascii_uppercase())
}

/// Unwrap or leave early
pub fn square(number: Option<i32>, out: &Transcript) -> Option<i32> {
    let Some(number) = number else {
        out.line("Missing input");
        return None;
    };
    Some(number * number)
}

/// First value of an optional list; a fixed fallback when missing or empty
pub fn pick_number(values: Option<&[i32]>) -> i32 {
    values
        .and_then(|v| v.first().copied())
        .unwrap_or(FALLBACK_PICK)
}

// ==================== Cases ====================

pub fn absence_sentinel(out: &Transcript) -> Result<(), Failure> {
    let values: [(&str, Option<i32>); 3] = [("none", None), ("zero", Some(0)), ("five", Some(5))];
    for (label, value) in values {
        match value {
            Some(v) => out.line(format!("{label}: present ({v})")),
            None => out.line(format!("{label}: absent")),
        }
    }

    let empty: Option<String> = Some(String::new());
    out.line(format!("empty text is present: {}", empty.is_some()));
    Ok(())
}

pub fn unwrapping(out: &Transcript) -> Result<(), Failure> {
    let opponents = BTreeMap::from([
        ("Mario", "Bowser"),
        ("Luke", "Vader"),
        ("Peter", "Green Goblin"),
    ]);

    if let Some(villain) = opponents.get("Peter") {
        out.line(format!("Next in line: {villain}"));
    }
    match opponents.get("Link") {
        Some(villain) => out.line(format!("Link faces {villain}")),
        None => out.line("Link has no opponent"),
    }

    for input in [Some(4), None] {
        if let Some(result) = square(input, out) {
            out.line(format!("{} squared is {result}", input.unwrap_or_default()));
        }
    }
    Ok(())
}

pub fn fallback(out: &Transcript) -> Result<(), Failure> {
    for name in [None, Some(""), Some("Taylor")] {
        out.line(format!("name {:?} -> {:?}", name, display_name(name)));
    }
    for score in [None, Some(0), Some(7)] {
        out.line(format!("score {:?} -> {}", score, or_default(score, -1)));
    }

    let ratings = [("cherries3", check_password("cherries3").ok()), ("hi", check_password("hi").ok())];
    for (password, rating) in ratings {
        debug!(target: "tour::optionals", password, ?rating, "failure converted to option");
        let rating = rating.map_or_else(|| "no rating".to_string(), |r| r.to_string());
        out.line(format!("{password}: {rating}"));
    }
    Ok(())
}

pub fn chaining(out: &Transcript) -> Result<(), Failure> {
    let signed = Book {
        title: "Beowulf".to_string(),
        author: Some("anonymous".to_string()),
    };
    let unsigned = Book {
        title: "Dune".to_string(),
        author: None,
    };

    for (label, book) in [("signed", Some(&signed)), ("unsigned", Some(&unsigned)), ("missing", None)] {
        let title = book.map(|b| b.title.as_str()).unwrap_or("-");
        let initial = author_initial(book).unwrap_or('A');
        out.line(format!("{label} ({title}): {initial}"));
    }

    out.line(pick_number(Some(&[1, 2, 3][..])).to_string());
    out.line(pick_number(Some(&[][..])).to_string());
    out.line(pick_number(None).to_string());
    Ok(())
}
