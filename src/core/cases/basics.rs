//! Basics: bindings, strings and numbers

use tracing::debug;

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

pub const CHARACTER: &str = "Daphne";

pub const QUOTE: &str = "Then he tapped a sign saying \"Believe\" and walked away.";

pub const MOVIE: &str = "A day in
the life of an \nApple engineer";

/// Whole-number multiple check; only zero is a multiple of zero
pub fn is_multiple(n: i32, of: i32) -> bool {
    match n.checked_rem(of) {
        Some(rem) => rem == 0,
        // `of == 0`, or `i32::MIN % -1` overflowing
        None => of != 0 || n == 0,
    }
}

/// Applies `+= 5`, `*= 2`, `/= 3`, `-= 1` in turn
pub fn compound(start: i32) -> i32 {
    let mut counter = start;
    counter += 5;
    counter *= 2;
    counter /= 3;
    counter -= 1;
    counter
}

pub fn bindings_and_strings(out: &Transcript) -> Result<(), Failure> {
    let mut name = "Ted";
    let mut history = vec![name];
    name = "Rebecca";
    history.push(name);
    name = "Keeley";
    history.push(name);
    out.line(format!("name: {}", history.join(" -> ")));
    out.line(format!("constant: {CHARACTER}"));

    // Shadowing rebinds the name with a new type
    let name = name.len();
    out.line(format!("rebound to its length: {name}"));

    out.line(QUOTE);
    out.line(format!("{} characters", QUOTE.chars().count()));
    out.line(QUOTE.to_uppercase());

    out.line(format!("{} lines: {MOVIE:?}", MOVIE.lines().count()));
    debug!(target: "tour::basics", bytes = MOVIE.len(), "multi-line literal");
    out.line(format!("starts with \"a day\": {}", MOVIE.starts_with("a day")));
    out.line(format!("starts with \"A day\": {}", MOVIE.starts_with("A day")));
    Ok(())
}

pub fn numbers(out: &Transcript) -> Result<(), Failure> {
    let score = 100;
    let big_score = 1_000_000;
    let lower_score = score - 2;
    out.line(format!("score {score}, big score {big_score}, lower score {lower_score}"));

    let counter = compound(10);
    out.line(format!("counter: {counter}"));
    out.line(format!("{counter} is a multiple of 3: {}", is_multiple(counter, 3)));

    let sum = 0.1 + 0.2;
    out.line(format!("0.1 + 0.2 = {sum}"));
    out.line(format!("equals 0.3: {}", sum == 0.3));

    let a: i32 = 1;
    let b = 2.0;
    let c = f64::from(a) + b;
    debug!(target: "tour::basics", a, b, c, "widened before adding");
    out.line(format!("{a} + {b:?} = {c:?}"));

    let mut rating = 10;
    rating *= 2;
    out.line(format!("rating: {rating}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_multiple() {
        assert!(is_multiple(9, 3));
        assert!(!is_multiple(10, 3));
        assert!(is_multiple(-6, 3));
        assert!(is_multiple(0, 0));
        assert!(!is_multiple(5, 0));
        assert!(is_multiple(i32::MIN, -1));
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(compound(10), 9);
        assert_eq!(compound(1), 3);
    }

    #[test]
    fn test_prefix_check_is_case_sensitive() {
        assert!(MOVIE.starts_with("A day"));
        assert!(!MOVIE.starts_with("a day"));
    }

    #[test]
    fn test_numbers_case() {
        let out = Transcript::new();
        numbers(&out).unwrap();
        let lines = out.lines();
        assert_eq!(lines[1], "counter: 9");
        assert_eq!(lines[2], "9 is a multiple of 3: true");
        assert_eq!(lines[3], "0.1 + 0.2 = 0.30000000000000004");
        assert_eq!(lines[5], "1 + 2.0 = 3.0");
    }
}
