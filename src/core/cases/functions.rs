//! Functions: parameters, defaults, multiple return values

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

pub const DEFAULT_TABLE_END: u32 = 12;

/// Multiplication table for `number` up to `end`, or [`DEFAULT_TABLE_END`]
pub fn times_table(number: u32, end: Option<u32>) -> Vec<String> {
    let end = end.unwrap_or(DEFAULT_TABLE_END);
    (1..=end).map(|i| format!("{i} x {number} is {}", i * number)).collect()
}

/// Two strings are anagrams when their sorted letters match
pub fn are_anagrams(a: &str, b: &str) -> bool {
    let sorted = |s: &str| {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    };
    sorted(a) == sorted(b)
}

pub fn pythagoras(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

pub fn user_tuple() -> (&'static str, &'static str) {
    ("Taylor", "Swift")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub first_name: &'static str,
    pub last_name: &'static str,
}

pub fn user_struct() -> FullName {
    FullName {
        first_name: "Taylor",
        last_name: "Swift",
    }
}

pub fn parameters(out: &Transcript) -> Result<(), Failure> {
    for line in times_table(5, Some(3)) {
        out.line(line);
    }
    let table = times_table(8, None);
    out.line(format!("default table has {} rows, last: {}", table.len(), table[table.len() - 1]));

    out.line(format!("{:.1}", pythagoras(3.0, 4.0)));
    for (a, b) in [("abc", "cab"), ("abc", "abd")] {
        out.line(format!("{a} and {b} are anagrams: {}", are_anagrams(a, b)));
    }
    Ok(())
}

pub fn multiple_returns(out: &Transcript) -> Result<(), Failure> {
    let user = user_tuple();
    out.line(format!("Name: {} {}", user.0, user.1));

    let named = user_struct();
    out.line(format!("Name: {} {}", named.first_name, named.last_name));

    let (first_name, _) = user_tuple();
    out.line(format!("First only: {first_name}"));

    let FullName { last_name, .. } = user_struct();
    out.line(format!("Last only: {last_name}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_table_default_end() {
        let table = times_table(2, None);
        assert_eq!(table.len(), 12);
        assert_eq!(table[11], "12 x 2 is 24");
        assert_eq!(times_table(2, Some(0)), Vec::<String>::new());
    }

    #[test]
    fn test_are_anagrams() {
        assert!(are_anagrams("listen", "silent"));
        assert!(!are_anagrams("listen", "listens"));
    }

    #[test]
    fn test_pythagoras() {
        assert!((pythagoras(3.0, 4.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tuple_and_struct_agree() {
        let (first, last) = user_tuple();
        assert_eq!(
            user_struct(),
            FullName {
                first_name: first,
                last_name: last
            }
        );
    }
}
