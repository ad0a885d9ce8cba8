//! Typed error propagation
//!
//! Failing operations return `Result` with a closed set of categories.
//! Callers pair each call with category-specific handlers plus a
//! catch-all; whatever a frame does not handle moves up with `?`.
//! [`force`] is the no-failure assertion: violating it panics.

use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;
use tracing::{debug, trace};

use crate::core::case::Transcript;

// ==================== Failure categories ====================

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password is too short")]
    Short,
    #[error("password is too obvious")]
    Obvious,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareRootError {
    #[error("number is outside 1..=10000")]
    OutOfBounds,
    #[error("number has no integer square root")]
    NoRoot,
}

/// Every recoverable failure a case can raise
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    SquareRoot(#[from] SquareRootError),
}

impl Failure {
    /// Stable category name, used in handler output and top-level reports
    pub fn category(&self) -> &'static str {
        match self {
            Failure::Password(PasswordError::Short) => "PasswordError::Short",
            Failure::Password(PasswordError::Obvious) => "PasswordError::Obvious",
            Failure::SquareRoot(SquareRootError::OutOfBounds) => "SquareRootError::OutOfBounds",
            Failure::SquareRoot(SquareRootError::NoRoot) => "SquareRootError::NoRoot",
        }
    }
}

// ==================== Call state ====================

/// Lifecycle of a single fallible call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallState {
    Ready,
    Invoked,
    Returned,
    Raised,
}

impl CallState {
    pub fn is_terminal(self) -> bool {
        matches!(self, CallState::Returned | CallState::Raised)
    }

    pub fn can_transition(self, next: CallState) -> bool {
        matches!(
            (self, next),
            (CallState::Ready, CallState::Invoked)
                | (CallState::Invoked, CallState::Returned)
                | (CallState::Invoked, CallState::Raised)
        )
    }

    fn advance(self, next: CallState, label: &str) -> CallState {
        debug_assert!(self.can_transition(next), "{self:?} -> {next:?}");
        trace!(target: "tour::errors", call = label, from = ?self, to = ?next, "call state");
        next
    }
}

/// Run a fallible operation through Ready → Invoked → {Returned | Raised}
pub fn invoke<T, E>(label: &str, op: impl FnOnce() -> Result<T, E>) -> Result<T, Failure>
where
    E: Into<Failure>,
{
    let state = CallState::Ready.advance(CallState::Invoked, label);
    let result = op().map_err(Into::into);
    match &result {
        Ok(_) => state.advance(CallState::Returned, label),
        Err(e) => {
            debug!(target: "tour::errors", call = label, category = e.category(), "raised");
            state.advance(CallState::Raised, label)
        }
    };
    result
}

/// No-failure assertion.
///
/// # Panics
/// Always, when `result` holds a failure. This is fatal by design of the
/// call site and is never caught.
pub fn force<T>(result: Result<T, Failure>) -> T {
    match result {
        Ok(value) => value,
        Err(failure) => panic!("forced unwrap raised {}", failure.category()),
    }
}

// ==================== Fallible operations ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Ok,
    Good,
    Excellent,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rating::Ok => "OK",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        };
        f.write_str(text)
    }
}

pub fn check_password(password: &str) -> Result<Rating, PasswordError> {
    let length = password.chars().count();
    if length < 5 {
        return Err(PasswordError::Short);
    }
    if password == "password" {
        return Err(PasswordError::Obvious);
    }
    Ok(match length {
        0..=7 => Rating::Ok,
        8..=9 => Rating::Good,
        _ => Rating::Excellent,
    })
}

pub const ROOT_RANGE: RangeInclusive<u32> = 1..=10_000;

/// Integer square root of a number in [`ROOT_RANGE`]
pub fn square_root(number: u32) -> Result<u32, SquareRootError> {
    if !ROOT_RANGE.contains(&number) {
        return Err(SquareRootError::OutOfBounds);
    }
    (1..=number)
        .take_while(|i| i * i <= number)
        .find(|i| i * i == number)
        .ok_or(SquareRootError::NoRoot)
}

// ==================== Handlers ====================

/// Specific handlers for both password categories, then a catch-all
pub fn rate_password(password: &str) -> String {
    match invoke("check_password", || check_password(password)) {
        Ok(rating) => format!("Password rating: {rating}"),
        Err(Failure::Password(PasswordError::Short)) => "Please use a longer password.".to_string(),
        Err(Failure::Password(PasswordError::Obvious)) => {
            "I have the same combination on my luggage!".to_string()
        }
        Err(other) => format!("There was an error: {other}"),
    }
}

pub fn describe_root(number: u32) -> String {
    match invoke("square_root", || square_root(number)) {
        Ok(root) => format!("The square root of {number} is: {root}"),
        Err(Failure::SquareRoot(SquareRootError::OutOfBounds)) => {
            "Out of bounds: please enter a number between 1 and 10,000".to_string()
        }
        Err(Failure::SquareRoot(SquareRootError::NoRoot)) => {
            format!("There is no square root of: {number}")
        }
        Err(other) => format!("Generic error: {other}"),
    }
}

/// Inner frame: handles password failures itself, lets root failures escape
pub fn password_length_root(password: &str) -> Result<String, Failure> {
    match check_password(password) {
        Ok(_) => {}
        Err(PasswordError::Short) => return Ok("inner: too short, nothing to measure".to_string()),
        Err(PasswordError::Obvious) => return Ok("inner: obvious, nothing to measure".to_string()),
    }
    let length =
        u32::try_from(password.chars().count()).map_err(|_| SquareRootError::OutOfBounds)?;
    let root = square_root(length)?;
    Ok(format!("inner: length {length} has root {root}"))
}

/// Outer frame: catches what the inner frame let through
pub fn measure_password(password: &str) -> String {
    match password_length_root(password) {
        Ok(line) => line,
        Err(Failure::SquareRoot(SquareRootError::NoRoot)) => {
            format!("outer: length {} has no root", password.chars().count())
        }
        Err(other) => format!("outer: caught {}", other.category()),
    }
}

// ==================== Cases ====================

pub fn password_ratings(out: &Transcript) -> Result<(), Failure> {
    match check_password("cherries3") {
        Ok(rating) => out.line(format!("Password rating: {rating}")),
        Err(e) => out.line(format!("Handle errors here: {e}")),
    }
    match check_password("hi") {
        Ok(rating) => out.line(format!("Password rating: {rating}")),
        Err(e) => out.line(format!("Handle errors here: {e}")),
    }
    out.line(rate_password("correcthorsebattery"));
    out.line(rate_password("abcde"));
    Ok(())
}

pub fn propagation_chain(out: &Transcript) -> Result<(), Failure> {
    for password in ["hi", "password", "cherries3"] {
        out.line(rate_password(password));
    }
    Ok(())
}

pub fn nested_propagation(out: &Transcript) -> Result<(), Failure> {
    for password in ["hi", "password", "abcdefghi", "bananas"] {
        out.line(measure_password(password));
    }
    Ok(())
}

pub fn square_roots(out: &Transcript) -> Result<(), Failure> {
    for number in 1..=25 {
        out.line(describe_root(number));
    }
    out.line(describe_root(20_000));
    Ok(())
}

pub fn forced_unwrap(out: &Transcript) -> Result<(), Failure> {
    let rating = force(invoke("check_password", || check_password("cherries3")));
    out.line(format!("forced rating: {rating}"));
    out.line("a failing forced unwrap aborts the process");
    Ok(())
}

/// Opt-in: raises a failure no frame handles
pub fn unhandled_failure(out: &Transcript) -> Result<(), Failure> {
    out.line("asking for the square root of 0");
    let root = square_root(0)?;
    out.line(format!("unreachable: {root}"));
    Ok(())
}

/// Opt-in: violates a forced unwrap
pub fn forced_unwrap_violation(out: &Transcript) -> Result<(), Failure> {
    out.line("forcing a rating for \"hi\"");
    let rating = force(invoke("check_password", || check_password("hi")));
    out.line(format!("unreachable: {rating}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_password() {
        assert_eq!(check_password("hi"), Err(PasswordError::Short));
        assert_eq!(check_password("password"), Err(PasswordError::Obvious));
        assert_eq!(check_password("abcde"), Ok(Rating::Ok));
        assert_eq!(check_password("cherries3"), Ok(Rating::Good));
        assert_eq!(check_password("correcthorse"), Ok(Rating::Excellent));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(square_root(0), Err(SquareRootError::OutOfBounds));
        assert_eq!(square_root(10_001), Err(SquareRootError::OutOfBounds));
        assert_eq!(square_root(1), Ok(1));
        assert_eq!(square_root(25), Ok(5));
        assert_eq!(square_root(10_000), Ok(100));
        assert_eq!(square_root(24), Err(SquareRootError::NoRoot));
    }

    #[test]
    fn test_specific_handler_wins_over_catch_all() {
        assert_eq!(rate_password("hi"), "Please use a longer password.");
        assert_eq!(
            rate_password("password"),
            "I have the same combination on my luggage!"
        );
        assert_eq!(rate_password("cherries3"), "Password rating: Good");
        for input in ["hi", "password", "cherries3"] {
            assert!(!rate_password(input).starts_with("There was an error"));
        }
    }

    #[test]
    fn test_unhandled_category_reaches_outer_frame() {
        assert_eq!(
            password_length_root("bananas"),
            Err(Failure::SquareRoot(SquareRootError::NoRoot))
        );
        assert_eq!(measure_password("bananas"), "outer: length 7 has no root");
        assert_eq!(measure_password("abcdefghi"), "inner: length 9 has root 3");
        assert_eq!(measure_password("hi"), "inner: too short, nothing to measure");
    }

    #[test]
    fn test_long_password_length_is_out_of_bounds() {
        let long = "x".repeat(10_001);
        assert_eq!(
            password_length_root(&long),
            Err(Failure::SquareRoot(SquareRootError::OutOfBounds))
        );
        assert_eq!(
            password_length_root(&"y".repeat(10_000)),
            Ok("inner: length 10000 has root 100".to_string())
        );
    }

    #[test]
    fn test_call_state_transitions() {
        assert!(CallState::Ready.can_transition(CallState::Invoked));
        assert!(CallState::Invoked.can_transition(CallState::Raised));
        assert!(!CallState::Ready.can_transition(CallState::Returned));
        assert!(!CallState::Returned.can_transition(CallState::Invoked));
        assert!(CallState::Raised.is_terminal());
        assert!(!CallState::Invoked.is_terminal());
    }

    #[test]
    fn test_failure_category() {
        let failure: Failure = SquareRootError::OutOfBounds.into();
        assert_eq!(failure.category(), "SquareRootError::OutOfBounds");
        assert_eq!(failure.to_string(), "number is outside 1..=10000");
    }

    #[test]
    fn test_force_passes_value_through() {
        assert_eq!(force(Ok::<_, Failure>(3)), 3);
    }

    #[test]
    #[should_panic(expected = "forced unwrap raised PasswordError::Short")]
    fn test_force_panics_on_failure() {
        force(invoke("check_password", || check_password("hi")));
    }

    #[test]
    fn test_unhandled_failure_propagates() {
        let out = Transcript::new();
        let result = unhandled_failure(&out);
        assert_eq!(result, Err(Failure::SquareRoot(SquareRootError::OutOfBounds)));
        assert_eq!(out.len(), 1);
    }
}
