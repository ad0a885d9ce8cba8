//! Functions as values and closure pipelines

use std::cmp::Ordering;

use tracing::debug;

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

pub const TEAM: [&str; 5] = ["Gloria", "Suzanne", "Piper", "Tiffany", "Tasha"];

pub const CAPTAIN: &str = "Suzanne";

pub const LUCKY_INPUT: [i32; 10] = [7, 4, 38, 21, 16, 15, 12, 33, 31, 49];

pub fn greet_user() -> String {
    "Hi there!".to_string()
}

pub fn get_user_data(id: u32) -> String {
    if id == 1989 {
        "Taylor Swift".to_string()
    } else {
        "Anonymous".to_string()
    }
}

/// Captain first, everyone else alphabetically
pub fn captain_first<S: AsRef<str>>(a: &S, b: &S) -> Ordering {
    match (a.as_ref() == CAPTAIN, b.as_ref() == CAPTAIN) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.as_ref().cmp(b.as_ref()),
    }
}

pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Sorted copy. `sort_by` is stable: equal elements keep their input order.
pub fn sorted_by<T: Clone>(items: &[T], compare: impl FnMut(&T, &T) -> Ordering) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(compare);
    sorted
}

/// filter → order → map → consume, in that order
pub fn pipeline<T, U>(
    input: &[T],
    keep: impl Fn(&T) -> bool,
    compare: impl FnMut(&T, &T) -> Ordering,
    transform: impl Fn(T) -> U,
    consume: impl FnMut(U),
) where
    T: Clone,
{
    let mut kept: Vec<T> = input.iter().filter(|&item| keep(item)).cloned().collect();
    kept.sort_by(compare);
    debug!(target: "tour::closures", kept = kept.len(), total = input.len(), "pipeline filtered");
    kept.into_iter().map(transform).for_each(consume);
}

/// Odd numbers, ascending, as "N is a lucky number"
pub fn lucky_numbers(input: &[i32]) -> Vec<String> {
    let mut lines = Vec::new();
    pipeline(
        input,
        |n| n % 2 != 0,
        ascending,
        |n| format!("{n} is a lucky number"),
        |line| lines.push(line),
    );
    lines
}

/// Closure that owns and updates captured state
pub fn make_counter(step: u32) -> impl FnMut() -> u32 {
    let mut count = 0;
    move || {
        count += step;
        count
    }
}

// ==================== Cases ====================

pub fn function_values(out: &Transcript) -> Result<(), Failure> {
    out.line(greet_user());
    let greet_copy: fn() -> String = greet_user;
    out.line(greet_copy());

    let say_hello = || "Howdy!".to_string();
    out.line(say_hello());

    let say_hello_to = |name: &str| -> String { format!("Hi {name}!") };
    out.line(say_hello_to("Rob"));

    // The copy is called positionally, whatever the original was named.
    let data: fn(u32) -> String = get_user_data;
    out.line(format!("data(1989) -> {}", data(1989)));
    out.line(format!("data(7) -> {}", data(7)));

    let mut counter = make_counter(5);
    counter();
    counter();
    out.line(format!("counter after three calls: {}", counter()));
    Ok(())
}

pub fn comparator_sort(out: &Transcript) -> Result<(), Failure> {
    out.line(format!("{:?}", sorted_by(&TEAM, ascending)));
    out.line(format!("{:?}", sorted_by(&TEAM, captain_first)));
    let inline = sorted_by(&TEAM, |a, b| {
        if *a == CAPTAIN {
            Ordering::Less
        } else if *b == CAPTAIN {
            Ordering::Greater
        } else {
            a.cmp(b)
        }
    });
    out.line(format!("{inline:?}"));
    out.line(format!("{:?}", sorted_by(&TEAM, |a, b| b.cmp(a))));

    let by_initial = sorted_by(&TEAM, |a, b| a.chars().next().cmp(&b.chars().next()));
    out.line(format!("by initial (stable): {by_initial:?}"));
    Ok(())
}

pub fn filter_map(out: &Transcript) -> Result<(), Failure> {
    let t_only: Vec<&str> = TEAM.iter().copied().filter(|name| name.starts_with('T')).collect();
    out.line(format!("{t_only:?}"));

    let upper: Vec<String> = TEAM.iter().map(|name| name.to_uppercase()).collect();
    out.line(format!("{upper:?}"));
    Ok(())
}

pub fn lucky_pipeline(out: &Transcript) -> Result<(), Failure> {
    for line in lucky_numbers(&LUCKY_INPUT) {
        out.line(line);
    }
    Ok(())
}
