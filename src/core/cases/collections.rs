//! Collections: vectors, maps, sets and simple enums

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// Map lookup with a default for missing keys
pub fn lookup_or<'a>(map: &'a HashMap<&str, &'a str>, key: &str, default: &'a str) -> &'a str {
    map.get(key).copied().unwrap_or(default)
}

/// Number of distinct entries
pub fn unique_count<T: Ord>(items: impl IntoIterator<Item = T>) -> usize {
    items.into_iter().collect::<BTreeSet<_>>().len()
}

pub fn vectors(out: &Transcript) -> Result<(), Failure> {
    let mut beatles = vec!["John", "Paul", "George", "Ringo"];
    beatles.push("Rob");
    out.line(format!("{beatles:?}"));
    out.line(beatles[1]);

    let mut high_scores: Vec<u32> = Vec::new();
    high_scores.push(345);
    high_scores.extend([234, 456, 765]);
    out.line(format!("{high_scores:?} ({} scores)", high_scores.len()));
    high_scores.remove(2);
    out.line(format!("{high_scores:?}"));
    high_scores.clear();
    out.line(format!("cleared: {}", high_scores.is_empty()));

    let bond_movies = ["Casino Royale", "Spectre", "No Time To Die"];
    out.line(format!("contains Frozen: {}", bond_movies.contains(&"Frozen")));

    let mut cities = vec!["London", "Tokyo", "Rome", "Budapest"];
    cities.sort();
    out.line(format!("{cities:?}"));

    let presidents = ["Bush", "Obama", "Trump", "Biden"];
    let reversed: Vec<_> = presidents.iter().rev().collect();
    out.line(format!("{reversed:?}"));
    out.line(format!("first of reversed: {:?}", reversed.first()));
    Ok(())
}

pub fn maps(out: &Transcript) -> Result<(), Failure> {
    let employee = HashMap::from([
        ("name", "Taylor Swift"),
        ("profession", "Singer"),
        ("city", "Nashville"),
    ]);
    out.line(format!("{:?}", employee.get("name")));
    out.line(format!("{:?}", employee.get("status")));
    out.line(lookup_or(&employee, "name", "Unknown"));
    out.line(format!(
        "{} is a {}.",
        lookup_or(&employee, "name", "Unknown"),
        lookup_or(&employee, "profession", "unemployed")
    ));

    let olympics = BTreeMap::from([(2012, "London"), (2016, "Rio de Janeiro"), (2021, "Tokyo")]);
    out.line(*olympics.get(&2012).unwrap_or(&"Unknown"));

    let mut heights: BTreeMap<&str, u32> = BTreeMap::new();
    heights.insert("Yao Ming", 229);
    heights.insert("Shaquille O'Neal", 216);
    heights.insert("LeBron James", 206);
    out.line(heights.get("Yao Ming").copied().unwrap_or(250).to_string());
    out.line(heights.get("Michael Jordan").copied().unwrap_or(250).to_string());

    let mut arch_enemies = HashMap::new();
    arch_enemies.insert("Batman", "The Joker");
    out.line(format!("{:?}", arch_enemies.get("Batman")));
    let previous = arch_enemies.insert("Batman", "Penguin");
    out.line(format!("{:?} replaced by {:?}", previous, arch_enemies.get("Batman")));
    Ok(())
}

pub fn sets_and_enums(out: &Transcript) -> Result<(), Failure> {
    let people = BTreeSet::from(["Denzel Washington", "Tom Cruise", "Nicolas Cage", "Samuel L Jackson"]);
    out.line(format!("{people:?}"));

    let mut actors = BTreeSet::new();
    actors.insert("Denzel Washington");
    actors.insert("Tom Cruise");
    let inserted = actors.insert("Tom Cruise");
    out.line(format!("{} actors, duplicate inserted: {inserted}", actors.len()));

    let names = [
        "Rob", "Susan", "Chiara", "Bill", "George", "Susan", "Sarah", "Billy", "Sarah", "Dave", "George",
    ];
    out.line(format!("The number of items in the names array is: {}", names.len()));
    out.line(format!("The number of unique names in the array is: {}", unique_count(names)));

    let mut day = Weekday::Monday;
    out.line(format!("{day:?}"));
    day = Weekday::Wednesday;
    out.line(format!("{day:?} comes after Tuesday: {}", day > Weekday::Tuesday));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_or() {
        let map = HashMap::from([("name", "Taylor Swift")]);
        assert_eq!(lookup_or(&map, "name", "Unknown"), "Taylor Swift");
        assert_eq!(lookup_or(&map, "status", "Unknown"), "Unknown");
    }

    #[test]
    fn test_unique_count() {
        assert_eq!(unique_count(["a", "b", "a"]), 2);
        assert_eq!(unique_count(Vec::<u8>::new()), 0);
    }

    #[test]
    fn test_sets_case_is_deterministic() {
        let first = Transcript::new();
        let second = Transcript::new();
        sets_and_enums(&first).unwrap();
        sets_and_enums(&second).unwrap();
        assert_eq!(first.lines(), second.lines());
        assert_eq!(
            first.lines(),
            vec![
                r#"{"Denzel Washington", "Nicolas Cage", "Samuel L Jackson", "Tom Cruise"}"#,
                "2 actors, duplicate inserted: false",
                "The number of items in the names array is: 11",
                "The number of unique names in the array is: 8",
                "Monday",
                "Wednesday comes after Tuesday: true",
            ]
        );
    }
}
