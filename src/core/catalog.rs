//! Case catalog
//!
//! The fixed order every run follows. Groups appear in [`Group::ALL`]
//! order and cases keep their position within a group. Opt-in cases
//! end a run with a failure and only run when asked for by id.

use feature_tour_config::Group;

use crate::core::case::DemoCase;
use crate::core::cases::{
    basics, closures, collections, contracts, control_flow, entities, errors, functions, optionals,
    values,
};

pub const BINDINGS_AND_STRINGS: &[&str] = &[
    "name: Ted -> Rebecca -> Keeley",
    "constant: Daphne",
    "rebound to its length: 6",
    "Then he tapped a sign saying \"Believe\" and walked away.",
    "55 characters",
    "THEN HE TAPPED A SIGN SAYING \"BELIEVE\" AND WALKED AWAY.",
    r#"3 lines: "A day in\nthe life of an \nApple engineer""#,
    "starts with \"a day\": false",
    "starts with \"A day\": true",
];

pub const NUMBERS: &[&str] = &[
    "score 100, big score 1000000, lower score 98",
    "counter: 9",
    "9 is a multiple of 3: true",
    "0.1 + 0.2 = 0.30000000000000004",
    "equals 0.3: false",
    "1 + 2.0 = 3.0",
    "rating: 20",
];

pub const COMPUTED_FIELDS: &[&str] = &["10", "6", "10", "9"];

pub const ACCESS_CONTROL: &[&str] = &[
    "Failed to get the money",
    "Funds: 100",
    "6",
    "4",
    "Toyota stays in gear 10",
];

pub const FINALISER_LOOP: &[&str] = &[
    "User 1: I'm alive!",
    "User 1: I'm in control!",
    "User 1: I'm dead!",
    "User 2: I'm alive!",
    "User 2: I'm in control!",
    "User 2: I'm dead!",
    "User 3: I'm alive!",
    "User 3: I'm in control!",
    "User 3: I'm dead!",
];

pub const LAST_REFERENCE: &[&str] = &[
    "User 4: I'm alive!",
    "User 4 has 2 handles",
    "scope closed, User 4 has 1 handle",
    "User 4: I'm dead!",
    "last handle released",
];

pub const DEFAULT_METHODS: &[&str] = &[
    "Car overrides the announcement: beep beep",
    "Bicycle uses the default announcement",
];

pub const PROPAGATION_CHAIN: &[&str] = &[
    "Please use a longer password.",
    "I have the same combination on my luggage!",
    "Password rating: Good",
];

pub const NESTED_PROPAGATION: &[&str] = &[
    "inner: too short, nothing to measure",
    "inner: obvious, nothing to measure",
    "inner: length 9 has root 3",
    "outer: length 7 has no root",
];

pub const LUCKY_PIPELINE: &[&str] = &[
    "7 is a lucky number",
    "15 is a lucky number",
    "21 is a lucky number",
    "31 is a lucky number",
    "33 is a lucky number",
    "49 is a lucky number",
];

pub const FIZZ_BUZZ: &[&str] = &[
    "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz", "13", "14",
    "FizzBuzz",
];

static CATALOG: [DemoCase; 39] = [
    // basics
    DemoCase::new("bindings_and_strings", Group::Basics, "variables, constants, rebinding and string literals", basics::bindings_and_strings)
        .expecting(BINDINGS_AND_STRINGS),
    DemoCase::new("numbers", Group::Basics, "integer and float arithmetic with conversions", basics::numbers)
        .expecting(NUMBERS),
    // values
    DemoCase::new("record_methods", Group::Values, "records with read-only and mutating methods", values::record_methods),
    DemoCase::new("copy_semantics", Group::Values, "a copied record never aliases its original", values::copy_semantics),
    DemoCase::new("computed_fields", Group::Values, "fields computed on read, settable through a setter", values::computed_fields)
        .expecting(COMPUTED_FIELDS),
    DemoCase::new("change_observers", Group::Values, "will-set and did-set observers", values::change_observers),
    DemoCase::new("access_control", Group::Values, "private fields behind a restricted API", values::access_control)
        .expecting(ACCESS_CONTROL),
    DemoCase::new("custom_construction", Group::Values, "custom constructors and associated constants", values::custom_construction),
    // entities
    DemoCase::new("shared_reference", Group::Entities, "two handles observe each other's writes", entities::shared_reference),
    DemoCase::new("immutable_binding", Group::Entities, "an immutable binding still permits mutation", entities::immutable_binding),
    DemoCase::new("derivation", Group::Entities, "shared behaviour with selective overrides", entities::derivation),
    DemoCase::new("finaliser_loop", Group::Entities, "finaliser runs when the last handle drops", entities::finaliser_loop)
        .expecting(FINALISER_LOOP),
    DemoCase::new("last_reference", Group::Entities, "finalisation waits for the last handle, not the scope", entities::last_reference)
        .expecting(LAST_REFERENCE),
    // contracts
    DemoCase::new("contract_dispatch", Group::Contracts, "callers work through a capability contract", contracts::contract_dispatch),
    DemoCase::new("default_methods", Group::Contracts, "default method bodies and overrides", contracts::default_methods)
        .expecting(DEFAULT_METHODS),
    // optionals
    DemoCase::new("absence_sentinel", Group::Optionals, "absence is distinct from zero and empty", optionals::absence_sentinel),
    DemoCase::new("unwrapping", Group::Optionals, "conditional unwrap and unwrap-or-exit", optionals::unwrapping),
    DemoCase::new("fallback", Group::Optionals, "fallback values for absent ones", optionals::fallback),
    DemoCase::new("chaining", Group::Optionals, "chained access short-circuits on absence", optionals::chaining),
    // errors
    DemoCase::new("password_ratings", Group::Errors, "fallible calls with typed failures", errors::password_ratings),
    DemoCase::new("propagation_chain", Group::Errors, "specific handlers run before the catch-all", errors::propagation_chain)
        .expecting(PROPAGATION_CHAIN),
    DemoCase::new("nested_propagation", Group::Errors, "unhandled failures move to the enclosing frame", errors::nested_propagation)
        .expecting(NESTED_PROPAGATION),
    DemoCase::new("square_roots", Group::Errors, "integer square roots with range checks", errors::square_roots),
    DemoCase::new("forced_unwrap", Group::Errors, "forced unwrap of a call that succeeds", errors::forced_unwrap),
    DemoCase::new("unhandled_failure", Group::Errors, "a failure nobody handles reaches the top level", errors::unhandled_failure)
        .opt_in(),
    DemoCase::new("forced_unwrap_violation", Group::Errors, "a forced unwrap that fails is fatal", errors::forced_unwrap_violation)
        .opt_in(),
    // closures
    DemoCase::new("function_values", Group::Closures, "functions and closures as values", closures::function_values),
    DemoCase::new("comparator_sort", Group::Closures, "sorting with a comparator argument", closures::comparator_sort),
    DemoCase::new("filter_map", Group::Closures, "filtering and mapping with closures", closures::filter_map),
    DemoCase::new("lucky_pipeline", Group::Closures, "filter, sort, map and consume", closures::lucky_pipeline)
        .expecting(LUCKY_PIPELINE),
    // collections
    DemoCase::new("vectors", Group::Collections, "growing, shrinking and searching vectors", collections::vectors),
    DemoCase::new("maps", Group::Collections, "map lookups with defaults", collections::maps),
    DemoCase::new("sets_and_enums", Group::Collections, "deduplication and simple enums", collections::sets_and_enums),
    // control flow
    DemoCase::new("conditions", Group::ControlFlow, "conditions and conditional expressions", control_flow::conditions),
    DemoCase::new("matching", Group::ControlFlow, "match with a default arm and fall-through", control_flow::matching),
    DemoCase::new("loops", Group::ControlFlow, "for, while, continue and break", control_flow::loops),
    DemoCase::new("fizz_buzz", Group::ControlFlow, "FizzBuzz over 1 to 15", control_flow::fizz_buzz_case)
        .expecting(FIZZ_BUZZ),
    // functions
    DemoCase::new("parameters", Group::Functions, "parameters with defaults", functions::parameters),
    DemoCase::new("multiple_returns", Group::Functions, "tuples, named structs and destructuring", functions::multiple_returns),
];

/// Every case, in run order
pub fn cases() -> impl Iterator<Item = &'static DemoCase> {
    CATALOG.iter()
}

/// Look a case up by id
pub fn find(id: &str) -> Option<&'static DemoCase> {
    cases().find(|case| case.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: BTreeSet<_> = cases().map(|c| c.id).collect();
        assert_eq!(ids.len(), cases().count());
    }

    #[test]
    fn test_groups_follow_catalog_order() {
        let positions: Vec<usize> = cases()
            .map(|c| Group::ALL.iter().position(|g| *g == c.group).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_every_group_has_cases() {
        for group in Group::ALL {
            assert!(cases().any(|c| c.group == group), "{group} has no cases");
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("lucky_pipeline").map(|c| c.group), Some(Group::Closures));
        assert!(find("missing").is_none());
    }

    #[test]
    fn test_basics_cases_are_checked() {
        let basics: Vec<_> = cases().filter(|c| c.group == Group::Basics).collect();
        assert_eq!(basics.len(), 2);
        assert!(basics.iter().all(|c| c.expected.is_some() && !c.opt_in));
        assert_eq!(find("numbers").and_then(|c| c.expected), Some(NUMBERS));
    }

    #[test]
    fn test_opt_in_cases() {
        let opt_in: Vec<_> = cases().filter(|c| c.opt_in).map(|c| c.id).collect();
        assert_eq!(opt_in, vec!["unhandled_failure", "forced_unwrap_violation"]);
    }
}
