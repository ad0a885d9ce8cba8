//! Reference types
//!
//! Entities live behind `Rc<RefCell<_>>`: cloning the handle shares the
//! instance, and `Drop` runs exactly once when the last handle goes.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

// ==================== Shared instances ====================

#[derive(Debug, Clone, PartialEq, Eq)]
struct UserData {
    username: String,
}

/// Handle onto a shared user; `clone()` aliases, [`User::copy`] duplicates
#[derive(Debug, Clone)]
pub struct User {
    inner: Rc<RefCell<UserData>>,
}

impl User {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(UserData {
                username: "Anonymous".to_string(),
            })),
        }
    }

    pub fn username(&self) -> String {
        self.inner.borrow().username.clone()
    }

    /// Mutates through a shared handle; the binding itself can stay immutable
    pub fn set_username(&self, name: &str) {
        self.inner.borrow_mut().username = name.to_string();
    }

    /// Deep copy: a new instance with the same field values
    pub fn copy(&self) -> User {
        Self {
            inner: Rc::new(RefCell::new(self.inner.borrow().clone())),
        }
    }

    pub fn same_instance(&self, other: &User) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this instance
    pub fn handles(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== Derivation ====================

/// Base behaviour shared by every kind of staff member.
///
/// Implementors supply `hours` and `work`; `summary` is inherited unless
/// the implementor overrides it.
pub trait Staff {
    fn hours(&self) -> u32;

    fn work(&self) -> String;

    fn summary(&self) -> String {
        format!("I work {} hours a day.", self.hours())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Developer {
    pub hours: u32,
}

impl Staff for Developer {
    fn hours(&self) -> u32 {
        self.hours
    }

    fn work(&self) -> String {
        format!("I'm writing code for {} hours.", self.hours)
    }

    fn summary(&self) -> String {
        format!(
            "I am a developer that will sometimes work {} hours per day.",
            self.hours
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Manager {
    pub hours: u32,
}

impl Staff for Manager {
    fn hours(&self) -> u32 {
        self.hours
    }

    fn work(&self) -> String {
        format!("I'm going to meetings for {} hours.", self.hours)
    }
}

/// Base part of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub is_electric: bool,
}

impl Vehicle {
    pub fn new(is_electric: bool) -> Self {
        Self { is_electric }
    }
}

/// Extends [`Vehicle`]; its constructor sets its own field, then builds the base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convertible {
    pub base: Vehicle,
    pub is_convertible: bool,
}

impl Convertible {
    pub fn new(is_electric: bool, is_convertible: bool) -> Self {
        Self {
            is_convertible,
            base: Vehicle::new(is_electric),
        }
    }
}

/// Dogs bark unless a breed overrides `speak`
pub trait Dog {
    fn legs(&self) -> u8 {
        4
    }

    fn speak(&self) -> &'static str {
        "Bark"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Mongrel;

#[derive(Debug, Clone, Copy, Default)]
pub struct Corgi;

#[derive(Debug, Clone, Copy, Default)]
pub struct Poodle;

impl Dog for Mongrel {}

impl Dog for Corgi {
    fn speak(&self) -> &'static str {
        "ruff"
    }
}

impl Dog for Poodle {
    fn speak(&self) -> &'static str {
        "woof"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cat {
    pub legs: u8,
    pub is_tame: bool,
}

impl Cat {
    pub fn speak(&self) -> &'static str {
        if self.is_tame {
            "Meow"
        } else {
            "Hiss"
        }
    }
}

// ==================== Finalisation ====================

/// Entity that reports its own creation and destruction
#[derive(Debug)]
pub struct TrackedUser {
    pub id: u32,
    out: Transcript,
}

impl TrackedUser {
    pub fn new(id: u32, out: &Transcript) -> Rc<TrackedUser> {
        out.line(format!("User {id}: I'm alive!"));
        trace!(target: "tour::entities", id, "constructed");
        Rc::new(Self {
            id,
            out: out.clone(),
        })
    }
}

impl Drop for TrackedUser {
    fn drop(&mut self) {
        trace!(target: "tour::entities", id = self.id, "finalised");
        self.out.line(format!("User {}: I'm dead!", self.id));
    }
}

// ==================== Cases ====================

pub fn shared_reference(out: &Transcript) -> Result<(), Failure> {
    let user1 = User::new();
    let user2 = user1.clone();
    user2.set_username("Taylor");
    out.line(user1.username());
    out.line(user2.username());
    out.line(format!(
        "same instance: {}, handles: {}",
        user1.same_instance(&user2),
        user1.handles()
    ));

    let john = User::new();
    let sally = john.copy();
    john.set_username("Captain");
    out.line(john.username());
    out.line(sally.username());
    out.line(format!("same instance: {}", john.same_instance(&sally)));
    Ok(())
}

pub fn immutable_binding(out: &Transcript) -> Result<(), Failure> {
    // `user` is never rebound, yet the instance behind it changes.
    let user = User::new();
    user.set_username("Taylor");
    out.line(user.username());

    let mut user3 = User::new();
    user3.set_username("Taylor");
    let before = user3.username();
    user3 = User::new();
    out.line(format!("rebound from {before} to {}", user3.username()));
    Ok(())
}

pub fn derivation(out: &Transcript) -> Result<(), Failure> {
    let robert = Developer { hours: 8 };
    let joseph = Manager { hours: 10 };
    out.line(robert.work());
    out.line(joseph.work());
    out.line(robert.summary());
    out.line(joseph.summary());

    let fiesta = Convertible::new(false, false);
    out.line(format!(
        "electric: {}, convertible: {}",
        fiesta.base.is_electric, fiesta.is_convertible
    ));

    let dogs: [(&str, &dyn Dog); 3] = [("Dog", &Mongrel), ("Corgi", &Corgi), ("Poodle", &Poodle)];
    for (breed, dog) in dogs {
        out.line(format!("{breed} ({} legs): {}", dog.legs(), dog.speak()));
    }
    let cat = Cat {
        legs: 4,
        is_tame: true,
    };
    out.line(format!("Cat ({} legs): {}", cat.legs, cat.speak()));
    Ok(())
}

pub fn finaliser_loop(out: &Transcript) -> Result<(), Failure> {
    for i in 1..=3 {
        let user = TrackedUser::new(i, out);
        out.line(format!("User {}: I'm in control!", user.id));
    }
    Ok(())
}

pub fn last_reference(out: &Transcript) -> Result<(), Failure> {
    let keeper;
    {
        let user = TrackedUser::new(4, out);
        keeper = Rc::clone(&user);
        out.line(format!("User 4 has {} handles", Rc::strong_count(&user)));
    }
    debug!(target: "tour::entities", handles = Rc::strong_count(&keeper), "scope closed");
    out.line(format!(
        "scope closed, User {} has {} handle",
        keeper.id,
        Rc::strong_count(&keeper)
    ));
    drop(keeper);
    out.line("last handle released");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// (created line index, destroyed line index) per user id
    fn lifecycle(lines: &[String]) -> BTreeMap<u32, (Option<usize>, Option<usize>)> {
        let mut map: BTreeMap<u32, (Option<usize>, Option<usize>)> = BTreeMap::new();
        for (idx, line) in lines.iter().enumerate() {
            let Some(rest) = line.strip_prefix("User ") else {
                continue;
            };
            let Some((id, event)) = rest.split_once(": ") else {
                continue;
            };
            let Ok(id) = id.parse::<u32>() else {
                continue;
            };
            let entry = map.entry(id).or_default();
            match event {
                "I'm alive!" => entry.0 = Some(idx),
                "I'm dead!" => entry.1 = Some(idx),
                _ => {}
            }
        }
        map
    }

    #[test]
    fn test_shared_handles_observe_mutation() {
        let a = User::new();
        let b = a.clone();
        b.set_username("Taylor");
        assert_eq!(a.username(), "Taylor");
        assert_eq!(a.username(), b.username());
        assert!(a.same_instance(&b));
        assert_eq!(a.handles(), 2);
    }

    #[test]
    fn test_copy_breaks_sharing() {
        let a = User::new();
        let b = a.copy();
        a.set_username("Captain");
        assert_eq!(b.username(), "Anonymous");
        assert!(!a.same_instance(&b));
    }

    #[test]
    fn test_finaliser_loop_pairs_every_instance() {
        let out = Transcript::new();
        finaliser_loop(&out).unwrap();
        let events = lifecycle(&out.lines());

        assert_eq!(events.len(), 3);
        for (id, (created, destroyed)) in events {
            let (created, destroyed) = (created.unwrap(), destroyed.unwrap());
            assert!(created < destroyed, "user {id} destroyed before created");
        }
        assert_eq!(
            out.lines(),
            vec![
                "User 1: I'm alive!",
                "User 1: I'm in control!",
                "User 1: I'm dead!",
                "User 2: I'm alive!",
                "User 2: I'm in control!",
                "User 2: I'm dead!",
                "User 3: I'm alive!",
                "User 3: I'm in control!",
                "User 3: I'm dead!",
            ]
        );
    }

    #[test]
    fn test_finaliser_waits_for_last_handle() {
        let out = Transcript::new();
        last_reference(&out).unwrap();
        let lines = out.lines();
        let dead = lines.iter().position(|l| l == "User 4: I'm dead!").unwrap();
        let closed = lines.iter().position(|l| l.starts_with("scope closed")).unwrap();
        assert!(closed < dead);
        assert_eq!(lines.iter().filter(|l| l.ends_with("I'm dead!")).count(), 1);
    }

    #[test]
    fn test_override_and_default() {
        assert_eq!(Corgi.speak(), "ruff");
        assert_eq!(Mongrel.speak(), "Bark");
        assert_eq!(Manager { hours: 10 }.summary(), "I work 10 hours a day.");
        assert!(Developer { hours: 8 }.summary().starts_with("I am a developer"));
    }
}
