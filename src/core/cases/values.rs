//! Value types
//!
//! Records are plain structs: assignment moves, `clone()` copies, and a
//! copy never aliases the original. Shown here: methods, computed
//! fields, change observers, restricted setters and custom constructors.

use std::mem;

use tracing::debug;

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

pub use account::{BankAccount, Car, CarModel};

// ==================== Records ====================

/// Immutable record with a read-only method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub title: String,
    pub artist: String,
    pub year: u16,
}

impl Album {
    pub fn summary(&self) -> String {
        format!("{} ({}) by {}", self.title, self.year, self.artist)
    }
}

/// Record with a mutating method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub name: String,
    pub vacation_remaining: u32,
}

impl Employee {
    pub fn take_vacation(&mut self, days: u32, out: &Transcript) {
        if self.vacation_remaining > days {
            self.vacation_remaining -= days;
            out.line("I'm going on vacation!");
            out.line(format!("Days remaining: {}", self.vacation_remaining));
        } else {
            out.line("Oops! There aren't enough days remaining.");
        }
    }
}

/// Leave balance with a computed `remaining` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leave {
    pub name: String,
    pub allocated: u32,
    pub taken: u32,
}

impl Leave {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            allocated: 14,
            taken: 0,
        }
    }

    /// Derived on every read, never stored
    pub fn remaining(&self) -> u32 {
        self.allocated.saturating_sub(self.taken)
    }

    /// Computed setter: keeps `taken` and adjusts `allocated`
    pub fn set_remaining(&mut self, remaining: u32) {
        self.allocated = self.taken.saturating_add(remaining);
    }
}

// ==================== Change observers ====================

/// Hooks fired around a store into an [`Observed`] field
pub trait Observer<T> {
    /// Before the store: current value and the incoming one
    fn will_set(&self, _current: &T, _new: &T, _out: &Transcript) {}

    /// After the store: previous value and the stored one
    fn did_set(&self, _old: &T, _current: &T, _out: &Transcript) {}
}

/// Field wrapper that notifies its observer on every change
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Observed<T, O> {
    value: T,
    observer: O,
}

impl<T: Clone, O: Observer<T>> Observed<T, O> {
    pub fn new(value: T, observer: O) -> Self {
        Self { value, observer }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Store a new value, firing `will_set` then `did_set`
    pub fn set(&mut self, new: T, out: &Transcript) {
        self.observer.will_set(&self.value, &new, out);
        let old = mem::replace(&mut self.value, new);
        self.observer.did_set(&old, &self.value, out);
    }

    /// Edit a copy of the value in place, then store it
    pub fn modify(&mut self, edit: impl FnOnce(&mut T), out: &Transcript) {
        let mut next = self.value.clone();
        edit(&mut next);
        self.set(next, out);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreObserver;

impl Observer<i32> for ScoreObserver {
    fn did_set(&self, _old: &i32, current: &i32, out: &Transcript) {
        out.line(format!("Score is now {current}"));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactsObserver;

impl Observer<Vec<String>> for ContactsObserver {
    fn will_set(&self, current: &Vec<String>, new: &Vec<String>, out: &Transcript) {
        out.line(format!("Current value is: {current:?}"));
        out.line(format!("New value will be: {new:?}"));
    }

    fn did_set(&self, old: &Vec<String>, current: &Vec<String>, out: &Transcript) {
        out.line(format!("There are now {} contacts.", current.len()));
        out.line(format!("Old value was {old:?}"));
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Game {
    pub score: Observed<i32, ScoreObserver>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactBook {
    pub contacts: Observed<Vec<String>, ContactsObserver>,
}

// ==================== Access restriction ====================

/// Types whose fields are readable everywhere but writable only through
/// their own methods. Kept in a child module so the rest of this file
/// cannot reach the private fields either.
mod account {
    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct BankAccount {
        funds: u32,
    }

    impl BankAccount {
        pub fn funds(&self) -> u32 {
            self.funds
        }

        pub fn deposit(&mut self, amount: u32) {
            self.funds += amount;
        }

        pub fn withdraw(&mut self, amount: u32) -> bool {
            if self.funds >= amount {
                self.funds -= amount;
                true
            } else {
                false
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum CarModel {
        Ford,
        Toyota,
        Vw,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Car {
        pub model: CarModel,
        pub seats: u8,
        current_gear: u8,
    }

    impl Car {
        pub const TOP_GEAR: u8 = 10;

        pub fn new(model: CarModel, seats: u8, gear: u8) -> Self {
            Self {
                model,
                seats,
                current_gear: gear.clamp(1, Self::TOP_GEAR),
            }
        }

        pub fn current_gear(&self) -> u8 {
            self.current_gear
        }

        pub fn change_gear(&mut self, up: bool) {
            if up && self.current_gear < Self::TOP_GEAR {
                self.current_gear += 1;
            } else if !up && self.current_gear > 1 {
                self.current_gear -= 1;
            }
        }
    }
}

// ==================== Construction ====================

/// Player with a custom constructor
///
/// Every field must be given when building a record; leaving one out is
/// rejected by the compiler, not at run time:
///
/// ```compile_fail
/// use feature_tour::core::cases::values::Player;
///
/// let megan = Player { name: "Megan".to_string() };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub number: u8,
}

impl Player {
    /// Assigns every field, deriving the shirt number (1..=99) from the name
    pub fn new(name: &str) -> Self {
        let sum: u32 = name.bytes().map(u32::from).sum();
        Self {
            name: name.to_string(),
            number: (sum % 99) as u8 + 1,
        }
    }
}

/// Type-level constants
pub struct AppData;

impl AppData {
    pub const VERSION: &'static str = "1.3 beta 2";
    pub const SAVE_FILENAME: &'static str = "settings.json";
    pub const HOME_URL: &'static str = "https://www.hackingwithswift.com";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials {
    pub username: &'static str,
    pub password: &'static str,
}

impl Credentials {
    pub const EXAMPLE: Credentials = Credentials {
        username: "cfederighi",
        password: "hairforceone",
    };
}

// ==================== Cases ====================

pub fn record_methods(out: &Transcript) -> Result<(), Failure> {
    let red = Album {
        title: "Red".to_string(),
        artist: "Taylor Swift".to_string(),
        year: 2012,
    };
    let wings = Album {
        title: "Wings".to_string(),
        artist: "BTS".to_string(),
        year: 2016,
    };
    out.line(&red.title);
    out.line(&wings.title);
    out.line(red.summary());
    out.line(wings.summary());

    let mut archer = Employee {
        name: "Sterling Archer".to_string(),
        vacation_remaining: 14,
    };
    archer.take_vacation(5, out);
    archer.take_vacation(20, out);
    out.line(format!("{} has {} days left", archer.name, archer.vacation_remaining));
    Ok(())
}

pub fn copy_semantics(out: &Transcript) -> Result<(), Failure> {
    let original = Leave::new("Gary");
    let mut copy = original.clone();
    copy.taken += 4;
    debug!(target: "tour::values", original = ?original, copy = ?copy, "copied record");

    out.line(format!("copy.remaining = {}", copy.remaining()));
    out.line(format!("original.remaining = {}", original.remaining()));
    out.line(format!("same values: {}", original == copy));
    Ok(())
}

pub fn computed_fields(out: &Transcript) -> Result<(), Failure> {
    let mut gary = Leave::new("Gary");
    gary.taken += 4;
    out.line(gary.remaining().to_string());
    gary.taken += 4;
    out.line(gary.remaining().to_string());

    let mut bob = Leave::new("Bob");
    bob.taken += 4;
    out.line(bob.remaining().to_string());
    bob.set_remaining(5);
    out.line(bob.allocated.to_string());
    Ok(())
}

pub fn change_observers(out: &Transcript) -> Result<(), Failure> {
    let mut game = Game::default();
    game.score.modify(|s| *s += 10, out);
    game.score.modify(|s| *s -= 3, out);
    game.score.modify(|s| *s += 1, out);
    out.blank();

    let mut app = ContactBook::default();
    for name in ["Adrian E", "Allen W", "Ish S"] {
        app.contacts.modify(|c| c.push(name.to_string()), out);
    }
    Ok(())
}

pub fn access_control(out: &Transcript) -> Result<(), Failure> {
    let mut account = BankAccount::default();
    account.deposit(100);
    if account.withdraw(200) {
        out.line("Withdrew money successfully");
    } else {
        out.line("Failed to get the money");
    }
    out.line(format!("Funds: {}", account.funds()));

    let mut fiesta = Car::new(CarModel::Ford, 5, 5);
    fiesta.change_gear(true);
    out.line(fiesta.current_gear().to_string());
    fiesta.change_gear(false);
    fiesta.change_gear(false);
    out.line(fiesta.current_gear().to_string());

    let mut corolla = Car::new(CarModel::Toyota, 5, Car::TOP_GEAR);
    corolla.change_gear(true);
    out.line(format!("{:?} stays in gear {}", corolla.model, corolla.current_gear()));
    Ok(())
}

pub fn custom_construction(out: &Transcript) -> Result<(), Failure> {
    let literal = Player {
        name: "Megan R".to_string(),
        number: 15,
    };
    out.line(format!("{}, number: {}", literal.name, literal.number));

    let megan = Player::new("Megan");
    out.line(format!("{}, number: {}", megan.name, megan.number));

    out.line(format!("Version: {}", AppData::VERSION));
    out.line(format!("Saving to: {}", AppData::SAVE_FILENAME));
    out.line(format!("Home: {}", AppData::HOME_URL));
    out.line(format!("Example user: {}", Credentials::EXAMPLE.username));
    Ok(())
}
