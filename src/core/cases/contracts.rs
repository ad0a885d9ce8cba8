//! Capability contracts
//!
//! A trait names what a type must supply; callers work through the trait
//! without knowing the concrete type. Default method bodies are inherited
//! by every implementor that does not provide its own.

use tracing::debug;

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

/// Anything that can carry passengers over a distance
pub trait Vehicle {
    fn name(&self) -> &str;

    fn current_passengers(&self) -> u32;

    fn set_current_passengers(&mut self, passengers: u32);

    /// Hours needed for `distance` km
    fn estimate_time(&self, distance: u32) -> u32;

    fn travel(&self, distance: u32) -> String;

    /// Default body, shared by implementors that do not override it
    fn announce(&self) -> String {
        format!("{} uses the default announcement", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub passengers: u32,
}

impl Default for Car {
    fn default() -> Self {
        Self { passengers: 1 }
    }
}

impl Car {
    pub fn open_sunroof(&self) -> &'static str {
        "It's a nice day!"
    }
}

impl Vehicle for Car {
    fn name(&self) -> &str {
        "Car"
    }

    fn current_passengers(&self) -> u32 {
        self.passengers
    }

    fn set_current_passengers(&mut self, passengers: u32) {
        self.passengers = passengers;
    }

    fn estimate_time(&self, distance: u32) -> u32 {
        distance / 50
    }

    fn travel(&self, distance: u32) -> String {
        format!("I'm driving {distance}km.")
    }

    fn announce(&self) -> String {
        format!("{} overrides the announcement: beep beep", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bicycle {
    pub passengers: u32,
}

impl Default for Bicycle {
    fn default() -> Self {
        Self { passengers: 1 }
    }
}

impl Vehicle for Bicycle {
    fn name(&self) -> &str {
        "Bicycle"
    }

    fn current_passengers(&self) -> u32 {
        self.passengers
    }

    fn set_current_passengers(&mut self, passengers: u32) {
        self.passengers = passengers;
    }

    fn estimate_time(&self, distance: u32) -> u32 {
        distance / 10
    }

    fn travel(&self, distance: u32) -> String {
        format!("I'm cycling {distance}km.")
    }
}

/// Hours beyond which a trip is rejected
pub const TOO_SLOW_HOURS: u32 = 100;

/// Dynamic dispatch: the concrete vehicle is only known at run time
pub fn commute(distance: u32, vehicle: &dyn Vehicle) -> String {
    let estimate = vehicle.estimate_time(distance);
    debug!(target: "tour::contracts", vehicle = vehicle.name(), distance, estimate, "commute");
    if estimate > TOO_SLOW_HOURS {
        "That's too slow! I'll try a different vehicle.".to_string()
    } else {
        vehicle.travel(distance)
    }
}

/// Static dispatch: one copy per concrete vehicle type
pub fn board<V: Vehicle>(vehicle: &mut V, extra: u32) -> String {
    let total = vehicle.current_passengers() + extra;
    vehicle.set_current_passengers(total);
    format!("{} now carries {} passengers", vehicle.name(), total)
}

pub fn travel_estimates(vehicles: &[&dyn Vehicle], distance: u32) -> Vec<String> {
    vehicles
        .iter()
        .map(|v| {
            format!(
                "{}: {} hours to travel {}km",
                v.name(),
                v.estimate_time(distance),
                distance
            )
        })
        .collect()
}

// ==================== Cases ====================

pub fn contract_dispatch(out: &Transcript) -> Result<(), Failure> {
    let mut car = Car::default();
    let mut bike = Bicycle::default();

    out.line(commute(100, &car));
    out.line(commute(50, &bike));
    out.line(commute(1500, &bike));
    out.line(car.open_sunroof());

    let fleet: [&dyn Vehicle; 2] = [&car, &bike];
    for line in travel_estimates(&fleet, 150) {
        out.line(line);
    }

    out.line(board(&mut car, 3));
    out.line(board(&mut bike, 0));
    Ok(())
}

pub fn default_methods(out: &Transcript) -> Result<(), Failure> {
    let vehicles: [Box<dyn Vehicle>; 2] = [Box::new(Car::default()), Box::new(Bicycle::default())];
    for vehicle in &vehicles {
        out.line(vehicle.announce());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_or_default_path() {
        assert_eq!(
            Car::default().announce(),
            "Car overrides the announcement: beep beep"
        );
        assert_eq!(
            Bicycle::default().announce(),
            "Bicycle uses the default announcement"
        );
    }

    #[test]
    fn test_commute_rejects_slow_trips() {
        assert_eq!(commute(100, &Car::default()), "I'm driving 100km.");
        assert_eq!(
            commute(1500, &Bicycle::default()),
            "That's too slow! I'll try a different vehicle."
        );
    }

    #[test]
    fn test_travel_estimates() {
        let car = Car::default();
        let bike = Bicycle::default();
        let fleet: [&dyn Vehicle; 2] = [&car, &bike];
        assert_eq!(
            travel_estimates(&fleet, 150),
            vec![
                "Car: 3 hours to travel 150km",
                "Bicycle: 15 hours to travel 150km",
            ]
        );
    }

    #[test]
    fn test_board_updates_passengers() {
        let mut car = Car::default();
        assert_eq!(board(&mut car, 2), "Car now carries 3 passengers");
        assert_eq!(car.current_passengers(), 3);
    }
}
