//! Conditions, matching and loops

use tracing::trace;

use crate::core::case::Transcript;
use crate::core::cases::errors::Failure;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Sun,
    Rain,
    Wind,
    Snow,
    Unknown,
}

pub fn forecast(weather: Weather) -> &'static str {
    match weather {
        Weather::Rain => "Bring an umbrella",
        Weather::Snow => "Wrap up warm",
        Weather::Sun => "Wear sunscreen",
        _ => "Enjoy your day!",
    }
}

const GIFTS: [&str; 5] = [
    "5 golden rings",
    "4 calling birds",
    "3 French hens",
    "2 turtle doves",
    "A partridge in a pear tree",
];

/// Countdown of gifts from `day` down to the first.
///
/// Each day also prints every earlier day's line, the effect a
/// fall-through switch gives.
pub fn gift_countdown(day: usize) -> Vec<&'static str> {
    let start = GIFTS.len().saturating_sub(day.min(GIFTS.len()));
    GIFTS[start..].to_vec()
}

/// "Fizz", "Buzz", "FizzBuzz" or the number itself
pub fn fizz_buzz(n: u32) -> String {
    match (n % 3, n % 5) {
        (0, 0) => "FizzBuzz".to_string(),
        (0, _) => "Fizz".to_string(),
        (_, 0) => "Buzz".to_string(),
        _ => n.to_string(),
    }
}

pub fn conditions(out: &Transcript) -> Result<(), Failure> {
    let score = 85;
    if score > 80 {
        out.line("Great job!");
    }

    let (first_name, second_name) = ("Paul", "Sophie");
    if first_name < second_name {
        out.line(format!("It's {first_name} vs {second_name}"));
    }

    let (temp, age) = (25, 18);
    if temp > 20 && temp < 30 {
        out.line("It's a nice day.");
    }
    let has_parental_consent = true;
    if age >= 18 || has_parental_consent {
        out.line("You can buy the game");
    }

    let username = "";
    if username.is_empty() {
        out.line("Username is empty, using Anonymous");
    }

    let hour = 23;
    out.line(if hour < 12 { "It's before noon" } else { "It's after noon" });
    let names = ["Jayne", "Kaylee", "Mal"];
    let crew_count = if names.is_empty() { "No one" } else { "Someone" };
    out.line(format!("{crew_count} is on board"));
    Ok(())
}

pub fn matching(out: &Transcript) -> Result<(), Failure> {
    for weather in [Weather::Sun, Weather::Rain, Weather::Snow, Weather::Wind, Weather::Unknown] {
        out.line(format!("{weather:?}: {}", forecast(weather)));
    }

    let place = "Metropolis";
    let response = match place {
        "Gotham" => "You're Batman!",
        "Mega-City One" => "You're Judge Dredd!",
        "Wakanda" => "You're Black Panther!",
        _ => "Who are you?",
    };
    out.line(response);

    for line in gift_countdown(5) {
        out.line(line);
    }
    Ok(())
}

pub fn loops(out: &Transcript) -> Result<(), Failure> {
    let platforms = ["iOS", "macOS", "tvOS", "watchOS"];
    for os in platforms {
        out.line(format!("Swift works great on {os}."));
    }
    for i in 1..=3 {
        out.line(format!("5 x {i} is {}", 5 * i));
    }
    for _ in 0..2 {
        out.line("Rock");
    }

    let mut countdown = 3;
    while countdown > 0 {
        out.line(countdown.to_string());
        countdown -= 1;
    }
    out.line("Blast off!");

    let filenames = ["me.jpg", "work.txt", "sophie.jpg", "logo.psd"];
    for filename in filenames {
        if !filename.ends_with(".jpg") {
            continue;
        }
        out.line(format!("Found picture: {filename}"));
    }

    let (number1, number2) = (4, 14);
    let mut multiples = Vec::new();
    for i in 1..=100_000 {
        if i % number1 == 0 && i % number2 == 0 {
            multiples.push(i);
            if multiples.len() == 10 {
                trace!(target: "tour::control_flow", last = i, "loop stopped early");
                break;
            }
        }
    }
    out.line(format!("{multiples:?}"));
    Ok(())
}

pub fn fizz_buzz_case(out: &Transcript) -> Result<(), Failure> {
    for n in 1..=15 {
        out.line(fizz_buzz(n));
    }
    Ok(())
}
