//! Core - pure demonstration logic, no IO
//!
//! Cases write into in-memory transcripts; the runner hands finished
//! reports to its caller. Printing happens in `platform`.

pub mod case;
pub mod cases;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logger;
pub mod runner;

pub use case::{CaseOutcome, DemoCase, Transcript};
pub use cases::Failure;
pub use config::{Config, LogConfig};
pub use error::DemoError;
pub use runner::{CaseReport, FeatureDemoRunner, RunSummary, Verdict};
