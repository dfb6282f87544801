//! `stockledger-cli`: replays scripted reconciliation runs.
//!
//! The binary is a thin driver; the script format and replay loop live here so
//! they can be exercised without spawning a process.

pub mod script;

pub use script::{Report, Script, Step, StepReport, replay};
