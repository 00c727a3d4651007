pub mod command;
pub mod run;

pub use run::{Outcome, run_app};
