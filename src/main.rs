use phonebook::prelude::{Outcome, run_app};
use std::process::exit;

fn main() {
    match run_app() {
        Ok(Outcome::Done) => {}
        Ok(Outcome::Rejected) => exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            exit(1);
        }
    }
}
