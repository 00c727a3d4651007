use crate::prelude::{
    AppError, Config, ConsoleNotifier, PhoneBook, Storage,
    command::{Cli, Commands},
    contact::Contact,
};
use crate::logging;
use clap::Parser;
use dotenv::dotenv;
use log::debug;

/// How a command ended when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The request was refused and the user has already been told why.
    Rejected,
}

pub fn run_app() -> Result<Outcome, AppError> {
    dotenv().ok();
    let cli = Cli::parse();

    run(cli)
}

pub fn run(cli: Cli) -> Result<Outcome, AppError> {
    let config = Config::from_cli(&cli)?;
    logging::init(&config.log_spec)?;

    debug!(
        "using {} storage at {}",
        config.storage.is_which(),
        config.storage_path
    );
    let storage = Storage::open(config.storage, &config.storage_path)?;
    let mut book = PhoneBook::initialize(storage, ConsoleNotifier);

    match cli.command {
        Commands::Add { name, number } => match book.add_contact(&name, &number) {
            Ok(()) => Ok(Outcome::Done),
            Err(AppError::DuplicateName(_)) | Err(AppError::Validation(_)) => {
                Ok(Outcome::Rejected)
            }
            Err(e) => Err(e),
        },

        Commands::List { filter } => {
            if let Some(text) = filter {
                book.set_filter(&text);
            }

            if let Some(empty) = book.empty_state() {
                println!("{}", empty.message());
                return Ok(Outcome::Done);
            }

            for (mut i, c) in book.filtered_view().iter().enumerate() {
                i += 1;
                println!("{}", listing_format(i, c));
            }
            Ok(Outcome::Done)
        }

        Commands::Delete { id, name } => {
            let (id, name) = match (id, name) {
                (Some(id), Some(name)) => (id, name),
                (Some(id), None) => {
                    // Report the stored name when the id is known.
                    let name = book
                        .contacts()
                        .iter()
                        .find(|c| c.id == id)
                        .map_or_else(|| id.clone(), |c| c.name.clone());
                    (id, name)
                }
                (None, Some(name)) => match book.find_by_name(&name) {
                    Some(contact) => (contact.id.clone(), contact.name.clone()),
                    None => return Err(AppError::NotFound("Contact".to_string())),
                },
                (None, None) => {
                    return Err(AppError::Validation(
                        "Provide --id or --name of the contact to delete".to_string(),
                    ));
                }
            };

            book.delete_contact(&id, &name);
            Ok(Outcome::Done)
        }
    }
}

pub fn listing_format(i: usize, c: &Contact) -> String {
    format!("{i:>3}. {:<20} {:<15} {}", c.name, c.number, c.id)
}
