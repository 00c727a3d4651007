pub use crate::cli::{Outcome, command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    book::{EmptyState, PhoneBook},
    contact::{self, Contact, seed_contacts},
};
pub use crate::errors::AppError;
pub use crate::notify::{ConsoleNotifier, Level, MemoryNotifier, Notifier};
pub use crate::storage::{
    CONTACTS_KEY, FileStorage, KeyValueStore, MemoryStorage, Storage, StorageMediums,
};
