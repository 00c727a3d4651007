use super::*;

use crate::storage::CONTACTS_KEY;
use super::contact::{
    Contact, ids_are_unique_and_names_present, names_are_unique, seed_contacts,
};
use log::{debug, error, info, warn};

/// What a list view shows when the filtered view is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoContactsYet,
    NoContactsFound,
}

impl EmptyState {
    pub fn message(&self) -> &'static str {
        match self {
            EmptyState::NoContactsYet => "No contacts yet",
            EmptyState::NoContactsFound => "No contacts found",
        }
    }
}

/// The contact list, its filter text, and the collaborators it reports to.
///
/// Built once per process with [`PhoneBook::initialize`], which only reads
/// from storage. Every later add or delete writes the full list back.
pub struct PhoneBook<S: KeyValueStore, N: Notifier> {
    contacts: Vec<Contact>,
    filter: String,
    storage: S,
    notifier: N,
}

impl<S: KeyValueStore, N: Notifier> PhoneBook<S, N> {
    pub fn initialize(storage: S, notifier: N) -> Self {
        let contacts = load_contacts(&storage).unwrap_or_else(|| {
            info!("starting from seed contacts");
            seed_contacts()
        });

        Self {
            contacts,
            filter: String::new(),
            storage,
            notifier,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn add_contact(&mut self, name: &str, number: &str) -> Result<(), AppError> {
        let new_contact = Contact::new(name.to_string(), number.to_string());

        if let Err(e) = new_contact.validate_name() {
            self.notifier.warning(&e.to_string());
            return Err(e);
        }

        if new_contact.already_exist(&self.contacts) {
            let err = AppError::DuplicateName(name.to_string());
            self.notifier.warning(&err.to_string());
            return Err(err);
        }

        debug!("adding contact {}", new_contact.id);
        self.contacts.push(new_contact);
        self.persist();

        self.notifier
            .success(&format!("{} is added to contacts.", name));
        Ok(())
    }

    /// Removes the contact with `id`. `name` is only used in the notification,
    /// which is sent whether or not anything matched.
    pub fn delete_contact(&mut self, id: &str, name: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        let removed = self.contacts.len() < before;

        if removed {
            debug!("deleted contact {}", id);
        } else {
            debug!("no contact with id {}", id);
        }
        self.persist();

        self.notifier
            .failure(&format!("{} was removed from contacts.", name));
        removed
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
    }

    pub fn filtered_view(&self) -> Vec<&Contact> {
        let normalized_filter = self.filter.to_lowercase();

        self.contacts
            .iter()
            .filter(|c| c.name_contains(&normalized_filter))
            .collect()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.is_empty() {
            return Some(EmptyState::NoContactsYet);
        }
        if self.filtered_view().is_empty() {
            return Some(EmptyState::NoContactsFound);
        }
        None
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.name_matches(name))
    }

    // Write failures are logged and otherwise ignored.
    fn persist(&mut self) {
        let data = match serde_json::to_string(&self.contacts) {
            Ok(data) => data,
            Err(e) => {
                error!("could not serialize contacts: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(CONTACTS_KEY, &data) {
            error!("could not save contacts: {}", e);
        }
    }
}

fn load_contacts(storage: &impl KeyValueStore) -> Option<Vec<Contact>> {
    let data = match storage.get(CONTACTS_KEY) {
        Ok(Some(data)) if !data.is_empty() => data,
        Ok(_) => return None,
        Err(e) => {
            warn!("could not read saved contacts: {}", e);
            return None;
        }
    };

    let contacts: Vec<Contact> = match serde_json::from_str(&data) {
        Ok(contacts) => contacts,
        Err(e) => {
            warn!("ignoring unreadable saved contacts: {}", e);
            return None;
        }
    };

    if !names_are_unique(&contacts) {
        warn!("ignoring saved contacts with duplicate names");
        return None;
    }

    if !ids_are_unique_and_names_present(&contacts) {
        warn!("ignoring saved contacts with repeated ids or blank names");
        return None;
    }

    info!("loaded {} saved contacts", contacts.len());
    Some(contacts)
}
