use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl Contact {
    pub fn new(name: String, number: String) -> Self {
        Contact {
            id: Uuid::new_v4().to_string(),
            name,
            number,
        }
    }

    pub fn with_id(id: &str, name: &str, number: &str) -> Self {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    pub fn validate_name(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn name_contains(&self, normalized_filter: &str) -> bool {
        self.name.to_lowercase().contains(normalized_filter)
    }

    pub fn already_exist(&self, contactlist: &[Contact]) -> bool {
        contactlist.iter().any(|cont| cont.name_matches(&self.name))
    }
}

/// Contacts used whenever storage holds nothing usable.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact::with_id("id-1", "Rosie Simpson", "459-12-56"),
        Contact::with_id("id-2", "Hermione Kline", "443-89-12"),
        Contact::with_id("id-3", "Eden Clements", "645-17-79"),
        Contact::with_id("id-4", "Annie Copeland", "227-91-26"),
    ]
}

/// True when no two contacts share a name, ignoring case.
pub fn names_are_unique(contacts: &[Contact]) -> bool {
    let mut seen = HashSet::with_capacity(contacts.len());
    contacts.iter().all(|c| seen.insert(c.name.to_lowercase()))
}

/// True when every contact has a non-blank name and no id repeats.
pub fn ids_are_unique_and_names_present(contacts: &[Contact]) -> bool {
    let mut seen = HashSet::with_capacity(contacts.len());
    contacts
        .iter()
        .all(|c| !c.name.trim().is_empty() && seen.insert(c.id.as_str()))
}
