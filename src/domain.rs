pub mod book;
pub mod contact;

use crate::prelude::{AppError, KeyValueStore, Notifier};
use std::collections::HashSet;
use uuid::Uuid;
