//! DTO modules that bridge services with templates.

use serde::{Deserialize, Serialize};

use crate::pagination::{Paginated, Searchable};

pub mod dashboard;
pub mod ha;
pub mod optimization;
pub mod performance;
pub mod privileges;
pub mod rman;
pub mod roles;
pub mod security;
pub mod users;

/// Query parameters accepted by every searchable list page.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Optional free-form search string applied to the list.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

impl ListQuery {
    pub fn paginate<T: Searchable>(&self, items: Vec<T>) -> Paginated<T> {
        Paginated::new(items, self.search.as_deref(), self.page)
    }
}

/// Entry in a "grant" checklist: something that may already be held.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub granted: bool,
}

impl Searchable for Assignment {
    fn search_values(&self) -> Vec<String> {
        vec![self.name.clone()]
    }
}
