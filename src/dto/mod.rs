//! View descriptions produced from API data and consumed by the templates.
//!
//! Everything here is pure: builders take the fetched records and return a
//! value describing what a list container should show.

use serde::Serialize;

pub mod client;
pub mod deal;

/// Content of a list container.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum ListView<T> {
    /// A fetch is in flight.
    Loading,
    /// The fetch returned no records.
    Empty,
    Items(Vec<T>),
    /// The fetch failed; the error has already been reported.
    Failed,
}

impl<T> Default for ListView<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> ListView<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Items(items)
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Items(items) => items.as_slice(),
            _ => &[],
        }
    }
}
