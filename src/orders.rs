//! In-memory order storage.
//!
//! The "database" is a plain `Vec` behind a `Mutex`. Nothing is validated on
//! the way in: duplicate, empty, and script-bearing orders are all accepted
//! verbatim, which is what the demo relies on. The lock exists only because
//! handlers run on a multi-threaded runtime; it gives each call the same
//! atomicity the original single-threaded event loop had for free.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single coffee order. No id, no timestamp, no owner.
///
/// Fields are optional because callers may omit them; an absent field is
/// stored as-is and serialized as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub name: Option<String>,
    pub coffee: Option<String>,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("order store lock poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(_: PoisonError<T>) -> Self {
        StoreError::Poisoned
    }
}

#[derive(Default)]
pub struct OrderStore {
    orders: Mutex<Vec<Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an order to the end of the sequence. Always accepts.
    pub fn append(&self, order: Order) -> Result<(), StoreError> {
        self.orders.lock()?.push(order);
        Ok(())
    }

    /// Snapshot of every order in insertion order.
    pub fn list(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.orders.lock()?.clone())
    }

    /// Drops every order.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.orders.lock()?.clear();
        Ok(())
    }
}
