//! Type-safe JSON key-value storage for the Wijnhuis storefront.
//!
//! Provides a small, ergonomic API for persisting domain state (cart
//! contents, checkout progress) between sessions with automatic JSON
//! serialization. The file-backed [`Store`] is the durable analog of the
//! browser storage the storefront uses; tests can point it at a temporary
//! directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use wijnhuis_store::Store;
//! use serde::{Serialize, Deserialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cart {
//!     items: Vec<CartItem>,
//! }
//!
//! let store = Store::open("/var/lib/wijnhuis")?;
//!
//! // Persist a value
//! store.set("wijnhuis:cart", &cart)?;
//!
//! // Rehydrate it later
//! let cart: Option<Cart> = store.get("wijnhuis:cart")?;
//!
//! // Drop it after the order is confirmed
//! store.delete("wijnhuis:cart")?;
//! ```

mod error;
mod kv;

pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
