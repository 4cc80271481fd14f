//! Process-wide diagnostic handle
//!
//! Debugging tools can find the live document store here without it being
//! threaded through to them. Nothing in jsonsync reads the registry; the
//! store holds no reference to it beyond [`DocumentStore::publish`].

use std::sync::{Arc, Weak};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::store::DocumentStore;

static PUBLISHED: Lazy<RwLock<Option<Weak<DocumentStore>>>> = Lazy::new(|| RwLock::new(None));

/// Register `store` as the published store, replacing any previous one
pub fn publish(store: &Arc<DocumentStore>) {
    *PUBLISHED.write() = Some(Arc::downgrade(store));
    tracing::debug!(target: "jsonsync::registry", "document store published");
}

/// The published store, if one is registered and still alive
pub fn published_store() -> Option<Arc<DocumentStore>> {
    PUBLISHED.read().as_ref().and_then(Weak::upgrade)
}

/// Remove the published store
pub fn unpublish() {
    *PUBLISHED.write() = None;
}
