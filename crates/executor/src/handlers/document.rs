//! Document command handlers.
//!
//! Handles GetJson, SetJson, EditorChanged and Clear.

use jsonsync_engine::DocumentStore;

use crate::{Error, Output, Result};

/// Handle GetJson command: return the document text.
pub fn get_json(store: &DocumentStore) -> Result<Output> {
    Ok(Output::Json(store.get_json()))
}

/// Handle SetJson command: validate and push new document text.
pub fn set_json(store: &DocumentStore, read_only: bool, json: String) -> Result<Output> {
    if read_only {
        return Err(Error::ReadOnly);
    }
    store.try_set_json(json)?;
    Ok(Output::Unit)
}

/// Handle EditorChanged command: pull the editor's text into the store.
///
/// Invalid editor text is not an error for the host; the user is mid-edit.
/// The document keeps its value and `Changed(false)` is returned.
pub fn editor_changed(store: &DocumentStore) -> Result<Output> {
    match store.sync_from_file() {
        Ok(changed) => Ok(Output::Changed(changed)),
        Err(e) if e.is_user_input() => {
            tracing::debug!(target: "jsonsync::executor", error = %e, "editor text not adopted");
            Ok(Output::Changed(false))
        }
        Err(e) => Err(e.into()),
    }
}

/// Handle Clear command: reset the document to `{}`.
pub fn clear(store: &DocumentStore, read_only: bool) -> Result<Output> {
    if read_only {
        return Err(Error::ReadOnly);
    }
    store.clear();
    Ok(Output::Unit)
}
