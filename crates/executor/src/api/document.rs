//! Document operations: read, replace, pull from the editor, clear.

use super::{unexpected, JsonSync};
use crate::{Command, Output, Result};

impl JsonSync {
    // =========================================================================
    // Document Operations (4)
    // =========================================================================

    /// Current document text.
    pub fn get_json(&self) -> Result<String> {
        match self.executor.execute(Command::GetJson)? {
            Output::Json(text) => Ok(text),
            other => Err(unexpected("GetJson", &other)),
        }
    }

    /// Replace the document. Invalid JSON is rejected and nothing changes.
    pub fn set_json(&self, json: impl Into<String>) -> Result<()> {
        match self
            .executor
            .execute(Command::SetJson { json: json.into() })?
        {
            Output::Unit => Ok(()),
            other => Err(unexpected("SetJson", &other)),
        }
    }

    /// Pull the editor's text after the user edited it.
    ///
    /// Returns whether the document changed.
    pub fn editor_changed(&self) -> Result<bool> {
        match self.executor.execute(Command::EditorChanged)? {
            Output::Changed(changed) => Ok(changed),
            other => Err(unexpected("EditorChanged", &other)),
        }
    }

    /// Reset the document to `{}`.
    pub fn clear(&self) -> Result<()> {
        match self.executor.execute(Command::Clear)? {
            Output::Unit => Ok(()),
            other => Err(unexpected("Clear", &other)),
        }
    }
}
