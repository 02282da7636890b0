//! Asset Module
//!
//! Defines the immutable banner asset: a shared byte payload and its MIME type.

use std::sync::Arc;

use bytes::Bytes;

// == Asset ==
/// A single banner file held in memory.
///
/// Cloning is cheap: the payload and the MIME string are reference counted,
/// so every reader shares the same underlying storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    data: Bytes,
    mime: Arc<str>,
}

impl Asset {
    // == Constructor ==
    /// Creates a new asset from a payload and a MIME type.
    ///
    /// Neither the payload nor the MIME type is validated.
    pub fn new(data: impl Into<Bytes>, mime: impl Into<Arc<str>>) -> Self {
        Self {
            data: data.into(),
            mime: mime.into(),
        }
    }

    /// Returns the payload bytes.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the MIME type.
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Returns a shared handle to the MIME type without copying it.
    pub(crate) fn mime_handle(&self) -> Arc<str> {
        Arc::clone(&self.mime)
    }

    /// Returns the payload size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
