//! Adapter handing one selected catalog record to simulation code.

use std::fmt;

use crate::record::OilRecord;

/// A single oil selected from the catalog.
///
/// Thin wrapper around the raw record. The full physical/chemical oil model is
/// built elsewhere from the record returned by [`record`](Self::record); this
/// type only exposes the identity accessors the query layer needs.
#[derive(Debug, Clone)]
pub struct OpendriftOil {
    record: OilRecord,
}

impl OpendriftOil {
    pub fn new(record: OilRecord) -> Self {
        Self { record }
    }

    /// Globally unique record identifier.
    pub fn id(&self) -> &str {
        &self.record.data.id
    }

    /// Normalized display name.
    pub fn name(&self) -> &str {
        &self.record.data.attributes.metadata.name
    }

    /// Origin tag, if the record carries one.
    pub fn location(&self) -> Option<&str> {
        self.record.data.attributes.metadata.location.as_deref()
    }

    /// The full raw record, including all uninterpreted attributes.
    pub fn record(&self) -> &OilRecord {
        &self.record
    }

    pub fn into_record(self) -> OilRecord {
        self.record
    }

    /// Serialize the underlying record back to archive-shaped JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.record)
    }
}

impl fmt::Display for OpendriftOil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.id())
    }
}
