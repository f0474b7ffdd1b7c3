use crate::domain::entities::personnel::Personnel;
use crate::domain::ports::store::{RecordStore, StoreError};

/// Resolves an incoming name to an existing person by exact, trimmed,
/// case-sensitive equality. Nothing is created on a miss.
pub struct NameMatcher<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> NameMatcher<'a> {
    #[must_use]
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Returns the earliest-created person with this name, or `None`.
    ///
    /// Duplicate names resolve deterministically to the lowest id; the
    /// ambiguity is logged so misattributed readings can be traced.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the lookup fails.
    pub fn resolve(&self, raw_name: &str) -> Result<Option<Personnel>, StoreError> {
        let name = raw_name.trim();
        let mut matches = self.store.find_personnel_by_name(name)?;
        if matches.len() > 1 {
            tracing::warn!(
                name,
                count = matches.len(),
                "ambiguous personnel name, attaching to earliest record"
            );
        }
        if matches.is_empty() {
            Ok(None)
        } else {
            Ok(Some(matches.remove(0)))
        }
    }
}
