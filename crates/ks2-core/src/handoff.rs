//! Diagnostic-to-plan handoff.
//!
//! After a quiz the derived [`ChildProfile`] is parked under
//! [`HANDOFF_KEY`]; the plan builder takes it once and the key is removed.

use crate::error::StoreError;
use crate::model::ChildProfile;
use crate::store::KeyValueStore;

pub const HANDOFF_KEY: &str = "diagnosticChild";

pub struct SessionHandoff<S> {
    store: S,
}

impl<S: KeyValueStore> SessionHandoff<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn save_profile(&mut self, profile: &ChildProfile) -> Result<(), StoreError> {
        let json = serde_json::to_string(profile).map_err(|source| StoreError::Serialize {
            key: HANDOFF_KEY.to_string(),
            source,
        })?;
        self.store.set(HANDOFF_KEY, &json)
    }

    /// Read the parked profile without consuming it.
    pub fn peek_profile(&self) -> Option<ChildProfile> {
        let raw = match self.store.get(HANDOFF_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read diagnostic handoff");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|e| tracing::debug!(error = %e, "discarding unreadable diagnostic handoff"))
            .ok()
    }

    /// Read the parked profile and remove it.
    pub fn take_profile(&mut self) -> Option<ChildProfile> {
        let profile = self.peek_profile();
        if let Err(e) = self.store.delete(HANDOFF_KEY) {
            tracing::warn!(error = %e, "failed to clear diagnostic handoff");
        }
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LearningStyle, Pace};
    use crate::store::MemoryStore;

    #[test]
    fn profile_is_read_once() {
        let mut handoff = SessionHandoff::new(MemoryStore::new());
        let profile = ChildProfile::new("Ada", "Year 5")
            .with_style(LearningStyle::Visual)
            .with_pace(Pace::Accelerated);
        handoff.save_profile(&profile).unwrap();

        assert_eq!(handoff.peek_profile().as_ref(), Some(&profile));
        assert_eq!(handoff.take_profile(), Some(profile));
        assert_eq!(handoff.take_profile(), None);
    }

    #[test]
    fn unreadable_handoff_is_none_and_cleared() {
        let mut store = MemoryStore::new();
        store.set(HANDOFF_KEY, "not a profile").unwrap();
        let mut handoff = SessionHandoff::new(&mut store);
        assert!(handoff.take_profile().is_none());
        assert_eq!(store.get(HANDOFF_KEY).unwrap(), None);
    }

    #[test]
    fn handoff_uses_camel_case_fields() {
        let mut store = MemoryStore::new();
        let mut profile = ChildProfile::new("Kit", "Year 3");
        profile.areas_for_improvement = vec!["prefixes".into()];
        SessionHandoff::new(&mut store).save_profile(&profile).unwrap();

        let raw = store.get(HANDOFF_KEY).unwrap().unwrap();
        assert!(raw.contains("\"yearGroup\":\"Year 3\""));
        assert!(raw.contains("\"areasForImprovement\":[\"prefixes\"]"));
    }
}
