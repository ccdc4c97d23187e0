//! Recent-activity log.
//!
//! Keeps the last [`MAX_ACTIVITIES`] lessons, quizzes and plans a user touched,
//! newest first, one entry per link. The whole list is stored as a single JSON
//! array under [`ACTIVITY_KEY`].

use std::fmt;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::KeyValueStore;

pub const ACTIVITY_KEY: &str = "recentActivities";
pub const MAX_ACTIVITIES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Lesson,
    Test,
    /// A generated scheme of work.
    Sow,
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Lesson => write!(f, "lesson"),
            ActivityKind::Test => write!(f, "test"),
            ActivityKind::Sow => write!(f, "sow"),
        }
    }
}

/// An activity about to be recorded; the log adds the date.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub kind: ActivityKind,
    pub title: String,
    pub link: String,
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

impl NewActivity {
    pub fn new(kind: ActivityKind, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            link: link.into(),
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata
            .get_or_insert_with(serde_json::Map::new)
            .insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    /// en-GB short date, e.g. `3 Mar 2024`.
    pub date: String,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,
}

/// en-GB `day short-month year`, e.g. `3 Mar 2024`.
pub fn format_activity_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

/// The activity log over some key-value store.
#[derive(Debug)]
pub struct ActivityLog<S> {
    store: S,
}

impl<S: KeyValueStore> ActivityLog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Record an activity stamped with today's local date.
    pub fn record(&mut self, activity: NewActivity) -> Result<Vec<ActivityEntry>, StoreError> {
        self.record_on(activity, Local::now().date_naive())
    }

    /// Record an activity stamped with `date`.
    ///
    /// Any entry with the same link is dropped, the new entry goes to the
    /// front and the list is cut to [`MAX_ACTIVITIES`].
    pub fn record_on(
        &mut self,
        activity: NewActivity,
        date: NaiveDate,
    ) -> Result<Vec<ActivityEntry>, StoreError> {
        let entry = ActivityEntry {
            kind: activity.kind,
            title: activity.title,
            date: format_activity_date(date),
            link: activity.link,
            metadata: activity.metadata,
        };

        let previous = self.list();
        let mut updated = Vec::with_capacity(MAX_ACTIVITIES);
        updated.extend(previous.into_iter().filter(|a| a.link != entry.link));
        updated.insert(0, entry);
        updated.truncate(MAX_ACTIVITIES);

        let json = serde_json::to_string(&updated).map_err(|source| StoreError::Serialize {
            key: ACTIVITY_KEY.to_string(),
            source,
        })?;
        self.store.set(ACTIVITY_KEY, &json)?;

        tracing::debug!(count = updated.len(), link = %updated[0].link, "activity recorded");
        Ok(updated)
    }

    /// All recorded activities, newest first. Unreadable data reads as empty.
    pub fn list(&self) -> Vec<ActivityEntry> {
        let stored = match self.store.get(ACTIVITY_KEY) {
            Ok(Some(s)) => s,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read activity log");
                return Vec::new();
            }
        };
        if stored.trim().is_empty() {
            return Vec::new();
        }
        match serde_json::from_str(&stored) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "activity log is not valid JSON, treating as empty");
                Vec::new()
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.delete(ACTIVITY_KEY)
    }

    pub fn recent_lessons(&self) -> Vec<ActivityEntry> {
        self.list()
            .into_iter()
            .filter(|a| a.kind == ActivityKind::Lesson)
            .collect()
    }

    pub fn last_test(&self) -> Option<ActivityEntry> {
        self.last_of(ActivityKind::Test)
    }

    pub fn last_plan(&self) -> Option<ActivityEntry> {
        self.last_of(ActivityKind::Sow)
    }

    fn last_of(&self, kind: ActivityKind) -> Option<ActivityEntry> {
        self.list().into_iter().find(|a| a.kind == kind)
    }
}
