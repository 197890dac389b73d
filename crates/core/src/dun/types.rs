use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A site to visit: the unit of data stored by every data source.
///
/// The `id` is assigned once at creation and never changes. The same `id`
/// refers to the same dun in the remote store, the local mirror and the
/// repository cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dun {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Dun {
    /// Creates a new active dun with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }

    /// Sets a specific ID for this dun (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the completion flag.
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Text shown in list rows: the title, or the description when the title is empty.
    pub fn title_for_list(&self) -> &str {
        if self.title.is_empty() {
            &self.description
        } else {
            &self.title
        }
    }

    /// Returns true if the dun is still planned (not completed).
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Returns true if both title and description are empty.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

/// Which duns a listing should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DunFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl DunFilter {
    /// Returns true if the dun should be shown under this filter.
    pub fn matches(&self, dun: &Dun) -> bool {
        match self {
            DunFilter::All => true,
            DunFilter::Active => dun.is_active(),
            DunFilter::Completed => dun.completed,
        }
    }
}

/// Share of active and completed duns, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub active_percent: f32,
    pub completed_percent: f32,
}
