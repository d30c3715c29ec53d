use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Work,
    Health,
}

impl Category {
    pub fn all() -> [Self; 3] {
        [Self::Personal, Self::Work, Self::Health]
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Health => "health",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Health => "Health",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "work" => Some(Self::Work),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    pub fn marker(self) -> CategoryMarker {
        match self {
            Self::Personal => CategoryMarker {
                class: "category-personal",
                color: "#16a34a",
            },
            Self::Work => CategoryMarker {
                class: "category-work",
                color: "#2563eb",
            },
            Self::Health => CategoryMarker {
                class: "category-health",
                color: "#e11d48",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMarker {
    pub class: &'static str,
    pub color: &'static str,
}

pub const DEFAULT_MARKER: CategoryMarker = CategoryMarker {
    class: "category-default",
    color: "#4b5563",
};

pub fn marker_for_key(key: &str) -> CategoryMarker {
    Category::from_key(key)
        .map(Category::marker)
        .unwrap_or(DEFAULT_MARKER)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,

    pub title: String,

    pub date: NaiveDate,

    pub start: String,

    #[serde(default)]
    pub end: Option<String>,

    pub category: Category,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub attendees: Vec<String>,
}

impl Event {
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.date == day
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attendees: Vec<String>,
}

impl EventDraft {
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            start: start.into(),
            end: None,
            category,
            location: None,
            description: None,
            attendees: vec![],
        }
    }

    pub fn into_event(self, id: Uuid) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            start: self.start,
            end: self.end,
            category: self.category,
            location: self.location,
            description: self.description,
            attendees: self.attendees,
        }
    }
}
