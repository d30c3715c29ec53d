use anyhow::anyhow;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::event::{Category, Event, EventDraft};

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_events() -> Self {
        Self {
            events: sample_events(),
        }
    }

    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn add(&mut self, draft: EventDraft) -> anyhow::Result<Event> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(anyhow!("event title cannot be empty"));
        }

        let mut draft = draft;
        draft.title = title;

        let event = draft.into_event(Uuid::new_v4());
        info!(event_id = %event.id, date = %event.date, "added event");
        self.events.push(event.clone());
        Ok(event)
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn sample_events() -> Vec<Event> {
    let mut meet = EventDraft::new(
        "Meet with Jonson Rider",
        sample_date(2023, 12, 18),
        "06:00",
        Category::Work,
    );
    meet.end = Some("07:00".to_string());
    meet.location = Some("Park Lane Office".to_string());
    meet.attendees = vec!["Jonson Rider".to_string()];

    let mut onboarding = EventDraft::new(
        "Design onboarding",
        sample_date(2023, 12, 17),
        "06:00",
        Category::Work,
    );
    onboarding.end = Some("07:10".to_string());

    let mut development = EventDraft::new(
        "Development meet",
        sample_date(2023, 12, 17),
        "06:00",
        Category::Work,
    );
    development.end = Some("08:00".to_string());

    let mut planning = EventDraft::new(
        "Planning tasks",
        sample_date(2023, 12, 17),
        "07:50",
        Category::Personal,
    );
    planning.end = Some("08:30".to_string());

    [meet, onboarding, development, planning]
        .into_iter()
        .map(|draft| draft.into_event(Uuid::new_v4()))
        .collect()
}

fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}
