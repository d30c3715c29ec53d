use chrono::{
  NaiveDate,
  NaiveTime,
  Timelike
};
use tracing::debug;
use uuid::Uuid;

use crate::config::Config;
use crate::datetime::{
  minute_of_day,
  parse_clock
};
use crate::event::Event;

#[derive(Debug, Clone, PartialEq)]
pub struct CellPlan {
  pub date:    NaiveDate,
  pub visible: Vec<Event>,
  pub hidden:  usize
}

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct Placement {
  pub event_id: Uuid,
  pub top:      f32,
  pub height:   f32
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourRow {
  pub hour:       u32,
  pub placements: Vec<Placement>
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
  Grid(CellPlan),
  Timeline(Vec<HourRow>)
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum PlanMode {
  Grid,
  Timeline
}

pub fn place_in_cell(
  day: NaiveDate,
  events: &[Event],
  mode: PlanMode,
  config: &Config
) -> RenderPlan {
  match mode {
    | PlanMode::Grid => {
      RenderPlan::Grid(grid_cell_plan(
        day, events, config
      ))
    }
    | PlanMode::Timeline => {
      RenderPlan::Timeline(
        timeline_rows(
          day, events, config
        )
      )
    }
  }
}

pub fn grid_cell_plan(
  day: NaiveDate,
  events: &[Event],
  config: &Config
) -> CellPlan {
  let day_events = events
    .iter()
    .filter(|event| {
      event.occurs_on(day)
    })
    .collect::<Vec<_>>();

  let limit =
    config.policies.grid_event_limit;
  let shown =
    day_events.len().min(limit);
  let hidden = day_events
    .len()
    .saturating_sub(shown);

  debug!(
    day = %day,
    total = day_events.len(),
    shown,
    hidden,
    "planned month cell"
  );

  CellPlan {
    date: day,
    visible: day_events
      .into_iter()
      .take(shown)
      .cloned()
      .collect(),
    hidden
  }
}

pub fn timeline_rows(
  day: NaiveDate,
  events: &[Event],
  config: &Config
) -> Vec<HourRow> {
  let hour_start =
    config.day_view.hour_start;
  let hour_end =
    config.day_view.hour_end;

  (hour_start..=hour_end)
    .map(|hour| HourRow {
      hour,
      placements:
        hour_row_placements(
          day, hour, events, config
        )
    })
    .collect()
}

pub fn hour_row_placements(
  day: NaiveDate,
  hour: u32,
  events: &[Event],
  config: &Config
) -> Vec<Placement> {
  events
    .iter()
    .filter(|event| {
      event.occurs_on(day)
    })
    .filter_map(|event| {
      let start = match parse_clock(
        &event.start
      ) {
        | Some(start) => start,
        | None => {
          debug!(
            event_id = %event.id,
            start = %event.start,
            "skipping event with unparseable start time"
          );
          return None;
        }
      };
      if start.hour() != hour {
        return None;
      }
      Some(place_event(
        event, start, config
      ))
    })
    .collect()
}

fn place_event(
  event: &Event,
  start: NaiveTime,
  config: &Config
) -> Placement {
  let top =
    start.minute() as f32 / 60.0;

  let height = event
    .end
    .as_deref()
    .and_then(parse_clock)
    .map(|end| {
      (minute_of_day(end) as f32
        - minute_of_day(start) as f32)
        / 60.0
    })
    .filter(|height| *height > 0.0)
    .unwrap_or(
      config.policies.min_event_height
    );

  Placement {
    event_id: event.id,
    top,
    height
  }
}
