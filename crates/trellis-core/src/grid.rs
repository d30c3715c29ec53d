use chrono::{
  Datelike,
  NaiveDate
};
use tracing::debug;

use crate::datetime::{
  add_days,
  days_in_month,
  first_day_of_month,
  shift_months,
  start_of_week
};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ViewMode {
  Month,
  Week,
  Day
}

impl ViewMode {
  pub fn all() -> [Self; 3] {
    [Self::Month, Self::Week, Self::Day]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Month => "month",
      | Self::Week => "week",
      | Self::Day => "day"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Month => "Month",
      | Self::Week => "Week",
      | Self::Day => "Day"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "month" => Some(Self::Month),
      | "week" => Some(Self::Week),
      | "day" => Some(Self::Day),
      | _ => None
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Cell {
  Blank,
  Day(NaiveDate)
}

impl Cell {
  pub fn date(
    self
  ) -> Option<NaiveDate> {
    match self {
      | Self::Blank => None,
      | Self::Day(date) => Some(date)
    }
  }

  pub fn is_blank(self) -> bool {
    matches!(self, Self::Blank)
  }
}

pub fn build_grid(
  focus: NaiveDate,
  view: ViewMode
) -> Vec<Cell> {
  match view {
    | ViewMode::Month => {
      build_month_grid(focus)
    }
    | ViewMode::Week => {
      build_week_grid(focus)
    }
    | ViewMode::Day => {
      vec![Cell::Day(focus)]
    }
  }
}

fn build_month_grid(
  focus: NaiveDate
) -> Vec<Cell> {
  let first = first_day_of_month(
    focus.year(),
    focus.month()
  );
  let lead = first
    .weekday()
    .num_days_from_sunday()
    as usize;
  let days = days_in_month(
    focus.year(),
    focus.month()
  ) as usize;
  let total =
    (lead + days).div_ceil(7) * 7;

  debug!(
    year = focus.year(),
    month = focus.month(),
    lead,
    days,
    total,
    "built month grid"
  );

  (0..total)
    .map(|idx| {
      if idx < lead
        || idx >= lead + days
      {
        Cell::Blank
      } else {
        Cell::Day(add_days(
          first,
          (idx - lead) as i64
        ))
      }
    })
    .collect()
}

fn build_week_grid(
  focus: NaiveDate
) -> Vec<Cell> {
  let start = start_of_week(focus);
  (0_i64..7_i64)
    .map(|offset| {
      Cell::Day(add_days(start, offset))
    })
    .collect()
}

#[must_use]
pub fn shift_focus(
  current: NaiveDate,
  view: ViewMode,
  step: i64
) -> NaiveDate {
  match view {
    | ViewMode::Month => {
      shift_months(current, step as i32)
    }
    | ViewMode::Week => {
      add_days(current, step * 7)
    }
    | ViewMode::Day => {
      add_days(current, step)
    }
  }
}

pub fn view_title(
  focus: NaiveDate,
  view: ViewMode
) -> String {
  match view {
    | ViewMode::Month => {
      focus
        .format("%B %Y")
        .to_string()
    }
    | ViewMode::Week => {
      let start = start_of_week(focus);
      let end = add_days(start, 6);
      format!(
        "{} - {}",
        start.format("%b %d"),
        end.format("%b %d")
      )
    }
    | ViewMode::Day => {
      focus
        .format("%A, %B %d, %Y")
        .to_string()
    }
  }
}

pub fn weekday_labels()
-> [&'static str; 7] {
  [
    "Sun", "Mon", "Tue", "Wed", "Thu",
    "Fri", "Sat"
  ]
}

#[cfg(test)]
mod tests {
  use chrono::Weekday;

  use super::*;

  fn date(
    year: i32,
    month: u32,
    day: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(
      year, month, day
    )
    .expect("valid date")
  }

  #[test]
  fn month_grid_covers_full_weeks() {
    for (year, month) in [
      (2023, 2),
      (2023, 12),
      (2024, 2),
      (2024, 9),
      (2026, 2),
      (2026, 8),
    ] {
      let cells = build_grid(
        date(year, month, 15),
        ViewMode::Month
      );
      assert!(!cells.is_empty());
      assert_eq!(cells.len() % 7, 0);
      for cell in &cells {
        if let Some(day) = cell.date()
        {
          assert_eq!(day.year(), year);
          assert_eq!(
            day.month(),
            month
          );
        }
      }
    }
  }

  #[test]
  fn december_2023_grid_alignment() {
    let cells = build_grid(
      date(2023, 12, 17),
      ViewMode::Month
    );

    assert_eq!(cells.len(), 42);
    for cell in &cells[..5] {
      assert!(cell.is_blank());
    }
    assert_eq!(
      cells[5].date(),
      Some(date(2023, 12, 1))
    );
    assert_eq!(
      cells[35].date(),
      Some(date(2023, 12, 31))
    );
    for cell in &cells[36..] {
      assert!(cell.is_blank());
    }
  }

  #[test]
  fn week_grid_is_contiguous_from_sunday(
  ) {
    let cells = build_grid(
      date(2023, 12, 20),
      ViewMode::Week
    );

    assert_eq!(cells.len(), 7);
    let first = cells[0]
      .date()
      .expect("week cell has a date");
    assert_eq!(
      first.weekday(),
      Weekday::Sun
    );
    for (offset, cell) in
      cells.iter().enumerate()
    {
      assert_eq!(
        cell.date(),
        Some(add_days(
          first,
          offset as i64
        ))
      );
    }
  }

  #[test]
  fn day_grid_is_single_cell() {
    let focus = date(2023, 12, 17);
    let cells = build_grid(
      focus,
      ViewMode::Day
    );
    assert_eq!(
      cells,
      vec![Cell::Day(focus)]
    );
  }

  #[test]
  fn grid_build_is_idempotent() {
    let focus = date(2024, 2, 29);
    for view in ViewMode::all() {
      assert_eq!(
        build_grid(focus, view),
        build_grid(focus, view)
      );
    }
  }

  #[test]
  fn focus_shifts_per_view() {
    let focus = date(2023, 1, 31);
    assert_eq!(
      shift_focus(
        focus,
        ViewMode::Month,
        1
      ),
      date(2023, 2, 28)
    );
    assert_eq!(
      shift_focus(
        focus,
        ViewMode::Week,
        -1
      ),
      date(2023, 1, 24)
    );
    assert_eq!(
      shift_focus(
        focus,
        ViewMode::Day,
        1
      ),
      date(2023, 2, 1)
    );
  }

  #[test]
  fn titles_follow_view_mode() {
    let focus = date(2023, 12, 17);
    assert_eq!(
      view_title(
        focus,
        ViewMode::Month
      ),
      "December 2023"
    );
    assert_eq!(
      view_title(focus, ViewMode::Week),
      "Dec 17 - Dec 23"
    );
    assert_eq!(
      view_title(focus, ViewMode::Day),
      "Sunday, December 17, 2023"
    );
  }

  #[test]
  fn month_starting_sunday_has_no_leading_blanks(
  ) {
    let cells = build_grid(
      date(2026, 2, 10),
      ViewMode::Month
    );
    assert_eq!(cells.len(), 28);
    assert_eq!(
      cells[0].date(),
      Some(date(2026, 2, 1))
    );
    assert!(
      cells.iter().all(|cell| {
        !cell.is_blank()
      })
    );
  }

  #[test]
  fn weekday_labels_start_sunday() {
    let labels = weekday_labels();
    assert_eq!(labels.len(), 7);
    assert_eq!(labels[0], "Sun");
    assert_eq!(labels[6], "Sat");
  }

  #[test]
  fn view_mode_keys_round_trip() {
    for view in ViewMode::all() {
      assert_eq!(
        ViewMode::from_key(
          view.as_key()
        ),
        Some(view)
      );
    }
    assert_eq!(
      ViewMode::from_key("year"),
      None
    );
  }
}
