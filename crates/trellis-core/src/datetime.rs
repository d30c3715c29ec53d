use chrono::{
  Datelike,
  Duration,
  Local,
  NaiveDate,
  NaiveTime,
  Timelike
};
use regex::Regex;

pub fn today() -> NaiveDate {
  Local::now().date_naive()
}

#[must_use]
pub fn add_days(
  date: NaiveDate,
  days: i64
) -> NaiveDate {
  date
    .checked_add_signed(Duration::days(
      days
    ))
    .unwrap_or(date)
}

pub fn first_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  NaiveDate::from_ymd_opt(
    year, month, 1
  )
  .unwrap_or(NaiveDate::MIN)
}

pub fn last_day_of_month(
  year: i32,
  month: u32
) -> NaiveDate {
  let (next_year, next_month) =
    if month >= 12 {
      (year.saturating_add(1), 1_u32)
    } else {
      (year, month + 1)
    };
  add_days(
    first_day_of_month(
      next_year, next_month
    ),
    -1
  )
}

pub fn days_in_month(
  year: i32,
  month: u32
) -> u32 {
  last_day_of_month(year, month).day()
}

pub fn start_of_week(
  day: NaiveDate
) -> NaiveDate {
  let offset = day
    .weekday()
    .num_days_from_sunday()
    as i64;
  add_days(day, -offset)
}

#[must_use]
pub fn shift_months(
  date: NaiveDate,
  months: i32
) -> NaiveDate {
  let mut year = date.year();
  let mut month =
    date.month() as i32 + months;

  while month < 1 {
    month += 12;
    year = year.saturating_sub(1);
  }
  while month > 12 {
    month -= 12;
    year = year.saturating_add(1);
  }

  let month = month as u32;
  let day = date
    .day()
    .min(days_in_month(year, month));
  NaiveDate::from_ymd_opt(
    year, month, day
  )
  .unwrap_or(date)
}

pub fn parse_clock(
  raw: &str
) -> Option<NaiveTime> {
  let clock_re = Regex::new(
    r"^(?P<hour>\d{1,2}):(?P<minute>\d{2})$"
  )
  .ok()?;
  let captures =
    clock_re.captures(raw.trim())?;

  let hour = captures
    .name("hour")?
    .as_str()
    .parse::<u32>()
    .ok()?;
  let minute = captures
    .name("minute")?
    .as_str()
    .parse::<u32>()
    .ok()?;
  if hour > 23 || minute > 59 {
    return None;
  }

  NaiveTime::from_hms_opt(
    hour, minute, 0
  )
}

pub fn format_clock(
  time: NaiveTime
) -> String {
  format!(
    "{:02}:{:02}",
    time.hour(),
    time.minute()
  )
}

pub fn minute_of_day(
  time: NaiveTime
) -> u32 {
  time.hour() * 60 + time.minute()
}
