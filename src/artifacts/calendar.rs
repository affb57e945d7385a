// ABOUTME: RFC 5545 calendar generation for a single recommended outing
// ABOUTME: Produces a VCALENDAR with one VEVENT using floating local times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use uuid::Uuid;

use super::PlannedOuting;
use crate::constants::display::CALENDAR_LOCATION_FALLBACK;
use crate::constants::service_names::{ICS_PRODID, NEXT_GOOD_DAY};

const LOCAL_FORMAT: &str = "%Y%m%dT%H%M%S";
const UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const MAX_LINE_OCTETS: usize = 75;

/// Render the outing as an iCalendar document
///
/// `uid` and `stamp` are passed in so output is reproducible.
#[must_use]
pub fn generate_ics(outing: &PlannedOuting<'_>, uid: Uuid, stamp: DateTime<Utc>) -> String {
    let start = local_time(outing.date, outing.start_hour);
    let end = local_time(outing.date, outing.end_hour);
    let location = outing.location.unwrap_or(CALENDAR_LOCATION_FALLBACK);
    let description = format!("Weather: {}\n{}", outing.weather_summary, outing.explanation);

    let lines = [
        "BEGIN:VCALENDAR".to_owned(),
        "VERSION:2.0".to_owned(),
        format!("PRODID:{ICS_PRODID}"),
        "CALSCALE:GREGORIAN".to_owned(),
        "BEGIN:VEVENT".to_owned(),
        format!("UID:{uid}@{NEXT_GOOD_DAY}"),
        format!("DTSTAMP:{}", stamp.format(UTC_FORMAT)),
        format!("DTSTART:{}", start.format(LOCAL_FORMAT)),
        format!("DTEND:{}", end.format(LOCAL_FORMAT)),
        format!("SUMMARY:{}", escape_text(outing.activity_name)),
        format!("LOCATION:{}", escape_text(location)),
        format!("DESCRIPTION:{}", escape_text(&description)),
        "END:VEVENT".to_owned(),
        "END:VCALENDAR".to_owned(),
    ];

    let mut out = String::new();
    for line in &lines {
        out.push_str(&fold_line(line));
        out.push_str("\r\n");
    }
    out
}

/// Download filename: lowercased activity name with underscores, then the date
#[must_use]
pub fn ics_filename(activity_name: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}.ics",
        activity_name.to_lowercase().replace(' ', "_"),
        date.format("%Y-%m-%d")
    )
}

// Hours past 23 roll into the following day.
fn local_time(date: NaiveDate, hour: u32) -> NaiveDateTime {
    let day = date
        .checked_add_days(Days::new(u64::from(hour / 24)))
        .unwrap_or(date);
    let time = NaiveTime::from_hms_opt(hour % 24, 0, 0).unwrap_or(NaiveTime::MIN);
    day.and_time(time)
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            other => out.push(other),
        }
    }
    out
}

// Continuation lines start with a single space and never split a character.
fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_owned();
    }
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut width = 0;
    let mut limit = MAX_LINE_OCTETS;
    for c in line.chars() {
        let len = c.len_utf8();
        if width + len > limit {
            out.push_str("\r\n ");
            width = 0;
            limit = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        width += len;
    }
    out
}
