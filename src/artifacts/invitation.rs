// ABOUTME: Plain-text invitation generation for a recommended outing
// ABOUTME: Formats the date, 12-hour times and a phrase describing the score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

use serde::{Deserialize, Serialize};

use super::PlannedOuting;
use crate::constants::display::{INVITATION_LOCATION_FALLBACK, INVITATION_SENDER};
use crate::constants::service_names::{PRODUCT_NAME, PRODUCT_URL};

/// Generated invitation ready to be stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    /// Subject line
    pub subject: String,
    /// Body text
    pub body: String,
}

/// Compose the invitation for an outing
#[must_use]
pub fn generate_invitation(outing: &PlannedOuting<'_>) -> Invitation {
    let weekday = outing.date.format("%A");
    let subject = format!("Join me for {} on {weekday}?", outing.activity_name);

    let body = format!(
        "Hi there!\n\
         \n\
         I'm planning to enjoy some time {activity} on {weekday}, {date} and I'd love for you to join me!\n\
         \n\
         Time: {start} to {end}\n\
         Location: {location}\n\
         Weather forecast: {summary}\n\
         \n\
         The forecast looks {phrase} for this activity!\n\
         \n\
         Let me know if you can make it!\n\
         \n\
         Best,\n\
         {sender}\n\
         \n\
         --\n\
         Powered by {PRODUCT_NAME}\n\
         {PRODUCT_URL}",
        activity = outing.activity_name.to_lowercase(),
        date = outing.date.format("%B %d"),
        start = format_hour_12(outing.start_hour),
        end = format_hour_12(outing.end_hour),
        location = outing.location.unwrap_or(INVITATION_LOCATION_FALLBACK),
        summary = outing.weather_summary,
        phrase = score_phrase(outing.score),
        sender = INVITATION_SENDER,
    );

    Invitation { subject, body }
}

/// Render an hour of the day on a 12-hour clock, e.g. `6:00 PM`
#[must_use]
pub fn format_hour_12(hour: u32) -> String {
    let hour = hour % 24;
    match hour {
        0 => "12:00 AM".to_owned(),
        1..=11 => format!("{hour}:00 AM"),
        12 => "12:00 PM".to_owned(),
        _ => format!("{}:00 PM", hour - 12),
    }
}

/// Describe a score in words
#[must_use]
pub fn score_phrase(score: f64) -> &'static str {
    if score >= 8.5 {
        "perfect"
    } else if score >= 7.0 {
        "excellent"
    } else if score >= 5.5 {
        "very good"
    } else if score >= 4.0 {
        "good"
    } else {
        "decent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_hour_12() {
        assert_eq!(format_hour_12(0), "12:00 AM");
        assert_eq!(format_hour_12(9), "9:00 AM");
        assert_eq!(format_hour_12(12), "12:00 PM");
        assert_eq!(format_hour_12(18), "6:00 PM");
        assert_eq!(format_hour_12(23), "11:00 PM");
    }

    #[test]
    fn test_score_phrase_thresholds() {
        assert_eq!(score_phrase(10.5), "perfect");
        assert_eq!(score_phrase(8.5), "perfect");
        assert_eq!(score_phrase(8.49), "excellent");
        assert_eq!(score_phrase(7.0), "excellent");
        assert_eq!(score_phrase(5.5), "very good");
        assert_eq!(score_phrase(4.0), "good");
        assert_eq!(score_phrase(3.99), "decent");
        assert_eq!(score_phrase(0.0), "decent");
    }

    #[test]
    fn test_generate_invitation() {
        let outing = PlannedOuting {
            activity_name: "Hiking",
            date: NaiveDate::from_ymd_opt(2025, 6, 7).unwrap(),
            start_hour: 9,
            end_hour: 18,
            location: None,
            weather_summary: "Mild, 70°F, 5% chance of rain",
            explanation: "Perfect temperature (70°F)",
            score: 9.0,
        };
        let invitation = generate_invitation(&outing);

        assert_eq!(invitation.subject, "Join me for Hiking on Saturday?");
        assert!(invitation.body.starts_with("Hi there!\n\nI'm planning to enjoy some time hiking on Saturday, June 07"));
        assert!(invitation.body.contains("Time: 9:00 AM to 6:00 PM\n"));
        assert!(invitation.body.contains("Location: your area\n"));
        assert!(invitation.body.contains("Weather forecast: Mild, 70°F, 5% chance of rain\n"));
        assert!(invitation.body.contains("The forecast looks perfect for this activity!"));
        assert!(invitation.body.contains("Best,\nYou\n"));
        assert!(invitation.body.ends_with("https://nextgoodday.app"));
    }
}
