// ABOUTME: Derived artifacts for a chosen recommendation: calendar files and invitation text
// ABOUTME: Pure text generators with no I/O, shared by the HTTP routes and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Next Good Day

//! Artifact generation
//!
//! Both generators consume a [`PlannedOuting`]: one recommended day, the hours
//! it covers and the text already attached to it.

/// iCalendar (RFC 5545) event files
pub mod calendar;
/// Plain-text invitation messages
pub mod invitation;

pub use calendar::{generate_ics, ics_filename};
pub use invitation::{format_hour_12, generate_invitation, score_phrase, Invitation};

use chrono::NaiveDate;

/// A recommended day as seen by the artifact generators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedOuting<'a> {
    /// Catalog name of the activity
    pub activity_name: &'a str,
    /// Day of the outing
    pub date: NaiveDate,
    /// Start hour, local time
    pub start_hour: u32,
    /// End hour, local time
    pub end_hour: u32,
    /// Resolved location name, if known
    pub location: Option<&'a str>,
    /// Short weather summary
    pub weather_summary: &'a str,
    /// Scoring notes
    pub explanation: &'a str,
    /// Final score
    pub score: f64,
}
