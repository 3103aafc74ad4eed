//! Filter predicates applied while streaming events.
//!
//! [`TimeRange`] is evaluated by the reader itself, since an event whose
//! timestamp cannot be compared must abort the pass. [`EventFilter`] holds
//! the stateless per-event checks the aggregators apply, ordered
//! cheapest-first: source IP equality before the message substring test.

use chrono::{DateTime, Utc};

use crate::core::event_record::Event;
use crate::util::error::Result;
use crate::util::time::parse_timestamp;

/// Inclusive UTC time window. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Earliest accepted instant. `None` = no lower bound.
    pub since: Option<DateTime<Utc>>,
    /// Latest accepted instant. `None` = no upper bound.
    pub until: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// Parse the raw bound strings once, up front. Blank strings count as
    /// "not given".
    ///
    /// # Errors
    /// Returns `InvalidTimestamp` if a given bound does not parse.
    pub fn parse(since: Option<&str>, until: Option<&str>) -> Result<Self> {
        Ok(Self {
            since: parse_bound(since)?,
            until: parse_bound(until)?,
        })
    }

    /// `true` if at least one bound is set.
    pub fn is_active(&self) -> bool {
        self.since.is_some() || self.until.is_some()
    }

    /// Test an instant against both bounds (inclusive).
    pub fn contains(&self, ts: &DateTime<Utc>) -> bool {
        if let Some(ref since) = self.since {
            if ts < since {
                return false;
            }
        }
        if let Some(ref until) = self.until {
            if ts > until {
                return false;
            }
        }
        true
    }

    /// Decide whether `event` survives this window.
    ///
    /// An inactive range admits everything. Otherwise an event without a
    /// timestamp is dropped, and one whose timestamp does not parse is an
    /// error rather than a silent skip.
    pub fn admits(&self, event: &Event) -> Result<bool> {
        if !self.is_active() {
            return Ok(true);
        }
        if event.ts.is_empty() {
            return Ok(false);
        }
        let ts = parse_timestamp(&event.ts)?;
        Ok(self.contains(&ts))
    }
}

fn parse_bound(raw: Option<&str>) -> Result<Option<DateTime<Utc>>> {
    match raw {
        Some(s) if !s.trim().is_empty() => parse_timestamp(s).map(Some),
        _ => Ok(None),
    }
}

/// Per-query event criteria.
///
/// All fields default to "pass all", so a default `EventFilter` matches
/// every event. Empty strings are treated the same as no criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    /// Exact source IP to keep.
    src_ip: Option<String>,
    /// Lowercased message needle, folded once at construction.
    needle: Option<String>,
}

impl EventFilter {
    /// Build a filter from the raw query options.
    pub fn new(src_ip: Option<&str>, contains: Option<&str>) -> Self {
        Self {
            src_ip: src_ip.filter(|s| !s.is_empty()).map(str::to_owned),
            needle: contains.filter(|s| !s.is_empty()).map(str::to_lowercase),
        }
    }

    /// Source IP equality check. Passes when no source IP is set.
    pub fn matches_source(&self, event: &Event) -> bool {
        match &self.src_ip {
            Some(ip) => event.src_ip == *ip,
            None => true,
        }
    }

    /// Case-insensitive substring check against the message. Passes when no
    /// needle is set.
    pub fn matches_text(&self, event: &Event) -> bool {
        match &self.needle {
            Some(needle) => event.msg.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }

    /// Test whether the event passes **all** criteria.
    pub fn matches(&self, event: &Event) -> bool {
        self.matches_source(event) && self.matches_text(event)
    }
}
