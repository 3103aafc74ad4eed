//! Aggregations folded over an event stream.
//!
//! Each function consumes a stream of `Result<Event>` to completion and
//! either returns a well-formed result or the first error encountered.
//! Counts gathered before an error are dropped; no partial result escapes.

use std::collections::{BTreeMap, HashMap};

use crate::core::event_record::Event;
use crate::core::filter::EventFilter;
use crate::util::error::Result;

/// Level name → number of matching events.
pub type LevelCounts = BTreeMap<String, usize>;

/// `(src_ip, count)` pairs, highest count first.
pub type SourceRanking = Vec<(String, usize)>;

/// Count events per severity level.
///
/// Applies the `src_ip` equality filter, then the case-insensitive
/// `contains` filter, to every event. The result has one entry per distinct
/// level among the survivors and is empty when nothing matched.
///
/// # Errors
/// The first `Err` yielded by `events`.
pub fn count_by_level<I>(
    events: I,
    src_ip: Option<&str>,
    contains: Option<&str>,
) -> Result<LevelCounts>
where
    I: IntoIterator<Item = Result<Event>>,
{
    let filter = EventFilter::new(src_ip, contains);
    let mut counts = LevelCounts::new();

    for event in events {
        let event = event?;
        if !filter.matches(&event) {
            continue;
        }
        *counts.entry(event.level).or_insert(0) += 1;
    }

    Ok(counts)
}

/// The `n` most frequent source IPs among events whose message contains
/// `contains` (case-insensitive).
///
/// The empty source IP is counted like any other value. Ranking is by count
/// descending; ties are broken by source IP ascending so the output is
/// deterministic. `n == 0` yields an empty list.
///
/// # Errors
/// The first `Err` yielded by `events`.
pub fn top_src_ips<I>(events: I, n: usize, contains: Option<&str>) -> Result<SourceRanking>
where
    I: IntoIterator<Item = Result<Event>>,
{
    let filter = EventFilter::new(None, contains);
    let mut counts: HashMap<String, usize> = HashMap::new();

    for event in events {
        let event = event?;
        if !filter.matches_text(&event) {
            continue;
        }
        *counts.entry(event.src_ip).or_insert(0) += 1;
    }

    Ok(rank(counts, n))
}

/// Sort a source histogram by count descending, then IP ascending, and keep
/// the first `n` entries.
fn rank(counts: HashMap<String, usize>, n: usize) -> SourceRanking {
    let mut ranking: SourceRanking = counts.into_iter().collect();
    ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranking.truncate(n);
    ranking
}

/// Both aggregates computed from a single pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Same as [`count_by_level`] with the full filter.
    pub counts_by_level: LevelCounts,
    /// Same as [`top_src_ips`] with the filter's text criterion only.
    /// Empty when `top_n == 0`.
    pub top_src_ips: SourceRanking,
}

/// Compute level counts and the top-`top_n` source ranking in one pass.
///
/// Produces exactly what [`count_by_level`] and [`top_src_ips`] would on two
/// independent passes over the same input: the level counts see the whole
/// `filter`, the ranking sees only its text criterion. With `top_n == 0`
/// the ranking is skipped.
///
/// # Errors
/// The first `Err` yielded by `events`.
pub fn summarize<I>(events: I, filter: &EventFilter, top_n: usize) -> Result<Summary>
where
    I: IntoIterator<Item = Result<Event>>,
{
    let mut counts_by_level = LevelCounts::new();
    let mut sources: HashMap<String, usize> = HashMap::new();

    for event in events {
        let event = event?;
        if !filter.matches_text(&event) {
            continue;
        }
        if top_n > 0 {
            *sources.entry(event.src_ip.clone()).or_insert(0) += 1;
        }
        if filter.matches_source(&event) {
            *counts_by_level.entry(event.level).or_insert(0) += 1;
        }
    }

    Ok(Summary {
        counts_by_level,
        top_src_ips: rank(sources, top_n),
    })
}
