//! Core domain modules for LogKit.
//!
//! Contains the event data model, the streaming line reader, the filter
//! predicates, and the aggregations folded over an event stream.

pub mod event_reader;
pub mod event_record;
pub mod filter;
pub mod stats;
