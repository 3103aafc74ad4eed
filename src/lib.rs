//! LogKit library crate.
//!
//! Re-exports the core modules so that integration tests and the binary
//! can access them. The binary entry point is in `main.rs`.

pub mod core;
pub mod export;
pub mod util;

pub use crate::core::event_reader::{iter_events, EventReader};
pub use crate::core::event_record::Event;
pub use crate::core::stats::{count_by_level, summarize, top_src_ips, Summary};
pub use crate::util::error::{LogkitError, Result};
