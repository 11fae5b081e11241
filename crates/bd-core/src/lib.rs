//! Burst state decoding over timestamped event streams.
//!
//! Given only the arrival times of discrete events, this crate infers the
//! most likely sequence of underlying "burst intensity" states: intervals
//! during which a Poisson-like event rate is elevated above baseline. Each
//! inter-event gap is attributed to one level in a geometric ladder of
//! hypothesized rates, with a penalty for escalating to a higher level so
//! that short spurious bursts are suppressed.
//!
//! Two equivalent decoders are provided:
//! - [`decode::ForwardDpDecoder`] fills a (position, level) cost matrix
//!   forward with backpointers (Viterbi-style dynamic programming).
//! - [`decode::TrellisShortestPathDecoder`] materializes the trellis as an
//!   explicit DAG and runs shortest-path relaxation over its edge list
//!   (Bellman-Ford-style).
//!
//! Both consume the same [`CostModel`] and must produce identical output;
//! the DP form is preferred in practice because it never materializes the
//! edge list.
//!
//! # Example
//!
//! ```
//! use bd_core::{decode_viterbi, input, report};
//!
//! let timestamps = [0.0, 1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 20.0];
//! let gaps = input::gaps_from_timestamps(&timestamps)?;
//! let decoded = decode_viterbi(&gaps, 2.0, 0.5)?;
//! for run in report::summarize(&timestamps, &decoded.states) {
//!     println!("{run}");
//! }
//! # Ok::<(), bd_common::Error>(())
//! ```

pub mod config;
pub mod cost;
pub mod decode;
pub mod input;
pub mod report;
pub mod schedule;

pub use bd_common::{Error, ErrorCategory, Result};
pub use config::BurstConfig;
pub use cost::CostModel;
pub use decode::{decode_trellis, decode_viterbi, Decoded, TrellisDecoder};
pub use report::Run;
pub use schedule::{RateSchedule, RoundingMode};
