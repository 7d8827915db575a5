//! Adapter implementations of the port traits.
//!
//! - `live`: real clock, timer and random sources.
//! - `recording`: wrap another adapter and capture each read to a cassette.
//! - `replaying`: serve reads back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
