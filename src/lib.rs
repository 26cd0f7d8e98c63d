//! Lavafilters - Filter Configuration Core
//!
//! Models the filter-configuration state a Lavalink-compatible audio node
//! accepts over its JSON protocol: nine independently configurable effect
//! units (equalizer, karaoke, timescale, tremolo, vibrato, rotation,
//! distortion, channel mix, low pass) plus a volume scalar.
//!
//! # Architecture
//!
//! Two layers, both pure data with no I/O:
//! - Effect units: self-contained configuration fragments with partial-update
//!   and reset behavior and their own wire shapes
//! - [`Filters`]: the chain aggregate owning one instance of every unit,
//!   applying whole-chain updates and producing the compacted wire payload
//!
//! Transport, other protocol message types, and the owning player live in
//! other crates; this one only builds, mutates, and (de)serializes the
//! configuration objects.

pub mod error;
pub mod filters;

pub use error::{FilterError, Result};
pub use filters::{
    ChannelMix, Distortion, Equalizer, FilterPayload, FilterUnit, Filters, FiltersOptions,
    Karaoke, LowPass, Rotation, Timescale, Tremolo, Vibrato,
};
