//! Filter Configuration Library
//!
//! One module per effect unit, wire payload types in `payload`, and the
//! chain aggregate in `chain`. Each unit can be `set` and `reset`
//! individually; `set` on an individual filter only updates the values you
//! pass, while the equalizer's `set` always replaces all 15 bands.

mod chain;
mod channel_mix;
mod distortion;
mod equalizer;
mod karaoke;
mod low_pass;
mod payload;
mod rotation;
mod timescale;
mod tremolo;
mod unit;
mod vibrato;

pub use chain::{Filters, FiltersOptions};
pub use channel_mix::{ChannelMix, ChannelMixOptions};
pub use distortion::{Distortion, DistortionOptions};
pub use equalizer::{Equalizer, BAND_COUNT};
pub use karaoke::{Karaoke, KaraokeOptions};
pub use low_pass::{LowPass, LowPassOptions};
pub use payload::{
    ChannelMixPayload, DistortionPayload, EqualizerBand, FilterPayload, KaraokePayload,
    LowPassPayload, RotationPayload, TimescalePayload, TremoloPayload, VibratoPayload,
};
pub use rotation::{Rotation, RotationOptions};
pub use timescale::{Timescale, TimescaleOptions};
pub use tremolo::{Tremolo, TremoloOptions};
pub use unit::FilterUnit;
pub use vibrato::{Vibrato, VibratoOptions};
