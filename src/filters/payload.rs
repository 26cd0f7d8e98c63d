//! Wire-format payload types
//!
//! Serde models of the JSON objects exchanged with the audio node. Field
//! names on the wire are camelCase; the Rust structs keep snake_case and map
//! through `rename_all`. Every field is optional: a key absent from the wire
//! means "not configured" and is never coerced to zero.
//!
//! Payload compaction rides on serialization: `None` fields are skipped, and
//! the chain aggregate only inserts a unit's payload when it is non-empty.
//! Emptiness is defined explicitly per type below rather than by truthiness,
//! because `0.0` is a meaningful value (e.g. a fully muted channel-mix
//! factor) while an absent key means "use the node's default".

use serde::{Deserialize, Serialize};

/// A single equalizer band: a band index and its gain multiplier.
///
/// Valid band indices are `0..=14`; the index is kept signed so out-of-range
/// input (including `-1`) deserializes cleanly and is dropped during
/// normalization instead of failing the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EqualizerBand {
    /// Band index, `0` to `14`
    pub band: i32,
    /// Gain multiplier for the band. `-0.25` mutes it, `0.25` doubles it.
    pub gain: f64,
}

impl EqualizerBand {
    /// Create a band entry
    pub fn new(band: i32, gain: f64) -> Self {
        Self { band, gain }
    }
}

/// Karaoke filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct KaraokePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mono_level: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_band: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_width: Option<f64>,
}

impl KaraokePayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.level.is_none()
            && self.mono_level.is_none()
            && self.filter_band.is_none()
            && self.filter_width.is_none()
    }
}

/// Timescale filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimescalePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
}

impl TimescalePayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.speed.is_none() && self.pitch.is_none() && self.rate.is_none()
    }
}

/// Tremolo filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TremoloPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl TremoloPayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.frequency.is_none() && self.depth.is_none()
    }
}

/// Vibrato filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VibratoPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl VibratoPayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.frequency.is_none() && self.depth.is_none()
    }
}

/// Rotation filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RotationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_hz: Option<f64>,
}

impl RotationPayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.rotation_hz.is_none()
    }
}

/// Distortion filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DistortionPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sin_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sin_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cos_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cos_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tan_offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tan_scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl DistortionPayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.sin_offset.is_none()
            && self.sin_scale.is_none()
            && self.cos_offset.is_none()
            && self.cos_scale.is_none()
            && self.tan_offset.is_none()
            && self.tan_scale.is_none()
            && self.offset.is_none()
            && self.scale.is_none()
    }
}

/// Channel mix filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChannelMixPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_to_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_to_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_to_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_to_right: Option<f64>,
}

impl ChannelMixPayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.left_to_left.is_none()
            && self.left_to_right.is_none()
            && self.right_to_left.is_none()
            && self.right_to_right.is_none()
    }
}

/// Low pass filter payload
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LowPassPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothing: Option<f64>,
}

impl LowPassPayload {
    /// True when no field is configured
    pub fn is_empty(&self) -> bool {
        self.smoothing.is_none()
    }
}

/// The full wire payload: everything the node accepts in one `filters` object.
///
/// Every field is optional. On the wire, omission means "no change" while a
/// present-but-empty object can mean something else, so the chain aggregate
/// never inserts an empty unit payload here; combined with
/// `skip_serializing_if`, serializing this struct yields the compacted form
/// directly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equalizer: Option<Vec<EqualizerBand>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub karaoke: Option<KaraokePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timescale: Option<TimescalePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tremolo: Option<TremoloPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vibrato: Option<VibratoPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distortion: Option<DistortionPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_mix: Option<ChannelMixPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low_pass: Option<LowPassPayload>,
}
