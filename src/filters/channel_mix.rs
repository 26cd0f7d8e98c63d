//! Channel Mix Filter
//!
//! Mixes both channels (left and right), with a configurable factor on how
//! much each channel affects the other. With the defaults both channels are
//! kept independent; setting all factors to `0.5` sends the same audio to
//! both.

use crate::error::{FilterError, Result};
use crate::filters::payload::ChannelMixPayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`ChannelMix`]
///
/// Mix factors are conventionally between `0.0` and `1.0`; as everywhere in
/// this crate the range is advisory and not enforced.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelMixOptions {
    pub left_to_left: Option<f64>,
    pub left_to_right: Option<f64>,
    pub right_to_left: Option<f64>,
    pub right_to_right: Option<f64>,
}

/// Channel mix filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChannelMix {
    payload: ChannelMixPayload,
}

impl ChannelMix {
    /// Create from an incoming wire payload
    pub fn new(payload: ChannelMixPayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: ChannelMixOptions) -> &mut Self {
        if let Some(v) = options.left_to_left {
            self.payload.left_to_left = Some(v);
        }
        if let Some(v) = options.left_to_right {
            self.payload.left_to_right = Some(v);
        }
        if let Some(v) = options.right_to_left {
            self.payload.right_to_left = Some(v);
        }
        if let Some(v) = options.right_to_right {
            self.payload.right_to_right = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = ChannelMixPayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> ChannelMixPayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "left_to_left" => self.payload.left_to_left = Some(value),
            "left_to_right" => self.payload.left_to_right = Some(value),
            "right_to_left" => self.payload.right_to_left = Some(value),
            "right_to_right" => self.payload.right_to_right = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "channelMix",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for ChannelMix {
    fn name(&self) -> &'static str {
        "channelMix"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for ChannelMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChannelMix")
    }
}
