//! Karaoke Filter
//!
//! Uses equalization to eliminate part of a band, usually targeting vocals.

use crate::error::{FilterError, Result};
use crate::filters::payload::KaraokePayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`Karaoke`]
///
/// `Some` fields overwrite the stored value; `None` fields leave the prior
/// value untouched. There is no way to clear a single field — use
/// [`Karaoke::reset`] for a clean slate.
#[derive(Debug, Clone, Copy, Default)]
pub struct KaraokeOptions {
    /// Effect level, `0.0` (no effect) to `1.0` (full effect)
    pub level: Option<f64>,
    /// Mono effect level, `0.0` (no effect) to `1.0` (full effect)
    pub mono_level: Option<f64>,
    /// Filter band in Hz
    pub filter_band: Option<f64>,
    /// Filter width
    pub filter_width: Option<f64>,
}

/// Karaoke filter
///
/// Documented ranges are advisory only; values are passed through to the
/// node unvalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Karaoke {
    payload: KaraokePayload,
}

impl Karaoke {
    /// Create from an incoming wire payload
    pub fn new(payload: KaraokePayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: KaraokeOptions) -> &mut Self {
        if let Some(v) = options.level {
            self.payload.level = Some(v);
        }
        if let Some(v) = options.mono_level {
            self.payload.mono_level = Some(v);
        }
        if let Some(v) = options.filter_band {
            self.payload.filter_band = Some(v);
        }
        if let Some(v) = options.filter_width {
            self.payload.filter_width = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = KaraokePayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> KaraokePayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    ///
    /// For dynamic callers (e.g. command parsers). Unknown names are an
    /// error, never silently ignored.
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "level" => self.payload.level = Some(value),
            "mono_level" => self.payload.mono_level = Some(value),
            "filter_band" => self.payload.filter_band = Some(value),
            "filter_width" => self.payload.filter_width = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "karaoke",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for Karaoke {
    fn name(&self) -> &'static str {
        "karaoke"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for Karaoke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Karaoke")
    }
}
