//! Vibrato Filter
//!
//! Similar to tremolo. While tremolo oscillates the volume, vibrato
//! oscillates the pitch.

use crate::error::{FilterError, Result};
use crate::filters::payload::VibratoPayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`Vibrato`]
#[derive(Debug, Clone, Copy, Default)]
pub struct VibratoOptions {
    /// Oscillation frequency in Hz
    pub frequency: Option<f64>,
    /// Oscillation depth
    pub depth: Option<f64>,
}

/// Vibrato filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vibrato {
    payload: VibratoPayload,
}

impl Vibrato {
    /// Create from an incoming wire payload
    pub fn new(payload: VibratoPayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: VibratoOptions) -> &mut Self {
        if let Some(v) = options.frequency {
            self.payload.frequency = Some(v);
        }
        if let Some(v) = options.depth {
            self.payload.depth = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = VibratoPayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> VibratoPayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "frequency" => self.payload.frequency = Some(value),
            "depth" => self.payload.depth = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "vibrato",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for Vibrato {
    fn name(&self) -> &'static str {
        "vibrato"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for Vibrato {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vibrato")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_merges_over_prior() {
        let mut vibrato = Vibrato::default();
        vibrato.set(VibratoOptions {
            frequency: Some(8.0),
            ..Default::default()
        });
        vibrato.set(VibratoOptions {
            depth: Some(0.3),
            ..Default::default()
        });

        let payload = vibrato.payload();
        assert_eq!(payload.frequency, Some(8.0));
        assert_eq!(payload.depth, Some(0.3));
    }

    #[test]
    fn test_reset_empties_payload() {
        let mut vibrato = Vibrato::default();
        vibrato
            .set(VibratoOptions {
                depth: Some(1.0),
                ..Default::default()
            })
            .reset();
        assert!(vibrato.is_empty());
    }

    #[test]
    fn test_set_param_unknown_field() {
        let mut vibrato = Vibrato::default();
        assert!(vibrato.set_param("rate", 1.0).is_err());
    }
}
