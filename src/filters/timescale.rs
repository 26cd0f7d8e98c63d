//! Timescale Filter
//!
//! Changes the playback speed, pitch, and rate.

use crate::error::{FilterError, Result};
use crate::filters::payload::TimescalePayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`Timescale`]
///
/// `Some` fields overwrite the stored value; `None` fields leave the prior
/// value untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimescaleOptions {
    /// Playback speed multiplier
    pub speed: Option<f64>,
    /// Pitch multiplier
    pub pitch: Option<f64>,
    /// Rate multiplier
    pub rate: Option<f64>,
}

/// Timescale filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timescale {
    payload: TimescalePayload,
}

impl Timescale {
    /// Create from an incoming wire payload
    pub fn new(payload: TimescalePayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: TimescaleOptions) -> &mut Self {
        if let Some(v) = options.speed {
            self.payload.speed = Some(v);
        }
        if let Some(v) = options.pitch {
            self.payload.pitch = Some(v);
        }
        if let Some(v) = options.rate {
            self.payload.rate = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = TimescalePayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> TimescalePayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "speed" => self.payload.speed = Some(value),
            "pitch" => self.payload.pitch = Some(value),
            "rate" => self.payload.rate = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "timescale",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for Timescale {
    fn name(&self) -> &'static str {
        "timescale"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for Timescale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timescale")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_absent_fields() {
        let mut timescale = Timescale::default();
        timescale.set(TimescaleOptions {
            speed: Some(1.5),
            pitch: Some(0.9),
            rate: None,
        });
        timescale.set(TimescaleOptions {
            pitch: Some(1.1),
            ..Default::default()
        });

        let payload = timescale.payload();
        assert_eq!(payload.speed, Some(1.5));
        assert_eq!(payload.pitch, Some(1.1));
        assert_eq!(payload.rate, None);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        // Range enforcement belongs to the node, not this crate
        let mut timescale = Timescale::default();
        timescale.set(TimescaleOptions {
            speed: Some(-3.0),
            ..Default::default()
        });
        assert_eq!(timescale.payload().speed, Some(-3.0));
    }

    #[test]
    fn test_fluent_set_then_reset() {
        let mut timescale = Timescale::default();
        timescale
            .set(TimescaleOptions {
                rate: Some(2.0),
                ..Default::default()
            })
            .reset();
        assert!(timescale.is_empty());
    }

    #[test]
    fn test_set_param_unknown_field() {
        let mut timescale = Timescale::default();
        assert!(timescale.set_param("tempo", 1.0).is_err());
    }
}
