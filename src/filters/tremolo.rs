//! Tremolo Filter
//!
//! Uses amplification to create a shuddering effect, where the volume
//! quickly oscillates.

use crate::error::{FilterError, Result};
use crate::filters::payload::TremoloPayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`Tremolo`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TremoloOptions {
    /// Oscillation frequency in Hz
    pub frequency: Option<f64>,
    /// Oscillation depth
    pub depth: Option<f64>,
}

/// Tremolo filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Tremolo {
    payload: TremoloPayload,
}

impl Tremolo {
    /// Create from an incoming wire payload
    pub fn new(payload: TremoloPayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: TremoloOptions) -> &mut Self {
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
        self.payload = TremoloPayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> TremoloPayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "frequency" => self.payload.frequency = Some(value),
            "depth" => self.payload.depth = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "tremolo",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for Tremolo {
    fn name(&self) -> &'static str {
        "tremolo"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for Tremolo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tremolo")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_merges_over_prior() {
        let mut tremolo = Tremolo::default();
        tremolo.set(TremoloOptions {
            frequency: Some(4.0),
            depth: Some(0.75),
        });
        tremolo.set(TremoloOptions {
            depth: Some(0.5),
            ..Default::default()
        });

        let payload = tremolo.payload();
        assert_eq!(payload.frequency, Some(4.0));
        assert_eq!(payload.depth, Some(0.5));
    }

    #[test]
    fn test_reset_empties_payload() {
        let mut tremolo = Tremolo::default();
        tremolo
            .set(TremoloOptions {
                frequency: Some(2.0),
                ..Default::default()
            })
            .reset();
        assert!(tremolo.is_empty());
    }

    #[test]
    fn test_set_param_unknown_field() {
        let mut tremolo = Tremolo::default();
        assert!(tremolo.set_param("wobble", 1.0).is_err());
    }
}
