//! Rotation Filter
//!
//! Rotates the sound around the stereo channels/user headphones (audio
//! panning).

use crate::error::{FilterError, Result};
use crate::filters::payload::RotationPayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`Rotation`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationOptions {
    /// Frequency of the audio rotating around the listener in Hz.
    /// `0.2` gives the classic slow-pan effect.
    pub rotation_hz: Option<f64>,
}

/// Rotation filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    payload: RotationPayload,
}

impl Rotation {
    /// Create from an incoming wire payload
    pub fn new(payload: RotationPayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: RotationOptions) -> &mut Self {
        if let Some(v) = options.rotation_hz {
            self.payload.rotation_hz = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = RotationPayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> RotationPayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "rotation_hz" => self.payload.rotation_hz = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "rotation",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for Rotation {
    fn name(&self) -> &'static str {
        "rotation"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_payload() {
        let mut rotation = Rotation::default();
        rotation.set(RotationOptions {
            rotation_hz: Some(0.2),
        });
        assert_eq!(rotation.payload().rotation_hz, Some(0.2));

        let value = serde_json::to_value(rotation.payload()).unwrap();
        assert_eq!(value, serde_json::json!({"rotationHz": 0.2}));
    }

    #[test]
    fn test_empty_options_leave_prior_value() {
        let mut rotation = Rotation::default();
        rotation.set(RotationOptions {
            rotation_hz: Some(0.5),
        });
        rotation.set(RotationOptions::default());
        assert_eq!(rotation.payload().rotation_hz, Some(0.5));
    }

    #[test]
    fn test_reset_empties_payload() {
        let mut rotation = Rotation::default();
        rotation
            .set(RotationOptions {
                rotation_hz: Some(0.2),
            })
            .reset();
        assert!(rotation.is_empty());
    }
}
