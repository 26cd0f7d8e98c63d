//! Low Pass Filter
//!
//! Higher frequencies get suppressed while lower frequencies pass through.
//! Any smoothing value equal to or less than `1.0` disables the filter on
//! the node side.

use crate::error::{FilterError, Result};
use crate::filters::payload::LowPassPayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`LowPass`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPassOptions {
    /// Smoothing factor
    pub smoothing: Option<f64>,
}

/// Low pass filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LowPass {
    payload: LowPassPayload,
}

impl LowPass {
    /// Create from an incoming wire payload
    pub fn new(payload: LowPassPayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: LowPassOptions) -> &mut Self {
        if let Some(v) = options.smoothing {
            self.payload.smoothing = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = LowPassPayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> LowPassPayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "smoothing" => self.payload.smoothing = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "lowPass",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for LowPass {
    fn name(&self) -> &'static str {
        "lowPass"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for LowPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LowPass")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_payload() {
        let mut low_pass = LowPass::default();
        low_pass.set(LowPassOptions {
            smoothing: Some(20.0),
        });
        assert_eq!(low_pass.payload().smoothing, Some(20.0));
    }

    #[test]
    fn test_reset_empties_payload() {
        let mut low_pass = LowPass::default();
        low_pass
            .set(LowPassOptions {
                smoothing: Some(20.0),
            })
            .reset();
        assert!(low_pass.is_empty());
        assert_eq!(
            serde_json::to_value(low_pass.payload()).unwrap(),
            serde_json::json!({})
        );
    }

    #[test]
    fn test_set_param_unknown_field() {
        let mut low_pass = LowPass::default();
        assert!(low_pass.set_param("cutoff", 440.0).is_err());
    }
}
