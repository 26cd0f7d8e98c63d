//! Distortion Filter
//!
//! Applies trigonometric waveshaping per sample. Can generate some fairly
//! unique audio effects.

use crate::error::{FilterError, Result};
use crate::filters::payload::DistortionPayload;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Partial update for [`Distortion`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DistortionOptions {
    pub sin_offset: Option<f64>,
    pub sin_scale: Option<f64>,
    pub cos_offset: Option<f64>,
    pub cos_scale: Option<f64>,
    pub tan_offset: Option<f64>,
    pub tan_scale: Option<f64>,
    pub offset: Option<f64>,
    pub scale: Option<f64>,
}

/// Distortion filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Distortion {
    payload: DistortionPayload,
}

impl Distortion {
    /// Create from an incoming wire payload
    pub fn new(payload: DistortionPayload) -> Self {
        Self { payload }
    }

    /// Merge the supplied fields over the current configuration
    pub fn set(&mut self, options: DistortionOptions) -> &mut Self {
        if let Some(v) = options.sin_offset {
            self.payload.sin_offset = Some(v);
        }
        if let Some(v) = options.sin_scale {
            self.payload.sin_scale = Some(v);
        }
        if let Some(v) = options.cos_offset {
            self.payload.cos_offset = Some(v);
        }
        if let Some(v) = options.cos_scale {
            self.payload.cos_scale = Some(v);
        }
        if let Some(v) = options.tan_offset {
            self.payload.tan_offset = Some(v);
        }
        if let Some(v) = options.tan_scale {
            self.payload.tan_scale = Some(v);
        }
        if let Some(v) = options.offset {
            self.payload.offset = Some(v);
        }
        if let Some(v) = options.scale {
            self.payload.scale = Some(v);
        }
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.payload = DistortionPayload::default();
        self
    }

    /// Snapshot of the wire-shaped payload
    pub fn payload(&self) -> DistortionPayload {
        self.payload
    }

    /// Set a single field by its caller-facing name
    pub fn set_param(&mut self, name: &str, value: f64) -> Result<&mut Self> {
        match name {
            "sin_offset" => self.payload.sin_offset = Some(value),
            "sin_scale" => self.payload.sin_scale = Some(value),
            "cos_offset" => self.payload.cos_offset = Some(value),
            "cos_scale" => self.payload.cos_scale = Some(value),
            "tan_offset" => self.payload.tan_offset = Some(value),
            "tan_scale" => self.payload.tan_scale = Some(value),
            "offset" => self.payload.offset = Some(value),
            "scale" => self.payload.scale = Some(value),
            _ => {
                return Err(FilterError::UnknownField {
                    filter: "distortion",
                    field: name.to_string(),
                })
            }
        }
        Ok(self)
    }
}

impl FilterUnit for Distortion {
    fn name(&self) -> &'static str {
        "distortion"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl fmt::Display for Distortion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Distortion")
    }
}
