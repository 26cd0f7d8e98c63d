//! Filter chain aggregate
//!
//! [`Filters`] owns one instance of every effect unit plus the volume
//! scalar. A unit is never absent: "no effect configured" is an empty unit
//! payload, not a missing unit. The aggregate applies whole-chain partial
//! updates and flattens everything into the compacted wire payload.

use crate::error::Result;
use crate::filters::channel_mix::ChannelMix;
use crate::filters::distortion::Distortion;
use crate::filters::equalizer::Equalizer;
use crate::filters::karaoke::Karaoke;
use crate::filters::low_pass::LowPass;
use crate::filters::payload::FilterPayload;
use crate::filters::rotation::Rotation;
use crate::filters::timescale::Timescale;
use crate::filters::tremolo::Tremolo;
use crate::filters::unit::FilterUnit;
use crate::filters::vibrato::Vibrato;
use serde_json::Value;
use tracing::{debug, trace};

/// Whole-chain partial update for [`Filters::set_filters`]
///
/// Each `Some` field replaces the aggregate's unit wholesale — this is
/// whole-unit replacement, not a field-level merge into the existing unit.
/// What `None` means depends on the merge mode, see
/// [`Filters::set_filters`].
#[derive(Debug, Clone, Default)]
pub struct FiltersOptions {
    pub volume: Option<f64>,
    pub equalizer: Option<Equalizer>,
    pub karaoke: Option<Karaoke>,
    pub timescale: Option<Timescale>,
    pub tremolo: Option<Tremolo>,
    pub vibrato: Option<Vibrato>,
    pub rotation: Option<Rotation>,
    pub distortion: Option<Distortion>,
    pub channel_mix: Option<ChannelMix>,
    pub low_pass: Option<LowPass>,
}

/// The complete effect configuration of one player
///
/// Create one per playback session, mutate it through the unit accessors or
/// [`Filters::set_filters`], and ship [`Filters::payload`] to the node. The
/// aggregate is a plain value object: every operation is synchronous and
/// in-memory, and a given instance is meant to be owned by exactly one
/// session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    volume: Option<f64>,
    equalizer: Equalizer,
    karaoke: Karaoke,
    timescale: Timescale,
    tremolo: Tremolo,
    vibrato: Vibrato,
    rotation: Rotation,
    distortion: Distortion,
    channel_mix: ChannelMix,
    low_pass: LowPass,
}

impl Filters {
    /// Create a chain with every unit at its empty default and volume unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a chain from an incoming wire payload.
    ///
    /// Units absent from the payload are initialized to their empty
    /// defaults, never left uninitialized.
    pub fn from_payload(payload: FilterPayload) -> Self {
        debug!("hydrating filter chain from wire payload");
        Self {
            volume: payload.volume,
            equalizer: Equalizer::new(payload.equalizer),
            karaoke: Karaoke::new(payload.karaoke.unwrap_or_default()),
            timescale: Timescale::new(payload.timescale.unwrap_or_default()),
            tremolo: Tremolo::new(payload.tremolo.unwrap_or_default()),
            vibrato: Vibrato::new(payload.vibrato.unwrap_or_default()),
            rotation: Rotation::new(payload.rotation.unwrap_or_default()),
            distortion: Distortion::new(payload.distortion.unwrap_or_default()),
            channel_mix: ChannelMix::new(payload.channel_mix.unwrap_or_default()),
            low_pass: LowPass::new(payload.low_pass.unwrap_or_default()),
        }
    }

    /// Build a chain from scratch with the supplied units, defaulting the
    /// rest
    pub fn from_options(options: FiltersOptions) -> Self {
        let mut filters = Self::new();
        filters.apply_with_reset(options);
        filters
    }

    /// Apply a whole-chain update.
    ///
    /// With `reset = false`, each field present in `options` replaces the
    /// current value wholesale and absent fields keep their current value.
    /// With `reset = true`, every field is taken from `options`, falling
    /// back to its empty default when absent — re-hydrating from empty,
    /// selectively overridden.
    pub fn set_filters(&mut self, options: FiltersOptions, reset: bool) {
        debug!(reset, "applying whole-chain filter update");
        if reset {
            self.apply_with_reset(options);
            return;
        }

        if let Some(volume) = options.volume {
            self.volume = Some(volume);
        }
        if let Some(equalizer) = options.equalizer {
            self.equalizer = equalizer;
        }
        if let Some(karaoke) = options.karaoke {
            self.karaoke = karaoke;
        }
        if let Some(timescale) = options.timescale {
            self.timescale = timescale;
        }
        if let Some(tremolo) = options.tremolo {
            self.tremolo = tremolo;
        }
        if let Some(vibrato) = options.vibrato {
            self.vibrato = vibrato;
        }
        if let Some(rotation) = options.rotation {
            self.rotation = rotation;
        }
        if let Some(distortion) = options.distortion {
            self.distortion = distortion;
        }
        if let Some(channel_mix) = options.channel_mix {
            self.channel_mix = channel_mix;
        }
        if let Some(low_pass) = options.low_pass {
            self.low_pass = low_pass;
        }
    }

    fn apply_with_reset(&mut self, options: FiltersOptions) {
        self.volume = options.volume;
        self.equalizer = options.equalizer.unwrap_or_default();
        self.karaoke = options.karaoke.unwrap_or_default();
        self.timescale = options.timescale.unwrap_or_default();
        self.tremolo = options.tremolo.unwrap_or_default();
        self.vibrato = options.vibrato.unwrap_or_default();
        self.rotation = options.rotation.unwrap_or_default();
        self.distortion = options.distortion.unwrap_or_default();
        self.channel_mix = options.channel_mix.unwrap_or_default();
        self.low_pass = options.low_pass.unwrap_or_default();
    }

    /// Reset every unit to its empty default and unset the volume
    pub fn reset(&mut self) {
        debug!("resetting filter chain");
        *self = Self::default();
    }

    /// Player volume, `0.0` to `5.0` where `1.0` is 100%. Values above
    /// `1.0` may cause clipping. `None` when unset.
    pub fn volume(&self) -> Option<f64> {
        self.volume
    }

    /// Set the player volume
    pub fn set_volume(&mut self, volume: f64) -> &mut Self {
        self.volume = Some(volume);
        self
    }

    /// The equalizer unit
    pub fn equalizer(&self) -> &Equalizer {
        &self.equalizer
    }

    /// The equalizer unit, mutable
    pub fn equalizer_mut(&mut self) -> &mut Equalizer {
        &mut self.equalizer
    }

    /// The karaoke unit
    pub fn karaoke(&self) -> &Karaoke {
        &self.karaoke
    }

    /// The karaoke unit, mutable
    pub fn karaoke_mut(&mut self) -> &mut Karaoke {
        &mut self.karaoke
    }

    /// The timescale unit
    pub fn timescale(&self) -> &Timescale {
        &self.timescale
    }

    /// The timescale unit, mutable
    pub fn timescale_mut(&mut self) -> &mut Timescale {
        &mut self.timescale
    }

    /// The tremolo unit
    pub fn tremolo(&self) -> &Tremolo {
        &self.tremolo
    }

    /// The tremolo unit, mutable
    pub fn tremolo_mut(&mut self) -> &mut Tremolo {
        &mut self.tremolo
    }

    /// The vibrato unit
    pub fn vibrato(&self) -> &Vibrato {
        &self.vibrato
    }

    /// The vibrato unit, mutable
    pub fn vibrato_mut(&mut self) -> &mut Vibrato {
        &mut self.vibrato
    }

    /// The rotation unit
    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// The rotation unit, mutable
    pub fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }

    /// The distortion unit
    pub fn distortion(&self) -> &Distortion {
        &self.distortion
    }

    /// The distortion unit, mutable
    pub fn distortion_mut(&mut self) -> &mut Distortion {
        &mut self.distortion
    }

    /// The channel mix unit
    pub fn channel_mix(&self) -> &ChannelMix {
        &self.channel_mix
    }

    /// The channel mix unit, mutable
    pub fn channel_mix_mut(&mut self) -> &mut ChannelMix {
        &mut self.channel_mix
    }

    /// The low pass unit
    pub fn low_pass(&self) -> &LowPass {
        &self.low_pass
    }

    /// The low pass unit, mutable
    pub fn low_pass_mut(&mut self) -> &mut LowPass {
        &mut self.low_pass
    }

    /// All nine units behind the common interface
    fn units(&self) -> [&dyn FilterUnit; 9] {
        [
            &self.equalizer,
            &self.karaoke,
            &self.timescale,
            &self.tremolo,
            &self.vibrato,
            &self.rotation,
            &self.distortion,
            &self.channel_mix,
            &self.low_pass,
        ]
    }

    /// Wire keys of the units currently carrying configuration
    pub fn active(&self) -> Vec<&'static str> {
        self.units()
            .iter()
            .filter(|unit| !unit.is_empty())
            .map(|unit| unit.name())
            .collect()
    }

    /// Build the compacted wire payload.
    ///
    /// A top-level key is emitted only when it carries configuration: an
    /// unset volume, an empty unit mapping, and the all-default equalizer
    /// table are dropped entirely rather than sent as empty values, because
    /// omission is the node's "no change" signal. Emptiness is decided per
    /// field, never by numeric truthiness — an explicitly set `volume` of
    /// `0.0` is emitted.
    pub fn payload(&self) -> FilterPayload {
        trace!(active = ?self.active(), "building filter payload");
        FilterPayload {
            volume: self.volume,
            equalizer: (!self.equalizer.is_default())
                .then(|| self.equalizer.payload().to_vec()),
            karaoke: (!self.karaoke.is_empty()).then(|| self.karaoke.payload()),
            timescale: (!self.timescale.is_empty()).then(|| self.timescale.payload()),
            tremolo: (!self.tremolo.is_empty()).then(|| self.tremolo.payload()),
            vibrato: (!self.vibrato.is_empty()).then(|| self.vibrato.payload()),
            rotation: (!self.rotation.is_empty()).then(|| self.rotation.payload()),
            distortion: (!self.distortion.is_empty()).then(|| self.distortion.payload()),
            channel_mix: (!self.channel_mix.is_empty()).then(|| self.channel_mix.payload()),
            low_pass: (!self.low_pass.is_empty()).then(|| self.low_pass.payload()),
        }
    }

    /// The compacted payload as a `serde_json::Value`
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.payload())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::timescale::TimescaleOptions;
    use serde_json::json;

    #[test]
    fn test_new_chain_is_fully_defaulted() {
        let filters = Filters::new();
        assert_eq!(filters.volume(), None);
        assert!(filters.active().is_empty());
        assert_eq!(filters.to_value().unwrap(), json!({}));
    }

    #[test]
    fn test_set_filters_merge_replaces_only_supplied() {
        let mut filters = Filters::new();
        filters.set_volume(0.5);
        filters.karaoke_mut().set_param("level", 1.0).unwrap();
        let karaoke_before = *filters.karaoke();

        let mut timescale = Timescale::default();
        timescale.set(TimescaleOptions {
            speed: Some(1.25),
            ..Default::default()
        });
        filters.set_filters(
            FiltersOptions {
                timescale: Some(timescale),
                ..Default::default()
            },
            false,
        );

        assert_eq!(filters.timescale().payload().speed, Some(1.25));
        assert_eq!(filters.volume(), Some(0.5));
        assert_eq!(*filters.karaoke(), karaoke_before);
    }

    #[test]
    fn test_set_filters_is_whole_unit_replacement() {
        let mut filters = Filters::new();
        filters
            .timescale_mut()
            .set(TimescaleOptions {
                pitch: Some(0.8),
                ..Default::default()
            });

        // The incoming unit carries only `speed`; the prior `pitch` does not
        // survive because replacement is whole-unit, not field-merge.
        let mut replacement = Timescale::default();
        replacement.set(TimescaleOptions {
            speed: Some(2.0),
            ..Default::default()
        });
        filters.set_filters(
            FiltersOptions {
                timescale: Some(replacement),
                ..Default::default()
            },
            false,
        );

        let payload = filters.timescale().payload();
        assert_eq!(payload.speed, Some(2.0));
        assert_eq!(payload.pitch, None);
    }

    #[test]
    fn test_set_filters_reset_defaults_absent_fields() {
        let mut filters = Filters::new();
        filters.set_volume(2.0);
        filters.low_pass_mut().set_param("smoothing", 30.0).unwrap();

        let mut tremolo = Tremolo::default();
        tremolo.set_param("frequency", 3.0).unwrap();
        filters.set_filters(
            FiltersOptions {
                tremolo: Some(tremolo),
                ..Default::default()
            },
            true,
        );

        assert_eq!(filters.volume(), None);
        assert!(filters.low_pass().is_empty());
        assert_eq!(filters.tremolo().payload().frequency, Some(3.0));
    }

    #[test]
    fn test_set_filters_empty_reset_equals_reset() {
        let mut filters = Filters::new();
        filters.set_volume(1.5);
        filters.equalizer_mut().set_gain(0, 0.5);
        filters.set_filters(FiltersOptions::default(), true);
        assert_eq!(filters, Filters::new());
    }

    #[test]
    fn test_reset_restores_default_state() {
        let mut filters = Filters::new();
        filters.set_volume(3.0);
        filters.rotation_mut().set_param("rotation_hz", 0.2).unwrap();
        filters.reset();
        assert_eq!(filters, Filters::new());
        assert_eq!(filters.to_value().unwrap(), json!({}));
    }

    #[test]
    fn test_from_options_starts_from_empty() {
        let mut vibrato = Vibrato::default();
        vibrato.set_param("depth", 0.4).unwrap();
        let filters = Filters::from_options(FiltersOptions {
            volume: Some(0.9),
            vibrato: Some(vibrato),
            ..Default::default()
        });

        assert_eq!(filters.volume(), Some(0.9));
        assert_eq!(filters.vibrato().payload().depth, Some(0.4));
        assert!(filters.karaoke().is_empty());
    }

    #[test]
    fn test_payload_drops_empty_units() {
        let mut filters = Filters::new();
        filters.timescale_mut().set_param("rate", 1.1).unwrap();

        let payload = filters.payload();
        assert_eq!(payload.timescale.unwrap().rate, Some(1.1));
        assert_eq!(payload.karaoke, None);
        assert_eq!(payload.equalizer, None);
        assert_eq!(
            filters.to_value().unwrap(),
            json!({"timescale": {"rate": 1.1}})
        );
    }

    #[test]
    fn test_payload_keeps_explicit_zero_volume() {
        let mut filters = Filters::new();
        filters.set_volume(0.0);
        assert_eq!(filters.to_value().unwrap(), json!({"volume": 0.0}));
    }

    #[test]
    fn test_payload_emits_full_equalizer_when_configured() {
        let mut filters = Filters::new();
        filters.equalizer_mut().set_gain(2, 0.25);

        let bands = filters.payload().equalizer.unwrap();
        assert_eq!(bands.len(), 15);
        assert_eq!(bands[2].gain, 0.25);
    }

    #[test]
    fn test_active_lists_configured_units() {
        let mut filters = Filters::new();
        assert!(filters.active().is_empty());
        filters.distortion_mut().set_param("scale", 2.0).unwrap();
        filters.equalizer_mut().set_gain(0, 0.1);
        assert_eq!(filters.active(), vec!["equalizer", "distortion"]);
    }
}
