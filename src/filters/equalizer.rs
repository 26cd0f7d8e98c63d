//! Equalizer Filter
//!
//! There are 15 bands, `0` to `14`, each with a `gain` multiplier that
//! defaults to `0.0`. Gains from `-0.25` (band fully muted) to `1.0` are
//! documented by the node, with `0.25` doubling the band; as with every
//! filter the range is advisory only. Modifying gains can also change the
//! output volume.
//!
//! Unlike the sparse filters this one is always fully populated: the table
//! of 15 bands exists at all times, and "not configured" means every gain is
//! at its `0.0` default.

use crate::filters::payload::EqualizerBand;
use crate::filters::unit::FilterUnit;
use std::fmt;

/// Number of equalizer bands the node exposes
pub const BAND_COUNT: usize = 15;

/// Equalizer filter: a dense, always-populated table of 15 bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equalizer {
    bands: [EqualizerBand; BAND_COUNT],
}

/// All 15 bands at gain 0.0
fn default_bands() -> [EqualizerBand; BAND_COUNT] {
    let mut bands = [EqualizerBand::new(0, 0.0); BAND_COUNT];
    for (n, band) in bands.iter_mut().enumerate() {
        band.band = n as i32;
    }
    bands
}

/// Fold a bulk update over a default table.
///
/// Entries apply in input order, so a later duplicate of the same band index
/// wins. Indices outside `0..15` are silently skipped; out-of-range indices
/// are not an error because the node itself ignores them.
fn normalize(payload: &[EqualizerBand]) -> [EqualizerBand; BAND_COUNT] {
    let mut bands = default_bands();
    for eq in payload {
        if eq.band < 0 || eq.band >= BAND_COUNT as i32 {
            continue;
        }
        bands[eq.band as usize] = *eq;
    }
    bands
}

impl Equalizer {
    /// Create from an incoming wire payload.
    ///
    /// Bulk hydration is strict: only an input of exactly [`BAND_COUNT`]
    /// entries is applied (normalized over a default table). Anything else,
    /// including `None`, yields the all-default table.
    pub fn new(payload: Option<Vec<EqualizerBand>>) -> Self {
        match payload {
            Some(bands) if bands.len() == BAND_COUNT => Self {
                bands: normalize(&bands),
            },
            _ => Self {
                bands: default_bands(),
            },
        }
    }

    /// Replace the bands of this equalizer.
    ///
    /// This changes **all** bands: passing `None` resets everything to the
    /// default, and a provided list follows the exactly-15 hydration rule of
    /// [`Equalizer::new`]. To change specific bands without touching the
    /// rest, use [`Equalizer::set_gain`].
    pub fn set(&mut self, bands: Option<Vec<EqualizerBand>>) -> &mut Self {
        self.bands = match bands {
            Some(payload) if payload.len() == BAND_COUNT => normalize(&payload),
            _ => default_bands(),
        };
        self
    }

    /// Reset this filter to its defaults
    pub fn reset(&mut self) -> &mut Self {
        self.bands = default_bands();
        self
    }

    /// Snapshot of the 15-entry band table, in band-index order
    pub fn payload(&self) -> [EqualizerBand; BAND_COUNT] {
        self.bands
    }

    /// Set a single band's gain, leaving the other 14 untouched.
    ///
    /// Out-of-range band indices are silently ignored.
    pub fn set_gain(&mut self, band: i32, gain: f64) -> &mut Self {
        if band >= 0 && band < BAND_COUNT as i32 {
            self.bands[band as usize].gain = gain;
        }
        self
    }

    /// Gain of a single band, or `None` for an out-of-range index
    pub fn gain(&self, band: i32) -> Option<f64> {
        if band >= 0 && band < BAND_COUNT as i32 {
            Some(self.bands[band as usize].gain)
        } else {
            None
        }
    }

    /// True when every band is at its 0.0 default gain.
    ///
    /// A default table is omitted from the serialized chain, matching the
    /// "omission means no change" wire convention.
    pub fn is_default(&self) -> bool {
        self.bands.iter().all(|b| b.gain == 0.0)
    }
}

impl Default for Equalizer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FilterUnit for Equalizer {
    fn name(&self) -> &'static str {
        "equalizer"
    }

    fn clear(&mut self) {
        self.reset();
    }

    fn is_empty(&self) -> bool {
        self.is_default()
    }
}

impl fmt::Display for Equalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equalizer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// Helper: a full 15-entry list with one overridden band
    fn full_bands(overridden: i32, gain: f64) -> Vec<EqualizerBand> {
        let mut bands: Vec<EqualizerBand> =
            (0..BAND_COUNT as i32).map(|n| EqualizerBand::new(n, 0.0)).collect();
        bands[overridden as usize] = EqualizerBand::new(overridden, gain);
        bands
    }

    #[test]
    fn test_default_is_fifteen_zeroed_bands() {
        let eq = Equalizer::default();
        let payload = eq.payload();
        assert_eq!(payload.len(), BAND_COUNT);
        for (n, band) in payload.iter().enumerate() {
            assert_eq!(band.band, n as i32);
            assert_eq!(band.gain, 0.0);
        }
        assert!(eq.is_default());
    }

    #[test]
    fn test_hydration_applies_exactly_fifteen() {
        let eq = Equalizer::new(Some(full_bands(3, 0.5)));
        assert_eq!(eq.gain(3), Some(0.5));
        assert_eq!(eq.gain(4), Some(0.0));
        assert!(!eq.is_default());
    }

    #[test_case(0 ; "empty list")]
    #[test_case(1 ; "single entry")]
    #[test_case(14 ; "one short")]
    #[test_case(16 ; "one over")]
    fn test_hydration_wrong_length_yields_default(len: usize) {
        let bands: Vec<EqualizerBand> =
            (0..len).map(|n| EqualizerBand::new(n as i32, 0.9)).collect();
        let eq = Equalizer::new(Some(bands));
        assert!(eq.is_default());
    }

    #[test_case(-1 ; "below range")]
    #[test_case(15 ; "above range")]
    fn test_out_of_range_band_dropped(band: i32) {
        // One slot of the 15 is replaced by an out-of-range entry; the table
        // stays fully populated and the rogue entry is discarded.
        let mut bands = full_bands(7, 0.25);
        bands[0] = EqualizerBand::new(band, 0.8);
        let eq = Equalizer::new(Some(bands));

        let payload = eq.payload();
        assert_eq!(payload.len(), BAND_COUNT);
        assert_eq!(eq.gain(0), Some(0.0));
        assert_eq!(eq.gain(7), Some(0.25));
        assert!(payload.iter().all(|b| (0..15).contains(&b.band)));
    }

    #[test]
    fn test_duplicate_band_later_entry_wins() {
        let mut bands = full_bands(0, 0.0);
        bands[5] = EqualizerBand::new(2, 0.1);
        bands[10] = EqualizerBand::new(2, 0.7);
        let eq = Equalizer::new(Some(bands));
        assert_eq!(eq.gain(2), Some(0.7));
    }

    #[test]
    fn test_set_without_bands_resets() {
        // Deliberate asymmetry with the sparse filters: equalizer set is
        // always whole-replace.
        let mut eq = Equalizer::new(Some(full_bands(1, 0.5)));
        eq.set(None);
        assert!(eq.is_default());
    }

    #[test]
    fn test_set_gain_single_band() {
        let mut eq = Equalizer::default();
        eq.set_gain(4, -0.25).set_gain(99, 1.0);
        assert_eq!(eq.gain(4), Some(-0.25));
        assert_eq!(eq.gain(99), None);
        // Only band 4 changed
        assert_eq!(eq.payload().iter().filter(|b| b.gain != 0.0).count(), 1);
    }

    #[test]
    fn test_reset_after_set() {
        let mut eq = Equalizer::default();
        eq.set(Some(full_bands(0, 0.5))).reset();
        assert!(eq.is_default());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Equalizer::default().to_string(), "Equalizer");
    }
}
