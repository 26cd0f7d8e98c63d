//! FilterUnit trait definition
//!
//! The common seam over the nine effect units. Two shapes implement it: the
//! dense [`Equalizer`](crate::filters::Equalizer) (fixed 15-band table) and
//! the eight sparse optional-field units. The trait covers only what is
//! uniform across both; `set` stays on the concrete types because each unit
//! takes its own typed options.

/// Base trait for all filter units
pub trait FilterUnit {
    /// Wire-format key for this unit in the top-level filters object
    fn name(&self) -> &'static str;

    /// Clear the unit back to its empty/default state
    fn clear(&mut self);

    /// True when the unit carries no configuration and is omitted from the
    /// serialized chain
    fn is_empty(&self) -> bool;
}
