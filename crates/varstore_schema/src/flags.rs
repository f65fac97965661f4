//! Variable metadata flags.

use bitflags::bitflags;

bitflags! {
    /// Roles a variable plays in a model.
    ///
    /// Stored on the wire as a raw `u32`; bits with no name here are kept
    /// as they were read.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct VarFlags: u32 {
        /// Must be supplied before a run.
        const REQUIRED = 1 << 0;
        /// Produced by the model rather than supplied.
        const CALCULATED = 1 << 1;
        /// Read by the model.
        const INPUT = 1 << 2;
        /// Written by the model.
        const OUTPUT = 1 << 3;
        /// Selects between alternative configurations.
        const INDICATOR = 1 << 4;
        /// May be swept in a parametric study.
        const PARAMETRIC = 1 << 5;
    }
}

impl VarFlags {
    /// Flags from raw bits, keeping unnamed bits.
    #[must_use]
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}
