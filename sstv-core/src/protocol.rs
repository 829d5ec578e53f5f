//! Global SSTV protocol constants (spec.md §3).
//!
//! These are properties of the calibration header and VIS encoding that
//! apply across every mode, as opposed to [`crate::modes::ModeDescriptor`]
//! fields, which vary per mode.

/// Duration of each leader block in the calibration header, in seconds.
pub const LEADER_TIME_SEC: f64 = 0.300;

/// Duration of the break block between the two leaders, in seconds.
pub const BREAK_TIME_SEC: f64 = 0.010;

/// Duration of one VIS bit slot, in seconds.
pub const BIT_TIME_SEC: f64 = 0.030;

/// Frequency of the two leader blocks, in Hz.
pub const LEADER_HZ: f64 = 1900.0;

/// Frequency of the break block, in Hz. Also the decision threshold
/// between a VIS "1" bit (1100 Hz) and a VIS "0" bit (1300 Hz): an
/// estimated peak at or below this frequency reads as binary 1.
pub const BREAK_HZ: f64 = 1200.0;

/// Tolerance applied when comparing an estimated peak frequency against an
/// expected tone frequency.
pub const FREQ_MARGIN_HZ: f64 = 50.0;
