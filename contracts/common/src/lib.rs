#![deny(warnings)]

mod fixedi128;

pub use fixedi128::*;

/// Denominator of integer percentages stored in reserve configs (1% - 1, 100% - 100)
pub const PERCENT_DENOMINATOR: u32 = 100;

/// Scale of 18-decimal fixed point values stored on chain
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Converts WAD-scaled value into integer amount of the smallest token unit.
/// Rounds towards zero.
pub fn wad_to_amount(wad: u128) -> u64 {
    u64::try_from(wad / WAD).unwrap_or(u64::MAX)
}

/// Converts integer amount of the smallest token unit into WAD-scaled value
pub fn amount_to_wad(amount: u64) -> u128 {
    u128::from(amount) * WAD
}
