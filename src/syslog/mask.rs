//! Priority mask algebra
//!
//! Masks hold one bit per level, bit `N` standing for level `N`.
//! Since lower level is more severe, "up to N" is contiguous block of bits `0..=N`.
//!
//! None of the functions validate their input: levels outside of `0..=7` are computed with as
//! they are and produce bits outside of the canonical `0xFF` range.

use super::{Facility, Level, LOG_FACMASK, LOG_PRIMASK};

#[inline(always)]
///Returns mask with single bit of `level` set.
///
///Levels that do not fit into `u32` produce empty mask.
pub const fn mask(level: Level) -> u32 {
    match 1u32.checked_shl(level.get() as u32) {
        Some(bit) => bit,
        None => 0,
    }
}

#[inline(always)]
///Returns mask with all levels through `level` set.
///
///Levels that do not fit into `u32` produce mask with all bits set.
pub const fn up_to(level: Level) -> u32 {
    match 1u32.checked_shl(level.get() as u32 + 1) {
        Some(bit) => bit - 1,
        None => u32::MAX,
    }
}

#[inline(always)]
///Recovers threshold from mask created by [up_to].
///
///It counts trailing one bits, hence result for any other bit pattern is meaningless.
///Specifically mask with gaps reports only lowest contiguous run and empty mask wraps around.
pub const fn threshold(mask: u32) -> Level {
    Level::new(mask.trailing_ones().wrapping_sub(1) as u8)
}

#[inline(always)]
///Packs facility and level into single priority value
pub const fn make_priority(facility: Facility, level: Level) -> u16 {
    facility as u16 | level.get() as u16
}

#[inline(always)]
///Extracts level part of the priority
pub const fn priority_level(priority: u16) -> Level {
    Level::new((priority & LOG_PRIMASK) as u8)
}

#[inline(always)]
///Extracts facility code of the priority.
///
///Use [Facility::from_code] to get facility itself.
pub const fn priority_facility(priority: u16) -> u8 {
    ((priority & LOG_FACMASK) >> 3) as u8
}
