//! Approximate lunar phase for calendar annotations.
//!
//! The phase is the position of a date inside a mean synodic month counted
//! from a known new moon.  This ignores the eccentricity of the lunar orbit,
//! so the true phase can differ by up to about half a day.  Good enough for
//! a glyph in a calendar cell; not an ephemeris.

use crate::date::CalendarDate;
use alm_core::errors::Result;
use alm_core::fail;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_67;

/// Reference new moon: 2000-01-06 (18:14 UTC).
pub const NEW_MOON_EPOCH: CalendarDate = CalendarDate::from_ymd_unchecked(2000, 1, 6);

/// One of the eight named phases, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhaseName {
    /// New moon.
    New,
    /// Waxing crescent.
    WaxingCrescent,
    /// First quarter.
    FirstQuarter,
    /// Waxing gibbous.
    WaxingGibbous,
    /// Full moon.
    Full,
    /// Waning gibbous.
    WaningGibbous,
    /// Last quarter.
    LastQuarter,
    /// Waning crescent.
    WaningCrescent,
}

impl PhaseName {
    /// All phases in cycle order, starting at new moon.
    pub const ALL: [PhaseName; 8] = [
        PhaseName::New,
        PhaseName::WaxingCrescent,
        PhaseName::FirstQuarter,
        PhaseName::WaxingGibbous,
        PhaseName::Full,
        PhaseName::WaningGibbous,
        PhaseName::LastQuarter,
        PhaseName::WaningCrescent,
    ];

    /// Position in the cycle (0 = new … 7 = waning crescent).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            PhaseName::New => "New Moon",
            PhaseName::WaxingCrescent => "Waxing Crescent",
            PhaseName::FirstQuarter => "First Quarter",
            PhaseName::WaxingGibbous => "Waxing Gibbous",
            PhaseName::Full => "Full Moon",
            PhaseName::WaningGibbous => "Waning Gibbous",
            PhaseName::LastQuarter => "Last Quarter",
            PhaseName::WaningCrescent => "Waning Crescent",
        }
    }

    /// Emoji glyph for the phase.
    pub fn glyph(&self) -> &'static str {
        match self {
            PhaseName::New => "🌑",
            PhaseName::WaxingCrescent => "🌒",
            PhaseName::FirstQuarter => "🌓",
            PhaseName::WaxingGibbous => "🌔",
            PhaseName::Full => "🌕",
            PhaseName::WaningGibbous => "🌖",
            PhaseName::LastQuarter => "🌗",
            PhaseName::WaningCrescent => "🌘",
        }
    }
}

impl std::fmt::Display for PhaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The approximate lunar phase on a given date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonPhase {
    /// Named phase: the one of eight equal arcs, centred on the named
    /// points of the cycle, that contains [`MoonPhase::fraction`].
    pub phase: PhaseName,
    /// Glyph of [`MoonPhase::phase`].
    pub glyph: &'static str,
    /// Position in the synodic cycle, in `[0, 1)`; 0 is new, 0.5 is full.
    pub fraction: f64,
    /// Days since the last mean new moon, in `[0, SYNODIC_MONTH)`.
    pub age_days: f64,
}

impl MoonPhase {
    /// Fraction of the disc that is lit, in `[0, 1]`.
    pub fn illumination(&self) -> f64 {
        (1.0 - (std::f64::consts::TAU * self.fraction).cos()) / 2.0
    }

    /// Return `true` during the first half of the cycle.
    pub fn is_waxing(&self) -> bool {
        self.fraction < 0.5
    }
}

/// Approximate moon phase on `date`.
pub fn moon_phase(date: CalendarDate) -> MoonPhase {
    let days = (date.day_number() - NEW_MOON_EPOCH.day_number()) as f64;
    let age = ((days % SYNODIC_MONTH) + SYNODIC_MONTH) % SYNODIC_MONTH;
    let mut fraction = age / SYNODIC_MONTH;
    if fraction >= 1.0 {
        // rounding at the very end of a cycle
        fraction = 0.0;
    }
    // eight equal arcs, each centred on its named phase
    let phase = PhaseName::ALL[((fraction * 8.0 + 0.5).floor() as usize) % 8];
    MoonPhase {
        phase,
        glyph: phase.glyph(),
        fraction,
        age_days: fraction * SYNODIC_MONTH,
    }
}

/// First date on or after `from` whose phase is `phase`.
///
/// Every arc spans more than three days, so the search never needs more
/// than one synodic month.
pub fn next_phase(from: CalendarDate, phase: PhaseName) -> Result<CalendarDate> {
    let mut date = from;
    for _ in 0..=SYNODIC_MONTH.ceil() as i64 {
        if moon_phase(date).phase == phase {
            return Ok(date);
        }
        date = date.add_days(1)?;
    }
    fail!("no {phase} found within a synodic month of {from}")
}
