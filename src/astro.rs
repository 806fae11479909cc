use chrono::{DateTime, Datelike, NaiveDateTime};
use std::f64::consts::PI;

pub(crate) const J2000: f64 = 2451545.0;

const SECONDS_PER_DAY: f64 = 86_400.0;
// JD of the Unix epoch, 1970-01-01T00:00:00 UTC
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Normalize a radian angle into [0, 2π).
pub(crate) fn norm_rad(rad: f64) -> f64 {
    let rem = rad.rem_euclid(2.0 * PI);
    if rem == 2.0 * PI {
        0.0
    } else {
        rem
    }
}

// ---------------------------------------------------------------------------
// Julian dates
// ---------------------------------------------------------------------------

/// Proleptic-Gregorian calendar instant (UTC) to continuous Julian date.
/// No leap-second handling.
pub(crate) fn to_julian_date(dt: NaiveDateTime) -> f64 {
    let secs = dt.and_utc().timestamp() as f64;
    secs / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Inverse of [`to_julian_date`]. Sub-second remainder is dropped.
pub(crate) fn from_julian_date(jd: f64) -> NaiveDateTime {
    let secs = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round() as i64;
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

/// Gregorian (year, month, day) of a Julian date.
pub(crate) fn julian_to_gregorian(jd: f64) -> (i32, u32, u32) {
    let dt = from_julian_date(jd);
    (dt.year(), dt.month(), dt.day())
}

// ---------------------------------------------------------------------------
// Earth orientation
// ---------------------------------------------------------------------------

/// Earth rotation angle in radians, IERS Technical Note No. 32, 5.4.4 eq. 14.
pub(crate) fn earth_rotation_angle(jd: f64) -> f64 {
    let t = jd - J2000;
    let d = jd - jd.floor();

    norm_rad(2.0 * PI * (d + 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * t))
}

/// Greenwich mean sidereal time in radians.
///
/// Earth rotation angle minus the accumulated precession polynomial of
/// Capitaine, Wallace & Chapront eq. 42.
pub(crate) fn sidereal_time(jd: f64) -> f64 {
    // Julian centuries after J2000
    let t = (jd - J2000) / 36_525.0;

    let acc_precession_arcsec = -0.014506
        - 4612.156534 * t
        - 1.3915817 * t.powi(2)
        + 0.00000044 * t.powi(3)
        + 0.000029956 * t.powi(4)
        + 0.0000000368 * t.powi(5);

    let acc_precession_rad = (acc_precession_arcsec / 3600.0).to_radians();

    norm_rad(earth_rotation_angle(jd) - acc_precession_rad)
}

// ---------------------------------------------------------------------------
// Moon phase
// ---------------------------------------------------------------------------

const SYNODIC_MONTH: f64 = 29.53059;
// A reference new moon, 2000-01-06
const NEW_MOON_JD: f64 = 2_451_550.1;

/// Normalized age of the Moon within the synodic month, in [0, 1).
/// 0 is a new moon, 0.5 a full moon. A crude calculation.
pub(crate) fn moon_age(jd: f64) -> f64 {
    let age = (jd - NEW_MOON_JD) / SYNODIC_MONTH;
    age - age.floor()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    pub(crate) fn from_age(age: f64) -> Self {
        if !(0.03..=0.97).contains(&age) {
            MoonPhase::New
        } else if age < 0.25 {
            MoonPhase::WaxingCrescent
        } else if age < 0.27 {
            MoonPhase::FirstQuarter
        } else if age < 0.50 {
            MoonPhase::WaxingGibbous
        } else if age < 0.53 {
            MoonPhase::Full
        } else if age < 0.75 {
            MoonPhase::WaningGibbous
        } else if age < 0.77 {
            MoonPhase::LastQuarter
        } else {
            MoonPhase::WaningCrescent
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            MoonPhase::New => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::Full => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase glyph as seen from the given hemisphere. Southern observers see
    /// the cycle mirrored, so the index runs backwards through the images.
    pub(crate) fn glyph(self, northern: bool) -> char {
        const IMAGES: [char; 8] = ['🌑', '🌒', '🌓', '🌔', '🌕', '🌖', '🌗', '🌘'];
        let idx = self as usize;
        let idx = if northern || idx == 0 { idx } else { 8 - idx };
        IMAGES[idx]
    }
}

// ---------------------------------------------------------------------------
// Zodiac
// ---------------------------------------------------------------------------

const ZODIAC_SIGNS: [&str; 12] = [
    "Aries",
    "Taurus",
    "Gemini",
    "Cancer",
    "Leo",
    "Virgo",
    "Libra",
    "Scorpio",
    "Sagittarius",
    "Capricorn",
    "Aquarius",
    "Pisces",
];

const ZODIAC_SYMBOLS: [char; 12] =
    ['♈', '♉', '♊', '♋', '♌', '♍', '♎', '♏', '♐', '♑', '♒', '♓'];

fn zodiac_index(month: u32, day: u32) -> usize {
    // Start days for each sign, Aries first
    const START_DAYS: [u32; 12] = [21, 20, 21, 21, 23, 23, 23, 23, 22, 22, 20, 19];

    let mut index = (month as usize + 12 - 3) % 12;
    if day < START_DAYS[index] {
        index = if index == 0 { 11 } else { index - 1 };
    }
    index
}

pub(crate) fn zodiac_sign(month: u32, day: u32) -> &'static str {
    ZODIAC_SIGNS[zodiac_index(month, day)]
}

pub(crate) fn zodiac_symbol(month: u32, day: u32) -> char {
    ZODIAC_SYMBOLS[zodiac_index(month, day)]
}
