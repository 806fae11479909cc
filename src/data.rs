//! Embedded constant data: Keplerian element tables derived from the JPL
//! approximate ephemerides (valid 1800 AD - 2050 AD), Paul Schlyter's lunar
//! elements, a bright-star catalog subset, and constellation figures.

use crate::kepler::{Elements, Extras, Rates};

/// Sun plus the eight planets, in heliocentric distance order. The Sun's
/// rows are zero; its geocentric position is Earth's, negated.
pub(crate) const PLANET_COUNT: usize = 9;

pub(crate) const PLANET_ELEMENTS: [Elements; PLANET_COUNT] = [
    // Sun
    Elements { a: 0.0, e: 0.0, i: 0.0, m: 0.0, w: 0.0, o: 0.0 },
    // Mercury
    Elements { a: 0.38709927, e: 0.20563593, i: 7.00497902, m: 174.79252722, w: 29.12703035, o: 48.33076593 },
    // Venus
    Elements { a: 0.72333566, e: 0.00677672, i: 3.39467605, m: 50.37663232, w: 54.92262463, o: 76.67984255 },
    // Earth
    Elements { a: 1.00000261, e: 0.01671123, i: -0.00001531, m: -2.47311027, w: 102.93768193, o: 0.0 },
    // Mars
    Elements { a: 1.52371034, e: 0.09339410, i: 1.84969142, m: 19.39019754, w: -73.50316850, o: 49.55953891 },
    // Jupiter
    Elements { a: 5.20288700, e: 0.04838624, i: 1.30439695, m: 19.66796068, w: -85.74542926, o: 100.47390909 },
    // Saturn
    Elements { a: 9.53667594, e: 0.05386179, i: 2.48599187, m: -42.64463408, w: -21.06354617, o: 113.66242448 },
    // Uranus
    Elements { a: 19.18916464, e: 0.04725744, i: 0.77263783, m: 142.28382821, w: 96.93735127, o: 74.01692503 },
    // Neptune
    Elements { a: 30.06992276, e: 0.00859048, i: 1.77004347, m: -100.08479196, w: -86.81946347, o: 131.78422574 },
];

pub(crate) const PLANET_RATES: [Rates; PLANET_COUNT] = [
    // Sun
    Rates { da: 0.0, de: 0.0, di: 0.0, dm: 0.0, dw: 0.0, do_: 0.0 },
    // Mercury
    Rates { da: 0.00000037, de: 0.00001906, di: -0.00594749, dm: 149472.51363486, dw: 0.28581770, do_: -0.12534081 },
    // Venus
    Rates { da: 0.00000390, de: -0.00004107, di: -0.00078890, dm: 58517.81270400, dw: 0.28037747, do_: -0.27769418 },
    // Earth
    Rates { da: 0.00000562, de: -0.00004392, di: -0.01294668, dm: 35999.04917617, dw: 0.32327364, do_: 0.0 },
    // Mars
    Rates { da: 0.00001847, de: 0.00007882, di: -0.00813131, dm: 19139.85827411, dw: 0.73698431, do_: -0.29257343 },
    // Jupiter
    Rates { da: -0.00011607, de: -0.00013253, di: -0.00183714, dm: 3034.53360107, dw: 0.00783562, do_: 0.20469106 },
    // Saturn
    Rates { da: -0.00125060, de: -0.00050991, di: 0.00193609, dm: 1222.91259417, dw: -0.13029422, do_: -0.28867794 },
    // Uranus
    Rates { da: -0.00196176, de: -0.00004397, di: -0.00242939, dm: 428.07397504, dw: 0.36564692, do_: 0.04240589 },
    // Neptune
    Rates { da: 0.00026291, de: 0.00005105, di: 0.00035372, dm: 218.78186789, dw: -0.31732800, do_: -0.00508664 },
];

/// Mean-anomaly correction terms, needed for Jupiter outward.
pub(crate) const PLANET_EXTRAS: [Option<Extras>; PLANET_COUNT] = [
    None,
    None,
    None,
    None,
    None,
    Some(Extras { b: -0.00012452, c: 0.06064060, s: -0.35635438, f: 38.35125 }),
    Some(Extras { b: 0.00025899, c: -0.13434469, s: 0.87320147, f: 38.35125 }),
    Some(Extras { b: 0.00058331, c: -0.97731848, s: 0.17689245, f: 7.67025 }),
    Some(Extras { b: -0.00041348, c: 0.68346318, s: -0.10162547, f: 7.67025 }),
];

pub(crate) fn planet_orbit(
    index: usize,
) -> (&'static Elements, &'static Rates, Option<&'static Extras>) {
    (
        &PLANET_ELEMENTS[index],
        &PLANET_RATES[index],
        PLANET_EXTRAS[index].as_ref(),
    )
}

/// Lunar elements per Paul Schlyter (semi-major axis in Earth radii),
/// interpolated in days rather than centuries.
pub(crate) const MOON_ELEMENTS: Elements = Elements {
    a: 60.2666,
    e: 0.0549,
    i: 5.1454,
    m: 115.3654,
    w: 318.0634,
    o: 125.1228,
};

pub(crate) const MOON_RATES: Rates = Rates {
    da: 0.0,
    de: 0.0,
    di: 0.0,
    dm: 13.0649929509,
    dw: 0.1643573223,
    do_: -0.0529538083,
};

/// One catalog row: J2000 position in degrees, proper motion in
/// milliarcseconds per year, visual magnitude. Catalog numbers are implicit:
/// row i is star i + 1.
pub(crate) struct StarEntry {
    pub(crate) name: &'static str,
    pub(crate) ra_deg: f64,
    pub(crate) dec_deg: f64,
    pub(crate) pm_ra_mas: f64,
    pub(crate) pm_dec_mas: f64,
    pub(crate) mag: f32,
}

const fn star(
    name: &'static str,
    ra_deg: f64,
    dec_deg: f64,
    pm_ra_mas: f64,
    pm_dec_mas: f64,
    mag: f32,
) -> StarEntry {
    StarEntry { name, ra_deg, dec_deg, pm_ra_mas, pm_dec_mas, mag }
}

pub(crate) const STARS: [StarEntry; 50] = [
    // 1-8: Orion
    star("Betelgeuse", 88.7929, 7.4071, 27.5, 11.3, 0.50),
    star("Rigel", 78.6345, -8.2016, 1.3, 0.5, 0.13),
    star("Bellatrix", 81.2828, 6.3497, -8.1, -12.9, 1.64),
    star("Mintaka", 83.0016, -0.2991, 0.6, -0.7, 2.23),
    star("Alnilam", 84.0534, -1.2019, 1.5, -1.1, 1.69),
    star("Alnitak", 85.1897, -1.9426, 3.2, 2.0, 1.77),
    star("Saiph", 86.9391, -9.6696, 1.5, -1.2, 2.09),
    star("Meissa", 83.7845, 9.9342, -3.0, -1.0, 3.33),
    // 9-15: the Big Dipper
    star("Dubhe", 165.9320, 61.7510, -134.1, -34.7, 1.79),
    star("Merak", 165.4603, 56.3824, 81.4, 33.5, 2.37),
    star("Phecda", 178.4577, 53.6948, 107.8, 11.2, 2.44),
    star("Megrez", 183.8565, 57.0326, 104.1, 7.3, 3.31),
    star("Alioth", 193.5073, 55.9598, 111.7, -8.9, 1.77),
    star("Mizar", 200.9814, 54.9254, 119.0, -25.9, 2.27),
    star("Alkaid", 206.8852, 49.3133, -121.2, -14.9, 1.86),
    // 16-20: Cassiopeia
    star("Caph", 2.2945, 59.1498, 523.4, -180.4, 2.27),
    star("Schedar", 10.1268, 56.5373, 50.4, -32.2, 2.23),
    star("Gamma Cas", 14.1772, 60.7167, 25.7, -3.8, 2.47),
    star("Ruchbah", 21.4539, 60.2353, 297.2, -49.5, 2.68),
    star("Segin", 28.5989, 63.6701, 32.0, -19.1, 3.38),
    // 21-25: Cygnus
    star("Deneb", 310.3580, 45.2803, 1.6, 1.9, 1.25),
    star("Sadr", 305.5571, 40.2567, 2.4, -0.9, 2.23),
    star("Gienah", 311.5528, 33.9703, 355.7, 330.6, 2.46),
    star("Delta Cyg", 296.2437, 45.1308, 43.2, 48.7, 2.87),
    star("Albireo", 292.6804, 27.9597, -7.1, -6.0, 3.18),
    // 26-29: the seasonal triangles
    star("Vega", 279.2347, 38.7837, 200.9, 286.2, 0.03),
    star("Altair", 297.6958, 8.8683, 536.8, 385.5, 0.76),
    star("Sirius", 101.2872, -16.7161, -546.0, -1223.1, -1.46),
    star("Procyon", 114.8255, 5.2250, -714.6, -1036.8, 0.34),
    // 30-31: Gemini
    star("Pollux", 116.3290, 28.0262, -626.6, -45.8, 1.14),
    star("Castor", 113.6495, 31.8883, -191.5, -145.2, 1.58),
    // 32-35: Crux
    star("Acrux", 186.6496, -63.0991, -35.8, -14.9, 0.76),
    star("Mimosa", 191.9303, -59.6888, -48.2, -12.8, 1.25),
    star("Gacrux", 187.7915, -57.1132, 28.2, -264.3, 1.64),
    star("Delta Cru", 183.7863, -58.7489, -36.7, -10.8, 2.79),
    // 36-50: other bright stars
    star("Aldebaran", 68.9802, 16.5093, 62.8, -189.4, 0.85),
    star("Capella", 79.1723, 45.9980, 75.5, -427.1, 0.08),
    star("Arcturus", 213.9153, 19.1824, -1093.5, -1999.4, -0.05),
    star("Spica", 201.2983, -11.1613, -42.5, -31.7, 0.97),
    star("Regulus", 152.0930, 11.9672, -249.4, 4.9, 1.35),
    star("Antares", 247.3519, -26.4320, -12.1, -23.2, 0.96),
    star("Fomalhaut", 344.4127, -29.6222, 329.2, -164.2, 1.16),
    star("Polaris", 37.9546, 89.2641, 44.5, -11.9, 1.98),
    star("Canopus", 95.9880, -52.6957, 19.9, 23.2, -0.74),
    star("Achernar", 24.4285, -57.2368, 88.0, -40.1, 0.46),
    star("Rigil Kent", 219.9021, -60.8340, -3679.3, 473.7, -0.27),
    star("Hadar", 210.9559, -60.3730, -33.3, -23.2, 0.61),
    star("Diphda", 10.8974, -17.9866, 232.8, 32.7, 2.02),
    star("Alphard", 141.8968, -8.6586, -14.5, 33.3, 1.98),
    star("Hamal", 31.7933, 23.4624, 188.6, -148.0, 2.00),
];

/// Constellation figures as line segments between catalog numbers.
pub(crate) struct ConstellationEntry {
    pub(crate) name: &'static str,
    pub(crate) segments: &'static [(u32, u32)],
}

pub(crate) const CONSTELLATIONS: [ConstellationEntry; 8] = [
    ConstellationEntry {
        name: "Orion",
        segments: &[
            (1, 3),
            (1, 6),
            (3, 4),
            (4, 5),
            (5, 6),
            (2, 4),
            (7, 6),
            (2, 7),
            (1, 8),
            (8, 3),
        ],
    },
    ConstellationEntry {
        name: "Ursa Major",
        segments: &[(9, 10), (10, 11), (11, 12), (12, 9), (12, 13), (13, 14), (14, 15)],
    },
    ConstellationEntry {
        name: "Cassiopeia",
        segments: &[(16, 17), (17, 18), (18, 19), (19, 20)],
    },
    ConstellationEntry {
        name: "Cygnus",
        segments: &[(21, 22), (22, 25), (24, 22), (22, 23)],
    },
    ConstellationEntry {
        name: "Summer Triangle",
        segments: &[(26, 27), (27, 21), (21, 26)],
    },
    ConstellationEntry {
        name: "Winter Triangle",
        segments: &[(28, 29), (29, 1), (1, 28)],
    },
    ConstellationEntry {
        name: "Gemini",
        segments: &[(30, 31)],
    },
    ConstellationEntry {
        name: "Crux",
        segments: &[(32, 34), (33, 35)],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extras_only_for_outer_planets() {
        for (i, x) in PLANET_EXTRAS.iter().enumerate() {
            assert_eq!(x.is_some(), i >= 5, "index {i}");
        }
    }

    #[test]
    fn earth_has_no_node() {
        assert_eq!(PLANET_ELEMENTS[3].o, 0.0);
        assert_eq!(PLANET_RATES[3].do_, 0.0);
    }

    #[test]
    fn star_coordinates_are_in_range() {
        for s in &STARS {
            assert!((0.0..360.0).contains(&s.ra_deg), "{}", s.name);
            assert!((-90.0..=90.0).contains(&s.dec_deg), "{}", s.name);
            assert!((-2.0..8.0).contains(&(s.mag as f64)), "{}", s.name);
        }
    }

    #[test]
    fn constellation_segments_reference_real_stars() {
        let n = STARS.len() as u32;
        for c in &CONSTELLATIONS {
            assert!(!c.segments.is_empty(), "{}", c.name);
            for &(a, b) in c.segments {
                assert!(a >= 1 && a <= n, "{}: {a}", c.name);
                assert!(b >= 1 && b <= n, "{}: {b}", c.name);
                assert_ne!(a, b, "{}", c.name);
            }
        }
    }
}
