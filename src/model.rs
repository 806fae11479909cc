use crate::data;
use anyhow::{bail, Result};
use crossterm::style::Color;

/// Mutable per-body render state, refreshed by the update phase and read by
/// the draw phase.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RenderState {
    pub(crate) azimuth: f64,
    pub(crate) altitude: f64,
    pub(crate) symbol_ascii: char,
    pub(crate) symbol_unicode: char,
    pub(crate) label: &'static str,
    pub(crate) color: Option<Color>,
}

impl RenderState {
    fn new(
        symbol_ascii: char,
        symbol_unicode: char,
        label: &'static str,
        color: Option<Color>,
    ) -> Self {
        Self {
            azimuth: 0.0,
            altitude: 0.0,
            symbol_ascii,
            symbol_unicode,
            label,
            color,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Star {
    pub(crate) catalog_number: u32,
    /// Catalog position and proper motion, radians and radians per year.
    pub(crate) right_ascension: f64,
    pub(crate) declination: f64,
    pub(crate) ra_motion: f64,
    pub(crate) dec_motion: f64,
    pub(crate) magnitude: f32,
    pub(crate) state: RenderState,
}

/// The nine bodies of the planet table, heliocentric distance order. The
/// Sun rides along so the update loop can treat it as "planet zero".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlanetId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl PlanetId {
    pub(crate) const ALL: [PlanetId; data::PLANET_COUNT] = [
        PlanetId::Sun,
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Earth,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            PlanetId::Sun => "Sun",
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Earth => "Earth",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
        }
    }

    fn symbol_unicode(self) -> char {
        match self {
            PlanetId::Sun => '☉',
            PlanetId::Mercury => '☿',
            PlanetId::Venus => '♀',
            PlanetId::Earth => '🜨',
            PlanetId::Mars => '♂',
            PlanetId::Jupiter => '♃',
            PlanetId::Saturn => '♄',
            PlanetId::Uranus => '⛢',
            PlanetId::Neptune => '♆',
        }
    }

    fn symbol_ascii(self) -> char {
        match self {
            PlanetId::Sun => '@',
            _ => '*',
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            PlanetId::Sun | PlanetId::Venus | PlanetId::Saturn => Some(Color::Yellow),
            PlanetId::Mercury => Some(Color::White),
            PlanetId::Earth => None,
            PlanetId::Mars => Some(Color::Red),
            PlanetId::Jupiter => Some(Color::Magenta),
            PlanetId::Uranus => Some(Color::Cyan),
            PlanetId::Neptune => Some(Color::Blue),
        }
    }

    /// Mean apparent magnitude, used only for display thresholds.
    fn mean_magnitude(self) -> f32 {
        match self {
            PlanetId::Sun => -26.832,
            PlanetId::Mercury => 0.23,
            PlanetId::Venus => -4.14,
            PlanetId::Earth => 0.0,
            PlanetId::Mars => 0.71,
            PlanetId::Jupiter => -2.20,
            PlanetId::Saturn => 0.46,
            PlanetId::Uranus => 5.68,
            PlanetId::Neptune => 7.78,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Planet {
    pub(crate) id: PlanetId,
    pub(crate) magnitude: f32,
    pub(crate) state: RenderState,
}

#[derive(Clone, Debug)]
pub(crate) struct Moon {
    pub(crate) magnitude: f32,
    pub(crate) state: RenderState,
}

/// Map a magnitude over [-1.46, 7.96] onto the 10-glyph brightness ramp.
/// Returns (ascii, unicode).
pub(crate) fn magnitude_glyphs(magnitude: f32) -> (char, char) {
    const ASCII: [char; 10] = ['0', '0', 'O', 'O', 'o', 'o', '.', '.', '.', '.'];
    const UNICODE: [char; 10] = ['⬤', '●', '⦁', '•', '•', '∙', '⋅', '⋅', '⋅', '⋅'];

    const MIN_MAG: f32 = -1.46;
    const MAX_MAG: f32 = 7.96;

    let percent = (magnitude - MIN_MAG) / (MAX_MAG - MIN_MAG);
    let index = ((9.0 * percent).round() as i32).clamp(0, 9) as usize;
    (ASCII[index], UNICODE[index])
}

/// Everything the update and draw phases operate on.
pub(crate) struct Tables {
    pub(crate) stars: Vec<Star>,
    pub(crate) planets: Vec<Planet>,
    pub(crate) moon: Moon,
    pub(crate) constellations: &'static [data::ConstellationEntry],
    /// Catalog numbers sorted dimmest first, so brighter stars paint last.
    pub(crate) by_magnitude: Vec<u32>,
}

impl Tables {
    pub(crate) fn new() -> Result<Self> {
        let stars = star_table();
        let by_magnitude = numbers_by_magnitude(&stars);

        let constellations = &data::CONSTELLATIONS[..];
        for c in constellations {
            for &(a, b) in c.segments {
                for num in [a, b] {
                    if num < 1 || num as usize > stars.len() {
                        bail!("{}: segment references star {num}", c.name);
                    }
                }
            }
        }

        Ok(Self {
            stars,
            planets: planet_table(),
            moon: moon_object(),
            constellations,
            by_magnitude,
        })
    }
}

fn star_table() -> Vec<Star> {
    // mas/yr to radians/yr
    const MAS: f64 = std::f64::consts::PI / 180.0 / 3_600_000.0;

    data::STARS
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (ascii, unicode) = magnitude_glyphs(entry.mag);
            Star {
                catalog_number: i as u32 + 1,
                right_ascension: entry.ra_deg.to_radians(),
                declination: entry.dec_deg.to_radians(),
                ra_motion: entry.pm_ra_mas * MAS,
                dec_motion: entry.pm_dec_mas * MAS,
                magnitude: entry.mag,
                state: RenderState::new(ascii, unicode, entry.name, None),
            }
        })
        .collect()
}

fn planet_table() -> Vec<Planet> {
    PlanetId::ALL
        .iter()
        .map(|&id| Planet {
            id,
            magnitude: id.mean_magnitude(),
            state: RenderState::new(id.symbol_ascii(), id.symbol_unicode(), id.label(), id.color()),
        })
        .collect()
}

fn moon_object() -> Moon {
    Moon {
        magnitude: 0.0,
        state: RenderState::new('M', '🌝', "Moon", None),
    }
}

/// Catalog numbers ordered dimmest first. The sort is stable, so stars of
/// equal magnitude keep catalog order.
fn numbers_by_magnitude(stars: &[Star]) -> Vec<u32> {
    let mut sorted: Vec<&Star> = stars.iter().collect();
    sorted.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    sorted.iter().map(|s| s.catalog_number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_build() {
        let t = Tables::new().unwrap();
        assert_eq!(t.stars.len(), data::STARS.len());
        assert_eq!(t.planets.len(), data::PLANET_COUNT);
        assert_eq!(t.by_magnitude.len(), t.stars.len());
    }

    #[test]
    fn catalog_numbers_are_one_based() {
        let t = Tables::new().unwrap();
        for (i, s) in t.stars.iter().enumerate() {
            assert_eq!(s.catalog_number as usize, i + 1);
        }
    }

    #[test]
    fn by_magnitude_is_a_dimmest_first_permutation() {
        let t = Tables::new().unwrap();

        let mut seen = vec![false; t.stars.len()];
        for &num in &t.by_magnitude {
            let idx = num as usize - 1;
            assert!(!seen[idx], "catalog number {num} repeated");
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));

        for pair in t.by_magnitude.windows(2) {
            let a = &t.stars[pair[0] as usize - 1];
            let b = &t.stars[pair[1] as usize - 1];
            assert!(a.magnitude >= b.magnitude);
        }

        // Sirius is the brightest star in the table, so it paints last
        let last = *t.by_magnitude.last().unwrap();
        assert_eq!(t.stars[last as usize - 1].state.label, "Sirius");
    }

    #[test]
    fn glyph_ramp_ends() {
        assert_eq!(magnitude_glyphs(-1.46), ('0', '⬤'));
        assert_eq!(magnitude_glyphs(7.96), ('.', '⋅'));
        // Out-of-range magnitudes clamp instead of indexing out of bounds
        assert_eq!(magnitude_glyphs(-26.8), ('0', '⬤'));
        assert_eq!(magnitude_glyphs(15.0), ('.', '⋅'));
    }

    #[test]
    fn glyph_ramp_is_monotonic() {
        const ORDER: [char; 5] = ['0', 'O', 'o', '.', ' '];
        let rank = |c: char| ORDER.iter().position(|&o| o == c).unwrap();
        let mut prev = rank('0');
        let mut mag = -1.46f32;
        while mag < 8.0 {
            let (ascii, _) = magnitude_glyphs(mag);
            let r = rank(ascii);
            assert!(r >= prev, "ramp reversed at {mag}");
            prev = r;
            mag += 0.25;
        }
    }

    #[test]
    fn earth_draws_nothing_special() {
        let t = Tables::new().unwrap();
        let earth = &t.planets[PlanetId::Earth.index()];
        assert_eq!(earth.id, PlanetId::Earth);
        assert!(earth.state.color.is_none());
    }
}
