//! Update phase: refresh every body's horizontal coordinates for a given
//! instant and observer. Positions flow one way, from here into the render
//! state; nothing downstream recomputes them.

use crate::astro::{self, MoonPhase};
use crate::coord;
use crate::data;
use crate::kepler;
use crate::model::{Moon, Planet, PlanetId, Star, Tables};

pub(crate) fn update_stars(stars: &mut [Star], jd: f64, latitude: f64, longitude: f64) {
    let gmst = astro::sidereal_time(jd);

    for star in stars {
        let (ra, dec) = coord::apply_proper_motion(
            star.right_ascension,
            star.ra_motion,
            star.declination,
            star.dec_motion,
            jd,
        );

        let (azimuth, altitude) = coord::equatorial_to_horizontal(ra, dec, gmst, latitude, longitude);
        star.state.azimuth = azimuth;
        star.state.altitude = altitude;
    }
}

pub(crate) fn update_planets(planets: &mut [Planet], jd: f64, latitude: f64, longitude: f64) {
    let gmst = astro::sidereal_time(jd);

    // Heliocentric position of the Earth-Moon barycenter, shared by every
    // body in the loop
    let (eel, era, eex) = data::planet_orbit(PlanetId::Earth.index());
    let earth = kepler::planet_helio(eel, era, eex, jd);

    for planet in planets {
        // The ICRF origin is the solar system barycenter, which for our
        // purposes is the Sun itself, so the Sun's geocentric position is
        // Earth's heliocentric position negated
        let geo = if planet.id == PlanetId::Sun {
            [-earth[0], -earth[1], -earth[2]]
        } else {
            let (el, ra, ex) = data::planet_orbit(planet.id.index());
            kepler::planet_geo(earth, el, ra, ex, jd)
        };

        let (ra, dec) = coord::rectangular_to_spherical(geo[0], geo[1], geo[2]);
        let (azimuth, altitude) = coord::equatorial_to_horizontal(ra, dec, gmst, latitude, longitude);
        planet.state.azimuth = azimuth;
        planet.state.altitude = altitude;
    }
}

pub(crate) fn update_moon(moon: &mut Moon, jd: f64, latitude: f64, longitude: f64) {
    let gmst = astro::sidereal_time(jd);

    let geo = kepler::moon_geo(&data::MOON_ELEMENTS, &data::MOON_RATES, jd);
    let (ra, dec) = coord::rectangular_to_spherical(geo[0], geo[1], geo[2]);
    let (azimuth, altitude) = coord::equatorial_to_horizontal(ra, dec, gmst, latitude, longitude);
    moon.state.azimuth = azimuth;
    moon.state.altitude = altitude;
}

/// Swap in the phase glyph for the current lunar age. Southern observers see
/// the phases mirrored.
pub(crate) fn update_moon_phase(moon: &mut Moon, jd: f64, latitude: f64) {
    let phase = MoonPhase::from_age(astro::moon_age(jd));
    moon.state.symbol_unicode = phase.glyph(latitude >= 0.0);
}

pub(crate) fn update_all(tables: &mut Tables, jd: f64, latitude: f64, longitude: f64) {
    update_stars(&mut tables.stars, jd, latitude, longitude);
    update_planets(&mut tables.planets, jd, latitude, longitude);
    update_moon(&mut tables.moon, jd, latitude, longitude);
    update_moon_phase(&mut tables.moon, jd, latitude);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn every_body_gets_horizontal_coordinates() {
        let mut tables = Tables::new().unwrap();
        update_all(&mut tables, 2_460_310.25, 0.73, -1.25);

        for star in &tables.stars {
            assert!((0.0..2.0 * PI + 1e-9).contains(&star.state.azimuth));
            assert!((-PI / 2.0..=PI / 2.0).contains(&star.state.altitude));
        }
        for planet in &tables.planets {
            assert!((-PI / 2.0..=PI / 2.0).contains(&planet.state.altitude));
        }
        assert!((-PI / 2.0..=PI / 2.0).contains(&tables.moon.state.altitude));
    }

    #[test]
    fn sun_and_sirius_oppose_in_january() {
        // Sirius is near opposition in early January, so when the Sun is up
        // Sirius is down and vice versa. 2024-01-01 00:00 UTC, Greenwich.
        let mut tables = Tables::new().unwrap();
        update_all(&mut tables, 2_460_310.5, 0.897, 0.0);

        let sun = &tables.planets[PlanetId::Sun.index()].state;
        let sirius = &tables.stars[27].state; // catalog number 28
        assert!(
            sun.altitude.signum() != sirius.altitude.signum(),
            "sun alt {} vs sirius alt {}",
            sun.altitude,
            sirius.altitude
        );
    }

    #[test]
    fn phase_glyph_tracks_the_clock() {
        let mut tables = Tables::new().unwrap();

        // JD 2451550.1 is a reference new moon
        update_moon_phase(&mut tables.moon, 2_451_550.1, 0.7);
        assert_eq!(tables.moon.state.symbol_unicode, '🌑');

        // Half a synodic month later
        update_moon_phase(&mut tables.moon, 2_451_550.1 + 14.765, 0.7);
        assert_eq!(tables.moon.state.symbol_unicode, '🌕');
    }

    #[test]
    fn southern_observer_sees_mirrored_crescent() {
        let mut north = Tables::new().unwrap();
        let mut south = Tables::new().unwrap();

        // Around a waxing crescent
        let jd = 2_451_550.1 + 4.0;
        update_moon_phase(&mut north.moon, jd, 0.7);
        update_moon_phase(&mut south.moon, jd, -0.7);
        assert_eq!(north.moon.state.symbol_unicode, '🌒');
        assert_eq!(south.moon.state.symbol_unicode, '🌘');
    }

    #[test]
    fn zenith_star_projects_to_center() {
        // Plant a star at the observer's zenith: dec = lat, ra = lst
        let mut tables = Tables::new().unwrap();
        let jd = 2_460_310.25;
        let gmst = astro::sidereal_time(jd);
        let (lat, lon) = (0.6, 0.3);
        let lst = (gmst + lon) % (2.0 * PI);

        tables.stars[0].right_ascension = lst;
        tables.stars[0].declination = lat;
        tables.stars[0].ra_motion = 0.0;
        tables.stars[0].dec_motion = 0.0;

        update_stars(&mut tables.stars, jd, lat, lon);
        let s = &tables.stars[0].state;
        assert!((s.altitude - PI / 2.0).abs() < 1e-9);

        let (r, _) = crate::render::horizontal_to_polar(s.azimuth, s.altitude);
        assert!(r.abs() < 1e-9);
    }
}
