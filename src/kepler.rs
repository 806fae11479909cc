use crate::astro::J2000;

/// Osculating orbital elements at epoch. Semi-major axis in AU for planets
/// and Earth radii for the Moon; all angles in degrees.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Elements {
    pub(crate) a: f64,
    pub(crate) e: f64,
    pub(crate) i: f64,
    pub(crate) m: f64,
    pub(crate) w: f64,
    pub(crate) o: f64,
}

/// Secular rates for [`Elements`], per Julian century for planets and per
/// day for the Moon.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rates {
    pub(crate) da: f64,
    pub(crate) de: f64,
    pub(crate) di: f64,
    pub(crate) dm: f64,
    pub(crate) dw: f64,
    pub(crate) do_: f64,
}

/// Extra mean-anomaly correction terms required for Jupiter through Neptune.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Extras {
    pub(crate) b: f64,
    pub(crate) c: f64,
    pub(crate) s: f64,
    pub(crate) f: f64,
}

/// One Newton step for Kepler's equation, in degrees.
fn kepler_step(m: f64, e: f64, big_e: f64) -> f64 {
    let dm = m - (big_e - e.to_degrees() * big_e.to_radians().sin());
    dm / (1.0 - e * big_e.to_radians().cos())
}

/// Solve M = E - e·sin(E) for E, both in degrees. `seed` is the starting
/// guess. Converges to |dE| < 1e-6 or gives up after 10 iterations.
fn solve_kepler(m: f64, e: f64, seed: f64) -> f64 {
    let mut big_e = seed;
    let mut de = 1.0_f64;
    let mut n = 0;
    while de.abs() > 1e-6 && n < 10 {
        de = kepler_step(m, e, big_e);
        big_e += de;
        n += 1;
    }
    big_e
}

fn reduce_mean_anomaly(mut m: f64) -> f64 {
    while m > 180.0 {
        m -= 360.0;
    }
    m
}

/// Rotate in-plane coordinates (xp, yp) through argument of perihelion,
/// inclination and ascending node (degrees) into the ecliptic frame, then
/// tilt by the J2000 obliquity into equatorial rectangular coordinates.
fn orbital_plane_to_equatorial(xp: f64, yp: f64, i: f64, w: f64, o: f64) -> [f64; 3] {
    let i = i.to_radians();
    let w = w.to_radians();
    let o = o.to_radians();

    let xecl = (w.cos() * o.cos() - w.sin() * o.sin() * i.cos()) * xp
        + (-w.sin() * o.cos() - w.cos() * o.sin() * i.cos()) * yp;
    let yecl = (w.cos() * o.sin() + w.sin() * o.cos() * i.cos()) * xp
        + (-w.sin() * o.sin() + w.cos() * o.cos() * i.cos()) * yp;
    let zecl = (w.sin() * i.sin()) * xp + (w.cos() * i.sin()) * yp;

    // Obliquity of the ecliptic at J2000
    let eps = (84381.448 / 3600.0_f64).to_radians();

    [
        xecl,
        eps.cos() * yecl - eps.sin() * zecl,
        eps.sin() * yecl + eps.cos() * zecl,
    ]
}

/// Heliocentric ICRF position of a planet in rectangular equatorial
/// coordinates (AU). Explanatory Supplement to the Astronomical Almanac,
/// chapter 8, page 340.
pub(crate) fn planet_helio(
    elements: &Elements,
    rates: &Rates,
    extras: Option<&Extras>,
    jd: f64,
) -> [f64; 3] {
    // Julian centuries past J2000
    let t = (jd - J2000) / 36_525.0;

    let a = elements.a + rates.da * t;
    let e = elements.e + rates.de * t;
    let i = elements.i + rates.di * t;
    let mut m = elements.m + rates.dm * t;
    let w = elements.w + rates.dw * t;
    let o = elements.o + rates.do_ * t;

    if let Some(x) = extras {
        let mean_longitude = m + w + o;
        let perihelion_longitude = w + o;
        m = mean_longitude - perihelion_longitude
            + x.b * t * t
            + x.c * (x.f * t).to_radians().cos()
            + x.s * (x.f * t).to_radians().sin();
    }

    m = reduce_mean_anomaly(m);

    let seed = m + e.to_degrees() * m.to_radians().sin();
    let big_e = solve_kepler(m, e, seed);

    let xp = a * (big_e.to_radians().cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * big_e.to_radians().sin();

    orbital_plane_to_equatorial(xp, yp, i, w, o)
}

/// Geocentric position of a planet, given Earth's heliocentric position.
pub(crate) fn planet_geo(
    earth: [f64; 3],
    elements: &Elements,
    rates: &Rates,
    extras: Option<&Extras>,
    jd: f64,
) -> [f64; 3] {
    let h = planet_helio(elements, rates, extras, jd);
    [h[0] - earth[0], h[1] - earth[1], h[2] - earth[2]]
}

/// Geocentric ICRF position of the Moon in Earth radii. Paul Schlyter's
/// "How to compute planetary positions", with the same orbital-plane and
/// obliquity rotations as the planets.
pub(crate) fn moon_geo(elements: &Elements, rates: &Rates, jd: f64) -> [f64; 3] {
    // Schlyter's elements interpolate in days since 1999-12-31T00:00
    let d = jd - 2_451_543.5;

    let a = elements.a + rates.da * d;
    let e = elements.e + rates.de * d;
    let i = elements.i + rates.di * d;
    let mut m = elements.m + rates.dm * d;
    let w = elements.w + rates.dw * d;
    let o = elements.o + rates.do_ * d;

    m = reduce_mean_anomaly(m);

    // First-order seed carries an extra eccentricity term for the Moon
    let seed =
        m + e.to_degrees() * m.to_radians().sin() * (1.0 + e * m.to_radians().cos());
    let big_e = solve_kepler(m, e, seed);

    let xp = a * (big_e.to_radians().cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * big_e.to_radians().sin();

    orbital_plane_to_equatorial(xp, yp, i, w, o)
}
