use std::f64::consts::PI;

/// Rectangular equatorial coordinates to (right ascension, declination),
/// both in radians.
pub(crate) fn rectangular_to_spherical(x: f64, y: f64, z: f64) -> (f64, f64) {
    let ra = y.atan2(x);
    let dec = z.atan2((x * x + y * y).sqrt());
    (ra, dec)
}

/// Apply proper motion to a catalog position. Motions are radians per year,
/// measured from the J2000 epoch.
pub(crate) fn apply_proper_motion(
    ra: f64,
    ra_motion: f64,
    dec: f64,
    dec_motion: f64,
    jd: f64,
) -> (f64, f64) {
    let days_per_year = 365.2425;
    let years = (jd - crate::astro::J2000) / days_per_year;
    (ra + ra_motion * years, dec + dec_motion * years)
}

/// Equatorial (ra, dec) to horizontal (azimuth, altitude) for an observer at
/// (latitude, longitude), all radians, at the given Greenwich mean sidereal
/// time. Azimuth 0 is North; West longitudes are negative.
///
/// Astronomical Algorithms, Jean Meeus, eq. 13.5 & 13.6, in the modified form
/// used by Greg Miller (celestialprogramming.com).
pub(crate) fn equatorial_to_horizontal(
    ra: f64,
    dec: f64,
    gmst: f64,
    latitude: f64,
    longitude: f64,
) -> (f64, f64) {
    let local_sidereal_time = (gmst + longitude) % (2.0 * PI);

    let mut hour_angle = local_sidereal_time - ra;
    if hour_angle < 0.0 {
        hour_angle += 2.0 * PI;
    }
    if hour_angle > PI {
        hour_angle -= 2.0 * PI;
    }

    let sin_alt = latitude.sin() * dec.sin() + latitude.cos() * dec.cos() * hour_angle.cos();
    let altitude = sin_alt.clamp(-1.0, 1.0).asin();

    let mut azimuth = hour_angle
        .sin()
        .atan2(hour_angle.cos() * latitude.sin() - dec.tan() * latitude.cos());

    azimuth -= PI;
    if azimuth < 0.0 {
        azimuth += 2.0 * PI;
    }

    (azimuth, altitude)
}

/// Horizontal (azimuth, altitude) to mathematical spherical (θ, φ): θ is the
/// plane angle measured from East, φ the polar angle from the zenith.
pub(crate) fn horizontal_to_spherical(azimuth: f64, altitude: f64) -> (f64, f64) {
    (PI / 2.0 - azimuth, PI / 2.0 - altitude)
}

// ---------------------------------------------------------------------------
// Projections
// ---------------------------------------------------------------------------
//
// Map Projections — A Working Manual, John P. Snyder, eq. 21-1 and 20-2.
// Dividing the separation by 2 projects onto the plane through the equator.

/// Stereographic projection about an arbitrary center. Returns (r, θ) polar
/// coordinates on the projection plane. The plane angle here is the raw
/// difference θ - θ_center, which is only exact for polar centers.
#[allow(dead_code)]
pub(crate) fn project_stereographic(
    sphere_radius: f64,
    point_theta: f64,
    point_phi: f64,
    center_theta: f64,
    center_phi: f64,
) -> (f64, f64) {
    let c = (center_phi - point_phi).abs();
    let r = sphere_radius * (c / 2.0).tan();
    let theta = point_theta - center_theta;
    (r, theta)
}

/// Stereographic projection centered on the zenith (φ = 0). The plane angle
/// is reflected so the North horizon lands at the top of the chart.
pub(crate) fn project_stereographic_north(
    sphere_radius: f64,
    point_theta: f64,
    point_phi: f64,
) -> (f64, f64) {
    let c = point_phi.abs();
    let r = sphere_radius * (c / 2.0).tan();
    let theta = PI - point_theta;
    (r, theta)
}

/// Stereographic projection centered on the nadir (φ = π), with the same
/// reflection as the north variant.
#[allow(dead_code)]
pub(crate) fn project_stereographic_south(
    sphere_radius: f64,
    point_theta: f64,
    point_phi: f64,
) -> (f64, f64) {
    let c = (PI - point_phi).abs();
    let r = sphere_radius * (c / 2.0).tan();
    let theta = PI - point_theta;
    (r, theta)
}

// ---------------------------------------------------------------------------
// Screen-space mapping
// ---------------------------------------------------------------------------

/// Map plane polar coordinates onto a character window, r = 1 landing on the
/// inscribed disk's rim. Row axis is flipped (screen y grows downward). The
/// result may lie outside the window; callers clip.
pub(crate) fn polar_to_screen(
    r: f64,
    theta: f64,
    win_height: u16,
    win_width: u16,
) -> (i32, i32) {
    let rad_y = (win_height as f64 - 1.0) / 2.0;
    let rad_x = (win_width as f64 - 1.0) / 2.0;

    let row = r * -rad_y * theta.sin() + rad_y;
    let col = r * rad_x * theta.cos() + rad_x;

    (row.round() as i32, col.round() as i32)
}

/// Map spherical coordinates through a rectangular viewing frustum: the
/// window covers `aov` (angle of view) in each axis, centered on the view
/// direction, and an object's offset within that field maps linearly to
/// rows and columns.
#[allow(dead_code)]
pub(crate) fn frustum_to_screen(
    aov_phi: f64,
    aov_theta: f64,
    view_phi: f64,
    view_theta: f64,
    object_phi: f64,
    object_theta: f64,
    win_height: u16,
    win_width: u16,
) -> (i32, i32) {
    // Top edge of the window is the smallest polar angle in the field
    let start_phi = view_phi - aov_phi / 2.0;
    let start_theta = view_theta - aov_theta / 2.0;

    let row = (object_phi - start_phi) / aov_phi * win_height as f64;
    let col = (object_theta - start_theta) / aov_theta * win_width as f64;

    (row.round() as i32, col.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn rectangular_axes() {
        let (ra, dec) = rectangular_to_spherical(1.0, 0.0, 0.0);
        assert!(ra.abs() < EPS && dec.abs() < EPS);

        let (ra, dec) = rectangular_to_spherical(0.0, 1.0, 0.0);
        assert!((ra - PI / 2.0).abs() < EPS && dec.abs() < EPS);

        let (_, dec) = rectangular_to_spherical(0.0, 0.0, 1.0);
        assert!((dec - PI / 2.0).abs() < EPS);

        let (_, dec) = rectangular_to_spherical(3.0, -4.0, -5.0);
        assert!((dec + PI / 4.0).abs() < EPS);
    }

    #[test]
    fn proper_motion_is_linear_in_years() {
        let (ra, dec) = apply_proper_motion(1.0, 2e-6, 0.5, -1e-6, 2_451_545.0);
        assert!((ra - 1.0).abs() < EPS && (dec - 0.5).abs() < EPS);

        let century = 2_451_545.0 + 100.0 * 365.2425;
        let (ra, dec) = apply_proper_motion(1.0, 2e-6, 0.5, -1e-6, century);
        assert!((ra - 1.0002).abs() < EPS);
        assert!((dec - 0.4999).abs() < EPS);
    }

    #[test]
    fn pole_star_altitude_equals_latitude() {
        let lat = 0.7505; // ~43°N
        let (az, alt) = equatorial_to_horizontal(1.3, PI / 2.0, 2.0, lat, -1.29);
        assert!((alt - lat).abs() < 1e-9);
        // Celestial pole sits due north
        assert!(az.abs() < 1e-9 || (az - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn transit_at_zero_hour_angle() {
        // lst == ra puts the object on the meridian; for dec == lat it is at
        // the zenith
        let lat = 0.5;
        let gmst = 1.2;
        let lon = 0.3;
        let lst = (gmst + lon) % (2.0 * PI);
        let (_, alt) = equatorial_to_horizontal(lst, lat, gmst, lat, lon);
        assert!((alt - PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn altitude_never_leaves_range() {
        let mut ra = 0.0;
        while ra < 2.0 * PI {
            let (az, alt) = equatorial_to_horizontal(ra, 0.4, 3.0, 0.9, -1.0);
            assert!((-PI / 2.0..=PI / 2.0).contains(&alt));
            assert!((0.0..2.0 * PI + EPS).contains(&az));
            ra += 0.37;
        }
    }

    #[test]
    fn horizontal_to_spherical_maps_zenith() {
        let (theta, phi) = horizontal_to_spherical(0.0, PI / 2.0);
        assert!((theta - PI / 2.0).abs() < EPS);
        assert!(phi.abs() < EPS);
    }

    #[test]
    fn stereographic_center_and_horizon() {
        // Point at the projection center has r = 0
        let (r, _) = project_stereographic_north(1.0, 0.8, 0.0);
        assert!(r.abs() < EPS);

        // The horizon (φ = π/2) projects to the unit circle
        let (r, theta) = project_stereographic_north(1.0, 0.25, PI / 2.0);
        assert!((r - 1.0).abs() < EPS);
        assert!((theta - (PI - 0.25)).abs() < EPS);

        let (r, _) = project_stereographic_south(1.0, 0.25, PI / 2.0);
        assert!((r - 1.0).abs() < EPS);

        let (r, theta) = project_stereographic(1.0, 1.0, PI / 2.0, 0.4, 0.0);
        assert!((r - 1.0).abs() < EPS);
        assert!((theta - 0.6).abs() < EPS);
    }

    #[test]
    fn polar_to_screen_center_and_rim() {
        let (row, col) = polar_to_screen(0.0, 1.234, 41, 81);
        assert_eq!((row, col), (20, 40));

        // r = 1 along each axis lands on the window edge
        assert_eq!(polar_to_screen(1.0, 0.0, 41, 81), (20, 80));
        assert_eq!(polar_to_screen(1.0, PI / 2.0, 41, 81), (0, 40));
        assert_eq!(polar_to_screen(1.0, PI, 41, 81), (20, 0));
        assert_eq!(polar_to_screen(1.0, 3.0 * PI / 2.0, 41, 81), (40, 40));
    }

    #[test]
    fn polar_to_screen_flips_rows() {
        // θ in the upper half-plane must come out above center
        let (row, _) = polar_to_screen(0.5, PI / 4.0, 41, 81);
        assert!(row < 20);
        let (row, _) = polar_to_screen(0.5, -PI / 4.0, 41, 81);
        assert!(row > 20);
    }

    #[test]
    fn frustum_maps_view_center_to_window_center() {
        let (row, col) = frustum_to_screen(1.0, 2.0, 1.5, 3.0, 1.5, 3.0, 40, 80);
        assert_eq!((row, col), (20, 40));

        // Half-field offsets hit the window edges
        let (row, col) = frustum_to_screen(1.0, 2.0, 1.5, 3.0, 2.0, 4.0, 40, 80);
        assert_eq!((row, col), (40, 80));
        let (row, col) = frustum_to_screen(1.0, 2.0, 1.5, 3.0, 1.0, 2.0, 40, 80);
        assert_eq!((row, col), (0, 0));
    }
}
