//! Draw phase: project the updated render state onto the canvas. The chart
//! is the unit disk inscribed in the window under a north-up stereographic
//! projection; anything projecting outside the disk is dropped or clipped.

use crate::canvas::Canvas;
use crate::config::Settings;
use crate::coord;
use crate::data::ConstellationEntry;
use crate::draw::{self, LineStyle};
use crate::model::{Moon, Planet, PlanetId, RenderState, Star, Tables};
use crossterm::style::Color;

/// Horizontal coordinates to chart polar coordinates: zenith at the center,
/// horizon on the unit circle, north up.
pub(crate) fn horizontal_to_polar(azimuth: f64, altitude: f64) -> (f64, f64) {
    let (theta, phi) = coord::horizontal_to_spherical(azimuth, altitude);
    coord::project_stereographic_north(1.0, theta, phi)
}

fn render_object(canvas: &mut Canvas, object: &RenderState, settings: &Settings, show_label: bool) {
    let (radius, theta) = horizontal_to_polar(object.azimuth, object.altitude);

    if radius.abs() > 1.0 {
        return;
    }

    let (row, col) = coord::polar_to_screen(radius, theta, canvas.height, canvas.width);

    let fg = match object.color {
        Some(c) if settings.color => c,
        _ => Color::Reset,
    };

    let glyph = if settings.unicode {
        object.symbol_unicode
    } else {
        object.symbol_ascii
    };
    canvas.put(row, col, glyph, fg);

    if show_label {
        canvas.put_str(row - 1, col + 1, object.label, fg);
    }
}

pub(crate) fn render_stars(
    canvas: &mut Canvas,
    settings: &Settings,
    stars: &[Star],
    by_magnitude: &[u32],
) {
    for &catalog_num in by_magnitude {
        let star = &stars[catalog_num as usize - 1];

        if star.magnitude > settings.threshold {
            continue;
        }

        let show_label = star.magnitude <= settings.label_threshold;
        render_object(canvas, &star.state, settings, show_label);
    }
}

fn render_constellation(
    canvas: &mut Canvas,
    settings: &Settings,
    constellation: &ConstellationEntry,
    stars: &[Star],
) {
    // Only draw the figure when every member star clears the threshold
    for &(a, b) in constellation.segments {
        for num in [a, b] {
            if stars[num as usize - 1].magnitude > settings.threshold {
                return;
            }
        }
    }

    let style = if settings.unicode {
        LineStyle::Smooth
    } else {
        LineStyle::Plain
    };
    let marker = if settings.unicode { '○' } else { '+' };

    for &(a, b) in constellation.segments {
        let sa = &stars[a as usize - 1].state;
        let sb = &stars[b as usize - 1].state;

        let (mut radius_a, theta_a) = horizontal_to_polar(sa.azimuth, sa.altitude);
        let (mut radius_b, theta_b) = horizontal_to_polar(sb.azimuth, sb.altitude);

        if radius_a.abs() > 1.0 && radius_b.abs() > 1.0 {
            continue;
        }

        // Pin an out-of-disk endpoint to the rim; it loses its marker
        let mut a_clipped = false;
        let mut b_clipped = false;
        if radius_a.abs() > 1.0 {
            a_clipped = true;
            radius_a = 1.0;
        } else if radius_b.abs() > 1.0 {
            b_clipped = true;
            radius_b = 1.0;
        }

        let (ya, xa) = coord::polar_to_screen(radius_a, theta_a, canvas.height, canvas.width);
        let (yb, xb) = coord::polar_to_screen(radius_b, theta_b, canvas.height, canvas.width);

        draw::draw_line(canvas, style, ya, xa, yb, xb, Color::Reset);
        if !a_clipped {
            canvas.put(ya, xa, marker, Color::Reset);
        }
        if !b_clipped {
            canvas.put(yb, xb, marker, Color::Reset);
        }
    }
}

pub(crate) fn render_constellations(
    canvas: &mut Canvas,
    settings: &Settings,
    constellations: &[ConstellationEntry],
    stars: &[Star],
) {
    for constellation in constellations {
        render_constellation(canvas, settings, constellation, stars);
    }
}

pub(crate) fn render_planets(canvas: &mut Canvas, settings: &Settings, planets: &[Planet]) {
    // Far-to-near, so nearer planets paint on top. Earth is skipped: its
    // geocentric position is the origin and would just trace the ecliptic.
    for planet in planets.iter().rev() {
        if planet.id == PlanetId::Earth {
            continue;
        }
        render_object(canvas, &planet.state, settings, true);
    }
}

pub(crate) fn render_moon(canvas: &mut Canvas, settings: &Settings, moon: &Moon) {
    render_object(canvas, &moon.state, settings, true);
}

fn gcd(a: i32, b: i32) -> i32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Azimuth lines every `step` degrees from the rim to the zenith, over
/// concentric altitude rings, with degree labels at the rim. The step is the
/// smallest of the candidates that keeps neighboring lines at least ten rows
/// apart at the window edge.
pub(crate) fn render_azimuthal_grid(canvas: &mut Canvas, settings: &Settings) {
    const STEP_SIZES: [i32; 5] = [10, 15, 30, 45, 90];
    const MIN_ROWS: i32 = 10;

    let rad_vertical = ((canvas.height as f64 - 1.0) / 2.0).round() as i32;
    let rad_horizontal = ((canvas.width as f64 - 1.0) / 2.0).round() as i32;

    let mut inc = STEP_SIZES[STEP_SIZES.len() - 1];
    for &step in STEP_SIZES.iter().rev() {
        let separation = (rad_vertical as f64 * (step as f64).to_radians().sin()).round() as i32;
        if separation < MIN_ROWS {
            break;
        }
        inc = step;
    }

    // Altitude rings first, so the radial lines and labels paint over them.
    // The outermost ring is the horizon rim.
    let mut ring = inc;
    while ring <= 90 {
        let rad_y = (rad_vertical as f64 * ring as f64 / 90.0).round() as i32;
        let rad_x = (rad_horizontal as f64 * ring as f64 / 90.0).round() as i32;
        draw::draw_ellipse(
            canvas,
            rad_vertical,
            rad_horizontal,
            rad_y,
            rad_x,
            settings.unicode,
            Color::Reset,
        );
        ring += inc;
    }

    // Angles that divide 90 more coarsely draw first, so the axes end up
    // painted on top of everything between them
    let mut angles: Vec<i32> = (0..=90 / inc).map(|i| inc * i).collect();
    angles.sort_by(|a, b| {
        let pa = 90 / gcd(*a, 90);
        let pb = 90 / gcd(*b, 90);
        pb.cmp(&pa)
    });

    let style = if settings.unicode {
        LineStyle::Smooth
    } else {
        LineStyle::Plain
    };

    for quad in 0..4 {
        for &base in &angles {
            let angle = base + 90 * quad;
            let rad = (angle as f64).to_radians();

            let y = rad_vertical - (rad_vertical as f64 * rad.sin()).round() as i32;
            let x = rad_horizontal + (rad_horizontal as f64 * rad.cos()).round() as i32;

            draw::draw_line(canvas, style, y, x, rad_vertical, rad_horizontal, Color::Reset);

            let label = angle.to_string();
            // Shift left on the right half so the label isn't truncated
            let x_off = if x < rad_horizontal {
                0
            } else {
                -(label.len() as i32 - 1)
            };
            canvas.put_str(y, x + x_off, &label, Color::Reset);
        }
    }
}

/// Horizon letters at the disk's cardinal points. East and west read
/// swapped relative to a map: the dome is seen from the inside.
pub(crate) fn render_cardinal_directions(canvas: &mut Canvas, settings: &Settings) {
    let fg = if settings.color {
        Color::Blue
    } else {
        Color::Reset
    };

    let half_maxy = ((canvas.height as f64 - 1.0) / 2.0).round() as i32;
    let half_maxx = ((canvas.width as f64 - 1.0) / 2.0).round() as i32;

    canvas.put(0, half_maxx, 'N', fg);
    canvas.put(half_maxy, canvas.width as i32 - 1, 'W', fg);
    canvas.put(canvas.height as i32 - 1, half_maxx, 'S', fg);
    canvas.put(half_maxy, 0, 'E', fg);
}

/// One whole frame, in paint order.
pub(crate) fn render_all(canvas: &mut Canvas, settings: &Settings, tables: &Tables) {
    canvas.clear();

    render_stars(canvas, settings, &tables.stars, &tables.by_magnitude);
    if settings.constellations {
        render_constellations(canvas, settings, tables.constellations, &tables.stars);
    }
    render_planets(canvas, settings, &tables.planets);
    render_moon(canvas, settings, &tables.moon);
    if settings.grid {
        render_azimuthal_grid(canvas, settings);
    }
    render_cardinal_directions(canvas, settings);
}
