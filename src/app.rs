use crate::astro;
use crate::canvas::{Canvas, Cell};
use crate::config::{load_settings, Settings};
use crate::model::Tables;
use crate::render;
use crate::sim;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, DisableLineWrap, EnableLineWrap, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::{Duration, Instant};

const SECONDS_PER_DAY: f64 = 86_400.0;

pub(crate) fn run() -> Result<()> {
    let path = std::env::args().nth(1);
    let settings = load_settings(path.as_deref().map(Path::new))?;

    let start = match &settings.datetime {
        Some(s) => parse_datetime(s)?,
        None => chrono::Utc::now().naive_utc(),
    };
    let julian_date = astro::to_julian_date(start);

    let tables = Tables::new()?;

    let mut out = io::stdout();
    execute!(
        out,
        EnterAlternateScreen,
        DisableLineWrap,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;
    terminal::enable_raw_mode()?;

    let res = event_loop(&mut out, settings, tables, julian_date);

    execute!(
        out,
        EndSynchronizedUpdate,
        ResetColor,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    )?;
    terminal::disable_raw_mode().ok();

    res
}

pub(crate) fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .with_context(|| format!("invalid datetime {s:?}, expected %Y-%m-%dT%H:%M:%S"))
}

fn event_loop(
    out: &mut Stdout,
    mut settings: Settings,
    mut tables: Tables,
    mut julian_date: f64,
) -> Result<()> {
    let latitude = settings.latitude.to_radians();
    let longitude = settings.longitude.to_radians();

    let frame_dt = Duration::from_secs_f64(1.0 / settings.fps.clamp(1, 240) as f64);
    let mut speed = settings.speed;
    let mut paused = false;

    let mut last = Instant::now();
    let mut prev_size = (0u16, 0u16);
    let mut prev_buf: Vec<Cell> = Vec::new();
    let mut canvas = Canvas::new(0, 0);

    loop {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(KeyEvent { code, kind, .. }) if kind == KeyEventKind::Press => {
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char(' ') => paused = !paused,
                        KeyCode::Char('+') | KeyCode::Char('=') => speed *= 2.0,
                        KeyCode::Char('-') => speed /= 2.0,
                        KeyCode::Char('1') => speed = settings.speed,
                        KeyCode::Char('g') => settings.grid = !settings.grid,
                        KeyCode::Char('c') => settings.constellations = !settings.constellations,
                        KeyCode::Char('u') => settings.unicode = !settings.unicode,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let real_dt = (now - last).as_secs_f64().min(0.25);
        last = now;
        if !paused {
            julian_date += real_dt * speed / SECONDS_PER_DAY;
        }

        let (w, h) = terminal::size()?;
        if w < 40 || h < 20 {
            execute!(out, BeginSynchronizedUpdate)?;
            execute!(out, terminal::Clear(terminal::ClearType::All))?;
            queue!(out, cursor::MoveTo(0, 0), Print("Terminal too small (need ~40x20)."))?;
            execute!(out, EndSynchronizedUpdate)?;
            out.flush()?;
            std::thread::sleep(Duration::from_millis(60));
            prev_size = (0, 0);
            continue;
        }

        if (w, h) != prev_size {
            prev_size = (w, h);
            prev_buf = vec![Cell::blank(); w as usize * h as usize];
            canvas = Canvas::new(h, w);
            execute!(out, terminal::Clear(terminal::ClearType::All))?;
        }

        sim::update_all(&mut tables, julian_date, latitude, longitude);
        render::render_all(&mut canvas, &settings, &tables);
        render_status(&mut canvas, &settings, julian_date, speed, paused);

        execute!(out, BeginSynchronizedUpdate)?;
        render_diff(out, w, h, &mut prev_buf, canvas.cells())?;
        execute!(out, EndSynchronizedUpdate)?;
        out.flush()?;

        std::thread::sleep(frame_dt);
    }
}

/// Simulation metadata in the top-left corner, over the chart.
fn render_status(canvas: &mut Canvas, settings: &Settings, julian_date: f64, speed: f64, paused: bool) {
    let dt = astro::from_julian_date(julian_date);
    let (_, month, day) = astro::julian_to_gregorian(julian_date);

    let date = format!("Date (UTC): {}", dt.format("%Y-%m-%d %H:%M:%S"));

    let zodiac = if settings.unicode {
        format!(
            "Zodiac: {} {}",
            astro::zodiac_sign(month, day),
            astro::zodiac_symbol(month, day)
        )
    } else {
        format!("Zodiac: {}", astro::zodiac_sign(month, day))
    };

    let phase = astro::MoonPhase::from_age(astro::moon_age(julian_date));
    let lunar = format!("Lunar Phase: {}", phase.name());

    let (deg, min, sec) = decimal_to_dms(settings.latitude);
    let lat = format!("Latitude: {deg}\u{b0} {min}' {sec:.2}\"");
    let (deg, min, sec) = decimal_to_dms(settings.longitude);
    let lon = format!("Longitude: {deg}\u{b0} {min}' {sec:.2}\"");

    let pace = if paused {
        "Speed: paused".to_string()
    } else {
        format!("Speed: {speed}x")
    };

    for (row, line) in [date, zodiac, lunar, lat, lon, pace].iter().enumerate() {
        canvas.put_str(row as i32, 0, line, Color::Reset);
    }
}

/// Degrees to (degrees, arcminutes, arcseconds), sign on the degrees.
fn decimal_to_dms(value: f64) -> (i32, i32, f64) {
    let degrees = value as i32;
    let fractional = (value - degrees as f64).abs();
    let total_minutes = fractional * 60.0;
    let minutes = total_minutes as i32;
    let seconds = (total_minutes - minutes as f64) * 60.0;
    (degrees, minutes, seconds)
}

fn render_diff(out: &mut Stdout, w: u16, h: u16, prev: &mut [Cell], cur: &[Cell]) -> io::Result<()> {
    let mut cur_fg = Color::Reset;

    for y in 0..h as usize {
        for x in 0..w as usize {
            let i = y * w as usize + x;
            if prev[i] == cur[i] {
                continue;
            }
            prev[i] = cur[i];

            let c = cur[i];
            queue!(out, cursor::MoveTo(x as u16, y as u16))?;
            if c.fg != cur_fg {
                cur_fg = c.fg;
                queue!(out, SetForegroundColor(cur_fg))?;
            }
            queue!(out, Print(c.ch))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn datetime_parses_iso_seconds() {
        let dt = parse_datetime("2024-03-20T03:06:29").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 20));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (3, 6, 29));
        assert!(parse_datetime("March 20, 2024").is_err());
    }

    #[test]
    fn dms_breakdown() {
        let (d, m, s) = decimal_to_dms(42.3601);
        assert_eq!((d, m), (42, 21));
        assert!((s - 36.36).abs() < 0.01);

        let (d, m, s) = decimal_to_dms(-71.0589);
        assert_eq!((d, m), (-71, 3));
        assert!((s - 32.04).abs() < 0.01);
    }

    #[test]
    fn status_lines_land_in_the_corner() {
        let settings = Settings::default();
        let mut canvas = Canvas::new(24, 60);
        render_status(&mut canvas, &settings, 2_451_545.0, 1.0, false);
        assert!(canvas.row_string(0).starts_with("Date (UTC): 2000-01-01 12:00:00"));
        assert!(canvas.row_string(1).contains("Capricorn"));
        assert!(canvas.row_string(2).contains("Lunar Phase:"));
        assert!(canvas.row_string(5).contains("Speed: 1x"));
    }
}
