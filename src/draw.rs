use crate::canvas::Canvas;
use crossterm::style::Color;
use std::collections::VecDeque;

/// One glyph destined for a canvas cell. Coordinates may be off-canvas;
/// the canvas clips on write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CellWrite {
    pub(crate) row: i32,
    pub(crate) col: i32,
    pub(crate) ch: char,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LineStyle {
    /// ASCII: '|', '-'/'_' and '/', '\' junctions.
    Plain,
    /// Box-drawing: '│', '─' with rounded corner joints.
    Smooth,
    /// '•' at every step.
    Dotted,
}

/// Incremental line rasterization. Steps one cell at a time along the major
/// axis, accumulating the minor axis as a fraction; junction glyphs are
/// queued alongside the body glyph whenever the minor axis jumps a cell.
/// Writes come out in paint order, so later ones overwrite earlier ones.
pub(crate) struct LineSteps {
    style: LineStyle,
    ya: i32,
    xa: i32,
    yb: i32,
    xb: i32,
    dy: i32,
    dx: i32,
    vertical_major: bool,
    /// Signed whole-cell offset along the major axis.
    step: i32,
    /// Minor-axis accumulator.
    frac: f64,
    major_step: i32,
    minor_step: f64,
    queue: VecDeque<CellWrite>,
}

impl LineSteps {
    pub(crate) fn new(style: LineStyle, ya: i32, xa: i32, yb: i32, xb: i32) -> Self {
        let dy = yb - ya;
        let dx = xb - xa;

        // The smooth style ties toward the horizontal branch so a perfect
        // diagonal renders as stacked corner pairs
        let vertical_major = match style {
            LineStyle::Smooth => dy.abs() > dx.abs(),
            _ => dy.abs() >= dx.abs(),
        };

        let (major_step, minor_step) = if vertical_major {
            let sy = if dy > 0 { 1 } else { -1 };
            let sx = if dy == 0 { 0.0 } else { dx as f64 / dy.abs() as f64 };
            (sy, sx)
        } else {
            let sx = if dx > 0 { 1 } else { -1 };
            let sy = if dx == 0 { 0.0 } else { dy as f64 / dx.abs() as f64 };
            (sx, sy)
        };

        Self {
            style,
            ya,
            xa,
            yb,
            xb,
            dy,
            dx,
            vertical_major,
            step: 0,
            frac: 0.0,
            major_step,
            minor_step,
            queue: VecDeque::new(),
        }
    }

    fn slope_char(&self) -> char {
        if self.dx > 0 {
            if self.dy > 0 {
                '\\'
            } else {
                '/'
            }
        } else if self.dy > 0 {
            '/'
        } else {
            '\\'
        }
    }

    /// Joint pair (at the current cell, at the jumped-to cell) for the
    /// smooth style.
    fn joints(&self) -> (char, char) {
        if self.vertical_major {
            if self.dx > 0 {
                if self.dy > 0 {
                    ('╰', '╮')
                } else {
                    ('╭', '╯')
                }
            } else if self.dy > 0 {
                ('╯', '╭')
            } else {
                ('╮', '╰')
            }
        } else if self.dy > 0 {
            if self.dx > 0 {
                ('╮', '╰')
            } else {
                ('╭', '╯')
            }
        } else if self.dx > 0 {
            ('╯', '╭')
        } else {
            ('╰', '╮')
        }
    }

    fn exhausted(&self) -> bool {
        let limit = if self.vertical_major {
            self.dy.abs()
        } else {
            self.dx.abs()
        };
        self.step.abs() > limit
    }

    fn advance(&mut self) {
        self.step += self.major_step;
        self.frac += self.minor_step;
    }

    /// Rasterize one major-axis step into the queue.
    fn fill_step(&mut self) {
        let minor = self.frac.round() as i32;
        let minor_next = (self.frac + self.minor_step).round() as i32;

        if self.vertical_major {
            let curr_y = self.ya + self.step;
            let curr_x = self.xa + minor;
            let next_x = self.xa + minor_next;
            let jumped = next_x != curr_x;

            match self.style {
                LineStyle::Plain => {
                    let ch = if jumped { self.slope_char() } else { '|' };
                    self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch });
                }
                LineStyle::Smooth => {
                    self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: '│' });
                    if jumped && curr_x != self.xb {
                        let (a, b) = self.joints();
                        self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: a });
                        self.queue.push_back(CellWrite { row: curr_y, col: next_x, ch: b });
                    }
                }
                LineStyle::Dotted => {
                    self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: '•' });
                }
            }
            self.advance();
        } else {
            let curr_y = self.ya + minor;
            let curr_x = self.xa + self.step;
            let next_y = self.ya + minor_next;
            let next_x = self.xa + self.step + self.major_step;
            let jumped = next_y != curr_y;

            match self.style {
                LineStyle::Plain => {
                    // A truly horizontal run uses '-'; anything sloped uses
                    // '_' so the junctions read as a continuous stroke
                    let body = if self.ya == self.yb { '-' } else { '_' };
                    self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: body });
                    if jumped {
                        if self.dy > 0 {
                            // Moving down-screen: the junction goes on the
                            // next cell, which is then skipped
                            if curr_y != self.yb {
                                self.queue.push_back(CellWrite {
                                    row: next_y,
                                    col: next_x,
                                    ch: self.slope_char(),
                                });
                                self.advance();
                            }
                        } else {
                            self.queue.push_back(CellWrite {
                                row: curr_y,
                                col: curr_x,
                                ch: self.slope_char(),
                            });
                        }
                    }
                }
                LineStyle::Smooth => {
                    self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: '─' });
                    if jumped && curr_y != self.yb {
                        let (a, b) = self.joints();
                        self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: a });
                        self.queue.push_back(CellWrite { row: next_y, col: curr_x, ch: b });
                    }
                }
                LineStyle::Dotted => {
                    self.queue.push_back(CellWrite { row: curr_y, col: curr_x, ch: '•' });
                }
            }
            self.advance();
        }
    }
}

impl Iterator for LineSteps {
    type Item = CellWrite;

    fn next(&mut self) -> Option<CellWrite> {
        while self.queue.is_empty() {
            if self.exhausted() {
                return None;
            }
            self.fill_step();
        }
        self.queue.pop_front()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fill {
    Horizontal,
    Vertical,
    Corner,
}

/// Midpoint ellipse rasterization over the first quadrant, mirrored into
/// all four. Two regimes split at the point where the tangent slope passes
/// -1: step rows while the curve is steep, then step columns to the top.
///
/// Reference: https://dai.fmph.uniba.sk/upload/0/01/Ellipse.pdf
pub(crate) struct EllipseSteps {
    center_y: i32,
    center_x: i32,
    rad_y: i64,
    rad_x: i64,
    y: i32,
    x: i32,
    magic_y: f64,
    unicode: bool,
    queue: VecDeque<CellWrite>,
    done: bool,
}

impl EllipseSteps {
    pub(crate) fn new(
        center_y: i32,
        center_x: i32,
        rad_y: i32,
        rad_x: i32,
        unicode: bool,
    ) -> Self {
        let ry = rad_y as f64;
        let rx = rad_x as f64;
        // Row where the tangent slope reaches -1
        let magic_y = (ry.powi(4) / (rx * rx + ry * ry)).sqrt();

        Self {
            center_y,
            center_x,
            rad_y: rad_y as i64,
            rad_x: rad_x as i64,
            y: 0,
            x: rad_x,
            magic_y,
            unicode,
            queue: VecDeque::new(),
            done: rad_y <= 0 && rad_x <= 0,
        }
    }

    /// Signed distance measure of (y, x) from the ellipse boundary:
    /// positive outside, negative inside.
    fn error(&self, y: i32, x: i32) -> i64 {
        let (y, x) = (y as i64, x as i64);
        self.rad_y * self.rad_y * x * x + self.rad_x * self.rad_x * y * y
            - self.rad_x * self.rad_x * self.rad_y * self.rad_y
    }

    fn push(&mut self, row: i32, col: i32, ch: char) {
        self.queue.push_back(CellWrite { row, col, ch });
    }

    fn emit(&mut self, fill: Fill) {
        let (cy, cx) = (self.center_y, self.center_x);
        let (y, x) = (self.y, self.x);

        match (fill, self.unicode) {
            (Fill::Corner, false) => {
                self.push(cy - y, cx + x, '\\');
                self.push(cy - y, cx - x, '/');
                self.push(cy + y, cx - x, '\\');
                self.push(cy + y, cx + x, '/');
            }
            (Fill::Corner, true) => {
                self.push(cy - y - 1, cx + x, '╮');
                self.push(cy - y, cx + x, '╰');
                self.push(cy - y - 1, cx - x, '╭');
                self.push(cy - y, cx - x, '╯');
                self.push(cy + y - 1, cx - x, '╮');
                self.push(cy + y, cx - x, '╰');
                self.push(cy + y - 1, cx + x, '╭');
                self.push(cy + y, cx + x, '╯');
            }
            (Fill::Vertical, unicode) => {
                let ch = if unicode { '│' } else { '|' };
                self.push(cy - y, cx + x, ch);
                self.push(cy - y, cx - x, ch);
                self.push(cy + y, cx - x, ch);
                self.push(cy + y, cx + x, ch);
            }
            (Fill::Horizontal, unicode) => {
                let ch = if unicode { '─' } else { '-' };
                self.push(cy - y, cx + x, ch);
                self.push(cy - y, cx - x, ch);
                self.push(cy + y, cx - x, ch);
                self.push(cy + y, cx + x, ch);
            }
        }
    }

    fn fill_step(&mut self) {
        let (y_next, x_next) = if (self.y as f64) < self.magic_y {
            // Steep regime: always climb a row, pull in a column when the
            // candidate lands outside
            let y_next = self.y + 1;
            let x_next = if self.error(y_next, self.x) > 0 {
                self.x - 1
            } else {
                self.x
            };
            (y_next, x_next)
        } else if self.x > 0 {
            // Shallow regime: always pull in a column, climb a row when the
            // candidate lands inside
            let x_next = self.x - 1;
            let y_next = if self.error(self.y, x_next) < 0 {
                self.y + 1
            } else {
                self.y
            };
            (y_next, x_next)
        } else {
            self.done = true;
            return;
        };

        let fill = if y_next > self.y && x_next < self.x {
            Fill::Corner
        } else if y_next > self.y {
            Fill::Vertical
        } else {
            Fill::Horizontal
        };

        self.emit(fill);
        self.y = y_next;
        self.x = x_next;
    }
}

impl Iterator for EllipseSteps {
    type Item = CellWrite;

    fn next(&mut self) -> Option<CellWrite> {
        while self.queue.is_empty() {
            if self.done {
                return None;
            }
            self.fill_step();
        }
        self.queue.pop_front()
    }
}

pub(crate) fn draw_line(
    canvas: &mut Canvas,
    style: LineStyle,
    ya: i32,
    xa: i32,
    yb: i32,
    xb: i32,
    fg: Color,
) {
    for w in LineSteps::new(style, ya, xa, yb, xb) {
        canvas.put(w.row, w.col, w.ch, fg);
    }
}

pub(crate) fn draw_ellipse(
    canvas: &mut Canvas,
    center_y: i32,
    center_x: i32,
    rad_y: i32,
    rad_x: i32,
    unicode: bool,
    fg: Color,
) {
    for w in EllipseSteps::new(center_y, center_x, rad_y, rad_x, unicode) {
        canvas.put(w.row, w.col, w.ch, fg);
    }
}
