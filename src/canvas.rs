use crossterm::style::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
}

impl Cell {
    pub(crate) fn blank() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
        }
    }
}

/// A character grid addressed by (row, col) with clipping writes. Everything
/// upstream draws into this; the frame loop diffs it against the previous
/// frame and blits the changes.
pub(crate) struct Canvas {
    pub(crate) width: u16,
    pub(crate) height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub(crate) fn new(height: u16, width: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); height as usize * width as usize],
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::blank());
    }

    pub(crate) fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write one glyph. Coordinates outside the grid are dropped.
    pub(crate) fn put(&mut self, row: i32, col: i32, ch: char, fg: Color) {
        if row < 0 || col < 0 || row >= self.height as i32 || col >= self.width as i32 {
            return;
        }
        self.cells[row as usize * self.width as usize + col as usize] = Cell { ch, fg };
    }

    /// Write a label starting at (row, col), truncated at the right edge.
    pub(crate) fn put_str(&mut self, row: i32, col: i32, text: &str, fg: Color) {
        for (i, ch) in text.chars().enumerate() {
            self.put(row, col + i as i32, ch, fg);
        }
    }

    #[cfg(test)]
    pub(crate) fn get(&self, row: u16, col: u16) -> Cell {
        self.cells[row as usize * self.width as usize + col as usize]
    }

    /// One row as a string, for fixture comparisons.
    #[cfg(test)]
    pub(crate) fn row_string(&self, row: u16) -> String {
        (0..self.width).map(|c| self.get(row, c).ch).collect()
    }

    #[cfg(test)]
    pub(crate) fn dump(&self) -> Vec<String> {
        (0..self.height).map(|r| self.row_string(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_and_get() {
        let mut c = Canvas::new(3, 5);
        c.put(1, 2, '*', Color::Yellow);
        assert_eq!(c.get(1, 2).ch, '*');
        assert_eq!(c.get(1, 2).fg, Color::Yellow);
        assert_eq!(c.get(0, 0).ch, ' ');
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut c = Canvas::new(3, 5);
        c.put(-1, 0, 'x', Color::Reset);
        c.put(0, -1, 'x', Color::Reset);
        c.put(3, 0, 'x', Color::Reset);
        c.put(0, 5, 'x', Color::Reset);
        assert!(c.cells().iter().all(|cell| cell.ch == ' '));
    }

    #[test]
    fn labels_truncate_at_the_edge() {
        let mut c = Canvas::new(1, 4);
        c.put_str(0, 2, "Vega", Color::Reset);
        assert_eq!(c.row_string(0), "  Ve");
    }

    #[test]
    fn clear_resets_every_cell() {
        let mut c = Canvas::new(2, 2);
        c.put(0, 0, '#', Color::Red);
        c.clear();
        assert_eq!(c.get(0, 0), Cell::blank());
    }
}
