use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// The region of the figure a view draws into, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Map a time value to an x coordinate for the window `[start, end]`.
    ///
    /// A degenerate window maps everything to the left edge.
    pub fn time_to_x(&self, t: f64, start: f64, end: f64) -> f64 {
        let span = end - start;
        if span <= 0.0 {
            return self.x;
        }
        self.x + (t - start) * self.width / span
    }

    /// Map a value on `[lo, hi]` to a y coordinate, `hi` at the top.
    pub fn value_to_y(&self, v: f64, lo: f64, hi: f64) -> f64 {
        let span = hi - lo;
        if span <= 0.0 {
            return self.y + self.height;
        }
        self.y + self.height - (v - lo) * self.height / span
    }
}
