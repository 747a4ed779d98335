//! RGB pixel canvas with half-block terminal output.
//!
//! The canvas is sized in terminal pixels: one column wide and two pixels per
//! row, printed as `▀` cells with the top pixel as foreground and the bottom
//! pixel as background.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Linear interpolation, `t` in [0, 1].
    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
        Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
    }

    fn to_color(self) -> Color {
        Color::Rgb { r: self.0, g: self.1, b: self.2 }
    }
}

/// A colour with coverage, used for translucent overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub alpha: f64,
}

impl Paint {
    pub const fn solid(color: Rgb) -> Self {
        Paint { color, alpha: 1.0 }
    }

    pub const fn translucent(color: Rgb, alpha: f64) -> Self {
        Paint { color, alpha }
    }
}

impl From<Rgb> for Paint {
    fn from(color: Rgb) -> Self {
        Paint::solid(color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    px: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            px: vec![Rgb::BLACK; width * height],
        }
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.px.clear();
        self.px.resize(width * height, Rgb::BLACK);
    }

    pub fn clear(&mut self, color: Rgb) {
        self.px.fill(color);
    }

    #[cfg(test)]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.px[y * self.width + x])
        } else {
            None
        }
    }

    /// Paint one pixel; out-of-range coordinates are clipped.
    pub fn paint(&mut self, x: i32, y: i32, paint: Paint) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.px[idx] = if paint.alpha >= 1.0 {
            paint.color
        } else {
            Rgb::lerp(self.px[idx], paint.color, paint.alpha)
        };
    }

    #[cfg(test)]
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, paint: impl Into<Paint>) {
        let paint = paint.into();
        for py in y.max(0)..(y + h).min(self.height as i32) {
            for px in x.max(0)..(x + w).min(self.width as i32) {
                self.paint(px, py, paint);
            }
        }
    }

    /// Fill a rectangle with a vertical gradient.
    /// `stops` are `(offset, colour)` pairs in increasing offset order, where
    /// offsets are fractions of the span `from_y..to_y`.
    pub fn fill_gradient(&mut self, x: i32, y: i32, w: i32, h: i32, from_y: f64, to_y: f64, stops: &[(f64, Rgb)]) {
        if stops.is_empty() {
            return;
        }
        let span = (to_y - from_y).max(f64::EPSILON);
        for py in y.max(0)..(y + h).min(self.height as i32) {
            let t = (f64::from(py) + 0.5 - from_y) / span;
            let color = gradient_at(stops, t);
            for px in x.max(0)..(x + w).min(self.width as i32) {
                self.paint(px, py, Paint::solid(color));
            }
        }
    }

    pub fn fill_ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64, paint: impl Into<Paint>) {
        let paint = paint.into();
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let y0 = (cy - ry).floor() as i32;
        let y1 = (cy + ry).ceil() as i32;
        let x0 = (cx - rx).floor() as i32;
        let x1 = (cx + rx).ceil() as i32;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = (f64::from(px) + 0.5 - cx) / rx;
                let dy = (f64::from(py) + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.paint(px, py, paint);
                }
            }
        }
    }

    /// Rectangle with circular corners of radius `r`.
    pub fn fill_round_rect(&mut self, x: f64, y: f64, w: f64, h: f64, r: f64, paint: impl Into<Paint>) {
        let paint = paint.into();
        let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
        for py in y.floor() as i32..(y + h).ceil() as i32 {
            for px in x.floor() as i32..(x + w).ceil() as i32 {
                let sx = f64::from(px) + 0.5;
                let sy = f64::from(py) + 0.5;
                if sx < x || sx > x + w || sy < y || sy > y + h {
                    continue;
                }
                let nx = sx.clamp(x + r, x + w - r);
                let ny = sy.clamp(y + r, y + h - r);
                let (dx, dy) = (sx - nx, sy - ny);
                if dx * dx + dy * dy <= r * r {
                    self.paint(px, py, paint);
                }
            }
        }
    }

    /// Write the canvas to `out` as half-block cells starting at the top-left corner.
    pub fn write_half_blocks(&self, out: &mut impl Write) -> io::Result<()> {
        let mut prev: Option<(Rgb, Rgb)> = None;

        for row in 0..self.height / 2 {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for col in 0..self.width {
                let top = self.px[row * 2 * self.width + col];
                let bottom = self.px[(row * 2 + 1) * self.width + col];
                if prev != Some((top, bottom)) {
                    queue!(
                        out,
                        style::SetForegroundColor(top.to_color()),
                        style::SetBackgroundColor(bottom.to_color())
                    )?;
                    prev = Some((top, bottom));
                }
                queue!(out, style::Print('▀'))?;
            }
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

fn gradient_at(stops: &[(f64, Rgb)], t: f64) -> Rgb {
    let mut prev = stops[0];
    if t <= prev.0 {
        return prev.1;
    }
    for &stop in &stops[1..] {
        if t <= stop.0 {
            let span = (stop.0 - prev.0).max(f64::EPSILON);
            return Rgb::lerp(prev.1, stop.1, (t - prev.0) / span);
        }
        prev = stop;
    }
    prev.1
}
