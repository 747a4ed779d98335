//! Scene rendering system.
//!
//! Paints the background and the chef onto a `PixelCanvas`. Scene coordinates
//! are mapped to canvas pixels with a uniform scale, letterboxed and centred.

use crate::game::canvas::{Paint, PixelCanvas, Rgb};
use crate::game::types::Position;

const LETTERBOX: Rgb = Rgb(0, 0, 0);
const SKY_TOP: Rgb = Rgb(0x9f, 0xd7, 0xff);
const SKY_BOTTOM: Rgb = Rgb(0xc8, 0xec, 0xff);
const FIELD_LIGHT: Rgb = Rgb(0x7b, 0xcf, 0x68);
const FIELD_MID: Rgb = Rgb(0x5f, 0xae, 0x45);
const FIELD_DARK: Rgb = Rgb(0x4f, 0x90, 0x3a);
const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);

const SHADOW: Paint = Paint::translucent(Rgb(0, 0, 0), 0.25);
const HAIR_BUN: Rgb = Rgb(0x11, 0x11, 0x11);
const HAIR: Rgb = Rgb(0x2b, 0x2b, 0x2b);
const SKIN: Rgb = Rgb(0xf8, 0xd0, 0xb5);
const CHEEK: Rgb = Rgb(0xf1, 0xb8, 0xa1);
const EYE: Rgb = Rgb(0x23, 0x1f, 0x20);
const HAT_BAND: Rgb = Rgb(0xe6, 0xe6, 0xe6);
const COAT: Rgb = Rgb(0xff, 0x7f, 0xb0);
const APRON: Rgb = Rgb(0xff, 0xd4, 0xe6);
const APRON_SEAM: Rgb = Rgb(0xfe, 0xf6, 0xfb);
const SLEEVE: Rgb = Rgb(0xff, 0xc0, 0xda);
const SHOE: Rgb = Rgb(0x34, 0x34, 0x34);
const KNIFE_HANDLE: Rgb = Rgb(0x5b, 0x37, 0x10);
const KNIFE_BLADE: Rgb = Rgb(0xcf, 0xd4, 0xdd);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneRenderer {
    width: f64,
    height: f64,
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl SceneRenderer {
    /// Fit a `width` x `height` scene onto a canvas of the given pixel size.
    pub fn fit(width: f64, height: f64, canvas_width: usize, canvas_height: usize) -> Self {
        let scale = (canvas_width as f64 / width).min(canvas_height as f64 / height);
        let scale = if scale.is_finite() { scale } else { 0.0 };
        Self {
            width,
            height,
            scale,
            offset_x: (canvas_width as f64 - width * scale) / 2.0,
            offset_y: (canvas_height as f64 - height * scale) / 2.0,
        }
    }

    /// Canvas pixel coordinates of a scene point.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        (self.offset_x + x * self.scale, self.offset_y + y * self.scale)
    }

    /// Clear the canvas and paint one frame.
    pub fn draw(&self, canvas: &mut PixelCanvas, chef: Position) {
        canvas.clear(LETTERBOX);
        self.draw_background(canvas);
        self.draw_chef(canvas, chef);
    }

    fn draw_background(&self, canvas: &mut PixelCanvas) {
        let (w, h) = (self.width, self.height);

        self.gradient_band(canvas, 0.0, h * 0.55, 0.0, h * 0.55, &[(0.0, SKY_TOP), (1.0, SKY_BOTTOM)]);
        self.gradient_band(
            canvas,
            h * 0.45,
            h,
            h * 0.4,
            h,
            &[(0.0, FIELD_LIGHT), (0.6, FIELD_MID), (1.0, FIELD_DARK)],
        );

        let cloud = Paint::translucent(WHITE, 0.25);
        for i in 0..4i32 {
            let start_x = 80.0 + f64::from(i) * 140.0;
            let start_y = 80.0 + f64::from(i).sin() * 12.0;
            self.ellipse(canvas, start_x + 80.0, start_y - 4.0, 80.0, 18.0, cloud);
        }

        let stripe = Paint::translucent(WHITE, 0.28);
        for i in 0..9i32 {
            let y = h * 0.55 + f64::from(i) * 22.0;
            self.stroke_bezier(
                canvas,
                [(0.0, y), (w * 0.35, y - 12.0), (w * 0.65, y + 12.0), (w, y - 6.0)],
                stripe,
            );
        }
    }

    fn draw_chef(&self, canvas: &mut PixelCanvas, at: Position) {
        let part = |x: f64, y: f64| (at.x + x, at.y + y);

        let (x, y) = part(0.0, 140.0);
        self.ellipse(canvas, x, y, 120.0, 28.0, SHADOW);

        // Everything above the shadow is drawn 60 units higher.
        let body = |x: f64, y: f64| part(x, y - 60.0);

        for bun_x in [-90.0, 90.0] {
            let (x, y) = body(bun_x, -80.0);
            self.ellipse(canvas, x, y, 36.0, 36.0, HAIR_BUN);
        }
        let (x, y) = body(0.0, -72.0);
        self.ellipse(canvas, x, y, 130.0, 110.0, HAIR);

        let (x, y) = body(0.0, -40.0);
        self.ellipse(canvas, x, y, 76.0, 76.0, SKIN);
        for side in [-1.0, 1.0] {
            let (x, y) = body(32.0 * side, -26.0);
            self.ellipse(canvas, x, y, 10.0, 10.0, CHEEK);
            let (x, y) = body(24.0 * side, -44.0);
            self.ellipse(canvas, x, y, 8.0, 8.0, EYE);
        }
        let (x, y) = body(-16.0, -12.0);
        self.round_rect(canvas, x, y, 32.0, 4.0, 2.0, EYE);

        let (x, y) = body(0.0, -164.0);
        self.ellipse(canvas, x, y, 150.0, 48.0, WHITE);
        let (x, y) = body(-80.0, -150.0);
        self.round_rect(canvas, x, y, 160.0, 36.0, 18.0, WHITE);
        let (x, y) = body(-72.0, -128.0);
        self.round_rect(canvas, x, y, 144.0, 18.0, 12.0, HAT_BAND);

        let (x, y) = body(-110.0, -10.0);
        self.round_rect(canvas, x, y, 220.0, 210.0, 90.0, COAT);
        let (x, y) = body(-110.0, 30.0);
        self.round_rect(canvas, x, y, 220.0, 120.0, 80.0, APRON);
        let (x, y) = body(-3.0, 40.0);
        self.round_rect(canvas, x, y, 6.0, 150.0, 0.0, APRON_SEAM);

        for side in [-1.0, 1.0] {
            let (x, y) = body(if side < 0.0 { -220.0 } else { 100.0 }, 30.0);
            self.round_rect(canvas, x, y, 120.0, 70.0, 28.0, SLEEVE);
            let (x, y) = body(if side < 0.0 { -240.0 } else { 196.0 }, 58.0);
            self.round_rect(canvas, x, y, 44.0, 44.0, 18.0, SKIN);
        }

        let (x, y) = body(250.0, 48.0);
        self.round_rect(canvas, x, y, 48.0, 18.0, 8.0, KNIFE_HANDLE);
        let (x, y) = body(290.0, 42.0);
        self.round_rect(canvas, x, y, 120.0, 30.0, 4.0, KNIFE_BLADE);

        for leg_x in [-66.0, 6.0] {
            let (x, y) = body(leg_x, 150.0);
            self.round_rect(canvas, x, y, 60.0, 110.0, 30.0, COAT);
        }
        for shoe_x in [-76.0, -4.0] {
            let (x, y) = body(shoe_x, 240.0);
            self.round_rect(canvas, x, y, 80.0, 32.0, 14.0, SHOE);
        }
    }

    /// Full-width band `top..bottom` with a vertical gradient spanning `from..to`.
    fn gradient_band(&self, canvas: &mut PixelCanvas, top: f64, bottom: f64, from: f64, to: f64, stops: &[(f64, Rgb)]) {
        let (x0, y0) = self.to_canvas(0.0, top);
        let (x1, y1) = self.to_canvas(self.width, bottom);
        let (_, g0) = self.to_canvas(0.0, from);
        let (_, g1) = self.to_canvas(0.0, to);
        canvas.fill_gradient(
            x0.round() as i32,
            y0.round() as i32,
            (x1 - x0).round() as i32,
            (y1 - y0).round() as i32,
            g0,
            g1,
            stops,
        );
    }

    fn ellipse(&self, canvas: &mut PixelCanvas, cx: f64, cy: f64, rx: f64, ry: f64, paint: impl Into<Paint>) {
        let (x, y) = self.to_canvas(cx, cy);
        canvas.fill_ellipse(x, y, rx * self.scale, ry * self.scale, paint);
    }

    fn round_rect(&self, canvas: &mut PixelCanvas, x: f64, y: f64, w: f64, h: f64, r: f64, paint: impl Into<Paint>) {
        let (px, py) = self.to_canvas(x, y);
        canvas.fill_round_rect(px, py, w * self.scale, h * self.scale, r * self.scale, paint);
    }

    /// One-pixel stroke along a cubic Bézier curve; each pixel is painted once.
    fn stroke_bezier(&self, canvas: &mut PixelCanvas, points: [(f64, f64); 4], paint: Paint) {
        let [p0, p1, p2, p3] = points.map(|(x, y)| self.to_canvas(x, y));
        let samples = ((p3.0 - p0.0).abs() * 2.0).ceil().max(1.0) as usize;
        let mut last = None;

        for i in 0..=samples {
            let t = i as f64 / samples as f64;
            let u = 1.0 - t;
            let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
            let x = a * p0.0 + b * p1.0 + c * p2.0 + d * p3.0;
            let y = a * p0.1 + b * p1.1 + c * p2.1 + d * p3.1;
            let pixel = (x.floor() as i32, y.floor() as i32);
            if last != Some(pixel) {
                canvas.paint(pixel.0, pixel.1, paint);
                last = Some(pixel);
            }
        }
    }
}
