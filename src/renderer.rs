// Drawing seam between the particle field and the page. The field only ever
// talks to `Surface`; `CanvasRenderer` is the browser implementation over a
// 2D canvas context, which keeps the simulation testable off the browser.

use crate::color::Color;
use std::f64::consts::PI;
use vecmath::Vector2;
use web_sys::CanvasRenderingContext2d;

pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64);
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        line_width: f64,
    );
}

pub struct CanvasRenderer {
    pub context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(context: CanvasRenderingContext2d) -> Self {
        CanvasRenderer { context }
    }
}

impl Surface for CanvasRenderer {
    fn clear(&mut self, width: f64, height: f64) {
        self.context.clear_rect(0.0, 0.0, width, height);
    }

    #[allow(deprecated)]
    fn fill_circle(&mut self, center: Vector2<f64>, radius: f64, color: Color, alpha: f64) {
        self.context.begin_path();
        // arc only throws for a negative radius, and sizes are always positive
        let _ = self.context.arc(center[0], center[1], radius, 0.0, PI * 2.0);
        self.context.set_fill_style(&color.to_rgba(alpha).into());
        self.context.fill();
    }

    #[allow(deprecated)]
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
        alpha: f64,
        line_width: f64,
    ) {
        self.context.begin_path();
        self.context.set_stroke_style(&color.to_rgba(alpha).into());
        self.context.set_line_width(line_width);
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.stroke();
    }
}
