//! Where finished frames go.

use std::io;

use crate::game::canvas::PixelCanvas;
use crate::game::systems::SceneRenderer;
use crate::game::types::{Position, Viewport};

pub trait Surface: Unpin + 'static {
    fn present(&mut self, canvas: &PixelCanvas) -> io::Result<()>;
}

/// Renderer, canvas and surface for one scene of a fixed logical size.
pub struct SceneView<S: Surface> {
    renderer: SceneRenderer,
    canvas: PixelCanvas,
    surface: S,
    scene_width: f64,
    scene_height: f64,
}

impl<S: Surface> SceneView<S> {
    pub fn new(scene_width: f64, scene_height: f64, viewport: Viewport, surface: S) -> Self {
        let (pw, ph) = (viewport.pixel_width(), viewport.pixel_height());
        Self {
            renderer: SceneRenderer::fit(scene_width, scene_height, pw, ph),
            canvas: PixelCanvas::new(pw, ph),
            surface,
            scene_width,
            scene_height,
        }
    }

    /// Refit to a new terminal size; the logical scene size is unchanged.
    pub fn resize_viewport(&mut self, viewport: Viewport) {
        self.resize(self.scene_width, self.scene_height, viewport);
    }

    /// Refit to a new logical scene size and terminal size.
    pub fn resize(&mut self, scene_width: f64, scene_height: f64, viewport: Viewport) {
        let (pw, ph) = (viewport.pixel_width(), viewport.pixel_height());
        self.scene_width = scene_width;
        self.scene_height = scene_height;
        self.canvas.resize(pw, ph);
        self.renderer = SceneRenderer::fit(scene_width, scene_height, pw, ph);
    }

    pub fn redraw(&mut self, chef: Position) -> io::Result<()> {
        self.renderer.draw(&mut self.canvas, chef);
        self.surface.present(&self.canvas)
    }
}
