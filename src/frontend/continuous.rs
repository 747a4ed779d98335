//! Continuous frame driver.
//!
//! Integrates held keys and redraws on a fixed interval, whether or not the
//! chef moved. Key handlers only touch the input state; the next frame reads it.

use std::time::Duration;

use actix::prelude::*;
use log::{debug, error, info};

use crate::config::settings::SceneSettings;
use crate::frontend::messages::{GetSnapshot, SceneInput, Teardown};
use crate::frontend::surface::{SceneView, Surface};
use crate::game::state::SceneState;
use crate::game::types::{SceneEvent, Viewport};

pub struct ContinuousScene<S: Surface> {
    state: SceneState,
    view: SceneView<S>,
    frame_interval: Duration,
    frames: u64,
}

impl<S: Surface> ContinuousScene<S> {
    /// Scene on the fixed-size canvas from `settings`, fitted to `viewport`.
    pub fn new(settings: &SceneSettings, viewport: Viewport, surface: S) -> Self {
        let state = SceneState::from_settings(settings);
        let (width, height) = state.surface_size();
        Self {
            state,
            view: SceneView::new(width, height, viewport, surface),
            frame_interval: settings.frame_interval(),
            frames: 0,
        }
    }

    fn frame(&mut self, ctx: &mut Context<Self>) {
        self.state.tick();
        self.frames += 1;
        self.redraw(ctx);
    }

    fn redraw(&mut self, ctx: &mut Context<Self>) {
        if let Err(e) = self.view.redraw(self.state.position) {
            error!("[FrameDriver] Failed to present frame {}: {}", self.frames, e);
            ctx.stop();
            System::current().stop();
        }
    }
}

impl<S: Surface> Actor for ContinuousScene<S> {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[FrameDriver] Started: interval={:?} position={:?} bounds={:?}",
            self.frame_interval, self.state.position, self.state.bounds
        );
        self.redraw(ctx);
        ctx.run_interval(self.frame_interval, |act, ctx| act.frame(ctx));
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("[FrameDriver] Stopped after {} frames", self.frames);
    }
}

impl<S: Surface> Handler<SceneInput> for ContinuousScene<S> {
    type Result = ();

    fn handle(&mut self, msg: SceneInput, _: &mut Context<Self>) -> Self::Result {
        match msg.0 {
            SceneEvent::Key(event) => self.state.handle_key(event),
            SceneEvent::FocusLost => {
                debug!("[FrameDriver] Focus lost, releasing all keys");
                self.state.release_all();
            }
            SceneEvent::Resized(viewport) => {
                debug!("[FrameDriver] Viewport resized to {:?}", viewport);
                self.view.resize_viewport(viewport);
            }
        }
    }
}

impl<S: Surface> Handler<GetSnapshot> for ContinuousScene<S> {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot())
    }
}

impl<S: Surface> Handler<Teardown> for ContinuousScene<S> {
    type Result = ();

    fn handle(&mut self, _: Teardown, ctx: &mut Context<Self>) -> Self::Result {
        ctx.stop();
        System::current().stop();
    }
}
