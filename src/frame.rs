use log::{debug, info};

use crate::{
    config::Config,
    error::Result,
    framebuffer::Framebuffer,
    noise::Noise,
    run_state::RunState,
    viewport::{Size, Viewport},
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Notification {
    Created,
    Resized(Size),
    CloseRequested,
    Destroyed,
}

/// Everything the event handler and the main loop share, passed to both by reference.
pub struct Frame {
    framebuffer: Framebuffer,
    noise: Noise,
    writes_per_step: usize,
    viewport: Viewport,
    run_state: RunState,
}
impl Frame {
    pub fn new(config: &Config, client: Size, chrome: Size) -> Result<Self> {
        let framebuffer = Framebuffer::create(config.width, config.height)?;
        let viewport = Viewport::new(framebuffer.size(), client, chrome);
        debug!(
            "Framebuffer {}x{}, minimum window {:?}",
            framebuffer.width(),
            framebuffer.height(),
            viewport.min_size()
        );

        Ok(Self {
            framebuffer,
            noise: Noise::new(config.seed, config.clears_per_write),
            writes_per_step: config.writes_per_step(),
            viewport,
            run_state: RunState::Running,
        })
    }

    pub fn handle(&mut self, notification: Notification) {
        match notification {
            Notification::Created => (),
            Notification::Resized(size) => self.viewport.on_resize(size),
            Notification::CloseRequested | Notification::Destroyed => {
                if self.run_state.stop() {
                    info!("Stopping after {notification:?}");
                }
            }
        }
    }

    /// Mutates the buffer for one frame. Returns false once stopped, without touching it.
    pub fn advance(&mut self) -> bool {
        if !self.run_state.is_running() {
            return false;
        };
        self.noise
            .fill_step(&mut self.framebuffer, self.writes_per_step);
        true
    }

    pub fn is_running(&self) -> bool {
        self.run_state.is_running()
    }
    pub fn run_state(&self) -> RunState {
        self.run_state
    }
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
