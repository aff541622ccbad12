use std::sync::Arc;

use noisebox::{
    config::Config,
    frame::{Frame, Notification},
    viewport::Size,
    Result,
};
use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

pub struct App {
    pub window: Arc<Window>,
    pub frame: Frame,
    pub background: u32,
}
impl App {
    pub fn init(config: &Config) -> Result<(App, EventLoop<()>)> {
        let ev_loop = EventLoop::new()?;
        let native = PhysicalSize::new(config.width, config.height);
        let window = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(native)
            .with_min_inner_size(native)
            .build(&ev_loop)?;
        let window = Arc::new(window);

        let client = size_of(window.inner_size());
        let chrome = size_of(window.outer_size()).saturating_sub(client);
        let frame = Frame::new(config, client, chrome)?;

        let app = Self {
            window,
            frame,
            background: config.background,
        };

        Ok((app, ev_loop))
    }

    pub fn notify(&mut self, notification: Notification) {
        self.frame.handle(notification);
    }
}

pub fn size_of(size: PhysicalSize<u32>) -> Size {
    Size::new(size.width, size.height)
}
