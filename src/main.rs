use app::{size_of, App};
use log::{debug, error};
use noisebox::{config::Config, frame::Notification, Result};
use renderer::Renderer;
use std::sync::Arc;
use std::time::Instant;
use winit::{
    event::{Event, WindowEvent},
    event_loop::ControlFlow,
};

mod app;
mod renderer;

fn main() {
    env_logger::init();

    if let Err(err) = run(Config::default()) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    let (mut app, ev_loop) = App::init(&config)?;
    let source = app.frame.framebuffer().size();
    let mut renderer = Renderer::init(Arc::clone(&app.window), source)?;

    let mut last_frame = Instant::now();

    ev_loop.run(move |ev, loop_target| {
        loop_target.set_control_flow(ControlFlow::Poll);
        match ev {
            Event::Resumed => app.notify(Notification::Created),
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    let size = size_of(size);
                    renderer.resize(size);
                    app.notify(Notification::Resized(size));
                }
                WindowEvent::CloseRequested => app.notify(Notification::CloseRequested),
                WindowEvent::Destroyed => app.notify(Notification::Destroyed),
                WindowEvent::RedrawRequested => {
                    if app.frame.is_running() {
                        let frame = &app.frame;
                        renderer.render(
                            frame.framebuffer(),
                            frame.viewport().letterbox(),
                            app.background,
                        );
                    }
                }
                _ => (),
            },
            Event::AboutToWait => {
                if app.frame.advance() {
                    app.window.request_redraw();

                    let now = Instant::now();
                    debug!("ms: {}", now.duration_since(last_frame).as_millis());
                    last_frame = now;
                }
            }
            _ => (),
        }

        if !app.frame.is_running() {
            loop_target.exit();
        }
    })?;

    Ok(())
}
