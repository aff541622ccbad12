use noisebox::{
    config::{Config, HEIGHT, WIDTH},
    frame::{Frame, Notification},
    framebuffer::Framebuffer,
    present::{present, Surface},
    run_state::RunState,
    viewport::{compute_letterbox, Rect, Size},
};

const BACKGROUND: u32 = 0xFF10_2030;

fn native() -> Size {
    Size::new(WIDTH, HEIGHT)
}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!((config.width, config.height), (256, 240));
    assert_eq!(config.writes_per_step(), 51);
    assert_eq!(config.clears_per_write, 10);

    let custom = Config {
        writes_per_step: Some(3),
        ..Config::default()
    };
    assert_eq!(custom.writes_per_step(), 3);
}

#[test]
fn run_state_stops_once() {
    let mut state = RunState::default();
    assert!(state.is_running());
    assert!(state.stop());
    assert!(!state.stop());
    assert_eq!(state, RunState::Stopped);
}

#[test]
fn frame_mutates_while_running() {
    let mut frame = Frame::new(&Config::default(), native(), Size::default()).unwrap();
    assert!(frame.framebuffer().pixels().iter().all(|&p| p == 0));

    frame.handle(Notification::Created);
    assert!(frame.advance());
    assert!(frame.framebuffer().pixels().iter().any(|&p| p != 0));
}

#[test]
fn close_stops_mutation() {
    for terminal in [Notification::CloseRequested, Notification::Destroyed] {
        let mut frame = Frame::new(&Config::default(), native(), Size::default()).unwrap();
        frame.advance();
        frame.handle(terminal);
        assert_eq!(frame.run_state(), RunState::Stopped);

        let before = frame.framebuffer().pixels().to_vec();
        for _ in 0..10 {
            assert!(!frame.advance());
        }
        assert_eq!(frame.framebuffer().pixels(), &before[..]);

        frame.handle(Notification::Created);
        frame.handle(Notification::Resized(Size::new(10, 10)));
        assert!(!frame.is_running());
    }
}

#[test]
fn resize_updates_viewport() {
    let mut frame = Frame::new(&Config::default(), native(), Size::new(16, 39)).unwrap();
    assert_eq!(frame.viewport().min_size(), Size::new(272, 279));

    frame.handle(Notification::Resized(Size::new(100, 100)));
    assert_eq!(frame.viewport().letterbox(), Rect::new(0, 3, 100, 93));
    assert_eq!(frame.viewport().min_size(), Size::new(272, 279));
}

#[test]
fn frame_rejects_empty_config() {
    let config = Config {
        width: 0,
        ..Config::default()
    };
    assert!(Frame::new(&config, native(), Size::default()).is_err());
}

#[test]
fn present_scales_and_fills_margins() {
    let mut fb = Framebuffer::create(2, 2).unwrap();
    fb.set(0, 0, 1);
    fb.set(1, 0, 2);
    fb.set(0, 1, 3);
    fb.set(1, 1, 4);

    let client = Size::new(8, 4);
    let rect = compute_letterbox(client.width, client.height, 2, 2);
    assert_eq!(rect, Rect::new(2, 0, 4, 4));

    let mut surface = Surface::new(client);
    present(&mut surface, &fb, rect, BACKGROUND);

    let rows: Vec<&[u32]> = surface.pixels().chunks(8).collect();
    let bg = BACKGROUND;
    assert_eq!(rows[0], &[bg, bg, 1, 1, 2, 2, bg, bg]);
    assert_eq!(rows[1], &[bg, bg, 1, 1, 2, 2, bg, bg]);
    assert_eq!(rows[2], &[bg, bg, 3, 3, 4, 4, bg, bg]);
    assert_eq!(rows[3], &[bg, bg, 3, 3, 4, 4, bg, bg]);
}

#[test]
fn present_leaves_source_untouched() {
    let mut frame = Frame::new(&Config::default(), native(), Size::default()).unwrap();
    for _ in 0..20 {
        frame.advance();
    }
    let before = frame.framebuffer().pixels().to_vec();

    let mut surface = Surface::new(Size::new(100, 100));
    for client in [Size::new(100, 100), Size::new(640, 200), Size::new(1, 1)] {
        frame.handle(Notification::Resized(client));
        surface.resize(client);
        present(
            &mut surface,
            frame.framebuffer(),
            frame.viewport().letterbox(),
            BACKGROUND,
        );
        present(
            &mut surface,
            frame.framebuffer(),
            frame.viewport().letterbox(),
            BACKGROUND,
        );
    }
    assert_eq!(frame.framebuffer().pixels(), &before[..]);
}

#[test]
fn present_margins_match_viewport() {
    let mut frame = Frame::new(&Config::default(), native(), Size::default()).unwrap();
    frame.handle(Notification::Resized(Size::new(100, 100)));
    // Nothing in the source is the background color.
    frame.advance();

    let mut surface = Surface::new(Size::new(100, 100));
    present(
        &mut surface,
        frame.framebuffer(),
        frame.viewport().letterbox(),
        BACKGROUND,
    );

    for margin in frame.viewport().margins().rects() {
        for y in margin.y..margin.bottom() {
            for x in margin.x..margin.right() {
                assert_eq!(surface.get(x, y), BACKGROUND);
            }
        }
    }
    let letterbox = frame.viewport().letterbox();
    for y in letterbox.y..letterbox.bottom() {
        for x in letterbox.x..letterbox.right() {
            assert_ne!(surface.get(x, y), BACKGROUND);
        }
    }
}
