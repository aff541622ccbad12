#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}
impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
    pub fn area(self) -> u64 {
        self.width as u64 * self.height as u64
    }
    pub fn saturating_add(self, other: Size) -> Size {
        Size::new(
            self.width.saturating_add(other.width),
            self.height.saturating_add(other.height),
        )
    }
    pub fn saturating_sub(self, other: Size) -> Size {
        Size::new(
            self.width.saturating_sub(other.width),
            self.height.saturating_sub(other.height),
        )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The two flat-filled regions of `client` left uncovered by this rect.
    /// Only one axis ever has non-empty margins.
    pub fn margins(&self, client: Size) -> Margins {
        if self.width < client.width {
            Margins::Pillarbox {
                left: Rect::new(0, 0, self.x, client.height),
                right: Rect::new(
                    self.right(),
                    0,
                    client.width.saturating_sub(self.right()),
                    client.height,
                ),
            }
        } else {
            Margins::Letterbox {
                top: Rect::new(0, 0, client.width, self.y),
                bottom: Rect::new(
                    0,
                    self.bottom(),
                    client.width,
                    client.height.saturating_sub(self.bottom()),
                ),
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Margins {
    Letterbox { top: Rect, bottom: Rect },
    Pillarbox { left: Rect, right: Rect },
}
impl Margins {
    pub fn rects(&self) -> [Rect; 2] {
        match *self {
            Margins::Letterbox { top, bottom } => [top, bottom],
            Margins::Pillarbox { left, right } => [left, right],
        }
    }
    pub fn is_empty(&self) -> bool {
        self.rects().iter().all(Rect::is_empty)
    }
}

/// Largest rect with the source's aspect ratio that fits the client, centered.
///
/// Sizes of zero are treated as one. The scaled extent rounds down and never
/// drops below one pixel.
pub fn compute_letterbox(
    client_width: u32,
    client_height: u32,
    source_width: u32,
    source_height: u32,
) -> Rect {
    let cw = client_width.max(1) as u64;
    let ch = client_height.max(1) as u64;
    let sw = source_width.max(1) as u64;
    let sh = source_height.max(1) as u64;

    if cw * sh < ch * sw {
        let height = (cw * sh / sw).clamp(1, ch);
        let y = (ch - height) / 2;
        Rect::new(0, y as u32, cw as u32, height as u32)
    } else {
        let width = (ch * sw / sh).clamp(1, cw);
        let x = (cw - width) / 2;
        Rect::new(x as u32, 0, width as u32, ch as u32)
    }
}

pub struct Viewport {
    source: Size,
    client: Size,
    min_size: Size,
    letterbox: Rect,
}
impl Viewport {
    /// `chrome` is the difference between the outer window size and its client area.
    pub fn new(source: Size, client: Size, chrome: Size) -> Self {
        Self {
            source,
            client,
            min_size: source.saturating_add(chrome),
            letterbox: letterbox_for(client, source),
        }
    }

    pub fn on_resize(&mut self, client: Size) {
        self.client = client;
        self.letterbox = letterbox_for(client, self.source);
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }
    pub fn client(&self) -> Size {
        self.client
    }
    pub fn source(&self) -> Size {
        self.source
    }
    pub fn letterbox(&self) -> Rect {
        self.letterbox
    }
    pub fn margins(&self) -> Margins {
        self.letterbox.margins(self.client)
    }
}

fn letterbox_for(client: Size, source: Size) -> Rect {
    compute_letterbox(client.width, client.height, source.width, source.height)
}
