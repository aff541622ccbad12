use crate::{
    framebuffer::Framebuffer,
    viewport::{Rect, Size},
};

/// CPU-side target surface, one packed pixel per client pixel.
pub struct Surface {
    size: Size,
    pixels: Vec<u32>,
}
impl Surface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![0; size.area() as usize],
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.pixels.resize(size.area() as usize, 0);
    }

    pub fn size(&self) -> Size {
        self.size
    }
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
    pub fn get(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.size.width);
        assert!(y < self.size.height);
        self.pixels[y as usize * self.size.width as usize + x as usize]
    }
}

/// Nearest-neighbor scales `framebuffer` into `rect` and paints everything
/// else in `background`. Parts of `rect` outside the surface are skipped.
pub fn present(surface: &mut Surface, framebuffer: &Framebuffer, rect: Rect, background: u32) {
    let width = surface.size.width as usize;
    if width == 0 {
        return;
    };
    let src_w = framebuffer.width() as u64;
    let src_h = framebuffer.height() as u64;
    let src = framebuffer.pixels();

    for (y, row) in surface.pixels.chunks_exact_mut(width).enumerate() {
        let y = y as u32;
        if y < rect.y || y >= rect.bottom() {
            row.fill(background);
            continue;
        }
        let sy = (y - rect.y) as u64 * src_h / rect.height as u64;
        let src_row = &src[(sy * src_w) as usize..][..src_w as usize];

        for (x, out) in row.iter_mut().enumerate() {
            let x = x as u32;
            *out = if x < rect.x || x >= rect.right() {
                background
            } else {
                let sx = (x - rect.x) as u64 * src_w / rect.width as u64;
                src_row[sx as usize]
            };
        }
    }
}
