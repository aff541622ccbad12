use crate::{
    error::{Error, Result},
    viewport::Size,
};

// Each u32 is one pixel packed as 0xAARRGGBB, rows stored top to bottom.
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}
impl Framebuffer {
    pub fn create(width: u32, height: u32) -> Result<Self> {
        let cells = (width as usize)
            .checked_mul(height as usize)
            .filter(|&cells| cells != 0)
            .ok_or(Error::InvalidDimensions { width, height })?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(cells)
            .map_err(|_| Error::Allocation { cells })?;
        pixels.resize(cells, 0);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
    pub fn len(&self) -> usize {
        self.pixels.len()
    }
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.pixels[self.index(x, y)]
    }
    pub fn set(&mut self, x: u32, y: u32, color: u32) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(x < self.width);
        assert!(y < self.height);

        y as usize * self.width as usize + x as usize
    }
}
