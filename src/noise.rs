use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{framebuffer::Framebuffer, util::primary};

/// Colored noise that marches across the buffer while random cells are
/// eroded back to zero behind it.
pub struct Noise {
    rng: StdRng,
    cursor: usize,
    clears_per_write: usize,
}
impl Noise {
    pub fn new(seed: u64, clears_per_write: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            cursor: 0,
            clears_per_write,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn fill_step(&mut self, framebuffer: &mut Framebuffer, write_count: usize) {
        let pixels = framebuffer.pixels_mut();
        let cells = pixels.len();
        if cells == 0 {
            return;
        };

        for _ in 0..write_count {
            let i = self.cursor % cells;
            self.cursor = (i + 1) % cells;
            pixels[i] = primary((self.cursor % 3) as u32);

            for _ in 0..self.clears_per_write {
                let j = self.rng.random_range(0..cells);
                pixels[j] = 0;
            }
        }
    }
}
