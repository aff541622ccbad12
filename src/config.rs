use crate::util::pack_argb;

pub const WIDTH: u32 = 256;
pub const HEIGHT: u32 = 240;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    /// Colored cells written per frame. `None` uses a fifth of a scanline.
    pub writes_per_step: Option<usize>,
    pub clears_per_write: usize,
    pub background: u32,
}
impl Config {
    pub fn writes_per_step(&self) -> usize {
        self.writes_per_step
            .unwrap_or(self.width as usize / 5)
    }
}
impl Default for Config {
    fn default() -> Self {
        Self {
            title: "noisebox".to_string(),
            width: WIDTH,
            height: HEIGHT,
            seed: 0xbeef,
            writes_per_step: None,
            clears_per_write: 10,
            background: pack_argb(0xFF, 0, 0, 0),
        }
    }
}
