pub const OPAQUE: u32 = 0xFF00_0000;

pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Channel 0 is blue, 1 green, 2 red, matching the byte order of `0xAARRGGBB`.
pub fn get_channel(color: u32, channel: u32) -> u8 {
    (color >> (channel * 8)) as u8
}

/// Opaque color with a single channel fully lit.
pub fn primary(channel: u32) -> u32 {
    OPAQUE | 0xFF << ((channel % 3) * 8)
}
