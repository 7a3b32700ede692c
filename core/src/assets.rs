use alloc::vec::Vec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    NotFound,
    Decode,
}

pub type Result<T> = core::result::Result<T, Error>;

/// Decoded image in display-native form: a black/white plane plus the
/// two grayscale planes the display mixes in. Planes are bit-packed
/// row-major, one bit per pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub width: u16,
    pub height: u16,
    pub bw: Vec<u8>,
    pub lsb: Vec<u8>,
    pub msb: Vec<u8>,
}

impl Bitmap {
    pub fn plane_size(width: u16, height: u16) -> usize {
        (width as usize * height as usize).div_ceil(8)
    }
}

/// Resolves asset keys to decoded bitmaps. Decoding lives entirely on
/// the frontend side of this seam; the core only produces keys.
pub trait AssetSource {
    fn load(&self, key: &str) -> Result<Bitmap>;
}
