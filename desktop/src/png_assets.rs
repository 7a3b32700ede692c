use std::path::PathBuf;

use image::imageops::FilterType;
use log::{info, warn};
use supercompress_core::activities::viewer::SLOT_SIZE;
use supercompress_core::assets::{self, AssetSource, Bitmap};

/// Loads catalog assets as PNG files from a base directory and quantizes
/// them to the display's four gray levels.
pub struct PngAssets {
    base_path: PathBuf,
}

impl PngAssets {
    pub fn new_with_base_path(base_path: PathBuf) -> Self {
        info!("Loading assets from {:?}", base_path);
        PngAssets { base_path }
    }
}

impl AssetSource for PngAssets {
    fn load(&self, key: &str) -> assets::Result<Bitmap> {
        let path = self.base_path.join(key);
        if !path.exists() {
            return Err(assets::Error::NotFound);
        }
        let image = image::open(&path).map_err(|err| {
            warn!("Failed to decode {:?}: {}", path, err);
            assets::Error::Decode
        })?;
        let image = image
            .resize(SLOT_SIZE as u32, SLOT_SIZE as u32, FilterType::Triangle)
            .into_luma8();

        let width = image.width() as u16;
        let height = image.height() as u16;
        let size = Bitmap::plane_size(width, height);
        let mut bw = vec![0u8; size];
        let mut lsb = vec![0u8; size];
        let mut msb = vec![0u8; size];
        for (i, pixel) in image.pixels().enumerate() {
            let luma = pixel[0];
            let byte_index = i / 8;
            let bit = 1 << (7 - i % 8);
            // Quantize: <64 black, <128 dark gray, <192 light gray, white.
            if luma >= 128 {
                bw[byte_index] |= bit;
            }
            if (128..192).contains(&luma) {
                lsb[byte_index] |= bit;
            } else if (64..128).contains(&luma) {
                msb[byte_index] |= bit;
            }
        }
        Ok(Bitmap {
            width,
            height,
            bw,
            lsb,
            msb,
        })
    }
}
