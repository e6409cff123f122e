use image::RgbImage;
use std::path::Path;
use tiny_skia::Pixmap;

use crate::utils::EnvError;

/// A rendered RGB frame, row-major, three bytes per pixel, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    pub(crate) fn from_pixmap(pixmap: &Pixmap) -> Self {
        let mut data = Vec::with_capacity(pixmap.pixels().len() * 3);
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            data.extend_from_slice(&[color.red(), color.green(), color.blue()]);
        }

        Self {
            width: pixmap.width(),
            height: pixmap.height(),
            data,
        }
    }

    /// RGB value at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 3) as usize;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    pub fn to_image(&self) -> Option<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), EnvError> {
        let image = self
            .to_image()
            .ok_or_else(|| EnvError::Display("Frame buffer does not match its dimensions".into()))?;
        image.save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}
