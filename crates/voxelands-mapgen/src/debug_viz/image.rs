//! An RGBA raster for debug renders.

/// Row-major RGBA pixels, fully opaque unless written otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DebugImage {
    pub width: u32,
    pub height: u32,
    /// Length is `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl DebugImage {
    /// A transparent black image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Writes an opaque pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, [r, g, b]: [u8; 3]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&[r, g, b, 255]);
    }

    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Distinct RGB colors in the image, alpha ignored.
    pub fn unique_color_count(&self) -> usize {
        let mut colors = std::collections::HashSet::new();
        for chunk in self.pixels.chunks_exact(4) {
            colors.insert((chunk[0], chunk[1], chunk[2]));
        }
        colors.len()
    }

    /// Hands the raw buffer over, e.g. to `image::RgbaImage::from_raw`.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }
}
