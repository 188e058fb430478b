use image::RgbImage;

/// A 16bit pixel that has 5 red bits, 6 green bits and 5 blue bits
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Rgb565Pixel(pub u16);

impl Rgb565Pixel {
    const R_MASK: u16 = 0b1111_1000_0000_0000;
    const G_MASK: u16 = 0b0000_0111_1110_0000;
    const B_MASK: u16 = 0b0000_0000_0001_1111;

    /// Red channel back in the top 5 bits of a byte, low 3 bits zero.
    pub fn red(self) -> u8 {
        ((self.0 & Self::R_MASK) >> 8) as u8
    }
    /// Green channel in the top 6 bits, low 2 bits zero.
    pub fn green(self) -> u8 {
        ((self.0 & Self::G_MASK) >> 3) as u8
    }
    /// Blue channel in the top 5 bits, low 3 bits zero.
    pub fn blue(self) -> u8 {
        ((self.0 & Self::B_MASK) << 3) as u8
    }

    /// Expand to the three bytes an 18bit SPI panel expects, low bits zeroed.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }
}

impl Rgb565Pixel {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(pack(r, g, b))
    }
}

/// Truncate 8bit channels to 5-6-5 and pack them, red in the high bits.
pub fn pack(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r as u16 >> 3) & 0x1F;
    let g6 = (g as u16 >> 2) & 0x3F;
    let b5 = (b as u16 >> 3) & 0x1F;
    (r5 << 11) | (g6 << 5) | b5
}

/// Pack every pixel of `img` in row-major order.
pub fn pack_image(img: &RgbImage) -> Vec<u16> {
    let mut rgb565 = Vec::with_capacity(img.width() as usize * img.height() as usize);
    for p in img.pixels() {
        rgb565.push(pack(p[0], p[1], p[2]));
    }
    rgb565
}

/// Rebuild an RGB image from packed pixels.
///
/// Missing pixels (when `rgb565` is shorter than `width * height`) stay black.
pub fn unpack_image(rgb565: &[u16], width: u32, height: u32) -> RgbImage {
    let mut rgb = RgbImage::new(width, height);
    for (p, &packed) in rgb.pixels_mut().zip(rgb565) {
        p.0 = Rgb565Pixel(packed).to_rgb();
    }
    rgb
}
