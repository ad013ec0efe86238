use crate::*;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

pub fn gray_to_u32(data: &[u8]) -> Vec<u32> {
    data.iter().map(|&v| pack_u32(v, v, v)).collect()
}

pub fn rgb_to_u32(data: &[u8]) -> Vec<u32> {
    data.chunks_exact(3)
        .map(|c| pack_u32(c[0], c[1], c[2]))
        .collect()
}

/// Packed `0xAARRGGBB` pixels for window surfaces such as minifb.
pub fn image_to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    match image.format {
        PixelFormat::Gray8 => Ok(gray_to_u32(&image.data)),
        PixelFormat::Rgb8 => Ok(rgb_to_u32(&image.data)),
        _ => Ok(gray_to_u32(&to_gray(image)?.data)),
    }
}
