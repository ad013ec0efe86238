use {
    crate::*,
    palm_base::Vec2,
};

/// BT.601 luma in 8-bit fixed point: `0.299 R + 0.587 G + 0.114 B`.
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((77 * r as u32 + 150 * g as u32 + 29 * b as u32 + 128) >> 8) as u8
}

pub fn rgb_to_gray(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(3)
        .map(|c| luma(c[0], c[1], c[2]))
        .collect()
}

pub fn argb_to_gray(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(4)
        .map(|c| luma(c[1], c[2], c[3]))
        .collect()
}

// Y0 U Y1 V: the luma samples are already the grayscale image
pub fn yuyv_to_gray(data: &[u8]) -> Vec<u8> {
    data.iter().step_by(2).copied().collect()
}

pub fn yu12_to_gray(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    data[..size.area()].to_vec()
}

pub fn jpeg_to_gray(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)
        .map_err(|e| ImageError::Decode(format!("Failed to decode JPEG: {}", e)))?;
    let luma = decoded.to_luma8();
    let size = Vec2::new(luma.width() as usize, luma.height() as usize);
    Ok(Image::new(size, luma.into_raw(), PixelFormat::Gray8))
}

/// Convert any supported frame into a freshly allocated `Gray8` frame.
///
/// The input is left untouched; a `Gray8` input is copied. Buffers whose
/// length does not match `size` and `format` are rejected before any
/// pixel is read.
pub fn to_gray(image: &Image) -> Result<Image, ImageError> {
    image.validate()?;
    let data = match image.format {
        PixelFormat::Gray8 => image.data.clone(),
        PixelFormat::Rgb8 => rgb_to_gray(&image.data),
        PixelFormat::Argb8 => argb_to_gray(&image.data),
        PixelFormat::Yuyv => yuyv_to_gray(&image.data),
        PixelFormat::Yu12 => yu12_to_gray(image.size, &image.data),
        PixelFormat::Jpeg => return jpeg_to_gray(&image.data),
    };
    Ok(Image::new(image.size, data, PixelFormat::Gray8))
}
