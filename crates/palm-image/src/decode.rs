use {
    crate::*,
    crates_image::DynamicImage,
    palm_base::Vec2,
    std::path::Path,
};

/// Decode an encoded image (PNG, JPEG, BMP) into a packed frame.
///
/// Single-channel sources stay `Gray8`; everything else becomes `Rgb8`.
pub fn decode_image(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory(data)?;
    let size = Vec2::new(decoded.width() as usize, decoded.height() as usize);
    Ok(match decoded {
        DynamicImage::ImageLuma8(buf) => Image::new(size, buf.into_raw(), PixelFormat::Gray8),
        other => Image::new(size, other.to_rgb8().into_raw(), PixelFormat::Rgb8),
    })
}

/// Read and decode an image file.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image, ImageError> {
    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}
