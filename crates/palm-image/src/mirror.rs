use crate::*;

/// Flip a packed frame left-to-right in place.
///
/// Works on `Gray8`, `Rgb8` and `Argb8`; planar and compressed formats
/// must be converted first.
pub fn mirror_horizontal(image: &mut Image) -> Result<(), ImageError> {
    let bpp = image
        .format
        .bytes_per_pixel()
        .ok_or(ImageError::Unsupported(image.format))?;
    image.validate()?;

    let width = image.size.x;
    if width < 2 {
        return Ok(());
    }
    for row in image.data.chunks_exact_mut(width * bpp) {
        for x in 0..width / 2 {
            let left = x * bpp;
            let right = (width - 1 - x) * bpp;
            for c in 0..bpp {
                row.swap(left + c, right + c);
            }
        }
    }
    Ok(())
}
