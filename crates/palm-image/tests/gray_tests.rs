use crates_image::ImageEncoder;
use palm_base::Vec2;
use palm_image::{Image, ImageError, PixelFormat, to_gray};

#[test]
fn test_rgb8_to_gray() {
    // black, white, pure red, pure green
    let data = vec![0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 255, 0];
    let image = Image::new(Vec2::new(2, 2), data, PixelFormat::Rgb8);

    let gray = to_gray(&image).unwrap();

    assert_eq!(gray.format, PixelFormat::Gray8);
    assert_eq!(gray.size, Vec2::new(2, 2));
    assert_eq!(gray.data[0], 0);
    assert_eq!(gray.data[1], 255);
    assert_eq!(gray.data[2], 77);
    assert_eq!(gray.data[3], 149);
}

#[test]
fn test_argb8_ignores_alpha() {
    let opaque = Image::new(Vec2::new(1, 1), vec![0xFF, 10, 20, 30], PixelFormat::Argb8);
    let clear = Image::new(Vec2::new(1, 1), vec![0x00, 10, 20, 30], PixelFormat::Argb8);
    assert_eq!(to_gray(&opaque).unwrap().data, to_gray(&clear).unwrap().data);
}

#[test]
fn test_yuyv_keeps_luma_samples() {
    let data = vec![16, 128, 235, 128, 50, 90, 60, 200];
    let image = Image::new(Vec2::new(4, 1), data, PixelFormat::Yuyv);
    assert_eq!(to_gray(&image).unwrap().data, vec![16, 235, 50, 60]);
}

#[test]
fn test_yu12_takes_y_plane() {
    let mut data: Vec<u8> = (0..16).collect();
    data.extend_from_slice(&[128; 8]);
    let image = Image::new(Vec2::new(4, 4), data, PixelFormat::Yu12);

    let gray = to_gray(&image).unwrap();
    assert_eq!(gray.data, (0..16).collect::<Vec<u8>>());
}

#[test]
fn test_gray8_is_copied() {
    let image = Image::new(Vec2::new(2, 1), vec![7, 9], PixelFormat::Gray8);
    let gray = to_gray(&image).unwrap();
    assert_eq!(gray, image);
    assert_ne!(gray.data.as_ptr(), image.data.as_ptr());
}

#[test]
fn test_jpeg_decodes_to_gray() {
    let mut jpeg = Vec::new();
    let src = crates_image::RgbImage::from_fn(8, 6, |_, _| crates_image::Rgb([200, 200, 200]));
    crates_image::codecs::jpeg::JpegEncoder::new(&mut jpeg)
        .write_image(src.as_raw(), 8, 6, crates_image::ExtendedColorType::Rgb8)
        .unwrap();

    // size on a JPEG frame is advisory; the decoded size wins
    let image = Image::new(Vec2::new(0, 0), jpeg, PixelFormat::Jpeg);
    let gray = to_gray(&image).unwrap();

    assert_eq!(gray.size, Vec2::new(8, 6));
    assert_eq!(gray.data.len(), 48);
    assert!(gray.data.iter().all(|&v| (190..=210).contains(&v)));
}

#[test]
fn test_short_buffer_is_rejected() {
    let image = Image::new(Vec2::new(4, 4), vec![0; 10], PixelFormat::Rgb8);
    match to_gray(&image) {
        Err(ImageError::Size { expected, got }) => {
            assert_eq!(expected, 48);
            assert_eq!(got, 10);
        }
        other => panic!("Expected size error, got {:?}", other),
    }
}

#[test]
fn test_corrupt_jpeg_is_decode_error() {
    let image = Image::new(Vec2::new(2, 2), vec![0xFF, 0xD8, 0x00], PixelFormat::Jpeg);
    assert!(matches!(to_gray(&image), Err(ImageError::Decode(_))));
}
