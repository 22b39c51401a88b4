//! Encoded image generators.
//!
//! Each generator renders a small gradient so the encoded output is not
//! trivially uniform, then encodes it with the `image` crate.

use std::io::Cursor;

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

fn gradient(width: u32, height: u32) -> DynamicImage {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    DynamicImage::ImageRgb8(img)
}

fn encode(width: u32, height: u32, format: ImageOutputFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    gradient(width, height)
        .write_to(&mut buf, format)
        .expect("encoding a generated image should not fail");
    buf.into_inner()
}

/// PNG bytes of a `width` x `height` image.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageOutputFormat::Png)
}

/// JPEG bytes of a `width` x `height` image.
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageOutputFormat::Jpeg(85))
}

/// GIF bytes of a `width` x `height` image.
pub fn gif_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageOutputFormat::Gif)
}

/// BMP bytes of a `width` x `height` image.
pub fn bmp_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageOutputFormat::Bmp)
}
