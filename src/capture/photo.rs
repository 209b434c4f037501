//! Simulated camera capture and the gallery upload path
//!
//! The shutter never touches a real camera: it produces a generated
//! placeholder frame. The gallery path is real as far as it goes: a native
//! file picker, an async read, and a decode check before the bytes are
//! accepted as the sighting photo.

use iced::widget::image::Handle;
use thiserror::Error;

/// Placeholder frame dimensions (portrait, like a phone viewfinder)
const PLACEHOLDER_WIDTH: u32 = 400;
const PLACEHOLDER_HEIGHT: u32 = 600;

/// Extensions offered by the gallery picker, the `accept image/*` of the UI
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// What can go wrong on the gallery path
#[derive(Debug, Clone, Error)]
pub enum PhotoError {
    #[error("failed to read image file: {0}")]
    Read(String),
    #[error("unsupported or corrupt image: {0}")]
    Decode(String),
}

/// A gallery image accepted into the session
#[derive(Debug, Clone)]
pub struct LoadedPhoto {
    pub handle: Handle,
    pub file_name: String,
}

/// Produce the simulated capture frame: a deep-ocean vertical gradient,
/// standing in for whatever the camera saw
pub fn placeholder_photo() -> Handle {
    Handle::from_rgba(
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT,
        gradient_pixels(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT),
    )
}

/// RGBA pixels fading top to bottom between two ocean blues
fn gradient_pixels(width: u32, height: u32) -> Vec<u8> {
    // Deep blue at the top, lighter blue at the bottom
    let top: [f32; 3] = [30.0, 58.0, 138.0];
    let bottom: [f32; 3] = [29.0, 78.0, 216.0];

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        let t = y as f32 / (height - 1).max(1) as f32;
        let r = (top[0] + (bottom[0] - top[0]) * t) as u8;
        let g = (top[1] + (bottom[1] - top[1]) * t) as u8;
        let b = (top[2] + (bottom[2] - top[2]) * t) as u8;
        for _ in 0..width {
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    pixels
}

/// Open the native picker and load the chosen image into memory.
///
/// Returns `Ok(None)` when the user cancels the dialog. Read or decode
/// failures are reported so the UI can show a status line; the flow
/// itself is unaffected.
pub async fn pick_gallery_photo() -> Result<Option<LoadedPhoto>, PhotoError> {
    let picked = rfd::AsyncFileDialog::new()
        .set_title("Choose a sighting photo")
        .add_filter("Images", &IMAGE_EXTENSIONS[..])
        .pick_file()
        .await;

    let Some(file) = picked else {
        return Ok(None);
    };

    let file_name = file.file_name();
    let bytes = tokio::fs::read(file.path())
        .await
        .map_err(|e| PhotoError::Read(e.to_string()))?;

    let (width, height) = decode_validate(&bytes)?;
    println!("🖼️  Loaded gallery photo {} ({}x{})", file_name, width, height);

    Ok(Some(LoadedPhoto {
        handle: Handle::from_bytes(bytes),
        file_name,
    }))
}

/// Reject files that are not actually images before they enter the session
fn decode_validate(bytes: &[u8]) -> Result<(u32, u32), PhotoError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| PhotoError::Decode(e.to_string()))?;
    Ok((decoded.width(), decoded.height()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, ImageFormat, Rgba};
    use std::io::Cursor;

    #[test]
    fn test_gradient_covers_frame_opaquely() {
        let pixels = gradient_pixels(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT);
        assert_eq!(
            pixels.len(),
            (PLACEHOLDER_WIDTH * PLACEHOLDER_HEIGHT * 4) as usize
        );
        // Every pixel fully opaque
        assert!(pixels.chunks_exact(4).all(|px| px[3] == 255));
        // Darker at the top than at the bottom
        let top_blue = pixels[2];
        let bottom_blue = pixels[pixels.len() - 2];
        assert!(top_blue < bottom_blue);
    }

    #[test]
    fn test_decode_validate_accepts_png() {
        let img = ImageBuffer::from_pixel(8, 4, Rgba::<u8>([10, 120, 200, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        let (width, height) = decode_validate(&bytes).unwrap();
        assert_eq!((width, height), (8, 4));
    }

    #[test]
    fn test_decode_validate_rejects_garbage() {
        let err = decode_validate(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PhotoError::Decode(_)));
    }
}
