//! The resampling capability behind the workflow.

use std::io::Cursor;
use image::imageops::FilterType;
use image::{DynamicImage, ImageDecoder, ImageFormat, ImageReader};
use tracing::debug;
use crate::utils::{ResizeError, ResizeResult};

/// Resizes encoded image bytes to an exact pixel size.
///
/// Implementations return bytes in the same container format as the input.
pub trait Resampler: Send + Sync {
    fn resample(&self, bytes: &[u8], width: u32, height: u32) -> ResizeResult<Vec<u8>>;
}

/// Memory a single resize may use for its working buffers.
pub const RESAMPLE_BUDGET_BYTES: u64 = 1 << 30;

/// The separable filter keeps one RGBA f32 pass buffer plus the output.
const WORKING_BYTES_PER_PIXEL: u64 = 16;

/// [`Resampler`] backed by the `image` crate.
///
/// Applies the EXIF orientation of the source, then stretches to the exact
/// target size (no aspect preservation) and will upscale when asked to.
#[derive(Debug, Clone, Copy)]
pub struct ImageResampler {
    filter: FilterType,
}

impl Default for ImageResampler {
    fn default() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }
}

impl ImageResampler {
    pub fn with_filter(filter: FilterType) -> Self {
        Self { filter }
    }
}

impl Resampler for ImageResampler {
    fn resample(&self, bytes: &[u8], width: u32, height: u32) -> ResizeResult<Vec<u8>> {
        let format = image::guess_format(bytes)
            .map_err(|e| ResizeError::resample(format!("Unrecognized image data: {e}")))?;
        let source = decode_oriented(bytes, format)?;
        check_budget(&source, width, height)?;

        debug!(
            "Resampling {:?} {}x{} -> {}x{}",
            format,
            source.width(),
            source.height(),
            width,
            height
        );

        let resized = source.resize_exact(width, height, self.filter);
        encode(resized, format)
    }
}

/// Decodes with the format's default limits and rotates/flips upright.
fn decode_oriented(bytes: &[u8], format: ImageFormat) -> ResizeResult<DynamicImage> {
    let mut decoder = ImageReader::with_format(Cursor::new(bytes), format).into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(orientation);
    Ok(image)
}

/// Refuses resizes whose working buffers would exceed [`RESAMPLE_BUDGET_BYTES`].
///
/// A failed allocation aborts the process, so this has to happen up front.
fn check_budget(source: &DynamicImage, width: u32, height: u32) -> ResizeResult<()> {
    let pass = u64::from(source.width()) * u64::from(height);
    let output = u64::from(width) * u64::from(height);
    if (pass + output) * WORKING_BYTES_PER_PIXEL > RESAMPLE_BUDGET_BYTES {
        return Err(ResizeError::TooLarge { width, height });
    }
    Ok(())
}

/// Encodes in `format`, converting the pixel layout to one its encoder accepts.
fn encode(image: DynamicImage, format: ImageFormat) -> ResizeResult<Vec<u8>> {
    let image = match format {
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
        ImageFormat::Png => image,
        _ => DynamicImage::ImageRgba8(image.to_rgba8()),
    };

    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format)?;
    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn encoded(image: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).expect("encode fixture");
        buffer.into_inner()
    }

    #[test]
    fn png_is_resized_to_exact_dimensions() {
        let source = encoded(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 6, Rgba([10, 20, 30, 255]))),
            ImageFormat::Png,
        );

        let out = ImageResampler::default().resample(&source, 3, 5).expect("resample");

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&out).expect("decode output");
        assert_eq!((decoded.width(), decoded.height()), (3, 5));
    }

    #[test]
    fn jpeg_stays_jpeg_and_can_upscale() {
        let source = encoded(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([200, 100, 50]))),
            ImageFormat::Jpeg,
        );

        let out = ImageResampler::with_filter(FilterType::Triangle)
            .resample(&source, 16, 12)
            .expect("resample");

        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&out).expect("decode output");
        assert_eq!((decoded.width(), decoded.height()), (16, 12));
    }

    #[test]
    fn rgba_bmp_round_trips_through_encoder() {
        let source = encoded(
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(5, 5, Rgba([0, 0, 0, 128]))),
            ImageFormat::Bmp,
        );

        let out = ImageResampler::default().resample(&source, 2, 2).expect("resample");
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Bmp);
    }

    #[test]
    fn unrecognized_bytes_fail() {
        let err = ImageResampler::default()
            .resample(b"definitely not an image", 10, 10)
            .unwrap_err();
        assert!(matches!(err, ResizeError::Resample(_)));
    }

    #[test]
    fn truncated_image_fails() {
        let mut source = encoded(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 32, Rgb([1, 2, 3]))),
            ImageFormat::Png,
        );
        source.truncate(40);

        let err = ImageResampler::default().resample(&source, 10, 10).unwrap_err();
        assert!(matches!(err, ResizeError::Resample(_)));
    }

    #[test]
    fn oversized_target_is_refused_before_allocating() {
        let source = encoded(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(20_000, 1, Rgb([9, 9, 9]))),
            ImageFormat::Png,
        );

        let err = ImageResampler::default().resample(&source, 1, 16_384).unwrap_err();
        assert!(matches!(err, ResizeError::TooLarge { width: 1, height: 16_384 }));

        let err = ImageResampler::default().resample(&source, 65_535, 65_535).unwrap_err();
        assert!(matches!(err, ResizeError::TooLarge { .. }));
    }

    /// Splices an EXIF APP1 segment carrying only an orientation tag after SOI.
    fn with_exif_orientation(jpeg: Vec<u8>, orientation: u16) -> Vec<u8> {
        let mut tiff = vec![b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08];
        tiff.extend_from_slice(&1u16.to_be_bytes());
        tiff.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        tiff.extend_from_slice(&orientation.to_be_bytes());
        tiff.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);

        let mut payload = b"Exif\0\0".to_vec();
        payload.extend_from_slice(&tiff);

        let mut out = jpeg[..2].to_vec();
        out.extend_from_slice(&[0xFF, 0xE1]);
        out.extend_from_slice(&(payload.len() as u16 + 2).to_be_bytes());
        out.extend_from_slice(&payload);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    fn is_red(pixel: Rgb<u8>) -> bool {
        pixel[0] > 150 && pixel[2] < 100
    }

    fn is_blue(pixel: Rgb<u8>) -> bool {
        pixel[2] > 150 && pixel[0] < 100
    }

    #[test]
    fn exif_rotation_is_applied_before_resizing() {
        // Stored landscape: left half red, right half blue.
        let stored = RgbImage::from_fn(32, 16, |x, _| {
            if x < 16 { Rgb([220, 20, 20]) } else { Rgb([20, 20, 220]) }
        });
        let jpeg = encoded(DynamicImage::ImageRgb8(stored), ImageFormat::Jpeg);
        // 6 = rotate 90 degrees clockwise for display.
        let source = with_exif_orientation(jpeg, 6);

        let out = ImageResampler::default().resample(&source, 16, 32).expect("resample");
        let upright = image::load_from_memory(&out).expect("decode output").to_rgb8();

        // Upright portrait: red on top, blue at the bottom, across the full width.
        assert!(is_red(*upright.get_pixel(2, 4)));
        assert!(is_red(*upright.get_pixel(13, 4)));
        assert!(is_blue(*upright.get_pixel(2, 27)));
        assert!(is_blue(*upright.get_pixel(13, 27)));
    }
}
