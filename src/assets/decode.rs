use std::path::Path;

use crate::assets::sample::ImageSample;
use crate::foundation::error::{FieldError, FieldResult};

/// Decode encoded image bytes (any format the `image` crate reads) into RGB8 samples.
///
/// Alpha is dropped, not composited.
pub fn decode_image(bytes: &[u8]) -> FieldResult<ImageSample> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| FieldError::resource_load(format!("decode image from memory: {e}")))?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    ImageSample::from_raw(width, height, rgb.into_raw())
}

/// Read and decode the image at `path`.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_image(path: impl AsRef<Path>) -> FieldResult<ImageSample> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        FieldError::resource_load(format!("read image '{}': {e}", path.display()))
    })?;
    let img = decode_image(&bytes).map_err(|e| match e {
        FieldError::ResourceLoad(msg) => {
            FieldError::resource_load(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })?;
    tracing::debug!(width = img.width(), height = img.height(), "decoded source image");
    Ok(img)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
