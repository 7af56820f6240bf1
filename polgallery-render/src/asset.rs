//! Loading gallery images from the asset root.
//!
//! Asset paths follow `{folder}/{spin}_{field}_{angle}.png`; nothing checks
//! that the files exist until they are decoded.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::debug;

use polgallery_core::ImageRecord;

use crate::error::RenderError;

/// A decoded RGBA8 image ready for upload as a texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data, 4 bytes per pixel, row-major order.
    pub pixels: Vec<u8>,
}

/// Resolve a catalog `src` (always `/`-separated) against the asset root.
pub fn resolve(root: &Path, src: &str) -> PathBuf {
    src.split('/')
        .filter(|part| !part.is_empty())
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// Decode a PNG file, expanding any color type and bit depth to RGBA8.
pub fn decode_png(path: &Path) -> crate::Result<RgbaImage> {
    let file = File::open(path).map_err(|source| RenderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_err = |source| RenderError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(decode_err)?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    buf.truncate(info.buffer_size());

    let pixels = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|px| [px[0], px[1], px[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0], px[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        color => {
            return Err(RenderError::UnsupportedColor {
                path: path.to_path_buf(),
                color,
            })
        }
    };

    debug!("Decoded {}x{} {}", info.width, info.height, path.display());
    Ok(RgbaImage {
        width: info.width,
        height: info.height,
        pixels,
    })
}

/// One image to load, keyed by catalog id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub id: String,
    pub path: PathBuf,
}

impl AssetRequest {
    pub fn for_record(root: &Path, record: &ImageRecord) -> Self {
        Self {
            id: record.id.clone(),
            path: resolve(root, &record.src),
        }
    }
}

/// Decode a batch in parallel. Results come back in request order.
pub fn decode_batch(requests: &[AssetRequest]) -> Vec<(String, crate::Result<RgbaImage>)> {
    requests
        .par_iter()
        .map(|req| (req.id.clone(), decode_png(&req.path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_components() {
        let path = resolve(Path::new("assets"), "lp/0.9_MAD_30.png");
        assert_eq!(path, Path::new("assets").join("lp").join("0.9_MAD_30.png"));
    }

    #[test]
    fn request_for_record_uses_src() {
        let catalog = polgallery_core::Catalog::standard();
        let record = catalog.get("evpa-0-SANE-90").unwrap();
        let req = AssetRequest::for_record(Path::new("/data"), record);
        assert_eq!(req.id, "evpa-0-SANE-90");
        assert_eq!(req.path, Path::new("/data").join("evpa").join("0_SANE_90.png"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = decode_png(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }
}
