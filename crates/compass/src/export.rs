//! PNG Export
//!
//! Serializes a rendered compass surface into a PNG artifact, either as
//! in-memory bytes or written straight to a named file. The export always
//! uses the fixed render resolution, never a display snapshot.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::CompassResult;

/// Default name for the delivered artifact
pub const DEFAULT_EXPORT_FILENAME: &str = "pragvalues-result.png";

/// Encode a rendered surface as PNG bytes
pub fn to_png_bytes(image: &RgbImage) -> CompassResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode a rendered surface as PNG and write it to `path`
pub fn save_png(image: &RgbImage, path: &Path) -> CompassResult<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use pragvalues_core::AxisScore;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn rendered() -> RgbImage {
        render::render(
            AxisScore::new(25).unwrap(),
            AxisScore::new(25).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_png_bytes_signature() {
        let bytes = to_png_bytes(&rendered()).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len());
        assert_eq!(bytes[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);
        save_png(&rendered(), &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written[..8], PNG_SIGNATURE);
    }

    #[test]
    fn test_save_png_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.png");
        assert!(save_png(&rendered(), &path).is_err());
    }
}
