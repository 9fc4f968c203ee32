use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::decoder::decode;
use crate::error::DecodeError;

/// A decoded 24-bit image.
///
/// `pixels` is interleaved RGB8, row-major, top row first, without row
/// padding; its length is always `width * height * 3` and both dimensions are
/// non-zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        Self { width, height, pixels }
    }

    /// Opens and decodes the `.ppm` file at `path`.
    ///
    /// Paths whose extension is not `ppm` (ASCII case-insensitive) are
    /// rejected before the file is touched.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        let path = path.as_ref();

        let is_ppm = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));
        if !is_ppm {
            return Err(DecodeError::UnsupportedExtension(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let image = decode(BufReader::new(file))?;

        log::info!(
            "decoded {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        Ok(image)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB8 bytes.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

/// Expands tightly packed RGB8 into RGBA8 with opaque alpha.
///
/// A trailing partial pixel (fewer than 3 bytes) is dropped.
pub fn rgb_to_rgba(rgb: &[u8]) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        rgba.extend_from_slice(&[px[0], px[1], px[2], 0xFF]);
    }
    rgba
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::error::FormatError;

    fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn open_decodes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "pixel.ppm", b"P6\n1 1\n255\n\x01\x02\x03");

        let img = Image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
        assert_eq!(img.into_pixels(), vec![1, 2, 3]);
    }

    #[test]
    fn open_accepts_uppercase_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "PIXEL.PPM", b"P6\n1 1\n255\n\x00\x00\x00");
        assert!(Image::open(&path).is_ok());
    }

    #[test]
    fn open_rejects_other_extensions_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        // Valid content, wrong name: the extension check wins.
        let path = write_file(&dir, "pixel.pgm", b"P6\n1 1\n255\n\x00\x00\x00");
        assert!(matches!(
            Image::open(&path),
            Err(DecodeError::UnsupportedExtension(p)) if p == path
        ));

        // Nonexistent file with the wrong extension never reaches the filesystem.
        assert!(matches!(
            Image::open(dir.path().join("missing.png")),
            Err(DecodeError::UnsupportedExtension(_))
        ));
        assert!(matches!(
            Image::open(dir.path().join("no_extension")),
            Err(DecodeError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn open_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Image::open(dir.path().join("missing.ppm")),
            Err(DecodeError::Io(_))
        ));
    }

    #[test]
    fn open_surfaces_format_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "ascii.ppm", b"P3\n1 1\n255\n0 0 0\n");
        assert!(matches!(
            Image::open(&path),
            Err(DecodeError::Format(FormatError::BadMagic))
        ));
    }

    #[test]
    fn rgba_expansion_appends_opaque_alpha() {
        assert_eq!(
            rgb_to_rgba(&[1, 2, 3, 4, 5, 6]),
            vec![1, 2, 3, 255, 4, 5, 6, 255]
        );
    }

    #[test]
    fn rgba_expansion_drops_partial_pixel() {
        assert_eq!(rgb_to_rgba(&[1, 2, 3, 4]), vec![1, 2, 3, 255]);
        assert!(rgb_to_rgba(&[]).is_empty());
    }
}
