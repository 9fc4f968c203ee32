use std::io::{BufRead, Read};

use crate::error::{DecodeError, FormatError};
use crate::image::Image;

const MAGIC_LINE: &[u8] = b"P6\n";
const SUPPORTED_MAXVAL: u32 = 255;
const CHANNELS: usize = 3;

/// Upper bound on the up-front allocation for the raster.
///
/// The header is untrusted; larger payloads still decode, the buffer just
/// grows as bytes actually arrive.
const PREALLOC_LIMIT: usize = 64 << 20;

/// Decodes a raw-binary PPM (P6) image from `reader`.
///
/// Header layout:
/// - the first line must be exactly `P6`
/// - any number of lines starting with `#` follow
/// - the next line carries `width height`
/// - the next whitespace-delimited token is the max color value (must be 255)
/// - exactly one separator byte, then `width * height * 3` raster bytes
///
/// Bytes after the raster are left unread.
pub fn decode<R: BufRead>(mut reader: R) -> Result<Image, DecodeError> {
    let mut line = Vec::new();

    if reader.read_until(b'\n', &mut line)? == 0 {
        return Err(FormatError::MissingMagic.into());
    }
    if line != MAGIC_LINE {
        return Err(FormatError::BadMagic.into());
    }

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Err(FormatError::MissingDimensions.into());
        }
        if !line.starts_with(b"#") {
            break;
        }
    }

    let (width, height) = parse_dimensions(&line)?;

    let maxval = read_maxval(&mut reader)?;
    if maxval != SUPPORTED_MAXVAL {
        return Err(FormatError::UnsupportedColorDepth(maxval).into());
    }

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(FormatError::TooLarge { width, height })?;

    log::debug!("ppm header: {width}x{height}, maxval {maxval}, {expected} raster bytes");

    if !skip_byte(&mut reader)? {
        return Err(DecodeError::Truncated { expected, actual: 0 });
    }

    let mut pixels = Vec::with_capacity(expected.min(PREALLOC_LIMIT));
    reader
        .by_ref()
        .take(expected as u64)
        .read_to_end(&mut pixels)?;

    if pixels.len() != expected {
        return Err(DecodeError::Truncated {
            expected,
            actual: pixels.len(),
        });
    }

    Ok(Image::from_parts(width, height, pixels))
}

/// Reads `width height` from the first two tokens of the dimension line.
fn parse_dimensions(line: &[u8]) -> Result<(u32, u32), FormatError> {
    let mut tokens = line
        .split(u8::is_ascii_whitespace)
        .filter(|t| !t.is_empty())
        .map(parse_u32);

    let (Some(Some(width)), Some(Some(height))) = (tokens.next(), tokens.next()) else {
        return Err(FormatError::InvalidDimensions);
    };

    if width == 0 || height == 0 {
        return Err(FormatError::ZeroDimension { width, height });
    }

    Ok((width, height))
}

fn parse_u32(token: &[u8]) -> Option<u32> {
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Reads the max color value: leading whitespace (newlines included) is
/// skipped, then a run of ASCII digits is consumed.
fn read_maxval<R: BufRead>(reader: &mut R) -> Result<u32, DecodeError> {
    loop {
        let buf = reader.fill_buf()?;
        match buf.first() {
            Some(b) if b.is_ascii_whitespace() => reader.consume(1),
            _ => break,
        }
    }

    let mut value: u32 = 0;
    let mut digits = 0usize;
    loop {
        let buf = reader.fill_buf()?;
        let Some(&b) = buf.first() else { break };
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u32::from(b - b'0')))
            .ok_or(FormatError::MissingColorDepth)?;
        reader.consume(1);
        digits += 1;
    }

    if digits == 0 {
        return Err(FormatError::MissingColorDepth.into());
    }
    Ok(value)
}

/// Consumes one byte. Returns `false` at end of stream.
fn skip_byte<R: BufRead>(reader: &mut R) -> std::io::Result<bool> {
    let available = !reader.fill_buf()?.is_empty();
    if available {
        reader.consume(1);
    }
    Ok(available)
}

#[cfg(test)]
mod tests {
    use std::io::{BufReader, Cursor, Read};

    use super::*;

    fn ppm(header: &str, raster: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(raster);
        bytes
    }

    fn format_err(bytes: &[u8]) -> FormatError {
        match decode(Cursor::new(bytes)) {
            Err(DecodeError::Format(e)) => e,
            other => panic!("expected format error, got {other:?}"),
        }
    }

    // ── valid input ───────────────────────────────────────────────────────

    #[test]
    fn minimal_two_by_one() {
        let raster = [10, 20, 30, 40, 50, 60];
        let img = decode(Cursor::new(ppm("P6\n2 1\n255\n", &raster))).unwrap();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 1);
        assert_eq!(img.pixels(), &raster);
    }

    #[test]
    fn comments_do_not_change_result() {
        let raster: Vec<u8> = (0..12).collect();
        let plain = decode(Cursor::new(ppm("P6\n2 2\n255\n", &raster))).unwrap();

        for header in [
            "P6\n# one comment\n2 2\n255\n",
            "P6\n#\n# two\n#three\n2 2\n255\n",
            "P6\n#### shouting\n2 2\n255\n",
        ] {
            let commented = decode(Cursor::new(ppm(header, &raster))).unwrap();
            assert_eq!(commented, plain, "header {header:?}");
        }
    }

    #[test]
    fn maxval_on_same_line_as_dimensions_is_not_read_from_that_line() {
        // Tokens after `width height` are ignored; maxval comes from the stream.
        let raster = [1, 2, 3];
        let img = decode(Cursor::new(ppm("P6\n1 1 junk\n255\n", &raster))).unwrap();
        assert_eq!(img.pixels(), &raster);
    }

    #[test]
    fn non_utf8_trailing_token_is_ignored() {
        let mut bytes = b"P6\n1 1 \xff\n255\n".to_vec();
        bytes.extend_from_slice(&[4, 5, 6]);
        let img = decode(Cursor::new(bytes)).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
        assert_eq!(img.pixels(), &[4, 5, 6]);
    }

    #[test]
    fn non_utf8_dimension_token_is_invalid() {
        assert_eq!(format_err(b"P6\n1 \xff\n255\n"), FormatError::InvalidDimensions);
    }

    #[test]
    fn maxval_may_follow_blank_lines() {
        let raster = [9, 8, 7];
        let img = decode(Cursor::new(ppm("P6\n1 1\n\n  255\n", &raster))).unwrap();
        assert_eq!(img.pixels(), &raster);
    }

    #[test]
    fn separator_byte_is_skipped_even_if_not_newline() {
        let raster = [1, 2, 3];
        let img = decode(Cursor::new(ppm("P6\n1 1\n255 ", &raster))).unwrap();
        assert_eq!(img.pixels(), &raster);
    }

    #[test]
    fn raster_bytes_that_look_like_whitespace_are_kept() {
        let raster = [b'\n', b' ', b'\t'];
        let img = decode(Cursor::new(ppm("P6\n1 1\n255\n", &raster))).unwrap();
        assert_eq!(img.pixels(), &raster);
    }

    #[test]
    fn trailing_bytes_are_left_in_reader() {
        let mut bytes = ppm("P6\n1 1\n255\n", &[1, 2, 3]);
        bytes.extend_from_slice(b"tail");

        let mut reader = BufReader::new(Cursor::new(bytes));
        let img = decode(&mut reader).unwrap();
        assert_eq!(img.pixels(), &[1, 2, 3]);

        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"tail");
    }

    #[test]
    fn tiny_buffered_reader_decodes_the_same() {
        let raster: Vec<u8> = (0..27).collect();
        let bytes = ppm("P6\n# c\n3 3\n255\n", &raster);
        let img = decode(BufReader::with_capacity(1, Cursor::new(bytes))).unwrap();
        assert_eq!(img.pixels(), raster.as_slice());
    }

    // ── magic ─────────────────────────────────────────────────────────────

    #[test]
    fn empty_input_is_missing_magic() {
        assert_eq!(format_err(b""), FormatError::MissingMagic);
    }

    #[test]
    fn ascii_ppm_is_rejected() {
        assert_eq!(format_err(b"P3\n1 1\n255\n0 0 0\n"), FormatError::BadMagic);
    }

    #[test]
    fn magic_with_trailing_text_is_rejected() {
        assert_eq!(format_err(b"P6 1 1 255\n\x00\x00\x00"), FormatError::BadMagic);
    }

    #[test]
    fn magic_without_newline_is_rejected() {
        assert_eq!(format_err(b"P6"), FormatError::BadMagic);
    }

    #[test]
    fn crlf_magic_is_rejected() {
        assert_eq!(format_err(b"P6\r\n1 1\r\n255\r\n\x00\x00\x00"), FormatError::BadMagic);
    }

    // ── dimensions ────────────────────────────────────────────────────────

    #[test]
    fn only_comments_after_magic() {
        assert_eq!(format_err(b"P6\n# a\n# b\n"), FormatError::MissingDimensions);
    }

    #[test]
    fn single_dimension_is_rejected() {
        assert_eq!(format_err(b"P6\n4\n255\n"), FormatError::InvalidDimensions);
    }

    #[test]
    fn non_numeric_dimension_is_rejected() {
        assert_eq!(format_err(b"P6\n4 x\n255\n"), FormatError::InvalidDimensions);
    }

    #[test]
    fn negative_dimension_is_rejected() {
        assert_eq!(format_err(b"P6\n-4 4\n255\n"), FormatError::InvalidDimensions);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            format_err(b"P6\n0 5\n255\n"),
            FormatError::ZeroDimension { width: 0, height: 5 }
        );
    }

    // ── color depth ───────────────────────────────────────────────────────

    #[test]
    fn sixteen_bit_depth_is_rejected() {
        let bytes = ppm("P6\n1 1\n65535\n", &[0; 6]);
        assert_eq!(format_err(&bytes), FormatError::UnsupportedColorDepth(65535));
    }

    #[test]
    fn four_bit_depth_is_rejected() {
        let bytes = ppm("P6\n1 1\n15\n", &[0; 3]);
        assert_eq!(format_err(&bytes), FormatError::UnsupportedColorDepth(15));
    }

    #[test]
    fn missing_depth_is_rejected() {
        assert_eq!(format_err(b"P6\n1 1\n"), FormatError::MissingColorDepth);
        assert_eq!(format_err(b"P6\n1 1\nabc\n"), FormatError::MissingColorDepth);
    }

    #[test]
    fn overflowing_depth_is_rejected() {
        assert_eq!(format_err(b"P6\n1 1\n99999999999\n"), FormatError::MissingColorDepth);
    }

    // ── raster length ─────────────────────────────────────────────────────

    #[test]
    fn short_raster_is_truncated() {
        let bytes = ppm("P6\n2 2\n255\n", &[0; 5]);
        match decode(Cursor::new(bytes)) {
            Err(DecodeError::Truncated { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 5);
            }
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn missing_separator_is_truncated() {
        match decode(Cursor::new(b"P6\n1 1\n255".to_vec())) {
            Err(DecodeError::Truncated { expected: 3, actual: 0 }) => {}
            other => panic!("expected truncation, got {other:?}"),
        }
    }

    #[test]
    fn huge_header_with_short_raster_is_truncated() {
        // 60000 x 60000 x 3 bytes would be ~10 GiB if allocated eagerly.
        let bytes = ppm("P6\n60000 60000\n255\n", &[0; 3]);
        assert!(matches!(
            decode(Cursor::new(bytes)),
            Err(DecodeError::Truncated { actual: 3, .. })
        ));
    }
}
