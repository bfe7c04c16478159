//! Binary dump format for grid volumes
//!
//! Layout (all integers little-endian):
//!
//! | bytes | content                                   |
//! |-------|-------------------------------------------|
//! | 4     | magic `LMAZ`                              |
//! | 1     | format version (1)                        |
//! | 12    | columns, rows, layers as `u32`            |
//! | n     | one byte (0/1) per cell, `[c][r][l]` order |
//! | 32    | SHA-256 of everything above               |

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{MazeError, Result};
use crate::grid::volume::GridVolume;

/// File magic for volume dumps
pub const DUMP_MAGIC: &[u8; 4] = b"LMAZ";

/// Current dump format version
pub const DUMP_VERSION: u8 = 1;

const HEADER_LEN: usize = 4 + 1 + 12;
const DIGEST_LEN: usize = 32;

/// Encode a volume into its dump bytes
pub fn encode_volume(volume: &GridVolume) -> Result<Vec<u8>> {
    let (columns, rows, layers) = volume.shape();
    let mut out = Vec::with_capacity(HEADER_LEN + volume.as_bytes().len() + DIGEST_LEN);
    out.extend_from_slice(DUMP_MAGIC);
    out.push(DUMP_VERSION);
    for dim in [columns, rows, layers] {
        let dim = u32::try_from(dim).map_err(|_| MazeError::InvalidDimension {
            reason: format!("dimension {} does not fit the dump header", dim),
        })?;
        out.extend_from_slice(&dim.to_le_bytes());
    }
    out.extend_from_slice(volume.as_bytes());

    let digest = Sha256::digest(&out);
    out.extend_from_slice(&digest);
    Ok(out)
}

/// Decode dump bytes back into a volume
///
/// # Errors
/// `CorruptDump` on bad magic, unknown version, truncated or trailing data,
/// a checksum mismatch, zero dimensions, or non-binary cell values.
pub fn decode_volume(bytes: &[u8]) -> Result<GridVolume> {
    if bytes.len() < HEADER_LEN + DIGEST_LEN {
        return Err(corrupt(format!("dump is only {} bytes", bytes.len())));
    }
    if &bytes[..4] != DUMP_MAGIC {
        return Err(corrupt("bad magic"));
    }
    if bytes[4] != DUMP_VERSION {
        return Err(corrupt(format!("unsupported version {}", bytes[4])));
    }

    let (body, digest) = bytes.split_at(bytes.len() - DIGEST_LEN);
    if Sha256::digest(body).as_slice() != digest {
        return Err(corrupt("checksum mismatch"));
    }

    let columns = read_u32(&body[5..9]) as usize;
    let rows = read_u32(&body[9..13]) as usize;
    let layers = read_u32(&body[13..17]) as usize;
    let cells = &body[HEADER_LEN..];

    if columns == 0 || rows == 0 || layers == 0 {
        return Err(corrupt(format!(
            "zero dimension in header {}x{}x{}",
            columns, rows, layers
        )));
    }

    let expected = columns
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(layers))
        .ok_or_else(|| corrupt("header dimensions overflow"))?;
    if cells.len() != expected {
        return Err(corrupt(format!(
            "expected {} cell bytes for {}x{}x{}, found {}",
            expected,
            columns,
            rows,
            layers,
            cells.len()
        )));
    }

    GridVolume::from_raw(columns, rows, layers, cells.to_vec()).map_err(|e| match e {
        MazeError::CorruptDump { .. } => e,
        other => corrupt(other.to_string()),
    })
}

/// Write a volume dump to any writer
pub fn write_volume<W: Write>(writer: &mut W, volume: &GridVolume) -> Result<()> {
    writer.write_all(&encode_volume(volume)?)?;
    writer.flush()?;
    Ok(())
}

/// Read a volume dump from any reader
pub fn read_volume<R: Read>(reader: &mut R) -> Result<GridVolume> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_volume(&bytes)
}

/// Save a volume dump to a file
pub fn save_volume(path: &Path, volume: &GridVolume) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_volume(&mut writer, volume)
}

/// Load a volume dump from a file
pub fn load_volume(path: &Path) -> Result<GridVolume> {
    let mut reader = BufReader::new(File::open(path)?);
    read_volume(&mut reader)
}

fn read_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_le_bytes(buf)
}

fn corrupt(reason: impl Into<String>) -> MazeError {
    MazeError::CorruptDump {
        reason: reason.into(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Point;
    use tempfile::tempdir;

    fn sample_volume() -> GridVolume {
        GridVolume::from_points(
            3,
            2,
            4,
            [Point::new(0, 0, 0), Point::new(2, 1, 3), Point::new(1, 1, 2)],
        )
        .unwrap()
    }

    #[test]
    fn test_header_layout() {
        let bytes = encode_volume(&sample_volume()).unwrap();
        assert_eq!(&bytes[..4], b"LMAZ");
        assert_eq!(bytes[4], DUMP_VERSION);
        assert_eq!(read_u32(&bytes[5..9]), 3);
        assert_eq!(read_u32(&bytes[9..13]), 2);
        assert_eq!(read_u32(&bytes[13..17]), 4);
        assert_eq!(bytes.len(), HEADER_LEN + 24 + DIGEST_LEN);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("maze.lmz");
        let volume = sample_volume();

        save_volume(&path, &volume).unwrap();
        let loaded = load_volume(&path).unwrap();

        assert_eq!(loaded, volume);
    }

    #[test]
    fn test_flipped_cell_fails_checksum() {
        let mut bytes = encode_volume(&sample_volume()).unwrap();
        bytes[HEADER_LEN + 1] ^= 1;
        let err = decode_volume(&bytes).unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = encode_volume(&sample_volume()).unwrap();
        bytes[0] = b'X';
        assert_eq!(decode_volume(&bytes).unwrap_err().error_code(), "CORRUPT_DUMP");
    }

    #[test]
    fn test_truncated_dump() {
        let bytes = encode_volume(&sample_volume()).unwrap();
        assert!(decode_volume(&bytes[..10]).is_err());
        assert!(decode_volume(&bytes[..bytes.len() - 1]).is_err());
    }

    /// Assemble a dump with a valid checksum from raw parts
    fn signed_dump(version: u8, dims: [u32; 3], cells: &[u8]) -> Vec<u8> {
        let mut bytes = DUMP_MAGIC.to_vec();
        bytes.push(version);
        for dim in dims {
            bytes.extend_from_slice(&dim.to_le_bytes());
        }
        bytes.extend_from_slice(cells);
        let digest = Sha256::digest(&bytes);
        bytes.extend_from_slice(&digest);
        bytes
    }

    #[test]
    fn test_signed_dump_decodes() {
        let volume = decode_volume(&signed_dump(DUMP_VERSION, [1, 1, 2], &[0, 1])).unwrap();
        assert_eq!(volume.count_occupied(), 1);
    }

    #[test]
    fn test_zero_dimension_is_corrupt() {
        let err = decode_volume(&signed_dump(DUMP_VERSION, [0, 3, 3], &[])).unwrap_err();
        assert_eq!(err.error_code(), "CORRUPT_DUMP");
        assert!(err.to_string().contains("zero dimension"));
    }

    #[test]
    fn test_non_binary_cell_is_corrupt() {
        let err = decode_volume(&signed_dump(DUMP_VERSION, [1, 1, 2], &[1, 7])).unwrap_err();
        assert_eq!(err.error_code(), "CORRUPT_DUMP");
    }

    #[test]
    fn test_unknown_version_is_corrupt() {
        let err = decode_volume(&signed_dump(DUMP_VERSION + 1, [1, 1, 1], &[1])).unwrap_err();
        assert_eq!(err.error_code(), "CORRUPT_DUMP");
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_volume(&dir.path().join("absent.lmz")).unwrap_err();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
