//! Fixed header at the start of every index file

use std::io::{Read, Write};

use super::IndexKind;
use crate::error::PersistenceError;

/// Leading bytes of every index file
pub const MAGIC: [u8; 4] = *b"BIDX";

/// Format version for migrations
///
/// Version 1: bincode 1.x fixed-int little-endian encoding, `Article`
/// fields in declaration order.
pub const FORMAT_VERSION: u32 = 1;

/// Header length in bytes: magic, version, kind tag
pub const HEADER_LEN: usize = 9;

/// Write the header for an index of `kind`
pub fn write_header<W: Write>(writer: &mut W, kind: IndexKind) -> Result<(), PersistenceError> {
    let mut buf = [0u8; HEADER_LEN];
    buf[..4].copy_from_slice(&MAGIC);
    buf[4..8].copy_from_slice(&FORMAT_VERSION.to_le_bytes());
    buf[8] = kind.tag();
    writer.write_all(&buf)?;
    Ok(())
}

/// Read and check the header, expecting an index of `kind`
pub fn read_header<R: Read>(reader: &mut R, kind: IndexKind) -> Result<(), PersistenceError> {
    let mut buf = [0u8; HEADER_LEN];
    reader.read_exact(&mut buf)?;

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[..4]);
    if magic != MAGIC {
        return Err(PersistenceError::BadMagic(magic));
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(&buf[4..8]);
    let version = u32::from_le_bytes(version);
    if version != FORMAT_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            expected: FORMAT_VERSION,
            actual: version,
        });
    }

    if buf[8] != kind.tag() {
        return Err(PersistenceError::WrongKind {
            expected: kind.name(),
            actual: buf[8],
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let mut buf = Vec::new();
        write_header(&mut buf, IndexKind::AuthorIndex).unwrap();
        assert_eq!(buf.len(), HEADER_LEN);
        assert_eq!(&buf[..4], b"BIDX");
        assert_eq!(&buf[4..8], &[1, 0, 0, 0]);
        assert_eq!(buf[8], 2);
    }

    #[test]
    fn test_read_header_accepts_own_output() {
        let mut buf = Vec::new();
        write_header(&mut buf, IndexKind::Records).unwrap();
        assert!(read_header(&mut buf.as_slice(), IndexKind::Records).is_ok());
    }

    #[test]
    fn test_read_header_rejects_bad_magic() {
        let buf = *b"XXXX\x01\x00\x00\x00\x01";
        let err = read_header(&mut buf.as_slice(), IndexKind::Records).unwrap_err();
        assert!(matches!(err, PersistenceError::BadMagic(m) if &m == b"XXXX"));
    }

    #[test]
    fn test_read_header_rejects_other_version() {
        let buf = *b"BIDX\x02\x00\x00\x00\x01";
        let err = read_header(&mut buf.as_slice(), IndexKind::Records).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::UnsupportedVersion {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_read_header_rejects_wrong_kind() {
        let mut buf = Vec::new();
        write_header(&mut buf, IndexKind::AuthorIndex).unwrap();
        let err = read_header(&mut buf.as_slice(), IndexKind::Records).unwrap_err();
        assert!(matches!(err, PersistenceError::WrongKind { actual: 2, .. }));
    }

    #[test]
    fn test_read_header_truncated() {
        let buf = b"BID";
        let err = read_header(&mut buf.as_slice(), IndexKind::Records).unwrap_err();
        assert!(matches!(err, PersistenceError::Io(_)));
    }
}
