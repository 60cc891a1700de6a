use std::fs;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::Value;

/// Minimal PNG bytes with the given dimensions: signature, IHDR, an empty
/// IDAT, and IEND. Dimension probing reads the IHDR and stops at IDAT; the
/// chunk CRCs are never checked.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(57);
    bytes.extend_from_slice(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

    bytes.extend_from_slice(&13u32.to_be_bytes());
    bytes.extend_from_slice(b"IHDR");
    bytes.extend_from_slice(&width.to_be_bytes());
    bytes.extend_from_slice(&height.to_be_bytes());
    bytes.extend_from_slice(&[8, 6, 0, 0, 0]);
    bytes.extend_from_slice(&[0, 0, 0, 0]);

    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(b"IDAT");
    bytes.extend_from_slice(&[0, 0, 0, 0]);

    bytes.extend_from_slice(&0u32.to_be_bytes());
    bytes.extend_from_slice(b"IEND");
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes
}

pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, png_bytes(width, height)).expect("write png file");
}

/// Decompresses an archive's META file to its JSON text.
pub fn read_meta_text(archive_dir: &Path) -> String {
    let compressed = fs::read(archive_dir.join("META")).expect("read META");
    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut json = String::new();
    decoder.read_to_string(&mut json).expect("decompress META");
    json
}

/// Decompresses and parses an archive's META envelope.
pub fn read_meta(archive_dir: &Path) -> Value {
    serde_json::from_str(&read_meta_text(archive_dir)).expect("parse META JSON")
}
