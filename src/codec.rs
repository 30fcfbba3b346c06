use bytemuck::{cast_slice, cast_slice_mut};
use std::fs::{self, File};
use std::io::{BufWriter, Error, ErrorKind, Result, Write};
use std::path::{Path, PathBuf};

/// On-disk representation of a vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// One `{:08x}` value per line, newline-terminated.
    Hex,
    /// Raw native-endian 32-bit words.
    Binary,
}

impl Format {
    pub fn from_binary_flag(binary: bool) -> Self {
        if binary {
            Format::Binary
        } else {
            Format::Hex
        }
    }

    /// Maps a vector's file name to the path used for this format.
    pub fn path_in(self, dir: &Path, file_name: &str) -> PathBuf {
        let path = dir.join(file_name);

        match self {
            Format::Hex => path,
            Format::Binary => path.with_extension("bin"),
        }
    }

    /// Path of the pool a pooled vector was resampled from, next to the
    /// vector itself (`head_info.txt` keeps its pool in `head_info_pool.txt`).
    pub fn pool_path_in(self, dir: &Path, file_name: &str) -> PathBuf {
        let stem = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name);

        self.path_in(dir, &format!("{}_pool.txt", stem))
    }
}

pub fn encode<W: Write>(values: &[u32], format: Format, out: &mut W) -> Result<()> {
    match format {
        Format::Hex => {
            for value in values {
                writeln!(out, "{:08x}", value)?;
            }

            Ok(())
        }
        Format::Binary => out.write_all(cast_slice(values)),
    }
}

pub fn decode(bytes: &[u8], format: Format) -> Result<Vec<u32>> {
    match format {
        Format::Hex => decode_hex(bytes),
        Format::Binary => decode_binary(bytes),
    }
}

fn invalid(message: String) -> Error {
    Error::new(ErrorKind::InvalidData, message)
}

fn decode_hex(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.is_empty() {
        return Ok(vec![]);
    }

    let body = match bytes.split_last() {
        Some((b'\n', body)) => body,
        _ => return Err(invalid("missing newline after last value".to_string())),
    };

    body.split(|&byte| byte == b'\n')
        .enumerate()
        .map(|(index, line)| {
            parse_hex_word(line).ok_or_else(|| {
                invalid(format!(
                    "line {}: expected 8 lowercase hex digits, found {:?}",
                    index + 1,
                    String::from_utf8_lossy(line)
                ))
            })
        })
        .collect()
}

/// Parses exactly 8 lowercase hex digits.
fn parse_hex_word(line: &[u8]) -> Option<u32> {
    if line.len() != 8 {
        return None;
    }

    line.iter().try_fold(0u32, |acc, &byte| {
        let nibble = match byte {
            b'0'..=b'9' => byte - b'0',
            b'a'..=b'f' => byte - b'a' + 10,
            _ => return None,
        };

        Some((acc << 4) | u32::from(nibble))
    })
}

fn decode_binary(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(invalid(format!(
            "length {} is not a whole number of 32-bit words",
            bytes.len()
        )));
    }

    let mut values = vec![0u32; bytes.len() / 4];
    cast_slice_mut(&mut values).copy_from_slice(bytes);

    Ok(values)
}

/// Writes `values` to `path`, flushing before the file is closed.
pub fn write_file<P: AsRef<Path>>(path: P, values: &[u32], format: Format) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    encode(values, format, &mut out)?;
    out.flush()
}

pub fn read_file<P: AsRef<Path>>(path: P, format: Format) -> Result<Vec<u32>> {
    decode(&fs::read(path)?, format)
}
