//! Container duration probe.
//!
//! Reads ISO BMFF (MP4/MOV/M4V) box headers to find `moov/mvhd` and
//! returns its duration. Only headers are read; sample data is skipped.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use super::element::is_valid_duration;

const MOOV: [u8; 4] = *b"moov";
const MVHD: [u8; 4] = *b"mvhd";

/// Guard against malformed files with endless tiny boxes.
const MAX_BOXES: usize = 4096;

/// A box header: type, payload start, and end offset (`None` = to EOF).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxHeader {
    box_type: [u8; 4],
    content_offset: u64,
    end_offset: Option<u64>,
}

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u64<R: Read>(reader: &mut R) -> io::Result<u64> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    Ok(u64::from_be_bytes(buf))
}

/// Read the header at the current position. Returns `None` at EOF.
fn read_box_header<R: Read + Seek>(reader: &mut R) -> io::Result<Option<BoxHeader>> {
    let offset = reader.stream_position()?;

    let size32 = match read_u32(reader) {
        Ok(v) => v,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut box_type = [0u8; 4];
    reader.read_exact(&mut box_type)?;

    let (size, header_size) = match size32 {
        0 => (None, 8u64),
        1 => (Some(read_u64(reader)?), 16u64),
        n => (Some(n as u64), 8u64),
    };

    if let Some(size) = size {
        if size < header_size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("box at offset {} has invalid size {}", offset, size),
            ));
        }
    }

    let end_offset = match size {
        Some(size) => Some(offset.checked_add(size).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("box at offset {} extends past the addressable range", offset),
            )
        })?),
        None => None,
    };

    Ok(Some(BoxHeader {
        box_type,
        content_offset: offset + header_size,
        end_offset,
    }))
}

/// Parse an mvhd payload into seconds. Reader must be at content start.
fn parse_mvhd<R: Read>(reader: &mut R) -> io::Result<Option<f64>> {
    let mut version_flags = [0u8; 4];
    reader.read_exact(&mut version_flags)?;

    let (timescale, duration) = if version_flags[0] == 1 {
        let _creation_time = read_u64(reader)?;
        let _modification_time = read_u64(reader)?;
        (read_u32(reader)?, read_u64(reader)?)
    } else {
        let _creation_time = read_u32(reader)?;
        let _modification_time = read_u32(reader)?;
        (read_u32(reader)?, read_u32(reader)? as u64)
    };

    tracing::trace!(timescale, duration, "mvhd");

    // A zero duration (e.g. fragmented files) tells us nothing
    if timescale == 0 || duration == 0 {
        return Ok(None);
    }
    let seconds = duration as f64 / timescale as f64;
    if !is_valid_duration(seconds) {
        tracing::debug!(seconds, "Ignoring implausible mvhd duration");
        return Ok(None);
    }
    Ok(Some(seconds))
}

/// Scan boxes from the current position up to `end` for `wanted`.
fn find_box<R: Read + Seek>(
    reader: &mut R,
    wanted: [u8; 4],
    end: Option<u64>,
) -> io::Result<Option<BoxHeader>> {
    for _ in 0..MAX_BOXES {
        if let Some(end) = end {
            if reader.stream_position()? >= end {
                return Ok(None);
            }
        }
        let Some(header) = read_box_header(reader)? else {
            return Ok(None);
        };
        if header.box_type == wanted {
            return Ok(Some(header));
        }
        match header.end_offset {
            Some(next) => {
                reader.seek(SeekFrom::Start(next))?;
            }
            None => return Ok(None),
        }
    }
    Ok(None)
}

/// Duration in seconds from an ISO BMFF stream, if it declares one.
pub fn probe_reader<R: Read + Seek>(reader: &mut R) -> io::Result<Option<f64>> {
    reader.seek(SeekFrom::Start(0))?;
    let Some(moov) = find_box(reader, MOOV, None)? else {
        return Ok(None);
    };
    reader.seek(SeekFrom::Start(moov.content_offset))?;
    match find_box(reader, MVHD, moov.end_offset)? {
        Some(_) => parse_mvhd(reader),
        None => Ok(None),
    }
}

/// Duration in seconds of the media file at `path`.
///
/// Returns `None` for unreadable files and for containers this probe does
/// not understand.
pub fn probe_duration(path: &Path) -> Option<f64> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Cannot open media for probing");
            return None;
        }
    };
    match probe_reader(&mut BufReader::new(file)) {
        Ok(duration) => {
            tracing::debug!(path = %path.display(), ?duration, "Probed media duration");
            duration
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Media probe failed");
            None
        }
    }
}
