//! Binary container format for packed animations.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::sequence::{AnimationSequence, SequenceBuilder};
use crate::codec::{GEOMETRY, Geometry, PackedFrame, WORDS_PER_FRAME};

/// Magic bytes identifying a matrix animation container.
pub const ANIMATION_MAGIC: &[u8; 4] = b"LMXA";

/// Current format version.
pub const ANIMATION_VERSION: u16 = 1;

fn invalid(msg: impl Into<String>) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg.into())
}

fn read_u16<R: Read>(r: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn read_u32<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Container header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationHeader {
    /// Geometry the frames were packed with.
    pub geometry: Geometry,
    /// Total number of frames.
    pub frame_count: u32,
    /// Reserved, written as zero.
    pub flags: u16,
}

impl AnimationHeader {
    /// Size of header in bytes.
    /// Magic(4) + Version(2) + Flags(2) + Rows(2) + Cols(2) + WordBits(2) +
    /// WordsPerFrame(2) + FrameCount(4) + Reserved(4) = 24
    pub const SIZE: usize = 24;

    pub fn new(frame_count: u32) -> Self {
        Self {
            geometry: GEOMETRY,
            frame_count,
            flags: 0,
        }
    }

    /// Write header to output.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let dim = |v: usize| {
            u16::try_from(v).map_err(|_| invalid(format!("Dimension {} does not fit u16", v)))
        };

        w.write_all(ANIMATION_MAGIC)?;
        w.write_all(&ANIMATION_VERSION.to_le_bytes())?;
        w.write_all(&self.flags.to_le_bytes())?;
        w.write_all(&dim(self.geometry.rows)?.to_le_bytes())?;
        w.write_all(&dim(self.geometry.cols)?.to_le_bytes())?;
        w.write_all(&dim(self.geometry.word_bits)?.to_le_bytes())?;
        w.write_all(&dim(self.geometry.words_per_frame)?.to_le_bytes())?;
        w.write_all(&self.frame_count.to_le_bytes())?;
        // Reserved bytes
        w.write_all(&[0u8; 4])?;
        Ok(())
    }

    /// Read header from input.
    ///
    /// Rejects foreign magic, unknown versions and any geometry other than
    /// the one this crate packs.
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if &magic != ANIMATION_MAGIC {
            return Err(invalid("Invalid LMXA magic bytes"));
        }

        let version = read_u16(r)?;
        if version != ANIMATION_VERSION {
            return Err(invalid(format!("Unsupported LMXA version: {}", version)));
        }

        let flags = read_u16(r)?;
        let geometry = Geometry {
            rows: read_u16(r)? as usize,
            cols: read_u16(r)? as usize,
            word_bits: read_u16(r)? as usize,
            words_per_frame: read_u16(r)? as usize,
        };
        if geometry != GEOMETRY {
            return Err(invalid(format!(
                "Unsupported geometry {}x{} ({} x {}-bit words), expected {}x{}",
                geometry.rows,
                geometry.cols,
                geometry.words_per_frame,
                geometry.word_bits,
                GEOMETRY.rows,
                GEOMETRY.cols
            )));
        }

        let frame_count = read_u32(r)?;

        // Skip reserved bytes
        let mut reserved = [0u8; 4];
        r.read_exact(&mut reserved)?;

        Ok(Self {
            geometry,
            frame_count,
            flags,
        })
    }
}

/// Bytes per stored frame: the words plus the duration.
pub const FRAME_SIZE: usize = (WORDS_PER_FRAME + 1) * 4;

/// Write one frame.
pub fn write_frame<W: Write>(w: &mut W, frame: &PackedFrame) -> io::Result<()> {
    for word in frame.words {
        w.write_all(&word.to_le_bytes())?;
    }
    w.write_all(&frame.duration_ms.to_le_bytes())
}

/// Read one frame.
pub fn read_frame<R: Read>(r: &mut R) -> io::Result<PackedFrame> {
    let mut words = [0u32; WORDS_PER_FRAME];
    for word in &mut words {
        *word = read_u32(r)?;
    }
    let duration_ms = read_u32(r)?;
    Ok(PackedFrame { words, duration_ms })
}

/// Write a header followed by every frame.
pub fn write_sequence<W: Write>(w: &mut W, sequence: &AnimationSequence) -> io::Result<()> {
    let frame_count = u32::try_from(sequence.len())
        .map_err(|_| invalid(format!("Too many frames: {}", sequence.len())))?;
    AnimationHeader::new(frame_count).write_to(w)?;
    for frame in sequence.frames() {
        write_frame(w, frame)?;
    }
    Ok(())
}

/// Read a container written by [`write_sequence`].
pub fn read_sequence<R: Read>(r: &mut R) -> io::Result<AnimationSequence> {
    let header = AnimationHeader::read_from(r)?;

    let mut builder = SequenceBuilder::new();
    for _ in 0..header.frame_count {
        builder.push_frame(read_frame(r)?);
    }
    builder.finish().map_err(|e| invalid(e.to_string()))
}

/// True if `bytes` starts with the container magic.
pub fn is_container(bytes: &[u8]) -> bool {
    bytes.starts_with(ANIMATION_MAGIC)
}

/// Write a container file.
pub fn save<P: AsRef<Path>>(path: P, sequence: &AnimationSequence) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_sequence(&mut writer, sequence)?;
    writer.flush()
}

/// Read a container file.
pub fn load<P: AsRef<Path>>(path: P) -> io::Result<AnimationSequence> {
    let mut reader = BufReader::new(File::open(path)?);
    read_sequence(&mut reader)
}
