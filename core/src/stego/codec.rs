//! stego/codec.rs
//! LSB bit-channel codec.
//!
//! Stream layout: `len(payload)` as u32 big-endian, then payload bytes, each
//! bit MSB first. One bit per pixel, in the LSB of the carrier sample.
//! Traversal is row-major; the first `skip_offset` pixels are never touched.

use crate::constants::{DEFAULT_SKIP_OFFSET, STEGO_HEADER_BITS, STEGO_MAX_PAYLOAD_LEN};
use crate::stego::grid::PixelGrid;
use crate::stego::types::{Extraction, StegoError};
use crate::utils::{bits_msb_first, pack_bits_msb_first};

/// LSB codec bound to a skip offset; embedder and extractor must share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SteganoCodec {
    skip_offset: usize,
}

impl Default for SteganoCodec {
    fn default() -> Self {
        Self { skip_offset: DEFAULT_SKIP_OFFSET }
    }
}

#[inline]
fn position(index: usize, width: usize) -> (u32, u32) {
    ((index % width) as u32, (index / width) as u32)
}

impl SteganoCodec {
    pub fn new(skip_offset: usize) -> Self {
        Self { skip_offset }
    }

    pub fn skip_offset(&self) -> usize {
        self.skip_offset
    }

    /// Pixels a grid needs to carry `payload_len` bytes.
    pub fn required_pixels(&self, payload_len: usize) -> usize {
        self.skip_offset
            .saturating_add(STEGO_HEADER_BITS)
            .saturating_add(payload_len.saturating_mul(8))
    }

    /// Largest payload (bytes) this grid can carry.
    pub fn capacity<G: PixelGrid + ?Sized>(&self, grid: &G) -> usize {
        let free = grid
            .pixel_count()
            .saturating_sub(self.skip_offset.saturating_add(STEGO_HEADER_BITS));
        (free / 8).min(STEGO_MAX_PAYLOAD_LEN)
    }

    /// Embed `payload` into `grid` in place.
    ///
    /// Fails before touching any pixel when the payload length is out of
    /// bounds or the grid is too small.
    pub fn embed<G: PixelGrid + ?Sized>(&self, grid: &mut G, payload: &[u8]) -> Result<(), StegoError> {
        if payload.is_empty() || payload.len() > STEGO_MAX_PAYLOAD_LEN {
            return Err(StegoError::InvalidLength { len: payload.len() });
        }

        let available = grid.pixel_count();
        let needed = self.required_pixels(payload.len());
        if needed > available {
            return Err(StegoError::CapacityExceeded { needed, available });
        }

        let width = grid.width() as usize;
        let header = (payload.len() as u32).to_be_bytes();
        let stream = bits_msb_first(&header).chain(bits_msb_first(payload));

        for (i, bit) in stream.enumerate() {
            let (x, y) = position(self.skip_offset + i, width);
            let sample = grid.sample(x, y);
            grid.set_sample(x, y, (sample & 0xFE) | bit);
        }
        Ok(())
    }

    /// Recover the payload; a truncated grid yields a byte-aligned prefix.
    pub fn extract<G: PixelGrid + ?Sized>(&self, grid: &G) -> Result<Vec<u8>, StegoError> {
        self.extract_report(grid).map(|report| report.payload)
    }

    /// Recover the payload together with the declared length.
    pub fn extract_report<G: PixelGrid + ?Sized>(&self, grid: &G) -> Result<Extraction, StegoError> {
        let total = grid.pixel_count();
        let width = grid.width() as usize;

        let available = total.saturating_sub(self.skip_offset);
        if available < STEGO_HEADER_BITS {
            return Err(StegoError::HeaderIncomplete { available });
        }

        let read_bit = |index: usize| {
            let (x, y) = position(index, width);
            grid.sample(x, y) & 1
        };

        let declared = (self.skip_offset..self.skip_offset + STEGO_HEADER_BITS)
            .fold(0u32, |acc, i| (acc << 1) | read_bit(i) as u32) as usize;
        if declared == 0 || declared > STEGO_MAX_PAYLOAD_LEN {
            return Err(StegoError::InvalidLength { len: declared });
        }

        // Body starts after the header pixels; they are not re-read.
        let start = self.skip_offset + STEGO_HEADER_BITS;
        let readable = (declared * 8).min(total - start);
        let bits: Vec<u8> = (start..start + readable).map(read_bit).collect();

        Ok(Extraction { payload: pack_bits_msb_first(&bits), declared_len: declared })
    }
}
