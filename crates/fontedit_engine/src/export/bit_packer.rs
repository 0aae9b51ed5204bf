//! Packs glyph bitmaps into bytes.
//!
//! Rows are walked top to bottom, pixels left to right. Each pixel becomes
//! one bit; [`BitOrder`] decides whether the first pixel of a byte lands in
//! bit 7 or bit 0. Unused trailing bits are always zero.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::PixelGrid;

/// Which end of a byte the first pixel occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BitOrder {
    /// First pixel is bit 7 (0x80)
    #[default]
    MsbFirst,
    /// First pixel is bit 0 (0x01)
    LsbFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PackingPolicy {
    pub bit_order: BitOrder,
    /// Emit set pixels as 0 and unset pixels as 1. Padding is not affected.
    pub invert: bool,
    /// Start every row on a fresh byte.
    pub pad_rows: bool,
}

impl Default for PackingPolicy {
    fn default() -> Self {
        Self {
            bit_order: BitOrder::MsbFirst,
            invert: false,
            pad_rows: true,
        }
    }
}

/// Stateless encoder from [`PixelGrid`] to bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitPacker {
    policy: PackingPolicy,
}

impl BitPacker {
    pub fn new(policy: PackingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> PackingPolicy {
        self.policy
    }

    /// Pack the whole grid.
    pub fn pack(&self, grid: &PixelGrid) -> Vec<u8> {
        self.pack_rows(grid, 0..grid.height())
    }

    /// Pack only the given rows of the grid.
    pub fn pack_rows(&self, grid: &PixelGrid, rows: Range<usize>) -> Vec<u8> {
        let mut writer = BitWriter::new(self.policy.bit_order);
        for y in rows {
            for &pixel in grid.row(y) {
                writer.push(pixel != self.policy.invert);
            }
            if self.policy.pad_rows {
                writer.flush();
            }
        }
        writer.finish()
    }

    /// Number of bytes [`BitPacker::pack_rows`] yields for `row_count` rows of `width` pixels.
    pub fn packed_len(&self, width: usize, row_count: usize) -> usize {
        if self.policy.pad_rows {
            width.div_ceil(8) * row_count
        } else {
            (width * row_count).div_ceil(8)
        }
    }
}

struct BitWriter {
    bit_order: BitOrder,
    bytes: Vec<u8>,
    current: u8,
    used: u32,
}

impl BitWriter {
    fn new(bit_order: BitOrder) -> Self {
        Self {
            bit_order,
            bytes: Vec::new(),
            current: 0,
            used: 0,
        }
    }

    fn push(&mut self, bit: bool) {
        if bit {
            self.current |= match self.bit_order {
                BitOrder::MsbFirst => 0x80 >> self.used,
                BitOrder::LsbFirst => 0x01 << self.used,
            };
        }
        self.used += 1;
        if self.used == 8 {
            self.flush();
        }
    }

    /// Close a partially filled byte.
    fn flush(&mut self) {
        if self.used > 0 {
            self.bytes.push(self.current);
            self.current = 0;
            self.used = 0;
        }
    }

    fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.bytes
    }
}
