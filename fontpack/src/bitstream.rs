// Copyright 2026 the Fontpack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packing of fixed-width samples into bytes.
//!
//! Samples are stored least-significant-bits first: the first sample of a byte occupies
//! its lowest `depth` bits, the next one the bits above it, and so on. A packing pass is
//! closed with [`BitEncoder::commit`], which pads the last byte with zero bits, so every
//! pass starts on a fresh byte.

use alloc::vec::Vec;

use crate::BitDepth;

/// Appends fixed-width samples to a byte buffer.
///
/// The sample width is chosen once, when the encoder is created. Pending bits are only
/// written out once a byte is full or [`commit`](Self::commit) is called, so an encoder
/// must be committed before it is dropped.
#[derive(Debug)]
pub struct BitEncoder<'a> {
    out: &'a mut Vec<u8>,
    bits: u8,
    mask: u8,
    buf: u8,
    shift: u8,
}

impl<'a> BitEncoder<'a> {
    /// Creates an encoder appending to `out`.
    pub fn new(out: &'a mut Vec<u8>, depth: BitDepth) -> Self {
        Self {
            out,
            bits: depth.bits(),
            mask: depth.mask(),
            buf: 0,
            shift: 0,
        }
    }

    /// Packs one sample.
    ///
    /// Only the low `depth` bits of `sample` are kept; anything above them is silently
    /// dropped.
    #[inline]
    pub fn encode(&mut self, sample: u8) {
        self.buf |= (sample & self.mask) << self.shift;
        self.shift += self.bits;
        if self.shift >= 8 {
            self.out.push(self.buf);
            self.buf = 0;
            self.shift = 0;
        }
    }

    /// Writes out a partially filled byte, zero-padding its unused high bits.
    ///
    /// Does nothing when the last byte is already complete, so committing an empty pass
    /// writes no bytes.
    pub fn commit(&mut self) {
        if self.shift != 0 {
            self.out.push(self.buf);
        }
        self.buf = 0;
        self.shift = 0;
    }
}

/// Reads fixed-width samples written by a [`BitEncoder`].
#[derive(Clone, Debug)]
pub struct BitDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    bits: u8,
    mask: u8,
    shift: u8,
}

impl<'a> BitDecoder<'a> {
    /// Creates a decoder whose first sample is at the start of `data[offset]`.
    pub fn new(data: &'a [u8], offset: usize, depth: BitDepth) -> Self {
        Self {
            data,
            pos: offset,
            bits: depth.bits(),
            mask: depth.mask(),
            shift: 0,
        }
    }

    /// Returns the next sample.
    ///
    /// # Panics
    ///
    /// Panics when reading past the end of the data. Callers must not read more samples
    /// than were encoded.
    #[inline]
    pub fn decode(&mut self) -> u8 {
        let sample = (self.data[self.pos] >> self.shift) & self.mask;
        self.shift += self.bits;
        if self.shift >= 8 {
            self.pos += 1;
            self.shift = 0;
        }
        sample
    }

    /// Returns the index of the byte holding the next sample.
    pub fn position(&self) -> usize {
        self.pos
    }
}
