//! Primitive encoding/decoding for the WKB binary format.
//!
//! Implements byte-order aware integers and doubles.

use crate::error::DecodeError;
use crate::model::ByteOrder;

// =============================================================================
// DECODING
// =============================================================================

/// Reader for decoding WKB data.
///
/// Wraps a byte slice and provides methods for reading primitives
/// with bounds checking and error handling. A failed read never moves
/// the position past the end of the data.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader from a byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the current position in the data.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the remaining bytes.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Returns the number of remaining bytes.
    pub fn remaining_len(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true if all data has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Reads a single byte.
    #[inline]
    pub fn read_byte(&mut self, context: &'static str) -> Result<u8, DecodeError> {
        if self.pos >= self.data.len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    /// Reads exactly n bytes.
    #[inline]
    pub fn read_bytes(&mut self, n: usize, context: &'static str) -> Result<&'a [u8], DecodeError> {
        if n > self.remaining_len() {
            return Err(DecodeError::UnexpectedEof { context });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Reads exactly N bytes into an array.
    #[inline]
    fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Skips n bytes.
    #[inline]
    pub fn skip(&mut self, n: usize, context: &'static str) -> Result<(), DecodeError> {
        self.read_bytes(n, context).map(|_| ())
    }

    /// Reads a byte-order marker.
    pub fn read_byte_order(&mut self) -> Result<ByteOrder, DecodeError> {
        let marker = self.read_byte("byte_order")?;
        ByteOrder::from_u8(marker).ok_or(DecodeError::InvalidByteOrder { marker })
    }

    /// Reads a u32 in the given byte order.
    #[inline]
    pub fn read_u32(&mut self, order: ByteOrder, context: &'static str) -> Result<u32, DecodeError> {
        let bytes = self.read_array::<4>(context)?;
        Ok(match order {
            ByteOrder::BigEndian => u32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
        })
    }

    /// Reads an i32 in the given byte order.
    #[inline]
    pub fn read_i32(&mut self, order: ByteOrder, context: &'static str) -> Result<i32, DecodeError> {
        let bytes = self.read_array::<4>(context)?;
        Ok(match order {
            ByteOrder::BigEndian => i32::from_be_bytes(bytes),
            ByteOrder::LittleEndian => i32::from_le_bytes(bytes),
        })
    }

    /// Reads an f64 in the given byte order. NaN is passed through.
    #[inline]
    pub fn read_f64(&mut self, order: ByteOrder, context: &'static str) -> Result<f64, DecodeError> {
        let bytes = self.read_array::<8>(context)?;
        Ok(match order {
            ByteOrder::BigEndian => f64::from_be_bytes(bytes),
            ByteOrder::LittleEndian => f64::from_le_bytes(bytes),
        })
    }
}

/// Writes a u32 in the given byte order at `buf[offset..offset + 4]`.
///
/// The caller guarantees the range is in bounds.
#[inline]
pub(crate) fn put_u32(buf: &mut [u8], offset: usize, value: u32, order: ByteOrder) {
    let bytes = match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    };
    buf[offset..offset + 4].copy_from_slice(&bytes);
}

// =============================================================================
// ENCODING
// =============================================================================

/// Writer for framing WKB test vectors and benchmark inputs.
///
/// Only knows bytes, counts and doubles; there is no geometry model behind it.
#[derive(Debug, Clone)]
pub struct Writer {
    buf: Vec<u8>,
    order: ByteOrder,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(ByteOrder::LittleEndian)
    }
}

impl Writer {
    /// Creates a new writer emitting values in the given byte order.
    pub fn new(order: ByteOrder) -> Self {
        Self {
            buf: Vec::new(),
            order,
        }
    }

    /// Creates a new writer with capacity.
    pub fn with_capacity(order: ByteOrder, capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Returns the byte order values are written in.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// Switches the byte order for subsequent values.
    pub fn set_byte_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    /// Returns the written bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Writes a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Writes raw bytes.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Writes the byte-order marker for the current byte order.
    pub fn write_byte_order(&mut self) {
        self.buf.push(self.order as u8);
    }

    /// Writes a header: byte-order marker and type word.
    pub fn write_header(&mut self, type_word: u32) {
        self.write_byte_order();
        self.write_u32(type_word);
    }

    /// Writes a u32.
    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        match self.order {
            ByteOrder::BigEndian => self.buf.extend_from_slice(&value.to_be_bytes()),
            ByteOrder::LittleEndian => self.buf.extend_from_slice(&value.to_le_bytes()),
        }
    }

    /// Writes an i32.
    #[inline]
    pub fn write_i32(&mut self, value: i32) {
        self.write_u32(value as u32);
    }

    /// Writes an f64.
    #[inline]
    pub fn write_f64(&mut self, value: f64) {
        self.write_u64_bits(value.to_bits());
    }

    fn write_u64_bits(&mut self, bits: u64) {
        match self.order {
            ByteOrder::BigEndian => self.buf.extend_from_slice(&bits.to_be_bytes()),
            ByteOrder::LittleEndian => self.buf.extend_from_slice(&bits.to_le_bytes()),
        }
    }

    /// Writes a point-count-prefixed ring of XY tuples, padding each vertex
    /// with `extra` zero ordinates (Z and/or M).
    pub fn write_ring(&mut self, points: &[(f64, f64)], extra: usize) {
        self.write_u32(points.len() as u32);
        for &(x, y) in points {
            self.write_f64(x);
            self.write_f64(y);
            for _ in 0..extra {
                self.write_f64(0.0);
            }
        }
    }
}
