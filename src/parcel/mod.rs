// ABOUTME: Positional little-endian binary codec for records passed to the recording service
// ABOUTME: ParcelWriter/ParcelReader primitives plus the Parcelable trait records implement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Parcel codec
//!
//! Records are written field by field in a fixed order with no field tags:
//!
//! - `i32`: 4 bytes little-endian
//! - `bool`: 1 byte, `1` reads as true and any other byte as false
//! - nullable string: `i32` byte length (`-1` for null) followed by UTF-8 bytes
//!
//! Lists are an `i32` element count followed by the elements.

/// `WaypointCreationRequest` encoding
pub mod waypoint;

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::errors::{AppError, AppResult};

const NULL_LENGTH: i32 = -1;

/// Append-only encoder
#[derive(Debug, Default)]
pub struct ParcelWriter {
    buffer: BytesMut,
}

impl ParcelWriter {
    /// Empty parcel
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a little-endian `i32`
    pub fn write_i32(&mut self, value: i32) {
        self.buffer.put_i32_le(value);
    }

    /// Write a boolean as one byte
    pub fn write_bool(&mut self, value: bool) {
        self.buffer.put_u8(u8::from(value));
    }

    /// Write a nullable string
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the string is longer than `i32::MAX` bytes
    pub fn write_string(&mut self, value: Option<&str>) -> AppResult<()> {
        match value {
            None => self.write_i32(NULL_LENGTH),
            Some(text) => {
                let length = i32::try_from(text.len()).map_err(|_| {
                    AppError::invalid_input(format!(
                        "string of {} bytes does not fit in a parcel",
                        text.len()
                    ))
                })?;
                self.write_i32(length);
                self.buffer.put_slice(text.as_bytes());
            }
        }
        Ok(())
    }

    /// Write a count-prefixed list of records
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a record cannot be encoded
    pub fn write_list<T: Parcelable>(&mut self, items: &[T]) -> AppResult<()> {
        let count = i32::try_from(items.len())
            .map_err(|_| AppError::invalid_input("too many records for one parcel"))?;
        self.write_i32(count);
        for item in items {
            item.write_to_parcel(self)?;
        }
        Ok(())
    }

    /// Bytes written so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Finish writing
    #[must_use]
    pub fn into_bytes(self) -> Bytes {
        self.buffer.freeze()
    }
}

/// Cursor-based decoder over a borrowed buffer
#[derive(Debug)]
pub struct ParcelReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ParcelReader<'a> {
    /// Decoder positioned at the start of `data`
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Bytes left to read
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    fn take(&mut self, count: usize, what: &str) -> AppResult<&'a [u8]> {
        if self.remaining() < count {
            return Err(AppError::invalid_format(format!(
                "parcel truncated reading {what} at offset {}: need {count} bytes, have {}",
                self.position,
                self.remaining()
            )));
        }
        let slice = &self.data[self.position..self.position + count];
        self.position += count;
        Ok(slice)
    }

    /// Read a little-endian `i32`
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if fewer than four bytes remain
    pub fn read_i32(&mut self) -> AppResult<i32> {
        let mut bytes = self.take(4, "i32")?;
        Ok(bytes.get_i32_le())
    }

    /// Read a one-byte boolean
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if no byte remains
    pub fn read_bool(&mut self) -> AppResult<bool> {
        let mut bytes = self.take(1, "bool")?;
        Ok(bytes.get_u8() == 1)
    }

    /// Read a nullable string
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` on a negative length other than `-1`, a length
    /// past the end of the buffer, or bytes that are not UTF-8
    pub fn read_string(&mut self) -> AppResult<Option<String>> {
        let offset = self.position;
        let length = self.read_i32()?;
        if length == NULL_LENGTH {
            return Ok(None);
        }
        let length = usize::try_from(length).map_err(|_| {
            AppError::invalid_format(format!(
                "invalid string length {length} at offset {offset}"
            ))
        })?;
        let bytes = self.take(length, "string")?;
        let text = std::str::from_utf8(bytes).map_err(|e| {
            AppError::invalid_format(format!("string at offset {offset} is not UTF-8"))
                .with_source(e)
        })?;
        Ok(Some(text.to_owned()))
    }

    /// Read a count-prefixed list of records
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` on a negative count or a malformed record
    pub fn read_list<T: Parcelable>(&mut self) -> AppResult<Vec<T>> {
        let count = self.read_i32()?;
        let count = usize::try_from(count)
            .map_err(|_| AppError::invalid_format(format!("invalid list length {count}")))?;
        // Each record is at least one byte; cap the allocation by what is left
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(T::read_from_parcel(self)?);
        }
        Ok(items)
    }

    /// Fail unless every byte has been consumed
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if bytes remain
    pub fn finish(self) -> AppResult<()> {
        if self.remaining() == 0 {
            Ok(())
        } else {
            Err(AppError::invalid_format(format!(
                "{} trailing bytes after record",
                self.remaining()
            )))
        }
    }
}

/// A record with a fixed positional parcel encoding
pub trait Parcelable: Sized {
    /// Append this record's fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field cannot be represented
    fn write_to_parcel(&self, parcel: &mut ParcelWriter) -> AppResult<()>;

    /// Read one record's fields
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the bytes do not hold a valid record
    fn read_from_parcel(parcel: &mut ParcelReader<'_>) -> AppResult<Self>;

    /// Encode this record alone
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field cannot be represented
    fn to_parcel_bytes(&self) -> AppResult<Bytes> {
        let mut parcel = ParcelWriter::new();
        self.write_to_parcel(&mut parcel)?;
        Ok(parcel.into_bytes())
    }

    /// Decode a buffer holding exactly one record
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` if the record is malformed or followed by extra bytes
    fn from_parcel_bytes(bytes: &[u8]) -> AppResult<Self> {
        let mut parcel = ParcelReader::new(bytes);
        let record = Self::read_from_parcel(&mut parcel)?;
        parcel.finish()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_primitive_layout() {
        let mut parcel = ParcelWriter::new();
        parcel.write_i32(1);
        parcel.write_bool(true);
        parcel.write_string(None).ok();
        parcel.write_string(Some("")).ok();
        parcel.write_string(Some("hé")).ok();

        let bytes = parcel.into_bytes();
        assert_eq!(
            bytes.as_ref(),
            [
                1, 0, 0, 0, // i32
                1, // bool
                0xff, 0xff, 0xff, 0xff, // null
                0, 0, 0, 0, // empty
                3, 0, 0, 0, b'h', 0xc3, 0xa9,
            ]
        );
    }

    #[test]
    fn test_bool_reads_only_one_as_true() {
        let mut parcel = ParcelReader::new(&[1, 0, 2, 0xff]);
        assert_eq!(parcel.read_bool().ok(), Some(true));
        assert_eq!(parcel.read_bool().ok(), Some(false));
        assert_eq!(parcel.read_bool().ok(), Some(false));
        assert_eq!(parcel.read_bool().ok(), Some(false));
        assert!(parcel.finish().is_ok());
    }

    #[test]
    fn test_read_errors() {
        let truncated = ParcelReader::new(&[1, 0]).read_i32();
        assert!(matches!(truncated, Err(ref e) if e.code == ErrorCode::InvalidFormat));

        let negative = ParcelReader::new(&(-2_i32).to_le_bytes()).read_string();
        assert!(negative.is_err());

        let past_end = ParcelReader::new(&[5, 0, 0, 0, b'a']).read_string();
        assert!(past_end.is_err());

        let not_utf8 = ParcelReader::new(&[2, 0, 0, 0, 0xc3, 0x28]).read_string();
        assert!(not_utf8.is_err());
    }

    #[test]
    fn test_finish_rejects_trailing_bytes() {
        let mut parcel = ParcelReader::new(&[0, 0, 0, 0, 9]);
        parcel.read_i32().ok();
        assert_eq!(parcel.remaining(), 1);
        assert!(parcel.finish().is_err());
    }
}
