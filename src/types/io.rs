// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
use super::{
    ReadOutcome,
    SeekError,
    SeekMode,
};

#[derive(thiserror::Error, Debug)]
pub enum StreamError<IoError: core::fmt::Debug> {
    #[error(transparent)]
    Io(#[from] IoError),

    /// The stream accepted only part of a write
    #[error("Short write (wrote {written} of {expected} bytes)")]
    ShortWrite { written: usize, expected: usize },

    #[error(transparent)]
    Seek(SeekError),
}

impl<IoError: core::fmt::Debug> StreamError<IoError> {
    /// Bytes that reached the stream before the failure.
    #[must_use]
    pub const fn written(&self) -> usize {
        match self {
            Self::ShortWrite { written, .. } => *written,
            _ => 0,
        }
    }
}

/// Names the device error of a stream, shared by every capability it
/// implements.
pub trait Io {
    type IoError: core::error::Error + 'static;
}

/// Source of bytes.
///
/// Implementations must not hold on to `buf` past the call, and may use all
/// of it as scratch space even when returning fewer bytes.
pub trait Reader: Io {
    /// Reads up to `buf.len()` bytes into `buf`.
    ///
    /// Returns as soon as some data is available rather than waiting to fill
    /// `buf`. End-of-stream can be flagged together with the final bytes or on
    /// a following call returning [`ReadOutcome::EOF`]; callers handle
    /// `outcome.read` bytes before looking at `outcome.eof`.
    ///
    /// An empty `buf` may yield zero bytes without meaning end-of-stream.
    ///
    /// # Errors
    /// Any failure other than end-of-stream. Bytes read before a failure are
    /// returned first, the failure on a later call.
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> Result<ReadOutcome, StreamError<Self::IoError>>;
}

/// Sink of bytes.
pub trait Writer: Io {
    /// Writes all of `buf`, returning `buf.len()`.
    ///
    /// # Errors
    /// [`StreamError::ShortWrite`] if only part of `buf` was written, or any
    /// device failure.
    fn write(
        &mut self,
        buf: &[u8],
    ) -> Result<usize, StreamError<Self::IoError>>;
}

pub trait Closer: Io {
    /// Releases the underlying resource. What a second call does is up to the
    /// implementation.
    ///
    /// # Errors
    /// Failure to release the resource.
    fn close(&mut self) -> Result<(), StreamError<Self::IoError>>;
}

pub trait Seeker: Io {
    /// Moves the cursor for the next read or write to `offset`, interpreted
    /// according to `whence`, and returns the new position from the start.
    ///
    /// Seeking past the end is allowed; what reads and writes do there is up
    /// to the implementation. [`SeekMode::resolve`] computes the target.
    ///
    /// # Errors
    /// [`StreamError::Seek`] if the target lies before the start, or any
    /// device failure.
    fn seek(
        &mut self,
        offset: i64,
        whence: SeekMode,
    ) -> Result<u64, StreamError<Self::IoError>>;

    /// # Errors
    /// Whatever `seek(0, SeekMode::Start)` returns.
    fn rewind(&mut self) -> Result<(), StreamError<Self::IoError>> {
        self.seek(0, SeekMode::Start).map(|_| ())
    }

    /// # Errors
    /// Whatever `seek(0, SeekMode::Current)` returns.
    fn stream_position(&mut self) -> Result<u64, StreamError<Self::IoError>> {
        self.seek(0, SeekMode::Current)
    }
}

impl<T: Io + ?Sized> Io for &mut T {
    type IoError = T::IoError;
}

impl<T: Reader + ?Sized> Reader for &mut T {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> Result<ReadOutcome, StreamError<Self::IoError>> {
        (**self).read(buf)
    }
}

impl<T: Writer + ?Sized> Writer for &mut T {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> Result<usize, StreamError<Self::IoError>> {
        (**self).write(buf)
    }
}

impl<T: Closer + ?Sized> Closer for &mut T {
    fn close(&mut self) -> Result<(), StreamError<Self::IoError>> {
        (**self).close()
    }
}

impl<T: Seeker + ?Sized> Seeker for &mut T {
    fn seek(
        &mut self,
        offset: i64,
        whence: SeekMode,
    ) -> Result<u64, StreamError<Self::IoError>> {
        (**self).seek(offset, whence)
    }
}
