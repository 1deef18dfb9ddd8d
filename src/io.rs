// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
use std::io::{
    ErrorKind,
    Read as _,
    Seek as _,
    SeekFrom,
    Write as _,
};

use crate::types::{
    Closer,
    Io,
    ReadOutcome,
    Reader,
    SeekMode,
    Seeker,
    StreamError,
    Writer,
};

/// Exposes a `std::io` stream through [`Reader`], [`Writer`], [`Closer`] and
/// [`Seeker`], for whichever of `Read`, `Write` and `Seek` it implements.
///
/// Closing flushes; the inner stream is released when the `StdIo` is dropped.
#[derive(Debug, Default)]
pub struct StdIo<S> {
    inner: S,
}

impl<S> StdIo<S> {
    #[must_use]
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    #[must_use]
    pub const fn get_ref(&self) -> &S {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> Io for StdIo<S> {
    type IoError = std::io::Error;
}

impl<S: std::io::Read> Reader for StdIo<S> {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> Result<ReadOutcome, StreamError<Self::IoError>> {
        if buf.is_empty() {
            return Ok(ReadOutcome::data(0));
        }

        loop {
            match self.inner.read(buf) {
                Ok(0) => return Ok(ReadOutcome::EOF),
                Ok(read) => return Ok(ReadOutcome::data(read)),
                Err(err) if err.kind() == ErrorKind::Interrupted => {},
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl<S: std::io::Write> Writer for StdIo<S> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> Result<usize, StreamError<Self::IoError>> {
        let mut written = 0;
        while written < buf.len() {
            match self.inner.write(&buf[written..]) {
                Ok(0) => {
                    return Err(StreamError::ShortWrite {
                        written,
                        expected: buf.len(),
                    })
                },
                Ok(n) => written += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => {},
                Err(err) if written == 0 => return Err(err.into()),
                Err(err) => {
                    tracing::event!(
                        tracing::Level::WARN,
                        "Write failed after {written} of {} bytes: {err}",
                        buf.len()
                    );
                    return Err(StreamError::ShortWrite {
                        written,
                        expected: buf.len(),
                    });
                },
            }
        }

        Ok(written)
    }
}

impl<S: std::io::Write> Closer for StdIo<S> {
    fn close(&mut self) -> Result<(), StreamError<Self::IoError>> {
        self.inner.flush().map_err(StreamError::Io)
    }
}

impl<S: std::io::Seek> Seeker for StdIo<S> {
    fn seek(
        &mut self,
        offset: i64,
        whence: SeekMode,
    ) -> Result<u64, StreamError<Self::IoError>> {
        let (current, end) = match whence {
            SeekMode::Start => (0, 0),
            SeekMode::Current => (self.inner.stream_position()?, 0),
            SeekMode::End => {
                let current = self.inner.stream_position()?;
                (current, self.inner.seek(SeekFrom::End(0))?)
            },
        };

        let target = match whence.resolve(offset, current, end) {
            Ok(target) => target,
            Err(err) => {
                // Measuring the end moved the cursor
                if whence == SeekMode::End {
                    self.inner.seek(SeekFrom::Start(current))?;
                }
                return Err(StreamError::Seek(err));
            },
        };

        let position = self.inner.seek(SeekFrom::Start(target))?;
        tracing::event!(tracing::Level::TRACE, "Seeked {offset} from {whence:?} to {position}");
        Ok(position)
    }
}
