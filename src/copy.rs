// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
use crate::types::{
    Reader,
    StreamError,
    Writer,
};

/// Scratch space used by [`copy`]
pub const DEFAULT_BUF_SIZE: usize = 32 * 1024;

#[derive(thiserror::Error, Debug)]
pub enum CopyFailure<ReadError: core::fmt::Debug, WriteError: core::fmt::Debug> {
    #[error("Reading the source failed")]
    Read(#[source] StreamError<ReadError>),

    #[error("Writing the destination failed")]
    Write(#[source] StreamError<WriteError>),

    /// The destination claimed to accept more bytes than it was given
    #[error("Destination reported writing {reported} of {expected} bytes")]
    InvalidWrite { reported: usize, expected: usize },

    #[error("Scratch buffer is empty")]
    EmptyBuffer,
}

/// A failed copy, with the bytes that made it to the destination first.
#[derive(thiserror::Error, Debug)]
#[error("Copy stopped after {copied} bytes")]
pub struct CopyError<ReadError: core::fmt::Debug, WriteError: core::fmt::Debug> {
    pub copied:  u64,
    #[source]
    pub failure: CopyFailure<ReadError, WriteError>,
}

/// Copies `src` into `dst` until `src` reaches end-of-stream, returning the
/// number of bytes copied.
///
/// End-of-stream is how a copy finishes, so it is never reported as an error.
///
/// # Errors
/// The first read or write failure, together with the bytes copied before it.
pub fn copy<W, R>(
    dst: &mut W,
    src: &mut R,
) -> Result<u64, CopyError<R::IoError, W::IoError>>
where
    W: Writer + ?Sized,
    R: Reader + ?Sized,
{
    let mut buf = alloc::vec![0u8; DEFAULT_BUF_SIZE];
    copy_with_buffer(dst, src, &mut buf)
}

/// [`copy`] through a caller-provided scratch buffer.
///
/// # Errors
/// [`CopyFailure::EmptyBuffer`] if `buf` is empty, otherwise as [`copy`].
#[tracing::instrument(skip_all, level = "trace", fields(buf_len = buf.len()))]
pub fn copy_with_buffer<W, R>(
    dst: &mut W,
    src: &mut R,
    buf: &mut [u8],
) -> Result<u64, CopyError<R::IoError, W::IoError>>
where
    W: Writer + ?Sized,
    R: Reader + ?Sized,
{
    if buf.is_empty() {
        return Err(CopyError {
            copied:  0,
            failure: CopyFailure::EmptyBuffer,
        });
    }

    let mut copied = 0u64;
    loop {
        let outcome = match src.read(buf) {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::event!(tracing::Level::DEBUG, "Read failed after {copied} bytes");
                return Err(CopyError {
                    copied,
                    failure: CopyFailure::Read(err),
                });
            },
        };

        // A reader claiming more than it was given only gets credit for `buf`
        let chunk = &buf[..outcome.read.min(buf.len())];
        if !chunk.is_empty() {
            let failure = match dst.write(chunk) {
                Ok(written) if written == chunk.len() => {
                    copied += written as u64;
                    None
                },
                // An over-reported write counts for nothing
                Ok(reported) if reported > chunk.len() => Some(CopyFailure::InvalidWrite {
                    reported,
                    expected: chunk.len(),
                }),
                Ok(written) => {
                    copied += written as u64;
                    Some(CopyFailure::Write(StreamError::ShortWrite {
                        written,
                        expected: chunk.len(),
                    }))
                },
                Err(err) => {
                    copied += err.written() as u64;
                    Some(CopyFailure::Write(err))
                },
            };

            if let Some(failure) = failure {
                tracing::event!(tracing::Level::DEBUG, "Write failed after {copied} bytes");
                return Err(CopyError { copied, failure });
            }
        }

        if outcome.eof {
            break;
        }
    }

    tracing::event!(tracing::Level::DEBUG, "Copied {copied} bytes");
    Ok(copied)
}
