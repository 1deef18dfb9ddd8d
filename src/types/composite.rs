// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
use super::{
    Closer,
    Reader,
    Seeker,
    Writer,
};

macro_rules! create_composite {
    {$($(#[$meta:meta])* $name:ident: $first:ident $(+ $rest:ident)*;)*} => {
        $(
            $(#[$meta])*
            pub trait $name: $first $(+ $rest)* {}

            impl<T: $first $(+ $rest)* + ?Sized> $name for T {}
        )*
    };
}

create_composite! {
    ReadCloser: Reader + Closer;
    WriteCloser: Writer + Closer;

    /// ```
    /// use core::convert::Infallible;
    /// use streamio::{Io, ReadOutcome, ReadSeeker, Reader, SeekMode, Seeker, StreamError};
    ///
    /// struct Zeroes(u64);
    ///
    /// impl Io for Zeroes {
    ///     type IoError = Infallible;
    /// }
    ///
    /// impl Reader for Zeroes {
    ///     fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome, StreamError<Infallible>> {
    ///         buf.fill(0);
    ///         self.0 += buf.len() as u64;
    ///         Ok(ReadOutcome::data(buf.len()))
    ///     }
    /// }
    ///
    /// impl Seeker for Zeroes {
    ///     fn seek(
    ///         &mut self,
    ///         offset: i64,
    ///         whence: SeekMode,
    ///     ) -> Result<u64, StreamError<Infallible>> {
    ///         self.0 = whence.resolve(offset, self.0, u64::MAX).map_err(StreamError::Seek)?;
    ///         Ok(self.0)
    ///     }
    /// }
    ///
    /// fn skip_then_read(stream: &mut dyn ReadSeeker<IoError = Infallible>) -> u64 {
    ///     let _ = stream.seek(16, SeekMode::Current);
    ///     let _ = stream.read(&mut [0; 4]);
    ///     stream.stream_position().unwrap_or_default()
    /// }
    ///
    /// assert_eq!(skip_then_read(&mut Zeroes(0)), 20);
    /// ```
    ReadSeeker: Reader + Seeker;
    WriteSeeker: Writer + Seeker;

    /// Only types providing all three capabilities qualify:
    ///
    /// ```compile_fail
    /// use core::convert::Infallible;
    /// use streamio::{Io, ReadOutcome, ReadWriteCloser, Reader, StreamError, Writer};
    ///
    /// struct NeverCloses;
    ///
    /// impl Io for NeverCloses {
    ///     type IoError = Infallible;
    /// }
    ///
    /// impl Reader for NeverCloses {
    ///     fn read(&mut self, _: &mut [u8]) -> Result<ReadOutcome, StreamError<Infallible>> {
    ///         Ok(ReadOutcome::EOF)
    ///     }
    /// }
    ///
    /// impl Writer for NeverCloses {
    ///     fn write(&mut self, buf: &[u8]) -> Result<usize, StreamError<Infallible>> {
    ///         Ok(buf.len())
    ///     }
    /// }
    ///
    /// fn wants<T: ReadWriteCloser>(_: &T) {}
    ///
    /// wants(&NeverCloses);
    /// ```
    ReadWriteCloser: Reader + Writer + Closer;

    /// ```compile_fail
    /// use core::convert::Infallible;
    /// use streamio::{Io, ReadOutcome, ReadWriteSeeker, Reader, SeekMode, Seeker, StreamError};
    ///
    /// struct ReadOnly;
    ///
    /// impl Io for ReadOnly {
    ///     type IoError = Infallible;
    /// }
    ///
    /// impl Reader for ReadOnly {
    ///     fn read(&mut self, _: &mut [u8]) -> Result<ReadOutcome, StreamError<Infallible>> {
    ///         Ok(ReadOutcome::EOF)
    ///     }
    /// }
    ///
    /// impl Seeker for ReadOnly {
    ///     fn seek(&mut self, _: i64, _: SeekMode) -> Result<u64, StreamError<Infallible>> {
    ///         Ok(0)
    ///     }
    /// }
    ///
    /// fn wants<T: ReadWriteSeeker>(_: &T) {}
    ///
    /// wants(&ReadOnly);
    /// ```
    ReadWriteSeeker: Reader + Writer + Seeker;
}
