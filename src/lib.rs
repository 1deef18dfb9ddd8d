// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod copy;
#[cfg(feature = "std")]
mod io;
mod types;

pub use copy::{
    copy,
    copy_with_buffer,
    CopyError,
    CopyFailure,
    DEFAULT_BUF_SIZE,
};
#[cfg(feature = "std")]
pub use io::StdIo;
pub use types::{
    Closer,
    Io,
    ReadCloser,
    ReadOutcome,
    ReadSeeker,
    ReadWriteCloser,
    ReadWriteSeeker,
    Reader,
    SeekError,
    SeekMode,
    Seeker,
    StreamError,
    WriteCloser,
    WriteSeeker,
    Writer,
};
