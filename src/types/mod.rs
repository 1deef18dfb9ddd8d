// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
mod composite;
mod io;

pub use composite::*;
pub use io::*;

/// Reference point for the offset passed to [`Seeker::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekMode {
    /// Offset is absolute from the beginning of the stream
    Start,
    /// Offset is relative to the current cursor
    Current,
    /// Offset is relative to the end of the stream
    End,
}

impl SeekMode {
    /// Computes the absolute position `offset` refers to, given the stream's
    /// current cursor and its end.
    ///
    /// Positions past `end` are allowed.
    ///
    /// # Errors
    /// [`SeekError::BeforeStart`] if the result would be negative,
    /// [`SeekError::Overflow`] if it does not fit in a `u64`.
    pub const fn resolve(
        self,
        offset: i64,
        current: u64,
        end: u64,
    ) -> Result<u64, SeekError> {
        let base = match self {
            Self::Start => 0,
            Self::Current => current,
            Self::End => end,
        };

        match base.checked_add_signed(offset) {
            Some(position) => Ok(position),
            None if offset < 0 => Err(SeekError::BeforeStart { base, offset }),
            None => Err(SeekError::Overflow { base, offset }),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekError {
    #[error("Seek to before the start of the stream ({base} + {offset})")]
    BeforeStart { base: u64, offset: i64 },

    #[error("Seek position overflows ({base} + {offset})")]
    Overflow { base: u64, offset: i64 },
}

/// Result of a single [`Reader::read`] call.
///
/// `read` bytes at the front of the buffer are valid even when `eof` is set,
/// and must be consumed before acting on `eof`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadOutcome {
    pub read: usize,
    pub eof:  bool,
}

impl ReadOutcome {
    pub const EOF: Self = Self {
        read: 0,
        eof:  true,
    };

    #[must_use]
    pub const fn data(read: usize) -> Self {
        Self { read, eof: false }
    }

    /// `read` bytes, and nothing will follow them
    #[must_use]
    pub const fn last(read: usize) -> Self {
        Self { read, eof: true }
    }
}
