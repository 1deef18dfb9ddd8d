// Copyright (C) 2024 GLStudios
// SPDX-License-Identifier: LGPL-2.1-only
#![allow(dead_code)]

use std::sync::Once;

use streamio::{
    Closer,
    Io,
    ReadOutcome,
    Reader,
    SeekMode,
    Seeker,
    StreamError,
    Writer,
};

static INIT_LOGGING: Once = Once::new();

pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_ansi(false)
            .try_init();
    });
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Fault {
    #[error("device failed")]
    Device,

    #[error("stream is closed")]
    Closed,
}

/// How a [`Chunks`] reader reports the end of its data
#[derive(Debug, Clone, Copy)]
pub enum EofPolicy {
    /// Flag end-of-stream together with the final bytes
    Inline,
    /// Return the final bytes, then a separate `{0, eof}`
    Deferred,
}

/// Hands out `data` at most `chunk` bytes per read
pub struct Chunks {
    data:   Vec<u8>,
    pos:    usize,
    chunk:  usize,
    policy: EofPolicy,
    /// Fail instead of reading once `pos` reaches this
    fail_at: Option<usize>,
    pub reads: usize,
}

impl Chunks {
    pub fn new(
        data: &[u8],
        chunk: usize,
        policy: EofPolicy,
    ) -> Self {
        Self {
            data: data.to_vec(),
            pos: 0,
            chunk,
            policy,
            fail_at: None,
            reads: 0,
        }
    }

    pub fn failing_at(
        mut self,
        at: usize,
    ) -> Self {
        self.fail_at = Some(at);
        self
    }
}

impl Io for Chunks {
    type IoError = Fault;
}

impl Reader for Chunks {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> Result<ReadOutcome, StreamError<Fault>> {
        self.reads += 1;
        if buf.is_empty() {
            return Ok(ReadOutcome::data(0));
        }
        if self.fail_at.is_some_and(|at| self.pos >= at) {
            return Err(StreamError::Io(Fault::Device));
        }

        let mut end = self.data.len().min(self.pos + self.chunk.min(buf.len()));
        if let Some(at) = self.fail_at {
            end = end.min(at);
        }
        let read = end - self.pos;
        buf[..read].copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;

        let eof = match self.policy {
            EofPolicy::Inline => self.pos == self.data.len(),
            EofPolicy::Deferred => read == 0,
        };
        Ok(ReadOutcome { read, eof })
    }
}

/// Collects everything written to it
#[derive(Default)]
pub struct Collect {
    pub data:   Vec<u8>,
    pub writes: usize,
}

impl Io for Collect {
    type IoError = Fault;
}

impl Writer for Collect {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> Result<usize, StreamError<Fault>> {
        self.writes += 1;
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }
}

/// Accepts `capacity` bytes in total, then reports short writes
pub struct Bounded {
    pub data: Vec<u8>,
    capacity: usize,
}

impl Bounded {
    pub const fn new(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }
}

impl Io for Bounded {
    type IoError = Fault;
}

impl Writer for Bounded {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> Result<usize, StreamError<Fault>> {
        let room = self.capacity - self.data.len();
        if room == 0 && !buf.is_empty() {
            return Err(StreamError::Io(Fault::Device));
        }

        let written = room.min(buf.len());
        self.data.extend_from_slice(&buf[..written]);
        if written < buf.len() {
            return Err(StreamError::ShortWrite {
                written,
                expected: buf.len(),
            });
        }
        Ok(written)
    }
}

/// Growable in-memory file: readable, writable, seekable and closable
#[derive(Default)]
pub struct MemFile {
    pub data:   Vec<u8>,
    pub pos:    u64,
    pub closed: bool,
}

impl MemFile {
    pub fn with(data: &[u8]) -> Self {
        Self {
            data: data.to_vec(),
            ..Self::default()
        }
    }

    fn check_open(&self) -> Result<(), StreamError<Fault>> {
        if self.closed {
            Err(StreamError::Io(Fault::Closed))
        } else {
            Ok(())
        }
    }
}

impl Io for MemFile {
    type IoError = Fault;
}

impl Reader for MemFile {
    fn read(
        &mut self,
        buf: &mut [u8],
    ) -> Result<ReadOutcome, StreamError<Fault>> {
        self.check_open()?;
        if buf.is_empty() {
            return Ok(ReadOutcome::data(0));
        }

        let start = usize::try_from(self.pos)
            .map_or(self.data.len(), |pos| pos.min(self.data.len()));
        let read = buf.len().min(self.data.len() - start);
        buf[..read].copy_from_slice(&self.data[start..start + read]);
        self.pos += read as u64;

        Ok(ReadOutcome {
            read,
            eof: start + read == self.data.len(),
        })
    }
}

impl Writer for MemFile {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> Result<usize, StreamError<Fault>> {
        self.check_open()?;

        let start = usize::try_from(self.pos).map_err(|_| StreamError::Io(Fault::Device))?;
        if self.data.len() < start + buf.len() {
            self.data.resize(start + buf.len(), 0);
        }
        self.data[start..start + buf.len()].copy_from_slice(buf);
        self.pos += buf.len() as u64;
        Ok(buf.len())
    }
}

impl Seeker for MemFile {
    fn seek(
        &mut self,
        offset: i64,
        whence: SeekMode,
    ) -> Result<u64, StreamError<Fault>> {
        self.check_open()?;

        self.pos = whence
            .resolve(offset, self.pos, self.data.len() as u64)
            .map_err(StreamError::Seek)?;
        Ok(self.pos)
    }
}

impl Closer for MemFile {
    fn close(&mut self) -> Result<(), StreamError<Fault>> {
        self.check_open()?;
        self.closed = true;
        Ok(())
    }
}
