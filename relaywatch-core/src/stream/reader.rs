use crate::stream::demux::decode_chunk;
use crate::stream::types::StreamChunk;
use std::io::{self, BufRead};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

// Lines are read as raw bytes and decoded lossily so a stray invalid UTF-8 byte only costs the
// line it sits on; it can never surface as an I/O error.

/// Blocking chunk reader.
pub struct ChunkReader<R> {
    reader: R,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> ChunkReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(4096),
            finished: false,
        }
    }

    /// Next decodable chunk, `Ok(None)` once the input is exhausted or `complete` was seen.
    ///
    /// Only genuine read failures are returned as errors.
    pub fn next_chunk(&mut self) -> io::Result<Option<StreamChunk>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                self.finished = true;
                return Ok(None);
            }

            if let Some(chunk) = decode_chunk(&String::from_utf8_lossy(&self.buf)) {
                if matches!(chunk, StreamChunk::Complete) {
                    self.finished = true;
                }
                return Ok(Some(chunk));
            }
        }
    }
}

/// Async counterpart of [`ChunkReader`] for hosts that receive the stream inside a tokio task.
pub struct AsyncChunkReader<R> {
    reader: R,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: AsyncBufRead + Unpin> AsyncChunkReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(4096),
            finished: false,
        }
    }

    pub async fn next_chunk(&mut self) -> io::Result<Option<StreamChunk>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf).await? == 0 {
                self.finished = true;
                return Ok(None);
            }

            if let Some(chunk) = decode_chunk(&String::from_utf8_lossy(&self.buf)) {
                if matches!(chunk, StreamChunk::Complete) {
                    self.finished = true;
                }
                return Ok(Some(chunk));
            }
        }
    }
}
