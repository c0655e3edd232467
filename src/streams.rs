//! Standard-stream access for fixtures and the run driver.
//!
//! Fixture setup code writes diagnostics through a [`RunStreams`] sink rather
//! than touching `stdout`/`stderr` directly, to make the I/O testable and
//! injectable. Every write is newline-terminated and flushed before the call
//! returns, so partial output stays visible even if the process aborts right
//! after, and an observer reading both channels sees lines in program order.

use std::io::{self, Write};

/// Which of the two standard channels a line was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamChannel {
    Out,
    Err,
}

/// A single recorded line, tagged with its channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEvent {
    pub channel: StreamChannel,
    pub line: String,
}

/// Destination for diagnostic lines emitted during a run.
///
/// Both methods append the newline themselves and flush immediately.
pub trait RunStreams {
    fn line_out(&mut self, line: &str) -> io::Result<()>;
    fn line_err(&mut self, line: &str) -> io::Result<()>;
}

/// Writes to the real process streams, one locked write + flush per line.
pub struct ProcessStreams;

impl RunStreams for ProcessStreams {
    fn line_out(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }

    fn line_err(&mut self, line: &str) -> io::Result<()> {
        let mut err = io::stderr().lock();
        err.write_all(line.as_bytes())?;
        err.write_all(b"\n")?;
        err.flush()
    }
}

/// Records lines into a single ordered event list instead of writing them.
///
/// Keeping one list across both channels preserves the relative order of
/// stdout and stderr writes, which is exactly what in-process tests need to
/// check that a stdout line was emitted before a stderr line.
#[derive(Debug, Default)]
pub struct CaptureStreams {
    events: Vec<StreamEvent>,
}

impl CaptureStreams {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in emission order, across both channels.
    pub fn events(&self) -> &[StreamEvent] {
        &self.events
    }

    /// The stdout channel's content, one `\n`-terminated line per write.
    pub fn stdout_text(&self) -> String {
        self.channel_text(StreamChannel::Out)
    }

    /// The stderr channel's content, one `\n`-terminated line per write.
    pub fn stderr_text(&self) -> String {
        self.channel_text(StreamChannel::Err)
    }

    fn channel_text(&self, channel: StreamChannel) -> String {
        let mut text = String::new();
        for event in self.events.iter().filter(|e| e.channel == channel) {
            text.push_str(&event.line);
            text.push('\n');
        }
        text
    }
}

impl RunStreams for CaptureStreams {
    fn line_out(&mut self, line: &str) -> io::Result<()> {
        self.events.push(StreamEvent {
            channel: StreamChannel::Out,
            line: line.to_string(),
        });
        Ok(())
    }

    fn line_err(&mut self, line: &str) -> io::Result<()> {
        self.events.push(StreamEvent {
            channel: StreamChannel::Err,
            line: line.to_string(),
        });
        Ok(())
    }
}

/// Discards everything, for runs where diagnostics are irrelevant.
pub struct NullStreams;

impl RunStreams for NullStreams {
    fn line_out(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }

    fn line_err(&mut self, _line: &str) -> io::Result<()> {
        Ok(())
    }
}
