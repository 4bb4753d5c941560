//! The write path for decisions, and two default recorders.
//!
//! # Text format
//!
//! [`TextRecorder`] writes one line per decision, fields separated by a single TAB:
//!
//! ```text
//! <context>\t<action>\t<probability>\t<key>\n
//! ```
//!
//! - `context` is [`ContextText::to_text`], `key` is the decision key; in both, `\` TAB LF CR
//!   are escaped as `\\`, `\t`, `\n`, `\r`.
//! - `action` is a decimal integer.
//! - `probability` uses the shortest decimal that round-trips to the same `f32`.
//!
//! The field order and delimiter are stable; offline evaluators parse them.
//!
//! A write that fails partway leaves a fragment in the sink. Before the next line, the recorder
//! closes that fragment with [`TORN_LINE_END`] (four TABs and a newline), so a torn line always
//! has more than four fields and never parses as a decision.

use std::io::{self, Write};
use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

use crate::{ContextText, DecisionRecord, LoggedDecision, RecordError};

/// Persists decision records.
///
/// Called exactly once per decision, after selection succeeded, with the action and
/// probability verbatim. Returning `Err` tells the caller the decision was made but not logged;
/// the engine does not retry.
///
/// Recorders shared across threads must be `Sync` and tolerate concurrent calls.
pub trait Recorder<C: ?Sized> {
    fn record(&self, record: &DecisionRecord<'_, C>) -> Result<(), RecordError>;
}

impl<C: ?Sized, F> Recorder<C> for F
where
    F: Fn(&DecisionRecord<'_, C>) -> Result<(), RecordError>,
{
    fn record(&self, record: &DecisionRecord<'_, C>) -> Result<(), RecordError> {
        self(record)
    }
}

/// Terminator written after a fragment left by a failed write.
pub const TORN_LINE_END: &str = "\t\t\t\t\n";

fn lock<T>(m: &Mutex<T>) -> Result<MutexGuard<'_, T>, RecordError> {
    m.lock().map_err(|_| io::Error::other("recorder lock poisoned").into())
}

fn push_escaped(out: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
}

/// Render one record in the text format described in the module docs.
pub fn format_record<C: ContextText + ?Sized>(record: &DecisionRecord<'_, C>) -> String {
    let mut line = String::new();
    push_escaped(&mut line, &record.context.to_text());
    line.push('\t');
    line.push_str(&record.action.to_string());
    line.push('\t');
    line.push_str(&record.probability.to_string());
    line.push('\t');
    push_escaped(&mut line, record.key);
    line.push('\n');
    line
}

struct Sink<W> {
    writer: W,
    /// The last write failed after possibly emitting part of a line.
    torn: bool,
}

/// Default text recorder: appends one TAB-separated line per decision to a writer.
pub struct TextRecorder<C: ?Sized, W> {
    sink: Mutex<Sink<W>>,
    _context: PhantomData<fn(&C)>,
}

impl<C: ?Sized, W: Write> TextRecorder<C, W> {
    pub fn new(writer: W) -> Self {
        Self {
            sink: Mutex::new(Sink {
                writer,
                torn: false,
            }),
            _context: PhantomData,
        }
    }

    /// Flush the underlying writer.
    pub fn flush(&self) -> Result<(), RecordError> {
        lock(&self.sink)?.writer.flush()?;
        Ok(())
    }

    /// The underlying writer. A fragment left by a failed write is not terminated.
    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(s) => s.writer,
            Err(poisoned) => poisoned.into_inner().writer,
        }
    }
}

impl<C: ?Sized> TextRecorder<C, Vec<u8>> {
    /// A recorder that keeps its log in memory.
    pub fn in_memory() -> Self {
        Self::new(Vec::new())
    }

    /// Everything recorded so far.
    pub fn recording(&self) -> String {
        let sink = match self.sink.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        String::from_utf8_lossy(&sink.writer).into_owned()
    }
}

impl<C: ContextText + ?Sized, W: Write> Recorder<C> for TextRecorder<C, W> {
    fn record(&self, record: &DecisionRecord<'_, C>) -> Result<(), RecordError> {
        let line = format_record(record);
        let mut guard = lock(&self.sink)?;
        let sink = &mut *guard;
        if sink.torn {
            sink.writer.write_all(TORN_LINE_END.as_bytes())?;
            sink.torn = false;
        }
        if let Err(e) = sink.writer.write_all(line.as_bytes()) {
            sink.torn = true;
            return Err(e.into());
        }
        Ok(())
    }
}

impl<C: ?Sized, W> std::fmt::Debug for TextRecorder<C, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextRecorder").finish_non_exhaustive()
    }
}

/// Keeps owned copies of every decision in memory.
#[derive(Debug)]
pub struct MemoryRecorder<C> {
    rows: Mutex<Vec<LoggedDecision<C>>>,
}

impl<C> Default for MemoryRecorder<C> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }
}

impl<C: Clone> MemoryRecorder<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the decisions recorded so far, in recording order.
    pub fn decisions(&self) -> Vec<LoggedDecision<C>> {
        match self.rows.lock() {
            Ok(g) => g.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self.rows.lock() {
            Ok(g) => g.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: Clone> Recorder<C> for MemoryRecorder<C> {
    fn record(&self, record: &DecisionRecord<'_, C>) -> Result<(), RecordError> {
        lock(&self.rows)?.push(LoggedDecision::from_record(record));
        Ok(())
    }
}
