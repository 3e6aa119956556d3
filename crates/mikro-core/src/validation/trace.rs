//! Diagnostic trace sinks for the validation pipeline.
//!
//! The validator reports each step as a human-readable line. Where those lines
//! go is up to the caller; the outcome of a validation never depends on it.

/// Receiver of validation trace lines.
pub trait TraceSink {
    /// Record a single trace line.
    fn trace(&mut self, line: &str);
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn trace(&mut self, line: &str) {
        (**self).trace(line);
    }
}

/// Sink that discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn trace(&mut self, _line: &str) {}
}

/// Sink that keeps lines in the order they were produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl TraceSink for TraceLog {
    fn trace(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Sink that forwards lines to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTrace;

impl TraceSink for TracingTrace {
    fn trace(&mut self, line: &str) {
        tracing::debug!(target: "mikro::trace", "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emit(sink: &mut impl TraceSink) {
        sink.trace("first");
        sink.trace("second");
    }

    #[test]
    fn test_trace_log_keeps_order() {
        let mut log = TraceLog::new();
        emit(&mut log);
        assert_eq!(log.lines(), ["first".to_string(), "second".to_string()]);

        log.clear();
        assert!(log.lines().is_empty());
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut log = TraceLog::new();
        {
            let mut by_ref = &mut log;
            emit(&mut by_ref);
        }
        assert_eq!(log.into_lines().len(), 2);
    }
}
