//! Terminal rendition of the selection signal

use std::io::{self, Write};

use tracing::trace;
use wheelslider_core::SelectionFeedback;

/// Counts settles and optionally rings the terminal bell on each
#[derive(Debug, Clone, Default)]
pub struct TerminalFeedback {
    bell: bool,
    count: usize,
    last: Option<usize>,
}

impl TerminalFeedback {
    pub fn new(bell: bool) -> Self {
        Self {
            bell,
            ..Default::default()
        }
    }

    /// Number of selection signals received
    pub fn count(&self) -> usize {
        self.count
    }

    /// Tick of the most recent signal
    pub fn last(&self) -> Option<usize> {
        self.last
    }
}

impl SelectionFeedback for TerminalFeedback {
    fn selection_changed(&mut self, index: usize) {
        self.count += 1;
        self.last = Some(index);
        trace!(index, "selection feedback");
        if self.bell {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x07").and_then(|_| stdout.flush());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_signals() {
        let mut feedback = TerminalFeedback::new(false);
        feedback.selection_changed(3);
        feedback.selection_changed(9);
        assert_eq!(feedback.count(), 2);
        assert_eq!(feedback.last(), Some(9));
    }
}
