//! Caller-owned record of previously solved questions

use log::debug;

use crate::trace::EvaluationResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub question: String,
    pub answer: EvaluationResult,
}

/// Successful runs, oldest first. Nothing here outlives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember `answer` for `question`. Failed runs are not recorded;
    /// returns whether the entry was kept.
    pub fn record(&mut self, question: &str, answer: &EvaluationResult) -> bool {
        if !answer.is_success() {
            debug!("Not recording failed run for '{}'", question);
            return false;
        }

        self.entries.push(HistoryEntry {
            question: question.to_string(),
            answer: answer.clone(),
        });
        true
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.question.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
