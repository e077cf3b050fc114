use crate::content;
use crate::page::Notice;

/// Result of pressing Submit on the feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Nothing but whitespace was entered.
    Empty,
    Accepted,
}

impl FeedbackOutcome {
    pub fn notice(self) -> Notice {
        match self {
            FeedbackOutcome::Empty => Notice::warning(content::FEEDBACK_EMPTY),
            FeedbackOutcome::Accepted => Notice::success(content::FEEDBACK_THANKS),
        }
    }
}

/// Validate a submission. The text goes nowhere; only the outcome is kept.
pub fn evaluate(text: &str) -> FeedbackOutcome {
    if text.trim().is_empty() {
        FeedbackOutcome::Empty
    } else {
        FeedbackOutcome::Accepted
    }
}

/// Per-session state of the feedback form.
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    pub draft: String,
    pub outcome: Option<FeedbackOutcome>,
}

impl FeedbackForm {
    pub fn submit(&mut self) -> FeedbackOutcome {
        let outcome = evaluate(&self.draft);
        self.outcome = Some(outcome);
        outcome
    }

    pub fn clear(&mut self) {
        self.draft.clear();
        self.outcome = None;
    }
}
