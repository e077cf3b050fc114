use crate::feedback::{FeedbackForm, FeedbackOutcome};
use crate::views::View;

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// One user's interaction state, independent of rendering.
#[derive(Debug, Default)]
pub struct Session {
    /// Currently selected view.
    view: View,

    /// Feedback draft and last outcome (Summary view only).
    pub feedback: FeedbackForm,

    /// Status / error message shown in the navigation bar.
    pub status_message: Option<String>,
}

impl Session {
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch to `view`. Returns `true` if the selection changed, in which
    /// case the feedback form and status line start over.
    pub fn select(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        log::info!("Selected view: {}", view.label());
        self.view = view;
        self.feedback.clear();
        self.status_message = None;
        true
    }

    pub fn submit_feedback(&mut self) -> FeedbackOutcome {
        let outcome = self.feedback.submit();
        log::debug!("Feedback submitted: {outcome:?}");
        outcome
    }
}
