use crate::forms::submit::FormFeedback;
use crate::ui::messages::{error, field_error, hint, info, success};

/// Terminal rendering of form feedback. Auto-clear delays are meaningless on
/// a scrollback terminal, so the messages are simply printed.
#[derive(Default)]
pub struct CliFeedback {
    busy: bool,
}

impl CliFeedback {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormFeedback for CliFeedback {
    fn set_busy(&mut self, busy: bool) {
        if busy && !self.busy {
            info("Saving…");
        }
        self.busy = busy;
    }

    fn field_valid(&mut self, _field: &str) {
        // Valid fields are not decorated on the terminal.
    }

    fn field_invalid(&mut self, field: &str, message: &str) {
        field_error(field, message);
    }

    fn focus_field(&mut self, field: &str) {
        hint(format!("Start with '{field}'."));
    }

    fn show_success(&mut self, message: &str, _clear_after_secs: u64) {
        success(message);
    }

    fn show_error(&mut self, message: &str, _clear_after_secs: u64) {
        error(message);
    }
}
