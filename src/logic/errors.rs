use anyhow::Error;

/// Format error message for display - show the root cause, not context wrappers
pub fn format_error_message(error: &Error) -> String {
    error.root_cause().to_string()
}
