use super::error::RuntimeError;

pub trait ErrorFormatter {
    fn format_error(&self, error: &RuntimeError) -> String;
}

pub struct DebugFormatter;

impl ErrorFormatter for DebugFormatter {
    fn format_error(&self, error: &RuntimeError) -> String {
        format!("Error : [{}] {error:?}", error.code())
    }
}

pub struct BasicFormatter;

impl ErrorFormatter for BasicFormatter {
    fn format_error(&self, error: &RuntimeError) -> String {
        format!("Error : {error}")
    }
}
