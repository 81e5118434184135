use super::SystemContext;

/// Primitives go to stdout, diagnostics to stderr.
pub struct StdioContext;

impl SystemContext for StdioContext {
    fn writeln(&mut self, text: &str) {
        println!("{text}");
    }

    fn ewriteln(&mut self, text: &str) {
        eprintln!("{text}");
    }
}

#[derive(Debug, Default)]
pub struct BufferedContext {
    buffer: String,
    diagnostics: String,
}

impl BufferedContext {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            diagnostics: String::new(),
        }
    }

    pub fn get_data(&self) -> &str {
        &self.buffer
    }

    pub fn get_diagnostics(&self) -> &str {
        &self.diagnostics
    }

    pub fn into_data(self) -> String {
        self.buffer
    }
}

impl SystemContext for BufferedContext {
    fn writeln(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn ewriteln(&mut self, text: &str) {
        self.diagnostics.push_str(text);
        self.diagnostics.push('\n');
    }
}
