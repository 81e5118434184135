pub mod context;
pub mod environment;
pub mod error;
pub mod formatter;
mod native;
mod stack;
mod tree;
pub mod turtle;

pub use tree::{TreeWalkInterpreter, TreeWalkStatementInterpreter};

pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// Outcome of a run that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Finished,
}

/// Where the interpreter writes primitives (`writeln`) and diagnostics (`ewriteln`).
pub trait SystemContext {
    fn writeln(&mut self, text: &str);
    fn ewriteln(&mut self, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Seed for `random`. `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Deepest allowed nesting of procedure calls.
    pub max_call_depth: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }
}

impl InterpreterConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}
