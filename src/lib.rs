pub mod ast;
pub mod demo;
pub mod interpreter;
