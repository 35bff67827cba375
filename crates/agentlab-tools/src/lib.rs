//! Local tools the agents call instead of the general-purpose model:
//! a keyword-driven calculator and a model-backed English→German translator.

pub mod calculator;
pub mod error;
pub mod tool;
pub mod translator;

pub use calculator::{calculate, format_number, Calculation, Calculator, Operation};
pub use error::ToolError;
pub use tool::{Tool, ToolResult};
pub use translator::{Translation, Translator, LANGUAGE_PAIR};
