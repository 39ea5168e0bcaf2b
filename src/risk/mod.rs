//! Risk measures derived from simulation output.

mod summary;

pub use summary::{TerminalSummary, summarize_terminal, value_at_risk};
