// ============================================================================
// Utilities Module
// Display helpers that work on canonical digit strings
// ============================================================================

mod format;

pub use format::{format_grouped, write_grouped, THOUSAND_SEPARATOR};
