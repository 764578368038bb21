//! Mind-map outline parsing.

mod outline;

pub use outline::{indent_level, line_label, parse_outline, OutlineParser};
