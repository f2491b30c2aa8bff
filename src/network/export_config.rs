use serde::{Deserialize, Serialize};

use crate::format::LineEnding;

/// Options controlling how a network is written out.
///
/// - `line_ending` — terminator for every line; defaults to the host
///                   platform's convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub line_ending: LineEnding,
}

impl ExportConfig {
    pub fn new(line_ending: LineEnding) -> Self {
        ExportConfig { line_ending }
    }
}
