pub mod text;
pub mod writer;

pub use text::{format_anchor_pairs, join_numeric, real};
pub use writer::{Block, CfgWriter, LineEnding};
