use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{format_anchor_pairs, join_numeric, real, Block, CfgWriter};

/// The nine reference anchor boxes, flattened as `w0, h0, w1, h1, ...`.
pub const DEFAULT_ANCHORS: [u32; 18] = [
    10, 13, 16, 30, 33, 23, //
    30, 61, 62, 45, 59, 119, //
    116, 90, 156, 198, 373, 326, //
];

/// `[yolo]` detection head.
///
/// `anchors` is the full flattened anchor set shared by every head of a
/// network; `mask` picks which pairs (by zero-based pair index) this head
/// predicts. `num` is derived from the anchor count when rendered.
///
/// Unlike every other block, no blank line follows the last field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yolo {
    pub mask: Vec<u32>,
    pub anchors: Vec<u32>,
    pub classes: u32,
    pub jitter: f64,
    pub ignore_thresh: f64,
    pub truth_thresh: f64,
    pub random: bool,
}

impl Yolo {
    pub fn new(anchors: Vec<u32>, classes: u32, mask: Vec<u32>) -> Yolo {
        Yolo {
            mask,
            anchors,
            classes,
            ..Yolo::default()
        }
    }

    /// Number of complete anchor pairs.
    pub fn num_anchors(&self) -> usize {
        self.anchors.len() / 2
    }
}

impl Default for Yolo {
    fn default() -> Self {
        Yolo {
            mask: vec![6, 7, 8],
            anchors: DEFAULT_ANCHORS.to_vec(),
            classes: 80,
            jitter: 0.5,
            ignore_thresh: 0.5,
            truth_thresh: 1.0,
            random: true,
        }
    }
}

impl Block for Yolo {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        debug!("yolo: mask {:?}, {} classes", self.mask, self.classes);
        out.open("[yolo]")?;
        out.field("mask", join_numeric(&self.mask, false))?;
        out.field("anchors", format_anchor_pairs(&self.anchors))?;
        out.field("classes", self.classes)?;
        out.field("num", self.num_anchors())?;
        out.field("jitter", real(self.jitter))?;
        out.field("ignore_thresh", real(self.ignore_thresh))?;
        out.field("truth_thresh", real(self.truth_thresh))?;
        out.field("random", u8::from(self.random))?;
        Ok(())
    }
}
