use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{Block, CfgWriter};

/// `[upsample]` layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upsample {
    pub stride: u32,
}

impl Upsample {
    pub fn new(stride: u32) -> Upsample {
        Upsample { stride }
    }
}

impl Default for Upsample {
    fn default() -> Self {
        Upsample::new(2)
    }
}

impl Block for Upsample {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[upsample]")?;
        out.field("stride", self.stride)?;
        out.blank()?;
        Ok(())
    }
}
