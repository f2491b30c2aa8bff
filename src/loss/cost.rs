use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{Block, CfgWriter};

/// `[cost]` layer. `loss_type` is written verbatim as `type`
/// (e.g. `sse`, `masked`, `smooth`); empty leaves darknet's default.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cost {
    pub loss_type: String,
}

impl Cost {
    pub fn new(loss_type: impl Into<String>) -> Cost {
        Cost {
            loss_type: loss_type.into(),
        }
    }
}

impl Block for Cost {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[cost]")?;
        out.field("type", &self.loss_type)?;
        out.blank()?;
        Ok(())
    }
}
