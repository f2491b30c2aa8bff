use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::connections::LayerRef;
use crate::error::Result;
use crate::format::{Block, CfgWriter};

/// `[shortcut]` residual connection: adds the referenced layer's output to
/// the previous layer's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub from: LayerRef,
    pub activation: Activation,
}

impl Shortcut {
    pub fn new(from: LayerRef, activation: Activation) -> Shortcut {
        Shortcut { from, activation }
    }
}

impl Default for Shortcut {
    fn default() -> Self {
        Shortcut::new(LayerRef::Back(3), Activation::Linear)
    }
}

impl Block for Shortcut {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[shortcut]")?;
        out.field("from", self.from)?;
        out.field("activation", self.activation)?;
        out.blank()?;
        Ok(())
    }
}
