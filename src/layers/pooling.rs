use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{Block, CfgWriter};

/// `[maxpool]` layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxPool {
    pub size: u32,
    pub stride: u32,
    pub padding: u32,
}

impl MaxPool {
    pub fn new(size: u32, stride: u32, padding: u32) -> MaxPool {
        MaxPool { size, stride, padding }
    }
}

impl Default for MaxPool {
    fn default() -> Self {
        MaxPool::new(3, 2, 0)
    }
}

impl Block for MaxPool {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[maxpool]")?;
        out.field("size", self.size)?;
        out.field("stride", self.stride)?;
        out.field("padding", self.padding)?;
        out.blank()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LineEnding;

    #[test]
    fn renders_size_stride_padding() {
        let mut out = CfgWriter::new(Vec::new(), LineEnding::Lf);
        MaxPool::default().export(&mut out).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "\n[maxpool]\nsize=3\nstride=2\npadding=0\n\n");
    }
}
