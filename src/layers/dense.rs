use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::error::Result;
use crate::format::{real, Block, CfgWriter};

/// `[connected]` layer; `size` is written as `output`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connected {
    pub size: u32,
    pub activation: Activation,
}

impl Connected {
    pub fn new(size: u32, activation: Activation) -> Connected {
        Connected { size, activation }
    }
}

impl Default for Connected {
    fn default() -> Self {
        Connected::new(1000, Activation::Linear)
    }
}

impl Block for Connected {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[connected]")?;
        out.field("output", self.size)?;
        out.field("activation", self.activation)?;
        out.blank()?;
        Ok(())
    }
}

/// `[dropout]` layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dropout {
    pub probability: f64,
}

impl Dropout {
    pub fn new(probability: f64) -> Dropout {
        Dropout { probability }
    }
}

impl Default for Dropout {
    fn default() -> Self {
        Dropout::new(0.5)
    }
}

impl Block for Dropout {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[dropout]")?;
        out.field("probability", real(self.probability))?;
        out.blank()?;
        Ok(())
    }
}

/// `[softmax]` layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Softmax {
    pub groups: u32,
}

impl Softmax {
    pub fn new(groups: u32) -> Softmax {
        Softmax { groups }
    }
}

impl Default for Softmax {
    fn default() -> Self {
        Softmax::new(1)
    }
}

impl Block for Softmax {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[softmax]")?;
        out.field("groups", self.groups)?;
        out.blank()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::LineEnding;

    fn render(block: &impl Block) -> String {
        let mut out = CfgWriter::new(Vec::new(), LineEnding::Lf);
        block.export(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn connected_writes_size_as_output() {
        assert_eq!(
            render(&Connected::new(4096, Activation::LeakyRelu)),
            "\n[connected]\noutput=4096\nactivation=leaky\n\n"
        );
    }

    #[test]
    fn dropout_probability() {
        assert_eq!(render(&Dropout::default()), "\n[dropout]\nprobability=0.5\n\n");
    }

    #[test]
    fn softmax_groups() {
        assert_eq!(render(&Softmax::default()), "\n[softmax]\ngroups=1\n\n");
    }
}
