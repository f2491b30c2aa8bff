use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::activation::Activation;
use crate::error::Result;
use crate::format::{Block, CfgWriter};

/// `[convolutional]` layer.
///
/// Fields:
/// - `size`            — kernel width/height
/// - `filters`         — number of output channels
/// - `stride`          — kernel step
/// - `pad`             — darknet pad flag (`1` pads by `size / 2`)
/// - `activation`      — activation after the convolution
/// - `batch_normalize` — emitted as `batch_normalize=1` only when set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Convolution {
    pub size: u32,
    pub filters: u64,
    pub stride: u32,
    pub pad: u32,
    pub activation: Activation,
    pub batch_normalize: bool,
}

impl Convolution {
    pub fn new(
        filters: u64,
        size: u32,
        stride: u32,
        pad: u32,
        activation: Activation,
        batch_normalize: bool,
    ) -> Convolution {
        Convolution {
            size,
            filters,
            stride,
            pad,
            activation,
            batch_normalize,
        }
    }

    /// Batch-normalized, padded, leaky convolution; the backbone's workhorse.
    pub fn leaky(filters: u64, size: u32, stride: u32) -> Convolution {
        Convolution::new(filters, size, stride, 1, Activation::LeakyRelu, true)
    }

    /// 1x1 linear convolution without batch normalization, as placed right
    /// before a detection head.
    pub fn linear(filters: u64) -> Convolution {
        Convolution::new(filters, 1, 1, 1, Activation::Linear, false)
    }
}

impl Default for Convolution {
    fn default() -> Self {
        Convolution::new(255, 1, 3, 1, Activation::LeakyRelu, true)
    }
}

impl Block for Convolution {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        debug!("convolutional: {} filters, {}x{}/{}", self.filters, self.size, self.size, self.stride);
        out.open("[convolutional]")?;
        if self.batch_normalize {
            out.field("batch_normalize", 1)?;
        }
        out.field("size", self.size)?;
        out.field("stride", self.stride)?;
        out.field("pad", self.pad)?;
        out.field("filters", self.filters)?;
        out.field("activation", self.activation)?;
        out.blank()?;
        Ok(())
    }
}
