use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{real, Block, CfgWriter};

/// Image augmentation parameters (`# Image Augmentation Parameters`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Augmentation {
    pub hue: f64,
    pub saturation: f64,
    pub exposure: f64,
    /// Maximum random rotation, in degrees.
    pub angle: i32,
}

impl Default for Augmentation {
    fn default() -> Self {
        Augmentation {
            hue: 0.1,
            saturation: 1.5,
            exposure: 1.5,
            angle: 0,
        }
    }
}

impl Block for Augmentation {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("# Image Augmentation Parameters")?;
        out.field("hue", real(self.hue))?;
        out.field("saturation", real(self.saturation))?;
        out.field("exposure", real(self.exposure))?;
        out.field("angle", self.angle)?;
        out.blank()?;
        Ok(())
    }
}
