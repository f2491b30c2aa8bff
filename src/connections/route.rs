use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::connections::LayerRef;
use crate::error::Result;
use crate::format::{join_numeric, Block, CfgWriter};

/// `[route]` connection: forwards (or concatenates) the outputs of the
/// referenced layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub layers: Vec<LayerRef>,
}

impl Route {
    pub fn new(layers: Vec<LayerRef>) -> Route {
        Route { layers }
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new(vec![LayerRef::Back(4)])
    }
}

impl Block for Route {
    fn export<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.open("[route]")?;
        match self.layers.as_slice() {
            [single] => out.field("layers", single)?,
            many => out.field("layers", join_numeric(many, true))?,
        }
        out.blank()?;
        Ok(())
    }
}
