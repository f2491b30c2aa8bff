use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::augment::Augmentation;
use crate::error::Result;
use crate::format::{Block, CfgWriter};
use crate::network::{ExportConfig, Node};
use crate::optim::Optimizer;

/// A complete darknet network: input shape, optional global blocks and the
/// ordered layer sequence.
///
/// The `Default` value mirrors the common detector setup: 608x608x3 input
/// with default optimizer and augmentation blocks and no layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub width: u32,
    pub height: u32,
    pub channels: u32,
    #[serde(default)]
    pub optimizer: Option<Optimizer>,
    #[serde(default)]
    pub augmentation: Option<Augmentation>,
    #[serde(default)]
    pub layers: Vec<Node>,
}

impl NetworkDescriptor {
    /// A bare network with the given input shape, no global blocks and no
    /// layers.
    pub fn new(width: u32, height: u32, channels: u32) -> NetworkDescriptor {
        NetworkDescriptor {
            width,
            height,
            channels,
            optimizer: None,
            augmentation: None,
            layers: Vec::new(),
        }
    }

    pub fn with_optimizer(mut self, optimizer: Optimizer) -> Self {
        self.optimizer = Some(optimizer);
        self
    }

    pub fn with_augmentation(mut self, augmentation: Augmentation) -> Self {
        self.augmentation = Some(augmentation);
        self
    }

    pub fn with_layers(mut self, layers: Vec<Node>) -> Self {
        self.layers = layers;
        self
    }

    /// Appends a layer to the end of the sequence.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.layers.push(node.into());
    }

    /// Writes the `[net]` header, the optimizer and augmentation blocks (when
    /// present) and then every layer in order.
    ///
    /// Only sink failures are reported; the layer sequence is not checked.
    pub fn export<W: Write>(&self, sink: W, config: &ExportConfig) -> Result<()> {
        info!(
            "exporting {}x{}x{} network with {} layers",
            self.width,
            self.height,
            self.channels,
            self.layers.len()
        );
        let mut out = CfgWriter::new(sink, config.line_ending);

        self.export_header(&mut out)?;
        if let Some(optimizer) = &self.optimizer {
            optimizer.export(&mut out)?;
        }
        if let Some(augmentation) = &self.augmentation {
            augmentation.export(&mut out)?;
        }
        for (index, node) in self.layers.iter().enumerate() {
            debug!("layer {index}: {}", node.tag());
            node.export(&mut out)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Renders the whole configuration into a string.
    pub fn to_cfg_string(&self, config: &ExportConfig) -> Result<String> {
        let mut buf = Vec::new();
        self.export(&mut buf, config)?;
        String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    /// Creates (or truncates) `path` and writes the configuration into it.
    pub fn generate_config<P: AsRef<Path>>(&self, path: P, config: &ExportConfig) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.export(BufWriter::new(file), config)?;
        info!("wrote {}", path.display());
        Ok(())
    }

    /// Serializes the descriptor to a pretty-printed JSON file.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    /// Deserializes a descriptor from a JSON file written by `save_json`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<NetworkDescriptor> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn export_header<W: Write>(&self, out: &mut CfgWriter<W>) -> Result<()> {
        out.line("[net]")?;
        out.line("# Network Dimensions")?;
        out.field("width", self.width)?;
        out.field("height", self.height)?;
        out.field("channels", self.channels)?;
        Ok(())
    }
}

impl Default for NetworkDescriptor {
    fn default() -> Self {
        NetworkDescriptor::new(608, 608, 3)
            .with_optimizer(Optimizer::default())
            .with_augmentation(Augmentation::default())
    }
}
