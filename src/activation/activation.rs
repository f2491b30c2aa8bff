use std::fmt;

use serde::{Deserialize, Serialize};

/// Activation applied by a convolutional, connected or shortcut layer.
///
/// Rendered as the lowercase tag darknet expects (`linear`, `relu`, `leaky`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Relu,
    #[serde(rename = "leaky")]
    LeakyRelu,
}

impl Activation {
    pub fn as_str(self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Relu => "relu",
            Activation::LeakyRelu => "leaky",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
