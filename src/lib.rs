pub mod activation;
pub mod augment;
pub mod connections;
pub mod error;
pub mod format;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;

// Convenience re-exports
pub use activation::Activation;
pub use augment::Augmentation;
pub use connections::{LayerRef, Route, Shortcut};
pub use error::{CfgError, Result};
pub use format::{format_anchor_pairs, join_numeric, LineEnding};
pub use layers::{Connected, Convolution, Dropout, MaxPool, Softmax, Upsample, Yolo, DEFAULT_ANCHORS};
pub use loss::Cost;
pub use network::{build_reference_detector, ExportConfig, NetworkDescriptor, Node};
pub use optim::{DecayPolicy, LrSchedule, Optimizer};
