pub mod convolution;
pub mod dense;
pub mod pooling;
pub mod upsample;
pub mod yolo;

pub use convolution::Convolution;
pub use dense::{Connected, Dropout, Softmax};
pub use pooling::MaxPool;
pub use upsample::Upsample;
pub use yolo::{Yolo, DEFAULT_ANCHORS};
