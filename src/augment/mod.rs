pub mod augmentation;

pub use augmentation::Augmentation;
