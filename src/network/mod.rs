pub mod builder;
pub mod export_config;
pub mod network;
pub mod node;

pub use builder::build_reference_detector;
pub use export_config::ExportConfig;
pub use network::NetworkDescriptor;
pub use node::Node;
