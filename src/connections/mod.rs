pub mod layer_ref;
pub mod route;
pub mod shortcut;

pub use layer_ref::LayerRef;
pub use route::Route;
pub use shortcut::Shortcut;
