mod renderer;
mod trace;
mod types;
mod viewer;

pub use renderer::Renderer;
pub use trace::{TraceBuffer, Traces};
pub use types::Frame;
pub use viewer::{default_viewer_factory, Display, Viewer, ViewerFactory};
