mod environment;
mod render;

pub use environment::{EnvConfig, DEFAULT_TIME_STEP, MAX_WINDOW_SIZE};
pub use render::RenderMode;
