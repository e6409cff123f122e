mod state;

pub use state::WorldState;
