pub mod clock;
pub mod engine;
pub mod input;
pub mod result;
pub mod state;
pub mod timer;

pub use engine::{ExhaustionPolicy, Phase, SessionConfig, SessionEngine};
pub use result::{SessionResult, Snapshot, Update};
