pub mod engine;
pub mod protocol;

pub use engine::GameEngine;
pub use protocol::{EngineCommand, EngineResponse};
