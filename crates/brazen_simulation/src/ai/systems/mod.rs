//! AI systems (strategic layer logic)

pub mod fsm;
pub mod movement;

// Re-export all systems
pub use fsm::*;
pub use movement::*;
