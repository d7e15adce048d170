//! AI systems (enemy FSM + contact damage)

pub mod contact;
pub mod fsm;

pub use contact::*;
pub use fsm::*;
