pub mod baseline;
pub mod epsilon_greedy;
pub mod errors;
mod policy;
mod strategy;
pub mod ucb;

pub use policy::{Policy, PolicyParams, PolicyType};
pub use strategy::Strategy;
