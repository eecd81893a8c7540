pub mod classifier;
pub mod confidence;
pub mod finger_state;
pub mod gesture;
pub mod landmark;
pub mod session;
pub mod stability;
pub mod strategy;

#[cfg(test)]
pub mod hands;
