pub mod behaviors;
pub mod random;
