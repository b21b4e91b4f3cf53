pub mod compose;
pub mod multivariate;
pub mod univariate;

pub use compose::STARTING_HAND_SIZE;
