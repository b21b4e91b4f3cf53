pub mod combinatorics;
pub mod error;
pub mod group;
pub mod multivariate;
pub mod possibility;
pub mod query;
pub mod univariate;
pub mod validate;

pub use error::ProbabilityError;
pub use group::Group;
pub use query::{MultivariateQuery, UnivariateQuery};
