mod cache;
pub mod constants;
mod core;
mod errors;
pub mod search;
mod survey;

pub use cache::{CanonicalKey, SolutionCache};
pub use self::core::Solver24;
pub use errors::SolverError;
pub use search::{Candidate, Shape};
pub use survey::SurveyReport;
