//! Utils module split into submodules

mod errors;
mod hands;
mod permute;
mod validation;

pub use errors::UtilsError;
pub use hands::card_hands;
pub use permute::permutations;
pub use validation::validate_numbers;
