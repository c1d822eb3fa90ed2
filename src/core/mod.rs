pub mod math;
pub mod palindrome;

pub use math::{add, checked_add};
pub use palindrome::{normalize, normalize_with, palindromo, palindromo_with, NormalizationPolicy};
