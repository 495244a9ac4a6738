//! Pure data types for orders and lookup answers.

pub mod lookup;
pub mod order;

pub use lookup::*;
pub use order::*;
