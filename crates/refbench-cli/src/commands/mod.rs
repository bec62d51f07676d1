//! Command implementations.

pub mod compare;
pub mod convert;
pub mod normalize;

pub use self::compare::execute_compare;
pub use self::convert::execute_convert;
pub use self::normalize::execute_normalize;
