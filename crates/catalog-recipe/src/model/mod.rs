//! Pure data structures: the [`Product`] record and the request shapes derived from it.

pub mod dto;
pub mod product;

pub use dto::*;
pub use product::*;
