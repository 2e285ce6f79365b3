// nfcdose/src/link/mod.rs

//! Tag link abstraction and its scripted test double.

pub mod mock;
pub mod traits;

pub use mock::MockTagLink;
pub use traits::TagLink;
