//! Plain data types for the console's resources. Each one implements
//! [`ActorEntity`](crate::framework::ActorEntity) in its actor module.

pub mod category;
pub mod product;
pub mod sub_category;

pub use category::*;
pub use product::*;
pub use sub_category::*;
