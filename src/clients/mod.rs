//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client maps framework errors back to its resource's error enum and adds the
//! resource-specific calls. `get`, `list` and `delete` come from
//! [`ActorClient`](crate::framework::ActorClient).

pub mod category_client;
pub mod product_client;
pub mod sub_category_client;

pub use category_client::*;
pub use product_client::*;
pub use sub_category_client::*;
