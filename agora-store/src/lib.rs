mod record;
pub mod store;

pub use store::{ForumStore, Result, StoreError};
