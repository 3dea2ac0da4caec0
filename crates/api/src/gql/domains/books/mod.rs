pub mod resolvers;
pub mod types;

pub use resolvers::{BookMutation, BookQuery};
pub use types::Book;
