pub mod resolvers;
pub mod types;

pub use resolvers::{AuthorMutation, AuthorQuery};
pub use types::Author;
