use async_graphql::MergedObject;

use crate::gql::domains::authors::AuthorMutation;
use crate::gql::domains::books::BookMutation;

/// Root Mutation
#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(BookMutation, AuthorMutation);
