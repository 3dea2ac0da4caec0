use async_graphql::MergedObject;

use crate::gql::domains::authors::AuthorQuery;
use crate::gql::domains::books::BookQuery;

/// Root Query
#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(BookQuery, AuthorQuery);
