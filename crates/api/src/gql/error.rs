use async_graphql::ErrorExtensions;
use infra::StoreError;

/// Unified error type for GraphQL resolvers.
///
/// Convert with [`ResultExt::gql`] (or [`ErrorExtensions::extend`]) so every
/// error carries a machine-readable `code` extension:
///   - `Store` logs the real failure and shows "Internal database error"
///   - `AuthorNotFound` is the reference error raised by `addBook`
#[derive(Debug)]
pub enum GqlError {
    Store(StoreError),
    AuthorNotFound(i32),
}

impl GqlError {
    pub fn code(&self) -> &'static str {
        match self {
            GqlError::Store(_) => "INTERNAL_SERVER_ERROR",
            GqlError::AuthorNotFound(_) => "REFERENCE_ERROR",
        }
    }
}

impl std::fmt::Display for GqlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GqlError::Store(_) => write!(f, "Internal database error"),
            GqlError::AuthorNotFound(id) => write!(f, "Author with ID {id} does not exist."),
        }
    }
}

impl std::error::Error for GqlError {}

impl From<StoreError> for GqlError {
    fn from(e: StoreError) -> Self {
        GqlError::Store(e)
    }
}

impl ErrorExtensions for GqlError {
    fn extend(&self) -> async_graphql::Error {
        if let GqlError::Store(e) = self {
            // Log the real error server-side; clients only see the generic message
            tracing::error!("Store error: {e}");
        }
        async_graphql::Error::new(self.to_string())
            .extend_with(|_, ext| ext.set("code", self.code()))
    }
}

/// Converts store results into `async_graphql::Result` through [`GqlError`].
///
/// Usage: `state.store.find_all_books().await.gql()?`
pub trait ResultExt<T> {
    fn gql(self) -> async_graphql::Result<T>;
}

impl<T, E: Into<GqlError>> ResultExt<T> for std::result::Result<T, E> {
    fn gql(self) -> async_graphql::Result<T> {
        self.map_err(|e| Into::<GqlError>::into(e).extend())
    }
}
