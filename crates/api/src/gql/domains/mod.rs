// Each domain contains: mod.rs, resolvers.rs, types.rs

pub mod authors;
pub mod books;

/// `[T]` in the schema: a nullable list of nullable items.
pub(crate) fn nullable_list<R, T: From<R>>(rows: Vec<R>) -> Option<Vec<Option<T>>> {
    Some(rows.into_iter().map(|row| Some(T::from(row))).collect())
}
