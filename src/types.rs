/// Shared types used across the codebase

/// Outcome of a statement that targets one company by id.
/// Not-found is derived from zero affected rows, never from a prior lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    NotFound,
}

impl Mutation {
    /// sqlx negotiates MySQL's found-rows capability, so a matched row counts
    /// even when its values were already current
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Mutation::NotFound
        } else {
            Mutation::Applied
        }
    }
}
