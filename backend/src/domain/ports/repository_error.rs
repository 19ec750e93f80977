//! Failure conditions raised by the document repositories.

use crate::domain::ConditionTag;

use super::define_port_error;

define_port_error! {
    /// Errors returned by [`super::BoardRepository`] and
    /// [`super::ColumnRepository`].
    pub enum RepositoryError {
        /// An identifier handed to the store is not well formed.
        InvalidId => "INVALID_ID",
        /// The referenced document does not exist.
        NotExist => "NOT_EXIST",
        /// Any other store failure.
        Backend { message: String } => "document store failure: {message}",
    }
}

impl RepositoryError {
    /// The classification tag carried by this failure.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::ConditionTag;
    /// use taskboard::domain::ports::RepositoryError;
    ///
    /// assert_eq!(RepositoryError::not_exist().tag(), ConditionTag::NotExist);
    /// assert_eq!(RepositoryError::backend("disk full").tag(), ConditionTag::Unrecognized);
    /// ```
    #[must_use]
    pub fn tag(&self) -> ConditionTag {
        match self {
            Self::InvalidId => ConditionTag::InvalidId,
            Self::NotExist => ConditionTag::NotExist,
            Self::Backend { .. } => ConditionTag::Unrecognized,
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conditions_display_their_code() {
        assert_eq!(RepositoryError::invalid_id().to_string(), "INVALID_ID");
        assert_eq!(RepositoryError::not_exist().to_string(), "NOT_EXIST");
    }
}
