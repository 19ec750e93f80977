//! Resource context labels used when shaping classified error messages.

use std::fmt;

/// The kind of resource an error refers to.
///
/// The label is only ever used to build messages such as
/// `BOARD_ID_IS_INVALID` or `COLUMN_DOES_NOT_EXIST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceContext {
    Board,
    Column,
}

impl ResourceContext {
    /// Upper-case label prefixed to every message for this resource.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Board => "BOARD",
            Self::Column => "COLUMN",
        }
    }

    /// Message reported when an identifier for this resource is malformed.
    ///
    /// # Examples
    /// ```
    /// use taskboard::domain::ResourceContext;
    ///
    /// assert_eq!(ResourceContext::Board.invalid_id_message(), "BOARD_ID_IS_INVALID");
    /// ```
    #[must_use]
    pub fn invalid_id_message(self) -> String {
        format!("{}_ID_IS_INVALID", self.label())
    }

    /// Message reported when the referenced resource is absent.
    #[must_use]
    pub fn does_not_exist_message(self) -> String {
        format!("{}_DOES_NOT_EXIST", self.label())
    }
}

impl fmt::Display for ResourceContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ResourceContext::Board, "BOARD_ID_IS_INVALID", "BOARD_DOES_NOT_EXIST")]
    #[case(ResourceContext::Column, "COLUMN_ID_IS_INVALID", "COLUMN_DOES_NOT_EXIST")]
    fn messages_are_prefixed_with_the_label(
        #[case] context: ResourceContext,
        #[case] invalid: &str,
        #[case] missing: &str,
    ) {
        assert_eq!(context.invalid_id_message(), invalid);
        assert_eq!(context.does_not_exist_message(), missing);
    }
}
