/// Errors from converting strings, raw discriminants and `char`s into a
/// [`Type`] or [`Value`].
///
/// [`Type`]: crate::Type
/// [`Value`]: crate::Value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Unknown type name: '{0}'")]
    UnknownType(String),

    #[error("Invalid type tag: {0}")]
    InvalidTag(u8),

    #[error("Not a Latin-1 character: {0:?}")]
    NotAByte(char),
}
