use std::str::FromStr;
use thiserror::Error;

/// A bound value could not be converted into the requested type.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("cannot convert '{token}' to {type_name}.")]
pub struct InvalidConversion {
    /// The bound value that failed to convert.
    pub token: String,
    /// The name of the requested type.
    pub type_name: &'static str,
}

/// Convert a bound value into `T` via [`std::str::FromStr`].
///
/// Conversion is locale independent: it relies on the `FromStr` implementation of `T` only.
pub(crate) fn capture<T: FromStr>(token: &str) -> Result<T, InvalidConversion> {
    T::from_str(token).map_err(|_| InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
    })
}
