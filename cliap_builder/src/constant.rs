// Alias syntax.
pub(crate) const ALIAS_PREFIX: char = '-';
pub(crate) const NAME_SEPARATOR: char = ',';
pub(crate) const VALUE_SEPARATOR: char = '=';

// Help layout.
pub(crate) const USAGE_HEADER: &str = "Usage:";
pub(crate) const INDENT: usize = 4;
pub(crate) const REQUIRED_MARKER: &str = "[required]";
