/// Stable handle of a parameter record inside the registry arena.
///
/// Handles are issued in registration order, so ordering by handle is ordering by registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct ParameterId(pub(crate) usize);

impl std::fmt::Display for ParameterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Widest values seen so far for each aligned help column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ColumnWidths {
    pub(crate) short: usize,
    pub(crate) long: usize,
    pub(crate) default: usize,
}

impl ColumnWidths {
    pub(crate) fn widen(&mut self, short: &str, long: &str, default: &str) {
        self.short = std::cmp::max(self.short, short.chars().count());
        self.long = std::cmp::max(self.long, long.chars().count());
        self.default = std::cmp::max(self.default, default.chars().count());
    }
}
