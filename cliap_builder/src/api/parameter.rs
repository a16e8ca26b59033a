use std::str::FromStr;

use crate::api::capture::{capture, InvalidConversion};
use crate::constant::*;
use crate::parser::ConfigError;

fn strip_prefix(alias: &str) -> &str {
    alias.trim_start_matches(ALIAS_PREFIX)
}

/// A named parameter for the command line parser.
/// Used with [`CommandLineParser::add`](./struct.CommandLineParser.html#method.add).
///
/// The declaration (aliases, default, help, required-ness, flag-ness) is fixed once the parameter is added.
/// The bound value and parsed state are then filled in by the parser.
///
/// Every textual attribute uses the empty string to mean "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameter {
    short: String,
    long: String,
    default: String,
    help: String,
    value: String,
    required: bool,
    flag: bool,
    parsed: bool,
}

impl Parameter {
    /// Create a parameter from a combined name, such as `"p,port"` or `"--port, -p"`.
    ///
    /// The names are split on `,`, and each is stripped of surrounding spaces and leading `-`.
    /// A single name is a short alias when it is one character long, and a long alias otherwise.
    /// With two names, the shorter becomes the short alias and the longer the long alias, regardless of order.
    ///
    /// A malformed name is a programming error, so this panics.
    /// See [`Parameter::try_named`] for the non-panicking version.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::Parameter;
    ///
    /// let port = Parameter::named("--port, -p");
    /// assert_eq!(port.short_alias(), "p");
    /// assert_eq!(port.long_alias(), "port");
    /// ```
    pub fn named(names: &str) -> Self {
        match Self::try_named(names) {
            Ok(parameter) => parameter,
            Err(error) => panic!("{error}"),
        }
    }

    /// Create a parameter from a combined name, as a Result.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::Parameter;
    ///
    /// assert!(Parameter::try_named("h,help").is_ok());
    /// assert!(Parameter::try_named("a,b").is_err());
    /// assert!(Parameter::try_named("alpha,beta").is_err());
    /// assert!(Parameter::try_named(" , ").is_err());
    /// ```
    pub fn try_named(names: &str) -> Result<Self, ConfigError> {
        let names: Vec<&str> = names
            .split(NAME_SEPARATOR)
            .map(|name| strip_prefix(name.trim_matches(' ')))
            .filter(|name| !name.is_empty())
            .collect();

        let (short, long) = match names.as_slice() {
            [] => {
                return Err(ConfigError(
                    "Command line parameter must have name".to_string(),
                ));
            }
            [name] => {
                if name.chars().count() == 1 {
                    (name.to_string(), String::default())
                } else {
                    (String::default(), name.to_string())
                }
            }
            [first, second, ..] => {
                let first_length = first.chars().count();
                let second_length = second.chars().count();

                if first_length == 1 && second_length == 1 {
                    return Err(ConfigError(
                        "Command line parameter must have only one short name".to_string(),
                    ));
                }

                if first_length > 1 && second_length > 1 {
                    return Err(ConfigError(
                        "Command line parameter must have only one long name".to_string(),
                    ));
                }

                if first_length < second_length {
                    (first.to_string(), second.to_string())
                } else {
                    (second.to_string(), first.to_string())
                }
            }
        };

        Ok(Self {
            short,
            long,
            ..Self::default()
        })
    }

    /// Set the short alias (leading `-` are stripped).
    /// If repeated, only the final alias will apply.
    ///
    /// Unlike [`Parameter::named`], the length is not checked.
    pub fn short(mut self, alias: impl AsRef<str>) -> Self {
        self.short = strip_prefix(alias.as_ref()).to_string();
        self
    }

    /// Set the long alias (leading `-` are stripped).
    /// If repeated, only the final alias will apply.
    pub fn long(mut self, alias: impl AsRef<str>) -> Self {
        self.long = strip_prefix(alias.as_ref()).to_string();
        self
    }

    /// Document the help message for this parameter.
    /// If repeated, only the final message will apply to the parameter.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::Parameter;
    ///
    /// let port = Parameter::named("p,port")
    ///     .help("--this will get discarded--")
    ///     .help("listen port");
    /// assert_eq!(port.description(), "listen port");
    /// ```
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help = description.into();
        self
    }

    /// Set the default value.
    ///
    /// The default only becomes the bound value when the parameter is added to a parser.
    pub fn set_default(mut self, value: impl Into<String>) -> Self {
        self.default = value.into();
        self
    }

    /// Set the bound value directly.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Require the parameter to hold a value once parsing completes.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Make the parameter a flag: it never takes a value, and is marked parsed when present.
    pub fn flag(mut self) -> Self {
        self.flag = true;
        self
    }

    /// The short alias, or `""`.
    pub fn short_alias(&self) -> &str {
        &self.short
    }

    /// The long alias, or `""`.
    pub fn long_alias(&self) -> &str {
        &self.long
    }

    /// The default value, or `""`.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    /// The help message, or `""`.
    pub fn description(&self) -> &str {
        &self.help
    }

    /// The bound value, or `""`.
    pub fn value_as_str(&self) -> &str {
        &self.value
    }

    /// Whether the parameter is required.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the parameter is a flag.
    pub fn is_flag(&self) -> bool {
        self.flag
    }

    /// Whether the parameter was matched by the last parse.
    ///
    /// A parameter holding only its default value is not parsed.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Convert the bound value into `T`.
    ///
    /// Returns `T::default()` both when there is no bound value and when the conversion fails.
    /// Use [`Parameter::try_value_as`] to tell these cases apart.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::Parameter;
    ///
    /// let port = Parameter::named("port").value("8080");
    /// assert_eq!(port.value_as::<u16>(), 8080);
    /// assert_eq!(port.value_as::<char>(), char::default());
    /// ```
    pub fn value_as<T: FromStr + Default>(&self) -> T {
        self.try_value_as().ok().flatten().unwrap_or_default()
    }

    /// Convert the bound value into `T`, as a Result.
    ///
    /// Returns `Ok(None)` when there is no bound value.
    pub fn try_value_as<T: FromStr>(&self) -> Result<Option<T>, InvalidConversion> {
        if self.value.is_empty() {
            Ok(None)
        } else {
            capture(&self.value).map(Some)
        }
    }

    pub(crate) fn bind(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub(crate) fn matched(&mut self) {
        self.parsed = true;
    }

    /// Seed the bound value from the default, unless a value is already bound.
    pub(crate) fn seed(&mut self) -> bool {
        if !self.default.is_empty() && self.value.is_empty() {
            self.value = self.default.clone();
            true
        } else {
            false
        }
    }
}
