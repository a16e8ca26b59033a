use std::env;

use crate::api::Parameter;
use crate::parser::{
    consume, ConsoleInterface, ParseError, Printer, Registry, UserInterface,
};

/// The command line parser.
///
/// Parameters are declared up front via [`CommandLineParser::add`], the tokens are parsed, and then each value is read back via [`CommandLineParser::arg`].
///
/// ### Example
/// ```
/// # use cliap_builder as cliap;
/// use cliap::{CommandLineParser, Parameter};
///
/// let mut parser = CommandLineParser::new()
///     .add(Parameter::named("p,port").set_default("8080"));
/// parser.parse_tokens(&["program", "--port=9090"]).unwrap();
///
/// assert_eq!(parser.arg("port").value_as::<u16>(), 9090);
/// ```
pub struct CommandLineParser {
    registry: Registry,
    usage_examples: Vec<String>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
    empty: Parameter,
}

impl Default for CommandLineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLineParser {
    /// Create a command line parser which prints to the console.
    pub fn new() -> Self {
        Self::with_interface(Printer::terminal(), Box::new(ConsoleInterface::default()))
    }

    pub(crate) fn with_interface(printer: Printer, user_interface: Box<dyn UserInterface>) -> Self {
        Self {
            registry: Registry::default(),
            usage_examples: Vec::default(),
            printer,
            user_interface,
            empty: Parameter::default(),
        }
    }

    /// Add a parameter to the command line parser.
    ///
    /// Each alias of the parameter is indexed.
    /// When an alias was already taken by an earlier parameter, the later parameter wins that alias, and the earlier parameter loses its other alias.
    /// A non-empty default is copied into the value immediately, so the parameter reads as bound before any parsing.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::{CommandLineParser, Parameter};
    ///
    /// let parser = CommandLineParser::new()
    ///     .add(Parameter::named("h,help"))
    ///     .add(Parameter::named("h,hhhh"));
    ///
    /// assert_eq!(parser.parameter_count(), 1);
    /// assert_eq!(parser.arg("h").long_alias(), "hhhh");
    /// assert!(!parser.arg("help").is_flag());
    /// ```
    pub fn add(mut self, parameter: Parameter) -> Self {
        self.registry.insert(parameter);
        self
    }

    /// Document a free-form usage example, shown at the top of the help message.
    pub fn add_usage_string(mut self, usage: impl Into<String>) -> Self {
        self.usage_examples.push(usage.into());
        self
    }

    /// Run the command line parser against the input tokens.
    /// The first token is the program name, and is never matched.
    ///
    /// Parsing stops at the first error.
    /// Values bound before that point are kept.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::{CommandLineParser, Parameter, ParseError};
    ///
    /// let mut parser = CommandLineParser::new()
    ///     .add(Parameter::named("v,verbose").flag())
    ///     .add(Parameter::named("n,name").required());
    ///
    /// assert_eq!(
    ///     parser.parse_tokens(&["program", "-v", "--bogus"]),
    ///     Err(ParseError::UnknownKey("bogus".to_string()))
    /// );
    /// assert!(parser.arg("v").is_parsed());
    ///
    /// parser.parse_tokens(&["program", "-n", "world"]).unwrap();
    /// assert_eq!(parser.arg("name").value_as_str(), "world");
    /// ```
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<(), ParseError> {
        consume(&mut self.registry, tokens)
    }

    /// Run the command line parser against the process arguments ([`std::env::args`]).
    pub fn parse(&mut self) -> Result<(), ParseError> {
        let command_input: Vec<String> = env::args().collect();
        self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        )
    }

    /// Look up a parameter by either of its aliases.
    /// An unknown alias produces an empty parameter (no aliases, no value, not parsed).
    pub fn arg(&self, alias: &str) -> &Parameter {
        self.registry.get(alias).unwrap_or(&self.empty)
    }

    /// Every parameter, exactly once, in the order it was added.
    pub fn parameters(&self) -> Vec<&Parameter> {
        self.registry.parameters()
    }

    /// The number of distinct parameters.
    pub fn parameter_count(&self) -> usize {
        self.registry.ids().len()
    }

    /// The usage examples, in the order they were added.
    pub fn usage_examples(&self) -> &[String] {
        &self.usage_examples
    }

    /// Discard every parameter and usage example.
    pub fn reset(&mut self) {
        self.registry.clear();
        self.usage_examples.clear();
    }

    /// Print the help message.
    ///
    /// Descriptions are wrapped to the terminal width, when it is known.
    pub fn print_help(&mut self) {
        let widths = self.registry.widen();
        self.printer.print_help(
            &self.usage_examples,
            &self.registry.parameters(),
            widths,
            self.user_interface.as_ref(),
        );
    }

    /// Print a parse error.
    ///
    /// ### Example
    /// ```
    /// # use cliap_builder as cliap;
    /// use cliap::{CommandLineParser, Parameter};
    ///
    /// let mut parser = CommandLineParser::new()
    ///     .add(Parameter::named("h,help").flag())
    ///     .add_usage_string("program -h");
    ///
    /// if let Err(error) = parser.parse_tokens(&["program", "--verbose"]) {
    ///     parser.print_error(&error);
    ///     parser.print_help();
    /// }
    /// ```
    pub fn print_error(&self, error: &ParseError) {
        self.user_interface.print_error(error);
    }

    /// *Available using 'unit_test' crate feature only.*</br></br>
    /// Render the help message, without wrapping, into a `String`.
    #[cfg(feature = "unit_test")]
    pub fn help_message(&mut self) -> String {
        let widths = self.registry.widen();
        Printer::new(None)
            .render(&self.usage_examples, &self.registry.parameters(), widths)
            .join("\n")
    }
}
