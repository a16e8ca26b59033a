use terminal_size::{terminal_size, Width};

use crate::api::Parameter;
use crate::constant::*;
use crate::model::ColumnWidths;
use crate::parser::interface::UserInterface;
use crate::parser::{ColumnRenderer, LeftWidth, TotalWidth};

// Account for "-" before the short alias, " [ --" (or " [   ") before the long alias, and " ] " after it.
const LEFT_DECORATION_WIDTH: usize = 1 + 5 + 3;

pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    /// Render the usage examples followed by one row per parameter.
    pub(crate) fn render(
        &self,
        usage_examples: &[String],
        parameters: &[&Parameter],
        widths: ColumnWidths,
    ) -> Vec<String> {
        let mut lines = vec![USAGE_HEADER.to_string()];

        for example in usage_examples {
            lines.push(format!("{:INDENT$}{example}", ""));
        }

        lines.push("".to_string());

        let left_width = LeftWidth::new(INDENT + LEFT_DECORATION_WIDTH + widths.short + widths.long);
        let column_renderer = match &self.terminal_width {
            Some(tw) => ColumnRenderer::guided(left_width, TotalWidth(*tw)),
            None => ColumnRenderer::unbounded(left_width),
        };

        for parameter in parameters {
            let long = if parameter.long_alias().is_empty() {
                format!(" [   {:width$}", "", width = widths.long)
            } else {
                format!(" [ --{:width$}", parameter.long_alias(), width = widths.long)
            };
            let left = format!(
                "{:INDENT$}-{:width$}{long} ] ",
                "",
                parameter.short_alias(),
                width = widths.short
            );

            let mut suffix = String::default();

            if parameter.is_required() {
                suffix.push(' ');
                suffix.push_str(REQUIRED_MARKER);
            }

            if !parameter.default_value().is_empty() {
                suffix.push_str(&format!(
                    " (default: {:width$})",
                    parameter.default_value(),
                    width = widths.default
                ));
            }

            lines.extend(column_renderer.render(&left, parameter.description(), &suffix));
        }

        lines
    }

    pub(crate) fn print_help(
        &self,
        usage_examples: &[String],
        parameters: &[&Parameter],
        widths: ColumnWidths,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.render(usage_examples, parameters, widths) {
            user_interface.print(line);
        }
    }
}
