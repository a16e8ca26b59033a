use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Self {
        LeftWidth(width)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // middle must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(MiddleWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug)]
pub(crate) struct TotalWidth(pub usize);

// Let's assume the average word length is 5.
// Then 17 is a good minimum, because it allows precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// Renders one help row: an aligned left cell, followed by a (possibly wrapped) description.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    left: LeftWidth,
    middle: Option<MiddleWidth>,
}

impl ColumnRenderer {
    /// Produce a renderer that never wraps.
    pub(crate) fn unbounded(left: LeftWidth) -> Self {
        Self { left, middle: None }
    }

    /// Produce a renderer that wraps the description to fit the total width.
    /// The description column never shrinks below [`MINIMUM_MIDDLE_WIDTH`].
    pub(crate) fn guided(left: LeftWidth, total_width: TotalWidth) -> Self {
        let middle = if left.0 < total_width.0 {
            std::cmp::max(total_width.0 - left.0, MINIMUM_MIDDLE_WIDTH)
        } else {
            MINIMUM_MIDDLE_WIDTH
        };
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Left column {} within total {}.  Selecting middle: {middle}.", left.0, total_width.0);
        }

        Self {
            left,
            middle: MiddleWidth::new(middle).ok(),
        }
    }

    /// Render `left`, then `middle`, then `suffix` (appended after the final line of `middle`).
    ///
    /// Only `middle` is wrapped; `left` must already be padded to the left width.
    pub(crate) fn render(&self, left: &str, middle: &str, suffix: &str) -> Vec<String> {
        debug_assert_eq!(left.chars().count(), self.left.0);
        let single = format!("{left}{middle}{suffix}");

        let width = match &self.middle {
            Some(MiddleWidth(width)) if middle.chars().count() + suffix.chars().count() > *width => {
                *width
            }
            _ => return vec![single],
        };

        let mut parts = chunk(middle, width);
        match parts.last_mut() {
            Some(last) => last.push_str(suffix),
            None => return vec![single],
        }

        parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| {
                if i == 0 {
                    format!("{left}{part}")
                } else {
                    format!("{:width$}{part}", "", width = self.left.0)
                }
            })
            .collect()
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.chars().count() + word.chars().count() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let characters: Vec<char> = word.chars().collect();
    let mut left = 0;

    while characters.len() - left > width {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}

pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: &ParseError);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: &ParseError) {
        eprintln!("{error}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ParseError, UserInterface};
    use std::sync::mpsc;

    pub(crate) fn channel_interface() -> (SenderInterface, ReceiverInterface) {
        let (message_tx, message_rx) = mpsc::channel();
        let (error_tx, error_rx) = mpsc::channel();
        let sender = SenderInterface {
            message_tx,
            error_tx,
        };
        let receiver = ReceiverInterface {
            message_rx,
            error_rx,
        };
        (sender, receiver)
    }

    pub(crate) struct SenderInterface {
        message_tx: mpsc::Sender<Option<String>>,
        error_tx: mpsc::Sender<Option<String>>,
    }

    impl Drop for SenderInterface {
        fn drop(&mut self) {
            self.message_tx.send(None).unwrap();
            self.error_tx.send(None).unwrap();
        }
    }

    impl UserInterface for SenderInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, with the receiver concatenating the messages.
            self.message_tx.send(Some(message)).unwrap();
        }

        fn print_error(&self, error: &ParseError) {
            self.error_tx.send(Some(error.to_string())).unwrap();
        }
    }

    pub(crate) struct ReceiverInterface {
        message_rx: mpsc::Receiver<Option<String>>,
        error_rx: mpsc::Receiver<Option<String>>,
    }

    impl ReceiverInterface {
        /// Requires the sender to have been dropped.
        pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
            let ReceiverInterface {
                message_rx,
                error_rx,
            } = self;

            (drain(message_rx), drain(error_rx))
        }

        pub(crate) fn consume_message(self) -> String {
            let (message, error) = self.consume();
            assert_eq!(error, None);
            message.unwrap()
        }
    }

    fn drain(receiver: mpsc::Receiver<Option<String>>) -> Option<String> {
        let mut values = Vec::default();

        while let Some(message) = receiver.recv().unwrap() {
            values.push(message);
        }

        if values.is_empty() {
            None
        } else {
            Some(values.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn column_renderer_unbounded() {
        let cr = ColumnRenderer::unbounded(LeftWidth::new(4));

        assert_eq!(
            cr.render("abc ", "something pieces fullest more stuff extra", " [x]"),
            vec!["abc something pieces fullest more stuff extra [x]".to_string()]
        );
        assert_eq!(cr.render("abc ", "", " [x]"), vec!["abc  [x]".to_string()]);
    }

    #[test]
    fn column_renderer_guided() {
        let cr = ColumnRenderer::guided(LeftWidth::new(5), TotalWidth(27));

        assert_eq!(
            cr.render("abc  ", "something pieces", " [x]"),
            vec!["abc  something pieces [x]".to_string()]
        );
        assert_eq!(
            cr.render("abc  ", "something pieces fullest more stuff extra", " [x]"),
            vec![
                "abc  something pieces".to_string(),
                "     fullest more stuff".to_string(),
                "     extra [x]".to_string(),
            ]
        );
    }

    #[test]
    fn column_renderer_guided_minimum() {
        let cr = ColumnRenderer::guided(LeftWidth::new(5), TotalWidth(3));

        assert_eq!(
            cr.render("abc  ", "something pieces fullest", ""),
            vec![
                "abc  something pieces".to_string(),
                "     fullest".to_string(),
            ]
        );
    }

    #[rstest]
    #[case("", 5, vec![])]
    #[case("  ", 5, vec![])]
    #[case("abc", 5, vec!["abc"])]
    #[case("abc def", 7, vec!["abc def"])]
    #[case("abc def", 6, vec!["abc", "def"])]
    #[case("abcdefgh", 5, vec!["abcd-", "efgh"])]
    #[case("abcdefghi", 5, vec!["abcd-", "efghi"])]
    #[case("ab abcdefghij", 5, vec!["ab", "abcd-", "efgh-", "ij"])]
    #[case("größenordnung", 5, vec!["größ-", "enor-", "dnung"])]
    fn chunk_paragraph(#[case] paragraph: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(chunk(paragraph, width), expected);
    }
}
