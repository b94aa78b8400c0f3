//! Console formatting shared by the REPL, the demo and the bench output.
//!
//! Every line the driver prints goes through [`system_message`], tagged
//! with the part of the driver that produced it (`parser`, `perf`, ...).

use colored::Colorize;

use crate::cli::colors::QB_BLUE;

pub fn highlight_argument(argument: &str) -> String {
    //! Paint an id, column name or user input in [`QB_BLUE`] so it stands
    //! out from the surrounding message.

    argument.color(QB_BLUE).to_string()
}

pub fn system_message(source_name: &str, message: String) -> String {
    //! Prefix `message` with a bold, padded `[source]` tag, e.g.
    //! `[perf  ] Remaining records: 90000`.

    let tag = format!("{:6}", source_name.color(QB_BLUE).bold());

    format!("[{}] {}", tag, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_message_keeps_source_and_text() {
        colored::control::set_override(false);

        assert_eq!(
            system_message("perf", "Remaining records: 3".to_string()),
            "[perf  ] Remaining records: 3"
        );
        assert_eq!(highlight_argument("id"), "id");
    }
}
