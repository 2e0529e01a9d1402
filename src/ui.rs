/// Status and error output for the CLI
///
/// This module handles:
/// - Status message formatting
/// - Colored terminal text with plain fallback

use std::io::Write;

/// Print a status message with the "slack-ctrf: " prefix
pub fn status(s: &str) {
    println!("slack-ctrf: {}", s);
}

/// Print an error message with a colored "error" prefix
pub fn print_error(msg: &str) {
    println!();
    print_colored_bold("error", term::color::BRIGHT_RED);
    println!(": {}", msg);
    println!();
}

/// Print bold colored text, falling back to plain text when the terminal
/// does not support color
fn print_colored_bold(s: &str, fg: term::color::Color) {
    let colored = term::stdout().is_some_and(|mut t| {
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        let written = write!(t, "{}", s).is_ok();
        let _ = t.reset();
        written
    });

    if !colored {
        print!("{}", s);
    }
}
