//! Line-oriented prompts over any reader/writer pair, so the interactive
//! flows can be driven by scripted input in tests.

use std::io::{self, BufRead, Write};

/// Print `label` and read one trimmed line. `None` on end of input.
pub fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut s = String::new();
    if input.read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim().to_string()))
}

/// Ask a yes/no question; only "y" / "yes" confirm.
pub fn ask_yes_no<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> bool {
    match ask_line(input, out, &format!("{question} [y/N]: ")) {
        Ok(Some(answer)) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

/// Yes/no confirmation on the process stdin/stdout.
pub fn confirm(question: &str) -> bool {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    ask_yes_no(&mut input, &mut out, question)
}
