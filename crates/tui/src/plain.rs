// Line prompt front end

use std::io::{self, BufRead, Write};

use generator::RandomSource;
use session::{Directive, Session};

pub const PROMPT: &str = "[q] to quit | [m] to enable muted strums | [enter] to regenerate > ";

/// Show a bar, ask what to do, repeat until the user quits or input ends
pub fn run_plain<R, I, O>(session: &mut Session<R>, input: &mut I, output: &mut O) -> io::Result<()>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    if session.current().is_none() {
        session.regenerate();
    }

    let mut line = String::new();
    loop {
        if let Some(text) = session.rendered() {
            writeln!(output, "\n")?;
            writeln!(output, "{}", text)?;
            writeln!(output, "\n")?;
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        let directive = if input.read_line(&mut line)? == 0 {
            // EOF
            Directive::Quit
        } else {
            Directive::parse(&line)
        };

        if session.apply(directive).is_none() {
            writeln!(output, "\nExiting!")?;
            return Ok(());
        }
        writeln!(output, "Regenerating...")?;
    }
}
