/// What the user asked for at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Plain enter: give me another bar
    Regenerate,
    /// `m`: allow muted strums from now on
    EnableMuting,
    /// Anything else ends the session
    Quit,
}

impl Directive {
    /// Interpret one line of prompt input
    pub fn parse(input: &str) -> Self {
        let input = input.trim_end_matches(['\r', '\n']);
        if input.is_empty() {
            Directive::Regenerate
        } else if input.eq_ignore_ascii_case("m") {
            Directive::EnableMuting
        } else {
            Directive::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directives() {
        assert_eq!(Directive::parse(""), Directive::Regenerate);
        assert_eq!(Directive::parse("\n"), Directive::Regenerate);
        assert_eq!(Directive::parse("m"), Directive::EnableMuting);
        assert_eq!(Directive::parse("M\n"), Directive::EnableMuting);
        assert_eq!(Directive::parse("q"), Directive::Quit);
        assert_eq!(Directive::parse("mute"), Directive::Quit);
        assert_eq!(Directive::parse("x"), Directive::Quit);
        // Only the line ending is stripped
        assert_eq!(Directive::parse(" m"), Directive::Quit);
        assert_eq!(Directive::parse("\r\n"), Directive::Regenerate);
    }
}
