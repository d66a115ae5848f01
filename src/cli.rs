use clap::Parser;

use crate::logger::{LogLevel, Logger};

#[derive(Parser)]
#[command(name = "translator-toolkit")]
#[command(about = "Automation toolkit for the Microsoft Translator service")]
pub struct Cli {
    /// Plugin to run, selected by name (case-insensitive), e.g. SetCredentials
    pub plugin: Option<String>,

    /// Plugin arguments as name=value pairs
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// List the available plugins and exit
    #[arg(long)]
    pub list: bool,
}

/// A single raw flag-name/value pair as supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArg {
    pub name: String,
    pub value: String,
}

/// Split raw `name=value` tokens into pairs. A leading `--`, `-` or `/`
/// on the name is accepted and stripped. Tokens without `=` are reported
/// as warnings and skipped.
pub fn raw_pairs(tokens: &[String], logger: &dyn Logger) -> Vec<RawArg> {
    let mut pairs = Vec::with_capacity(tokens.len());
    for token in tokens {
        let parsed = token.split_once('=').and_then(|(name, value)| {
            let name = name.trim_start_matches(['-', '/']);
            if name.is_empty() {
                None
            } else {
                Some(RawArg {
                    name: name.to_string(),
                    value: value.to_string(),
                })
            }
        });
        match parsed {
            Some(pair) => pairs.push(pair),
            None => logger.write_line(
                LogLevel::Warning,
                &format!("Ignoring malformed argument '{}', expected name=value.", token),
            ),
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::MemoryLogger;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn splits_tokens_on_the_first_equals_sign() {
        let logger = MemoryLogger::new();
        let pairs = raw_pairs(&tokens(&["clientID=abc", "subscriptionKey=k=v"]), &logger);

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "clientID");
        assert_eq!(pairs[0].value, "abc");
        assert_eq!(pairs[1].value, "k=v");
        assert!(logger.lines().is_empty());
    }

    #[test]
    fn strips_flag_prefixes() {
        let logger = MemoryLogger::new();
        let pairs = raw_pairs(
            &tokens(&["--clientID=abc", "-categoryID=general", "/subscriptionKey=k"]),
            &logger,
        );

        let names: Vec<&str> = pairs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["clientID", "categoryID", "subscriptionKey"]);
    }

    #[test]
    fn malformed_tokens_warn_and_are_skipped() {
        let logger = MemoryLogger::new();
        let pairs = raw_pairs(&tokens(&["clientID=abc", "bogus", "--=x"]), &logger);

        assert_eq!(pairs.len(), 1);
        let warnings = logger.messages_at(LogLevel::Warning);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("'bogus'"));
    }

    #[test]
    fn empty_values_are_preserved() {
        let logger = MemoryLogger::new();
        let pairs = raw_pairs(&tokens(&["categoryID="]), &logger);

        assert_eq!(pairs[0].name, "categoryID");
        assert_eq!(pairs[0].value, "");
    }
}
