use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Arity marker meaning "one or more values are required".
pub const ONE_OR_MORE: &str = "+";

/// Declarative description of a single command-line argument.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ArgumentSpec {
    pub dest: String,
    #[serde(default)]
    pub option_strings: Vec<String>,
    pub help: Option<String>,
    pub choices: Option<Vec<String>>,
    pub nargs: Option<String>,
    pub action: Option<String>,
    pub default: Option<String>,
}

impl ArgumentSpec {
    #[must_use]
    pub fn is_positional(&self) -> bool {
        self.option_strings.is_empty()
    }

    #[must_use]
    pub fn requires_one_or_more(&self) -> bool {
        self.nargs.as_deref() == Some(ONE_OR_MORE)
    }

    /// The spelling used when writing the argument out. Long forms are
    /// declared last, so the last entry wins.
    #[must_use]
    pub fn preferred_option(&self) -> Option<&str> {
        self.option_strings.last().map(String::as_str)
    }

    /// The spelling repeated by counters, usually the short form.
    #[must_use]
    pub fn short_option(&self) -> Option<&str> {
        self.option_strings.first().map(String::as_str)
    }
}

impl Display for ArgumentSpec {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "`{}`", self.dest)?;

        if !self.option_strings.is_empty() {
            write!(formatter, " [{}]", self.option_strings.join(", "))?;
        }

        Ok(())
    }
}

/// A program together with the arguments it declares, in declaration order.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProgramDefinition {
    pub program: Vec<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub arguments: Vec<ArgumentSpec>,
}

impl Display for ProgramDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.description {
            Some(desc) => write!(formatter, "{} ({})", self.program.join(" "), desc),
            None => formatter.write_str(self.program.join(" ").as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(dest: &str, option_strings: &[&str]) -> ArgumentSpec {
        ArgumentSpec {
            dest: dest.to_string(),
            option_strings: option_strings.iter().map(ToString::to_string).collect(),
            ..ArgumentSpec::default()
        }
    }

    #[test]
    fn test_preferred_option_is_last_spelling() {
        let output = spec("output", &["-o", "--output"]);
        assert_eq!(output.preferred_option(), Some("--output"));
        assert_eq!(output.short_option(), Some("-o"));
    }

    #[test]
    fn test_positional_has_no_spellings() {
        let filename = spec("filename", &[]);
        assert!(filename.is_positional());
        assert_eq!(filename.preferred_option(), None);
    }

    #[test]
    fn test_requires_one_or_more() {
        let mut files = spec("files", &[]);
        assert!(!files.requires_one_or_more());

        files.nargs = Some("+".to_string());
        assert!(files.requires_one_or_more());

        files.nargs = Some("*".to_string());
        assert!(!files.requires_one_or_more());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", spec("verbose", &["-v", "--verbose"])), "`verbose` [-v, --verbose]");
        assert_eq!(format!("{}", spec("filename", &[])), "`filename`");
    }

    #[test]
    fn test_program_display() {
        let program = ProgramDefinition {
            program: vec!["python".to_string(), "script.py".to_string()],
            description: Some("Resize images".to_string()),
            arguments: vec![],
        };
        assert_eq!(format!("{program}"), "python script.py (Resize images)");
    }

    #[test]
    fn test_deserialize_minimal_spec() {
        let yaml = "dest: filename\n";
        let parsed: ArgumentSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed, spec("filename", &[]));
    }
}
