use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} was not correctly initialized", .0)]
    UninitializedComponent(&'static str),

    #[error("{} has already been built", .0)]
    AlreadyBuilt(&'static str),

    #[error("Could not parse `{}` as a repeat count: {}", .value, .source)]
    ValueParse {
        value: String,
        source: ParseIntError,
    },

    #[error("Argument `{}` needs at least one option string", .0)]
    MissingOptionStrings(String),

    #[error("Argument `{}` declares an empty list of choices", .0)]
    EmptyChoices(String),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No arguments were found in the argument definition YAML. Is `{}` empty?", .path)]
    EmptyArgumentDefinition { path: String },

    #[error("The argument definition at `{}` does not name a program to run", .path)]
    EmptyProgram { path: String },

    #[error("Invalid argument: `dest` may not be empty")]
    EmptyDest,

    #[error("Found a non-unique argument dest: `{}`", .0)]
    NonUniqueDest(String),

    #[error("Invalid value `{}`: expected the format dest=value", .0)]
    ValueFormat(String),

    #[error("No argument with dest `{}` is declared", .0)]
    UnknownDest(String),

    #[error("Value `{}` does not fit argument `{}`", .value, .dest)]
    InvalidValue { dest: String, value: String },

    #[error("Input was closed before a value was entered")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn empty_argument_definition(path: String) -> Self {
        Self::EmptyArgumentDefinition { path }
    }

    pub fn value_parse(value: &str, source: ParseIntError) -> Self {
        Self::ValueParse {
            value: value.to_string(),
            source,
        }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
