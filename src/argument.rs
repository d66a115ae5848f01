use std::collections::BTreeMap;

use thiserror::Error;

use crate::cli::RawArg;
use crate::logger::{LogLevel, Logger};

/// Immutable declaration of a single named plugin parameter.
#[derive(Debug, Clone)]
pub struct ArgumentSpec {
    name: String,
    required: bool,
    help: String,
}

impl ArgumentSpec {
    /// Panics if `name` or `help` is empty. Specs are assembled from
    /// literals in plugin constructors, so an empty field is a
    /// programming error, not user input.
    pub fn new(name: &str, required: bool, help: &str) -> Self {
        assert!(!name.is_empty(), "argument name must not be empty");
        assert!(!help.is_empty(), "argument help text must not be empty");
        Self {
            name: name.to_string(),
            required,
            help: help.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn help(&self) -> &str {
        &self.help
    }
}

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("argument '{name}' was supplied more than once")]
    DuplicateValue { name: String },
}

/// Values bound to declared arguments for one invocation, keyed by the
/// declared name. Each name binds at most once; the first value is never
/// overwritten.
#[derive(Debug, Default)]
pub struct ResolvedArgs {
    values: BTreeMap<String, String>,
}

impl ResolvedArgs {
    fn bind(&mut self, name: &str, value: String) -> Result<(), ArgumentError> {
        if self.values.contains_key(name) {
            return Err(ArgumentError::DuplicateValue {
                name: name.to_string(),
            });
        }
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    /// The bound value, or `""` for an argument that was not supplied.
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or_default()
    }
}

/// Aggregated outcome of a failed resolution. Every problem is collected
/// and logged before the failure is reported.
#[derive(Debug, Error)]
#[error("argument resolution failed ({} missing, {} duplicate)", missing.len(), duplicates.len())]
pub struct ResolveError {
    pub missing: Vec<String>,
    pub duplicates: Vec<String>,
}

/// The ordered set of arguments one plugin declares. Order is declaration
/// order and only affects usage display; lookup is by name.
#[derive(Debug)]
pub struct ArgumentList {
    specs: Vec<ArgumentSpec>,
}

impl ArgumentList {
    /// Panics on a duplicate name. Lists are assembled from literals in
    /// plugin constructors.
    pub fn new(specs: Vec<ArgumentSpec>) -> Self {
        for (i, spec) in specs.iter().enumerate() {
            let clash = specs[..i]
                .iter()
                .any(|s| s.name().eq_ignore_ascii_case(spec.name()));
            assert!(!clash, "duplicate argument name '{}'", spec.name());
        }
        Self { specs }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSpec> {
        self.specs.iter()
    }

    fn find(&self, raw_name: &str) -> Option<&ArgumentSpec> {
        self.specs
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(raw_name))
    }

    /// Bind raw command-line pairs to the declared arguments.
    ///
    /// Flag names match ASCII case-insensitively. Unknown names are
    /// warned about and skipped; a duplicate binding or a required
    /// argument left without a non-empty value is an error. All problems
    /// are collected before resolution fails, so one bad token never
    /// hides the rest.
    pub fn resolve(
        &self,
        raw: &[RawArg],
        logger: &dyn Logger,
    ) -> Result<ResolvedArgs, ResolveError> {
        let mut values = ResolvedArgs::default();
        let mut duplicates = Vec::new();

        for arg in raw {
            let Some(spec) = self.find(&arg.name) else {
                logger.write_line(
                    LogLevel::Warning,
                    &format!("Unknown argument '{}' ignored.", arg.name),
                );
                continue;
            };
            if let Err(e) = values.bind(spec.name(), arg.value.clone()) {
                logger.write_line(LogLevel::Error, &e.to_string());
                duplicates.push(spec.name().to_string());
            }
        }

        let mut missing = Vec::new();
        for spec in &self.specs {
            if spec.required() && values.get(spec.name()).is_empty() {
                logger.write_line(
                    LogLevel::Error,
                    &format!(
                        "Missing required argument '{}': {}",
                        spec.name(),
                        spec.help()
                    ),
                );
                missing.push(spec.name().to_string());
            }
        }

        if missing.is_empty() && duplicates.is_empty() {
            Ok(values)
        } else {
            Err(ResolveError { missing, duplicates })
        }
    }
}
