use thiserror::Error;

use crate::argument::{ArgumentList, ResolvedArgs};
use crate::logger::Logger;

/// A single named operation of the toolkit.
///
/// Plugins declare their arguments up front, are selected by name by the
/// dispatcher and report all user-facing detail through the logger.
/// `execute` returning `false` means the operation could not complete;
/// `true` means it completed, possibly with a reported caveat.
pub trait Plugin {
    /// Stable identifier used for dispatch. Uniqueness across plugins is
    /// the registry's responsibility, not the plugin's.
    fn name(&self) -> &str;

    /// One-line summary for the plugin listing.
    fn description(&self) -> &str;

    fn arguments(&self) -> &ArgumentList;

    /// Run the operation with fully resolved argument values. Must only
    /// be called after `arguments().resolve(..)` succeeded.
    fn execute(&mut self, values: &ResolvedArgs, logger: &dyn Logger) -> bool;

    /// Usage text: description plus the arguments in declaration order.
    fn usage(&self) -> String {
        let mut out = format!("{} - {}\n", self.name(), self.description());
        for spec in self.arguments().iter() {
            let cardinality = if spec.required() { "required" } else { "optional" };
            out.push_str(&format!(
                "  {}=<value> ({})\n      {}\n",
                spec.name(),
                cardinality,
                spec.help()
            ));
        }
        out
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a plugin named '{0}' is already registered")]
    DuplicateName(String),
}

/// Open set of plugins, looked up by name (ASCII case-insensitive).
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin. Names must be unique across the registry.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> Result<(), RegistryError> {
        if self
            .plugins
            .iter()
            .any(|p| p.name().eq_ignore_ascii_case(plugin.name()))
        {
            return Err(RegistryError::DuplicateName(plugin.name().to_string()));
        }
        self.plugins.push(plugin);
        Ok(())
    }

    /// Remove and return the named plugin for its single invocation.
    /// Plugin instances are not reused across commands.
    pub fn take(&mut self, name: &str) -> Option<Box<dyn Plugin>> {
        let idx = self
            .plugins
            .iter()
            .position(|p| p.name().eq_ignore_ascii_case(name))?;
        Some(self.plugins.remove(idx))
    }

    /// Registered (name, description) pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.plugins.iter().map(|p| (p.name(), p.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argument::ArgumentSpec;

    struct StubPlugin {
        name: &'static str,
        arguments: ArgumentList,
    }

    impl StubPlugin {
        fn boxed(name: &'static str) -> Box<dyn Plugin> {
            Box::new(Self {
                name,
                arguments: ArgumentList::new(vec![
                    ArgumentSpec::new("first", true, "The first stub argument."),
                    ArgumentSpec::new("second", false, "The second stub argument."),
                ]),
            })
        }
    }

    impl Plugin for StubPlugin {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "A stub plugin."
        }

        fn arguments(&self) -> &ArgumentList {
            &self.arguments
        }

        fn execute(&mut self, _values: &ResolvedArgs, _logger: &dyn Logger) -> bool {
            true
        }
    }

    #[test]
    fn register_rejects_duplicate_names_case_insensitively() {
        let mut registry = PluginRegistry::new();
        registry.register(StubPlugin::boxed("Translate")).unwrap();

        let err = registry.register(StubPlugin::boxed("translate")).unwrap_err();

        assert!(matches!(err, RegistryError::DuplicateName(_)));
    }

    #[test]
    fn take_finds_plugins_case_insensitively() {
        let mut registry = PluginRegistry::new();
        registry.register(StubPlugin::boxed("Translate")).unwrap();

        let plugin = registry.take("TRANSLATE").unwrap();
        assert_eq!(plugin.name(), "Translate");

        // Taken for the invocation; a second take finds nothing.
        assert!(registry.take("Translate").is_none());
    }

    #[test]
    fn usage_lists_arguments_in_declaration_order() {
        let plugin = StubPlugin::boxed("Translate");
        let usage = plugin.usage();

        let first = usage.find("first=<value> (required)").unwrap();
        let second = usage.find("second=<value> (optional)").unwrap();
        assert!(first < second);
        assert!(usage.contains("The first stub argument."));
    }
}
