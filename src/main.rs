mod api;
mod argument;
mod cli;
mod credentials;
mod logger;
mod plugin;
mod plugins;
mod service;

use clap::Parser;

use crate::cli::Cli;
use crate::logger::{ConsoleLogger, LogLevel, Logger};
use crate::plugin::PluginRegistry;

fn main() {
    let cli = Cli::parse();
    let logger = ConsoleLogger;

    let mut registry = match plugins::builtin() {
        Ok(registry) => registry,
        Err(e) => {
            logger.write_error(&e);
            std::process::exit(2);
        }
    };

    if cli.list {
        print_catalog(&registry);
        return;
    }

    let Some(name) = cli.plugin.as_deref() else {
        print_catalog(&registry);
        std::process::exit(2);
    };

    let Some(mut plugin) = registry.take(name) else {
        logger.write_line(LogLevel::Error, &format!("Unknown plugin '{}'.", name));
        print_catalog(&registry);
        std::process::exit(2);
    };

    let raw = cli::raw_pairs(&cli.args, &logger);
    let values = match plugin.arguments().resolve(&raw, &logger) {
        Ok(values) => values,
        Err(e) => {
            logger.write_line(LogLevel::Error, &e.to_string());
            eprint!("{}", plugin.usage());
            std::process::exit(2);
        }
    };

    if !plugin.execute(&values, &logger) {
        std::process::exit(1);
    }
}

fn print_catalog(registry: &PluginRegistry) {
    println!("Available plugins:");
    for (name, description) in registry.entries() {
        println!("  {} - {}", name, description);
    }
}
