// Summary of supplied and missing arguments, printed before a run

use clap::parser::ValueSource;
use clap::{ArgMatches, Command};
use serde_json::Value;

use crate::output::OutputStyle;

/// A flag that was supplied or carries a default
#[derive(Debug, Clone, PartialEq)]
pub struct SuppliedArgument {
    pub name: String,
    pub value: Value,
    pub description: String,
}

/// A flag that was left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingArgument {
    pub name: String,
    pub description: String,
}

/// Which recognized flags the user passed and which were left out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentReport {
    pub supplied: Vec<SuppliedArgument>,
    pub missing: Vec<MissingArgument>,
}

impl ArgumentReport {
    /// Classify the flags named by `ids`
    ///
    /// A switch counts as supplied only when given on the command line. A
    /// flag that takes a value also counts when it carries a default, so
    /// `--concurrent` always appears with its effective value.
    pub fn from_matches(command: &Command, matches: &ArgMatches, ids: &[&str]) -> Self {
        let mut report = Self::default();

        for id in ids {
            let Some(arg) = command.get_arguments().find(|a| a.get_id() == *id) else {
                continue;
            };

            let name = arg
                .get_long()
                .map(str::to_string)
                .unwrap_or_else(|| id.to_string());
            let description = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            let takes_value = arg.get_action().takes_values();

            let supplied = match matches.value_source(id) {
                Some(ValueSource::DefaultValue) => takes_value,
                Some(_) => true,
                None => false,
            };

            if supplied {
                let value = if takes_value {
                    raw_value(matches, id)
                } else {
                    Value::Bool(true)
                };
                report.supplied.push(SuppliedArgument {
                    name,
                    value,
                    description,
                });
            } else {
                report.missing.push(MissingArgument { name, description });
            }
        }

        report
    }

    /// Render the report as printed to stdout
    pub fn render(&self, style: &OutputStyle) -> String {
        let mut out = String::new();

        out.push_str(&style.header("Arguments passed:"));
        out.push('\n');
        for arg in &self.supplied {
            out.push_str(&format!("{}: {}\n", arg.name, arg.value));
            out.push_str(&format!("  {}\n", arg.description));
        }

        out.push('\n');
        out.push_str(&style.header("Missing arguments:"));
        out.push('\n');
        if self.missing.is_empty() {
            out.push_str("None\n");
        } else {
            for arg in &self.missing {
                out.push_str(&format!("- {}: {}\n", arg.name, arg.description));
            }
        }

        out
    }
}

/// JSON-style value following the flag's parsed type
///
/// Numeric flags print bare; paths and any other text print quoted, even when
/// the text happens to look like a number.
fn raw_value(matches: &ArgMatches, id: &str) -> Value {
    if let Ok(Some(n)) = matches.try_get_one::<usize>(id) {
        return Value::from(*n);
    }
    if let Ok(Some(n)) = matches.try_get_one::<u64>(id) {
        return Value::from(*n);
    }

    let text = matches
        .get_raw(id)
        .and_then(|mut values| values.next())
        .map(|v| v.to_string_lossy().into_owned())
        .unwrap_or_default();
    Value::String(text)
}
