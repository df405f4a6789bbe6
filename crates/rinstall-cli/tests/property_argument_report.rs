// Property-based tests for the argument report

use clap::CommandFactory;
use proptest::prelude::*;
use rinstall_cli::output::OutputStyle;
use rinstall_cli::{ArgumentReport, Cli, REPORTED_FLAGS};

const SWITCHES: &[&str] = &["--production", "--skipRoot", "--remove", "--clean", "--yarn"];

fn report_for(args: &[String]) -> ArgumentReport {
    let mut argv = vec!["recursive-install".to_string()];
    argv.extend_from_slice(args);
    let command = Cli::command();
    let matches = command.clone().try_get_matches_from(argv).unwrap();
    ArgumentReport::from_matches(&command, &matches, REPORTED_FLAGS)
}

/// Every reported flag lands in exactly one of the two lists
#[test]
fn prop_report_partitions_flags() {
    proptest!(|(mask in proptest::collection::vec(any::<bool>(), SWITCHES.len()), k in 1usize..64)| {
        let mut args: Vec<String> = SWITCHES
            .iter()
            .zip(&mask)
            .filter(|(_, on)| **on)
            .map(|(flag, _)| flag.to_string())
            .collect();
        args.push("--concurrent".to_string());
        args.push(k.to_string());

        let report = report_for(&args);
        prop_assert_eq!(report.supplied.len() + report.missing.len(), REPORTED_FLAGS.len());

        for (flag, on) in SWITCHES.iter().zip(&mask) {
            let name = flag.trim_start_matches("--");
            let supplied = report.supplied.iter().any(|a| a.name == name);
            let missing = report.missing.iter().any(|a| a.name == name);
            prop_assert_eq!(supplied, *on);
            prop_assert_eq!(missing, !*on);
        }

        let concurrent = report.supplied.iter().find(|a| a.name == "concurrent").unwrap();
        prop_assert_eq!(concurrent.value.clone(), serde_json::Value::from(k as i64));
    });
}

/// Rendering is stable across calls
#[test]
fn prop_render_is_deterministic() {
    proptest!(|(clean in any::<bool>(), yarn in any::<bool>())| {
        let mut args = Vec::new();
        if clean {
            args.push("--clean".to_string());
        }
        if yarn {
            args.push("--yarn".to_string());
        }

        let style = OutputStyle { use_colors: false };
        let report = report_for(&args);
        prop_assert_eq!(report.render(&style), report.render(&style));
    });
}
