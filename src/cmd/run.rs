use crate::reports;
use fitcalc::config::{RunConfig, WorkoutPackage};
use fitcalc::{read_package, FcResult, InfoMessage};
use tracing::{debug, error, info, warn};

pub struct RunOutcome {
    pub printed: usize,
    pub failures: usize,
}

pub fn run(config: &RunConfig, packages: &[WorkoutPackage]) -> RunOutcome {
    info!("Processing {} workout packages", packages.len());

    let mut messages = Vec::with_capacity(packages.len());
    let mut failures = 0;

    for (idx, package) in packages.iter().enumerate() {
        match summarize(package) {
            Ok(message) => {
                debug!("Package #{}: {:?}", idx + 1, message);
                messages.push(message);
            }
            Err(e) => {
                error!("Package #{} ('{}') failed: {}", idx + 1, package.code, e);
                failures += 1;
                if config.fail_fast {
                    warn!("Stopping after first failure (--fail-fast)");
                    break;
                }
            }
        }
    }

    if let Err(e) = reports::print_report(config.format, &messages) {
        error!("Failed to render {} report: {}", config.format, e);
        failures += 1;
    }

    RunOutcome {
        printed: messages.len(),
        failures,
    }
}

fn summarize(package: &WorkoutPackage) -> FcResult<InfoMessage> {
    read_package(&package.code, &package.params)?.show_training_info()
}
