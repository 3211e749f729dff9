mod tables;

use fitcalc::config::ReportFormat;
use fitcalc::{FcResult, InfoMessage};
use serde::Serialize;

pub fn print_report(format: ReportFormat, messages: &[InfoMessage]) -> FcResult<()> {
    match format {
        ReportFormat::Text => {
            for message in messages {
                println!("{}", message.get_message());
            }
        }
        ReportFormat::Table => tables::summary(messages),
        ReportFormat::Json => println!("{}", render_json(messages)?),
    }
    Ok(())
}

fn render_json<T: Serialize + ?Sized>(value: &T) -> FcResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitcalc::config::sample_packages;
    use fitcalc::{read_package, FitCalcError};
    use std::collections::HashMap;

    #[test]
    fn json_report_of_samples_renders() {
        let messages: Vec<InfoMessage> = sample_packages()
            .iter()
            .map(|p| {
                read_package(&p.code, &p.params)
                    .and_then(|t| t.show_training_info())
                    .unwrap()
            })
            .collect();
        let json = render_json(&messages).unwrap();
        assert!(json.contains("\"training_type\": \"SportsWalking\""));
        assert!(print_report(ReportFormat::Json, &messages).is_ok());
    }

    #[test]
    fn json_serialization_error_is_returned() {
        // JSON object keys must be strings.
        let mut bad: HashMap<(u8, u8), u8> = HashMap::new();
        bad.insert((1, 2), 3);
        let err = render_json(&bad).unwrap_err();
        assert!(matches!(err, FitCalcError::Json(_)));
    }
}
