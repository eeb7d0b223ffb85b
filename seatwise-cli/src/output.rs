use seatwise_core::AssignmentOutcome;

use crate::app_config::{OutputConfig, OutputFormat};

/// Render an outcome for stdout
pub fn render(outcome: &AssignmentOutcome, output: &OutputConfig) -> Result<String, serde_json::Error> {
    match output.format {
        OutputFormat::Json if output.pretty => serde_json::to_string_pretty(outcome),
        OutputFormat::Json => serde_json::to_string(outcome),
        OutputFormat::Text => Ok(format!(
            "{}remaining passengers: {}",
            outcome.seat_map, outcome.remaining_passengers
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwise_core::{BlockDescriptor, SeatingSession};

    fn outcome() -> AssignmentOutcome {
        let layout = [BlockDescriptor::new(2, 1), BlockDescriptor::new(1, 2)];
        SeatingSession::new(&layout, 4).unwrap().run_full_assignment()
    }

    #[test]
    fn test_render_json() {
        let output = OutputConfig { format: OutputFormat::Json, pretty: false };

        assert_eq!(
            render(&outcome(), &output).unwrap(),
            r#"{"seat_map":[[4,1,"aisle",2],["empty","empty","aisle",3]],"remaining_passengers":0}"#
        );
    }

    #[test]
    fn test_render_text() {
        let output = OutputConfig { format: OutputFormat::Text, pretty: false };

        assert_eq!(
            render(&outcome(), &output).unwrap(),
            "4 1 | 2\n    | 3\nremaining passengers: 0"
        );
    }
}
