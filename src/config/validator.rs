use thiserror::Error;

use crate::config::{ServerSettings, Settings, SimulationSettings};

/// Upper bound for the simulated latency. Anything longer looks like a typo.
pub const MAX_LATENCY_MS: u64 = 60_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        errors.extend(Self::validate_server(&settings.server));
        errors.extend(Self::validate_simulation(&settings.simulation));

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if server.host.trim().is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }
        errors
    }

    fn validate_simulation(simulation: &SimulationSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if simulation.latency_ms > MAX_LATENCY_MS {
            errors.push(ValidationError::InvalidValue {
                field: "simulation.latency_ms".to_string(),
                reason: format!("must be at most {} ms", MAX_LATENCY_MS),
            });
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ConfigValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let settings = Settings {
            server: ServerSettings {
                host: " ".to_string(),
                port: 3000,
            },
            simulation: SimulationSettings {
                latency_ms: MAX_LATENCY_MS + 1,
            },
        };
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors[0],
            ValidationError::MissingField("server.host".to_string())
        );
        assert!(errors[1].to_string().contains("simulation.latency_ms"));
    }
}
