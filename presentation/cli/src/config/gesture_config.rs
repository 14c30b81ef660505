use std::env;

use business::domain::pull_refresh::model::PullConfig;

/// Pull gesture tuning.
///
/// Environment variables (each falls back to its default when unset or not a
/// positive number):
/// - PULL_THRESHOLD (80)
/// - PULL_MAX_DISTANCE (120)
/// - PULL_RESISTANCE (0.5)
/// - PULL_ACTIVATION_FLOOR (10)
pub fn from_env() -> PullConfig {
    from_vars(|name| env::var(name).ok())
}

fn from_vars(var: impl Fn(&str) -> Option<String>) -> PullConfig {
    let defaults = PullConfig::default();
    let number = |name: &str, default: f64| {
        var(name)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(default)
    };

    PullConfig {
        threshold: number("PULL_THRESHOLD", defaults.threshold),
        max_pull: number("PULL_MAX_DISTANCE", defaults.max_pull),
        resistance: number("PULL_RESISTANCE", defaults.resistance),
        activation_floor: number("PULL_ACTIVATION_FLOOR", defaults.activation_floor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_defaults_when_unset() {
        assert_eq!(from_vars(|_| None), PullConfig::default());
    }

    #[test]
    fn should_override_from_variables() {
        let config = from_vars(|name| match name {
            "PULL_THRESHOLD" => Some("60".to_string()),
            "PULL_RESISTANCE" => Some(" 0.4 ".to_string()),
            _ => None,
        });

        assert_eq!(config.threshold, 60.0);
        assert_eq!(config.resistance, 0.4);
        assert_eq!(config.max_pull, 120.0);
    }

    #[test]
    fn should_ignore_unparsable_or_non_positive_values() {
        let config = from_vars(|name| match name {
            "PULL_THRESHOLD" => Some("eighty".to_string()),
            "PULL_MAX_DISTANCE" => Some("-5".to_string()),
            _ => None,
        });

        assert_eq!(config, PullConfig::default());
    }
}
