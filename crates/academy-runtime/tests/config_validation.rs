//! Property tests for configuration validation.

use academy_runtime::{AcademyConfig, ConfigError};
use proptest::prelude::*;

fn toml_for(emphasized: f32, dim: f32, timeout: u64) -> String {
    format!(
        "[program]\npoll_timeout_ms = {timeout}\n\n[theme]\nemphasized_opacity = {emphasized:?}\ndim_opacity = {dim:?}\n"
    )
}

proptest! {
    #[test]
    fn ordered_opacities_in_range_are_accepted(
        emphasized in 0.02f32..=1.0,
        frac in 0.01f32..0.99,
        timeout in 1u64..10_000,
    ) {
        let dim = emphasized * frac;
        prop_assume!(dim > 0.0 && dim < emphasized);
        let config = AcademyConfig::from_toml_str(&toml_for(emphasized, dim, timeout)).unwrap();
        let theme = config.to_theme();
        prop_assert_eq!(theme.opacity(true), emphasized);
        prop_assert_eq!(theme.opacity(false), dim);
        prop_assert_eq!(config.to_program_config().poll_timeout.as_millis() as u64, timeout);
    }

    #[test]
    fn inverted_opacities_are_rejected(dim in 0.1f32..=1.0, frac in 0.0f32..=1.0) {
        let emphasized = (dim * frac).max(f32::MIN_POSITIVE);
        let result = AcademyConfig::from_toml_str(&toml_for(emphasized, dim, 100));
        prop_assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
