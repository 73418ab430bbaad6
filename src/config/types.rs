// Configuration type definitions

use serde::Deserialize;

use crate::search::DEFAULT_REGION;

/// Viewer configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// Selector of the content region searches run against
    #[serde(default = "default_region")]
    pub region: String,
    /// Lines moved per scroll key or wheel tick
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_scroll_step() -> u16 {
    1
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            region: default_region(),
            scroll_step: default_scroll_step(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub viewer: ViewerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.viewer.region, DEFAULT_REGION);
        assert_eq!(config.viewer.scroll_step, 1);
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r##"
[viewer]
region = "#contents"
scroll_step = 3
"##,
        )
        .unwrap();
        assert_eq!(config.viewer.region, "#contents");
        assert_eq!(config.viewer.scroll_step, 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any subset of missing optional fields parses and falls back to
        // the defaults for whatever is absent.
        #[test]
        fn prop_missing_fields_use_defaults(
            include_viewer_section in prop::bool::ANY,
            include_region_field in prop::bool::ANY
        ) {
            let toml_content = if !include_viewer_section {
                String::new()
            } else if !include_region_field {
                "[viewer]\n".to_string()
            } else {
                r##"
[viewer]
region = "#archive"
"##.to_string()
            };

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            prop_assert_eq!(config.viewer.scroll_step, 1, "scroll_step always defaulted here");

            if !include_viewer_section || !include_region_field {
                prop_assert_eq!(
                    config.viewer.region.as_str(),
                    DEFAULT_REGION,
                    "Missing region should use the default selector"
                );
            } else {
                prop_assert_eq!(config.viewer.region.as_str(), "#archive");
            }
        }
    }
}
