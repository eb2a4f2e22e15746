//! Configuration loaded from `.meetiq.toml`.

mod core;
mod loader;

pub use self::core::{default_max_annual_waste, DefaultsConfig, MeetiqConfig, RiskConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

/// Commented default configuration written by `meetiq init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# meetiq configuration

[risk]
# Annual waste at which risk intensity saturates
max_annual_waste = 250000

[messaging]
low_score_threshold = 50
strong_score_threshold = 80
# Per-meeting waste above which a low-quality meeting is critical
critical_waste_threshold = 2000

[heatmap]
quality_threshold = 70
min_cost_threshold = 1000
max_cost_threshold = 5000

[limits]
min_attendees = 1
min_salary = 30000
max_salary = 500000
min_duration = 5
max_duration = 240

[defaults]
currency = "USD"
recurrence = "one-time"
"#;
