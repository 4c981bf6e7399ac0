pub const TABLE_ENV_VAR: &str = "LAUNCH_CAPACITY_TABLE"; // Overrides the performance table path
pub const CONFIG_DIR_NAME: &str = "launch-capacity";
pub const TABLE_FILE: &str = "performance.csv";

// Utilization is reported in percent
pub const PERCENT: f64 = 100.0;
