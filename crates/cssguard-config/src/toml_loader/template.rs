//! Default TOML settings template with inline documentation comments.

/// Generate the default TOML settings content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# cssguard settings
# Only override what you want to change -- missing fields use defaults.

[limits]
# Input longer than this many characters is truncated before sanitizing.
# max_length = 65536       # 1-16777216

[allow]
# Entries here are ADDED to the built-in allow-lists.
# properties = ["gap", "grid-template-columns"]
# at_rules = ["@supports"]
# pseudo_classes = [":focus-within"]

[urls]
# Hosts allowed in background / background-image url(...) values.
# This list REPLACES the built-in one.
allowed_hosts = ["fonts.googleapis.com"]
"##
    .to_string()
}
