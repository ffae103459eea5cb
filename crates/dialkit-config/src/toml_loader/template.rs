//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# dialkit configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[colors]
# Hex colors: RGB, RGBA, RRGGBB or RRGGBBAA, optional leading '#'.
# Anything else renders as white.
# tint = "#FF2D55"
# track = "#D1D1D6"
# handle = "#FFFFFF"
# indicator = "#FFFFFF"

[slider]
# lower = 0.0
# upper = 1.0            # must be greater than lower
# handle_size = 20.0     # 4-64

[carousel]
# autoplay_interval_ms = 3000   # 500-60000
# swipe_threshold = 0.5         # 0.1-0.9, fraction of page width

[picker]
# debounce_ms = 1000     # 0-10000
# max_popover_height = 400.0

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
