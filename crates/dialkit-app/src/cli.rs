use clap::{Parser, Subcommand};

/// dialkit: color parsing and range-slider math from the command line.
#[derive(Parser, Debug)]
#[command(name = "dialkit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a hex color (RGB, RGBA, RRGGBB, RRGGBBAA).
    Color {
        hex: String,
    },
    /// Value at a fraction of the way through [lower, upper].
    ValueAt {
        #[arg(long)]
        lower: f64,
        #[arg(long)]
        upper: f64,
        #[arg(allow_hyphen_values = true)]
        percent: f64,
    },
    /// Fraction of the way a value sits through [lower, upper].
    PercentAt {
        #[arg(long)]
        lower: f64,
        #[arg(long)]
        upper: f64,
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },
    /// Print the effective configuration as JSON.
    Config,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_color_command() {
        let args = Args::try_parse_from(["dialkit", "color", "#F00"]).unwrap();
        assert!(matches!(args.command, Command::Color { ref hex } if hex == "#F00"));
    }

    #[test]
    fn parses_value_at_with_globals() {
        let args = Args::try_parse_from([
            "dialkit",
            "value-at",
            "--lower",
            "2000",
            "--upper",
            "12000",
            "0.25",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert!(matches!(
            args.command,
            Command::ValueAt { lower, upper, percent }
                if lower == 2000.0 && upper == 12000.0 && percent == 0.25
        ));
    }

    #[test]
    fn percent_at_accepts_negative_value() {
        let args =
            Args::try_parse_from(["dialkit", "percent-at", "--lower", "0", "--upper", "10", "-5"])
                .unwrap();
        assert!(matches!(args.command, Command::PercentAt { value, .. } if value == -5.0));
    }

    #[test]
    fn missing_subcommand_is_an_error() {
        assert!(Args::try_parse_from(["dialkit"]).is_err());
    }
}
