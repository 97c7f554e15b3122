use clap::Parser;

/// CLI surface definition. Behavior is driven entirely by DEBUG_KEYSTORE and HOME.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "debug-keystore",
    about = "Write the base64 DEBUG_KEYSTORE variable to ~/.android/debug.keystore",
    long_about = None,
    version
)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["debug-keystore"]).expect("parse should succeed");
        assert_eq!(cli, Cli {});
    }

    #[test]
    fn rejects_positional_arguments() {
        let err = Cli::try_parse_from(["debug-keystore", "extra"]).expect_err("should reject");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn version_flag_short_circuits() {
        let err = Cli::try_parse_from(["debug-keystore", "--version"]).expect_err("version exit");
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
