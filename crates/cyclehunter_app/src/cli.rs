//! Command line handling for the application binary.

use cyclehunter_core::catalog::CatalogRevision;
use cyclehunter_core::logging::LogLevel;

pub const USAGE: &str = "\
Usage: cycle-hunter [OPTIONS]

Loads the saved settings (or the defaults), applies the requested changes,
prints the enabled selections and saves the settings again.

Options:
  --enable-body <NAME>        Enable a body by display name (e.g. G.Sun)
  --disable-body <NAME>       Disable a body by display name
  --enable-multiple <NAME>    Enable a custom lookback multiple (e.g. 5)
  --disable-multiple <NAME>   Disable a custom lookback multiple
  --enable-fixed <NAME>       Enable a fixed lookback multiple (e.g. \"sqrt( 2 )\")
  --disable-fixed <NAME>      Disable a fixed lookback multiple
  --last-file <PATH>          Remember PATH as the last opened data file
  --revision <NAME>           Default catalog revision: simplified or extended
  --reset                     Discard saved settings and start from defaults
  --list                      Print every entry, not only the enabled ones
  -v, --verbose               Log at debug level
  -h, --help                  Show this help";

/// A change requested on the command line, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Body { name: String, enabled: bool },
    Custom { name: String, enabled: bool },
    Fixed { name: String, enabled: bool },
    LastFile(String),
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Options {
    pub changes: Vec<Change>,
    pub revision: CatalogRevision,
    pub list_all: bool,
    pub log_level: LogLevel,
    pub help: bool,
}

pub fn parse<I>(args: I) -> Result<Options, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("missing value for {}", flag))
        };

        match arg.as_str() {
            "--enable-body" | "--disable-body" => options.changes.push(Change::Body {
                name: value(&arg)?,
                enabled: arg.starts_with("--enable"),
            }),
            "--enable-multiple" | "--disable-multiple" => options.changes.push(Change::Custom {
                name: value(&arg)?,
                enabled: arg.starts_with("--enable"),
            }),
            "--enable-fixed" | "--disable-fixed" => options.changes.push(Change::Fixed {
                name: value(&arg)?,
                enabled: arg.starts_with("--enable"),
            }),
            "--last-file" => options.changes.push(Change::LastFile(value(&arg)?)),
            "--revision" => {
                options.revision = match value(&arg)?.as_str() {
                    "simplified" => CatalogRevision::Simplified,
                    "extended" => CatalogRevision::Extended,
                    other => return Err(format!("unknown catalog revision '{}'", other)),
                }
            }
            "--reset" => options.changes.push(Change::Reset),
            "--list" => options.list_all = true,
            "-v" | "--verbose" => options.log_level = LogLevel::Debug,
            "-h" | "--help" => options.help = true,
            other => return Err(format!("unexpected argument '{}'", other)),
        }
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_changes_in_order() {
        let options = parse(args(&[
            "--enable-body",
            "G.Sun",
            "--enable-multiple",
            "5",
            "--disable-fixed",
            "sqrt( 2 )",
            "--last-file",
            "/data/es.csv",
        ]))
        .unwrap();

        assert_eq!(
            options.changes,
            vec![
                Change::Body {
                    name: "G.Sun".to_string(),
                    enabled: true
                },
                Change::Custom {
                    name: "5".to_string(),
                    enabled: true
                },
                Change::Fixed {
                    name: "sqrt( 2 )".to_string(),
                    enabled: false
                },
                Change::LastFile("/data/es.csv".to_string()),
            ]
        );
        assert_eq!(options.revision, CatalogRevision::Simplified);
    }

    #[test]
    fn parses_flags() {
        let options = parse(args(&["--revision", "extended", "--list", "-v", "--reset"])).unwrap();
        assert_eq!(options.revision, CatalogRevision::Extended);
        assert!(options.list_all);
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.changes, vec![Change::Reset]);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse(args(&["--enable-body"])).is_err());
        assert!(parse(args(&["--revision", "rich"])).is_err());
        assert!(parse(args(&["--frobnicate"])).is_err());
    }
}
