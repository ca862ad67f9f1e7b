pub(crate) struct CliArgs {
    pub cmd: String,
    pub short: String,
    pub long: Vec<String>,
    pub prog: String,
    pub abbrev: bool,
    pub json_out: bool,
    pub no_diags: bool,
    pub argv: Vec<String>,
}

pub(crate) fn usage() -> &'static str {
    "Usage: shadow <parse|tokens|grammar> [SHORTSPEC] [--long DECL]... [--prog NAME] [--abbrev] [--json] [--no-diags] [-- ARGS...]"
}

/// Read the tool's own arguments. Everything after `--` is the argument
/// vector under test and is passed through untouched.
pub(crate) fn parse_args(mut argv: Vec<String>) -> Result<CliArgs, String> {
    if argv.is_empty() {
        return Err(usage().to_string());
    }
    let cmd = argv.remove(0);

    let mut short: Option<String> = None;
    let mut long: Vec<String> = Vec::new();
    let mut prog = "prog".to_string();
    let mut abbrev = false;
    let mut json_out = false;
    let mut no_diags = false;
    let mut rest: Vec<String> = Vec::new();

    let mut it = argv.into_iter();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--" => {
                rest.extend(it.by_ref());
                break;
            }
            "--long" => {
                let decl = it.next().ok_or("Missing value for --long")?;
                long.push(decl);
            }
            "--prog" => {
                prog = it.next().ok_or("Missing value for --prog")?;
            }
            "--abbrev" => abbrev = true,
            "--json" => json_out = true,
            "--no-diags" => no_diags = true,
            _ if a.starts_with("--") => return Err(format!("Unknown option: {a}")),
            _ if short.is_none() => short = Some(a),
            _ => return Err(format!("Unexpected argument: {a}")),
        }
    }

    Ok(CliArgs {
        cmd,
        short: short.unwrap_or_default(),
        long,
        prog,
        abbrev,
        json_out,
        no_diags,
        argv: rest,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn splits_tool_flags_from_vector() {
        let cli = parse_args(argv(&[
            "parse", "ab:", "--long", "second:", "--json", "--", "-a", "--json",
        ]))
        .unwrap();
        assert_eq!(cli.cmd, "parse");
        assert_eq!(cli.short, "ab:");
        assert_eq!(cli.long, ["second:"]);
        assert!(cli.json_out);
        assert!(!cli.abbrev);
        assert_eq!(cli.argv, ["-a", "--json"]);
    }

    #[test]
    fn rejects_unknown_tool_flags() {
        assert!(parse_args(argv(&["parse", "--bogus"])).is_err());
        assert!(parse_args(argv(&["parse", "a", "b"])).is_err());
        assert!(parse_args(argv(&["parse", "--long"])).is_err());
        assert!(parse_args(Vec::new()).is_err());
    }
}
