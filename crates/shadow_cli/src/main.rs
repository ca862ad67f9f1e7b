mod args;
mod commands;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let argv = match std::env::args_os()
        .skip(1)
        .map(|a| a.into_string())
        .collect::<Result<Vec<String>, _>>()
    {
        Ok(v) => v,
        Err(bad) => {
            eprintln!("Argument is not valid UTF-8: {}", bad.to_string_lossy());
            std::process::exit(2);
        }
    };

    let cli = match args::parse_args(argv) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let code = match cli.cmd.as_str() {
        "parse" => commands::parse::run(&cli),
        "tokens" => commands::tokens::run(&cli),
        "grammar" => commands::grammar::run(&cli),
        _ => {
            eprintln!("Unknown command: {}", cli.cmd);
            eprintln!("{}", args::usage());
            2
        }
    };
    std::process::exit(code);
}
