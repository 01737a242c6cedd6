use std::path::Path;

use clap::Parser;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use codecompass::cli::{Cli, ColorChoice, Commands, InitArgs};
use codecompass::config;
use codecompass::error::Result;
use codecompass::output::{ColorMode, OutputFormat, Renderer, renderer_for};
use codecompass::scan::CancelToken;
use codecompass::tools::{
    ToolHandler, empty_content, empty_items, empty_none, empty_summary, to_payload,
};
use codecompass::{EXIT_CONFIG_ERROR, EXIT_OPERATION_ERROR, EXIT_SUCCESS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("codecompass={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    if let Commands::Init(args) = &cli.command {
        return run_init(args);
    }

    let config = config::load(cli.config.as_deref(), cli.no_config)?;
    debug!(roots = ?config.repositories.roots, "configuration loaded");
    let handler = ToolHandler::new(config)?;
    let renderer = renderer_for(cli.format, color_choice_to_mode(cli.color));
    Ok(dispatch(cli, &handler, renderer.as_ref()))
}

fn dispatch(cli: &Cli, handler: &ToolHandler, renderer: &dyn Renderer) -> i32 {
    let cancel = CancelToken::new();
    match &cli.command {
        Commands::Search(args) => {
            let result = handler.search_code(
                &args.query,
                args.regex,
                args.case_sensitive,
                &args.path,
                args.limit,
                &cancel,
            );
            emit(cli, result, |r| renderer.render_search(r), &empty_items())
        }
        Commands::Read(args) => {
            let result = handler.read_file(&args.path, args.offset, args.length);
            emit(cli, result, |r| renderer.render_read(r), &empty_content())
        }
        Commands::Explain(args) => {
            let result = handler.explain_range(&args.path, args.start, args.end, None);
            emit(
                cli,
                result,
                |r| renderer.render_explanation(r),
                &empty_summary(),
            )
        }
        Commands::Todos(args) => {
            let result = handler.list_todos(&args.path, &cancel);
            emit(cli, result, |r| renderer.render_todos(r), &empty_items())
        }
        Commands::Info(args) => {
            let result = handler.get_file_info(&args.path);
            emit(cli, result, |r| renderer.render_info(r), &empty_none())
        }
        Commands::List(args) => {
            let result = handler.list_files(&args.path, args.recursive, args.hidden);
            emit(cli, result, |r| renderer.render_listing(r), &empty_items())
        }
        Commands::Init(_) => unreachable!("handled before dispatch"),
    }
}

fn emit<T, F>(cli: &Cli, result: Result<T>, render: F, empty: &[(&str, Value)]) -> i32
where
    T: Serialize,
    F: Fn(&T) -> Result<String>,
{
    match result {
        Ok(value) => match render(&value) {
            Ok(text) => {
                print!("{text}");
                if !text.ends_with('\n') {
                    println!();
                }
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                EXIT_CONFIG_ERROR
            }
        },
        Err(e) => {
            match cli.format {
                OutputFormat::Json => {
                    let payload = to_payload(Err::<T, _>(e), empty);
                    println!("{payload}");
                }
                OutputFormat::Text => eprintln!("Error: {e}"),
            }
            EXIT_OPERATION_ERROR
        }
    }
}

fn run_init(args: &InitArgs) -> Result<i32> {
    if args.output.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            args.output.display()
        );
        return Ok(EXIT_OPERATION_ERROR);
    }

    write_default_config(&args.output)?;
    println!("Created {}", args.output.display());
    Ok(EXIT_SUCCESS)
}

fn write_default_config(path: &Path) -> Result<()> {
    std::fs::write(path, config::default_config_toml())?;
    Ok(())
}
