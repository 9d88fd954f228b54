use clap::{Parser, Subcommand};
use site_prompt::export::{self, DirectorySink, ExportFormat, ExportOutcome, Notification, Notifier};
use site_prompt::output::{self, StderrNotifier};
use site_prompt::preview::{HtmlPreview, PreviewSink, TerminalPreview};
use site_prompt::schema::Schema;
use site_prompt::state::ProjectState;
use site_prompt::{compile, config, input};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "site-prompt")]
#[command(about = "Build an AI website-generation prompt from a project description")]
#[command(long_about = "\
Build an AI website-generation prompt from a project description

A project file lists what you would type into the form: name, pages,
section copy, palette, languages and floating social buttons. The tool
compiles it into one Markdown prompt (or a JSON export) ready to paste
into an AI assistant.

Project file (TOML):

  project_name = \"Acme\"
  pages = [\"home\", \"about\", \"contact\"]
  palette = \"Forest Green\"

  [buttons.whatsapp]
  enabled = true
  number = \"34912345678\"

  [content.home.hero]
  titulo = \"Bienvenidos\"
  textoCTA = \"Empezar\"

Run 'site-prompt schema' to list every page, section and field.
Run 'site-prompt gen-config' to generate a documented site-prompt.toml.")]
#[command(version = env!("SITE_PROMPT_VERSION"))]
struct Cli {
    /// Directory holding site-prompt.toml
    #[arg(long, default_value = ".", global = true)]
    config: PathBuf,

    /// Project file to load
    #[arg(long, short, global = true)]
    project: Option<PathBuf>,

    /// Start from the bundled example project (applied before --project)
    #[arg(long, global = true)]
    example: bool,

    /// Log store and compiler activity to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write <project>-prompt.<ext> into the output directory
    Build {
        #[arg(long, short, value_enum, default_value = "md")]
        format: ExportFormat,
        /// Output directory (defaults to export.output_dir from the config)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the compiled prompt without exporting it
    Preview {
        #[arg(long, short, value_enum, default_value = "md")]
        format: ExportFormat,
        /// Write a standalone HTML preview page instead of printing
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Copy the compiled prompt to the system clipboard
    Copy {
        #[arg(long, short, value_enum, default_value = "md")]
        format: ExportFormat,
    },
    /// Load the project and report what it contains
    Check,
    /// List every page, section and field with its input kind
    Schema,
    /// Print a stock site-prompt.toml with all options documented
    GenConfig,
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the session state: configured defaults, then the example, then the project file.
fn load_state(
    cli: &Cli,
    schema: &Schema,
    notifier: &mut dyn Notifier,
) -> Result<(ProjectState, config::GeneratorConfig), Box<dyn std::error::Error>> {
    let config = config::load_config(&cli.config)?;
    let mut state = ProjectState::new(config.defaults.state_defaults()?);
    if cli.example {
        state.load_example();
        notifier.notify(Notification::example_loaded());
    }
    if let Some(path) = &cli.project {
        let project = input::load_input(path)?;
        project.apply(&mut state, schema)?;
    }
    Ok((state, config))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let schema = Schema::standard();
    let mut notifier = StderrNotifier;

    match &cli.command {
        Command::Schema => {
            output::print_schema_output(&schema);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check => {
            let (state, _) = load_state(&cli, &schema, &mut notifier)?;
            output::print_check_output(&state, &schema);
        }
        Command::Build { format, output: out_dir } => {
            let (state, config) = load_state(&cli, &schema, &mut notifier)?;
            let dir = out_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.export.output_dir));
            let mut sink = DirectorySink::new(dir);
            match export::download(&state, &schema, *format, &mut sink, &mut notifier)? {
                ExportOutcome::Saved {
                    path,
                    file_name,
                    bytes,
                    fingerprint,
                } => output::print_build_output(&file_name, &path, *format, bytes, &fingerprint),
                ExportOutcome::Rejected => return Ok(ExitCode::FAILURE),
            }
        }
        Command::Preview { format, html } => {
            let (state, _) = load_state(&cli, &schema, &mut notifier)?;
            let compiled = compile::compile(&state, &schema);
            match html {
                Some(path) => {
                    HtmlPreview::new(path).present(&compiled, *format)?;
                    println!("Preview written to {}", path.display());
                }
                None => TerminalPreview::new(std::io::stdout().lock()).present(&compiled, *format)?,
            }
        }
        Command::Copy { format } => {
            let (state, _) = load_state(&cli, &schema, &mut notifier)?;
            let mut clipboard = export::SystemClipboard;
            export::copy_to_clipboard(&state, &schema, *format, &mut clipboard, &mut notifier)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
