use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use writeme_core::{UploadedFile, WritemeConfig};
use writeme_generate::llm::LlmClient;
use writeme_generate::pipeline::{ReadmePipeline, ReadmeRequest};

#[derive(Parser)]
#[command(
    name = "writeme",
    version,
    about = "Generate a README for your codebase",
    long_about = "writeme maps your project's files, pulls out public classes and methods,\n\
                   and asks an LLM to write a README from that summary.\n\n\
                   Examples:\n  \
                     writeme generate --name Shop --description 'Online store'   Write a README to stdout\n  \
                     writeme generate --path ../api --output README.md          Write a README file\n  \
                     writeme prompt --path .                                    Show the prompt only\n  \
                     writeme structure --path .                                 Show the file tree\n  \
                     writeme init                                               Create .writeme.toml"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .writeme.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the LLM model from the config file
    #[arg(long, global = true)]
    model: Option<String>,

    /// Override the source file suffix analysed for classes and methods
    #[arg(long, global = true)]
    suffix: Option<String>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    verbose: bool,

    /// When to use colors
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Args)]
struct ProjectArgs {
    /// Project directory (default: current directory)
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Project name (default: the directory name)
    #[arg(long)]
    name: Option<String>,

    /// Short description of the project
    #[arg(long, default_value = "")]
    description: String,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a README with the configured LLM
    #[command(long_about = "Generate a README with the configured LLM.\n\n\
        Collects every file under --path (respecting .gitignore), renders the\n\
        directory tree, extracts classes and methods from source files, and sends\n\
        one prompt to the LLM.\n\n\
        Examples:\n  writeme generate --name Shop --description 'Online store'\n  writeme generate --path ../api --output README.md")]
    Generate {
        #[command(flatten)]
        project: ProjectArgs,

        /// Write the README to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the prompt that would be sent to the LLM
    Prompt {
        #[command(flatten)]
        project: ProjectArgs,
    },
    /// Print the directory tree included in the prompt
    Structure {
        /// Project directory (default: current directory)
        #[arg(long, default_value = ".")]
        path: PathBuf,
    },
    /// Create a default .writeme.toml configuration file
    #[command(long_about = "Create a default .writeme.toml configuration file.\n\n\
        Generates a commented-out template with all available options.\n\
        Fails if .writeme.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn print_welcome(use_color: bool) {
    let version = env!("CARGO_PKG_VERSION");

    if use_color {
        println!("\x1b[1mwriteme\x1b[0m v{version}: READMEs from your code\n");

        println!("Quick start:");
        println!("  \x1b[36mwriteme init\x1b[0m                  Create a .writeme.toml config file");
        println!("  \x1b[36mwriteme generate\x1b[0m              Write a README for the current directory\n");

        println!("All commands:");
        println!("  \x1b[32mgenerate\x1b[0m   Generate a README with the configured LLM");
        println!("  \x1b[32mprompt\x1b[0m     Print the prompt without calling the LLM");
        println!("  \x1b[32mstructure\x1b[0m  Print the project file tree");
        println!("  \x1b[32minit\x1b[0m       Create default configuration\n");
    } else {
        println!("writeme v{version}: READMEs from your code\n");

        println!("Quick start:");
        println!("  writeme init                  Create a .writeme.toml config file");
        println!("  writeme generate              Write a README for the current directory\n");

        println!("All commands:");
        println!("  generate   Generate a README with the configured LLM");
        println!("  prompt     Print the prompt without calling the LLM");
        println!("  structure  Print the project file tree");
        println!("  init       Create default configuration\n");
    }

    println!("Run 'writeme <command> --help' for details.");
}

const DEFAULT_CONFIG: &str = r#"# writeme configuration

[llm]
# Any OpenAI-compatible chat completions endpoint
# provider = "openai"
# model = "gpt-4o"
# api_key = "..."            # or set OPENAI_API_KEY
# base_url = "https://api.openai.com"
# temperature = 0.7
# timeout_secs = 120

[analysis]
# Files with this suffix are scanned for classes and methods
# source_suffix = ".java"
# Glob patterns excluded when collecting files
# skip_patterns = ["target/**", "*.lock"]
# max_file_size = 1048576
"#;

fn load_config(cli: &Cli) -> Result<WritemeConfig> {
    let mut config = match &cli.config {
        Some(path) => WritemeConfig::from_file(path)?,
        None => {
            let default_path = Path::new(".writeme.toml");
            if default_path.exists() {
                WritemeConfig::from_file(default_path)?
            } else {
                WritemeConfig::default()
            }
        }
    };

    if let Some(model) = &cli.model {
        config.llm.model = model.clone();
    }
    if let Some(suffix) = &cli.suffix {
        config.analysis.source_suffix = suffix.clone();
    }
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn project_name(project: &ProjectArgs) -> String {
    if let Some(name) = &project.name {
        return name.clone();
    }
    std::fs::canonicalize(&project.path)
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_default()
}

fn collect(path: &Path, config: &WritemeConfig) -> Result<Vec<UploadedFile>> {
    let uploads = writeme_analysis::uploads::collect_uploads(path, &config.analysis)
        .wrap_err(format!("collecting files under {}", path.display()))?;
    if uploads.is_empty() {
        miette::bail!(miette::miette!(
            help = "Check --path, your .gitignore, and [analysis] skip_patterns",
            "No files found under {}",
            path.display()
        ));
    }
    Ok(uploads)
}

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    };

    if cli.verbose {
        eprintln!(
            "llm: {} (model: {}), source suffix: {}",
            config.llm.provider, config.llm.model, config.analysis.source_suffix
        );
    }

    match cli.command {
        None => {
            print_welcome(use_color);
            return Ok(());
        }
        Some(Command::Generate {
            ref project,
            ref output,
        }) => {
            // Hint: missing API key
            if config.llm.resolved_api_key().is_none() && config.llm.base_url.is_none() {
                let env_var = config.llm.api_key_env_var();
                miette::bail!(miette::miette!(
                    help = format!(
                        "Set {env_var} or add api_key in your .writeme.toml under [llm]"
                    ),
                    "No API key configured for LLM provider '{}'",
                    config.llm.provider
                ));
            }

            let uploads = collect(&project.path, &config)?;
            let name = project_name(project);

            let llm_client = LlmClient::new(&config.llm)?;
            let pipeline = ReadmePipeline::new(llm_client, config.analysis.clone());

            let is_tty = std::io::stderr().is_terminal();
            let spinner = if is_tty {
                let pb = indicatif::ProgressBar::new_spinner();
                pb.set_style(
                    indicatif::ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
                        .into_diagnostic()?,
                );
                pb.set_message(format!("Generating README from {} files...", uploads.len()));
                pb.enable_steady_tick(std::time::Duration::from_millis(120));
                Some(pb)
            } else {
                None
            };

            let readme = pipeline
                .generate(ReadmeRequest {
                    name: &name,
                    description: &project.description,
                    uploads: &uploads,
                })
                .await
                .inspect_err(|_e| {
                    if let Some(pb) = &spinner {
                        pb.finish_with_message("Failed");
                    }
                })
                .wrap_err("Error generating document")?;

            if let Some(pb) = spinner {
                pb.finish_with_message("Done");
            }

            match output {
                Some(path) => {
                    std::fs::write(path, &readme.markdown)
                        .into_diagnostic()
                        .wrap_err(format!("writing {}", path.display()))?;
                    eprintln!("Wrote {} ({})", path.display(), readme.model);
                }
                None => println!("{readme}"),
            }
        }
        Some(Command::Prompt { ref project }) => {
            let uploads = collect(&project.path, &config)?;
            let name = project_name(project);
            let descriptor = writeme_analysis::analyze_project(
                &name,
                &project.description,
                &uploads,
                &config.analysis,
            )?;
            println!("{}", writeme_generate::prompt::build_prompt(&descriptor));
        }
        Some(Command::Structure { ref path }) => {
            let uploads = collect(path, &config)?;
            let tree = writeme_analysis::structure::render_structure(
                uploads.iter().filter_map(UploadedFile::path),
            );
            println!("{tree}");
        }
        Some(Command::Init) => {
            let path = Path::new(".writeme.toml");
            if path.exists() {
                miette::bail!(".writeme.toml already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created .writeme.toml with default configuration");
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "writeme", &mut std::io::stdout());
        }
    }

    Ok(())
}
