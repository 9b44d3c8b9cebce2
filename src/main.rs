use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use prompt_lint_rs::config::Config;
use prompt_lint_rs::lint::Linter;
use prompt_lint_rs::models::{default_examples, Field};
use prompt_lint_rs::nlp;
use prompt_lint_rs::ports::{FixedName, StdoutClipboard};
use prompt_lint_rs::storage::{FileSystemStorage, PromptStorage};
use prompt_lint_rs::{server, ExportFormat, Workspace};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the draft and saved prompts (overrides the config file)
    #[arg(long)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current draft and its size
    Show,
    /// Lint every section of the current draft
    Lint {
        /// Print the report as JSON keyed by section label
        #[arg(long)]
        json: bool,
    },
    /// Replace one section; "-" reads the value from stdin
    Set { field: Field, value: String },
    /// Manage code blocks in the Context section
    #[command(subcommand)]
    Code(CodeCommand),
    /// List the built-in example prompts
    Examples,
    /// Load an example or saved prompt into the draft
    Load { name: String },
    /// Save the draft under a name
    Save { name: String },
    /// List saved prompts
    Saved,
    /// Delete a saved prompt
    Forget { name: String },
    /// Print the final prompt
    Export {
        #[arg(long)]
        markdown: bool,
    },
    /// Replace the draft with a pasted final prompt; "-" reads stdin
    Import { source: String },
    /// Serve the linter over HTTP
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Subcommand, Debug)]
enum CodeCommand {
    List,
    /// Append a block; "-" reads the content from stdin
    Add {
        content: String,
        #[arg(long)]
        language: Option<String>,
    },
    Edit {
        id: Uuid,
        #[arg(long)]
        language: Option<String>,
        /// New content; "-" reads stdin
        #[arg(long)]
        content: Option<String>,
    },
    Delete { id: Uuid },
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Use `RUST_LOG=prompt_lint_rs=debug` to see per-section lint output
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    tracing::debug!(args = ?args, "Parsed arguments");

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(dir) = args.storage_dir {
        config.storage.dir = dir;
    }
    let linter = Linter::new(nlp::toolkit(&config.lint.toolkit)?);

    let command = match args.command {
        Command::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            return server::run(&host, port, linter)
                .await
                .context("HTTP server failed");
        }
        command => command,
    };

    tracing::info!(path = %config.storage.dir.display(), "Using filesystem storage");
    let storage: Arc<dyn PromptStorage> = Arc::new(FileSystemStorage::new(&config.storage.dir));
    let mut workspace = Workspace::open(storage, linter)
        .await?
        .with_new_block_language(config.editor.new_block_language.clone());

    match command {
        Command::Show => {
            for (field, value) in workspace.sections().fields() {
                println!("{}:\n{}\n", field, value);
            }
            for block in workspace.code_blocks() {
                println!("[{}] ```{}\n{}\n```\n", block.id, block.language, block.content);
            }
            let stats = workspace.stats();
            println!("Tokens: {} | Characters: {}", stats.tokens, stats.chars);
        }
        Command::Lint { json } => {
            let report = workspace.lint();
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else if report.is_clean() {
                println!("No issues found.");
            } else {
                for (field, issues) in report.iter().filter(|(_, issues)| !issues.is_empty()) {
                    println!("{}:", field);
                    for issue in issues {
                        println!("  - {}", issue);
                    }
                }
            }
        }
        Command::Set { field, value } => {
            workspace.set_field(field, read_arg(&value)?).await?;
        }
        Command::Code(command) => run_code(&mut workspace, command).await?,
        Command::Examples => {
            for example in default_examples() {
                println!("{}", example.name);
            }
        }
        Command::Load { name } => {
            workspace.load_named(&name).await?;
            println!("Loaded '{}'.", name);
        }
        Command::Save { name } => match workspace.save_as(&mut FixedName(Some(name))).await? {
            Some(saved) => println!("Saved '{}'.", saved.name),
            None => bail!("A prompt name is required"),
        },
        Command::Saved => {
            for prompt in workspace.saved_prompts() {
                println!("{}", prompt.name);
            }
        }
        Command::Forget { name } => {
            if !workspace.delete_saved(&name).await? {
                bail!("Prompt not found: {}", name);
            }
        }
        Command::Export { markdown } => {
            let format = if markdown {
                ExportFormat::Markdown
            } else {
                ExportFormat::Plain
            };
            workspace.copy(&mut StdoutClipboard, format)?;
        }
        Command::Import { source } => {
            let text = if source == "-" {
                read_stdin()?
            } else {
                tokio::fs::read_to_string(&source)
                    .await
                    .with_context(|| format!("Failed to read {}", source))?
            };
            workspace.import_structured(&text).await?;
        }
        Command::Serve { .. } => {}
    }
    Ok(())
}

async fn run_code(workspace: &mut Workspace, command: CodeCommand) -> Result<()> {
    match command {
        CodeCommand::List => {
            for block in workspace.code_blocks() {
                let first_line = block.content.lines().next().unwrap_or_default();
                println!("{}  {:<12} {}", block.id, block.language, first_line);
            }
        }
        CodeCommand::Add { content, language } => {
            let id = workspace
                .add_code_block(language.as_deref(), &read_arg(&content)?)
                .await?;
            println!("{}", id);
        }
        CodeCommand::Edit {
            id,
            language,
            content,
        } => {
            let content = content.as_deref().map(read_arg).transpose()?;
            workspace
                .edit_code_block(id, language.as_deref(), content.as_deref())
                .await?;
        }
        CodeCommand::Delete { id } => workspace.delete_code_block(id).await?,
    }
    Ok(())
}

fn read_arg(value: &str) -> Result<String> {
    if value == "-" {
        read_stdin()
    } else {
        Ok(value.to_string())
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer.trim_end_matches('\n').to_string())
}
