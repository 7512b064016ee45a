use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::info;

use n8ngen_core::config::{self, CONFIG_FILE_NAME, N8ngenConfig, StarterStrategy};
use n8ngen_core::name::PluginName;
use n8ngen_core::parse::{self, OpenApiDocument};
use n8ngen_core::{CodeGenerator, scaffold, starter, transform};
use n8ngen_node::{NodePluginGenerator, PluginOptions};

#[derive(Parser)]
#[command(
    name = "n8ngen",
    about = "Generate n8n community node plugins from OpenAPI specs",
    version
)]
struct Cli {
    /// Config file (defaults to .n8ngen.yaml in the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate an n8n node plugin from an OpenAPI spec
    Generate(GenerateArgs),

    /// Validate an OpenAPI spec
    Validate {
        /// Path to the OpenAPI JSON file
        #[arg(value_parser = existing_file)]
        openapi_file: PathBuf,
    },

    /// Print the node properties derived from an OpenAPI spec
    Inspect {
        /// Path to the OpenAPI JSON file
        #[arg(value_parser = existing_file)]
        openapi_file: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Write a default n8ngen configuration file
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// Path to the OpenAPI JSON file
    #[arg(value_parser = existing_file)]
    openapi_file: PathBuf,

    /// Name of the n8n node (letters, digits and underscores; not starting with a digit)
    #[arg(value_parser = parse_node_name)]
    node_name: PluginName,

    /// Directory to save the generated plugin files. Defaults to ./<NODE_NAME>
    #[arg(long, alias = "output_dir")]
    output_dir: Option<PathBuf>,

    /// Where the starter template tree comes from
    #[arg(long)]
    starter: Option<StarterArg>,

    /// Git repository cloned by the `git` starter
    #[arg(long)]
    starter_url: Option<String>,

    /// Branch or tag cloned by the `git` starter
    #[arg(long)]
    starter_ref: Option<String>,

    /// Directory copied by the `local` starter (implies --starter local)
    #[arg(long)]
    starter_path: Option<PathBuf>,

    /// Directory for nodes/ and credentials/, relative to the output directory
    #[arg(long)]
    source_dir: Option<String>,

    /// Do not emit index.ts
    #[arg(long)]
    no_index: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StarterArg {
    Git,
    Local,
    None,
}

impl From<StarterArg> for StarterStrategy {
    fn from(arg: StarterArg) -> Self {
        match arg {
            StarterArg::Git => StarterStrategy::Git,
            StarterArg::Local => StarterStrategy::Local,
            StarterArg::None => StarterStrategy::None,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = cli.config;

    match cli.command {
        Commands::Generate(args) => cmd_generate(args, config_path.as_deref()),

        Commands::Validate { openapi_file } => cmd_validate(&openapi_file),

        Commands::Inspect {
            openapi_file,
            format,
        } => cmd_inspect(&openapi_file, format),

        Commands::Init { force } => cmd_init(config_path.as_deref(), force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "n8ngen", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn parse_node_name(value: &str) -> Result<PluginName, String> {
    PluginName::new(value).map_err(|_| {
        "NODE_NAME should start with a letter or underscore and contain only letters, numbers, and underscores."
            .to_string()
    })
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("path {value:?} does not exist"))
    }
}

/// Load the project config, either from `--config` or the current directory.
fn try_load_config(explicit: Option<&Path>) -> Result<N8ngenConfig> {
    let path = explicit.unwrap_or(Path::new(CONFIG_FILE_NAME));
    match config::load_config(path)? {
        Some(cfg) => {
            info!("loaded config from {}", path.display());
            Ok(cfg)
        }
        None if explicit.is_some() => {
            anyhow::bail!("config file {} does not exist", path.display())
        }
        None => Ok(N8ngenConfig::default()),
    }
}

/// Apply command-line overrides on top of the file config.
fn apply_overrides(cfg: &mut N8ngenConfig, args: &GenerateArgs) {
    if let Some(strategy) = args.starter {
        cfg.starter.strategy = strategy.into();
    } else if args.starter_path.is_some() {
        cfg.starter.strategy = StarterStrategy::Local;
    }
    if let Some(ref url) = args.starter_url {
        cfg.starter.url = url.clone();
    }
    if let Some(ref reference) = args.starter_ref {
        cfg.starter.reference = Some(reference.clone());
    }
    if let Some(ref path) = args.starter_path {
        cfg.starter.path = Some(path.clone());
    }
    if let Some(ref source_dir) = args.source_dir {
        cfg.source_dir = source_dir.clone();
    }
    if args.no_index {
        cfg.index = false;
    }
}

fn load_document(path: &Path) -> Result<OpenApiDocument> {
    parse::load(path).with_context(|| format!("failed to load OpenAPI spec {}", path.display()))
}

fn cmd_generate(args: GenerateArgs, config_path: Option<&Path>) -> Result<()> {
    let mut cfg = try_load_config(config_path)?;
    apply_overrides(&mut cfg, &args);

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("./{}", args.node_name)));
    scaffold::ensure_absent(&output_dir)?;

    let doc = load_document(&args.openapi_file)?;
    let plugin = transform::transform(&doc, args.node_name);
    info!("derived {} operations", plugin.operations.len());

    // Dropped on every exit path, taking any cloned starter with it.
    let scratch = tempfile::tempdir().context("failed to create scratch directory")?;
    let starter_dir = match starter::from_config(&cfg.starter)? {
        Some(source) => Some(source.fetch(scratch.path())?),
        None => None,
    };
    let dev_dependencies = match starter_dir {
        Some(ref dir) => starter::read_dev_dependencies(dir)?,
        None => None,
    };

    let options = PluginOptions::from_config(&cfg, dev_dependencies);
    let files = NodePluginGenerator.generate(&plugin, &options)?;

    scaffold::materialize(&output_dir, &files, starter_dir.as_deref())?;
    for file in &files {
        eprintln!("  wrote {}", output_dir.join(&file.path).display());
    }

    println!("Generated n8n node plugin saved to {}", output_dir.display());
    Ok(())
}

fn cmd_validate(input: &Path) -> Result<()> {
    let doc = load_document(input)?;

    let title = doc.info.as_ref().map(|i| i.title.as_str()).unwrap_or("");
    eprintln!("Valid OpenAPI {} spec: {}", doc.openapi, title);
    if let Some(ref info) = doc.info {
        eprintln!("  Version: {}", info.version);
    }
    eprintln!("  Paths: {}", doc.paths.len());
    eprintln!("  Operations: {}", doc.operation_count());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: &Path, format: InspectFormat) -> Result<()> {
    let doc = load_document(input)?;
    let descriptors = transform::derive_descriptors(&doc);

    let summary = serde_json::json!({
        "info": {
            "title": doc.info.as_ref().map(|i| i.title.as_str()),
            "version": doc.info.as_ref().map(|i| i.version.as_str()),
        },
        "operations": descriptors,
    });

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn cmd_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or(Path::new(CONFIG_FILE_NAME));

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(config_path, config::default_config_content())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
