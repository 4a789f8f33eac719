#![forbid(unsafe_code)]
use anyhow::Result;
use calgen::{
    config, document, io,
    render::render_json,
    template::{write_template, DEFAULT_TEMPLATE_FILE},
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Génère un calendrier mensuel (une page par mois) depuis une config YAML
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Fichier de configuration YAML
    config_file: Option<PathBuf>,

    /// Écrire une config d'exemple au lieu de générer le calendrier
    #[arg(long)]
    template: bool,

    /// Fichier de sortie (défaut : calendar.html, calendar.json ou template_config.yaml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Format du document généré
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Une image SVG par page dans un fichier HTML
    Html,
    /// Grilles brutes pour un moteur de rendu externe
    Json,
}

impl OutputFormat {
    fn default_output(self) -> &'static str {
        match self {
            OutputFormat::Html => "calendar.html",
            OutputFormat::Json => "calendar.json",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    if cli.template {
        let path = cli
            .output
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATE_FILE));
        write_template(&path)?;
        println!("Template config file created: {}", path.display());
        return Ok(());
    }

    let Some(config_path) = cli.config_file else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "You must specify a config file or use --template.",
            )
            .exit();
    };

    let raw = io::load_config_value(&config_path)?;
    let config = match config::decode(&raw) {
        Ok(c) => c,
        Err(errors) => {
            // une ligne par erreur, aucun document produit
            eprint!("{errors}");
            std::process::exit(1);
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(cli.format.default_output()));
    let contents = match cli.format {
        OutputFormat::Html => document::render_html(&config),
        OutputFormat::Json => render_json(&document::assemble(&config))?,
    };
    io::write_atomic(&output, contents.as_bytes())?;
    println!("Calendar generated: {}", output.display());
    Ok(())
}
