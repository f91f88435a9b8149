mod replay;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use order_form::{FormConfig, OrderFormValidator, ValidationSchema};

#[derive(Parser)]
#[command(name = "order-form", about = "Replay pizza order form events")]
struct Cli {
    /// Form configuration (TOML); defaults apply when the file is missing
    #[arg(long, default_value = "order-form.toml")]
    config: PathBuf,

    /// JSON-lines event script; reads stdin when omitted
    script: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = FormConfig::load(&cli.config)?;
    let mut form = OrderFormValidator::new(ValidationSchema::from_config(&config));

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {:?}", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    replay::replay(&mut form, input, stdout.lock())
}
