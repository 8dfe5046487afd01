use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use delivery_route::{DeliveryNotes, NoteFormat};

const SAMPLE_NOTES: &str = "
-deliveryNote
    meanOfTransportation: Flight
    from: Adolfo Suárez Madrid–Barajas Airport, Spain
    to: London Heathrow, UK
    deliveryCompany: DHL
-deliveryNote
    meanOfTransportation: Truck
    from: Fazenda São Francisco Citros, Brazil
    to: São Paulo–Guarulhos International Airport, Brazil
    deliveryCompany: Correios
-deliveryNote
    meanOfTransportation: Van
    from: Porto International Airport, Portugal
    to: Adolfo Suárez Madrid–Barajas Airport, Spain
    deliveryCompany: AnyVan
-deliveryNote
    meanOfTransportation: Van
    from: London Heathrow, UK
    to: Loft Digital, London, UK
    deliveryCompany: City Sprint
-deliveryNote
    meanOfTransportation: Flight
    from: São Paulo–Guarulhos International Airport, Brazil
    to: Porto International Airport, Portugal
    deliveryCompany: LATAM
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Toon,
}

/// Sort delivery notes into the route they describe.
#[derive(Debug, Parser)]
#[command(name = "delivery-route", version)]
struct Cli {
    /// Notes file, `-` for stdin. Without it the built-in sample is sorted.
    input: Option<PathBuf>,

    /// TOON file overriding the note delimiter and field indent.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,

    /// Print the input under "INPUT:" before the sorted "OUTPUT:".
    #[arg(long)]
    echo_input: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        None => Ok(SAMPLE_NOTES.to_string()),
        Some(p) if p.as_os_str() == "-" => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
        Some(p) => fs::read_to_string(p).with_context(|| format!("cannot read {}", p.display())),
    }
}

fn load_format(config: Option<&PathBuf>) -> Result<NoteFormat> {
    let Some(path) = config else {
        return Ok(NoteFormat::default());
    };
    let doc = fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))?;
    Ok(NoteFormat::from_toon(&doc)?)
}

fn run(cli: &Cli) -> Result<()> {
    let text = read_input(cli.input.as_ref())?;
    let format = load_format(cli.config.as_ref())?;

    let notes = DeliveryNotes::parse_with(&text, &format)?;
    info!("{} notes parsed", notes.parsed_notes_count());

    let rendered = match cli.output {
        Output::Text => notes.sorted_text()?,
        Output::Toon => notes.to_toon()?,
    };

    if cli.echo_input {
        println!("INPUT:");
        println!("{text}");
        println!("OUTPUT:");
    }
    print!("{rendered}");
    if cli.output == Output::Toon {
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
