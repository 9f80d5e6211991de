//! `agriguard` - ask farming questions, assess field risk, diagnose leaf images.

use advisor_core::{AdvisorConfig, Assistant, ChatRequest, Language};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crop_rules::{CropCatalog, CropCategory, FieldReadings};
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "agriguard", version, about = "Rule-based farming assistant and crop risk scorer")]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reply variation and simulated diagnoses
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask a farming question
    Ask {
        /// The question, e.g. "how much urea for wheat"
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Reply language: en, hi, ta or te
        #[arg(long)]
        lang: Option<String>,

        /// Crop the question is about
        #[arg(long)]
        crop: Option<String>,
    },

    /// Score field readings for a crop
    Assess {
        /// Rainfall in mm
        #[arg(long)]
        rainfall: f64,

        /// Temperature in degrees Celsius
        #[arg(long)]
        temperature: f64,

        /// Relative humidity in percent
        #[arg(long)]
        humidity: f64,

        /// Soil pH
        #[arg(long)]
        ph: f64,

        /// Crop name as listed by `agriguard crops`
        #[arg(long, default_value = "Rice")]
        crop: String,
    },

    /// Diagnose an uploaded leaf image
    Diagnose {
        /// Identifier of the uploaded file
        file_id: String,
    },

    /// List the crop catalog
    Crops {
        /// Only crops in this category, e.g. "Pulse" or "Cash Crop"
        #[arg(long)]
        category: Option<String>,
    },
}

fn load_config(cli: &Cli) -> AdvisorConfig {
    let mut config = match &cli.config {
        Some(path) => AdvisorConfig::load(path).unwrap_or_else(|e| {
            warn!("Config {} not usable, using defaults: {}", path.display(), e);
            AdvisorConfig::default()
        }),
        None => AdvisorConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli);

    match cli.command {
        Command::Ask {
            ref query,
            ref lang,
            ref crop,
        } => {
            let mut assistant =
                Assistant::from_config(&config).context("failed to load knowledge table")?;
            let mut request = ChatRequest::new(query.join(" "));
            if let Some(code) = lang {
                request = request.with_language(Language::from_code_or_default(code));
            }
            if let Some(crop) = crop {
                request = request.with_crop_hint(crop.clone());
            }

            let reply = assistant.reply(request);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reply)?);
            } else {
                println!("{}", reply.text);
            }
        }

        Command::Assess {
            rainfall,
            temperature,
            humidity,
            ph,
            ref crop,
        } => {
            let readings = FieldReadings::new(rainfall, temperature, humidity, ph);
            readings.validate()?;

            let assistant =
                Assistant::from_config(&config).context("failed to load knowledge table")?;
            let assessment = assistant.assess(&readings, crop);

            if cli.json {
                println!("{}", assessment.to_json()?);
            } else {
                if assessment.defaulted_unknown_crop() {
                    println!("Unknown crop '{}', scored as {}", crop, assessment.crop);
                }
                println!("Crop:            {} ({})", assessment.crop, assessment.crop_category);
                println!("Risk:            {} (score {})", assessment.risk_tier, assessment.score);
                println!("Estimated loss:  {}", assessment.estimated_loss);
                println!("Disease risk:    {}", assessment.disease_risk.description());
                println!("Action plan:     {}", assessment.action_plan);
                for rec in &assessment.recommendations {
                    println!("  - {}", rec);
                }
                println!("Notes:           {}", assessment.analysis_notes);
            }
        }

        Command::Diagnose { ref file_id } => {
            let mut assistant =
                Assistant::from_config(&config).context("failed to load knowledge table")?;
            let report = assistant.analyze_image(file_id);

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let d = &report.diagnosis;
                println!("Report:      {}", report.report_id);
                println!(
                    "Diagnosis:   {} ({}% confidence, {}% affected, severity {})",
                    d.disease, d.confidence_pct, d.affected_area_pct, d.severity
                );
                println!("Description: {}", d.description);
                println!("Chemical:    {}", d.treatment.chemical);
                if let Some(organic) = &d.treatment.organic {
                    println!("Organic:     {}", organic);
                }
                if let Some(prevention) = &d.treatment.prevention {
                    println!("Prevention:  {}", prevention);
                }
                println!("Recovery:    {}", d.recovery_time);
                if report.simulated {
                    println!("(simulated result from '{}' provider)", report.provider);
                }
            }
        }

        Command::Crops { ref category } => {
            let catalog = CropCatalog::builtin();
            let crops = match category {
                Some(name) => {
                    let category: CropCategory = name.parse()?;
                    catalog.by_category(category)
                }
                None => catalog.iter().collect(),
            };

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&crops)?);
            } else {
                for crop in crops {
                    let optimal = crop.optimal_parameters();
                    println!(
                        "{:<14} {:<11} rain {} mm, temp {} C, humidity {} %, pH {}",
                        crop.crop_name,
                        crop.category.label(),
                        optimal.rainfall_mm,
                        optimal.temperature_c,
                        optimal.humidity_pct,
                        optimal.soil_ph
                    );
                }
            }
        }
    }

    Ok(())
}
