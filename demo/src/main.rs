//! CAREPATH Front Desk: Demo CLI
//!
//! Runs the front-desk demo scenarios, or a single ad-hoc analysis whose
//! result is printed as JSON. Every analysis goes through the desk, so it is
//! verified and logged exactly as in the scenarios.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- symptoms "chest pain and dizziness" --age 70
//!   cargo run -p demo -- prescribe "bacterial infection" --age 8 --allergy penicillin
//!   cargo run -p demo -- image mri
//!   cargo run -p demo -- triage --urgency high --symptoms 4 --age 70
//!   cargo run -p demo -- --seed 7 --config my.toml insights --age 55 --bmi 32

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use carepath_contracts::{error::CarepathResult, patient::PatientInfo, urgency::Urgency};
use carepath_desk::{
    default_settings, in_memory_desk, AnalysisDesk,
    scenarios::{self, imaging, prescription, symptom_check},
};
use carepath_settings::EngineSettings;

// ── CLI definition ────────────────────────────────────────────────────────────

/// CAREPATH: rule-based triage and decision support demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "CAREPATH front-desk demo",
    long_about = "Runs CAREPATH front-desk scenarios or a single analysis.\n\
                  Results are verified and logged to a hash-chained history."
)]
struct Cli {
    /// Settings TOML file. Defaults to the settings shipped with the desk.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed, overriding the one in the settings.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: symptom check with the triage queue.
    SymptomCheck,
    /// Scenario 2: prescription suggestions.
    Prescriptions,
    /// Scenario 3: imaging and preventive insights.
    Imaging,
    /// Analyse a free-text complaint.
    Symptoms {
        text: String,
        #[command(flatten)]
        patient: PatientArgs,
    },
    /// Suggest a prescription for a diagnosis.
    Prescribe {
        diagnosis: String,
        #[command(flatten)]
        patient: PatientArgs,
    },
    /// Produce an image reading (x-ray, mri, ct, ecg, ...).
    Image {
        kind: String,
        #[arg(long)]
        patient_id: Option<String>,
    },
    /// Triage from an urgency level and a symptom count.
    Triage {
        /// low, medium or high. Omit for unknown urgency.
        #[arg(long)]
        urgency: Option<Urgency>,
        #[arg(long, default_value_t = 0)]
        symptoms: usize,
        #[command(flatten)]
        patient: PatientArgs,
    },
    /// Preventive insights for a patient profile.
    Insights {
        #[command(flatten)]
        patient: PatientArgs,
    },
}

#[derive(Args)]
struct PatientArgs {
    #[arg(long)]
    patient_id: Option<String>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long)]
    bmi: Option<f64>,
    /// Repeat for several conditions.
    #[arg(long = "chronic")]
    chronic_conditions: Vec<String>,
    #[arg(long = "allergy")]
    allergies: Vec<String>,
    #[arg(long = "current-med")]
    current_medications: Vec<String>,
}

impl From<PatientArgs> for PatientInfo {
    fn from(args: PatientArgs) -> Self {
        PatientInfo {
            patient_id: args.patient_id,
            age: args.age,
            chronic_conditions: args.chronic_conditions,
            allergies: args.allergies,
            current_medications: args.current_medications,
            bmi: args.bmi,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CarepathResult<()> {
    let settings = load_settings(cli.config.as_ref(), cli.seed)?;

    match cli.command {
        Command::RunAll => {
            print_banner();
            scenarios::run_all(&settings)?;
            println!("All selected scenarios completed successfully.");
            Ok(())
        }
        Command::SymptomCheck => {
            print_banner();
            symptom_check::run_scenario(&settings)
        }
        Command::Prescriptions => {
            print_banner();
            prescription::run_scenario(&settings)
        }
        Command::Imaging => {
            print_banner();
            imaging::run_scenario(&settings)
        }
        Command::Symptoms { text, patient } => {
            print_json(&single_desk(settings).analyze_symptoms(&text, &PatientInfo::from(patient))?)
        }
        Command::Prescribe { diagnosis, patient } => print_json(
            &single_desk(settings).suggest_prescription(&diagnosis, &PatientInfo::from(patient))?,
        ),
        Command::Image { kind, patient_id } => {
            print_json(&single_desk(settings).analyze_image(&kind, patient_id.as_deref())?)
        }
        Command::Triage {
            urgency,
            symptoms,
            patient,
        } => print_json(&single_desk(settings).triage(urgency, symptoms, &PatientInfo::from(patient))?),
        Command::Insights { patient } => {
            print_json(&single_desk(settings).health_insights(&PatientInfo::from(patient)))
        }
    }
}

// ── Single analyses ───────────────────────────────────────────────────────────

/// A desk for one ad-hoc analysis. Its history lives only for this run.
fn single_desk(settings: EngineSettings) -> AnalysisDesk {
    let (desk, _history) = in_memory_desk(settings, "demo-cli");
    desk
}

fn load_settings(config: Option<&PathBuf>, seed: Option<u64>) -> CarepathResult<EngineSettings> {
    let settings = match config {
        Some(path) => {
            debug!(path = %path.display(), "loading settings file");
            EngineSettings::from_file(path)?
        }
        None => default_settings()?,
    };
    Ok(match seed {
        Some(_) => settings.with_seed(seed),
        None => settings,
    })
}

fn print_json<T: Serialize>(value: &T) -> CarepathResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("CAREPATH: Front-Desk Decision Support");
    println!("Rule-based Triage Demo");
    println!("======================================");
    println!();
    println!("Desk pipeline per analysis:");
    println!("  [1] Engine matches symptoms, scores conditions, and triages");
    println!("  [2] Verifier checks the result against JSON Schema + domain rules");
    println!("  [3] Verified result appended to the SHA-256 history chain");
    println!("  [4] Auto-triage files a triage record next to each symptom analysis");
    println!();
    println!("  Results are decision support only and always need clinical review.");
    println!();
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{load_settings, run, Cli, Command};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("demo").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn single_analyses_run_through_the_desk() {
        let cases: [&[&str]; 6] = [
            &["--seed", "7", "symptoms", "chest pain and dizziness", "--age", "70"],
            &["--seed", "7", "prescribe", "bacterial infection", "--age", "8", "--allergy", "penicillin"],
            &["--seed", "7", "image", "mri"],
            &["--seed", "7", "triage", "--urgency", "high", "--symptoms", "4"],
            &["--seed", "7", "triage"],
            &["insights", "--age", "55", "--bmi", "32"],
        ];
        for args in cases {
            assert!(run(parse(args)).is_ok(), "failed for {:?}", args);
        }
    }

    #[test]
    fn patient_flags_are_collected() {
        let cli = parse(&["symptoms", "fever", "--chronic", "diabetes", "--chronic", "asthma"]);
        match cli.command {
            Command::Symptoms { text, patient } => {
                assert_eq!(text, "fever");
                assert_eq!(patient.chronic_conditions, vec!["diabetes", "asthma"]);
            }
            _ => panic!("expected the symptoms command"),
        }
    }

    #[test]
    fn seed_flag_overrides_settings() {
        let settings = load_settings(None, Some(99)).unwrap();
        assert_eq!(settings.random_seed, Some(99));
    }
}
