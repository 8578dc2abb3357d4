//! EPD Impact - command line entry point
//!
//! Loads a building model (EPD catalog + elements) from TOML and either
//! evaluates one impact metric over its elements or lists declared metrics.

use epd_impact::core::types::MetricField;
use epd_impact::epd::{element_metrics, epd_metrics, EnvironmentalMetric};
use epd_impact::impact::{Diagnostics, ImpactEvaluator, Severity};
use epd_impact::{BuildingElement, BuildingModel, EvaluationConfig};

use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

/// EPD Impact - environmental impact of building elements
#[derive(Parser, Debug)]
#[command(name = "epd-impact")]
#[command(about = "Evaluate environmental impacts of building elements from EPD data")]
struct Args {
    /// Model file with [[epds]] and [[elements]] tables
    #[arg(long, short = 'm')]
    model: PathBuf,

    /// Evaluation config file (defaults apply when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one impact metric for every element, or for a single one
    Evaluate {
        /// Metric field, e.g. gwp, ap, odp (config default when omitted)
        #[arg(long)]
        field: Option<MetricField>,

        /// Only evaluate the element with this name
        #[arg(long)]
        element: Option<String>,

        /// Output format: json or text
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List the metrics declared for elements and their materials
    Metrics {
        /// Only list the element with this name
        #[arg(long)]
        element: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("epd_impact=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EvaluationConfig::load(path)?,
        None => EvaluationConfig::default(),
    };
    config.validate()?;

    let model = BuildingModel::load(&args.model)?;
    let evaluator = ImpactEvaluator::new(config);

    match args.command {
        Command::Evaluate {
            field,
            element,
            format,
        } => {
            let field = field.unwrap_or(evaluator.config().default_field);
            match element {
                Some(name) => evaluate_single(&evaluator, &model, &name, field),
                None => {
                    let report = evaluator.evaluate_all(model.elements(), field);
                    if format == "json" {
                        println!("{}", report.to_json());
                    } else {
                        for entry in &report.elements {
                            match (entry.impact, &entry.error) {
                                (Some(impact), _) => {
                                    println!("{:<32} {:>14.3} {}", entry.element, impact, report.unit)
                                }
                                (None, Some(error)) => {
                                    println!("{:<32} {:>14} {}", entry.element, "-", error)
                                }
                                (None, None) => {}
                            }
                        }
                        println!("{}", report.summary());
                    }
                }
            }
        }
        Command::Metrics { element } => match element {
            Some(name) => {
                let found = model.element_by_name(&name);
                if found.is_none() {
                    tracing::warn!("No element named '{}' in model", name);
                }
                print_metrics(&name, found);
            }
            None => {
                for element in model.elements() {
                    print_metrics(&element.name, Some(element));
                }
            }
        },
    }

    Ok(())
}

fn evaluate_single(
    evaluator: &ImpactEvaluator,
    model: &BuildingModel,
    name: &str,
    field: MetricField,
) {
    let mut diagnostics = Diagnostics::new();
    let impact = evaluator.evaluate_or_zero(model.element_by_name(name), field, &mut diagnostics);

    println!("{}: {:.3} {} ({})", name, impact, field.unit(), field);
    for diagnostic in diagnostics.entries() {
        let label = match diagnostic.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        println!("  {}: {}", label, diagnostic.message);
    }
}

fn print_metrics(name: &str, element: Option<&BuildingElement>) {
    println!("{}", name);

    let governing = epd_metrics(element.and_then(|e| e.epd_fragment()));
    if !governing.is_empty() {
        println!("  governing EPD:");
        print_metric_lines(&governing);
    }

    let materials = element_metrics(element);
    if !materials.is_empty() {
        println!("  materials:");
        print_metric_lines(&materials);
    }

    if governing.is_empty() && materials.is_empty() {
        println!("  (no declared metrics)");
    }
}

fn print_metric_lines(metrics: &[EnvironmentalMetric]) {
    for metric in metrics {
        println!(
            "    {:<6} {:>14.4} {}",
            metric.field.abbreviation(),
            metric.value,
            metric.field.unit()
        );
    }
}
