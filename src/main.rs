use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use termform::{
    CoefficientSequence, CollectorConfig, FactorOutcome, FactorReport, TermCollector, TermField,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "termform", about = "Collect polynomial coefficients for factoring")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a degree, fill the fields and print the coefficient sequence.
    Collect {
        /// Degree as typed into the form.
        #[arg(long, allow_hyphen_values = true)]
        degree: String,
        /// Comma-separated entries, highest exponent first; empty items are blank.
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        values: String,
        /// Accept quadratics (minimum degree 2).
        #[arg(long)]
        legacy: bool,
        /// Explicit minimum degree (overrides --legacy).
        #[arg(long)]
        min_degree: Option<u32>,
        /// Largest accepted degree (default 1024).
        #[arg(long)]
        max_degree: Option<u32>,
        /// Also print the factoring API query string.
        #[arg(long)]
        query: bool,
        /// Also check the factoring API's input rules.
        #[arg(long)]
        check: bool,
    },
    /// Normalize an exponent and print its label.
    Label {
        /// Exponent to normalize.
        #[arg(long, allow_hyphen_values = true)]
        exponent: f64,
    },
    /// Validate a factoring result and print its summary.
    Outcome {
        /// One of full, quadratic, partial, not, error.
        #[arg(long)]
        result: String,
        /// Factored expression (successful results only).
        #[arg(long)]
        expression: Option<String>,
        /// x-intercepts (repeatable).
        #[arg(long = "intercept", allow_hyphen_values = true)]
        intercepts: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Collect {
            degree,
            values,
            legacy,
            min_degree,
            max_degree,
            query,
            check,
        } => run_collect(degree, values, legacy, min_degree, max_degree, query, check)?,
        Commands::Label { exponent } => run_label(exponent),
        Commands::Outcome {
            result,
            expression,
            intercepts,
        } => run_outcome(result, expression, intercepts)?,
    }

    Ok(())
}

fn run_collect(
    degree: String,
    values: String,
    legacy: bool,
    min_degree: Option<u32>,
    max_degree: Option<u32>,
    query: bool,
    check: bool,
) -> Result<()> {
    let mut config = if legacy {
        CollectorConfig::legacy()
    } else {
        CollectorConfig::default()
    };
    if let Some(min) = min_degree {
        config = config.with_min_degree(min);
    }
    if let Some(max) = max_degree {
        config = config.with_max_degree(max);
    }

    let mut collector = TermCollector::new(config);
    collector.set_degree_input(degree);
    if let Err(err) = collector.go() {
        let banner = collector
            .validation_error()
            .unwrap_or("Error: invalid degree")
            .to_string();
        return Err(anyhow!(err).context(banner));
    }

    let entries = split_entries(&values);
    if entries.len() > collector.field_count() {
        return Err(anyhow!(
            "{} values given but only {} fields are shown",
            entries.len(),
            collector.field_count()
        ));
    }
    let slots = collector.slots().to_vec();
    for (id, text) in slots.into_iter().zip(entries) {
        collector
            .set_entry(id, text)
            .with_context(|| format!("failed to fill field {}", id))?;
    }

    let sequence = collector.submit().context("submission failed")?;
    print_sequence(&sequence);

    if query {
        println!("query\t{}", sequence.to_query());
    }
    if check {
        match sequence.check_factorable() {
            Ok(()) => println!("check\tok"),
            Err(err) => println!("check\t{}", err),
        }
    }

    Ok(())
}

fn split_entries(values: &str) -> Vec<&str> {
    if values.is_empty() {
        Vec::new()
    } else {
        values.split(',').collect()
    }
}

fn run_label(exponent: f64) {
    let field = TermField::new(exponent);
    for adjustment in field.diagnostics() {
        println!("warning\t{}", adjustment);
    }
    match field.label() {
        Some(label) => println!("label\t{}", label),
        None => println!("label\t(none: constant term)"),
    }
}

fn run_outcome(result: String, expression: Option<String>, intercepts: Vec<String>) -> Result<()> {
    let outcome: FactorOutcome = result.parse()?;
    let report = match expression {
        Some(expression) => FactorReport::factored(outcome, expression, intercepts),
        None => FactorReport::failed(outcome),
    };
    report.validate().context("invalid factoring result")?;
    println!("{}", report);
    Ok(())
}

fn print_sequence(sequence: &CoefficientSequence) {
    let values: Vec<String> = sequence.as_slice().iter().map(|v| v.to_string()).collect();
    println!("coefficients\t[{}]", values.join(", "));
    for (exponent, value) in sequence.iter_descending() {
        println!("x^{}\t{}", exponent, value);
    }
}
