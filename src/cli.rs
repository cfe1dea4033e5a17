use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;
use crate::workflows::export::{ExportOptions, QualifyingLoanExporter};
use crate::workflows::intake::{collect_applicant, ApplicantDraft, Prompter, SaveDecision};
use crate::workflows::qualifier::{OfferTable, QualificationOutcome, QualificationPipeline};
use crate::workflows::rate_sheet::RateSheetLoader;
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "loan-qualifier",
    about = "Match a loan applicant against the lender offers on a daily rate sheet",
    version,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    qualify: QualifyArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the offers an applicant qualifies for (default command)
    Qualify(QualifyArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub struct QualifyArgs {
    /// Rate-sheet CSV (falls back to APP_RATE_SHEET, then a prompt)
    #[arg(long)]
    pub rate_sheet: Option<PathBuf>,
    /// Applicant credit score
    #[arg(long)]
    pub credit_score: Option<u16>,
    /// Total monthly debt payments
    #[arg(long)]
    pub debt: Option<f64>,
    /// Total monthly income
    #[arg(long)]
    pub income: Option<f64>,
    /// Desired loan amount
    #[arg(long)]
    pub loan_amount: Option<f64>,
    /// Estimated home value
    #[arg(long)]
    pub home_value: Option<f64>,
    /// Save qualifying loans to this CSV without asking
    #[arg(long, conflicts_with = "no_save")]
    pub output: Option<PathBuf>,
    /// Do not offer to save the results
    #[arg(long)]
    pub no_save: bool,
    /// Write the rate-sheet header as the first exported row
    #[arg(long)]
    pub include_header: bool,
    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl QualifyArgs {
    fn draft(&self) -> ApplicantDraft {
        ApplicantDraft {
            credit_score: self.credit_score,
            monthly_debt: self.debt,
            monthly_income: self.income,
            loan_amount: self.loan_amount,
            home_value: self.home_value,
        }
    }
}

/// How a run ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    NoQualifyingOffers,
}

impl RunStatus {
    pub const fn exit_code(self) -> i32 {
        match self {
            RunStatus::Completed => 0,
            RunStatus::NoQualifyingOffers => 3,
        }
    }
}

pub fn run() -> Result<RunStatus, AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Qualify(cli.qualify));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(environment = ?config.environment, "loan qualifier starting");

    match command {
        Command::Qualify(args) => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stderr());
            let mut stdout = io::stdout();
            qualify(&args, &config, &mut prompter, &mut stdout)
        }
    }
}

/// Load the rate sheet, collect the applicant, run the filters and handle saving.
pub fn qualify<R, W, O>(
    args: &QualifyArgs,
    config: &AppConfig,
    prompter: &mut Prompter<R, W>,
    out: &mut O,
) -> Result<RunStatus, AppError>
where
    R: BufRead,
    W: Write,
    O: Write,
{
    let rate_sheet = match args
        .rate_sheet
        .clone()
        .or_else(|| config.rate_sheet.default_path.clone())
    {
        Some(path) => path,
        None => prompter.ask_rate_sheet_path()?,
    };
    let table = RateSheetLoader::from_path(&rate_sheet)?;

    let applicant = collect_applicant(prompter, args.draft())?;
    let outcome = QualificationPipeline::new(&table).run(&applicant);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &outcome)?;
        writeln!(out)?;
    } else {
        render_outcome(out, &outcome)?;
    }

    if outcome.is_empty() {
        info!(
            eliminated_by = ?outcome.eliminated_by(),
            "no qualifying offers"
        );
        if !args.json {
            writeln!(
                out,
                "You are not eligible for any loans from our partner banks."
            )?;
        }
        return Ok(RunStatus::NoQualifyingOffers);
    }

    let decision = match (&args.output, args.no_save || args.json) {
        (Some(path), _) => SaveDecision::SaveTo(path.clone()),
        (None, true) => SaveDecision::Skip,
        (None, false) => prompter.ask_save_decision()?,
    };

    let options = ExportOptions {
        include_header: args.include_header || config.export.include_header,
    };
    save(out, decision, options, &table, &outcome, args.json)?;

    Ok(RunStatus::Completed)
}

fn render_outcome<O: Write>(out: &mut O, outcome: &QualificationOutcome) -> io::Result<()> {
    writeln!(
        out,
        "The monthly debt to income ratio is {:.2}",
        outcome.ratios.monthly_debt_ratio
    )?;
    writeln!(
        out,
        "The loan to value ratio is {:.2}.",
        outcome.ratios.loan_to_value_ratio
    )?;
    writeln!(out, "{}", outcome.summary())?;

    for (index, offer) in outcome.qualifying.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} (max loan {}, interest rate {})",
            index + 1,
            offer.lender,
            offer.max_loan_amount,
            offer.interest_rate
        )?;
    }
    Ok(())
}

fn save<O: Write>(
    out: &mut O,
    decision: SaveDecision,
    options: ExportOptions,
    table: &OfferTable,
    outcome: &QualificationOutcome,
    quiet: bool,
) -> Result<(), AppError> {
    match decision {
        SaveDecision::Skip => {
            if !quiet {
                writeln!(out, "OK - exiting without saving results.")?;
            }
        }
        SaveDecision::Cancelled => {
            writeln!(out, "You cancelled the save.")?;
        }
        SaveDecision::SaveTo(path) => {
            let written = QualifyingLoanExporter::new(options).to_path(
                &path,
                table.header(),
                &outcome.qualifying,
            )?;
            if !quiet {
                writeln!(
                    out,
                    "Saved {written} qualifying loans to {}",
                    path.display()
                )?;
            }
        }
    }
    Ok(())
}
