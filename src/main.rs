use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use paypipe::application::checkout::CheckoutService;
use paypipe::domain::money::Money;
use paypipe::domain::ports::SharedAuditSink;
use paypipe::domain::processor::{Processor, SharedProcessor};
use paypipe::infrastructure::instruments::{Card, DebitCard, PayPal, Upi};
use paypipe::infrastructure::tracing_sink::TracingAuditSink;
use paypipe::interfaces::csv::outcome_writer::{OutcomeRecord, OutcomeWriter};
use paypipe::interfaces::csv::request_reader::{PaymentRequestReader, RequestAction};
use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Method {
    Card,
    Debit,
    Paypal,
    Upi,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input CSV file with an `action,amount` header
    input: PathBuf,

    /// Payment instrument used for every request in the file
    #[arg(long, value_enum)]
    method: Method,

    /// Card number (card and debit)
    #[arg(long)]
    card_number: Option<String>,

    /// Available balance for the debit card; larger payments are declined
    #[arg(long)]
    available_funds: Option<String>,

    /// PayPal account email
    #[arg(long)]
    email: Option<String>,

    /// UPI virtual payment address
    #[arg(long)]
    vpa: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,
}

fn build_processor(cli: &Cli, audit: SharedAuditSink) -> Result<SharedProcessor> {
    let processor = match cli.method {
        Method::Card => {
            let number = cli
                .card_number
                .as_deref()
                .ok_or_else(|| miette!("--card-number is required for card payments"))?;
            Processor::new(Card::new(number).into_diagnostic()?, audit).shared()
        }
        Method::Debit => {
            let number = cli
                .card_number
                .as_deref()
                .ok_or_else(|| miette!("--card-number is required for debit payments"))?;
            let mut debit = DebitCard::new(number).into_diagnostic()?;
            if let Some(funds) = cli.available_funds.as_deref() {
                debit = debit.with_available_funds(Money::parse(funds).into_diagnostic()?);
            }
            Processor::new(debit, audit).shared()
        }
        Method::Paypal => {
            let email = cli
                .email
                .as_deref()
                .ok_or_else(|| miette!("--email is required for PayPal payments"))?;
            Processor::new(PayPal::new(email).into_diagnostic()?, audit).shared()
        }
        Method::Upi => {
            let upi = match cli.vpa.as_deref() {
                Some(vpa) => Upi::with_vpa(vpa).into_diagnostic()?,
                None => Upi::new(),
            };
            Processor::new(upi, audit).shared()
        }
    };
    Ok(processor)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let audit: SharedAuditSink = Arc::new(TracingAuditSink::new());
    let service = CheckoutService::new(build_processor(&cli, audit)?);
    let method = service.method();

    let stdout = io::stdout();
    let mut writer = match cli.format {
        Format::Csv => OutcomeWriter::csv(stdout.lock()),
        Format::Json => OutcomeWriter::json_lines(stdout.lock()),
    };

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = PaymentRequestReader::new(file);
    for request in reader.requests() {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error reading request: {}", e);
                continue;
            }
        };

        let record = match request.action {
            RequestAction::Payment => OutcomeRecord::new(
                request.action,
                request.amount,
                method,
                &service.checkout(request.amount),
            ),
            RequestAction::Refund => match service.refund(request.amount) {
                Ok(outcome) => {
                    OutcomeRecord::new(request.action, request.amount, method, &outcome)
                }
                Err(e) => OutcomeRecord::unavailable(request.amount, method, &e),
            },
        };
        writer.write(&record).into_diagnostic()?;
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}
