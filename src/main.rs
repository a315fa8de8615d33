use anyhow::Context;
use clap::{Parser, Subcommand};
use connectips::{ConnectIpsClient, ConnectIpsConfig, PaymentGateway, TransactionRequest};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ConnectIPS merchant tool
///
/// Reads CONNECTIPS_* settings from the environment (or a .env file).
#[derive(Debug, Parser)]
#[command(name = "connectips", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the signed initiation payload as JSON
    Initiate {
        #[arg(long)]
        txn_id: String,
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        reference_id: String,
        #[arg(long)]
        remarks: String,
        #[arg(long)]
        particulars: String,
        /// DD-MM-YYYY, defaults to today in Nepal
        #[arg(long)]
        date: Option<String>,
        /// Defaults to NPR
        #[arg(long)]
        currency: Option<String>,
    },
    /// Validate a completed payment
    Validate {
        #[arg(long)]
        txn_id: String,
        #[arg(long)]
        amount: u64,
    },
    /// Fetch transaction details
    Detail {
        #[arg(long)]
        txn_id: String,
        #[arg(long)]
        amount: u64,
    },
}

impl Command {
    fn into_transaction_request(self) -> Option<TransactionRequest> {
        match self {
            Command::Initiate {
                txn_id,
                amount,
                reference_id,
                remarks,
                particulars,
                date,
                currency,
            } => {
                let mut request =
                    TransactionRequest::new(txn_id, amount, reference_id, remarks, particulars);
                request.transaction_date = date;
                request.currency = currency;
                Some(request)
            }
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays pipeable JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "connectips=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ConnectIpsConfig::from_env().context("Failed to load configuration")?;
    let client = ConnectIpsClient::new(&config).context("Failed to initialize ConnectIPS client")?;

    let output = match cli.command {
        initiate @ Command::Initiate { .. } => {
            let request = initiate
                .into_transaction_request()
                .context("Not an initiate command")?;
            let payload = client.build_initiation_payload(&request)?;
            serde_json::to_value(&payload)?
        }
        Command::Validate { txn_id, amount } => {
            let response = client.validate_payment(&txn_id, amount).await?;
            serde_json::to_value(&response)?
        }
        Command::Detail { txn_id, amount } => {
            let response = client.get_transaction_details(&txn_id, amount).await?;
            serde_json::to_value(&response)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
