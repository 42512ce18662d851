use std::{path::PathBuf, sync::Arc};

use alloy::primitives::Address;
use clap::{Args, Parser, Subcommand};
use eyre::eyre;
use tracing::{Level, info};

use hookah_cli::{
    commands::{FormInput, decode as decode_cmd, encode as encode_cmd, submit as submit_cmd},
    config::locate_config,
    logging,
    provider::ChainContext,
    submitter::RpcSubmitter,
    ui::{App, Tab},
    wallet::{WalletError, WalletSession},
};
use hookah_core::TransactionSubmitter;

#[derive(Debug, Parser)]
#[command(name = "hookah", about = "Uniswap v4 limit order composer", version)]
struct Cli {
    /// Path to the order configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// RPC URL for the target chain (required to submit)
    #[arg(long, env = "HOOKAH_RPC_URL", value_name = "URL")]
    rpc_url: Option<String>,

    /// Private key of the local signer
    #[arg(long, env = "PRIVATE_KEY", value_name = "KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Maximum log level
    #[arg(long, default_value_t = Level::INFO, value_name = "LEVEL")]
    log_level: Level,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Open the interactive order form (default)
    Ui(UiArgs),

    /// Print the call list the form would submit, as JSON
    Encode(EncodeArgs),

    /// Sign, send and confirm a limit order
    Submit(FormArgs),

    /// Show the placeOrder arguments inside calldata
    Decode(DecodeArgs),
}

#[derive(Debug, Args)]
struct UiArgs {
    /// Tab to open on: home or features
    #[arg(long, default_value = "home", value_name = "TAB")]
    tab: String,
}

#[derive(Debug, Args)]
struct FormArgs {
    /// Tick to sell at
    #[arg(long, value_name = "TICK", allow_hyphen_values = true)]
    tick: Option<String>,
    /// Amount of the selected token (human units)
    #[arg(long, value_name = "AMOUNT")]
    amount: Option<String>,
    /// Symbol of the token to sell
    #[arg(long, value_name = "SYMBOL")]
    token: Option<String>,
}

#[derive(Debug, Args)]
struct EncodeArgs {
    /// Connected account; without one the call list is empty
    #[arg(long, value_name = "ADDRESS")]
    account: Option<Address>,

    #[command(flatten)]
    form: FormArgs,
}

#[derive(Debug, Args)]
struct DecodeArgs {
    /// 0x-prefixed placeOrder calldata
    calldata: String,
}

impl From<FormArgs> for FormInput {
    fn from(args: FormArgs) -> Self {
        Self {
            tick: args.tick,
            amount: args.amount,
            token: args.token,
        }
    }
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ui(UiArgs {
        tab: Tab::Home.to_string(),
    }));

    let _log_guard = match &command {
        Commands::Ui(_) => {
            let (dir, guard) = logging::init_file(cli.log_level)?;
            eprintln!("Logging to {}", dir.display());
            Some(guard)
        }
        _ => {
            logging::init_stderr(cli.log_level);
            None
        }
    };

    let (config, source) = locate_config(cli.config.as_deref())?;
    match &source {
        Some(path) => info!(path = %path.display(), "loaded config"),
        None => info!("no config file found, using defaults"),
    }
    let confirmations = config.order.confirmations;
    let order = config.to_order_config()?;

    match command {
        Commands::Ui(args) => {
            let tab: Tab = args.tab.parse().map_err(|err: String| eyre!(err))?;
            let wallet = Arc::new(WalletSession::from_key(cli.private_key.as_deref())?);
            let submitter = match (&cli.rpc_url, wallet.signer()) {
                (Some(url), Some(signer)) => {
                    let chain = ChainContext::connect(url, signer.clone()).await?;
                    info!(chain_id = chain.chain_id, "connected to rpc");
                    let submitter: Arc<dyn TransactionSubmitter> =
                        Arc::new(RpcSubmitter::new(chain.provider, confirmations));
                    Some(submitter)
                }
                _ => None,
            };

            let mut terminal = ratatui::try_init()?;
            let result = App::new(order, wallet, submitter)
                .with_tab(tab)
                .run(&mut terminal);
            ratatui::restore();
            result?;
        }
        Commands::Encode(args) => {
            let output = encode_cmd::encode(order, args.account, &args.form.into())?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Submit(args) => {
            let rpc_url = cli
                .rpc_url
                .as_deref()
                .ok_or_else(|| eyre!("--rpc-url or HOOKAH_RPC_URL is required for `submit`"))?;
            let wallet = Arc::new(WalletSession::from_key(cli.private_key.as_deref())?);
            let signer = wallet.signer().cloned().ok_or(WalletError::MissingKey)?;

            let chain = ChainContext::connect(rpc_url, signer).await?;
            info!(chain_id = chain.chain_id, "connected to rpc");
            let submitter = RpcSubmitter::new(chain.provider, confirmations);

            let tx_hash = submit_cmd::submit(order, wallet, &submitter, &args.into()).await?;
            println!("{tx_hash}");
        }
        Commands::Decode(args) => {
            let decoded = decode_cmd::decode(&args.calldata)?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
    }

    Ok(())
}
