//! ADTO event portal client
//!
//! Main application entry point

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::BufReader;
use tracing::{error, info};

use adto_client::{
    config::Settings,
    forms::{NotificationKind, RegistrationForm},
    handlers::{self, events, registration},
    services::OrderBy,
    state::{AppContext, FilterState, Selection},
    utils::logging,
};

#[derive(Parser, Debug)]
#[command(name = "adto-client", version, about = "Discover and register for university events")]
struct Cli {
    /// Configuration file (TOML, extension optional)
    #[arg(long, short, default_value = "config", env = "ADTO_CONFIG")]
    config: String,

    /// Override the Events API base URL
    #[arg(long, env = "ADTO_API_URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show featured events
    Home,
    /// List published events
    Events(EventsArgs),
    /// Show one event with its tickets and announcements
    Event {
        /// Event identifier
        id: String,
    },
    /// List organizations and clusters usable as filters
    Organizations {
        /// Only list organizations of this cluster id
        #[arg(long, default_value = "all")]
        cluster: String,
    },
    /// Register for an event ticket category
    Register(RegisterArgs),
    /// Browse events interactively
    Browse,
}

#[derive(Args, Debug)]
struct EventsArgs {
    /// Search text
    #[arg(long, short)]
    search: Option<String>,
    /// Organization id or "all"
    #[arg(long, default_value = "all")]
    org: String,
    /// Cluster (organization parent) id or "all"
    #[arg(long, default_value = "all")]
    cluster: String,
    /// Only free events
    #[arg(long)]
    free: bool,
    /// Only paid events
    #[arg(long)]
    paid: bool,
    /// Only events with open registration
    #[arg(long)]
    open: bool,
    /// Sort order (asc or desc)
    #[arg(long)]
    order: Option<OrderBy>,
    /// Page number
    #[arg(long, default_value_t = 1)]
    page: u32,
    /// Events per page (defaults to the configured page size)
    #[arg(long)]
    limit: Option<u32>,
}

#[derive(Args, Debug)]
struct RegisterArgs {
    /// Event identifier
    event_id: String,
    /// Ticket category identifier
    ticket_category_id: String,
    #[arg(long)]
    full_name: String,
    /// School email address
    #[arg(long)]
    email: String,
    /// Cluster name, e.g. "Computer Studies Cluster"
    #[arg(long)]
    cluster: String,
    /// Course or program offered by the cluster
    #[arg(long)]
    course: String,
    /// Year level (1-5)
    #[arg(long)]
    year_level: String,
    /// Agree to the Data Privacy Policy
    #[arg(long)]
    consent: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = Settings::from_file(&cli.config).context("failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        settings.api.base_url = api_url;
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    info!(base_url = %settings.api.base_url, "Starting {}", adto_client::info());

    let ctx = AppContext::new(settings)?;

    match cli.command {
        Command::Home => println!("{}", handlers::handle_home(&ctx).await),
        Command::Events(args) => {
            let mut filters = filters_from_args(&args);
            let mut ctx = ctx;
            if let Some(limit) = args.limit.filter(|l| *l > 0) {
                ctx.settings.events.page_size = limit;
            }
            println!("{}", handlers::handle_events_list(&ctx, &mut filters).await);
        }
        Command::Event { id } => println!("{}", handlers::handle_event_details(&ctx, &id).await),
        Command::Organizations { cluster } => {
            let options = events::load_filter_options(&ctx).await;
            println!("{}", events::render_filter_options(&options, &Selection::parse(&cluster)));
        }
        Command::Register(args) => {
            let form = RegistrationForm {
                full_name: args.full_name,
                school_email: args.email,
                cluster: args.cluster,
                course: args.course,
                year_level: args.year_level,
                data_privacy_consent: args.consent,
            };
            let notification =
                handlers::handle_registration(&ctx, &form, &args.event_id, &args.ticket_category_id).await;
            println!("{}", registration::render_notification(&notification));
            if notification.kind == NotificationKind::Error {
                error!("Registration was not completed");
                std::process::exit(1);
            }
        }
        Command::Browse => {
            let input = BufReader::new(tokio::io::stdin());
            handlers::run_browse(&ctx, input, tokio::io::stdout()).await?;
        }
    }

    Ok(())
}

fn filters_from_args(args: &EventsArgs) -> FilterState {
    let mut filters = FilterState::new();
    if let Some(search) = &args.search {
        filters.set_search(search.clone());
    }
    filters.set_organization(Selection::parse(&args.org));
    filters.set_organization_parent(Selection::parse(&args.cluster));
    filters.set_free(args.free);
    filters.set_paid(args.paid);
    filters.set_registration_open_only(args.open);
    filters.set_order_by(args.order);
    // after the filters, which reset the page
    filters.start_at_page(args.page);
    filters
}
