#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Web server for the SLK Auto Repair site

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use slk_auto_repair::{
    domain::quotes::service::{QuoteEmailConfig, QuoteServiceImpl},
    infrastructure::{
        email::smtp::{SMTPConfig, SMTPMailer},
        http::{HttpServer, HttpServerConfig},
    },
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The HTTP server configuration
    #[clap(flatten)]
    pub server: HttpServerConfig,

    /// The SMTP configuration
    #[clap(flatten)]
    pub smtp: SMTPConfig,

    /// The quote email addresses
    #[clap(flatten)]
    pub quote_emails: QuoteEmailConfig,
}

#[mutants::skip]
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Constructed once at startup and shared read-only; it holds only
    // credentials and a stateless transport.
    let mailer = Arc::new(SMTPMailer::new(args.smtp));

    let quotes = QuoteServiceImpl::new(mailer, args.quote_emails);

    HttpServer::new(quotes, args.server).await?.run().await
}
