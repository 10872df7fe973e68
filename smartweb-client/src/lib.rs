//! Smartweb Client: typed async access to the HostedShop / Smartweb SOAP API
//!
//! The remote service exposes products, orders, users and the rest of a web shop through a
//! SOAP 1.1 endpoint whose replies are loosely shaped: a list query answers with a bare record
//! when it matches one row, confirmations arrive as booleans or numbers, and every field may be
//! text. This crate gives each remote operation one typed method and settles those shapes once.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  SmartwebClient  │  one method per remote operation
//! └────────┬─────────┘
//!          │ Operation + Params
//! ┌────────▼─────────┐      ┌──────────────┐
//! │    dispatcher    │──────│  SOAP codec  │  envelope encode / reply decode
//! └────────┬─────────┘      └──────────────┘
//!          │ HTTPS POST, session cookie
//! ┌────────▼─────────┐
//! │    Transport     │  reqwest
//! └──────────────────┘
//! ```
//!
//! Replies are normalized into a [`Payload`] and decoded into the records in [`models`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use smartweb_client::{ClientConfig, Credentials, SmartwebClient, client::DEFAULT_ORDER_STATUSES};
//!
//! # async fn example() -> smartweb_client::Result<()> {
//! let config = ClientConfig::new(Credentials::new("api-user", "secret"));
//! let client = SmartwebClient::connect(config).await?;
//!
//! // Lists always come back as lists, even when one order matches.
//! let from = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
//! for order in client.get_orders_from_date(from, &DEFAULT_ORDER_STATUSES).await? {
//!     println!("{:?}: {:?}", order.id, order.total);
//! }
//!
//! // Single lookups return None when nothing matches.
//! if let Some(mut user) = client.get_user(17).await? {
//!     client.unsubscribe_newsletter_user(&mut user).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: the facade, grouped by entity
//! - [`models`]: domain records
//! - [`payload`]: reply normalization
//! - [`soap`]: envelope encoding and reply decoding
//! - [`transport`]: HTTP transport
//! - [`config`]: configuration loading and validation
//! - [`observability`]: logging setup for applications
//!
//! # Error Handling
//!
//! Every method returns [`Result<T, SmartwebError>`](error::Result). Remote faults are never
//! swallowed:
//!
//! ```rust,no_run
//! use smartweb_client::{SmartwebClient, SmartwebError};
//!
//! # async fn example(client: SmartwebClient) {
//! match client.get_product(42).await {
//!     Ok(Some(product)) => println!("{:?}", product.title),
//!     Ok(None) => println!("not found"),
//!     Err(SmartwebError::RemoteFault { code, message }) => eprintln!("{code}: {message}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![allow(
    clippy::multiple_crate_versions,
    reason = "transitive dependencies from reqwest and tracing-subscriber"
)]

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod models;
pub mod observability;
pub mod operation;
pub mod params;
pub mod payload;
pub mod soap;
pub mod transport;

pub use cache::UserCache;
pub use client::SmartwebClient;
pub use config::{ClientConfig, Credentials};
pub use error::{Result, SmartwebError};
pub use fields::EntityType;
pub use operation::Operation;
pub use payload::Payload;
