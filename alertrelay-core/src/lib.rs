//! Core library for relaying Wazuh alerts to the Green API messaging service.
//!
//! The pipeline is linear: [`parse_alert`] decodes the agent's JSON,
//! [`render_message`] renders the chat text and [`DeliveryClient`] performs a
//! single POST. [`AlertRelay`] wires the three together for the entry points.

pub mod alert;
pub mod config;
pub mod delivery;
pub mod error;
pub mod message;
pub mod pipeline;

pub use alert::{parse_alert, Agent, Alert, Rule, RuleId};
pub use config::GreenApiConfig;
pub use delivery::{DeliveryClient, Endpoint, OutboundMessage};
pub use error::{RelayError, Result};
pub use message::{render_message, MessageStyle};
pub use pipeline::{AlertRelay, AlertSource};
