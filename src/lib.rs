//! # Order Processor
//!
//! Assigns a processing status and a priority to each of a user's orders.
//!
//! - **Domain types** - [`Order`](domain::Order), [`OrderStatus`](domain::OrderStatus), [`Priority`](domain::Priority)
//! - **Collaborators** - [`RecordStore`](clients::RecordStore), [`ExternalLookup`](clients::ExternalLookup), [`ExportSink`](clients::ExportSink)
//! - **Rule engine** - [`OrderProcessor`](processor::OrderProcessor)
//! - **Record store actor** - [`OrderStoreActor`](store_actor::OrderStoreActor) behind an [`OrderStoreClient`](clients::OrderStoreClient)
//! - **System** - [`ProcessingSystem`](app_system::ProcessingSystem), [`AppConfig`](app_system::AppConfig), [`setup_tracing`](app_system::setup_tracing)

pub mod app_system;
pub mod clients;
pub mod domain;
pub mod error;
pub mod processor;
pub mod store_actor;

#[cfg(test)]
mod mock_framework;
