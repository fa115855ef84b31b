//! # Warehouse
//!
//! Library half of the warehouse service binary: HTTP surfaces, GraphQL
//! schema, configuration and catalog seeding. Integration tests drive the
//! router through `warehouse::api`.

pub mod api;
pub mod config;
pub mod graphql;
pub mod seed;
