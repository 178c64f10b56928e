//! # atrium-core
//!
//! Core types and error types for Atrium.
//!
//! This crate provides the foundational types shared across all Atrium crates:
//! - Entity structs for the research corpus (companies, projects, tags, metrics, documents)
//! - The denormalized `ResearchDataView` returned by the query gateway
//! - Closed enums for project status and document type
//! - The `ResearchFilter` value object
//! - Create/upsert input payloads
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod inputs;
