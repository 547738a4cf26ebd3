//! Core Teller domain logic for Perch.
//!
//! This crate contains everything Perch knows about the upstream
//! open-banking API with no database dependencies:
//!
//! - `teller` - credential resolution, the HTTP client, wire types, and the
//!   demo fallback payloads

pub mod teller;
