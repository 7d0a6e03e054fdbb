//! # Calcdesk Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── flows.rs   # Service-level flows across accounts and calculations
//!     └── http.rs    # End-to-end scenarios through the gateway router
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p cd-tests
//! cargo test -p cd-tests integration::http::
//! ```

pub mod integration;
