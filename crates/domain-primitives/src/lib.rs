//! Validated domain primitives: Brazilian tax identifiers and fixed-point
//! money.
//!
//! # Overview
//!
//! The crate provides immutable value objects whose constructors enforce
//! their invariants, so an instance that exists is always valid:
//!
//! - [`Cpf`] and [`Cnpj`] — registry numbers with verified mod-11 check
//!   digits; [`TaxId`] picks one by digit count
//! - [`Money`] — a non-negative integer count of minor units tagged with a
//!   [`CurrencyCode`]; arithmetic is checked and never uses floating point
//!
//! The [`cli`] module backs the `primitives-check` binary and
//! [`config::PrimitivesSettings`] holds its layered configuration.
//!
//! # Example
//!
//! ```
//! use domain_primitives::{Cpf, Money};
//!
//! let cpf = Cpf::parse("529.982.247-25").expect("valid CPF");
//! assert_eq!(cpf.redacted(), "***.982.247-**");
//!
//! let total = Money::from_float(10.50)
//!     .and_then(|price| price.add(Money::from_float(5.25)?))
//!     .expect("same currency");
//! assert_eq!(total.amount(), 1575);
//! ```

pub mod cli;
pub mod config;
pub mod document;
pub mod money;
pub mod telemetry;

pub use document::{Cnpj, Cpf, DocumentError, DocumentKind, TaxId};
pub use money::{CurrencyCode, Money, MoneyError};
