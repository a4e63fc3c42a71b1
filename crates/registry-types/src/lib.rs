//! # Shared Types Crate
//!
//! Value types shared by every crate in the domain-registry workspace:
//! account identifiers, hashes, headers, balances, dispatch weights and
//! dispatch errors.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate types are defined here, once.
//! - **Plain data**: everything in this crate is serializable and carries
//!   no behavior beyond construction, formatting and arithmetic.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dispatch;
pub mod entities;
pub mod errors;
pub mod weight;

pub use dispatch::{DispatchError, ModuleError};
pub use entities::{
    dev, AccountId, AccountInfo, Balance, BlockNumber, Hash, Header, Moment,
};
pub use errors::TypesError;
pub use weight::Weight;
