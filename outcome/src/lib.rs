//! Two-variant success/failure outcomes.
//!
//! An [`Outcome`] holds either the expected success of an action or its
//! possible failure, never both and never neither. Fallible code returns a
//! failure instead of panicking, and callers compose validation steps with
//! [`Outcome::ensure`] or the helpers in [`factory`].
//!
//! Breaking the construction contract, for example by handing a vacant
//! payload to a checked constructor, is reported separately through
//! [`ContractViolation`] and is never folded into an outcome.
//!
//! # Examples
//!
//! ```
//! use outcome::{Outcome, factory};
//!
//! let checked = factory::succeed::<i32, &str>(-5).ensure(|x| *x < 0, "negative");
//! assert_eq!(checked, Outcome::Failure("negative"));
//! ```

mod error;
pub mod factory;
mod types;

pub use error::{ContractViolation, OutcomeResult};
pub use types::{Failed, Outcome, Succeeded};
