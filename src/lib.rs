//! # mathfn
//!
//! `mathfn` is the function registry behind a mathematical expression
//! evaluator. It maps names such as `sin`, `gcd` or `fact` to numeric
//! operations with a fixed arity, and lets callers add their own functions
//! to the same namespace as the built-ins.
//!
//! ## Overview
//! - [`Registry`] owns the name → [`Function`] table and the registration order.
//! - [`RegistryBuilder`] configures a registry (built-ins, `rand` seed, extras).
//! - [`FuncKind`] enumerates the 17 built-ins.
//! - [`FunctionError`] reports unknown names and wrong argument counts.
//!
//! Parsing and evaluating expressions happens elsewhere: an evaluator looks
//! functions up here and invokes them with `f64` arguments.
//!
//! ## Example
//! ```rust
//! use mathfn::{Function, FunctionError, Registry};
//!
//! let mut registry = Registry::with_builtins();
//! registry.register("hypot", Function::new(2, |args| args[0].hypot(args[1])));
//!
//! assert_eq!(registry.call("hypot", &[3.0, 4.0]), Ok(5.0));
//! assert_eq!(registry.call("max", &[3.0, 7.0]), Ok(7.0));
//! assert!(registry.call("sqrt", &[-1.0]).unwrap().is_nan());
//! assert!(matches!(
//!     registry.lookup("nonexistent"),
//!     Err(FunctionError::NotFound { .. })
//! ));
//! ```
//!
//! ## Numeric domain
//! Out-of-domain inputs are not errors: `sqrt(-1)`, `asin(2)` or `log(-1)`
//! return NaN and `log(0)` returns negative infinity, exactly like the
//! corresponding `f64` methods.
//!
//! ## Logging
//! Registration and failed lookups are reported through the [`log`] facade.
//! No logger is installed by this crate.
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

mod builder;
mod error;
mod functions;
mod registry;

pub use builder::RegistryBuilder;
pub use error::{FunctionError, Result};
pub use functions::buildin::FuncKind;
pub use functions::core::{factorial, gcd};
pub use functions::custom::{Function, FunctionImpl};
pub use functions::names;
pub use registry::{Listing, Registry};
