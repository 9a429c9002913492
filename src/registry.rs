//! # registry.rs
//!
//! The function registry: one namespace for built-ins and caller extensions.
//!
//! [`Registry`] maps names to [`Function`] descriptors and remembers the
//! order in which names were registered. Registration needs `&mut Registry`,
//! so it cannot race with lookups; once built, the registry is `Send + Sync`
//! and can be shared (for example behind an `Arc`) by concurrent evaluators.

use crate::builder::RegistryBuilder;
use crate::error::{FunctionError, Result};
use crate::functions::buildin::{BuiltinContext, FuncKind, RandomSource};
use crate::functions::custom::Function;

use parking_lot::RwLock;
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Shared, live view of a registry's registration order.
///
/// Every name passed to [`Registry::register`] is appended, duplicates
/// included. Clones observe the same sequence, which is how the `list`
/// built-in sees functions registered after it.
#[derive(Clone, Debug, Default)]
pub struct Listing {
    names: Arc<RwLock<Vec<String>>>,
}

impl Listing {
    fn push(&self, name: &str) {
        self.names.write().push(name.to_string());
    }

    /// Returns a copy of the registration order.
    pub fn snapshot(&self) -> Vec<String> {
        self.names.read().clone()
    }

    /// Number of registrations, counting duplicates.
    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.read().is_empty()
    }

    /// Writes every name followed by a single space, then a newline.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let names = self.names.read();
        for name in names.iter() {
            write!(writer, "{} ", name)?;
        }
        writeln!(writer)?;
        writer.flush()
    }
}

/// A table of named numeric functions with fixed arities.
///
/// # Examples
///
/// ```
/// use mathfn::{Function, Registry};
///
/// let mut registry = Registry::with_builtins();
/// registry.register("double", Function::new(1, |args| args[0] * 2.0));
///
/// assert_eq!(registry.call("double", &[21.0]).unwrap(), 42.0);
/// assert_eq!(registry.call("gcd", &[12.0, 8.0]).unwrap(), 4.0);
/// assert!(registry.lookup("nonexistent").is_err());
/// assert_eq!(registry.list().last().map(String::as_str), Some("double"));
/// ```
///
/// # Notes
/// - Registering an existing name replaces its descriptor but appends the
///   name to the listing again.
/// - Names are case-sensitive and unrestricted; the empty string is valid.
#[derive(Debug, Default)]
pub struct Registry {
    entries: HashMap<String, Function>,
    order: Listing,
}

impl Registry {
    /// Creates an empty registry without built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry populated with the built-in functions.
    pub fn with_builtins() -> Self {
        RegistryBuilder::new().build()
    }

    /// Starts configuring a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registers `func` under `name`.
    ///
    /// An existing entry with the same name is replaced. The name is always
    /// appended to the registration order.
    pub fn register(&mut self, name: &str, func: Function) {
        log::debug!("registering function '{}' (arity {})", name, func.arity());
        if self.entries.insert(name.to_string(), func).is_some() {
            log::debug!("function '{}' was already registered; replaced", name);
        }
        self.order.push(name);
    }

    /// Registers a closure under `name`; see [`register`](Self::register).
    pub fn register_fn<F>(&mut self, name: &str, arity: usize, func: F)
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.register(name, Function::new(arity, func));
    }

    /// Installs every built-in in catalogue order.
    pub(crate) fn install_builtins(&mut self, random: RandomSource) {
        let ctx = Arc::new(BuiltinContext::new(random, self.order.clone()));
        for kind in FuncKind::ALL {
            self.register(kind.name(), kind.function(&ctx));
        }
        log::info!("installed {} built-in functions", FuncKind::ALL.len());
    }

    /// Looks up the descriptor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FunctionError::NotFound`] if nothing is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&Function> {
        self.entries.get(name).ok_or_else(|| {
            log::trace!("lookup of unknown function '{}'", name);
            FunctionError::not_found(name)
        })
    }

    /// Returns `true` if a function is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Looks up `name` and invokes it with `args`.
    ///
    /// The argument count is checked before the implementation runs.
    ///
    /// # Errors
    ///
    /// - [`FunctionError::NotFound`] if `name` is not registered.
    /// - [`FunctionError::ArityMismatch`] if `args.len()` differs from the arity.
    pub fn call(&self, name: &str, args: &[f64]) -> Result<f64> {
        self.lookup(name)?.apply_named(name, args)
    }

    /// Returns the registered names in registration order, duplicates included.
    pub fn list(&self) -> Vec<String> {
        self.order.snapshot()
    }

    /// Returns a live view of the registration order.
    pub fn listing(&self) -> Listing {
        self.order.clone()
    }

    /// Writes the listing in the format printed by the `list` built-in.
    pub fn write_listing<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        self.order.write_to(writer)
    }

    /// Number of distinct registered names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
