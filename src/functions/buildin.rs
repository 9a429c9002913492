//! # buildin.rs
//!
//! Built-in functions installed into every registry by default.
//!
//! The catalogue is declared once in `define_functions!`, which generates the
//! [`FuncKind`] enum with its name, arity and evaluation logic. The order of
//! declaration is the registration order and therefore the listing order.

use crate::error::FunctionError;
use crate::functions::core::{factorial, gcd};
use crate::functions::custom::Function;
use crate::registry::Listing;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

/// Source of the values returned by the `rand` built-in.
#[derive(Debug)]
pub(crate) enum RandomSource {
    /// Thread-local generator seeded from the OS.
    Thread,
    /// Deterministic generator shared by every invocation.
    Seeded(Mutex<StdRng>),
}

impl RandomSource {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Draws a fresh sample in `[0, 1)`.
    fn sample(&self) -> f64 {
        match self {
            Self::Thread => rand::random::<f64>(),
            Self::Seeded(rng) => rng.lock().gen::<f64>(),
        }
    }
}

/// State shared by the stateful built-ins (`rand` and `list`).
#[derive(Debug)]
pub(crate) struct BuiltinContext {
    random: RandomSource,
    listing: Listing,
}

impl BuiltinContext {
    pub(crate) fn new(random: RandomSource, listing: Listing) -> Self {
        Self { random, listing }
    }

    fn print_listing(&self) -> f64 {
        let stdout = std::io::stdout();
        if let Err(err) = self.listing.write_to(&mut stdout.lock()) {
            log::warn!("failed to write function listing: {}", err);
        }
        0.0
    }
}

#[doc(hidden)]
/// Internal macro declaring the built-in catalogue.
///
/// Each entry names the enum variant, the registered name, the arity, and a
/// body evaluated with the shared context and the argument slice in scope.
macro_rules! define_functions {
    ($( $variant:ident => {
        name: $name:expr,
        arity: $arity:expr,
        apply: |$ctx:pat_param, $a:ident| $body:expr
    }, )*) => {
        /// Enumeration of the built-in functions, in registration order.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum FuncKind {
            $( $variant, )*
        }

        impl FuncKind {
            /// Every built-in, in registration order.
            pub const ALL: &'static [FuncKind] = &[ $( Self::$variant ),* ];

            /// Returns the built-in names in registration order.
            pub fn names() -> &'static [&'static str] {
                &[ $( $name ),* ]
            }

            /// Returns the registered name of the built-in.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            /// Returns the number of arguments the built-in takes.
            pub fn arity(&self) -> usize {
                match self {
                    $( Self::$variant => $arity, )*
                }
            }

            /// Evaluates the built-in. `args` must hold exactly `arity()` values.
            pub(crate) fn eval(&self, ctx: &BuiltinContext, args: &[f64]) -> f64 {
                match self {
                    $( Self::$variant => {
                        let $ctx = ctx;
                        let $a = args;
                        $body
                    }, )*
                }
            }
        }

        impl std::str::FromStr for FuncKind {
            type Err = FunctionError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $name => Ok(Self::$variant), )*
                    _ => Err(FunctionError::not_found(s)),
                }
            }
        }
    };
}

define_functions! {
    Abs     => { name: "abs",   arity: 1, apply: |_, a| a[0].abs() },
    Ceil    => { name: "ceil",  arity: 1, apply: |_, a| a[0].ceil() },
    Floor   => { name: "floor", arity: 1, apply: |_, a| a[0].floor() },
    Sin     => { name: "sin",   arity: 1, apply: |_, a| a[0].sin() },
    Cos     => { name: "cos",   arity: 1, apply: |_, a| a[0].cos() },
    Tan     => { name: "tan",   arity: 1, apply: |_, a| a[0].tan() },
    Asin    => { name: "asin",  arity: 1, apply: |_, a| a[0].asin() },
    Acos    => { name: "acos",  arity: 1, apply: |_, a| a[0].acos() },
    Atan    => { name: "atan",  arity: 1, apply: |_, a| a[0].atan() },
    Log     => { name: "log",   arity: 1, apply: |_, a| a[0].ln() },
    Max     => { name: "max",   arity: 2, apply: |_, a| a[0].max(a[1]) },
    Min     => { name: "min",   arity: 2, apply: |_, a| a[0].min(a[1]) },
    Sqrt    => { name: "sqrt",  arity: 1, apply: |_, a| a[0].sqrt() },
    Rand    => { name: "rand",  arity: 0, apply: |ctx, _a| ctx.random.sample() },
    // `as` truncates toward zero and saturates; NaN becomes 0.
    Fact    => { name: "fact",  arity: 1, apply: |_, a| factorial(a[0] as i64) as f64 },
    Gcd     => { name: "gcd",   arity: 2, apply: |_, a| gcd(a[0], a[1]) },
    List    => { name: "list",  arity: 0, apply: |ctx, _a| ctx.print_listing() },
}

impl FuncKind {
    /// Builds the registry descriptor for this built-in.
    pub(crate) fn function(self, ctx: &Arc<BuiltinContext>) -> Function {
        let ctx = Arc::clone(ctx);
        Function::new(self.arity(), move |args| self.eval(&ctx, args))
    }
}

impl std::fmt::Display for FuncKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
