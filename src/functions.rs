//! Top-level functions module.
//!
//! This module groups the function implementations held by the registry:
//!
//! - `buildin`: the built-in catalogue (`FuncKind`) and the shared state of
//!   the stateful built-ins (`rand`, `list`).
//! - `core`: numeric helper algorithms (`factorial`, `gcd`).
//! - `custom`: the `Function` descriptor used for every registered entry.
//!
//! The submodules are `pub(crate)`; their public items are re-exported from
//! the crate root.
pub(crate) mod buildin;
pub(crate) mod core;
pub(crate) mod custom;

/// Return the built-in function names in registration order.
///
/// The slice is static and intended for error messages or autocompletion.
pub fn names() -> &'static [&'static str]
{
    buildin::FuncKind::names()
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_names() {
        let names = super::names();
        assert_eq!(names.first(), Some(&"abs"));
        assert_eq!(names.last(), Some(&"list"));
        assert_eq!(names.len(), 17);
    }
}
