//! Procedural macros for primitive-wrapped value types.
//!
//! Use these through the `valtype` crate, which re-exports them next to the
//! runtime the generated code depends on.
//!
//! # Value types
//!
//! `#[value_types]` goes on an inline module. Unit structs inside it that
//! carry one of the directives below are replaced by complete value types,
//! each with a JSON scalar adapter, and a registration type is appended to
//! the module root:
//!
//! ```text
//! #[value_types]
//! pub mod domain {
//!     #[identifier]
//!     pub struct CustomerId;
//!
//!     #[bounded_text(min_length = 1, max_length = 50, pattern = "^[A-Za-z ]*$")]
//!     pub struct PersonName;
//!
//!     #[bounded_integer(min = 0, max = 100000)]
//!     pub struct Amount;
//!
//!     #[bounded_real(0, 99.9)]
//!     pub struct Percentage;
//! }
//!
//! // domain::ValueTypes installs CustomerIdJsonAdapter, PersonNameJsonAdapter, ...
//! ```

mod logging;

use proc_macro::TokenStream;

/// Generate value types for every annotated unit struct in a module.
///
/// # Directives
/// - `#[identifier]` - opaque 128-bit identifier
/// - `#[bounded_text(min_length, max_length, pattern?)]` - text with a
///   length range and an optional regular expression
/// - `#[bounded_integer(min, max)]` - 32-bit integer range
/// - `#[bounded_real(min, max)]` - finite 64-bit float range
///
/// Arguments are positional or named; bounds are inclusive.
///
/// # Options
/// - `registry = Name` - name of the registration type (default `ValueTypes`)
/// - `runtime = ::path` - path of the runtime crate (default `::valtype`)
///
/// Rejected declarations are reported as errors at their directive and left
/// in place as plain unit structs; every other declaration is still generated.
#[proc_macro_attribute]
pub fn value_types(args: TokenStream, item: TokenStream) -> TokenStream {
    logging::init_tracing();
    let expanded: proc_macro2::TokenStream = valtype_codegen::expand(args.into(), item.into());
    expanded.into()
}
