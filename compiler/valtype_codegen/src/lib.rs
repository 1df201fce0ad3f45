//! Generation engine for primitive-wrapped value types.
//!
//! A generation pass takes one inline module, discovers every unit struct
//! carrying a value-kind directive, validates the directive arguments, and
//! replaces each valid declaration with a complete value-type implementation
//! plus a serialization adapter. A single registration type enumerating all
//! adapters is appended to the module root.
//!
//! ```text
//! #[value_types]
//! pub mod ids {
//!     #[identifier]
//!     pub struct CustomerId;
//!
//!     #[bounded_integer(min = 0, max = 100000)]
//!     pub struct Amount;
//! }
//! ```
//!
//! Pipeline, leaves first:
//!
//! - [`scan`]: declaration discovery and shape checks
//! - [`validate`]: directive argument semantics
//! - [`template`]: per-kind value-type bodies
//! - [`adapter`]: scalar serialization adapters
//! - [`aggregate`]: duplicate rejection and the registration artifact
//!
//! [`GenerationPass`] drives them and collects [`Diagnostic`]s. A failing
//! declaration never aborts the pass; the remaining declarations are still
//! emitted.

pub mod adapter;
pub mod aggregate;
mod declaration;
mod diagnostic;
mod directive;
mod kind;
mod options;
mod pass;
pub mod scan;
pub mod template;
pub mod validate;

pub use declaration::{NamedItem, NamespacePath, Slot, ValueDeclaration};
pub use diagnostic::{Diagnostic, ErrorCode};
pub use directive::{ArgValue, Directive, DirectiveArg};
pub use kind::{KindParams, ParamType, Parameter, ValueKind};
pub use options::{EmitContext, PassOptions};
pub use pass::{expand, GenerationPass, PassOutput};
