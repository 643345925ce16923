//! Effective Idioms - Runnable Examples
//!
//! Two small building blocks and the walkthroughs that exercise them:
//!
//! - [`Stack`]: a LIFO container that manages its own buffer, growing it to
//!   `2n + 1` slots when full and clearing every slot it pops.
//! - [`CompositeKey`]: an immutable three-field value with validated
//!   construction, structural equality, `31`-based hashing and lexicographic
//!   ordering. [`PhoneNumber`] is the reference instance.
//!
//! Run a walkthrough with:
//! ```bash
//! cargo run --bin complete_07_stack_memory
//! cargo run --bin complete_14_comparable_key -- idioms.toml 415-555-0100
//! ```

pub mod composite_key;
pub mod config;
pub mod error;
pub mod stack;
pub mod telemetry;

pub use composite_key::{CompositeKey, FieldSpec, KeySchema, Nanp, PhoneNumber};
pub use config::{IdiomsConfig, LoggingSettings, StackSettings};
pub use error::{ConfigError, EmptyStackError, KeyError};
pub use stack::Stack;
