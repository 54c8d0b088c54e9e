//! formguard core
//!
//! Headless form validation: a closed registry of pure validators, field
//! resolution with auto-detection, and a renderer that drives host-supplied
//! presentation ports. Used by the WASM bindings; testable without a browser.

pub mod binding;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod field;
pub mod form;
pub mod registry;
pub mod render;
pub mod resolve;
pub mod result;
pub mod validators;

pub use binding::{Action, BindingPlan, BindingPolicy, FieldEvent};
pub use clock::{Clock, FixedClock, SystemClock, ValidationContext};
pub use config::EngineConfig;
pub use engine::ValidationEngine;
pub use error::FormGuardError;
pub use field::{FieldConstraints, FieldDescriptor};
pub use form::{FormView, Notification, NotificationLevel};
pub use registry::{ValidatorFn, ValidatorName};
pub use render::{FeedbackRenderer, FieldView};
pub use resolve::{auto_detect, check_field};
pub use result::ValidationResult;
