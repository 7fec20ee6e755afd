//! Build environment resolution.
//!
//! Turns the ambient process environment into one immutable
//! [`BuildConfig`]. Each variable is resolved through its own chain:
//!
//! 1. Command-line flag
//! 2. `CASM_*` override variable
//! 3. CI platform variable (Travis CI, GitHub Actions, GitLab CI)
//! 4. Computed default

pub mod platform;
pub mod resolver;
pub mod snapshot;

pub use platform::{is_ci, CiPlatform};
pub use resolver::{
    build_root_from_executable, default_conda_label, git_id_user_from_slug, resolve,
    BuildConfig, ResolveOverrides, Resolved, ValueSource,
};
pub use snapshot::EnvSnapshot;
