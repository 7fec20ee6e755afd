//! Helper capabilities used while resolving the build environment.
//!
//! - [`OsDetector`] reports the OS identifier exported as `CASM_OS_NAME`
//! - [`VariableCheck`] makes sure a variable ends up with a usable value
//!
//! Both are traits so the resolver can be exercised without depending on
//! the host platform or a terminal.

pub mod check_var;
pub mod os;

pub use check_var::{CheckVar, VariableCheck};
pub use os::{os_name_for, FixedOs, HostOs, OsDetector};
