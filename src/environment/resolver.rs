//! Build variable resolution.
//!
//! Resolves every variable the build driver needs using, per variable:
//! 1. Explicit command-line flag
//! 2. `CASM_*` override variable
//! 3. CI platform variable
//! 4. Computed default

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::{CiPlatform, EnvSnapshot};
use crate::error::{CasmCiError, Result};
use crate::helpers::{OsDetector, VariableCheck};

pub const BUILD_DIR_VAR: &str = "CASM_BUILD_DIR";
pub const REPO_SLUG_VAR: &str = "CASM_REPO_SLUG";
pub const GIT_ID_USER_VAR: &str = "CASM_GIT_ID_USER";
pub const BRANCH_VAR: &str = "CASM_BRANCH";
pub const OS_NAME_VAR: &str = "CASM_OS_NAME";
pub const CONDA_LABEL_VAR: &str = "CASM_CONDA_LABEL";

/// How a value was determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "var", rename_all = "snake_case")]
pub enum ValueSource {
    /// Explicitly set via a command-line flag.
    Flag,
    /// Set via a `CASM_*` override variable.
    Override(String),
    /// Read from a CI platform variable.
    CiPlatform(String),
    /// Computed from another resolved value.
    Derived(String),
    /// Computed default.
    Default,
    /// Entered by the user at a prompt.
    Prompt,
    /// Reported by OS detection.
    Detected,
    /// Located relative to the running executable.
    Executable,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "flag"),
            Self::Override(var) => write!(f, "override {}", var),
            Self::CiPlatform(var) => write!(f, "CI variable {}", var),
            Self::Derived(var) => write!(f, "derived from {}", var),
            Self::Default => write!(f, "default"),
            Self::Prompt => write!(f, "prompt"),
            Self::Detected => write!(f, "detected"),
            Self::Executable => write!(f, "executable location"),
        }
    }
}

/// A resolved value together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved<T = String> {
    pub value: T,
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// Values given on the command line, highest priority in every chain.
#[derive(Debug, Clone, Default)]
pub struct ResolveOverrides {
    pub build_dir: Option<PathBuf>,
    pub repo_slug: Option<String>,
    pub git_id_user: Option<String>,
    pub branch: Option<String>,
    pub conda_label: Option<String>,
}

/// The fully resolved build configuration.
///
/// Immutable once built; exported only into the build driver's process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildConfig {
    pub platform: String,
    pub build_dir: Resolved<PathBuf>,
    pub repo_slug: Resolved,
    pub git_id_user: Resolved,
    pub branch: Resolved,
    pub os_name: Resolved,
    pub conda_label: Resolved,
}

impl BuildConfig {
    /// Variables to export to the build driver, in export order.
    pub fn to_env_vars(&self) -> Vec<(String, String)> {
        vec![
            (
                BUILD_DIR_VAR.to_string(),
                self.build_dir.value.display().to_string(),
            ),
            (REPO_SLUG_VAR.to_string(), self.repo_slug.value.clone()),
            (GIT_ID_USER_VAR.to_string(), self.git_id_user.value.clone()),
            (BRANCH_VAR.to_string(), self.branch.value.clone()),
            (OS_NAME_VAR.to_string(), self.os_name.value.clone()),
            (CONDA_LABEL_VAR.to_string(), self.conda_label.value.clone()),
        ]
    }

    /// Sources of each exported variable, in export order.
    pub fn sources(&self) -> Vec<(&'static str, &ValueSource)> {
        vec![
            (BUILD_DIR_VAR, &self.build_dir.source),
            (REPO_SLUG_VAR, &self.repo_slug.source),
            (GIT_ID_USER_VAR, &self.git_id_user.source),
            (BRANCH_VAR, &self.branch.source),
            (OS_NAME_VAR, &self.os_name.source),
            (CONDA_LABEL_VAR, &self.conda_label.source),
        ]
    }
}

/// Release label used when no label is given: `main` for tagged builds,
/// `dev` otherwise.
pub fn default_conda_label(tag: Option<&str>) -> &'static str {
    match tag {
        Some(t) if !t.is_empty() => "main",
        _ => "dev",
    }
}

/// The account owning a repository: the slug text before the first `/`.
///
/// A slug without a separator is returned whole.
pub fn git_id_user_from_slug(slug: &str) -> &str {
    slug.split_once('/').map_or(slug, |(owner, _)| owner)
}

/// Build root for an executable: the parent of the directory containing it,
/// as a canonical absolute path.
pub fn build_root_from_executable(exe: &Path) -> Result<PathBuf> {
    let exe = exe.canonicalize().map_err(|e| CasmCiError::BuildRoot {
        path: exe.to_path_buf(),
        message: e.to_string(),
    })?;
    exe.parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| CasmCiError::BuildRoot {
            path: exe.clone(),
            message: "executable has no grandparent directory".to_string(),
        })
}

/// Pick the first value in a flag → override → CI variable chain.
fn first_of(
    flag: Option<&str>,
    env: &EnvSnapshot,
    override_var: &str,
    ci_var: &str,
) -> Option<Resolved> {
    if let Some(value) = flag.filter(|v| !v.is_empty()) {
        return Some(Resolved::new(value.to_string(), ValueSource::Flag));
    }
    if let Some(value) = env.get(override_var) {
        return Some(Resolved::new(
            value.to_string(),
            ValueSource::Override(override_var.to_string()),
        ));
    }
    env.get(ci_var).map(|value| {
        Resolved::new(
            value.to_string(),
            ValueSource::CiPlatform(ci_var.to_string()),
        )
    })
}

fn resolve_build_dir(env: &EnvSnapshot, flag: Option<&Path>) -> Result<Resolved<PathBuf>> {
    let explicit = match flag {
        Some(dir) => Some((dir.to_path_buf(), ValueSource::Flag)),
        None => env.get(BUILD_DIR_VAR).map(|dir| {
            (
                PathBuf::from(dir),
                ValueSource::Override(BUILD_DIR_VAR.to_string()),
            )
        }),
    };

    match explicit {
        Some((dir, source)) => {
            let dir = dir.canonicalize().map_err(|e| CasmCiError::BuildRoot {
                path: dir.clone(),
                message: e.to_string(),
            })?;
            Ok(Resolved::new(dir, source))
        }
        None => {
            let exe = std::env::current_exe()?;
            Ok(Resolved::new(
                build_root_from_executable(&exe)?,
                ValueSource::Executable,
            ))
        }
    }
}

/// Resolve the full build configuration.
///
/// OS detection and the conda label check are delegated to the injected
/// capabilities so they can be stubbed in tests.
pub fn resolve(
    env: &EnvSnapshot,
    overrides: &ResolveOverrides,
    os: &dyn OsDetector,
    check: &mut dyn VariableCheck,
) -> Result<BuildConfig> {
    let platform = CiPlatform::detect(env);
    debug!("CI platform: {}", platform);

    let build_dir = resolve_build_dir(env, overrides.build_dir.as_deref())?;

    let repo_slug = first_of(
        overrides.repo_slug.as_deref(),
        env,
        REPO_SLUG_VAR,
        platform.slug_var(),
    )
    .ok_or_else(|| CasmCiError::MissingVariable {
        name: REPO_SLUG_VAR.to_string(),
        fallback: platform.slug_var().to_string(),
    })?;

    let git_id_user = match overrides.git_id_user.as_deref().filter(|v| !v.is_empty()) {
        Some(user) => Resolved::new(user.to_string(), ValueSource::Flag),
        None => match env.get(GIT_ID_USER_VAR) {
            Some(user) => Resolved::new(
                user.to_string(),
                ValueSource::Override(GIT_ID_USER_VAR.to_string()),
            ),
            None => Resolved::new(
                git_id_user_from_slug(&repo_slug.value).to_string(),
                ValueSource::Derived(REPO_SLUG_VAR.to_string()),
            ),
        },
    };

    let branch = first_of(
        overrides.branch.as_deref(),
        env,
        BRANCH_VAR,
        platform.branch_var(),
    )
    .ok_or_else(|| CasmCiError::MissingVariable {
        name: BRANCH_VAR.to_string(),
        fallback: platform.branch_var().to_string(),
    })?;

    let os_name = Resolved::new(os.detect()?, ValueSource::Detected);

    let default_label = default_conda_label(platform.tag(env));
    let current_label = match overrides.conda_label.as_deref().filter(|v| !v.is_empty()) {
        Some(label) => Some(Resolved::new(label.to_string(), ValueSource::Flag)),
        None => env.get(CONDA_LABEL_VAR).map(|label| {
            Resolved::new(
                label.to_string(),
                ValueSource::Override(CONDA_LABEL_VAR.to_string()),
            )
        }),
    };
    let conda_label = check.check(
        CONDA_LABEL_VAR,
        "Conda label",
        current_label,
        Some(default_label),
    )?;

    let config = BuildConfig {
        platform: platform.to_string(),
        build_dir,
        repo_slug,
        git_id_user,
        branch,
        os_name,
        conda_label,
    };

    for (name, source) in config.sources() {
        debug!("{} resolved from {}", name, source);
    }

    Ok(config)
}
