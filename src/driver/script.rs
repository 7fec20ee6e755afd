//! Script-backed build driver.

use std::path::{Path, PathBuf};

use super::BuildDriver;
use crate::environment::BuildConfig;
use crate::error::{CasmCiError, Result};
use crate::shell::{execute, CommandResult};

/// Driver script name, relative to `<build dir>/build_scripts/`.
pub const DEFAULT_DRIVER: &str = "build_conda_docker.sh";

/// Runs a bash driver script with the resolved variables exported.
#[derive(Debug, Clone)]
pub struct ScriptDriver {
    script: Option<PathBuf>,
    interpreter: String,
}

impl ScriptDriver {
    /// Use `<build dir>/build_scripts/build_conda_docker.sh`.
    pub fn new() -> Self {
        Self {
            script: None,
            interpreter: "bash".to_string(),
        }
    }

    /// Use an explicit script instead of the one in the build tree.
    pub fn with_script(mut self, script: Option<PathBuf>) -> Self {
        self.script = script;
        self
    }

    /// The script that will run for `build_dir`.
    pub fn script_path(&self, build_dir: &Path) -> PathBuf {
        self.script
            .clone()
            .unwrap_or_else(|| build_dir.join("build_scripts").join(DEFAULT_DRIVER))
    }
}

impl Default for ScriptDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildDriver for ScriptDriver {
    fn name(&self) -> String {
        self.script
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_DRIVER.to_string())
    }

    fn run(&self, config: &BuildConfig) -> Result<CommandResult> {
        let script = self.script_path(&config.build_dir.value);
        if !script.is_file() {
            return Err(CasmCiError::DriverNotFound { path: script });
        }

        execute(
            &self.interpreter,
            &[script.display().to_string()],
            &config.to_env_vars(),
        )
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::environment::{Resolved, ValueSource};
    use std::fs;
    use tempfile::TempDir;

    fn config_for(build_dir: &Path) -> BuildConfig {
        let value = |v: &str| Resolved::new(v.to_string(), ValueSource::Default);
        BuildConfig {
            platform: "Travis CI".to_string(),
            build_dir: Resolved::new(build_dir.to_path_buf(), ValueSource::Flag),
            repo_slug: value("acme/widgets"),
            git_id_user: value("acme"),
            branch: value("main"),
            os_name: value("linux"),
            conda_label: value("dev"),
        }
    }

    fn build_tree(script_body: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("build_scripts");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join(DEFAULT_DRIVER), script_body).unwrap();
        temp
    }

    #[test]
    fn default_script_path_is_in_build_scripts() {
        let driver = ScriptDriver::new();
        assert_eq!(
            driver.script_path(Path::new("/build")),
            PathBuf::from("/build/build_scripts/build_conda_docker.sh")
        );
        assert_eq!(driver.name(), DEFAULT_DRIVER);
    }

    #[test]
    fn explicit_script_overrides_path_and_name() {
        let driver = ScriptDriver::new().with_script(Some(PathBuf::from("/tmp/other.sh")));
        assert_eq!(
            driver.script_path(Path::new("/build")),
            PathBuf::from("/tmp/other.sh")
        );
        assert_eq!(driver.name(), "other.sh");
    }

    #[test]
    fn missing_script_is_driver_not_found() {
        let temp = TempDir::new().unwrap();
        let err = ScriptDriver::new()
            .run(&config_for(temp.path()))
            .unwrap_err();
        assert!(matches!(err, CasmCiError::DriverNotFound { .. }));
    }

    #[test]
    fn script_receives_exported_variables() {
        let temp = build_tree(
            "printf '%s %s %s' \"$CASM_GIT_ID_USER\" \"$CASM_CONDA_LABEL\" \"$CASM_OS_NAME\" > \"$CASM_BUILD_DIR/seen\"\n",
        );
        let result = ScriptDriver::new().run(&config_for(temp.path())).unwrap();
        assert!(result.success);
        let seen = fs::read_to_string(temp.path().join("seen")).unwrap();
        assert_eq!(seen, "acme dev linux");
    }

    #[test]
    fn script_exit_code_is_reported() {
        let temp = build_tree("exit 4\n");
        let result = ScriptDriver::new().run(&config_for(temp.path())).unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(4));
    }
}
