//! Build command implementation.
//!
//! `casm-ci build` resolves the variables, runs OS detection and the label
//! check, then hands off to the build driver.

use tracing::debug;

use crate::cli::args::BuildArgs;
use crate::driver::{run_build, BuildDriver, ScriptDriver};
use crate::environment::resolve;
use crate::error::Result;
use crate::helpers::{CheckVar, HostOs, OsDetector};
use crate::ui::UserInterface;

use super::dispatcher::{Command, RunContext};
use super::env::shell_exports;

/// The build command implementation.
pub struct BuildCommand {
    context: RunContext,
    args: BuildArgs,
    os: Box<dyn OsDetector>,
    driver: Box<dyn BuildDriver>,
}

impl BuildCommand {
    pub fn new(context: RunContext, args: BuildArgs) -> Self {
        let driver = ScriptDriver::new().with_script(context.driver.clone());
        Self {
            context,
            args,
            os: Box::new(HostOs),
            driver: Box::new(driver),
        }
    }

    /// Replace the OS detector.
    pub fn with_os(mut self, os: Box<dyn OsDetector>) -> Self {
        self.os = os;
        self
    }

    /// Replace the build driver.
    pub fn with_driver(mut self, driver: Box<dyn BuildDriver>) -> Self {
        self.driver = driver;
        self
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let config = {
            let mut check = CheckVar::new(ui);
            resolve(
                &self.context.env,
                &self.context.overrides,
                self.os.as_ref(),
                &mut check,
            )?
        };

        if self.args.dry_run {
            ui.message(&format!(
                "dry-run mode: not running {}",
                self.driver.name()
            ));
            for line in shell_exports(&config, false) {
                ui.output(&line);
            }
            return Ok(());
        }

        debug!("Handing off to {}", self.driver.name());
        run_build(self.driver.as_ref(), &config)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::fake::FakeDriver;
    use crate::environment::EnvSnapshot;
    use crate::error::CasmCiError;
    use crate::helpers::FixedOs;
    use crate::ui::MockUI;
    use std::rc::Rc;

    struct SharedDriver(Rc<FakeDriver>);

    impl BuildDriver for SharedDriver {
        fn name(&self) -> String {
            self.0.name()
        }

        fn run(
            &self,
            config: &crate::environment::BuildConfig,
        ) -> Result<crate::shell::CommandResult> {
            self.0.run(config)
        }
    }

    fn context(pairs: &[(&str, &str)], build_dir: &std::path::Path) -> RunContext {
        let mut vars: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        vars.push((
            "CASM_BUILD_DIR".to_string(),
            build_dir.display().to_string(),
        ));
        RunContext {
            env: EnvSnapshot::from_pairs(vars),
            ..Default::default()
        }
    }

    fn command(ctx: RunContext, args: BuildArgs, driver: &Rc<FakeDriver>) -> BuildCommand {
        BuildCommand::new(ctx, args)
            .with_os(Box::new(FixedOs::new("linux")))
            .with_driver(Box::new(SharedDriver(Rc::clone(driver))))
    }

    #[test]
    fn successful_build_is_silent() {
        let temp = tempfile::TempDir::new().unwrap();
        let driver = Rc::new(FakeDriver::exiting(0));
        let ctx = context(
            &[("CASM_REPO_SLUG", "acme/widgets"), ("TRAVIS_BRANCH", "main")],
            temp.path(),
        );
        let mut ui = MockUI::new();

        command(ctx, BuildArgs::default(), &driver)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.messages().is_empty());
        assert!(ui.errors().is_empty());
        assert!(ui.outputs().is_empty());
        let seen = driver.seen.borrow();
        assert!(seen[0].contains(&("CASM_CONDA_LABEL".to_string(), "dev".to_string())));
        assert!(seen[0].contains(&("CASM_OS_NAME".to_string(), "linux".to_string())));
    }

    #[test]
    fn failed_driver_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let driver = Rc::new(FakeDriver::exiting(1));
        let ctx = context(
            &[("CASM_REPO_SLUG", "acme/widgets"), ("TRAVIS_BRANCH", "main")],
            temp.path(),
        );
        let mut ui = MockUI::new();

        let err = command(ctx, BuildArgs::default(), &driver)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, CasmCiError::DriverFailed { code: Some(1), .. }));
    }

    #[test]
    fn dry_run_skips_driver() {
        let temp = tempfile::TempDir::new().unwrap();
        let driver = Rc::new(FakeDriver::exiting(1));
        let ctx = context(
            &[
                ("CASM_REPO_SLUG", "acme/widgets"),
                ("TRAVIS_BRANCH", "main"),
                ("TRAVIS_TAG", "v1.0.0"),
            ],
            temp.path(),
        );
        let mut ui = MockUI::new();

        command(ctx, BuildArgs { dry_run: true }, &driver)
            .execute(&mut ui)
            .unwrap();

        assert!(driver.seen.borrow().is_empty());
        assert!(ui.has_message("dry-run mode"));
        assert!(ui.has_output("export CASM_CONDA_LABEL='main'"));
    }

    #[test]
    fn resolution_failure_stops_before_driver() {
        let temp = tempfile::TempDir::new().unwrap();
        let driver = Rc::new(FakeDriver::exiting(0));
        let ctx = context(&[("TRAVIS_BRANCH", "main")], temp.path());
        let mut ui = MockUI::new();

        let err = command(ctx, BuildArgs::default(), &driver)
            .execute(&mut ui)
            .unwrap_err();

        assert!(matches!(err, CasmCiError::MissingVariable { .. }));
        assert!(driver.seen.borrow().is_empty());
    }
}
