//! CI platform detection.
//!
//! Maps the variables each CI runner populates (repository slug, branch,
//! tag) onto one shape. Travis CI is the reference platform: its variable
//! names are used whenever no other platform marker is present.

use super::EnvSnapshot;

/// A continuous-integration platform whose variables we know how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiPlatform {
    Travis,
    GitHubActions,
    GitLab,
}

impl CiPlatform {
    /// Detect the platform from its marker variable.
    ///
    /// Checks, in order: `TRAVIS`, `GITHUB_ACTIONS`, `GITLAB_CI`.
    /// Falls back to [`CiPlatform::Travis`].
    pub fn detect(env: &EnvSnapshot) -> Self {
        if env.get("TRAVIS").is_some() {
            Self::Travis
        } else if env.get("GITHUB_ACTIONS").is_some() {
            Self::GitHubActions
        } else if env.get("GITLAB_CI").is_some() {
            Self::GitLab
        } else {
            Self::Travis
        }
    }

    /// Variable holding the `owner/repo` slug.
    pub fn slug_var(&self) -> &'static str {
        match self {
            Self::Travis => "TRAVIS_REPO_SLUG",
            Self::GitHubActions => "GITHUB_REPOSITORY",
            Self::GitLab => "CI_PROJECT_PATH",
        }
    }

    /// Variable holding the branch being built.
    pub fn branch_var(&self) -> &'static str {
        match self {
            Self::Travis => "TRAVIS_BRANCH",
            Self::GitHubActions => "GITHUB_REF_NAME",
            Self::GitLab => "CI_COMMIT_REF_NAME",
        }
    }

    /// Variable holding the tag, when the build was triggered by one.
    pub fn tag_var(&self) -> &'static str {
        match self {
            Self::Travis => "TRAVIS_TAG",
            Self::GitHubActions => "GITHUB_REF_NAME",
            Self::GitLab => "CI_COMMIT_TAG",
        }
    }

    /// The tag being built, if any.
    ///
    /// GitHub Actions reuses `GITHUB_REF_NAME` for branches and tags, so the
    /// tag only counts when `GITHUB_REF_TYPE` is `tag`.
    pub fn tag<'a>(&self, env: &'a EnvSnapshot) -> Option<&'a str> {
        if *self == Self::GitHubActions && env.get("GITHUB_REF_TYPE") != Some("tag") {
            return None;
        }
        env.get(self.tag_var())
    }
}

impl std::fmt::Display for CiPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Travis => write!(f, "Travis CI"),
            Self::GitHubActions => write!(f, "GitHub Actions"),
            Self::GitLab => write!(f, "GitLab CI"),
        }
    }
}

/// Check if running in a CI environment.
///
/// Used to force the non-interactive UI in `main()`.
pub fn is_ci(env: &EnvSnapshot) -> bool {
    [
        "CI",
        "TRAVIS",
        "GITHUB_ACTIONS",
        "GITLAB_CI",
        "CIRCLECI",
        "JENKINS_URL",
    ]
        .iter()
        .any(|var| env.get(var).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_env_falls_back_to_travis() {
        let env = EnvSnapshot::default();
        assert_eq!(CiPlatform::detect(&env), CiPlatform::Travis);
    }

    #[test]
    fn detects_github_actions() {
        let env = EnvSnapshot::from_pairs([("GITHUB_ACTIONS", "true")]);
        let platform = CiPlatform::detect(&env);
        assert_eq!(platform, CiPlatform::GitHubActions);
        assert_eq!(platform.slug_var(), "GITHUB_REPOSITORY");
    }

    #[test]
    fn detects_gitlab() {
        let env = EnvSnapshot::from_pairs([("GITLAB_CI", "true")]);
        let platform = CiPlatform::detect(&env);
        assert_eq!(platform, CiPlatform::GitLab);
        assert_eq!(platform.branch_var(), "CI_COMMIT_REF_NAME");
    }

    #[test]
    fn travis_marker_wins_over_others() {
        let env = EnvSnapshot::from_pairs([("GITHUB_ACTIONS", "true"), ("TRAVIS", "true")]);
        assert_eq!(CiPlatform::detect(&env), CiPlatform::Travis);
    }

    #[test]
    fn travis_tag_read_directly() {
        let env = EnvSnapshot::from_pairs([("TRAVIS_TAG", "v1.2.0")]);
        assert_eq!(CiPlatform::Travis.tag(&env), Some("v1.2.0"));
    }

    #[test]
    fn empty_travis_tag_is_no_tag() {
        let env = EnvSnapshot::from_pairs([("TRAVIS_TAG", "")]);
        assert_eq!(CiPlatform::Travis.tag(&env), None);
    }

    #[test]
    fn github_ref_name_is_tag_only_for_tag_refs() {
        let branch = EnvSnapshot::from_pairs([
            ("GITHUB_REF_NAME", "main"),
            ("GITHUB_REF_TYPE", "branch"),
        ]);
        assert_eq!(CiPlatform::GitHubActions.tag(&branch), None);

        let tag = EnvSnapshot::from_pairs([
            ("GITHUB_REF_NAME", "v1.0.0"),
            ("GITHUB_REF_TYPE", "tag"),
        ]);
        assert_eq!(CiPlatform::GitHubActions.tag(&tag), Some("v1.0.0"));
    }

    #[test]
    fn is_ci_detects_marker() {
        assert!(is_ci(&EnvSnapshot::from_pairs([("CI", "true")])));
        assert!(!is_ci(&EnvSnapshot::default()));
    }

    #[test]
    fn is_ci_detects_circleci() {
        assert!(is_ci(&EnvSnapshot::from_pairs([("CIRCLECI", "true")])));
        assert!(!is_ci(&EnvSnapshot::from_pairs([("CIRCLECI", "")])));
    }

    #[test]
    fn display_names() {
        assert_eq!(CiPlatform::Travis.to_string(), "Travis CI");
        assert_eq!(CiPlatform::GitHubActions.to_string(), "GitHub Actions");
    }
}
