use crate::common::*;

#[doc = "Version control systems tracked by the `history.sources_count` table."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VcsType {
    Arch,
    Bzr,
    Cvs,
    Darcs,
    Git,
    Hg,
    Mtn,
    Svn,
}

impl VcsType {
    pub const ALL: [VcsType; 8] = [
        VcsType::Arch,
        VcsType::Bzr,
        VcsType::Cvs,
        VcsType::Darcs,
        VcsType::Git,
        VcsType::Hg,
        VcsType::Mtn,
        VcsType::Svn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VcsType::Arch => "arch",
            VcsType::Bzr => "bzr",
            VcsType::Cvs => "cvs",
            VcsType::Darcs => "darcs",
            VcsType::Git => "git",
            VcsType::Hg => "hg",
            VcsType::Mtn => "mtn",
            VcsType::Svn => "svn",
        }
    }
}

impl fmt::Display for VcsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VcsType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name: String = s.trim().to_ascii_lowercase();

        VcsType::ALL
            .iter()
            .copied()
            .find(|vcs| vcs.as_str() == name)
            .ok_or_else(|| ConfigError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown vcs category '{0}'")]
    UnknownCategory(String),
    #[error("at least one vcs category must be configured")]
    EmptyCategories,
    #[error("vcs category '{0}' is listed more than once")]
    DuplicateCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("git".parse::<VcsType>(), Ok(VcsType::Git));
        assert_eq!(" SVN ".parse::<VcsType>(), Ok(VcsType::Svn));
    }

    #[test]
    fn rejects_unknown_name() {
        assert_eq!(
            "fossil".parse::<VcsType>(),
            Err(ConfigError::UnknownCategory("fossil".to_string()))
        );
    }

    #[test]
    fn display_matches_column_suffix() {
        let names: Vec<String> = VcsType::ALL.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            names,
            vec!["arch", "bzr", "cvs", "darcs", "git", "hg", "mtn", "svn"]
        );
    }
}
