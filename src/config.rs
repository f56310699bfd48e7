use std::path::{Path, PathBuf};

use crate::model::Role;

pub const DEFAULT_FOLLOWERS_FILE: &str = "followers_1.json";
pub const DEFAULT_FOLLOWING_FILE: &str = "following.json";
pub const DEFAULT_OUTPUT_FILE: &str = "unfollowers.txt";

/// File locations for one run. Relative file names resolve against
/// `base_dir`; absolute ones are used as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub base_dir: PathBuf,
    pub followers_file: PathBuf,
    pub following_file: PathBuf,
    pub output_file: PathBuf,
}

impl Paths {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            followers_file: PathBuf::from(DEFAULT_FOLLOWERS_FILE),
            following_file: PathBuf::from(DEFAULT_FOLLOWING_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }

    pub fn input(&self, role: Role) -> PathBuf {
        match role {
            Role::Followers => self.resolve(&self.followers_file),
            Role::Following => self.resolve(&self.following_file),
        }
    }

    pub fn output(&self) -> PathBuf {
        self.resolve(&self.output_file)
    }

    pub fn problems(&self, role: Role) -> PathBuf {
        self.base_dir.join(role.problems_file_name())
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        // `join` keeps absolute paths as-is.
        self.base_dir.join(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        let paths = Paths::new("/data/export");
        assert_eq!(
            paths.input(Role::Followers),
            Path::new("/data/export/followers_1.json")
        );
        assert_eq!(
            paths.input(Role::Following),
            Path::new("/data/export/following.json")
        );
        assert_eq!(paths.output(), Path::new("/data/export/unfollowers.txt"));
        assert_eq!(
            paths.problems(Role::Following),
            Path::new("/data/export/following_parse_problems.json")
        );
    }

    #[test]
    fn test_absolute_override() {
        let mut paths = Paths::new("/data/export");
        paths.output_file = PathBuf::from("/tmp/out.txt");
        assert_eq!(paths.output(), Path::new("/tmp/out.txt"));
    }
}
