//! Version parsing for milestone titles.

use regex::Regex;
use semver::Version;
use std::sync::LazyLock;

/// `v` prefix, single-digit major, then minor and patch, matching the whole
/// title.
static VERSION_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v([0-9])\.([0-9]+)\.([0-9]+)$").expect("version title pattern is valid")
});

/// Parses a milestone title of the form `vMAJOR.MINOR.PATCH`.
///
/// The major component is a single digit; minor and patch are one or more
/// digits. Anything else (missing prefix, extra components) is not a version
/// title. Pre-release milestones such as `v1.2.3-rc.1` are excluded on
/// purpose: fixes land in the next regular release.
pub fn parse_version_title(title: &str) -> Option<Version> {
    let captures = VERSION_TITLE.captures(title)?;
    let component = |index: usize| captures.get(index)?.as_str().parse::<u64>().ok();

    Some(Version::new(component(1)?, component(2)?, component(3)?))
}
