use super::error::ChannelListError;
use std::{io::ErrorKind, path::Path};

pub const DEFAULT_INPUT: &str = "list.txt";

/// Lines ending in this suffix open a new group, e.g. `News,#genre#`.
pub const GROUP_SUFFIX: &str = ",#genre#";

/// Group of channels listed before the first group marker.
pub const DEFAULT_GROUP: &str = "Default";

/// One meaningful line of a channel list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Group(String),
    Channel(String),
}

/// A channel paired with the group in effect where it was listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    pub name: String,
    pub group: String,
}

impl ChannelEntry {
    pub fn new<N: Into<String>, G: Into<String>>(name: N, group: G) -> Self {
        Self {
            name: name.into(),
            group: group.into(),
        }
    }
}

/// Classifies a single line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Option<Directive> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.ends_with(GROUP_SUFFIX) {
        // every marker occurrence is dropped from the group name, not just the suffix
        let group = line.replace(GROUP_SUFFIX, "");
        Some(Directive::Group(group.trim().to_string()))
    } else {
        Some(Directive::Channel(line.to_string()))
    }
}

pub fn parse_directives(content: &str) -> Vec<Directive> {
    content.lines().filter_map(parse_line).collect()
}

/// Reads and parses a UTF-8 channel list.
///
/// A missing file and a file without any non-blank line are reported as
/// their own errors so callers can stop without treating them as crashes.
pub fn read_channel_list(path: &Path) -> Result<Vec<Directive>, ChannelListError> {
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ChannelListError::NotFound(path.to_path_buf()),
        _ => ChannelListError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let directives = parse_directives(&content);
    if directives.is_empty() {
        return Err(ChannelListError::Empty(path.to_path_buf()));
    }
    Ok(directives)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t "), None);
        assert_eq!(
            parse_line("  News,#genre#  "),
            Some(Directive::Group("News".to_string()))
        );
        assert_eq!(
            parse_line("央视频道 ,#genre#"),
            Some(Directive::Group("央视频道".to_string()))
        );
        assert_eq!(
            parse_line(" CCTV-1 综合 "),
            Some(Directive::Channel("CCTV-1 综合".to_string()))
        );
        assert_eq!(
            parse_line("A,#genre#B,#genre#"),
            Some(Directive::Group("AB".to_string()))
        );
        // the marker only counts as a suffix
        assert_eq!(
            parse_line(",#genre# CNN"),
            Some(Directive::Channel(",#genre# CNN".to_string()))
        );
    }

    #[test]
    fn test_parse_directives_keeps_order_and_skips_blank_lines() {
        let content = "News,#genre#\r\nCNN\n\n  BBC  \nSports,#genre#\nESPN\n";
        assert_eq!(
            parse_directives(content),
            vec![
                Directive::Group("News".to_string()),
                Directive::Channel("CNN".to_string()),
                Directive::Channel("BBC".to_string()),
                Directive::Group("Sports".to_string()),
                Directive::Channel("ESPN".to_string()),
            ]
        );
    }

    #[test]
    fn test_read_missing_list() {
        let dir = TempDir::new().unwrap();
        let result = read_channel_list(&dir.path().join(DEFAULT_INPUT));
        assert!(matches!(result, Err(ChannelListError::NotFound(_))));
    }

    #[test]
    fn test_read_blank_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        std::fs::write(&path, "\n   \n\t\n").unwrap();

        assert!(matches!(
            read_channel_list(&path),
            Err(ChannelListError::Empty(_))
        ));
    }

    #[test]
    fn test_read_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        std::fs::write(&path, "News,#genre#\nCNN\n").unwrap();

        let directives = read_channel_list(&path).unwrap();
        assert_eq!(directives.len(), 2);
    }

    #[test]
    fn test_read_non_utf8_list_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_INPUT);
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x43]).unwrap();

        assert!(matches!(
            read_channel_list(&path),
            Err(ChannelListError::Io { .. })
        ));
    }
}
