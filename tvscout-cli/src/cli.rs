use clap::Parser;
use std::path::PathBuf;

/// Every flag is optional. Without any, the channel list is read from
/// `list.txt` and the playlist is written to `playlist.m3u`.
#[derive(Parser, Debug)]
#[command(
    name = "tvscout",
    about = "TvScout - finds live TV streams by channel name, probes them with ffmpeg and writes an M3U playlist",
    version
)]
pub struct Args {
    /// Channel list to read (one channel or `<group>,#genre#` marker per line)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Playlist file to write
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Keep only the first valid stream of each channel
    #[arg(long)]
    pub first_valid: bool,

    /// Proxy URL for channel lookups (supports http, https, socks5)
    #[arg(long)]
    pub proxy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_required() {
        let args = Args::try_parse_from(["tvscout"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(!args.first_valid);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "tvscout",
            "-i",
            "channels.txt",
            "--output",
            "out.m3u",
            "--first-valid",
            "--proxy",
            "socks5://127.0.0.1:1080",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("channels.txt")));
        assert_eq!(args.output, Some(PathBuf::from("out.m3u")));
        assert!(args.first_valid);
        assert_eq!(args.proxy.as_deref(), Some("socks5://127.0.0.1:1080"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Args::try_parse_from(["tvscout", "-v", "-q"]).is_err());
    }
}
