use super::entry::{Playlist, PlaylistEntry};

pub const M3U_HEADER: &str = "#EXTM3U";

/// Logo location per channel, `{name}` is replaced by the channel name.
pub const DEFAULT_LOGO_TEMPLATE: &str = "https://live.fanmingming.cn/tv/{name}.png";

fn extinf_line(entry: &PlaylistEntry, logo_template: &str) -> String {
    let name = &entry.channel_name;
    let logo = logo_template.replace("{name}", name);
    format!(
        "#EXTINF:-1 tvg-id=\"{name}\" tvg-name=\"{name}\" tvg-logo=\"{logo}\" group-title=\"{}\",{name}",
        entry.group
    )
}

/// Renders the playlist as an extended M3U document.
///
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render_m3u(playlist: &Playlist, logo_template: &str) -> String {
    let mut lines = Vec::with_capacity(1 + playlist.len() * 2);
    lines.push(M3U_HEADER.to_string());
    for entry in playlist.entries() {
        lines.push(extinf_line(entry, logo_template));
        lines.push(entry.url.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_m3u_layout() {
        let mut playlist = Playlist::new();
        playlist.push(PlaylistEntry::new("CNN", "News", "http://a.test/1"));
        playlist.push(PlaylistEntry::new("CCTV1", "央视", "http://b.test/2.m3u8"));

        let expected = "#EXTM3U\n\
            #EXTINF:-1 tvg-id=\"CNN\" tvg-name=\"CNN\" tvg-logo=\"https://live.fanmingming.cn/tv/CNN.png\" group-title=\"News\",CNN\n\
            http://a.test/1\n\
            #EXTINF:-1 tvg-id=\"CCTV1\" tvg-name=\"CCTV1\" tvg-logo=\"https://live.fanmingming.cn/tv/CCTV1.png\" group-title=\"央视\",CCTV1\n\
            http://b.test/2.m3u8";

        assert_eq!(render_m3u(&playlist, DEFAULT_LOGO_TEMPLATE), expected);
    }

    #[test]
    fn test_custom_logo_template() {
        let mut playlist = Playlist::new();
        playlist.push(PlaylistEntry::new("CNN", "News", "http://a.test/1"));

        let rendered = render_m3u(&playlist, "http://logos.test/{name}/logo.png");
        assert!(rendered.contains("tvg-logo=\"http://logos.test/CNN/logo.png\""));
    }

    #[test]
    fn test_empty_playlist_is_header_only() {
        assert_eq!(render_m3u(&Playlist::new(), DEFAULT_LOGO_TEMPLATE), M3U_HEADER);
    }
}
