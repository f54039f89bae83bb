//! Coarse platform and browser detection from a `User-Agent` header.

/// Platform tokens, checked in order. Mobile systems come first because
/// their agents also mention the desktop system they derive from.
const PLATFORMS: &[(&str, &str)] = &[
    ("android", "android"),
    ("iphone", "iphone"),
    ("ipad", "ipad"),
    ("cros ", "chromeos"),
    ("windows", "windows"),
    ("macintosh", "macos"),
    ("mac os", "macos"),
    ("linux", "linux"),
    ("freebsd", "freebsd"),
];

/// Browser tokens, checked in order. Chromium forks advertise `Chrome` and
/// `Safari` as well, so their own tokens must win.
const BROWSERS: &[(&str, &str)] = &[
    ("edg/", "edge"),
    ("edge/", "edge"),
    ("opr/", "opera"),
    ("opera", "opera"),
    ("yabrowser", "yandex"),
    ("firefox", "firefox"),
    ("chrome", "chrome"),
    ("crios", "chrome"),
    ("safari", "safari"),
    ("msie", "msie"),
    ("trident/", "msie"),
    ("curl", "curl"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAgent {
    pub platform: Option<&'static str>,
    pub browser: Option<&'static str>,
}

impl UserAgent {
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        Self {
            platform: first_match(&lower, PLATFORMS),
            browser: first_match(&lower, BROWSERS),
        }
    }
}

fn first_match(agent: &str, table: &[(&str, &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(token, _)| agent.contains(token))
        .map(|(_, name)| *name)
}
