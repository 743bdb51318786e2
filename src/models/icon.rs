//! Semantic icon identifiers for file and social cards.
//!
//! The mapping to drawable icons lives in `components::icons`.

/// Icon shown on a file card, chosen by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FileIcon {
    Pdf,
    Text,
    Word,
    Excel,
    PowerPoint,
    Image,
    Audio,
    Video,
    Archive,
    Code,
    /// Unknown or missing extension
    Generic,
}

impl FileIcon {
    /// Stable identifier, also used as a CSS modifier.
    pub fn id(self) -> &'static str {
        match self {
            Self::Pdf => "file-pdf",
            Self::Text => "file-alt",
            Self::Word => "file-word",
            Self::Excel => "file-excel",
            Self::PowerPoint => "file-powerpoint",
            Self::Image => "file-image",
            Self::Audio => "file-audio",
            Self::Video => "file-video",
            Self::Archive => "file-archive",
            Self::Code => "file-code",
            Self::Generic => "file",
        }
    }
}

/// Icon shown next to a social profile link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    Facebook,
    Youtube,
    Tiktok,
    Twitch,
    Discord,
    Telegram,
    Reddit,
    Pinterest,
    Snapchat,
    Whatsapp,
    Spotify,
    Apple,
    Google,
    Microsoft,
    Amazon,
    /// Unknown platform
    Link,
}
