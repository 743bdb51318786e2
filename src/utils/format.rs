//! Formatting and lookup helpers for listing cards.
//!
//! Pure functions; safe to call from rendering code and tests alike.

use crate::models::{FileIcon, SocialIcon};

/// Lower-cased text after the last `.` of a file name.
///
/// A name without a dot yields the whole name, lower-cased.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or_default().to_ascii_lowercase()
}

/// Icon for a (lower-case) file extension.
pub fn icon_for(extension: &str) -> FileIcon {
    match extension {
        "pdf" => FileIcon::Pdf,
        "txt" => FileIcon::Text,
        "doc" | "docx" => FileIcon::Word,
        "xls" | "xlsx" => FileIcon::Excel,
        "ppt" | "pptx" => FileIcon::PowerPoint,
        "jpg" | "jpeg" | "png" | "gif" => FileIcon::Image,
        "mp3" | "wav" => FileIcon::Audio,
        "mp4" | "mov" => FileIcon::Video,
        "zip" | "rar" => FileIcon::Archive,
        "html" | "css" | "js" | "json" | "md" => FileIcon::Code,
        _ => FileIcon::Generic,
    }
}

/// Card heading for a file: final extension removed, underscores as spaces.
///
/// Inner dots are kept (`a.b.pdf` -> `a.b`). A name without any dot has
/// nothing left once its "extension" is dropped and yields `""`.
pub fn display_name(name: &str) -> String {
    let stem = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or("");
    stem.replace('_', " ")
}

/// Icon for a social platform name, case-insensitively.
pub fn social_icon_for(platform: &str) -> SocialIcon {
    match platform.trim().to_ascii_lowercase().as_str() {
        "github" => SocialIcon::Github,
        "linkedin" => SocialIcon::Linkedin,
        "twitter" => SocialIcon::Twitter,
        "instagram" => SocialIcon::Instagram,
        "facebook" => SocialIcon::Facebook,
        "youtube" => SocialIcon::Youtube,
        "tiktok" => SocialIcon::Tiktok,
        "twitch" => SocialIcon::Twitch,
        "discord" => SocialIcon::Discord,
        "telegram" => SocialIcon::Telegram,
        "reddit" => SocialIcon::Reddit,
        "pinterest" => SocialIcon::Pinterest,
        "snapchat" => SocialIcon::Snapchat,
        "whatsapp" => SocialIcon::Whatsapp,
        "spotify" => SocialIcon::Spotify,
        "apple" => SocialIcon::Apple,
        "google" => SocialIcon::Google,
        "microsoft" => SocialIcon::Microsoft,
        "amazon" => SocialIcon::Amazon,
        _ => SocialIcon::Link,
    }
}

/// Join a folder path and a child name with `/`.
///
/// An empty folder is the listing root.
pub fn join_path(folder: &str, name: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

/// Folder containing `path`; the root is its own parent.
pub fn parent_path(path: &str) -> String {
    let path = path.trim_matches('/');
    path.rsplit_once('/')
        .map(|(parent, _)| parent.to_string())
        .unwrap_or_default()
}
