//! Centralized icon definitions.
//!
//! Maps the semantic icon kinds from `models::icon` to Bootstrap icons.

use icondata::Icon;

use crate::models::{FileIcon, SocialIcon};

// =============================================================================
// Fixed Icons
// =============================================================================

pub const FOLDER: Icon = icondata::BsFolderFill;
pub const FOLDER_OPEN: Icon = icondata::BsFolder2Open;
pub const BOOK: Icon = icondata::BsBook;
pub const HOME: Icon = icondata::BsHouseFill;
pub const WARNING: Icon = icondata::BsExclamationTriangle;
pub const EMPTY: Icon = icondata::BsInbox;
pub const ARROW_LEFT: Icon = icondata::BsArrowLeft;
pub const ARROW_RIGHT: Icon = icondata::BsArrowRight;
pub const MOON: Icon = icondata::BsMoonFill;
pub const SUN: Icon = icondata::BsSunFill;

// =============================================================================
// Kind Mappings
// =============================================================================

pub fn file_icon(kind: FileIcon) -> Icon {
    match kind {
        FileIcon::Pdf => icondata::BsFileEarmarkPdf,
        FileIcon::Text => icondata::BsFileEarmarkText,
        FileIcon::Word => icondata::BsFileEarmarkWord,
        FileIcon::Excel => icondata::BsFileEarmarkExcel,
        FileIcon::PowerPoint => icondata::BsFileEarmarkPpt,
        FileIcon::Image => icondata::BsFileEarmarkImage,
        FileIcon::Audio => icondata::BsFileEarmarkMusic,
        FileIcon::Video => icondata::BsFileEarmarkPlay,
        FileIcon::Archive => icondata::BsFileEarmarkZip,
        FileIcon::Code => icondata::BsFileEarmarkCode,
        FileIcon::Generic => icondata::BsFileEarmark,
    }
}

pub fn social_icon(kind: SocialIcon) -> Icon {
    match kind {
        SocialIcon::Github => icondata::BsGithub,
        SocialIcon::Linkedin => icondata::BsLinkedin,
        SocialIcon::Twitter => icondata::BsTwitter,
        SocialIcon::Instagram => icondata::BsInstagram,
        SocialIcon::Facebook => icondata::BsFacebook,
        SocialIcon::Youtube => icondata::BsYoutube,
        SocialIcon::Tiktok => icondata::BsTiktok,
        SocialIcon::Twitch => icondata::BsTwitch,
        SocialIcon::Discord => icondata::BsDiscord,
        SocialIcon::Telegram => icondata::BsTelegram,
        SocialIcon::Reddit => icondata::BsReddit,
        SocialIcon::Pinterest => icondata::BsPinterest,
        SocialIcon::Snapchat => icondata::BsSnapchat,
        SocialIcon::Whatsapp => icondata::BsWhatsapp,
        SocialIcon::Spotify => icondata::BsSpotify,
        SocialIcon::Apple => icondata::BsApple,
        SocialIcon::Google => icondata::BsGoogle,
        SocialIcon::Microsoft => icondata::BsMicrosoft,
        SocialIcon::Amazon => icondata::BsAmazon,
        SocialIcon::Link => icondata::BsLink45deg,
    }
}
