//! Home page profile content parsed from the `data/*.txt` files.

use crate::models::SocialIcon;
use crate::utils::format::social_icon_for;

/// Name and title shown in the hero banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hero {
    pub name: String,
    pub title: String,
}

impl Hero {
    /// First line is the name, second the title; the rest is ignored.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.lines().map(str::trim);
        Self {
            name: lines.next().unwrap_or_default().to_string(),
            title: lines.next().unwrap_or_default().to_string(),
        }
    }
}

/// A link to a profile on another platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    /// Parse `platform|url` lines, skipping blank and malformed ones.
    pub fn parse_list(text: &str) -> Vec<Self> {
        text.lines()
            .filter_map(|line| {
                let (platform, url) = line.split_once('|')?;
                let (platform, url) = (platform.trim(), url.trim());
                (!platform.is_empty() && !url.is_empty()).then(|| Self {
                    platform: platform.to_string(),
                    url: url.to_string(),
                })
            })
            .collect()
    }

    pub fn icon(&self) -> SocialIcon {
        social_icon_for(&self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hero_parse() {
        let hero = Hero::parse("Jane Doe\nMathematician\nextra");
        assert_eq!(hero.name, "Jane Doe");
        assert_eq!(hero.title, "Mathematician");
        assert_eq!(Hero::parse("Only Name"), Hero {
            name: "Only Name".to_string(),
            title: String::new(),
        });
    }

    #[test]
    fn test_social_links() {
        let links = SocialLink::parse_list(
            "GitHub | https://github.com/jdoe\n\nbroken line\nMastodon|https://example.social/@j\n",
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].url, "https://github.com/jdoe");
        assert_eq!(links[0].icon(), SocialIcon::Github);
        assert_eq!(links[1].icon(), SocialIcon::Link);
    }
}
