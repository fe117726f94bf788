//! Fixed profile content shown outside the catalog: identity, outbound links
//! and the accent colours the profile card and overlay use.

pub const SITE_TITLE: &str = "Love Adu";
pub const NAME: &str = "Love Adu";
pub const TAGLINE: &str = "Junior, UC Berkeley — Data Science & Media Studies";
pub const BIO: &str = "Researcher and advocate exploring how platform regulation, content \
moderation, and algorithmic design impact democracy, civic life, and marginalized communities.";

pub const PORTRAIT_PATH: &str = "/profile.jpg";
/// Served as-is; the file name is whatever the asset host publishes.
pub const RESUME_PATH: &str = "/Love Adu Resume (8).pdf";
pub const EMAIL: &str = "loveadu@berkeley.edu";
pub const GITHUB_URL: &str = "https://github.com/love-adu";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/love-adu-868458233/";

pub const ABOUT_HEADING: &str = "About Me";
pub const ABOUT_TEXT: &str = "I’m a researcher, policy advocate, and student exploring the \
intersections of technology, democracy, and civic justice. My work focuses on algorithmic bias, \
platform governance, and digital equity.";

// Accents
pub const ACCENT_BORDER: &str = "#f8bbd0";
pub const HEADING_COLOR: &str = "#607d8b";

/// One outbound contact/social link on the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    pub color: &'static str,
    pub hover_color: &'static str,
    /// Opens in a new tab with `rel="noopener noreferrer"`
    pub external: bool,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "mail",
        label: "Email",
        href: "mailto:loveadu@berkeley.edu",
        color: "#bbdefb",
        hover_color: "#2196f3",
        external: false,
    },
    SocialLink {
        icon: "github",
        label: "GitHub",
        href: GITHUB_URL,
        color: "#b2ebf2",
        hover_color: "#00acc1",
        external: true,
    },
    SocialLink {
        icon: "linkedin",
        label: "LinkedIn",
        href: LINKEDIN_URL,
        color: "#d1c4e9",
        hover_color: "#7e57c2",
        external: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_link_matches_contact_address() {
        assert_eq!(SOCIAL_LINKS[0].href, format!("mailto:{}", EMAIL));
    }

    #[test]
    fn test_only_profiles_open_in_new_tab() {
        let external: Vec<_> = SOCIAL_LINKS
            .iter()
            .filter(|l| l.external)
            .map(|l| l.icon)
            .collect();
        assert_eq!(external, vec!["github", "linkedin"]);
    }
}
