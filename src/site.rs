//! Static blog metadata: social profiles, share targets, and the
//! markdown-only mirror of the index page.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved URL characters stay literal; everything else is escaped.
const SHARE_TARGET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub struct SiteInfo {
    pub title: &'static str,
    pub website: &'static str,
}

pub const SITE: SiteInfo = SiteInfo {
    title: "Dirk Hierold",
    website: "https://dirkhierold.de",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub link_title: &'static str,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareLink {
    pub name: &'static str,
    pub href: &'static str,
    pub link_title: &'static str,
    pub icon: &'static str,
}

impl ShareLink {
    /// Share URL for `post_url`; the target is appended percent-encoded.
    pub fn url_for(&self, post_url: &str) -> String {
        format!("{}{}", self.href, utf8_percent_encode(post_url, SHARE_TARGET))
    }
}

pub const SOCIALS: &[SocialLink] = &[
    SocialLink {
        name: "Github",
        href: "https://github.com/DirkHierold",
        link_title: " Dirk Hierold on Github",
        icon: "github",
        active: true,
    },
    SocialLink {
        name: "Mail",
        href: "mailto:dirk@dirkhierold.de",
        link_title: "Send an email to Dirk Hierold",
        icon: "mail",
        active: true,
    },
];

pub const SHARE_LINKS: &[ShareLink] = &[
    ShareLink {
        name: "BlueSky",
        href: "https://bsky.app/intent/compose?text=",
        link_title: "Share this post on BlueSky",
        icon: "bluesky",
    },
    ShareLink {
        name: "LinkedIn",
        href: "https://www.linkedin.com/sharing/share-offsite/?url=",
        link_title: "Share this post on LinkedIn",
        icon: "linkedin",
    },
    ShareLink {
        name: "WhatsApp",
        href: "https://wa.me/?text=",
        link_title: "Share this post via WhatsApp",
        icon: "whatsapp",
    },
    ShareLink {
        name: "Facebook",
        href: "https://www.facebook.com/sharer.php?u=",
        link_title: "Share this post on Facebook",
        icon: "facebook",
    },
    ShareLink {
        name: "Telegram",
        href: "https://t.me/share/url?url=",
        link_title: "Share this post via Telegram",
        icon: "telegram",
    },
    ShareLink {
        name: "Pinterest",
        href: "https://pinterest.com/pin/create/button/?url=",
        link_title: "Share this post on Pinterest",
        icon: "pinterest",
    },
    ShareLink {
        name: "Mail",
        href: "mailto:?subject=See%20this%20post&body=",
        link_title: "Share this post via email",
        icon: "mail",
    },
];

pub fn active_socials() -> impl Iterator<Item = &'static SocialLink> {
    SOCIALS.iter().filter(|social| social.active)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownPage {
    pub status: u16,
    pub content_type: &'static str,
    pub cache_control: &'static str,
    pub body: String,
}

const MARKDOWN_INDEX: &str = "# Dirk Hierold

AI-powered tools from Swift roots to web frontiers. Every commit lands on GitHub for you to fork & remix.

## Navigation

- [About](/about.md)
- [Recent Posts](/posts.md)
- [Archives](/archives.md)
- [RSS Feed](/rss.xml)

## Links

- Twitter: [@DirkHierold](https://twitter.com/DirkHierold)
- GitHub: [@DirkHierold](https://github.com/DirkHierold)
- Email: dirk@dirkhierold.de

---

*This is the markdown-only version of dirkhierold.de. Visit [dirkhierold.de](https://dirkhierold.de) for the full experience.*";

/// The `/index.md` response served to text-only clients.
pub fn markdown_mirror() -> MarkdownPage {
    MarkdownPage {
        status: 200,
        content_type: "text/plain; charset=utf-8",
        cache_control: "public, max-age=3600",
        body: MARKDOWN_INDEX.to_string(),
    }
}
