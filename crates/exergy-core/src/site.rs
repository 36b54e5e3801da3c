//! Site Content
//!
//! Routes, navigation and the content tables shared by every page.

use serde::Serialize;

pub const COMPANY_NAME: &str = "Exergy";
pub const TAGLINE: &str =
    "Advanced AI solutions for process modeling and control in the chemical and food industry";
pub const LOGO_SRC: &str = "/exergy-logo-symbol.png";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/company/exergysoftware";
pub const CONTACT_ANCHOR: &str = "contact-form";
pub const DEMO_BOOKING_URL: &str = "https://calendly.com/jose-exergytech/30min";
pub const PARTNERSHIP_BOOKING_URL: &str = "https://calendly.com/raquel-exergytech/30min";
pub const BRAND_BLUE: &str = "#1B9ED9";
pub const COPYRIGHT: &str = "© 2025 Exergy. All rights reserved.";

/// Pages the site serves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Route {
    Home,
    Solutions,
}

impl Route {
    pub const ALL: [Self; 2] = [Self::Home, Self::Solutions];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Solutions => "/solutions",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Exergy - AI Solutions for Process Modeling & Control",
            Self::Solutions => "Solutions - Exergy",
        }
    }

    /// Look up a route by path, ignoring a trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let path = normalize(path);
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Entry in the top navigation bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub fn is_active(&self, pathname: &str) -> bool {
        normalize(self.href) == normalize(pathname)
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Platform Overview", href: "/" },
    NavLink { label: "Solutions", href: "/solutions" },
    NavLink { label: "Documentation", href: "/documentation" },
    NavLink { label: "Company", href: "/company" },
];

#[derive(Clone, Copy, Debug, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "SOLUTIONS",
        links: &["Process Modeling", "Control Systems", "Analytics", "Enterprise"],
    },
    FooterColumn {
        heading: "INDUSTRIES",
        links: &["Food & Beverage", "Chemical Processing", "Pharmaceuticals", "Petrochemicals"],
    },
    FooterColumn {
        heading: "COMPANY",
        links: &["About", "Careers", "Contact", "Support"],
    },
    FooterColumn {
        heading: "RESOURCES",
        links: &["Documentation", "Case Studies", "Blog", "FAQ"],
    },
];

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Settings"];

/// Team profile card
#[derive(Clone, Copy, Debug, Serialize)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub linkedin: &'static str,
    /// `#RRGGBB`
    pub accent: &'static str,
}

impl TeamMember {
    /// First letter of the first and last name
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());
        first.into_iter().chain(last).flat_map(char::to_uppercase).collect()
    }

    /// Accent colour at 20% opacity for the avatar disc
    pub fn accent_background(&self) -> String {
        match parse_hex(self.accent) {
            Some((r, g, b)) => format!("rgba({r}, {g}, {b}, 0.2)"),
            None => "transparent".into(),
        }
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

pub const TEAM: [TeamMember; 4] = [
    TeamMember {
        name: "Jose Trigueros",
        role: "Executive Manager",
        linkedin: "https://www.linkedin.com/in/jotriso",
        accent: "#1B9ED9",
    },
    TeamMember {
        name: "Raquel Sabater",
        role: "Process Engineer",
        linkedin: "https://www.linkedin.com/in/raquel-sabater-canovas",
        accent: "#DC267F",
    },
    TeamMember {
        name: "Jairo Madrigal",
        role: "Financial Manager",
        linkedin: "https://www.linkedin.com/in/jairo-madrigal-montes-15380a30",
        accent: "#FE6100",
    },
    TeamMember {
        name: "Jason Kolokythas",
        role: "Data Scientist",
        linkedin: "https://www.linkedin.com/in/iason-kolokythas-188661334",
        accent: "#FFB81C",
    },
];

/// Core solution card
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Solution {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub tile_color: &'static str,
    pub highlights: [&'static str; 3],
}

pub const SOLUTIONS: [Solution; 3] = [
    Solution {
        title: "Process Modeling AI",
        summary: "Advanced models for complex chemical and food processing systems",
        image: "/processmodeling.png",
        tile_color: "#FC494C",
        highlights: ["Real-time process simulation", "Predictive maintenance", "Quality optimization"],
    },
    Solution {
        title: "Control Systems AI",
        summary: "Intelligent control systems that adapt to changing conditions",
        image: "/controlsystem.png",
        tile_color: "#81DFFB",
        highlights: ["Adaptive control algorithms", "Energy optimization", "Safety monitoring"],
    },
    Solution {
        title: "Analytics Platform",
        summary: "Comprehensive analytics for process insights and optimization",
        image: "/analyticsplatform.png",
        tile_color: "#A4E7BE",
        highlights: ["Performance dashboards", "Anomaly detection", "Compliance reporting"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_lookup() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/solutions"), Some(Route::Solutions));
        assert_eq!(Route::from_path("/solutions/"), Some(Route::Solutions));
        assert_eq!(Route::from_path("/company"), None);
    }

    #[test]
    fn test_nav_active_link() {
        let active: Vec<_> = NAV_LINKS
            .iter()
            .filter(|l| l.is_active("/solutions"))
            .map(|l| l.label)
            .collect();
        assert_eq!(active, vec!["Solutions"]);
        assert!(NAV_LINKS[0].is_active("/"));
        assert!(!NAV_LINKS[0].is_active("/solutions"));
    }

    #[test]
    fn test_team_initials() {
        let initials: Vec<_> = TEAM.iter().map(TeamMember::initials).collect();
        assert_eq!(initials, vec!["JT", "RS", "JM", "JK"]);
    }

    #[test]
    fn test_accent_background() {
        assert_eq!(TEAM[0].accent_background(), "rgba(27, 158, 217, 0.2)");
        assert_eq!(TEAM[1].accent_background(), "rgba(220, 38, 127, 0.2)");
        assert_eq!(TEAM[2].accent_background(), "rgba(254, 97, 0, 0.2)");
        assert_eq!(TEAM[3].accent_background(), "rgba(255, 184, 28, 0.2)");
    }

    #[test]
    fn test_bad_accent_is_transparent() {
        let member = TeamMember { accent: "blue", ..TEAM[0] };
        assert_eq!(member.accent_background(), "transparent");
    }
}
