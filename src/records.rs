//! Static display records backing every collection on the site.
//!
//! Records are plain immutable values built once at startup. They carry
//! no identity beyond their position in the owning store; order is
//! meaningful because it drives entrance stagger.

/// One work-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobRecord {
    pub company: &'static str,
    pub logo: Option<&'static str>,
    pub role: &'static str,
    pub dates: &'static str,
    pub description: &'static str,
    /// Tailwind background class for the card.
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CertificationRecord {
    pub name: &'static str,
    pub issuer: &'static str,
    pub link: &'static str,
    pub logo: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroupRecord {
    pub label: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

/// Explicit category tag. Replaces the old trick of checking whether a
/// title also appears in a second list to decide display flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Web,
    Seo,
    Design,
}

/// One reported metric with its period-over-period change, e.g.
/// `("5.5K", "+95.24%")`. Values stay strings: they are display data
/// straight from the analytics export, not numbers we compute on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub change: &'static str,
}

impl Metric {
    /// Whether the change should render as an improvement.
    pub fn is_positive(&self) -> bool {
        self.change.starts_with('+')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceSplit {
    pub desktop: &'static str,
    pub mobile: &'static str,
}

/// Analytics block shown on SEO project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficStats {
    pub visits: Metric,
    pub devices: DeviceSplit,
    pub unique_visitors: Metric,
    pub conversion: Metric,
    pub pages_per_visit: Metric,
    pub avg_visit_duration: Metric,
    pub bounce_rate: Metric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub kind: ProjectKind,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub link: Option<&'static str>,
    pub stats: Option<TrafficStats>,
}

impl ProjectRecord {
    /// SEO reports credit their data source.
    pub fn credits_semrush(&self) -> bool {
        self.kind == ProjectKind::Seo
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceRecord {
    pub badge: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const TAGLINE: &str = "I help businesses grow their online presence through \
data-driven SEO strategies and modern, responsive web development.";

pub const JOBS: [JobRecord; 3] = [
    JobRecord {
        company: "Rondamo Technologies",
        logo: Some("/RT.png"),
        role: "Digital Marketing (SEO)",
        dates: "May 2023 - May 2024",
        description: "I worked on SEO-driven digital marketing, boosting traffic, \
rankings, and brand visibility online.",
        accent: "bg-orange-100",
    },
    JobRecord {
        company: "Rondamo Technologies",
        logo: Some("/RT.png"),
        role: "Sales and Marketing",
        dates: "June 2024 to December 2024",
        description: "Led Sales & Marketing efforts, driving revenue growth through \
strategy, outreach, and market research.",
        accent: "bg-orange-200",
    },
    JobRecord {
        company: "Mighty Ape Technologies",
        logo: Some("/MAT.png"),
        role: "Digital Marketing (SEO)",
        dates: "January 2025 to date",
        description: "I managed SEO strategies to increase website traffic, search \
rankings, and engagement.",
        accent: "bg-orange-100",
    },
];

const ALX_LOGO: &str = "/logos/alx.png";
const ALISON_LOGO: &str = "/logos/alison.png";
const UDEMY_LOGO: &str = "/logos/udemy.png";

pub const CERTIFICATIONS: [CertificationRecord; 7] = [
    CertificationRecord {
        name: "Front-End Web Development",
        issuer: "ALX",
        link: "https://savanna.alxafrica.com/certificates/CE8B5fFhN7",
        logo: Some(ALX_LOGO),
    },
    CertificationRecord {
        name: "Professional Foundations",
        issuer: "ALX",
        link: "https://savanna.alxafrica.com/certificates/9e2BSs5Zhc",
        logo: Some(ALX_LOGO),
    },
    CertificationRecord {
        name: "Graphic Design",
        issuer: "ALX",
        link: "https://www.freecodecamp.org/certification/yourusername/responsive-web-design",
        logo: Some(ALX_LOGO),
    },
    CertificationRecord {
        name: "ALX AI Starter Kit",
        issuer: "ALX",
        link: "https://savanna.alxafrica.com/certificates/cny5pJFxzr",
        logo: Some(ALX_LOGO),
    },
    CertificationRecord {
        name: "Digital Marketing",
        issuer: "Udemy",
        link: "https://alison.com/",
        logo: Some(UDEMY_LOGO),
    },
    CertificationRecord {
        name: "Diploma in Cascading Style Sheets using HTML",
        issuer: "Alison",
        link: "https://alison.com/",
        logo: Some(ALISON_LOGO),
    },
    CertificationRecord {
        name: "CSS and JavaScript - Creating a Single Page Flexbox Website",
        issuer: "Alison",
        link: "https://savanna.alxafrica.com/certificates/cny5pJFxzr",
        logo: Some(ALISON_LOGO),
    },
];

pub const SKILL_GROUPS: [SkillGroupRecord; 4] = [
    SkillGroupRecord {
        label: "Languages",
        icon: "💻",
        skills: &["HTML", "CSS", "JavaScript", "Python"],
    },
    SkillGroupRecord {
        label: "Frameworks & Libraries",
        icon: "📚",
        skills: &["React", "Tailwind CSS", "Node.js", "WordPress"],
    },
    SkillGroupRecord {
        label: "Tools & Platforms",
        icon: "⚙️",
        skills: &[
            "Google Analytics",
            "Search Console",
            "Semrush",
            "Figma",
            "Git & GitHub",
        ],
    },
    SkillGroupRecord {
        label: "Soft Skills",
        icon: "🤝",
        skills: &[
            "Communication",
            "Teamwork",
            "Problem Solving",
            "Time Management",
        ],
    },
];

pub const WEB_PROJECTS: [ProjectRecord; 9] = [
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Portfolio Website",
        description: "A personal portfolio to showcase my work and skills.",
        image: Some("/portfolio.png"),
        link: Some("https://segeraportfolio.vercel.app/"),
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Digital Marketing Agency",
        description: "Marketing site for a digital agency.",
        image: Some("/Bookie.png"),
        link: Some("https://d-m-agency.vercel.app/"),
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Recipe Finder",
        description: "A blogging platform with Markdown support and user authentication.",
        image: Some("/Savor.png"),
        link: Some("https://segeramos-savorsphere.web.val.run/"),
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Music App",
        description: "A productivity app to manage daily tasks and track progress.",
        image: Some("/Musicapp.png"),
        link: Some("https://segeramos-musicwebsiteapp.web.val.run/"),
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Portfolio",
        description: "A weather forecasting app using OpenWeatherMap API.",
        image: Some("/Portfolio2.png"),
        link: Some("https://example.com/weather"),
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Chat Application",
        description: "A real-time chat app built with Socket.io.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Mercedez Benz Website",
        description: "Showcase site for a car dealership.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "Library Website",
        description: "Catalog browser for a community library.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Web,
        title: "E-Commerce Website",
        description: "Storefront with cart and checkout flows.",
        image: None,
        link: None,
        stats: None,
    },
];

pub const SEO_PROJECTS: [ProjectRecord; 9] = [
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Nairobi Camera House Traffic Analytics",
        description: "On-page and off-page SEO optimization for websites.",
        image: Some("/NCH.png"),
        link: Some("https://nairobicamerahouse.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "5.5K",
                change: "+95.24%",
            },
            devices: DeviceSplit {
                desktop: "40.37%",
                mobile: "59.63%",
            },
            unique_visitors: Metric {
                value: "4.9K",
                change: "+109.43%",
            },
            conversion: Metric {
                value: "1.07%",
                change: "+100%",
            },
            pages_per_visit: Metric {
                value: "1.7",
                change: "-27.08%",
            },
            avg_visit_duration: Metric {
                value: "05:39",
                change: "-41.15%",
            },
            bounce_rate: Metric {
                value: "56.49%",
                change: "-9.19%",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Fox Printers",
        description: "SEO traffic report and user engagement metrics for ISK site.",
        image: Some("/fox.png"),
        link: Some("https://foxprinters.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "455",
                change: "+671.19%",
            },
            devices: DeviceSplit {
                desktop: "100%",
                mobile: "0%",
            },
            unique_visitors: Metric {
                value: "343",
                change: "+481.36%",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "1.8",
                change: "+76.7%",
            },
            avg_visit_duration: Metric {
                value: "16:51",
                change: "+100%",
            },
            bounce_rate: Metric {
                value: "74.29%",
                change: "-25.71%",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Panda Phones SEO Analytics",
        description: "Website engagement and SEO performance summary for PandaPhones.",
        image: Some("/panda.png"),
        link: Some("https://pandaphones.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "112",
                change: "-79.78%",
            },
            devices: DeviceSplit {
                desktop: "100%",
                mobile: "0%",
            },
            unique_visitors: Metric {
                value: "112",
                change: "-70.76%",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "4",
                change: "+130.35%",
            },
            avg_visit_duration: Metric {
                value: "07:17",
                change: "+107.11%",
            },
            bounce_rate: Metric {
                value: "0%",
                change: "-100%",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Rondamo Technologies SEO Report",
        description: "Traffic and performance metrics for Rondamo's main website.",
        image: Some("/RND.png"),
        link: Some("https://rondamo.co.ke/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "14.5K",
                change: "-53.57%",
            },
            devices: DeviceSplit {
                desktop: "53.77%",
                mobile: "46.23%",
            },
            unique_visitors: Metric {
                value: "12.2K",
                change: "-49.43%",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "5.6",
                change: "+226.2%",
            },
            avg_visit_duration: Metric {
                value: "14:51",
                change: "+128.46%",
            },
            bounce_rate: Metric {
                value: "72.54%",
                change: "-9.31%",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Mighty Ape SEO Performance",
        description: "User metrics and site behavior analytics for MightyApe Kenya.",
        image: Some("/MA.png"),
        link: Some("https://mightyape.co.ke/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "3.4K",
                change: "-23.72%",
            },
            devices: DeviceSplit {
                desktop: "51.38%",
                mobile: "48.62%",
            },
            unique_visitors: Metric {
                value: "2.9K",
                change: "-25.26%",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "1.3",
                change: "-9.6%",
            },
            avg_visit_duration: Metric {
                value: "08:22",
                change: "-15.2%",
            },
            bounce_rate: Metric {
                value: "90.69%",
                change: "+8.37%",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Eleven Shops SEO Overview",
        description: "Preliminary SEO stats and traffic snapshot for elevenshops.com.",
        image: Some("/ES.png"),
        link: Some("https://www.elevenshops.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "186",
                change: "n/a",
            },
            devices: DeviceSplit {
                desktop: "100%",
                mobile: "0%",
            },
            unique_visitors: Metric {
                value: "186",
                change: "n/a",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "1",
                change: "n/a",
            },
            avg_visit_duration: Metric {
                value: "00:00",
                change: "n/a",
            },
            bounce_rate: Metric {
                value: "100%",
                change: "n/a",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Nairobi Apple Store SEO Snapshot",
        description: "Semrush-based traffic and engagement overview for Nairobi Apple Store.",
        image: Some("/NAS.png"),
        link: Some("https://nairobiapplestore.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "33",
                change: "n/a",
            },
            devices: DeviceSplit {
                desktop: "100%",
                mobile: "0%",
            },
            unique_visitors: Metric {
                value: "33",
                change: "n/a",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "9",
                change: "n/a",
            },
            avg_visit_duration: Metric {
                value: "02:17",
                change: "n/a",
            },
            bounce_rate: Metric {
                value: "0%",
                change: "n/a",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "Frontline Africa SEO Snapshot",
        description: "Traffic and performance overview for Frontline Africa Ltd.",
        image: Some("/FEA.png"),
        link: Some("https://frontlineafricaltd.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "0",
                change: "n/a",
            },
            devices: DeviceSplit {
                desktop: "0%",
                mobile: "0%",
            },
            unique_visitors: Metric {
                value: "0",
                change: "n/a",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "0",
                change: "n/a",
            },
            avg_visit_duration: Metric {
                value: "00:00",
                change: "n/a",
            },
            bounce_rate: Metric {
                value: "0%",
                change: "n/a",
            },
        }),
    },
    ProjectRecord {
        kind: ProjectKind::Seo,
        title: "City Laptop Shop SEO Analytics",
        description: "Engagement metrics and traffic insights for laptoppriceinkenya.com.",
        image: Some("/CITY.png"),
        link: Some("https://laptoppriceinkenya.com/"),
        stats: Some(TrafficStats {
            visits: Metric {
                value: "37",
                change: "n/a",
            },
            devices: DeviceSplit {
                desktop: "100%",
                mobile: "0%",
            },
            unique_visitors: Metric {
                value: "37",
                change: "n/a",
            },
            conversion: Metric {
                value: "0%",
                change: "no change",
            },
            pages_per_visit: Metric {
                value: "1.7",
                change: "n/a",
            },
            avg_visit_duration: Metric {
                value: "00:00",
                change: "n/a",
            },
            bounce_rate: Metric {
                value: "29.73%",
                change: "n/a",
            },
        }),
    },
];

pub const DESIGN_PROJECTS: [ProjectRecord; 7] = [
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Portfolio Graphic",
        description: "A graphic design showcase for portfolio branding.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Portfolio Graphic",
        description: "A graphic design showcase for portfolio branding.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Portfolio Graphic",
        description: "A graphic design showcase for portfolio branding.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Portfolio Graphic",
        description: "A graphic design showcase for portfolio branding.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Portfolio Graphic",
        description: "A graphic design showcase for portfolio branding.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Portfolio Graphic",
        description: "A graphic design showcase for portfolio branding.",
        image: None,
        link: None,
        stats: None,
    },
    ProjectRecord {
        kind: ProjectKind::Design,
        title: "Brand Logo Design",
        description: "Custom logo design for branding purposes.",
        image: None,
        link: None,
        stats: None,
    },
];

pub const SERVICES: [ServiceRecord; 4] = [
    ServiceRecord {
        badge: "WD",
        title: "Web Design",
        description: "Modern, responsive web design services for all platforms.",
    },
    ServiceRecord {
        badge: "DEV",
        title: "Web Development",
        description: "Full stack web development with React and Node js.",
    },
    ServiceRecord {
        badge: "SEO",
        title: "Search Engine Optimization",
        description: "On-page and off-page SEO to grow traffic and rankings.",
    },
    ServiceRecord {
        badge: "GD",
        title: "Graphic Design",
        description: "Professional graphic design for web and print media.",
    },
];

pub const SOCIAL_LINKS: [SocialLink; 5] = [
    SocialLink {
        label: "X / Twitter",
        href: "https://x.com/bookie_DM",
        icon: "devicon-twitter-original",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Instagram",
        href: "https://www.instagram.com",
        icon: "extra-instagram",
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/254756627342",
        icon: "extra-whatsapp",
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/Segeramos",
        icon: "devicon-github-plain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seo_projects_carry_stats_and_attribution() {
        for project in &SEO_PROJECTS {
            assert_eq!(project.kind, ProjectKind::Seo);
            assert!(project.stats.is_some(), "{} missing stats", project.title);
            assert!(project.credits_semrush());
        }
    }

    #[test]
    fn test_non_seo_projects_skip_attribution() {
        for project in WEB_PROJECTS.iter().chain(DESIGN_PROJECTS.iter()) {
            assert!(!project.credits_semrush(), "{}", project.title);
            assert!(project.stats.is_none());
        }
    }

    #[test]
    fn test_metric_change_direction() {
        let up = Metric {
            value: "5.5K",
            change: "+95.24%",
        };
        let down = Metric {
            value: "1.7",
            change: "-27.08%",
        };
        let flat = Metric {
            value: "0%",
            change: "no change",
        };
        assert!(up.is_positive());
        assert!(!down.is_positive());
        assert!(!flat.is_positive());
    }

    #[test]
    fn test_stores_are_populated() {
        assert!(!JOBS.is_empty());
        assert!(!CERTIFICATIONS.is_empty());
        assert!(!SKILL_GROUPS.is_empty());
        assert!(!SERVICES.is_empty());
        assert!(!SOCIAL_LINKS.is_empty());
        for group in &SKILL_GROUPS {
            assert!(!group.skills.is_empty(), "{}", group.label);
        }
    }

    #[test]
    fn test_optional_fields_are_representable() {
        // some draft projects ship without imagery or links; cards render
        // placeholders for those instead of failing
        assert!(WEB_PROJECTS.iter().any(|p| p.image.is_none()));
        assert!(WEB_PROJECTS.iter().any(|p| p.link.is_none()));
        assert!(WEB_PROJECTS.iter().any(|p| p.image.is_some()));
    }
}
