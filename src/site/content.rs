//! Static page copy
//!
//! Everything the page shows is hard-coded here. Nothing is loaded at runtime
//! except the background images (see `crate::assets`).

pub const BRAND: &str = "ENDofDAIZY";

// ─────────────────────────────────────────────────────────────────────────────
// Hero
// ─────────────────────────────────────────────────────────────────────────────

pub const HEADLINE: &str = "IT'S YOUR WORLD";
pub const SUBHEADLINE: &str = "WE'RE JUST BUILDING IT";
pub const LEARN_MORE: &str = "LEARN MORE";

// ─────────────────────────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────────────────────────

pub const NAV_LINKS: [&str; 3] = ["WORK", "SERVICES", "TESTIMONIALS"];
pub const START_A_PROJECT: &str = "START A PROJECT";

// ─────────────────────────────────────────────────────────────────────────────
// Portfolio
// ─────────────────────────────────────────────────────────────────────────────

/// What fills a project card's media area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    /// Looping video; gets the tall media area
    Video,
    Image,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub services: &'static [&'static str],
    pub category: &'static str,
    pub media: Media,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        title: "DREAMS VISUALIZED IN-HOUSE",
        description: "4SITE.PRO - Revolutionary tech platform revolutionizing digital experiences. \
                      Complete tech ecosystem with advanced infrastructure, scalable solutions, \
                      and cutting-edge development.",
        services: &[
            "Full-Stack Development",
            "Cloud Infrastructure",
            "Brand Identity",
            "Bespoke Video Sequence",
            "Tech Consulting",
        ],
        category: "TECH • INNOVATION",
        media: Media::Video,
    },
    Project {
        title: "Smart Contract Security Audits",
        description: "Composable Security - Redesigning a Web3 security audit platform. \
                      Website Design, Branding, Copywriting.",
        services: &["Website Design", "Branding", "Copywriting"],
        category: "WEB3 & CYBERSECURITY",
        media: Media::Image,
    },
    Project {
        title: "AI FRAMEWORK TO TAKE YOU ANYWHERE",
        description: "AI & Tech Landing Pages - Exploring The Visual Identities. \
                      Website Design, Copywriting, Branding (Concept Work).",
        services: &["Website Design", "Copywriting", "Branding"],
        category: "AI • TECH",
        media: Media::Image,
    },
    Project {
        title: "Why Protein",
        description: "Bodypeak - Visual redesign and CRO for a supplement eCommerce site. \
                      E-commerce Design, Branding, CRO.",
        services: &["E-commerce Design", "Branding", "CRO"],
        category: "HEALTH & SUPPLEMENTS",
        media: Media::Image,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Services
// ─────────────────────────────────────────────────────────────────────────────

/// Dot color next to a service column heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Blue,
    Electric,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceColumn {
    pub heading: &'static str,
    pub accent: Accent,
    pub items: &'static [&'static str],
}

pub const SERVICES_HEADLINE: &str = "From design to development I dream and deliver with speed \
                                     and the utmost attention to detail";

pub const SERVICES: [ServiceColumn; 3] = [
    ServiceColumn {
        heading: "DESIGN",
        accent: Accent::Green,
        items: &["Landing Pages", "Websites", "Product Design", "Branding"],
    },
    ServiceColumn {
        heading: "DEVELOPMENT",
        accent: Accent::Blue,
        items: &["Framer", "Webflow"],
    },
    ServiceColumn {
        heading: "WORKING WITH",
        accent: Accent::Electric,
        items: &["AI", "Web3", "Tech", "Sports", "Health"],
    },
];

pub const ABOUT: [&str; 2] = [
    "I'm a full-stack senior designer who makes the web work for you. With over 15 years of \
     experience working alongside founders, I know not just about looks - it's about results.",
    "From concept to launch, I handle every step of the process, ensuring smooth and \
     hassle-free so you can focus on your business.",
];

// ─────────────────────────────────────────────────────────────────────────────
// Testimonials
// ─────────────────────────────────────────────────────────────────────────────

pub const TESTIMONIALS_HEADLINE: &str = "Trusted by founders";

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Michael Owens",
        role: "Founder at Fribo Studio",
        text: "Working with ENDofDAIZY was a fantastic experience. He has an incredible ability \
               to turn ideas into reality, making the process very enjoyable.",
    },
    Testimonial {
        name: "Ben Smith",
        role: "Founder at Live Aura",
        text: "ENDofDAIZY is as much an artist as he is a web designer. He was able to \
               communicate authority, attention to detail, and clarity.",
    },
    Testimonial {
        name: "Damian Schnell",
        role: "Founder at WeRoadyou.pl",
        text: "I always work with professionals and ENDofDAIZY is one of the best designers \
               I've ever met.",
    },
    Testimonial {
        name: "Fabian Schmidt",
        role: "Senior PM Engineer at Xelon",
        text: "Working with ENDofDAIZY was a pleasure. His communication and UI/UX skills are \
               stellar.",
    },
    Testimonial {
        name: "Piotr Drazek",
        role: "Physiotherapist",
        text: "ENDofDAIZY created a website for me that significantly increased my ability to \
               attract more patients.",
    },
    Testimonial {
        name: "Michal Walczak",
        role: "Founder at FitlyCode",
        text: "I highly recommend ENDofDAIZY for his exceptional expertise in UI/UX design.",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Footer and contact modal
// ─────────────────────────────────────────────────────────────────────────────

pub const FOOTER_HEADLINE: &str = "Ready to start your project?";
pub const GET_STARTED: &str = "GET STARTED";
pub const COPYRIGHT: &str = "© 2025 ENDofDAIZY. All rights reserved.";

pub const MODAL_TITLE: &str = "Let's work together";
pub const MODAL_INTRO: &str =
    "Tell me about your project and I'll get back to you within 24 hours.";
pub const MODAL_CANCEL: &str = "Cancel";
pub const MODAL_SEND: &str = "Send Message";
pub const MODAL_SENT_TITLE: &str = "Message sent!";
pub const MODAL_SENT_BODY: &str = "I'll get back to you within 24 hours.";
