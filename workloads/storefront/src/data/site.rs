//! Navigation, footer and help page content.

/// A navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Primary navigation.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "New & Featured",
        href: "/new",
    },
    NavItem {
        label: "Men",
        href: "/men",
    },
    NavItem {
        label: "Women",
        href: "/women",
    },
    NavItem {
        label: "Kids",
        href: "/kids",
    },
    NavItem {
        label: "Jordan",
        href: "/jordan",
    },
];

/// Hero banner copy and image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub tagline: &'static str,
    pub headline: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub image_width: u32,
    pub image_height: u32,
}

pub const HERO: HeroContent = HeroContent {
    tagline: "Only one way to find out.",
    headline: "JUST DO IT.",
    image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=1200&h=600&fit=crop",
    image_alt: "Hero Background - Leveling Shoes",
    image_width: 1200,
    image_height: 600,
};

/// A topic card on the help page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTopic {
    pub title: &'static str,
    pub description: &'static str,
}

pub const HELP_TOPICS: &[HelpTopic] = &[
    HelpTopic {
        title: "Shipping & Delivery",
        description: "Learn about our shipping options and delivery times",
    },
    HelpTopic {
        title: "Returns & Exchanges",
        description: "Easy returns within 30 days of purchase",
    },
    HelpTopic {
        title: "Product Care",
        description: "Tips on how to care for your Leveling products",
    },
    HelpTopic {
        title: "Account Issues",
        description: "Help with login, password, and account settings",
    },
    HelpTopic {
        title: "Size Guide",
        description: "Find your perfect fit with our size charts",
    },
    HelpTopic {
        title: "Track Your Order",
        description: "Monitor your purchase status in real-time",
    },
];

/// A way to reach support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📞",
        title: "Phone Support",
        lines: &["1-800-LEVELING", "Available 24/7"],
    },
    ContactChannel {
        icon: "💬",
        title: "Live Chat",
        lines: &["Chat with our support team", "Monday - Sunday, 9am - 9pm ET"],
    },
    ContactChannel {
        icon: "📧",
        title: "Email Support",
        lines: &["support@leveling.com", "Response time: 24 hours"],
    },
];

/// Footer legal links.
pub const FOOTER_LEGAL: &[&str] = &["Privacy Policy", "Terms of Use"];

/// Footer social links as (title, href).
pub const FOOTER_SOCIAL: &[(&str, &str)] = &[("Facebook", "#"), ("X", "#"), ("Instagram", "#")];

pub const COPYRIGHT: &str = "&copy; 2024 Leveling, Inc. All rights reserved.";

pub const ORDERS_NOTICE: &str = "For orders placed before 30 January 2026, you can track and manage them";
