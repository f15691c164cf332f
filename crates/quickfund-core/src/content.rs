//! Static landing-page copy.
//!
//! Headings that have translation keys (hero title, nav labels) live in
//! [`crate::i18n`]; everything here is English-only marketing copy.

/// A highlighted figure with its caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    Received(&'static str),
    Donated(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub message: &'static str,
    pub contribution: Contribution,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    /// Long-form text shown in the feature detail overlay.
    pub details: &'static str,
}

/// Title and one-line description (steps, benefits, extra features).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub title: &'static str,
    pub note: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const BRAND: &str = "QuickFund";
pub const HERO_TAGLINE: &str = "Fast, Secure, Verified";
pub const HERO_BADGES: &[&str] = &["AI Verified", "10k+ Helped", "24/7 Support"];
pub const HERO_STATS: &[Stat] = &[
    Stat {
        value: "₹50L+",
        label: "Funds Disbursed",
    },
    Stat {
        value: "10,000+",
        label: "Lives Impacted",
    },
    Stat {
        value: "5,000+",
        label: "Active Donors",
    },
];
pub const HERO_HIGHLIGHT: Stat = Stat {
    value: "₹25,000",
    label: "Average Help",
};

pub const MISSION_TITLE: &str = "Our Mission";
pub const MISSION_TEXT: &str = "To bridge the gap between those in urgent need of financial \
assistance and compassionate individuals willing to help, using AI-powered verification to \
ensure transparency and trust.";
pub const IMPACT_STATS: &[Stat] = &[
    Stat {
        value: "₹50L+",
        label: "Total Funds Raised",
    },
    Stat {
        value: "10,000+",
        label: "People Helped",
    },
    Stat {
        value: "5,000+",
        label: "Active Donors",
    },
    Stat {
        value: "98%",
        label: "Success Rate",
    },
];

pub const TESTIMONIALS_TITLE: &str = "What Our Community Says";
pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai, Maharashtra",
        message: "QuickFund helped me get emergency medical funding for my father's surgery \
within 24 hours. The AI verification made the process so smooth.",
        contribution: Contribution::Received("₹2,50,000"),
        rating: 5,
    },
    Testimonial {
        name: "Rajesh Kumar",
        location: "Bangalore, Karnataka",
        message: "As a donor, I love how transparent the platform is. I can see exactly where \
my money is going and track the impact.",
        contribution: Contribution::Donated("₹1,50,000"),
        rating: 5,
    },
    Testimonial {
        name: "Anitha Reddy",
        location: "Hyderabad, Telangana",
        message: "The platform's AI verification gave me confidence that my donation was going \
to genuine cases. Excellent work!",
        contribution: Contribution::Donated("₹75,000"),
        rating: 5,
    },
];

pub const FEATURES_TITLE: &str = "Powerful Features for Maximum Impact";
pub const FEATURES_SUBTITLE: &str = "Our platform combines cutting-edge technology with human \
compassion to create the most trusted emergency funding ecosystem.";
pub const FEATURES: &[Feature] = &[
    Feature {
        title: "AI-Powered Verification",
        description: "Advanced AI algorithms verify requests within minutes, detecting fraud \
and ensuring authenticity.",
        details: "Our proprietary AI system analyzes documents, cross-references data, and \
provides risk scores to ensure only genuine requests are approved. This reduces fraud by 95% \
and increases donor confidence.",
    },
    Feature {
        title: "Instant Fund Transfer",
        description: "Get verified requests funded within hours through our streamlined \
donation process.",
        details: "Once verified, funds are released immediately through UPI, bank transfers, or \
digital wallets. Our payment infrastructure ensures 99.9% uptime and secure transactions.",
    },
    Feature {
        title: "Transparent Impact Tracking",
        description: "Track your donations and see the real-world impact of your \
contributions.",
        details: "Follow your donations from start to finish with photo updates, impact \
reports, and direct communication with beneficiaries. See exactly how your money made a \
difference.",
    },
    Feature {
        title: "Smart Analytics Dashboard",
        description: "Comprehensive analytics for donors, recipients, and organizations to \
track performance.",
        details: "Advanced dashboards with real-time metrics, trend analysis, and predictive \
insights help optimize funding decisions and maximize impact.",
    },
];
pub const EXTRA_FEATURES: &[Card] = &[
    Card {
        title: "24/7 Support",
        description: "Round-the-clock assistance",
    },
    Card {
        title: "Multi-language",
        description: "Support in 4+ Indian languages",
    },
    Card {
        title: "Bank-grade Security",
        description: "Enterprise-level encryption",
    },
    Card {
        title: "Mobile Optimized",
        description: "Works seamlessly on all devices",
    },
];

pub const STEPS_TITLE: &str = "How QuickFund Works";
pub const STEPS_SUBTITLE: &str = "Our streamlined process ensures you get the help you need \
quickly and securely, with full transparency for all stakeholders.";
pub const STEPS: &[Card] = &[
    Card {
        title: "Submit Request",
        description: "Create your emergency funding request with required documents and \
details.",
    },
    Card {
        title: "AI Verification",
        description: "Our AI system verifies your request and documents within minutes.",
    },
    Card {
        title: "Community Support",
        description: "Compassionate donors review and contribute to verified requests.",
    },
    Card {
        title: "Instant Disbursement",
        description: "Funds are transferred directly to your account once the target is met.",
    },
];
pub const STEP_STATS: &[Stat] = &[
    Stat {
        value: "< 5 mins",
        label: "Average Verification Time",
    },
    Stat {
        value: "2-6 hours",
        label: "Funding to Disbursement",
    },
    Stat {
        value: "98.5%",
        label: "Successful Fund Release",
    },
];

pub const BENEFITS_TITLE: &str = "Why Choose QuickFund?";
pub const BENEFITS_SUBTITLE: &str = "Experience the most advanced, secure, and user-friendly \
emergency funding platform designed for the modern world.";
pub const BENEFITS: &[Card] = &[
    Card {
        title: "Lightning Fast",
        description: "Get verified and funded within hours, not days or weeks.",
    },
    Card {
        title: "AI-Verified Security",
        description: "95% fraud reduction through advanced AI verification systems.",
    },
    Card {
        title: "Multi-Language Support",
        description: "Available in English, Hindi, Telugu, and Tamil for wider accessibility.",
    },
    Card {
        title: "Transparent Impact",
        description: "Track your donations and see real-time impact with detailed reports.",
    },
    Card {
        title: "Zero Platform Fees",
        description: "100% of your donation goes directly to those in need.",
    },
    Card {
        title: "Mobile Optimized",
        description: "Seamlessly works on all devices with responsive design.",
    },
    Card {
        title: "Community Driven",
        description: "Join a community of 10,000+ verified donors and recipients.",
    },
    Card {
        title: "Smart Analytics",
        description: "Data-driven insights help optimize funding and maximize impact.",
    },
];
pub const BENEFITS_BANNER_TITLE: &str = "Join the Revolution in Emergency Funding";
pub const BENEFITS_BANNER_TEXT: &str = "Be part of a platform that has helped over 10,000 \
people in crisis situations with ₹50+ crores in verified emergency funding.";
pub const BENEFITS_BANNER_STATS: &[Stat] = &[
    Stat {
        value: "24/7",
        label: "Customer Support",
    },
    Stat {
        value: "99.9%",
        label: "Platform Uptime",
    },
    Stat {
        value: "Bank-Grade",
        label: "Security Standards",
    },
];

pub const CONTACT_TITLE: &str = "Get in Touch";
pub const CONTACT_SUBTITLE: &str = "Have questions or need support? We're here to help you \
24/7. Reach out to our dedicated team for immediate assistance.";
pub const SUPPORT_EMAIL: &str = "support@quickfund.com";
pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        title: "Email Support",
        note: "Get help within 2 hours",
        value: SUPPORT_EMAIL,
    },
    ContactChannel {
        title: "Emergency Helpline",
        note: "24/7 emergency support",
        value: "+91 88001 23456",
    },
    ContactChannel {
        title: "Live Chat",
        note: "Instant support available",
        value: "Start Chat →",
    },
    ContactChannel {
        title: "Office Address",
        note: "123 Tech Park, Cyber City",
        value: "Hyderabad, Telangana 500081, India",
    },
];
pub const CONTACT_FORM_TITLE: &str = "Send us a Message";
pub const CONTACT_RESPONSE_NOTE: &str =
    "We typically respond within 2 hours during business hours.";
pub const CONTACT_SENT_MESSAGE: &str = "Message sent! We'll get back to you soon.";
pub const FAQS: &[Faq] = &[
    Faq {
        question: "How quickly can I get verified?",
        answer: "Our AI system typically verifies requests within 5 minutes.",
    },
    Faq {
        question: "Is there any platform fee?",
        answer: "No, 100% of donations go directly to verified recipients.",
    },
    Faq {
        question: "How secure is my data?",
        answer: "We use bank-grade encryption and security protocols.",
    },
];

pub const FOOTER: &str = "© QuickFund · Verified emergency funding for everyone";

/// `mailto:` link for the support address.
pub fn support_mailto() -> String {
    format!("mailto:{SUPPORT_EMAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testimonials_are_five_star() {
        assert_eq!(TESTIMONIALS.len(), 3);
        assert!(TESTIMONIALS.iter().all(|t| t.rating == 5));
    }

    #[test]
    fn test_section_card_counts() {
        assert_eq!(FEATURES.len(), 4);
        assert_eq!(EXTRA_FEATURES.len(), 4);
        assert_eq!(STEPS.len(), 4);
        assert_eq!(BENEFITS.len(), 8);
        assert_eq!(FAQS.len(), 3);
    }

    #[test]
    fn test_support_mailto() {
        assert_eq!(support_mailto(), "mailto:support@quickfund.com");
    }
}
