//! Copy shown on the welcome page.

use crate::components::icons::Icon;

pub const SITE_NAME: &str = "The Community";
pub const SITE_TAGLINE: &str = "Tourism Welcome Center";

pub struct Card {
    pub icon: Icon,
    pub title: &'static str,
    pub desc: &'static str,
    pub delay: &'static str,
}

pub struct Rule {
    pub num: u8,
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct Entry {
    pub title: &'static str,
    pub desc: &'static str,
}

pub const HERO_BADGE: &str = "Established for Order and Safety";
pub const HERO_INTRO: &str = "So basically, our community is super safe and organized. Everyone follows the same rules \
    and does their assigned jobs, which keeps everything running smoothly. It's pretty efficient \
    when you think about it.";

pub const PRINCIPLES: [Card; 3] = [
    Card {
        icon: Icon::Shield,
        title: "Safety First",
        desc: "Nobody gets hurt here. There's no conflict or violence, and everyone always has what they need. You don't have to worry about anything bad happening because everything is controlled.",
        delay: "delay-100",
    },
    Card {
        icon: Icon::Users,
        title: "Sameness",
        desc: "Everyone is treated equally, which eliminates jealousy and competition. The Committee of Elders makes all major decisions, so citizens don't have to stress about complex choices.",
        delay: "delay-300",
    },
    Card {
        icon: Icon::BookOpen,
        title: "Perfect Organization",
        desc: "Your entire life path is planned from birth to Release. Everyone gets assigned a job based on their abilities, and you always know exactly what you're supposed to be doing.",
        delay: "delay-500",
    },
];

pub const DIFFERENCE_TEXT: &str = "We've eliminated pain, suffering, and basically all uncertainty. Everyone's content \
    because life is structured and predictable. When you don't have to constantly make \
    difficult decisions, everything becomes simpler and more peaceful.";

pub const DIFFERENCES: [&str; 4] = [
    "Precise language is required to prevent misunderstandings",
    "Climate control ensures perfect weather conditions",
    "The Elders observe your development and assign the ideal job",
    "Equal distribution means no one feels disadvantaged",
];

pub const RULES: [Rule; 6] = [
    Rule {
        num: 1,
        title: "Precise Language",
        desc: "You must say exactly what you mean\u{2014}no exaggerations or lies. If you misspeak, you're required to apologize immediately and clarify your statement.",
    },
    Rule {
        num: 2,
        title: "Share Feelings",
        desc: "Every evening, families discuss their feelings from the day. This helps identify any issues that need addressing and maintains emotional stability.",
    },
    Rule {
        num: 3,
        title: "No Personal Property",
        desc: "You only receive items distributed by the community. Bicycles are assigned by age group. Nothing from outside is permitted.",
    },
    Rule {
        num: 4,
        title: "Dream Telling",
        desc: "Each morning, you share your dreams with your family unit. If you experience Stirrings, you must report them to receive appropriate medication.",
    },
    Rule {
        num: 5,
        title: "Respect Protocol",
        desc: "Always maintain politeness and use proper titles. Rudeness requires a public apology, and all infractions are recorded permanently.",
    },
    Rule {
        num: 6,
        title: "Strict Scheduling",
        desc: "Everything operates on schedule\u{2014}meals, volunteer hours, ceremonies. Being late necessitates a formal apology and explanation.",
    },
];

pub const VIOLATIONS_TEXT: &str = "Three major infractions result in Release. The Committee of Elders maintains \
    detailed records of all violations. Compliance with regulations is essential \
    for maintaining the community's peace and organizational structure.";

pub const SCHEDULE: [Card; 4] = [
    Card {
        icon: Icon::Clock,
        title: "Morning (6:30 - 8:00)",
        desc: "Morning chimes wake everyone simultaneously. You share dreams with your family unit and take required medication. Breakfast is served at exactly 7:00. School or work begins at 8:00.",
        delay: "delay-100",
    },
    Card {
        icon: Icon::BookOpen,
        title: "School & Work (8:00 - 4:00)",
        desc: "Children attend school organized by age groups. Adults perform their assigned occupations. Midday meal is served at noon for all citizens.",
        delay: "delay-200",
    },
    Card {
        icon: Icon::Users,
        title: "Volunteer Hours (4:00 - 6:00)",
        desc: "All children complete volunteer service. During this period, the Elders observe to determine appropriate job assignments for the Ceremony of Twelve.",
        delay: "delay-300",
    },
    Card {
        icon: Icon::Home,
        title: "Evening (6:00 - 9:00)",
        desc: "Family units gather for dinner at 6:30. Afterward, everyone participates in the evening ritual of sharing feelings. Recreational time until 9:00, then lights out at 9:30.",
        delay: "delay-400",
    },
];

pub const CEREMONIES: [Entry; 4] = [
    Entry { title: "Naming", desc: "Infants receive names and family assignments" },
    Entry { title: "Ceremony of Twelve", desc: "Job assignments are announced" },
    Entry { title: "Matching", desc: "The Elders select compatible spouses" },
    Entry { title: "Release", desc: "Elderly citizens complete their life cycle" },
];

pub const FACILITIES: [Entry; 4] = [
    Entry { title: "Nurturing Center", desc: "Infant care and development" },
    Entry { title: "House of the Old", desc: "Elder citizen residence" },
    Entry { title: "Bicycle Repair", desc: "Maintains community transportation" },
    Entry { title: "Food Distribution", desc: "Manages nutritional allocation" },
];

pub const VISITOR_INTRO: &str = "Tours are available if you'd like to observe our organizational systems. \
    Contact the Committee of Elders to schedule your visit.";

/// `desc` holds the contact detail itself.
pub const VISITOR_CARDS: [Card; 3] = [
    Card { icon: Icon::Building, title: "Location", desc: "Central Plaza, Building 7", delay: "delay-100" },
    Card { icon: Icon::Clock, title: "Hours", desc: "8:00 AM - 4:00 PM Daily", delay: "delay-300" },
    Card { icon: Icon::Users, title: "Inquiries", desc: "Contact any Elder", delay: "delay-500" },
];

pub const FOOTER_BLURB: &str =
    "Experience perfect order and safety in our organized society where Sameness ensures harmony for all.";

pub const FOOTER_COMMUNITY: [&str; 4] = [
    "Central Plaza, Building 7",
    "Hours: 8:00 AM - 4:00 PM",
    "Contact: Committee of Elders",
    "Tours Available Daily",
];

pub const FOOTER_PRINCIPLES: [(Icon, &str); 3] = [
    (Icon::Shield, "Safety & Security"),
    (Icon::Users, "Perfect Equality"),
    (Icon::BookOpen, "Structured Organization"),
];

pub const FOOTER_NOTES: [&str; 2] = ["Precision Language Required", "All Rights Reserved"];

/// Reveal tags for the animated blocks.
pub mod tags {
    pub const ABOUT_HEADER: &str = "about-header";
    pub const HIGHLIGHT_BOX: &str = "highlight-box";
    pub const RULES_HEADER: &str = "rules-header";
    pub const WARNING_BOX: &str = "warning-box";
    pub const LIFE_HEADER: &str = "life-header";
    pub const CEREMONIES: &str = "ceremonies";
    pub const BUILDINGS: &str = "buildings";
    pub const CONTACT_HEADER: &str = "contact-header";
    pub const FOOTER: &str = "footer";

    /// Tag of the `idx`th item in a repeated group, e.g. `card-0`.
    pub fn indexed(prefix: &str, idx: usize) -> String {
        format!("{prefix}-{idx}")
    }
}

/// Stagger class for the `idx`th rule card.
pub fn rule_delay(idx: usize) -> String {
    format!("delay-{}", idx * 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Every tag the page renders, in document order.
    fn animated_tags() -> Vec<String> {
        let mut all = vec![tags::ABOUT_HEADER.to_string()];
        all.extend((0..PRINCIPLES.len()).map(|i| tags::indexed("card", i)));
        all.push(tags::HIGHLIGHT_BOX.to_string());
        all.push(tags::RULES_HEADER.to_string());
        all.extend((0..RULES.len()).map(|i| tags::indexed("rule", i)));
        all.push(tags::WARNING_BOX.to_string());
        all.push(tags::LIFE_HEADER.to_string());
        all.extend((0..SCHEDULE.len()).map(|i| tags::indexed("schedule", i)));
        all.push(tags::CEREMONIES.to_string());
        all.push(tags::BUILDINGS.to_string());
        all.push(tags::CONTACT_HEADER.to_string());
        all.extend((0..VISITOR_CARDS.len()).map(|i| tags::indexed("contact", i)));
        all.push(tags::FOOTER.to_string());
        all
    }

    #[test]
    fn animated_tags_are_unique() {
        let tags = animated_tags();
        let unique: HashSet<&String> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
        assert_eq!(tags.len(), 25);
    }

    #[test]
    fn indexed_tags_follow_group_prefix() {
        let tags = animated_tags();
        for expected in ["card-2", "rule-5", "schedule-3", "contact-0"] {
            assert!(tags.iter().any(|t| t == expected), "missing {expected}");
        }
        assert!(!tags.iter().any(|t| t == "rule-6"));
    }

    #[test]
    fn rule_cards_stagger_in_hundred_ms_steps() {
        let delays: Vec<String> = (0..RULES.len()).map(rule_delay).collect();
        assert_eq!(delays, ["delay-0", "delay-100", "delay-200", "delay-300", "delay-400", "delay-500"]);
    }
}
