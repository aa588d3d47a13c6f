use crate::models::chat::{ChatReply, KnowledgeEntry};

/// Reply used when no entry matches; hands over to a person.
pub const FALLBACK_TEMPLATE: &str = "Thanks {name}, that's a great question for one of our licensed \
electricians. Leave your phone number or email and someone from the team will get back to you shortly.";

/// Name used in replies when the visitor hasn't given one.
const ANONYMOUS_NAME: &str = "there";

pub static KNOWLEDGE_BASE: &[KnowledgeEntry] = &[
    KnowledgeEntry {
        topic: "solar-pricing",
        keywords: &["solar", "panel", "6.6", "10kw", "13kw", "cost", "price", "how much", "system size"],
        template: "Great question {name}! A quality 6.6kW solar system typically costs between $5,500 and \
$7,500 installed, after the government rebate. 10kW systems start around $8,000 and 13kW around $10,500. \
Try our solar savings calculator for an estimate based on your bill, or ask for a free on-site quote.",
    },
    KnowledgeEntry {
        topic: "batteries",
        keywords: &["battery", "batteries", "powerwall", "storage", "store", "backup", "night"],
        template: "Hi {name}! A home battery lets you use your daytime solar at night, lifting how much of \
your solar you use yourself from around a third to around 80%. Batteries from 10kWh to 20kWh typically cost \
$9,000 to $21,000 installed. We can size one to your usage in a free consultation.",
    },
    KnowledgeEntry {
        topic: "rebates",
        keywords: &["rebate", "stc", "government", "incentive", "subsid", "discount"],
        template: "Good news {name}: the federal STC rebate is applied at the time of install, so every \
price we quote already has it taken off. We'll also check whether any state battery incentives apply to you.",
    },
    KnowledgeEntry {
        topic: "ev-chargers",
        keywords: &["ev charger", "electric vehicle", "car charger", "charging", "wall charger", "tesla"],
        template: "Absolutely {name}, we install home EV chargers for all major brands, including dedicated \
circuits and load management so your switchboard stays safe. Pairing a charger with solar means you can \
drive on sunshine.",
    },
    KnowledgeEntry {
        topic: "electrical",
        keywords: &["switchboard", "wiring", "rewire", "power point", "powerpoint", "lighting", "lights", "safety switch", "electrician", "upgrade"],
        template: "Hi {name}, our licensed electricians handle switchboard upgrades, safety switches, \
rewiring, lighting and new power points. Let us know what you need and we'll arrange a time that suits.",
    },
    KnowledgeEntry {
        topic: "emergency",
        keywords: &["emergency", "urgent", "no power", "blackout", "sparking", "burning smell", "tripping"],
        template: "{name}, if you can smell burning or see sparks, switch off at the main switch and keep \
clear. Our emergency electricians are on call 24/7 so please phone us straight away for urgent help.",
    },
    KnowledgeEntry {
        topic: "service-areas",
        keywords: &["area", "suburb", "service", "near me", "location", "travel"],
        template: "We cover the metro area and surrounding suburbs, {name}. Tell us your suburb and we'll \
confirm availability and the next free appointment.",
    },
    KnowledgeEntry {
        topic: "quotes",
        keywords: &["quote", "book", "appointment", "inspection", "visit", "consultation"],
        template: "Happy to help, {name}! Quotes and on-site assessments are free with no obligation. \
Leave your phone number or email and we'll be in touch to book a time.",
    },
    KnowledgeEntry {
        topic: "warranty",
        keywords: &["warranty", "guarantee", "workmanship", "after sales"],
        template: "{name}, panels carry a 25-year performance warranty, inverters 5 to 10 years, and all our \
installations come with a 10-year workmanship guarantee.",
    },
];

fn render(template: &str, name: &str) -> String {
    let name = name.trim();
    let name = if name.is_empty() { ANONYMOUS_NAME } else { name };
    template.replace("{name}", name)
}

fn score(entry: &KnowledgeEntry, query: &str) -> usize {
    entry.keywords.iter().filter(|k| query.contains(*k)).count()
}

/// Highest-scoring entry for the query; the earliest entry wins ties.
pub fn best_match(query: &str) -> Option<&'static KnowledgeEntry> {
    let query = query.to_lowercase();
    let mut best: Option<&'static KnowledgeEntry> = None;
    let mut best_score = 0;
    for entry in KNOWLEDGE_BASE {
        let s = score(entry, &query);
        if s > best_score {
            best_score = s;
            best = Some(entry);
        }
    }
    best
}

pub fn find_response(query: &str, name: &str) -> String {
    match best_match(query) {
        Some(entry) => render(entry.template, name),
        None => render(FALLBACK_TEMPLATE, name),
    }
}

pub fn reply(query: &str, name: &str) -> ChatReply {
    let entry = best_match(query);
    ChatReply {
        reply: render(entry.map_or(FALLBACK_TEMPLATE, |e| e.template), name),
        topic: entry.map(|e| e.topic.to_string()),
    }
}
