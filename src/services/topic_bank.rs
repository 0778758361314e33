use crate::models::domain::TopicEntry;

pub const DEFAULT_TOPIC: &str = "mixed";

const POLITICAL_SCIENCE: &[TopicEntry] = &[
    TopicEntry {
        title: "Hegemony in Gramsci",
        prompt_topic: "Critically analyze the concept of hegemony in Antonio Gramsci’s Prison Notebooks.",
    },
    TopicEntry {
        title: "Sovereignty: Bodin & Hobbes",
        prompt_topic: "Compare Jean Bodin and Thomas Hobbes on sovereignty.",
    },
];

const SSC_HISTORY: &[TopicEntry] = &[TopicEntry {
    title: "Revolt of 1857",
    prompt_topic: "Discuss causes and consequences of the Revolt of 1857.",
}];

const HISTORY: &[TopicEntry] = &[TopicEntry {
    title: "Ashoka and Dhamma",
    prompt_topic: "Explain Ashoka’s Dhamma policy and its impact.",
}];

const WORLD_HISTORY: &[TopicEntry] = &[TopicEntry {
    title: "Russian Revolution 1917",
    prompt_topic: "Analyze causes and consequences of the Russian Revolution of 1917.",
}];

const LANGUAGES: &[TopicEntry] = &[TopicEntry {
    title: "Kumaran Asan",
    prompt_topic: "Discuss Kumaran Asan’s role in Malayalam modern poetry.",
}];

const MIXED: &[TopicEntry] = &[TopicEntry {
    title: "Comparative Politics",
    prompt_topic: "Trace transformation of Comparative Politics after WWII.",
}];

const BANK: &[(&str, &[TopicEntry])] = &[
    ("political_science", POLITICAL_SCIENCE),
    ("ssc_history", SSC_HISTORY),
    ("history", HISTORY),
    ("world_history", WORLD_HISTORY),
    ("languages", LANGUAGES),
    (DEFAULT_TOPIC, MIXED),
];

/// Known topic ids, in bank order.
pub fn topics() -> Vec<&'static str> {
    BANK.iter().map(|(id, _)| *id).collect()
}

pub fn is_known_topic(topic_id: &str) -> bool {
    BANK.iter().any(|(id, _)| *id == topic_id)
}

fn group(topic_id: &str) -> &'static [TopicEntry] {
    BANK.iter()
        .find(|(id, _)| *id == topic_id)
        .map(|(_, entries)| *entries)
        .unwrap_or(MIXED)
}

/// Picks `bank[topic_id][seed % len]`, falling back to the default group for
/// unknown ids.
pub fn pick(topic_id: &str, seed: u64) -> &'static TopicEntry {
    let entries = group(topic_id);
    // Every group is non-empty, so the modulo cannot divide by zero.
    let index = (seed % entries.len() as u64) as usize;
    &entries[index]
}
