//! Built-in attribute text
//!
//! Each category contributes at most one attribute per record. The strings
//! are content, not logic; swap the catalog to change the jokes.

/// Labels drawn for the classification stamp
pub const CLASSIFICATIONS: &[&str] = &[
    "Cold Case",
    "Endangered",
    "Unsolved",
    "Reopened",
    "Top Secret",
    "Do not Approach",
];

/// One attribute label with the values it may take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

/// An immutable set of attribute categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn new(categories: &'static [Category]) -> Self {
        Self { categories }
    }

    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Categories that can actually be sampled
    pub fn len(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| !c.values.is_empty())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every (category, value) pair, in catalog order
    pub fn pairs(self) -> impl Iterator<Item = (&'static str, &'static str)> {
        self.categories
            .iter()
            .flat_map(|c| c.values.iter().map(move |v| (c.name, *v)))
    }
}

static BUILTIN: &[Category] = &[
    Category {
        name: "Last Seen",
        values: &[
            "Declaring “one more drink” an hour ago",
            "Convincing others to take shoots",
            "Guarding the snack table with dedication",
            "At the bar, Saying “I'll just have water (a known lie)",
            "Chasing a pigeon “for research”",
            "Emotionally attached to a houseplant",
            "Whispering “it’s fine” to a clearly not fine situation",
            "Texting their ex “by accident”",
            "Making unrealistic life plans at 2 AM.",
            "Stalking their crush’s Instagram",
        ],
    },
    Category {
        name: "Last Words",
        values: &[
            "“One more drink won't hurt.”",
            "“I'll be right back.”",
            "“Just guarding the snacks.”",
            "“I swear I will have water now.”",
            "“This shot tastes like bad decisions.”",
            "“Let’s just mix everything together.”",
            "“What could possibly go wrong?”",
            "“This is my song!”",
            "“Why is the floor moving?”",
            "“I can totally handle another round.”",
            "“I just want a snack, not another drink.”",
            "“I’m just gonna say hi real quick.”",
            "“I think I offended someone but it’s fine.”",
            "“I’m not drunk, I’m enlightened.”",
            "“I thought this was the bathroom!”",
            "“I regret nothing!”",
            "“If I disappear, tell my story.”",
        ],
    },
    Category {
        name: "Height",
        values: &[
            "Fun-sized",
            "Emotionally tall",
            "Unresonable confident for their size",
        ],
    },
    Category {
        name: "Age",
        values: &[
            "Ageless",
            "Eternally 21",
            "Perpetually 25-something",
            "Eternal",
            "Reclassified as vintage",
            "Emotionally 10",
            "Forever young",
        ],
    },
    Category {
        name: "Eyes",
        values: &[
            "Deadly but charming",
            "Rolling since birth",
            "Powered by cahos coffein and alcohol",
            "Magnetic",
            "Beautiful but tired",
        ],
    },
    Category {
        name: "Voice",
        values: &[
            "Audible chaos",
            "Whispering secrets",
            "Pure sarcasm",
            "90% laugh 10% apology",
        ],
    },
    Category {
        name: "Mood",
        values: &[
            "Approachable in theory,dangerous in practice",
            "Overly enthusiastic",
            "Unpredictable",
            "Suspiciously friendly",
            "Emiting main-character energy",
        ],
    },
    Category {
        name: "Feature",
        values: &["Runs on unstable code", "Frequently distracted by snacks", ""],
    },
    Category {
        name: "Classification",
        values: &[
            "Chaos seeker",
            "Snack driven lifeform",
            "Attention magnet",
            "Professional overthinker",
            "Chronic people pleaser",
            "Existentialist",
            "Serial napper",
            "Certified introvert",
            "Meme enthusiast",
            "Occasional philosopher",
            "Full-time daydreamer",
        ],
    },
    Category {
        name: "Weakness",
        values: &[
            "Free alcohol",
            "Snacks",
            "Good music",
            "Cute animals",
            "Compliments",
            "Gin Tonic",
            "Songs from 2010",
            "Any form of validation",
            "Mornings",
            "Work",
            "Highly distractible by shiny objects",
            "Reality",
        ],
    },
    Category {
        name: "Nickname",
        values: &[
            "The DIVA",
            "Shot-zilla",
            "Social Butterfly",
            "Beverage Bandite",
            "Margarita Messiah",
            "Dr. Dramatic",
            "Sir Spills-a-Lot",
            "Trust Me Guy",
            "Hot Mess Express",
            "Vodka Visionary",
            "Beer Bard",
            "Prosecco Princess",
            "Sangria Sage",
            "Shuffle Queen",
            "Miss Technically Correct",
        ],
    },
    Category {
        name: "Reward",
        values: &[
            "One high five",
            "Eternal gratitude",
            "A firm handshake",
            "Mild applause",
            "A pat on the back",
            "An awkward hug",
        ],
    },
    Category {
        name: "Special Power",
        values: &[
            "Known to vanish mid-conversation",
            "Summoning akward conversations",
            "Can sleep anywhere, anytime.",
            "Dramatic exits",
            "Involuntary flirting aura",
            "Regret postponement",
            "Drunk text generation",
            "Social chameleon",
            "Hangover immunity",
            "Eye contact avooidance",
            "Existential Crisis summoning",
        ],
    },
    Category {
        name: "Case note",
        values: &[
            "Investigation ongoing, morale low",
            "Evidence suggests self-inflicted disappearance",
            "Likely to reappear when food is served",
            "Suspect left behind nothing but half a drink",
            "Previously found hiding in plain sight",
            "History of spontaneous dance-floor departures",
            "Playlist may hold key evidence",
            "Missing status upgraded to “vibing elsewhere”",
        ],
    },
    Category {
        name: "Psycholocigal Profile",
        values: &[
            "Main character syndrom",
            "Shows advanced coping through dance",
            "Mild autism",
            "ADHD symptoms detected",
            "Uses humor as a defense mechanism",
            "Borderline deluisional",
            "Mild narcissm balanced by bad decisions",
            "stable-ish, if fed",
        ],
    },
];
