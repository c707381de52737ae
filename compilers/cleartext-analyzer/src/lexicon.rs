//! Word lists for tagging, lemmatization and entity recognition.
//!
//! Everything here is keyed by lowercase form.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use cleartext_protocol::{FineTag, PartOfSpeech};

/// Closed-class entry: part of speech, fine tag and lemma.
#[derive(Debug, Clone, Copy)]
pub struct ClosedEntry {
    pub pos: PartOfSpeech,
    pub tag: FineTag,
    pub lemma: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrregularForm {
    Past,
    Participle,
    PastOrParticiple,
}

fn set(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Bundled English Zipf table, `word<TAB>zipf` per line.
pub const ENGLISH_FREQUENCIES: &str = include_str!("../data/en_zipf.tsv");

/// Every word form listed in the bundled frequency table.
static ATTESTED_FORMS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ENGLISH_FREQUENCIES
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split('\t').next())
        .map(str::trim)
        .collect()
});

pub fn is_attested(lower: &str) -> bool {
    ATTESTED_FORMS.contains(lower)
}

pub static CLOSED_CLASS: Lazy<HashMap<&'static str, ClosedEntry>> = Lazy::new(|| {
    use FineTag as T;
    use PartOfSpeech as P;

    let mut map = HashMap::new();
    let mut add = |words: &[&'static str], pos: P, tag: T| {
        for w in words {
            map.insert(*w, ClosedEntry { pos, tag, lemma: w });
        }
    };

    add(
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no", "all", "both",
            "either", "neither", "another", "such", "whichever", "whatever",
        ],
        P::Determiner,
        T::Determiner,
    );
    add(
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "myself", "yourself",
            "himself", "herself", "itself", "ourselves", "themselves", "who", "whom", "whose", "which", "what",
            "my", "your", "his", "its", "our", "their", "mine", "yours", "ours", "theirs", "someone", "anyone",
            "everyone", "nobody", "anything", "something", "everything", "nothing", "one's",
        ],
        P::Pronoun,
        T::Pronoun,
    );
    add(
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "under", "about", "into", "onto", "over", "after",
            "before", "during", "without", "within", "between", "through", "throughout", "against", "upon",
            "among", "per", "via", "than", "across", "along", "around", "behind", "below", "beneath", "beside",
            "beyond", "despite", "except", "inside", "near", "off", "outside", "since", "toward", "towards",
            "until", "till", "up", "down", "out", "like", "regarding", "concerning", "pursuant", "notwithstanding",
            "amid", "unlike",
        ],
        P::Adposition,
        T::Preposition,
    );
    add(&["to"], P::Particle, T::To);
    add(&["and", "or", "but", "nor", "yet", "so", "plus"], P::Conjunction, T::Coordinator);
    add(
        &["if", "because", "although", "though", "while", "unless", "whether", "whereas", "once", "when", "where", "whenever", "wherever", "as"],
        P::Conjunction,
        T::Preposition,
    );
    add(
        &["shall", "will", "may", "might", "must", "should", "would", "can", "could", "ought", "cannot"],
        P::Auxiliary,
        T::Modal,
    );
    add(
        &[
            "not", "never", "also", "very", "only", "just", "often", "always", "then", "there", "here", "now",
            "too", "again", "already", "soon", "still", "even", "ever", "perhaps", "quite", "rather", "almost",
            "however", "therefore", "thus", "hence", "moreover", "furthermore", "sometimes", "later", "instead",
            "yet", "else", "together", "away", "back", "forth", "n't", "hereby", "herein", "thereof", "therein",
            "hereinafter", "thereafter", "otherwise", "why", "how", "indeed", "please",
        ],
        P::Adverb,
        T::Adverb,
    );
    add(
        &[
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve",
            "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen", "twenty", "thirty",
            "forty", "fifty", "sixty", "seventy", "eighty", "ninety", "hundred", "thousand", "million", "billion",
            "trillion", "dozen", "zero",
        ],
        P::Numeral,
        T::Cardinal,
    );

    // Auxiliaries carry their own lemma and tense.
    let aux = [
        ("be", T::BaseVerb, "be"),
        ("am", T::NonThirdPresent, "be"),
        ("is", T::ThirdPersonPresent, "be"),
        ("are", T::NonThirdPresent, "be"),
        ("was", T::PastTense, "be"),
        ("were", T::PastTense, "be"),
        ("been", T::PastParticiple, "be"),
        ("being", T::Gerund, "be"),
        ("have", T::NonThirdPresent, "have"),
        ("has", T::ThirdPersonPresent, "have"),
        ("had", T::PastTense, "have"),
        ("having", T::Gerund, "have"),
        ("do", T::NonThirdPresent, "do"),
        ("does", T::ThirdPersonPresent, "do"),
        ("did", T::PastTense, "do"),
    ];
    for (word, tag, lemma) in aux {
        map.insert(word, ClosedEntry { pos: P::Auxiliary, tag, lemma });
    }

    map
});

/// Irregular verb forms mapped to lemma and the form they realize.
pub static IRREGULAR_VERBS: Lazy<HashMap<&'static str, (&'static str, IrregularForm)>> = Lazy::new(|| {
    use IrregularForm::*;
    [
        ("made", "make", PastOrParticiple),
        ("took", "take", Past),
        ("taken", "take", Participle),
        ("gave", "give", Past),
        ("given", "give", Participle),
        ("got", "get", PastOrParticiple),
        ("gotten", "get", Participle),
        ("kept", "keep", PastOrParticiple),
        ("held", "hold", PastOrParticiple),
        ("paid", "pay", PastOrParticiple),
        ("sent", "send", PastOrParticiple),
        ("left", "leave", PastOrParticiple),
        ("found", "find", PastOrParticiple),
        ("told", "tell", PastOrParticiple),
        ("said", "say", PastOrParticiple),
        ("went", "go", Past),
        ("gone", "go", Participle),
        ("came", "come", Past),
        ("saw", "see", Past),
        ("seen", "see", Participle),
        ("knew", "know", Past),
        ("known", "know", Participle),
        ("thought", "think", PastOrParticiple),
        ("brought", "bring", PastOrParticiple),
        ("bought", "buy", PastOrParticiple),
        ("wrote", "write", Past),
        ("written", "write", Participle),
        ("began", "begin", Past),
        ("begun", "begin", Participle),
        ("done", "do", Participle),
        ("shown", "show", Participle),
        ("chose", "choose", Past),
        ("chosen", "choose", Participle),
        ("sold", "sell", PastOrParticiple),
        ("built", "build", PastOrParticiple),
        ("spent", "spend", PastOrParticiple),
        ("met", "meet", PastOrParticiple),
        ("ran", "run", Past),
        ("felt", "feel", PastOrParticiple),
        ("meant", "mean", PastOrParticiple),
        ("understood", "understand", PastOrParticiple),
        ("stood", "stand", PastOrParticiple),
        ("lost", "lose", PastOrParticiple),
        ("led", "lead", PastOrParticiple),
        ("fell", "fall", Past),
        ("fallen", "fall", Participle),
        ("grew", "grow", Past),
        ("grown", "grow", Participle),
        ("drew", "draw", Past),
        ("drawn", "draw", Participle),
        ("spoke", "speak", Past),
        ("spoken", "speak", Participle),
        ("broke", "break", Past),
        ("broken", "break", Participle),
        ("forgot", "forget", Past),
        ("forgotten", "forget", Participle),
        ("won", "win", PastOrParticiple),
        ("bound", "bind", PastOrParticiple),
        ("sought", "seek", PastOrParticiple),
        ("taught", "teach", PastOrParticiple),
        ("caught", "catch", PastOrParticiple),
        ("fought", "fight", PastOrParticiple),
        ("dealt", "deal", PastOrParticiple),
        ("heard", "hear", PastOrParticiple),
        ("laid", "lay", PastOrParticiple),
        ("lent", "lend", PastOrParticiple),
        ("arose", "arise", Past),
        ("arisen", "arise", Participle),
        ("undertook", "undertake", Past),
        ("undertaken", "undertake", Participle),
        ("withdrew", "withdraw", Past),
        ("withdrawn", "withdraw", Participle),
        ("overseen", "oversee", Participle),
        ("became", "become", Past),
    ]
    .into_iter()
    .map(|(form, lemma, kind)| (form, (lemma, kind)))
    .collect()
});

/// Base forms of verbs the lemmatizer can recognize after stripping a suffix.
pub static BASE_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        // plain-language verbs
        "use", "start", "end", "show", "help", "form", "get", "keep", "need", "try", "make", "take", "give",
        "pay", "send", "leave", "find", "tell", "say", "go", "come", "see", "know", "think", "bring", "buy",
        "write", "begin", "choose", "sell", "build", "spend", "meet", "run", "feel", "mean", "understand",
        "stand", "lose", "lead", "fall", "grow", "draw", "speak", "break", "forget", "win", "hold", "ask",
        "work", "call", "want", "look", "seem", "turn", "move", "live", "play", "open", "close", "follow",
        "change", "create", "provide", "allow", "add", "agree", "apply", "approve", "sign", "submit", "review",
        "report", "include", "continue", "remain", "receive", "return", "share", "cover", "decide", "describe",
        "explain", "protect", "prepare", "process", "publish", "reach", "reduce", "refer", "release", "remove",
        "replace", "request", "respond", "save", "serve", "settle", "state", "store", "support", "test",
        "train", "update", "visit", "wait", "walk", "watch", "list", "limit", "manage", "mark", "notify",
        "offer", "own", "pass", "perform", "place", "plan", "point", "prove", "raise", "rate", "rely",
        "check", "claim", "collect", "complete", "confirm", "consider", "contact", "contain", "control", "cost",
        "deliver", "design", "develop", "enter", "expect", "fail", "file", "fill", "finish", "fix", "focus",
        "happen", "hire", "hope", "improve", "inform", "issue", "join", "learn", "like", "link", "love",
        "accept", "access", "act", "affect", "answer", "appear", "arrange", "assess", "assign", "assume",
        "attach", "attend", "avoid", "base", "believe", "belong", "cancel", "cause", "charge", "clean",
        "compare", "count", "deny", "depend", "determine", "disclose", "discuss", "enable", "ensure", "establish",
        "exist", "expire", "extend", "govern", "grant", "handle", "identify", "implement", "increase", "install",
        "intend", "involve", "launch", "lend", "lie", "maintain", "matter", "measure", "mention", "obey",
        "occur", "operate", "order", "organize", "pick", "print", "produce", "promise", "propose", "purchase",
        "push", "record", "recommend", "register", "reject", "relate", "renew", "repair", "repeat", "represent",
        "require", "reserve", "resolve", "rest", "result", "reveal", "sell", "set", "sort", "stay", "stop",
        "suggest", "supply", "suppose", "talk", "terminate", "transfer", "travel", "treat", "trust", "vote",
        "warn", "wish", "wonder", "worry", "agree", "assist", "breach", "consent", "waive", "amend",
        // formal verbs the dictionaries rewrite
        "commence", "initiate", "utilize", "demonstrate", "illustrate", "indicate", "facilitate", "constitute",
        "obtain", "retain", "endeavor", "endeavour", "ascertain", "effectuate", "remit", "execute", "indemnify",
        "stipulate", "necessitate", "acquire", "allocate", "comply", "convene", "designate", "disseminate",
        "expedite", "modify", "procure", "render", "specify", "substantiate", "advise", "authorize", "notify",
    ])
});

pub static IRREGULAR_PLURALS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("mice", "mouse"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("analyses", "analysis"),
        ("bases", "basis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
        ("halves", "half"),
        ("shelves", "shelf"),
    ]
    .into_iter()
    .collect()
});

/// Singular words ending in "s" that must not be stripped.
pub static NON_PLURAL_S: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "news", "series", "species", "means", "thus", "this", "its", "his", "us", "yes", "bus", "gas", "plus",
        "always", "perhaps", "various", "previous", "serious", "famous", "numerous", "obvious", "status",
        "basis", "analysis", "crisis", "thesis", "physics", "economics", "politics", "mathematics", "lens",
        "christmas", "whereas", "unless", "less", "across", "towards", "afterwards", "besides", "sometimes",
        "canvas", "atlas", "chaos", "ethos", "bias", "alias", "campus", "census", "consensus", "focus",
        "bonus", "virus", "surplus", "apparatus", "nexus", "versus", "onus", "premises",
    ])
});

/// Base words ending in "ly" that are not adverbs.
pub static LY_NON_ADVERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "family", "supply", "apply", "reply", "rely", "july", "italy", "ally", "assembly", "butterfly", "jelly",
        "belly", "fly", "comply", "multiply", "imply", "monopoly", "anomaly", "rally", "bully", "lily",
        "only", "early", "daily", "weekly", "monthly", "yearly", "likely", "friendly", "elderly", "costly",
        "lonely", "lovely", "ugly", "holy", "silly", "timely", "orderly", "quarterly",
    ])
});

/// "-ing" words that are plain nouns.
pub static ING_NOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "thing", "nothing", "something", "anything", "everything", "morning", "evening", "spring", "king",
        "ring", "string", "ceiling", "wing", "sibling", "during", "bring", "sing", "swing", "sting", "cling",
    ])
});

/// Common adjectives without a telltale suffix.
pub static ADJECTIVES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "good", "new", "large", "small", "big", "clear", "important", "great", "old", "young", "long", "short",
        "high", "low", "full", "free", "easy", "hard", "simple", "real", "true", "false", "same", "different",
        "other", "many", "few", "much", "more", "most", "less", "least", "own", "right", "wrong", "whole",
        "main", "certain", "sure", "able", "open", "public", "private", "legal", "final", "total", "early",
        "late", "enough", "next", "last", "first", "second", "third", "fair", "fast", "slow", "safe", "ready",
        "prior", "subsequent", "sufficient", "substantial", "significant", "considerable", "numerous", "plain",
        "brief", "due", "entire", "exact", "firm", "general", "key", "major", "minor", "necessary", "past",
        "present", "proper", "similar", "specific", "strong", "weak", "written", "likely", "daily", "monthly",
        "current", "recent", "further", "several", "additional", "relevant", "applicable", "objective",
    ])
});

/// Common nouns that should not be read as imperative verbs at sentence start.
pub static NOUN_PREFERRED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "report", "plan", "process", "record", "order", "file", "test", "state", "list", "result", "point",
        "rate", "cost", "issue", "contact", "design", "request", "review", "change", "control", "support",
        "access", "place", "mark", "matter", "act", "base", "charge", "count", "purchase", "transfer",
        "consent", "breach", "update", "return", "share", "store", "train", "trust", "vote", "wish", "end",
        "start", "use", "help", "form", "need", "work", "call", "look", "turn", "move", "play", "limit",
        "offer", "answer", "rest", "set", "sort", "stay", "stop", "talk", "travel", "walk", "watch",
    ])
});

pub static POSSESSIVES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["my", "your", "his", "her", "its", "our", "their", "whose", "one's"]));

pub static SUBJECT_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| set(&["i", "you", "we", "they"]));

pub static THIRD_PERSON_SUBJECTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["he", "she", "it", "this", "that", "who", "which", "what", "someone", "everyone", "nobody"]));

pub const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ance", "ence", "ship", "ism", "ogy", "work", "ure", "age", "ist",
    "dom", "hood", "ery", "ee", "eer", "ology",
];

pub const ADJECTIVE_SUFFIXES: &[&str] = &[
    "al", "ous", "ive", "ful", "able", "ible", "ic", "ical", "less", "ary", "ory", "ish", "ant", "ent",
];

/// Consonant endings after which "-ed"/"-ing" stripped a silent "e".
pub const SILENT_E_STEMS: &[&str] = &[
    "iz", "yz", "at", "ut", "uc", "iv", "av", "ov", "ev", "dg", "rg", "rc", "nc", "ur", "ir", "bl", "pl", "tl",
    "dl", "gl", "ag", "ib", "id", "ud", "od", "ak", "ok", "ar", "rs", "ns", "ps", "as",
];

// Entity gazetteers

pub static MONTHS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "january", "february", "march", "april", "may", "june", "july", "august", "september", "october",
        "november", "december", "jan.", "feb.", "aug.", "sept.", "oct.", "nov.", "dec.",
    ])
});

pub static WEEKDAYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"])
});

pub static RELATIVE_DATES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["today", "tomorrow", "yesterday", "tonight"]));

pub static DATE_UNITS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "day", "days", "week", "weeks", "month", "months", "year", "years", "decade", "decades", "quarter",
        "quarters", "weekend", "century",
    ])
});

pub static TIME_MARKERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["am", "pm", "a.m.", "p.m.", "o'clock", "hours", "hour", "minutes", "minute", "seconds"]));

pub static CURRENCY_SYMBOLS: Lazy<HashSet<&'static str>> = Lazy::new(|| set(&["$", "€", "£", "¥", "₹"]));

pub static CURRENCY_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "dollar", "dollars", "euro", "euros", "cent", "cents", "usd", "eur", "gbp", "rupees", "rupee", "yen",
        "pence", "francs",
    ])
});

pub static SCALE_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["hundred", "thousand", "million", "billion", "trillion", "k", "m", "bn"]));

pub static UNITS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "kilogram", "kilograms", "kg", "gram", "grams", "tonne", "tonnes", "ton", "tons", "pound", "pounds",
        "lb", "lbs", "ounce", "ounces", "oz", "meter", "meters", "metre", "metres", "km", "kilometer",
        "kilometers", "kilometre", "kilometres", "mile", "miles", "foot", "feet", "inch", "inches", "liter",
        "liters", "litre", "litres", "gallon", "gallons", "acre", "acres", "hectare", "hectares", "cm", "mm",
        "centimeters", "millimeters", "degrees", "mph", "kph",
    ])
});

pub static ORDINAL_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
        "eleventh", "twelfth", "twentieth", "thirtieth", "hundredth",
    ])
});

pub static LAW_HEADS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "act", "code", "regulation", "regulations", "directive", "constitution", "treaty", "convention",
        "amendment", "statute", "ordinance", "charter", "bill",
    ])
});

pub static LAW_REFERENCES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| set(&["section", "article", "clause", "paragraph", "schedule", "§"]));

pub static ORG_HEADS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "inc.", "inc", "corp.", "corp", "ltd.", "ltd", "llc", "llp", "plc", "co.", "company", "corporation",
        "bank", "university", "agency", "ministry", "department", "commission", "committee", "council",
        "authority", "association", "institute", "group", "foundation", "court", "board", "bureau",
    ])
});

/// Company-form suffixes that mark the preceding word as an organization
/// even without capitalization ("acme corp.").
pub const CORPORATE_SUFFIXES: &[&str] = &["inc.", "corp.", "ltd.", "llc", "llp", "plc", "co.", "gmbh"];

pub const MULTIWORD_ORG: &[&[&str]] = &[
    &["goldman", "sachs"],
    &["morgan", "stanley"],
    &["wells", "fargo"],
    &["deutsche", "bank"],
    &["bank", "of", "america"],
    &["general", "motors"],
    &["general", "electric"],
    &["johnson", "and", "johnson"],
    &["united", "nations"],
    &["world", "bank"],
];

pub static GPE_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "india", "china", "japan", "france", "germany", "spain", "italy", "canada", "mexico", "brazil",
        "australia", "russia", "england", "scotland", "ireland", "wales", "britain", "europe", "africa",
        "london", "paris", "berlin", "madrid", "rome", "tokyo", "delhi", "mumbai", "beijing", "sydney",
        "toronto", "chicago", "boston", "texas", "california", "florida", "ohio", "virginia", "washington",
        "usa", "u.s.", "u.s.a.", "uk", "u.k.", "eu", "nigeria", "kenya", "egypt", "singapore", "dubai",
        "athens", "brussels", "lagos", "netherlands", "philippines", "bahamas", "honduras", "marseilles",
    ])
});

pub const MULTIWORD_GPE: &[&[&str]] = &[
    &["united", "states"],
    &["united", "kingdom"],
    &["new", "york"],
    &["new", "jersey"],
    &["new", "delhi"],
    &["los", "angeles"],
    &["san", "francisco"],
    &["hong", "kong"],
    &["south", "africa"],
    &["european", "union"],
];

/// Given names recognized regardless of case. Ambiguous ones ("will",
/// "may", "mark", "bill") are left out on purpose.
pub static GIVEN_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "john", "mary", "james", "robert", "michael", "william", "david", "richard", "joseph", "thomas",
        "charles", "christopher", "daniel", "matthew", "anthony", "donald", "steven", "paul", "andrew",
        "joshua", "kenneth", "kevin", "brian", "george", "edward", "ronald", "timothy", "jason", "jeffrey",
        "ryan", "jacob", "gary", "nicholas", "eric", "jonathan", "stephen", "larry", "justin", "scott",
        "brandon", "benjamin", "samuel", "gregory", "frank", "alexander", "raymond", "patrick", "jack",
        "dennis", "jerry", "tyler", "aaron", "jose", "adam", "henry", "nathan", "douglas", "zachary", "peter",
        "kyle", "walter", "ethan", "jeremy", "harold", "keith", "christian", "roger", "noah", "gerald", "carl",
        "terry", "sean", "austin", "arthur", "lawrence", "jesse", "dylan", "bryan", "joe", "jordan", "albert",
        "logan", "randy", "ralph", "roy", "eugene", "louis", "philip", "bobby", "johnny", "patricia",
        "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica", "sarah", "karen", "nancy", "lisa",
        "betty", "margaret", "sandra", "ashley", "kimberly", "emily", "donna", "michelle", "dorothy", "carol",
        "amanda", "melissa", "deborah", "stephanie", "rebecca", "sharon", "laura", "cynthia", "kathleen",
        "amy", "shirley", "angela", "helen", "anna", "brenda", "pamela", "nicole", "emma", "samantha",
        "katherine", "christine", "debra", "rachel", "catherine", "carolyn", "janet", "ruth", "maria",
        "heather", "diane", "virginia", "julie", "joyce", "victoria", "olivia", "kelly", "christina", "lauren",
        "joan", "evelyn", "judith", "megan", "cheryl", "andrea", "hannah", "martha", "jacqueline", "frances",
        "gloria", "ann", "teresa", "kathryn", "sara", "janice", "jean", "alice", "madison", "doris", "abigail",
        "julia", "judy", "grace", "denise", "amber", "marilyn", "beverly", "danielle", "theresa", "sophia",
        "marie", "diana", "brittany", "natalie", "isabella", "charlotte", "rose", "alexis", "kayla", "jane",
        "priya", "rahul", "amit", "anita", "sanjay", "ravi", "arjun", "deepak", "neha", "pooja", "vikram",
        "mohammed", "ahmed", "ali", "fatima", "omar", "wei", "li", "chen", "yuki", "hiroshi", "carlos",
        "juan", "luis", "sofia", "lucas", "mateo", "elena", "ivan", "olga", "hans", "klaus", "pierre",
        "tomas", "ines", "andres", "nicolas", "marcos", "dolores", "mercedes", "lourdes", "agnes",
    ])
});

/// Surnames recognized regardless of case. Ones that double as common
/// words ("brown", "king", "young") are left out.
pub static SURNAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "smith", "johnson", "williams", "jones", "garcia", "davis", "rodriguez", "martinez", "hernandez",
        "lopez", "gonzalez", "wilson", "anderson", "taylor", "thomas", "moore", "jackson", "martin", "lee",
        "perez", "thompson", "harris", "sanchez", "clark", "ramirez", "lewis", "robinson", "allen", "hughes",
        "torres", "flores", "nguyen", "adams", "nelson", "campbell", "mitchell", "carter", "roberts",
        "phillips", "evans", "edwards", "collins", "stewart", "morris", "rogers", "reyes", "cruz", "ramos",
        "peters", "richards", "myers", "matthews", "simmons", "jenkins", "perkins", "watkins", "hopkins",
        "reynolds", "stevens", "owens", "sanders", "coleman", "patterson", "ross", "morales", "murphy",
        "morgan", "gomez", "kelly", "howard", "diaz", "richardson", "watson", "james", "bennett", "sharma",
        "patel", "singh", "kumar", "gupta", "khan", "wang", "zhang", "liu", "tanaka", "sato", "mueller",
        "schmidt", "schneider", "fischer", "dubois", "moreau", "rossi", "russo", "ferrari",
    ])
});

pub static TITLES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&["mr.", "mrs.", "ms.", "dr.", "prof.", "sir", "madam", "judge", "justice", "president", "senator"])
});

static ABBREVIATIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    set(&[
        "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "inc", "ltd", "corp", "co", "vs", "jan", "feb", "aug",
        "sept", "oct", "nov", "dec", "art", "sec", "sect", "para", "fig", "approx", "dept", "govt", "st",
    ])
});

/// True for words that keep a following "." as part of the token.
pub fn is_abbreviation(lower: &str) -> bool {
    ABBREVIATIONS.contains(lower)
}

pub fn has_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| word.len() > s.len() + 1 && word.ends_with(s))
}
