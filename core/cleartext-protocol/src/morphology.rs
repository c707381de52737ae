use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Coarse (universal) part of speech.
///
/// Only `Noun` and `Verb` drive re-inflection; every other class is carried
/// through so analyzers can report what they saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    ProperNoun = 1,
    Verb = 2,
    Auxiliary = 3,
    Adjective = 4,
    Adverb = 5,
    Pronoun = 6,
    Determiner = 7,
    Adposition = 8,
    Conjunction = 9,
    Particle = 10,
    Numeral = 11,
    Punctuation = 12,
    Symbol = 13,
    Other = 14,
}

impl PartOfSpeech {
    /// Universal Dependencies label (`NOUN`, `VERB`, ...).
    pub fn label(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::Conjunction => "CCONJ",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Punctuation => "PUNCT",
            PartOfSpeech::Symbol => "SYM",
            PartOfSpeech::Other => "X",
        }
    }

    /// Parses a Universal Dependencies label. Unknown labels collapse to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "NOUN" => PartOfSpeech::Noun,
            "PROPN" => PartOfSpeech::ProperNoun,
            "VERB" => PartOfSpeech::Verb,
            "AUX" => PartOfSpeech::Auxiliary,
            "ADJ" => PartOfSpeech::Adjective,
            "ADV" => PartOfSpeech::Adverb,
            "PRON" => PartOfSpeech::Pronoun,
            "DET" => PartOfSpeech::Determiner,
            "ADP" => PartOfSpeech::Adposition,
            "CCONJ" | "SCONJ" | "CONJ" => PartOfSpeech::Conjunction,
            "PART" => PartOfSpeech::Particle,
            "NUM" => PartOfSpeech::Numeral,
            "PUNCT" => PartOfSpeech::Punctuation,
            "SYM" => PartOfSpeech::Symbol,
            _ => PartOfSpeech::Other,
        }
    }
}

/// Fine-grained (Penn Treebank style) tag.
///
/// The variants that matter for re-inflection are the noun number tags and
/// the verb tense/aspect tags; everything else is kept coarse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum FineTag {
    /// NN
    SingularNoun = 0,
    /// NNS
    PluralNoun = 1,
    /// NNP
    ProperSingular = 2,
    /// NNPS
    ProperPlural = 3,
    /// VB
    BaseVerb = 4,
    /// VBD
    PastTense = 5,
    /// VBN
    PastParticiple = 6,
    /// VBZ
    ThirdPersonPresent = 7,
    /// VBP
    NonThirdPresent = 8,
    /// VBG
    Gerund = 9,
    /// MD
    Modal = 10,
    /// JJ, JJR, JJS
    Adjective = 11,
    /// RB, RBR, RBS
    Adverb = 12,
    /// DT, PDT, WDT
    Determiner = 13,
    /// IN
    Preposition = 14,
    /// TO
    To = 15,
    /// CC
    Coordinator = 16,
    /// PRP, PRP$, WP
    Pronoun = 17,
    /// CD
    Cardinal = 18,
    /// Sentence and clause punctuation.
    Punctuation = 19,
    /// `$`, `%`, `#` and friends.
    Symbol = 20,
    Other = 21,
}

bitflags! {
    /// Morphological features implied by a [`FineTag`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Number
        const SINGULAR = 1;
        const PLURAL = 2;
        const PROPER = 4;

        // Tense / aspect
        const PRESENT = 8;
        const PAST = 16;
        const PARTICIPLE = 32;
        const PROGRESSIVE = 64;

        // Person
        const THIRD_PERSON = 128;

        // Verb form
        const FINITE = 256;
        const INFINITIVE = 512;
        const MODAL = 1024;
    }
}

impl FineTag {
    /// Features carried by this tag. Exhaustive on purpose: a new tag must say
    /// what it means for inflection.
    pub fn features(self) -> MorphFlags {
        match self {
            FineTag::SingularNoun => MorphFlags::SINGULAR,
            FineTag::PluralNoun => MorphFlags::PLURAL,
            FineTag::ProperSingular => MorphFlags::SINGULAR | MorphFlags::PROPER,
            FineTag::ProperPlural => MorphFlags::PLURAL | MorphFlags::PROPER,
            FineTag::BaseVerb => MorphFlags::INFINITIVE,
            FineTag::PastTense => MorphFlags::PAST | MorphFlags::FINITE,
            FineTag::PastParticiple => MorphFlags::PAST | MorphFlags::PARTICIPLE,
            FineTag::ThirdPersonPresent => {
                MorphFlags::PRESENT | MorphFlags::THIRD_PERSON | MorphFlags::SINGULAR | MorphFlags::FINITE
            }
            FineTag::NonThirdPresent => MorphFlags::PRESENT | MorphFlags::FINITE,
            FineTag::Gerund => MorphFlags::PROGRESSIVE | MorphFlags::PARTICIPLE,
            FineTag::Modal => MorphFlags::MODAL | MorphFlags::FINITE,
            FineTag::Adjective
            | FineTag::Adverb
            | FineTag::Determiner
            | FineTag::Preposition
            | FineTag::To
            | FineTag::Coordinator
            | FineTag::Pronoun
            | FineTag::Cardinal
            | FineTag::Punctuation
            | FineTag::Symbol
            | FineTag::Other => MorphFlags::empty(),
        }
    }

    /// Penn Treebank code for this tag.
    pub fn penn(self) -> &'static str {
        match self {
            FineTag::SingularNoun => "NN",
            FineTag::PluralNoun => "NNS",
            FineTag::ProperSingular => "NNP",
            FineTag::ProperPlural => "NNPS",
            FineTag::BaseVerb => "VB",
            FineTag::PastTense => "VBD",
            FineTag::PastParticiple => "VBN",
            FineTag::ThirdPersonPresent => "VBZ",
            FineTag::NonThirdPresent => "VBP",
            FineTag::Gerund => "VBG",
            FineTag::Modal => "MD",
            FineTag::Adjective => "JJ",
            FineTag::Adverb => "RB",
            FineTag::Determiner => "DT",
            FineTag::Preposition => "IN",
            FineTag::To => "TO",
            FineTag::Coordinator => "CC",
            FineTag::Pronoun => "PRP",
            FineTag::Cardinal => "CD",
            FineTag::Punctuation => ".",
            FineTag::Symbol => "SYM",
            FineTag::Other => "XX",
        }
    }

    /// Parses a Penn Treebank code, folding comparative/superlative and
    /// wh- variants into their base class.
    pub fn from_penn(code: &str) -> Self {
        match code {
            "NN" => FineTag::SingularNoun,
            "NNS" => FineTag::PluralNoun,
            "NNP" => FineTag::ProperSingular,
            "NNPS" => FineTag::ProperPlural,
            "VB" => FineTag::BaseVerb,
            "VBD" => FineTag::PastTense,
            "VBN" => FineTag::PastParticiple,
            "VBZ" => FineTag::ThirdPersonPresent,
            "VBP" => FineTag::NonThirdPresent,
            "VBG" => FineTag::Gerund,
            "MD" => FineTag::Modal,
            "JJ" | "JJR" | "JJS" => FineTag::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" => FineTag::Adverb,
            "DT" | "PDT" | "WDT" => FineTag::Determiner,
            "IN" => FineTag::Preposition,
            "TO" => FineTag::To,
            "CC" => FineTag::Coordinator,
            "PRP" | "PRP$" | "WP" | "WP$" => FineTag::Pronoun,
            "CD" => FineTag::Cardinal,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" => FineTag::Punctuation,
            "$" | "#" | "SYM" => FineTag::Symbol,
            _ => FineTag::Other,
        }
    }
}

/// Syntactic role of a token relative to its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum DependencyRole {
    Root = 0,
    Subject = 1,
    Object = 2,
    /// Auxiliary marking tense, aspect or modality.
    Aux = 3,
    /// Auxiliary marking passive voice ("was" in "was submitted").
    AuxPass = 4,
    /// "by" introducing the agent of a passive verb.
    Agent = 5,
    Determiner = 6,
    Modifier = 7,
    Punct = 8,
    Dep = 9,
}

impl DependencyRole {
    pub fn label(self) -> &'static str {
        match self {
            DependencyRole::Root => "ROOT",
            DependencyRole::Subject => "nsubj",
            DependencyRole::Object => "dobj",
            DependencyRole::Aux => "aux",
            DependencyRole::AuxPass => "auxpass",
            DependencyRole::Agent => "agent",
            DependencyRole::Determiner => "det",
            DependencyRole::Modifier => "amod",
            DependencyRole::Punct => "punct",
            DependencyRole::Dep => "dep",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "ROOT" => DependencyRole::Root,
            "nsubj" | "nsubjpass" | "csubj" | "expl" => DependencyRole::Subject,
            "dobj" | "obj" | "pobj" | "iobj" | "dative" | "attr" => DependencyRole::Object,
            "aux" => DependencyRole::Aux,
            "auxpass" | "aux:pass" => DependencyRole::AuxPass,
            "agent" => DependencyRole::Agent,
            "det" | "predet" => DependencyRole::Determiner,
            "amod" | "advmod" | "nmod" | "compound" | "poss" | "prep" | "nummod" => DependencyRole::Modifier,
            "punct" => DependencyRole::Punct,
            _ => DependencyRole::Dep,
        }
    }

    pub fn is_passive_marker(self) -> bool {
        matches!(self, DependencyRole::AuxPass)
    }
}

/// Named-entity type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum EntityLabel {
    Person = 0,
    Org = 1,
    Gpe = 2,
    Law = 3,
    Date = 4,
    Time = 5,
    Percent = 6,
    Money = 7,
    Quantity = 8,
    Ordinal = 9,
    Cardinal = 10,
    Norp = 11,
    Fac = 12,
    Loc = 13,
    Product = 14,
    Event = 15,
    WorkOfArt = 16,
    Language = 17,
}

impl EntityLabel {
    /// Protected entities are facts that must be emitted verbatim: names,
    /// organizations, places, laws, and every temporal or numeric type.
    pub fn is_protected(self) -> bool {
        match self {
            EntityLabel::Person
            | EntityLabel::Org
            | EntityLabel::Gpe
            | EntityLabel::Law
            | EntityLabel::Date
            | EntityLabel::Time
            | EntityLabel::Percent
            | EntityLabel::Money
            | EntityLabel::Quantity
            | EntityLabel::Ordinal
            | EntityLabel::Cardinal => true,
            EntityLabel::Norp
            | EntityLabel::Fac
            | EntityLabel::Loc
            | EntityLabel::Product
            | EntityLabel::Event
            | EntityLabel::WorkOfArt
            | EntityLabel::Language => false,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Law => "LAW",
            EntityLabel::Date => "DATE",
            EntityLabel::Time => "TIME",
            EntityLabel::Percent => "PERCENT",
            EntityLabel::Money => "MONEY",
            EntityLabel::Quantity => "QUANTITY",
            EntityLabel::Ordinal => "ORDINAL",
            EntityLabel::Cardinal => "CARDINAL",
            EntityLabel::Norp => "NORP",
            EntityLabel::Fac => "FAC",
            EntityLabel::Loc => "LOC",
            EntityLabel::Product => "PRODUCT",
            EntityLabel::Event => "EVENT",
            EntityLabel::WorkOfArt => "WORK_OF_ART",
            EntityLabel::Language => "LANGUAGE",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when an entity label string is not one of the known types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntityLabel(pub String);

impl fmt::Display for UnknownEntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity label: {}", self.0)
    }
}

impl std::error::Error for UnknownEntityLabel {}

impl FromStr for EntityLabel {
    type Err = UnknownEntityLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = match s {
            "PERSON" => EntityLabel::Person,
            "ORG" => EntityLabel::Org,
            "GPE" => EntityLabel::Gpe,
            "LAW" => EntityLabel::Law,
            "DATE" => EntityLabel::Date,
            "TIME" => EntityLabel::Time,
            "PERCENT" => EntityLabel::Percent,
            "MONEY" => EntityLabel::Money,
            "QUANTITY" => EntityLabel::Quantity,
            "ORDINAL" => EntityLabel::Ordinal,
            "CARDINAL" => EntityLabel::Cardinal,
            "NORP" => EntityLabel::Norp,
            "FAC" => EntityLabel::Fac,
            "LOC" => EntityLabel::Loc,
            "PRODUCT" => EntityLabel::Product,
            "EVENT" => EntityLabel::Event,
            "WORK_OF_ART" => EntityLabel::WorkOfArt,
            "LANGUAGE" => EntityLabel::Language,
            other => return Err(UnknownEntityLabel(other.to_string())),
        };
        Ok(label)
    }
}
