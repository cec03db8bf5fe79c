use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

use crate::error::UnknownCode;

/// Broad grouping of annotation codes as the dictionary documentation lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    PartOfSpeech,
    Field,
    Dialect,
    Usage,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::PartOfSpeech,
        Category::Field,
        Category::Dialect,
        Category::Usage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::PartOfSpeech => "part-of-speech",
            Category::Field => "field",
            Category::Dialect => "dialect",
            Category::Usage => "usage",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.name() == s)
            .ok_or_else(|| UnknownCode(s.to_owned()))
    }
}

// Every tag is declared exactly once here, so `code` and `from_code` are
// generated from the same rows and cannot drift apart.
macro_rules! taxonomy {
    ($($category:ident { $($tag:ident => $code:literal, $description:literal;)* })*) => {
        /// A known annotation code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Detail {
            $($(#[doc = $description] $tag,)*)*
        }

        impl Detail {
            /// Every tag, in table order.
            pub const ALL: &'static [Detail] = &[$($(Detail::$tag,)*)*];

            /// The code as written inside an annotation group, e.g. `"adj-no"`.
            pub const fn code(self) -> &'static str {
                match self {
                    $($(Detail::$tag => $code,)*)*
                }
            }

            /// Exact, case-sensitive lookup. `"uK"` and `"uk"` are different tags.
            pub fn from_code(code: &str) -> Option<Detail> {
                match code {
                    $($($code => Some(Detail::$tag),)*)*
                    _ => None,
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $($(Detail::$tag => $description,)*)*
                }
            }

            pub const fn category(self) -> Category {
                match self {
                    $($(Detail::$tag)|* => Category::$category,)*
                }
            }
        }
    };
}

taxonomy! {
    PartOfSpeech {
        Adj => "adj", "former adjective classification";
        AdjF => "adj-f", "noun or verb acting prenominally";
        AdjI => "adj-i", "adjective (keiyoushi)";
        AdjIx => "adj-ix", "adjective (keiyoushi), yoi/ii class";
        AdjKari => "adj-kari", "`kari' adjective (archaic)";
        AdjKu => "adj-ku", "`ku' adjective (archaic)";
        AdjNa => "adj-na", "adjectival noun or quasi-adjective (keiyodoshi)";
        AdjNari => "adj-nari", "archaic/formal form of na-adjective";
        AdjNo => "adj-no", "noun which may take the genitive case particle `no'";
        AdjPn => "adj-pn", "pre-noun adjectival (rentaishi)";
        AdjShiku => "adj-shiku", "`shiku' adjective (archaic)";
        AdjT => "adj-t", "`taru' adjective";
        Adv => "adv", "adverb (fukushi)";
        AdvN => "adv-n", "adverbial noun";
        AdvTo => "adv-to", "adverb taking the `to' particle";
        Aux => "aux", "auxiliary";
        AuxAdj => "aux-adj", "auxiliary adjective";
        AuxV => "aux-v", "auxiliary verb";
        Conj => "conj", "conjunction";
        CopDa => "cop-da", "copula";
        Ctr => "ctr", "counter";
        Exp => "exp", "expression (phrase, clause, etc.)";
        Int => "int", "interjection (kandoushi)";
        Iv => "iv", "irregular verb";
        N => "n", "noun (common) (futsuumeishi)";
        NAdv => "n-adv", "adverbial noun (fukushitekimeishi)";
        NPr => "n-pr", "proper noun";
        NPref => "n-pref", "noun, used as a prefix";
        NSuf => "n-suf", "noun, used as a suffix";
        NT => "n-t", "noun (temporal) (jisoumeishi)";
        Num => "num", "numeric";
        Pn => "pn", "pronoun";
        Pref => "pref", "prefix";
        Prt => "prt", "particle";
        Suf => "suf", "suffix";
        Unc => "unc", "unclassified";
        V1 => "v1", "Ichidan verb";
        V1S => "v1-s", "Ichidan verb, kureru special class";
        V2aS => "v2a-s", "Nidan verb with `u' ending (archaic)";
        V2bK => "v2b-k", "Nidan verb (upper class) with `bu' ending (archaic)";
        V2bS => "v2b-s", "Nidan verb (lower class) with `bu' ending (archaic)";
        V2dK => "v2d-k", "Nidan verb (upper class) with `dzu' ending (archaic)";
        V2dS => "v2d-s", "Nidan verb (lower class) with `dzu' ending (archaic)";
        V2gK => "v2g-k", "Nidan verb (upper class) with `gu' ending (archaic)";
        V2gS => "v2g-s", "Nidan verb (lower class) with `gu' ending (archaic)";
        V2hK => "v2h-k", "Nidan verb (upper class) with `hu/fu' ending (archaic)";
        V2hS => "v2h-s", "Nidan verb (lower class) with `hu/fu' ending (archaic)";
        V2kK => "v2k-k", "Nidan verb (upper class) with `ku' ending (archaic)";
        V2kS => "v2k-s", "Nidan verb (lower class) with `ku' ending (archaic)";
        V2mK => "v2m-k", "Nidan verb (upper class) with `mu' ending (archaic)";
        V2mS => "v2m-s", "Nidan verb (lower class) with `mu' ending (archaic)";
        V2nS => "v2n-s", "Nidan verb (lower class) with `nu' ending (archaic)";
        V2rK => "v2r-k", "Nidan verb (upper class) with `ru' ending (archaic)";
        V2rS => "v2r-s", "Nidan verb (lower class) with `ru' ending (archaic)";
        V2sS => "v2s-s", "Nidan verb (lower class) with `su' ending (archaic)";
        V2tK => "v2t-k", "Nidan verb (upper class) with `tsu' ending (archaic)";
        V2tS => "v2t-s", "Nidan verb (lower class) with `tsu' ending (archaic)";
        V2wS => "v2w-s", "Nidan verb (lower class) with `u' ending and `we' conjugation (archaic)";
        V2yK => "v2y-k", "Nidan verb (upper class) with `yu' ending (archaic)";
        V2yS => "v2y-s", "Nidan verb (lower class) with `yu' ending (archaic)";
        V2zS => "v2z-s", "Nidan verb (lower class) with `zu' ending (archaic)";
        V4b => "v4b", "Yodan verb with `bu' ending (archaic)";
        V4g => "v4g", "Yodan verb with `gu' ending (archaic)";
        V4h => "v4h", "Yodan verb with `hu/fu' ending (archaic)";
        V4k => "v4k", "Yodan verb with `ku' ending (archaic)";
        V4m => "v4m", "Yodan verb with `mu' ending (archaic)";
        V4n => "v4n", "Yodan verb with `nu' ending (archaic)";
        V4r => "v4r", "Yodan verb with `ru' ending (archaic)";
        V4s => "v4s", "Yodan verb with `su' ending (archaic)";
        V4t => "v4t", "Yodan verb with `tsu' ending (archaic)";
        V5 => "v5", "Godan verb (not completely classified)";
        V5aru => "v5aru", "Godan verb, -aru special class";
        V5b => "v5b", "Godan verb with `bu' ending";
        V5g => "v5g", "Godan verb with `gu' ending";
        V5k => "v5k", "Godan verb with `ku' ending";
        V5kS => "v5k-s", "Godan verb, Iku/Yuku special class";
        V5m => "v5m", "Godan verb with `mu' ending";
        V5n => "v5n", "Godan verb with `nu' ending";
        V5r => "v5r", "Godan verb with `ru' ending";
        V5rI => "v5r-i", "Godan verb with `ru' ending (irregular verb)";
        V5s => "v5s", "Godan verb with `su' ending";
        V5t => "v5t", "Godan verb with `tsu' ending";
        V5u => "v5u", "Godan verb with `u' ending";
        V5uS => "v5u-s", "Godan verb with `u' ending (special class)";
        V5uru => "v5uru", "Godan verb, Uru old class verb (old form of Eru)";
        Vi => "vi", "intransitive verb";
        Vk => "vk", "Kuru verb, special class";
        Vn => "vn", "irregular nu verb";
        Vr => "vr", "irregular ru verb, plain form ends with -ri";
        Vs => "vs", "noun or participle which takes the aux. verb suru";
        VsC => "vs-c", "su verb, precursor to the modern suru";
        VsI => "vs-i", "suru verb, included";
        VsS => "vs-s", "suru verb, special class";
        Vt => "vt", "transitive verb";
        VUnspec => "v-unspec", "verb unspecified";
        Vz => "vz", "Ichidan verb, zuru verb (alternative form of -jiru verbs)";
    }
    Field {
        Anat => "anat", "anatomical term";
        Archit => "archit", "architecture term";
        Astron => "astron", "astronomy term";
        Baseb => "baseb", "baseball term";
        Biol => "biol", "biology term";
        Bot => "bot", "botany term";
        Buddh => "Buddh", "Buddhist term";
        Bus => "bus", "business term";
        Chem => "chem", "chemistry term";
        Comp => "comp", "computer terminology";
        Econ => "econ", "economics term";
        Engr => "engr", "engineering term";
        Finc => "finc", "finance term";
        Food => "food", "food term";
        Geol => "geol", "geology term";
        Geom => "geom", "geometry term";
        Law => "law", "law term";
        Ling => "ling", "linguistics terminology";
        MartialArts => "MA", "martial arts term";
        Mahj => "mahj", "mahjong term";
        Math => "math", "mathematics";
        Med => "med", "medicine term";
        Mil => "mil", "military";
        Music => "music", "music term";
        Physics => "physics", "physics terminology";
        Shinto => "Shinto", "Shinto term";
        Shogi => "shogi", "shogi term";
        Sports => "sports", "sports term";
        Sumo => "sumo", "sumo term";
        Zool => "zool", "zoology term";
    }
    Dialect {
        Hob => "hob", "Hokkaido-ben";
        Ksb => "ksb", "Kansai-ben";
        Ktb => "ktb", "Kantou-ben";
        Kyb => "kyb", "Kyoto-ben";
        Kyu => "kyu", "Kyuushuu-ben";
        Nab => "nab", "Nagano-ben";
        Osb => "osb", "Osaka-ben";
        Rkb => "rkb", "Ryuukyuu-ben";
        Thb => "thb", "Touhoku-ben";
        Tsb => "tsb", "Tosa-ben";
        Tsug => "tsug", "Tsugaru-ben";
    }
    Usage {
        Abbr => "abbr", "abbreviation";
        Aphorism => "aphorism", "aphorism (pithy saying)";
        Arch => "arch", "archaism";
        Ateji => "ateji", "ateji (phonetic) reading";
        Chn => "chn", "children's language";
        Col => "col", "colloquialism";
        Dated => "dated", "dated term";
        Derog => "derog", "derogatory";
        Euph => "euph", "euphemistic";
        ExclusivelyKana => "ek", "exclusively kana";
        ExclusivelyKanji => "eK", "exclusively kanji";
        Fam => "fam", "familiar language";
        Fem => "fem", "female term or language";
        Form => "form", "formal or literary term";
        Gikun => "gikun", "gikun (meaning as reading) or jukujikun (special kanji reading)";
        Hist => "hist", "historical term";
        Hon => "hon", "honorific or respectful (sonkeigo) language";
        Hum => "hum", "humble (kenjougo) language";
        Id => "id", "idiomatic expression";
        IrregularKana => "ik", "word containing irregular kana usage";
        IrregularKanji => "iK", "word containing irregular kanji usage";
        IrregularOkurigana => "io", "irregular okurigana usage";
        Joc => "joc", "jocular, humorous term";
        Male => "male", "male term or language";
        MaleSlang => "male-sl", "male slang";
        MangaSlang => "m-sl", "manga slang";
        NetSlang => "net-sl", "Internet slang";
        Obs => "obs", "obsolete term";
        Obsc => "obsc", "obscure term";
        OnMim => "on-mim", "onomatopoeic or mimetic word";
        OutdatedKana => "ok", "out-dated or obsolete kana usage";
        OutdatedKanji => "oK", "word containing out-dated kanji";
        Poet => "poet", "poetical term";
        Pol => "pol", "polite (teineigo) language";
        Proverb => "proverb", "proverb";
        Quote => "quote", "quotation";
        Rare => "rare", "rare";
        Sens => "sens", "sensitive";
        Sl => "sl", "slang";
        UsuallyKana => "uk", "word usually written using kana alone";
        UsuallyKanji => "uK", "word usually written using kanji alone";
        Vulg => "vulg", "vulgar expression or word";
        XRated => "X", "rude or X-rated term";
        Yoji => "yoji", "yojijukugo";
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Detail {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Detail::from_code(s).ok_or_else(|| UnknownCode(s.to_owned()))
    }
}

impl Serialize for Detail {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Detail {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Detail::from_code(&code).ok_or_else(|| de::Error::custom(UnknownCode(code)))
    }
}
