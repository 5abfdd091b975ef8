//! корневой порядок: упорядоченный список элементов, поверх которого применяются тейлоринги
//!
//! список содержит только базовые кодпоинты: предкомпозитные буквы получают веса своей
//! декомпозиции при сборке таблицы, иероглифы и прочие отсутствующие кодпоинты - вычисляемые веса

use std::collections::HashSet;

use crate::normalization;
use crate::rules::Difference;
use crate::table::Node;

/// управляющие символы и форматирование - полностью игнорируются
const IGNORABLES: [(u32, u32); 5] = [
    (0x0000, 0x0008),
    (0x000E, 0x001F),
    (0x007F, 0x0084),
    (0x0086, 0x009F),
    (0x200B, 0x200F),
];

/// диакритика, порядок которой задан явно; остальные знаки идут следом по кодпоинтам
const ORDERED_MARKS: [char; 13] = [
    '\u{300}', '\u{301}', '\u{306}', '\u{302}', '\u{30C}', '\u{30A}', '\u{308}', '\u{30B}', '\u{303}',
    '\u{307}', '\u{328}', '\u{327}', '\u{304}',
];

const MARK_RANGES: [(u32, u32); 5] = [
    (0x0300, 0x036F),
    (0x0483, 0x0487),
    (0x1DC0, 0x1DFF),
    (0x20D0, 0x20F0),
    (0xFE20, 0xFE2F),
];

const WHITESPACE: &str = "\t\n\u{B}\u{C}\r\u{85}\u{2028}\u{2029}";

/// пробел и его третичные варианты
const SPACES: &str = "\u{20}\u{A0}\u{2002}\u{2003}\u{2004}\u{2005}\u{2006}\u{2007}\u{2008}\u{2009}\u{200A}\u{202F}\u{205F}\u{3000}";

/// переменные элементы: первый кодпоинт группы - первичный, остальные - третичные варианты
const PUNCTUATION: [&str; 46] = [
    "_＿", "-－﹣‐‑", "‒", "–", "—", ",，", ";；", ":：", "!！", "¡", "?？", "¿", ".．", "…", "·", "'＇",
    "‘", "’", "‚", "\"＂", "“", "”", "„", "«", "»", "(（", ")）", "[［", "]］", "{｛", "}｝", "§", "¶",
    "@＠", "*＊", "/／", "\\＼", "&＆", "#＃", "%％", "‰", "†", "‡", "•", "′", "″",
];

const SYMBOLS: [&str; 19] = [
    "`｀", "´", "^＾", "¯￣", "¨", "°", "©", "®", "+＋", "±", "÷", "×", "<＜", "=＝", ">＞", "¬￢", "|｜",
    "¦￤", "~～",
];

const CURRENCY: [&str; 24] = [
    "¤", "¢￠", "$＄﹩", "£￡", "¥￥", "৲", "৳", "฿", "៛", "₠", "₡", "₢", "₣", "₤", "₥", "₦", "₧", "₩￦",
    "₪", "₫", "€", "₭", "₮", "₯",
];

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// первичные буквы латиницы; заглавные и полноширинные формы - третичные варианты
const LATIN: &str = "aæbcdðefghiıjklłmnŋoœpqrstþuvwxyzʒ";

/// дополнительные третичные варианты (до заглавной формы)
const LATIN_VARIANTS: [(char, &str); 3] = [('a', "ª"), ('o', "º"), ('s', "ſ")];

/// буквы, отличающиеся от базовой на втором уровне
const LATIN_SECONDARY: [(char, char); 3] = [('d', 'đ'), ('h', 'ħ'), ('o', 'ø')];

/// й, ё и ї получают веса декомпозиции
const CYRILLIC: &str = "абвгґдеєжзиіклмнопрстуфхцчшщъыьэюя";

pub(crate) fn nodes() -> Vec<Node>
{
    let mut list = RootList::default();

    list.ignorables();
    list.marks();

    list.variable = true;
    list.whitespace();
    list.chains(&PUNCTUATION);
    list.variable = false;

    list.chains(&SYMBOLS);
    list.chains(&CURRENCY);
    list.digits();
    list.latin();
    list.greek();
    list.cyrillic();

    list.nodes
}

struct RootList
{
    nodes: Vec<Node>,
    seen: HashSet<char>,
    variable: bool,
}

impl Default for RootList
{
    fn default() -> Self
    {
        Self {
            nodes: vec![Node::sentinel()],
            seen: HashSet::new(),
            variable: false,
        }
    }
}

impl RootList
{
    fn push(&mut self, difference: Difference, c: char)
    {
        self.push_expansion(difference, c, &[]);
    }

    /// кодпоинты с канонической декомпозицией в список не попадают
    fn push_expansion(&mut self, difference: Difference, c: char, expansion: &[char])
    {
        if normalization::decompose(c) != [c] || !self.seen.insert(c) {
            return;
        }

        let mut node = Node::new(difference, &[c]);
        node.expansion = expansion.into();
        node.variable = self.variable;

        self.nodes.push(node);
    }

    fn chains(&mut self, chains: &[&str])
    {
        for chain in chains.iter() {
            for (i, c) in chain.chars().enumerate() {
                let difference = match i {
                    0 => Difference::Primary,
                    _ => Difference::Tertiary,
                };
                self.push(difference, c);
            }
        }
    }

    fn ignorables(&mut self)
    {
        for &(first, last) in IGNORABLES.iter() {
            for c in (first ..= last).filter_map(char::from_u32) {
                self.push(Difference::Identical, c);
            }
        }

        self.push(Difference::Identical, '\u{AD}');
        self.push(Difference::Identical, '\u{FEFF}');
    }

    fn marks(&mut self)
    {
        for &c in ORDERED_MARKS.iter() {
            self.push(Difference::Secondary, c);
        }

        for &(first, last) in MARK_RANGES.iter() {
            for c in (first ..= last).filter_map(char::from_u32) {
                self.push(Difference::Secondary, c);
            }
        }
    }

    fn whitespace(&mut self)
    {
        for c in WHITESPACE.chars() {
            self.push(Difference::Primary, c);
        }

        self.chains(&[SPACES]);
    }

    fn digits(&mut self)
    {
        for digit in 0 .. 10u32 {
            let variants = [
                char::from_u32('0' as u32 + digit),
                char::from_u32(0xFF10 + digit),
                Some(SUPERSCRIPT_DIGITS[digit as usize]),
                char::from_u32(0x2080 + digit),
                char::from_u32(0x0660 + digit),
                char::from_u32(0x0966 + digit),
            ];

            for (i, c) in variants.into_iter().flatten().enumerate() {
                let difference = match i {
                    0 => Difference::Primary,
                    _ => Difference::Tertiary,
                };
                self.push(difference, c);
            }
        }
    }

    /// буква: строчная, полноширинная, дополнительные варианты, заглавная, полноширинная заглавная
    fn letter(&mut self, difference: Difference, c: char, variants: &str)
    {
        self.push(difference, c);
        self.fullwidth(c);

        for variant in variants.chars() {
            self.push(Difference::Tertiary, variant);
        }

        if let Some(upper) = single_uppercase(c) {
            self.push(Difference::Tertiary, upper);
            self.fullwidth(upper);
        }
    }

    fn fullwidth(&mut self, c: char)
    {
        if c.is_ascii_alphanumeric() {
            if let Some(fullwidth) = char::from_u32(c as u32 - 0x21 + 0xFF01) {
                self.push(Difference::Tertiary, fullwidth);
            }
        }
    }

    fn latin(&mut self)
    {
        for c in LATIN.chars() {
            let variants = LATIN_VARIANTS
                .iter()
                .find(|(base, _)| *base == c)
                .map_or("", |(_, variants)| variants);

            self.letter(Difference::Primary, c, variants);

            for &(_, secondary) in LATIN_SECONDARY.iter().filter(|(base, _)| *base == c) {
                self.letter(Difference::Secondary, secondary, "");
            }

            // ß = ss на первых двух уровнях
            if c == 's' {
                self.push_expansion(Difference::Tertiary, 'ß', &['s']);
                self.push_expansion(Difference::Tertiary, 'ẞ', &['s']);
            }
        }
    }

    fn greek(&mut self)
    {
        for c in ('α' ..= 'ω').filter(|&c| c != 'ς') {
            let variants = match c {
                'σ' => "ς",
                _ => "",
            };

            self.letter(Difference::Primary, c, variants);
        }
    }

    fn cyrillic(&mut self)
    {
        for c in CYRILLIC.chars() {
            self.letter(Difference::Primary, c, "");
        }
    }
}

/// заглавная форма, если она - один кодпоинт
fn single_uppercase(c: char) -> Option<char>
{
    let mut upper = c.to_uppercase();

    match (upper.next(), upper.next()) {
        (Some(upper), None) if upper != c => Some(upper),
        _ => None,
    }
}
