//! правила тейлоринга: `&` - сброс, `<`, `<<`, `<<<`, `=` - отношения (см. UTS #35, раздел 3)

mod display;
mod parser;

pub use display::format_rules;
pub use parser::parse_rules;

use crate::options::RuleSettings;

/// уровень различия нового элемента с предыдущим
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difference
{
    Primary = 1,
    Secondary = 2,
    Tertiary = 3,
    Identical = 4,
}

impl Difference
{
    /// оператор в строке правил
    pub fn operator(&self) -> &'static str
    {
        match self {
            Self::Primary => "<",
            Self::Secondary => "<<",
            Self::Tertiary => "<<<",
            Self::Identical => "=",
        }
    }

    /// из числа в [before N]
    pub fn from_level(level: &str) -> Option<Self>
    {
        match level {
            "1" => Some(Self::Primary),
            "2" => Some(Self::Secondary),
            "3" => Some(Self::Tertiary),
            _ => None,
        }
    }
}

/// позиция в таблице, на которую можно сделать сброс: &[first variable] и т.д.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SpecialPosition
{
    FirstPrimaryIgnorable,
    LastPrimaryIgnorable,
    FirstVariable,
    LastVariable,
    FirstRegular,
    LastRegular,
}

impl SpecialPosition
{
    const NAMES: [(SpecialPosition, &'static str); 6] = [
        (Self::FirstPrimaryIgnorable, "first primary ignorable"),
        (Self::LastPrimaryIgnorable, "last primary ignorable"),
        (Self::FirstVariable, "first variable"),
        (Self::LastVariable, "last variable"),
        (Self::FirstRegular, "first regular"),
        (Self::LastRegular, "last regular"),
    ];

    pub fn name(&self) -> &'static str
    {
        Self::NAMES
            .iter()
            .find(|(position, _)| position == self)
            .map(|(_, name)| *name)
            .unwrap_or_default()
    }

    /// из содержимого скобок; пробелы между словами не важны
    pub fn from_name(name: &str) -> Option<Self>
    {
        let words: Vec<&str> = name.split_whitespace().collect();

        Self::NAMES
            .iter()
            .find(|(_, known)| known.split(' ').eq(words.iter().copied()))
            .map(|(position, _)| *position)
    }
}

/// на что указывает сброс
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Anchor
{
    Text(String),
    Position(SpecialPosition),
}

/// правило тейлоринга. отношения применяются к последнему сброшенному или добавленному элементу
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TailoringRule
{
    /// `&anchor`, `&[before N]anchor`
    Reset
    {
        anchor: Anchor,
        before: Option<Difference>,
        offset: usize,
    },
    /// `< prefix|chars/expansion`
    Relation
    {
        difference: Difference,
        /// контекст: элемент имеет такие веса, только если ему предшествует prefix
        prefix: String,
        /// кодпоинт или сокращение
        chars: String,
        /// веса этой строки дописываются к весам элемента
        expansion: String,
        offset: usize,
    },
}

impl TailoringRule
{
    /// позиция правила в исходной строке
    pub fn offset(&self) -> usize
    {
        match self {
            Self::Reset { offset, .. } => *offset,
            Self::Relation { offset, .. } => *offset,
        }
    }
}

/// результат разбора строки правил
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRules
{
    pub settings: RuleSettings,
    pub rules: Vec<TailoringRule>,
}
