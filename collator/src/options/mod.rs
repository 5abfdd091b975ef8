// все опции - см. UTS #35, https://www.unicode.org/reports/tr35/tr35-collation.html

use crate::weights::Level;

/// уровень сравнения
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strength
{
    Primary = 1,    // базовые символы
    Secondary = 2,  // диакритические знаки
    Tertiary = 3,   // регистр / варианты
    Quaternary = 4, // пунктуация
    Identical = 5,  // кодпоинты
}

/// декомпозиция перед сравнением
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Decomposition
{
    None = 0,      // строка сравнивается как есть
    Canonical = 1, // NFD + канонический порядок нестартеров
}

/// тип сравнения переменных весов
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlternateHandling
{
    NonIgnorable = 0, // переменные веса не игнорируются
    Shifted = 1,      // со сдвигом переменных весов
}

/// настройки сравнения
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Configuration
{
    /// уровень сравнения
    pub strength: Strength,
    pub decomposition: Decomposition,
    /// обратный порядок весов второго уровня
    pub french_collation: bool,
    /// тип сравнения переменных весов
    pub alternate: AlternateHandling,
    /// дополнительный уровень регистра между L2 и L3
    pub case_level: bool,
}

impl Default for Strength
{
    fn default() -> Self
    {
        Self::Tertiary
    }
}

impl Default for Decomposition
{
    fn default() -> Self
    {
        Self::None
    }
}

impl Default for AlternateHandling
{
    fn default() -> Self
    {
        Self::NonIgnorable
    }
}

impl Default for Configuration
{
    fn default() -> Self
    {
        Self {
            strength: Default::default(),
            decomposition: Default::default(),
            french_collation: false,
            alternate: Default::default(),
            case_level: false,
        }
    }
}

impl Configuration
{
    /// участвует ли уровень в сравнении
    #[inline]
    pub fn includes(&self, level: Level) -> bool
    {
        match level {
            Level::Primary => true,
            Level::Secondary => self.strength >= Strength::Secondary,
            Level::Case => self.case_level,
            Level::Tertiary => self.strength >= Strength::Tertiary,
            Level::Quaternary => self.strength >= Strength::Quaternary,
        }
    }

    /// уровни, участвующие в сравнении, по порядку
    pub fn levels(&self) -> impl Iterator<Item = Level>
    {
        let configuration = *self;

        Level::ALL
            .into_iter()
            .filter(move |&level| configuration.includes(level))
    }

    /// веса уровня сравниваются с конца
    #[inline]
    pub fn is_backwards(&self, level: Level) -> bool
    {
        level == Level::Secondary && self.french_collation
    }
}

/// настройки, заданные в строке правил ([strength 2], [backwards 2] и т.д.)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RuleSettings
{
    pub strength: Option<Strength>,
    pub decomposition: Option<Decomposition>,
    pub french_collation: Option<bool>,
    pub alternate: Option<AlternateHandling>,
    pub case_level: Option<bool>,
}

impl RuleSettings
{
    /// настройки не заданы
    pub fn is_empty(&self) -> bool
    {
        *self == Self::default()
    }

    /// дополнить настройками из следующей строки правил (они имеют приоритет)
    pub fn merge(&mut self, other: &RuleSettings)
    {
        self.strength = other.strength.or(self.strength);
        self.decomposition = other.decomposition.or(self.decomposition);
        self.french_collation = other.french_collation.or(self.french_collation);
        self.alternate = other.alternate.or(self.alternate);
        self.case_level = other.case_level.or(self.case_level);
    }

    /// применить к настройкам коллатора
    pub fn apply_to(&self, configuration: &mut Configuration)
    {
        if let Some(strength) = self.strength {
            configuration.strength = strength;
        }
        if let Some(decomposition) = self.decomposition {
            configuration.decomposition = decomposition;
        }
        if let Some(french_collation) = self.french_collation {
            configuration.french_collation = french_collation;
        }
        if let Some(alternate) = self.alternate {
            configuration.alternate = alternate;
        }
        if let Some(case_level) = self.case_level {
            configuration.case_level = case_level;
        }
    }
}
