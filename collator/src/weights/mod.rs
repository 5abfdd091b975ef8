use core::fmt::Debug;

mod levels;

pub use levels::{resolve_levels, LevelWeights};

/// общий (базовый) вес L2 / L3
pub const COMMON_WEIGHT: u16 = 0x0200;
/// первый первичный вес таблицы
pub const FIRST_PRIMARY: u16 = 0x0200;
/// последний первичный вес таблицы, дальше идут вычисляемые веса
pub const LAST_TABLE_PRIMARY: u16 = 0xFAFF;
/// верхняя граница весов L2 / L3
pub const MAX_WEIGHT: u16 = 0xFEFF;

/// уровень регистра: строчная буква или кодпоинт без регистра
pub const CASE_LOWER: u16 = 0x0200;
/// уровень регистра: заглавная буква
pub const CASE_UPPER: u16 = 0x0300;
/// L4 кодпоинта, не являющегося переменным
pub const QUATERNARY_REGULAR: u16 = 0xFFFF;

const FLAG_VARIABLE: u8 = 0b_001;
const FLAG_UPPER: u8 = 0b_010;
const FLAG_CONTINUATION: u8 = 0b_100;

/// уровень сравнения весов
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Level
{
    Primary,
    Secondary,
    Case,
    Tertiary,
    Quaternary,
}

impl Level
{
    /// уровни в порядке сравнения
    pub const ALL: [Level; 5] = [
        Level::Primary,
        Level::Secondary,
        Level::Case,
        Level::Tertiary,
        Level::Quaternary,
    ];
}

/// элемент сопоставления: веса L1, L2, L3 и флаги
///
/// нулевой вес означает, что элемент игнорируется на этом уровне. L4 не хранится - он вычисляется
/// при обработке переменных весов (см. [`resolve_levels`])
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CollationElement
{
    pub primary: u16,
    pub secondary: u16,
    pub tertiary: u16,
    flags: u8,
}

impl CollationElement
{
    #[inline(always)]
    pub const fn new(primary: u16, secondary: u16, tertiary: u16) -> Self
    {
        Self {
            primary,
            secondary,
            tertiary,
            flags: 0,
        }
    }

    /// пометить элемент как переменный (пробелы, пунктуация)
    #[inline(always)]
    pub const fn with_variable(mut self, is_variable: bool) -> Self
    {
        if is_variable {
            self.flags |= FLAG_VARIABLE;
        }
        self
    }

    /// пометить элемент как заглавную букву
    #[inline(always)]
    pub const fn with_upper(mut self, is_upper: bool) -> Self
    {
        if is_upper {
            self.flags |= FLAG_UPPER;
        }
        self
    }

    /// продолжение предыдущего элемента (второй вычисляемый вес)
    #[inline(always)]
    pub const fn continuation(mut self) -> Self
    {
        self.flags |= FLAG_CONTINUATION;
        self
    }

    #[inline(always)]
    pub fn is_variable(&self) -> bool
    {
        self.flags & FLAG_VARIABLE != 0
    }

    #[inline(always)]
    pub fn is_upper(&self) -> bool
    {
        self.flags & FLAG_UPPER != 0
    }

    #[inline(always)]
    pub fn is_continuation(&self) -> bool
    {
        self.flags & FLAG_CONTINUATION != 0
    }

    /// полностью игнорируемый элемент
    #[inline(always)]
    pub fn is_ignorable(&self) -> bool
    {
        self.primary == 0 && self.secondary == 0 && self.tertiary == 0
    }

    /// в виде, в котором веса представлены в allkeys
    pub fn format(&self) -> String
    {
        let is_variable = match self.is_variable() {
            true => '*',
            false => '.',
        };

        format!(
            "[{}{:04X}.{:04X}.{:04X}]",
            is_variable, self.primary, self.secondary, self.tertiary,
        )
    }
}

impl Debug for CollationElement
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}
