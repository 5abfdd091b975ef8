use super::*;
use crate::options::AlternateHandling;

/// веса элемента по всем уровням сравнения, после обработки переменных весов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelWeights
{
    pub primary: u16,
    pub secondary: u16,
    pub case: u16,
    pub tertiary: u16,
    pub quaternary: u16,
}

impl LevelWeights
{
    /// вес на уровне
    #[inline(always)]
    pub fn get(&self, level: Level) -> u16
    {
        match level {
            Level::Primary => self.primary,
            Level::Secondary => self.secondary,
            Level::Case => self.case,
            Level::Tertiary => self.tertiary,
            Level::Quaternary => self.quaternary,
        }
    }

    #[inline(always)]
    fn regular(ce: CollationElement, quaternary: u16) -> Self
    {
        let case = match (ce.primary, ce.is_upper()) {
            (0, _) => 0,
            (_, true) => CASE_UPPER,
            (_, false) => CASE_LOWER,
        };

        Self {
            primary: ce.primary,
            secondary: ce.secondary,
            case,
            tertiary: ce.tertiary,
            quaternary,
        }
    }

    #[inline(always)]
    fn shifted(primary: u16) -> Self
    {
        Self {
            quaternary: primary,
            ..Default::default()
        }
    }
}

/// веса по уровням для последовательности элементов сопоставления
pub fn resolve_levels<I>(elements: I, alternate: AlternateHandling) -> Vec<LevelWeights>
where
    I: IntoIterator<Item = CollationElement>,
{
    let elements = elements.into_iter();

    match alternate {
        AlternateHandling::NonIgnorable => elements
            .filter(|ce| !ce.is_ignorable())
            .map(|ce| LevelWeights::regular(ce, 0))
            .collect(),
        AlternateHandling::Shifted => resolve_shifted(elements),
    }
}

/// Shifted
fn resolve_shifted(elements: impl Iterator<Item = CollationElement>) -> Vec<LevelWeights>
{
    // правила из TR #10: (https://www.unicode.org/reports/tr10/#Variable_Weighting)
    //
    // L1, L2, L3 = 0                               -> [.0000.0000.0000.0000]
    // L1 = 0, L3 ≠ 0,   following a Variable       -> [.0000.0000.0000.0000]
    // L1 ≠ 0,           Variable                   -> old L1 [.0000.0000.0000.0209]
    // L1 = 0, L3 ≠ 0,   not following a Variable   -> FFFF [.0000.0035.0002.FFFF]
    // L1 ≠ 0,           not Variable               -> FFFF [.06D9.0020.0008.FFFF]

    let mut result = vec![];
    let mut following_a_variable = false;

    for ce in elements {
        if ce.is_ignorable() {
            continue;
        }

        // второй вес переменного элемента также сдвигается
        if ce.is_variable() || (following_a_variable && ce.is_continuation()) {
            following_a_variable = true;
            result.push(LevelWeights::shifted(ce.primary));
            continue;
        }

        if ce.primary == 0 {
            if following_a_variable {
                continue;
            }

            let quaternary = match ce.tertiary {
                0 => 0,
                _ => QUATERNARY_REGULAR,
            };

            result.push(LevelWeights::regular(ce, quaternary));
            continue;
        }

        following_a_variable = false;
        result.push(LevelWeights::regular(ce, QUATERNARY_REGULAR));
    }

    result
}
