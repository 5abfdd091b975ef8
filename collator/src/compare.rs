use core::cmp::Ordering;

use crate::normalization;
use crate::options::{Configuration, Decomposition, Strength};
use crate::table::CollationTable;
use crate::weights::{resolve_levels, Level, LevelWeights};

/// кодпоинты строки; при канонической декомпозиции - в NFD
#[inline]
pub(crate) fn prepare(text: &str, decomposition: Decomposition) -> Vec<char>
{
    let chars: Vec<char> = text.chars().collect();

    match decomposition {
        Decomposition::None => chars,
        Decomposition::Canonical => normalization::decompose_and_canonically_order(&chars),
    }
}

/// веса строки по уровням с учётом обработки переменных весов
#[inline]
pub(crate) fn resolve_weights(
    table: &CollationTable,
    configuration: &Configuration,
    chars: &[char],
) -> Vec<LevelWeights>
{
    resolve_levels(table.elements(chars), configuration.alternate)
}

/// кодпоинты для уровня Identical - всегда в NFD, чтобы канонически эквивалентные строки
/// оставались равными
#[inline]
pub(crate) fn identical_chars(chars: Vec<char>, decomposition: Decomposition) -> Vec<char>
{
    match decomposition {
        Decomposition::Canonical => chars,
        Decomposition::None => normalization::decompose_and_canonically_order(&chars),
    }
}

/// ненулевые веса уровня
#[inline]
pub(crate) fn level_weights(weights: &[LevelWeights], level: Level) -> impl DoubleEndedIterator<Item = u16> + '_
{
    weights
        .iter()
        .map(move |w| w.get(level))
        .filter(|&w| w != 0)
}

/// сравнить две строки
pub fn compare(table: &CollationTable, configuration: &Configuration, a: &str, b: &str) -> Ordering
{
    if a == b {
        return Ordering::Equal;
    }

    let a_chars = prepare(a, configuration.decomposition);
    let b_chars = prepare(b, configuration.decomposition);

    let a_weights = resolve_weights(table, configuration, &a_chars);
    let b_weights = resolve_weights(table, configuration, &b_chars);

    for level in configuration.levels() {
        let a_level = level_weights(&a_weights, level);
        let b_level = level_weights(&b_weights, level);

        let ordering = match configuration.is_backwards(level) {
            true => a_level.rev().cmp(b_level.rev()),
            false => a_level.cmp(b_level),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    match configuration.strength {
        Strength::Identical => {
            let a_chars = identical_chars(a_chars, configuration.decomposition);
            let b_chars = identical_chars(b_chars, configuration.decomposition);

            a_chars.cmp(&b_chars)
        }
        _ => Ordering::Equal,
    }
}
