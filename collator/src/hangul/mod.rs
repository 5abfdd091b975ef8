/// начало блока слогов хангыль
const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
const HANGUL_S_COUNT: u32 = 11172;
/// начало блока ведущих согласных чамо
const HANGUL_L_BASE: u32 = 0x1100;
/// начало блока гласных чамо
const HANGUL_V_BASE: u32 = 0x1161;
/// начало блока завершающих согласных (T = 0 означает их отсутствие)
const HANGUL_T_BASE: u32 = 0x11A7;
/// количество гласных * количество завершающих согласных
const HANGUL_N_COUNT: u32 = 588;
/// количество завершающих согласных
const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;

/*
    слог раскладывается на чамо алгоритмически, веса чамо берутся из таблицы (или вычисляются).
    тот же результат даёт каноническая декомпозиция, поэтому слог и последовательность чамо
    сравниваются одинаково независимо от настройки декомпозиции.
*/

/// чамо слога хангыль: L, V и, возможно, T
#[inline(always)]
pub fn decompose_syllable(c: char) -> Option<([char; 3], usize)>
{
    let lvt = (c as u32).wrapping_sub(HANGUL_S_BASE);

    if lvt >= HANGUL_S_COUNT {
        return None;
    }

    let l = HANGUL_L_BASE + lvt / HANGUL_N_COUNT;
    let v = HANGUL_V_BASE + (lvt % HANGUL_N_COUNT) / HANGUL_T_BLOCK_SIZE;
    let t = lvt % HANGUL_T_BLOCK_SIZE;

    // все значения находятся в блоке чамо, т.е. являются корректными кодпоинтами
    let jamo = |code: u32| char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER);

    match t {
        0 => Some(([jamo(l), jamo(v), '\0'], 2)),
        _ => Some(([jamo(l), jamo(v), jamo(HANGUL_T_BASE + t)], 3)),
    }
}
