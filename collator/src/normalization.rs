//! внешний сервис нормализации: каноническая декомпозиция и канонический порядок нестартеров

use unicode_normalization::{char::decompose_canonical, is_nfd_quick, IsNormalized, UnicodeNormalization};

/// NFD: декомпозиция и сортировка нестартеров по CCC
pub fn decompose_and_canonically_order(input: &[char]) -> Vec<char>
{
    match is_nfd_quick(input.iter().copied()) {
        IsNormalized::Yes => input.to_vec(),
        _ => input.iter().copied().nfd().collect(),
    }
}

/// полная каноническая декомпозиция кодпоинта
pub fn decompose(c: char) -> Vec<char>
{
    let mut result = Vec::with_capacity(4);
    decompose_canonical(c, |d| result.push(d));

    result
}

/// декомпозиция строки; None - строка уже в NFD
pub fn decompose_str(input: &[char]) -> Option<Vec<char>>
{
    let result = decompose_and_canonically_order(input);

    match result.as_slice() == input {
        true => None,
        false => Some(result),
    }
}
