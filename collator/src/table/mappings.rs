use std::collections::HashMap;

use crate::hangul::decompose_syllable;
use crate::implicit::implicit_weights;
use crate::weights::CollationElement;

/// веса кодпоинта или сокращения
#[derive(Debug, Clone, Default)]
pub struct Mapping
{
    /// веса без учёта контекста
    elements: Option<Box<[CollationElement]>>,
    /// веса в контексте, более длинные префиксы - первыми
    contexts: Vec<(Box<[char]>, Box<[CollationElement]>)>,
}

impl Mapping
{
    /// веса с учётом предшествующих кодпоинтов
    #[inline]
    pub fn elements_for(&self, preceding: &[char]) -> Option<&[CollationElement]>
    {
        self.contexts
            .iter()
            .find(|(prefix, _)| preceding.ends_with(prefix))
            .map(|(_, elements)| &**elements)
            .or(self.elements.as_deref())
    }
}

/// кодпоинты и сокращения -> элементы сопоставления
#[derive(Debug, Clone, Default)]
pub struct Mappings
{
    map: HashMap<Box<[char]>, Mapping>,
    /// длина самого длинного сокращения
    max_len: usize,
}

impl Mappings
{
    pub fn insert(&mut self, prefix: &[char], chars: &[char], elements: Vec<CollationElement>)
    {
        let mapping = self.map.entry(chars.into()).or_default();
        let elements = elements.into_boxed_slice();

        match prefix.is_empty() {
            true => mapping.elements = Some(elements),
            false => {
                mapping.contexts.retain(|(existing, _)| &**existing != prefix);
                mapping.contexts.push((prefix.into(), elements));
                mapping
                    .contexts
                    .sort_by(|a, b| b.0.len().cmp(&a.0.len()));
            }
        }

        self.max_len = self.max_len.max(chars.len());
    }

    /// веса записи (без поиска по сокращениям и без вычисляемых весов)
    pub fn get(&self, prefix: &[char], chars: &[char]) -> Option<&[CollationElement]>
    {
        let mapping = self.map.get(chars)?;

        match prefix.is_empty() {
            true => mapping.elements.as_deref(),
            false => mapping
                .contexts
                .iter()
                .find(|(existing, _)| &**existing == prefix)
                .map(|(_, elements)| &**elements),
        }
    }

    /// есть запись без контекста
    #[inline]
    pub fn contains(&self, chars: &[char]) -> bool
    {
        self.get(&[], chars).is_some()
    }

    #[inline]
    pub fn max_len(&self) -> usize
    {
        self.max_len
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.map.len()
    }

    /// самое длинное совпадение, начинающееся с pos: длина и веса
    #[inline]
    fn longest_match(&self, chars: &[char], pos: usize) -> Option<(usize, &[CollationElement])>
    {
        let longest = self.max_len.min(chars.len() - pos);
        let preceding = &chars[.. pos];

        (1 ..= longest).rev().find_map(|len| {
            self.map
                .get(&chars[pos .. pos + len])
                .and_then(|mapping| mapping.elements_for(preceding))
                .map(|elements| (len, elements))
        })
    }

    /// дописать веса, начиная с pos; возвращает количество обработанных кодпоинтов
    pub fn write_elements(&self, chars: &[char], pos: usize, result: &mut Vec<CollationElement>) -> usize
    {
        if let Some((len, elements)) = self.longest_match(chars, pos) {
            result.extend_from_slice(elements);
            return len;
        }

        let c = chars[pos];

        match decompose_syllable(c) {
            Some((jamo, len)) => jamo[.. len]
                .iter()
                .for_each(|&jamo| self.write_single(jamo, result)),
            None => result.extend_from_slice(&implicit_weights(c as u32)),
        }

        1
    }

    /// веса одного кодпоинта (табличные или вычисляемые)
    #[inline]
    fn write_single(&self, c: char, result: &mut Vec<CollationElement>)
    {
        match self.get(&[], &[c]) {
            Some(elements) => result.extend_from_slice(elements),
            None => result.extend_from_slice(&implicit_weights(c as u32)),
        }
    }

    /// веса строки, если все её кодпоинты есть в таблице
    pub fn resolve_exact(&self, chars: &[char]) -> Option<Vec<CollationElement>>
    {
        let mut result = vec![];
        let mut pos = 0;

        while pos < chars.len() {
            let (len, elements) = self.longest_match(chars, pos)?;

            result.extend_from_slice(elements);
            pos += len;
        }

        Some(result)
    }
}
