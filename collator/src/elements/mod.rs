use crate::table::Mappings;
use crate::weights::CollationElement;

/// ленивый итератор по элементам сопоставления строки
///
/// на каждом шаге берётся самое длинное совпадение в таблице (ограниченное длиной самого
/// длинного сокращения), его веса отдаются по одному
pub struct ElementsIter<'a>
{
    mappings: &'a Mappings,
    chars: &'a [char],
    pos: usize,
    /// веса последнего совпадения (расширения дают несколько весов)
    buffer: Vec<CollationElement>,
    buffer_pos: usize,
}

impl<'a> ElementsIter<'a>
{
    pub(crate) fn new(mappings: &'a Mappings, chars: &'a [char]) -> Self
    {
        Self {
            mappings,
            chars,
            pos: 0,
            buffer: Vec::with_capacity(4),
            buffer_pos: 0,
        }
    }
}

impl<'a> Iterator for ElementsIter<'a>
{
    type Item = CollationElement;

    #[inline]
    fn next(&mut self) -> Option<Self::Item>
    {
        loop {
            if let Some(&ce) = self.buffer.get(self.buffer_pos) {
                self.buffer_pos += 1;
                return Some(ce);
            }

            if self.pos >= self.chars.len() {
                return None;
            }

            self.buffer.clear();
            self.buffer_pos = 0;
            self.pos += self
                .mappings
                .write_elements(self.chars, self.pos, &mut self.buffer);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>)
    {
        (self.buffer.len() - self.buffer_pos, None)
    }
}
