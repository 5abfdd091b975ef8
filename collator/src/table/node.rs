use crate::rules::Difference;

/// элемент упорядоченного списка таблицы
///
/// веса не хранятся: они назначаются при сборке таблицы, проходом по списку, исходя из
/// уровня различия каждого элемента с предыдущим
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node
{
    /// различие с предыдущим элементом списка
    pub difference: Difference,
    /// контекст (кодпоинты, которые должны предшествовать элементу)
    pub prefix: Box<[char]>,
    /// кодпоинт или сокращение
    pub chars: Box<[char]>,
    /// веса этих кодпоинтов дописываются к весам элемента
    pub expansion: Box<[char]>,
    /// переменный элемент (пробелы, пунктуация)
    pub variable: bool,
}

impl Node
{
    /// начало списка: полностью игнорируемый элемент без кодпоинтов
    pub fn sentinel() -> Self
    {
        Self::new(Difference::Identical, &[])
    }

    pub fn new(difference: Difference, chars: &[char]) -> Self
    {
        Self {
            difference,
            prefix: Box::default(),
            chars: chars.into(),
            expansion: Box::default(),
            variable: false,
        }
    }

    #[inline]
    pub fn is_sentinel(&self) -> bool
    {
        self.chars.is_empty()
    }

    /// заглавная буква (для уровня регистра)
    #[inline]
    pub fn is_upper(&self) -> bool
    {
        self.chars.iter().any(|c| c.is_uppercase())
    }

    #[inline]
    pub fn matches(&self, prefix: &[char], chars: &[char]) -> bool
    {
        &*self.chars == chars && &*self.prefix == prefix
    }
}
