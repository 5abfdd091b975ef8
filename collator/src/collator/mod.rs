//! коллатор: таблица сопоставления + настройки сравнения
//!
//! [`RuleBasedCollator`] - изменяемый коллатор, [`FrozenCollator`] - замороженный (только чтение,
//! можно разделять между потоками), [`Collator`] - коллатор, который замораживается на месте

use core::cmp::Ordering;
use std::sync::Arc;

use tracing::trace;

use crate::builder::TailoringBuilder;
use crate::compare::compare;
use crate::error::{CollationError, FrozenStateError};
use crate::key::{compose_key, CollationKey};
use crate::locale;
use crate::options::{AlternateHandling, Configuration, Decomposition, Strength};
use crate::rules::parse_rules;
use crate::table::CollationTable;

/// изменяемый коллатор
#[derive(Debug, Clone)]
pub struct RuleBasedCollator
{
    table: Arc<CollationTable>,
    configuration: Configuration,
}

impl RuleBasedCollator
{
    /// коллатор локали; неизвестные локали получают корневой порядок
    pub fn new(locale: &str) -> Result<Self, CollationError>
    {
        Ok(Self::from_table(CollationTable::for_locale(locale)?))
    }

    /// правила локали, дополненные правилами пользователя
    pub fn with_rules(locale: &str, rules: &str) -> Result<Self, CollationError>
    {
        Ok(Self::from_table(locale::table_for(locale, Some(rules))?))
    }

    /// корневая таблица + правила
    pub fn from_rules(rules: &str) -> Result<Self, CollationError>
    {
        Self::with_rules("", rules)
    }

    /// правила поверх произвольной таблицы (без кеширования)
    pub fn tailor(base: &CollationTable, rules: &str) -> Result<Self, CollationError>
    {
        let mut builder = TailoringBuilder::new(base);
        builder.apply(&parse_rules(rules)?)?;

        Ok(Self::from_table(Arc::new(builder.build()?)))
    }

    /// настройки по умолчанию, дополненные настройками из правил таблицы
    pub fn from_table(table: Arc<CollationTable>) -> Self
    {
        let mut configuration = Configuration::default();
        table.settings().apply_to(&mut configuration);

        Self {
            table,
            configuration,
        }
    }

    pub fn table(&self) -> &Arc<CollationTable>
    {
        &self.table
    }

    pub fn configuration(&self) -> Configuration
    {
        self.configuration
    }

    pub fn strength(&self) -> Strength
    {
        self.configuration.strength
    }

    pub fn decomposition(&self) -> Decomposition
    {
        self.configuration.decomposition
    }

    pub fn french_collation(&self) -> bool
    {
        self.configuration.french_collation
    }

    pub fn alternate_handling(&self) -> AlternateHandling
    {
        self.configuration.alternate
    }

    pub fn case_level(&self) -> bool
    {
        self.configuration.case_level
    }

    pub fn set_configuration(&mut self, configuration: Configuration)
    {
        self.configuration = configuration;
    }

    pub fn set_strength(&mut self, strength: Strength)
    {
        self.configuration.strength = strength;
    }

    pub fn set_decomposition(&mut self, decomposition: Decomposition)
    {
        self.configuration.decomposition = decomposition;
    }

    pub fn set_french_collation(&mut self, french_collation: bool)
    {
        self.configuration.french_collation = french_collation;
    }

    pub fn set_alternate_handling(&mut self, alternate: AlternateHandling)
    {
        self.configuration.alternate = alternate;
    }

    pub fn set_case_level(&mut self, case_level: bool)
    {
        self.configuration.case_level = case_level;
    }

    /// сравнить строки
    #[inline]
    pub fn compare(&self, a: &str, b: &str) -> Ordering
    {
        compare(&self.table, &self.configuration, a, b)
    }

    /// ключ сопоставления строки
    #[inline]
    pub fn collation_key(&self, source: &str) -> CollationKey
    {
        compose_key(&self.table, &self.configuration, source)
    }

    /// сортировка строк
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S])
    {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// строка правил таблицы
    pub fn rules(&self) -> String
    {
        self.table.rules_string()
    }

    /// заморозить: дальнейшие изменения невозможны
    pub fn freeze(self) -> FrozenCollator
    {
        trace!(configuration = ?self.configuration, "collator frozen");

        FrozenCollator { inner: self }
    }
}

/// замороженный коллатор: только чтение, безопасен для использования из нескольких потоков
#[derive(Debug)]
pub struct FrozenCollator
{
    inner: RuleBasedCollator,
}

impl FrozenCollator
{
    pub fn table(&self) -> &Arc<CollationTable>
    {
        self.inner.table()
    }

    pub fn configuration(&self) -> Configuration
    {
        self.inner.configuration()
    }

    #[inline]
    pub fn compare(&self, a: &str, b: &str) -> Ordering
    {
        self.inner.compare(a, b)
    }

    #[inline]
    pub fn collation_key(&self, source: &str) -> CollationKey
    {
        self.inner.collation_key(source)
    }

    pub fn sort<S: AsRef<str>>(&self, items: &mut [S])
    {
        self.inner.sort(items)
    }

    pub fn rules(&self) -> String
    {
        self.inner.rules()
    }

    /// изменяемая копия с той же таблицей и настройками
    pub fn clone_collator(&self) -> RuleBasedCollator
    {
        self.inner.clone()
    }
}

/// коллатор, который можно заморозить на месте
///
/// после заморозки изменение настроек возвращает [`FrozenStateError`]; копия замороженного
/// коллатора - снова изменяемая
#[derive(Debug)]
pub enum Collator
{
    Mutable(RuleBasedCollator),
    Frozen(FrozenCollator),
}

impl Collator
{
    pub fn new(locale: &str) -> Result<Self, CollationError>
    {
        RuleBasedCollator::new(locale).map(Self::Mutable)
    }

    pub fn with_rules(locale: &str, rules: &str) -> Result<Self, CollationError>
    {
        RuleBasedCollator::with_rules(locale, rules).map(Self::Mutable)
    }

    pub fn from_rules(rules: &str) -> Result<Self, CollationError>
    {
        RuleBasedCollator::from_rules(rules).map(Self::Mutable)
    }

    pub fn is_frozen(&self) -> bool
    {
        matches!(self, Self::Frozen(_))
    }

    /// заморозить; повторная заморозка ничего не меняет
    pub fn freeze(&mut self)
    {
        if let Self::Mutable(collator) = self {
            *self = Self::Frozen(collator.clone().freeze());
        }
    }

    fn inner(&self) -> &RuleBasedCollator
    {
        match self {
            Self::Mutable(collator) => collator,
            Self::Frozen(frozen) => &frozen.inner,
        }
    }

    fn inner_mut(&mut self) -> Result<&mut RuleBasedCollator, FrozenStateError>
    {
        match self {
            Self::Mutable(collator) => Ok(collator),
            Self::Frozen(_) => Err(FrozenStateError),
        }
    }

    pub fn table(&self) -> &Arc<CollationTable>
    {
        self.inner().table()
    }

    pub fn configuration(&self) -> Configuration
    {
        self.inner().configuration()
    }

    pub fn strength(&self) -> Strength
    {
        self.inner().strength()
    }

    pub fn decomposition(&self) -> Decomposition
    {
        self.inner().decomposition()
    }

    pub fn french_collation(&self) -> bool
    {
        self.inner().french_collation()
    }

    pub fn alternate_handling(&self) -> AlternateHandling
    {
        self.inner().alternate_handling()
    }

    pub fn case_level(&self) -> bool
    {
        self.inner().case_level()
    }

    pub fn set_configuration(&mut self, configuration: Configuration) -> Result<(), FrozenStateError>
    {
        self.inner_mut()?.set_configuration(configuration);
        Ok(())
    }

    pub fn set_strength(&mut self, strength: Strength) -> Result<(), FrozenStateError>
    {
        self.inner_mut()?.set_strength(strength);
        Ok(())
    }

    pub fn set_decomposition(&mut self, decomposition: Decomposition) -> Result<(), FrozenStateError>
    {
        self.inner_mut()?.set_decomposition(decomposition);
        Ok(())
    }

    pub fn set_french_collation(&mut self, french_collation: bool) -> Result<(), FrozenStateError>
    {
        self.inner_mut()?.set_french_collation(french_collation);
        Ok(())
    }

    pub fn set_alternate_handling(&mut self, alternate: AlternateHandling) -> Result<(), FrozenStateError>
    {
        self.inner_mut()?.set_alternate_handling(alternate);
        Ok(())
    }

    pub fn set_case_level(&mut self, case_level: bool) -> Result<(), FrozenStateError>
    {
        self.inner_mut()?.set_case_level(case_level);
        Ok(())
    }

    #[inline]
    pub fn compare(&self, a: &str, b: &str) -> Ordering
    {
        self.inner().compare(a, b)
    }

    #[inline]
    pub fn collation_key(&self, source: &str) -> CollationKey
    {
        self.inner().collation_key(source)
    }

    pub fn sort<S: AsRef<str>>(&self, items: &mut [S])
    {
        self.inner().sort(items)
    }

    pub fn rules(&self) -> String
    {
        self.inner().rules()
    }
}

impl Clone for Collator
{
    fn clone(&self) -> Self
    {
        Self::Mutable(self.inner().clone())
    }
}

impl From<RuleBasedCollator> for Collator
{
    fn from(collator: RuleBasedCollator) -> Self
    {
        Self::Mutable(collator)
    }
}

impl From<FrozenCollator> for Collator
{
    fn from(collator: FrozenCollator) -> Self
    {
        Self::Frozen(collator)
    }
}
