use core::fmt::{self, Debug};
use std::sync::Arc;

mod mappings;
mod node;

pub use mappings::Mappings;
pub use node::Node;

use crate::elements::ElementsIter;
use crate::error::CollationError;
use crate::locale;
use crate::options::RuleSettings;
use crate::rules::{format_rules, TailoringRule};
use crate::weights::CollationElement;

/// таблица сопоставления: базовая (корневая или локали) с применёнными правилами
///
/// после сборки не изменяется, разделяется между коллаторами через [`Arc`]
pub struct CollationTable
{
    /// упорядоченный список элементов - основа для следующих тейлорингов
    nodes: Vec<Node>,
    /// кодпоинты и сокращения -> веса
    mappings: Mappings,
    /// правила, применённые к корневой таблице
    rules: Vec<TailoringRule>,
    /// настройки из строк правил
    settings: RuleSettings,
}

impl CollationTable
{
    pub(crate) fn new(
        nodes: Vec<Node>,
        mappings: Mappings,
        rules: Vec<TailoringRule>,
        settings: RuleSettings,
    ) -> Self
    {
        Self {
            nodes,
            mappings,
            rules,
            settings,
        }
    }

    /// корневая таблица (CLDR root)
    pub fn root() -> Result<Arc<Self>, CollationError>
    {
        locale::root_table()
    }

    /// таблица локали; неизвестные локали получают корневую таблицу
    pub fn for_locale(tag: &str) -> Result<Arc<Self>, CollationError>
    {
        locale::table_for(tag, None)
    }

    /// правила, применённые к корневой таблице, в порядке применения
    pub fn rules(&self) -> &[TailoringRule]
    {
        &self.rules
    }

    pub fn settings(&self) -> &RuleSettings
    {
        &self.settings
    }

    /// строка правил, из которой можно заново собрать эту таблицу
    pub fn rules_string(&self) -> String
    {
        format_rules(&self.settings, &self.rules)
    }

    /// длина самого длинного сокращения
    pub fn max_contraction_len(&self) -> usize
    {
        self.mappings.max_len()
    }

    /// количество записей (кодпоинты и сокращения)
    pub fn len(&self) -> usize
    {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.len() == 0
    }

    /// веса записи таблицы (None - записи нет, веса вычисляются)
    pub fn lookup(&self, text: &str) -> Option<Vec<CollationElement>>
    {
        let chars: Vec<char> = text.chars().collect();

        self.mappings.get(&[], &chars).map(<[_]>::to_vec)
    }

    /// элементы сопоставления строки
    pub fn elements<'a>(&'a self, chars: &'a [char]) -> ElementsIter<'a>
    {
        ElementsIter::new(&self.mappings, chars)
    }

    pub(crate) fn nodes(&self) -> &[Node]
    {
        &self.nodes
    }
}

impl Debug for CollationTable
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.debug_struct("CollationTable")
            .field("nodes", &self.nodes.len())
            .field("mappings", &self.mappings.len())
            .field("max_contraction_len", &self.mappings.max_len())
            .field("rules", &self.rules.len())
            .field("settings", &self.settings)
            .finish()
    }
}
