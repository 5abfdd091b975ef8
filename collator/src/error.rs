use thiserror::Error;

use crate::weights::Level;

/// ошибка разбора (или применения) строки правил
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule syntax error at offset {offset}: {message}")]
pub struct RuleSyntaxError
{
    /// позиция в строке правил, в символах
    pub offset: usize,
    pub message: String,
}

impl RuleSyntaxError
{
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self
    {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// попытка изменить замороженный коллатор
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("collator is frozen and cannot be modified")]
pub struct FrozenStateError;

/// ошибка создания коллатора
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollationError
{
    #[error(transparent)]
    Syntax(#[from] RuleSyntaxError),

    /// тейлоринг исчерпал доступные веса уровня
    #[error("ran out of {level:?} weights while building the collation table")]
    WeightOverflow
    {
        level: Level
    },
}
