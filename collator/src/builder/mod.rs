//! применение правил тейлоринга к упорядоченному списку элементов таблицы

use tracing::trace;

mod finalize;

use crate::error::RuleSyntaxError;
use crate::normalization;
use crate::options::RuleSettings;
use crate::root;
use crate::rules::{Anchor, Difference, ParsedRules, SpecialPosition, TailoringRule};
use crate::table::{CollationTable, Node};

/// сборщик таблицы: список элементов базовой таблицы + правила
pub struct TailoringBuilder
{
    nodes: Vec<Node>,
    rules: Vec<TailoringRule>,
    settings: RuleSettings,
    cursor: Option<Cursor>,
}

/// элемент, к которому применяется следующее отношение
#[derive(Debug, Clone)]
struct Cursor
{
    index: usize,
    /// часть якоря сброса, отсутствующая в таблице - становится расширением
    tail: Vec<char>,
}

impl TailoringBuilder
{
    /// тейлоринг поверх готовой таблицы
    pub fn new(base: &CollationTable) -> Self
    {
        Self {
            nodes: base.nodes().to_vec(),
            rules: base.rules().to_vec(),
            settings: *base.settings(),
            cursor: None,
        }
    }

    /// корневая таблица
    pub fn from_root() -> Self
    {
        Self::from_nodes(root::nodes())
    }

    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self
    {
        Self {
            nodes,
            rules: vec![],
            settings: RuleSettings::default(),
            cursor: None,
        }
    }

    /// применить правила; каждая строка правил начинается со сброса
    pub fn apply(&mut self, parsed: &ParsedRules) -> Result<(), RuleSyntaxError>
    {
        self.cursor = None;

        for rule in parsed.rules.iter() {
            self.apply_rule(rule)?;
        }

        self.settings.merge(&parsed.settings);
        self.rules.extend(parsed.rules.iter().cloned());

        Ok(())
    }

    fn apply_rule(&mut self, rule: &TailoringRule) -> Result<(), RuleSyntaxError>
    {
        match rule {
            TailoringRule::Reset {
                anchor,
                before,
                offset,
            } => {
                let (index, tail) = self.resolve_anchor(anchor, *offset)?;

                let index = match before {
                    Some(difference) => self.before_position(index, *difference),
                    None => index,
                };

                self.cursor = Some(Cursor { index, tail });
            }
            TailoringRule::Relation {
                difference,
                prefix,
                chars,
                expansion,
                offset,
            } => {
                let Some(mut cursor) = self.cursor.take() else {
                    return Err(RuleSyntaxError::new(
                        *offset,
                        "relation without a preceding reset",
                    ));
                };

                let prefix: Vec<char> = prefix.chars().collect();
                let chars: Vec<char> = chars.chars().collect();

                // элемент уже есть в таблице - переносим его
                if let Some(existing) = self.find(&prefix, &chars) {
                    if existing == cursor.index {
                        return Err(RuleSyntaxError::new(
                            *offset,
                            "element cannot be tailored relative to itself",
                        ));
                    }

                    self.remove(existing);

                    if existing < cursor.index {
                        cursor.index -= 1;
                    }
                }

                let position = self.insertion_position(cursor.index, *difference);

                let mut node = Node::new(*difference, &chars);
                node.prefix = prefix.into();
                node.expansion = cursor.tail.iter().copied().chain(expansion.chars()).collect();
                node.variable = self.nodes[cursor.index].variable;

                trace!(anchor = cursor.index, position, ?difference, "tailoring relation");

                self.nodes.insert(position, node);
                cursor.index = position;
                self.cursor = Some(cursor);
            }
        }

        Ok(())
    }

    /// позиция якоря и часть якоря, не найденная в таблице
    fn resolve_anchor(&self, anchor: &Anchor, offset: usize) -> Result<(usize, Vec<char>), RuleSyntaxError>
    {
        match anchor {
            Anchor::Position(position) => self
                .special_position(*position)
                .map(|index| (index, vec![]))
                .ok_or_else(|| {
                    RuleSyntaxError::new(
                        offset,
                        format!("reset anchor references an undefined element [{}]", position.name()),
                    )
                }),
            Anchor::Text(text) => {
                let chars: Vec<char> = text.chars().collect();

                // сначала как есть, затем - декомпозиция (сброс на "ä" - это сброс на "a" + расширение)
                self.longest_anchor(&chars)
                    .or_else(|| {
                        normalization::decompose_str(&chars)
                            .and_then(|decomposed| self.longest_anchor(&decomposed))
                    })
                    .ok_or_else(|| {
                        RuleSyntaxError::new(
                            offset,
                            format!("reset anchor references an undefined element '{}'", text),
                        )
                    })
            }
        }
    }

    /// самое длинное начало якоря, присутствующее в списке
    fn longest_anchor(&self, chars: &[char]) -> Option<(usize, Vec<char>)>
    {
        (1 ..= chars.len()).rev().find_map(|len| {
            self.find(&[], &chars[.. len])
                .map(|index| (index, chars[len ..].to_vec()))
        })
    }

    fn special_position(&self, position: SpecialPosition) -> Option<usize>
    {
        let is_primary = |node: &Node| node.difference == Difference::Primary && !node.is_sentinel();
        let first_regular = self
            .nodes
            .iter()
            .position(|node| is_primary(node) && !node.variable);

        match position {
            SpecialPosition::FirstPrimaryIgnorable => Some(0),
            SpecialPosition::LastPrimaryIgnorable => {
                let first_primary = self.nodes.iter().position(is_primary);
                Some(first_primary.unwrap_or(self.nodes.len()).saturating_sub(1))
            }
            SpecialPosition::FirstVariable => self.nodes.iter().position(|node| node.variable),
            SpecialPosition::LastVariable => self.nodes.iter().rposition(|node| node.variable),
            SpecialPosition::FirstRegular => first_regular,
            SpecialPosition::LastRegular => {
                let first_regular = first_regular?;

                self.nodes
                    .iter()
                    .rposition(|node| !node.variable)
                    .filter(|&index| index >= first_regular)
            }
        }
    }

    /// [before N]: элемент, предшествующий группе якоря на уровне N
    fn before_position(&self, index: usize, difference: Difference) -> usize
    {
        let mut index = index;

        while index > 0 && self.nodes[index].difference > difference {
            index -= 1;
        }

        index.saturating_sub(1)
    }

    /// новый элемент встаёт после якоря и элементов, отличающихся от якоря на более низком уровне
    fn insertion_position(&self, anchor: usize, difference: Difference) -> usize
    {
        let mut index = anchor + 1;

        while index < self.nodes.len() && self.nodes[index].difference > difference {
            index += 1;
        }

        index
    }

    fn find(&self, prefix: &[char], chars: &[char]) -> Option<usize>
    {
        self.nodes.iter().position(|node| node.matches(prefix, chars))
    }

    /// следующий элемент наследует более сильное из двух различий
    fn remove(&mut self, index: usize)
    {
        let removed = self.nodes.remove(index);

        if let Some(next) = self.nodes.get_mut(index) {
            if next.difference > removed.difference {
                next.difference = removed.difference;
            }
        }
    }
}
