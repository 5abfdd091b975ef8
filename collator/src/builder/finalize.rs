use core::ops::RangeInclusive;

use tracing::debug;

use super::TailoringBuilder;
use crate::elements::ElementsIter;
use crate::error::CollationError;
use crate::normalization;
use crate::rules::Difference;
use crate::table::{CollationTable, Mappings, Node};
use crate::weights::{CollationElement, Level, COMMON_WEIGHT, FIRST_PRIMARY, LAST_TABLE_PRIMARY, MAX_WEIGHT};

/// блоки, предкомпозитные кодпоинты которых получают веса своей декомпозиции
const CLOSURE_RANGES: [RangeInclusive<u32>; 6] = [
    0x00C0 ..= 0x024F,
    0x0300 ..= 0x036F,
    0x0370 ..= 0x03FF,
    0x0400 ..= 0x04FF,
    0x1E00 ..= 0x1EFF,
    0x1F00 ..= 0x1FFF,
];

impl TailoringBuilder
{
    /// назначить веса и собрать таблицу
    pub fn build(self) -> Result<CollationTable, CollationError>
    {
        let weights = assign_weights(&self.nodes)?;

        // элементы с расширением; пока расширение не разрешено, у элемента один вес
        let expanding: Vec<usize> = (1 .. self.nodes.len())
            .filter(|&i| !self.nodes[i].expansion.is_empty())
            .collect();
        let mut resolved: Vec<Vec<CollationElement>> = expanding.iter().map(|&i| vec![weights[i]]).collect();

        // расширение может ссылаться на другое расширение или на кодпоинт из замыкания,
        // поэтому веса уточняются, пока не перестанут меняться; цикл в правилах ограничен числом проходов
        let mut mappings = compose_mappings(&self.nodes, &weights, &expanding, &resolved);

        for _ in 0 ..= expanding.len() {
            let next: Vec<Vec<CollationElement>> = expanding
                .iter()
                .map(|&i| {
                    let mut elements = vec![weights[i]];
                    elements.extend(ElementsIter::new(&mappings, &self.nodes[i].expansion));
                    elements
                })
                .collect();

            if next == resolved {
                break;
            }

            resolved = next;
            mappings = compose_mappings(&self.nodes, &weights, &expanding, &resolved);
        }

        debug!(
            nodes = self.nodes.len(),
            expansions = expanding.len(),
            mappings = mappings.len(),
            max_contraction_len = mappings.max_len(),
            "collation table built"
        );

        Ok(CollationTable::new(self.nodes, mappings, self.rules, self.settings))
    }
}

/// таблица сопоставлений: веса элементов списка, разрешённые расширения, затем замыкания
fn compose_mappings(
    nodes: &[Node],
    weights: &[CollationElement],
    expanding: &[usize],
    resolved: &[Vec<CollationElement>],
) -> Mappings
{
    let mut mappings = Mappings::default();

    for (node, &ce) in nodes.iter().zip(weights.iter()).skip(1) {
        mappings.insert(&node.prefix, &node.chars, vec![ce]);
    }

    for (&i, elements) in expanding.iter().zip(resolved.iter()) {
        mappings.insert(&nodes[i].prefix, &nodes[i].chars, elements.clone());
    }

    canonical_closure(nodes, &mut mappings);
    precomposed_closure(&mut mappings);

    mappings
}

/// веса элементов списка: каждый следующий элемент больше предыдущего на своём уровне различия
pub(super) fn assign_weights(nodes: &[Node]) -> Result<Vec<CollationElement>, CollationError>
{
    let mut result = Vec::with_capacity(nodes.len());
    let (mut primary, mut secondary, mut tertiary) = (0u16, 0u16, 0u16);

    for node in nodes.iter() {
        if !node.is_sentinel() {
            match node.difference {
                Difference::Primary => {
                    primary = match primary {
                        0 => FIRST_PRIMARY,
                        _ => increment(primary, LAST_TABLE_PRIMARY, Level::Primary)?,
                    };
                    secondary = COMMON_WEIGHT;
                    tertiary = COMMON_WEIGHT;
                }
                Difference::Secondary => {
                    secondary = increment(secondary.max(COMMON_WEIGHT), MAX_WEIGHT, Level::Secondary)?;
                    tertiary = COMMON_WEIGHT;
                }
                Difference::Tertiary => {
                    tertiary = increment(tertiary.max(COMMON_WEIGHT), MAX_WEIGHT, Level::Tertiary)?;
                }
                Difference::Identical => (),
            }
        }

        result.push(
            CollationElement::new(primary, secondary, tertiary)
                .with_variable(node.variable && primary != 0)
                .with_upper(node.is_upper()),
        );
    }

    Ok(result)
}

#[inline]
fn increment(weight: u16, limit: u16, level: Level) -> Result<u16, CollationError>
{
    match weight < limit {
        true => Ok(weight + 1),
        false => Err(CollationError::WeightOverflow { level }),
    }
}

/// декомпозиция элемента списка получает те же веса, что и сам элемент
fn canonical_closure(nodes: &[Node], mappings: &mut Mappings)
{
    for node in nodes.iter().skip(1) {
        let Some(decomposed) = normalization::decompose_str(&node.chars) else {
            continue;
        };

        if mappings.get(&node.prefix, &decomposed).is_some() {
            continue;
        }

        if let Some(elements) = mappings.get(&node.prefix, &node.chars).map(<[_]>::to_vec) {
            mappings.insert(&node.prefix, &decomposed, elements);
        }
    }
}

/// предкомпозитные кодпоинты, отсутствующие в списке, получают веса своей декомпозиции
fn precomposed_closure(mappings: &mut Mappings)
{
    let candidates = CLOSURE_RANGES
        .iter()
        .cloned()
        .flatten()
        .filter_map(char::from_u32);

    for c in candidates {
        if mappings.contains(&[c]) {
            continue;
        }

        let decomposed = normalization::decompose(c);

        if decomposed.len() == 1 && decomposed[0] == c {
            continue;
        }

        if let Some(elements) = mappings.resolve_exact(&decomposed) {
            mappings.insert(&[], &[c], elements);
        }
    }
}
