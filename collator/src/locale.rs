//! тейлоринги локалей и кеш собранных таблиц

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::builder::TailoringBuilder;
use crate::error::CollationError;
use crate::rules::parse_rules;
use crate::table::CollationTable;

const ROOT_ID: &str = "root";

/// правила локалей; локали без записи (en, de, ...) используют корневой порядок
const TAILORINGS: [(&str, &str); 9] = [
    ("cs", "&C<č<<<Č &H<ch<<<cH<<<Ch<<<CH &R<ř<<<Ř &S<š<<<Š &Z<ž<<<Ž"),
    ("da", "&Z<æ<<<Æ<ø<<<Ø<å<<<Å"),
    ("es", "&N<ñ<<<Ñ"),
    ("fr-ca", "[backwards 2]"),
    ("nb", "&Z<æ<<<Æ<ø<<<Ø<å<<<Å"),
    ("no", "&Z<æ<<<Æ<ø<<<Ø<å<<<Å"),
    (
        "pl",
        "&A<ą<<<Ą &C<ć<<<Ć &E<ę<<<Ę &L<ł<<<Ł &N<ń<<<Ń &O<ó<<<Ó &S<ś<<<Ś &Z<ź<<<Ź<ż<<<Ż",
    ),
    ("sv", "&Z<å<<<Å<ä<<<Ä<<æ<<<Æ<ö<<<Ö<<ø<<<Ø"),
    (
        "tr",
        "&C<ç<<<Ç &G<ğ<<<Ğ &[before 1]i<ı<<<I &i<<<İ &O<ö<<<Ö &S<ş<<<Ş &U<ü<<<Ü",
    ),
];

/// ключ кеша: тейлоринг локали + дополнительные правила
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TableKey
{
    id: &'static str,
    custom: String,
}

static ROOT: OnceCell<Arc<CollationTable>> = OnceCell::new();
static TABLES: Lazy<RwLock<HashMap<TableKey, Arc<CollationTable>>>> = Lazy::new(Default::default);

/// локали, для которых есть собственные правила
pub fn available_locales() -> impl Iterator<Item = &'static str>
{
    TAILORINGS.iter().map(|(id, _)| *id)
}

/// правила локали: сначала полный тег, затем язык; "pl_PL", "PL-pl" и "pl" равнозначны
pub fn locale_rules(tag: &str) -> Option<(&'static str, &'static str)>
{
    let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
    let language = normalized.split('-').next().unwrap_or_default();

    let found = [normalized.as_str(), language]
        .into_iter()
        .find_map(|candidate| TAILORINGS.iter().find(|(id, _)| *id == candidate))
        .copied();

    found
}

pub(crate) fn root_table() -> Result<Arc<CollationTable>, CollationError>
{
    ROOT.get_or_try_init(|| {
        let table = TailoringBuilder::from_root().build()?;
        debug!(entries = table.len(), "root collation table built");

        Ok(Arc::new(table))
    })
    .cloned()
}

/// таблица локали с дополнительными правилами; собранные таблицы кешируются
pub(crate) fn table_for(tag: &str, custom: Option<&str>) -> Result<Arc<CollationTable>, CollationError>
{
    let tailoring = locale_rules(tag);
    let custom = custom.unwrap_or_default();

    if tailoring.is_none() && !tag.trim().is_empty() {
        debug!(tag, "no tailoring for locale, using root order");
    }

    if tailoring.is_none() && custom.is_empty() {
        return root_table();
    }

    let key = TableKey {
        id: tailoring.map_or(ROOT_ID, |(id, _)| id),
        custom: custom.to_owned(),
    };

    if let Some(table) = TABLES.read().get(&key) {
        trace!(locale = key.id, "collation table cache hit");
        return Ok(Arc::clone(table));
    }

    // сборка - вне блокировки; если таблицу успел собрать другой поток, берём его
    let root = root_table()?;
    let mut builder = TailoringBuilder::new(&root);

    if let Some((_, rules)) = tailoring {
        builder.apply(&parse_rules(rules)?)?;
    }

    if !custom.is_empty() {
        builder.apply(&parse_rules(custom)?)?;
    }

    let table = Arc::new(builder.build()?);

    debug!(
        locale = key.id,
        custom = !key.custom.is_empty(),
        entries = table.len(),
        "tailored collation table built"
    );

    Ok(Arc::clone(TABLES.write().entry(key).or_insert(table)))
}
