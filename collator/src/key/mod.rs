use core::cmp::Ordering;
use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};

use crate::compare::{identical_chars, level_weights, prepare, resolve_weights};
use crate::options::{Configuration, Strength};
use crate::table::CollationTable;

/// разделитель уровней: меньше старшего байта любого ненулевого веса
pub const LEVEL_SEPARATOR: u8 = 0x01;

/// ключ сопоставления: байты, побайтовое сравнение которых совпадает со сравнением строк
#[derive(Clone)]
pub struct CollationKey
{
    source: String,
    bytes: Box<[u8]>,
}

impl CollationKey
{
    /// исходная строка
    #[inline]
    pub fn source(&self) -> &str
    {
        &self.source
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8]
    {
        &self.bytes
    }

    #[inline]
    pub fn into_bytes(self) -> Box<[u8]>
    {
        self.bytes
    }

    /// сравнение ключей; исходные строки не учитываются
    #[inline]
    pub fn compare_to(&self, other: &Self) -> Ordering
    {
        self.bytes.cmp(&other.bytes)
    }
}

impl PartialEq for CollationKey
{
    fn eq(&self, other: &Self) -> bool
    {
        self.bytes == other.bytes
    }
}

impl Eq for CollationKey {}

impl PartialOrd for CollationKey
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering>
    {
        Some(self.cmp(other))
    }
}

impl Ord for CollationKey
{
    fn cmp(&self, other: &Self) -> Ordering
    {
        self.compare_to(other)
    }
}

impl Hash for CollationKey
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        self.bytes.hash(state);
    }
}

impl Debug for CollationKey
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "CollationKey({:?}, [", self.source)?;

        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }

        f.write_str("])")
    }
}

/// ключ строки: веса уровней (u16, big endian), после каждого уровня - разделитель;
/// на уровне Identical дописываются кодпоинты NFD, по 3 байта
pub(crate) fn compose_key(table: &CollationTable, configuration: &Configuration, source: &str) -> CollationKey
{
    let chars = prepare(source, configuration.decomposition);
    let weights = resolve_weights(table, configuration, &chars);

    let mut bytes = Vec::with_capacity(weights.len() * 8 + 5);

    for level in configuration.levels() {
        let mut push = |weight: u16| bytes.extend_from_slice(&weight.to_be_bytes());

        match configuration.is_backwards(level) {
            true => level_weights(&weights, level).rev().for_each(&mut push),
            false => level_weights(&weights, level).for_each(&mut push),
        }

        bytes.push(LEVEL_SEPARATOR);
    }

    if configuration.strength == Strength::Identical {
        for c in identical_chars(chars, configuration.decomposition) {
            bytes.extend_from_slice(&(c as u32).to_be_bytes()[1 ..]);
        }
    }

    CollationKey {
        source: source.to_owned(),
        bytes: bytes.into_boxed_slice(),
    }
}
