//! сопоставление строк (UCA / CLDR root) с тейлорингом строками правил
//!
//! ```
//! use unicode_collator::{Collator, Strength};
//! use std::cmp::Ordering;
//!
//! let mut collator = Collator::new("pl").unwrap();
//! assert_eq!(collator.compare("łódź", "lody"), Ordering::Greater);
//!
//! collator.set_strength(Strength::Primary).unwrap();
//! collator.freeze();
//! assert!(collator.set_strength(Strength::Tertiary).is_err());
//! ```

pub use builder::TailoringBuilder;
pub use collator::{Collator, FrozenCollator, RuleBasedCollator};
pub use elements::ElementsIter;
pub use error::{CollationError, FrozenStateError, RuleSyntaxError};
pub use key::{CollationKey, LEVEL_SEPARATOR};
pub use locale::{available_locales, locale_rules};
pub use options::{AlternateHandling, Configuration, Decomposition, RuleSettings, Strength};
pub use rules::{format_rules, parse_rules, Anchor, Difference, ParsedRules, SpecialPosition, TailoringRule};
pub use table::CollationTable;
pub use weights::{CollationElement, Level};

mod builder;
mod collator;
mod compare;
mod elements;
mod error;
mod hangul;
mod implicit;
mod key;
mod locale;
mod normalization;
mod options;
mod root;
mod rules;
mod table;
mod weights;
