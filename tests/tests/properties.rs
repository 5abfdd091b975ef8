use core::cmp::Ordering;

use proptest::prelude::*;
use proptest::sample::select;
use unicode_collator::{AlternateHandling, Collator, Configuration, Decomposition, Strength};
use unicode_normalization::UnicodeNormalization;

const ALPHABET: [char; 32] = [
    'a', 'A', 'á', 'ä', 'æ', 'b', 'c', 'č', 'e', 'é', 'h', 'i', 'I', 'ı', 'İ', 's', 'ß', 'z', 'ż', '-', ' ',
    '.', '1', '$', '中', '한', '\u{301}', '\u{300}', '\u{308}', '\u{328}', '\u{0}', 'ё',
];

const STRENGTHS: [Strength; 5] = [
    Strength::Primary,
    Strength::Secondary,
    Strength::Tertiary,
    Strength::Quaternary,
    Strength::Identical,
];

fn text() -> impl Strategy<Value = String>
{
    proptest::collection::vec(select(ALPHABET.to_vec()), 0 .. 6).prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

fn locale() -> impl Strategy<Value = &'static str>
{
    select(vec!["", "pl", "tr", "cs", "sv"])
}

fn configuration() -> impl Strategy<Value = Configuration>
{
    (0 .. STRENGTHS.len(), any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(strength, shifted, french_collation, case_level, canonical)| Configuration {
            strength: STRENGTHS[strength],
            alternate: match shifted {
                true => AlternateHandling::Shifted,
                false => AlternateHandling::NonIgnorable,
            },
            french_collation,
            case_level,
            decomposition: match canonical {
                true => Decomposition::Canonical,
                false => Decomposition::None,
            },
        },
    )
}

fn collator(locale: &str, configuration: Configuration) -> Collator
{
    let mut collator = Collator::new(locale).unwrap();
    collator.set_configuration(configuration).unwrap();
    collator
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn keys_agree_with_compare(a in text(), b in text(), locale in locale(), configuration in configuration())
    {
        let collator = collator(locale, configuration);

        prop_assert_eq!(
            collator.collation_key(&a).compare_to(&collator.collation_key(&b)),
            collator.compare(&a, &b)
        );
    }

    #[test]
    fn antisymmetry(a in text(), b in text(), locale in locale(), configuration in configuration())
    {
        let collator = collator(locale, configuration);

        prop_assert_eq!(collator.compare(&a, &b), collator.compare(&b, &a).reverse());
    }

    #[test]
    fn transitivity(a in text(), b in text(), c in text(), locale in locale(), configuration in configuration())
    {
        let collator = collator(locale, configuration);

        let mut sorted = [a, b, c];
        collator.sort(&mut sorted);

        prop_assert_ne!(collator.compare(&sorted[0], &sorted[1]), Ordering::Greater);
        prop_assert_ne!(collator.compare(&sorted[1], &sorted[2]), Ordering::Greater);
        prop_assert_ne!(collator.compare(&sorted[0], &sorted[2]), Ordering::Greater);

        if collator.compare(&sorted[0], &sorted[1]) == Ordering::Less {
            prop_assert_eq!(collator.compare(&sorted[0], &sorted[2]), Ordering::Less);
        }
    }

    #[test]
    fn stronger_levels_never_flip(a in text(), b in text(), locale in locale(), configuration in configuration())
    {
        // уровень регистра стоит между L2 и L3, поэтому проверяется без него
        let configuration = Configuration { case_level: false, ..configuration };
        let mut collator = collator(locale, configuration);
        let mut previous = Ordering::Equal;

        for strength in STRENGTHS {
            collator.set_strength(strength).unwrap();
            let ordering = collator.compare(&a, &b);

            if previous != Ordering::Equal {
                prop_assert_eq!(ordering, previous, "{:?}", strength);
            }

            previous = ordering;
        }
    }

    #[test]
    fn canonical_equivalents_are_equal(a in text(), locale in locale(), configuration in configuration())
    {
        let configuration = Configuration { decomposition: Decomposition::Canonical, ..configuration };
        let collator = collator(locale, configuration);

        let nfd: String = a.nfd().collect();
        let nfc: String = a.nfc().collect();

        prop_assert_eq!(collator.compare(&a, &nfd), Ordering::Equal);
        prop_assert_eq!(collator.compare(&nfc, &nfd), Ordering::Equal);
        prop_assert_eq!(collator.collation_key(&nfc), collator.collation_key(&nfd));
    }
}
