use core::cmp::Ordering;

use unicode_collation_tests::*;
use unicode_collator::{Collator, CollationError, RuleBasedCollator, Strength};

fn syntax_error(result: Result<Collator, CollationError>) -> (usize, String)
{
    match result {
        Err(CollationError::Syntax(error)) => (error.offset, error.message),
        other => panic!("expected a syntax error, got {:?}", other.map(|collator| collator.rules())),
    }
}

#[test]
fn polish()
{
    let collator = collator("pl", Strength::Tertiary);

    assert_strictly_increasing(&collator, &POLISH_SORTED);
    assert_ordered_pairwise(&collator, &POLISH_SORTED);
}

#[test]
fn turkish_dotless_i()
{
    let collator = collator("tr", Strength::Tertiary);

    assert_strictly_increasing(&collator, &["h", "ı", "I", "i", "İ", "j"]);
    assert_strictly_increasing(&collator, &["cz", "ç", "d", "gz", "ğ", "h"]);

    let primary = self::collator("tr", Strength::Primary);

    assert_eq!(primary.compare("ı", "I"), Ordering::Equal);
    assert_eq!(primary.compare("i", "İ"), Ordering::Equal);
    assert_eq!(primary.compare("I", "i"), Ordering::Less);
}

#[test]
fn czech_ch_contraction()
{
    let collator = collator("cs", Strength::Tertiary);

    assert_strictly_increasing(&collator, &["h", "hz", "ch", "cH", "Ch", "CH", "i"]);
    assert_strictly_increasing(&collator, &["c", "cz", "č", "d"]);
    assert_eq!(collator.table().max_contraction_len(), 2);
}

#[test]
fn spanish_and_nordic()
{
    let spanish = collator("es_ES", Strength::Tertiary);
    assert_strictly_increasing(&spanish, &["nz", "ñ", "Ñ", "o"]);

    let swedish = collator("sv", Strength::Tertiary);
    assert_strictly_increasing(&swedish, &["z", "å", "ä", "æ", "ö", "ø"]);
    assert_eq!(
        collator("sv", Strength::Primary).compare("ä", "æ"),
        Ordering::Equal
    );

    let danish = collator("da", Strength::Tertiary);
    assert_strictly_increasing(&danish, &["z", "æ", "Æ", "ø", "å"]);
}

#[test]
fn secondary_expansion()
{
    let mut collator = Collator::from_rules("&ae << æ <<< Æ").unwrap();

    assert_strictly_increasing(&collator, &["ad", "ae", "æ", "Æ", "af"]);

    collator.set_strength(Strength::Primary).unwrap();
    assert_eq!(collator.compare("ae", "æ"), Ordering::Equal);
}

#[test]
fn expansion_to_composed_letters()
{
    let mut collator = Collator::from_rules("&c = x/ä &c = y/ß").unwrap();
    collator.set_strength(Strength::Secondary).unwrap();

    assert_eq!(collator.compare("x", "cä"), Ordering::Equal);
    assert_eq!(collator.compare("x", "ca\u{308}"), Ordering::Equal);
    assert_eq!(collator.compare("y", "cß"), Ordering::Equal);
    assert_eq!(collator.compare("y", "css"), Ordering::Equal);
}

#[test]
fn prefix_context()
{
    let collator = Collator::from_rules("&x < a|b").unwrap();

    assert_strictly_increasing(&collator, &["ax", "ab", "ay"]);
    assert_strictly_increasing(&collator, &["b", "c", "x"]);
}

#[test]
fn identical_relation()
{
    let mut collator = Collator::from_rules("&b = ✓").unwrap();

    assert_eq!(collator.compare("a✓c", "abc"), Ordering::Equal);

    collator.set_strength(Strength::Identical).unwrap();
    assert_ne!(collator.compare("a✓c", "abc"), Ordering::Equal);
}

#[test]
fn variable_anchor()
{
    let collator = Collator::from_rules("[alternate shifted] &[last variable] < ✓").unwrap();

    assert_eq!(collator.compare("a✓b", "ab"), Ordering::Equal);
    assert_eq!(collator.compare("a✓b", "a-b"), Ordering::Equal);
}

#[test]
fn rules_on_top_of_locale()
{
    let collator = Collator::with_rules("pl", "&z < q").unwrap();

    assert_strictly_increasing(&collator, &["a", "ą", "z", "q", "ź"]);
    assert!(collator.rules().starts_with("&A < ą <<< Ą"));
    assert!(collator.rules().ends_with("&z < q"));
}

#[test]
fn syntax_errors()
{
    assert_eq!(
        syntax_error(Collator::from_rules("&a < 'b")),
        (5, "unbalanced quote".to_owned())
    );
    assert_eq!(
        syntax_error(Collator::from_rules("&a > b")),
        (3, "unrecognized operator '>'".to_owned())
    );
    assert_eq!(
        syntax_error(Collator::from_rules("&a < b &ꙮ < c")),
        (7, "reset anchor references an undefined element 'ꙮ'".to_owned())
    );
    assert_eq!(
        syntax_error(Collator::with_rules("pl", "&a < a")),
        (3, "element cannot be tailored relative to itself".to_owned())
    );
}

#[test]
fn failed_construction_does_not_affect_cache()
{
    assert!(Collator::with_rules("sv", "&a < b &ꙮ < c").is_err());

    let collator = Collator::with_rules("sv", "&a < b").unwrap();
    assert_eq!(collator.compare("b", "c"), Ordering::Less);
    assert_eq!(collator.compare("a", "b"), Ordering::Less);
}

#[test]
fn rules_round_trip()
{
    let sources = [
        "&ae << æ <<< Æ",
        "&x < a|b",
        "[strength 2] [backwards 2] &c < č <<< Č",
        "&[before 1]a < '*' &b = ✓ &ch < \\u0301/e",
        "[alternate shifted] &[last variable] < ✓ &z <* ŕ-ř",
    ];

    for source in sources {
        let original = RuleBasedCollator::from_rules(source).unwrap();
        let regenerated = RuleBasedCollator::from_rules(&original.rules()).unwrap();

        assert_eq!(regenerated.configuration(), original.configuration(), "{}", source);

        let words: Vec<&str> = MIXED_WORDS
            .iter()
            .chain(["ab", "ax", "ay", "č", "ch", "✓", "*", "ŕ", "ř", "z"].iter())
            .copied()
            .collect();

        for a in words.iter() {
            for b in words.iter() {
                assert_eq!(regenerated.compare(a, b), original.compare(a, b), "{}: {:?} / {:?}", source, a, b);
            }
        }
    }
}
