use core::cmp::Ordering;

use rand::seq::SliceRandom;
use unicode_collation_tests::*;
use unicode_collator::{AlternateHandling, Collator, Decomposition, FrozenStateError, Strength};

#[test]
fn currency_order()
{
    let collator = collator("en", Strength::Tertiary);

    assert_ordered_pairwise(&collator, &CURRENCY);

    let mut keys: Vec<_> = CURRENCY.iter().map(|s| collator.collation_key(s)).collect();
    keys.shuffle(&mut rand::thread_rng());
    keys.sort();

    let sorted: Vec<&str> = keys.iter().map(|key| key.source()).collect();
    assert_eq!(sorted, CURRENCY);
}

#[test]
fn root_scripts()
{
    let collator = collator("und", Strength::Tertiary);

    assert_strictly_increasing(
        &collator,
        &[" ", "_", "-", ",", "!", "?", ".", "'", "(", "@", "&", "#", "%", "`", "^", "+", "<", "=", ">", "|", "~"],
    );
    assert_strictly_increasing(&collator, &["9", "a", "b", "z", "ʒ", "α", "ω", "а", "я", "一", "丁"]);
    assert_strictly_increasing(&collator, &["е", "ё", "Ё", "ж"]);
    assert_strictly_increasing(&collator, &["σ", "ς", "Σ", "τ"]);
    assert_strictly_increasing(&collator, &["1", "１", "¹", "₁", "2"]);
}

#[test]
fn german_uses_root()
{
    let collator = collator("de", Strength::Tertiary);

    assert_strictly_increasing(&collator, &["Muller", "Müller", "Mullers"]);
    assert_strictly_increasing(&collator, &["Strasse", "Straße", "Strassen"]);

    let secondary = self::collator("de", Strength::Secondary);
    assert_eq!(secondary.compare("Strasse", "straße"), Ordering::Equal);
}

#[test]
fn french_secondary_reversal()
{
    let mut collator = collator("fr", Strength::Secondary);
    let forward = collator.compare("e\u{301}e", "e\u{300}\u{301}e");

    collator.set_french_collation(true).unwrap();
    let backward = collator.compare("e\u{301}e", "e\u{300}\u{301}e");

    assert_ne!(forward, Ordering::Equal);
    assert_eq!(backward, forward.reverse());
}

#[test]
fn canadian_french()
{
    let collator = Collator::new("fr_CA").unwrap();
    assert!(collator.french_collation());

    assert_strictly_increasing(&collator, &["cote", "côte", "coté", "côté"]);

    let french = Collator::new("fr").unwrap();
    assert_strictly_increasing(&french, &["cote", "coté", "côte", "côté"]);
}

#[test]
fn canonical_equivalence()
{
    for strength in [
        Strength::Primary,
        Strength::Secondary,
        Strength::Tertiary,
        Strength::Quaternary,
        Strength::Identical,
    ] {
        let mut collator = collator("", strength);
        collator.set_decomposition(Decomposition::Canonical).unwrap();

        for (a, b) in [
            ("a\u{308}", "ä"),
            ("a\u{328}\u{301}", "a\u{301}\u{328}"),
            ("ą\u{301}", "a\u{301}\u{328}"),
            ("\u{1112}\u{1161}\u{11AB}", "한"),
            ("Å", "\u{212B}"),
        ] {
            assert_eq!(collator.compare(a, b), Ordering::Equal, "{:?} / {:?}", a, b);
            assert_eq!(collator.collation_key(a), collator.collation_key(b));
        }
    }
}

#[test]
fn precomposed_without_decomposition()
{
    let collator = collator("", Strength::Identical);

    assert_eq!(collator.decomposition(), Decomposition::None);
    assert_eq!(collator.compare("a\u{308}", "ä"), Ordering::Equal);
    assert_eq!(collator.compare("й", "и\u{306}"), Ordering::Equal);
    assert_eq!(collator.compare("\u{1112}\u{1161}\u{11AB}", "한"), Ordering::Equal);
}

#[test]
fn empty_and_ignorable()
{
    for strength in [Strength::Primary, Strength::Tertiary, Strength::Quaternary] {
        let collator = collator("", strength);

        assert_eq!(collator.compare("", ""), Ordering::Equal);
        assert_eq!(collator.compare("", "\u{0}\u{200B}"), Ordering::Equal);
        assert_eq!(collator.compare("", "a"), Ordering::Less);
        assert_eq!(collator.compare("a", ""), Ordering::Greater);
        assert_eq!(collator.collation_key(""), collator.collation_key("\u{7F}"));
    }

    let identical = collator("", Strength::Identical);
    assert_eq!(identical.compare("", "\u{0}"), Ordering::Less);
}

#[test]
fn frozen_state()
{
    let mut collator = Collator::new("pl").unwrap();
    let before = collator.configuration();

    collator.freeze();

    assert!(collator.is_frozen());
    assert_eq!(collator.set_strength(Strength::Primary), Err(FrozenStateError));
    assert_eq!(collator.set_decomposition(Decomposition::Canonical), Err(FrozenStateError));
    assert_eq!(collator.set_french_collation(true), Err(FrozenStateError));
    assert_eq!(
        collator.set_alternate_handling(AlternateHandling::Shifted),
        Err(FrozenStateError)
    );
    assert_eq!(collator.set_case_level(true), Err(FrozenStateError));
    assert_eq!(collator.configuration(), before);
    assert_eq!(FrozenStateError.to_string(), "collator is frozen and cannot be modified");
}

#[test]
fn clones_are_independent()
{
    let mut original = Collator::new("pl").unwrap();
    let mut copy = original.clone();

    copy.set_strength(Strength::Primary).unwrap();

    assert_eq!(original.strength(), Strength::Tertiary);
    assert_eq!(original.compare("a", "A"), Ordering::Less);
    assert_eq!(copy.compare("a", "A"), Ordering::Equal);

    original.freeze();
    let mut thawed = original.clone();

    assert!(!thawed.is_frozen());
    assert!(thawed.set_case_level(true).is_ok());
    assert!(std::sync::Arc::ptr_eq(thawed.table(), original.table()));
}

#[test]
fn case_level()
{
    let mut collator = collator("", Strength::Primary);

    assert_eq!(collator.compare("a", "A"), Ordering::Equal);

    collator.set_case_level(true).unwrap();

    assert_eq!(collator.compare("a", "A"), Ordering::Less);
    assert_eq!(collator.compare("á", "a"), Ordering::Equal);
    assert_eq!(collator.compare("ab", "Aa"), Ordering::Greater);
}

#[test]
fn shifted_punctuation()
{
    let mut collator = collator("", Strength::Tertiary);

    assert_eq!(collator.compare("de-luge", "deluge"), Ordering::Less);
    assert_eq!(collator.compare("de luge", "deluge"), Ordering::Less);

    collator.set_alternate_handling(AlternateHandling::Shifted).unwrap();

    assert_eq!(collator.compare("de-luge", "deluge"), Ordering::Equal);
    assert_eq!(collator.compare("de luge", "de-luge"), Ordering::Equal);

    collator.set_strength(Strength::Quaternary).unwrap();

    assert_strictly_increasing(&collator, &["de luge", "de-luge", "deluge"]);
}

#[test]
fn identical_strength()
{
    let tertiary = collator("", Strength::Tertiary);
    let identical = collator("", Strength::Identical);

    assert_eq!(tertiary.compare("a\u{1}b", "a\u{2}b"), Ordering::Equal);
    assert_eq!(identical.compare("a\u{1}b", "a\u{2}b"), Ordering::Less);
    assert_eq!(identical.compare("a", "a"), Ordering::Equal);
}

#[test]
fn sort_helper()
{
    let collator = collator("pl", Strength::Tertiary);
    let mut words = POLISH_SORTED;

    words.reverse();
    collator.sort(&mut words);

    assert_eq!(words, POLISH_SORTED);
}
