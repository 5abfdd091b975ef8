//! общие данные для тестов коллатора

use core::cmp::Ordering;

use unicode_collator::{Collator, Strength};

/// денежные знаки в порядке корневой таблицы
pub const CURRENCY: [&str; 33] = [
    "¤", "¢", "\u{FFE0}", "$", "\u{FF04}", "\u{FE69}", "£", "\u{FFE1}", "¥", "\u{FFE5}", "৲", "৳", "฿", "៛",
    "₠", "₡", "₢", "₣", "₤", "₥", "₦", "₧", "₩", "\u{FFE6}", "₪", "₫", "€", "₭", "₮", "₯", "0", "1", "a",
];

/// польские слова в польском порядке
pub const POLISH_SORTED: [&str; 33] = [
    "ala", "Ala", "alfabet", "ąb", "być", "cal", "czas", "ćma", "dom", "ekran", "ęsi", "fala", "kot", "las",
    "łąka", "Łódź", "mama", "noc", "nos", "ńka", "osa", "ósmy", "pies", "ryba", "sok", "szafa", "śnieg",
    "tata", "ul", "wata", "zebra", "źrebię", "żaba",
];

/// слова для сортировки из нескольких потоков
pub const POLISH_WORDS: [&str; 120] = [
    "ząb", "źdźbło", "żółw", "łąka", "łódka", "łza", "ćma", "ćwierć", "ćwiczenie", "śnieg", "ślimak",
    "świat", "świeca", "ńa", "ósemka", "ósmy", "ąb", "ęsi", "gęś", "mąka", "ręka", "rzeka", "rzecz",
    "szkoła", "szafa", "sznur", "czas", "czapka", "człowiek", "chleb", "chmura", "dom", "drzewo", "drzwi",
    "dzień", "dźwięk", "dżem", "ekran", "fala", "filiżanka", "gazeta", "góra", "herbata", "igła", "jabłko",
    "jajko", "język", "kot", "koń", "kość", "krzesło", "książka", "kwiat", "las", "lato", "lekarz", "lody",
    "mama", "masło", "miasto", "morze", "most", "noc", "nos", "noga", "obiad", "okno", "osa", "ołówek",
    "pies", "piłka", "pióro", "pociąg", "pole", "pomidor", "ptak", "rower", "ryba", "samochód", "ser",
    "sok", "sól", "stół", "syn", "tata", "telefon", "teatr", "torba", "ulica", "ul", "wata", "woda",
    "wiatr", "wieś", "wino", "zebra", "zegar", "zima", "zupa", "żaba", "żeglarz", "żółty", "Ala", "ala",
    "Łódź", "Kraków", "Gdańsk", "Poznań", "Wrocław", "Szczecin", "Białystok", "Zakopane", "Ćwik", "Śląsk",
    "Żywiec", "Ostrów", "Łańcut", "Łęczyca", "źrebię", "ćwiartka",
];

/// слова, различающиеся на разных уровнях
pub const MIXED_WORDS: [&str; 24] = [
    "", "a", "A", "á", "à", "ä", "ab", "Ab", "a-b", "a b", "æ", "ae", "ß", "ss", "$1", "1", "Ω", "ω", "я",
    "ё", "中", "한", "\u{1}", "côte",
];

/// коллатор с заданным уровнем сравнения
pub fn collator(locale: &str, strength: Strength) -> Collator
{
    let mut collator = Collator::new(locale).unwrap();
    collator.set_strength(strength).unwrap();
    collator
}

/// каждая пара соседних строк строго возрастает
pub fn assert_strictly_increasing(collator: &Collator, words: &[&str])
{
    for pair in words.windows(2) {
        assert_eq!(
            collator.compare(pair[0], pair[1]),
            Ordering::Less,
            "{:?} < {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// все пары: результат сравнения соответствует позициям в списке
pub fn assert_ordered_pairwise(collator: &Collator, words: &[&str])
{
    for (i, a) in words.iter().enumerate() {
        for (j, b) in words.iter().enumerate() {
            assert_eq!(collator.compare(a, b), i.cmp(&j), "{:?} / {:?}", a, b);
        }
    }
}
