//! 영어 형태 규칙
//!
//! 관사, 복수형, 3인칭 단수, 과거형, 비교급과 생성기/검증기가 함께 쓰는 단어 목록

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// 모음 글자로 시작하지만 "a"를 쓰는 단어
#[rustfmt::skip]
const A_WORDS: &[&str] = &[
    "user", "union", "unique", "unit", "university", "uniform", "united", "use", "useful",
    "usual", "usually", "european", "one", "once",
];

/// 자음 글자로 시작하지만 "an"을 쓰는 단어 (접두)
const AN_PREFIXES: [&str; 5] = ["hour", "honest", "honor", "heir", "herb"];

/// 관사 없이 쓰는 셀 수 없는 명사
pub static UNCOUNTABLE: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "music", "water", "coffee", "rice", "milk", "bread", "homework", "money", "time",
        "information", "advice", "food", "meat", "tea", "ice cream", "soccer", "kimchi",
        "bulgogi", "bibimbap", "news", "furniture", "data", "english", "korean",
    ]
    .into_iter()
    .collect()
});

/// 항상 "the"를 붙이는 명사
const DEFINITE_NOUNS: [&str; 5] = ["weather", "sun", "moon", "sky", "sea"];

/// 관사 없이 쓰는 장소 (go to school, at home)
const BARE_PLACES: [&str; 5] = ["school", "home", "work", "bed", "church"];

/// 3인칭 단수 -s를 붙일 수 있는 동사 원형.
/// 과거형이 원형과 같은 동사(read, put, cut 등)는 시제를 알 수 없어 넣지 않음
pub static BASE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "go", "come", "eat", "drink", "like", "love", "want", "need", "have", "do", "make",
        "take", "see", "know", "think", "play", "work", "study", "live", "write", "run",
        "walk", "sleep", "speak", "say", "get", "give", "help", "watch", "look", "listen",
        "learn", "teach", "cook", "buy", "sell", "wash", "wear", "sing", "dance", "swim",
        "fly", "try", "cry", "carry", "hate", "wait", "meet", "find", "feel", "sit", "stand",
        "start", "stop", "call", "ride", "send", "build", "hear", "laugh", "receive",
        "become", "exercise", "miss", "catch", "fix", "enjoy", "understand",
    ]
    .into_iter()
    .collect()
});

/// 주어 바로 뒤에 오면 be 동사가 빠졌다고 보는 형용사
pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "happy", "sad", "tired", "hungry", "busy", "sick", "cold", "hot", "good", "bad", "big",
        "small", "pretty", "beautiful", "kind", "quiet", "fast", "slow", "easy", "difficult",
        "expensive", "cheap", "glad", "angry", "late", "ready", "sorry", "fine", "cute",
        "interesting", "delicious", "full", "sleepy", "young", "old", "tall", "short", "smart",
        "strong", "nice", "great", "high", "blue",
    ]
    .into_iter()
    .collect()
});

static IRREGULAR_PLURALS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("person", "people"), ("child", "children"), ("man", "men"), ("woman", "women"),
        ("foot", "feet"), ("tooth", "teeth"), ("mouse", "mice"), ("fish", "fish"),
        ("sheep", "sheep"), ("knife", "knives"), ("leaf", "leaves"),
    ]
    .into_iter()
    .collect()
});

#[rustfmt::skip]
const NUMBER_WORDS: [&str; 21] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty",
];

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

fn first_word(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// 다음 단어의 첫 소리에 맞는 부정관사
pub fn indefinite_article(word: &str) -> &'static str {
    let lower = first_word(word);
    if AN_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return "an";
    }
    if A_WORDS.contains(&lower.as_str()) || lower.starts_with("eu") {
        return "a";
    }
    match lower.chars().next() {
        Some(c) if is_vowel(c) => "an",
        _ => "a",
    }
}

pub fn is_uncountable(noun: &str) -> bool {
    UNCOUNTABLE.contains(noun.to_lowercase().as_str())
}

pub fn takes_definite(noun: &str) -> bool {
    DEFINITE_NOUNS.contains(&noun.to_lowercase().as_str())
}

pub fn is_bare_place(noun: &str) -> bool {
    BARE_PLACES.contains(&noun.to_lowercase().as_str())
}

pub fn is_base_verb(word: &str) -> bool {
    BASE_VERBS.contains(word)
}

pub fn is_adjective(word: &str) -> bool {
    ADJECTIVES.contains(word)
}

/// 마지막 단어를 바꿈 ("ice cream" → "ice creams")
fn map_last_word(phrase: &str, f: impl Fn(&str) -> String) -> String {
    match phrase.rsplit_once(' ') {
        Some((head, last)) => format!("{} {}", head, f(last)),
        None => f(phrase),
    }
}

/// 첫 단어를 바꿈 ("wake up" → "wakes up")
fn map_first_word(phrase: &str, f: impl Fn(&str) -> String) -> String {
    match phrase.split_once(' ') {
        Some((first, rest)) => format!("{} {}", f(first), rest),
        None => f(phrase),
    }
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut chars = word.chars().rev();
    matches!((chars.next(), chars.next()), (Some('y'), Some(c)) if !is_vowel(c))
}

fn needs_es(word: &str) -> bool {
    ["s", "x", "z", "ch", "sh", "o"].iter().any(|s| word.ends_with(s))
}

/// 복수형
pub fn pluralize(noun: &str) -> String {
    if is_uncountable(noun) {
        return noun.to_string();
    }
    map_last_word(noun, |word| {
        if let Some(plural) = IRREGULAR_PLURALS.get(word) {
            return plural.to_string();
        }
        if ends_with_consonant_y(word) {
            return format!("{}ies", &word[..word.len() - 1]);
        }
        if needs_es(word) && !word.ends_with('o') {
            return format!("{}es", word);
        }
        format!("{}s", word)
    })
}

/// 3인칭 단수 현재형 (go → goes, study → studies, have → has)
pub fn third_person_singular(verb: &str) -> String {
    map_first_word(verb, |word| match word {
        "have" => "has".to_string(),
        "be" => "is".to_string(),
        _ if ends_with_consonant_y(word) => format!("{}ies", &word[..word.len() - 1]),
        _ if needs_es(word) => format!("{}es", word),
        _ => format!("{}s", word),
    })
}

/// 자음-모음-자음으로 끝나는 짧은 단어인지 (stop → stopped)
fn doubles_final_consonant(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let vowels = chars.iter().filter(|c| is_vowel(**c)).count();
    match chars.as_slice() {
        [.., a, b, c] if chars.len() <= 4 && vowels == 1 => {
            !is_vowel(*a) && is_vowel(*b) && !is_vowel(*c) && !matches!(*c, 'w' | 'x' | 'y')
        }
        _ => false,
    }
}

/// 규칙 과거형 (-ed)
pub fn regular_past(verb: &str) -> String {
    map_first_word(verb, |word| {
        if word.ends_with('e') {
            format!("{}d", word)
        } else if ends_with_consonant_y(word) {
            format!("{}ied", &word[..word.len() - 1])
        } else if doubles_final_consonant(word) {
            let last = word.chars().last().map(String::from).unwrap_or_default();
            format!("{}{}ed", word, last)
        } else {
            format!("{}ed", word)
        }
    })
}

/// 현재분사 (run → running, make → making, lie → lying)
pub fn present_participle(verb: &str) -> String {
    map_first_word(verb, |word| {
        if let Some(stem) = word.strip_suffix("ie") {
            format!("{}ying", stem)
        } else if word.ends_with('e') && !word.ends_with("ee") && word.len() > 2 {
            format!("{}ing", &word[..word.len() - 1])
        } else if doubles_final_consonant(word) {
            let last = word.chars().last().map(String::from).unwrap_or_default();
            format!("{}{}ing", word, last)
        } else {
            format!("{}ing", word)
        }
    })
}

/// 비교급 (big → bigger, easy → easier, expensive → more expensive)
pub fn comparative(adjective: &str) -> String {
    match adjective {
        "good" => return "better".to_string(),
        "bad" => return "worse".to_string(),
        _ => {}
    }
    if ends_with_consonant_y(adjective) {
        return format!("{}ier", &adjective[..adjective.len() - 1]);
    }
    // 끝의 묵음 e는 음절로 세지 않음
    let vowel_groups = adjective
        .trim_end_matches('e')
        .chars()
        .fold((0, false), |(count, prev), c| {
            let v = is_vowel(c);
            (if v && !prev { count + 1 } else { count }, v)
        })
        .0;
    if vowel_groups > 1 || adjective.contains(' ') {
        return format!("more {}", adjective);
    }
    if adjective.ends_with('e') {
        format!("{}r", adjective)
    } else if doubles_final_consonant(adjective) {
        let last = adjective.chars().last().map(String::from).unwrap_or_default();
        format!("{}{}er", adjective, last)
    } else {
        format!("{}er", adjective)
    }
}

/// 20 이하는 영어 단어, 그 이상은 숫자
pub fn number_word(n: u32) -> String {
    NUMBER_WORDS
        .get(n as usize)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// 주격 대명사 → 목적격
pub fn object_form(pronoun: &str) -> Option<&'static str> {
    match pronoun.to_lowercase().as_str() {
        "i" => Some("me"),
        "he" => Some("him"),
        "she" => Some("her"),
        "we" => Some("us"),
        "they" => Some("them"),
        "you" => Some("you"),
        "it" => Some("it"),
        _ => None,
    }
}

/// 주격 대명사 → 소유격
pub fn possessive_form(pronoun: &str) -> Option<&'static str> {
    match pronoun.to_lowercase().as_str() {
        "i" => Some("my"),
        "you" => Some("your"),
        "he" => Some("his"),
        "she" => Some("her"),
        "we" => Some("our"),
        "they" => Some("their"),
        "it" => Some("its"),
        _ => None,
    }
}

/// 첫 글자만 대문자로
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
