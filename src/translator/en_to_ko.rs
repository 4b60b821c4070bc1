//! 영→한 번역
//!
//! 영어 절을 위치로 주어/서술어/목적어/전치사구로 나눈 뒤
//! 한국어 어순(주어, 시간 부사, 부사어, 목적어, 서술어)으로 다시 붙입니다.
//! 서술어는 해요체(아요/어요, 았/었어요)로 활용합니다.

use crate::core::irregular::{conjugate, IrregularType};
use crate::core::jamo::{change_batchim, get_batchim, has_last_batchim, pick_particle, remove_batchim};
use crate::dictionary::{Direction, DictionaryStore, StemEntry, StemType};
use crate::grammar::Tense;
use crate::text::{tokenize_english, Token};

const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// 어순 앞쪽으로 보내는 시간/빈도 부사
const LEADING_ADVERBS: [&str; 12] = [
    "yesterday", "today", "tomorrow", "now", "often", "always", "sometimes", "again", "already",
    "soon", "together", "alone",
];

/// 전치사 → 조사 (위치 서술 "be at"에서는 에서 대신 에)
const PREPOSITIONS: [(&str, &str); 8] = [
    ("to", "에"),
    ("in", "에"),
    ("on", "에"),
    ("at", "에서"),
    ("from", "에서"),
    ("with", "과/와 함께"),
    ("about", "에 대해"),
    ("for", "을/를 위해"),
];

const OBJECT_PRONOUNS: [(&str, &str); 5] = [
    ("me", "나"),
    ("him", "그"),
    ("us", "우리"),
    ("them", "그들"),
    ("her", "그녀"),
];

const POSSESSIVES: [(&str, &str); 6] = [
    ("my", "내"),
    ("your", "너의"),
    ("his", "그의"),
    ("her", "그녀의"),
    ("our", "우리"),
    ("their", "그들의"),
];

/// 목적어에 을/를 대신 에를 붙이는 이동 동사
const MOVEMENT_VERBS: [&str; 3] = ["go", "come", "return"];

const NATIVE_NUMBERS: [&str; 10] = ["한", "두", "세", "네", "다섯", "여섯", "일곱", "여덟", "아홉", "열"];

const NUMBER_WORDS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

#[derive(Debug, Clone, Copy)]
enum Verb<'s> {
    Be,
    Action(&'s StemEntry),
}

/// 위치로 나눈 영어 절
#[derive(Debug, Default)]
struct EnglishClause<'w, 's> {
    subject: Vec<&'w str>,
    verb: Option<Verb<'s>>,
    complement: Vec<&'w str>,
    object: Vec<&'w str>,
    phrases: Vec<(&'static str, Vec<&'w str>)>,
    adverbs: Vec<&'w str>,
    tense: Tense,
    negative: bool,
}

fn preposition(word: &str) -> Option<&'static str> {
    PREPOSITIONS
        .iter()
        .find(|(en, _)| *en == word)
        .map(|(_, ko)| *ko)
}

fn number_value(word: &str) -> Option<usize> {
    word.parse::<usize>().ok().or_else(|| {
        NUMBER_WORDS
            .iter()
            .position(|w| *w == word)
            .map(|i| i + 1)
    })
}

/// 활용형 영어 동사 → (사전 어간, 시제)
fn verb_stem<'s>(word: &str, store: &'s DictionaryStore) -> Option<(&'s StemEntry, Tense)> {
    let lower = word.to_lowercase();
    let find = |candidate: &str| {
        store
            .stem_for_english(candidate)
            .filter(|entry| entry.kind == StemType::Verb)
    };

    if lower == "has" {
        return find("have").map(|e| (e, Tense::Present));
    }
    if let Some(base) = store.english_base_form(&lower) {
        return find(base).map(|e| (e, Tense::Past));
    }
    if let Some(entry) = find(&lower) {
        return Some((entry, Tense::Present));
    }

    let mut present = Vec::new();
    if let Some(stem) = lower.strip_suffix("ies") {
        present.push(format!("{}y", stem));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        present.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix('s') {
        present.push(stem.to_string());
    }
    if let Some(entry) = present.iter().find_map(|c| find(c)) {
        return Some((entry, Tense::Present));
    }

    let mut past = Vec::new();
    if let Some(stem) = lower.strip_suffix("ied") {
        past.push(format!("{}y", stem));
    }
    if let Some(stem) = lower.strip_suffix("ed") {
        past.push(stem.to_string());
        // stopped → stop
        let chars: Vec<char> = stem.chars().collect();
        if let [.., a, b] = chars.as_slice() {
            if a == b {
                past.push(chars[..chars.len() - 1].iter().collect());
            }
        }
    }
    if let Some(stem) = lower.strip_suffix('d') {
        past.push(stem.to_string());
    }
    past.iter().find_map(|c| find(c)).map(|e| (e, Tense::Past))
}

fn adjective_stem<'s>(word: &str, store: &'s DictionaryStore) -> Option<&'s StemEntry> {
    store
        .stem_for_english(word)
        .filter(|entry| entry.kind == StemType::Adj)
}

fn irregular_kind(stem: &str, store: &DictionaryStore) -> Option<IrregularType> {
    store
        .lookup_irregular_ko(stem)
        .filter(|entry| entry.base == stem)
        .map(|entry| entry.kind)
}

/// 단어 하나 번역 (대명사 목적격, 복수형 포함). 모르면 원문 그대로
fn translate_word(word: &str, store: &DictionaryStore) -> String {
    let lower = word.to_lowercase();
    if let Some((_, ko)) = OBJECT_PRONOUNS.iter().find(|(en, _)| *en == lower) {
        return ko.to_string();
    }
    if let Some(ko) = store.resolve_word(&lower, Direction::EnKo, None) {
        return ko;
    }
    let singulars = [
        lower.strip_suffix("ies").map(|s| format!("{}y", s)),
        lower.strip_suffix("es").map(str::to_string),
        lower.strip_suffix('s').map(str::to_string),
    ];
    singulars
        .into_iter()
        .flatten()
        .find_map(|s| store.resolve_word(&s, Direction::EnKo, None))
        .unwrap_or_else(|| word.to_string())
}

/// 형용사 관형형 (큰, 추운, 맛있는, 작은)
fn adnominal(stem: &str, irregular: Option<IrregularType>) -> String {
    let Some(last) = stem.chars().last() else {
        return String::new();
    };
    let prefix = &stem[..stem.len() - last.len_utf8()];
    if last == '있' {
        return format!("{}는", stem);
    }
    match (get_batchim(last), irregular) {
        (Some('ㅂ'), Some(IrregularType::Bieup)) => format!("{}{}운", prefix, remove_batchim(last)),
        (Some('ㅎ'), Some(IrregularType::Hieut)) | (None, _) => {
            format!("{}{}", prefix, change_batchim(last, Some('ㄴ')))
        }
        _ => format!("{}은", stem),
    }
}

/// 해요체 활용
fn conjugate_polite(stem: &str, tense: Tense, store: &DictionaryStore) -> String {
    let irregular = irregular_kind(stem, store);
    match tense {
        Tense::Present => conjugate(stem, "어요", irregular),
        Tense::Past => conjugate(stem, "었어요", irregular),
        Tense::Future => future_form(stem, irregular),
    }
}

/// ㄹ/을 거예요
fn future_form(stem: &str, irregular: Option<IrregularType>) -> String {
    let Some(last) = stem.chars().last() else {
        return String::new();
    };
    let prefix = &stem[..stem.len() - last.len_utf8()];
    match (get_batchim(last), irregular) {
        (None, _) => format!("{}{} 거예요", prefix, change_batchim(last, Some('ㄹ'))),
        (Some('ㄹ'), _) => format!("{} 거예요", stem),
        (Some('ㄷ'), Some(IrregularType::Dieut)) => {
            format!("{}{}을 거예요", prefix, change_batchim(last, Some('ㄹ')))
        }
        (Some('ㅂ'), Some(IrregularType::Bieup)) => {
            format!("{}{}울 거예요", prefix, remove_batchim(last))
        }
        _ => format!("{}을 거예요", stem),
    }
}

/// 조사 이형태 표기("을/를", "과/와 함께")를 앞말에 맞게 골라 붙임
fn attach(word: &str, particle: &str) -> String {
    let (head, tail) = particle.split_once(' ').unwrap_or((particle, ""));
    let chosen = match head.split_once('/') {
        Some((with, without)) => pick_particle(word, with, without),
        None => head,
    };
    if tail.is_empty() {
        format!("{}{}", word, chosen)
    } else {
        format!("{}{} {}", word, chosen, tail)
    }
}

/// 명사구 번역: 관사 생략, 소유격/형용사 관형형, 수량은 명사 뒤 "두 개"
fn noun_phrase(words: &[&str], store: &DictionaryStore) -> String {
    let mut parts = Vec::new();
    let mut count = None;

    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if ARTICLES.contains(&lower.as_str()) {
            continue;
        }
        if let Some(n) = number_value(&lower) {
            count = Some(n);
            continue;
        }
        let followed = i + 1 < words.len();
        if followed {
            if let Some((_, ko)) = POSSESSIVES.iter().find(|(en, _)| *en == lower) {
                parts.push(ko.to_string());
                continue;
            }
            if let Some(entry) = adjective_stem(&lower, store) {
                parts.push(adnominal(&entry.stem, irregular_kind(&entry.stem, store)));
                continue;
            }
        }
        parts.push(translate_word(word, store));
    }

    if let Some(n) = count {
        match NATIVE_NUMBERS.get(n.wrapping_sub(1)) {
            Some(native) => parts.push(format!("{} 개", native)),
            None => parts.push(format!("{}개", n)),
        }
    }
    parts.join(" ")
}

fn split_clause<'w, 's>(words: &[&'w str], store: &'s DictionaryStore) -> EnglishClause<'w, 's> {
    let mut clause = EnglishClause::default();

    for (i, &word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if LEADING_ADVERBS.contains(&lower.as_str()) {
            clause.adverbs.push(word);
            continue;
        }
        match lower.as_str() {
            "not" | "never" => {
                clause.negative = true;
                continue;
            }
            "don't" | "doesn't" => {
                clause.negative = true;
                continue;
            }
            "didn't" => {
                clause.negative = true;
                clause.tense = Tense::Past;
                continue;
            }
            "won't" => {
                clause.negative = true;
                clause.tense = Tense::Future;
                continue;
            }
            "will" => {
                clause.tense = Tense::Future;
                continue;
            }
            _ => {}
        }

        if clause.verb.is_none() {
            let next = words.get(i + 1).map(|w| w.to_lowercase());
            match lower.as_str() {
                "isn't" | "aren't" | "wasn't" | "weren't" => {
                    clause.verb = Some(Verb::Be);
                    clause.negative = true;
                    if lower.starts_with("wa") || lower.starts_with("we") {
                        clause.tense = Tense::Past;
                    }
                    continue;
                }
                "am" | "is" | "are" | "be" => {
                    clause.verb = Some(Verb::Be);
                    continue;
                }
                "was" | "were" => {
                    clause.verb = Some(Verb::Be);
                    clause.tense = Tense::Past;
                    continue;
                }
                "do" | "does" | "did" if i == 0 || next.as_deref() == Some("not") => {
                    if lower == "did" {
                        clause.tense = Tense::Past;
                    }
                    continue;
                }
                _ => {}
            }
            if let Some((entry, tense)) = verb_stem(&lower, store) {
                clause.verb = Some(Verb::Action(entry));
                if clause.tense != Tense::Future && tense == Tense::Past {
                    clause.tense = Tense::Past;
                }
                continue;
            }
            clause.subject.push(word);
            continue;
        }

        if let Some(particle) = preposition(&lower) {
            clause.phrases.push((particle, Vec::new()));
        } else if let Some((_, phrase)) = clause.phrases.last_mut() {
            phrase.push(word);
        } else if matches!(clause.verb, Some(Verb::Be)) {
            clause.complement.push(word);
        } else {
            clause.object.push(word);
        }
    }

    // Are you a student? / Is he at home?
    let inverted = matches!(clause.verb, Some(Verb::Be))
        && clause.subject.is_empty()
        && !clause.complement.is_empty()
        && (clause.complement.len() >= 2 || !clause.phrases.is_empty());
    if inverted {
        let first = clause.complement.remove(0);
        clause.subject.push(first);
    }
    clause
}

fn be_predicate(clause: &EnglishClause<'_, '_>, store: &DictionaryStore) -> String {
    let Some((&last, modifiers)) = clause.complement.split_last() else {
        // 위치 서술: 집에 있어요
        return match (clause.negative, clause.tense) {
            (false, Tense::Present) => "있어요".to_string(),
            (false, Tense::Past) => "있었어요".to_string(),
            (false, Tense::Future) => "있을 거예요".to_string(),
            (true, Tense::Past) => "없었어요".to_string(),
            (true, Tense::Future) => "없을 거예요".to_string(),
            (true, Tense::Present) => "없어요".to_string(),
        };
    };

    if let Some(entry) = adjective_stem(last, store) {
        let mut parts: Vec<String> = modifiers.iter().map(|w| translate_word(w, store)).collect();
        if clause.negative {
            parts.push("안".to_string());
        }
        parts.push(conjugate_polite(&entry.stem, clause.tense, store));
        return parts.join(" ");
    }

    let noun = noun_phrase(&clause.complement, store);
    if clause.negative {
        let ending = match clause.tense {
            Tense::Present => "아니에요",
            Tense::Past => "아니었어요",
            Tense::Future => "아닐 거예요",
        };
        return format!("{} {}", attach(&noun, "이/가"), ending);
    }
    let batchim = has_last_batchim(&noun);
    let ending = match (clause.tense, batchim) {
        (Tense::Present, true) => "이에요",
        (Tense::Present, false) => "예요",
        (Tense::Past, true) => "이었어요",
        (Tense::Past, false) => "였어요",
        (Tense::Future, _) => "일 거예요",
    };
    format!("{}{}", noun, ending)
}

fn assemble(clause: &EnglishClause<'_, '_>, store: &DictionaryStore) -> String {
    let mut parts = Vec::new();

    if !clause.subject.is_empty() {
        let subject = noun_phrase(&clause.subject, store);
        if clause.verb.is_some() {
            parts.push(attach(&subject, "은/는"));
        } else {
            parts.push(subject);
        }
    }
    for adverb in &clause.adverbs {
        parts.push(translate_word(adverb, store));
    }
    let locative = matches!(clause.verb, Some(Verb::Be)) && clause.complement.is_empty();
    for (particle, words) in &clause.phrases {
        let particle = if locative && *particle == "에서" { "에" } else { particle };
        let noun = noun_phrase(words, store);
        if !noun.is_empty() {
            parts.push(attach(&noun, particle));
        }
    }

    match clause.verb {
        Some(Verb::Be) => parts.push(be_predicate(clause, store)),
        Some(Verb::Action(entry)) => {
            if !clause.object.is_empty() {
                let object = noun_phrase(&clause.object, store);
                let particle = if MOVEMENT_VERBS.contains(&entry.en.as_str()) {
                    "에"
                } else if entry.stem == "있" {
                    "이/가"
                } else {
                    "을/를"
                };
                parts.push(attach(&object, particle));
            }
            if clause.negative {
                parts.push("안".to_string());
            }
            parts.push(conjugate_polite(&entry.stem, clause.tense, store));
        }
        None => {}
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

/// 단어 하나: 명사는 대역어, 용언은 기본형(-다)
fn translate_single(word: &str, store: &DictionaryStore) -> String {
    let lower = word.to_lowercase();
    if let Some(ko) = store.resolve_word(&lower, Direction::EnKo, None) {
        return ko;
    }
    if let Some(entry) = store.stem_for_english(&lower).filter(|e| e.kind != StemType::Noun) {
        return format!("{}다", entry.stem);
    }
    if let Some((entry, _)) = verb_stem(&lower, store) {
        return format!("{}다", entry.stem);
    }
    translate_word(word, store)
}

/// 절 안에서 쉼표 등으로 나뉜 조각
#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment<'t> {
    words: Vec<&'t str>,
    /// 조각 뒤의 문장 부호 (없으면 빈 문자열)
    punctuation: &'t str,
    /// 부호 바로 뒤에 공백 없이 다음 단어가 붙는지 (3.5, e.g.)
    glued: bool,
}

/// 단어 사이에 공백 아닌 글자가 있으면 거기서 조각을 나눔. 첫 단어 앞 부호는 단어 없는 조각
fn split_segments<'t>(text: &'t str, tokens: &'t [Token]) -> Vec<Segment<'t>> {
    let mut segments = Vec::new();
    if let Some(first) = tokens.first() {
        let lead = &text[..first.start];
        if !lead.trim().is_empty() {
            segments.push(Segment {
                words: Vec::new(),
                punctuation: lead.trim(),
                glued: !lead.ends_with(char::is_whitespace),
            });
        }
    }

    let mut words = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        words.push(token.text.as_str());
        let next = tokens.get(i + 1);
        let gap = &text[token.end..next.map_or(text.len(), |t| t.start)];
        if gap.trim().is_empty() {
            continue;
        }
        segments.push(Segment {
            words: std::mem::take(&mut words),
            punctuation: gap.trim(),
            glued: next.is_some() && !gap.ends_with(char::is_whitespace),
        });
    }
    if !words.is_empty() {
        segments.push(Segment {
            words,
            punctuation: "",
            glued: false,
        });
    }
    segments
}

/// 부호 없는 단어열 하나를 번역
fn translate_words(words: &[&str], store: &DictionaryStore) -> String {
    match words {
        [] => String::new(),
        [word] => translate_single(word, store),
        _ => {
            let joined = words.join(" ");
            if let Some(ko) = store.lookup_idiom(&joined, Direction::EnKo) {
                return ko.to_string();
            }
            let clause = split_clause(words, store);
            log::debug!(
                "en-ko clause: subject={:?} verb={:?} object={:?} complement={:?} tense={}",
                clause.subject,
                clause.verb,
                clause.object,
                clause.complement,
                clause.tense.as_str()
            );
            let out = assemble(&clause, store);
            if out.is_empty() {
                joined
            } else {
                out
            }
        }
    }
}

/// 영어 절 하나를 한국어로. 문장 끝 부호는 호출하는 쪽에서 처리
///
/// 절 안의 쉼표/쌍점 등은 그 자리에 남기고 부호 사이 조각을 따로 번역합니다.
pub fn translate_en_to_ko(text: &str, store: &DictionaryStore) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if let Some(ko) = store.lookup_idiom(trimmed, Direction::EnKo) {
        log::debug!("idiom hit (en-ko): '{}'", trimmed);
        return ko.to_string();
    }

    let tokens = tokenize_english(trimmed);
    if tokens.is_empty() {
        return trimmed.to_string();
    }

    let mut out = String::new();
    let mut attached = true;
    for segment in split_segments(trimmed, &tokens) {
        let body = translate_words(&segment.words, store);
        if !body.is_empty() {
            if !attached {
                out.push(' ');
            }
            out.push_str(&body);
        }
        out.push_str(segment.punctuation);
        attached = segment.glued;
    }
    out
}
