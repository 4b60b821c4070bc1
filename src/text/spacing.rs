//! 한국어 띄어쓰기 복구/교정
//!
//! - `recover_spacing`: 붙여 쓴 어절을 최소 비용 분할(DP)로 나눔
//! - `correct_spacing`: 조사 붙여쓰기, 명사+동사 분리, 의존명사/보조용언 띄어쓰기 규칙
//! - `correct_spacing_full`: 과분할 병합 → 복구 → 규칙 교정

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::static_regex;
use crate::core::jamo::{decompose, is_hangul};
use crate::dictionary::{DictionaryStore, Direction};
use crate::grammar::morpheme::{is_bare_adverb, is_pronoun, particles, split_particle, split_predicate};

/// 분할 비용
const COST_DICTIONARY_WORD: f64 = 0.0;
const COST_NOUN_PARTICLE: f64 = 0.5;
const COST_STEM_ENDING: f64 = 0.5;
const COST_UNKNOWN_PER_SYLLABLE: f64 = 2.0;

/// 한 단어로 볼 최대 글자 수
const MAX_WORD_LENGTH: usize = 10;

/// 단독으로 쓰이는 한 음절 단어
#[rustfmt::skip]
const SINGLE_SYLLABLE_WORDS: &[&str] = &[
    "나", "너", "저", "그", "이", "에", "도", "만", "못", "안", "잘", "더", "또", "왜", "일",
];

/// 자주 쓰는 두 음절 단어
#[rustfmt::skip]
const COMMON_TWO_SYLLABLE_WORDS: &[&str] = &[
    "일찍", "일을", "나는", "너는", "오늘", "내일", "어제", "지금", "그냥", "아주", "매우",
    "정말", "진짜", "아직", "벌써",
];

/// 앞말과 띄어 쓰는 의존명사 (ㄹ/을 관형형 뒤)
const DEPENDENCY_NOUNS: [char; 6] = ['수', '것', '거', '때', '줄', '리'];

/// 보조용언 앞 띄어쓰기: 먹고있어 → 먹고 있어, 가지않아 → 가지 않아
static AUXILIARY: LazyLock<Option<Regex>> =
    LazyLock::new(|| static_regex(r"(\S)(고)(있|싶)|(\S)(지)(않|못)"));

/// 띄어쓰기 복구 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveredSpacing {
    pub recovered: String,
    pub confidence: f64,
}

/// 띄어쓰기 교정 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectedSpacing {
    pub corrected: String,
    pub confidence: f64,
}

/// DP 분할 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordSplit {
    pub tokens: Vec<String>,
    pub cost: f64,
    pub confidence: f64,
}

fn is_dictionary_word(word: &str, store: &DictionaryStore) -> bool {
    is_pronoun(word)
        || is_bare_adverb(word)
        || store.is_known_noun(word)
        || store.resolve_word(word, Direction::KoEn, None).is_some()
}

/// 사전 단어, 체언+조사, 어간+어미 중 하나로 설명되는지
fn is_word_like(word: &str, store: &DictionaryStore) -> bool {
    is_dictionary_word(word, store)
        || split_particle(word, store).is_some()
        || split_predicate(word, store).is_some()
}

fn word_cost(word: &str, store: &DictionaryStore) -> f64 {
    if is_dictionary_word(word, store) {
        return COST_DICTIONARY_WORD;
    }
    if split_particle(word, store).is_some() {
        return COST_NOUN_PARTICLE;
    }
    if split_predicate(word, store).is_some() {
        return COST_STEM_ENDING;
    }
    let syllables = word.chars().count();
    match syllables {
        1 if SINGLE_SYLLABLE_WORDS.contains(&word) => COST_DICTIONARY_WORD,
        2 if COMMON_TWO_SYLLABLE_WORDS.contains(&word) => COST_DICTIONARY_WORD,
        _ => COST_UNKNOWN_PER_SYLLABLE * syllables as f64,
    }
}

fn split_trailing_punctuation(chunk: &str) -> (&str, &str) {
    let core = chunk.trim_end_matches(|c: char| c.is_ascii_punctuation() || c == '…');
    (core, &chunk[core.len()..])
}

/// 최소 비용 단어 분할
///
/// 비한글 문자는 비용 0인 한 글자 단위이며, 결과에서 연속된 비한글 조각은 다시 합칩니다.
/// 비용이 같으면 단어 수가 적은 분할을 고릅니다.
pub fn dp_word_split(text: &str, store: &DictionaryStore) -> WordSplit {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let n = chars.len();
    if n == 0 {
        return WordSplit {
            tokens: Vec::new(),
            cost: 0.0,
            confidence: 1.0,
        };
    }
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |&(b, _)| b);

    // (비용, 단어 수, 직전 분할점)
    let mut dp: Vec<(f64, usize, usize)> = vec![(f64::INFINITY, 0, 0); n + 1];
    dp[0] = (0.0, 0, 0);

    for i in 1..=n {
        for len in 1..=i.min(MAX_WORD_LENGTH) {
            let start = i - len;
            if !dp[start].0.is_finite() {
                continue;
            }
            let has_non_hangul = chars[start..i].iter().any(|&(_, c)| !is_hangul(c));
            let cost = match (has_non_hangul, len) {
                (true, 1) => 0.0,
                (true, _) => continue,
                (false, _) => word_cost(&text[byte_at(start)..byte_at(i)], store),
            };
            let candidate = (dp[start].0 + cost, dp[start].1 + 1, start);
            let better = candidate.0 < dp[i].0
                || (candidate.0 == dp[i].0 && candidate.1 < dp[i].1);
            if better {
                dp[i] = candidate;
            }
        }
    }

    let mut bounds = Vec::new();
    let mut pos = n;
    while pos > 0 {
        let prev = dp[pos].2;
        bounds.push((prev, pos));
        pos = prev;
    }
    bounds.reverse();

    let mut tokens: Vec<String> = Vec::with_capacity(bounds.len());
    let mut last_non_hangul = false;
    for (start, end) in bounds {
        let word = &text[byte_at(start)..byte_at(end)];
        let non_hangul = !word.chars().any(is_hangul);
        match tokens.last_mut() {
            Some(prev) if non_hangul && last_non_hangul => prev.push_str(word),
            _ => tokens.push(word.to_string()),
        }
        last_non_hangul = non_hangul;
    }

    let cost = dp[n].0;
    let average = cost / tokens.len().max(1) as f64;
    WordSplit {
        tokens,
        cost,
        confidence: (1.0 - average / 4.0).max(0.0),
    }
}

/// 붙여 쓴 한국어 띄어쓰기 복구
///
/// 공백으로 나뉜 조각마다: 사전 단어/체언+조사/어간+어미/비한글이면 그대로 두고,
/// 아니면 DP 분할. 신뢰도는 조각별 신뢰도의 평균 (그대로 둔 조각은 1)
pub fn recover_spacing(text: &str, store: &DictionaryStore) -> RecoveredSpacing {
    if !text.chars().any(is_hangul) {
        return RecoveredSpacing {
            recovered: text.to_string(),
            confidence: 1.0,
        };
    }

    let mut words: Vec<String> = Vec::new();
    let mut total = 0.0;
    let mut chunks = 0usize;

    for chunk in text.split_whitespace() {
        chunks += 1;
        let (core, punctuation) = split_trailing_punctuation(chunk);
        let keep = core.chars().count() <= 2
            || !core.chars().any(is_hangul)
            || is_word_like(core, store);
        if keep {
            words.push(chunk.to_string());
            total += 1.0;
            continue;
        }

        let split = dp_word_split(core, store);
        total += split.confidence;
        if split.tokens.len() <= 1 {
            words.push(chunk.to_string());
        } else {
            log::trace!("spacing split '{}' -> {:?}", core, split.tokens);
            let count = split.tokens.len();
            for (i, token) in split.tokens.into_iter().enumerate() {
                if i + 1 == count {
                    words.push(format!("{}{}", token, punctuation));
                } else {
                    words.push(token);
                }
            }
        }
    }

    RecoveredSpacing {
        recovered: words.join(" "),
        confidence: if chunks == 0 { 1.0 } else { total / chunks as f64 },
    }
}

/// 명사+동사가 붙은 어절 분리: 김치먹어요 → 김치 먹어요
fn split_noun_verb(word: &str, store: &DictionaryStore) -> Option<String> {
    let (core, punctuation) = split_trailing_punctuation(word);
    if !core.chars().any(is_hangul) || is_word_like(core, store) {
        return None;
    }
    let boundaries: Vec<usize> = core.char_indices().map(|(i, _)| i).skip(1).collect();
    boundaries.into_iter().rev().find_map(|at| {
        let (noun, rest) = core.split_at(at);
        (store.is_known_noun(noun) && split_predicate(rest, store).is_some())
            .then(|| format!("{} {}{}", noun, rest, punctuation))
    })
}

/// 의존명사 앞 띄어쓰기: 할수있어요 → 할 수 있어요, 먹을것 → 먹을 것
fn split_dependency_nouns(word: &str, store: &DictionaryStore) -> Option<String> {
    let (core, _) = split_trailing_punctuation(word);
    if is_word_like(core, store) {
        return None;
    }
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len() + 4);
    let mut changed = false;

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let Some(&next) = chars.get(i + 1) else {
            continue;
        };
        let attributive = c == '을' || decompose(c).and_then(|t| t.trail) == Some('ㄹ');
        let pair: String = [c, next].iter().collect();
        if attributive
            && DEPENDENCY_NOUNS.contains(&next)
            && !(next == '수' && chars.get(i + 2) == Some(&'록'))
            && !store.is_known_noun(&pair)
        {
            out.push(' ');
            changed = true;
        }
        // 수 있다/없다
        if c == '수' && changed && matches!(next, '있' | '없') {
            out.push(' ');
        }
    }
    changed.then_some(out)
}

/// 떨어진 조사 붙이기: 학교 에 → 학교에
fn reattach_particles(words: Vec<String>, store: &DictionaryStore) -> (Vec<String>, bool) {
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut changed = false;
    for word in words {
        let (core, _) = split_trailing_punctuation(&word);
        let is_particle = particles().iter().any(|(p, _)| *p == core);
        if let Some(prev) = out.last_mut() {
            let joined = format!("{}{}", prev, core);
            if is_particle
                && !prev.ends_with(|c: char| c.is_ascii_punctuation())
                && split_particle(&joined, store).is_some()
            {
                prev.push_str(&word);
                changed = true;
                continue;
            }
        }
        out.push(word);
    }
    (out, changed)
}

/// 규칙 기반 띄어쓰기 교정. 규칙이 하나라도 적용되면 신뢰도 0.9, 아니면 1.0
pub fn correct_spacing(text: &str, store: &DictionaryStore) -> CorrectedSpacing {
    let mut corrections = 0;
    let mut words: Vec<String> = text.split_whitespace().map(str::to_string).collect();

    let mut apply = |words: Vec<String>, rule: &dyn Fn(&str) -> Option<String>| -> Vec<String> {
        words
            .into_iter()
            .map(|word| match rule(&word) {
                Some(fixed) => {
                    corrections += 1;
                    fixed
                }
                None => word,
            })
            .collect()
    };

    words = apply(words, &|w: &str| split_noun_verb(w, store));
    words = apply(words, &|w: &str| split_dependency_nouns(w, store));
    words = apply(words, &|w: &str| {
        let re = AUXILIARY.as_ref()?;
        let fixed = re.replace_all(w, "${1}${4}${2}${5} ${3}${6}");
        (fixed != w).then(|| fixed.into_owned())
    });

    let (words, reattached) = reattach_particles(words, store);
    if reattached {
        corrections += 1;
    }

    if corrections == 0 {
        return CorrectedSpacing {
            corrected: text.to_string(),
            confidence: 1.0,
        };
    }
    CorrectedSpacing {
        corrected: words.join(" "),
        confidence: 0.9,
    }
}

/// 한 음절씩 흩어 쓴 조각 병합: 사 과 를 → 사과를
fn merge_over_split(text: &str, store: &DictionaryStore) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let single = |w: &str| w.chars().count() == 1 && w.chars().all(is_hangul);
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut changed = false;
    let mut i = 0;

    while i < words.len() {
        let run_end = (i..words.len())
            .find(|&k| !single(words[k]))
            .unwrap_or(words.len());
        let merged = (i + 2..=run_end).rev().find_map(|j| {
            let joined: String = words[i..j].concat();
            is_word_like(&joined, store).then_some((joined, j))
        });
        match merged {
            Some((joined, j)) => {
                out.push(joined);
                changed = true;
                i = j;
            }
            None => {
                out.push(words[i].to_string());
                i += 1;
            }
        }
    }
    changed.then(|| out.join(" "))
}

/// 전체 띄어쓰기 교정: 과분할 병합 → DP 복구 → 규칙 교정. 신뢰도는 두 단계의 평균
pub fn correct_spacing_full(text: &str, store: &DictionaryStore) -> CorrectedSpacing {
    let merged = merge_over_split(text, store);
    let input = merged.as_deref().unwrap_or(text);

    let recovered = recover_spacing(input, store);
    let rules = correct_spacing(&recovered.recovered, store);
    let rule_confidence = if merged.is_some() { 0.9 } else { rules.confidence };

    CorrectedSpacing {
        corrected: rules.corrected,
        confidence: (recovered.confidence + rule_confidence) / 2.0,
    }
}
