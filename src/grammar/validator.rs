//! 영어 문법 검증/교정
//!
//! 생성 결과뿐 아니라 임의의 영어 문장에 쓸 수 있는 순수 함수입니다.
//! 규칙 순서: 대문자 → a/an → 빠진 be 동사 → 3인칭 단수 -s → 반복 단어 → 공백/문장부호.
//! 한 번 돌린 결과에 다시 돌려도 바뀌지 않도록 더 바뀌지 않을 때까지 반복합니다.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::english::{indefinite_article, is_adjective, is_base_verb, third_person_singular};
use crate::text::static_regex;

/// 반복 적용 상한
const MAX_PASSES: usize = 8;

/// 일부러 겹쳐 쓰는 단어 쌍
const ALLOWED_REPEATS: [&str; 5] = ["very", "really", "so", "had", "that"];

static WORD: LazyLock<Option<Regex>> = LazyLock::new(|| static_regex(r"[A-Za-z']+"));

static LOWER_I: LazyLock<Option<Regex>> = LazyLock::new(|| static_regex(r"\bi\b"));

/// 관사 + 다음 단어
static ARTICLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| static_regex(r"\b([Aa]n?)(\s+)([A-Za-z][A-Za-z']*)"));

/// 문장 첫머리(또는 접속사 뒤)의 주격 대명사 + 다음 단어
static SUBJECT_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    static_regex(
        r"(?:^|[.!?]\s+|\b(?:and|but|so|because|when|if)\s+)(I|[Yy]ou|[Ww]e|[Tt]hey|[Hh]e|[Ss]he|[Ii]t)\s+([a-z]+)\b",
    )
});

/// 검증 오류 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Article,
    SubjectVerb,
    MissingBe,
    Capitalization,
    Spacing,
    Repetition,
}

/// 교정 하나. `position`은 그 규칙을 적용하기 직전 문자열의 바이트 위치
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub original: String,
    pub corrected: String,
    pub position: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub corrected: String,
    pub errors: Vec<ValidationError>,
    pub was_modified: bool,
}

fn error(
    kind: ErrorKind,
    original: &str,
    corrected: &str,
    position: usize,
    message: impl Into<String>,
) -> ValidationError {
    ValidationError {
        kind,
        original: original.to_string(),
        corrected: corrected.to_string(),
        position,
        message: message.into(),
    }
}

/// 교체 목록 적용 (범위는 겹치지 않고 앞에서부터 정렬)
fn apply_edits(text: &str, edits: &[(usize, usize, String)]) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut cursor = 0;
    for (start, end, replacement) in edits {
        out.push_str(&text[cursor..*start]);
        out.push_str(replacement);
        cursor = *end;
    }
    out.push_str(&text[cursor..]);
    out
}

/// 문장 첫 글자와 단독 "i"를 대문자로
fn fix_capitalization(text: &str, errors: &mut Vec<ValidationError>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut sentence_start = true;
    for (i, c) in text.char_indices() {
        if sentence_start && c.is_alphabetic() {
            let upper: String = c.to_uppercase().collect();
            if upper != c.to_string() {
                errors.push(error(
                    ErrorKind::Capitalization,
                    &c.to_string(),
                    &upper,
                    i,
                    "Sentence should start with a capital letter",
                ));
            }
            out.push_str(&upper);
            sentence_start = false;
            continue;
        }
        if matches!(c, '.' | '!' | '?') {
            sentence_start = true;
        } else if c.is_alphanumeric() {
            sentence_start = false;
        }
        out.push(c);
    }

    let Some(re) = LOWER_I.as_ref() else {
        return out;
    };
    let edits: Vec<(usize, usize, String)> = re
        .find_iter(&out)
        .map(|m| (m.start(), m.end(), "I".to_string()))
        .collect();
    for (start, ..) in &edits {
        errors.push(error(
            ErrorKind::Capitalization,
            "i",
            "I",
            *start,
            "The pronoun \"I\" is always capitalized",
        ));
    }
    apply_edits(&out, &edits)
}

/// 다음 단어의 소리에 맞게 a/an 교정 (대소문자 유지)
fn fix_articles(text: &str, errors: &mut Vec<ValidationError>) -> String {
    let Some(re) = ARTICLE.as_ref() else {
        return text.to_string();
    };
    let mut edits = Vec::new();
    for caps in re.captures_iter(text) {
        let (Some(article), Some(next)) = (caps.get(1), caps.get(3)) else {
            continue;
        };
        // "a a", "an the" 같은 겹침은 반복 규칙이 먼저 정리
        if ["a", "an", "the"]
            .iter()
            .any(|a| next.as_str().eq_ignore_ascii_case(a))
        {
            continue;
        }
        let expected = indefinite_article(next.as_str());
        if article.as_str().eq_ignore_ascii_case(expected) {
            continue;
        }
        let fixed = if article.as_str().starts_with('A') {
            let mut chars = expected.chars();
            chars
                .next()
                .map(|c| c.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        } else {
            expected.to_string()
        };
        errors.push(error(
            ErrorKind::Article,
            article.as_str(),
            &fixed,
            article.start(),
            format!("Use \"{}\" before \"{}\"", expected, next.as_str()),
        ));
        edits.push((article.start(), article.end(), fixed));
    }
    apply_edits(text, &edits)
}

fn copula_for(subject: &str) -> &'static str {
    match subject.to_lowercase().as_str() {
        "i" => "am",
        "he" | "she" | "it" => "is",
        _ => "are",
    }
}

/// 주어 바로 뒤 형용사 앞에 be 동사 삽입 (She happy → She is happy)
fn fix_missing_be(text: &str, errors: &mut Vec<ValidationError>) -> String {
    let Some(re) = SUBJECT_WORD.as_ref() else {
        return text.to_string();
    };
    let mut edits = Vec::new();
    for caps in re.captures_iter(text) {
        let (Some(subject), Some(word)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if !is_adjective(word.as_str()) {
            continue;
        }
        let be = copula_for(subject.as_str());
        errors.push(error(
            ErrorKind::MissingBe,
            &format!("{} {}", subject.as_str(), word.as_str()),
            &format!("{} {} {}", subject.as_str(), be, word.as_str()),
            subject.start(),
            format!("Missing \"{}\" between subject and adjective", be),
        ));
        edits.push((word.start(), word.start(), format!("{} ", be)));
    }
    apply_edits(text, &edits)
}

/// he/she/it + 동사 원형 → 3인칭 단수 (He go → He goes)
fn fix_subject_verb(text: &str, errors: &mut Vec<ValidationError>) -> String {
    let Some(re) = SUBJECT_WORD.as_ref() else {
        return text.to_string();
    };
    let mut edits = Vec::new();
    for caps in re.captures_iter(text) {
        let (Some(subject), Some(verb)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let third_person = matches!(subject.as_str().to_lowercase().as_str(), "he" | "she" | "it");
        if !third_person || !is_base_verb(verb.as_str()) {
            continue;
        }
        let fixed = third_person_singular(verb.as_str());
        errors.push(error(
            ErrorKind::SubjectVerb,
            verb.as_str(),
            &fixed,
            verb.start(),
            format!("\"{}\" needs \"{}\"", subject.as_str(), fixed),
        ));
        edits.push((verb.start(), verb.end(), fixed));
    }
    apply_edits(text, &edits)
}

/// 바로 이어 반복된 단어 제거 (the the → the). 허용 목록은 유지
fn fix_repetition(text: &str, errors: &mut Vec<ValidationError>) -> String {
    let Some(re) = WORD.as_ref() else {
        return text.to_string();
    };
    let mut edits = Vec::new();
    let mut previous: Option<regex::Match<'_>> = None;
    for word in re.find_iter(text) {
        if let Some(prev) = previous {
            let gap = &text[prev.end()..word.start()];
            let repeated = !gap.is_empty()
                && gap.chars().all(char::is_whitespace)
                && prev.as_str().eq_ignore_ascii_case(word.as_str())
                && !ALLOWED_REPEATS.contains(&word.as_str().to_lowercase().as_str());
            if repeated {
                errors.push(error(
                    ErrorKind::Repetition,
                    &format!("{}{}{}", prev.as_str(), gap, word.as_str()),
                    prev.as_str(),
                    prev.start(),
                    format!("Repeated word \"{}\"", word.as_str()),
                ));
                edits.push((prev.end(), word.end(), String::new()));
                continue;
            }
        }
        previous = Some(word);
    }
    apply_edits(text, &edits)
}

/// 공백 정리: 연속 공백 하나로, 앞뒤 공백 제거, 문장부호 앞 공백 제거, 문장 끝 부호 뒤 공백 삽입
fn fix_spacing(text: &str, errors: &mut Vec<ValidationError>) -> String {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = String::with_capacity(text.len());
    let mut word_letters = 0usize;
    let mut idx = 0;

    while idx < chars.len() {
        let (pos, c) = chars[idx];
        if c.is_whitespace() {
            let run_end = chars[idx..]
                .iter()
                .position(|(_, n)| !n.is_whitespace())
                .map_or(chars.len(), |offset| idx + offset);
            let run: String = chars[idx..run_end].iter().map(|(_, n)| n).collect();
            let keep = !out.is_empty()
                && chars
                    .get(run_end)
                    .is_some_and(|(_, n)| !matches!(n, '.' | ',' | '!' | '?' | ';' | ':'));
            let replacement = if keep { " " } else { "" };
            if run != replacement {
                errors.push(error(ErrorKind::Spacing, &run, replacement, pos, "Irregular whitespace"));
            }
            out.push_str(replacement);
            word_letters = 0;
            idx = run_end;
            continue;
        }

        out.push(c);
        idx += 1;
        if c.is_alphabetic() {
            word_letters += 1;
            continue;
        }
        let sentence_end = matches!(c, '.' | '!' | '?');
        let letter_follows = chars.get(idx).is_some_and(|(_, n)| n.is_alphabetic());
        // e.g. / U.S. 같은 약어는 건드리지 않음
        if sentence_end && letter_follows && word_letters >= 2 {
            errors.push(error(ErrorKind::Spacing, &c.to_string(), &format!("{} ", c), pos, "Missing space after punctuation"));
            out.push(' ');
        }
        word_letters = 0;
    }
    out
}

type Rule = fn(&str, &mut Vec<ValidationError>) -> String;

const RULES: [Rule; 6] = [
    fix_capitalization,
    fix_articles,
    fix_missing_be,
    fix_subject_verb,
    fix_repetition,
    fix_spacing,
];

/// 전체 검증: 모든 규칙을 더 바뀌지 않을 때까지 적용
pub fn validate_english(text: &str) -> ValidationResult {
    let mut current = text.to_string();
    let mut errors = Vec::new();

    for _ in 0..MAX_PASSES {
        let mut next = current.clone();
        for rule in RULES {
            next = rule(&next, &mut errors);
        }
        if next == current {
            break;
        }
        current = next;
    }

    if !errors.is_empty() {
        log::trace!("validator fixed {} issue(s) in '{}'", errors.len(), text);
    }
    ValidationResult {
        was_modified: current != text,
        corrected: current,
        errors,
    }
}

/// 빠른 검증: 공백, 대문자, 관사만 한 번씩
pub fn quick_validate(text: &str) -> String {
    let mut ignored = Vec::new();
    let spaced = fix_spacing(text, &mut ignored);
    let capitalized = fix_capitalization(&spaced, &mut ignored);
    fix_articles(&capitalized, &mut ignored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrected(text: &str) -> String {
        validate_english(text).corrected
    }

    #[test]
    fn test_subject_verb_agreement() {
        assert_eq!(corrected("He go"), "He goes");
        assert_eq!(corrected("she watch TV"), "She watches TV");
        assert_eq!(corrected("It have a name"), "It has a name");
        // 과거형이 같은 동사나 의문문 안의 주어는 건드리지 않음
        assert_eq!(corrected("He read a book"), "He read a book");
        assert_eq!(corrected("Does he like coffee?"), "Does he like coffee?");
        assert_eq!(corrected("They go home"), "They go home");
    }

    #[test]
    fn test_articles() {
        assert_eq!(corrected("a apple"), "An apple");
        assert_eq!(corrected("I have an book"), "I have a book");
        assert_eq!(corrected("I waited a hour"), "I waited an hour");
        assert_eq!(corrected("He is an university student"), "He is a university student");
        // 겹친 관사는 하나로 줄인 뒤에 a/an을 고름
        assert_eq!(corrected("it is a a apple"), "It is an apple");
        assert_eq!(corrected("I have an an book"), "I have a book");
    }

    #[test]
    fn test_missing_be() {
        assert_eq!(corrected("She happy"), "She is happy");
        assert_eq!(corrected("i tired"), "I am tired");
        assert_eq!(corrected("They busy"), "They are busy");
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(corrected("hello. how are you"), "Hello. How are you");
        assert_eq!(corrected("you and i"), "You and I");
    }

    #[test]
    fn test_repetition() {
        assert_eq!(corrected("I like the the cat"), "I like the cat");
        assert_eq!(corrected("It is very very good"), "It is very very good");
        let result = validate_english("the the end");
        assert!(result.errors.iter().any(|e| e.kind == ErrorKind::Repetition));
    }

    #[test]
    fn test_spacing() {
        assert_eq!(corrected("  I  eat   rice  "), "I eat rice");
        assert_eq!(corrected("I eat rice ."), "I eat rice.");
        assert_eq!(corrected("Hello , world"), "Hello, world");
        assert_eq!(corrected("I ate.Then I slept"), "I ate. Then I slept");
        assert_eq!(corrected("I like U.S.A. Movies"), "I like U.S.A. Movies");
    }

    #[test]
    fn test_result_fields() {
        let result = validate_english("He go");
        assert!(result.was_modified);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].kind, ErrorKind::SubjectVerb);
        assert_eq!(result.errors[0].position, 3);

        let clean = validate_english("I eat an apple");
        assert!(!clean.was_modified);
        assert!(clean.errors.is_empty());
    }

    #[test]
    fn test_idempotent() {
        for text in [
            "He go",
            "a apple",
            "she happy . i go   to school.then he go",
            "the the the cat",
            "a an apple",
            "",
            "!!!",
            "사과 apple",
        ] {
            let once = corrected(text);
            assert_eq!(corrected(&once), once, "not idempotent for {:?}", text);
        }
    }

    #[test]
    fn test_quick_validate() {
        assert_eq!(quick_validate("a apple  is red"), "An apple is red");
        assert_eq!(quick_validate("he go"), "He go");
    }
}
