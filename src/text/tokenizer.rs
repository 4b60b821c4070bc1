//! 토큰화와 흩어진 글자 감지
//!
//! 모든 위치는 원문 기준 바이트 오프셋이며 `&text[start..end] == token.text`가 성립합니다.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::static_regex;

/// 원문 위의 반열린 구간 `[start, end)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// 단어 + 선택적 아포스트로피 꼬리 (can't, it's)
static ENGLISH_WORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| static_regex(r"[\p{L}\p{N}]+(?:'\p{L}+)?"));

/// 공백 하나로 띄운 한 글자 알파벳 3개 이상
static SCATTERED: LazyLock<Option<Regex>> =
    LazyLock::new(|| static_regex(r"\b[A-Za-z](?: [A-Za-z]){2,}\b"));

/// 영어 토큰화: 공백/문장부호에서 나누되 축약형은 한 토큰
pub fn tokenize_english(text: &str) -> Vec<Token> {
    let Some(re) = ENGLISH_WORD.as_ref() else {
        return Vec::new();
    };
    re.find_iter(text)
        .map(|m| Token::new(m.as_str(), m.start(), m.end()))
        .collect()
}

/// 한국어 토큰화: 공백으로만 나눔 (조사/어미 분리는 형태소 분석 단계)
pub fn tokenize_korean(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                tokens.push(Token::new(&text[s..i], s, i));
                start = None;
            }
            (false, None) => start = Some(i),
            _ => {}
        }
    }
    if let Some(s) = start {
        tokens.push(Token::new(&text[s..], s, text.len()));
    }
    tokens
}

/// 흩어진 글자 감지 결과 ("h e l l o" → "hello")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatteredLetters {
    pub original: String,
    pub reconstructed: String,
    /// 바이트 위치, 반열린 구간 `[start, end)`
    pub start: usize,
    pub end: usize,
    pub confidence: f32,
}

/// 흩어진 글자 신뢰도 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterScoring {
    /// 기본 신뢰도
    pub base: f32,
    /// 맞춤법 검사 통과 시 가산
    pub spell_bonus: f32,
    /// 맞춤법 검사 실패 시 감산
    pub spell_penalty: f32,
}

impl Default for ScatterScoring {
    fn default() -> Self {
        Self {
            base: 0.7,
            spell_bonus: 0.15,
            spell_penalty: 0.3,
        }
    }
}

/// 흩어진 글자 감지 (기본 점수)
///
/// `start`/`end`는 원문의 바이트 위치이고 반열린 구간 `[start, end)`입니다.
/// 구간은 첫 글자에서 시작해 마지막 글자 바로 뒤에서 끝나므로 "h e l l o"는 `[0, 9)`입니다.
///
/// ```
/// use hanyeong::text::detect_scattered_letters;
///
/// let found = detect_scattered_letters("I said h e l l o to you", None);
/// assert_eq!(found[0].reconstructed, "hello");
/// ```
pub fn detect_scattered_letters(
    text: &str,
    spell_checker: Option<&dyn Fn(&str) -> bool>,
) -> Vec<ScatteredLetters> {
    detect_scattered_letters_with(text, spell_checker, ScatterScoring::default())
}

/// 흩어진 글자 감지 (점수 설정 지정)
pub fn detect_scattered_letters_with(
    text: &str,
    spell_checker: Option<&dyn Fn(&str) -> bool>,
    scoring: ScatterScoring,
) -> Vec<ScatteredLetters> {
    let Some(re) = SCATTERED.as_ref() else {
        return Vec::new();
    };

    re.find_iter(text)
        .map(|m| {
            let original = m.as_str();
            let reconstructed: String = original.chars().filter(|c| *c != ' ').collect();
            let letters = reconstructed.chars().count();

            let mut confidence = scoring.base;
            if letters >= 4 {
                confidence += 0.1;
            }
            if letters >= 6 {
                confidence += 0.1;
            }
            if let Some(check) = spell_checker {
                confidence = if check(&reconstructed) {
                    (confidence + scoring.spell_bonus).min(1.0)
                } else {
                    (confidence - scoring.spell_penalty).max(0.3)
                };
            }

            ScatteredLetters {
                original: original.to_string(),
                reconstructed,
                start: m.start(),
                end: m.end(),
                confidence,
            }
        })
        .collect()
}

/// 교정 제안 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextErrorKind {
    Spacing,
}

/// UI 표시용 교정 제안 레코드. 코어는 자동 적용하지 않음
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextError {
    #[serde(rename = "type")]
    pub kind: TextErrorKind,
    pub original: String,
    pub suggestions: Vec<String>,
    pub start: usize,
    pub end: usize,
    pub message: String,
    pub confidence: f32,
}

pub fn scattered_letters_to_errors(results: &[ScatteredLetters]) -> Vec<TextError> {
    results
        .iter()
        .map(|r| TextError {
            kind: TextErrorKind::Spacing,
            original: r.original.clone(),
            suggestions: vec![r.reconstructed.clone()],
            start: r.start,
            end: r.end,
            message: format!(
                "Scattered letters detected: \"{}\" → \"{}\"",
                r.original, r.reconstructed
            ),
            confidence: r.confidence,
        })
        .collect()
}
