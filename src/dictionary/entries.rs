//! 사전 항목 데이터 타입
//!
//! JSON 사전 번들과 내장 사전이 같은 타입을 사용합니다.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::irregular::IrregularType;

/// 번역 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "ko-en")]
    KoEn,
    #[serde(rename = "en-ko")]
    EnKo,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::KoEn => "ko-en",
            Direction::EnKo => "en-ko",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko-en" | "koen" | "ko" => Ok(Direction::KoEn),
            "en-ko" | "enko" | "en" => Ok(Direction::EnKo),
            other => Err(format!("unknown direction: {} (expected ko-en or en-ko)", other)),
        }
    }
}

/// 도메인 사전 항목이 적용되는 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainDirection {
    #[serde(rename = "ko-en")]
    KoEn,
    #[serde(rename = "en-ko")]
    EnKo,
    #[serde(rename = "both")]
    Both,
}

impl DomainDirection {
    pub fn allows(&self, direction: Direction) -> bool {
        match self {
            DomainDirection::Both => true,
            DomainDirection::KoEn => direction == Direction::KoEn,
            DomainDirection::EnKo => direction == Direction::EnKo,
        }
    }
}

/// 어간 품사
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemType {
    Verb,
    Adj,
    Noun,
}

/// 단어 대역
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    pub ko: String,
    pub en: String,
}

/// 용언/명사 어간 대역
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StemEntry {
    pub stem: String,
    pub en: String,
    #[serde(rename = "type")]
    pub kind: StemType,
}

/// 관용 표현
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdiomEntry {
    pub ko: String,
    pub en: String,
    /// 직역 (설명용)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    /// 띄어쓰기 등이 다른 이형
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
}

/// 다의어의 한 가지 뜻
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub english: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// 문맥에 이 문자열이 있으면 가산점
    #[serde(default, rename = "contextHints", skip_serializing_if = "Vec::is_empty")]
    pub context_hints: Vec<String>,
}

/// 다의어
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolysemyEntry {
    pub word: String,
    pub translations: Vec<Sense>,
}

/// 도메인(분야) 사전 항목
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub ko: String,
    pub en: String,
    pub domain: String,
    pub direction: DomainDirection,
}

/// 한국어 불규칙 용언
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrregularEntryKo {
    /// 기본 어간 (듣)
    pub base: String,
    #[serde(rename = "type")]
    pub kind: IrregularType,
    /// 어미 → 활용형 (어요 → 들어요)
    #[serde(default)]
    pub conjugations: BTreeMap<String, String>,
}

/// 영어 불규칙 동사
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrregularEntryEn {
    pub base: String,
    pub past: String,
    pub pp: String,
}

/// 사전 항목 (모든 종류)
#[derive(Debug, Clone, PartialEq)]
pub enum DictionaryEntry {
    Word(WordEntry),
    Stem(StemEntry),
    Idiom(IdiomEntry),
    Polysemy(PolysemyEntry),
    Domain(DomainEntry),
    IrregularKo(IrregularEntryKo),
    IrregularEn(IrregularEntryEn),
}
