//! 번역기 설정 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::dictionary::{FuzzyOptions, PolysemyWeights};
use crate::text::ScatterScoring;

/// 설정 파일 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// 번역기 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TranslatorConfig {
    /// 다의어: 문맥 힌트 하나가 맞을 때 더하는 점수
    #[serde(default = "default_polysemy_hint_weight")]
    pub polysemy_hint_weight: f64,
    /// 다의어: 선언된 우선순위에 곱하는 값
    #[serde(default = "default_polysemy_priority_weight")]
    pub polysemy_priority_weight: f64,
    /// 흩어진 글자 기본 신뢰도
    #[serde(default = "default_scattered_base_confidence")]
    pub scattered_base_confidence: f32,
    #[serde(default = "default_scattered_spell_bonus")]
    pub scattered_spell_bonus: f32,
    #[serde(default = "default_scattered_spell_penalty")]
    pub scattered_spell_penalty: f32,
    /// 유사도 대체 조회 최소 유사도
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,
    /// 유사도 대체 조회 후보 수 상한
    #[serde(default = "default_fuzzy_window")]
    pub fuzzy_window: usize,
    /// 유사도 메모 캐시 사용
    #[serde(default = "default_true")]
    pub similarity_cache: bool,
    /// 생성된 영어 문장 전체 검증 (끄면 공백/대문자/관사만)
    #[serde(default = "default_true")]
    pub validate_output: bool,
}

fn default_polysemy_hint_weight() -> f64 {
    1.0
}

fn default_polysemy_priority_weight() -> f64 {
    0.1
}

fn default_scattered_base_confidence() -> f32 {
    0.7
}

fn default_scattered_spell_bonus() -> f32 {
    0.15
}

fn default_scattered_spell_penalty() -> f32 {
    0.3
}

fn default_fuzzy_threshold() -> f64 {
    0.8
}

fn default_fuzzy_window() -> usize {
    64
}

fn default_true() -> bool {
    true
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            polysemy_hint_weight: default_polysemy_hint_weight(),
            polysemy_priority_weight: default_polysemy_priority_weight(),
            scattered_base_confidence: default_scattered_base_confidence(),
            scattered_spell_bonus: default_scattered_spell_bonus(),
            scattered_spell_penalty: default_scattered_spell_penalty(),
            fuzzy_threshold: default_fuzzy_threshold(),
            fuzzy_window: default_fuzzy_window(),
            similarity_cache: default_true(),
            validate_output: default_true(),
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다의어 가중치 설정
    pub fn with_polysemy_weights(mut self, hint: f64, priority: f64) -> Self {
        self.polysemy_hint_weight = hint;
        self.polysemy_priority_weight = priority;
        self
    }

    /// 유사도 대체 조회 설정
    pub fn with_fuzzy(mut self, threshold: f64, window: usize) -> Self {
        self.fuzzy_threshold = threshold;
        self.fuzzy_window = window;
        self
    }

    pub fn with_similarity_cache(mut self, enabled: bool) -> Self {
        self.similarity_cache = enabled;
        self
    }

    pub fn with_validate_output(mut self, enabled: bool) -> Self {
        self.validate_output = enabled;
        self
    }

    pub fn polysemy_weights(&self) -> PolysemyWeights {
        PolysemyWeights {
            hint_weight: self.polysemy_hint_weight,
            priority_weight: self.polysemy_priority_weight,
        }
    }

    pub fn scatter_scoring(&self) -> ScatterScoring {
        ScatterScoring {
            base: self.scattered_base_confidence,
            spell_bonus: self.scattered_spell_bonus,
            spell_penalty: self.scattered_spell_penalty,
        }
    }

    pub fn fuzzy_options(&self) -> FuzzyOptions {
        FuzzyOptions {
            threshold: self.fuzzy_threshold,
            window: self.fuzzy_window,
        }
    }
}

/// 기본 설정 파일 경로: ~/.config/hanyeong/config.json
pub fn default_config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("hanyeong").join("config.json")
}

/// 설정 파일 읽기 (에러 그대로 반환)
pub fn read_config(path: impl AsRef<Path>) -> Result<TranslatorConfig, ConfigError> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config(path: impl AsRef<Path>) -> TranslatorConfig {
    read_config(path.as_ref()).unwrap_or_else(|e| {
        log::debug!("using default config ({}): {}", path.as_ref().display(), e);
        TranslatorConfig::default()
    })
}

/// 설정 파일 저장 (상위 디렉토리 생성)
pub fn save_config(path: impl AsRef<Path>, config: &TranslatorConfig) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
