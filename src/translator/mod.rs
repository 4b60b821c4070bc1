//! 번역기 (오케스트레이터)
//!
//! 입력을 절로 나눈 뒤 절마다 관용구 조회 → 형태소/문장 분석 → 영어 생성 → 검증을 거쳐
//! 원문의 문장 부호와 함께 다시 잇습니다. 영→한은 [`en_to_ko`] 경로를 씁니다.
//!
//! 사전은 `Arc`로 공유하며 교체는 포인터를 통째로 바꾸는 방식입니다.
//! 번역 중인 호출은 시작할 때 잡은 사전을 끝까지 사용합니다.

mod clause;
mod en_to_ko;

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

pub use clause::{join_clauses, split_clauses, Clause};
pub use en_to_ko::translate_en_to_ko;

use crate::config::TranslatorConfig;
use crate::core::jamo::is_hangul;
use crate::dictionary::{Direction, DictionaryStore};
use crate::grammar::{
    analyze_morpheme, parse_sentence, quick_validate, summarize, validate_english, Generator,
    MorphemeResult,
};
use crate::similarity::{is_korean_text, SimilarityCache};
use crate::text::{
    correct_spacing_full, detect_scattered_letters_with, scattered_letters_to_errors,
    tokenize_korean, CorrectedSpacing, TextError,
};

/// 띄어쓰기 복구를 시도할 최소 음절 수
const SPACING_MIN_SYLLABLES: usize = 4;

/// 띄어쓰기 복구 결과를 적용할 최소 신뢰도
const SPACING_MIN_CONFIDENCE: f64 = 0.5;

/// 띄어쓰기 진단 (UI 표시용, 번역에는 영향 없음)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingSuggestions {
    /// 흩어진 영어 글자 제안
    pub errors: Vec<TextError>,
    /// 한국어 띄어쓰기 교정 (바뀐 경우만)
    pub korean: Option<CorrectedSpacing>,
}

pub struct Translator {
    store: RwLock<Arc<DictionaryStore>>,
    cache: SimilarityCache,
    config: TranslatorConfig,
}

impl Translator {
    /// 사전과 설정으로 생성. 다의어 가중치는 설정값으로 덮어씀
    pub fn new(store: DictionaryStore, config: TranslatorConfig) -> Self {
        let store = store.with_polysemy_weights(config.polysemy_weights());
        Self {
            store: RwLock::new(Arc::new(store)),
            cache: SimilarityCache::new(config.similarity_cache),
            config,
        }
    }

    /// 내장 사전 + 기본 설정
    pub fn builtin() -> Self {
        Self::new(DictionaryStore::builtin(), TranslatorConfig::default())
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// 현재 사전
    pub fn dictionary(&self) -> Arc<DictionaryStore> {
        Arc::clone(&self.store.read())
    }

    /// 사전 통째로 교체
    pub fn replace_dictionary(&self, store: Arc<DictionaryStore>) {
        log::debug!("dictionary replaced ({} entries)", store.len());
        *self.store.write() = store;
        self.cache.clear();
    }

    /// 번역. 실패하지 않으며 모르는 부분은 원문 그대로 남김
    pub fn translate(&self, text: &str, direction: Direction) -> String {
        let store = self.dictionary();
        let clauses = split_clauses(text);
        let translated = clauses.iter().map(|clause| {
            let body = match direction {
                Direction::KoEn => self.translate_ko_clause(&store, clause),
                Direction::EnKo => translate_en_to_ko(clause.body, &store),
            };
            (body, clause.terminator)
        });
        join_clauses(translated)
    }

    /// 절마다 문장 구조 요약 (ko→en)
    pub fn explain(&self, text: &str) -> Vec<String> {
        let store = self.dictionary();
        split_clauses(text)
            .iter()
            .filter(|clause| !clause.body.is_empty())
            .map(|clause| {
                let body = self.prepare_spacing(&store, clause.body);
                let parsed = parse_sentence(&format!("{}{}", body, clause.terminator), &store);
                format!("{} => {}", clause.body, summarize(&parsed))
            })
            .collect()
    }

    /// 띄어쓰기 진단: 흩어진 영어 글자 + 한국어 띄어쓰기 교정
    pub fn spacing_suggestions(&self, text: &str) -> SpacingSuggestions {
        let store = self.dictionary();
        let known: &dyn Fn(&str) -> bool =
            &|word: &str| store.resolve_word(word, Direction::EnKo, None).is_some();
        let scattered = detect_scattered_letters_with(text, Some(known), self.config.scatter_scoring());

        let korean = if is_korean_text(text) {
            Some(correct_spacing_full(text, &store)).filter(|c| c.corrected != text.trim())
        } else {
            None
        };
        SpacingSuggestions {
            errors: scattered_letters_to_errors(&scattered),
            korean,
        }
    }

    fn translate_ko_clause(&self, store: &DictionaryStore, clause: &Clause<'_>) -> String {
        if clause.body.is_empty() {
            return String::new();
        }
        if let Some(en) = store.lookup_idiom(clause.body, Direction::KoEn) {
            log::debug!("idiom hit: '{}' -> '{}'", clause.body, en);
            return en.to_string();
        }

        let body = self.prepare_spacing(store, clause.body);
        // 물음표는 의문문 판정에 쓰이므로 붙여서 분석
        let parsed = parse_sentence(&format!("{}{}", body, clause.terminator), store);
        let generator = Generator::new(store).with_fuzzy(&self.cache, self.config.fuzzy_options());
        let english = generator.generate(&parsed);

        // 서술어 없는 조각(명사구, 수량 표현)은 검증 없이 그대로
        if parsed.predicate.is_none() {
            return english;
        }
        if self.config.validate_output {
            validate_english(&english).corrected
        } else {
            quick_validate(&english)
        }
    }

    /// 분석되지 않는 긴 한글 어절이 있으면 띄어쓰기 복구 결과로 대체
    fn prepare_spacing(&self, store: &DictionaryStore, body: &str) -> String {
        let needs_recovery = tokenize_korean(body).iter().any(|token| {
            let unresolved = match analyze_morpheme(&token.text, store) {
                MorphemeResult::Unanalyzed { .. } => true,
                MorphemeResult::PredicateWithEnding(predicate) => !predicate.attested,
                MorphemeResult::NounWithParticle(_) => false,
            };
            unresolved
                && token.text.chars().filter(|c| is_hangul(*c)).count() >= SPACING_MIN_SYLLABLES
                && !store.is_known_noun(&token.text)
        });
        if !needs_recovery {
            return body.to_string();
        }
        let corrected = correct_spacing_full(body, store);
        if corrected.confidence >= SPACING_MIN_CONFIDENCE && corrected.corrected != body {
            log::debug!(
                "spacing recovered: '{}' -> '{}' ({:.2})",
                body,
                corrected.corrected,
                corrected.confidence
            );
            corrected.corrected
        } else {
            body.to_string()
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::builtin()
    }
}

static DEFAULT_TRANSLATOR: LazyLock<Translator> = LazyLock::new(Translator::builtin);

/// 내장 사전으로 번역
///
/// ```
/// use hanyeong::{translate, Direction};
///
/// assert_eq!(translate("사과 2개", Direction::KoEn), "2 apples");
/// assert_eq!(translate("식은 죽 먹기", Direction::KoEn), "a piece of cake");
/// ```
pub fn translate(text: &str, direction: Direction) -> String {
    DEFAULT_TRANSLATOR.translate(text, direction)
}
