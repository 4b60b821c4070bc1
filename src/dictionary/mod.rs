//! 사전 저장소
//!
//! 단어/어간/관용구/다의어/도메인/불규칙 활용 테이블을 한 번 만들어 읽기 전용으로 공유합니다.
//! 모든 조회는 실패하지 않으며, 찾지 못하면 `None` 또는 입력 그대로를 돌려줍니다.
//! 교체가 필요하면 `merge`로 새 저장소를 만들어 통째로 바꿉니다.

mod builtin;
mod entries;
mod loader;

use std::collections::{BTreeMap, HashMap};

pub use builtin::builtin_entries;
pub use entries::{
    DictionaryEntry, Direction, DomainDirection, DomainEntry, IdiomEntry, IrregularEntryEn,
    IrregularEntryKo, PolysemyEntry, Sense, StemEntry, StemType, WordEntry,
};
pub use loader::{bundle_from_json, load_bundle, DictionaryError};

use crate::core::jamo::decompose;
use crate::similarity::{calculate_keyboard_similarity, SimilarityCache};

/// 다의어 점수 가중치
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolysemyWeights {
    /// 문맥 힌트 하나가 맞을 때 더하는 점수
    pub hint_weight: f64,
    /// 선언된 우선순위에 곱하는 값 (기본 점수)
    pub priority_weight: f64,
}

impl Default for PolysemyWeights {
    fn default() -> Self {
        Self {
            hint_weight: 1.0,
            priority_weight: 0.1,
        }
    }
}

/// 퍼지 조회 설정
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOptions {
    /// 최소 유사도
    pub threshold: f64,
    /// 비교할 후보 수 상한
    pub window: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.8,
            window: 64,
        }
    }
}

/// 불규칙 활용 조회 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IrregularEntry<'a> {
    Ko(&'a IrregularEntryKo),
    En(&'a IrregularEntryEn),
}

/// 도메인 하나의 항목 (등록 순서 유지)
#[derive(Debug, Clone, Default)]
struct DomainTable {
    name: String,
    entries: Vec<DomainEntry>,
}

/// 읽기 전용 사전 저장소
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    /// 원본 항목 (merge용)
    entries: Vec<DictionaryEntry>,
    words: HashMap<String, String>,
    words_en: HashMap<String, String>,
    stems: HashMap<String, StemEntry>,
    stems_en: HashMap<String, StemEntry>,
    idioms: Vec<IdiomEntry>,
    idioms_ko: HashMap<String, usize>,
    idioms_en: HashMap<String, usize>,
    polysemy: HashMap<String, PolysemyEntry>,
    domains: Vec<DomainTable>,
    irregular_ko: HashMap<String, IrregularEntryKo>,
    irregular_ko_forms: HashMap<String, String>,
    irregular_en: HashMap<String, IrregularEntryEn>,
    irregular_en_forms: HashMap<String, String>,
    /// 첫 음절 초성 → 정렬된 한국어 표제어 (퍼지 조회 후보)
    fuzzy_ko: BTreeMap<char, Vec<String>>,
    /// 첫 글자 → 정렬된 영어 표제어
    fuzzy_en: BTreeMap<char, Vec<String>>,
    weights: PolysemyWeights,
}

/// 관용구 비교용 정규화: 소문자, 공백 제거, 끝 문장부호 제거
pub fn normalize_idiom(text: &str) -> String {
    text.trim()
        .trim_end_matches(['.', '!', '?'])
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl DictionaryStore {
    /// 빈 저장소
    pub fn new() -> Self {
        Self::default()
    }

    /// 내장 사전
    pub fn builtin() -> Self {
        Self::from_entries(builtin_entries())
    }

    /// 항목 목록으로 저장소 생성
    ///
    /// 정방향(ko→en) 표는 나중 항목이 덮어쓰고, 역방향(en→ko) 표는 먼저 들어온 항목을 유지
    pub fn from_entries(entries: impl IntoIterator<Item = DictionaryEntry>) -> Self {
        let mut store = Self::default();
        for entry in entries {
            store.insert(entry);
        }
        store.build_fuzzy_index();
        log::debug!(
            "dictionary built: {} words, {} stems, {} idioms, {} polysemy, {} domains, {} irregular",
            store.words.len(),
            store.stems.len(),
            store.idioms.len(),
            store.polysemy.len(),
            store.domains.len(),
            store.irregular_ko.len() + store.irregular_en.len()
        );
        store
    }

    /// 다의어 가중치 설정
    pub fn with_polysemy_weights(mut self, weights: PolysemyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn polysemy_weights(&self) -> PolysemyWeights {
        self.weights
    }

    /// 다른 저장소를 덧씌운 새 저장소 (자신은 변경하지 않음)
    pub fn merge(&self, other: &DictionaryStore) -> DictionaryStore {
        let entries = self.entries.iter().chain(other.entries.iter()).cloned();
        Self::from_entries(entries).with_polysemy_weights(self.weights)
    }

    /// 전체 항목 수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        match &entry {
            DictionaryEntry::Word(w) => {
                self.words.insert(w.ko.clone(), w.en.clone());
                self.words_en
                    .entry(w.en.to_lowercase())
                    .or_insert_with(|| w.ko.clone());
            }
            DictionaryEntry::Stem(s) => {
                self.stems.insert(s.stem.clone(), s.clone());
                self.stems_en
                    .entry(s.en.to_lowercase())
                    .or_insert_with(|| s.clone());
            }
            DictionaryEntry::Idiom(idiom) => {
                let index = self.idioms.len();
                self.idioms.push(idiom.clone());
                for ko in std::iter::once(&idiom.ko).chain(idiom.variants.iter()) {
                    self.idioms_ko.insert(normalize_idiom(ko), index);
                }
                self.idioms_en
                    .entry(normalize_idiom(&idiom.en))
                    .or_insert(index);
            }
            DictionaryEntry::Polysemy(p) => {
                self.polysemy.insert(p.word.clone(), p.clone());
            }
            DictionaryEntry::Domain(d) => {
                match self.domains.iter_mut().find(|t| t.name == d.domain) {
                    Some(table) => table.entries.push(d.clone()),
                    None => self.domains.push(DomainTable {
                        name: d.domain.clone(),
                        entries: vec![d.clone()],
                    }),
                }
            }
            DictionaryEntry::IrregularKo(irr) => {
                for form in irr.conjugations.values() {
                    self.irregular_ko_forms
                        .insert(form.clone(), irr.base.clone());
                }
                self.irregular_ko.insert(irr.base.clone(), irr.clone());
            }
            DictionaryEntry::IrregularEn(irr) => {
                let base = irr.base.to_lowercase();
                for form in [&irr.past, &irr.pp] {
                    self.irregular_en_forms
                        .entry(form.to_lowercase())
                        .or_insert_with(|| base.clone());
                }
                self.irregular_en.insert(base, irr.clone());
            }
        }
        self.entries.push(entry);
    }

    fn build_fuzzy_index(&mut self) {
        let mut ko: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for word in self.words.keys().chain(self.polysemy.keys()) {
            if let Some(lead) = word.chars().next().and_then(decompose).map(|t| t.lead) {
                ko.entry(lead).or_default().push(word.clone());
            }
        }
        let mut en: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for word in self.words_en.keys() {
            if let Some(first) = word.chars().next() {
                en.entry(first).or_default().push(word.clone());
            }
        }
        for list in ko.values_mut().chain(en.values_mut()) {
            list.sort();
            list.dedup();
        }
        self.fuzzy_ko = ko;
        self.fuzzy_en = en;
    }

    /// 단어 번역. 찾지 못하면 입력 그대로 반환
    ///
    /// 1) 단어 표 2) 다의어 (문맥 점수) 3) 도메인 사전 4) 원문 통과
    pub fn lookup_word(&self, word: &str, direction: Direction, context: Option<&str>) -> String {
        self.resolve_word(word, direction, context)
            .unwrap_or_else(|| word.to_string())
    }

    /// 단어 번역. 찾지 못하면 None
    pub fn resolve_word(
        &self,
        word: &str,
        direction: Direction,
        context: Option<&str>,
    ) -> Option<String> {
        let direct = match direction {
            Direction::KoEn => self.words.get(word),
            Direction::EnKo => self.words_en.get(&word.to_lowercase()),
        };
        if let Some(found) = direct {
            return Some(found.clone());
        }

        if direction == Direction::KoEn {
            if let Some(sense) = self.resolve_polysemy(word, context) {
                return Some(sense.english.clone());
            }
        }

        self.search_all_domains(word, direction).map(str::to_string)
    }

    /// 다의어 뜻 선택
    ///
    /// 점수 = 우선순위 × priority_weight + 맞은 힌트 수 × hint_weight.
    /// 동점이면 우선순위가 높은 쪽, 그래도 같으면 먼저 나열된 쪽
    pub fn resolve_polysemy(&self, word: &str, context: Option<&str>) -> Option<&Sense> {
        let entry = self.polysemy.get(word)?;
        let context = context.unwrap_or("");
        let mut best: Option<(&Sense, f64, i32)> = None;

        for sense in &entry.translations {
            let priority = sense.priority.unwrap_or(0);
            let hits = sense
                .context_hints
                .iter()
                .filter(|hint| !hint.is_empty() && context.contains(hint.as_str()))
                .count();
            let score =
                priority as f64 * self.weights.priority_weight + hits as f64 * self.weights.hint_weight;

            let better = match best {
                None => true,
                Some((_, best_score, best_priority)) => {
                    score > best_score || (score == best_score && priority > best_priority)
                }
            };
            if better {
                best = Some((sense, score, priority));
            }
        }

        if let Some((sense, score, _)) = best {
            log::trace!("polysemy '{}' -> '{}' (score {:.2})", word, sense.english, score);
        }
        best.map(|(sense, _, _)| sense)
    }

    /// 도메인 사전 검색 (등록 순서대로, 첫 일치 반환)
    pub fn search_all_domains(&self, word: &str, direction: Direction) -> Option<&str> {
        let lower = word.to_lowercase();
        self.domains
            .iter()
            .flat_map(|table| table.entries.iter())
            .filter(|entry| entry.direction.allows(direction))
            .find_map(|entry| match direction {
                Direction::KoEn if entry.ko == word => Some(entry.en.as_str()),
                Direction::EnKo if entry.en.to_lowercase() == lower => Some(entry.ko.as_str()),
                _ => None,
            })
    }

    /// 도메인 이름 목록 (등록 순서)
    pub fn domain_names(&self) -> Vec<&str> {
        self.domains.iter().map(|t| t.name.as_str()).collect()
    }

    /// 어간 번역 (품사 일치 시)
    pub fn lookup_stem(&self, stem: &str, kind: StemType) -> Option<&str> {
        self.stems
            .get(stem)
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.en.as_str())
    }

    /// 어간 항목 (품사 무관)
    pub fn stem_entry(&self, stem: &str) -> Option<&StemEntry> {
        self.stems.get(stem)
    }

    /// 영어 원형으로 어간 항목 찾기 (en→ko)
    pub fn stem_for_english(&self, english: &str) -> Option<&StemEntry> {
        self.stems_en.get(&english.to_lowercase())
    }

    /// 사전에 있는 체언인지 (단어 표, 명사 어간, 다의어, 도메인)
    pub fn is_known_noun(&self, word: &str) -> bool {
        self.words.contains_key(word)
            || self
                .stems
                .get(word)
                .is_some_and(|s| s.kind == StemType::Noun)
            || self.polysemy.contains_key(word)
            || self.search_all_domains(word, Direction::KoEn).is_some()
    }

    /// 관용구 조회 (공백/대소문자 무시, 이형 포함)
    pub fn lookup_idiom(&self, text: &str, direction: Direction) -> Option<&str> {
        let key = normalize_idiom(text);
        if key.is_empty() {
            return None;
        }
        match direction {
            Direction::KoEn => self.idioms_ko.get(&key).map(|&i| self.idioms[i].en.as_str()),
            Direction::EnKo => self.idioms_en.get(&key).map(|&i| self.idioms[i].ko.as_str()),
        }
    }

    /// 불규칙 활용 조회 (한국어 기본형/활용형, 영어 원형/과거/과거분사)
    pub fn lookup_irregular(&self, form: &str) -> Option<IrregularEntry<'_>> {
        self.lookup_irregular_ko(form)
            .map(IrregularEntry::Ko)
            .or_else(|| self.lookup_irregular_en(form).map(IrregularEntry::En))
    }

    /// 한국어 불규칙 용언 (기본 어간 또는 등록된 활용형)
    pub fn lookup_irregular_ko(&self, form: &str) -> Option<&IrregularEntryKo> {
        self.irregular_ko.get(form).or_else(|| {
            self.irregular_ko_forms
                .get(form)
                .and_then(|base| self.irregular_ko.get(base))
        })
    }

    /// 활용형 → (기본 어간, 어미)
    pub fn irregular_form_split(&self, form: &str) -> Option<(&IrregularEntryKo, &str)> {
        let base = self.irregular_ko_forms.get(form)?;
        let entry = self.irregular_ko.get(base)?;
        let ending = entry
            .conjugations
            .iter()
            .find(|(_, surface)| surface.as_str() == form)
            .map(|(ending, _)| ending.as_str())?;
        Some((entry, ending))
    }

    /// 영어 불규칙 동사 (원형/과거/과거분사 중 하나)
    pub fn lookup_irregular_en(&self, form: &str) -> Option<&IrregularEntryEn> {
        let lower = form.to_lowercase();
        self.irregular_en.get(&lower).or_else(|| {
            self.irregular_en_forms
                .get(&lower)
                .and_then(|base| self.irregular_en.get(base))
        })
    }

    /// 불규칙 과거/과거분사형이면 원형 반환
    pub fn english_base_form(&self, word: &str) -> Option<&str> {
        let lower = word.to_lowercase();
        if self.irregular_en.contains_key(&lower) {
            return None;
        }
        self.irregular_en_forms.get(&lower).map(String::as_str)
    }

    /// 유사도 기반 대체 조회
    ///
    /// 같은 초성(영어는 첫 글자)으로 시작하는 표제어 중 입력의 정렬 위치 주변 `window`개만 비교
    pub fn lookup_word_fuzzy(
        &self,
        word: &str,
        direction: Direction,
        cache: &SimilarityCache,
        options: FuzzyOptions,
    ) -> Option<String> {
        let (key, index) = match direction {
            Direction::KoEn => (
                word.chars().next().and_then(decompose).map(|t| t.lead)?,
                &self.fuzzy_ko,
            ),
            Direction::EnKo => (word.chars().next()?.to_ascii_lowercase(), &self.fuzzy_en),
        };
        let candidates = index.get(&key)?;
        let query = match direction {
            Direction::KoEn => word.to_string(),
            Direction::EnKo => word.to_lowercase(),
        };

        let window = options.window.max(1);
        let center = candidates.partition_point(|c| c.as_str() < query.as_str());
        let start = center.saturating_sub(window / 2);
        let end = (start + window).min(candidates.len());

        let mut best: Option<(&str, f64)> = None;
        for candidate in &candidates[start..end] {
            let score = cache.get_or_compute(&query, candidate, calculate_keyboard_similarity);
            if score >= options.threshold && best.map_or(true, |(_, s)| score > s) {
                best = Some((candidate.as_str(), score));
            }
        }

        let (candidate, score) = best?;
        log::debug!("fuzzy match '{}' -> '{}' ({:.2})", word, candidate, score);
        self.resolve_word(candidate, direction, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DictionaryStore {
        DictionaryStore::builtin()
    }

    #[test]
    fn test_lookup_word_direct_and_reverse() {
        let store = store();
        assert_eq!(store.lookup_word("사과", Direction::KoEn, None), "apple");
        assert_eq!(store.lookup_word("apple", Direction::EnKo, None), "사과");
        assert_eq!(store.lookup_word("Apple", Direction::EnKo, None), "사과");
        // 역방향은 먼저 등록된 항목
        assert_eq!(store.lookup_word("I", Direction::EnKo, None), "나");
    }

    #[test]
    fn test_lookup_word_passthrough() {
        let store = store();
        assert_eq!(store.lookup_word("뷁뷁", Direction::KoEn, None), "뷁뷁");
        assert_eq!(store.lookup_word("xylophone", Direction::EnKo, None), "xylophone");
        assert!(store.resolve_word("뷁뷁", Direction::KoEn, None).is_none());
    }

    #[test]
    fn test_polysemy_context() {
        let store = store();
        assert_eq!(store.lookup_word("배", Direction::KoEn, Some("배를 타요")), "boat");
        assert_eq!(store.lookup_word("배", Direction::KoEn, Some("배를 먹어요")), "pear");
        assert_eq!(store.lookup_word("배", Direction::KoEn, Some("배가 아파요")), "stomach");
        assert_eq!(store.lookup_word("눈", Direction::KoEn, Some("눈이 와요")), "snow");
    }

    #[test]
    fn test_polysemy_tie_break() {
        let store = store();
        // 문맥 없음: 우선순위가 높은 pear
        assert_eq!(store.lookup_word("배", Direction::KoEn, None), "pear");
        // 우선순위까지 같으면 먼저 나열된 뜻
        assert_eq!(store.lookup_word("말", Direction::KoEn, None), "horse");
    }

    #[test]
    fn test_polysemy_weights() {
        let store = store().with_polysemy_weights(PolysemyWeights {
            hint_weight: 0.01,
            priority_weight: 1.0,
        });
        // 힌트 가중치가 작으면 우선순위가 이김
        assert_eq!(store.lookup_word("배", Direction::KoEn, Some("배를 타요")), "pear");
    }

    #[test]
    fn test_domains_in_registration_order() {
        let store = store();
        assert_eq!(store.lookup_word("서버", Direction::KoEn, None), "server");
        assert_eq!(store.lookup_word("server", Direction::EnKo, None), "서버");
        // ko-en 전용 도메인은 역방향에 쓰이지 않음
        assert_eq!(store.lookup_word("kimchi", Direction::EnKo, None), "kimchi");
        assert_eq!(store.domain_names(), vec!["it", "food", "travel", "medical"]);

        let conflicting = DictionaryStore::from_entries(vec![
            DictionaryEntry::Domain(DomainEntry {
                ko: "셀".into(),
                en: "cell".into(),
                domain: "biology".into(),
                direction: DomainDirection::Both,
            }),
            DictionaryEntry::Domain(DomainEntry {
                ko: "셀".into(),
                en: "spreadsheet cell".into(),
                domain: "office".into(),
                direction: DomainDirection::Both,
            }),
        ]);
        assert_eq!(conflicting.lookup_word("셀", Direction::KoEn, None), "cell");
    }

    #[test]
    fn test_lookup_stem() {
        let store = store();
        assert_eq!(store.lookup_stem("먹", StemType::Verb), Some("eat"));
        assert_eq!(store.lookup_stem("먹", StemType::Adj), None);
        assert_eq!(store.lookup_stem("행복하", StemType::Adj), Some("happy"));
        assert_eq!(store.stem_for_english("EAT").map(|s| s.stem.as_str()), Some("먹"));
    }

    #[test]
    fn test_lookup_idiom() {
        let store = store();
        assert_eq!(store.lookup_idiom("식은 죽 먹기", Direction::KoEn), Some("a piece of cake"));
        assert_eq!(store.lookup_idiom("식은죽  먹기", Direction::KoEn), Some("a piece of cake"));
        assert_eq!(store.lookup_idiom("식은죽먹기.", Direction::KoEn), Some("a piece of cake"));
        assert_eq!(store.lookup_idiom("A Piece of Cake", Direction::EnKo), Some("식은 죽 먹기"));
        assert_eq!(store.lookup_idiom("식은 죽", Direction::KoEn), None);
        assert_eq!(store.lookup_idiom("", Direction::KoEn), None);
    }

    #[test]
    fn test_lookup_irregular() {
        let store = store();
        assert!(matches!(store.lookup_irregular("듣"), Some(IrregularEntry::Ko(e)) if e.base == "듣"));
        assert!(matches!(store.lookup_irregular("들었어요"), Some(IrregularEntry::Ko(e)) if e.base == "듣"));
        assert!(matches!(store.lookup_irregular("went"), Some(IrregularEntry::En(e)) if e.base == "go"));
        assert!(store.lookup_irregular("먹").is_none());

        let (entry, ending) = store.irregular_form_split("추워요").unwrap();
        assert_eq!(entry.base, "춥");
        assert_eq!(ending, "어요");
    }

    #[test]
    fn test_english_base_form() {
        let store = store();
        assert_eq!(store.english_base_form("went"), Some("go"));
        assert_eq!(store.english_base_form("Eaten"), Some("eat"));
        // 원형과 과거형이 같은 동사는 원형으로 취급
        assert_eq!(store.english_base_form("read"), None);
        assert_eq!(store.english_base_form("walked"), None);
    }

    #[test]
    fn test_fuzzy_lookup() {
        let store = store();
        let cache = SimilarityCache::default();
        let options = FuzzyOptions::default();
        // 인접 키 오타 (ㅏ→ㅓ)
        assert_eq!(
            store.lookup_word_fuzzy("학교", Direction::KoEn, &cache, options),
            Some("school".to_string())
        );
        assert_eq!(
            store.lookup_word_fuzzy("핵교", Direction::KoEn, &cache, options),
            Some("school".to_string())
        );
        assert_eq!(
            store.lookup_word_fuzzy("aplpe", Direction::EnKo, &cache, FuzzyOptions { threshold: 0.6, window: 64 }),
            Some("사과".to_string())
        );
        assert!(store
            .lookup_word_fuzzy("뷁", Direction::KoEn, &cache, options)
            .is_none());
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_merge_is_copy_on_write() {
        let base = store();
        let extra = bundle_from_json(r#"{"words": [{"ko": "사과", "en": "apology"}, {"ko": "고래", "en": "whale"}]}"#)
            .unwrap();
        let merged = base.merge(&extra);

        assert_eq!(merged.lookup_word("고래", Direction::KoEn, None), "whale");
        assert_eq!(merged.lookup_word("사과", Direction::KoEn, None), "apology");
        // 원본은 그대로
        assert_eq!(base.lookup_word("사과", Direction::KoEn, None), "apple");
        assert_eq!(base.lookup_word("고래", Direction::KoEn, None), "고래");
        assert_eq!(merged.len(), base.len() + 2);
    }

    #[test]
    fn test_empty_store_degrades_gracefully() {
        let store = DictionaryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.lookup_word("사과", Direction::KoEn, Some("ctx")), "사과");
        assert!(store.lookup_idiom("식은 죽 먹기", Direction::KoEn).is_none());
        assert!(store.lookup_stem("먹", StemType::Verb).is_none());
        assert!(store.lookup_irregular("went").is_none());
        assert!(!store.is_known_noun("사과"));
    }

    #[test]
    fn test_is_known_noun() {
        let store = store();
        assert!(store.is_known_noun("사과"));
        assert!(store.is_known_noun("배"));
        assert!(store.is_known_noun("김치"));
        assert!(!store.is_known_noun("먹"));
    }
}
