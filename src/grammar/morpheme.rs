//! 형태소 분석
//!
//! 어절 하나를 체언+조사 / 어간+어미 / 미분석 중 하나로 나눕니다.
//! 조사와 어미는 긴 접미사부터 검사하는 표로 관리합니다.

use std::sync::LazyLock;

use crate::core::irregular::{restore_contracted, restore_uncontracted, vowel_ending_head, StemCandidate};
use crate::core::jamo::{change_batchim, decompose, is_hangul, is_jamo, remove_batchim};
use crate::core::IrregularType;
use crate::dictionary::{DictionaryStore, StemType};
use crate::text::Token;

/// 문장 안에서의 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Subject,
    Predicate,
    Object,
    Modifier,
    Adverbial,
}

/// 조사의 문법 기능
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleFunction {
    /// 조사 없음
    Bare,
    /// 은/는
    Topic,
    /// 이/가/께서
    Subject,
    /// 을/를
    Object,
    /// 에
    Locative,
    /// 에서
    Place,
    /// (으)로
    Direction,
    /// 에게/한테/께
    Dative,
    /// 와/과/랑/이랑/하고
    Comitative,
    /// 부터
    Source,
    /// 까지
    Limit,
    /// 의
    Possessive,
    /// 도
    Additive,
    /// 만
    Only,
    /// 보다
    Comparative,
    /// 처럼
    Similar,
}

impl ParticleFunction {
    /// 조사 기능에서 문장 역할 결정
    pub fn role(&self) -> Role {
        match self {
            ParticleFunction::Topic
            | ParticleFunction::Subject
            | ParticleFunction::Additive
            | ParticleFunction::Only => Role::Subject,
            ParticleFunction::Object => Role::Object,
            ParticleFunction::Possessive | ParticleFunction::Bare => Role::Modifier,
            _ => Role::Adverbial,
        }
    }
}

/// 용언 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Verb,
    Adjective,
    /// 이다/아니다
    Copula,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tense {
    #[default]
    Present,
    Past,
    Future,
}

impl Tense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::Future => "future",
        }
    }
}

/// 체언 + 조사
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nominal {
    pub stem: String,
    /// 조사 (없으면 빈 문자열)
    pub particle: String,
    pub function: ParticleFunction,
    pub role: Role,
}

/// 어간 + 어미
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    /// 용언 어간, 서술격 조사면 앞 체언
    pub stem: String,
    pub ending: String,
    pub pos: Pos,
    pub tense: Tense,
    pub negative: bool,
    pub question: bool,
    pub irregular: Option<IrregularType>,
    /// 어간이 사전에 있는지
    pub attested: bool,
    /// 관형형 (큰, 먹는, 새)
    pub adnominal: bool,
}

/// 어절 분석 결과. 분석 실패는 오류가 아니라 `Unanalyzed`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MorphemeResult {
    NounWithParticle(Nominal),
    PredicateWithEnding(Predicate),
    Unanalyzed { text: String },
}

impl MorphemeResult {
    pub fn role(&self) -> Role {
        match self {
            MorphemeResult::NounWithParticle(n) => n.role,
            MorphemeResult::PredicateWithEnding(_) => Role::Predicate,
            MorphemeResult::Unanalyzed { .. } => Role::Modifier,
        }
    }

    pub fn as_nominal(&self) -> Option<&Nominal> {
        match self {
            MorphemeResult::NounWithParticle(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_predicate(&self) -> Option<&Predicate> {
        match self {
            MorphemeResult::PredicateWithEnding(p) => Some(p),
            _ => None,
        }
    }
}

/// 토큰과 그 분석 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedToken {
    pub token: Token,
    pub morpheme: MorphemeResult,
}

/// 부정 서술격 조사 어간 (아니다)
pub const NEGATIVE_COPULA: &str = "아니";

/// 날을 가리키는 부사 (오늘 아침, 내일 저녁)
pub const DAY_ADVERBS: [&str; 3] = ["오늘", "어제", "내일"];

/// 부정 부사
pub const NEGATION_ADVERBS: [&str; 2] = ["안", "못"];

#[rustfmt::skip]
const PRONOUNS: &[&str] = &[
    "나", "저", "너", "당신", "그", "그녀", "우리", "저희", "너희", "그들",
    "이것", "그것", "저것", "이거", "그거", "저거",
];

/// 조사가 붙어 줄어든 대명사 (형태, 대명사, 조사, 기능)
#[rustfmt::skip]
const CONTRACTED_PRONOUNS: &[(&str, &str, &str, ParticleFunction)] = &[
    ("내가", "나", "가", ParticleFunction::Subject),
    ("제가", "저", "가", ParticleFunction::Subject),
    ("네가", "너", "가", ParticleFunction::Subject),
    ("난", "나", "는", ParticleFunction::Topic),
    ("전", "저", "는", ParticleFunction::Topic),
    ("넌", "너", "는", ParticleFunction::Topic),
    ("날", "나", "를", ParticleFunction::Object),
    ("절", "저", "를", ParticleFunction::Object),
    ("널", "너", "를", ParticleFunction::Object),
    ("내", "나", "의", ParticleFunction::Possessive),
    ("제", "저", "의", ParticleFunction::Possessive),
];

/// 조사 없이 때를 나타내는 명사 (오늘 아침, 밤에)
const TIME_NOUNS: [&str; 4] = ["아침", "저녁", "밤", "주말"];

/// 관형사
const PRENOUNS: [&str; 3] = ["새", "헌", "옛"];

/// 조사 없이 쓰이는 부사
#[rustfmt::skip]
const BARE_ADVERBS: &[&str] = &[
    "안", "못", "어제", "오늘", "내일", "지금", "매일", "자주", "항상", "가끔", "빨리",
    "천천히", "정말", "진짜", "아주", "매우", "너무", "같이", "함께", "혼자", "잘", "많이",
    "조금", "다시", "벌써", "이미", "곧", "또", "아직", "먼저", "나중에",
];

#[rustfmt::skip]
const PARTICLE_TABLE: &[(&str, ParticleFunction)] = &[
    ("께서", ParticleFunction::Subject),
    ("에서", ParticleFunction::Place),
    ("에게", ParticleFunction::Dative),
    ("한테", ParticleFunction::Dative),
    ("으로", ParticleFunction::Direction),
    ("이랑", ParticleFunction::Comitative),
    ("하고", ParticleFunction::Comitative),
    ("부터", ParticleFunction::Source),
    ("까지", ParticleFunction::Limit),
    ("보다", ParticleFunction::Comparative),
    ("처럼", ParticleFunction::Similar),
    ("은", ParticleFunction::Topic),
    ("는", ParticleFunction::Topic),
    ("이", ParticleFunction::Subject),
    ("가", ParticleFunction::Subject),
    ("을", ParticleFunction::Object),
    ("를", ParticleFunction::Object),
    ("에", ParticleFunction::Locative),
    ("로", ParticleFunction::Direction),
    ("와", ParticleFunction::Comitative),
    ("과", ParticleFunction::Comitative),
    ("랑", ParticleFunction::Comitative),
    ("께", ParticleFunction::Dative),
    ("의", ParticleFunction::Possessive),
    ("도", ParticleFunction::Additive),
    ("만", ParticleFunction::Only),
];

/// 체언이 사전에 없어도 조사로 인정하는 형태 (다른 어미와 헷갈리지 않는 것)
///
/// 은/는/을은 관형형 어미(작은, 먹는, 먹을)와 모양이 같아서 빠짐
const UNAMBIGUOUS_PARTICLES: [&str; 10] = [
    "께서", "에서", "에게", "한테", "이랑", "부터", "까지", "보다", "처럼", "를",
];

/// 어미 표 항목
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ending {
    pub surface: &'static str,
    pub tense: Tense,
    pub question: bool,
    pub negative: bool,
}

const fn ending(surface: &'static str, tense: Tense) -> Ending {
    Ending {
        surface,
        tense,
        question: false,
        negative: false,
    }
}

const fn question(surface: &'static str, tense: Tense) -> Ending {
    Ending {
        surface,
        tense,
        question: true,
        negative: false,
    }
}

const fn negative(surface: &'static str, tense: Tense) -> Ending {
    Ending {
        surface,
        tense,
        question: false,
        negative: true,
    }
}

use Tense::{Future, Past, Present};

/// 용언 어미. 자모로 시작하는 항목은 어간 끝 음절의 받침으로 붙음 (가+ㅂ니다 → 갑니다)
#[rustfmt::skip]
const ENDING_TABLE: &[Ending] = &[
    negative("지않았습니다", Past), negative("지않습니다", Present),
    negative("지않았어요", Past), negative("지않아요", Present),
    negative("지않았어", Past), negative("지않았다", Past),
    negative("지않는다", Present), negative("지않아", Present),
    negative("지못했어요", Past), negative("지못해요", Present), negative("지못합니다", Present),
    ending("ㄹ거예요", Future), ending("을거예요", Future),
    ending("ㄹ겁니다", Future), ending("을겁니다", Future),
    ending("ㄹ거야", Future), ending("을거야", Future),
    ending("겠습니다", Future), ending("겠어요", Future), ending("겠어", Future), ending("겠다", Future),
    ending("ㄹ게요", Future), ending("을게요", Future), ending("ㄹ게", Future), ending("을게", Future),
    ending("았습니다", Past), ending("었습니다", Past),
    question("았습니까", Past), question("었습니까", Past),
    question("았나요", Past), question("었나요", Past),
    ending("았어요", Past), ending("었어요", Past),
    ending("으셨어요", Past), ending("셨어요", Past),
    ending("았어", Past), ending("었어", Past),
    ending("았다", Past), ending("었다", Past),
    question("았니", Past), question("었니", Past),
    ending("습니다", Present), question("습니까", Present),
    ending("ㅂ니다", Present), question("ㅂ니까", Present),
    ending("으세요", Present), ending("세요", Present),
    ending("는다", Present), ending("ㄴ다", Present),
    ending("지요", Present), ending("네요", Present), question("나요", Present),
    ending("아요", Present), ending("어요", Present),
    ending("죠", Present), question("니", Present), question("냐", Present),
    ending("아", Present), ending("어", Present), ending("다", Present),
];

/// 서술격 조사 (어미, 시제, 의문)
#[rustfmt::skip]
const COPULA_TABLE: &[(&str, Tense, bool)] = &[
    ("이었습니다", Past, false), ("였습니다", Past, false),
    ("이었어요", Past, false), ("였어요", Past, false),
    ("이었어", Past, false), ("였어", Past, false),
    ("이었다", Past, false), ("였다", Past, false),
    ("입니다", Present, false), ("입니까", Present, true),
    ("이에요", Present, false), ("예요", Present, false), ("에요", Present, false),
    ("이야", Present, false), ("이다", Present, false), ("야", Present, false),
];

/// 부정 서술격 조사 (아니다) 활용형
#[rustfmt::skip]
const NEGATIVE_COPULA_TABLE: &[(&str, Tense, bool)] = &[
    ("아니었습니다", Past, false), ("아니었어요", Past, false), ("아니었어", Past, false),
    ("아니었다", Past, false), ("아닙니다", Present, false), ("아닙니까", Present, true),
    ("아니에요", Present, false), ("아니예요", Present, false), ("아니야", Present, false),
    ("아니다", Present, false),
];

/// 수 분류사
pub const COUNTERS: [&str; 12] = [
    "개", "명", "마리", "권", "잔", "병", "장", "대", "번", "살", "시간", "분",
];

/// 고유어 수사 (단독형, 관형형, 값)
#[rustfmt::skip]
const NATIVE_NUMERALS: &[(&str, &str, u32)] = &[
    ("하나", "한", 1), ("둘", "두", 2), ("셋", "세", 3), ("넷", "네", 4), ("다섯", "다섯", 5),
    ("여섯", "여섯", 6), ("일곱", "일곱", 7), ("여덟", "여덟", 8), ("아홉", "아홉", 9),
    ("열", "열", 10), ("스물", "스무", 20),
];

static SORTED_PARTICLES: LazyLock<Vec<(&'static str, ParticleFunction)>> = LazyLock::new(|| {
    let mut table = PARTICLE_TABLE.to_vec();
    table.sort_by_key(|(p, _)| std::cmp::Reverse(p.chars().count()));
    table
});

static SORTED_ENDINGS: LazyLock<Vec<Ending>> = LazyLock::new(|| {
    let mut table = ENDING_TABLE.to_vec();
    table.sort_by_key(|e| std::cmp::Reverse(e.surface.chars().count()));
    table
});

/// 길이 내림차순으로 정렬된 조사 표
pub fn particles() -> &'static [(&'static str, ParticleFunction)] {
    &SORTED_PARTICLES
}

/// 길이 내림차순으로 정렬된 어미 표
pub fn endings() -> &'static [Ending] {
    &SORTED_ENDINGS
}

/// 수량 표현
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    /// 정수 부분
    pub count: u32,
    /// 소수점 아래 숫자 ("3.5" → "5")
    pub fraction: Option<String>,
    /// 고유어 수사로 썼는지 (하나, 두 개)
    pub native: bool,
    pub counter: Option<String>,
}

impl Quantity {
    /// 영어 명사를 복수로 써야 하는지 (1은 단수, 소수는 복수)
    pub fn is_plural(&self) -> bool {
        self.count != 1 || self.fraction.is_some()
    }
}

fn leading_digits(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(text.len(), |(i, _)| i);
    &text[..end]
}

/// 숫자/고유어 수사 + 분류사 해석 ("2개", "두명", "하나", "3", "3.5")
pub fn parse_quantity(word: &str) -> Option<Quantity> {
    let digits = leading_digits(word);
    if !digits.is_empty() {
        let count = digits.parse().ok()?;
        let mut rest = &word[digits.len()..];
        let mut fraction = None;
        if let Some(after_point) = rest.strip_prefix('.') {
            let decimals = leading_digits(after_point);
            if decimals.is_empty() {
                return None;
            }
            fraction = Some(decimals.to_string());
            rest = &after_point[decimals.len()..];
        }
        if rest.is_empty() {
            return Some(Quantity {
                count,
                fraction,
                native: false,
                counter: None,
            });
        }
        return COUNTERS.contains(&rest).then(|| Quantity {
            count,
            fraction,
            native: false,
            counter: Some(rest.to_string()),
        });
    }

    for &(standalone, attributive, count) in NATIVE_NUMERALS {
        if word == standalone {
            return Some(Quantity {
                count,
                fraction: None,
                native: true,
                counter: None,
            });
        }
        if let Some(rest) = word.strip_prefix(attributive) {
            if COUNTERS.contains(&rest) {
                return Some(Quantity {
                    count,
                    fraction: None,
                    native: true,
                    counter: Some(rest.to_string()),
                });
            }
        }
    }
    None
}

/// 관형형 수사인지 (분류사와 띄어 쓴 경우 합치기용)
fn is_attributive_numeral(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty()
        || NATIVE_NUMERALS.iter().any(|&(_, attributive, _)| attributive == word)
}

pub fn is_pronoun(word: &str) -> bool {
    PRONOUNS.contains(&word)
}

pub fn is_bare_adverb(word: &str) -> bool {
    BARE_ADVERBS.contains(&word)
}

pub fn is_time_noun(word: &str) -> bool {
    TIME_NOUNS.contains(&word)
}

pub fn is_prenoun(word: &str) -> bool {
    PRENOUNS.contains(&word)
}

fn is_nominal_stem(word: &str, store: &DictionaryStore) -> bool {
    is_pronoun(word) || store.is_known_noun(word) || parse_quantity(word).is_some()
}

/// 조사를 떼어냄. 남은 부분이 사전에 있는 체언일 때만 성공
pub fn split_particle<'w>(word: &'w str, store: &DictionaryStore) -> Option<(&'w str, &'static str, ParticleFunction)> {
    particles().iter().find_map(|&(particle, function)| {
        let stem = word.strip_suffix(particle)?;
        (!stem.is_empty() && is_nominal_stem(stem, store)).then_some((stem, particle, function))
    })
}

/// 어간+어미 분리. 어간이 사전에 있을 때만 성공
pub fn split_predicate(word: &str, store: &DictionaryStore) -> Option<Predicate> {
    analyze_predicate(word, store).filter(|p| p.attested)
}

/// 어미 하나에 대해 되살릴 수 있는 어간 후보 (후보, 사전에 없어도 쓸 수 있는지)
fn ending_candidates(word: &str, ending: &Ending) -> Vec<(StemCandidate, bool)> {
    let regular = |stem: String| StemCandidate { stem, irregular: None };
    let mut out = Vec::new();
    let surface = ending.surface;

    // 받침으로 붙는 어미: 갑니다 ← 가, 압니다 ← 알
    if let Some(jamo) = surface.chars().next().filter(|c| is_jamo(*c)) {
        let rest = &surface[jamo.len_utf8()..];
        let Some(prefix) = word.strip_suffix(rest) else {
            return out;
        };
        let Some(last) = prefix.chars().last() else {
            return out;
        };
        if decompose(last).and_then(|t| t.trail) != Some(jamo) {
            return out;
        }
        let head = &prefix[..prefix.len() - last.len_utf8()];
        out.push((regular(format!("{}{}", head, remove_batchim(last))), true));
        if jamo != 'ㄹ' {
            out.push((regular(format!("{}{}", head, change_batchim(last, Some('ㄹ')))), false));
        }
        return out;
    }

    if let Some(prefix) = word.strip_suffix(surface).filter(|p| !p.is_empty()) {
        out.push((regular(prefix.to_string()), true));
        if vowel_ending_head(surface).is_some() {
            out.extend(restore_uncontracted(prefix).into_iter().map(|c| (c, false)));
        }
    }

    // 어미 첫 음절이 어간에 축약된 경우: 봤어요, 추워요, 해요
    if let Some((head, rest)) = vowel_ending_head(surface) {
        if let Some(contracted) = word.strip_suffix(rest).filter(|p| !p.is_empty()) {
            for candidate in restore_contracted(contracted, head.vowel, head.trail) {
                let hada = candidate.irregular.is_none() && candidate.stem.ends_with('하');
                out.push((candidate, hada));
            }
        }
    }
    out
}

fn is_attested(candidate: &StemCandidate, store: &DictionaryStore) -> bool {
    match candidate.irregular {
        Some(kind) => store
            .lookup_irregular_ko(&candidate.stem)
            .is_some_and(|entry| entry.base == candidate.stem && entry.kind == kind),
        None => store
            .stem_entry(&candidate.stem)
            .is_some_and(|entry| entry.kind != StemType::Noun),
    }
}

fn predicate_pos(stem: &str, store: &DictionaryStore) -> Pos {
    match store.stem_entry(stem).map(|e| e.kind) {
        Some(StemType::Adj) => Pos::Adjective,
        _ => Pos::Verb,
    }
}

fn build_predicate(
    candidate: StemCandidate,
    ending: &Ending,
    store: &DictionaryStore,
    attested: bool,
) -> Predicate {
    Predicate {
        pos: predicate_pos(&candidate.stem, store),
        stem: candidate.stem,
        ending: ending.surface.to_string(),
        tense: ending.tense,
        negative: ending.negative,
        question: ending.question,
        irregular: candidate.irregular,
        attested,
        adnominal: false,
    }
}

/// 어간+어미 분석 (사전에 없는 어간은 `attested = false`)
///
/// 1) 사전에 등록된 불규칙 활용형 2) 어미 표를 긴 것부터 돌며 사전에 있는 어간
/// 3) 사전에 없으면 처음 맞은 단순 분리
fn analyze_predicate(word: &str, store: &DictionaryStore) -> Option<Predicate> {
    if let Some((entry, ending)) = store.irregular_form_split(word) {
        let tense = if ending.contains('었') || ending.contains('았') {
            Tense::Past
        } else {
            Tense::Present
        };
        return Some(Predicate {
            stem: entry.base.clone(),
            ending: ending.to_string(),
            pos: predicate_pos(&entry.base, store),
            tense,
            negative: false,
            question: false,
            irregular: Some(entry.kind),
            attested: true,
            adnominal: false,
        });
    }

    let mut fallback: Option<Predicate> = None;
    for ending in endings() {
        for (candidate, usable) in ending_candidates(word, ending) {
            if is_attested(&candidate, store) {
                return Some(build_predicate(candidate, ending, store, true));
            }
            if usable && fallback.is_none() && candidate.stem.chars().all(is_hangul) {
                fallback = Some(build_predicate(candidate, ending, store, false));
            }
        }
    }
    fallback
}

/// 서술격 조사 분리. (체언, 시제, 의문, 부정)
fn split_copula<'w>(word: &'w str) -> Vec<(&'w str, Tense, bool)> {
    COPULA_TABLE
        .iter()
        .filter_map(|&(suffix, tense, question)| {
            let noun = word.strip_suffix(suffix)?;
            if noun.is_empty() {
                return None;
            }
            // 야는 받침 없는 체언 뒤에서만
            if suffix == "야" && noun.chars().last().and_then(decompose).and_then(|t| t.trail).is_some() {
                return None;
            }
            Some((noun, tense, question))
        })
        .collect()
}

fn copula(noun: &str, suffix_tense: Tense, question: bool, negative: bool, attested: bool) -> MorphemeResult {
    MorphemeResult::PredicateWithEnding(Predicate {
        stem: noun.to_string(),
        ending: String::new(),
        pos: Pos::Copula,
        tense: suffix_tense,
        negative,
        question,
        irregular: None,
        attested,
        adnominal: false,
    })
}

/// 관형형 어미를 떼고 되살린 어간 후보 (어간, 어미, 시제)
///
/// 는 → 현재 (먹는, 맛있는), 은/ㄴ → 과거 또는 형용사 (작은, 큰, 읽은).
/// ㄴ 앞에서 줄어든 어간도 되살림: 긴 ← 길, 파란 ← 파랗, 추운 ← 춥
fn adnominal_candidates(word: &str) -> Vec<(String, &'static str, Tense)> {
    let open_syllable = |c: &char| decompose(*c).is_some_and(|t| t.trail.is_none());
    let mut out = Vec::new();
    if let Some(stem) = word.strip_suffix('는').filter(|s| !s.is_empty()) {
        out.push((stem.to_string(), "는", Tense::Present));
        // 노는 ← 놀, 만드는 ← 만들
        if let Some(last) = stem.chars().last().filter(open_syllable) {
            let head = &stem[..stem.len() - last.len_utf8()];
            out.push((format!("{}{}", head, change_batchim(last, Some('ㄹ'))), "는", Tense::Present));
        }
    }
    if let Some(stem) = word.strip_suffix('은').filter(|s| !s.is_empty()) {
        out.push((stem.to_string(), "은", Tense::Past));
    }

    let Some(last) = word.chars().last() else {
        return out;
    };
    if decompose(last).and_then(|t| t.trail) != Some('ㄴ') {
        return out;
    }
    let head = &word[..word.len() - last.len_utf8()];
    let open = remove_batchim(last);
    out.push((format!("{}{}", head, open), "ㄴ", Tense::Past));
    out.push((format!("{}{}", head, change_batchim(last, Some('ㄹ'))), "ㄴ", Tense::Past));
    out.push((format!("{}{}", head, change_batchim(last, Some('ㅎ'))), "ㄴ", Tense::Past));
    if open == '우' {
        if let Some(prev) = head.chars().last().filter(open_syllable) {
            let before = &head[..head.len() - prev.len_utf8()];
            out.push((format!("{}{}", before, change_batchim(prev, Some('ㅂ'))), "ㄴ", Tense::Past));
        }
    }
    out
}

/// 관형사/관형형 용언 분석. 사전에 있는 용언 어간만 받아들임
fn analyze_adnominal(word: &str, store: &DictionaryStore) -> Option<Predicate> {
    let adnominal = |stem: &str, ending: &str, tense: Tense| {
        let pos = predicate_pos(stem, store);
        Predicate {
            stem: stem.to_string(),
            ending: ending.to_string(),
            tense: if pos == Pos::Adjective { Tense::Present } else { tense },
            pos,
            negative: false,
            question: false,
            irregular: store
                .lookup_irregular_ko(stem)
                .filter(|entry| entry.base == stem)
                .map(|entry| entry.kind),
            attested: true,
            adnominal: true,
        }
    };

    if is_prenoun(word) {
        return Some(Predicate {
            pos: Pos::Adjective,
            ..adnominal(word, "", Tense::Present)
        });
    }
    // 한 개, 두 사람의 관형형 수사
    if is_attributive_numeral(word) {
        return None;
    }
    adnominal_candidates(word).into_iter().find_map(|(stem, ending, tense)| {
        store
            .stem_entry(&stem)
            .is_some_and(|entry| entry.kind != StemType::Noun)
            .then(|| adnominal(&stem, ending, tense))
    })
}

fn bare(stem: &str, role: Role) -> MorphemeResult {
    MorphemeResult::NounWithParticle(Nominal {
        stem: stem.to_string(),
        particle: String::new(),
        function: ParticleFunction::Bare,
        role,
    })
}

/// 조사 없는 체언/부사
fn analyze_bare(word: &str, store: &DictionaryStore) -> Option<MorphemeResult> {
    if let Some(&(_, pronoun, particle, function)) =
        CONTRACTED_PRONOUNS.iter().find(|(form, ..)| *form == word)
    {
        return Some(MorphemeResult::NounWithParticle(Nominal {
            stem: pronoun.to_string(),
            particle: particle.to_string(),
            function,
            role: function.role(),
        }));
    }
    if is_pronoun(word) {
        return Some(bare(word, Role::Subject));
    }
    if BARE_ADVERBS.contains(&word) || is_time_noun(word) {
        return Some(bare(word, Role::Adverbial));
    }
    if store.is_known_noun(word) || parse_quantity(word).is_some() {
        return Some(bare(word, Role::Modifier));
    }
    None
}

/// 어절 끝에 붙은 문장 부호 ("사과," → ",")
pub fn trailing_punctuation(word: &str) -> &str {
    let core = word.trim_end_matches(|c: char| c.is_ascii_punctuation() || c == '…');
    &word[core.len()..]
}

/// 어절 하나 분석
///
/// 조사 없는 체언 → 체언+조사 → 서술격 조사 → 관형형 → 용언 어미 → 미분석 순서로 시도하며,
/// 사전에 없는 체언/어간은 사전에 있는 해석이 모두 실패한 뒤에만 받아들입니다.
pub fn analyze_morpheme(word: &str, store: &DictionaryStore) -> MorphemeResult {
    let punctuation = trailing_punctuation(word);
    let core = &word[..word.len() - punctuation.len()];
    let asked = punctuation.contains('?');
    let unanalyzed = || MorphemeResult::Unanalyzed {
        text: word.to_string(),
    };
    if core.is_empty() {
        return unanalyzed();
    }
    if !core.chars().any(is_hangul) {
        // 3, 3.5 같은 숫자는 뒤 체언의 수량
        return match parse_quantity(core) {
            Some(_) => bare(core, Role::Modifier),
            None => unanalyzed(),
        };
    }

    if let Some(result) = analyze_bare(core, store) {
        return result;
    }

    if let Some((stem, particle, function)) = split_particle(core, store) {
        // 오늘은, 내일도: 시간 부사에 붙은 보조사는 주어가 아님
        let topical = matches!(
            function,
            ParticleFunction::Topic | ParticleFunction::Additive | ParticleFunction::Only
        );
        let role = if is_bare_adverb(stem) || (is_time_noun(stem) && topical) {
            Role::Adverbial
        } else {
            function.role()
        };
        return MorphemeResult::NounWithParticle(Nominal {
            stem: stem.to_string(),
            particle: particle.to_string(),
            function,
            role,
        });
    }

    if let Some(&(_, tense, question)) = NEGATIVE_COPULA_TABLE.iter().find(|(form, ..)| *form == core) {
        return copula(NEGATIVE_COPULA, tense, question || asked, true, true);
    }

    let copulas = split_copula(core);
    if let Some(&(noun, tense, question)) = copulas.iter().find(|(noun, ..)| is_nominal_stem(noun, store)) {
        return copula(noun, tense, question || asked, false, true);
    }

    if let Some(predicate) = analyze_adnominal(core, store) {
        return MorphemeResult::PredicateWithEnding(predicate);
    }

    if let Some(mut predicate) = analyze_predicate(core, store) {
        predicate.question |= asked;
        return MorphemeResult::PredicateWithEnding(predicate);
    }

    // 사전에 없는 체언 + 뜻이 분명한 조사
    if let Some((stem, particle, function)) = particles().iter().find_map(|&(particle, function)| {
        let stem = core.strip_suffix(particle)?;
        (UNAMBIGUOUS_PARTICLES.contains(&particle) && !stem.is_empty()).then_some((stem, particle, function))
    }) {
        return MorphemeResult::NounWithParticle(Nominal {
            stem: stem.to_string(),
            particle: particle.to_string(),
            function,
            role: function.role(),
        });
    }

    if let Some(&(noun, tense, question)) = copulas.first() {
        return copula(noun, tense, question || asked, false, false);
    }

    unanalyzed()
}

/// 토큰마다 분석. 순서를 바꾸거나 토큰을 버리지 않음
pub fn analyze_tokens(tokens: &[Token], store: &DictionaryStore) -> Vec<AnalyzedToken> {
    tokens
        .iter()
        .map(|token| AnalyzedToken {
            token: token.clone(),
            morpheme: analyze_morpheme(&token.text, store),
        })
        .collect()
}

fn ends_with_punctuation(word: &str) -> bool {
    word.chars().last().is_some_and(|c| c.is_ascii_punctuation())
}

/// 떨어져 쓴 어절 붙이기
///
/// - 서술격 조사: "학생 입니다" → "학생입니다"
/// - 부정 보조용언: "먹지 않아요" → "먹지않아요"
/// - 미래: "갈 거예요" → "갈거예요"
/// - 수량: "두 개를" → "두개를"
fn should_join(prev: &str, next: &str) -> bool {
    if ends_with_punctuation(prev) {
        return false;
    }
    let next_core = next.trim_end_matches(|c: char| c.is_ascii_punctuation());

    let copula_token = COPULA_TABLE
        .iter()
        .any(|(suffix, ..)| suffix.starts_with(['이', '입', '였']) && *suffix == next_core)
        || next_core == "예요";
    if copula_token {
        return true;
    }

    if prev.ends_with('지') && (next.starts_with('않') || next.starts_with('못')) {
        return true;
    }

    let future_head = prev.ends_with('을')
        || prev.chars().last().and_then(decompose).and_then(|t| t.trail) == Some('ㄹ');
    if future_head && (next.starts_with("거예요") || next.starts_with("거야") || next.starts_with("겁니다")) {
        return true;
    }

    is_attributive_numeral(prev)
        && COUNTERS.iter().any(|counter| next.starts_with(counter))
}

/// 분석 전 토큰 전처리 (띄어 쓴 어미/수량 붙이기). 합친 토큰의 구간은 원래 토큰들을 모두 덮음
pub fn preprocess_tokens(tokens: &[Token]) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match out.last_mut() {
            Some(prev) if should_join(&prev.text, &token.text) => {
                prev.text.push_str(&token.text);
                prev.end = token.end;
            }
            _ => out.push(token.clone()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> DictionaryStore {
        DictionaryStore::builtin()
    }

    fn predicate(word: &str) -> Predicate {
        match analyze_morpheme(word, &store()) {
            MorphemeResult::PredicateWithEnding(p) => p,
            other => panic!("{} -> {:?}", word, other),
        }
    }

    fn nominal(word: &str) -> Nominal {
        match analyze_morpheme(word, &store()) {
            MorphemeResult::NounWithParticle(n) => n,
            other => panic!("{} -> {:?}", word, other),
        }
    }

    #[test]
    fn test_tables_sorted_longest_first() {
        let lengths: Vec<usize> = endings().iter().map(|e| e.surface.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        let lengths: Vec<usize> = particles().iter().map(|(p, _)| p.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_noun_with_particle() {
        let n = nominal("사과를");
        assert_eq!((n.stem.as_str(), n.particle.as_str()), ("사과", "를"));
        assert_eq!(n.role, Role::Object);

        let n = nominal("나는");
        assert_eq!((n.stem.as_str(), n.role), ("나", Role::Subject));

        // 두 음절 조사가 한 음절보다 먼저
        let n = nominal("학교에서");
        assert_eq!((n.stem.as_str(), n.function), ("학교", ParticleFunction::Place));

        let n = nominal("집으로");
        assert_eq!((n.stem.as_str(), n.role), ("집", Role::Adverbial));

        let n = nominal("오늘은");
        assert_eq!((n.stem.as_str(), n.role), ("오늘", Role::Adverbial));
    }

    #[test]
    fn test_bare_nominals() {
        assert_eq!(nominal("어제").role, Role::Adverbial);
        assert_eq!(nominal("그녀").role, Role::Subject);
        assert_eq!(nominal("사과").role, Role::Modifier);

        let n = nominal("내가");
        assert_eq!((n.stem.as_str(), n.particle.as_str(), n.role), ("나", "가", Role::Subject));
        assert_eq!(nominal("내").function, ParticleFunction::Possessive);
    }

    #[test]
    fn test_predicate_tense_longest_first() {
        let p = predicate("먹었어요");
        assert_eq!((p.stem.as_str(), p.tense), ("먹", Tense::Past));
        let p = predicate("먹어요");
        assert_eq!((p.stem.as_str(), p.tense), ("먹", Tense::Present));
        assert_eq!(predicate("먹습니다").stem, "먹");
        assert_eq!(predicate("먹는다").stem, "먹");
    }

    #[test]
    fn test_predicate_contraction() {
        let p = predicate("갔어요");
        assert_eq!((p.stem.as_str(), p.tense), ("가", Tense::Past));
        assert_eq!(predicate("가요").stem, "가");
        assert_eq!(predicate("봐요").stem, "보");
        assert_eq!(predicate("마셔요").stem, "마시");
        assert_eq!(predicate("와요").stem, "오");
        assert_eq!(predicate("좋아해요").stem, "좋아하");
        assert_eq!(predicate("갑니다").stem, "가");
        assert_eq!(predicate("압니다").stem, "알");

        let p = predicate("행복해요");
        assert_eq!((p.stem.as_str(), p.pos), ("행복하", Pos::Adjective));
    }

    #[test]
    fn test_predicate_irregular() {
        let p = predicate("추워요");
        assert_eq!((p.stem.as_str(), p.irregular), ("춥", Some(IrregularType::Bieup)));
        assert_eq!(p.pos, Pos::Adjective);

        let p = predicate("들었어요");
        assert_eq!((p.stem.as_str(), p.tense), ("듣", Tense::Past));

        assert_eq!(predicate("도와요").stem, "돕");
        assert_eq!(predicate("써요").stem, "쓰");
        assert_eq!(predicate("바빠요").stem, "바쁘");
        assert_eq!(predicate("지어요").stem, "짓");
        assert_eq!(predicate("몰라요").stem, "모르");
    }

    #[test]
    fn test_predicate_flags() {
        let p = predicate("먹지않아요");
        assert!(p.negative);
        assert_eq!(p.stem, "먹");

        let p = predicate("좋아해요?");
        assert!(p.question);
        assert!(predicate("먹었니").question);

        let p = predicate("갈거예요");
        assert_eq!((p.stem.as_str(), p.tense), ("가", Tense::Future));
        assert_eq!(predicate("먹겠어요").tense, Tense::Future);
    }

    #[test]
    fn test_copula() {
        let p = predicate("학생이에요");
        assert_eq!((p.stem.as_str(), p.pos), ("학생", Pos::Copula));
        assert_eq!(predicate("의사예요").stem, "의사");
        assert_eq!(predicate("학생입니다").stem, "학생");
        let p = predicate("학생이었어요");
        assert_eq!(p.tense, Tense::Past);

        let p = predicate("아니에요");
        assert_eq!((p.stem.as_str(), p.negative), (NEGATIVE_COPULA, true));

        // 사전에 없는 체언도 서술격 조사로 인정
        let p = predicate("철수예요");
        assert_eq!((p.stem.as_str(), p.attested), ("철수", false));
    }

    #[test]
    fn test_unattested_fallbacks() {
        let p = predicate("뛰어요");
        assert_eq!((p.stem.as_str(), p.attested), ("뛰", false));

        let n = nominal("철수한테");
        assert_eq!((n.stem.as_str(), n.role), ("철수", Role::Adverbial));
        let n = nominal("컴퓨토를");
        assert_eq!((n.stem.as_str(), n.role), ("컴퓨토", Role::Object));

        // 은/는/을은 관형형 어미와 겹치므로 모르는 체언에는 붙이지 않음
        assert_eq!(
            analyze_morpheme("철수는", &store()),
            MorphemeResult::Unanalyzed { text: "철수는".into() }
        );
        assert!(matches!(
            analyze_morpheme("뷁은", &store()),
            MorphemeResult::Unanalyzed { .. }
        ));

        assert_eq!(
            analyze_morpheme("hello", &store()),
            MorphemeResult::Unanalyzed { text: "hello".into() }
        );
        assert_eq!(
            analyze_morpheme("?!", &store()),
            MorphemeResult::Unanalyzed { text: "?!".into() }
        );
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(
            parse_quantity("2개"),
            Some(Quantity { count: 2, fraction: None, native: false, counter: Some("개".into()) })
        );
        assert_eq!(parse_quantity("하나").map(|q| (q.count, q.native)), Some((1, true)));
        assert_eq!(parse_quantity("두명").map(|q| q.count), Some(2));
        assert_eq!(parse_quantity("0개").map(|q| q.count), Some(0));
        assert_eq!(parse_quantity("두"), None);
        assert_eq!(parse_quantity("2x"), None);

        let q = parse_quantity("3.5").unwrap();
        assert_eq!((q.count, q.fraction.as_deref()), (3, Some("5")));
        assert!(q.is_plural());
        assert!(!parse_quantity("1개").unwrap().is_plural());
        assert_eq!(parse_quantity("3."), None);
        assert_eq!(parse_quantity("3.x"), None);

        // 한글이 없는 숫자 어절도 수량
        let n = nominal("3.5");
        assert_eq!((n.stem.as_str(), n.role), ("3.5", Role::Modifier));

        let n = nominal("2개를");
        assert_eq!((n.stem.as_str(), n.role), ("2개", Role::Object));
    }

    #[test]
    fn test_adnominal_forms() {
        let p = predicate("작은");
        assert_eq!((p.stem.as_str(), p.pos, p.adnominal), ("작", Pos::Adjective, true));
        assert_eq!(predicate("큰").stem, "크");
        assert_eq!(predicate("예쁜").stem, "예쁘");
        assert_eq!(predicate("행복한").stem, "행복하");
        assert_eq!(predicate("맛있는").stem, "맛있");

        // 줄어든 어간 되살리기
        let p = predicate("추운");
        assert_eq!((p.stem.as_str(), p.irregular), ("춥", Some(IrregularType::Bieup)));
        assert_eq!(predicate("귀여운").stem, "귀엽");
        assert_eq!(predicate("파란").stem, "파랗");

        let p = predicate("먹는");
        assert_eq!((p.stem.as_str(), p.pos, p.tense), ("먹", Pos::Verb, Tense::Present));
        let p = predicate("읽은");
        assert_eq!((p.stem.as_str(), p.tense), ("읽", Tense::Past));

        let p = predicate("새");
        assert_eq!((p.stem.as_str(), p.pos, p.adnominal), ("새", Pos::Adjective, true));

        // 종결형은 관형형이 아님
        assert!(!predicate("작아요").adnominal);
        // 관형형 수사와 사전에 없는 어간은 건드리지 않음
        assert!(matches!(analyze_morpheme("한", &store()), MorphemeResult::Unanalyzed { .. }));
        assert!(matches!(analyze_morpheme("뷁는", &store()), MorphemeResult::Unanalyzed { .. }));
    }

    #[test]
    fn test_time_nouns_are_adverbial() {
        assert_eq!(nominal("아침").role, Role::Adverbial);
        assert_eq!(nominal("밤").role, Role::Adverbial);
        assert_eq!(nominal("아침은").role, Role::Adverbial);
        assert_eq!(nominal("주말에").role, Role::Adverbial);
        assert_eq!(nominal("아침을").role, Role::Object);
    }

    #[test]
    fn test_trailing_punctuation() {
        assert_eq!(trailing_punctuation("사과,"), ",");
        assert_eq!(trailing_punctuation("정말?!"), "?!");
        assert_eq!(trailing_punctuation("사과"), "");
        assert_eq!(nominal("사과,").stem, "사과");
    }

    #[test]
    fn test_split_helpers() {
        let store = store();
        assert_eq!(split_particle("사과를", &store).map(|(s, p, _)| (s, p)), Some(("사과", "를")));
        assert!(split_particle("뷁를", &store).is_none());
        assert!(split_predicate("먹어요", &store).is_some());
        assert!(split_predicate("뛰어요", &store).is_none());
    }

    #[test]
    fn test_analyze_tokens_preserves_order() {
        let store = store();
        let tokens = crate::text::tokenize_korean("나는 뷁 사과를 먹어요");
        let analyzed = analyze_tokens(&tokens, &store);
        assert_eq!(analyzed.len(), 4);
        assert_eq!(analyzed[1].morpheme, MorphemeResult::Unanalyzed { text: "뷁".into() });
        assert_eq!(analyzed[3].morpheme.role(), Role::Predicate);
    }

    #[test]
    fn test_preprocess_tokens() {
        let join = |text: &str| -> Vec<String> {
            preprocess_tokens(&crate::text::tokenize_korean(text))
                .into_iter()
                .map(|t| t.text)
                .collect()
        };
        assert_eq!(join("나는 학생 입니다"), vec!["나는", "학생입니다"]);
        assert_eq!(join("고기를 먹지 않아요"), vec!["고기를", "먹지않아요"]);
        assert_eq!(join("내일 갈 거예요"), vec!["내일", "갈거예요"]);
        assert_eq!(join("사과 두 개를 샀어요"), vec!["사과", "두개를", "샀어요"]);
        assert_eq!(join("사과 2 개"), vec!["사과", "2개"]);

        let tokens = preprocess_tokens(&crate::text::tokenize_korean("학생 입니다"));
        assert_eq!((tokens[0].start, tokens[0].end), (0, "학생 입니다".len()));
    }
}
