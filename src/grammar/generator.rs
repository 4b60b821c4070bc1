//! 영어 문장 생성
//!
//! 분석된 절을 영어 어순(시간 부사어, 주어, 서술어, 목적어, 기타 부사어)으로 다시 조립합니다.
//! 주어-동사 일치, 관사, 수량 복수형, 시제/부정/의문 변형을 여기서 처리합니다.

use super::english::{
    capitalize_first, comparative, indefinite_article, is_bare_place, is_uncountable,
    number_word, object_form, pluralize, possessive_form, present_participle, regular_past,
    takes_definite, third_person_singular,
};
use super::morpheme::{
    is_bare_adverb, is_pronoun, is_time_noun, parse_quantity, MorphemeResult, ParticleFunction, Pos,
    Predicate, Quantity, Role, Tense, DAY_ADVERBS, NEGATIVE_COPULA,
};
use super::parser::{Constituent, ParsedSentence};
use crate::core::jamo::is_hangul;
use crate::dictionary::{DictionaryStore, Direction, FuzzyOptions, StemType};
use crate::similarity::SimilarityCache;

/// 문장 앞에 두는 시간 부사
const FRONT_ADVERBS: [&str; 3] = ["yesterday", "today", "tomorrow"];

/// 본동사 앞에 두는 빈도 부사
const FREQUENCY_ADVERBS: [&str; 6] = ["always", "often", "sometimes", "usually", "never", "already"];

/// 형용사 앞에 두는 정도 부사
const DEGREE_ADVERBS: [&str; 4] = ["very", "really", "too", "so"];

/// 에 → to 로 옮기는 이동 동사
const MOVEMENT_VERBS: [&str; 9] = ["go", "come", "walk", "run", "return", "travel", "drive", "fly", "move"];

/// in the ~ 로 쓰는 때
const DAY_PARTS: [&str; 3] = ["morning", "afternoon", "evening"];

/// 관사 없이 명사 앞에 두는 관형사
const PRENOUN_ENGLISH: [(&str, &str); 3] = [("새", "new"), ("헌", "old"), ("옛", "old")];

/// 명사 없이 쓴 분류사의 영어 명사
#[rustfmt::skip]
const COUNTER_NOUNS: &[(&str, &str)] = &[
    ("명", "person"), ("시간", "hour"), ("분", "minute"), ("번", "time"), ("살", "year"),
];

/// 명사구가 놓이는 자리 (관사/격 결정)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Subject,
    Object,
    Complement,
    Adverbial,
    Fragment,
}

/// 주어의 인칭/수
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Agreement {
    First,
    ThirdSingular,
    Plural,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NounPhrase {
    text: String,
    agreement: Agreement,
}

impl NounPhrase {
    fn implicit_subject() -> Self {
        Self {
            text: "I".to_string(),
            agreement: Agreement::First,
        }
    }

    fn punctuated(mut self, punctuation: &str) -> Self {
        self.text.push_str(punctuation);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Front,
    Frequency,
    Degree,
    Trailing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Adverb {
    text: String,
    placement: Placement,
}

impl Adverb {
    fn punctuated(mut self, punctuation: &str) -> Self {
        self.text.push_str(punctuation);
        self
    }
}

/// 서술어 틀
enum Frame {
    /// be + 보어 (서술격 조사, 형용사, 존재의 있다)
    Be(String),
    /// 일반 동사 원형
    Verb(String),
    /// 번역할 수 없는 서술어 (원문 통과)
    Raw(String),
}

/// 명사구를 이루는 체언 하나 (또는 앞에서 꾸미는 관형형)
#[derive(Debug, Clone, Copy)]
struct NounPart<'p> {
    stem: &'p str,
    function: ParticleFunction,
    adnominal: Option<&'p Predicate>,
}

fn noun_parts(constituent: &Constituent) -> Vec<NounPart<'_>> {
    constituent
        .morphemes
        .iter()
        .filter_map(|m| match m {
            MorphemeResult::NounWithParticle(n) => Some(NounPart {
                stem: &n.stem,
                function: n.function,
                adnominal: None,
            }),
            MorphemeResult::PredicateWithEnding(p) if p.adnominal => Some(NounPart {
                stem: &p.stem,
                function: ParticleFunction::Bare,
                adnominal: Some(p),
            }),
            MorphemeResult::PredicateWithEnding(p)
                if p.pos == Pos::Copula && p.stem != NEGATIVE_COPULA =>
            {
                Some(NounPart {
                    stem: &p.stem,
                    function: ParticleFunction::Bare,
                    adnominal: None,
                })
            }
            _ => None,
        })
        .collect()
}

fn pronoun_agreement(english: &str) -> Agreement {
    match english.to_lowercase().as_str() {
        "i" => Agreement::First,
        "you" | "we" | "they" | "these" | "those" => Agreement::Plural,
        _ => Agreement::ThirdSingular,
    }
}

fn placement(adverb: &str) -> Placement {
    if FRONT_ADVERBS.contains(&adverb) {
        Placement::Front
    } else if FREQUENCY_ADVERBS.contains(&adverb) {
        Placement::Frequency
    } else if DEGREE_ADVERBS.contains(&adverb) {
        Placement::Degree
    } else {
        Placement::Trailing
    }
}

fn possessive_of(owner: &str) -> String {
    possessive_form(owner)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}'s", owner))
}

fn count_text(quantity: &Quantity) -> String {
    match (&quantity.fraction, quantity.native) {
        (Some(fraction), _) => format!("{}.{}", quantity.count, fraction),
        (None, true) => number_word(quantity.count),
        (None, false) => quantity.count.to_string(),
    }
}

/// 자리에 맞는 관사. 셀 수 있는지는 중심 명사로, a/an은 구의 첫 단어로 정함
///
/// 조각(서술어 없는 입력)의 명사구는 사전 뜻 그대로 둠
fn with_article(phrase: &str, head: &str, slot: Slot) -> String {
    let passthrough = head.chars().any(is_hangul);
    let proper = head.chars().next().is_some_and(char::is_uppercase);
    if slot == Slot::Fragment || passthrough || proper || is_uncountable(head) {
        return phrase.to_string();
    }
    if takes_definite(head) {
        return format!("the {}", phrase);
    }
    match slot {
        Slot::Object | Slot::Adverbial if is_bare_place(head) && phrase == head => phrase.to_string(),
        Slot::Subject | Slot::Adverbial => format!("the {}", phrase),
        _ => format!("{} {}", indefinite_article(phrase), phrase),
    }
}

fn be_form(agreement: Agreement, tense: Tense) -> &'static str {
    match (tense, agreement) {
        (Tense::Past, Agreement::Plural) => "were",
        (Tense::Past, _) => "was",
        (_, Agreement::First) => "am",
        (_, Agreement::ThirdSingular) => "is",
        (_, Agreement::Plural) => "are",
    }
}

fn do_form(agreement: Agreement, tense: Tense) -> &'static str {
    match (tense, agreement) {
        (Tense::Future, _) => "will",
        (Tense::Past, _) => "did",
        (_, Agreement::ThirdSingular) => "does",
        _ => "do",
    }
}

fn push_all(out: &mut Vec<String>, items: impl IntoIterator<Item = String>) {
    out.extend(items.into_iter().filter(|s| !s.is_empty()));
}

/// 영어 생성기
///
/// 사전을 빌려 쓰며, 유사도 캐시를 주면 사전에 없는 두 음절 이상 한글 명사를 퍼지 조회합니다.
pub struct Generator<'a> {
    store: &'a DictionaryStore,
    fuzzy: Option<(&'a SimilarityCache, FuzzyOptions)>,
}

impl<'a> Generator<'a> {
    pub fn new(store: &'a DictionaryStore) -> Self {
        Self { store, fuzzy: None }
    }

    pub fn with_fuzzy(mut self, cache: &'a SimilarityCache, options: FuzzyOptions) -> Self {
        self.fuzzy = Some((cache, options));
        self
    }

    /// 절 하나를 영어로. 서술어가 없으면 명사구 조각을 그대로 이어 붙임
    pub fn generate(&self, parsed: &ParsedSentence) -> String {
        let context = parsed
            .constituents
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        match (parsed.predicate.as_ref(), parsed.predicate_info()) {
            (Some(constituent), Some(predicate)) => {
                self.sentence(parsed, constituent, predicate, &context)
            }
            _ => self.fragment(parsed, &context),
        }
    }

    fn translate_noun(&self, stem: &str, context: &str) -> String {
        if let Some(english) = self.store.resolve_word(stem, Direction::KoEn, Some(context)) {
            return english;
        }
        if let Some(english) = self.store.lookup_stem(stem, StemType::Noun) {
            return english.to_string();
        }
        if let Some((cache, options)) = self.fuzzy {
            let fuzzy_candidate = stem.chars().count() >= 2 && stem.chars().all(is_hangul);
            if fuzzy_candidate {
                if let Some(english) =
                    self.store.lookup_word_fuzzy(stem, Direction::KoEn, cache, options)
                {
                    return english;
                }
            }
        }
        stem.to_string()
    }

    fn translate_predicate(&self, predicate: &Predicate) -> Option<String> {
        if predicate.pos == Pos::Copula {
            return None;
        }
        self.store
            .stem_entry(&predicate.stem)
            .filter(|entry| entry.kind != StemType::Noun)
            .map(|entry| entry.en.clone())
    }

    fn past_form(&self, verb: &str) -> String {
        let (first, rest) = verb.split_once(' ').unwrap_or((verb, ""));
        let past = self
            .store
            .lookup_irregular_en(first)
            .filter(|entry| entry.base == first)
            .map(|entry| entry.past.clone())
            .unwrap_or_else(|| regular_past(first));
        if rest.is_empty() {
            past
        } else {
            format!("{} {}", past, rest)
        }
    }

    /// 관형형 → 영어 형용사/분사 (큰 → big, 먹는 → eating, 읽은 → read)
    fn adnominal_english(&self, predicate: &Predicate) -> String {
        if let Some((_, english)) = PRENOUN_ENGLISH.iter().find(|(ko, _)| *ko == predicate.stem) {
            return english.to_string();
        }
        let Some(english) = self.translate_predicate(predicate) else {
            return predicate.stem.clone();
        };
        match (predicate.pos, predicate.tense) {
            (Pos::Verb, Tense::Present) => present_participle(&english),
            (Pos::Verb, _) => self.past_participle(&english),
            _ => english,
        }
    }

    fn past_participle(&self, verb: &str) -> String {
        let (first, rest) = verb.split_once(' ').unwrap_or((verb, ""));
        let participle = self
            .store
            .lookup_irregular_en(first)
            .filter(|entry| entry.base == first)
            .map(|entry| entry.pp.clone())
            .unwrap_or_else(|| regular_past(first));
        if rest.is_empty() {
            participle
        } else {
            format!("{} {}", participle, rest)
        }
    }

    fn noun_phrase(&self, parts: &[NounPart<'_>], slot: Slot, context: &str) -> Option<NounPhrase> {
        self.owned_noun_phrase(parts, slot, None, context)
    }

    /// 명사구: 소유격 + 수량 + 형용사 + (복합) 명사, 자리에 맞는 관사/격
    fn owned_noun_phrase(
        &self,
        parts: &[NounPart<'_>],
        slot: Slot,
        mut possessor: Option<String>,
        context: &str,
    ) -> Option<NounPhrase> {
        let mut quantity: Option<Quantity> = None;
        let mut adjectives: Vec<String> = Vec::new();
        let mut nouns: Vec<String> = Vec::new();
        let mut pronoun = false;

        for part in parts {
            if let Some(predicate) = part.adnominal {
                adjectives.push(self.adnominal_english(predicate));
                continue;
            }
            if let Some(q) = parse_quantity(part.stem) {
                quantity = Some(q);
                continue;
            }
            let english = self.translate_noun(part.stem, context);
            if part.function == ParticleFunction::Possessive {
                possessor = Some(possessive_of(&english));
                continue;
            }
            pronoun = is_pronoun(part.stem);
            nouns.push(english);
        }

        if nouns.is_empty() {
            let counter_noun = quantity
                .as_ref()
                .and_then(|q| q.counter.as_deref())
                .and_then(|counter| COUNTER_NOUNS.iter().find(|(ko, _)| *ko == counter))
                .map(|(_, en)| en.to_string());
            match (counter_noun, &quantity) {
                (Some(noun), _) => nouns.push(noun),
                (None, Some(q)) => {
                    return Some(NounPhrase {
                        text: count_text(q),
                        agreement: Agreement::Plural,
                    });
                }
                (None, None) if !adjectives.is_empty() => {
                    return Some(NounPhrase {
                        text: adjectives.join(" "),
                        agreement: Agreement::ThirdSingular,
                    });
                }
                (None, None) => return None,
            }
        }

        let noun = nouns.join(" ");
        if pronoun
            && nouns.len() == 1
            && adjectives.is_empty()
            && possessor.is_none()
            && quantity.is_none()
        {
            let agreement = pronoun_agreement(&noun);
            let text = match slot {
                Slot::Object | Slot::Adverbial => {
                    object_form(&noun).map(str::to_string).unwrap_or(noun)
                }
                _ => noun,
            };
            return Some(NounPhrase { text, agreement });
        }

        let plural = quantity.as_ref().is_some_and(Quantity::is_plural);
        let head = if plural { pluralize(&noun) } else { noun };
        let agreement = if plural {
            Agreement::Plural
        } else {
            Agreement::ThirdSingular
        };
        let phrase = adjectives
            .into_iter()
            .chain([head.clone()])
            .collect::<Vec<_>>()
            .join(" ");

        let text = match (possessor, &quantity) {
            (Some(owner), Some(q)) if plural => format!("{} {} {}", owner, count_text(q), phrase),
            (Some(owner), _) => format!("{} {}", owner, phrase),
            (None, Some(q)) if q.native && q.count == 1 => {
                format!("{} {}", indefinite_article(&phrase), phrase)
            }
            (None, Some(q)) => format!("{} {}", count_text(q), phrase),
            (None, None) => with_article(&phrase, &head, slot),
        };
        Some(NounPhrase { text, agreement })
    }

    /// 때 명사 부사어: 오늘 아침 → this morning, 어제 밤 → last night, 주말은 → on the weekend
    ///
    /// 조사 에가 붙은 것 하나만 있으면 일반 부사어 규칙을 따름
    fn time_phrase(&self, constituent: &Constituent) -> Option<String> {
        let nominal = constituent.head_nominal().filter(|n| is_time_noun(&n.stem))?;
        let day = constituent
            .morphemes
            .first()
            .filter(|_| constituent.morphemes.len() > 1)
            .and_then(MorphemeResult::as_nominal)
            .map(|d| d.stem.as_str())
            .filter(|stem| DAY_ADVERBS.contains(stem));
        let standalone = matches!(
            nominal.function,
            ParticleFunction::Bare
                | ParticleFunction::Topic
                | ParticleFunction::Additive
                | ParticleFunction::Only
        );
        if day.is_none() && !standalone {
            return None;
        }

        // 밤 같은 다의어는 부사어 안에서만 뜻을 고름 (오늘 밤 → night)
        let noun = self.translate_noun(&nominal.stem, &constituent.text);
        let text = match day {
            Some("오늘") if noun == "night" => "tonight".to_string(),
            Some("오늘") => format!("this {}", noun),
            Some("어제") if noun == "night" => "last night".to_string(),
            Some(day) => format!("{} {}", self.translate_noun(day, &constituent.text), noun),
            None if noun == "night" => "at night".to_string(),
            None if noun == "weekend" => "on the weekend".to_string(),
            None => format!("in the {}", noun),
        };
        Some(text)
    }

    /// 부사어 성분 → 부사 또는 전치사구
    fn adverb(&self, constituent: &Constituent, verb: Option<&str>, context: &str) -> Option<Adverb> {
        if let Some(text) = self.time_phrase(constituent) {
            return Some(Adverb {
                text,
                placement: Placement::Front,
            });
        }
        let nominal = constituent.head_nominal()?;
        if nominal.function == ParticleFunction::Bare || is_bare_adverb(&nominal.stem) {
            let text = self.translate_noun(&nominal.stem, context);
            let placement = placement(&text);
            return Some(Adverb { text, placement });
        }

        let movement = verb
            .and_then(|v| v.split(' ').next())
            .is_some_and(|v| MOVEMENT_VERBS.contains(&v));
        let slot = match nominal.function {
            ParticleFunction::Locative
            | ParticleFunction::Place
            | ParticleFunction::Direction
            | ParticleFunction::Source
            | ParticleFunction::Limit => Slot::Adverbial,
            _ => Slot::Object,
        };
        let noun = self.noun_phrase(&noun_parts(constituent), slot, context)?.text;

        use ParticleFunction as F;
        let text = match nominal.function {
            F::Locative if movement && noun == "home" => noun,
            F::Locative if movement => format!("to {}", noun),
            F::Locative if noun == "the night" => "at night".to_string(),
            F::Locative if DAY_PARTS.iter().any(|p| noun.ends_with(p)) => format!("in {}", noun),
            F::Locative if noun.ends_with("weekend") => format!("on {}", noun),
            F::Locative => format!("at {}", noun),
            F::Place if movement => format!("from {}", noun),
            F::Place => format!("at {}", noun),
            F::Direction | F::Dative => format!("to {}", noun),
            F::Comitative => format!("with {}", noun),
            F::Source => format!("from {}", noun),
            F::Limit => format!("until {}", noun),
            F::Comparative => format!("than {}", noun),
            F::Similar => format!("like {}", noun),
            _ => noun,
        };
        Some(Adverb {
            text,
            placement: Placement::Trailing,
        })
    }

    /// 자리 없는 성분: 미분석은 원문, 부사는 부사, 체언은 명사구. 뒤 문장 부호는 그대로
    fn free_phrase(&self, constituent: &Constituent, context: &str) -> Option<String> {
        let text = match constituent.head()? {
            MorphemeResult::Unanalyzed { text } => text.clone(),
            MorphemeResult::PredicateWithEnding(p) if p.adnominal => self
                .noun_phrase(&noun_parts(constituent), Slot::Fragment, context)
                .map(|np| np.text)
                .unwrap_or_else(|| constituent.text.clone()),
            MorphemeResult::PredicateWithEnding(p) => self
                .translate_predicate(p)
                .unwrap_or_else(|| constituent.text.clone()),
            MorphemeResult::NounWithParticle(n) if n.role == Role::Adverbial => {
                self.adverb(constituent, None, context)?.text
            }
            MorphemeResult::NounWithParticle(_) => {
                self.noun_phrase(&noun_parts(constituent), Slot::Fragment, context)?.text
            }
        };
        Some(format!("{}{}", text, constituent.punctuation))
    }

    /// 서술어 없는 조각. 때 명사 하나는 사전 뜻 그대로 (아침 → morning)
    fn fragment(&self, parsed: &ParsedSentence, context: &str) -> String {
        parsed
            .constituents
            .iter()
            .filter_map(|c| match c.head_nominal() {
                Some(n)
                    if c.morphemes.len() == 1
                        && n.function == ParticleFunction::Bare
                        && is_time_noun(&n.stem) =>
                {
                    Some(format!("{}{}", self.translate_noun(&n.stem, context), c.punctuation))
                }
                _ => self.free_phrase(c, context),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn sentence(
        &self,
        parsed: &ParsedSentence,
        predicate_constituent: &Constituent,
        predicate: &Predicate,
        context: &str,
    ) -> String {
        let verb = self.translate_predicate(predicate);
        let adverbs: Vec<Adverb> = parsed
            .adverbials
            .iter()
            .filter_map(|c| {
                self.adverb(c, verb.as_deref(), context)
                    .map(|a| a.punctuated(&c.punctuation))
            })
            .collect();
        let comparison = parsed
            .adverbials
            .iter()
            .filter_map(Constituent::head_nominal)
            .any(|n| n.function == ParticleFunction::Comparative);

        let mut subject_constituent = parsed.subject.as_ref();
        let mut object = parsed.object.as_ref();
        let mut subject: Option<NounPhrase> = None;

        let frame = match (predicate.pos, verb) {
            (Pos::Copula, _) if predicate.stem == NEGATIVE_COPULA => {
                // 학생이 아니에요: 보어는 목적어 자리, 없으면 이/가 주어
                let complement = match object.take() {
                    Some(c) => Some(c),
                    None => {
                        let marked = subject_constituent.filter(|c| {
                            c.head_nominal()
                                .is_some_and(|n| n.function == ParticleFunction::Subject)
                        });
                        if marked.is_some() {
                            subject_constituent = None;
                        }
                        marked
                    }
                };
                let text = complement
                    .and_then(|c| self.noun_phrase(&noun_parts(c), Slot::Complement, context))
                    .map(|np| np.text)
                    .unwrap_or_default();
                Frame::Be(text)
            }
            (Pos::Copula, _) => {
                let text = self
                    .noun_phrase(&noun_parts(predicate_constituent), Slot::Complement, context)
                    .map(|np| np.text)
                    .unwrap_or_else(|| predicate.stem.clone());
                Frame::Be(text)
            }
            (Pos::Adjective, Some(adjective)) => {
                // 나는 배가 아파요 → my stomach is sick
                let double_subject = object.filter(|c| {
                    c.head_nominal().is_some_and(|n| {
                        matches!(n.function, ParticleFunction::Subject | ParticleFunction::Topic)
                    })
                });
                if let Some(part) = double_subject {
                    let owner = subject_constituent
                        .and_then(|c| self.noun_phrase(&noun_parts(c), Slot::Subject, context))
                        .map(|np| possessive_of(&np.text))
                        .unwrap_or_else(|| "my".to_string());
                    subject = self.owned_noun_phrase(&noun_parts(part), Slot::Subject, Some(owner), context);
                    subject_constituent = None;
                    object = None;
                }
                let adjective = if comparison {
                    comparative(&adjective)
                } else {
                    adjective
                };
                let degree = adverbs
                    .iter()
                    .filter(|a| a.placement == Placement::Degree)
                    .map(|a| a.text.as_str());
                Frame::Be(degree.chain([adjective.as_str()]).collect::<Vec<_>>().join(" "))
            }
            // 있다: 목적어가 없으면 존재 (집에 있어요 → is at home)
            (Pos::Verb, Some(_)) if predicate.stem == "있" && object.is_none() => Frame::Be(String::new()),
            (Pos::Verb, Some(verb)) => Frame::Verb(verb),
            _ => Frame::Raw(predicate_constituent.text.clone()),
        };

        let subject = subject
            .or_else(|| {
                subject_constituent.and_then(|c| {
                    self.noun_phrase(&noun_parts(c), Slot::Subject, context)
                        .map(|np| np.punctuated(&c.punctuation))
                })
            })
            .unwrap_or_else(NounPhrase::implicit_subject);

        let pick = |wanted: Placement| -> Vec<String> {
            adverbs
                .iter()
                .filter(|a| a.placement == wanted)
                .map(|a| a.text.clone())
                .collect()
        };
        let front = pick(Placement::Front);
        let frequency = pick(Placement::Frequency);
        let degree = pick(Placement::Degree);
        let trailing = pick(Placement::Trailing);

        let object_text = object.and_then(|c| {
            self.noun_phrase(&noun_parts(c), Slot::Object, context)
                .map(|np| np.punctuated(&c.punctuation).text)
        });
        let modifiers: Vec<String> = parsed
            .modifiers
            .iter()
            .filter_map(|c| self.free_phrase(c, context))
            .collect();

        let tense = parsed.tense;
        let negation = parsed.negative.then(|| "not".to_string());
        let mut words: Vec<String> = Vec::new();
        push_all(&mut words, front);

        match frame {
            Frame::Be(complement) => {
                let be = if tense == Tense::Future {
                    "be"
                } else {
                    be_form(subject.agreement, tense)
                };
                if parsed.question {
                    let head = if tense == Tense::Future { "will" } else { be };
                    push_all(&mut words, [capitalize_first(head), subject.text]);
                    push_all(&mut words, negation);
                    if tense == Tense::Future {
                        words.push(be.to_string());
                    }
                } else {
                    words.push(subject.text);
                    if tense == Tense::Future {
                        words.push("will".to_string());
                        push_all(&mut words, negation);
                        words.push(be.to_string());
                    } else {
                        words.push(be.to_string());
                        push_all(&mut words, negation);
                    }
                }
                push_all(&mut words, frequency);
                push_all(&mut words, [complement]);
            }
            Frame::Verb(verb) => {
                let auxiliary = do_form(subject.agreement, tense);
                let pre_verb = frequency.into_iter().chain(degree);
                if parsed.question {
                    push_all(&mut words, [capitalize_first(auxiliary), subject.text]);
                    push_all(&mut words, negation);
                    push_all(&mut words, pre_verb);
                    words.push(verb);
                } else if parsed.negative || tense == Tense::Future {
                    push_all(&mut words, [subject.text, auxiliary.to_string()]);
                    push_all(&mut words, negation);
                    push_all(&mut words, pre_verb);
                    words.push(verb);
                } else {
                    words.push(subject.text);
                    push_all(&mut words, pre_verb);
                    let main = match (tense, subject.agreement) {
                        (Tense::Past, _) => self.past_form(&verb),
                        (_, Agreement::ThirdSingular) => third_person_singular(&verb),
                        _ => verb,
                    };
                    words.push(main);
                }
            }
            Frame::Raw(text) => {
                push_all(&mut words, [subject.text, text]);
            }
        }

        push_all(&mut words, object_text);
        push_all(&mut words, trailing);
        push_all(&mut words, modifiers);

        let mut sentence = capitalize_first(&words.join(" "));
        if parsed.question && !sentence.ends_with('?') {
            sentence.push('?');
        }
        sentence
    }
}

/// 분석된 절을 영어로 (퍼지 조회 없이)
pub fn generate_english(parsed: &ParsedSentence, store: &DictionaryStore) -> String {
    Generator::new(store).generate(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parser::parse_sentence;

    fn english(text: &str) -> String {
        let store = DictionaryStore::builtin();
        generate_english(&parse_sentence(text, &store), &store)
    }

    #[test]
    fn test_basic_patterns() {
        assert_eq!(english("나는 사과를 먹어요"), "I eat an apple");
        assert_eq!(english("나는 학생이에요"), "I am a student");
        assert_eq!(english("그녀는 행복해요"), "She is happy");
        assert_eq!(english("나는 커피를 마셔요"), "I drink coffee");
    }

    #[test]
    fn test_agreement_and_tense() {
        assert_eq!(english("그는 학교에 갔어요"), "He went to school");
        assert_eq!(english("그는 집에 가요"), "He goes home");
        assert_eq!(english("어제 나는 책을 읽었어요"), "Yesterday I read a book");
        assert_eq!(english("그녀는 음악을 좋아해요"), "She likes music");
        assert_eq!(english("나는 학생이었어요"), "I was a student");
        assert_eq!(english("그는 공부했어요"), "He studied");
    }

    #[test]
    fn test_definite_subject() {
        assert_eq!(english("날씨가 추워요"), "The weather is cold");
    }

    #[test]
    fn test_negation_question_future() {
        assert_eq!(english("나는 고기를 안 먹어요"), "I do not eat meat");
        assert_eq!(english("그는 고기를 먹지 않아요"), "He does not eat meat");
        assert_eq!(english("너는 커피를 좋아해요?"), "Do you like coffee?");
        assert_eq!(english("너는 학생이에요?"), "Are you a student?");
        assert_eq!(english("나는 내일 학교에 갈 거예요"), "Tomorrow I will go to school");
        assert_eq!(english("나는 학생이 아니에요"), "I am not a student");
    }

    #[test]
    fn test_implicit_subject() {
        assert_eq!(english("사과를 먹었어요"), "I ate an apple");
    }

    #[test]
    fn test_noun_fragments() {
        assert_eq!(english("사과 1개"), "1 apple");
        assert_eq!(english("사과 2개"), "2 apples");
        assert_eq!(english("사과 0개"), "0 apples");
        assert_eq!(english("사과 하나"), "an apple");
        assert_eq!(english("책 하나"), "a book");
        assert_eq!(english("사과 두 개"), "two apples");
        // 수량이 없는 명사 하나는 사전 뜻 그대로
        assert_eq!(english("사과"), "apple");
        assert_eq!(english("아침"), "morning");
        // 소수는 복수, 관사 없음
        assert_eq!(english("3.5 사과"), "3.5 apples");
        assert_eq!(english("사과 3개"), "3 apples");
    }

    #[test]
    fn test_adnominal_modifiers() {
        assert_eq!(english("큰 개가 물을 마셔요"), "The big dog drinks water");
        assert_eq!(english("작은 고양이가 우유를 마셔요"), "The small cat drinks milk");
        assert_eq!(english("새 친구가 책을 읽어요"), "The new friend reads a book");
        assert_eq!(english("나는 큰 사과를 먹어요"), "I eat a big apple");
        assert_eq!(english("나는 예쁜 고양이를 좋아해요"), "I like a pretty cat");
        assert_eq!(english("작은"), "small");
    }

    #[test]
    fn test_time_noun_adverbials() {
        assert_eq!(english("오늘 아침 나는 밥을 먹어요"), "This morning I eat rice");
        assert_eq!(english("어제 저녁 그는 책을 읽었어요"), "Yesterday evening he read a book");
        assert_eq!(english("아침 나는 커피를 마셔요"), "In the morning I drink coffee");
    }

    #[test]
    fn test_inner_punctuation() {
        assert_eq!(english("사과, 바나나"), "apple, 바나나");
        assert_eq!(english("나는, 사과를 먹어요"), "I, eat an apple");
    }

    #[test]
    fn test_quantity_object() {
        assert_eq!(english("나는 사과 두 개를 샀어요"), "I bought two apples");
    }

    #[test]
    fn test_polysemy_by_context() {
        assert_eq!(english("배를 타요"), "I ride a boat");
        assert_eq!(english("배를 먹어요"), "I eat a pear");
        assert_eq!(english("나는 배가 아파요"), "My stomach is sick");
    }

    #[test]
    fn test_prepositions() {
        assert_eq!(english("그는 집에 있어요"), "He is at home");
        assert_eq!(english("나는 친구와 영화를 봐요"), "I see a movie with a friend");
        assert_eq!(english("나는 그보다 커요"), "I am bigger than him");
        assert_eq!(english("나는 책이 있어요"), "I have a book");
    }

    #[test]
    fn test_possessive_and_pronoun_object() {
        assert_eq!(english("내 친구는 커피를 마셔요"), "My friend drinks coffee");
        assert_eq!(english("그녀는 나를 좋아해요"), "She likes me");
        assert_eq!(english("그는 내 친구예요"), "He is my friend");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        assert_eq!(english("나는 뷁을 먹어요"), "I eat 뷁을");
        assert_eq!(english("나는 뛰어요"), "I 뛰어요");
    }

    #[test]
    fn test_fuzzy_fallback() {
        let store = DictionaryStore::builtin();
        let cache = SimilarityCache::default();
        let parsed = parse_sentence("나는 컴퓨토를 사요", &store);
        let plain = Generator::new(&store).generate(&parsed);
        assert_eq!(plain, "I buy 컴퓨토");
        let fuzzy = Generator::new(&store)
            .with_fuzzy(&cache, FuzzyOptions::default())
            .generate(&parsed);
        assert_eq!(fuzzy, "I buy a computer");
    }
}
