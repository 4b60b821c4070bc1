//! 문장 구조 분석
//!
//! 형태소 분석 결과를 성분(주어/서술어/목적어/수식어/부사어)으로 묶고 문형을 정합니다.
//! 절 하나만 다루며, 여러 절은 번역기에서 미리 나눕니다.

use std::fmt;

use super::morpheme::{
    analyze_tokens, is_pronoun, is_time_noun, preprocess_tokens, trailing_punctuation, AnalyzedToken,
    MorphemeResult, Nominal, ParticleFunction, Pos, Predicate, Role, Tense, DAY_ADVERBS,
    NEGATION_ADVERBS,
};
use crate::dictionary::DictionaryStore;
use crate::text::{tokenize_korean, Token};

/// 영어 문형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pattern {
    #[default]
    SV,
    SVO,
    SVC,
}

impl Pattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::SV => "SV",
            Pattern::SVO => "SVO",
            Pattern::SVC => "SVC",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 같은 역할을 갖는 연속된 토큰 묶음
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    pub tokens: Vec<Token>,
    /// 토큰별 분석 결과 (`tokens`와 같은 순서)
    pub morphemes: Vec<MorphemeResult>,
    pub text: String,
    pub role: Role,
    /// 성분 뒤에 붙은 쉼표 등 (번역문에 그대로 옮김). 절 끝 부호는 비어 있음
    pub punctuation: String,
}

/// 분석된 어절 끝의 문장 부호. 미분석 어절은 원문을 그대로 내보내므로 비어 있음
fn token_punctuation(token: &Token, morpheme: &MorphemeResult) -> String {
    match morpheme {
        MorphemeResult::Unanalyzed { .. } => String::new(),
        _ => trailing_punctuation(&token.text).to_string(),
    }
}

impl Constituent {
    fn from_analyzed(items: Vec<AnalyzedToken>, role: Role) -> Self {
        let text = items
            .iter()
            .map(|item| item.token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let punctuation = items
            .last()
            .map(|item| token_punctuation(&item.token, &item.morpheme))
            .unwrap_or_default();
        let (tokens, morphemes) = items
            .into_iter()
            .map(|item| (item.token, item.morpheme))
            .unzip();
        Self {
            tokens,
            morphemes,
            text,
            role,
            punctuation,
        }
    }

    /// 뒤 어절을 같은 성분으로 흡수
    fn absorb(&mut self, item: AnalyzedToken) {
        self.text.push(' ');
        self.text.push_str(&item.token.text);
        self.punctuation = token_punctuation(&item.token, &item.morpheme);
        self.tokens.push(item.token);
        self.morphemes.push(item.morpheme);
    }

    /// 중심어 (마지막 토큰)
    pub fn head(&self) -> Option<&MorphemeResult> {
        self.morphemes.last()
    }

    pub fn head_nominal(&self) -> Option<&Nominal> {
        self.head().and_then(MorphemeResult::as_nominal)
    }

    pub fn head_predicate(&self) -> Option<&Predicate> {
        self.head().and_then(MorphemeResult::as_predicate)
    }
}

/// 절 하나의 분석 결과
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedSentence {
    /// 원문 순서의 모든 성분
    pub constituents: Vec<Constituent>,
    pub subject: Option<Constituent>,
    pub predicate: Option<Constituent>,
    pub object: Option<Constituent>,
    pub modifiers: Vec<Constituent>,
    pub adverbials: Vec<Constituent>,
    pub tense: Tense,
    pub pattern: Pattern,
    pub negative: bool,
    pub question: bool,
    /// 서술어는 있는데 주어가 생략됨
    pub subject_omitted: bool,
}

impl ParsedSentence {
    pub fn predicate_info(&self) -> Option<&Predicate> {
        self.predicate.as_ref().and_then(Constituent::head_predicate)
    }
}

/// 오늘 아침, 어제 밤에: 날을 가리키는 부사 바로 뒤의 때 명사는 같은 부사어
fn joins_day_adverb(out: &[Constituent], pending: &[AnalyzedToken], nominal: &Nominal) -> bool {
    pending.is_empty()
        && nominal.role == Role::Adverbial
        && is_time_noun(&nominal.stem)
        && out.last().is_some_and(|c| {
            c.role == Role::Adverbial
                && c.punctuation.is_empty()
                && c.morphemes.len() == 1
                && c.head_nominal().is_some_and(|d| {
                    d.function == ParticleFunction::Bare && DAY_ADVERBS.contains(&d.stem.as_str())
                })
        })
}

fn ends_with_punctuation(item: &AnalyzedToken) -> bool {
    !token_punctuation(&item.token, &item.morpheme).is_empty()
}

/// 수식어 토큰을 뒤따르는 체언 성분에 붙여 성분으로 묶음
///
/// 조사 없는 명사/수량/소유격과 관형형(큰, 새)은 다음 체언을 기다리고, 조사 붙은 체언이 오면
/// 함께 묶입니다. 서술어, 미분석 토큰, 대명사, 쉼표가 오면 기다리던 수식어는 따로 수식어 성분이 됩니다.
fn group_constituents(analyzed: Vec<AnalyzedToken>) -> Vec<Constituent> {
    let mut out: Vec<Constituent> = Vec::new();
    let mut pending: Vec<AnalyzedToken> = Vec::new();

    let flush = |pending: &mut Vec<AnalyzedToken>, out: &mut Vec<Constituent>| {
        if !pending.is_empty() {
            out.push(Constituent::from_analyzed(std::mem::take(pending), Role::Modifier));
        }
    };

    for item in analyzed {
        if let MorphemeResult::NounWithParticle(n) = &item.morpheme {
            if joins_day_adverb(&out, &pending, n) {
                if let Some(last) = out.last_mut() {
                    last.absorb(item);
                }
                continue;
            }
        }

        match &item.morpheme {
            MorphemeResult::NounWithParticle(n) if n.role == Role::Modifier => {
                let stop = ends_with_punctuation(&item);
                pending.push(item);
                if stop {
                    flush(&mut pending, &mut out);
                }
            }
            MorphemeResult::NounWithParticle(n) if n.function == ParticleFunction::Bare => {
                // 조사 없는 대명사/부사는 앞 명사를 받지 않음
                let role = n.role;
                flush(&mut pending, &mut out);
                out.push(Constituent::from_analyzed(vec![item], role));
            }
            MorphemeResult::NounWithParticle(n) => {
                let role = n.role;
                // 대명사는 수식을 받지 않음: 오늘 아침 나는
                if is_pronoun(&n.stem) {
                    flush(&mut pending, &mut out);
                }
                pending.push(item);
                out.push(Constituent::from_analyzed(std::mem::take(&mut pending), role));
            }
            MorphemeResult::PredicateWithEnding(p) if p.adnominal => {
                let stop = ends_with_punctuation(&item);
                pending.push(item);
                if stop {
                    flush(&mut pending, &mut out);
                }
            }
            // 서술격 조사는 체언이므로 앞 수식어를 받음: 내 친구예요
            MorphemeResult::PredicateWithEnding(p) if p.pos == Pos::Copula => {
                pending.push(item);
                out.push(Constituent::from_analyzed(std::mem::take(&mut pending), Role::Predicate));
            }
            MorphemeResult::PredicateWithEnding(_) => {
                flush(&mut pending, &mut out);
                out.push(Constituent::from_analyzed(vec![item], Role::Predicate));
            }
            MorphemeResult::Unanalyzed { .. } => {
                flush(&mut pending, &mut out);
                out.push(Constituent::from_analyzed(vec![item], Role::Modifier));
            }
        }
    }
    flush(&mut pending, &mut out);
    out
}

fn is_negation_adverb(constituent: &Constituent) -> bool {
    constituent
        .head_nominal()
        .is_some_and(|n| n.function == ParticleFunction::Bare && NEGATION_ADVERBS.contains(&n.stem.as_str()))
}

/// 성분을 문장 자리에 배치
fn assign_roles(constituents: Vec<Constituent>, question_mark: bool) -> ParsedSentence {
    let mut parsed = ParsedSentence {
        constituents: constituents.clone(),
        question: question_mark,
        ..ParsedSentence::default()
    };

    for constituent in constituents {
        match constituent.role {
            Role::Subject if parsed.subject.is_none() => parsed.subject = Some(constituent),
            // 이중 주어/보어: 배가 아파요, 학생이 아니에요, 책이 있어요
            Role::Subject if parsed.object.is_none() => parsed.object = Some(constituent),
            Role::Object if parsed.object.is_none() => parsed.object = Some(constituent),
            Role::Predicate => {
                if let Some(previous) = parsed.predicate.replace(constituent) {
                    parsed.modifiers.push(previous);
                }
            }
            Role::Adverbial if is_negation_adverb(&constituent) => parsed.negative = true,
            Role::Adverbial => parsed.adverbials.push(constituent),
            _ => parsed.modifiers.push(constituent),
        }
    }

    // 조사 없이 동사 바로 앞에 온 명사는 목적어: 나는 사과 먹어요
    let takes_bare_object = parsed.object.is_none()
        && parsed.predicate_info().is_some_and(|p| p.pos == Pos::Verb)
        && parsed.modifiers.last().is_some_and(|m| {
            m.head_nominal().is_some()
                && m.morphemes.iter().all(|x| match x {
                    MorphemeResult::NounWithParticle(_) => true,
                    MorphemeResult::PredicateWithEnding(p) => p.adnominal,
                    MorphemeResult::Unanalyzed { .. } => false,
                })
        });
    if takes_bare_object {
        parsed.object = parsed.modifiers.pop();
    }

    if let Some(predicate) = parsed.predicate_info() {
        let (tense, negative, question, pos) =
            (predicate.tense, predicate.negative, predicate.question, predicate.pos);
        parsed.tense = tense;
        parsed.negative |= negative;
        parsed.question |= question;
        parsed.pattern = match pos {
            Pos::Copula => Pattern::SVC,
            Pos::Verb if parsed.object.is_some() => Pattern::SVO,
            _ => Pattern::SV,
        };
    }
    parsed.subject_omitted = parsed.predicate.is_some() && parsed.subject.is_none();
    parsed
}

/// 한국어 절 하나를 분석
///
/// 토큰화 → 전처리 → 형태소 분석 → 성분 묶기 → 자리 배치
pub fn parse_sentence(text: &str, store: &DictionaryStore) -> ParsedSentence {
    let tokens = preprocess_tokens(&tokenize_korean(text));
    let analyzed = analyze_tokens(&tokens, store);
    let question_mark = text.trim_end().ends_with('?');
    let mut constituents = group_constituents(analyzed);
    // 절 끝 부호는 번역기가 붙임
    if let Some(last) = constituents.last_mut() {
        last.punctuation.clear();
    }
    let parsed = assign_roles(constituents, question_mark);
    log::debug!("parsed '{}': {}", text, summarize(&parsed));
    parsed
}

/// 디버그용 요약: `[S: 나는] [A: 어제] [O: 책을] [V: 읽었어요] | SVO | past`
pub fn summarize(parsed: &ParsedSentence) -> String {
    let mut parts = Vec::new();
    if let Some(subject) = &parsed.subject {
        parts.push(format!("[S: {}]", subject.text));
    }
    for adverbial in &parsed.adverbials {
        parts.push(format!("[A: {}]", adverbial.text));
    }
    for modifier in &parsed.modifiers {
        parts.push(format!("[M: {}]", modifier.text));
    }
    if let Some(object) = &parsed.object {
        parts.push(format!("[O: {}]", object.text));
    }
    if let Some(predicate) = &parsed.predicate {
        parts.push(format!("[V: {}]", predicate.text));
    }

    let mut summary = format!("{} | {} | {}", parts.join(" "), parsed.pattern, parsed.tense.as_str());
    if parsed.negative {
        summary.push_str(" | negative");
    }
    if parsed.question {
        summary.push_str(" | question");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> ParsedSentence {
        parse_sentence(text, &DictionaryStore::builtin())
    }

    fn text_of(constituent: &Option<Constituent>) -> Option<&str> {
        constituent.as_ref().map(|c| c.text.as_str())
    }

    #[test]
    fn test_svo() {
        let parsed = parse("나는 사과를 먹어요");
        assert_eq!(text_of(&parsed.subject), Some("나는"));
        assert_eq!(text_of(&parsed.object), Some("사과를"));
        assert_eq!(text_of(&parsed.predicate), Some("먹어요"));
        assert_eq!(parsed.pattern, Pattern::SVO);
        assert_eq!(parsed.tense, Tense::Present);
        assert!(!parsed.subject_omitted);
    }

    #[test]
    fn test_word_order_independent() {
        // 목적어가 주어보다 앞에 와도 자리는 같음
        let parsed = parse("사과를 나는 먹었어요");
        assert_eq!(text_of(&parsed.subject), Some("나는"));
        assert_eq!(text_of(&parsed.object), Some("사과를"));
        assert_eq!(parsed.tense, Tense::Past);
    }

    #[test]
    fn test_svc_and_sv() {
        let parsed = parse("나는 학생이에요");
        assert_eq!(parsed.pattern, Pattern::SVC);

        let parsed = parse("그녀는 행복해요");
        assert_eq!(parsed.pattern, Pattern::SV);

        let parsed = parse("그는 학교에 갔어요");
        assert_eq!(parsed.pattern, Pattern::SV);
        assert_eq!(parsed.adverbials.len(), 1);
        assert_eq!(parsed.adverbials[0].text, "학교에");
    }

    #[test]
    fn test_modifier_attaches_to_following_nominal() {
        let parsed = parse("내 친구는 커피를 마셔요");
        let subject = parsed.subject.unwrap();
        assert_eq!(subject.text, "내 친구는");
        assert_eq!(subject.morphemes.len(), 2);

        let parsed = parse("사과 두 개를 샀어요");
        assert_eq!(text_of(&parsed.object), Some("사과 두개를"));
        assert!(parsed.subject_omitted);
    }

    #[test]
    fn test_copula_takes_modifiers() {
        let parsed = parse("그는 내 친구예요");
        assert_eq!(text_of(&parsed.predicate), Some("내 친구예요"));
        assert!(parsed.modifiers.is_empty());
    }

    #[test]
    fn test_bare_noun_before_verb_is_object() {
        let parsed = parse("나는 사과 먹어요");
        assert_eq!(text_of(&parsed.object), Some("사과"));
        assert_eq!(parsed.pattern, Pattern::SVO);
    }

    #[test]
    fn test_noun_fragment() {
        let parsed = parse("사과 하나");
        assert!(parsed.predicate.is_none());
        assert_eq!(parsed.modifiers.len(), 1);
        assert_eq!(parsed.modifiers[0].morphemes.len(), 2);
        assert!(!parsed.subject_omitted);
    }

    #[test]
    fn test_double_subject_goes_to_object_slot() {
        let parsed = parse("나는 배가 아파요");
        assert_eq!(text_of(&parsed.subject), Some("나는"));
        assert_eq!(text_of(&parsed.object), Some("배가"));
        assert_eq!(parsed.pattern, Pattern::SV);
    }

    #[test]
    fn test_negation_and_question() {
        let parsed = parse("나는 고기를 안 먹어요");
        assert!(parsed.negative);
        assert!(parsed.adverbials.is_empty());

        let parsed = parse("나는 고기를 먹지 않아요");
        assert!(parsed.negative);

        let parsed = parse("너는 커피를 좋아해요?");
        assert!(parsed.question);
    }

    #[test]
    fn test_time_adverbial() {
        let parsed = parse("어제 나는 책을 읽었어요");
        assert_eq!(parsed.adverbials.len(), 1);
        assert_eq!(parsed.adverbials[0].text, "어제");
        assert_eq!(parsed.tense, Tense::Past);
    }

    #[test]
    fn test_day_adverb_joins_time_noun() {
        let parsed = parse("오늘 아침 나는 밥을 먹어요");
        assert_eq!(text_of(&parsed.subject), Some("나는"));
        assert_eq!(parsed.adverbials.len(), 1);
        assert_eq!(parsed.adverbials[0].text, "오늘 아침");
        assert_eq!(parsed.adverbials[0].morphemes.len(), 2);
        assert!(parsed.modifiers.is_empty());
        assert_eq!(parsed.pattern, Pattern::SVO);
    }

    #[test]
    fn test_pronoun_takes_no_modifier() {
        let parsed = parse("사과 나는 먹어요");
        assert_eq!(text_of(&parsed.subject), Some("나는"));
        assert_eq!(text_of(&parsed.object), Some("사과"));
    }

    #[test]
    fn test_adnominal_attaches_to_subject() {
        let parsed = parse("큰 개가 물을 마셔요");
        let subject = parsed.subject.unwrap();
        assert_eq!(subject.text, "큰 개가");
        assert!(subject.morphemes[0].as_predicate().is_some_and(|p| p.adnominal));
        assert_eq!(text_of(&parsed.predicate), Some("마셔요"));
        assert!(parsed.modifiers.is_empty());

        let parsed = parse("작은 고양이가 우유를 마셔요");
        assert_eq!(text_of(&parsed.subject), Some("작은 고양이가"));
        assert_eq!(text_of(&parsed.object), Some("우유를"));

        let parsed = parse("새 친구가 책을 읽어요");
        assert_eq!(text_of(&parsed.subject), Some("새 친구가"));
        assert_eq!(parsed.pattern, Pattern::SVO);
    }

    #[test]
    fn test_inner_punctuation_kept_on_constituent() {
        let parsed = parse("사과, 바나나");
        assert_eq!(parsed.modifiers.len(), 2);
        assert_eq!(parsed.modifiers[0].punctuation, ",");
        assert_eq!(parsed.modifiers[1].punctuation, "");

        let parsed = parse("나는, 사과를 먹어요.");
        assert_eq!(parsed.subject.as_ref().map(|s| s.punctuation.as_str()), Some(","));
        assert_eq!(parsed.predicate.as_ref().map(|p| p.punctuation.as_str()), Some(""));
    }

    #[test]
    fn test_unanalyzed_passthrough() {
        let parsed = parse("나는 뷁 먹어요");
        assert_eq!(parsed.modifiers.len(), 1);
        assert_eq!(parsed.modifiers[0].text, "뷁");
        assert_eq!(parsed.constituents.len(), 3);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse("");
        assert!(parsed.constituents.is_empty());
        assert!(parsed.predicate.is_none());
    }

    #[test]
    fn test_summarize() {
        let parsed = parse("어제 나는 책을 읽었어요");
        assert_eq!(
            summarize(&parsed),
            "[S: 나는] [A: 어제] [O: 책을] [V: 읽었어요] | SVO | past"
        );
    }
}
