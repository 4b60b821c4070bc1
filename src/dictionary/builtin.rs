//! 내장 사전 데이터
//!
//! 짧은 일상 대화 문장을 다룰 수 있는 최소 어휘입니다.
//! 외부 번들을 `DictionaryStore::merge`로 덧씌워 확장합니다.

use std::collections::BTreeMap;

use super::entries::{
    DictionaryEntry, DomainDirection, DomainEntry, IdiomEntry, IrregularEntryEn,
    IrregularEntryKo, PolysemyEntry, Sense, StemEntry, StemType, WordEntry,
};
use crate::core::irregular::{conjugate, IrregularType};

/// 대명사
#[rustfmt::skip]
const PRONOUNS: &[(&str, &str)] = &[
    ("나", "I"), ("저", "I"), ("너", "you"), ("당신", "you"), ("그", "he"),
    ("그녀", "she"), ("우리", "we"), ("저희", "we"), ("너희", "you"), ("그들", "they"),
    ("이것", "this"), ("그것", "it"), ("저것", "that"), ("여기", "here"), ("거기", "there"),
];

/// 일반 명사
#[rustfmt::skip]
const NOUNS: &[(&str, &str)] = &[
    ("사과", "apple"), ("책", "book"), ("학교", "school"), ("집", "home"), ("커피", "coffee"),
    ("물", "water"), ("밥", "rice"), ("고기", "meat"), ("음악", "music"), ("학생", "student"),
    ("선생님", "teacher"), ("친구", "friend"), ("날씨", "weather"), ("노래", "song"),
    ("영화", "movie"), ("우유", "milk"), ("빵", "bread"), ("고양이", "cat"), ("강아지", "puppy"),
    ("개", "dog"), ("사람", "person"), ("의사", "doctor"), ("엄마", "mom"), ("아빠", "dad"),
    ("회사", "company"), ("도서관", "library"), ("공원", "park"), ("시간", "hour"),
    ("오렌지", "orange"), ("우산", "umbrella"), ("대학교", "university"), ("아침", "morning"),
    ("저녁", "evening"), ("점심", "lunch"), ("숙제", "homework"), ("돈", "money"),
    ("편지", "letter"), ("컴퓨터", "computer"), ("전화", "phone"), ("가방", "bag"),
    ("신문", "newspaper"), ("버스", "bus"), ("기차", "train"), ("바다", "sea"),
    ("산", "mountain"), ("꽃", "flower"), ("나무", "tree"), ("계란", "egg"),
    ("아이스크림", "ice cream"), ("병원", "hospital"), ("식당", "restaurant"),
    ("가게", "store"), ("시장", "market"), ("방", "room"), ("영어", "English"),
    ("한국어", "Korean"), ("한국", "Korea"), ("서울", "Seoul"), ("게임", "game"),
    ("축구", "soccer"), ("운동", "exercise"), ("공부", "study"), ("하늘", "sky"),
    ("아이", "child"), ("남자", "man"), ("여자", "woman"), ("이름", "name"), ("주말", "weekend"),
];

/// 부사 (시간/빈도/정도/방식)
#[rustfmt::skip]
const ADVERBS: &[(&str, &str)] = &[
    ("어제", "yesterday"), ("오늘", "today"), ("내일", "tomorrow"), ("지금", "now"),
    ("매일", "every day"), ("자주", "often"), ("항상", "always"), ("가끔", "sometimes"),
    ("빨리", "quickly"), ("천천히", "slowly"), ("정말", "really"), ("아주", "very"),
    ("매우", "very"), ("너무", "too"), ("같이", "together"), ("혼자", "alone"), ("잘", "well"),
    ("많이", "a lot"), ("조금", "a little"), ("다시", "again"), ("벌써", "already"),
    ("이미", "already"), ("곧", "soon"),
];

/// 용언 어간
#[rustfmt::skip]
const STEMS: &[(&str, &str, StemType)] = &[
    ("먹", "eat", StemType::Verb), ("마시", "drink", StemType::Verb), ("가", "go", StemType::Verb),
    ("오", "come", StemType::Verb), ("보", "see", StemType::Verb), ("읽", "read", StemType::Verb),
    ("듣", "hear", StemType::Verb), ("걷", "walk", StemType::Verb), ("돕", "help", StemType::Verb),
    ("좋아하", "like", StemType::Verb), ("공부하", "study", StemType::Verb),
    ("사", "buy", StemType::Verb), ("만나", "meet", StemType::Verb), ("자", "sleep", StemType::Verb),
    ("타", "ride", StemType::Verb), ("하", "do", StemType::Verb), ("쓰", "write", StemType::Verb),
    ("부르", "sing", StemType::Verb), ("짓", "build", StemType::Verb), ("살", "live", StemType::Verb),
    ("알", "know", StemType::Verb), ("배우", "learn", StemType::Verb),
    ("가르치", "teach", StemType::Verb), ("일하", "work", StemType::Verb),
    ("요리하", "cook", StemType::Verb), ("운동하", "exercise", StemType::Verb),
    ("기다리", "wait", StemType::Verb), ("사랑하", "love", StemType::Verb),
    ("싫어하", "hate", StemType::Verb), ("원하", "want", StemType::Verb),
    ("만들", "make", StemType::Verb), ("주", "give", StemType::Verb), ("받", "receive", StemType::Verb),
    ("열", "open", StemType::Verb), ("닫", "close", StemType::Verb), ("앉", "sit", StemType::Verb),
    ("일어나", "wake up", StemType::Verb), ("놀", "play", StemType::Verb),
    ("웃", "laugh", StemType::Verb), ("울", "cry", StemType::Verb), ("달리", "run", StemType::Verb),
    ("말하", "speak", StemType::Verb), ("보내", "send", StemType::Verb), ("입", "wear", StemType::Verb),
    ("씻", "wash", StemType::Verb), ("찾", "find", StemType::Verb), ("되", "become", StemType::Verb),
    ("있", "have", StemType::Verb),
    ("좋", "good", StemType::Adj), ("행복하", "happy", StemType::Adj), ("춥", "cold", StemType::Adj),
    ("덥", "hot", StemType::Adj), ("바쁘", "busy", StemType::Adj), ("크", "big", StemType::Adj),
    ("작", "small", StemType::Adj), ("예쁘", "pretty", StemType::Adj),
    ("맛있", "delicious", StemType::Adj), ("피곤하", "tired", StemType::Adj),
    ("아프", "sick", StemType::Adj), ("파랗", "blue", StemType::Adj),
    ("배고프", "hungry", StemType::Adj), ("슬프", "sad", StemType::Adj), ("기쁘", "glad", StemType::Adj),
    ("쉽", "easy", StemType::Adj), ("어렵", "difficult", StemType::Adj),
    ("재미있", "interesting", StemType::Adj), ("비싸", "expensive", StemType::Adj),
    ("싸", "cheap", StemType::Adj), ("높", "high", StemType::Adj), ("빠르", "fast", StemType::Adj),
    ("느리", "slow", StemType::Adj), ("조용하", "quiet", StemType::Adj),
    ("깨끗하", "clean", StemType::Adj), ("친절하", "kind", StemType::Adj),
    ("귀엽", "cute", StemType::Adj),
];

/// 불규칙 용언 (활용형은 규칙에서 생성)
#[rustfmt::skip]
const IRREGULAR_KO: &[(&str, IrregularType)] = &[
    ("듣", IrregularType::Dieut), ("걷", IrregularType::Dieut),
    ("돕", IrregularType::Bieup), ("춥", IrregularType::Bieup), ("덥", IrregularType::Bieup),
    ("쉽", IrregularType::Bieup), ("어렵", IrregularType::Bieup), ("귀엽", IrregularType::Bieup),
    ("짓", IrregularType::Siot),
    ("파랗", IrregularType::Hieut),
    ("부르", IrregularType::Reu), ("모르", IrregularType::Reu), ("빠르", IrregularType::Reu),
    ("쓰", IrregularType::Eu), ("바쁘", IrregularType::Eu), ("아프", IrregularType::Eu),
    ("크", IrregularType::Eu), ("예쁘", IrregularType::Eu), ("슬프", IrregularType::Eu),
    ("기쁘", IrregularType::Eu), ("배고프", IrregularType::Eu),
];

/// 불규칙 활용형을 미리 만들어 둘 어미
const CONJUGATED_ENDINGS: [&str; 5] = ["어요", "었어요", "어", "었어", "었다"];

/// 영어 불규칙 동사 (원형, 과거, 과거분사)
#[rustfmt::skip]
const IRREGULAR_EN: &[(&str, &str, &str)] = &[
    ("be", "was", "been"), ("have", "had", "had"), ("do", "did", "done"), ("go", "went", "gone"),
    ("eat", "ate", "eaten"), ("drink", "drank", "drunk"), ("see", "saw", "seen"),
    ("read", "read", "read"), ("hear", "heard", "heard"), ("buy", "bought", "bought"),
    ("meet", "met", "met"), ("sleep", "slept", "slept"), ("ride", "rode", "ridden"),
    ("write", "wrote", "written"), ("sing", "sang", "sung"), ("build", "built", "built"),
    ("know", "knew", "known"), ("make", "made", "made"), ("give", "gave", "given"),
    ("come", "came", "come"), ("teach", "taught", "taught"), ("run", "ran", "run"),
    ("sit", "sat", "sat"), ("wear", "wore", "worn"), ("find", "found", "found"),
    ("send", "sent", "sent"), ("speak", "spoke", "spoken"), ("take", "took", "taken"),
    ("get", "got", "gotten"), ("forget", "forgot", "forgotten"), ("feel", "felt", "felt"),
    ("leave", "left", "left"), ("think", "thought", "thought"), ("swim", "swam", "swum"),
    ("put", "put", "put"), ("cut", "cut", "cut"), ("hit", "hit", "hit"), ("let", "let", "let"),
    ("set", "set", "set"), ("hurt", "hurt", "hurt"), ("cost", "cost", "cost"),
    ("shut", "shut", "shut"), ("begin", "began", "begun"), ("bring", "brought", "brought"),
    ("catch", "caught", "caught"), ("fly", "flew", "flown"), ("grow", "grew", "grown"),
    ("lose", "lost", "lost"), ("pay", "paid", "paid"), ("say", "said", "said"),
    ("sell", "sold", "sold"), ("tell", "told", "told"), ("win", "won", "won"),
    ("understand", "understood", "understood"), ("wake", "woke", "woken"),
    ("become", "became", "become"), ("fall", "fell", "fallen"),
];

/// 관용 표현 (한국어, 영어, 직역, 이형)
#[rustfmt::skip]
const IDIOMS: &[(&str, &str, Option<&str>, &[&str])] = &[
    ("식은 죽 먹기", "a piece of cake", Some("eating cold porridge"), &["식은죽 먹기", "식은죽먹기"]),
    ("누워서 떡 먹기", "a piece of cake", Some("eating rice cake lying down"), &[]),
    ("그림의 떡", "pie in the sky", Some("rice cake in a picture"), &[]),
    ("티끌 모아 태산", "every little bit counts", Some("gather dust to make a mountain"), &[]),
    ("시작이 반이다", "well begun is half done", Some("the beginning is half"), &["시작이 반"]),
    ("발 없는 말이 천 리 간다", "word travels fast", Some("a horse without feet goes a thousand li"), &[]),
    ("안녕하세요", "Hello", None, &["안녕하십니까"]),
    ("감사합니다", "Thank you", None, &["고맙습니다"]),
    ("고마워", "Thanks", None, &["고마워요"]),
    ("미안해요", "I'm sorry", None, &["죄송합니다"]),
    ("천만에요", "You're welcome", None, &[]),
    ("잘 자", "Good night", None, &["잘 자요"]),
];

/// 다의어 (단어, [(영어, 분야, 우선순위, 문맥 힌트)])
type SenseSeed = (&'static str, &'static str, Option<i32>, &'static [&'static str]);

#[rustfmt::skip]
const POLYSEMY: &[(&str, &[SenseSeed])] = &[
    ("배", &[
        ("pear", "food", Some(2), &["먹", "과일", "달", "맛"]),
        ("boat", "transport", Some(1), &["타", "바다", "항구", "선장"]),
        ("stomach", "body", Some(1), &["아파", "아프", "고파", "고프", "배탈"]),
    ]),
    ("눈", &[
        ("eye", "body", Some(1), &["감", "뜨", "떠", "아파", "깜빡"]),
        ("snow", "weather", Some(1), &["와", "오", "내리", "내려", "쌓", "하얀"]),
    ]),
    ("차", &[
        ("car", "transport", Some(1), &["타", "운전", "주차", "빨간"]),
        ("tea", "food", Some(1), &["마시", "마셔", "녹차", "뜨거운"]),
    ]),
    ("말", &[
        ("horse", "animal", None, &["타", "달리", "달려", "농장"]),
        ("words", "speech", None, &["해", "했", "하", "듣", "들"]),
    ]),
    ("밤", &[
        ("night", "time", Some(1), &["늦은", "오늘", "자"]),
        ("chestnut", "food", None, &["먹", "구운"]),
    ]),
];

/// 도메인 사전 (분야, 방향, 항목). 등록 순서가 검색 순서
#[rustfmt::skip]
const DOMAINS: &[(&str, DomainDirection, &[(&str, &str)])] = &[
    ("it", DomainDirection::Both, &[
        ("서버", "server"), ("데이터", "data"), ("프로그램", "program"), ("네트워크", "network"),
    ]),
    ("food", DomainDirection::KoEn, &[
        ("김치", "kimchi"), ("불고기", "bulgogi"), ("비빔밥", "bibimbap"), ("떡", "rice cake"),
    ]),
    ("travel", DomainDirection::Both, &[
        ("공항", "airport"), ("호텔", "hotel"), ("여권", "passport"), ("비행기", "airplane"),
    ]),
    ("medical", DomainDirection::KoEn, &[
        ("약", "medicine"), ("감기", "cold"),
    ]),
];

/// 내장 사전 항목 전체
pub fn builtin_entries() -> Vec<DictionaryEntry> {
    let mut entries = Vec::new();

    for &(ko, en) in PRONOUNS.iter().chain(NOUNS).chain(ADVERBS) {
        entries.push(DictionaryEntry::Word(WordEntry {
            ko: ko.to_string(),
            en: en.to_string(),
        }));
    }

    for &(stem, en, kind) in STEMS {
        entries.push(DictionaryEntry::Stem(StemEntry {
            stem: stem.to_string(),
            en: en.to_string(),
            kind,
        }));
    }

    for &(base, kind) in IRREGULAR_KO {
        let conjugations: BTreeMap<String, String> = CONJUGATED_ENDINGS
            .iter()
            .map(|&ending| (ending.to_string(), conjugate(base, ending, Some(kind))))
            .collect();
        entries.push(DictionaryEntry::IrregularKo(IrregularEntryKo {
            base: base.to_string(),
            kind,
            conjugations,
        }));
    }

    for &(base, past, pp) in IRREGULAR_EN {
        entries.push(DictionaryEntry::IrregularEn(IrregularEntryEn {
            base: base.to_string(),
            past: past.to_string(),
            pp: pp.to_string(),
        }));
    }

    for &(ko, en, literal, variants) in IDIOMS {
        entries.push(DictionaryEntry::Idiom(IdiomEntry {
            ko: ko.to_string(),
            en: en.to_string(),
            literal: literal.map(str::to_string),
            variants: variants.iter().map(|v| v.to_string()).collect(),
        }));
    }

    for &(word, senses) in POLYSEMY {
        entries.push(DictionaryEntry::Polysemy(PolysemyEntry {
            word: word.to_string(),
            translations: senses
                .iter()
                .map(|&(english, category, priority, hints)| Sense {
                    english: english.to_string(),
                    category: category.to_string(),
                    priority,
                    context_hints: hints.iter().map(|h| h.to_string()).collect(),
                })
                .collect(),
        }));
    }

    for &(domain, direction, items) in DOMAINS {
        for &(ko, en) in items {
            entries.push(DictionaryEntry::Domain(DomainEntry {
                ko: ko.to_string(),
                en: en.to_string(),
                domain: domain.to_string(),
                direction,
            }));
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_all_kinds() {
        let entries = builtin_entries();
        let count = |f: fn(&DictionaryEntry) -> bool| entries.iter().filter(|e| f(e)).count();
        assert!(count(|e| matches!(e, DictionaryEntry::Word(_))) > 50);
        assert!(count(|e| matches!(e, DictionaryEntry::Stem(_))) > 40);
        assert!(count(|e| matches!(e, DictionaryEntry::Idiom(_))) >= 5);
        assert!(count(|e| matches!(e, DictionaryEntry::Polysemy(_))) >= 3);
        assert!(count(|e| matches!(e, DictionaryEntry::Domain(_))) >= 4);
        assert!(count(|e| matches!(e, DictionaryEntry::IrregularKo(_))) >= 6);
        assert!(count(|e| matches!(e, DictionaryEntry::IrregularEn(_))) >= 20);
    }

    #[test]
    fn test_irregular_conjugations_generated() {
        let entries = builtin_entries();
        let dut = entries
            .iter()
            .find_map(|e| match e {
                DictionaryEntry::IrregularKo(irr) if irr.base == "듣" => Some(irr),
                _ => None,
            })
            .unwrap();
        assert_eq!(dut.conjugations.get("어요").map(String::as_str), Some("들어요"));
        assert_eq!(dut.conjugations.get("었어요").map(String::as_str), Some("들었어요"));
    }

    #[test]
    fn test_every_irregular_stem_has_translation_or_is_known() {
        // 모르를 제외한 불규칙 용언은 어간 사전에도 있어야 함
        for &(base, _) in IRREGULAR_KO {
            if base == "모르" {
                continue;
            }
            assert!(STEMS.iter().any(|&(s, _, _)| s == base), "missing stem {}", base);
        }
    }
}
