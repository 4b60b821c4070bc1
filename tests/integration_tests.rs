//! 통합 테스트 - 공개 API 기준 번역 동작

use std::sync::Arc;

use hanyeong::core::{compose, decompose, JamoTriple};
use hanyeong::dictionary::bundle_from_json;
use hanyeong::similarity::{levenshtein_distance, similarity};
use hanyeong::{
    detect_scattered_letters, load_bundle, translate, validate_english, Direction,
    DictionaryStore, Translator, TranslatorConfig,
};

#[test]
fn test_jamo_roundtrip_all_syllables() {
    for code in 0xAC00u32..=0xD7A3 {
        let c = char::from_u32(code).unwrap();
        let triple = decompose(c).unwrap();
        assert_eq!(compose(&triple), Some(c));
    }
    assert_eq!(decompose('A'), None);
    assert_eq!(compose(&JamoTriple::new('A', 'ㅏ', None)), None);
}

#[test]
fn test_distance_is_a_metric() {
    assert_eq!(levenshtein_distance("사과", "사과"), 0);
    assert_eq!(levenshtein_distance("", "학교"), 2);
    assert_eq!(
        levenshtein_distance("kitten", "sitting"),
        levenshtein_distance("sitting", "kitten")
    );
    assert_eq!(similarity("apple", "apple"), 1.0);
    assert_eq!(similarity("apple", ""), 0.0);
    assert_eq!(similarity("", "apple"), 0.0);
}

#[test]
fn test_scattered_letters_span() {
    let found = detect_scattered_letters("h e l l o", None);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].reconstructed, "hello");
    assert_eq!((found[0].start, found[0].end), (0, 9));
}

#[test]
fn test_quantity_pluralization() {
    assert_eq!(translate("사과 1개", Direction::KoEn), "1 apple");
    assert_eq!(translate("사과 2개", Direction::KoEn), "2 apples");
    assert_eq!(translate("사과 0개", Direction::KoEn), "0 apples");
}

#[test]
fn test_article_selection() {
    assert_eq!(translate("사과 하나", Direction::KoEn), "an apple");
    assert_eq!(translate("책 하나", Direction::KoEn), "a book");
    // 수량 없는 명사 하나는 관사 없이
    assert_eq!(translate("사과", Direction::KoEn), "apple");
    assert_eq!(translate("3.5 사과", Direction::KoEn), "3.5 apples");
}

#[test]
fn test_idiom_short_circuit() {
    assert_eq!(translate("식은 죽 먹기", Direction::KoEn), "a piece of cake");
    assert_eq!(translate("식은죽 먹기", Direction::KoEn), "a piece of cake");
    assert_eq!(translate("a piece of cake", Direction::EnKo), "식은 죽 먹기");
}

#[test]
fn test_validator_examples() {
    assert_eq!(validate_english("He go").corrected, "He goes");
    assert_eq!(validate_english("a apple").corrected, "An apple");
    assert_eq!(validate_english("it is a a apple").corrected, "It is an apple");
}

#[test]
fn test_validator_idempotent() {
    for text in [
        "He go to school",
        "a apple and a orange",
        "she happy.i am tired",
        "the the  cat , sat",
        "It is very very good",
    ] {
        let once = validate_english(text).corrected;
        assert_eq!(validate_english(&once).corrected, once);
    }
}

#[test]
fn test_word_order_ko_en() {
    assert_eq!(translate("나는 사과를 먹어요", Direction::KoEn), "I eat an apple");
    assert_eq!(translate("그는 학교에 갔어요", Direction::KoEn), "He went to school");
    assert_eq!(translate("날씨가 추워요", Direction::KoEn), "The weather is cold");
    assert_eq!(translate("너는 커피를 좋아해요?", Direction::KoEn), "Do you like coffee?");
}

#[test]
fn test_modifiers_stay_in_subject() {
    assert_eq!(translate("작은 고양이가 우유를 마셔요", Direction::KoEn), "The small cat drinks milk");
    assert_eq!(translate("큰 개가 물을 마셔요", Direction::KoEn), "The big dog drinks water");
    assert_eq!(translate("새 친구가 책을 읽어요", Direction::KoEn), "The new friend reads a book");
    assert_eq!(translate("오늘 아침 나는 밥을 먹어요", Direction::KoEn), "This morning I eat rice");
}

#[test]
fn test_inner_punctuation_survives() {
    assert_eq!(translate("사과, 바나나", Direction::KoEn), "apple, 바나나");
    assert_eq!(
        translate("I eat an apple, she likes me", Direction::EnKo),
        "나는 사과를 먹어요, 그녀는 나를 좋아해요"
    );
    let mixed = translate("Hello world  ,  foo", Direction::EnKo);
    assert!(mixed.contains(", "), "{}", mixed);
}

#[test]
fn test_polysemy_by_context() {
    assert_eq!(translate("배를 타요", Direction::KoEn), "I ride a boat");
    assert_eq!(translate("배를 먹어요", Direction::KoEn), "I eat a pear");
}

#[test]
fn test_multi_clause_keeps_punctuation() {
    assert_eq!(
        translate("나는 사과를 먹어요. 그는 학교에 갔어요!", Direction::KoEn),
        "I eat an apple. He went to school!"
    );
    assert_eq!(
        translate("I eat an apple. He went to school.", Direction::EnKo),
        "나는 사과를 먹어요. 그는 학교에 갔어요."
    );
}

#[test]
fn test_word_order_en_ko() {
    assert_eq!(translate("I am a student", Direction::EnKo), "나는 학생이에요");
    assert_eq!(translate("I do not eat meat", Direction::EnKo), "나는 고기를 안 먹어요");
}

#[test]
fn test_never_fails() {
    for direction in [Direction::KoEn, Direction::EnKo] {
        for input in ["", "   ", "...", "?!", "뷁뷁뷁 zzz", "12345", "😀"] {
            let _ = translate(input, direction);
        }
    }
    assert_eq!(translate("뷁", Direction::KoEn), "뷁");
    assert_eq!(translate("qwrty", Direction::EnKo), "qwrty");
}

#[test]
fn test_empty_dictionary_degrades_to_passthrough() {
    let translator = Translator::new(DictionaryStore::new(), TranslatorConfig::default());
    assert_eq!(translator.translate("사과", Direction::KoEn), "사과");
    assert_eq!(translator.translate("apple", Direction::EnKo), "apple");
}

#[test]
fn test_bundle_merge_and_hot_swap() {
    let bundle = bundle_from_json(r#"{ "words": [{ "ko": "바나나", "en": "banana" }] }"#).unwrap();
    let translator = Translator::builtin();
    assert_eq!(translator.translate("바나나", Direction::KoEn), "바나나");

    let merged = translator.dictionary().merge(&bundle);
    translator.replace_dictionary(Arc::new(merged));
    assert_eq!(translator.translate("바나나", Direction::KoEn), "banana");
    assert_eq!(translator.translate("사과", Direction::KoEn), "apple");
}

#[test]
fn test_load_bundle_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.json");
    std::fs::write(
        &path,
        r#"{ "idioms": [{ "ko": "눈코 뜰 새 없다", "en": "extremely busy" }] }"#,
    )
    .unwrap();
    let store = DictionaryStore::builtin().merge(&load_bundle(&path).unwrap());
    let translator = Translator::new(store, TranslatorConfig::default());
    assert_eq!(translator.translate("눈코 뜰 새 없다", Direction::KoEn), "extremely busy");

    assert!(load_bundle(dir.path().join("missing.json")).is_err());
}
