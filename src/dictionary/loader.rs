//! JSON 사전 번들 로드
//!
//! # 파일 형식
//! ```json
//! {
//!   "words": [{ "ko": "사과", "en": "apple" }],
//!   "stems": [{ "stem": "먹", "en": "eat", "type": "verb" }],
//!   "idioms": [{ "ko": "식은 죽 먹기", "en": "a piece of cake", "variants": ["식은죽 먹기"] }],
//!   "polysemy": [{ "word": "배", "translations": [{ "english": "pear", "category": "food" }] }],
//!   "domains": [{ "ko": "서버", "en": "server", "domain": "it", "direction": "both" }],
//!   "irregularKo": [{ "base": "듣", "type": "ㄷ", "conjugations": { "어요": "들어요" } }],
//!   "irregularEn": [{ "base": "go", "past": "went", "pp": "gone" }]
//! }
//! ```
//! 모든 필드는 생략 가능합니다. 형식이 맞지 않는 개별 항목은 경고 후 건너뜁니다.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use super::entries::DictionaryEntry;
use super::DictionaryStore;

/// 사전 로드 에러
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// 파일 읽기 실패
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱 실패
    #[error("failed to parse dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// 번들 형식 오류
    #[error("invalid dictionary bundle: {0}")]
    Format(String),
}

/// 파일에서 사전 번들 로드
pub fn load_bundle(path: impl AsRef<Path>) -> Result<DictionaryStore, DictionaryError> {
    let file = File::open(path.as_ref())?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    bundle_from_value(&value)
}

/// JSON 문자열에서 사전 번들 로드
pub fn bundle_from_json(json: &str) -> Result<DictionaryStore, DictionaryError> {
    let value: Value = serde_json::from_str(json)?;
    bundle_from_value(&value)
}

fn bundle_from_value(value: &Value) -> Result<DictionaryStore, DictionaryError> {
    let obj = value
        .as_object()
        .ok_or_else(|| DictionaryError::Format("top level must be an object".into()))?;

    let mut entries = Vec::new();
    read_section(obj.get("words"), "words", DictionaryEntry::Word, &mut entries)?;
    read_section(obj.get("stems"), "stems", DictionaryEntry::Stem, &mut entries)?;
    read_section(obj.get("idioms"), "idioms", DictionaryEntry::Idiom, &mut entries)?;
    read_section(obj.get("polysemy"), "polysemy", DictionaryEntry::Polysemy, &mut entries)?;
    read_section(obj.get("domains"), "domains", DictionaryEntry::Domain, &mut entries)?;
    read_section(obj.get("irregularKo"), "irregularKo", DictionaryEntry::IrregularKo, &mut entries)?;
    read_section(obj.get("irregularEn"), "irregularEn", DictionaryEntry::IrregularEn, &mut entries)?;

    log::debug!("loaded dictionary bundle: {} entries", entries.len());
    Ok(DictionaryStore::from_entries(entries))
}

/// 한 섹션(배열)을 읽어 항목으로 변환. 잘못된 항목은 건너뜀
fn read_section<T, F>(
    section: Option<&Value>,
    name: &str,
    wrap: F,
    out: &mut Vec<DictionaryEntry>,
) -> Result<(), DictionaryError>
where
    T: DeserializeOwned,
    F: Fn(T) -> DictionaryEntry,
{
    let Some(section) = section else {
        return Ok(());
    };
    let items = section
        .as_array()
        .ok_or_else(|| DictionaryError::Format(format!("\"{}\" must be an array", name)))?;

    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<T>(item.clone()) {
            Ok(entry) => out.push(wrap(entry)),
            Err(e) => log::warn!("skipping malformed {} entry #{}: {}", name, i, e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Direction;
    use std::io::Write;

    #[test]
    fn test_bundle_from_json() {
        let json = r#"{
            "words": [{"ko": "고래", "en": "whale"}],
            "stems": [{"stem": "헤엄치", "en": "swim", "type": "verb"}],
            "irregularEn": [{"base": "swim", "past": "swam", "pp": "swum"}]
        }"#;
        let store = bundle_from_json(json).unwrap();
        assert_eq!(store.lookup_word("고래", Direction::KoEn, None), "whale");
        assert_eq!(store.lookup_word("whale", Direction::EnKo, None), "고래");
        assert!(store.lookup_irregular_en("swam").is_some());
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let json = r#"{"words": [{"ko": "고래"}, {"ko": "바다", "en": "sea"}]}"#;
        let store = bundle_from_json(json).unwrap();
        assert_eq!(store.lookup_word("바다", Direction::KoEn, None), "sea");
        // 누락된 항목은 그대로 통과
        assert_eq!(store.lookup_word("고래", Direction::KoEn, None), "고래");
    }

    #[test]
    fn test_invalid_bundle_shape() {
        assert!(matches!(bundle_from_json("[]"), Err(DictionaryError::Format(_))));
        assert!(matches!(
            bundle_from_json(r#"{"words": {}}"#),
            Err(DictionaryError::Format(_))
        ));
        assert!(matches!(bundle_from_json("{not json"), Err(DictionaryError::Json(_))));
    }

    #[test]
    fn test_empty_bundle() {
        let store = bundle_from_json("{}").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_bundle_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"words": [{{"ko": "별", "en": "star"}}]}}"#).unwrap();
        let store = load_bundle(file.path()).unwrap();
        assert_eq!(store.lookup_word("별", Direction::KoEn, None), "star");

        assert!(matches!(
            load_bundle("/nonexistent/dictionary.json"),
            Err(DictionaryError::Io(_))
        ));
    }
}
