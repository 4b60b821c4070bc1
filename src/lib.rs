//! 규칙 기반 한국어↔영어 번역 엔진
//!
//! 한글 자모 연산, 형태소 분석, 문장 성분 배치, 영어 문장 생성과 문법 검증을
//! 읽기 전용 사전(단어/관용구/어간/도메인/다의어/불규칙 활용) 위에서 수행합니다.
//!
//! ```
//! use hanyeong::{translate, Direction};
//!
//! assert_eq!(translate("나는 사과를 먹어요", Direction::KoEn), "I eat an apple");
//! assert_eq!(translate("I eat an apple", Direction::EnKo), "나는 사과를 먹어요");
//! ```

pub mod config;
pub mod core;
pub mod dictionary;
pub mod grammar;
pub mod similarity;
pub mod text;
pub mod translator;

pub use config::{load_config, read_config, save_config, ConfigError, TranslatorConfig};
pub use dictionary::{load_bundle, Direction, DictionaryError, DictionaryStore};
pub use grammar::{parse_sentence, quick_validate, validate_english, ParsedSentence, ValidationResult};
pub use text::{detect_scattered_letters, recover_spacing, tokenize_english, tokenize_korean, Token};
pub use translator::{translate, SpacingSuggestions, Translator};
