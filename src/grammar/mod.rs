//! 문법 계층
//!
//! 형태소 분석 → 문장 구조 분석 → 영어 생성 → 영어 검증 순으로 쓰입니다.

pub mod english;
pub mod generator;
pub mod morpheme;
pub mod parser;
pub mod validator;

pub use generator::{generate_english, Generator};
pub use morpheme::{
    analyze_morpheme, analyze_tokens, preprocess_tokens, split_particle, split_predicate,
    AnalyzedToken, MorphemeResult, Nominal, ParticleFunction, Pos, Predicate, Role, Tense,
};
pub use parser::{parse_sentence, summarize, Constituent, ParsedSentence, Pattern};
pub use validator::{quick_validate, validate_english, ErrorKind, ValidationError, ValidationResult};
