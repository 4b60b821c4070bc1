//! 텍스트 전처리
//!
//! 토큰화, 흩어진 글자 감지, 한국어 띄어쓰기 복구/교정.

mod spacing;
mod tokenizer;

use regex::Regex;

pub use spacing::{
    correct_spacing, correct_spacing_full, dp_word_split, recover_spacing, CorrectedSpacing,
    RecoveredSpacing, WordSplit,
};
pub use tokenizer::{
    detect_scattered_letters, detect_scattered_letters_with, scattered_letters_to_errors,
    tokenize_english, tokenize_korean, ScatterScoring, ScatteredLetters, TextError, TextErrorKind,
    Token,
};

/// 정적 패턴 컴파일. 실패하면 로그를 남기고 None (해당 규칙은 건너뜀)
pub(crate) fn static_regex(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| log::error!("invalid pattern {:?}: {}", pattern, e))
        .ok()
}
