//! 문자열 유사도 계산
//!
//! 편집 거리, 정규화 유사도, 두벌식 자판 거리를 반영한 유사도와
//! 퍼지 사전 조회에 쓰이는 메모이제이션 캐시를 제공합니다.
//!
//! ```
//! use hanyeong::similarity::{levenshtein_distance, similarity};
//! assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
//! assert_eq!(similarity("apple", "apple"), 1.0);
//! ```

mod cache;
mod distance;
pub mod keymap;

pub use cache::SimilarityCache;
pub use distance::{
    calculate_keyboard_similarity, is_korean_text, jamo_edit_distance, levenshtein_distance,
    similarity,
};
