//! 문자열 편집 거리와 유사도
//!
//! 모든 거리는 바이트가 아닌 코드 포인트 단위로 계산하므로 한글 음절 하나가 한 단위입니다.
//! 빈 문자열에 대한 값은 관례로 정의되며 NaN을 반환하지 않습니다.

use super::keymap::key_distance;
use crate::core::jamo::{decompose_all, is_hangul, is_jamo};

/// 홑자음/쌍자음 쌍 (ㄱ/ㄲ ...) 치환 비용
const DOUBLE_CONSONANT_COST: f64 = 0.3;
/// 인접 키 치환 비용
const ADJACENT_KEY_COST: f64 = 0.5;
/// 인접 키로 보는 최대 거리 (대각선 이웃 포함)
const ADJACENT_KEY_DISTANCE: f64 = 1.12;

const DOUBLE_CONSONANTS: [(char, char); 5] =
    [('ㄱ', 'ㄲ'), ('ㄷ', 'ㄸ'), ('ㅂ', 'ㅃ'), ('ㅅ', 'ㅆ'), ('ㅈ', 'ㅉ')];

/// 레벤슈타인 편집 거리
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// 정규화 유사도 [0, 1]. 둘 중 하나라도 비면 0, 같으면 1
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - levenshtein_distance(a, b) as f64 / max_len as f64
}

/// 자모 치환 비용 (두벌식 자판 거리 반영)
fn substitution_cost(x: char, y: char) -> f64 {
    if x == y {
        return 0.0;
    }
    if DOUBLE_CONSONANTS
        .iter()
        .any(|&(s, d)| (s == x && d == y) || (s == y && d == x))
    {
        return DOUBLE_CONSONANT_COST;
    }
    match key_distance(x, y) {
        Some(d) if d <= ADJACENT_KEY_DISTANCE => ADJACENT_KEY_COST,
        Some(d) if d < 1.5 => 0.6,
        Some(d) if d < 2.5 => 0.8,
        _ => 1.0,
    }
}

/// 자모 단위 가중 편집 거리
///
/// 삽입/삭제 비용은 1, 치환 비용은 자판 거리에 따라 0.3~1.
/// 한글이 아닌 문자는 그대로 한 단위로 취급하므로 ASCII 입력에서는 레벤슈타인 거리와 같음
pub fn jamo_edit_distance(a: &str, b: &str) -> f64 {
    let a = decompose_all(a);
    let b = decompose_all(b);
    if a.is_empty() {
        return b.len() as f64;
    }
    if b.is_empty() {
        return a.len() as f64;
    }

    let mut prev: Vec<f64> = (0..=b.len()).map(|j| j as f64).collect();
    let mut curr = vec![0.0; b.len() + 1];
    for (i, &x) in a.iter().enumerate() {
        curr[0] = (i + 1) as f64;
        for (j, &y) in b.iter().enumerate() {
            curr[j + 1] = (prev[j + 1] + 1.0)
                .min(curr[j] + 1.0)
                .min(prev[j] + substitution_cost(x, y));
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// 자판 거리를 반영한 유사도 [0, 1]
pub fn calculate_keyboard_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    let max_len = decompose_all(a).len().max(decompose_all(b).len());
    (1.0 - jamo_edit_distance(a, b) / max_len as f64).clamp(0.0, 1.0)
}

/// 한글 음절 또는 자모가 하나라도 있으면 true
pub fn is_korean_text(s: &str) -> bool {
    s.chars().any(|c| is_hangul(c) || is_jamo(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("same", "same"), 0);
        // 한글 음절은 한 단위
        assert_eq!(levenshtein_distance("사과", "사자"), 1);
    }

    #[test]
    fn test_levenshtein_symmetric() {
        let pairs = [("flaw", "lawn"), ("학교", "학생"), ("", "x"), ("abc", "cba")];
        for (a, b) in pairs {
            assert_eq!(levenshtein_distance(a, b), levenshtein_distance(b, a));
        }
    }

    #[test]
    fn test_similarity() {
        assert_eq!(similarity("apple", "apple"), 1.0);
        assert_eq!(similarity("apple", ""), 0.0);
        assert_eq!(similarity("", "apple"), 0.0);
        assert_eq!(similarity("", ""), 0.0);
        assert!((similarity("abcd", "abce") - 0.75).abs() < 1e-9);
        assert_eq!(similarity("ab", "ba"), similarity("ba", "ab"));
    }

    #[test]
    fn test_jamo_edit_distance() {
        // 가 / 까: ㄱ-ㄲ 치환
        assert!((jamo_edit_distance("가", "까") - 0.3).abs() < 1e-9);
        // ㅂ(q) / ㅈ(w) 인접 키
        assert!((jamo_edit_distance("바", "자") - 0.5).abs() < 1e-9);
        assert_eq!(jamo_edit_distance("사과", "사과"), 0.0);
        assert_eq!(jamo_edit_distance("", "가"), 2.0);
    }

    #[test]
    fn test_keyboard_similarity() {
        assert_eq!(calculate_keyboard_similarity("사과", "사과"), 1.0);
        assert_eq!(calculate_keyboard_similarity("사과", ""), 0.0);
        // ASCII에서는 일반 유사도와 같음
        for (a, b) in [("apple", "appel"), ("hello", "help"), ("abc", "xyz")] {
            assert!((calculate_keyboard_similarity(a, b) - similarity(a, b)).abs() < 1e-9);
        }
        // 오타(ㅏ→ㅓ 인접 키)는 무관한 단어보다 유사
        let typo = calculate_keyboard_similarity("사과", "서과");
        let other = calculate_keyboard_similarity("사과", "학교");
        assert!(typo > other);
    }

    #[test]
    fn test_is_korean_text() {
        assert!(is_korean_text("안녕"));
        assert!(is_korean_text("hello 세상"));
        assert!(is_korean_text("ㅋㅋ"));
        assert!(!is_korean_text("hello"));
        assert!(!is_korean_text(""));
    }
}
