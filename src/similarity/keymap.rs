//! 두벌식 자판 키 배치 (키보드 거리 계산용)
//!
//! 각 자모가 놓인 QWERTY 키와 그 키의 좌표를 제공합니다.
//! 쌍자음은 Shift 조합이므로 홑자음과 같은 키 위치를 씁니다.

/// 자모 → 두벌식 영문 키 (복합 모음/겹받침은 여러 키)
pub fn jamo_keys(jamo: char) -> Option<&'static str> {
    let keys = match jamo {
        // 자음
        'ㄱ' => "r",
        'ㄲ' => "R",
        'ㄴ' => "s",
        'ㄷ' => "e",
        'ㄸ' => "E",
        'ㄹ' => "f",
        'ㅁ' => "a",
        'ㅂ' => "q",
        'ㅃ' => "Q",
        'ㅅ' => "t",
        'ㅆ' => "T",
        'ㅇ' => "d",
        'ㅈ' => "w",
        'ㅉ' => "W",
        'ㅊ' => "c",
        'ㅋ' => "z",
        'ㅌ' => "x",
        'ㅍ' => "v",
        'ㅎ' => "g",
        // 겹받침
        'ㄳ' => "rt",
        'ㄵ' => "sw",
        'ㄶ' => "sg",
        'ㄺ' => "fr",
        'ㄻ' => "fa",
        'ㄼ' => "fq",
        'ㄽ' => "ft",
        'ㄾ' => "fx",
        'ㄿ' => "fv",
        'ㅀ' => "fg",
        'ㅄ' => "qt",
        // 모음
        'ㅏ' => "k",
        'ㅐ' => "o",
        'ㅑ' => "i",
        'ㅒ' => "O",
        'ㅓ' => "j",
        'ㅔ' => "p",
        'ㅕ' => "u",
        'ㅖ' => "P",
        'ㅗ' => "h",
        'ㅘ' => "hk",
        'ㅙ' => "ho",
        'ㅚ' => "hl",
        'ㅛ' => "y",
        'ㅜ' => "n",
        'ㅝ' => "nj",
        'ㅞ' => "np",
        'ㅟ' => "nl",
        'ㅠ' => "b",
        'ㅡ' => "m",
        'ㅢ' => "ml",
        'ㅣ' => "l",
        _ => return None,
    };
    Some(keys)
}

/// QWERTY 키 좌표 (행, 열). 행마다 실제 자판처럼 엇갈림 오프셋 적용
pub fn key_position(key: char) -> Option<(f64, f64)> {
    const ROWS: [(&str, f64); 3] = [("qwertyuiop", 0.0), ("asdfghjkl", 0.25), ("zxcvbnm", 0.75)];
    let key = key.to_ascii_lowercase();
    ROWS.iter().enumerate().find_map(|(row, (letters, offset))| {
        letters
            .find(key)
            .map(|col| (row as f64, col as f64 + offset))
    })
}

/// 자모가 놓인 키의 좌표 (복합 자모는 첫 키 기준)
pub fn jamo_position(jamo: char) -> Option<(f64, f64)> {
    jamo_keys(jamo)?.chars().next().and_then(key_position)
}

/// 두 자모 키 사이의 유클리드 거리
pub fn key_distance(a: char, b: char) -> Option<f64> {
    let (r1, c1) = jamo_position(a)?;
    let (r2, c2) = jamo_position(b)?;
    Some(((r1 - r2).powi(2) + (c1 - c2).powi(2)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jamo_keys() {
        assert_eq!(jamo_keys('ㄱ'), Some("r"));
        assert_eq!(jamo_keys('ㄲ'), Some("R"));
        assert_eq!(jamo_keys('ㅘ'), Some("hk"));
        assert_eq!(jamo_keys('ㅄ'), Some("qt"));
        assert_eq!(jamo_keys('a'), None);
    }

    #[test]
    fn test_key_position() {
        assert_eq!(key_position('q'), Some((0.0, 0.0)));
        assert_eq!(key_position('a'), Some((1.0, 0.25)));
        assert_eq!(key_position('Z'), Some((2.0, 0.75)));
        assert_eq!(key_position('1'), None);
    }

    #[test]
    fn test_key_distance() {
        // ㄱ(r)와 ㄲ(R)은 같은 키
        assert_eq!(key_distance('ㄱ', 'ㄲ'), Some(0.0));
        // ㅂ(q) - ㅈ(w) 나란히 붙은 키
        assert_eq!(key_distance('ㅂ', 'ㅈ'), Some(1.0));
        // ㅂ(q) - ㅣ(l) 멀리 떨어진 키
        assert!(key_distance('ㅂ', 'ㅣ').unwrap() > 2.5);
        assert_eq!(key_distance('ㄱ', 'x'), None);
    }
}
