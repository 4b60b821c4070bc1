//! 문자 단위 한글 자모 처리
//!
//! 음절 ⇄ (초성, 중성, 종성) 분해/조합과 받침 조작.
//! 한글이 아닌 입력은 항상 `None` 또는 원문 그대로 돌려주며 패닉하지 않습니다.

use super::unicode::{
    choseong_index, compose_syllable, decompose_syllable, is_compat_jamo, jongseong_index,
    jongseong_to_jamo_char, jungseong_index, split_double_trail, CHOSEONG, JUNGSEONG,
};

/// 한 음절의 자모 분해 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JamoTriple {
    /// 초성
    pub lead: char,
    /// 중성
    pub vowel: char,
    /// 종성 (없으면 None)
    pub trail: Option<char>,
}

impl JamoTriple {
    pub fn new(lead: char, vowel: char, trail: Option<char>) -> Self {
        Self { lead, vowel, trail }
    }
}

/// 완성형 한글(가-힣) 여부
pub fn is_hangul(c: char) -> bool {
    decompose_syllable(c).is_some()
}

/// 호환용 낱자모(ㄱ-ㅣ) 여부
pub fn is_jamo(c: char) -> bool {
    is_compat_jamo(c)
}

/// 음절을 자모로 분해. 한글 음절이 아니면 None
pub fn decompose(c: char) -> Option<JamoTriple> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some(JamoTriple {
        lead: CHOSEONG[cho as usize],
        vowel: JUNGSEONG[jung as usize],
        trail: jongseong_to_jamo_char(jong),
    })
}

/// 자모를 음절로 조합. 어느 한 자리라도 유효하지 않으면 None
pub fn compose(triple: &JamoTriple) -> Option<char> {
    let cho = choseong_index(triple.lead)?;
    let jung = jungseong_index(triple.vowel)?;
    let jong = match triple.trail {
        Some(t) => jongseong_index(t)?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 받침이 있는지 확인
pub fn has_batchim(c: char) -> bool {
    matches!(decompose(c), Some(JamoTriple { trail: Some(_), .. }))
}

/// 받침 자모 반환 (없거나 한글이 아니면 None)
pub fn get_batchim(c: char) -> Option<char> {
    decompose(c)?.trail
}

/// 받침 교체. 한글이 아니거나 새 받침이 종성이 될 수 없으면 원래 문자 그대로
pub fn change_batchim(c: char, new_trail: Option<char>) -> char {
    match decompose(c) {
        Some(triple) => compose(&JamoTriple {
            trail: new_trail,
            ..triple
        })
        .unwrap_or(c),
        None => c,
    }
}

/// 받침 제거
pub fn remove_batchim(c: char) -> char {
    change_batchim(c, None)
}

/// 겹받침 분리 (ㄳ → ㄱ, ㅅ). 홑받침이면 None
pub fn split_double_jong(trail: char) -> Option<(char, char)> {
    split_double_trail(trail)
}

/// 문자열 전체를 자모 열로 분해. 한글 음절이 아닌 문자는 그대로 통과
pub fn decompose_all(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match decompose(c) {
            Some(triple) => {
                out.push(triple.lead);
                out.push(triple.vowel);
                if let Some(t) = triple.trail {
                    out.push(t);
                }
            }
            None => out.push(c),
        }
    }
    out
}

/// 초성만 추출 (한글 음절이 아닌 문자는 건너뜀)
pub fn extract_cho(text: &str) -> String {
    text.chars()
        .filter_map(decompose)
        .map(|triple| triple.lead)
        .collect()
}

/// 마지막 글자에 받침이 있는지 확인
pub fn has_last_batchim(text: &str) -> bool {
    text.chars().last().is_some_and(has_batchim)
}

/// 받침 유무에 따라 조사 이형태 선택 (은/는, 이/가, 을/를, 과/와)
///
/// 마지막 글자가 한글이 아니면 받침 없는 형태를 사용
pub fn pick_particle<'a>(word: &str, with_batchim: &'a str, without_batchim: &'a str) -> &'a str {
    if has_last_batchim(word) {
        with_batchim
    } else {
        without_batchim
    }
}

/// 방향 조사 (으)로 선택. 받침 없음 또는 ㄹ 받침이면 "로"
pub fn pick_ro(word: &str) -> &'static str {
    match word.chars().last().and_then(get_batchim) {
        None | Some('ㄹ') => "로",
        Some(_) => "으로",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose() {
        assert_eq!(decompose('한'), Some(JamoTriple::new('ㅎ', 'ㅏ', Some('ㄴ'))));
        assert_eq!(decompose('가'), Some(JamoTriple::new('ㄱ', 'ㅏ', None)));
        assert_eq!(decompose('a'), None);
        assert_eq!(decompose('ㄱ'), None);
    }

    #[test]
    fn test_compose() {
        assert_eq!(compose(&JamoTriple::new('ㅎ', 'ㅏ', Some('ㄴ'))), Some('한'));
        assert_eq!(compose(&JamoTriple::new('ㄱ', 'ㅏ', None)), Some('가'));
        // 초성 자리에 모음
        assert_eq!(compose(&JamoTriple::new('ㅏ', 'ㅏ', None)), None);
        // ㄸ은 종성 불가
        assert_eq!(compose(&JamoTriple::new('ㄱ', 'ㅏ', Some('ㄸ'))), None);
    }

    #[test]
    fn test_round_trip() {
        for c in ['가', '각', '힣', '뷁', '읽', '없'] {
            let triple = decompose(c).unwrap();
            assert_eq!(compose(&triple), Some(c));
        }
    }

    #[test]
    fn test_batchim() {
        assert!(has_batchim('집'));
        assert!(!has_batchim('나'));
        assert!(!has_batchim('x'));
        assert_eq!(get_batchim('집'), Some('ㅂ'));
        assert_eq!(get_batchim('나'), None);

        assert_eq!(change_batchim('한', Some('ㄹ')), '할');
        assert_eq!(change_batchim('a', Some('ㄹ')), 'a');
        assert_eq!(remove_batchim('한'), '하');
        assert_eq!(remove_batchim('하'), '하');
    }

    #[test]
    fn test_split_double_jong() {
        assert_eq!(split_double_jong('ㄳ'), Some(('ㄱ', 'ㅅ')));
        assert_eq!(split_double_jong('ㄺ'), Some(('ㄹ', 'ㄱ')));
        assert_eq!(split_double_jong('ㅄ'), Some(('ㅂ', 'ㅅ')));
        assert_eq!(split_double_jong('ㄱ'), None);
        assert_eq!(split_double_jong('a'), None);
    }

    #[test]
    fn test_decompose_all() {
        assert_eq!(decompose_all("한글"), vec!['ㅎ', 'ㅏ', 'ㄴ', 'ㄱ', 'ㅡ', 'ㄹ']);
        assert_eq!(decompose_all("가a"), vec!['ㄱ', 'ㅏ', 'a']);
        assert!(decompose_all("").is_empty());
    }

    #[test]
    fn test_extract_cho() {
        assert_eq!(extract_cho("한글"), "ㅎㄱ");
        assert_eq!(extract_cho("대한 민국!"), "ㄷㅎㅁㄱ");
        assert_eq!(extract_cho("abc"), "");
    }

    #[test]
    fn test_pick_particle() {
        assert_eq!(pick_particle("사과", "을", "를"), "를");
        assert_eq!(pick_particle("책", "을", "를"), "을");
        assert_eq!(pick_particle("TV", "은", "는"), "는");
        assert_eq!(pick_ro("학교"), "로");
        assert_eq!(pick_ro("서울"), "로");
        assert_eq!(pick_ro("집"), "으로");
    }
}
