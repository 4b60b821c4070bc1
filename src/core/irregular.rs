//! 용언 활용 규칙 (규칙 축약 + 불규칙 활용)
//!
//! 어간 + 아/어 계열 어미의 결합(가+아요 → 가요, 보+았어요 → 봤어요)과
//! ㄷ/ㅂ/ㅅ/ㅎ/르/으 불규칙 활용, 그리고 표면형에서 어간을 되살리는 역연산을 제공합니다.

use serde::{Deserialize, Serialize};

use super::jamo::{change_batchim, compose, decompose, JamoTriple};

/// 불규칙 활용 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrregularType {
    /// 듣 + 어요 → 들어요
    #[serde(rename = "ㄷ")]
    Dieut,
    /// 춥 + 어요 → 추워요, 돕 + 아요 → 도와요
    #[serde(rename = "ㅂ")]
    Bieup,
    /// 짓 + 어요 → 지어요
    #[serde(rename = "ㅅ")]
    Siot,
    /// 파랗 + 아요 → 파래요
    #[serde(rename = "ㅎ")]
    Hieut,
    /// 모르 + 아요 → 몰라요
    #[serde(rename = "르")]
    Reu,
    /// 쓰 + 어요 → 써요
    #[serde(rename = "으")]
    Eu,
}

impl IrregularType {
    pub fn symbol(&self) -> &'static str {
        match self {
            IrregularType::Dieut => "ㄷ",
            IrregularType::Bieup => "ㅂ",
            IrregularType::Siot => "ㅅ",
            IrregularType::Hieut => "ㅎ",
            IrregularType::Reu => "르",
            IrregularType::Eu => "으",
        }
    }
}

/// 표면형에서 되살린 어간 후보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemCandidate {
    pub stem: String,
    /// 불규칙 활용으로 되살린 경우 그 유형
    pub irregular: Option<IrregularType>,
}

impl StemCandidate {
    fn regular(stem: String) -> Self {
        Self {
            stem,
            irregular: None,
        }
    }

    fn irregular(stem: String, kind: IrregularType) -> Self {
        Self {
            stem,
            irregular: Some(kind),
        }
    }
}

/// 어미 첫 음절이 ㅇ으로 시작하는 모음 어미면 (첫 음절 자모, 나머지) 반환
///
/// "았어요" → (ㅇ ㅏ ㅆ, "어요")
pub fn vowel_ending_head(ending: &str) -> Option<(JamoTriple, &str)> {
    let first = ending.chars().next()?;
    let triple = decompose(first)?;
    if triple.lead != 'ㅇ' {
        return None;
    }
    Some((triple, &ending[first.len_utf8()..]))
}

/// 모음조화: 어간 끝 모음이 양성(ㅏ, ㅗ)이면 true
///
/// 끝 음절 모음이 ㅡ이고 앞 음절이 있으면 앞 음절 모음을 봄 (바쁘 → 바)
pub fn is_bright_stem(stem: &str) -> bool {
    let vowels: Vec<char> = stem.chars().filter_map(decompose).map(|t| t.vowel).collect();
    let pick = match vowels.as_slice() {
        [] => return false,
        [.., prev, 'ㅡ'] => *prev,
        [.., last] => *last,
    };
    matches!(pick, 'ㅏ' | 'ㅗ' | 'ㅑ' | 'ㅘ')
}

/// 어/었 계열 어미를 어간에 맞게 아/았으로 바꿈
pub fn harmonize_ending(stem: &str, ending: &str) -> String {
    let Some((head, rest)) = vowel_ending_head(ending) else {
        return ending.to_string();
    };
    if head.vowel != 'ㅓ' || !is_bright_stem(stem) {
        return ending.to_string();
    }
    match compose(&JamoTriple { vowel: 'ㅏ', ..head }) {
        Some(c) => format!("{}{}", c, rest),
        None => ending.to_string(),
    }
}

/// 규칙 활용: 받침 없는 어간과 아/어 어미의 모음 축약
///
/// 가+아요 → 가요, 보+았어요 → 봤어요, 마시+어요 → 마셔요, 하+여요 → 해요
pub fn attach_ending(stem: &str, ending: &str) -> String {
    let concat = || format!("{}{}", stem, ending);
    let Some(last) = stem.chars().last() else {
        return ending.to_string();
    };
    let Some((head, rest)) = vowel_ending_head(ending) else {
        return concat();
    };
    let Some(st) = decompose(last) else {
        return concat();
    };
    if st.trail.is_some() {
        return concat();
    }
    let prefix = &stem[..stem.len() - last.len_utf8()];

    let merged = if last == '하' {
        Some('ㅐ')
    } else {
        match (st.vowel, head.vowel) {
            ('ㅏ', 'ㅏ') => Some('ㅏ'),
            ('ㅓ', 'ㅓ') => Some('ㅓ'),
            ('ㅗ', 'ㅏ') => Some('ㅘ'),
            ('ㅜ', 'ㅓ') => Some('ㅝ'),
            ('ㅣ', 'ㅓ') => Some('ㅕ'),
            ('ㅚ', 'ㅓ') => Some('ㅙ'),
            ('ㅐ', 'ㅓ') => Some('ㅐ'),
            ('ㅔ', 'ㅓ') => Some('ㅔ'),
            ('ㅕ', 'ㅓ') => Some('ㅕ'),
            ('ㅡ', v @ ('ㅏ' | 'ㅓ')) => Some(v),
            _ => None,
        }
    };

    let Some(vowel) = merged else {
        return concat();
    };
    match compose(&JamoTriple::new(st.lead, vowel, head.trail)) {
        Some(c) => format!("{}{}{}", prefix, c, rest),
        None => concat(),
    }
}

/// 불규칙 활용 적용. 어미가 모음(ㅇ)으로 시작하지 않으면 단순 결합
pub fn apply_irregular(stem: &str, kind: IrregularType, ending: &str) -> String {
    let concat = || format!("{}{}", stem, ending);
    let Some((head, rest)) = vowel_ending_head(ending) else {
        return concat();
    };
    let Some(last) = stem.chars().last() else {
        return ending.to_string();
    };
    let Some(st) = decompose(last) else {
        return concat();
    };
    let prefix = &stem[..stem.len() - last.len_utf8()];

    match kind {
        IrregularType::Dieut if st.trail == Some('ㄷ') => {
            format!("{}{}{}", prefix, change_batchim(last, Some('ㄹ')), ending)
        }
        IrregularType::Bieup if st.trail == Some('ㅂ') => {
            let vowel = if head.vowel == 'ㅏ' { 'ㅘ' } else { 'ㅝ' };
            match compose(&JamoTriple::new('ㅇ', vowel, head.trail)) {
                Some(c) => format!("{}{}{}{}", prefix, change_batchim(last, None), c, rest),
                None => concat(),
            }
        }
        IrregularType::Siot if st.trail == Some('ㅅ') => {
            format!("{}{}{}", prefix, change_batchim(last, None), ending)
        }
        IrregularType::Hieut if st.trail == Some('ㅎ') => {
            let vowel = match st.vowel {
                'ㅏ' => 'ㅐ',
                'ㅓ' => 'ㅔ',
                other => other,
            };
            match compose(&JamoTriple::new(st.lead, vowel, head.trail)) {
                Some(c) => format!("{}{}{}", prefix, c, rest),
                None => concat(),
            }
        }
        IrregularType::Reu if last == '르' => {
            let Some(before) = prefix.chars().last() else {
                return concat();
            };
            let head_prefix = &prefix[..prefix.len() - before.len_utf8()];
            let with_rieul = change_batchim(before, Some('ㄹ'));
            match compose(&JamoTriple::new('ㄹ', head.vowel, head.trail)) {
                Some(c) => format!("{}{}{}{}", head_prefix, with_rieul, c, rest),
                None => concat(),
            }
        }
        IrregularType::Eu if st.vowel == 'ㅡ' && st.trail.is_none() => {
            match compose(&JamoTriple::new(st.lead, head.vowel, head.trail)) {
                Some(c) => format!("{}{}{}", prefix, c, rest),
                None => concat(),
            }
        }
        _ => attach_ending(stem, ending),
    }
}

/// 어간 + 어/었 계열 기본 어미를 모음조화, 축약, 불규칙까지 반영해 활용
///
/// `ending`은 어두운 형태("어요", "었어요")로 넘기면 어간에 맞게 조정됨
pub fn conjugate(stem: &str, ending: &str, irregular: Option<IrregularType>) -> String {
    let ending = harmonize_ending(stem, ending);
    match irregular {
        Some(kind) => apply_irregular(stem, kind, &ending),
        None => attach_ending(stem, &ending),
    }
}

/// 어미가 축약 없이 붙은 표면 어간에서 불규칙 기본형 후보 (들 → 듣, 지 → 짓)
pub fn restore_uncontracted(surface_stem: &str) -> Vec<StemCandidate> {
    let mut out = Vec::new();
    let Some(last) = surface_stem.chars().last() else {
        return out;
    };
    let Some(st) = decompose(last) else {
        return out;
    };
    let prefix = &surface_stem[..surface_stem.len() - last.len_utf8()];
    match st.trail {
        Some('ㄹ') => out.push(StemCandidate::irregular(
            format!("{}{}", prefix, change_batchim(last, Some('ㄷ'))),
            IrregularType::Dieut,
        )),
        None => out.push(StemCandidate::irregular(
            format!("{}{}", prefix, change_batchim(last, Some('ㅅ'))),
            IrregularType::Siot,
        )),
        _ => {}
    }
    out
}

/// 어미 첫 음절이 어간에 축약된 표면형에서 어간 후보를 되살림
///
/// `surface`는 어미의 나머지 부분을 떼어낸 앞부분이며 마지막 음절이 축약 음절.
/// 예: ("봤", ㅏ, ㅆ) → 보, ("추워", ㅓ, 없음) → 춥(ㅂ), ("몰라", ㅏ, 없음) → 모르(르)
pub fn restore_contracted(surface: &str, head_vowel: char, head_trail: Option<char>) -> Vec<StemCandidate> {
    let mut out = Vec::new();
    let Some(last) = surface.chars().last() else {
        return out;
    };
    let Some(st) = decompose(last) else {
        return out;
    };
    if st.trail != head_trail {
        return out;
    }
    let prefix = &surface[..surface.len() - last.len_utf8()];
    let with_vowel = |vowel: char, trail: Option<char>| {
        compose(&JamoTriple::new(st.lead, vowel, trail)).map(|c| format!("{}{}", prefix, c))
    };

    // 하 + 여 → 해
    if st.lead == 'ㅎ' && st.vowel == 'ㅐ' {
        out.push(StemCandidate::regular(format!("{}하", prefix)));
    }

    // 규칙 축약의 역
    let regular_vowels: &[char] = match st.vowel {
        'ㅏ' if head_vowel == 'ㅏ' => &['ㅏ'],
        'ㅓ' if head_vowel == 'ㅓ' => &['ㅓ'],
        'ㅘ' => &['ㅗ'],
        'ㅝ' => &['ㅜ'],
        'ㅕ' => &['ㅣ', 'ㅕ'],
        'ㅙ' => &['ㅚ'],
        'ㅐ' => &['ㅐ'],
        'ㅔ' => &['ㅔ'],
        _ => &[],
    };
    for &vowel in regular_vowels {
        if let Some(stem) = with_vowel(vowel, None) {
            out.push(StemCandidate::regular(stem));
        }
    }

    // 으 탈락: 써 ← 쓰, 바빠 ← 바쁘
    if st.vowel == head_vowel {
        if let Some(stem) = with_vowel('ㅡ', None) {
            out.push(StemCandidate::irregular(stem, IrregularType::Eu));
        }
    }

    // ㅂ 불규칙: 도와 ← 돕, 추워 ← 춥
    if st.lead == 'ㅇ' && matches!(st.vowel, 'ㅘ' | 'ㅝ') {
        if let Some(before) = prefix.chars().last() {
            if decompose(before).is_some_and(|t| t.trail.is_none()) {
                let head_prefix = &prefix[..prefix.len() - before.len_utf8()];
                out.push(StemCandidate::irregular(
                    format!("{}{}", head_prefix, change_batchim(before, Some('ㅂ'))),
                    IrregularType::Bieup,
                ));
            }
        }
    }

    // ㅎ 불규칙: 파래 ← 파랗
    let hieut_vowel = match st.vowel {
        'ㅐ' => Some('ㅏ'),
        'ㅔ' => Some('ㅓ'),
        _ => None,
    };
    if let Some(vowel) = hieut_vowel {
        if let Some(stem) = with_vowel(vowel, Some('ㅎ')) {
            out.push(StemCandidate::irregular(stem, IrregularType::Hieut));
        }
    }

    // 르 불규칙: 몰라 ← 모르
    if st.lead == 'ㄹ' && st.vowel == head_vowel {
        if let Some(before) = prefix.chars().last() {
            if decompose(before).is_some_and(|t| t.trail == Some('ㄹ')) {
                let head_prefix = &prefix[..prefix.len() - before.len_utf8()];
                out.push(StemCandidate::irregular(
                    format!("{}{}르", head_prefix, change_batchim(before, None)),
                    IrregularType::Reu,
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_harmony() {
        assert!(is_bright_stem("가"));
        assert!(is_bright_stem("보"));
        assert!(is_bright_stem("바쁘"));
        assert!(!is_bright_stem("먹"));
        assert!(!is_bright_stem("쓰"));
        assert_eq!(harmonize_ending("가", "었어요"), "았어요");
        assert_eq!(harmonize_ending("먹", "었어요"), "었어요");
        assert_eq!(harmonize_ending("먹", "습니다"), "습니다");
    }

    #[test]
    fn test_regular_contraction() {
        assert_eq!(conjugate("가", "어요", None), "가요");
        assert_eq!(conjugate("가", "었어요", None), "갔어요");
        assert_eq!(conjugate("보", "어요", None), "봐요");
        assert_eq!(conjugate("보", "었어요", None), "봤어요");
        assert_eq!(conjugate("마시", "어요", None), "마셔요");
        assert_eq!(conjugate("주", "었어요", None), "줬어요");
        assert_eq!(conjugate("공부하", "어요", None), "공부해요");
        assert_eq!(conjugate("공부하", "었어요", None), "공부했어요");
        assert_eq!(conjugate("먹", "어요", None), "먹어요");
        assert_eq!(conjugate("읽", "었어요", None), "읽었어요");
    }

    #[test]
    fn test_irregular_conjugation() {
        assert_eq!(conjugate("듣", "어요", Some(IrregularType::Dieut)), "들어요");
        assert_eq!(conjugate("듣", "고", Some(IrregularType::Dieut)), "듣고");
        assert_eq!(conjugate("춥", "어요", Some(IrregularType::Bieup)), "추워요");
        assert_eq!(conjugate("돕", "어요", Some(IrregularType::Bieup)), "도와요");
        assert_eq!(conjugate("짓", "어요", Some(IrregularType::Siot)), "지어요");
        assert_eq!(conjugate("파랗", "어요", Some(IrregularType::Hieut)), "파래요");
        assert_eq!(conjugate("모르", "어요", Some(IrregularType::Reu)), "몰라요");
        assert_eq!(conjugate("부르", "었어요", Some(IrregularType::Reu)), "불렀어요");
        assert_eq!(conjugate("쓰", "어요", Some(IrregularType::Eu)), "써요");
        assert_eq!(conjugate("바쁘", "어요", Some(IrregularType::Eu)), "바빠요");
    }

    #[test]
    fn test_restore_contracted() {
        let stems = |surface: &str, vowel: char, trail: Option<char>| -> Vec<String> {
            restore_contracted(surface, vowel, trail)
                .into_iter()
                .map(|c| c.stem)
                .collect()
        };
        assert!(stems("봤", 'ㅏ', Some('ㅆ')).contains(&"보".to_string()));
        assert!(stems("가", 'ㅏ', None).contains(&"가".to_string()));
        assert!(stems("마셔", 'ㅓ', None).contains(&"마시".to_string()));
        assert!(stems("공부해", 'ㅓ', None).contains(&"공부하".to_string()));
        assert!(stems("추워", 'ㅓ', None).contains(&"춥".to_string()));
        assert!(stems("몰라", 'ㅏ', None).contains(&"모르".to_string()));
        assert!(stems("파래", 'ㅏ', None).contains(&"파랗".to_string()));
        assert!(stems("써", 'ㅓ', None).contains(&"쓰".to_string()));
        // 받침 불일치
        assert!(stems("가", 'ㅏ', Some('ㅆ')).is_empty());
    }

    #[test]
    fn test_restore_uncontracted() {
        let found = restore_uncontracted("들");
        assert_eq!(
            found,
            vec![StemCandidate {
                stem: "듣".to_string(),
                irregular: Some(IrregularType::Dieut)
            }]
        );
        assert_eq!(restore_uncontracted("지")[0].stem, "짓");
        assert!(restore_uncontracted("먹").is_empty());
    }

    #[test]
    fn test_symbol() {
        assert_eq!(IrregularType::Reu.symbol(), "르");
        let json = serde_json::to_string(&IrregularType::Bieup).unwrap();
        assert_eq!(json, "\"ㅂ\"");
    }
}
