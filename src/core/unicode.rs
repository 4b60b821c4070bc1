//! 유니코드 한글 음절 산술
//!
//! 음절 코드포인트와 (초성, 중성, 종성) 인덱스 사이의 변환, 인덱스와 호환용 자모 사이의
//! 조회 테이블만 둡니다. 문자 단위 API는 `core::jamo`가 이 모듈 위에 구현합니다.

use std::ops::RangeInclusive;

/// 완성형 한글 음절 영역 (가-힣)
pub const SYLLABLES: RangeInclusive<u32> = 0xAC00..=0xD7A3;

/// 호환용 자모 영역 (ㄱ-ㅣ)
const COMPAT_JAMO: RangeInclusive<u32> = 0x3131..=0x3163;

const VOWEL_COUNT: u32 = 21;
const TRAIL_COUNT: u32 = 28;

/// 초성 (호환용 자모)
#[rustfmt::skip]
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 (호환용 자모)
#[rustfmt::skip]
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 1~27번 (0번 "받침 없음"은 빠져 있으므로 인덱스는 한 칸 밀림)
#[rustfmt::skip]
const TRAILS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 겹받침 → (앞 받침, 뒤 자음)
#[rustfmt::skip]
const DOUBLE_TRAILS: [(char, char, char); 11] = [
    ('ㄳ', 'ㄱ', 'ㅅ'), ('ㄵ', 'ㄴ', 'ㅈ'), ('ㄶ', 'ㄴ', 'ㅎ'), ('ㄺ', 'ㄹ', 'ㄱ'),
    ('ㄻ', 'ㄹ', 'ㅁ'), ('ㄼ', 'ㄹ', 'ㅂ'), ('ㄽ', 'ㄹ', 'ㅅ'), ('ㄾ', 'ㄹ', 'ㅌ'),
    ('ㄿ', 'ㄹ', 'ㅍ'), ('ㅀ', 'ㄹ', 'ㅎ'), ('ㅄ', 'ㅂ', 'ㅅ'),
];

/// (초성, 중성, 종성) 인덱스로 음절 생성. 종성 0은 받침 없음
pub fn compose_syllable(lead: u32, vowel: u32, trail: u32) -> Option<char> {
    if lead as usize >= CHOSEONG.len() || vowel >= VOWEL_COUNT || trail >= TRAIL_COUNT {
        return None;
    }
    char::from_u32(SYLLABLES.start() + (lead * VOWEL_COUNT + vowel) * TRAIL_COUNT + trail)
}

/// 음절을 (초성, 중성, 종성) 인덱스로 분해
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !SYLLABLES.contains(&code) {
        return None;
    }
    let offset = code - SYLLABLES.start();
    let (rest, trail) = (offset / TRAIL_COUNT, offset % TRAIL_COUNT);
    Some((rest / VOWEL_COUNT, rest % VOWEL_COUNT, trail))
}

fn position_of(table: &[char], c: char) -> Option<u32> {
    table.iter().position(|&j| j == c).map(|i| i as u32)
}

pub fn choseong_index(c: char) -> Option<u32> {
    position_of(&CHOSEONG, c)
}

pub fn jungseong_index(c: char) -> Option<u32> {
    position_of(&JUNGSEONG, c)
}

/// 호환용 자모 → 종성 인덱스 (1~27). 종성이 될 수 없는 자모(ㄸ 등)는 None
pub fn jongseong_index(c: char) -> Option<u32> {
    position_of(&TRAILS, c).map(|i| i + 1)
}

/// 종성 인덱스 → 호환용 자모. 0(받침 없음)이나 범위 밖이면 None
pub fn jongseong_to_jamo_char(trail: u32) -> Option<char> {
    let slot = trail.checked_sub(1)?;
    TRAILS.get(slot as usize).copied()
}

/// 겹받침을 앞 받침과 뒤 자음으로 분리. 홑받침이면 None
pub fn split_double_trail(trail: char) -> Option<(char, char)> {
    DOUBLE_TRAILS
        .iter()
        .find(|(double, _, _)| *double == trail)
        .map(|&(_, first, second)| (first, second))
}

pub fn is_compat_jamo(c: char) -> bool {
    COMPAT_JAMO.contains(&(c as u32))
}
