//! 절 나누기/다시 잇기
//!
//! `.` `!` `?` 뒤에 공백이나 문장 끝이 올 때만 나눕니다 (3.5, e.g. 같은 경우는 유지).

/// 나뉜 절. `terminator`는 원문의 문장 끝 부호 그대로 ("", ".", "?!", "...")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause<'a> {
    pub body: &'a str,
    pub terminator: &'a str,
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// 입력을 절 단위로 나눔. 공백뿐인 절은 버리고, 부호만 있는 절은 body가 빈 채로 남김
pub fn split_clauses(text: &str) -> Vec<Clause<'_>> {
    let mut clauses = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminal(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_terminal(next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        let boundary = chars.peek().map_or(true, |&(_, next)| next.is_whitespace());
        if !boundary {
            continue;
        }
        push_clause(&mut clauses, &text[start..i], &text[i..end]);
        start = end;
    }
    push_clause(&mut clauses, &text[start..], "");
    clauses
}

fn push_clause<'a>(clauses: &mut Vec<Clause<'a>>, body: &'a str, terminator: &'a str) {
    let body = body.trim();
    if body.is_empty() && terminator.is_empty() {
        return;
    }
    clauses.push(Clause { body, terminator });
}

/// 번역된 절에 원문 부호를 붙여 공백 하나로 이음. 번역이 이미 부호로 끝나면 다시 붙이지 않음
pub fn join_clauses<'a>(parts: impl IntoIterator<Item = (String, &'a str)>) -> String {
    parts
        .into_iter()
        .filter_map(|(body, terminator)| {
            let ends_with_mark = body.chars().last().is_some_and(is_terminal);
            let joined = if ends_with_mark {
                body
            } else {
                format!("{}{}", body, terminator)
            };
            (!joined.is_empty()).then_some(joined)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
