//! # 문자열 유틸리티
//!
//! 직원 데이터 정규화와 검색 필터 구성에 사용되는 공통 문자열 함수들입니다.

/// 문자열을 타이틀 케이스로 변환
///
/// 알파벳이 아닌 문자(공백, 점, 하이픈 등) 뒤에 오는 글자를 대문자로,
/// 나머지 글자를 소문자로 변환합니다. 직원 이름은 저장 시 이 규칙으로
/// 정규화됩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::title_case;
///
/// assert_eq!(title_case("ann lee"), "Ann Lee");
/// assert_eq!(title_case("mary-jane o.brien"), "Mary-Jane O.Brien");
/// ```
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut prev_is_alpha = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_is_alpha {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            result.push(ch);
            prev_is_alpha = false;
        }
    }

    result
}

/// 문자열 목록의 각 항목에서 앞뒤 공백 제거
///
/// 직원 스킬 목록은 저장 전에 이 함수로 정리됩니다.
pub fn trim_all(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_string()).collect()
}

/// 정규식 메타문자 이스케이프
///
/// 검색어를 MongoDB 정규식 필터에 넣기 전에 호출합니다.
/// 사용자 입력이 패턴으로 해석되는 것을 막습니다.
pub fn escape_regex(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for ch in value.chars() {
        if r"\.^$|?*+()[]{}".contains(ch) {
            result.push('\\');
        }
        result.push(ch);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_basic() {
        assert_eq!(title_case("ann lee"), "Ann Lee");
        assert_eq!(title_case("JOHN SMITH"), "John Smith");
        assert_eq!(title_case("carol"), "Carol");
    }

    #[test]
    fn test_title_case_separators() {
        // 점과 하이픈 뒤의 글자도 대문자로 처리된다
        assert_eq!(title_case("mary-jane o.brien"), "Mary-Jane O.Brien");
        assert_eq!(title_case("jean  paul"), "Jean  Paul");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("   "), "   ");
    }

    #[test]
    fn test_trim_all() {
        let skills = vec!["go".to_string(), " Rust ".to_string(), "\tpython\n".to_string()];
        assert_eq!(trim_all(&skills), vec!["go", "Rust", "python"]);
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("c++"), r"c\+\+");
        assert_eq!(escape_regex(".net"), r"\.net");
        assert_eq!(escape_regex("plain"), "plain");
        assert_eq!(escape_regex("a(b)c"), r"a\(b\)c");
    }
}
