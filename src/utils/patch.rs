//! # 머지 패치 유틸리티
//!
//! 부분 업데이트 요청에서 "필드가 생략됨"과 "필드가 명시적으로 null"을
//! 구분하기 위한 serde 헬퍼입니다.
//!
//! `Option<T>` 하나로는 두 경우가 구분되지 않으므로 `Option<Option<T>>`를
//! 사용합니다:
//!
//! - 필드 생략           → `None`              (변경하지 않음)
//! - `"field": null`     → `Some(None)`        (명시적 null, 검증 에러로 거부)
//! - `"field": value`    → `Some(Some(value))` (해당 값으로 변경)

use serde::{Deserialize, Deserializer};

/// 부분 업데이트 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_patch_field")]`와 함께
/// `Option<Option<T>>` 타입 필드에 사용합니다. `default`가 생략된 필드를
/// `None`으로 처리하고, 이 함수가 존재하는 필드를 `Some(...)`으로 감쌉니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct UpdateRequest {
///     #[serde(default, deserialize_with = "deserialize_patch_field")]
///     salary: Option<Option<f64>>,
/// }
///
/// // JSON: {}                 → salary == None
/// // JSON: {"salary": null}   → salary == Some(None)
/// // JSON: {"salary": 5000.0} → salary == Some(Some(5000.0))
/// ```
pub fn deserialize_patch_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_patch_field")]
        salary: Option<Option<f64>>,
    }

    #[test]
    fn test_omitted_field_is_none() {
        let parsed: TestStruct = serde_json::from_str("{}").unwrap();
        assert!(parsed.salary.is_none());
    }

    #[test]
    fn test_explicit_null_is_some_none() {
        let parsed: TestStruct = serde_json::from_str(r#"{"salary": null}"#).unwrap();
        assert_eq!(parsed.salary, Some(None));
    }

    #[test]
    fn test_value_is_some_some() {
        let parsed: TestStruct = serde_json::from_str(r#"{"salary": 5000.0}"#).unwrap();
        assert_eq!(parsed.salary, Some(Some(5000.0)));
    }
}
