//! 단어 유형별 전처리
//!
//! 로마자 변환 전에 문자열을 다시 쓴다.
//!
//! - **인명**: 성과 이름 사이에 공백 삽입 (복성 사전 사용)
//! - **관용 성씨 인명**: 성을 관용 표기로 치환 (이 -> Lee)
//! - **주소**: 행정 구역 단위와 번호 앞에 붙임표 삽입
//!
//! # 사용 예시
//!
//! ```
//! use koroman::normalize::normalize;
//! use koroman::WordCategory;
//!
//! assert_eq!(normalize("제갈공명", WordCategory::Name), "제갈 공명");
//! assert_eq!(normalize("해운대구", WordCategory::District), "해운대-구");
//! assert_eq!(normalize("해운대구", WordCategory::Typical), "해운대구");
//! ```

mod district;
mod name;

use std::borrow::Cow;

use crate::core::options::WordCategory;

// 공개 인터페이스
pub use district::normalize_district;
pub use name::{customary_surname, normalize_name, COMPOUND_SURNAMES};

/// 단어 유형에 맞는 전처리 적용 (해당 없는 유형은 그대로)
pub fn normalize(text: &str, category: WordCategory) -> Cow<'_, str> {
    let rewritten = match category {
        WordCategory::Name => normalize_name(text, false),
        WordCategory::NameTypical => normalize_name(text, true),
        WordCategory::District => normalize_district(text),
        _ => return Cow::Borrowed(text),
    };

    if rewritten != text {
        log::debug!("{} 전처리: {:?} -> {:?}", category, text, rewritten);
    }
    Cow::Owned(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_categories() {
        for category in [
            WordCategory::Typical,
            WordCategory::Substantives,
            WordCategory::Compound,
        ] {
            assert!(matches!(normalize("해운대구", category), Cow::Borrowed("해운대구")));
        }
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(normalize("이지은", WordCategory::Name), "이 지은");
        assert_eq!(normalize("이지은", WordCategory::NameTypical), "Lee 지은");
        assert_eq!(normalize("종로1가", WordCategory::District), "종로 1-가");
    }
}
