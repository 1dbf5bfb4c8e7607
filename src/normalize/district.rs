//! 주소 전처리: 행정 구역 단위와 도로 번호 앞 붙임표

use std::sync::LazyLock;

use regex::Regex;

/// 도로명 + 번호 + 길 (강남대로 123길)
static NUMBERED_ROAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.{0,20}?)(대?로)\s*([0-9]+[가번]?)(길)(\s*)$").unwrap()
});

/// 번호 + 단위 (종로1가, 12단지)
static NUMBERED_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.{0,20}?)([0-9]+)\s*(가길|가|번길|로|단지|동)(\s*)$").unwrap()
});

/// 행정 구역 단위 (특별시, 구, 읍, 로 ...)
static ADMIN_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(.{1,20}?)(특별자치도|특별자치시|특별시|광역시|대로|구|군|도|동|리|면|시|읍|가|길|로)(\s*)$",
    )
    .unwrap()
});

/// 주소 단위 앞에 붙임표 삽입 (해당 패턴이 없으면 그대로)
///
/// 패턴은 도로 번호, 번호 단위, 행정 구역 순으로 검사한다.
pub fn normalize_district(text: &str) -> String {
    if let Some(caps) = NUMBERED_ROAD_RE.captures(text) {
        return format!(
            "{}-{} {}-{}{}",
            &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
        );
    }

    if let Some(caps) = NUMBERED_UNIT_RE.captures(text) {
        let prefix = &caps[1];
        let separator = if prefix.is_empty() || prefix.ends_with(char::is_whitespace) {
            ""
        } else {
            " "
        };
        return format!("{}{}{}-{}", prefix, separator, &caps[2], &caps[3]);
    }

    if let Some(caps) = ADMIN_UNIT_RE.captures(text) {
        return format!("{}-{}{}", &caps[1], &caps[2], &caps[3]);
    }

    text.to_string()
}
