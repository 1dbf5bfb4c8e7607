//! 인명 전처리: 성과 이름 분리

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// 두 글자 성씨 (복성)
pub const COMPOUND_SURNAMES: [&str; 16] = [
    "강전", "남궁", "독고", "동방", "등정", "망절", "무본", "사공", "서문", "선우", "소봉", "어금",
    "장곡", "제갈", "황목", "황보",
];

/// 앞 공백 + 복성 + 이름(1~10자)
static COMPOUND_SURNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"^(\s*)({})(.{{1,10}})$", COMPOUND_SURNAMES.join("|"));
    Regex::new(&pattern).unwrap()
});

/// 관용 표기 성씨
static CUSTOMARY_SURNAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("가", "Ka"),
        ("간", "Kan"),
        ("갈", "Kal"),
        ("감", "Kam"),
        ("강", "Kang"),
        ("강전", "Kangjun"),
        ("견", "Kyun"),
        ("경", "Kyung"),
        ("계", "Kye"),
        ("고", "Ko"),
        ("공", "Kong"),
        ("곽", "Kwak"),
        ("구", "Koo"),
        ("국", "Kook"),
        ("군", "Kun"),
        ("궁", "Koong"),
        ("궉", "Kwok"),
        ("권", "Kwon"),
        ("근", "Keun"),
        ("금", "Keum"),
        ("기", "Ki"),
        ("길", "Kil"),
        ("김", "Kim"),
        ("노", "Noh"),
        ("두", "Doo"),
        ("란", "Lan"),
        ("뢰", "Loi"),
        ("루", "Lu"),
        ("망절", "Mangjul"),
        ("명", "Myung"),
        ("문", "Moon"),
        ("박", "Park"),
        ("변", "Byun"),
        ("부", "Boo"),
        ("선", "Sun"),
        ("선우", "Sunwoo"),
        ("성", "Sung"),
        ("순", "Soon"),
        ("신", "Shin"),
        ("심", "Shim"),
        ("아", "Ah"),
        ("어금", "Eokum"),
        ("오", "Oh"),
        ("우", "Woo"),
        ("운", "Woon"),
        ("유", "Yoo"),
        ("윤", "Yoon"),
        ("이", "Lee"),
        ("임", "Lim"),
        ("정", "Jung"),
        ("조", "Cho"),
        ("주", "Joo"),
        ("준", "June"),
        ("즙", "Chup"),
        ("최", "Choi"),
        ("편", "Pyun"),
        ("평", "Pyung"),
        ("풍", "Poong"),
        ("현", "Hyun"),
        ("형", "Hyung"),
        ("흥", "Hong"),
    ]
    .into_iter()
    .collect()
});

/// 성씨의 관용 로마자 표기 (사전에 없으면 None)
pub fn customary_surname(surname: &str) -> Option<&'static str> {
    CUSTOMARY_SURNAMES.get(surname).copied()
}

/// 성과 이름 사이에 공백 삽입
///
/// - customary: 성을 관용 표기로 치환 (사전에 없는 성은 한글 그대로)
/// - 두 글자 미만이면 그대로 반환
pub fn normalize_name(text: &str, customary: bool) -> String {
    let pick = |surname: &str| -> String {
        if customary {
            customary_surname(surname).unwrap_or(surname).to_string()
        } else {
            surname.to_string()
        }
    };

    if let Some(caps) = COMPOUND_SURNAME_RE.captures(text) {
        return format!("{}{} {}", &caps[1], pick(&caps[2]), &caps[3]);
    }

    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    if rest.is_empty() {
        return text.to_string();
    }

    format!("{} {}", pick(&first.to_string()), rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_surname() {
        assert_eq!(normalize_name("이지은", false), "이 지은");
        assert_eq!(normalize_name("김민준", false), "김 민준");
    }

    #[test]
    fn test_compound_surname() {
        assert_eq!(normalize_name("제갈공명", false), "제갈 공명");
        assert_eq!(normalize_name("  남궁민", false), "  남궁 민");
        assert_eq!(normalize_name("선우용녀", false), "선우 용녀");
    }

    #[test]
    fn test_compound_surname_requires_given_name() {
        // 복성만 있으면 첫 글자를 성으로 취급
        assert_eq!(normalize_name("남궁", false), "남 궁");
    }

    #[test]
    fn test_customary_surname() {
        assert_eq!(normalize_name("이지은", true), "Lee 지은");
        assert_eq!(normalize_name("박서준", true), "Park 서준");
        assert_eq!(normalize_name("선우용녀", true), "Sunwoo 용녀");
        // 사전에 없는 성은 한글 그대로
        assert_eq!(normalize_name("황보관", true), "황보 관");
        assert_eq!(normalize_name("탁재훈", true), "탁 재훈");
    }

    #[test]
    fn test_short_input() {
        assert_eq!(normalize_name("", false), "");
        assert_eq!(normalize_name("김", false), "김");
        assert_eq!(normalize_name("김", true), "김");
    }

    #[test]
    fn test_customary_lookup() {
        assert_eq!(customary_surname("김"), Some("Kim"));
        assert_eq!(customary_surname("최"), Some("Choi"));
        assert_eq!(customary_surname("탁"), None);
    }
}
