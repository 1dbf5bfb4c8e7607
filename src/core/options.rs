//! 변환 옵션: 자음동화 방향, 단어 유형, 표기 옵션

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 자음동화 방향
///
/// 비음 받침 뒤에 유음 초성이 올 때(ㄴ+ㄹ 등)만 결과가 달라진다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConsonantAssimilation {
    /// 순행 동화: 유음이 비음을 따라감 (신라 -> Sinna)
    Progressive,
    /// 역행 동화: 비음이 유음을 따라감 (신라 -> Silla)
    #[default]
    Regressive,
}

impl FromStr for ConsonantAssimilation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "progressive" => Ok(ConsonantAssimilation::Progressive),
            "regressive" => Ok(ConsonantAssimilation::Regressive),
            _ => Err(format!(
                "Unknown consonant assimilation: {}. Valid options: progressive, regressive",
                s
            )),
        }
    }
}

impl fmt::Display for ConsonantAssimilation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsonantAssimilation::Progressive => write!(f, "Progressive"),
            ConsonantAssimilation::Regressive => write!(f, "Regressive"),
        }
    }
}

/// 단어 유형 (표기 규칙의 예외 적용 범위)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WordCategory {
    /// 일반 단어
    #[default]
    Typical,
    /// 체언 (ㄱ, ㄷ, ㅂ 뒤의 ㅎ을 살려 적음: 묵호 -> Mukho)
    Substantives,
    /// 합성어 (ㄴ 첨가와 구개음화 경계 처리: 색연필 -> Saengnyeonpil)
    Compound,
    /// 행정 구역, 도로명 주소
    District,
    /// 인명 (음절 사이 동화 없음)
    Name,
    /// 관용 표기 성씨를 쓰는 인명 (이 -> Lee, 김 -> Kim)
    NameTypical,
}

impl WordCategory {
    pub const ALL: [WordCategory; 6] = [
        WordCategory::Typical,
        WordCategory::Substantives,
        WordCategory::Compound,
        WordCategory::District,
        WordCategory::Name,
        WordCategory::NameTypical,
    ];

    /// 음절마다 앞뒤 문맥을 끊고 변환하는 인명 유형인지
    pub fn is_name(self) -> bool {
        matches!(self, WordCategory::Name | WordCategory::NameTypical)
    }
}

impl FromStr for WordCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "typical" => Ok(WordCategory::Typical),
            "substantives" => Ok(WordCategory::Substantives),
            "compound" => Ok(WordCategory::Compound),
            "district" => Ok(WordCategory::District),
            "name" => Ok(WordCategory::Name),
            "nametypical" | "name-typical" => Ok(WordCategory::NameTypical),
            _ => Err(format!(
                "Unknown type: {}. Valid options: typical, substantives, compound, district, name, nametypical",
                s
            )),
        }
    }
}

impl fmt::Display for WordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WordCategory::Typical => "Typical",
            WordCategory::Substantives => "Substantives",
            WordCategory::Compound => "Compound",
            WordCategory::District => "District",
            WordCategory::Name => "Name",
            WordCategory::NameTypical => "NameTypical",
        };
        write!(f, "{}", name)
    }
}

/// 음운 규칙과 무관한 표기 옵션
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// 로마자 구간마다 첫 글자를 대문자로
    pub capitalize_first_letter: bool,
    /// 모음 경계가 모호할 때 붙임표 삽입 (해운대 -> Hae-undae)
    pub hyphen_on_ambiguous_vowel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            capitalize_first_letter: true,
            hyphen_on_ambiguous_vowel: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capitalize(mut self, capitalize: bool) -> Self {
        self.capitalize_first_letter = capitalize;
        self
    }

    pub fn with_vowel_hyphen(mut self, hyphen: bool) -> Self {
        self.hyphen_on_ambiguous_vowel = hyphen;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(WordCategory::default(), WordCategory::Typical);
        assert_eq!(ConsonantAssimilation::default(), ConsonantAssimilation::Regressive);

        let options = RenderOptions::default();
        assert!(options.capitalize_first_letter);
        assert!(options.hyphen_on_ambiguous_vowel);
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Name".parse::<WordCategory>(), Ok(WordCategory::Name));
        assert_eq!("substantives".parse::<WordCategory>(), Ok(WordCategory::Substantives));
        assert_eq!("NameTypical".parse::<WordCategory>(), Ok(WordCategory::NameTypical));
        assert!("verb".parse::<WordCategory>().is_err());

        for category in WordCategory::ALL {
            assert_eq!(category.to_string().parse::<WordCategory>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_assimilation() {
        assert_eq!(
            "Progressive".parse::<ConsonantAssimilation>(),
            Ok(ConsonantAssimilation::Progressive)
        );
        assert_eq!(
            "REGRESSIVE".parse::<ConsonantAssimilation>(),
            Ok(ConsonantAssimilation::Regressive)
        );
        assert!("sideways".parse::<ConsonantAssimilation>().is_err());
    }

    #[test]
    fn test_is_name() {
        assert!(WordCategory::Name.is_name());
        assert!(WordCategory::NameTypical.is_name());
        assert!(!WordCategory::Typical.is_name());
        assert!(!WordCategory::District.is_name());
    }

    #[test]
    fn test_builder_pattern() {
        let options = RenderOptions::new()
            .with_capitalize(false)
            .with_vowel_hyphen(false);
        assert!(!options.capitalize_first_letter);
        assert!(!options.hyphen_on_ambiguous_vowel);
    }
}
