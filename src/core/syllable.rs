//! 음절 코덱: 코드포인트 <-> (초성, 중성, 종성)

use crate::core::jamo::{Choseong, Jongseong, Jungseong};
use crate::core::unicode::{compose_syllable, decompose_syllable};
use crate::error::RomanizeError;

/// 완성형 한글 음절 하나 (세 요소가 항상 모두 존재)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syllable {
    pub choseong: Choseong,
    pub jungseong: Jungseong,
    pub jongseong: Jongseong,
}

impl Syllable {
    pub fn new(choseong: Choseong, jungseong: Jungseong, jongseong: Jongseong) -> Self {
        Self {
            choseong,
            jungseong,
            jongseong,
        }
    }

    /// 구성 요소로 음절 합성
    ///
    /// 하나라도 빠지면 `InvalidArgument`
    pub fn synthesize(
        choseong: Option<Choseong>,
        jungseong: Option<Jungseong>,
        jongseong: Option<Jongseong>,
    ) -> Result<Self, RomanizeError> {
        match (choseong, jungseong, jongseong) {
            (Some(cho), Some(jung), Some(jong)) => Ok(Self::new(cho, jung, jong)),
            _ => Err(RomanizeError::InvalidArgument(
                "all syllable components must be present".to_string(),
            )),
        }
    }

    /// 완성형 한글 문자로 분해 (한글 음절이 아니면 None)
    pub fn from_char(c: char) -> Option<Self> {
        let (cho, jung, jong) = decompose_syllable(c)?;
        Some(Self::new(
            Choseong::from_index(cho)?,
            Jungseong::from_index(jung)?,
            Jongseong::from_index(jong)?,
        ))
    }

    /// 완성형 한글 문자
    pub fn to_char(self) -> char {
        // 세 인덱스 모두 열거형 범위 안이므로 항상 Some
        compose_syllable(
            self.choseong.index(),
            self.jungseong.index(),
            self.jongseong.index(),
        )
        .unwrap_or('\u{FFFD}')
    }

    pub fn has_jongseong(self) -> bool {
        !self.jongseong.is_none()
    }
}

/// 입력 문자 하나의 분해 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Character {
    /// 완성형 한글 음절
    Hangul(Syllable),
    /// 그대로 통과시키는 문자
    Other(char),
}

impl Character {
    /// 문자 분해 (한글 음절이 아니면 원래 문자를 보존)
    pub fn decompose(c: char) -> Self {
        match Syllable::from_char(c) {
            Some(syllable) => Character::Hangul(syllable),
            None => Character::Other(c),
        }
    }

    pub fn syllable(self) -> Option<Syllable> {
        match self {
            Character::Hangul(syllable) => Some(syllable),
            Character::Other(_) => None,
        }
    }

    pub fn is_hangul(self) -> bool {
        matches!(self, Character::Hangul(_))
    }

    pub fn to_char(self) -> char {
        match self {
            Character::Hangul(syllable) => syllable.to_char(),
            Character::Other(c) => c,
        }
    }
}
