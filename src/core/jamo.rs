//! 초성/중성/종성 자모 타입
//!
//! 각 열거형의 선언 순서는 유니코드 한글 음절 조합 순서와 같으므로
//! `index()` 값을 그대로 `compose_syllable`에 넘길 수 있다.

/// 초성 (19개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choseong {
    /// ㄱ
    Giyeok,
    /// ㄲ
    SsangGiyeok,
    /// ㄴ
    Nieun,
    /// ㄷ
    Digeut,
    /// ㄸ
    SsangDigeut,
    /// ㄹ
    Rieul,
    /// ㅁ
    Mieum,
    /// ㅂ
    Bieup,
    /// ㅃ
    SsangBieup,
    /// ㅅ
    Siot,
    /// ㅆ
    SsangSiot,
    /// ㅇ (음가 없는 자리채움 자음)
    Ieung,
    /// ㅈ
    Jieut,
    /// ㅉ
    SsangJieut,
    /// ㅊ
    Chieut,
    /// ㅋ
    Kieuk,
    /// ㅌ
    Tieut,
    /// ㅍ
    Pieup,
    /// ㅎ
    Hieut,
}

impl Choseong {
    pub const ALL: [Choseong; 19] = [
        Choseong::Giyeok,
        Choseong::SsangGiyeok,
        Choseong::Nieun,
        Choseong::Digeut,
        Choseong::SsangDigeut,
        Choseong::Rieul,
        Choseong::Mieum,
        Choseong::Bieup,
        Choseong::SsangBieup,
        Choseong::Siot,
        Choseong::SsangSiot,
        Choseong::Ieung,
        Choseong::Jieut,
        Choseong::SsangJieut,
        Choseong::Chieut,
        Choseong::Kieuk,
        Choseong::Tieut,
        Choseong::Pieup,
        Choseong::Hieut,
    ];

    /// 초성 인덱스 (0~18)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 호환용 자모 문자
    pub fn jamo(self) -> char {
        #[rustfmt::skip]
        const JAMO: [char; 19] = [
            'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
            'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
        ];
        JAMO[self as usize]
    }
}

/// 중성 (21개)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jungseong {
    /// ㅏ
    A,
    /// ㅐ
    Ae,
    /// ㅑ
    Ya,
    /// ㅒ
    Yae,
    /// ㅓ
    Eo,
    /// ㅔ
    E,
    /// ㅕ
    Yeo,
    /// ㅖ
    Ye,
    /// ㅗ
    O,
    /// ㅘ
    Wa,
    /// ㅙ
    Wae,
    /// ㅚ
    Oe,
    /// ㅛ
    Yo,
    /// ㅜ
    U,
    /// ㅝ
    Wo,
    /// ㅞ
    We,
    /// ㅟ
    Wi,
    /// ㅠ
    Yu,
    /// ㅡ
    Eu,
    /// ㅢ
    Ui,
    /// ㅣ
    I,
}

impl Jungseong {
    pub const ALL: [Jungseong; 21] = [
        Jungseong::A,
        Jungseong::Ae,
        Jungseong::Ya,
        Jungseong::Yae,
        Jungseong::Eo,
        Jungseong::E,
        Jungseong::Yeo,
        Jungseong::Ye,
        Jungseong::O,
        Jungseong::Wa,
        Jungseong::Wae,
        Jungseong::Oe,
        Jungseong::Yo,
        Jungseong::U,
        Jungseong::Wo,
        Jungseong::We,
        Jungseong::Wi,
        Jungseong::Yu,
        Jungseong::Eu,
        Jungseong::Ui,
        Jungseong::I,
    ];

    /// 중성 인덱스 (0~20)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163) 연속 배치
    pub fn jamo(self) -> char {
        char::from_u32(0x314F + self as u32).unwrap_or('\u{FFFD}')
    }
}

/// 종성 (27개 + 종성 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jongseong {
    /// 종성 없음
    None,
    /// ㄱ
    Giyeok,
    /// ㄲ
    SsangGiyeok,
    /// ㄳ
    GiyeokSiot,
    /// ㄴ
    Nieun,
    /// ㄵ
    NieunJieut,
    /// ㄶ
    NieunHieut,
    /// ㄷ
    Digeut,
    /// ㄹ
    Rieul,
    /// ㄺ
    RieulGiyeok,
    /// ㄻ
    RieulMieum,
    /// ㄼ
    RieulBieup,
    /// ㄽ
    RieulSiot,
    /// ㄾ
    RieulTieut,
    /// ㄿ
    RieulPieup,
    /// ㅀ
    RieulHieut,
    /// ㅁ
    Mieum,
    /// ㅂ
    Bieup,
    /// ㅄ
    BieupSiot,
    /// ㅅ
    Siot,
    /// ㅆ
    SsangSiot,
    /// ㅇ
    Ieung,
    /// ㅈ
    Jieut,
    /// ㅊ
    Chieut,
    /// ㅋ
    Kieuk,
    /// ㅌ
    Tieut,
    /// ㅍ
    Pieup,
    /// ㅎ
    Hieut,
}

impl Jongseong {
    pub const ALL: [Jongseong; 28] = [
        Jongseong::None,
        Jongseong::Giyeok,
        Jongseong::SsangGiyeok,
        Jongseong::GiyeokSiot,
        Jongseong::Nieun,
        Jongseong::NieunJieut,
        Jongseong::NieunHieut,
        Jongseong::Digeut,
        Jongseong::Rieul,
        Jongseong::RieulGiyeok,
        Jongseong::RieulMieum,
        Jongseong::RieulBieup,
        Jongseong::RieulSiot,
        Jongseong::RieulTieut,
        Jongseong::RieulPieup,
        Jongseong::RieulHieut,
        Jongseong::Mieum,
        Jongseong::Bieup,
        Jongseong::BieupSiot,
        Jongseong::Siot,
        Jongseong::SsangSiot,
        Jongseong::Ieung,
        Jongseong::Jieut,
        Jongseong::Chieut,
        Jongseong::Kieuk,
        Jongseong::Tieut,
        Jongseong::Pieup,
        Jongseong::Hieut,
    ];

    /// 종성 인덱스 (0~27, 0 = 종성 없음)
    pub fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn is_none(self) -> bool {
        self == Jongseong::None
    }

    /// 호환용 자모 문자 (종성 없음이면 None)
    pub fn jamo(self) -> Option<char> {
        #[rustfmt::skip]
        const JAMO: [char; 27] = [
            'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
            'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
            'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
        ];
        match self {
            Jongseong::None => None,
            other => Some(JAMO[other as usize - 1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, cho) in Choseong::ALL.iter().enumerate() {
            assert_eq!(cho.index(), i as u32);
        }
        for (i, jung) in Jungseong::ALL.iter().enumerate() {
            assert_eq!(jung.index(), i as u32);
        }
        for (i, jong) in Jongseong::ALL.iter().enumerate() {
            assert_eq!(jong.index(), i as u32);
        }
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Choseong::from_index(11), Some(Choseong::Ieung));
        assert_eq!(Choseong::from_index(19), None);
        assert_eq!(Jungseong::from_index(20), Some(Jungseong::I));
        assert_eq!(Jungseong::from_index(21), None);
        assert_eq!(Jongseong::from_index(0), Some(Jongseong::None));
        assert_eq!(Jongseong::from_index(27), Some(Jongseong::Hieut));
        assert_eq!(Jongseong::from_index(28), None);
    }

    #[test]
    fn test_jamo_chars() {
        assert_eq!(Choseong::Giyeok.jamo(), 'ㄱ');
        assert_eq!(Choseong::Hieut.jamo(), 'ㅎ');
        assert_eq!(Jungseong::A.jamo(), 'ㅏ');
        assert_eq!(Jungseong::Wa.jamo(), 'ㅘ');
        assert_eq!(Jungseong::I.jamo(), 'ㅣ');
        assert_eq!(Jongseong::None.jamo(), None);
        assert_eq!(Jongseong::RieulGiyeok.jamo(), Some('ㄺ'));
        assert_eq!(Jongseong::Hieut.jamo(), Some('ㅎ'));
    }
}
