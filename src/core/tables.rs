//! 자모별 기본 로마자 표기
//!
//! 앞뒤 음절의 영향이 없을 때 쓰는 표기다. 문맥에 따른 변화는
//! `rules` 모듈의 재정의 표가 담당한다.

use crate::core::jamo::{Choseong, Jongseong, Jungseong};

/// 초성 기본 표기
pub fn choseong_default(cho: Choseong) -> &'static str {
    match cho {
        Choseong::Giyeok => "g",
        Choseong::SsangGiyeok => "kk",
        Choseong::Nieun => "n",
        Choseong::Digeut => "d",
        Choseong::SsangDigeut => "tt",
        Choseong::Rieul => "r",
        Choseong::Mieum => "m",
        Choseong::Bieup => "b",
        Choseong::SsangBieup => "pp",
        Choseong::Siot => "s",
        Choseong::SsangSiot => "ss",
        Choseong::Ieung => "",
        Choseong::Jieut => "j",
        Choseong::SsangJieut => "jj",
        Choseong::Chieut => "ch",
        Choseong::Kieuk => "k",
        Choseong::Tieut => "t",
        Choseong::Pieup => "p",
        Choseong::Hieut => "h",
    }
}

/// 중성 기본 표기
pub fn jungseong_default(jung: Jungseong) -> &'static str {
    match jung {
        Jungseong::A => "a",
        Jungseong::Ae => "ae",
        Jungseong::Ya => "ya",
        Jungseong::Yae => "yae",
        Jungseong::Eo => "eo",
        Jungseong::E => "e",
        Jungseong::Yeo => "yeo",
        Jungseong::Ye => "ye",
        Jungseong::O => "o",
        Jungseong::Wa => "wa",
        Jungseong::Wae => "wae",
        Jungseong::Oe => "oe",
        Jungseong::Yo => "yo",
        Jungseong::U => "u",
        Jungseong::Wo => "wo",
        Jungseong::We => "we",
        Jungseong::Wi => "wi",
        Jungseong::Yu => "yu",
        Jungseong::Eu => "eu",
        Jungseong::Ui => "ui",
        Jungseong::I => "i",
    }
}

/// 앞 받침의 구개음화(또는 ㄴ 첨가)를 일으키는 모음인지
///
/// ㅣ와 ㅣ계 이중모음(ㅑ ㅒ ㅕ ㅖ ㅛ ㅠ)
pub fn induces_palatalization(jung: Jungseong) -> bool {
    matches!(
        jung,
        Jungseong::Ya
            | Jungseong::Yae
            | Jungseong::Yeo
            | Jungseong::Ye
            | Jungseong::Yo
            | Jungseong::Yu
            | Jungseong::I
    )
}

/// 종성 기본 표기 (대표음)
pub fn jongseong_default(jong: Jongseong) -> &'static str {
    match jong {
        Jongseong::None => "",
        Jongseong::Giyeok | Jongseong::SsangGiyeok | Jongseong::GiyeokSiot => "k",
        Jongseong::Nieun | Jongseong::NieunJieut | Jongseong::NieunHieut => "n",
        Jongseong::Digeut => "t",
        Jongseong::Rieul => "l",
        Jongseong::RieulGiyeok => "k",
        Jongseong::RieulMieum => "m",
        Jongseong::RieulBieup
        | Jongseong::RieulSiot
        | Jongseong::RieulTieut
        | Jongseong::RieulPieup
        | Jongseong::RieulHieut => "l",
        Jongseong::Mieum => "m",
        Jongseong::Bieup | Jongseong::BieupSiot => "p",
        Jongseong::Siot | Jongseong::SsangSiot => "t",
        Jongseong::Ieung => "ng",
        Jongseong::Jieut | Jongseong::Chieut => "t",
        Jongseong::Kieuk => "k",
        Jongseong::Tieut => "t",
        Jongseong::Pieup => "p",
        Jongseong::Hieut => "t",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choseong_defaults() {
        assert_eq!(choseong_default(Choseong::Giyeok), "g");
        assert_eq!(choseong_default(Choseong::Rieul), "r");
        assert_eq!(choseong_default(Choseong::Ieung), "");
        assert_eq!(choseong_default(Choseong::SsangJieut), "jj");
    }

    #[test]
    fn test_jungseong_defaults() {
        assert_eq!(jungseong_default(Jungseong::Eo), "eo");
        assert_eq!(jungseong_default(Jungseong::Ui), "ui");
        assert_eq!(jungseong_default(Jungseong::Oe), "oe");
    }

    #[test]
    fn test_every_vowel_spelling_is_nonempty() {
        for jung in Jungseong::ALL {
            assert!(!jungseong_default(jung).is_empty(), "{:?}", jung);
        }
    }

    #[test]
    fn test_palatalization_flags() {
        let palatal: Vec<Jungseong> = Jungseong::ALL
            .into_iter()
            .filter(|j| induces_palatalization(*j))
            .collect();
        assert_eq!(
            palatal,
            vec![
                Jungseong::Ya,
                Jungseong::Yae,
                Jungseong::Yeo,
                Jungseong::Ye,
                Jungseong::Yo,
                Jungseong::Yu,
                Jungseong::I,
            ]
        );
    }

    #[test]
    fn test_jongseong_defaults() {
        assert_eq!(jongseong_default(Jongseong::None), "");
        assert_eq!(jongseong_default(Jongseong::Ieung), "ng");
        assert_eq!(jongseong_default(Jongseong::RieulGiyeok), "k");
        assert_eq!(jongseong_default(Jongseong::RieulMieum), "m");
        assert_eq!(jongseong_default(Jongseong::Hieut), "t");
    }
}
