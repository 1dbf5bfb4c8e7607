//! 문맥 의존 음운 규칙 엔진
//!
//! 음절 하나의 초성/중성/종성 표기를 앞뒤 음절에 따라 결정한다.
//!
//! # 구조
//!
//! 1. **기본 표기**: `tables` 모듈의 자모별 표기
//! 2. **재정의 표**: (초성, 앞 음절 종성) 또는 (종성, 뒤 음절 초성) 쌍에 대한
//!    [`Rule`]. 쌍이 표에 없으면 기본 표기를 쓴다.
//! 3. **붙임표 가드**: 앞 음절 표기의 끝과 현재 초성 표기가 이어 읽힐 때
//!    (n+g, ng+모음, t+t, p+p, 같은 글자 반복) `-`를 넣는다.
//!
//! 재정의는 항상 기본 표기보다 우선하며, 두 단계 조회 외의 분기는 없다.
//! 모든 함수는 순수 함수이고 표는 정적 데이터다.

use crate::core::jamo::{Choseong, Jongseong};
use crate::core::options::{ConsonantAssimilation, WordCategory};
use crate::core::syllable::Syllable;
use crate::core::tables::{
    choseong_default, induces_palatalization, jongseong_default, jungseong_default,
};

/// 재정의 규칙
///
/// "구개음화 모음"은 초성 규칙이면 현재 음절의 중성,
/// 종성 규칙이면 다음 음절의 중성을 가리킨다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// 고정 표기
    Spell(&'static str),
    /// 자음동화 방향에 따라 다름 (ㄴ+ㄹ 경계)
    ByAssimilation {
        regressive: &'static str,
        progressive: &'static str,
    },
    /// 구개음화 모음 앞이면 `palatal`
    ByPalatalization {
        palatal: &'static str,
        plain: &'static str,
    },
    /// 합성어이고 구개음화 모음 앞이면 `compound` (ㄴ 첨가 등)
    CompoundPalatal {
        compound: &'static str,
        otherwise: &'static str,
    },
    /// 체언이면 기본 표기 유지 (ㅎ을 밝혀 적음), 아니면 내부 규칙
    KeptInSubstantives(&'static Rule),
}

static ELIDED: Rule = Rule::Spell("");
static ASPIRATED_P: Rule = Rule::Spell("p");
static PALATAL_CH_T: Rule = Rule::ByPalatalization {
    palatal: "ch",
    plain: "t",
};

const NASAL_LIQUID: Rule = Rule::ByAssimilation {
    regressive: "l",
    progressive: "n",
};

/// 변환 호출 전체에 고정되는 규칙 문맥
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub category: WordCategory,
    pub assimilation: ConsonantAssimilation,
    /// 모호한 모음 경계에 붙임표 삽입 여부
    pub vowel_hyphen: bool,
}

impl Default for RuleContext {
    fn default() -> Self {
        Self::new(WordCategory::default(), ConsonantAssimilation::default())
    }
}

impl RuleContext {
    pub fn new(category: WordCategory, assimilation: ConsonantAssimilation) -> Self {
        Self {
            category,
            assimilation,
            vowel_hyphen: true,
        }
    }

    pub fn with_vowel_hyphen(mut self, vowel_hyphen: bool) -> Self {
        self.vowel_hyphen = vowel_hyphen;
        self
    }
}

impl Rule {
    /// 규칙을 표기로 확정
    /// - default: 재정의 대상 자모의 기본 표기
    /// - palatal: 뒤따르는 모음이 구개음화 모음인지
    pub fn resolve(self, default: &'static str, palatal: bool, ctx: &RuleContext) -> &'static str {
        match self {
            Rule::Spell(s) => s,
            Rule::ByAssimilation {
                regressive,
                progressive,
            } => match ctx.assimilation {
                ConsonantAssimilation::Regressive => regressive,
                ConsonantAssimilation::Progressive => progressive,
            },
            Rule::ByPalatalization { palatal: p, plain } => {
                if palatal {
                    p
                } else {
                    plain
                }
            }
            Rule::CompoundPalatal {
                compound,
                otherwise,
            } => {
                if ctx.category == WordCategory::Compound && palatal {
                    compound
                } else {
                    otherwise
                }
            }
            Rule::KeptInSubstantives(inner) => {
                if ctx.category == WordCategory::Substantives {
                    default
                } else {
                    inner.resolve(default, palatal, ctx)
                }
            }
        }
    }
}

/// 초성 재정의 표: (현재 초성, 앞 음절 종성)
pub fn choseong_override(cho: Choseong, prev_jong: Jongseong) -> Option<Rule> {
    use Choseong as C;
    use Jongseong as J;

    let rule = match (cho, prev_jong) {
        // ㄱ: 겹받침 ㄹ계 뒤 된소리, ㅎ 뒤 거센소리
        (
            C::Giyeok,
            J::RieulGiyeok
            | J::RieulMieum
            | J::RieulBieup
            | J::RieulSiot
            | J::RieulTieut
            | J::RieulPieup
            | J::RieulHieut,
        ) => Rule::Spell("kk"),
        (C::Giyeok, J::Hieut) => Rule::Spell("k"),

        // ㄴ: ㄹ 뒤 유음화
        (C::Nieun, J::Rieul | J::RieulHieut) => Rule::Spell("l"),

        // ㄷ
        (C::Digeut, J::RieulTieut) => Rule::Spell("tt"),
        (C::Digeut, J::NieunHieut | J::Hieut) => Rule::Spell("t"),

        // ㄹ: 앞 받침에 따른 비음화/유음화
        (
            C::Rieul,
            J::Giyeok
            | J::SsangGiyeok
            | J::GiyeokSiot
            | J::RieulGiyeok
            | J::RieulBieup
            | J::RieulPieup
            | J::Mieum
            | J::Bieup
            | J::BieupSiot
            | J::Ieung
            | J::Kieuk
            | J::Pieup,
        ) => Rule::Spell("n"),
        (
            C::Rieul,
            J::Nieun
            | J::Digeut
            | J::NieunJieut
            | J::NieunHieut
            | J::Siot
            | J::SsangSiot
            | J::Jieut
            | J::Chieut
            | J::Hieut,
        ) => NASAL_LIQUID,
        (
            C::Rieul,
            J::Rieul | J::RieulMieum | J::RieulSiot | J::RieulTieut | J::RieulHieut | J::Tieut,
        ) => Rule::Spell("l"),

        // ㅂ
        (C::Bieup, J::RieulTieut) => Rule::Spell("pp"),

        // ㅇ: 앞 받침이 연음됨
        (C::Ieung, J::Giyeok) => Rule::CompoundPalatal {
            compound: "n",
            otherwise: "g",
        },
        (C::Ieung, J::RieulGiyeok) => Rule::Spell("g"),
        (C::Ieung, J::SsangGiyeok) => Rule::Spell("kk"),
        (C::Ieung, J::GiyeokSiot | J::RieulSiot | J::BieupSiot | J::Siot) => Rule::Spell("s"),
        (C::Ieung, J::Ieung) => Rule::CompoundPalatal {
            compound: "n",
            otherwise: "",
        },
        (C::Ieung, J::Nieun | J::NieunHieut) => Rule::Spell("n"),
        (C::Ieung, J::NieunJieut | J::Jieut) => Rule::Spell("j"),
        (C::Ieung, J::Digeut) => Rule::ByPalatalization {
            palatal: "j",
            plain: "d",
        },
        (C::Ieung, J::Rieul | J::RieulHieut) => Rule::CompoundPalatal {
            compound: "l",
            otherwise: "r",
        },
        (C::Ieung, J::RieulMieum | J::Mieum) => Rule::Spell("m"),
        (C::Ieung, J::RieulBieup | J::Bieup) => Rule::Spell("b"),
        (C::Ieung, J::RieulTieut | J::Tieut) => PALATAL_CH_T,
        (C::Ieung, J::RieulPieup | J::Pieup) => Rule::Spell("p"),
        (C::Ieung, J::SsangSiot) => Rule::Spell("ss"),
        (C::Ieung, J::Chieut) => Rule::Spell("ch"),
        (C::Ieung, J::Kieuk) => Rule::Spell("k"),

        // ㅈ
        (C::Jieut, J::Hieut) => Rule::Spell("ch"),

        // ㅌ
        (C::Tieut, J::Jieut | J::Chieut) => PALATAL_CH_T,

        // ㅎ: 앞 받침과 합쳐 거센소리
        (C::Hieut, J::Giyeok) => Rule::KeptInSubstantives(&ELIDED),
        (C::Hieut, J::SsangGiyeok) => Rule::Spell("kk"),
        (C::Hieut, J::Digeut) => Rule::KeptInSubstantives(&PALATAL_CH_T),
        (
            C::Hieut,
            J::RieulTieut | J::Siot | J::SsangSiot | J::Jieut | J::Chieut | J::Tieut,
        ) => PALATAL_CH_T,
        (C::Hieut, J::RieulGiyeok) => Rule::Spell("k"),
        (C::Hieut, J::RieulBieup) => Rule::Spell("p"),
        (C::Hieut, J::RieulSiot) => Rule::Spell("s"),
        (C::Hieut, J::RieulHieut) => Rule::Spell("r"),
        (C::Hieut, J::Bieup) => Rule::KeptInSubstantives(&ASPIRATED_P),

        _ => return None,
    };
    Some(rule)
}

/// 종성 재정의 표: (현재 종성, 다음 음절 초성)
pub fn jongseong_override(jong: Jongseong, next_cho: Choseong) -> Option<Rule> {
    use Choseong as C;
    use Jongseong as J;

    let rule = match (jong, next_cho) {
        // ㄱ계: 같은 계열 앞 탈락, 비음 앞 ng
        (J::Giyeok, C::SsangGiyeok | C::Kieuk) => ELIDED,
        (J::Giyeok, C::Ieung) => Rule::CompoundPalatal {
            compound: "ng",
            otherwise: "",
        },
        (J::Giyeok | J::SsangGiyeok | J::GiyeokSiot | J::Kieuk, C::Nieun | C::Mieum | C::Rieul) => {
            Rule::Spell("ng")
        }
        (J::SsangGiyeok, C::SsangGiyeok | C::Kieuk | C::Ieung | C::Hieut) => ELIDED,
        (J::GiyeokSiot, C::SsangGiyeok | C::Kieuk) => ELIDED,
        (J::Kieuk, C::SsangGiyeok | C::Ieung) => ELIDED,

        // ㄴ계
        (J::Nieun | J::NieunJieut | J::NieunHieut, C::Rieul) => NASAL_LIQUID,
        (J::Nieun | J::NieunHieut, C::Ieung) => ELIDED,

        // ㄷ계 (ㅅ ㅆ ㅈ ㅊ 포함)
        (J::Digeut | J::Siot | J::SsangSiot | J::Jieut | J::Chieut, C::Nieun | C::Mieum) => {
            Rule::Spell("n")
        }
        (
            J::Digeut | J::Siot | J::SsangSiot | J::Jieut | J::Chieut,
            C::SsangDigeut | C::Ieung | C::Tieut | C::Hieut,
        ) => Rule::KeptInSubstantives(&ELIDED),
        (J::Digeut | J::Siot | J::SsangSiot | J::Jieut | J::Chieut, C::Rieul) => NASAL_LIQUID,

        // ㄹ계
        (J::Rieul | J::RieulHieut, C::Ieung) => Rule::CompoundPalatal {
            compound: "l",
            otherwise: "",
        },
        (J::RieulHieut, C::Hieut) => ELIDED,
        (J::RieulGiyeok, C::Giyeok | C::SsangGiyeok | C::Ieung | C::Hieut) => Rule::Spell("l"),
        (J::RieulGiyeok, C::Nieun | C::Rieul | C::Mieum) => Rule::Spell("ng"),
        (J::RieulMieum, C::Rieul | C::Mieum | C::Ieung) => Rule::Spell("l"),
        (J::RieulBieup | J::RieulPieup, C::Nieun | C::Rieul) => Rule::Spell("m"),
        (
            J::RieulBieup | J::RieulPieup,
            C::Digeut
            | C::SsangDigeut
            | C::Bieup
            | C::Siot
            | C::SsangSiot
            | C::Jieut
            | C::SsangJieut
            | C::Chieut
            | C::Kieuk
            | C::Tieut
            | C::Hieut,
        ) => Rule::Spell("p"),
        (J::RieulBieup, C::SsangBieup) => ELIDED,
        (J::RieulPieup, C::SsangBieup | C::Pieup) => ELIDED,

        // ㅁ
        (J::Mieum, C::Ieung) => ELIDED,

        // ㅂ계
        (J::Bieup | J::BieupSiot, C::Nieun | C::Rieul | C::Mieum) => Rule::Spell("m"),
        (J::Bieup, C::SsangBieup | C::Ieung) => ELIDED,
        (J::Bieup, C::Hieut) => Rule::KeptInSubstantives(&ELIDED),
        (J::BieupSiot, C::SsangBieup) => ELIDED,

        // ㅌ
        (J::Tieut, C::Nieun | C::Mieum) => Rule::Spell("n"),
        (J::Tieut, C::SsangDigeut | C::Ieung | C::Hieut) => ELIDED,
        (J::Tieut, C::Rieul) => Rule::Spell("l"),

        // ㅍ
        (J::Pieup, C::SsangBieup | C::Ieung) => ELIDED,

        // ㅎ: 뒤 자음과 합쳐지거나 연음
        (
            J::Hieut,
            C::Giyeok
            | C::SsangGiyeok
            | C::Digeut
            | C::SsangDigeut
            | C::Ieung
            | C::Jieut
            | C::SsangJieut
            | C::Chieut
            | C::Kieuk
            | C::Tieut
            | C::Pieup
            | C::Hieut,
        ) => ELIDED,
        (J::Hieut, C::Nieun | C::Mieum) => Rule::Spell("n"),
        (J::Hieut, C::Rieul) => NASAL_LIQUID,

        _ => return None,
    };
    Some(rule)
}

/// 초성 표기 앞 붙임표 가드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HyphenGuard {
    /// 앞 표기가 이 접미로 끝나면 (n+g, t+t, p+p)
    AfterSuffix(&'static str),
    /// 앞 표기가 ng로 끝나고 현재 초성이 소리 없으면 (중앙 -> Jung-ang)
    AfterNgWhenSilent,
    /// 앞 표기의 끝 글자와 현재 초성 첫 글자가 같으면
    AfterSameLetter,
}

impl HyphenGuard {
    pub fn needs_hyphen(self, prev_tail: &str, spelling: &str) -> bool {
        match self {
            HyphenGuard::AfterSuffix(suffix) => prev_tail.ends_with(suffix),
            HyphenGuard::AfterNgWhenSilent => prev_tail.ends_with("ng") && spelling.is_empty(),
            HyphenGuard::AfterSameLetter => match spelling.chars().next() {
                Some(first) => prev_tail.ends_with(first),
                None => false,
            },
        }
    }
}

/// 초성별 붙임표 가드
pub fn choseong_hyphen_guard(cho: Choseong) -> Option<HyphenGuard> {
    match cho {
        Choseong::Giyeok => Some(HyphenGuard::AfterSuffix("n")),
        Choseong::Ieung => Some(HyphenGuard::AfterNgWhenSilent),
        Choseong::Tieut => Some(HyphenGuard::AfterSuffix("t")),
        Choseong::Pieup => Some(HyphenGuard::AfterSuffix("p")),
        Choseong::Hieut => Some(HyphenGuard::AfterSameLetter),
        _ => None,
    }
}

/// 표기 조각 하나 (앞에 붙임표가 올 수 있음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub hyphen: bool,
    pub spelling: &'static str,
}

impl Segment {
    fn plain(spelling: &'static str) -> Self {
        Self {
            hyphen: false,
            spelling,
        }
    }

    pub fn push_to(self, out: &mut String) {
        if self.hyphen {
            out.push('-');
        }
        out.push_str(self.spelling);
    }
}

/// 종성 표기 (다음 음절 초성 기준)
pub fn realize_jongseong(
    current: Syllable,
    next: Option<Syllable>,
    ctx: &RuleContext,
) -> &'static str {
    let default = jongseong_default(current.jongseong);
    let Some(next) = next else {
        return default;
    };
    match jongseong_override(current.jongseong, next.choseong) {
        Some(rule) => rule.resolve(default, induces_palatalization(next.jungseong), ctx),
        None => default,
    }
}

/// 초성 표기 (앞 음절 종성 기준, 붙임표 가드 포함)
pub fn realize_choseong(prev: Option<Syllable>, current: Syllable, ctx: &RuleContext) -> Segment {
    let default = choseong_default(current.choseong);
    let Some(prev) = prev else {
        return Segment::plain(default);
    };

    let spelling = match choseong_override(current.choseong, prev.jongseong) {
        Some(rule) => rule.resolve(default, induces_palatalization(current.jungseong), ctx),
        None => default,
    };

    let hyphen = match choseong_hyphen_guard(current.choseong) {
        Some(guard) => guard.needs_hyphen(&preceding_tail(prev, current, ctx), spelling),
        None => false,
    };

    Segment { hyphen, spelling }
}

/// 앞 음절을 현재 음절 기준으로 단독 표기한 결과
///
/// 앞 음절 자신의 초성/중성은 더 앞 음절과 무관하게 기본 표기를 쓴다.
fn preceding_tail(prev: Syllable, current: Syllable, ctx: &RuleContext) -> String {
    let mut tail = String::with_capacity(8);
    tail.push_str(choseong_default(prev.choseong));
    tail.push_str(jungseong_default(prev.jungseong));
    tail.push_str(realize_jongseong(prev, Some(current), ctx));
    tail
}

/// 중성 표기 (받침 없는 앞 음절 + ㅇ 초성일 때 모호한 모음 경계 검사)
pub fn realize_jungseong(prev: Option<Syllable>, current: Syllable, ctx: &RuleContext) -> Segment {
    let spelling = jungseong_default(current.jungseong);
    let hyphen = ctx.vowel_hyphen
        && match prev {
            Some(prev) if !prev.has_jongseong() && current.choseong == Choseong::Ieung => {
                is_ambiguous_vowel_boundary(jungseong_default(prev.jungseong), spelling)
            }
            _ => false,
        };
    Segment { hyphen, spelling }
}

/// 이어 쓰면 다른 모음으로 읽힐 수 있는 경계인지
/// - a 뒤 a/e (가애 -> ga-ae)
/// - e 뒤 a/e/o/u (해운대 -> hae-un)
fn is_ambiguous_vowel_boundary(prev_vowel: &str, vowel: &str) -> bool {
    let (Some(last), Some(first)) = (prev_vowel.chars().last(), vowel.chars().next()) else {
        return false;
    };
    match last {
        'a' => matches!(first, 'a' | 'e'),
        'e' => matches!(first, 'a' | 'e' | 'o' | 'u'),
        _ => false,
    }
}

/// 음절 하나의 로마자 표기
///
/// prev/next는 한글 음절일 때만 Some. 입력이 올바른 음절이면 실패하지 않는다.
pub fn romanize_syllable(
    prev: Option<Syllable>,
    current: Syllable,
    next: Option<Syllable>,
    ctx: &RuleContext,
) -> String {
    let mut out = String::with_capacity(8);
    realize_choseong(prev, current, ctx).push_to(&mut out);
    realize_jungseong(prev, current, ctx).push_to(&mut out);
    out.push_str(realize_jongseong(current, next, ctx));
    out
}
